use num_traits::Float;
use num_traits::FloatConst;

use crate::data::Point;
use crate::Error;

mod iter;
pub use iter::*;

/// A closed loop of vertices. Edge `i` connects vertex `i` to vertex
/// `(i + 1) % len`, so the boundary always includes the wrap-around edge
/// from the last vertex back to the first.
///
/// Polygons are immutable once constructed and are never empty; queries on
/// the boundary therefore always produce a result. A single-vertex polygon
/// is degenerate but legal: its boundary is one zero-length edge.
///
/// Simplicity (no self-intersections) and winding order are not validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T> {
  pub(crate) points: Vec<Point<T, 2>>,
}

impl<T> Polygon<T> {
  pub fn new(points: Vec<Point<T, 2>>) -> Result<Polygon<T>, Error> {
    if points.is_empty() {
      return Err(Error::InsufficientVertices);
    }
    Ok(Polygon { points })
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  // Construction rejects empty vertex lists.
  pub fn is_empty(&self) -> bool {
    false
  }

  pub fn point(&self, idx: usize) -> &Point<T, 2> {
    &self.points[idx]
  }

  pub fn iter(&self) -> Iter<'_, T> {
    Iter {
      iter: self.points.iter(),
    }
  }

  pub fn iter_boundary_edges(&self) -> EdgeIter<'_, T> {
    EdgeIter {
      points: &self.points,
      index: 0,
    }
  }
}

// Shape constructors. All of them are pure: the same parameters always
// produce the same vertex sequence.
impl<T> Polygon<T>
where
  T: Float,
{
  /// Axis-aligned rectangle anchored at its top-left corner. Corners are
  /// listed in top-left, top-right, bottom-right, bottom-left order.
  pub fn rectangle(x: T, y: T, width: T, height: T) -> Polygon<T> {
    Polygon {
      points: vec![
        Point::new([x, y]),
        Point::new([x + width, y]),
        Point::new([x + width, y + height]),
        Point::new([x, y + height]),
      ],
    }
  }

  /// Same rectangle as [`Polygon::rectangle`], anchored at its center:
  /// `rectangle_from_center(cx, cy, w, h)` equals
  /// `rectangle(cx - w/2, cy - h/2, w, h)`.
  pub fn rectangle_from_center(cx: T, cy: T, width: T, height: T) -> Polygon<T> {
    let two = T::one() + T::one();
    Polygon::rectangle(cx - width / two, cy - height / two, width, height)
  }

  /// Regular polygon with `sides` vertices on a circle of `radius` around
  /// the center. Vertex `k` sits at angle `rotation + k*2π/sides`.
  pub fn regular(
    cx: T,
    cy: T,
    radius: T,
    sides: usize,
    rotation: T,
  ) -> Result<Polygon<T>, Error>
  where
    T: FloatConst,
  {
    if sides < 3 {
      return Err(Error::InsufficientVertices);
    }
    let step = (T::PI() + T::PI()) / T::from(sides).unwrap();
    let points = (0..sides)
      .map(|k| {
        let angle = rotation + step * T::from(k).unwrap();
        Point::new([cx + angle.cos() * radius, cy + angle.sin() * radius])
      })
      .collect();
    Ok(Polygon { points })
  }

  /// [`Polygon::regular`] with the default rotation of -π/2: vertex 0
  /// points straight up (screen coordinates grow downwards).
  pub fn regular_upright(cx: T, cy: T, radius: T, sides: usize) -> Result<Polygon<T>, Error>
  where
    T: FloatConst,
  {
    Polygon::regular(cx, cy, radius, sides, -T::FRAC_PI_2())
  }

  /// Concave arrowhead: a `width` x `height` rectangle whose bottom edge is
  /// replaced by a notch pulled up by `notch_depth` at the midpoint.
  pub fn chevron(cx: T, cy: T, width: T, height: T, notch_depth: T) -> Polygon<T> {
    let two = T::one() + T::one();
    let hw = width / two;
    let hh = height / two;
    Polygon {
      points: vec![
        Point::new([cx - hw, cy - hh]),
        Point::new([cx + hw, cy - hh]),
        Point::new([cx + hw, cy + hh]),
        Point::new([cx, cy + hh - notch_depth]),
        Point::new([cx - hw, cy + hh]),
      ],
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_err, assert_ok};

  const EPSILON: f64 = 1e-9;

  #[test]
  fn empty_vertex_list_is_rejected() {
    assert_err!(Polygon::<f64>::new(vec![]));
  }

  #[test]
  fn single_vertex_is_accepted() {
    let poly = assert_ok!(Polygon::new(vec![Point::new([1., 2.])]));
    assert_eq!(poly.len(), 1);
    // Degenerate boundary: one zero-length self-edge.
    let edges: Vec<_> = poly.iter_boundary_edges().collect();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].src, edges[0].dst);
  }

  #[test]
  fn boundary_edges_close_the_loop() {
    let poly = Polygon::rectangle(0_f64, 0., 4., 2.);
    assert_eq!(poly.iter_boundary_edges().len(), 4);
    assert!(!poly.is_empty());
    let edges: Vec<_> = poly.iter_boundary_edges().collect();
    assert_eq!(edges[3].src, poly.point(3));
    assert_eq!(edges[3].dst, poly.point(0));
    for window in edges.windows(2) {
      assert_eq!(window[0].dst, window[1].src);
    }
  }

  #[test]
  fn rectangle_from_center_bounding_box() {
    let (cx, cy, w, h) = (10_f64, -4., 6., 2.);
    let poly = Polygon::rectangle_from_center(cx, cy, w, h);
    let min_x = poly.iter().map(|p| *p.x_coord()).fold(f64::INFINITY, f64::min);
    let max_x = poly.iter().map(|p| *p.x_coord()).fold(f64::NEG_INFINITY, f64::max);
    let min_y = poly.iter().map(|p| *p.y_coord()).fold(f64::INFINITY, f64::min);
    let max_y = poly.iter().map(|p| *p.y_coord()).fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(max_x - min_x, w);
    assert_eq!(max_y - min_y, h);
    assert_eq!((min_x + max_x) / 2., cx);
    assert_eq!((min_y + max_y) / 2., cy);
  }

  #[test]
  fn rectangle_parameterizations_agree() {
    let from_corner = Polygon::rectangle(7_f64, 9., 6., 2.);
    let from_center = Polygon::rectangle_from_center(10_f64, 10., 6., 2.);
    assert_eq!(from_corner, from_center);
  }

  #[test]
  fn regular_polygon_needs_three_sides() {
    assert_err!(Polygon::regular_upright(0_f64, 0., 1., 0));
    assert_err!(Polygon::regular_upright(0_f64, 0., 1., 2));
    assert_ok!(Polygon::regular_upright(0_f64, 0., 1., 3));
  }

  #[test]
  fn regular_polygon_vertex_zero_points_up() {
    let r = 90_f64;
    let poly = Polygon::regular_upright(0_f64, 0., r, 3).unwrap();
    let top = poly.point(0);
    assert!((top.x_coord() - 0.).abs() < EPSILON);
    assert!((top.y_coord() + r).abs() < EPSILON);
  }

  #[test]
  fn regular_polygon_vertices_equidistant_from_center() {
    let (cx, cy, r) = (200_f64, 150., 80.);
    let center = Point::new([cx, cy]);
    for sides in 3..=8 {
      let poly = Polygon::regular_upright(cx, cy, r, sides).unwrap();
      assert_eq!(poly.len(), sides);
      for pt in poly.iter() {
        assert!((pt.squared_euclidean_distance(&center).sqrt() - r).abs() < EPSILON);
      }
    }
  }

  #[test]
  fn regular_polygon_equal_angular_spacing() {
    let (cx, cy) = (0_f64, 0.);
    let poly = Polygon::regular_upright(cx, cy, 1., 5).unwrap();
    let step = std::f64::consts::TAU / 5.;
    for i in 0..5 {
      let a = poly.point(i);
      let b = poly.point((i + 1) % 5);
      let angle_a = (a.y_coord() - cy).atan2(a.x_coord() - cx);
      let angle_b = (b.y_coord() - cy).atan2(b.x_coord() - cx);
      let diff = (angle_b - angle_a).rem_euclid(std::f64::consts::TAU);
      assert!((diff - step).abs() < EPSILON);
    }
  }

  #[test]
  fn chevron_notch_is_concave() {
    let (cx, cy, w, h, d) = (200_f64, 380., 180., 160., 70.);
    let poly = Polygon::chevron(cx, cy, w, h, d);
    assert_eq!(poly.len(), 5);
    let bottom = cy + h / 2.;
    let notch = poly.point(3);
    assert_eq!(*notch.x_coord(), cx);
    assert_eq!(bottom - notch.y_coord(), d);
    assert!(*notch.y_coord() < bottom);
    // The notch sits strictly between the bottom corners.
    assert_eq!(*poly.point(2).y_coord(), bottom);
    assert_eq!(*poly.point(4).y_coord(), bottom);
  }
}
