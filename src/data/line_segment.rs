use num_traits::Float;

use super::Point;

///////////////////////////////////////////////////////////////////////////////
// LineSegment

// Directed segment from src to dst, both endpoints inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment<T, const N: usize = 2> {
  pub src: Point<T, N>,
  pub dst: Point<T, N>,
}

impl<T, const N: usize> LineSegment<T, N> {
  pub fn new(src: Point<T, N>, dst: Point<T, N>) -> LineSegment<T, N> {
    LineSegment { src, dst }
  }

  pub fn as_ref(&self) -> LineSegmentView<'_, T, N> {
    LineSegmentView {
      src: &self.src,
      dst: &self.dst,
    }
  }
}

impl<T, const N: usize> LineSegment<T, N>
where
  T: Float,
{
  pub fn closest_point(&self, pt: &Point<T, N>) -> Point<T, N> {
    self.as_ref().closest_point(pt)
  }

  pub fn squared_distance_to_point(&self, pt: &Point<T, N>) -> T {
    self.as_ref().squared_distance_to_point(pt)
  }
}

///////////////////////////////////////////////////////////////////////////////
// LineSegmentView

#[derive(Debug, PartialEq)]
pub struct LineSegmentView<'a, T, const N: usize = 2> {
  pub src: &'a Point<T, N>,
  pub dst: &'a Point<T, N>,
}

impl<'a, T, const N: usize> Clone for LineSegmentView<'a, T, N> {
  fn clone(&self) -> Self {
    *self
  }
}
impl<'a, T, const N: usize> Copy for LineSegmentView<'a, T, N> {}

impl<'a, T, const N: usize> LineSegmentView<'a, T, N>
where
  T: Float,
{
  /// Closest point on the segment (not the infinite line) to `pt`.
  ///
  /// Projects `pt` onto the line through src and dst with the parametric
  /// form src + t*(dst-src) and clamps t to [0, 1]. A zero-length segment
  /// has no direction to project onto; its closest point is src by
  /// definition, which also keeps the division total.
  pub fn closest_point(&self, pt: &Point<T, N>) -> Point<T, N> {
    let dir = self.dst - self.src;
    let len2 = dir.squared_magnitude();
    if len2.is_zero() {
      return *self.src;
    }
    let t = (pt - self.src).dot(&dir) / len2;
    let t = t.max(T::zero()).min(T::one());
    self.src + &(dir * t)
  }

  pub fn squared_distance_to_point(&self, pt: &Point<T, N>) -> T {
    self.closest_point(pt).squared_euclidean_distance(pt)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
