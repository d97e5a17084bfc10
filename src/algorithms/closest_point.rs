use num_traits::Float;

use crate::data::Point;
use crate::data::Polygon;

/// Closest point on the polygon's boundary (edges, not interior) to `pt`.
///
/// Minimum over all boundary edges, keyed by squared distance. Ties between
/// edges are broken by traversal order: the first minimum wins, so the
/// result is deterministic.
///
/// The result always lies on some boundary edge, endpoints included.
pub fn closest_boundary_point<T>(poly: &Polygon<T>, pt: &Point<T, 2>) -> Point<T, 2>
where
  T: Float,
{
  let mut edges = poly.iter_boundary_edges();
  // Polygon::new rejects empty vertex lists, so at least one edge exists.
  let first = edges
    .next()
    .expect("polygon boundaries have at least one edge");
  let mut best = first.closest_point(pt);
  let mut best_dist = best.squared_euclidean_distance(pt);
  for edge in edges {
    let candidate = edge.closest_point(pt);
    let dist = candidate.squared_euclidean_distance(pt);
    if dist < best_dist {
      best = candidate;
      best_dist = dist;
    }
  }
  best
}
