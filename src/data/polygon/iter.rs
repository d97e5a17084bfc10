use crate::data::LineSegmentView;
use crate::data::Point;

pub struct Iter<'a, T: 'a> {
  pub(crate) iter: std::slice::Iter<'a, Point<T, 2>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a Point<T, 2>;
  fn next(&mut self) -> Option<&'a Point<T, 2>> {
    self.iter.next()
  }
}

/// Iterates over the boundary as directed edges, yielding one edge per
/// vertex. The final edge wraps around from the last vertex to the first.
/// A single-vertex polygon yields one zero-length edge.
pub struct EdgeIter<'a, T: 'a> {
  pub(crate) points: &'a [Point<T, 2>],
  pub(crate) index: usize,
}

impl<'a, T> Iterator for EdgeIter<'a, T> {
  type Item = LineSegmentView<'a, T, 2>;
  fn next(&mut self) -> Option<Self::Item> {
    if self.index >= self.points.len() {
      return None;
    }
    let src = &self.points[self.index];
    let dst = &self.points[(self.index + 1) % self.points.len()];
    self.index += 1;
    Some(LineSegmentView { src, dst })
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.points.len() - self.index;
    (remaining, Some(remaining))
  }
}

impl<'a, T> ExactSizeIterator for EdgeIter<'a, T> {}
