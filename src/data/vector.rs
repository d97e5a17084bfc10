use num_traits::Float;
use std::ops::Index;

use crate::data::Point;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub [T; N]);

impl<T, const N: usize> Vector<T, N>
where
  T: Float,
{
  pub fn dot(&self, rhs: &Vector<T, N>) -> T {
    self
      .0
      .iter()
      .zip(rhs.0.iter())
      .fold(T::zero(), |total, (a, b)| total + *a * *b)
  }

  pub fn squared_magnitude(&self) -> T {
    self.dot(self)
  }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

impl<T, const N: usize> From<Point<T, N>> for Vector<T, N> {
  fn from(point: Point<T, N>) -> Vector<T, N> {
    Vector(point.array)
  }
}

mod add;
mod mul;
mod sub;
