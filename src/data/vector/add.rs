use array_init::array_init;
use std::ops::Add;
use std::ops::Index;

use super::Vector;

impl<'a, 'b, T, const N: usize> Add<&'a Vector<T, N>> for &'b Vector<T, N>
where
  T: Add<T, Output = T> + Clone,
{
  type Output = Vector<T, N>;

  fn add(self: &'b Vector<T, N>, other: &'a Vector<T, N>) -> Self::Output {
    Vector(array_init(|i| {
      self.0.index(i).clone() + other.0.index(i).clone()
    }))
  }
}

impl<T, const N: usize> Add<Vector<T, N>> for Vector<T, N>
where
  T: Add<T, Output = T> + Clone,
{
  type Output = Vector<T, N>;

  fn add(self: Vector<T, N>, other: Vector<T, N>) -> Self::Output {
    Add::add(&self, &other)
  }
}
