pub mod closest_point;

#[doc(inline)]
pub use closest_point::closest_boundary_point;
