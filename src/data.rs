mod line_segment;
pub(crate) mod point;
pub mod polygon;
mod vector;

pub use line_segment::*;

#[doc(inline)]
pub use crate::data::polygon::{EdgeIter, Iter, Polygon};
pub use point::Point;
pub use vector::Vector;
