//! Rotatable rectangles with collision detection, plus a small homogeneous
//! value array. Drawing is done through SDL3.

mod box2d;
pub mod draw;
mod error;
mod rect;
mod segment;
mod utils;
mod varray;
mod vec2;

pub use box2d::Box2D;
pub use error::AppError;
pub use rect::{Corners, ExtremePoints, OrientedRect, Overlap};
pub use segment::Segment;
pub use utils::FrameClock;
pub use varray::{ArrayError, Value, ValueArray, ValueKind};
pub use vec2::Vec2f;
