//! RigidBody - A solid rectangle that moves as a unit
//!
//! Bodies are boxes described by a center position, half extents and a
//! rotation angle. Static bodies (walls) never integrate.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::{BodyHandle, BodyOptions, RigidBody};
