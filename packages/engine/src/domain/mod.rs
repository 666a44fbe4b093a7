//! Domain - configuration and the plain data the session is built from
//!
//! Nothing in here touches the physics world or the DOM directly.

pub mod config;
pub mod geometry;
pub mod registry;
pub mod drag;

pub use config::Config;
pub use drag::DragSession;
pub use geometry::{ContainerGeometry, ElementSize, Rect};
pub use registry::{Binding, BodyRegistry};
