//! RigidBodySystem - the physics world the DOM bodies live in
//!
//! Deliberately small: axis-aligned contact between rotated boxes, a
//! settle torque so tilted boxes come to rest flat, and a spring that pulls
//! the grabbed body toward the pointer. Enough for plausible falling boxes.
//!
//! Step order inside [`PhysicsWorld::step`]:
//! 1. pointer constraint: pick / release, fire drag events, apply spring
//! 2. before-update hooks
//! 3. integrate gravity, air friction, velocity
//! 4. resolve contacts (`position_iterations` passes)
//! 5. after-update hooks

mod bodies;
mod collision;
mod constraint;
mod hooks;
mod runner;
mod system;

pub use bodies::BodySet;
pub use constraint::{Constraint, DragEvent, Pointer, PointerConstraint};
pub use hooks::{AfterUpdateHook, BeforeUpdateHook, DragEvents, DragHandler, StepHooks};
pub use runner::Runner;
pub use system::{PhysicsWorld, WorldSettings};
