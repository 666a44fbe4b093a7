//! Systems - the physics collaborator
//!
//! - rigid_body/         - body state and shape
//! - rigid_body_system/  - world, contacts, pointer constraint, hooks, runner

pub mod rigid_body;
pub mod rigid_body_system;
