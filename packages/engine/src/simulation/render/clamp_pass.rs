use crate::core::clamp;
use crate::domain::{ContainerGeometry, ElementSize};
use crate::rigid_body::{RigidBody, Vec2};
use crate::rigid_body_system::BodySet;

use super::Shared;

/// Keep a dragged body's box inside the container and cap its speed so a
/// fast flick cannot carry it through a wall in one step.
pub fn clamp_dragged_body(body: &mut RigidBody, size: ElementSize, geometry: &ContainerGeometry, max_lin_vel: f32) {
    let (hw, hh) = (size.half_width(), size.half_height());
    body.set_position(Vec2::new(
        clamp(body.pos.x, hw, geometry.width - hw),
        clamp(body.pos.y, hh, geometry.height - hh),
    ));
    body.set_velocity(Vec2::new(
        clamp(body.velocity.x, -max_lin_vel, max_lin_vel),
        clamp(body.velocity.y, -max_lin_vel, max_lin_vel),
    ));
}

/// Before-update hook. Only acts while a drag session holds a bound body.
pub(super) fn clamp_drag<E>(shared: &Shared<E>, bodies: &mut BodySet) {
    let Some(session) = shared.drag else {
        return;
    };
    let Some(binding) = shared.registry.get(session.body) else {
        return;
    };
    if let Some(body) = bodies.get_mut(session.body) {
        clamp_dragged_body(body, binding.size(), &shared.geometry, shared.max_lin_vel);
    }
}
