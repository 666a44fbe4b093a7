use crate::core::clamp;
use crate::dom::DomElement;
use crate::domain::{ContainerGeometry, ElementSize};
use crate::rigid_body::RigidBody;
use crate::rigid_body_system::BodySet;

use super::Shared;

/// How far above the container, in element heights, a falling element may
/// still be drawn.
const MAX_LIFT_HEIGHTS: f32 = 3.0;

/// Top-left corner and rotation written to a bound element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedPose {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

impl RenderedPose {
    /// CSS `transform` value. Translation and rotation only, so the update
    /// stays on the compositor.
    pub fn transform(&self) -> String {
        format!("translate3d({}px, {}px, 0) rotate({}rad)", self.x, self.y, self.angle)
    }
}

/// Project a body's center pose to its element's top-left corner:
/// x into `[0, W - w]`, y into `[-3h, H - h]`.
pub fn project_pose(body: &RigidBody, size: ElementSize, geometry: &ContainerGeometry) -> RenderedPose {
    let x = clamp(body.pos.x - size.half_width(), 0.0, geometry.width - size.width);
    let y = clamp(
        body.pos.y - size.half_height(),
        -size.height * MAX_LIFT_HEIGHTS,
        geometry.height - size.height,
    );
    RenderedPose { x, y, angle: body.angle }
}

/// After-update hook: write every bound body's transform. Walls have no
/// binding and are skipped.
pub(super) fn render<E: DomElement>(shared: &mut Shared<E>, bodies: &BodySet) {
    let mut rendered = 0;
    for body in bodies.iter() {
        let Some(binding) = shared.registry.get(body.id) else {
            continue;
        };
        let pose = project_pose(body, binding.size(), &shared.geometry);
        binding.element.set_style("transform", &pose.transform());
        rendered += 1;
    }
    shared.rendered = rendered;
}
