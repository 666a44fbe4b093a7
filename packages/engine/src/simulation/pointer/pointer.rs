//! Drag lifecycle: lock rotation on grab, restore it on release.

use crate::dom::DomElement;
use crate::domain::DragSession;
use crate::rigid_body::{BodyHandle, RigidBody, Vec2};
use crate::rigid_body_system::BodySet;

use super::{Shared, SimulationSession};

fn unlock(body: &mut RigidBody, session: DragSession) {
    body.set_inertia(session.restore_inertia());
}

/// Grab-start: remember the inertia, then make the body spin-proof and
/// motionless so the spring takes over cleanly.
pub(super) fn start_drag<E>(shared: &mut Shared<E>, bodies: &mut BodySet, handle: BodyHandle) {
    let previous = shared.drag.take();

    // a second grab of the same body must not record the locked value
    let kept = match previous {
        Some(prev) if prev.body == handle => Some(prev.original_inertia),
        Some(prev) => {
            if let Some(body) = bodies.get_mut(prev.body) {
                unlock(body, prev);
            }
            None
        }
        None => None,
    };

    let Some(body) = bodies.get_mut(handle) else {
        return;
    };
    let original_inertia = kept.unwrap_or(Some(body.inertia));

    body.set_inertia(f32::INFINITY);
    body.set_velocity(Vec2::zero());
    body.set_angular_velocity(0.0);

    shared.drag = Some(DragSession { body: handle, original_inertia });
}

/// Grab-end: put the inertia back. No session, nothing to do.
pub(super) fn end_drag<E>(shared: &mut Shared<E>, bodies: &mut BodySet) {
    let Some(session) = shared.drag.take() else {
        return;
    };
    if let Some(body) = bodies.get_mut(session.body) {
        unlock(body, session);
    }
}

pub(super) fn release_pointer<E: DomElement + 'static>(session: &mut SimulationSession<E>) {
    let restore = session.config.restore_inertia_on_release;
    let Some(live) = session.live.as_mut() else {
        return;
    };

    if let Some(pc) = live.world.pointer_constraint_mut() {
        pc.release();
        pc.pointer.cancel();
    }

    if !restore {
        // body keeps its locked inertia until a natural grab-end arrives
        return;
    }
    let ended = live.shared.borrow_mut().drag.take();
    if let Some(drag) = ended {
        if let Some(body) = live.world.body_mut(drag.body) {
            unlock(body, drag);
        }
    }
}
