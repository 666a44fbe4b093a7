//! Pointer device and the spring that makes a grabbed body follow it.

use crate::rigid_body::{BodyHandle, Vec2};

use super::bodies::BodySet;

/// Pointer state in container-relative coordinates.
#[derive(Clone, Debug)]
pub struct Pointer {
    pub position: Vec2,
    pub pressed: bool,
    released: bool,
}

impl Pointer {
    pub fn new() -> Self {
        Self {
            position: Vec2::zero(),
            pressed: false,
            released: false,
        }
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn press(&mut self) {
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
        self.released = true;
    }

    /// Drop the button state without reporting a release.
    pub fn cancel(&mut self) {
        self.pressed = false;
    }

    fn take_released(&mut self) -> bool {
        std::mem::replace(&mut self.released, false)
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::new()
    }
}

/// Spring between the pointer and an attachment point on `body_b`.
#[derive(Clone, Debug)]
pub struct Constraint {
    pub body_b: Option<BodyHandle>,
    /// Attachment point in `body_b`'s local frame.
    pub point_b: Option<Vec2>,
    pub stiffness: f32,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragEvent {
    Start(BodyHandle),
    End(BodyHandle),
}

#[derive(Clone, Debug)]
pub struct PointerConstraint {
    pub pointer: Pointer,
    pub constraint: Constraint,
    /// Body reported by the last `Start` and not yet ended.
    pub body: Option<BodyHandle>,
}

impl PointerConstraint {
    pub fn new(pointer: Pointer, stiffness: f32) -> Self {
        Self {
            pointer,
            constraint: Constraint {
                body_b: None,
                point_b: None,
                stiffness,
                visible: false,
            },
            body: None,
        }
    }

    /// Detach the spring without reporting an end of drag.
    pub fn release(&mut self) {
        self.constraint.body_b = None;
        self.constraint.point_b = None;
    }

    /// Grab or let go according to the pointer button.
    pub(super) fn update(&mut self, bodies: &BodySet) -> Vec<DragEvent> {
        let mut events = Vec::new();

        if self.pointer.pressed {
            if self.constraint.body_b.is_none() {
                if let Some(hit) = bodies.pick(self.pointer.position) {
                    if let Some(body) = bodies.get(hit) {
                        let local = (self.pointer.position - body.pos).rotate(-body.angle);
                        self.constraint.body_b = Some(hit);
                        self.constraint.point_b = Some(local);
                        self.body = Some(hit);
                        events.push(DragEvent::Start(hit));
                    }
                }
            }
        } else {
            self.release();
        }

        if self.pointer.take_released() {
            if let Some(body) = self.body.take() {
                events.push(DragEvent::End(body));
            }
        }

        events
    }

    /// Pull the attached body toward the pointer.
    pub(super) fn solve(&self, bodies: &mut BodySet, iterations: u32) {
        let (Some(handle), Some(point_b)) = (self.constraint.body_b, self.constraint.point_b) else {
            return;
        };
        let Some(body) = bodies.get_mut(handle) else {
            return;
        };
        if body.is_static {
            return;
        }

        let attach = body.local_to_world(point_b);
        let delta = self.pointer.position - attach;
        // stiffness applied once per constraint iteration, compounded
        let keep = (1.0 - self.constraint.stiffness).max(0.0).powi(iterations.max(1) as i32);
        body.velocity = delta * (1.0 - keep);
    }
}
