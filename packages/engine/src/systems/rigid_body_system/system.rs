use crate::rigid_body::{BodyHandle, BodyOptions, RigidBody, Vec2};

use super::bodies::BodySet;
use super::collision::resolve_contacts;
use super::constraint::PointerConstraint;
use super::hooks::{DragEvents, StepHooks};

/// Solver and gravity settings of one world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldSettings {
    pub gravity: Vec2,
    pub gravity_scale: f32,
    pub constraint_iterations: u32,
    pub position_iterations: u32,
    pub time_scale: f32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, 1.0),
            gravity_scale: 0.001,
            constraint_iterations: 2,
            position_iterations: 6,
            time_scale: 1.0,
        }
    }
}

/// Manages all bodies, the pointer constraint and the step observers
pub struct PhysicsWorld {
    bodies: BodySet,
    next_id: u32,
    settings: WorldSettings,
    pointer_constraint: Option<PointerConstraint>,
    hooks: StepHooks,
    events: DragEvents,
}

impl PhysicsWorld {
    pub fn new(settings: WorldSettings) -> Self {
        Self {
            bodies: BodySet::new(),
            next_id: 1,
            settings,
            pointer_constraint: None,
            hooks: StepHooks::default(),
            events: DragEvents::default(),
        }
    }

    /// Create a rectangle centered on `(x, y)` and add it to the world.
    pub fn add_rect(&mut self, x: f32, y: f32, w: f32, h: f32, options: BodyOptions) -> BodyHandle {
        let id = BodyHandle(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.bodies.insert(RigidBody::new_rect(x, y, w, h, options, id));
        id
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle)
    }

    pub fn bodies(&self) -> &BodySet {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn static_body_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.is_static).count()
    }

    pub fn dynamic_body_count(&self) -> usize {
        self.bodies.iter().filter(|b| !b.is_static).count()
    }

    pub fn set_pointer_constraint(&mut self, constraint: PointerConstraint) {
        self.pointer_constraint = Some(constraint);
    }

    pub fn pointer_constraint(&self) -> Option<&PointerConstraint> {
        self.pointer_constraint.as_ref()
    }

    pub fn pointer_constraint_mut(&mut self) -> Option<&mut PointerConstraint> {
        self.pointer_constraint.as_mut()
    }

    pub fn hooks_mut(&mut self) -> &mut StepHooks {
        &mut self.hooks
    }

    pub fn events_mut(&mut self) -> &mut DragEvents {
        &mut self.events
    }

    /// Remove every body, the constraint and all observers.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.pointer_constraint = None;
        self.hooks.clear();
        self.events.clear();
        self.next_id = 1;
    }

    /// Advance the simulation by `delta_ms`.
    pub fn step(&mut self, delta_ms: f32) {
        let delta = delta_ms * self.settings.time_scale;

        if let Some(pc) = self.pointer_constraint.as_mut() {
            for event in pc.update(&self.bodies) {
                self.events.dispatch(event, &mut self.bodies);
            }
        }
        if let Some(pc) = self.pointer_constraint.as_ref() {
            pc.solve(&mut self.bodies, self.settings.constraint_iterations);
        }

        self.hooks.run_before(&mut self.bodies);

        self.integrate(delta);
        resolve_contacts(self.bodies.as_mut_slice(), self.settings.position_iterations);

        self.hooks.run_after(&self.bodies);
    }

    fn integrate(&mut self, delta: f32) {
        let g = self.settings.gravity * (self.settings.gravity_scale * delta * delta);
        let time_scale = self.settings.time_scale;

        for body in self.bodies.as_mut_slice().iter_mut() {
            if body.is_static {
                continue;
            }
            let damping = 1.0 - body.friction_air * time_scale;
            body.velocity = body.velocity * damping + g;
            body.angular_vel *= damping;
            body.pos = body.pos + body.velocity;
            body.angle += body.angular_vel;
        }
    }
}
