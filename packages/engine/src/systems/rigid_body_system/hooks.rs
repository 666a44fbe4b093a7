//! Observer lists fired by the world.
//!
//! Before- and after-update hooks are separate lists: the first runs before
//! velocities are integrated into positions, the second after contacts are
//! resolved.

use crate::rigid_body::BodyHandle;

use super::bodies::BodySet;
use super::constraint::DragEvent;

pub type BeforeUpdateHook = Box<dyn FnMut(&mut BodySet)>;
pub type AfterUpdateHook = Box<dyn FnMut(&BodySet)>;
pub type DragHandler = Box<dyn FnMut(&mut BodySet, BodyHandle)>;

#[derive(Default)]
pub struct StepHooks {
    before_update: Vec<BeforeUpdateHook>,
    after_update: Vec<AfterUpdateHook>,
}

impl StepHooks {
    pub fn on_before_update(&mut self, hook: BeforeUpdateHook) {
        self.before_update.push(hook);
    }

    pub fn on_after_update(&mut self, hook: AfterUpdateHook) {
        self.after_update.push(hook);
    }

    pub(super) fn run_before(&mut self, bodies: &mut BodySet) {
        for hook in self.before_update.iter_mut() {
            hook(bodies);
        }
    }

    pub(super) fn run_after(&mut self, bodies: &BodySet) {
        for hook in self.after_update.iter_mut() {
            hook(bodies);
        }
    }

    pub fn len(&self) -> usize {
        self.before_update.len() + self.after_update.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.before_update.clear();
        self.after_update.clear();
    }
}

/// Grab-start / grab-end subscribers of the pointer constraint.
#[derive(Default)]
pub struct DragEvents {
    start_drag: Vec<DragHandler>,
    end_drag: Vec<DragHandler>,
}

impl DragEvents {
    pub fn on_start_drag(&mut self, handler: DragHandler) {
        self.start_drag.push(handler);
    }

    pub fn on_end_drag(&mut self, handler: DragHandler) {
        self.end_drag.push(handler);
    }

    pub(super) fn dispatch(&mut self, event: DragEvent, bodies: &mut BodySet) {
        let (handlers, body) = match event {
            DragEvent::Start(body) => (&mut self.start_drag, body),
            DragEvent::End(body) => (&mut self.end_drag, body),
        };
        for handler in handlers.iter_mut() {
            handler(bodies, body);
        }
    }

    pub fn clear(&mut self) {
        self.start_drag.clear();
        self.end_drag.clear();
    }
}
