use crate::core::Debounce;
use crate::dom::DomElement;
use crate::domain::config::{CONTAINER_SELECTOR, SECTION_SELECTOR};
use crate::simulation::SimulationSession;

use super::clock::FrameClock;
use super::trigger::ViewportTrigger;

struct Section<E> {
    section: E,
    container: E,
    trigger: ViewportTrigger,
}

/// Owns the session and decides when it builds.
pub struct ActivationDriver<E: DomElement> {
    session: SimulationSession<E>,
    sections: Vec<Section<E>>,
    active: Option<usize>,
    resize: Debounce,
    clock: FrameClock,
    now_ms: f64,
}

impl<E: DomElement + 'static> ActivationDriver<E> {
    pub fn new(session: SimulationSession<E>) -> Self {
        let resize = Debounce::new(session.config().resize_debounce_ms);
        Self {
            session,
            sections: Vec::new(),
            active: None,
            resize,
            clock: FrameClock::new(),
            now_ms: 0.0,
        }
    }

    pub fn with_clock(mut self, clock: FrameClock) -> Self {
        self.clock = clock;
        self
    }

    /// Register a one-shot trigger for `section`, building `container`.
    pub fn register_section(&mut self, section: E, container: E) -> usize {
        self.sections.push(Section {
            section,
            container,
            trigger: ViewportTrigger::once(),
        });
        self.sections.len() - 1
    }

    /// Register every section under `root` that holds an object container.
    pub fn discover(&mut self, root: &E) -> usize {
        let mut found = 0;
        for section in root.query_all(SECTION_SELECTOR) {
            let Some(container) = section.query_all(CONTAINER_SELECTOR).into_iter().next() else {
                continue;
            };
            self.register_section(section, container);
            found += 1;
        }
        found
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn container(&self, idx: usize) -> Option<&E> {
        self.sections.get(idx).map(|s| &s.container)
    }

    /// Whether section `idx` has used up its one-shot trigger.
    pub fn trigger_fired(&self, idx: usize) -> Option<bool> {
        self.sections.get(idx).map(|s| s.trigger.has_fired())
    }

    pub fn active_section(&self) -> Option<usize> {
        self.active
    }

    pub fn session(&self) -> &SimulationSession<E> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SimulationSession<E> {
        &mut self.session
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Scroll notification: check every trigger against the viewport.
    pub fn on_scroll(&mut self, viewport_height: f32) {
        for idx in 0..self.sections.len() {
            let top = self.sections[idx].section.bounding_rect().top;
            if !self.sections[idx].trigger.update(top, viewport_height) {
                continue;
            }
            if self.session.is_live() {
                continue;
            }
            self.active = Some(idx);
            self.session.build(&self.sections[idx].container, self.now_ms);
        }
    }

    /// Viewport resize: (re)start the debounce window.
    pub fn on_resize(&mut self) {
        self.resize.schedule(self.now_ms);
    }

    /// One host frame. Returns whether the world stepped.
    pub fn frame(&mut self, raw_ms: f64) -> bool {
        self.now_ms = self.clock.tick(raw_ms);
        if self.resize.poll(self.now_ms) {
            self.rebuild_active();
        }
        self.session.tick(self.now_ms)
    }

    fn rebuild_active(&mut self) {
        let Some(idx) = self.active else {
            engine_log!("resize: no active container, nothing to rebuild");
            return;
        };
        if let Some(section) = self.sections.get(idx) {
            self.session.build(&section.container, self.now_ms);
        }
    }

    // === POINTER (client coordinates, per section) ===

    fn relative(&self, idx: usize, client_x: f32, client_y: f32) -> Option<(f32, f32)> {
        if self.active != Some(idx) {
            return None;
        }
        let rect = self.sections.get(idx)?.container.bounding_rect();
        Some((client_x - rect.left, client_y - rect.top))
    }

    pub fn pointer_move(&mut self, idx: usize, client_x: f32, client_y: f32) {
        if let Some((x, y)) = self.relative(idx, client_x, client_y) {
            self.session.pointer_move(x, y);
        }
    }

    pub fn pointer_down(&mut self, idx: usize, client_x: f32, client_y: f32) {
        if let Some((x, y)) = self.relative(idx, client_x, client_y) {
            self.session.pointer_move(x, y);
            self.session.pointer_down();
        }
    }

    pub fn pointer_up(&mut self, idx: usize) {
        if self.active == Some(idx) {
            self.session.pointer_up();
        }
    }

    /// Pointer left a container: forced release if it is the active one.
    pub fn pointer_leave(&mut self, idx: usize) {
        if self.active == Some(idx) {
            self.session.release_pointer();
        }
    }

    /// Pointer released anywhere in the document.
    pub fn release_pointer(&mut self) {
        self.session.release_pointer();
    }

    /// Page teardown.
    pub fn shutdown(&mut self) {
        self.resize.cancel();
        self.session.destroy();
        self.active = None;
    }
}
