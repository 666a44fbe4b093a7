//! Simulation session - one live physics world bound to one container
//!
//! The session owns everything a running world needs: the physics world,
//! its runner, the body registry, the container geometry and the drag
//! session. Building always tears the previous world down first, so at most
//! one world exists at a time.
//!
//! Layout:
//! - init/     - build and teardown
//! - pointer/  - grab-start / grab-end / forced release
//! - render/   - pre-step drag clamp and post-step transform projection
//! - perf/     - per-tick timing

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::{Deadline, Rng};
use crate::dom::DomElement;
use crate::domain::{BodyRegistry, Config, ContainerGeometry, DragSession};
use crate::rigid_body::{BodyHandle, Vec2};
use crate::rigid_body_system::{PhysicsWorld, Runner};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/build.rs"]
mod build;
#[path = "init/teardown.rs"]
mod teardown;
#[path = "pointer/pointer.rs"]
mod pointer;
#[path = "render/clamp_pass.rs"]
mod clamp_pass;
#[path = "render/render_pass.rs"]
mod render_pass;

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

pub use build::spawn_pose;
pub use clamp_pass::clamp_dragged_body;
pub use perf_stats::PerfStats;
pub use render_pass::{project_pose, RenderedPose};

use perf_timer::PerfTimer;

/// State shared between the session and the observers it registers on the
/// world (drag handlers, clamp pass, render pass).
pub(crate) struct Shared<E> {
    registry: BodyRegistry<E>,
    drag: Option<DragSession>,
    geometry: ContainerGeometry,
    max_lin_vel: f32,
    rendered: usize,
}

struct LiveWorld<E> {
    world: PhysicsWorld,
    runner: Runner,
    shared: Rc<RefCell<Shared<E>>>,
    geometry: ContainerGeometry,
    top_wall: Option<BodyHandle>,
    generation: u64,
}

/// Ceiling creation scheduled by a build. Fires only while the world of the
/// same generation is still live.
#[derive(Clone, Copy, Debug)]
struct PendingWall {
    deadline: Deadline,
    generation: u64,
}

pub struct SimulationSession<E: DomElement> {
    config: Config,
    rng: Rng,
    generation: u64,
    live: Option<LiveWorld<E>>,
    pending_top_wall: Option<PendingWall>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl<E: DomElement + 'static> SimulationSession<E> {
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, Rng::from_entropy())
    }

    /// Deterministic spawn positions, for tests and replays.
    pub fn with_seed(config: Config, seed: u32) -> Self {
        Self::with_rng(config, Rng::new(seed))
    }

    fn with_rng(config: Config, rng: Rng) -> Self {
        Self {
            config,
            rng,
            generation: 0,
            live: None,
            pending_top_wall: None,
            perf_enabled: false,
            perf_stats: PerfStats::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    /// Incremented by every build.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Tear down any live world, then build a new one from `container`.
    pub fn build(&mut self, container: &E, now_ms: f64) {
        build::build(self, container, now_ms);
    }

    /// Stop and drop the live world. No-op when nothing is live.
    pub fn destroy(&mut self) {
        teardown::destroy(self);
    }

    /// Advance timers and step the world once. Returns whether a step ran.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.fire_top_wall(now_ms);

        let perf_on = self.perf_enabled;
        let Some(live) = self.live.as_mut() else {
            return false;
        };

        let timer = if perf_on { Some(PerfTimer::start()) } else { None };
        let stepped = live.runner.tick(&mut live.world, now_ms);

        if let Some(timer) = timer {
            self.perf_stats.step_ms = timer.elapsed_ms();
            self.perf_stats.bodies_rendered = live.shared.borrow().rendered as u32;
            self.perf_stats.body_count = live.world.body_count() as u32;
            if stepped {
                self.perf_stats.steps = self.perf_stats.steps.saturating_add(1);
            }
        }
        stepped
    }

    fn fire_top_wall(&mut self, now_ms: f64) {
        let Some(pending) = self.pending_top_wall else {
            return;
        };
        if !pending.deadline.is_due(now_ms) {
            return;
        }
        self.pending_top_wall = None;

        let Some(live) = self.live.as_mut() else {
            return;
        };
        if live.generation != pending.generation {
            return;
        }
        live.top_wall = Some(build::add_top_wall(&mut live.world, &live.geometry));
        engine_log!("top wall placed (generation {})", live.generation);
    }

    // === POINTER API (container-relative coordinates) ===

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if let Some(pc) = self.live.as_mut().and_then(|l| l.world.pointer_constraint_mut()) {
            pc.pointer.move_to(Vec2::new(x, y));
        }
    }

    pub fn pointer_down(&mut self) {
        if let Some(pc) = self.live.as_mut().and_then(|l| l.world.pointer_constraint_mut()) {
            pc.pointer.press();
        }
    }

    pub fn pointer_up(&mut self) {
        if let Some(pc) = self.live.as_mut().and_then(|l| l.world.pointer_constraint_mut()) {
            pc.pointer.release();
        }
    }

    /// Forced release for pointer-leave and pointer-up outside the container.
    pub fn release_pointer(&mut self) {
        pointer::release_pointer(self);
    }

    // === INSPECTION ===

    pub fn world(&self) -> Option<&PhysicsWorld> {
        self.live.as_ref().map(|l| &l.world)
    }

    pub fn geometry(&self) -> Option<ContainerGeometry> {
        self.live.as_ref().map(|l| l.geometry)
    }

    pub fn drag_session(&self) -> Option<DragSession> {
        self.live.as_ref().and_then(|l| l.shared.borrow().drag)
    }

    pub fn binding_count(&self) -> usize {
        self.live.as_ref().map_or(0, |l| l.shared.borrow().registry.len())
    }

    pub fn has_top_wall(&self) -> bool {
        self.live.as_ref().map_or(false, |l| l.top_wall.is_some())
    }

    /// Bodies written by the most recent render pass.
    pub fn bodies_rendered(&self) -> usize {
        self.live.as_ref().map_or(0, |l| l.shared.borrow().rendered)
    }

    /// Enable or disable per-tick perf metrics
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
        if !enabled {
            self.perf_stats.reset();
        }
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }
}
