use std::cell::RefCell;
use std::f32::consts::PI;
use std::rc::Rc;

use crate::core::{Deadline, Rng};
use crate::dom::{prepare_for_transforms, DomElement};
use crate::domain::config::OBJECT_SELECTOR;
use crate::domain::{Binding, BodyRegistry, Config, ContainerGeometry, ElementSize};
use crate::rigid_body::{BodyHandle, BodyOptions, Vec2};
use crate::rigid_body_system::{BodySet, PhysicsWorld, Pointer, PointerConstraint, Runner, WorldSettings};

use super::{clamp_pass, pointer, render_pass};
use super::{LiveWorld, PendingWall, Shared, SimulationSession};

/// Spawn center and tilt for an element of `size` in `geometry`:
/// x in `[w/2, W - w/2]`, y strictly above the container, angle in
/// `[-π/2, π/2)`.
pub fn spawn_pose(rng: &mut Rng, config: &Config, geometry: &ContainerGeometry, size: ElementSize) -> (f32, f32, f32) {
    let x = rng.next_f32() * (geometry.width - size.width) + size.half_width();
    let y = -config.spawn_offset_y - rng.next_f32() * config.spawn_jitter_y;
    let angle = (rng.next_f32() - 0.5) * PI;
    (x, y, angle)
}

fn world_settings(config: &Config) -> WorldSettings {
    WorldSettings {
        gravity: config.gravity,
        gravity_scale: config.gravity_scale,
        constraint_iterations: config.constraint_iterations,
        position_iterations: config.position_iterations,
        time_scale: config.time_scale,
    }
}

fn body_options(config: &Config) -> BodyOptions {
    BodyOptions {
        is_static: false,
        restitution: config.restitution,
        friction: config.friction,
        friction_air: config.friction_air,
        density: config.density,
    }
}

/// Vertical gap kept between stacked spawn boxes.
const SPAWN_GAP: f32 = 2.0;

/// Raise a freshly spawned body until its box clears every dynamic body
/// spawned before it. Overlapping spawns would be separated along the
/// shallow axis, which can shove a body sideways past the side walls.
fn lift_clear_of_others(bodies: &BodySet, handle: BodyHandle) -> Option<f32> {
    let body = bodies.get(handle)?;
    let extents = body.aabb_half_extents();
    let mut y = body.pos.y;

    for _ in 0..bodies.len() {
        let blocker = bodies.iter().find(|other| {
            if other.is_static || other.id == handle {
                return false;
            }
            let e = other.aabb_half_extents();
            (other.pos.x - body.pos.x).abs() < e.x + extents.x && (other.pos.y - y).abs() < e.y + extents.y
        });
        let Some(blocker) = blocker else {
            break;
        };
        y = blocker.pos.y - blocker.aabb_half_extents().y - extents.y - SPAWN_GAP;
    }
    Some(y)
}

pub(super) fn add_top_wall(world: &mut PhysicsWorld, geometry: &ContainerGeometry) -> BodyHandle {
    let (x, y, w, h) = geometry.top_wall();
    world.add_rect(x, y, w, h, BodyOptions::fixed())
}

pub(super) fn build<E: DomElement + 'static>(session: &mut SimulationSession<E>, container: &E, now_ms: f64) {
    session.destroy();
    session.generation += 1;
    let generation = session.generation;
    let config = session.config.clone();

    let geometry = ContainerGeometry::from_rect(container.bounding_rect(), config.wall_thickness);
    let mut world = PhysicsWorld::new(world_settings(&config));

    for (x, y, w, h) in geometry.side_walls() {
        world.add_rect(x, y, w, h, BodyOptions::fixed());
    }

    let mut registry = BodyRegistry::new();
    let options = body_options(&config);
    for element in container.query_all(OBJECT_SELECTOR) {
        let size = element.bounding_rect().size();
        let (x, y, angle) = spawn_pose(&mut session.rng, &config, &geometry, size);

        let handle = world.add_rect(x, y, size.width, size.height, options);
        if let Some(body) = world.body_mut(handle) {
            body.set_angle(angle);
        }
        if let Some(lifted) = lift_clear_of_others(world.bodies(), handle) {
            if let Some(body) = world.body_mut(handle) {
                body.set_position(Vec2::new(x, lifted));
            }
        }
        prepare_for_transforms(&element);
        registry.bind(handle, Binding::new(element, size));
    }

    session.pending_top_wall = Some(PendingWall {
        deadline: Deadline::after(now_ms, config.top_wall_delay_ms),
        generation,
    });

    // container-relative device; wheel and context-menu policy live on the
    // host listeners (`Config::capture_wheel`, `Config::context_menu`)
    world.set_pointer_constraint(PointerConstraint::new(Pointer::new(), config.mouse_stiffness));

    let bodies = registry.len();
    let shared = Rc::new(RefCell::new(Shared {
        registry,
        drag: None,
        geometry,
        max_lin_vel: config.max_lin_vel,
        rendered: 0,
    }));
    wire_observers(&mut world, &shared);

    let mut runner = Runner::new();
    runner.start();

    engine_log!(
        "world built (generation {}): {}x{} container, {} bodies",
        generation,
        geometry.width,
        geometry.height,
        bodies
    );

    session.live = Some(LiveWorld {
        world,
        runner,
        shared,
        geometry,
        top_wall: None,
        generation,
    });
}

fn wire_observers<E: DomElement + 'static>(world: &mut PhysicsWorld, shared: &Rc<RefCell<Shared<E>>>) {
    let s = shared.clone();
    world.events_mut().on_start_drag(Box::new(move |bodies: &mut BodySet, body: BodyHandle| {
        pointer::start_drag(&mut s.borrow_mut(), bodies, body);
    }));

    let s = shared.clone();
    world.events_mut().on_end_drag(Box::new(move |bodies: &mut BodySet, _: BodyHandle| {
        pointer::end_drag(&mut s.borrow_mut(), bodies);
    }));

    let s = shared.clone();
    world.hooks_mut().on_before_update(Box::new(move |bodies: &mut BodySet| {
        clamp_pass::clamp_drag(&s.borrow(), bodies);
    }));

    let s = shared.clone();
    world.hooks_mut().on_after_update(Box::new(move |bodies: &BodySet| {
        render_pass::render(&mut s.borrow_mut(), bodies);
    }));
}
