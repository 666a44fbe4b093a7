use std::f32::consts::FRAC_PI_2;

use crate::rigid_body::{RigidBody, Vec2};

/// Fraction of the tilt error removed per step while a body rests on something.
const SETTLE_RATE: f32 = 0.05;

/// Overlap between two bodies, `normal` pointing from `a` to `b`.
#[derive(Clone, Copy, Debug)]
pub(super) struct Contact {
    pub normal: Vec2,
    pub depth: f32,
}

/// Axis-aligned overlap test on the boxes enclosing both (rotated) bodies.
pub(super) fn contact_between(a: &RigidBody, b: &RigidBody) -> Option<Contact> {
    let ea = a.aabb_half_extents();
    let eb = b.aabb_half_extents();
    let d = b.pos - a.pos;

    let ox = ea.x + eb.x - d.x.abs();
    let oy = ea.y + eb.y - d.y.abs();
    if ox <= 0.0 || oy <= 0.0 {
        return None;
    }

    let sign = |v: f32| if v < 0.0 { -1.0 } else { 1.0 };
    if ox < oy {
        Some(Contact { normal: Vec2::new(sign(d.x), 0.0), depth: ox })
    } else {
        Some(Contact { normal: Vec2::new(0.0, sign(d.y)), depth: oy })
    }
}

/// Signed distance from `angle` to the nearest quarter turn.
#[inline]
fn tilt_error(angle: f32) -> f32 {
    angle - (angle / FRAC_PI_2).round() * FRAC_PI_2
}

/// Push overlapping bodies apart. The first pass also exchanges velocity
/// (restitution, friction) and applies the settle torque.
pub(super) fn resolve_contacts(bodies: &mut [RigidBody], iterations: u32) {
    let n = bodies.len();
    for pass in 0..iterations.max(1) {
        let mut any = false;
        for i in 0..n {
            for j in (i + 1)..n {
                if bodies[i].is_static && bodies[j].is_static {
                    continue;
                }
                let (head, tail) = bodies.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];

                let Some(contact) = contact_between(a, b) else {
                    continue;
                };
                any = true;
                separate(a, b, contact);
                if pass == 0 {
                    respond(a, b, contact);
                }
            }
        }
        if !any {
            break;
        }
    }
}

fn separate(a: &mut RigidBody, b: &mut RigidBody, contact: Contact) {
    let ima = a.inverse_mass();
    let imb = b.inverse_mass();
    let total = ima + imb;
    if total <= 0.0 {
        return;
    }
    let push = contact.normal * contact.depth;
    a.pos = a.pos - push * (ima / total);
    b.pos = b.pos + push * (imb / total);
}

fn respond(a: &mut RigidBody, b: &mut RigidBody, contact: Contact) {
    let ima = a.inverse_mass();
    let imb = b.inverse_mass();
    let total = ima + imb;
    if total <= 0.0 {
        return;
    }

    let n = contact.normal;
    let rel = b.velocity - a.velocity;
    let vn = rel.dot(n);
    if vn < 0.0 {
        let e = a.restitution.max(b.restitution);
        let j = -(1.0 + e) * vn / total;
        a.velocity = a.velocity - n * (j * ima);
        b.velocity = b.velocity + n * (j * imb);

        // Coulomb friction on the tangent, bounded by the normal impulse
        let t = Vec2::new(-n.y, n.x);
        let vt = (b.velocity - a.velocity).dot(t);
        let mu = a.friction.min(b.friction);
        let jt = (-vt / total).max(-mu * j).min(mu * j);
        a.velocity = a.velocity - t * (jt * ima);
        b.velocity = b.velocity + t * (jt * imb);
    }

    // resting on a floor or on another box: damp spin and tip toward flat
    if n.y != 0.0 {
        settle(a);
        settle(b);
    }
}

fn settle(body: &mut RigidBody) {
    let inv_i = body.inverse_inertia();
    if inv_i == 0.0 {
        return;
    }
    // natural inertia of this box, so an unlocked body settles at SETTLE_RATE
    let natural = body.mass * (body.half_width.powi(2) + body.half_height.powi(2)) / 3.0;
    body.angular_vel *= 1.0 - body.friction.min(1.0);
    body.angular_vel -= tilt_error(body.angle) * SETTLE_RATE * natural * inv_i;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body::{BodyHandle, BodyOptions};

    fn rect(x: f32, y: f32, w: f32, h: f32, options: BodyOptions, id: u32) -> RigidBody {
        RigidBody::new_rect(x, y, w, h, options, BodyHandle(id))
    }

    #[test]
    fn no_contact_when_apart() {
        let a = rect(0.0, 0.0, 10.0, 10.0, BodyOptions::default(), 1);
        let b = rect(20.0, 0.0, 10.0, 10.0, BodyOptions::default(), 2);
        assert!(contact_between(&a, &b).is_none());
    }

    #[test]
    fn contact_picks_shallow_axis() {
        let a = rect(0.0, 0.0, 10.0, 10.0, BodyOptions::default(), 1);
        let b = rect(2.0, 9.0, 10.0, 10.0, BodyOptions::default(), 2);
        let c = contact_between(&a, &b).expect("overlap");
        assert_eq!(c.normal, Vec2::new(0.0, 1.0));
        assert!((c.depth - 1.0).abs() < 1e-5);
    }

    #[test]
    fn falling_body_is_pushed_out_of_floor_and_bounces() {
        let floor = rect(0.0, 100.0, 1000.0, 100.0, BodyOptions::fixed(), 1);
        let mut body = rect(0.0, 45.0, 20.0, 20.0, BodyOptions { restitution: 0.5, ..BodyOptions::default() }, 2);
        body.velocity = Vec2::new(0.0, 10.0);

        let mut bodies = vec![floor, body];
        resolve_contacts(&mut bodies, 10);

        // floor top at y = 50, body half height 10
        assert!(bodies[1].pos.y <= 40.0 + 1e-4);
        assert!(bodies[1].velocity.y < 0.0);
        assert_eq!(bodies[0].pos, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn resting_tilted_body_turns_toward_flat() {
        let floor = rect(0.0, 100.0, 1000.0, 100.0, BodyOptions::fixed(), 1);
        let mut body = rect(0.0, 45.0, 20.0, 20.0, BodyOptions::default(), 2);
        body.angle = 0.2;
        let mut bodies = vec![floor, body];
        resolve_contacts(&mut bodies, 1);
        assert!(bodies[1].angular_vel < 0.0);
    }

    #[test]
    fn locked_body_keeps_its_tilt_on_contact() {
        let floor = rect(0.0, 100.0, 1000.0, 100.0, BodyOptions::fixed(), 1);
        let mut body = rect(0.0, 45.0, 20.0, 20.0, BodyOptions::default(), 2);
        body.angle = 0.2;
        body.set_inertia(f32::INFINITY);
        let mut bodies = vec![floor, body];
        resolve_contacts(&mut bodies, 1);
        assert_eq!(bodies[1].angular_vel, 0.0);
    }
}
