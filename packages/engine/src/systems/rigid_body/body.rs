use super::vec2::Vec2;

/// Stable integer id of a body inside one world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub u32);

/// Material and mobility options for a new body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyOptions {
    pub is_static: bool,
    pub restitution: f32,
    pub friction: f32,
    pub friction_air: f32,
    pub density: f32,
}

impl BodyOptions {
    /// Immovable wall.
    pub fn fixed() -> Self {
        Self {
            is_static: true,
            ..Self::default()
        }
    }
}

impl Default for BodyOptions {
    fn default() -> Self {
        Self {
            is_static: false,
            restitution: 0.0,
            friction: 0.1,
            friction_air: 0.01,
            density: 0.001,
        }
    }
}

/// Rigid Body - moves as a single unit
#[derive(Clone, Debug)]
pub struct RigidBody {
    // === Physics State ===
    /// World position (center of mass)
    pub pos: Vec2,
    /// Velocity vector (units per step)
    pub velocity: Vec2,
    /// Rotation angle (radians)
    pub angle: f32,
    /// Angular velocity (radians per step)
    pub angular_vel: f32,
    pub mass: f32,
    /// Rotational inertia. `f32::INFINITY` locks rotation.
    pub inertia: f32,
    pub id: BodyHandle,
    pub is_static: bool,

    // === Shape ===
    pub half_width: f32,
    pub half_height: f32,

    // === Material properties ===
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    pub friction: f32,
    pub friction_air: f32,
    pub density: f32,
}

impl RigidBody {
    /// Create a rectangular rigid body centered on `(x, y)`.
    pub fn new_rect(x: f32, y: f32, w: f32, h: f32, options: BodyOptions, id: BodyHandle) -> Self {
        let w = w.max(1.0);
        let h = h.max(1.0);
        let mass = if options.is_static {
            f32::INFINITY
        } else {
            (w * h * options.density).max(f32::EPSILON)
        };
        // I = m(w² + h²) / 12 for a solid rectangle
        let inertia = if options.is_static {
            f32::INFINITY
        } else {
            mass * (w * w + h * h) / 12.0
        };

        Self {
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            angle: 0.0,
            angular_vel: 0.0,
            mass,
            inertia,
            id,
            is_static: options.is_static,
            half_width: w / 2.0,
            half_height: h / 2.0,
            restitution: options.restitution.clamp(0.0, 1.0),
            friction: options.friction.max(0.0),
            friction_air: options.friction_air.clamp(0.0, 1.0),
            density: options.density,
        }
    }

    #[inline]
    pub fn inverse_mass(&self) -> f32 {
        if self.is_static { 0.0 } else { 1.0 / self.mass }
    }

    /// Zero for static bodies and for bodies with locked rotation.
    #[inline]
    pub fn inverse_inertia(&self) -> f32 {
        if self.is_static || !self.inertia.is_finite() || self.inertia <= 0.0 {
            0.0
        } else {
            1.0 / self.inertia
        }
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn set_angular_velocity(&mut self, angular_vel: f32) {
        self.angular_vel = angular_vel;
    }

    pub fn set_inertia(&mut self, inertia: f32) {
        self.inertia = inertia;
    }

    /// Half extents of the axis-aligned box around the rotated rectangle.
    pub fn aabb_half_extents(&self) -> Vec2 {
        let (sin, cos) = self.angle.sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        Vec2::new(
            self.half_width * cos + self.half_height * sin,
            self.half_width * sin + self.half_height * cos,
        )
    }

    /// Point-in-rectangle test in world space (respects rotation).
    pub fn contains_point(&self, point: Vec2) -> bool {
        let local = (point - self.pos).rotate(-self.angle);
        local.x.abs() <= self.half_width && local.y.abs() <= self.half_height
    }

    /// Transform a local offset to world space.
    #[inline]
    pub fn local_to_world(&self, local: Vec2) -> Vec2 {
        self.pos + local.rotate(self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_bodies_are_immovable() {
        let wall = RigidBody::new_rect(0.0, 0.0, 100.0, 10.0, BodyOptions::fixed(), BodyHandle(1));
        assert_eq!(wall.inverse_mass(), 0.0);
        assert_eq!(wall.inverse_inertia(), 0.0);
    }

    #[test]
    fn infinite_inertia_locks_rotation_but_not_translation() {
        let mut body = RigidBody::new_rect(0.0, 0.0, 100.0, 50.0, BodyOptions::default(), BodyHandle(1));
        body.set_inertia(f32::INFINITY);
        assert_eq!(body.inverse_inertia(), 0.0);
        assert!(body.inverse_mass() > 0.0);
    }

    #[test]
    fn contains_point_respects_rotation() {
        let mut body = RigidBody::new_rect(0.0, 0.0, 100.0, 10.0, BodyOptions::default(), BodyHandle(1));
        assert!(body.contains_point(Vec2::new(45.0, 0.0)));
        body.set_angle(std::f32::consts::FRAC_PI_2);
        assert!(!body.contains_point(Vec2::new(45.0, 0.0)));
        assert!(body.contains_point(Vec2::new(0.0, 45.0)));
    }
}
