use serde::{Deserialize, Serialize};

use crate::rigid_body::Vec2;

/// Selector for elements that become dynamic bodies.
pub const OBJECT_SELECTOR: &str = ".object";
/// Selector for the element that hosts a simulation.
pub const CONTAINER_SELECTOR: &str = ".object-container";
/// Selector for the page sections that carry viewport triggers.
pub const SECTION_SELECTOR: &str = "section";

/// Static tuning for a simulation session.
///
/// Every field has a default, so JSON overrides may be partial:
/// `{"restitution": 0.8}` changes only the bounce.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gravity: Vec2,
    /// Engine-side multiplier applied to `gravity` (units per ms²).
    pub gravity_scale: f32,
    pub restitution: f32,
    pub friction: f32,
    pub friction_air: f32,
    pub density: f32,
    pub wall_thickness: f32,
    pub mouse_stiffness: f32,
    /// Symmetric per-axis speed limit for the dragged body (units per step).
    pub max_lin_vel: f32,
    /// Bodies spawn at least this far above the container.
    pub spawn_offset_y: f32,
    /// Extra random lift on top of `spawn_offset_y`.
    pub spawn_jitter_y: f32,
    pub top_wall_delay_ms: f64,
    pub resize_debounce_ms: f64,
    pub constraint_iterations: u32,
    pub position_iterations: u32,
    pub time_scale: f32,
    /// When the pointer is force-released (leaves the container or is
    /// released outside it) also end the drag session and restore inertia.
    pub restore_inertia_on_release: bool,
    /// Let the container swallow wheel events. Off so page scroll is never
    /// hijacked.
    pub capture_wheel: bool,
    /// Allow the browser context menu over the container.
    pub context_menu: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, 1.0),
            gravity_scale: 0.001,
            restitution: 0.5,
            friction: 0.15,
            friction_air: 0.02,
            density: 0.002,
            wall_thickness: 200.0,
            mouse_stiffness: 0.6,
            max_lin_vel: 20.0,
            spawn_offset_y: 150.0,
            spawn_jitter_y: 200.0,
            top_wall_delay_ms: 3000.0,
            resize_debounce_ms: 150.0,
            constraint_iterations: 10,
            position_iterations: 20,
            time_scale: 1.0,
            restore_inertia_on_release: true,
            capture_wheel: false,
            context_menu: false,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Config = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn validate(&self) -> Result<(), String> {
        if !(self.mouse_stiffness > 0.0 && self.mouse_stiffness <= 1.0) {
            return Err(format!("mouse_stiffness must be in (0, 1], got {}", self.mouse_stiffness));
        }
        if !(self.max_lin_vel > 0.0) {
            return Err(format!("max_lin_vel must be positive, got {}", self.max_lin_vel));
        }
        if self.wall_thickness < 0.0 || self.spawn_offset_y < 0.0 || self.spawn_jitter_y < 0.0 {
            return Err("wall_thickness and spawn offsets must not be negative".to_string());
        }
        if self.density <= 0.0 {
            return Err(format!("density must be positive, got {}", self.density));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{"restitution": 0.8, "gravity": {"x": 0.0, "y": 2.0}}"#)
            .expect("partial config should parse");
        assert_eq!(config.restitution, 0.8);
        assert_eq!(config.gravity, Vec2::new(0.0, 2.0));
        assert_eq!(config.wall_thickness, 200.0);
        assert_eq!(config.max_lin_vel, 20.0);
    }

    #[test]
    fn pointer_policy_leaves_wheel_and_suppresses_context_menu() {
        let config = Config::default();
        assert!(!config.capture_wheel);
        assert!(!config.context_menu);

        let config = Config::from_json(r#"{"context_menu": true}"#).expect("parse");
        assert!(config.context_menu);
        assert!(!config.capture_wheel);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Config::from_json("{restitution:").is_err());
    }

    #[test]
    fn out_of_range_stiffness_is_rejected() {
        let err = Config::from_json(r#"{"mouse_stiffness": 0.0}"#).unwrap_err();
        assert!(err.contains("mouse_stiffness"));
    }

    #[test]
    fn to_json_reparses_to_same_config() {
        let config = Config::default();
        assert_eq!(Config::from_json(&config.to_json()), Ok(config));
    }
}
