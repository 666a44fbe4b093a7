use super::system::PhysicsWorld;

const BASE_DELTA_MS: f64 = 1000.0 / 60.0;

/// Steps a world once per host frame while enabled.
///
/// The frame delta is clamped so a stalled tab does not produce one huge
/// gravity kick on return.
#[derive(Clone, Debug)]
pub struct Runner {
    enabled: bool,
    delta_min_ms: f64,
    delta_max_ms: f64,
    last_time_ms: Option<f64>,
}

impl Runner {
    pub fn new() -> Self {
        Self {
            enabled: false,
            delta_min_ms: BASE_DELTA_MS / 2.0,
            delta_max_ms: BASE_DELTA_MS * 2.0,
            last_time_ms: None,
        }
    }

    pub fn start(&mut self) {
        self.enabled = true;
        self.last_time_ms = None;
    }

    pub fn stop(&mut self) {
        self.enabled = false;
        self.last_time_ms = None;
    }

    /// Advance `world` by one step if running. Returns whether a step ran.
    pub fn tick(&mut self, world: &mut PhysicsWorld, now_ms: f64) -> bool {
        if !self.enabled {
            return false;
        }
        let delta = match self.last_time_ms {
            Some(last) => (now_ms - last).max(self.delta_min_ms).min(self.delta_max_ms),
            None => BASE_DELTA_MS,
        };
        self.last_time_ms = Some(now_ms);
        world.step(delta as f32);
        true
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}
