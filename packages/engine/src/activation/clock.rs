/// Converts raw animation-frame timestamps into simulation time.
///
/// Lag smoothing is off unless configured: a frame that arrives late keeps
/// its full elapsed time, so scroll position and animation stay in sync.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    lag_smoothing: Option<(f64, f64)>,
    last_raw_ms: Option<f64>,
    time_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Any frame gap above `threshold_ms` counts as `adjusted_ms`.
    pub fn with_lag_smoothing(threshold_ms: f64, adjusted_ms: f64) -> Self {
        Self {
            lag_smoothing: Some((threshold_ms, adjusted_ms)),
            ..Self::default()
        }
    }

    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }

    pub fn tick(&mut self, raw_ms: f64) -> f64 {
        let elapsed = match self.last_raw_ms {
            Some(last) => (raw_ms - last).max(0.0),
            None => 0.0,
        };
        let elapsed = match self.lag_smoothing {
            Some((threshold, adjusted)) if elapsed > threshold => adjusted,
            _ => elapsed,
        };
        self.last_raw_ms = Some(raw_ms);
        self.time_ms += elapsed;
        self.time_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_gaps_through_without_smoothing() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(1000.0), 0.0);
        assert_eq!(clock.tick(1016.0), 16.0);
        assert_eq!(clock.tick(3016.0), 2016.0);
    }

    #[test]
    fn smoothing_caps_long_gaps() {
        let mut clock = FrameClock::with_lag_smoothing(500.0, 33.0);
        clock.tick(0.0);
        clock.tick(16.0);
        assert_eq!(clock.tick(2016.0), 49.0);
    }
}
