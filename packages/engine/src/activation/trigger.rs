/// Fires once, the first time a section's top edge crosses the bottom of
/// the viewport ("top bottom").
#[derive(Clone, Debug, Default)]
pub struct ViewportTrigger {
    fired: bool,
    inside: bool,
}

impl ViewportTrigger {
    pub fn once() -> Self {
        Self::default()
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Feed the section's current top (viewport coordinates). Returns `true`
    /// on the entry that should run the callback.
    pub fn update(&mut self, top: f32, viewport_height: f32) -> bool {
        let inside = top <= viewport_height;
        let entered = inside && !self.inside;
        self.inside = inside;

        if !entered || self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_when_top_reaches_viewport_bottom() {
        let mut t = ViewportTrigger::once();
        assert!(!t.update(1200.0, 800.0));
        assert!(!t.has_fired());
        assert!(t.update(800.0, 800.0));
        assert!(t.has_fired());
    }

    #[test]
    fn ignores_later_entries() {
        let mut t = ViewportTrigger::once();
        assert!(t.update(100.0, 800.0));
        assert!(!t.update(2000.0, 800.0));
        assert!(!t.update(100.0, 800.0));
    }
}
