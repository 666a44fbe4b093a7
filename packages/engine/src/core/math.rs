/// Clamp `v` into `[min, max]`.
///
/// Unlike `f32::clamp` this never panics: when `min > max` (an element wider
/// than its container) the result is `min`.
#[inline]
pub fn clamp(v: f32, min: f32, max: f32) -> f32 {
    v.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_inside_and_outside() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(42.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn clamp_inverted_range_prefers_min() {
        // 300px element inside a 200px container: max = -100
        assert_eq!(clamp(50.0, 0.0, -100.0), 0.0);
    }
}
