//! Turns animation-frame timestamps into bounded simulation steps.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    /// Seconds since the previous frame, clamped to `[0, max_delta]`. The first frame yields 0.
    pub fn advance(&mut self, now_ms: f64, max_delta: f64) -> f64 {
        let last = self.last_ms.replace(now_ms).unwrap_or(now_ms);
        let dt = (now_ms - last) / 1000.0;
        if dt.is_finite() && dt > 0.0 { dt.min(max_delta) } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_zero_then_deltas() {
        let mut c = FrameClock::default();
        assert_eq!(c.advance(1000.0, 0.05), 0.0);
        assert!((c.advance(1016.0, 0.05) - 0.016).abs() < 1e-12);
    }

    #[test]
    fn long_pause_is_clamped() {
        let mut c = FrameClock::default();
        c.advance(0.0, 0.05);
        assert_eq!(c.advance(30_000.0, 0.05), 0.05);
    }

    #[test]
    fn backwards_or_bogus_time_is_zero() {
        let mut c = FrameClock::default();
        c.advance(500.0, 0.05);
        assert_eq!(c.advance(400.0, 0.05), 0.0);
        assert_eq!(c.advance(f64::NAN, 0.05), 0.0);
    }
}
