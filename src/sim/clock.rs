//! Frame clock
//!
//! Turns the display's millisecond timestamps into simulation deltas and owns
//! the running flag. A paused clock hands out nothing, so frames that were
//! already scheduled when the game paused do no work.

/// Running flag plus the timestamp baseline
#[derive(Debug, Clone)]
pub struct FrameClock {
    running: bool,
    last_ms: f64,
    /// Largest delta handed out, in seconds (`None` = uncapped)
    max_dt: Option<f32>,
}

impl FrameClock {
    pub fn new(max_dt: Option<f32>) -> Self {
        Self {
            running: false,
            last_ms: 0.0,
            max_dt,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start (or restart) ticking from `now_ms`
    pub fn resume(&mut self, now_ms: f64) {
        self.running = true;
        // Fresh baseline so the pause isn't simulated as one giant frame
        self.last_ms = now_ms;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Delta in seconds since the previous frame, or `None` while paused
    pub fn advance(&mut self, now_ms: f64) -> Option<f32> {
        if !self.running {
            return None;
        }
        let dt = ((now_ms - self.last_ms) / 1000.0) as f32;
        self.last_ms = now_ms;
        // f32::clamp panics if the cap is negative
        let dt = match self.max_dt {
            Some(cap) => dt.min(cap),
            None => dt,
        };
        Some(dt.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas_in_seconds() {
        let mut clock = FrameClock::new(None);
        assert_eq!(clock.advance(16.0), None);

        clock.resume(1000.0);
        let dt = clock.advance(1016.0).unwrap();
        assert!((dt - 0.016).abs() < 1e-6);
        let dt = clock.advance(1048.0).unwrap();
        assert!((dt - 0.032).abs() < 1e-6);
    }

    #[test]
    fn test_slow_frames_are_not_capped_by_default() {
        let mut clock = FrameClock::new(None);
        clock.resume(500.0);
        assert_eq!(clock.advance(400.0), Some(0.0));
        assert_eq!(clock.advance(10_400.0), Some(10.0));
    }

    #[test]
    fn test_optional_cap() {
        let mut clock = FrameClock::new(Some(0.25));
        clock.resume(0.0);
        assert_eq!(clock.advance(1000.0), Some(0.25));
        assert_eq!(clock.advance(1010.0).map(|dt| (dt - 0.01).abs() < 1e-6), Some(true));
    }

    #[test]
    fn test_negative_cap_yields_zero_instead_of_panicking() {
        let mut clock = FrameClock::new(Some(-1.0));
        clock.resume(0.0);
        assert_eq!(clock.advance(16.0), Some(0.0));
    }

    #[test]
    fn test_pause_drops_elapsed_time() {
        let mut clock = FrameClock::new(None);
        clock.resume(0.0);
        clock.advance(16.0);
        clock.pause();
        assert!(!clock.is_running());
        assert_eq!(clock.advance(5000.0), None);

        clock.resume(60_000.0);
        let dt = clock.advance(60_010.0).unwrap();
        assert!((dt - 0.010).abs() < 1e-6);
    }
}
