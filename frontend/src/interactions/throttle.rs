/// Window used for scroll handlers, roughly one frame at 60 Hz.
pub const SCROLL_THROTTLE_MS: f64 = 16.0;

/// Admits at most one call per window. The first call in a window runs
/// right away; anything else inside the window is dropped, not queued.
#[derive(Clone, Debug, PartialEq)]
pub struct Throttle {
    limit_ms: f64,
    window_closes_at: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            window_closes_at: None,
        }
    }

    pub fn admit(&mut self, now_ms: f64) -> bool {
        match self.window_closes_at {
            Some(closes_at) if now_ms < closes_at => false,
            _ => {
                self.window_closes_at = Some(now_ms + self.limit_ms);
                true
            }
        }
    }

    /// Runs `handler` if the call is admitted. Returns whether it ran.
    pub fn run<F: FnOnce()>(&mut self, now_ms: f64, handler: F) -> bool {
        let admitted = self.admit(now_ms);
        if admitted {
            handler();
        }
        admitted
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(SCROLL_THROTTLE_MS)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_two_calls_inside_window_run_once() {
        let mut throttle = Throttle::default();
        let mut calls = 0;

        throttle.run(1000.0, || calls += 1);
        throttle.run(1005.0, || calls += 1);

        assert_eq!(calls, 1);
    }

    #[test]
    fn test_window_reopens_after_limit() {
        let mut throttle = Throttle::default();

        assert!(throttle.admit(0.0));
        assert!(!throttle.admit(15.9));
        assert!(throttle.admit(16.0));
    }

    #[test]
    fn test_dropped_calls_do_not_extend_window() {
        let mut throttle = Throttle::new(16.0);

        assert!(throttle.admit(100.0));
        assert!(!throttle.admit(105.0));
        assert!(!throttle.admit(110.0));
        assert!(throttle.admit(116.0));
    }
}
