//! Debounced resize lifecycle.
//!
//! Terminal resizes arrive as a burst of events while the user drags.  Each
//! event restarts a quiet window; the page is torn down and rebuilt once,
//! after the burst goes quiet, never mid-drag.

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Idle,
    Pending { deadline: f64 },
}

/// Collapses a burst of resize events into a single rebuild signal.
#[derive(Debug)]
pub struct ResizeDebounce {
    /// Quiet window in seconds.
    window: f64,
    state: State,
}

impl ResizeDebounce {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window: window_ms as f64 / 1000.0,
            state: State::Idle,
        }
    }

    /// Note a resize event at `now`, restarting the quiet window.
    pub fn arm(&mut self, now: f64) {
        self.state = State::Pending {
            deadline: now + self.window,
        };
    }

    /// True exactly once per burst, after the window has gone quiet.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.state {
            State::Pending { deadline } if now >= deadline => {
                self.state = State::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, State::Pending { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_never_fires() {
        let mut debounce = ResizeDebounce::new(250);
        assert!(!debounce.poll(0.0));
        assert!(!debounce.poll(100.0));
    }

    #[test]
    fn a_burst_fires_once_after_the_last_event() {
        let mut debounce = ResizeDebounce::new(250);
        debounce.arm(0.00);
        debounce.arm(0.10);
        debounce.arm(0.20);

        // 250 ms after the first event, but only 50 ms after the last.
        assert!(!debounce.poll(0.25));
        assert!(debounce.is_pending());

        assert!(debounce.poll(0.45));
        assert!(!debounce.is_pending());
        assert!(!debounce.poll(0.46), "fires once per burst");
    }

    #[test]
    fn rearming_after_a_fire_starts_a_new_burst() {
        let mut debounce = ResizeDebounce::new(250);
        debounce.arm(0.0);
        assert!(debounce.poll(0.3));

        debounce.arm(1.0);
        assert!(!debounce.poll(1.2));
        assert!(debounce.poll(1.25));
    }
}
