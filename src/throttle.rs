/// Leading-edge throttle with a single coalesced trailing run.
///
/// The first call in a quiet period runs immediately. Calls that land inside
/// the window collapse into one trailing run scheduled for the end of the
/// window, so the last scroll position of a burst is never lost.
#[derive(Clone, Debug)]
pub struct Throttle {
    window_ms: f64,
    last_run: Option<f64>,
    trailing_pending: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThrottleDecision {
    Run,
    Defer(f64),
    Drop,
}

impl Throttle {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_run: None,
            trailing_pending: false,
        }
    }

    pub fn call(&mut self, now_ms: f64) -> ThrottleDecision {
        match self.last_run {
            Some(last) if now_ms - last < self.window_ms => {
                if self.trailing_pending {
                    return ThrottleDecision::Drop;
                }
                self.trailing_pending = true;
                ThrottleDecision::Defer(self.window_ms - (now_ms - last))
            }
            _ => {
                self.last_run = Some(now_ms);
                ThrottleDecision::Run
            }
        }
    }

    /// Marks the deferred trailing run as executed.
    pub fn flush(&mut self, now_ms: f64) {
        self.trailing_pending = false;
        self.last_run = Some(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_call_runs_immediately() {
        let mut throttle = Throttle::new(100.0);
        assert_eq!(throttle.call(0.0), ThrottleDecision::Run);
    }

    #[test]
    fn burst_inside_window_defers_once() {
        let mut throttle = Throttle::new(100.0);
        assert_eq!(throttle.call(1_000.0), ThrottleDecision::Run);
        assert_eq!(throttle.call(1_030.0), ThrottleDecision::Defer(70.0));
        assert_eq!(throttle.call(1_060.0), ThrottleDecision::Drop);
        assert_eq!(throttle.call(1_090.0), ThrottleDecision::Drop);
    }

    #[test]
    fn flush_restarts_the_window() {
        let mut throttle = Throttle::new(100.0);
        throttle.call(0.0);
        throttle.call(50.0);
        throttle.flush(100.0);
        assert_eq!(throttle.call(150.0), ThrottleDecision::Defer(50.0));
        assert_eq!(throttle.call(250.0), ThrottleDecision::Run);
    }

    #[test]
    fn calls_after_window_run_again() {
        let mut throttle = Throttle::new(100.0);
        throttle.call(0.0);
        assert_eq!(throttle.call(100.0), ThrottleDecision::Run);
    }
}
