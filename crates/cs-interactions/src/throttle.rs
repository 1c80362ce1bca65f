/// Leading-edge throttle driven by an external millisecond clock.
///
/// The first call always passes; after that a call passes only once `limit_ms`
/// have elapsed since the last accepted one. Trailing calls are dropped.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: f64,
    last_accepted: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: u32) -> Self {
        Self {
            limit_ms: f64::from(limit_ms),
            last_accepted: None,
        }
    }

    pub fn permit(&mut self, now_ms: f64) -> bool {
        match self.last_accepted {
            Some(last) if now_ms - last < self.limit_ms => false,
            _ => {
                self.last_accepted = Some(now_ms);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_calls_inside_the_window() {
        let mut throttle = Throttle::new(250);

        assert!(throttle.permit(1000.0));
        assert!(!throttle.permit(1100.0));
        assert!(!throttle.permit(1249.0));
        assert!(throttle.permit(1250.0));
        assert!(!throttle.permit(1300.0));
    }

    #[test]
    fn window_is_measured_from_last_accepted_call() {
        let mut throttle = Throttle::new(10);

        assert!(throttle.permit(0.0));
        for t in 1..10 {
            assert!(!throttle.permit(f64::from(t)));
        }
        assert!(throttle.permit(10.0));
    }

    #[test]
    fn zero_limit_accepts_everything() {
        let mut throttle = Throttle::new(0);
        assert!(throttle.permit(5.0));
        assert!(throttle.permit(5.0));
    }
}
