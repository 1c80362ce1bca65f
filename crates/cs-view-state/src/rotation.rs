//! Hero message rotation: one active message, advanced on every tick.

/// Cycles a single `active` marker through N hero messages.
#[derive(Debug, Clone)]
pub struct MessageRotation {
    len: usize,
    active: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationStep {
    pub previous: usize,
    pub next: usize,
}

impl MessageRotation {
    pub fn new(len: usize) -> Self {
        Self { len, active: None }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Activates message 0. Returns `None` when there is nothing to rotate.
    pub fn start(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.active = Some(0);
        self.active
    }

    pub fn tick(&mut self) -> Option<RotationStep> {
        let previous = self.active?;
        let next = (previous + 1) % self.len;
        self.active = Some(next);
        Some(RotationStep { previous, next })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_index_follows_tick_count() {
        let interval_ms = 4000_u64;
        for len in 1..=4 {
            let mut rotation = MessageRotation::new(len);
            rotation.start();
            let mut elapsed = 0_u64;
            for k in 1..=10_usize {
                elapsed += interval_ms;
                rotation.tick();
                assert_eq!(elapsed, k as u64 * interval_ms);
                assert_eq!(rotation.active(), Some(k % len), "len {len}, k {k}");
            }
        }
    }

    #[test]
    fn each_step_hands_off_exactly_one_marker() {
        let mut rotation = MessageRotation::new(3);
        let mut classes = [false; 3];
        classes[rotation.start().unwrap()] = true;

        for _ in 0..7 {
            let step = rotation.tick().unwrap();
            classes[step.previous] = false;
            classes[step.next] = true;
            assert_eq!(classes.iter().filter(|c| **c).count(), 1);
        }
    }

    #[test]
    fn empty_rotation_never_starts() {
        let mut rotation = MessageRotation::new(0);
        assert_eq!(rotation.start(), None);
        assert_eq!(rotation.tick(), None);
    }

    #[test]
    fn tick_before_start_is_inert() {
        let mut rotation = MessageRotation::new(2);
        assert_eq!(rotation.tick(), None);
        assert_eq!(rotation.active(), None);
    }
}
