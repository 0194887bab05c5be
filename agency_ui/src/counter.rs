//! Count-up animation state.
//!
//! A counter goes from 0 to its target in a fixed number of equal steps. The
//! value shown after step `k` of `n` is `floor(target * k / n)`, computed in
//! integers, so it never decreases and lands exactly on the target at the
//! last step.

/// Progress of one animated number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    target: u64,
    steps: u32,
    step: u32,
    started: bool,
}

impl CountUp {
    /// `steps` of 0 is treated as 1 (jump straight to the target).
    pub fn new(target: u64, steps: u32) -> Self {
        Self {
            target,
            steps: steps.max(1),
            step: 0,
            started: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Value to render right now.
    pub fn value(&self) -> u64 {
        if self.step >= self.steps {
            return self.target;
        }
        let scaled = u128::from(self.target) * u128::from(self.step) / u128::from(self.steps);
        // scaled <= target, so it always fits back into u64
        u64::try_from(scaled).unwrap_or(self.target)
    }

    /// Mark the animation as running. Returns false if it already ran, so a
    /// counter plays at most once per mount.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        if self.target == 0 {
            self.step = self.steps;
        }
        true
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_done(&self) -> bool {
        self.started && self.step >= self.steps
    }

    /// Skip to the final value, e.g. when no timer could be scheduled.
    pub fn finish(&mut self) {
        self.started = true;
        self.step = self.steps;
    }

    /// Advance one step, clamping at the target. Returns the new value.
    pub fn tick(&mut self) -> u64 {
        if self.started && self.step < self.steps {
            self.step += 1;
        }
        self.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_target_exactly() {
        let mut counter = CountUp::new(15_000, 60);
        counter.start();
        let mut last = 0;
        for _ in 0..60 {
            let value = counter.tick();
            assert!(value >= last);
            last = value;
        }
        assert!(counter.is_done());
        assert_eq!(last, 15_000);
    }

    #[test]
    fn ticks_past_the_end_clamp() {
        let mut counter = CountUp::new(7, 3);
        counter.start();
        for _ in 0..10 {
            counter.tick();
        }
        assert_eq!(counter.value(), 7);
    }

    #[test]
    fn target_smaller_than_steps_floors() {
        let mut counter = CountUp::new(12, 60);
        counter.start();
        assert_eq!(counter.tick(), 0);
        for _ in 0..29 {
            counter.tick();
        }
        assert_eq!(counter.value(), 6);
    }

    #[test]
    fn zero_target_finishes_on_start() {
        let mut counter = CountUp::new(0, 60);
        assert!(counter.start());
        assert!(counter.is_done());
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn runs_at_most_once() {
        let mut counter = CountUp::new(98, 60);
        assert!(counter.start());
        assert!(!counter.start());
    }

    #[test]
    fn finish_jumps_to_target() {
        let mut counter = CountUp::new(850, 60);
        counter.finish();
        assert!(counter.is_done());
        assert_eq!(counter.value(), 850);
        assert!(!counter.start());
    }

    #[test]
    fn idle_counter_does_not_move() {
        let mut counter = CountUp::new(500, 60);
        assert_eq!(counter.tick(), 0);
        assert!(!counter.is_done());
    }
}
