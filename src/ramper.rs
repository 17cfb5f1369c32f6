//! Rate-limited convergence of an output value toward a target.
//!
//! The white LED never jumps: it ramps toward the commanded duty cycle
//! under independent increase/decrease limits. Splitting "how much per
//! tick" from "how often a tick may occur" lets a caller express both
//! "+2 every 1 ms" (fast turn-on) and "−1 every 4 ms" (slow fade), or
//! snap instantly on one side by zeroing its limit or period.

/// Rate-limited scalar, bounded to the i16 range.
///
/// State changes only through [`set_target`](Self::set_target),
/// [`step`](Self::step), and [`snap_to_target`](Self::snap_to_target).
#[derive(Debug, Clone, Copy, Default)]
pub struct Ramper {
    target: i16,
    actual: i16,
    max_increase: i16,
    increase_period_ms: u32,
    max_decrease: i16,
    decrease_period_ms: u32,
    last_update_ms: u32,
}

impl Ramper {
    pub const fn new() -> Self {
        Self {
            target: 0,
            actual: 0,
            max_increase: 0,
            increase_period_ms: 0,
            max_decrease: 0,
            decrease_period_ms: 0,
            last_update_ms: 0,
        }
    }

    pub fn set_target(&mut self, target: i16) {
        self.target = target;
    }

    pub fn target(&self) -> i16 {
        self.target
    }

    pub fn actual(&self) -> i16 {
        self.actual
    }

    /// Allow at most `magnitude` of increase every `period_ms`. A zero
    /// magnitude or period means increases snap immediately.
    pub fn set_max_increase(&mut self, magnitude: i16, period_ms: u32) {
        self.max_increase = magnitude.unsigned_abs() as i16;
        self.increase_period_ms = period_ms;
    }

    /// Allow at most `magnitude` of decrease every `period_ms`. A zero
    /// magnitude or period means decreases snap immediately.
    pub fn set_max_decrease(&mut self, magnitude: i16, period_ms: u32) {
        self.max_decrease = magnitude.unsigned_abs() as i16;
        self.decrease_period_ms = period_ms;
    }

    /// Jump the output to the target immediately, bypassing rate limits.
    /// Used by the low-battery floor to kill the LED in one step.
    pub fn snap_to_target(&mut self, now_ms: u32) {
        self.actual = self.target;
        self.last_update_ms = now_ms;
    }

    /// Advance the output one quantum toward the target, if due.
    pub fn step(&mut self, now_ms: u32) {
        if self.target == self.actual {
            return;
        }

        // Widened so opposite-extreme target/actual cannot overflow.
        let difference = i32::from(self.target) - i32::from(self.actual);

        if difference > 0 {
            // Zero limit or period: snap. Also covers the default
            // uninitialised state.
            if self.max_increase == 0 || self.increase_period_ms == 0 {
                self.snap_to_target(now_ms);
                return;
            }
            if now_ms.wrapping_sub(self.last_update_ms) < self.increase_period_ms {
                return;
            }
            if difference < i32::from(self.max_increase) {
                self.actual = self.target;
            } else {
                self.actual += self.max_increase;
            }
            self.last_update_ms = now_ms;
        } else {
            if self.max_decrease == 0 || self.decrease_period_ms == 0 {
                self.snap_to_target(now_ms);
                return;
            }
            if now_ms.wrapping_sub(self.last_update_ms) < self.decrease_period_ms {
                return;
            }
            if -difference < i32::from(self.max_decrease) {
                self.actual = self.target;
            } else {
                self.actual -= self.max_decrease;
            }
            self.last_update_ms = now_ms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramps_one_unit_per_millisecond() {
        let mut r = Ramper::new();
        r.set_max_increase(1, 1);
        r.set_max_decrease(1, 1);
        r.set_target(10);

        let mut now = 1;
        // Multiple steps within the same millisecond make no extra progress.
        r.step(now);
        r.step(now);
        assert_eq!(r.actual(), 1);

        for expected in 2..=10 {
            now += 1;
            r.step(now);
            assert_eq!(r.actual(), expected);
        }
        // Never overshoots; further steps are no-ops.
        now += 1;
        r.step(now);
        assert_eq!(r.actual(), 10);
    }

    #[test]
    fn snaps_final_sub_threshold_step() {
        let mut r = Ramper::new();
        r.set_max_increase(4, 1);
        r.set_target(10);
        r.step(1);
        assert_eq!(r.actual(), 4);
        r.step(2);
        assert_eq!(r.actual(), 8);
        // Remaining difference (2) is below one quantum: snap to target.
        r.step(3);
        assert_eq!(r.actual(), 10);
    }

    #[test]
    fn asymmetric_rates_are_independent() {
        let mut r = Ramper::new();
        r.set_max_increase(2, 1);
        r.set_max_decrease(1, 1);

        r.set_target(10);
        for now in 1..=5 {
            r.step(now);
        }
        assert_eq!(r.actual(), 10);

        r.set_target(0);
        for now in 6..=10 {
            r.step(now);
        }
        assert_eq!(r.actual(), 5);
    }

    #[test]
    fn zero_limit_snaps_that_side_only() {
        let mut r = Ramper::new();
        r.set_max_increase(0, 0); // snap on
        r.set_max_decrease(1, 1); // fade off

        r.set_target(100);
        r.step(0);
        assert_eq!(r.actual(), 100);

        r.set_target(0);
        r.step(1);
        assert_eq!(r.actual(), 99);
    }

    #[test]
    fn zero_period_snaps() {
        let mut r = Ramper::new();
        r.set_max_increase(5, 0);
        r.set_target(42);
        r.step(7);
        assert_eq!(r.actual(), 42);
    }

    #[test]
    fn negative_magnitude_stored_as_absolute() {
        let mut r = Ramper::new();
        r.set_max_increase(-3, 1);
        r.set_target(9);
        r.step(1);
        assert_eq!(r.actual(), 3);
    }

    #[test]
    fn steps_across_millis_wraparound() {
        let mut r = Ramper::new();
        r.set_max_increase(1, 1);
        r.set_target(3);
        r.step(u32::MAX);
        assert_eq!(r.actual(), 1);
        r.step(0); // one wrapped millisecond later
        assert_eq!(r.actual(), 2);
        r.step(1);
        assert_eq!(r.actual(), 3);
    }

    #[test]
    fn full_i16_span_does_not_overflow() {
        let mut r = Ramper::new();
        r.set_max_increase(100, 1);
        r.set_max_decrease(100, 1);

        r.set_target(-30_000);
        r.snap_to_target(0);
        r.set_target(30_000);
        r.step(1);
        assert_eq!(r.actual(), -29_900);

        r.set_target(i16::MIN);
        r.snap_to_target(2);
        r.set_target(i16::MAX);
        r.step(3);
        assert_eq!(r.actual(), i16::MIN + 100);
    }

    #[test]
    fn snap_to_target_bypasses_rate_limit() {
        let mut r = Ramper::new();
        r.set_max_decrease(1, 1000);
        r.set_max_increase(1, 1000);
        r.set_target(50);
        r.snap_to_target(0);
        assert_eq!(r.actual(), 50);
        r.set_target(0);
        r.snap_to_target(0);
        assert_eq!(r.actual(), 0);
    }
}
