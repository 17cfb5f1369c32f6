//! Elapsed-time primitives over a wrapping millisecond counter.
//!
//! The board clock is a free-running `u32` millisecond counter that wraps
//! roughly every 49.7 days. Every comparison here is a modular
//! `now.wrapping_sub(start)` — never a `now < start` range check — so a
//! wrap mid-span never produces a false expired/not-expired reading for
//! spans shorter than the wrap period.
//!
//! Timers do not own a clock; callers thread `now_ms` into each query the
//! same way the control loop threads elapsed time through every tick.

/// Count-down timer: armed with a fixed duration, fires once.
///
/// After `reset`, `running` is true until the duration has fully elapsed,
/// then `expired` stays true until the next `reset` or `stop`. Expiry is
/// strict: a 10 ms timer armed at t is still running at t+10 and expired
/// at t+11.
#[derive(Debug, Clone, Copy)]
pub struct CountDownTimer {
    duration_ms: u32,
    started_at: u32,
    armed: bool,
}

impl CountDownTimer {
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            started_at: 0,
            armed: false,
        }
    }

    /// Arm the timer to fire `duration_ms` from `now_ms`.
    pub fn reset(&mut self, now_ms: u32) {
        self.started_at = now_ms;
        self.armed = true;
    }

    /// Disarm. Both `running` and `expired` report false afterwards.
    pub fn stop(&mut self) {
        self.armed = false;
    }

    /// True between `reset` and expiry.
    pub fn running(&self, now_ms: u32) -> bool {
        self.armed && now_ms.wrapping_sub(self.started_at) <= self.duration_ms
    }

    /// True once the duration has fully elapsed; stays true until `reset`
    /// or `stop`.
    pub fn expired(&self, now_ms: u32) -> bool {
        self.armed && now_ms.wrapping_sub(self.started_at) > self.duration_ms
    }

    /// True strictly between `reset` and expiry. Used for short one-shot
    /// windows (sleep lockout, display window, anti-retrigger guards)
    /// where an expired timer must read as inactive rather than latched.
    pub fn active(&self, now_ms: u32) -> bool {
        self.running(now_ms)
    }
}

/// Count-up timer: armed at a reference instant, reports elapsed time.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountUpTimer {
    started_at: u32,
    armed: bool,
}

impl CountUpTimer {
    pub const fn new() -> Self {
        Self {
            started_at: 0,
            armed: false,
        }
    }

    /// Set the reference instant to `now_ms`.
    pub fn reset(&mut self, now_ms: u32) {
        self.started_at = now_ms;
        self.armed = true;
    }

    pub fn stop(&mut self) {
        self.armed = false;
    }

    /// True until `stop`.
    pub fn running(&self) -> bool {
        self.armed
    }

    /// Wrap-safe milliseconds since the last `reset`.
    pub fn elapsed(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.started_at)
    }
}
