//! Signal-conditioning filters for battery-voltage sensing.
//!
//! The raw ADC-derived battery reading is noisy and occasionally spikes
//! when the white LED switches. Two filters run in series: a fixed-window
//! median filter knocks out spikes, and an exponential moving average
//! smooths the remainder. Both are rate-limited so the filter cadence is
//! decoupled from the control-loop cadence.

/// Fixed-window median filter over the last `N` samples (`N` odd).
///
/// `run` pulls at most one sample per minimum interval, pushes it into a
/// ring (oldest evicted), and recomputes the median by sort-and-pick-middle.
#[derive(Debug, Clone)]
pub struct MedianFilter<const N: usize> {
    ring: [i32; N],
    next_slot: usize,
    filled: usize,
    median: i32,
    min_run_interval_ms: u32,
    last_run: Option<u32>,
}

impl<const N: usize> MedianFilter<N> {
    pub fn new() -> Self {
        const { assert!(N % 2 == 1, "median window must be odd") };
        Self {
            ring: [0; N],
            next_slot: 0,
            filled: 0,
            median: 0,
            min_run_interval_ms: 0,
            last_run: None,
        }
    }

    /// Samples accepted less than this many ms apart are ignored.
    pub fn set_min_run_interval(&mut self, interval_ms: u32) {
        self.min_run_interval_ms = interval_ms;
    }

    /// Pull one sample from `source` if the minimum interval has elapsed;
    /// otherwise a no-op. `source` is only invoked when the sample is
    /// accepted.
    pub fn run(&mut self, now_ms: u32, source: impl FnOnce() -> i32) {
        if let Some(last) = self.last_run {
            if now_ms.wrapping_sub(last) < self.min_run_interval_ms {
                return;
            }
        }
        self.last_run = Some(now_ms);

        self.ring[self.next_slot] = source();
        self.next_slot = (self.next_slot + 1) % N;
        if self.filled < N {
            self.filled += 1;
        }

        let mut sorted = self.ring;
        let window = &mut sorted[..self.filled];
        window.sort_unstable();
        self.median = window[self.filled / 2];
    }

    /// Last computed median. Zero until the first accepted sample; callers
    /// that need a settled value pre-fill the ring by running N times.
    pub fn filtered(&self) -> i32 {
        self.median
    }
}

impl<const N: usize> Default for MedianFilter<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Exponential moving average with an 8-bit fixed-point weight.
///
/// Update rule (integer arithmetic, truncating toward zero):
/// `filtered += (sample - filtered) * alpha / 256`
#[derive(Debug, Clone)]
pub struct EmaFilter {
    filtered: i32,
    alpha: u8,
    min_run_interval_ms: u32,
    last_run: Option<u32>,
}

impl EmaFilter {
    pub fn new(alpha: u8) -> Self {
        Self {
            filtered: 0,
            alpha,
            min_run_interval_ms: 0,
            last_run: None,
        }
    }

    /// Seed the filtered value directly, skipping the cold-start ramp.
    pub fn initialize(&mut self, value: i32) {
        self.filtered = value;
    }

    pub fn set_min_run_interval(&mut self, interval_ms: u32) {
        self.min_run_interval_ms = interval_ms;
    }

    /// Fold one sample in if the minimum interval has elapsed; otherwise a
    /// no-op.
    pub fn run(&mut self, now_ms: u32, sample: i32) {
        if let Some(last) = self.last_run {
            if now_ms.wrapping_sub(last) < self.min_run_interval_ms {
                return;
            }
        }
        self.last_run = Some(now_ms);
        self.filtered += (sample - self.filtered) * i32::from(self.alpha) / 256;
    }

    pub fn filtered(&self) -> i32 {
        self.filtered
    }
}
