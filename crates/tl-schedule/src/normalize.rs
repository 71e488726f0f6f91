//! Range normalization and rounding.
//!
//! Raw weights at one intersection are mapped linearly onto
//! `[min_time, max_time]`:
//!
//! ```text
//! lo, hi     = min(w), max(w)          (lo = hi - 1 when all weights are equal)
//! normalized = min_time + (w - lo) * (max_time - min_time) / (hi - lo)
//! ```
//!
//! The quotient is computed exactly in `u128` and then truncated or rounded
//! half to even, so saturated weights near `u64::MAX` still land in range.
//! The smallest weight lands on `min_time`, the largest on `max_time`, and an
//! intersection whose weights are all equal puts every street at `max_time`.
//! Applying the mapping to its own output with the same range changes nothing.

use tl_core::{RoundingMode, SolverConfig};

use crate::{RawSchedules, StreetTally};

/// Target range and rounding policy for one run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimeRange {
    pub min_time: u64,
    pub max_time: u64,
    pub rounding: RoundingMode,
}

impl TimeRange {
    /// Map one raw weight into the range, given the intersection's bounds
    /// `lo <= weight <= hi`.  Exact in integers for any `u64` weights.
    #[inline]
    pub fn scale(&self, weight: u64, lo: u64, hi: u64) -> u64 {
        let span = u128::from(self.max_time.saturating_sub(self.min_time));
        // All weights equal: behave as if lo were hi - 1.
        let (offset, width) = if lo == hi { (1, 1) } else { (weight - lo, hi - lo) };
        let steps = self.rounding.divide(u128::from(offset) * span, u128::from(width));
        // offset <= width, so steps <= span.
        self.min_time + steps as u64
    }
}

impl From<&SolverConfig> for TimeRange {
    fn from(config: &SolverConfig) -> Self {
        Self {
            min_time: config.min_scheduled_time,
            max_time: config.max_scheduled_time,
            rounding: config.rounding,
        }
    }
}

/// Normalize one intersection's weights in place.
pub fn normalize_weights(weights: &mut StreetTally, range: &TimeRange) {
    let Some((lo, hi)) = weights.min_max() else {
        return;
    };
    for w in weights.values_mut() {
        *w = range.scale(*w, lo, hi);
    }
}

/// Normalize every scheduled intersection in place.
pub fn normalize_schedules(schedules: &mut RawSchedules, range: &TimeRange) {
    for (_, schedule) in schedules.iter_mut() {
        normalize_weights(&mut schedule.weights, range);
    }
}
