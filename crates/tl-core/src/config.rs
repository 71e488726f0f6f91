//! Planner configuration.
//!
//! A [`SolverConfig`] is constant for one run.  The CLI builds one from its
//! flags, or picks one per input file from a JSON presets table when the
//! `serde` feature is enabled.

use std::cmp::Ordering;
use std::fmt;

use crate::{CoreError, CoreResult};

// ── RoundingMode ──────────────────────────────────────────────────────────────

/// How a normalized (fractional) duration becomes an integer.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoundingMode {
    /// Truncate toward zero.
    #[default]
    Truncate,
    /// Round to the nearest integer, ties to even.
    Nearest,
}

impl RoundingMode {
    /// Round the exact quotient `num / den` to an integer.  `den` must be
    /// non-zero.
    #[inline]
    pub fn divide(self, num: u128, den: u128) -> u128 {
        let (q, r) = (num / den, num % den);
        match self {
            RoundingMode::Truncate => q,
            RoundingMode::Nearest  => match (2 * r).cmp(&den) {
                Ordering::Less    => q,
                Ordering::Greater => q + 1,
                Ordering::Equal   => q + (q & 1),
            },
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingMode::Truncate => f.write_str("truncate"),
            RoundingMode::Nearest  => f.write_str("nearest"),
        }
    }
}

// ── SolverConfig ──────────────────────────────────────────────────────────────

/// Tunables of the scheduling heuristic.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Shortest green phase handed out.  Must be `< max_scheduled_time`.
    pub min_scheduled_time: u64,

    /// Longest green phase handed out.
    pub max_scheduled_time: u64,

    /// The top `street_count / upscale_fraction` streets by global score are
    /// boosted.  `0` disables the boost.
    pub upscale_fraction: u64,

    /// Multiplier applied to the raw weight of boosted streets.
    pub upscale_factor: u64,

    pub rounding: RoundingMode,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            min_scheduled_time: 1,
            max_scheduled_time: 2,
            upscale_fraction:   10,
            upscale_factor:     2,
            rounding:           RoundingMode::Truncate,
        }
    }
}

impl SolverConfig {
    /// Config with the given duration range and default upscaling.
    pub fn with_range(min_scheduled_time: u64, max_scheduled_time: u64) -> Self {
        Self {
            min_scheduled_time,
            max_scheduled_time,
            ..Self::default()
        }
    }

    /// Reject configurations the normalizer cannot honor.
    pub fn validate(&self) -> CoreResult<()> {
        if self.min_scheduled_time >= self.max_scheduled_time {
            return Err(CoreError::EmptyTimeRange {
                min: self.min_scheduled_time,
                max: self.max_scheduled_time,
            });
        }
        Ok(())
    }

    /// Number of streets the upscaler selects from a network of
    /// `street_count` streets.
    #[inline]
    pub fn upscaled_street_count(&self, street_count: usize) -> usize {
        if self.upscale_fraction == 0 {
            return 0;
        }
        (street_count as u64 / self.upscale_fraction) as usize
    }
}

impl fmt::Display for SolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "range [{}, {}], top 1/{} x{}, {}",
            self.min_scheduled_time,
            self.max_scheduled_time,
            self.upscale_fraction,
            self.upscale_factor,
            self.rounding,
        )
    }
}
