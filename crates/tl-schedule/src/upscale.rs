//! Top-fraction upscaling.
//!
//! The `street_count / upscale_fraction` streets with the highest global
//! score get their raw weight at their target intersection multiplied by
//! `upscale_factor`.  Runs between assignment and normalization.

use log::{info, trace};

use tl_core::SolverConfig;
use tl_network::TrafficNetwork;

use crate::{RawSchedules, RoutePressure};

/// Boost the top-ranked streets in place.  Returns how many entries were
/// boosted.
pub fn upscale_top_streets(
    network:   &TrafficNetwork,
    pressure:  &RoutePressure,
    schedules: &mut RawSchedules,
    config:    &SolverConfig,
) -> usize {
    let k = config.upscaled_street_count(network.street_count());
    if k == 0 {
        return 0;
    }

    let mut boosted = 0;
    for (street, score) in pressure.global.ranked().into_iter().take(k) {
        if score == 0 {
            continue;
        }

        let weight = schedules
            .get_mut(network.target(street))
            .and_then(|s| s.weights.get_mut(street));
        match weight {
            Some(w) => {
                *w = w.saturating_mul(config.upscale_factor);
                boosted += 1;
            }
            None => trace!("{:?} has no schedule entry to upscale", network.name(street)),
        }
    }

    info!("upscaled {boosted} of the top {k} streets by x{}", config.upscale_factor);
    boosted
}
