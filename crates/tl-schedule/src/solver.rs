//! End-to-end solver: score → assign → upscale → normalize → sort.

use std::fmt;

use log::info;

use tl_core::{IntersectionId, SolverConfig, StreetId};
use tl_network::{Car, TrafficNetwork};

use crate::{
    ScheduleResult, TimeRange, assign_schedules, normalize_schedules, score_routes,
    upscale_top_streets,
};

/// Final green phases of one intersection, longest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntersectionSchedule {
    pub intersection: IntersectionId,
    /// `(street, duration)` sorted by duration descending; equal durations
    /// keep assignment order.
    pub entries: Vec<(StreetId, u64)>,
}

/// Counters collected during one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    pub cars:             usize,
    pub scored_cars:      usize,
    pub single_incoming:  usize,
    pub pressure_based:   usize,
    pub round_robin:      usize,
    pub upscaled_streets: usize,
}

impl fmt::Display for SolveStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} cars scored; schedules: {} single, {} pressure, {} round-robin; {} upscaled",
            self.scored_cars,
            self.cars,
            self.single_incoming,
            self.pressure_based,
            self.round_robin,
            self.upscaled_streets,
        )
    }
}

/// Output of [`solve`].
#[derive(Clone, Debug)]
pub struct SolvedSchedules {
    /// One entry per intersection with incoming streets, ascending by ID.
    pub schedules: Vec<IntersectionSchedule>,
    pub stats:     SolveStats,
}

impl SolvedSchedules {
    pub fn get(&self, node: IntersectionId) -> Option<&IntersectionSchedule> {
        self.schedules
            .binary_search_by_key(&node, |s| s.intersection)
            .ok()
            .map(|i| &self.schedules[i])
    }
}

/// Compute the schedule of every intersection in `network` for `cars`.
///
/// Fails only when `config` is invalid.  Each stage consumes the complete
/// output of the previous one, so the run is strictly sequential.
pub fn solve(
    network: &TrafficNetwork,
    cars:    &[Car],
    config:  &SolverConfig,
) -> ScheduleResult<SolvedSchedules> {
    config.validate()?;
    info!("solving {} intersections / {} streets / {} cars ({config})",
        network.intersection_count(), network.street_count(), cars.len());

    let pressure = score_routes(network, cars);
    let mut raw = assign_schedules(network, &pressure);
    let upscaled_streets = upscale_top_streets(network, &pressure, &mut raw, config);
    normalize_schedules(&mut raw, &TimeRange::from(config));

    let (single_incoming, pressure_based, round_robin) = raw.rule_counts();
    let stats = SolveStats {
        cars: cars.len(),
        scored_cars: pressure.scored_cars,
        single_incoming,
        pressure_based,
        round_robin,
        upscaled_streets,
    };

    let schedules = raw
        .iter()
        .map(|(intersection, s)| IntersectionSchedule {
            intersection,
            entries: s.weights.clone().into_sorted_desc(),
        })
        .collect();

    Ok(SolvedSchedules { schedules, stats })
}
