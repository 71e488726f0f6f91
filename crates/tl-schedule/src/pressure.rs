//! Route pressure scoring.
//!
//! One pass over every car route fills two accumulators:
//!
//! - **local pressure**: per intersection, how many route legs arrive through
//!   each incoming street;
//! - **global score**: per street, a position-weighted importance summed over
//!   all routes.  Early legs of a route weigh more than late ones, and the
//!   first leg gets a flat bonus on top.
//!
//! ```text
//! n     = route.len() - 1          (last street is the destination leg)
//! score = 2 * (n - p) / n + 1      (integer division, p = 0-based position)
//!       + FIRST_LEG_BONUS          (p == 0 only)
//! ```

use log::{debug, info, log_enabled, Level};

use tl_core::StreetId;
use tl_network::{Car, TrafficNetwork};

use crate::StreetTally;

/// Extra global score for the first street of a route.
pub const FIRST_LEG_BONUS: u64 = 3;

/// Global score contribution of the leg at position `p` out of `n` scored
/// legs.
#[inline]
pub fn leg_score(p: usize, n: usize) -> u64 {
    debug_assert!(p < n);
    let decay = (2 * (n - p) / n) as u64 + 1;
    if p == 0 { decay + FIRST_LEG_BONUS } else { decay }
}

// ── GlobalScores ──────────────────────────────────────────────────────────────

/// Street importance summed across all routes.
///
/// Scores are indexed by `StreetId`; `ranked()` breaks ties by the order in
/// which streets were first scored.
#[derive(Clone, Debug)]
pub struct GlobalScores {
    score:      Vec<u64>,
    first_seen: Vec<StreetId>,
}

impl GlobalScores {
    pub fn new(street_count: usize) -> Self {
        Self { score: vec![0; street_count], first_seen: Vec::new() }
    }

    pub fn add(&mut self, street: StreetId, amount: u64) {
        let slot = &mut self.score[street.index()];
        if *slot == 0 {
            self.first_seen.push(street);
        }
        *slot += amount;
    }

    #[inline]
    pub fn score(&self, street: StreetId) -> u64 {
        self.score[street.index()]
    }

    /// Number of streets with a nonzero score.
    pub fn scored_count(&self) -> usize {
        self.first_seen.len()
    }

    /// Scored streets, highest score first.
    pub fn ranked(&self) -> Vec<(StreetId, u64)> {
        let mut ranked: Vec<(StreetId, u64)> =
            self.first_seen.iter().map(|&s| (s, self.score(s))).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

// ── RoutePressure ─────────────────────────────────────────────────────────────

/// Both accumulators produced by [`score_routes`].  Owned by one solver run.
#[derive(Clone, Debug)]
pub struct RoutePressure {
    /// Local pressure per intersection, indexed by `IntersectionId`.
    pub local: Vec<StreetTally>,
    pub global: GlobalScores,
    /// Cars whose route contributed at least one scored leg.
    pub scored_cars: usize,
}

impl RoutePressure {
    pub fn new(network: &TrafficNetwork) -> Self {
        Self {
            local:       vec![StreetTally::new(); network.intersection_count()],
            global:      GlobalScores::new(network.street_count()),
            scored_cars: 0,
        }
    }

    /// Score one car's route.  Routes of length 1 contribute nothing.
    pub fn add_route(&mut self, network: &TrafficNetwork, car: &Car) {
        let legs = car.scored_legs();
        let n = legs.len();
        if n == 0 {
            return;
        }

        for (p, &street) in legs.iter().enumerate() {
            self.local[network.target(street).index()].add(street, 1);
            self.global.add(street, leg_score(p, n));
        }
        self.scored_cars += 1;
    }
}

/// Score every route against `network`.
pub fn score_routes(network: &TrafficNetwork, cars: &[Car]) -> RoutePressure {
    let mut pressure = RoutePressure::new(network);
    for car in cars {
        pressure.add_route(network, car);
    }

    let pressured = pressure.local.iter().filter(|t| !t.is_empty()).count();
    info!(
        "scored {} of {} cars: {} streets carry traffic into {} intersections",
        pressure.scored_cars,
        cars.len(),
        pressure.global.scored_count(),
        pressured,
    );
    if log_enabled!(Level::Debug) {
        if let Some(&(street, score)) = pressure.global.ranked().first() {
            debug!("top street {:?} with score {score}", network.name(street));
        }
    }

    pressure
}
