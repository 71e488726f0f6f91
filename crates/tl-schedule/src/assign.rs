//! Raw (unnormalized) schedule assignment.
//!
//! Each intersection with at least one incoming street gets a
//! [`StreetTally`] of raw weights, chosen by the first matching rule:
//!
//! | Rule                         | Raw weights                              |
//! |------------------------------|------------------------------------------|
//! | [`AssignRule::SingleIncoming`] | the lone street gets `1`               |
//! | [`AssignRule::Pressure`]     | each pressured street gets its count     |
//! | [`AssignRule::RoundRobin`]   | every incoming street gets `1`           |
//!
//! Under `Pressure`, incoming streets that no route ever drove through get no
//! entry at all, so they never turn green.

use log::{debug, info};

use tl_core::IntersectionId;
use tl_network::TrafficNetwork;

use crate::{RoutePressure, StreetTally};

/// Which rule produced an intersection's raw schedule.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AssignRule {
    SingleIncoming,
    Pressure,
    RoundRobin,
}

/// One intersection's raw schedule and the rule that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawSchedule {
    pub rule:    AssignRule,
    pub weights: StreetTally,
}

/// Raw schedules for the whole network, indexed by `IntersectionId`.
/// `None` for intersections without incoming streets.
#[derive(Clone, Debug, Default)]
pub struct RawSchedules {
    schedules: Vec<Option<RawSchedule>>,
}

impl RawSchedules {
    #[inline]
    pub fn get(&self, node: IntersectionId) -> Option<&RawSchedule> {
        self.schedules.get(node.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, node: IntersectionId) -> Option<&mut RawSchedule> {
        self.schedules.get_mut(node.index()).and_then(Option::as_mut)
    }

    /// Scheduled intersections in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = (IntersectionId, &RawSchedule)> + '_ {
        self.schedules
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|s| (IntersectionId(i as u32), s)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (IntersectionId, &mut RawSchedule)> + '_ {
        self.schedules
            .iter_mut()
            .enumerate()
            .filter_map(|(i, s)| s.as_mut().map(|s| (IntersectionId(i as u32), s)))
    }

    /// Number of intersections with a schedule.
    pub fn len(&self) -> usize {
        self.schedules.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many schedules each rule produced: `(single, pressure, round_robin)`.
    pub fn rule_counts(&self) -> (usize, usize, usize) {
        self.iter().fold((0, 0, 0), |(single, pressure, rr), (_, s)| match s.rule {
            AssignRule::SingleIncoming => (single + 1, pressure, rr),
            AssignRule::Pressure       => (single, pressure + 1, rr),
            AssignRule::RoundRobin     => (single, pressure, rr + 1),
        })
    }
}

/// Derive the raw schedule of a single intersection.
pub fn assign_intersection(
    network:  &TrafficNetwork,
    pressure: &RoutePressure,
    node:     IntersectionId,
) -> Option<RawSchedule> {
    let incoming = network.incoming(node);
    let local = &pressure.local[node.index()];

    match incoming {
        [] => None,
        [only] => Some(RawSchedule {
            rule:    AssignRule::SingleIncoming,
            weights: std::iter::once((*only, 1)).collect(),
        }),
        _ if !local.is_empty() => Some(RawSchedule {
            rule:    AssignRule::Pressure,
            weights: local.clone(),
        }),
        _ => Some(RawSchedule {
            rule:    AssignRule::RoundRobin,
            weights: incoming.iter().map(|&s| (s, 1)).collect(),
        }),
    }
}

/// Derive raw schedules for every intersection in `network`.
pub fn assign_schedules(network: &TrafficNetwork, pressure: &RoutePressure) -> RawSchedules {
    let schedules: Vec<Option<RawSchedule>> = network
        .intersections()
        .map(|node| assign_intersection(network, pressure, node))
        .collect();
    let raw = RawSchedules { schedules };

    let (single, by_pressure, round_robin) = raw.rule_counts();
    info!(
        "assigned {} schedules: {single} single-incoming, {by_pressure} by pressure, \
         {round_robin} round-robin",
        raw.len(),
    );

    let starved: usize = raw
        .iter()
        .map(|(node, s)| network.in_degree(node) - s.weights.len())
        .sum();
    if starved > 0 {
        debug!("{starved} incoming streets carry no traffic and get no green phase");
    }

    raw
}
