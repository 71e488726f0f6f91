//! Car routes.

use tl_core::{CarId, IntersectionId, StreetId};

use crate::{NetworkError, NetworkResult, TrafficNetwork};

/// One car: where it starts and the streets it will drive, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Car {
    /// Source intersection of the first street.  Informational only.
    pub start: IntersectionId,
    pub route: Vec<StreetId>,
}

impl Car {
    /// Resolve a route given as street names against `network`.
    ///
    /// Fails on an empty route or on any name the network does not know.
    pub fn from_names<'a, I>(id: CarId, network: &TrafficNetwork, names: I) -> NetworkResult<Car>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let route = names
            .into_iter()
            .map(|name| {
                network
                    .street_by_name(name)
                    .ok_or_else(|| NetworkError::UnknownStreet(name.to_owned()))
            })
            .collect::<NetworkResult<Vec<StreetId>>>()?;

        let Some(&first) = route.first() else {
            return Err(NetworkError::EmptyRoute(id));
        };

        Ok(Car { start: network.source(first), route })
    }

    /// The streets that put the car in front of a traffic light: every street
    /// but the last, which is where the car's trip ends.
    #[inline]
    pub fn scored_legs(&self) -> &[StreetId] {
        match self.route.split_last() {
            Some((_, legs)) => legs,
            None => &[],
        }
    }
}
