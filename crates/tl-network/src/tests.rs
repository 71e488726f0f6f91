//! Unit tests for tl-network.
//!
//! All tests use a hand-crafted network.

#[cfg(test)]
mod helpers {
    use tl_core::IntersectionId;

    use crate::{TrafficNetwork, TrafficNetworkBuilder};

    /// The four-intersection example network from the problem statement.
    ///
    /// ```text
    ///   2 --rue-de-londres--> 0 --rue-d-amsterdam--> 1
    ///   2 --rue-de-rome-----> 3 --rue-d-athenes----> 1
    ///   1 --rue-de-moscou---> 2
    /// ```
    pub fn paris() -> TrafficNetwork {
        let mut b = TrafficNetworkBuilder::new(4);
        let i = IntersectionId;
        b.add_street(i(2), i(0), "rue-de-londres", 1).unwrap();
        b.add_street(i(0), i(1), "rue-d-amsterdam", 1).unwrap();
        b.add_street(i(3), i(1), "rue-d-athenes", 1).unwrap();
        b.add_street(i(2), i(3), "rue-de-rome", 2).unwrap();
        b.add_street(i(1), i(2), "rue-de-moscou", 3).unwrap();
        b.build().unwrap()
    }
}

// ── Builder & network structure ───────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use tl_core::{IntersectionId, StreetId};

    use crate::{NetworkError, TrafficNetworkBuilder};

    #[test]
    fn counts() {
        let net = super::helpers::paris();
        assert_eq!(net.intersection_count(), 4);
        assert_eq!(net.street_count(), 5);
        assert_eq!(net.intersections().count(), 4);
    }

    #[test]
    fn incoming_keeps_input_order() {
        let net = super::helpers::paris();
        let names: Vec<&str> = net
            .incoming(IntersectionId(1))
            .iter()
            .map(|&s| net.name(s))
            .collect();
        assert_eq!(names, vec!["rue-d-amsterdam", "rue-d-athenes"]);
    }

    #[test]
    fn degrees() {
        let net = super::helpers::paris();
        assert_eq!(net.in_degree(IntersectionId(0)), 1);
        assert_eq!(net.in_degree(IntersectionId(1)), 2);
        assert_eq!(net.out_degree(IntersectionId(2)), 2);
        assert_eq!(net.out_degree(IntersectionId(3)), 1);
    }

    #[test]
    fn every_incoming_street_targets_its_intersection() {
        let net = super::helpers::paris();
        for node in net.intersections() {
            for &s in net.incoming(node) {
                assert_eq!(net.target(s), node);
            }
            for &s in net.outgoing(node) {
                assert_eq!(net.source(s), node);
            }
        }
    }

    #[test]
    fn lookup_by_name() {
        let net = super::helpers::paris();
        assert_eq!(net.street_by_name("rue-de-rome"), Some(StreetId(3)));
        assert_eq!(net.street_by_name("champs-elysees"), None);
        assert_eq!(net.street_length[3], 2);
    }

    #[test]
    fn isolated_intersection_has_no_streets() {
        let mut b = TrafficNetworkBuilder::new(3);
        b.add_street(IntersectionId(0), IntersectionId(1), "a", 1).unwrap();
        let net = b.build().unwrap();
        assert!(net.incoming(IntersectionId(2)).is_empty());
        assert!(net.outgoing(IntersectionId(2)).is_empty());
        assert!(net.incoming(IntersectionId(0)).is_empty());
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut b = TrafficNetworkBuilder::new(2);
        b.add_street(IntersectionId(0), IntersectionId(1), "a", 1).unwrap();
        let err = b.add_street(IntersectionId(1), IntersectionId(0), "a", 1).unwrap_err();
        assert_eq!(err, NetworkError::DuplicateStreet("a".into()));
    }

    #[test]
    fn endpoint_out_of_range_rejected() {
        let mut b = TrafficNetworkBuilder::new(2);
        let err = b.add_street(IntersectionId(0), IntersectionId(2), "a", 1).unwrap_err();
        assert!(matches!(err, NetworkError::IntersectionOutOfRange { count: 2, .. }));
        assert_eq!(b.street_count(), 0);
    }

    #[test]
    fn empty_networks_rejected() {
        assert_eq!(
            TrafficNetworkBuilder::new(0).build().err(),
            Some(NetworkError::NoIntersections)
        );
        assert_eq!(
            TrafficNetworkBuilder::new(3).build().err(),
            Some(NetworkError::NoStreets)
        );
    }
}

// ── Cars ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod car {
    use tl_core::{CarId, IntersectionId, StreetId};

    use crate::{Car, NetworkError};

    #[test]
    fn resolves_names_and_start() {
        let net = super::helpers::paris();
        let car = Car::from_names(
            CarId(0),
            &net,
            ["rue-de-londres", "rue-d-amsterdam", "rue-de-moscou", "rue-de-rome"],
        )
        .unwrap();
        assert_eq!(car.start, IntersectionId(2));
        assert_eq!(car.route, vec![StreetId(0), StreetId(1), StreetId(4), StreetId(3)]);
        assert_eq!(car.scored_legs(), &[StreetId(0), StreetId(1), StreetId(4)]);
    }

    #[test]
    fn single_street_route_has_no_scored_legs() {
        let net = super::helpers::paris();
        let car = Car::from_names(CarId(0), &net, ["rue-de-rome"]).unwrap();
        assert!(car.scored_legs().is_empty());
    }

    #[test]
    fn unknown_street_rejected() {
        let net = super::helpers::paris();
        let err = Car::from_names(CarId(3), &net, ["rue-de-rome", "rue-de-rivoli"]).unwrap_err();
        assert_eq!(err, NetworkError::UnknownStreet("rue-de-rivoli".into()));
    }

    #[test]
    fn empty_route_rejected() {
        let net = super::helpers::paris();
        let err = Car::from_names(CarId(5), &net, std::iter::empty()).unwrap_err();
        assert_eq!(err, NetworkError::EmptyRoute(CarId(5)));
    }
}
