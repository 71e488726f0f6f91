//! Network-subsystem error type.

use thiserror::Error;

use tl_core::{CarId, IntersectionId};

/// Errors produced while building the graph or resolving routes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("network must contain at least one intersection")]
    NoIntersections,

    #[error("network must contain at least one street")]
    NoStreets,

    #[error("street {street:?} references {id}, but the network has {count} intersections")]
    IntersectionOutOfRange {
        street: String,
        id:     IntersectionId,
        count:  usize,
    },

    #[error("street name {0:?} is not unique")]
    DuplicateStreet(String),

    #[error("route references unknown street {0:?}")]
    UnknownStreet(String),

    #[error("{0} has an empty route")]
    EmptyRoute(CarId),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
