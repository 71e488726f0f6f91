//! `tl-network`: the static street graph and the car routes driven over it.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `TrafficNetwork` (CSR in/out adjacency), `TrafficNetworkBuilder` |
//! | [`car`]     | `Car` (start intersection + street route)                   |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! The graph is built once from input and never mutated afterwards.  Street
//! IDs are input order; streets are resolved by name through an `FxHashMap`.

pub mod car;
pub mod error;
pub mod network;

#[cfg(test)]
mod tests;

pub use car::Car;
pub use error::{NetworkError, NetworkResult};
pub use network::{TrafficNetwork, TrafficNetworkBuilder};
