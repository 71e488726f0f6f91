//! Street graph representation and builder.
//!
//! # Data layout
//!
//! Street attributes are stored as parallel arrays indexed by `StreetId`
//! (input order).  Per-intersection adjacency uses **Compressed Sparse Row**
//! index arrays.  Given an `IntersectionId n`, its incoming streets are:
//!
//! ```text
//! in_streets[ in_start[n] .. in_start[n+1] ]
//! ```
//!
//! and likewise `out_streets` / `out_start` for outgoing streets.  Both index
//! arrays are built with a stable sort, so within one intersection streets
//! keep their input order.  That order is the round-robin fallback order and
//! therefore part of the observable output.

use rustc_hash::FxHashMap;

use tl_core::{IntersectionId, StreetId};

use crate::{NetworkError, NetworkResult};

// ── TrafficNetwork ────────────────────────────────────────────────────────────

/// Directed street graph with CSR in/out adjacency and a name index.
///
/// Street arrays are `pub` for direct indexed access.  Do not construct
/// directly; use [`TrafficNetworkBuilder`].
#[derive(Debug)]
pub struct TrafficNetwork {
    intersection_count: usize,

    // ── Street data (indexed by StreetId) ─────────────────────────────────
    /// Unique human-readable name of each street.
    pub street_name: Vec<String>,

    /// Intersection each street leaves from.
    pub street_from: Vec<IntersectionId>,

    /// Intersection each street leads into.
    pub street_to: Vec<IntersectionId>,

    /// Time units needed to drive the full street.
    pub street_length: Vec<u32>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    in_start:    Vec<u32>,
    in_streets:  Vec<StreetId>,
    out_start:   Vec<u32>,
    out_streets: Vec<StreetId>,

    by_name: FxHashMap<String, StreetId>,
}

impl TrafficNetwork {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn intersection_count(&self) -> usize {
        self.intersection_count
    }

    pub fn street_count(&self) -> usize {
        self.street_name.len()
    }

    /// Iterator over every intersection ID in ascending order.
    pub fn intersections(&self) -> impl Iterator<Item = IntersectionId> + use<> {
        (0..self.intersection_count as u32).map(IntersectionId)
    }

    // ── Street lookups ────────────────────────────────────────────────────

    #[inline]
    pub fn name(&self, street: StreetId) -> &str {
        &self.street_name[street.index()]
    }

    #[inline]
    pub fn target(&self, street: StreetId) -> IntersectionId {
        self.street_to[street.index()]
    }

    #[inline]
    pub fn source(&self, street: StreetId) -> IntersectionId {
        self.street_from[street.index()]
    }

    /// Resolve a street by its unique name.
    pub fn street_by_name(&self, name: &str) -> Option<StreetId> {
        self.by_name.get(name).copied()
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// Streets leading into `node`, in input order.
    #[inline]
    pub fn incoming(&self, node: IntersectionId) -> &[StreetId] {
        let start = self.in_start[node.index()] as usize;
        let end   = self.in_start[node.index() + 1] as usize;
        &self.in_streets[start..end]
    }

    /// Streets leaving `node`, in input order.
    #[inline]
    pub fn outgoing(&self, node: IntersectionId) -> &[StreetId] {
        let start = self.out_start[node.index()] as usize;
        let end   = self.out_start[node.index() + 1] as usize;
        &self.out_streets[start..end]
    }

    #[inline]
    pub fn in_degree(&self, node: IntersectionId) -> usize {
        self.incoming(node).len()
    }

    #[inline]
    pub fn out_degree(&self, node: IntersectionId) -> usize {
        self.outgoing(node).len()
    }
}

// ── TrafficNetworkBuilder ─────────────────────────────────────────────────────

/// Construct a [`TrafficNetwork`] street by street, then call
/// [`build`](Self::build).
///
/// # Example
///
/// ```
/// use tl_core::IntersectionId;
/// use tl_network::TrafficNetworkBuilder;
///
/// let mut b = TrafficNetworkBuilder::new(2);
/// b.add_street(IntersectionId(0), IntersectionId(1), "rue-de-londres", 1).unwrap();
/// let net = b.build().unwrap();
/// assert_eq!(net.in_degree(IntersectionId(1)), 1);
/// ```
pub struct TrafficNetworkBuilder {
    intersection_count: usize,
    street_name:        Vec<String>,
    street_from:        Vec<IntersectionId>,
    street_to:          Vec<IntersectionId>,
    street_length:      Vec<u32>,
    by_name:            FxHashMap<String, StreetId>,
}

impl TrafficNetworkBuilder {
    pub fn new(intersection_count: usize) -> Self {
        Self::with_capacity(intersection_count, 0)
    }

    /// Pre-allocate for the street count announced in the input header.
    pub fn with_capacity(intersection_count: usize, streets: usize) -> Self {
        let mut by_name = FxHashMap::default();
        by_name.reserve(streets);
        Self {
            intersection_count,
            street_name:   Vec::with_capacity(streets),
            street_from:   Vec::with_capacity(streets),
            street_to:     Vec::with_capacity(streets),
            street_length: Vec::with_capacity(streets),
            by_name,
        }
    }

    /// Add a directed street and return its `StreetId` (sequential from 0).
    ///
    /// Fails if either endpoint is outside `[0, intersection_count)` or the
    /// name is already taken.
    pub fn add_street(
        &mut self,
        from:   IntersectionId,
        to:     IntersectionId,
        name:   &str,
        length: u32,
    ) -> NetworkResult<StreetId> {
        for id in [from, to] {
            if id.index() >= self.intersection_count {
                return Err(NetworkError::IntersectionOutOfRange {
                    street: name.to_owned(),
                    id,
                    count:  self.intersection_count,
                });
            }
        }
        if self.by_name.contains_key(name) {
            return Err(NetworkError::DuplicateStreet(name.to_owned()));
        }

        let id = StreetId(self.street_name.len() as u32);
        self.by_name.insert(name.to_owned(), id);
        self.street_name.push(name.to_owned());
        self.street_from.push(from);
        self.street_to.push(to);
        self.street_length.push(length);
        Ok(id)
    }

    pub fn street_count(&self) -> usize { self.street_name.len() }

    /// Consume the builder and produce a [`TrafficNetwork`].
    pub fn build(self) -> NetworkResult<TrafficNetwork> {
        if self.intersection_count == 0 {
            return Err(NetworkError::NoIntersections);
        }
        if self.street_name.is_empty() {
            return Err(NetworkError::NoStreets);
        }

        let (in_start, in_streets)   = csr_by(&self.street_to, self.intersection_count);
        let (out_start, out_streets) = csr_by(&self.street_from, self.intersection_count);

        Ok(TrafficNetwork {
            intersection_count: self.intersection_count,
            street_name:        self.street_name,
            street_from:        self.street_from,
            street_to:          self.street_to,
            street_length:      self.street_length,
            in_start,
            in_streets,
            out_start,
            out_streets,
            by_name:            self.by_name,
        })
    }
}

/// Group street IDs by `key[street]` into CSR form, keeping input order
/// within each group.
fn csr_by(key: &[IntersectionId], node_count: usize) -> (Vec<u32>, Vec<StreetId>) {
    let mut streets: Vec<StreetId> = (0..key.len() as u32).map(StreetId).collect();
    streets.sort_by_key(|s| key[s.index()]);

    let mut start = vec![0u32; node_count + 1];
    for node in key {
        start[node.index() + 1] += 1;
    }
    for i in 1..=node_count {
        start[i] += start[i - 1];
    }
    debug_assert_eq!(start[node_count] as usize, key.len());

    (start, streets)
}
