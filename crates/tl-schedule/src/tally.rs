//! `StreetTally`: a small insertion-ordered `StreetId → u64` map.
//!
//! Per-intersection pressure and raw schedules hold one entry per incoming
//! street, so a linear scan over a `Vec` beats hashing and, unlike a hash
//! map, gives a defined iteration order: the order in which streets were
//! first added.  That order is the tie-break of the final output.

use tl_core::StreetId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StreetTally {
    entries: Vec<(StreetId, u64)>,
}

impl StreetTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `street`, inserting it at the end if absent.
    pub fn add(&mut self, street: StreetId, amount: u64) {
        match self.get_mut(street) {
            Some(value) => *value += amount,
            None        => self.entries.push((street, amount)),
        }
    }

    pub fn get(&self, street: StreetId) -> Option<u64> {
        self.entries.iter().find(|(s, _)| *s == street).map(|&(_, v)| v)
    }

    pub fn get_mut(&mut self, street: StreetId) -> Option<&mut u64> {
        self.entries.iter_mut().find(|(s, _)| *s == street).map(|(_, v)| v)
    }

    pub fn contains(&self, street: StreetId) -> bool {
        self.entries.iter().any(|(s, _)| *s == street)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (StreetId, u64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut u64> + '_ {
        self.entries.iter_mut().map(|(_, v)| v)
    }

    /// `(min, max)` over all values, or `None` when empty.
    pub fn min_max(&self) -> Option<(u64, u64)> {
        self.entries.iter().fold(None, |acc, &(_, v)| match acc {
            None           => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the tally, returning entries sorted by value descending.
    /// Equal values keep insertion order.
    pub fn into_sorted_desc(self) -> Vec<(StreetId, u64)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl FromIterator<(StreetId, u64)> for StreetTally {
    fn from_iter<T: IntoIterator<Item = (StreetId, u64)>>(iter: T) -> Self {
        let mut tally = StreetTally::new();
        for (street, value) in iter {
            tally.add(street, value);
        }
        tally
    }
}
