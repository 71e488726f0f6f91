//! Strongly typed identifier wrappers.
//!
//! Intersections, streets and cars are all addressed by their position in the
//! input file, so every ID is a dense index.  The inner integer is `pub` for
//! direct indexing, but callers should prefer `.index()`.
//!
//! There is no "invalid" sentinel and no `Default`: every ID is produced from
//! a validated input position, and absence is spelled `Option<Id>`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an intersection, in `[0, intersection_count)`.
    pub struct IntersectionId(u32);
}

typed_id! {
    /// Index of a directed street in input order.
    pub struct StreetId(u32);
}

typed_id! {
    /// Index of a car in input order.
    pub struct CarId(u32);
}
