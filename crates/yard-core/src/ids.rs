//! Strongly typed identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they sort and key maps without
//! ceremony.  Vehicle ids are 0-based input indices; station ids are 1-based
//! (`1..=N`) and never reassigned during a run.

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
    /// A vehicle's position in the arrival input.  Output is ordered by it.
    pub struct VehicleId(u32);
}

typed_id! {
    /// A charging station, `1..=N`.
    pub struct StationId(u32);
}

impl StationId {
    /// Slot of this station in a dense `Vec` of length N.
    #[inline(always)]
    pub fn slot(self) -> usize {
        (self.0 as usize).wrapping_sub(1)
    }
}

/// Yard label, 1-based and zero-padded: `VehicleId(0)` → `TUG-01`.
impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TUG-{:02}", self.0 as u64 + 1)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CS-{}", self.0)
    }
}
