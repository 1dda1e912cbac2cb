//! Simulation time model.
//!
//! Time is a whole number of simulated minutes since the start of the run.
//! Integer minutes keep all scheduling arithmetic exact, so ties between
//! arrivals and station free-at times compare reliably.

use std::fmt;

/// An absolute simulated minute, or a duration in minutes.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minute(pub u64);

impl Minute {
    pub const ZERO: Minute = Minute(0);

    /// `self + minutes`, or `None` past the end of the representable clock.
    #[inline]
    pub fn checked_add(self, minutes: u64) -> Option<Minute> {
        self.0.checked_add(minutes).map(Minute)
    }
}

impl std::ops::Sub for Minute {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Minute) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Minute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'", self.0)
    }
}
