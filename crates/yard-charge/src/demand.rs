//! Battery level → minutes on a station.

use yard_core::config::DEFAULT_CHARGE_RATE_PCT_PER_MIN;
use yard_core::{YardError, YardResult};

/// Linear charge model: a fixed number of battery percent per minute.
///
/// Durations round **up**: a station is never released before the battery is
/// actually full.  At the default 1 %/min the division is exact.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChargeDemand {
    rate_pct_per_min: u32,
}

impl ChargeDemand {
    /// A charge model gaining `rate_pct_per_min` percent per minute.
    ///
    /// A rate of zero would never finish and is rejected.
    pub fn new(rate_pct_per_min: u32) -> YardResult<Self> {
        if rate_pct_per_min == 0 {
            return Err(YardError::InvalidInput("charge rate must be at least 1 %/min".into()));
        }
        Ok(Self { rate_pct_per_min })
    }

    pub fn rate_pct_per_min(&self) -> u32 {
        self.rate_pct_per_min
    }

    /// Minutes needed to charge from `battery_pct` to 100 %.
    pub fn minutes_to_full(&self, battery_pct: u8) -> YardResult<u64> {
        if battery_pct > 100 {
            return Err(YardError::InvalidInput(format!(
                "battery {battery_pct}% is outside 0..=100"
            )));
        }
        let missing = u64::from(100 - battery_pct);
        Ok(missing.div_ceil(u64::from(self.rate_pct_per_min)))
    }
}

impl Default for ChargeDemand {
    fn default() -> Self {
        Self { rate_pct_per_min: DEFAULT_CHARGE_RATE_PCT_PER_MIN }
    }
}
