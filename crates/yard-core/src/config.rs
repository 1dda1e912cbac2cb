//! Top-level yard configuration.
//!
//! Typically built from defaults, optionally overlaid from a JSON file by the
//! application (with the `serde` feature), then overridden field-by-field
//! from the command line.  Call [`YardConfig::validate`] before use.

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::{Minute, YardError, YardResult};

/// Default wait, in minutes, at or above which a wait is reported as high.
pub const DEFAULT_WAIT_THRESHOLD_MIN: u64 = 15;

/// Default charge rate: 1 % of battery per simulated minute.
pub const DEFAULT_CHARGE_RATE_PCT_PER_MIN: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct YardConfig {
    /// Number of charging stations (N).  Must be at least 1.
    pub stations: u32,

    /// Number of vehicles (K).  Also the task worker pool size.
    pub vehicles: u32,

    /// Number of operational tasks (M) dispatched to the vehicle pool.
    pub tasks: u32,

    /// Master RNG seed.  The same seed always produces identical inputs.
    pub seed: u64,

    /// Waits of this many minutes or more are flagged high severity.
    pub wait_threshold_min: u64,

    /// Battery percent gained per simulated minute on a station.
    pub charge_rate_pct_per_min: u32,

    /// Arrivals are drawn uniformly from `0..=arrival_window_min`.
    pub arrival_window_min: u64,

    /// Initial battery is drawn uniformly from `battery_min_pct..=battery_max_pct`.
    pub battery_min_pct: u8,
    pub battery_max_pct: u8,

    /// Simulated task duration bounds, inclusive.
    pub task_min_minutes: u64,
    pub task_max_minutes: u64,

    /// Real milliseconds slept per simulated task minute.
    pub task_ms_per_minute: u64,
}

impl Default for YardConfig {
    fn default() -> Self {
        Self {
            stations:                3,
            vehicles:                8,
            tasks:                   10,
            seed:                    42,
            wait_threshold_min:      DEFAULT_WAIT_THRESHOLD_MIN,
            charge_rate_pct_per_min: DEFAULT_CHARGE_RATE_PCT_PER_MIN,
            arrival_window_min:      20,
            battery_min_pct:         10,
            battery_max_pct:         90,
            task_min_minutes:        5,
            task_max_minutes:        20,
            task_ms_per_minute:      100,
        }
    }
}

impl YardConfig {
    /// Reject settings no run could honor.
    pub fn validate(&self) -> YardResult<()> {
        if self.stations == 0 {
            return Err(YardError::Config("stations must be at least 1".into()));
        }
        if self.charge_rate_pct_per_min == 0 {
            return Err(YardError::Config("charge rate must be at least 1 %/min".into()));
        }
        if self.battery_min_pct > self.battery_max_pct || self.battery_max_pct > 100 {
            return Err(YardError::Config(format!(
                "battery range {}..={} is not within 0..=100",
                self.battery_min_pct, self.battery_max_pct
            )));
        }
        if self.task_min_minutes > self.task_max_minutes {
            return Err(YardError::Config(format!(
                "task duration range {}..={} is empty",
                self.task_min_minutes, self.task_max_minutes
            )));
        }
        if self.tasks > 0 && self.vehicles == 0 {
            return Err(YardError::Config("tasks need at least one vehicle to run on".into()));
        }
        Ok(())
    }

    pub fn wait_threshold(&self) -> Minute {
        Minute(self.wait_threshold_min)
    }

    pub fn arrival_window(&self) -> RangeInclusive<u64> {
        0..=self.arrival_window_min
    }

    pub fn battery_range(&self) -> RangeInclusive<u8> {
        self.battery_min_pct..=self.battery_max_pct
    }

    pub fn task_minutes(&self) -> RangeInclusive<u64> {
        self.task_min_minutes..=self.task_max_minutes
    }

    /// Wall-clock length of one simulated task minute.
    pub fn task_time_scale(&self) -> Duration {
        Duration::from_millis(self.task_ms_per_minute)
    }
}
