//! Vehicle arrival records and their random generator.

use std::ops::RangeInclusive;

use yard_core::{Minute, VehicleId, YardConfig, YardError, YardResult, YardRng};

/// When a vehicle reaches the yard and how full its battery is.
///
/// Created once per vehicle before scheduling starts and never mutated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArrivalRecord {
    pub vehicle:     VehicleId,
    pub arrival:     Minute,
    /// Initial battery level, 0–100 %.
    pub battery_pct: u8,
}

impl ArrivalRecord {
    pub fn new(vehicle: u32, arrival: u64, battery_pct: u8) -> Self {
        Self {
            vehicle: VehicleId(vehicle),
            arrival: Minute(arrival),
            battery_pct,
        }
    }
}

/// Draws uniform arrival minutes and battery levels from an explicit RNG.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrivalGenerator {
    arrival_window: RangeInclusive<u64>,
    battery_range:  RangeInclusive<u8>,
}

impl ArrivalGenerator {
    pub fn new(arrival_window: RangeInclusive<u64>, battery_range: RangeInclusive<u8>) -> YardResult<Self> {
        if arrival_window.is_empty() {
            return Err(YardError::InvalidInput(format!(
                "arrival window {arrival_window:?} is empty"
            )));
        }
        if battery_range.is_empty() || *battery_range.end() > 100 {
            return Err(YardError::InvalidInput(format!(
                "battery range {battery_range:?} is not within 0..=100"
            )));
        }
        Ok(Self { arrival_window, battery_range })
    }

    pub fn from_config(config: &YardConfig) -> YardResult<Self> {
        Self::new(config.arrival_window(), config.battery_range())
    }

    /// `count` records with vehicle ids `0..count`, in id order.
    pub fn generate(&self, count: u32, rng: &mut YardRng) -> Vec<ArrivalRecord> {
        (0..count)
            .map(|i| {
                let arrival = rng.gen_range(self.arrival_window.clone());
                let battery_pct = rng.gen_range(self.battery_range.clone());
                ArrivalRecord::new(i, arrival, battery_pct)
            })
            .collect()
    }
}

impl Default for ArrivalGenerator {
    /// Arrivals in minutes `0..=20`, batteries at `10..=90` %.
    fn default() -> Self {
        Self {
            arrival_window: 0..=20,
            battery_range:  10..=90,
        }
    }
}
