//! Aggregate statistics over one run's results.

use yard_core::{Minute, StationId};

use crate::notifier::WaitSeverity;
use crate::scheduler::ChargeResult;

/// Work done by one station during a run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StationUsage {
    pub station:      StationId,
    pub jobs:         usize,
    /// Sum of charge minutes served.
    pub busy_min:     u64,
    /// `busy_min / makespan`, or 0 for an empty run.
    pub utilization:  f64,
}

/// Wait and occupancy figures for a finished run.
#[derive(Clone, Debug, PartialEq)]
pub struct ChargeSummary {
    pub vehicles:       usize,
    pub total_wait_min: u64,
    pub mean_wait_min:  f64,
    pub max_wait_min:   u64,
    /// Vehicles whose wait was at or above the threshold.
    pub high_waits:     usize,
    /// Latest end of any charge (minute 0 for an empty run).
    pub makespan:       Minute,
    /// One entry per station `1..=N`, including idle ones.
    pub stations:       Vec<StationUsage>,
}

impl ChargeSummary {
    pub fn from_results(results: &[ChargeResult], stations: u32, wait_threshold: Minute) -> Self {
        let total_wait_min: u64 = results.iter().map(|r| r.wait_min).sum();
        let max_wait_min = results.iter().map(|r| r.wait_min).max().unwrap_or(0);
        let high_waits = results
            .iter()
            .filter(|r| WaitSeverity::classify(r.wait_min, wait_threshold) == WaitSeverity::High)
            .count();
        let makespan = results.iter().map(|r| r.end).max().unwrap_or(Minute::ZERO);
        let mean_wait_min = if results.is_empty() {
            0.0
        } else {
            total_wait_min as f64 / results.len() as f64
        };

        let mut usage: Vec<StationUsage> = (1..=stations)
            .map(|id| StationUsage {
                station:     StationId(id),
                jobs:        0,
                busy_min:    0,
                utilization: 0.0,
            })
            .collect();
        for r in results {
            // Stations outside 1..=N are ignored.
            if let Some(u) = usage.get_mut(r.station.slot()) {
                u.jobs += 1;
                u.busy_min += r.charge_min;
            }
        }
        if makespan > Minute::ZERO {
            for u in &mut usage {
                u.utilization = u.busy_min as f64 / makespan.0 as f64;
            }
        }

        Self {
            vehicles: results.len(),
            total_wait_min,
            mean_wait_min,
            max_wait_min,
            high_waits,
            makespan,
            stations: usage,
        }
    }
}
