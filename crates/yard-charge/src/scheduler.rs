//! The greedy charging scheduler.
//!
//! ```text
//! jobs = arrivals → ChargeJob (duration computed eagerly, all input validated)
//! sort jobs by (arrival, input index)
//! for job in jobs:
//!     station = pool.take_earliest()              // min (free_at, id)
//!     start   = max(job.arrival, station.free_at)
//!     end     = start + job.charge_min
//!     pool.release(station.id, end)
//!     notify arrival / wait / start / end
//! sort results by vehicle id
//! ```
//!
//! A run is single-threaded and holds the pool by `&mut` for its whole
//! duration.  Independent runs can go in parallel via [`simulate_batch`]
//! (with the `parallel` feature); the unit of parallelism is a whole run.

use std::fmt;

use yard_core::{Minute, StationId, VehicleId, YardConfig, YardError, YardResult};

use crate::arrival::ArrivalRecord;
use crate::demand::ChargeDemand;
use crate::notifier::{ChargeNotifier, NoopNotifier, WaitSeverity};
use crate::station_pool::StationPool;

// ── ChargeJob ─────────────────────────────────────────────────────────────────

/// An arrival plus the minutes it will occupy a station.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChargeJob {
    pub vehicle:     VehicleId,
    pub arrival:     Minute,
    pub battery_pct: u8,
    pub charge_min:  u64,
    /// Position in the caller's arrival slice; breaks arrival-time ties.
    pub input_index: usize,
}

// ── ChargeResult ──────────────────────────────────────────────────────────────

/// Where and when one vehicle charged.  Produced exactly once per vehicle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChargeResult {
    pub vehicle:     VehicleId,
    pub arrival:     Minute,
    pub battery_pct: u8,
    pub charge_min:  u64,
    /// `start - arrival`.
    pub wait_min:    u64,
    pub start:       Minute,
    /// `start + charge_min`.
    pub end:         Minute,
    pub station:     StationId,
}

impl fmt::Display for ChargeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} arr={} batt={}% wait={}' chg={}' {}→{} {}",
            self.vehicle, self.arrival, self.battery_pct, self.wait_min,
            self.charge_min, self.start, self.end, self.station,
        )
    }
}

// ── ChargingScheduler ─────────────────────────────────────────────────────────

/// Priority-driven greedy allocation of vehicles to charging stations.
///
/// Stateless between runs: the same arrivals against a fresh pool always give
/// the same results.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChargingScheduler {
    demand:         ChargeDemand,
    wait_threshold: Minute,
}

impl ChargingScheduler {
    pub fn new(demand: ChargeDemand) -> Self {
        Self {
            demand,
            wait_threshold: Minute(yard_core::config::DEFAULT_WAIT_THRESHOLD_MIN),
        }
    }

    /// Waits of `threshold` minutes or more are reported as [`WaitSeverity::High`].
    pub fn with_wait_threshold(mut self, threshold: Minute) -> Self {
        self.wait_threshold = threshold;
        self
    }

    pub fn from_config(config: &YardConfig) -> YardResult<Self> {
        let demand = ChargeDemand::new(config.charge_rate_pct_per_min)?;
        Ok(Self::new(demand).with_wait_threshold(config.wait_threshold()))
    }

    pub fn demand(&self) -> ChargeDemand {
        self.demand
    }

    pub fn wait_threshold(&self) -> Minute {
        self.wait_threshold
    }

    /// Validate `arrivals` and turn them into jobs in processing order:
    /// ascending arrival, ties broken by position in `arrivals`.
    ///
    /// Fails with `InvalidInput` on a battery outside 0–100 %, a vehicle id
    /// that appears twice, or a charge that would end past `u64::MAX` minutes.
    pub fn plan_jobs(&self, arrivals: &[ArrivalRecord]) -> YardResult<Vec<ChargeJob>> {
        let mut ids: Vec<VehicleId> = arrivals.iter().map(|a| a.vehicle).collect();
        ids.sort_unstable();
        if let Some(dup) = ids.windows(2).find(|w| w[0] == w[1]) {
            return Err(YardError::InvalidInput(format!("{} appears more than once", dup[0])));
        }

        let mut jobs = arrivals
            .iter()
            .enumerate()
            .map(|(input_index, a)| {
                let charge_min = self.demand.minutes_to_full(a.battery_pct).map_err(|e| match e {
                    YardError::InvalidInput(msg) => YardError::InvalidInput(format!("{}: {msg}", a.vehicle)),
                    other => other,
                })?;
                if a.arrival.checked_add(charge_min).is_none() {
                    return Err(past_clock(a.vehicle));
                }
                Ok(ChargeJob {
                    vehicle: a.vehicle,
                    arrival: a.arrival,
                    battery_pct: a.battery_pct,
                    charge_min,
                    input_index,
                })
            })
            .collect::<YardResult<Vec<_>>>()?;

        jobs.sort_by_key(|j| (j.arrival, j.input_index));
        Ok(jobs)
    }

    /// Allocate every arrival to a station from `pool`.
    ///
    /// Returns one result per arrival, ordered by vehicle id.  Input is fully
    /// validated before the first allocation, so an `InvalidInput` error
    /// leaves both `pool` and `notifier` untouched.  Any error aborts the run
    /// and no partial results are returned.
    pub fn schedule<N: ChargeNotifier>(
        &self,
        arrivals: &[ArrivalRecord],
        pool:     &mut StationPool,
        notifier: &mut N,
    ) -> YardResult<Vec<ChargeResult>> {
        let jobs = self.plan_jobs(arrivals)?;
        let mut results = Vec::with_capacity(jobs.len());

        for job in &jobs {
            let station = pool.take_earliest().map_err(|e| match e {
                YardError::EmptyPool => YardError::ProtocolViolation(format!(
                    "station pool ran dry with {} still to allocate",
                    job.vehicle
                )),
                other => other,
            })?;

            let start = job.arrival.max(station.free_at);
            let wait_min = start - job.arrival;
            let end = start.checked_add(job.charge_min).ok_or_else(|| past_clock(job.vehicle))?;

            pool.release(station.id, end)?;

            notifier.on_arrival_processed(
                job.vehicle, job.arrival, job.battery_pct, job.charge_min, station.free_at, station.id,
            );
            notifier.on_wait_observed(
                job.vehicle, wait_min, station.id, WaitSeverity::classify(wait_min, self.wait_threshold),
            );
            notifier.on_charge_start(job.vehicle, start, job.charge_min, station.id);
            notifier.on_charge_end(job.vehicle, end, station.id);

            results.push(ChargeResult {
                vehicle:     job.vehicle,
                arrival:     job.arrival,
                battery_pct: job.battery_pct,
                charge_min:  job.charge_min,
                wait_min,
                start,
                end,
                station:     station.id,
            });
        }

        results.sort_by_key(|r| r.vehicle);
        Ok(results)
    }

    /// Build a fresh pool of `stations` stations and [`schedule`][Self::schedule]
    /// `arrivals` against it.
    pub fn run<N: ChargeNotifier>(
        &self,
        stations: u32,
        arrivals: &[ArrivalRecord],
        notifier: &mut N,
    ) -> YardResult<Vec<ChargeResult>> {
        let mut pool = StationPool::new(stations)?;
        self.schedule(arrivals, &mut pool, notifier)
    }
}

impl Default for ChargingScheduler {
    fn default() -> Self {
        Self::new(ChargeDemand::default())
    }
}

fn past_clock(vehicle: VehicleId) -> YardError {
    YardError::InvalidInput(format!("{vehicle} would finish past the representable clock"))
}

// ── Batch runs ────────────────────────────────────────────────────────────────

/// One independent simulation: a station count and its arrivals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChargeRun {
    pub stations: u32,
    pub arrivals: Vec<ArrivalRecord>,
}

/// Schedule each run against its own fresh pool, without notifications.
///
/// Results come back in the order of `runs`.  With the `parallel` Cargo
/// feature the runs execute on Rayon's thread pool.
pub fn simulate_batch(
    scheduler: &ChargingScheduler,
    runs:      &[ChargeRun],
) -> Vec<YardResult<Vec<ChargeResult>>> {
    #[cfg(not(feature = "parallel"))]
    {
        runs.iter()
            .map(|run| scheduler.run(run.stations, &run.arrivals, &mut NoopNotifier))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        runs.par_iter()
            .map(|run| scheduler.run(run.stations, &run.arrivals, &mut NoopNotifier))
            .collect()
    }
}
