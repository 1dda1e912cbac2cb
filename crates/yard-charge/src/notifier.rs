//! Scheduling event callbacks.

use std::fmt;

use tracing::{info, warn};

use yard_core::{Minute, StationId, VehicleId};

/// How a vehicle's queueing delay compares with the wait threshold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WaitSeverity {
    Normal,
    /// The wait reached or exceeded the threshold.
    High,
}

impl WaitSeverity {
    #[inline]
    pub fn classify(wait_min: u64, threshold: Minute) -> Self {
        if wait_min >= threshold.0 {
            WaitSeverity::High
        } else {
            WaitSeverity::Normal
        }
    }
}

impl fmt::Display for WaitSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WaitSeverity::Normal => "normal",
            WaitSeverity::High   => "high",
        })
    }
}

/// Callbacks invoked by [`ChargingScheduler::schedule`][crate::ChargingScheduler::schedule]
/// once per vehicle, in processing order.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Methods return nothing: a notifier that can
/// fail (e.g. one writing to disk) must hold on to its own errors, because
/// scheduling never stops on the notifier's account.
///
/// # Example — count high waits
///
/// ```rust,ignore
/// struct HighWaits(usize);
///
/// impl ChargeNotifier for HighWaits {
///     fn on_wait_observed(&mut self, _: VehicleId, _: u64, _: StationId, s: WaitSeverity) {
///         if s == WaitSeverity::High {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait ChargeNotifier {
    /// A vehicle was matched to the station that frees up first.
    ///
    /// `earliest_free_at` is that station's free-at before this allocation.
    fn on_arrival_processed(
        &mut self,
        _vehicle:            VehicleId,
        _arrival:            Minute,
        _battery_pct:        u8,
        _planned_charge_min: u64,
        _earliest_free_at:   Minute,
        _station:            StationId,
    ) {}

    fn on_wait_observed(
        &mut self,
        _vehicle:  VehicleId,
        _wait_min: u64,
        _station:  StationId,
        _severity: WaitSeverity,
    ) {}

    fn on_charge_start(
        &mut self,
        _vehicle:    VehicleId,
        _start:      Minute,
        _charge_min: u64,
        _station:    StationId,
    ) {}

    fn on_charge_end(&mut self, _vehicle: VehicleId, _end: Minute, _station: StationId) {}
}

impl<N: ChargeNotifier + ?Sized> ChargeNotifier for &mut N {
    fn on_arrival_processed(
        &mut self,
        vehicle:            VehicleId,
        arrival:            Minute,
        battery_pct:        u8,
        planned_charge_min: u64,
        earliest_free_at:   Minute,
        station:            StationId,
    ) {
        (**self).on_arrival_processed(vehicle, arrival, battery_pct, planned_charge_min, earliest_free_at, station);
    }

    fn on_wait_observed(&mut self, vehicle: VehicleId, wait_min: u64, station: StationId, severity: WaitSeverity) {
        (**self).on_wait_observed(vehicle, wait_min, station, severity);
    }

    fn on_charge_start(&mut self, vehicle: VehicleId, start: Minute, charge_min: u64, station: StationId) {
        (**self).on_charge_start(vehicle, start, charge_min, station);
    }

    fn on_charge_end(&mut self, vehicle: VehicleId, end: Minute, station: StationId) {
        (**self).on_charge_end(vehicle, end, station);
    }
}

/// Fan every event out to two notifiers, `.0` first.
impl<A: ChargeNotifier, B: ChargeNotifier> ChargeNotifier for (A, B) {
    fn on_arrival_processed(
        &mut self,
        vehicle:            VehicleId,
        arrival:            Minute,
        battery_pct:        u8,
        planned_charge_min: u64,
        earliest_free_at:   Minute,
        station:            StationId,
    ) {
        self.0.on_arrival_processed(vehicle, arrival, battery_pct, planned_charge_min, earliest_free_at, station);
        self.1.on_arrival_processed(vehicle, arrival, battery_pct, planned_charge_min, earliest_free_at, station);
    }

    fn on_wait_observed(&mut self, vehicle: VehicleId, wait_min: u64, station: StationId, severity: WaitSeverity) {
        self.0.on_wait_observed(vehicle, wait_min, station, severity);
        self.1.on_wait_observed(vehicle, wait_min, station, severity);
    }

    fn on_charge_start(&mut self, vehicle: VehicleId, start: Minute, charge_min: u64, station: StationId) {
        self.0.on_charge_start(vehicle, start, charge_min, station);
        self.1.on_charge_start(vehicle, start, charge_min, station);
    }

    fn on_charge_end(&mut self, vehicle: VehicleId, end: Minute, station: StationId) {
        self.0.on_charge_end(vehicle, end, station);
        self.1.on_charge_end(vehicle, end, station);
    }
}

/// A [`ChargeNotifier`] that does nothing.
pub struct NoopNotifier;

impl ChargeNotifier for NoopNotifier {}

/// Emits every scheduling event as a structured `tracing` event.
///
/// High waits are logged at `WARN`, everything else at `INFO`.
pub struct TracingNotifier;

impl ChargeNotifier for TracingNotifier {
    fn on_arrival_processed(
        &mut self,
        vehicle:            VehicleId,
        arrival:            Minute,
        battery_pct:        u8,
        planned_charge_min: u64,
        earliest_free_at:   Minute,
        station:            StationId,
    ) {
        info!(
            %vehicle, %station,
            arrival = arrival.0, battery_pct, planned_charge_min,
            earliest_free_at = earliest_free_at.0,
            "vehicle arrived; earliest station chosen"
        );
    }

    fn on_wait_observed(&mut self, vehicle: VehicleId, wait_min: u64, station: StationId, severity: WaitSeverity) {
        match severity {
            WaitSeverity::High   => warn!(%vehicle, %station, wait_min, "high wait"),
            WaitSeverity::Normal => info!(%vehicle, %station, wait_min, "waited"),
        }
    }

    fn on_charge_start(&mut self, vehicle: VehicleId, start: Minute, charge_min: u64, station: StationId) {
        info!(%vehicle, %station, start = start.0, charge_min, "charge started");
    }

    fn on_charge_end(&mut self, vehicle: VehicleId, end: Minute, station: StationId) {
        info!(%vehicle, %station, end = end.0, "charge finished");
    }
}
