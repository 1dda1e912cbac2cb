//! `ChargeEventRecorder<W>` — bridges `ChargeNotifier` to an `OutputWriter`.

use yard_charge::{ChargeNotifier, WaitSeverity};
use yard_core::{Minute, StationId, VehicleId};

use crate::row::{ChargeEventKind, ChargeEventRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`ChargeNotifier`] that writes one event row per callback to any
/// [`OutputWriter`] backend.
///
/// Notifier methods cannot fail, so write errors are stored internally and
/// scheduling carries on.  After the run, check with
/// [`take_error`][Self::take_error].
pub struct ChargeEventRecorder<W: OutputWriter> {
    writer:       W,
    /// Arrival minute of the vehicle being processed, stamped on its wait row.
    last_arrival: Option<(VehicleId, Minute)>,
    rows_written: usize,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> ChargeEventRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_arrival: None,
            rows_written: 0,
            last_error:   None,
        }
    }

    /// Take the stored write error (if any).  Returns `None` if all writes
    /// succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Event rows successfully written so far.
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Unwrap the inner writer (e.g. to write results and finish).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn record(&mut self, row: ChargeEventRow) {
        let result = self.writer.write_charge_event(&row);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        match result {
            Ok(()) => self.rows_written += 1,
            // Keep only the first error.
            Err(e) => {
                if self.last_error.is_none() {
                    self.last_error = Some(e);
                }
            }
        }
    }
}

impl<W: OutputWriter> ChargeNotifier for ChargeEventRecorder<W> {
    fn on_arrival_processed(
        &mut self,
        vehicle:            VehicleId,
        arrival:            Minute,
        _battery_pct:       u8,
        planned_charge_min: u64,
        earliest_free_at:   Minute,
        station:            StationId,
    ) {
        self.last_arrival = Some((vehicle, arrival));
        self.record(ChargeEventRow {
            kind:       ChargeEventKind::Arrival,
            vehicle_id: vehicle.0,
            minute:     arrival.0,
            station_id: station.0,
            value:      planned_charge_min,
            free_at:    Some(earliest_free_at.0),
            severity:   None,
        });
    }

    fn on_wait_observed(&mut self, vehicle: VehicleId, wait_min: u64, station: StationId, severity: WaitSeverity) {
        let minute = match self.last_arrival {
            Some((v, arrival)) if v == vehicle => arrival.0,
            _ => 0,
        };
        self.record(ChargeEventRow {
            kind:       ChargeEventKind::Wait,
            vehicle_id: vehicle.0,
            minute,
            station_id: station.0,
            value:      wait_min,
            free_at:    None,
            severity:   Some(severity),
        });
    }

    fn on_charge_start(&mut self, vehicle: VehicleId, start: Minute, charge_min: u64, station: StationId) {
        self.record(ChargeEventRow {
            kind:       ChargeEventKind::Start,
            vehicle_id: vehicle.0,
            minute:     start.0,
            station_id: station.0,
            value:      charge_min,
            free_at:    None,
            severity:   None,
        });
    }

    fn on_charge_end(&mut self, vehicle: VehicleId, end: Minute, station: StationId) {
        self.record(ChargeEventRow {
            kind:       ChargeEventKind::End,
            vehicle_id: vehicle.0,
            minute:     end.0,
            station_id: station.0,
            value:      0,
            free_at:    None,
            severity:   None,
        });
    }
}
