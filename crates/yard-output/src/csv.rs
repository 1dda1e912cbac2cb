//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `charge_results.csv`
//! - `charge_events.csv`
//! - `task_outcomes.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use yard_charge::ChargeResult;
use yard_tasks::TaskOutcome;

use crate::writer::OutputWriter;
use crate::{ChargeEventRow, OutputResult};

pub const CHARGE_RESULTS_HEADER: [&str; 9] = [
    "vehicle_id", "vehicle", "arrival_min", "battery_pct", "charge_min",
    "wait_min", "start_min", "end_min", "station_id",
];

pub const CHARGE_EVENTS_HEADER: [&str; 7] = [
    "event", "vehicle_id", "minute", "station_id", "value", "free_at", "severity",
];

pub const TASK_OUTCOMES_HEADER: [&str; 5] = ["task_id", "kind", "assignee", "work_minutes", "status"];

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    results:  Writer<File>,
    events:   Writer<File>,
    tasks:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut results = Writer::from_path(dir.join("charge_results.csv"))?;
        results.write_record(CHARGE_RESULTS_HEADER)?;

        let mut events = Writer::from_path(dir.join("charge_events.csv"))?;
        events.write_record(CHARGE_EVENTS_HEADER)?;

        let mut tasks = Writer::from_path(dir.join("task_outcomes.csv"))?;
        tasks.write_record(TASK_OUTCOMES_HEADER)?;

        Ok(Self {
            results,
            events,
            tasks,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_charge_results(&mut self, results: &[ChargeResult]) -> OutputResult<()> {
        for r in results {
            self.results.write_record(&[
                r.vehicle.0.to_string(),
                r.vehicle.to_string(),
                r.arrival.0.to_string(),
                r.battery_pct.to_string(),
                r.charge_min.to_string(),
                r.wait_min.to_string(),
                r.start.0.to_string(),
                r.end.0.to_string(),
                r.station.0.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_charge_event(&mut self, row: &ChargeEventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.kind.to_string(),
            row.vehicle_id.to_string(),
            row.minute.to_string(),
            row.station_id.to_string(),
            row.value.to_string(),
            row.free_at.map(|m| m.to_string()).unwrap_or_default(),
            row.severity.map(|s| s.to_string()).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn write_task_outcomes(&mut self, outcomes: &[TaskOutcome]) -> OutputResult<()> {
        for o in outcomes {
            self.tasks.write_record(&[
                o.task_id.clone(),
                o.kind.to_string(),
                o.assignee.clone(),
                o.work_minutes.to_string(),
                o.status.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.results.flush()?;
        self.events.flush()?;
        self.tasks.flush()?;
        Ok(())
    }
}
