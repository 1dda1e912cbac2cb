//! The `OutputWriter` trait implemented by all backend writers.

use yard_charge::ChargeResult;
use yard_tasks::TaskOutcome;

use crate::{ChargeEventRow, OutputResult};

pub trait OutputWriter {
    /// Write the final per-vehicle results.
    fn write_charge_results(&mut self, results: &[ChargeResult]) -> OutputResult<()>;

    /// Write one scheduling event row.
    fn write_charge_event(&mut self, row: &ChargeEventRow) -> OutputResult<()>;

    /// Write the outcome of every operational task.
    fn write_task_outcomes(&mut self, outcomes: &[TaskOutcome]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
