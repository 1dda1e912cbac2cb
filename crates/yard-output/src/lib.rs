//! `yard-output` — result and event writers for the charging-yard simulator.
//!
//! | File                 | Contents                                   |
//! |----------------------|--------------------------------------------|
//! | `charge_results.csv` | one row per vehicle, ordered by vehicle id |
//! | `charge_events.csv`  | one row per scheduler notification         |
//! | `task_outcomes.csv`  | one row per operational task               |
//!
//! Backends implement [`OutputWriter`].  [`ChargeEventRecorder`] plugs a
//! writer into the scheduler as a `ChargeNotifier`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use yard_output::{ChargeEventRecorder, CsvWriter, OutputWriter};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut recorder = ChargeEventRecorder::new(writer);
//! let results = scheduler.run(stations, &arrivals, &mut recorder)?;
//! if let Some(e) = recorder.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! let mut writer = recorder.into_writer();
//! writer.write_charge_results(&results)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod recorder;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use recorder::ChargeEventRecorder;
pub use row::{ChargeEventKind, ChargeEventRow};
pub use writer::OutputWriter;
