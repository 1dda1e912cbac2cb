//! `yard-charge` — the discrete-event charging scheduler.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                   |
//! |-------------------|------------------------------------------------------------|
//! | [`demand`]        | `ChargeDemand` (battery % → minutes, rounded up)           |
//! | [`station_pool`]  | `StationPool`, `Station` (`BinaryHeap` on `(free_at, id)`) |
//! | [`arrival`]       | `ArrivalRecord`, `ArrivalGenerator`                        |
//! | [`scheduler`]     | `ChargingScheduler`, `ChargeJob`, `ChargeResult`, `simulate_batch` |
//! | [`notifier`]      | `ChargeNotifier` trait, `NoopNotifier`, `TracingNotifier`  |
//! | [`summary`]       | `ChargeSummary`, `StationUsage`                            |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `simulate_batch` runs independent runs on Rayon.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use yard_charge::{ArrivalGenerator, ChargingScheduler, TracingNotifier};
//! use yard_core::YardRng;
//!
//! let mut rng = YardRng::new(42);
//! let arrivals = ArrivalGenerator::default().generate(8, &mut rng);
//! let results = ChargingScheduler::default().run(3, &arrivals, &mut TracingNotifier)?;
//! ```

pub mod arrival;
pub mod demand;
pub mod notifier;
pub mod scheduler;
pub mod station_pool;
pub mod summary;

#[cfg(test)]
mod tests;

pub use arrival::{ArrivalGenerator, ArrivalRecord};
pub use demand::ChargeDemand;
pub use notifier::{ChargeNotifier, NoopNotifier, TracingNotifier, WaitSeverity};
pub use scheduler::{ChargeJob, ChargeResult, ChargeRun, ChargingScheduler, simulate_batch};
pub use station_pool::{Station, StationPool};
pub use summary::{ChargeSummary, StationUsage};
