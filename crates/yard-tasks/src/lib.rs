//! `yard-tasks` — operational tasks dispatched across the AGV fleet.
//!
//! This crate is independent of the charging scheduler.  It models the yard's
//! load/unload/transfer/charge jobs and runs them on a worker pool with one
//! thread per vehicle, blocking until every task has finished or failed.
//!
//! | Module          | Contents                                            |
//! |-----------------|-----------------------------------------------------|
//! | [`task`]        | `Task`, `TaskKind`, `TaskStatus`                    |
//! | [`equipment`]   | `Equipment`, `EquipmentKind`, `make_agvs`           |
//! | [`generator`]   | `make_random_tasks`                                 |
//! | [`runner`]      | `TaskRunner`, `TaskOutcome`, `CancelToken`          |

pub mod equipment;
pub mod generator;
pub mod runner;
pub mod task;


pub use equipment::{Equipment, EquipmentKind, make_agvs};
pub use generator::make_random_tasks;
pub use runner::{CancelToken, TaskOutcome, TaskRunner};
pub use task::{Task, TaskKind, TaskStatus};
