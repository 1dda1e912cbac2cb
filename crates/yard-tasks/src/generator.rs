//! Random task lists.

use yard_core::YardRng;

use crate::task::{Task, TaskKind};

/// `count` tasks `SIM-1 … SIM-count` with a uniformly random kind.
///
/// Every task carries a `flight` (`LH100`–`LH999`); transfers also carry a
/// `from` conveyor (`CONV-1`–`CONV-4`) and a `to` bay (`BAY-1`–`BAY-6`).
pub fn make_random_tasks(count: u32, rng: &mut YardRng) -> Vec<Task> {
    (1..=count)
        .map(|i| {
            let kind = TaskKind::ALL[rng.gen_range(0..TaskKind::ALL.len())];
            let flight: u32 = rng.gen_range(100..=999);
            let task = Task::new(format!("SIM-{i}"), kind).with("flight", format!("LH{flight}"));
            if kind == TaskKind::Transfer {
                let from: u32 = rng.gen_range(1..=4);
                let to: u32 = rng.gen_range(1..=6);
                task.with("from", format!("CONV-{from}")).with("to", format!("BAY-{to}"))
            } else {
                task
            }
        })
        .collect()
}
