//! Fixed-size concurrent task runner.
//!
//! # Model
//!
//! One worker thread per vehicle.  Task `i` is assigned to vehicle
//! `i % vehicles` and occupies it for a random number of simulated minutes,
//! each lasting `time_scale` of real time.  [`TaskRunner::run_parallel`]
//! blocks until every task is `Done` or `Failed`.
//!
//! # Cancellation
//!
//! Cooperative.  Workers sleep in short slices and check the shared
//! [`CancelToken`] between them; a task interrupted this way ends `Failed`,
//! never left `Running`.

use std::ops::RangeInclusive;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{error, info};

use yard_core::{YardConfig, YardError, YardResult, YardRng};

use crate::equipment::Equipment;
use crate::task::{Task, TaskKind, TaskStatus};

/// Upper bound on how long a worker sleeps before rechecking cancellation.
const CANCEL_POLL: Duration = Duration::from_millis(10);

// ── CancelToken ───────────────────────────────────────────────────────────────

/// Shared cancellation flag.  Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

// ── TaskOutcome ───────────────────────────────────────────────────────────────

/// What happened to one task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskOutcome {
    pub task_id:      String,
    pub kind:         TaskKind,
    /// Id of the vehicle that ran the task.
    pub assignee:     String,
    /// Simulated minutes the task was planned to take.
    pub work_minutes: u64,
    pub status:       TaskStatus,
}

// ── TaskRunner ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskRunner {
    time_scale:   Duration,
    work_minutes: RangeInclusive<u64>,
}

impl TaskRunner {
    /// A runner where each simulated minute lasts `time_scale` and each task
    /// takes a uniform draw from `work_minutes`.
    pub fn new(time_scale: Duration, work_minutes: RangeInclusive<u64>) -> YardResult<Self> {
        if work_minutes.is_empty() {
            return Err(YardError::InvalidInput(format!(
                "task duration range {work_minutes:?} is empty"
            )));
        }
        Ok(Self { time_scale, work_minutes })
    }

    pub fn from_config(config: &YardConfig) -> YardResult<Self> {
        Self::new(config.task_time_scale(), config.task_minutes())
    }

    /// Run every task on a pool of `agvs.len()` workers and wait for all of
    /// them.
    ///
    /// Durations are drawn from `rng` up front, in task order, so the plan is
    /// reproducible from the seed even though execution order is not.
    /// Statuses are updated in place; the returned outcomes are in the same
    /// order as `tasks`.
    pub fn run_parallel(
        &self,
        tasks:  &mut [Task],
        agvs:   &[Equipment],
        rng:    &mut YardRng,
        cancel: &CancelToken,
    ) -> YardResult<Vec<TaskOutcome>> {
        if agvs.is_empty() {
            return Err(YardError::InvalidInput("task runner needs at least one vehicle".into()));
        }
        if let Some(task) = tasks.iter().find(|t| t.status() != TaskStatus::Pending) {
            return Err(YardError::InvalidInput(format!(
                "task {} is {}, expected PENDING",
                task.id,
                task.status()
            )));
        }
        if tasks.is_empty() {
            return Ok(Vec::new());
        }

        let plan: Vec<u64> = tasks
            .iter()
            .map(|_| rng.gen_range(self.work_minutes.clone()))
            .collect();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(agvs.len())
            .thread_name(|i| format!("agv-worker-{i}"))
            .build()
            .map_err(|e| YardError::WorkerPool(e.to_string()))?;

        let vehicles = agvs.len();
        let outcomes: Vec<TaskOutcome> = pool.install(|| {
            tasks
                .par_iter_mut()
                .zip(plan.par_iter())
                .enumerate()
                .map(|(i, (task, &minutes))| self.run_one(task, &agvs[i % vehicles], minutes, cancel))
                .collect()
        });
        Ok(outcomes)
    }

    fn run_one(
        &self,
        task:     &mut Task,
        assignee: &Equipment,
        minutes:  u64,
        cancel:   &CancelToken,
    ) -> TaskOutcome {
        task.set_status(TaskStatus::Running);
        info!(assignee = %assignee, task = %task, "task running");

        let status = if self.simulate_work(minutes, cancel) {
            TaskStatus::Done
        } else {
            TaskStatus::Failed
        };
        task.set_status(status);

        match status {
            TaskStatus::Done => info!(assignee = %assignee, task = %task, work_minutes = minutes, "task done"),
            _ => error!(assignee = %assignee, task = %task, "task failed (interrupted)"),
        }

        TaskOutcome {
            task_id:      task.id.clone(),
            kind:         task.kind,
            assignee:     assignee.id.clone(),
            work_minutes: minutes,
            status,
        }
    }

    /// Sleep for `minutes` simulated minutes.  `false` if cancelled first.
    fn simulate_work(&self, minutes: u64, cancel: &CancelToken) -> bool {
        let scaled = self
            .time_scale
            .saturating_mul(u32::try_from(minutes).unwrap_or(u32::MAX));
        // `None` only for durations past the platform clock's range.
        let deadline = Instant::now().checked_add(scaled);
        loop {
            if cancel.is_cancelled() {
                return false;
            }
            let now = Instant::now();
            let nap = match deadline {
                Some(d) if now >= d => return true,
                Some(d) => (d - now).min(CANCEL_POLL),
                None => CANCEL_POLL,
            };
            thread::sleep(nap);
        }
    }
}

impl Default for TaskRunner {
    /// 100 ms per simulated minute, tasks of 5–20 minutes.
    fn default() -> Self {
        Self {
            time_scale:   Duration::from_millis(100),
            work_minutes: 5..=20,
        }
    }
}
