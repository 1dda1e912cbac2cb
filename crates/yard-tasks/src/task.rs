//! Task identity, kind, and status.

use std::collections::BTreeMap;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Load,
    Unload,
    Transfer,
    Charge,
}

impl TaskKind {
    pub const ALL: [TaskKind; 4] = [TaskKind::Load, TaskKind::Unload, TaskKind::Transfer, TaskKind::Charge];
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TaskKind::Load     => "LOAD",
            TaskKind::Unload   => "UNLOAD",
            TaskKind::Transfer => "TRANSFER",
            TaskKind::Charge   => "CHARGE",
        })
    }
}

/// `Pending → Running → Done | Failed`.  `Done` and `Failed` are terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    Running,
    Done,
    Failed,
}

impl TaskStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Done | TaskStatus::Failed)
    }

    pub fn can_transition_to(self, next: TaskStatus) -> bool {
        matches!(
            (self, next),
            (TaskStatus::Pending, TaskStatus::Running)
                | (TaskStatus::Running, TaskStatus::Done)
                | (TaskStatus::Running, TaskStatus::Failed)
        )
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::Running => "RUNNING",
            TaskStatus::Done    => "DONE",
            TaskStatus::Failed  => "FAILED",
        })
    }
}

/// A unit of yard work with free-form attributes (flight, from, to, …).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id:         String,
    pub kind:       TaskKind,
    status:         TaskStatus,
    pub attributes: BTreeMap<String, String>,
}

impl Task {
    pub fn new(id: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            id: id.into(),
            kind,
            status: TaskStatus::Pending,
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Move to `next`.  Only the runner drives status.
    pub(crate) fn set_status(&mut self, next: TaskStatus) {
        debug_assert!(
            self.status.can_transition_to(next),
            "task {} cannot go from {} to {next}",
            self.id,
            self.status
        );
        self.status = next;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]", self.id, self.kind, self.status)?;
        for (k, v) in &self.attributes {
            write!(f, " {k}={v}")?;
        }
        Ok(())
    }
}
