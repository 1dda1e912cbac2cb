//! Yard error type.
//!
//! Shared by the charging core and the task runner.  All variants are local to
//! a single run and surface synchronously; nothing here is retried.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum YardError {
    /// Bad caller input, rejected before any scheduling happens.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An internal bookkeeping invariant was broken.  Always a bug.
    #[error("protocol violation: {0}")]
    ProtocolViolation(String),

    #[error("station pool is empty")]
    EmptyPool,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("worker pool error: {0}")]
    WorkerPool(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `yard-*` crates.
pub type YardResult<T> = Result<T, YardError>;
