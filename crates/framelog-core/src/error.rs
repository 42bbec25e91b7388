//! Frame logging errors

use std::fmt;

use thiserror::Error;

/// Which of the two bounded sequences a capacity error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityKind {
    /// Per-frame records
    Frames,
    /// Trial start markers
    Trials,
}

impl fmt::Display for CapacityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityKind::Frames => write!(f, "frame"),
            CapacityKind::Trials => write!(f, "trial"),
        }
    }
}

/// Errors that can occur while building or writing a frame table
#[derive(Error, Debug)]
pub enum FrameLogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{kind} capacity exceeded: table holds at most {capacity}")]
    CapacityExceeded { kind: CapacityKind, capacity: usize },

    #[error("Frame table already flushed")]
    AlreadyFlushed,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, FrameLogError>;
