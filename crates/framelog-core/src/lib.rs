//! # FrameLog Core Library
//!
//! Per-frame data logging for trial-based experiment loops.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - A capacity-bounded table of fixed-shape per-frame records
//! - Trial start markers that point at frame positions
//! - Serialization of both to a tab-separated text file, exactly once
//!
//! ## Example
//!
//! ```rust,no_run
//! use framelog_core::{FrameTable, FrameTableConfig};
//!
//! # fn main() -> framelog_core::Result<()> {
//! let config = FrameTableConfig::new("session.txt", 600, 10);
//! let mut table = FrameTable::<(f64, f64, i32)>::create(&config)?;
//! table.set_header("x\ty\tresponse")?;
//!
//! table.mark_trial_start()?;
//! table.append_frame((0.5, 0.25, 1))?;
//! table.append_frame((0.6, 0.30, 0))?;
//!
//! // Written here, or when `table` is dropped
//! table.flush()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod table;

pub use config::FrameTableConfig;
pub use error::{CapacityKind, FrameLogError, Result};
pub use table::{FrameTable, Record};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::FrameTableConfig;
    pub use crate::error::{CapacityKind, FrameLogError, Result};
    pub use crate::table::{write_table, FrameTable, Record};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
