//! Frame table
//!
//! Accumulates one record per frame plus trial start markers, then writes
//! both to its destination exactly once: on `flush`, `finish`, or drop.
//!
//! All mutators take `&mut self`. A table shared across threads needs an
//! external lock around the whole value.

mod format;
mod record;

pub use format::{write_table, FIELD_SEPARATOR, FRAME_NUMBER_COLUMN, TRIAL_INDEX_LABEL};
pub use record::Record;

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::config::FrameTableConfig;
use crate::error::{CapacityKind, FrameLogError, Result};

/// Upper bound on storage reserved up front; capacities beyond it grow on demand
const MAX_PREALLOCATION: usize = 10000;

/// Capacity-bounded table of per-frame records with trial start markers
pub struct FrameTable<R: Record, W: Write = BufWriter<File>> {
    /// Appended records, in frame order
    records: Vec<R>,
    /// Frame index recorded at each trial start
    trial_starts: Vec<usize>,
    capacity_frames: usize,
    capacity_trials: usize,
    /// Text following `fr_nr` in the header row
    header: String,
    /// Set once the table layout has been written
    flushed: bool,
    /// Owned sink; only taken by `finish`
    destination: Option<W>,
}

impl<R: Record> FrameTable<R, BufWriter<File>> {
    /// Create a table writing to the configured file, truncating it
    pub fn create(config: &FrameTableConfig) -> Result<Self> {
        config.validate()?;
        let file = File::create(&config.destination)?;
        debug!(
            "Opened frame log {} ({} frames, {} trials, {} fields)",
            config.destination.display(),
            config.capacity_frames,
            config.capacity_trials,
            R::ARITY
        );
        Self::from_writer(
            BufWriter::new(file),
            config.capacity_frames,
            config.capacity_trials,
        )
    }

    /// Create a table writing to `path`
    pub fn open<P: AsRef<Path>>(
        path: P,
        capacity_frames: usize,
        capacity_trials: usize,
    ) -> Result<Self> {
        let config = FrameTableConfig::new(path.as_ref(), capacity_frames, capacity_trials);
        Self::create(&config)
    }
}

impl<R: Record, W: Write> FrameTable<R, W> {
    /// Create a table over any writable sink
    pub fn from_writer(writer: W, capacity_frames: usize, capacity_trials: usize) -> Result<Self> {
        if capacity_frames == 0 {
            return Err(FrameLogError::InvalidConfig(
                "capacity_frames must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            records: Vec::with_capacity(capacity_frames.min(MAX_PREALLOCATION)),
            trial_starts: Vec::with_capacity(capacity_trials.min(MAX_PREALLOCATION)),
            capacity_frames,
            capacity_trials,
            header: String::new(),
            flushed: false,
            destination: Some(writer),
        })
    }

    /// Set the column header text; the last value set is written
    pub fn set_header(&mut self, header: impl Into<String>) -> Result<()> {
        self.ensure_not_flushed()?;
        self.header = header.into();
        Ok(())
    }

    /// Get the column header text
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Mark the next frame to be appended as the start of a trial
    ///
    /// Returns the recorded frame index. The index need not ever be filled.
    pub fn mark_trial_start(&mut self) -> Result<usize> {
        self.ensure_not_flushed()?;
        if self.trial_starts.len() >= self.capacity_trials {
            warn!(
                "Trial start rejected: capacity of {} reached",
                self.capacity_trials
            );
            return Err(FrameLogError::CapacityExceeded {
                kind: CapacityKind::Trials,
                capacity: self.capacity_trials,
            });
        }

        let frame = self.records.len();
        self.trial_starts.push(frame);
        Ok(frame)
    }

    /// Append one frame record, returning its frame index
    pub fn append_frame(&mut self, record: R) -> Result<usize> {
        self.ensure_not_flushed()?;
        if self.records.len() >= self.capacity_frames {
            warn!(
                "Frame rejected: capacity of {} reached",
                self.capacity_frames
            );
            return Err(FrameLogError::CapacityExceeded {
                kind: CapacityKind::Frames,
                capacity: self.capacity_frames,
            });
        }

        self.records.push(record);
        Ok(self.records.len() - 1)
    }

    /// Write values straight to the destination with no separator
    pub fn raw_write(&mut self, values: &[&dyn Display]) -> Result<()> {
        let sink = self.sink()?;
        for value in values {
            write!(sink, "{}", value)?;
        }
        Ok(())
    }

    /// Write values straight to the destination, then a newline
    pub fn raw_write_line(&mut self, values: &[&dyn Display]) -> Result<()> {
        self.raw_write(values)?;
        writeln!(self.sink()?)?;
        Ok(())
    }

    /// Write trial starts, header and all frames to the destination
    ///
    /// Only the first call writes; later calls return `AlreadyFlushed`.
    pub fn flush(&mut self) -> Result<()> {
        self.ensure_not_flushed()?;
        // A failed write leaves partial output; never repeat it on drop
        self.flushed = true;

        let sink = self
            .destination
            .as_mut()
            .ok_or_else(released_destination)?;
        write_table(sink, &self.header, &self.trial_starts, &self.records)?;
        sink.flush()?;

        debug!(
            "Frame log written: {} frames, {} trials",
            self.records.len(),
            self.trial_starts.len()
        );
        Ok(())
    }

    /// Flush if needed and hand back the destination
    pub fn finish(mut self) -> Result<W> {
        if !self.flushed {
            self.flush()?;
        }
        let mut sink = self.destination.take().ok_or_else(released_destination)?;
        sink.flush()?;
        Ok(sink)
    }

    /// Number of frames appended so far
    pub fn frame_count(&self) -> usize {
        self.records.len()
    }

    /// Number of trial starts marked so far
    pub fn trial_count(&self) -> usize {
        self.trial_starts.len()
    }

    /// Maximum number of frames
    pub fn capacity_frames(&self) -> usize {
        self.capacity_frames
    }

    /// Maximum number of trial starts
    pub fn capacity_trials(&self) -> usize {
        self.capacity_trials
    }

    /// Frame indices recorded at each trial start
    pub fn trial_starts(&self) -> &[usize] {
        &self.trial_starts
    }

    /// All appended records
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Get the record for a frame
    pub fn record(&self, frame: usize) -> Option<&R> {
        self.records.get(frame)
    }

    /// Check whether the table has been written
    pub fn is_flushed(&self) -> bool {
        self.flushed
    }

    fn ensure_not_flushed(&self) -> Result<()> {
        if self.flushed {
            Err(FrameLogError::AlreadyFlushed)
        } else {
            Ok(())
        }
    }

    fn sink(&mut self) -> io::Result<&mut W> {
        self.destination.as_mut().ok_or_else(released_destination)
    }
}

impl<R: Record, W: Write> Drop for FrameTable<R, W> {
    fn drop(&mut self) {
        let Some(sink) = self.destination.as_mut() else {
            return;
        };
        if self.flushed {
            // Raw writes after the table may still be buffered
            if let Err(e) = sink.flush() {
                warn!("Failed to flush frame log on drop: {e}");
            }
            return;
        }
        if let Err(e) = self.flush() {
            warn!("Failed to write frame log on drop: {e}");
        }
    }
}

fn released_destination() -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, "frame log destination released")
}
