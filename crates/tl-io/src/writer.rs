//! Schedule writer.
//!
//! # Format
//!
//! ```text
//! 3                   number of scheduled intersections
//! 1                   intersection id
//! 2                   number of green phases
//! rue-d-athenes 2     street name, duration (longest first)
//! rue-d-amsterdam 1
//! 0
//! 1
//! rue-de-londres 2
//! ...
//! ```
//!
//! Intersections without incoming streets have no schedule and are omitted.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Writer, WriterBuilder};
use log::debug;

use tl_network::TrafficNetwork;
use tl_schedule::SolvedSchedules;

use crate::{FormatError, FormatResult};

/// Writes solved schedules to any `Write` sink.
pub struct ScheduleWriter<W: Write> {
    out:      Writer<W>,
    finished: bool,
}

impl ScheduleWriter<File> {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &Path) -> FormatResult<Self> {
        Ok(Self::from_writer(File::create(path)?))
    }
}

impl<W: Write> ScheduleWriter<W> {
    pub fn from_writer(inner: W) -> Self {
        let out = WriterBuilder::new()
            .delimiter(b' ')
            .flexible(true)
            .quote_style(QuoteStyle::Never)
            .from_writer(inner);
        Self { out, finished: false }
    }

    /// Write every schedule in `solved`, resolving street names through
    /// `network`.
    pub fn write_solution(
        &mut self,
        network: &TrafficNetwork,
        solved:  &SolvedSchedules,
    ) -> FormatResult<()> {
        self.out.write_record([solved.schedules.len().to_string()])?;
        for schedule in &solved.schedules {
            self.out.write_record([schedule.intersection.0.to_string()])?;
            self.out.write_record([schedule.entries.len().to_string()])?;
            for &(street, duration) in &schedule.entries {
                let duration = duration.to_string();
                self.out.write_record([network.name(street), duration.as_str()])?;
            }
        }
        debug!("wrote {} schedules", solved.schedules.len());
        Ok(())
    }

    /// Flush the underlying sink.
    ///
    /// Idempotent; later calls are no-ops.
    pub fn finish(&mut self) -> FormatResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying sink.
    pub fn into_inner(mut self) -> FormatResult<W> {
        self.finish()?;
        self.out.into_inner().map_err(|e| FormatError::Io(e.into_error()))
    }
}

/// Write `solved` to `path`, flushing before returning.
pub fn write_solution(
    path:    &Path,
    network: &TrafficNetwork,
    solved:  &SolvedSchedules,
) -> FormatResult<()> {
    let mut writer = ScheduleWriter::create(path)?;
    writer.write_solution(network, solved)?;
    writer.finish()
}
