//! Resumable parsing and formatting state
use hifitime::{Epoch, TimeScale};

use crate::prelude::Header;

#[cfg(feature = "log")]
use log::warn;

/// [Session] is the state carried from one entity to the next,
/// on the same input or output. It is owned by the [crate::prelude::Stream],
/// but can be used on its own with any [crate::prelude::LineSource]
/// or [crate::prelude::LineSink].
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Most recently parsed or formatted [Header]
    pub(crate) header: Option<Header>,
    /// [TimeScale] to assume when decoding a header
    pub(crate) timescale: Option<TimeScale>,
    /// Physical line read ahead, not processed yet
    pub(crate) lookahead: Option<String>,
    /// Epoch of the last parsed record
    pub(crate) last_epoch: Option<Epoch>,
    /// Input ended without "EOF" sentinel
    pub(crate) eof_reached: bool,
    /// "EOF" sentinel has been produced
    pub(crate) eof_written: bool,
    /// Non fatal issues encountered so far
    pub(crate) warnings: Vec<String>,
}

impl Session {
    /// Creates a new [Session] that assumes given [TimeScale]
    /// when decoding the [Header].
    pub fn with_timescale(ts: TimeScale) -> Self {
        Self {
            timescale: Some(ts),
            ..Default::default()
        }
    }
    /// Returns [Header] of this session, if one was processed
    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }
    /// Returns epoch of the last parsed record
    pub fn last_epoch(&self) -> Option<Epoch> {
        self.last_epoch
    }
    /// Non fatal issues encountered so far
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
    /// True if input terminated without "EOF" sentinel
    pub fn eof_reached(&self) -> bool {
        self.eof_reached
    }
    /// True if the "EOF" sentinel has already been produced
    pub fn eof_written(&self) -> bool {
        self.eof_written
    }
    /// [TimeScale] of the records: the one of the [Header],
    /// or the one assumed when reading.
    pub(crate) fn record_timescale(&self) -> Option<TimeScale> {
        self.header.as_ref().map(|h| h.timescale).or(self.timescale)
    }
    pub(crate) fn warn(&mut self, warning: String) {
        #[cfg(feature = "log")]
        warn!("{}", warning);
        self.warnings.push(warning);
    }
}
