//! TRP delay records
mod formatting;
mod parsing;

pub(crate) use formatting::format_record;
pub(crate) use parsing::parse_record;

use hifitime::{Epoch, TimeScale};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Up, North, East components, in meters
#[derive(Default, Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Une {
    pub up: f64,
    pub north: f64,
    pub east: f64,
}

impl Une {
    pub fn new(up: f64, north: f64, east: f64) -> Self {
        Self { up, north, east }
    }
}

/// [Record] is one tropospheric estimate, for one station at one epoch.
/// Delays are expressed in meters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Record {
    /// Station name (19 columns at most)
    pub station: String,
    /// Single character flag
    pub flag: char,
    /// Epoch of this estimate, in the [TimeScale] of the header
    pub epoch: Epoch,
    /// A priori (modeled) zenith delay (`MOD_U`)
    pub modeled_zenith_delay: f64,
    /// Estimated corrections: zenith (`CORR_U`) and gradients (`CORR_N`, `CORR_E`)
    pub correction: Une,
    /// Formal errors of the corrections (`SIGMA_U`, `SIGMA_N`, `SIGMA_E`)
    pub sigma: Une,
    /// Total zenith delay (`TOTAL_U`)
    pub total_zenith_delay: f64,
}

impl Record {
    /// Builds a [Record] for given station and [Epoch], with blank flag
    /// and null values.
    pub fn new(station: &str, epoch: Epoch) -> Self {
        Self {
            station: station.to_string(),
            flag: ' ',
            epoch,
            modeled_zenith_delay: 0.0,
            correction: Une::default(),
            sigma: Une::default(),
            total_zenith_delay: 0.0,
        }
    }
    /// Copies and returns [Record] with given station name
    pub fn with_station(&self, station: &str) -> Self {
        let mut s = self.clone();
        s.station = station.to_string();
        s
    }
    /// Copies and returns [Record] with given flag
    pub fn with_flag(&self, flag: char) -> Self {
        let mut s = self.clone();
        s.flag = flag;
        s
    }
    /// Copies and returns [Record] with given [Epoch]
    pub fn with_epoch(&self, epoch: Epoch) -> Self {
        let mut s = self.clone();
        s.epoch = epoch;
        s
    }
    /// Copies and returns [Record] with given modeled zenith delay
    pub fn with_modeled_zenith_delay(&self, delay: f64) -> Self {
        let mut s = self.clone();
        s.modeled_zenith_delay = delay;
        s
    }
    /// Copies and returns [Record] with given corrections
    pub fn with_correction(&self, correction: Une) -> Self {
        let mut s = self.clone();
        s.correction = correction;
        s
    }
    /// Copies and returns [Record] with given correction sigmas
    pub fn with_sigma(&self, sigma: Une) -> Self {
        let mut s = self.clone();
        s.sigma = sigma;
        s
    }
    /// Copies and returns [Record] with given total zenith delay
    pub fn with_total_zenith_delay(&self, delay: f64) -> Self {
        let mut s = self.clone();
        s.total_zenith_delay = delay;
        s
    }
    /// Returns the [TimeScale] in which this [Record] is expressed
    pub fn timescale(&self) -> TimeScale {
        self.epoch.time_scale
    }
}

impl std::fmt::Display for Record {
    /// Formats this [Record] as a single line, in its own [TimeScale].
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let line = format_record(self, self.epoch.time_scale).map_err(|_| std::fmt::Error)?;
        f.write_str(&line)
    }
}

impl std::str::FromStr for Record {
    type Err = crate::prelude::ParsingError;
    /// Decodes a single [Record] line, expressed in [TimeScale::GPST]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_record(s, TimeScale::GPST)
    }
}
