//! TRP header block
mod formatting;
mod models;
mod parsing;

pub use models::{AprioriModel, GradientModel, MappingFunction};

use crate::epoch;
use hifitime::{Epoch, TimeScale};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Column labels line, as produced by the processing software
pub(crate) const DEFAULT_TABLE_HEADER: &str = " STATION NAME     FLG   YYYY MM DD HH MM SS                         MOD_U    CORR_U SIGMA_U TOTAL_U   CORR_N SIGMA_N   CORR_E SIGMA_E";

/// [Header] describes the six line block found at the top of a TRP file.
/// A valid [Header] must be parsed before any record can be interpreted,
/// because it defines the [TimeScale] of the following epochs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Header {
    /// Title of this file (65 columns at most)
    pub title: String,
    /// Datetime of the calculation, minute precision
    pub calculation_time: Epoch,
    /// A priori troposphere model
    pub apriori_model: AprioriModel,
    /// Mapping function used in the estimation
    pub mapping_function: MappingFunction,
    /// Gradient estimation model
    pub gradient_model: GradientModel,
    /// Elevation cut-off angle, in degrees
    pub elevation_cutoff: f64,
    /// Tabular interval, in seconds
    pub tabular_interval: u32,
    /// Second tabular value of the "TABULAR INTERVAL" field
    pub tabular_count: u32,
    /// Column labels line, kept as is
    pub table_header: String,
    /// [TimeScale] that applies to all epochs of this file
    pub timescale: TimeScale,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            title: String::new(),
            calculation_time: epoch::now(),
            apriori_model: AprioriModel::default(),
            mapping_function: MappingFunction::default(),
            gradient_model: GradientModel::default(),
            elevation_cutoff: 0.0,
            tabular_interval: 0,
            tabular_count: 0,
            table_header: DEFAULT_TABLE_HEADER.to_string(),
            timescale: TimeScale::GPST,
        }
    }
}

impl Header {
    /// Copies and returns [Header] with given title
    pub fn with_title(&self, title: &str) -> Self {
        let mut s = self.clone();
        s.title = title.to_string();
        s
    }
    /// Copies and returns [Header] with given calculation time
    pub fn with_calculation_time(&self, t: Epoch) -> Self {
        let mut s = self.clone();
        s.calculation_time = t;
        s
    }
    /// Copies and returns [Header] with given [AprioriModel]
    pub fn with_apriori_model(&self, model: AprioriModel) -> Self {
        let mut s = self.clone();
        s.apriori_model = model;
        s
    }
    /// Copies and returns [Header] with given [MappingFunction]
    pub fn with_mapping_function(&self, mf: MappingFunction) -> Self {
        let mut s = self.clone();
        s.mapping_function = mf;
        s
    }
    /// Copies and returns [Header] with given [GradientModel]
    pub fn with_gradient_model(&self, model: GradientModel) -> Self {
        let mut s = self.clone();
        s.gradient_model = model;
        s
    }
    /// Copies and returns [Header] with given elevation cut-off angle (degrees)
    pub fn with_elevation_cutoff(&self, angle: f64) -> Self {
        let mut s = self.clone();
        s.elevation_cutoff = angle;
        s
    }
    /// Copies and returns [Header] with given tabular interval and count
    pub fn with_tabular(&self, interval: u32, count: u32) -> Self {
        let mut s = self.clone();
        s.tabular_interval = interval;
        s.tabular_count = count;
        s
    }
    /// Copies and returns [Header] with given column labels line
    pub fn with_table_header(&self, table_header: &str) -> Self {
        let mut s = self.clone();
        s.table_header = table_header.to_string();
        s
    }
    /// Copies and returns [Header] expressed in given [TimeScale]
    pub fn with_timescale(&self, ts: TimeScale) -> Self {
        let mut s = self.clone();
        s.timescale = ts;
        s
    }
}
