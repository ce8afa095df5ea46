//! Header formatting
use std::io::{BufWriter, Write};

use crate::{
    epoch::month_code,
    fields::{fit, fit_text},
    prelude::{FormattingError, Header},
};

impl Header {
    /// Produces the six lines of this [Header], without termination.
    /// Calculation time is expressed in the [Header] [hifitime::TimeScale].
    pub fn format_lines(&self) -> Result<Vec<String>, FormattingError> {
        let title = fit_text(self.title.clone(), 65, "title")?;
        let (y, m, d, hh, mm, _, _) = self.calculation_time.to_gregorian(self.timescale);

        let apriori = fit(format!("{:>5}", self.apriori_model.code()), 5, "a priori model")?;
        let cutoff = fit(
            format!("{:>5.0}", self.elevation_cutoff),
            5,
            "elevation cut-off",
        )?;
        let interval = fit(
            format!("{:>6}", self.tabular_interval),
            6,
            "tabular interval",
        )?;
        let count = fit(format!("{:>6}", self.tabular_count), 6, "tabular count")?;

        Ok(vec![
            format!(
                "{:<65}{:02}-{}-{:02} {:02}:{:02}",
                title,
                d,
                month_code(m),
                y.rem_euclid(100),
                hh,
                mm
            ),
            "-".repeat(133),
            format!(
                " A PRIORI MODEL:{}   MAPPING FUNCTION:{:>5}   GRADIENT MODEL:{:>5}   MIN. ELEVATION:{}   TABULAR INTERVAL:{} /{}",
                apriori,
                self.mapping_function.code(),
                self.gradient_model.code(),
                cutoff,
                interval,
                count,
            ),
            String::new(),
            self.table_header.clone(),
            String::new(),
        ])
    }
    /// Formats this [Header] into given [BufWriter]
    pub fn format<W: Write>(&self, w: &mut BufWriter<W>) -> Result<(), FormattingError> {
        for line in self.format_lines()? {
            writeln!(w, "{}", line)?;
        }
        Ok(())
    }
}
