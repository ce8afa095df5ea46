//! Record formatting
use std::io::{BufWriter, Write};

use hifitime::TimeScale;

use crate::{
    fields::{fit, fit_text},
    prelude::{FormattingError, Header, Record},
};

/// Produces the single line of given [Record], with epoch expressed in [TimeScale].
pub(crate) fn format_record(record: &Record, ts: TimeScale) -> Result<String, FormattingError> {
    let station = fit_text(record.station.clone(), 19, "station")?;
    let flag = fit_text(record.flag.to_string(), 1, "flag")?;
    let (y, m, d, hh, mm, ss, _) = record.epoch.to_gregorian(ts);
    let year = fit(format!("{:04}", y), 4, "year")?;

    let values = [
        fit(format!("{:<7.4}", record.modeled_zenith_delay), 7, "MOD_U")?,
        fit(format!("{:>8.5}", record.correction.up), 8, "CORR_U")?,
        fit(format!("{:>8.5}", record.sigma.up), 8, "SIGMA_U")?,
        fit(format!("{:>8.5}", record.total_zenith_delay), 8, "TOTAL_U")?,
        fit(format!("{:>9.5}", record.correction.north), 9, "CORR_N")?,
        fit(format!("{:>8.5}", record.sigma.north), 8, "SIGMA_N")?,
        fit(format!("{:>9.5}", record.correction.east), 9, "CORR_E")?,
        fit(format!("{:>8.5}", record.sigma.east), 8, "SIGMA_E")?,
    ];

    Ok(format!(
        "{:<19}{}    {} {:02} {:02} {:02} {:02} {:02}{:25}{}",
        station,
        flag,
        year,
        m,
        d,
        hh,
        mm,
        ss,
        "",
        values.concat()
    ))
}

impl Record {
    /// Formats this [Record] into given [BufWriter], expressed
    /// in the [TimeScale] of given [Header].
    pub fn format<W: Write>(
        &self,
        w: &mut BufWriter<W>,
        header: &Header,
    ) -> Result<(), FormattingError> {
        let line = format_record(self, header.timescale)?;
        writeln!(w, "{}", line)?;
        Ok(())
    }
}
