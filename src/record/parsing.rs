//! Record decoding and [Entity] implementation
use hifitime::TimeScale;

use crate::{
    entity::{Entity, SENTINEL},
    epoch::from_gregorian,
    fields::{parse_float, parse_int, text},
    lines::{LineSink, LineSource},
    prelude::{Error, ParsingError, Record, Session},
    record::{format_record, Une},
};

#[cfg(feature = "log")]
use log::debug;

/// Lines shorter than the sentinel do not carry anything
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim_end().len() < SENTINEL.len()
}

/// True for the line that terminates the record section
pub(crate) fn is_sentinel(line: &str) -> bool {
    line.starts_with(SENTINEL)
}

/// Decodes one record line, with epoch expressed in given [TimeScale]
pub(crate) fn parse_record(line: &str, ts: TimeScale) -> Result<Record, ParsingError> {
    let station = text(line, 0, 19, "station")?.trim_end().to_string();
    let flag = text(line, 19, 1, "flag")?
        .chars()
        .next()
        .ok_or(ParsingError::MissingField("flag"))?;

    let y = parse_int::<i32>(line, 24, 4, "year")?;
    let m = parse_int::<u8>(line, 29, 2, "month")?;
    let d = parse_int::<u8>(line, 32, 2, "day")?;
    let hh = parse_int::<u8>(line, 35, 2, "hours")?;
    let mm = parse_int::<u8>(line, 38, 2, "minutes")?;
    let ss = parse_int::<u8>(line, 41, 2, "seconds")?;
    let epoch = from_gregorian(y, m, d, hh, mm, ss, ts)?;

    let modeled_zenith_delay = parse_float(line, 68, 7, "MOD_U")?;
    let corr_u = parse_float(line, 75, 8, "CORR_U")?;
    let sigma_u = parse_float(line, 83, 8, "SIGMA_U")?;
    let total_zenith_delay = parse_float(line, 91, 8, "TOTAL_U")?;
    let corr_n = parse_float(line, 99, 9, "CORR_N")?;
    let sigma_n = parse_float(line, 108, 8, "SIGMA_N")?;
    let corr_e = parse_float(line, 116, 9, "CORR_E")?;
    let sigma_e = parse_float(line, 125, 8, "SIGMA_E")?;

    Ok(Record {
        station,
        flag,
        epoch,
        modeled_zenith_delay,
        correction: Une::new(corr_u, corr_n, corr_e),
        sigma: Une::new(sigma_u, sigma_n, sigma_e),
        total_zenith_delay,
    })
}

impl Entity for Record {
    /// Decodes the next [Record], skipping blank lines.
    /// Returns None once the "EOF" sentinel is reached, or when the input
    /// ended without it (in which case a warning is recorded).
    fn read<S: LineSource>(session: &mut Session, source: &mut S) -> Result<Option<Self>, Error> {
        loop {
            let mut record = None;

            match session.lookahead.take() {
                Some(line) if is_blank(&line) => {},
                Some(line) if is_sentinel(&line) => {
                    session.lookahead = Some(line);
                    return Ok(None);
                },
                Some(line) => {
                    let ts = session.record_timescale().unwrap_or(TimeScale::GPST);
                    if session.header.is_none() && session.last_epoch.is_none() {
                        session.warn(format!(
                            "line {}: record without header, assuming {}",
                            source.line_number(),
                            ts
                        ));
                    }
                    let rec = parse_record(&line, ts)
                        .map_err(|e| Error::parsing(source.line_number(), e))?;
                    session.last_epoch = Some(rec.epoch);
                    record = Some(rec);
                },
                None => {},
            }

            if session.eof_reached {
                session.lookahead = Some(SENTINEL.to_string());
            } else {
                match source.next_line() {
                    Ok(line) => session.lookahead = Some(line),
                    Err(Error::UnexpectedEof(line)) => {
                        session.eof_reached = true;
                        session.lookahead = Some(SENTINEL.to_string());
                        session.warn(format!(
                            "line {}: input terminated without \"{}\" sentinel",
                            line, SENTINEL
                        ));
                    },
                    Err(e) => return Err(e),
                }
            }

            if let Some(rec) = record {
                #[cfg(feature = "log")]
                debug!("{:?}", rec);
                return Ok(Some(rec));
            }
        }
    }

    /// Produces this [Record], expressed in the [TimeScale] of the [crate::prelude::Header]
    fn write<K: LineSink>(&self, session: &mut Session, sink: &mut K) -> Result<(), Error> {
        let ts = session
            .header
            .as_ref()
            .map(|h| h.timescale)
            .ok_or(Error::MissingHeader)?;
        let line = format_record(self, ts)?;
        sink.put_line(&line)?;
        session.last_epoch = Some(self.epoch);
        Ok(())
    }
}
