//! Header decoding and [Entity] implementation
use std::str::FromStr;

use hifitime::{Epoch, TimeScale};

use crate::{
    entity::Entity,
    epoch::{expand_year, from_gregorian, parse_month},
    fields::{column, parse_float, parse_int, text},
    lines::{LineReader, LineSink, LineSource},
    prelude::{AprioriModel, Error, GradientModel, Header, MappingFunction, ParsingError, Session},
};

#[cfg(feature = "log")]
use log::debug;

/// Label that must be found at given offset of the models line
fn expect_label(line: &str, offset: usize, label: &'static str) -> Result<(), ParsingError> {
    let found = column(line, offset, label.len()).unwrap_or("");
    if found == label {
        Ok(())
    } else {
        Err(ParsingError::LabelMismatch {
            expected: label,
            found: found.to_string(),
        })
    }
}

/// Decodes title and calculation time from the first header line
pub(crate) fn parse_title_line(
    line: &str,
    ts: TimeScale,
) -> Result<(String, Epoch), ParsingError> {
    let title = text(line, 0, 65, "title")?.trim_end().to_string();

    let day = parse_int::<u8>(line, 65, 2, "calculation day")?;
    let month = column(line, 68, 3).ok_or(ParsingError::MissingField("calculation month"))?;
    let month = parse_month(month)?;
    let year = parse_int::<i32>(line, 72, 2, "calculation year")?;
    let hour = parse_int::<u8>(line, 75, 2, "calculation hour")?;
    let minute = parse_int::<u8>(line, 78, 2, "calculation minute")?;

    let t = from_gregorian(expand_year(year), month, day, hour, minute, 0, ts)?;
    Ok((title, t))
}

/// Modeling parameters, as described by the third header line
pub(crate) struct Models {
    pub apriori_model: AprioriModel,
    pub mapping_function: MappingFunction,
    pub gradient_model: GradientModel,
    pub elevation_cutoff: f64,
    pub tabular_interval: u32,
    pub tabular_count: u32,
}

/// Decodes the third header line
pub(crate) fn parse_models_line(line: &str) -> Result<Models, ParsingError> {
    expect_label(line, 1, "A PRIORI MODEL")?;
    expect_label(line, 24, "MAPPING FUNCTION")?;
    expect_label(line, 49, "GRADIENT MODEL")?;
    expect_label(line, 72, "MIN. ELEVATION")?;
    expect_label(line, 95, "TABULAR INTERVAL")?;

    let apriori_model = AprioriModel::from_str(column(line, 18, 3).unwrap_or(""))?;
    let mapping_function = MappingFunction::from_str(column(line, 45, 1).unwrap_or(""))?;
    let gradient_model = GradientModel::from_str(column(line, 68, 1).unwrap_or(""))?;

    let elevation_cutoff = parse_float(line, 90, 2, "elevation cut-off")?;
    let tabular_interval = parse_int::<u32>(line, 112, 6, "tabular interval")?;
    let tabular_count = parse_int::<u32>(line, 120, 6, "tabular count")?;

    Ok(Models {
        apriori_model,
        mapping_function,
        gradient_model,
        elevation_cutoff,
        tabular_interval,
        tabular_count,
    })
}

impl Entity for Header {
    /// Consumes the six header lines. The decoded [Header] becomes
    /// the reference of the following records.
    fn read<S: LineSource>(session: &mut Session, source: &mut S) -> Result<Option<Self>, Error> {
        let timescale = session.timescale.unwrap_or(TimeScale::GPST);

        let line = source.next_line()?;
        let (title, calculation_time) = parse_title_line(&line, timescale)
            .map_err(|e| Error::parsing(source.line_number(), e))?;

        // separator
        let _ = source.next_line()?;

        let line = source.next_line()?;
        let models =
            parse_models_line(&line).map_err(|e| Error::parsing(source.line_number(), e))?;

        let _ = source.next_line()?;
        let table_header = source.next_line()?;
        let _ = source.next_line()?;

        let header = Header {
            title,
            calculation_time,
            apriori_model: models.apriori_model,
            mapping_function: models.mapping_function,
            gradient_model: models.gradient_model,
            elevation_cutoff: models.elevation_cutoff,
            tabular_interval: models.tabular_interval,
            tabular_count: models.tabular_count,
            table_header,
            timescale,
        };

        #[cfg(feature = "log")]
        debug!("{:?}", header);

        session.header = Some(header.clone());
        session.lookahead = None;
        session.last_epoch = None;
        session.eof_reached = false;
        Ok(Some(header))
    }

    fn write<K: LineSink>(&self, session: &mut Session, sink: &mut K) -> Result<(), Error> {
        for line in self.format_lines()? {
            sink.put_line(&line)?;
        }
        session.header = Some(self.clone());
        session.eof_written = false;
        Ok(())
    }
}

impl FromStr for Header {
    type Err = Error;
    /// Decodes [Header] from its six lines, expressed in [TimeScale::GPST]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut session = Session::default();
        let mut reader = LineReader::new(s.as_bytes());
        Self::read(&mut session, &mut reader)?.ok_or(Error::UnexpectedEof(reader.line_number()))
    }
}
