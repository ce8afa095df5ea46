#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate num_derive;

pub mod entity;
pub mod error;
pub mod header;
pub mod lines;
pub mod reader;
pub mod record;
pub mod session;
pub mod stream;
pub mod writer;

mod epoch;
mod fields;

#[cfg(test)]
mod tests;

use itertools::Itertools;
use std::{
    io::{BufRead, BufWriter, Write},
    path::Path,
    str::FromStr,
};

use crate::{
    entity::{Entity, SENTINEL},
    lines::{LineReader, LineSource},
    prelude::{Epoch, Error, FormattingError, Header, OpenMode, Record, Session, Stream},
    reader::BufferedReader,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod prelude {
    // export
    pub use crate::{
        entity::Entity,
        error::{Error, FormattingError, ParsingError},
        header::{AprioriModel, GradientModel, Header, MappingFunction},
        lines::{LineReader, LineSink, LineSource, LineWriter},
        record::{Record, Une},
        session::Session,
        stream::{OpenMode, Records, Stream},
        TRP,
    };
    // pub re-export
    pub use hifitime::{Duration, Epoch, TimeScale};
}

/// [TRP] is the complete content of a tropospheric delay file:
/// its [Header] followed by all [Record]s.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TRP {
    /// [Header] of this file
    pub header: Header,
    /// All [Record]s, in order of appearance
    pub records: Vec<Record>,
    /// Non fatal issues encountered while parsing
    pub warnings: Vec<String>,
}

impl TRP {
    /// Parses [TRP] from any [BufRead]able interface
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut session = Session::default();
        let mut reader = LineReader::new(reader);

        let header = Header::read(&mut session, &mut reader)?
            .ok_or(Error::UnexpectedEof(reader.line_number()))?;

        let mut records = Vec::new();
        while let Some(record) = Record::read(&mut session, &mut reader)? {
            records.push(record);
        }

        Ok(Self {
            header,
            records,
            warnings: session.warnings,
        })
    }
    /// Parses given TRP file, with possible seamless
    /// .gz decompression, if compiled with the "flate2" feature.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let reader = BufferedReader::new(path)?;
        Self::from_reader(reader)
    }
    /// Dumps [TRP] into given file, with possible seamless
    /// .gz compression, if compiled with the "flate2" feature.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut stream = Stream::open(path, OpenMode::Write)?;
        stream.write_header(&self.header)?;
        for record in self.records.iter() {
            stream.write_record(record)?;
        }
        stream.close()
    }
    /// Formats [TRP] into given [BufWriter], terminated by the "EOF" sentinel
    pub fn format<W: Write>(&self, w: &mut BufWriter<W>) -> Result<(), FormattingError> {
        self.header.format(w)?;
        for record in self.records.iter() {
            record.format(w, &self.header)?;
        }
        writeln!(w, "{}", SENTINEL)?;
        Ok(())
    }
    /// Returns a unique station name iterator, in order of appearance
    pub fn stations(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.station.as_str()).unique()
    }
    /// Returns all [Record]s of given station
    pub fn station_records<'a>(&'a self, station: &'a str) -> impl Iterator<Item = &'a Record> + 'a {
        self.records.iter().filter(move |r| r.station == station)
    }
    /// Returns a unique and sorted [Epoch] iterator
    pub fn epochs(&self) -> impl Iterator<Item = Epoch> + '_ {
        self.records.iter().map(|r| r.epoch).unique().sorted()
    }
    /// Returns first [Epoch]
    pub fn first_epoch(&self) -> Option<Epoch> {
        self.epochs().next()
    }
    /// Returns last [Epoch]
    pub fn last_epoch(&self) -> Option<Epoch> {
        self.epochs().last()
    }
}

impl FromStr for TRP {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}
