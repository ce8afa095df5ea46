//! TRP file stream: owns the input or output, and its [Session]
use std::{
    fs::{File, OpenOptions},
    io::{BufRead, Write},
    path::Path,
};

use hifitime::TimeScale;

use crate::{
    entity::{write_sentinel, Entity},
    lines::{LineReader, LineSink, LineSource, LineWriter},
    prelude::{Error, Header, Record, Session},
    reader::{is_gzip, BufferedReader},
    writer::BufferedWriter,
};

#[cfg(feature = "log")]
use log::{debug, error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gzip compression level used when producing .gz files
#[cfg(feature = "flate2")]
const GZIP_COMPRESSION_LEVEL: u32 = 6;

/// How a [Stream] accesses its file
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OpenMode {
    /// Read existing file
    Read,
    /// Create (or truncate) file
    Write,
    /// Append to existing file, created if need be
    Append,
}

impl OpenMode {
    /// True for the modes that produce content
    pub fn is_writing(&self) -> bool {
        matches!(self, Self::Write | Self::Append)
    }
}

enum Handle {
    Reader(LineReader<Box<dyn BufRead + Send>>),
    Writer(LineWriter<BufferedWriter<Box<dyn Write + Send>>>),
}

/// [Stream] reads or writes one TRP file, one entity at a time.
/// In writing mode, the "EOF" sentinel is always produced when closing,
/// unless it was already written.
/// ```
/// use trp::prelude::*;
///
/// let mut stream = Stream::open("test_resources/TRP/COD23177.TRP", OpenMode::Read)
///     .unwrap();
///
/// let header = stream.read_header()
///     .unwrap();
/// assert_eq!(header.apriori_model, AprioriModel::GptDryGmfDry);
///
/// for record in stream.records() {
///     let record = record.unwrap();
///     assert_eq!(record.epoch.time_scale, TimeScale::GPST);
/// }
/// assert!(stream.warnings().is_empty());
/// ```
pub struct Stream {
    handle: Option<Handle>,
    writing_mode: bool,
    failed: bool,
    timescale: Option<TimeScale>,
    session: Session,
}

impl std::fmt::Debug for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Stream")
            .field("open", &self.is_open())
            .field("writing_mode", &self.writing_mode)
            .field("failed", &self.failed)
            .field("session", &self.session)
            .finish()
    }
}

impl Stream {
    /// Opens file located at `path`. Files terminated by ".gz" are
    /// seamlessly (de)compressed, if compiled with the "flate2" feature.
    pub fn open<P: AsRef<Path>>(path: P, mode: OpenMode) -> Result<Self, Error> {
        let handle = Self::open_handle(path.as_ref(), mode)?;
        Ok(Self {
            handle: Some(handle),
            writing_mode: mode.is_writing(),
            failed: false,
            timescale: None,
            session: Session::default(),
        })
    }
    /// Creates a reading [Stream] from any [BufRead]able interface
    pub fn from_reader<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self {
            handle: Some(Handle::Reader(LineReader::new(Box::new(reader)))),
            writing_mode: false,
            failed: false,
            timescale: None,
            session: Session::default(),
        }
    }
    /// Creates a writing [Stream] into any [Write]able interface
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        let writer: Box<dyn Write + Send> = Box::new(writer);
        Self {
            handle: Some(Handle::Writer(LineWriter::new(BufferedWriter::plain(
                writer,
            )))),
            writing_mode: true,
            failed: false,
            timescale: None,
            session: Session::default(),
        }
    }
    /// Closes current file, if any, and opens file located at `path`.
    /// All session state is reset, only the [TimeScale] preference is kept.
    pub fn reopen<P: AsRef<Path>>(&mut self, path: P, mode: OpenMode) -> Result<(), Error> {
        self.close()?;
        let handle = Self::open_handle(path.as_ref(), mode)?;
        self.handle = Some(handle);
        self.writing_mode = mode.is_writing();
        self.failed = false;
        self.session = match self.timescale {
            Some(ts) => Session::with_timescale(ts),
            None => Session::default(),
        };
        Ok(())
    }
    /// Defines the [TimeScale] that applies to the file content,
    /// when reading. Default is [TimeScale::GPST].
    pub fn with_timescale(mut self, ts: TimeScale) -> Self {
        self.timescale = Some(ts);
        self.session.timescale = Some(ts);
        self
    }
    fn open_handle(path: &Path, mode: OpenMode) -> Result<Handle, Error> {
        #[cfg(feature = "log")]
        debug!("opening {} ({:?})", path.display(), mode);

        match mode {
            OpenMode::Read => {
                let reader: Box<dyn BufRead + Send> = Box::new(BufferedReader::new(path)?);
                Ok(Handle::Reader(LineReader::new(reader)))
            },
            OpenMode::Write | OpenMode::Append => {
                let file = if mode == OpenMode::Append {
                    OpenOptions::new().append(true).create(true).open(path)?
                } else {
                    File::create(path)?
                };
                let file: Box<dyn Write + Send> = Box::new(file);
                let writer = if is_gzip(path) {
                    #[cfg(feature = "flate2")]
                    {
                        BufferedWriter::gzip(file, GZIP_COMPRESSION_LEVEL)
                    }
                    #[cfg(not(feature = "flate2"))]
                    {
                        return Err(Error::Io(std::io::Error::new(
                            std::io::ErrorKind::Unsupported,
                            ".gz data requires flate2 feature",
                        )));
                    }
                } else {
                    BufferedWriter::plain(file)
                };
                Ok(Handle::Writer(LineWriter::new(writer)))
            },
        }
    }
    /// True until [Self::close] is called
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }
    /// True if this [Stream] was opened in [OpenMode::Write] or [OpenMode::Append]
    pub fn is_writing_mode(&self) -> bool {
        self.writing_mode
    }
    /// True once an operation failed on this [Stream]
    pub fn is_failed(&self) -> bool {
        self.failed
    }
    /// Number of lines consumed (or produced) so far
    pub fn line_number(&self) -> usize {
        match &self.handle {
            Some(Handle::Reader(reader)) => reader.line_number(),
            Some(Handle::Writer(writer)) => writer.line_number(),
            None => 0,
        }
    }
    /// Returns [Session] of this [Stream]
    pub fn session(&self) -> &Session {
        &self.session
    }
    /// Returns [Header] that was last parsed or written
    pub fn header(&self) -> Option<&Header> {
        self.session.header()
    }
    /// Non fatal issues encountered so far
    pub fn warnings(&self) -> &[String] {
        self.session.warnings()
    }
    fn read_entity<E: Entity>(&mut self) -> Result<Option<E>, Error> {
        let result = match &mut self.handle {
            Some(Handle::Reader(reader)) => E::read(&mut self.session, reader),
            Some(Handle::Writer(_)) => return Err(Error::NotReadable),
            None => return Err(Error::Closed),
        };
        if result.is_err() {
            self.failed = true;
        }
        result
    }
    fn write_entity<E: Entity>(&mut self, entity: &E) -> Result<(), Error> {
        let result = match &mut self.handle {
            Some(Handle::Writer(writer)) => entity.write(&mut self.session, writer),
            Some(Handle::Reader(_)) => return Err(Error::NotWritable),
            None => return Err(Error::Closed),
        };
        if result.is_err() {
            self.failed = true;
        }
        result
    }
    /// Parses the [Header], which must be found at the current position.
    pub fn read_header(&mut self) -> Result<Header, Error> {
        let line = self.line_number();
        match self.read_entity::<Header>() {
            Ok(Some(header)) => Ok(header),
            Ok(None) => {
                self.failed = true;
                Err(Error::UnexpectedEof(line))
            },
            Err(e) => Err(e),
        }
    }
    /// Parses the next [Record]. Returns None once the "EOF" sentinel
    /// (or end of input) is reached.
    pub fn next_record(&mut self) -> Result<Option<Record>, Error> {
        self.read_entity::<Record>()
    }
    /// Iterates over the remaining [Record]s. Iteration stops
    /// after the first error.
    pub fn records(&mut self) -> Records<'_> {
        Records {
            stream: self,
            done: false,
        }
    }
    /// Produces given [Header], which becomes the reference of the following records
    pub fn write_header(&mut self, header: &Header) -> Result<(), Error> {
        self.write_entity(header)
    }
    /// Produces given [Record], expressed in the [TimeScale] of the last written [Header]
    pub fn write_record(&mut self, record: &Record) -> Result<(), Error> {
        self.write_entity(record)
    }
    /// Produces the "EOF" sentinel, unless it was already written
    pub fn write_eof(&mut self) -> Result<(), Error> {
        let result = match &mut self.handle {
            Some(Handle::Writer(writer)) => write_sentinel(&mut self.session, writer),
            Some(Handle::Reader(_)) => return Err(Error::NotWritable),
            None => return Err(Error::Closed),
        };
        if result.is_err() {
            self.failed = true;
        }
        result
    }
    /// Closes this [Stream]. In writing mode, the "EOF" sentinel is
    /// produced if it was not written yet, and all content is flushed.
    /// Closing a closed [Stream] has no effect.
    pub fn close(&mut self) -> Result<(), Error> {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => return Ok(()),
        };
        if let Handle::Writer(mut writer) = handle {
            let result = write_sentinel(&mut self.session, &mut writer)
                .and_then(|_| writer.into_inner().finish().map_err(Error::Io))
                .and_then(|mut inner| inner.flush().map_err(Error::Io));
            if result.is_err() {
                self.failed = true;
            }
            result?;
        }

        #[cfg(feature = "log")]
        debug!("stream closed");

        Ok(())
    }
}

impl Drop for Stream {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            #[cfg(feature = "log")]
            error!("failed to close stream: {}", e);
            #[cfg(not(feature = "log"))]
            let _ = e;
        }
    }
}

/// Iterator over the [Record]s of a [Stream]
pub struct Records<'a> {
    stream: &'a mut Stream,
    done: bool,
}

impl Iterator for Records<'_> {
    type Item = Result<Record, Error>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.stream.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            },
            Err(e) => {
                self.done = true;
                Some(Err(e))
            },
        }
    }
}
