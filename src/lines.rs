//! Line oriented input / output, over which TRP entities are decoded and produced.
use std::io::{BufRead, Write};

use crate::prelude::{Error, FormattingError};

/// [LineSource] is a sequential source of physical lines
pub trait LineSource {
    /// Returns next line, without termination.
    /// Reaching end of input is reported as [Error::UnexpectedEof].
    fn next_line(&mut self) -> Result<String, Error>;
    /// Number of lines consumed so far
    fn line_number(&self) -> usize;
}

/// [LineSink] receives physical lines
pub trait LineSink {
    /// Appends one line, termination is added by the sink.
    fn put_line(&mut self, line: &str) -> Result<(), FormattingError>;
    /// Number of lines produced so far
    fn line_number(&self) -> usize;
}

/// [LineReader] is the [LineSource] over any [BufRead]able interface.
/// Both "\n" and "\r\n" terminations are supported.
#[derive(Debug)]
pub struct LineReader<R: BufRead> {
    reader: R,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
        }
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn next_line(&mut self) -> Result<String, Error> {
        let mut line = String::new();
        let size = self.reader.read_line(&mut line)?;
        if size == 0 {
            return Err(Error::UnexpectedEof(self.line_number));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        self.line_number += 1;
        Ok(line)
    }
    fn line_number(&self) -> usize {
        self.line_number
    }
}

/// [LineWriter] is the [LineSink] over any [Write]able interface
#[derive(Debug)]
pub struct LineWriter<W: Write> {
    writer: W,
    line_number: usize,
}

impl<W: Write> LineWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            line_number: 0,
        }
    }
    /// Flushes the inner [Write]able interface
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
    /// Returns inner [Write]able interface
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for LineWriter<W> {
    fn put_line(&mut self, line: &str) -> Result<(), FormattingError> {
        writeln!(self.writer, "{}", line)?;
        self.line_number += 1;
        Ok(())
    }
    fn line_number(&self) -> usize {
        self.line_number
    }
}
