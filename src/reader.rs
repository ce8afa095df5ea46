//! Buffered Reader wrapper, for efficient data reading
//! and integrated .gz decompression.
#[cfg(feature = "flate2")]
use flate2::read::MultiGzDecoder;

use std::{
    fs::File,
    io::{BufRead, BufReader, Error, ErrorKind, Read},
    path::Path,
};

/// [BufferedReader] is the input abstraction of TRP files,
/// that may be gzip compressed.
#[derive(Debug)]
pub enum BufferedReader {
    /// Readable (plain) file
    PlainFile(BufReader<File>),
    /// gzip compressed file. Appended gzip members are supported.
    #[cfg(feature = "flate2")]
    GzFile(BufReader<MultiGzDecoder<File>>),
}

impl BufferedReader {
    /// Builds a new [BufferedReader] for efficient file iteration.
    /// Files terminated by ".gz" are decompressed on the fly.
    pub fn new<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        let f = File::open(path)?;
        if is_gzip(path) {
            #[cfg(feature = "flate2")]
            {
                Ok(Self::GzFile(BufReader::new(MultiGzDecoder::new(f))))
            }
            #[cfg(not(feature = "flate2"))]
            {
                Err(Error::new(
                    ErrorKind::Unsupported,
                    ".gz data requires flate2 feature",
                ))
            }
        } else if path.extension().map(|ext| ext == "Z").unwrap_or(false) {
            Err(Error::new(
                ErrorKind::Unsupported,
                ".Z decompression is not supported: uncompress manually",
            ))
        } else {
            Ok(Self::PlainFile(BufReader::new(f)))
        }
    }
}

/// True when file name designates gzip compressed content
pub(crate) fn is_gzip(path: &Path) -> bool {
    path.extension().map(|ext| ext == "gz").unwrap_or(false)
}

impl Read for BufferedReader {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        match self {
            Self::PlainFile(ref mut h) => h.read(buf),
            #[cfg(feature = "flate2")]
            Self::GzFile(ref mut h) => h.read(buf),
        }
    }
}

impl BufRead for BufferedReader {
    fn fill_buf(&mut self) -> Result<&[u8], Error> {
        match self {
            Self::PlainFile(ref mut bufreader) => bufreader.fill_buf(),
            #[cfg(feature = "flate2")]
            Self::GzFile(ref mut bufreader) => bufreader.fill_buf(),
        }
    }
    fn consume(&mut self, s: usize) {
        match self {
            Self::PlainFile(ref mut bufreader) => bufreader.consume(s),
            #[cfg(feature = "flate2")]
            Self::GzFile(ref mut bufreader) => bufreader.consume(s),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn gzip_extension() {
        assert!(is_gzip(Path::new("test_resources/TRP/COD23177.TRP.gz")));
        assert!(!is_gzip(Path::new("test_resources/TRP/COD23177.TRP")));
        assert!(!is_gzip(Path::new("gz")));
    }
    #[test]
    fn missing_file() {
        assert!(BufferedReader::new("test_resources/TRP/does-not-exist.TRP").is_err());
    }
}
