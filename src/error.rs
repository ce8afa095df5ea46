use thiserror::Error;

/// Errors that may rise when decoding TRP content.
/// Each variant quotes the offending content.
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("unknown month characters \"{0}\"")]
    UnknownMonth(String),
    #[error("invalid time \"{0}\"")]
    InvalidTime(String),
    #[error("expecting \"{expected}\" label, found \"{found}\"")]
    LabelMismatch {
        expected: &'static str,
        found: String,
    },
    #[error("unknown a priori model value \"{0}\"")]
    AprioriModel(String),
    #[error("unknown mapping function value \"{0}\"")]
    MappingFunction(String),
    #[error("unknown gradient model value \"{0}\"")]
    GradientModel(String),
    #[error("line too short: missing {0} field")]
    MissingField(&'static str),
    #[error("failed to parse {field} from \"{content}\"")]
    IntegerField {
        field: &'static str,
        content: String,
    },
    #[error("failed to parse {field} from \"{content}\"")]
    FloatField {
        field: &'static str,
        content: String,
    },
    #[error("{field} columns contain non ascii characters: \"{content}\"")]
    NonAsciiField {
        field: &'static str,
        content: String,
    },
}

/// Errors that may rise when producing TRP content
#[derive(Error, Debug)]
pub enum FormattingError {
    #[error("i/o error")]
    Io(#[from] std::io::Error),
    #[error("{field} \"{content}\" does not fit in {width} columns")]
    FieldOverflow {
        field: &'static str,
        content: String,
        width: usize,
    },
    #[error("{field} \"{content}\" contains non ascii characters")]
    NonAsciiField {
        field: &'static str,
        content: String,
    },
}

/// Crate level errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("file i/o error")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Parsing { line: usize, source: ParsingError },
    #[error("formatting error")]
    Formatting(#[from] FormattingError),
    /// Input stopped before the current entity was complete.
    /// Line is the number of lines consumed so far.
    #[error("unexpected end of input after line {0}")]
    UnexpectedEof(usize),
    #[error("stream is closed")]
    Closed,
    #[error("stream is not opened for reading")]
    NotReadable,
    #[error("stream is not opened for writing")]
    NotWritable,
    #[error("a header must be written before any record")]
    MissingHeader,
}

impl Error {
    /// Attaches line number to a [ParsingError]
    pub(crate) fn parsing(line: usize, source: ParsingError) -> Self {
        Self::Parsing { line, source }
    }
}
