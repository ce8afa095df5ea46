//! Fixed column field helpers
use crate::prelude::ParsingError;

/// Returns `len` bytes of `line` starting at `offset`, clamped to the
/// end of line. Returns None when offset lies past the end of line or
/// the span does not fall on character boundaries.
pub(crate) fn column(line: &str, offset: usize, len: usize) -> Option<&str> {
    if offset >= line.len() {
        return None;
    }
    let end = (offset + len).min(line.len());
    line.get(offset..end)
}

/// Returns a text column, clamped to the end of line.
/// Text columns are counted in ASCII characters: any other content
/// would shift the following columns.
pub(crate) fn text<'a>(
    line: &'a str,
    offset: usize,
    len: usize,
    field: &'static str,
) -> Result<&'a str, ParsingError> {
    let end = (offset + len).min(line.len());
    match line.get(offset.min(end)..end) {
        Some(content) if content.is_ascii() => Ok(content),
        _ => Err(ParsingError::NonAsciiField {
            field,
            content: line.to_string(),
        }),
    }
}

/// Returns trimmed content of a column that must be present
pub(crate) fn required<'a>(
    line: &'a str,
    offset: usize,
    len: usize,
    field: &'static str,
) -> Result<&'a str, ParsingError> {
    let content = column(line, offset, len)
        .map(|s| s.trim())
        .ok_or(ParsingError::MissingField(field))?;
    if content.is_empty() {
        Err(ParsingError::MissingField(field))
    } else {
        Ok(content)
    }
}

/// Parses an integer number from given column
pub(crate) fn parse_int<T: std::str::FromStr>(
    line: &str,
    offset: usize,
    len: usize,
    field: &'static str,
) -> Result<T, ParsingError> {
    let content = required(line, offset, len, field)?;
    content.parse::<T>().map_err(|_| ParsingError::IntegerField {
        field,
        content: content.to_string(),
    })
}

/// Parses a floating point number from given column
pub(crate) fn parse_float(
    line: &str,
    offset: usize,
    len: usize,
    field: &'static str,
) -> Result<f64, ParsingError> {
    let content = required(line, offset, len, field)?;
    content.parse::<f64>().map_err(|_| ParsingError::FloatField {
        field,
        content: content.to_string(),
    })
}

/// Verifies that formatted `content` fits in `width` columns
pub(crate) fn fit(
    content: String,
    width: usize,
    field: &'static str,
) -> Result<String, crate::prelude::FormattingError> {
    if content.len() > width {
        Err(crate::prelude::FormattingError::FieldOverflow {
            field,
            content,
            width,
        })
    } else {
        Ok(content)
    }
}

/// Verifies that text `content` is ASCII and fits in `width` columns
pub(crate) fn fit_text(
    content: String,
    width: usize,
    field: &'static str,
) -> Result<String, crate::prelude::FormattingError> {
    if content.is_ascii() {
        fit(content, width, field)
    } else {
        Err(crate::prelude::FormattingError::NonAsciiField { field, content })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn column_clamping() {
        let line = "ALGO 0";
        assert_eq!(column(line, 0, 4), Some("ALGO"));
        assert_eq!(column(line, 5, 10), Some("0"));
        assert_eq!(column(line, 6, 1), None);
        assert_eq!(column(line, 60, 4), None);
    }
    #[test]
    fn text_columns() {
        let line = "ALGO 40104M001    A";
        assert_eq!(text(line, 0, 19, "station").unwrap(), "ALGO 40104M001    A");
        assert_eq!(text(line, 18, 1, "flag").unwrap(), "A");
        assert_eq!(text(line, 30, 1, "flag").unwrap(), "");
        assert!(matches!(
            text("Zürich             A", 0, 19, "station"),
            Err(ParsingError::NonAsciiField {
                field: "station",
                ..
            })
        ));
        // column edge within a multi-byte character
        assert!(matches!(
            text("ZÜRICH", 0, 2, "station"),
            Err(ParsingError::NonAsciiField {
                field: "station",
                ..
            })
        ));
    }
    #[test]
    fn numeric_columns() {
        let line = "  -11   2.34560";
        assert_eq!(parse_int::<i8>(line, 0, 5, "code").unwrap(), -11);
        assert_eq!(parse_float(line, 5, 10, "value").unwrap(), 2.3456);
        assert!(matches!(
            parse_float(line, 0, 2, "value"),
            Err(ParsingError::MissingField("value"))
        ));
        assert!(matches!(
            parse_int::<u8>(line, 0, 5, "code"),
            Err(ParsingError::IntegerField { field: "code", .. })
        ));
    }
    #[test]
    fn overflow() {
        assert_eq!(fit("1.23450".to_string(), 8, "CORR_U").unwrap(), "1.23450");
        assert!(fit("123.45678".to_string(), 8, "CORR_U").is_err());
        assert_eq!(fit_text("ALGO".to_string(), 19, "station").unwrap(), "ALGO");
        assert!(matches!(
            fit_text("Zürich".to_string(), 19, "station"),
            Err(crate::prelude::FormattingError::NonAsciiField {
                field: "station",
                ..
            })
        ));
    }
}
