use hifitime::{Epoch, TimeScale};

use crate::prelude::ParsingError;

/// Month codes, as found in the calculation time field
const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/*
 * Infaillible `Epoch::now()` call.
 */
pub(crate) fn now() -> Epoch {
    Epoch::now().unwrap_or(Epoch::from_gregorian_utc_at_midnight(2000, 1, 1))
}

/// Decodes 3 letter month code, case insensitive
pub(crate) fn parse_month(code: &str) -> Result<u8, ParsingError> {
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(code.trim()))
        .map(|index| index as u8 + 1)
        .ok_or(ParsingError::UnknownMonth(code.to_string()))
}

/// Returns 3 letter code of given month (1..=12)
pub(crate) fn month_code(month: u8) -> &'static str {
    MONTHS[(month as usize + 11) % 12]
}

/// Two digit years: 80-99 are 19YY, others 20YY
pub(crate) fn expand_year(y: i32) -> i32 {
    if y < 100 {
        if y < 80 {
            y + 2000
        } else {
            y + 1900
        }
    } else {
        y
    }
}

/// Builds an [Epoch] expressed in given [TimeScale].
/// Invalid datetimes (like day 32) are rejected.
pub(crate) fn from_gregorian(
    y: i32,
    m: u8,
    d: u8,
    hh: u8,
    mm: u8,
    ss: u8,
    ts: TimeScale,
) -> Result<Epoch, ParsingError> {
    let invalid = || {
        ParsingError::InvalidTime(format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02} {}",
            y, m, d, hh, mm, ss, ts
        ))
    };
    if y <= 0 {
        return Err(invalid());
    }
    Epoch::maybe_from_gregorian(y, m, d, hh, mm, ss, 0, ts).map_err(|_| invalid())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    #[test]
    fn month_codes() {
        assert_eq!(parse_month("JAN").unwrap(), 1);
        assert_eq!(parse_month("jun").unwrap(), 6);
        assert_eq!(parse_month("Dec").unwrap(), 12);
        assert!(matches!(
            parse_month("XYZ"),
            Err(ParsingError::UnknownMonth(code)) if code == "XYZ"
        ));
        assert_eq!(month_code(1), "JAN");
        assert_eq!(month_code(6), "JUN");
        assert_eq!(month_code(12), "DEC");
    }
    #[test]
    fn two_digit_years() {
        assert_eq!(expand_year(5), 2005);
        assert_eq!(expand_year(79), 2079);
        assert_eq!(expand_year(80), 1980);
        assert_eq!(expand_year(99), 1999);
        assert_eq!(expand_year(2023), 2023);
    }
    #[test]
    fn gregorian_gpst() {
        let e = from_gregorian(2005, 1, 1, 0, 0, 0, TimeScale::GPST).unwrap();
        assert_eq!(e.time_scale, TimeScale::GPST);
        assert_eq!(e, Epoch::from_str("2005-01-01T00:00:00 GPST").unwrap());
        assert_eq!(e.to_gregorian(TimeScale::GPST), (2005, 1, 1, 0, 0, 0, 0));

        let e = from_gregorian(2023, 6, 26, 7, 52, 30, TimeScale::UTC).unwrap();
        assert_eq!(e.time_scale, TimeScale::UTC);
        assert_eq!(e.to_gregorian(TimeScale::UTC), (2023, 6, 26, 7, 52, 30, 0));
    }
    #[test]
    fn invalid_gregorian() {
        for (y, m, d, hh) in [(2005, 1, 32, 0), (2005, 13, 1, 0), (2005, 2, 30, 0), (2005, 1, 1, 24)] {
            assert!(
                matches!(
                    from_gregorian(y, m, d, hh, 0, 0, TimeScale::GPST),
                    Err(ParsingError::InvalidTime(_))
                ),
                "{}-{}-{} {} should not be valid",
                y,
                m,
                d,
                hh
            );
        }
    }
}
