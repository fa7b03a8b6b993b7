//! BirthDay Value Object
//!
//! A calendar date with a fixed `YYYY-MM-DD` wire format.

use chrono::NaiveDate;
use std::fmt;

use crate::error::AccountError;

/// chrono format string for the wire representation
pub const BIRTH_DAY_LAYOUT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDay(NaiveDate);

impl BirthDay {
    #[inline]
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse exactly `YYYY-MM-DD`. Anything else is [`AccountError::InvalidDateFormat`].
    ///
    /// chrono alone would also take `2001-1-1`, `+2001-01-01` or leading
    /// spaces, so the shape is checked first.
    pub fn parse(s: &str) -> Result<Self, AccountError> {
        if !has_layout_shape(s) {
            return Err(AccountError::InvalidDateFormat);
        }

        NaiveDate::parse_from_str(s, BIRTH_DAY_LAYOUT)
            .map(Self)
            .map_err(|_| AccountError::InvalidDateFormat)
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for BirthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTH_DAY_LAYOUT))
    }
}

/// Four digits, `-`, two digits, `-`, two digits
fn has_layout_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let birth_day = BirthDay::parse("2001-01-01").unwrap();
        assert_eq!(birth_day.to_string(), "2001-01-01");
        assert_eq!(
            birth_day.date(),
            NaiveDate::from_ymd_opt(2001, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_leap_day() {
        assert!(BirthDay::parse("2000-02-29").is_ok());
        assert!(BirthDay::parse("2001-02-29").is_err());
    }

    #[test]
    fn test_format_pads_fields() {
        let birth_day = BirthDay::new(NaiveDate::from_ymd_opt(987, 3, 4).unwrap());
        assert_eq!(birth_day.to_string(), "0987-03-04");
    }

    #[test]
    fn test_invalid_formats() {
        for input in [
            "",
            "2001/01/01",
            "01-01-2001",
            "2001-13-01",
            "2001-02-30",
            "yesterday",
            "2001-1-1",
            "2001-01-1",
            " 2001-01-01",
            "2001-01-01 ",
            "+2001-01-01",
            "02001-01-01",
            "2001-01-01T00:00:00",
        ] {
            assert!(
                matches!(BirthDay::parse(input), Err(AccountError::InvalidDateFormat)),
                "{input:?} should be rejected"
            );
        }
    }
}
