//! Day-granular date handling shared by every data file.
//!
//! All dates in the collection are stored as `dd.mm.yyyy`. Use this module with
//! `#[serde(with = "crate::models::date_format")]` on `NaiveDate` fields.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

/// The on-disk date format (`31.12.2024`).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parses a `dd.mm.yyyy` date string, ignoring surrounding whitespace.
pub fn parse(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}

/// Serializes a date as `dd.mm.yyyy`.
pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
}

/// Deserializes a `dd.mm.yyyy` string into a date.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Dated {
        #[serde(with = "crate::models::date_format")]
        date: NaiveDate,
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let date = parse(" 05.03.2024 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn test_parse_rejects_iso_dates() {
        assert!(parse("2024-03-05").is_err());
    }

    #[test]
    fn test_toml_field_uses_day_first_format() {
        let dated: Dated = toml::from_str(r#"date = "01.02.2023""#).unwrap();
        assert_eq!(dated.date, NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());

        let written = toml::to_string(&dated).unwrap();
        assert_eq!(written.trim(), r#"date = "01.02.2023""#);
    }
}
