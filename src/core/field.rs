//! Field value types shared by every record

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

/// An ISO 8601 timestamp as it appeared on the record
///
/// The raw text is kept verbatim so a record round-trips unchanged, and the
/// parsed instant is computed once on construction. A timestamp that does
/// not parse is still a valid value: it simply has no instant, and date
/// filters never exclude it.
#[derive(Clone)]
pub struct Timestamp {
    raw: String,
    instant: Option<DateTime<Utc>>,
}

impl Timestamp {
    /// Parse a timestamp, accepting RFC 3339 date-times and plain
    /// `YYYY-MM-DD` dates (read as UTC midnight)
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let instant = parse_instant(&raw);
        Self { raw, instant }
    }

    /// Build a timestamp from an instant, rendered in RFC 3339
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self {
            raw: instant.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            instant: Some(instant),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed instant, `None` when the raw text is not a valid date
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.instant
    }

    pub fn is_valid(&self) -> bool {
        self.instant.is_some()
    }

    /// Compare as instants; unparseable values order before valid ones
    pub fn cmp_instant(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Timestamp {}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({:?})", self.raw)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::from_instant(instant)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Timestamp::parse)
    }
}

/// Field format validators
#[derive(Debug, Clone)]
pub enum FieldFormat {
    Email,
    Phone,
    Custom(Regex),
}

impl FieldFormat {
    /// Check a string against this format
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FieldFormat::Email => Self::is_valid_email(value),
            FieldFormat::Phone => Self::is_valid_phone(value),
            FieldFormat::Custom(regex) => regex.is_match(value),
        }
    }

    pub fn describe(&self) -> &str {
        match self {
            FieldFormat::Email => "an email address",
            FieldFormat::Phone => "a phone number",
            FieldFormat::Custom(regex) => regex.as_str(),
        }
    }

    fn is_valid_email(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
                .expect("email pattern compiles")
        });
        regex.is_match(email)
    }

    fn is_valid_phone(phone: &str) -> bool {
        static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = PHONE_REGEX.get_or_init(|| {
            // E.164 (+15551234567) or North American "(555) 123-4567"
            Regex::new(r"^(\+?[1-9]\d{7,14}|\(\d{3}\) ?\d{3}-\d{4}|\d{3}[-. ]\d{3}[-. ]\d{4})$")
                .expect("phone pattern compiles")
        });
        regex.is_match(phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_parses_rfc3339() {
        let ts = Timestamp::parse("2024-03-15T08:30:00.000Z");
        assert_eq!(
            ts.instant(),
            Some(Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap())
        );
        assert_eq!(ts.as_str(), "2024-03-15T08:30:00.000Z");
    }

    #[test]
    fn test_timestamp_parses_offset_into_utc() {
        let ts = Timestamp::parse("2024-03-15T23:00:00-05:00");
        assert_eq!(
            ts.instant(),
            Some(Utc.with_ymd_and_hms(2024, 3, 16, 4, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_timestamp_plain_date_is_utc_midnight() {
        let ts = Timestamp::parse("2024-03-15");
        assert_eq!(
            ts.instant(),
            Some(Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_timestamp_invalid_keeps_raw_text() {
        let ts = Timestamp::parse("yesterday-ish");
        assert!(!ts.is_valid());
        assert_eq!(ts.to_string(), "yesterday-ish");
    }

    #[test]
    fn test_timestamp_invalid_orders_first() {
        let bad = Timestamp::parse("nope");
        let good = Timestamp::parse("2020-01-01");
        assert_eq!(bad.cmp_instant(&good), Ordering::Less);
        assert_eq!(good.cmp_instant(&bad), Ordering::Greater);
    }

    #[test]
    fn test_timestamp_serde_is_a_plain_string() {
        let ts: Timestamp = serde_json::from_str("\"2024-03-15\"").unwrap();
        assert!(ts.is_valid());
        assert_eq!(serde_json::to_string(&ts).unwrap(), "\"2024-03-15\"");
    }

    #[test]
    fn test_email_format() {
        assert!(FieldFormat::Email.matches("orders@morningbrew.com"));
        assert!(!FieldFormat::Email.matches("orders-at-morningbrew"));
    }

    #[test]
    fn test_phone_format() {
        assert!(FieldFormat::Phone.matches("(555) 123-4567"));
        assert!(FieldFormat::Phone.matches("+15551234567"));
        assert!(FieldFormat::Phone.matches("555-123-4567"));
        assert!(!FieldFormat::Phone.matches("call me"));
    }
}
