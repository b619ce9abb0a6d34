//! Filter building blocks shared by every list view
//!
//! User input (a status dropdown, a date picker, a search box) is held in a
//! plain, serializable filter struct. Before a query runs, the struct is
//! compiled into a [`Criteria`] value: date bounds are parsed once, the
//! search text is lowercased once, and invalid input is dropped.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::field::Timestamp;

/// A compiled filter: one predicate evaluated per record
pub trait Criteria<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Criteria that keeps every record
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchAll;

impl<T> Criteria<T> for MatchAll {
    fn matches(&self, _: &T) -> bool {
        true
    }
}

/// A dropdown value: `"all"` or exactly one option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    /// Whether `value` passes this choice
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }
}

impl<T> Choice<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }
}

impl<T> From<Option<T>> for Choice<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Choice::All, Choice::Only)
    }
}

const ALL: &str = "all";

impl<T: Serialize> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Choice::All => serializer.serialize_str(ALL),
            Choice::Only(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Choice<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == ALL {
            return Ok(Choice::All);
        }
        T::deserialize(IntoDeserializer::<D::Error>::into_deserializer(raw)).map(Choice::Only)
    }
}

/// Inclusive date range as entered by the user
///
/// Bounds are free text (`2024-03-15` from a date picker, or a full RFC 3339
/// timestamp). Empty strings mean "no bound".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl DateRange {
    pub fn new(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.map(String::from),
            end: end.map(String::from),
        }
    }

    /// Parse both bounds; a bound that does not parse is ignored
    ///
    /// `start` snaps to the first millisecond of its day and `end` to the
    /// last (23:59:59.999), whatever time of day was supplied.
    pub fn resolve(&self) -> ResolvedDateRange {
        ResolvedDateRange {
            start: resolve_bound(self.start.as_deref(), "start", NaiveTime::default()),
            end: resolve_bound(self.end.as_deref(), "end", end_of_day()),
        }
    }
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or_default()
}

fn resolve_bound(raw: Option<&str>, which: &'static str, time: NaiveTime) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    let resolved = parse_day(raw).and_then(|(date, offset)| {
        date.and_time(time)
            .and_local_timezone(offset)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    });
    if resolved.is_none() {
        tracing::warn!(bound = which, value = raw, "ignoring unparseable date bound");
    }
    resolved
}

/// Calendar day of a bound, in the offset it was written in
fn parse_day(raw: &str) -> Option<(NaiveDate, FixedOffset)> {
    let utc = FixedOffset::east_opt(0)?;
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some((date, utc));
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| (dt.date_naive(), *dt.offset()))
}

/// Date range with parsed instants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedDateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl ResolvedDateRange {
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether a record timestamp falls inside the range
    ///
    /// A timestamp with no parseable instant is never excluded.
    pub fn contains(&self, timestamp: &Timestamp) -> bool {
        let Some(instant) = timestamp.instant() else {
            return true;
        };
        self.start.is_none_or(|start| instant >= start) && self.end.is_none_or(|end| instant <= end)
    }
}

/// Case-insensitive substring search
///
/// The query is lowercased once; whitespace is kept as typed. An empty
/// query matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextSearch {
    needle: String,
}

impl TextSearch {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Whether `haystack` contains the query, ignoring case
    pub fn hit(&self, haystack: &str) -> bool {
        self.needle.is_empty() || haystack.to_lowercase().contains(&self.needle)
    }

    /// Whether any of the fields contains the query
    pub fn hit_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        self.needle.is_empty() || fields.into_iter().any(|field| self.hit(field))
    }
}
