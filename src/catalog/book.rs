use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Date layouts accepted for `releaseDate`, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%b %d, %Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%Y/%m/%d",
];

/// One catalog entry as served by the books API.
///
/// Everything except `number` is optional: the API is not trusted to fill
/// every field, and display defaults are applied by the view layer only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier, used as the detail lookup key.
    pub number: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Book {
    /// Minimal record, mostly useful for building fixtures.
    pub fn new(number: u32, title: impl Into<String>) -> Self {
        Self {
            number,
            title: Some(title.into()),
            original_title: None,
            release_date: None,
            pages: None,
            cover: None,
            description: None,
        }
    }

    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = Some(date.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Title used for matching and ordering. Missing titles compare as empty.
    pub fn title_key(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Parsed release date, if present and in a recognised layout.
    pub fn release_day(&self) -> Option<NaiveDate> {
        self.release_date.as_deref().and_then(parse_release_date)
    }

    pub fn release_year(&self) -> Option<i32> {
        self.release_day().map(|day| day.year())
    }
}

/// Parses a release date string into a calendar day.
///
/// Accepts ISO dates, RFC 3339 timestamps, full month names (`July 8, 2000`)
/// and the `Jun 26, 1997` style the upstream API uses.
pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(stamp.date());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}
