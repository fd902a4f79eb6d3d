use crate::domain::time::{format_timestamp, parse_timestamp};
use crate::utils::error::{FerienError, Result};
use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};
use std::fmt;

/// Label used for `name` and `slug` when the payload does not carry them.
pub const DEFAULT_LABEL: &str = "none";

/// A single vacation period of one federal state.
///
/// A typical payload item looks like this:
///
/// ```json
/// {
///   "start": "2017-01-29T23:00",
///   "end": "2017-01-31T23:00",
///   "year": 2017,
///   "stateCode": "HB",
///   "name": "winterferien",
///   "slug": "winterferien-2017-HB"
/// }
/// ```
///
/// `start <= end` is what the API promises but it is not checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vacation {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub year: i32,
    pub state_code: String,
    pub name: String,
    pub slug: String,
}

impl Vacation {
    /// Builds a record from one item of the API response.
    pub fn from_payload(item: &Value) -> Result<Self> {
        let obj = item.as_object().ok_or_else(|| {
            FerienError::malformed(format!("expected a JSON object, got '{}'", item))
        })?;

        Ok(Self {
            start: parse_timestamp("start", required_str(obj, "start")?)?,
            end: parse_timestamp("end", required_str(obj, "end")?)?,
            year: required_year(obj)?,
            state_code: required_text(obj, "stateCode")?,
            name: optional_text(obj, "name")?,
            slug: optional_text(obj, "slug")?,
        })
    }

    /// The wire representation of this record.
    pub fn to_payload(&self) -> Value {
        serde_json::json!({
            "start": format_timestamp(&self.start),
            "end": format_timestamp(&self.end),
            "year": self.year,
            "stateCode": self.state_code,
            "name": self.name,
            "slug": self.slug,
        })
    }

    /// Whether `at` lies within `[start, end]`, both ends inclusive.
    pub fn contains(&self, at: &DateTime<FixedOffset>) -> bool {
        self.start <= *at && *at <= self.end
    }
}

impl fmt::Display for Vacation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}): {} .. {}",
            self.state_code,
            self.name,
            self.year,
            format_timestamp(&self.start),
            format_timestamp(&self.end)
        )
    }
}

fn field<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

fn missing(key: &str) -> FerienError {
    FerienError::malformed(format!("missing required field '{}'", key))
}

fn required_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    let value = field(obj, key).ok_or_else(|| missing(key))?;
    value.as_str().ok_or_else(|| {
        FerienError::malformed(format!("field '{}' must be a string, got '{}'", key, value))
    })
}

fn required_year(obj: &Map<String, Value>) -> Result<i32> {
    let value = field(obj, "year").ok_or_else(|| missing("year"))?;
    let year = match value {
        Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    };
    year.ok_or_else(|| {
        FerienError::malformed(format!("field 'year' is not an integer: '{}'", value))
    })
}

fn scalar_text(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(FerienError::malformed(format!(
            "field '{}' must be a scalar, got '{}'",
            key, other
        ))),
    }
}

fn required_text(obj: &Map<String, Value>, key: &str) -> Result<String> {
    let value = field(obj, key).ok_or_else(|| missing(key))?;
    scalar_text(key, value)
}

fn optional_text(obj: &Map<String, Value>, key: &str) -> Result<String> {
    match field(obj, key) {
        Some(value) => scalar_text(key, value),
        None => Ok(DEFAULT_LABEL.to_string()),
    }
}
