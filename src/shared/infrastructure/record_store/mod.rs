// Key-value record store used by every bounded context.
//
// Items are JSON documents in their storage-native shape (RFC 3339 strings,
// decimal strings). Each context owns a mapper that converts items to typed
// entities at the adapter edge, so nothing above the adapters sees raw items.

use serde_json::{Map, Value as Json};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("record store offline")]
    Offline,

    #[error("record {0} does not exist")]
    MissingRecord(String),

    #[error("malformed record {key}: {reason}")]
    Malformed { key: String, reason: String },

    #[error("condition failed on record {0}")]
    ConditionFailed(String),

    #[error("backend error: {0}")]
    Backend(String),
}

pub type Item = Map<String, Json>;

/// Read helpers shared by the item mappers.
pub mod item {
    use super::{Item, StoreError};
    use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
    use serde_json::Value as Json;

    fn malformed(key: &str, field: &str, reason: &str) -> StoreError {
        StoreError::Malformed {
            key: key.to_string(),
            reason: format!("{field}: {reason}"),
        }
    }

    pub fn string(item: &Item, key: &str, field: &str) -> Result<String, StoreError> {
        match item.get(field) {
            Some(Json::String(value)) => Ok(value.clone()),
            Some(_) => Err(malformed(key, field, "expected a string")),
            None => Err(malformed(key, field, "missing")),
        }
    }

    pub fn optional_string(item: &Item, key: &str, field: &str) -> Result<Option<String>, StoreError> {
        match item.get(field) {
            None | Some(Json::Null) => Ok(None),
            Some(Json::String(value)) => Ok(Some(value.clone())),
            Some(_) => Err(malformed(key, field, "expected a string")),
        }
    }

    pub fn boolean(item: &Item, key: &str, field: &str) -> Result<bool, StoreError> {
        match item.get(field) {
            Some(Json::Bool(value)) => Ok(*value),
            None | Some(Json::Null) => Ok(false),
            Some(_) => Err(malformed(key, field, "expected a boolean")),
        }
    }

    /// Decimal attributes are written as strings but older items may carry
    /// plain JSON numbers.
    pub fn decimal(item: &Item, key: &str, field: &str) -> Result<f64, StoreError> {
        match item.get(field) {
            None | Some(Json::Null) => Ok(0.0),
            Some(Json::Number(number)) => number
                .as_f64()
                .ok_or_else(|| malformed(key, field, "not representable as f64")),
            Some(Json::String(text)) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| malformed(key, field, "not a decimal")),
            Some(_) => Err(malformed(key, field, "expected a decimal")),
        }
    }

    pub fn encode_decimal(value: f64) -> Json {
        Json::String(format!("{value:.2}"))
    }

    pub fn instant(item: &Item, key: &str, field: &str) -> Result<DateTime<FixedOffset>, StoreError> {
        let text = string(item, key, field)?;
        parse_instant(&text).ok_or_else(|| malformed(key, field, "not an RFC 3339 instant"))
    }

    pub fn optional_utc(item: &Item, key: &str, field: &str) -> Result<Option<DateTime<Utc>>, StoreError> {
        match optional_string(item, key, field)? {
            None => Ok(None),
            Some(text) => parse_instant(&text)
                .map(|value| Some(value.with_timezone(&Utc)))
                .ok_or_else(|| malformed(key, field, "not an RFC 3339 instant")),
        }
    }

    pub fn utc(item: &Item, key: &str, field: &str) -> Result<DateTime<Utc>, StoreError> {
        Ok(instant(item, key, field)?.with_timezone(&Utc))
    }

    pub fn date(item: &Item, key: &str, field: &str) -> Result<NaiveDate, StoreError> {
        let text = string(item, key, field)?;
        parse_date(&text).ok_or_else(|| malformed(key, field, "not a calendar date"))
    }

    /// Accepts RFC 3339 and the naive `YYYY-MM-DDTHH:MM:SS[.f]` form, the
    /// latter read as UTC.
    pub fn parse_instant(text: &str) -> Option<DateTime<FixedOffset>> {
        if let Ok(value) = DateTime::parse_from_rfc3339(text) {
            return Some(value);
        }
        chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc().fixed_offset())
    }

    /// Accepts a bare date or the date prefix of an instant.
    pub fn parse_date(text: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .or_else(|| text.get(..10).and_then(|p| NaiveDate::parse_from_str(p, "%Y-%m-%d").ok()))
    }

    pub fn parse_enum<T: std::str::FromStr>(item: &Item, key: &str, field: &str) -> Result<T, StoreError> {
        let text = string(item, key, field)?;
        text.parse::<T>()
            .map_err(|_| malformed(key, field, &format!("unknown value {text}")))
    }
}

pub mod in_memory;
