//! Lenient field decoders for API records.
//!
//! The itinerary API is loosely typed: amounts may arrive as numeric strings,
//! ids as numbers and dates as full timestamps. These helpers are wired in
//! with `#[serde(deserialize_with = ...)]` so one odd field never fails a
//! whole response.

use chrono::NaiveDate;
use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Null,
}

/// `YYYY-MM-DD`, or the date part of an RFC 3339 timestamp
pub fn parse_api_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let day = match value.get(..10) {
        Some(day) if value.len() == 10 || value[10..].starts_with(['T', ' ']) => day,
        _ => return None,
    };
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

pub fn date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_api_date(&value).ok_or_else(|| D::Error::custom(format!("invalid date `{value}`")))
}

/// Blank or unreadable dates decode as `None`
pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(parse_api_date))
}

/// A number or a numeric string; null and blank are zero
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)? {
        Scalar::Integer(n) => Ok(n as f64),
        Scalar::Float(n) => Ok(n),
        Scalar::Null => Ok(0.0),
        Scalar::Text(text) if text.trim().is_empty() => Ok(0.0),
        Scalar::Text(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| D::Error::custom(format!("invalid amount `{text}`"))),
    }
}

/// A string or numeric id, kept as an opaque string
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => Ok(text),
        Scalar::Integer(n) => Ok(n.to_string()),
        Scalar::Float(n) => Ok(n.to_string()),
        Scalar::Null => Ok(String::new()),
    }
}

/// Decode a list element by element, dropping records that do not fit
pub fn skip_invalid<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "id")]
        id: String,
        #[serde(deserialize_with = "date")]
        day: NaiveDate,
        #[serde(default, deserialize_with = "optional_date")]
        maybe: Option<NaiveDate>,
        #[serde(default, deserialize_with = "amount")]
        cost: f64,
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_api_date_forms() {
        assert_eq!(parse_api_date("2026-03-20"), Some(d(2026, 3, 20)));
        assert_eq!(parse_api_date("2026-03-20T00:00:00.000Z"), Some(d(2026, 3, 20)));
        assert_eq!(parse_api_date("2026-03-20 14:30:00"), Some(d(2026, 3, 20)));
        assert_eq!(parse_api_date("2026-03-200"), None);
        assert_eq!(parse_api_date("20/03/2026"), None);
        assert_eq!(parse_api_date(""), None);
    }

    #[test]
    fn test_record_accepts_loose_types() {
        let json = r#"{"id": 7, "day": "2026-03-20T00:00:00.000Z", "maybe": "not a date", "cost": "1500.00"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.day, d(2026, 3, 20));
        assert_eq!(record.maybe, None);
        assert_eq!(record.cost, 1500.0);
    }

    #[test]
    fn test_null_and_blank_values() {
        let json = r#"{"id": null, "day": "2026-01-02", "maybe": null, "cost": " "}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "");
        assert_eq!(record.maybe, None);
        assert_eq!(record.cost, 0.0);

        let record: Record = serde_json::from_str(r#"{"day": "2026-01-02", "cost": null, "maybe": "2026-01-05"}"#).unwrap();
        assert_eq!(record.cost, 0.0);
        assert_eq!(record.maybe, Some(d(2026, 1, 5)));
    }

    #[test]
    fn test_rejects_garbage_amount_and_date() {
        assert!(serde_json::from_str::<Record>(r#"{"day": "2026-01-02", "cost": "lots"}"#).is_err());
        assert!(serde_json::from_str::<Record>(r#"{"day": "soon"}"#).is_err());
    }

    #[derive(Debug, Deserialize)]
    struct Batch {
        #[serde(default, deserialize_with = "skip_invalid")]
        records: Vec<Record>,
    }

    #[test]
    fn test_skip_invalid_keeps_good_records() {
        let json = r#"{"records": [
            {"id": "a", "day": "2026-01-02"},
            {"id": "b"},
            {"id": "c", "day": "2026-01-03", "cost": 12.5}
        ]}"#;
        let batch: Batch = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = batch.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);

        let batch: Batch = serde_json::from_str(r#"{"records": null}"#).unwrap();
        assert!(batch.records.is_empty());
        let batch: Batch = serde_json::from_str("{}").unwrap();
        assert!(batch.records.is_empty());
    }
}
