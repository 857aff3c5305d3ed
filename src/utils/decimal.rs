//! Lenient decimal binding for form input.
//!
//! Accepts JSON numbers as well as strings using either `.` or `,` as the
//! decimal separator, so `"12,5"` and `"12.5"` bind to the same value. Blank
//! strings and `null` bind to an absent value.
//!
//! Use with `#[serde(default, deserialize_with = "crate::utils::decimal::deserialize")]`.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use thiserror::Error;

/// A string that could not be read as a decimal number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid number format: {0:?}")]
pub struct InvalidDecimal(pub String);

/// Parse a user-supplied decimal, treating blank input as absent.
pub fn parse_decimal(text: &str) -> Result<Option<f64>, InvalidDecimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .map(Some)
        .map_err(|_| InvalidDecimal(text.to_string()))
}

/// Serde entry point for optional decimal fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(FlexibleDecimalVisitor)
}

struct FlexibleDecimalVisitor;

impl<'de> Visitor<'de> for FlexibleDecimalVisitor {
    type Value = Option<f64>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, a decimal string, or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(Some(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Some(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Some(value as f64))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        parse_decimal(value).map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "deserialize")]
        quantity: Option<f64>,
    }

    fn bind(json: &str) -> Result<Option<f64>, serde_json::Error> {
        serde_json::from_str::<Form>(json).map(|form| form.quantity)
    }

    #[test]
    fn test_comma_separator() {
        assert_eq!(parse_decimal("12,5").unwrap(), Some(12.5));
        assert_eq!(bind(r#"{"quantity":"12,5"}"#).unwrap(), Some(12.5));
    }

    #[test]
    fn test_dot_separator_and_numbers() {
        assert_eq!(bind(r#"{"quantity":"12.5"}"#).unwrap(), Some(12.5));
        assert_eq!(bind(r#"{"quantity":7}"#).unwrap(), Some(7.0));
        assert_eq!(bind(r#"{"quantity":-1.25}"#).unwrap(), Some(-1.25));
    }

    #[test]
    fn test_blank_and_missing_are_absent() {
        assert_eq!(bind(r#"{"quantity":"  "}"#).unwrap(), None);
        assert_eq!(bind(r#"{"quantity":null}"#).unwrap(), None);
        assert_eq!(bind("{}").unwrap(), None);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_decimal("twelve").is_err());
        assert!(bind(r#"{"quantity":"1.2.3"}"#).is_err());
    }
}
