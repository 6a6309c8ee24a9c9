//! Lenient field deserializers for upstream payloads that mix JSON numbers
//! and numeric strings for the same field.

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

struct StringOrNumber;

impl<'de> Visitor<'de> for StringOrNumber {
    type Value = Option<String>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, number or boolean")
    }

    fn visit_none<E>(self) -> Result<Option<String>, E> where E: de::Error {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Option<String>, E> where E: de::Error {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Option<String>, D::Error>
        where D: Deserializer<'de>
    {
        deserializer.deserialize_any(StringOrNumber)
    }

    fn visit_str<E>(self, value: &str) -> Result<Option<String>, E> where E: de::Error {
        Ok(Some(value.to_owned()))
    }

    fn visit_string<E>(self, value: String) -> Result<Option<String>, E> where E: de::Error {
        Ok(Some(value))
    }

    fn visit_bool<E>(self, value: bool) -> Result<Option<String>, E> where E: de::Error {
        Ok(Some(value.to_string()))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Option<String>, E> where E: de::Error {
        Ok(Some(value.to_string()))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Option<String>, E> where E: de::Error {
        Ok(Some(value.to_string()))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Option<String>, E> where E: de::Error {
        Ok(Some(value.to_string()))
    }
}

/// `"1.5"`, `1.5`, `true` and `null` all land as `Option<String>`.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where D: Deserializer<'de>
{
    deserializer.deserialize_option(StringOrNumber)
}

pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where D: Deserializer<'de>
{
    Ok(opt_string(deserializer)?.and_then(|s| s.trim().parse::<f64>().ok()))
}

pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where D: Deserializer<'de>
{
    Ok(opt_string(deserializer)?.and_then(|s| {
        let s = s.trim();
        s.parse::<i64>()
            .ok()
            .or_else(|| s.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v as i64))
    }))
}

/// Accepts `true`/`false`, `0`/`1` and their string forms.
pub fn opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where D: Deserializer<'de>
{
    Ok(opt_string(deserializer)?.and_then(|s| match s.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }))
}

/// `null` becomes an empty list.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where D: Deserializer<'de>, T: Deserialize<'de>
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
