//! Lenient scalar deserializers for request payloads
//!
//! Clients send loosely typed JSON: phone numbers as numbers, prices as
//! strings. Text fields accept any scalar and keep its textual form; numeric
//! fields accept numbers or numeric strings. `null` and absent fields become
//! `None`; objects and arrays are still rejected.

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

/// Deserialize an optional string, stringifying numbers and booleans
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Number(number) => number.to_string(),
        Scalar::Bool(flag) => flag.to_string(),
    }))
}

/// Deserialize an optional number, parsing numeric strings. Blank strings are `None`.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Number(number)) => number
            .as_f64()
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("number out of range: {}", number))),
        Some(Scalar::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Scalar::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("not a number: {:?}", text))),
        Some(Scalar::Bool(flag)) => Err(de::Error::custom(format!("not a number: {}", flag))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "super::string")]
        text: Option<String>,
        #[serde(default, deserialize_with = "super::number")]
        amount: Option<f64>,
    }

    fn parse(value: serde_json::Value) -> Result<Sample, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_string_accepts_scalars() {
        assert_eq!(parse(json!({ "text": "abc" })).unwrap().text.as_deref(), Some("abc"));
        assert_eq!(
            parse(json!({ "text": 9876543210u64 })).unwrap().text.as_deref(),
            Some("9876543210")
        );
        assert_eq!(parse(json!({ "text": true })).unwrap().text.as_deref(), Some("true"));
        assert_eq!(parse(json!({ "text": null })).unwrap().text, None);
        assert_eq!(parse(json!({})).unwrap().text, None);
        assert!(parse(json!({ "text": { "nested": 1 } })).is_err());
    }

    #[test]
    fn test_number_accepts_numeric_strings() {
        assert_eq!(parse(json!({ "amount": 100 })).unwrap().amount, Some(100.0));
        assert_eq!(parse(json!({ "amount": "100" })).unwrap().amount, Some(100.0));
        assert_eq!(parse(json!({ "amount": " 12.5 " })).unwrap().amount, Some(12.5));
        assert_eq!(parse(json!({ "amount": "" })).unwrap().amount, None);
        assert!(parse(json!({ "amount": "cheap" })).is_err());
        assert!(parse(json!({ "amount": [1] })).is_err());
    }
}
