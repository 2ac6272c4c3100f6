//! Lenient JSON helpers for backend payloads whose shape is not fully consistent.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes `null` the same way as a missing field: `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A numeric field that some endpoints send as a JSON number and others as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    /// Numeric value, or `None` when the text form does not parse.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) if value.is_finite() => Some(*value),
            Self::Number(_) => None,
            Self::Text(text) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }
}

impl From<f64> for LooseNumber {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for LooseNumber {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "null_as_default")]
        values: Vec<i64>,
    }

    #[test]
    fn null_and_missing_become_default() {
        let from_null: Holder = serde_json::from_str(r#"{"values":null}"#).expect("null");
        let from_missing: Holder = serde_json::from_str("{}").expect("missing");
        assert!(from_null.values.is_empty());
        assert!(from_missing.values.is_empty());
    }

    #[test]
    fn loose_number_accepts_numbers_and_numeric_strings() {
        let parsed: Vec<LooseNumber> =
            serde_json::from_str(r#"[4, 2.5, "3", " 7 ", "n/a"]"#).expect("parse");
        let values: Vec<Option<f64>> = parsed.iter().map(LooseNumber::as_f64).collect();
        assert_eq!(
            values,
            vec![Some(4.0), Some(2.5), Some(3.0), Some(7.0), None]
        );
    }
}
