//! Structural form of an opinion
//!
//! At the boundary an opinion is a plain mapping with the keys `belief`,
//! `disbelief`, `uncertainty` and `base_rate`. `base_rate` may be omitted
//! on input and defaults to 0.5.

use crate::error::{OpinionError, Result};
use crate::opinion::{Opinion, DEFAULT_BASE_RATE};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Plain `f64` view of an opinion, as exchanged with the outside world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpinionRecord {
    /// Belief mass
    pub belief: f64,
    /// Disbelief mass
    pub disbelief: f64,
    /// Uncertainty mass
    pub uncertainty: f64,
    /// Base rate
    #[serde(default = "default_base_rate")]
    pub base_rate: f64,
}

fn default_base_rate() -> f64 {
    DEFAULT_BASE_RATE
}

impl From<Opinion> for OpinionRecord {
    fn from(opinion: Opinion) -> Self {
        Self {
            belief: as_f64(opinion.belief()),
            disbelief: as_f64(opinion.disbelief()),
            uncertainty: as_f64(opinion.uncertainty()),
            base_rate: as_f64(opinion.base_rate()),
        }
    }
}

// Exact mantissa over an exact power of ten: one correctly rounded division,
// so every six-place component maps to its nearest f64.
fn as_f64(value: Decimal) -> f64 {
    value.mantissa() as f64 / 10f64.powi(value.scale() as i32)
}

impl Opinion {
    /// Convert to a JSON object with all four keys
    pub fn to_json(&self) -> Value {
        let record = self.to_record();
        serde_json::json!({
            "belief": record.belief,
            "disbelief": record.disbelief,
            "uncertainty": record.uncertainty,
            "base_rate": record.base_rate,
        })
    }

    /// Build an opinion from a JSON object
    ///
    /// # Errors
    ///
    /// [`OpinionError::MalformedInput`] if `value` is not an object, a mass
    /// key is missing, or a value is not a number. The numbers are then
    /// validated like any other construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use sublogic_core::Opinion;
    /// use serde_json::json;
    ///
    /// let opinion = Opinion::from_json(&json!({
    ///     "belief": 0.5, "disbelief": 0.3, "uncertainty": 0.2
    /// })).unwrap();
    /// assert_eq!(opinion.base_rate(), rust_decimal::Decimal::new(5, 1));
    /// ```
    pub fn from_json(value: &Value) -> Result<Opinion> {
        let object = value.as_object().ok_or_else(|| {
            OpinionError::MalformedInput(format!("expected a JSON object, got {}", kind(value)))
        })?;

        let belief = required(object, "belief")?;
        let disbelief = required(object, "disbelief")?;
        let uncertainty = required(object, "uncertainty")?;
        let base_rate = match object.get("base_rate") {
            Some(v) => number(v, "base_rate")?,
            None => DEFAULT_BASE_RATE,
        };

        Opinion::new(belief, disbelief, uncertainty, base_rate)
    }

    /// Parse JSON text and build an opinion from it
    pub fn from_json_str(text: &str) -> Result<Opinion> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| OpinionError::MalformedInput(format!("invalid JSON: {}", e)))?;
        Self::from_json(&value)
    }
}

fn required(object: &Map<String, Value>, key: &str) -> Result<f64> {
    let value = object
        .get(key)
        .ok_or_else(|| OpinionError::MalformedInput(format!("missing required key '{}'", key)))?;
    number(value, key)
}

fn number(value: &Value, key: &str) -> Result<f64> {
    value.as_f64().ok_or_else(|| {
        OpinionError::MalformedInput(format!("'{}' must be a number, got {}", key, kind(value)))
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;
    use serde_json::json;

    #[test]
    fn test_to_json_has_all_keys() {
        let opinion = Opinion::new(0.5, 0.3, 0.2, 0.25).unwrap();
        let value = opinion.to_json();

        assert_eq!(value["belief"], json!(0.5));
        assert_eq!(value["disbelief"], json!(0.3));
        assert_eq!(value["uncertainty"], json!(0.2));
        assert_eq!(value["base_rate"], json!(0.25));
    }

    #[test]
    fn test_record_holds_nearest_f64() {
        let record = Opinion::new(0.611111, 0.277778, 0.111111, 0.000001)
            .unwrap()
            .to_record();

        assert_eq!(record.belief, 0.611111);
        assert_eq!(record.disbelief, 0.277778);
        assert_eq!(record.uncertainty, 0.111111);
        assert_eq!(record.base_rate, 0.000001);
    }

    #[test]
    fn test_json_round_trip() {
        let opinion = Opinion::new(0.611111, 0.277778, 0.111111, 0.5).unwrap();
        let restored = Opinion::from_json(&opinion.to_json()).unwrap();
        assert_eq!(restored, opinion);
    }

    #[test]
    fn test_base_rate_defaults() {
        let opinion = Opinion::from_json(&json!({
            "belief": 0.1,
            "disbelief": 0.1,
            "uncertainty": 0.8,
        }))
        .unwrap();
        assert_eq!(opinion.base_rate(), Decimal::new(5, 1));
    }

    #[test]
    fn test_integer_values_accepted() {
        let opinion = Opinion::from_json(&json!({
            "belief": 1,
            "disbelief": 0,
            "uncertainty": 0,
            "base_rate": 1,
        }))
        .unwrap();
        assert_eq!(opinion.belief(), Decimal::ONE);
    }

    #[test]
    fn test_not_an_object() {
        let err = Opinion::from_json(&json!([0.5, 0.3, 0.2])).unwrap_err();
        assert!(matches!(err, OpinionError::MalformedInput(_)));
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_missing_key() {
        let err = Opinion::from_json(&json!({
            "belief": 0.5,
            "uncertainty": 0.5,
        }))
        .unwrap_err();
        assert_eq!(
            err,
            OpinionError::MalformedInput("missing required key 'disbelief'".to_string())
        );
    }

    #[test]
    fn test_non_numeric_value() {
        let err = Opinion::from_json(&json!({
            "belief": "0.5",
            "disbelief": 0.3,
            "uncertainty": 0.2,
        }))
        .unwrap_err();
        assert!(matches!(err, OpinionError::MalformedInput(_)));
    }

    #[test]
    fn test_values_still_validated() {
        let err = Opinion::from_json(&json!({
            "belief": 0.5,
            "disbelief": 0.3,
            "uncertainty": 0.2,
            "base_rate": 2.0,
        }))
        .unwrap_err();
        assert!(matches!(err, OpinionError::OutOfRange { field: Field::BaseRate, .. }));
    }

    #[test]
    fn test_from_json_str() {
        let opinion =
            Opinion::from_json_str(r#"{"belief": 0.2, "disbelief": 0.4, "uncertainty": 0.4}"#)
                .unwrap();
        assert_eq!(opinion.uncertainty(), Decimal::new(4, 1));

        assert!(matches!(
            Opinion::from_json_str("{not json"),
            Err(OpinionError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let opinion = Opinion::new(0.45, 0.35, 0.2, 0.25).unwrap();
        let text = serde_json::to_string(&opinion).unwrap();
        let restored: Opinion = serde_json::from_str(&text).unwrap();
        assert_eq!(restored, opinion);
    }

    #[test]
    fn test_serde_rejects_invalid_opinion() {
        let result: std::result::Result<Opinion, _> =
            serde_json::from_str(r#"{"belief": 0.5, "disbelief": 0.3, "uncertainty": 0.3}"#);
        assert!(result.is_err());
    }
}
