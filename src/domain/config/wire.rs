//! Wire types and value validation for the `configmap` resource.

use serde::{Deserialize, Serialize};

use crate::error::EcsmError;
use crate::pagination::PageQuery;

/// Declared kind of a config value.
///
/// The set is closed; a kind outside it cannot be constructed, and an
/// unknown kind arriving on the wire fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigKind {
    /// The value is a string.
    String,
    /// The value is a number (any integer width or a 64-bit float).
    Number,
    /// The value is a JSON object or array, never a bare scalar.
    Json,
}

impl ConfigKind {
    fn as_str(self) -> &'static str {
        match self {
            ConfigKind::String => "string",
            ConfigKind::Number => "number",
            ConfigKind::Json => "json",
        }
    }
}

/// JSON kind of a runtime value, for error messages.
fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Check that a config value's runtime shape matches its declared kind.
///
/// Runs before both create and update, so the invariant holds regardless of
/// call order. Violations never reach the server.
pub fn ensure_value_matches(
    kind: ConfigKind,
    value: &serde_json::Value,
) -> Result<(), EcsmError> {
    let matches = match kind {
        ConfigKind::String => value.is_string(),
        ConfigKind::Number => value.is_number(),
        ConfigKind::Json => value.is_object() || value.is_array(),
    };

    if matches {
        Ok(())
    } else {
        Err(EcsmError::Validation(format!(
            "config type is '{}', but provided value is a {}",
            kind.as_str(),
            json_kind(value)
        )))
    }
}

/// Payload for creating a config item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateConfigRequest {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: ConfigKind,
    pub value: serde_json::Value,
}

/// A stored config item; also the update payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigItem {
    pub id: String,
    pub key: String,
    #[serde(rename = "type")]
    pub kind: ConfigKind,
    pub value: serde_json::Value,
}

/// Query options for listing config items.
#[derive(Debug, Clone, Default)]
pub struct ListConfigsOptions {
    pub page: PageQuery,
    pub key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_kind_accepts_floats_and_integers() {
        ensure_value_matches(ConfigKind::Number, &json!(123.45)).unwrap();
        ensure_value_matches(ConfigKind::Number, &json!(-7)).unwrap();
        ensure_value_matches(ConfigKind::Number, &json!(u64::MAX)).unwrap();
    }

    #[test]
    fn number_kind_rejects_numeric_string() {
        let err = ensure_value_matches(ConfigKind::Number, &json!("123")).unwrap_err();
        assert!(err.is_validation());
        let msg = err.to_string();
        assert!(msg.contains("'number'") && msg.contains("string"), "{msg}");
    }

    #[test]
    fn string_kind_requires_textual_value() {
        ensure_value_matches(ConfigKind::String, &json!("hello")).unwrap();
        let err = ensure_value_matches(ConfigKind::String, &json!(42)).unwrap_err();
        assert!(err.to_string().contains("'string'"));
    }

    #[test]
    fn json_kind_requires_object_or_array() {
        ensure_value_matches(ConfigKind::Json, &json!({"a": 1})).unwrap();
        ensure_value_matches(ConfigKind::Json, &json!([1, 2, 3])).unwrap();

        let err = ensure_value_matches(ConfigKind::Json, &json!("scalar")).unwrap_err();
        assert!(err.is_validation());
        let err = ensure_value_matches(ConfigKind::Json, &json!(true)).unwrap_err();
        assert!(err.to_string().contains("boolean"));
    }

    #[test]
    fn unknown_declared_kind_fails_to_deserialize() {
        let err = serde_json::from_str::<ConfigKind>(r#""yaml""#).unwrap_err();
        assert!(err.to_string().contains("unknown variant"));
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ConfigKind::Json).unwrap(), r#""json""#);
    }
}
