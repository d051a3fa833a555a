//! Persisted unit of one option: its current and default value

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard default used when no default is supplied and nothing is stored
pub const STANDARD_DEFAULT: &str = "";

/// Current and default value of one option, in the shape it is persisted
///
/// Serializes to `{ "currentValue": ..., "defaultValue": ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredOption {
    current_value: String,
    default_value: String,
}

impl StoredOption {
    pub fn new(current_value: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self {
            current_value: current_value.into(),
            default_value: default_value.into(),
        }
    }

    /// Option that has never been changed: value and default are both `default_value`
    pub fn seeded(default_value: impl Into<String>) -> Self {
        let default_value = default_value.into();
        Self {
            current_value: default_value.clone(),
            default_value,
        }
    }

    pub fn value(&self) -> &str {
        &self.current_value
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// Rebuild from a stored record
    ///
    /// Never fails: a missing or non-string field reads as the empty string,
    /// so records written by other format versions still resolve.
    pub fn from_record(record: &Value) -> Self {
        let field = |name: &str| {
            record
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or(STANDARD_DEFAULT)
                .to_string()
        };

        Self {
            current_value: field("currentValue"),
            default_value: field("defaultValue"),
        }
    }

    /// Plain record in the persisted shape
    pub fn to_record(&self) -> Value {
        serde_json::json!({
            "currentValue": self.current_value,
            "defaultValue": self.default_value,
        })
    }
}
