use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message shown when a failure response carries no usable `detail`.
pub const GENERIC_API_ERROR: &str = "An error occurred.";

/// Body of a non-2xx response from the shortening service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl ApiErrorBody {
    /// Human-readable text carried by `detail`.
    ///
    /// Accepts a plain string or a list of validation entries with a `msg`
    /// field. Anything else is treated as missing.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
            Value::Array(entries) => {
                let messages: Vec<&str> = entries
                    .iter()
                    .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }

    pub fn message_or_fallback(&self) -> String {
        self.message()
            .unwrap_or_else(|| GENERIC_API_ERROR.to_string())
    }
}
