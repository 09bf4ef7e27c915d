use serde::{Deserialize, Serialize};

/// Path of the shortening endpoint relative to the service root.
pub const SHORTEN_PATH: &str = "/api/v1/shorten";

/// Body of `POST /api/v1/shorten`.
///
/// Optional fields are left out of the JSON entirely when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_clicks: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResponse {
    #[serde(alias = "shortened_url")]
    pub short_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_optional_fields_are_not_serialized() {
        let request = ShortenRequest {
            url: "https://example.com".to_string(),
            custom_alias: None,
            password: None,
            max_clicks: None,
        };
        assert_eq!(
            serde_json::to_value(&request).expect("serialize"),
            json!({"url": "https://example.com"})
        );
    }

    #[test]
    fn response_accepts_legacy_field_name() {
        let response: ShortenResponse = serde_json::from_value(json!({
            "original_url": "https://example.com",
            "shortened_url": "http://127.0.0.1:8000/r/abc123"
        }))
        .expect("response");
        assert_eq!(response.short_url, "http://127.0.0.1:8000/r/abc123");
        assert_eq!(response.original_url.as_deref(), Some("https://example.com"));
    }
}
