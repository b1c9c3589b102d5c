//! Wire types exchanged with the remote shortening service

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Origin tag sent as `createdBy` when none is configured
pub const DEFAULT_CREATED_BY: &str = "frontend";

/// Body of the creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlRequest {
    pub url: String,
    pub created_by: String,
}

/// Successful creation response
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ShortUrlRecord {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: String,
}

/// Error body returned with a non-2xx creation status
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Resolution response: either `{ url }` or `{ error: <truthy> }`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResolveResponse {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl ResolveResponse {
    pub fn destination(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            error: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            url: None,
            error: Some(Value::Bool(true)),
        }
    }

    /// Whether the service flagged this response as an error.
    ///
    /// The flag follows JavaScript truthiness: `null`, `false`, `0` and `""`
    /// do not count.
    pub fn is_error(&self) -> bool {
        self.error.as_ref().is_some_and(is_truthy)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
