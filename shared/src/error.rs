//! ==============================================================================
//! error.rs - request and form failures
//! ==============================================================================

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// shown when an error body carries no usable `detail`
pub const UNKNOWN_DETAIL: &str = "Error desconocido";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// the request never completed
    #[error("transport failure: {0}")]
    Transport(String),

    /// the backend answered with a non-2xx status
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    /// a 2xx body did not match the expected schema
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// build a `Rejected` from a raw error body
    pub fn rejected(status: u16, body: &str) -> Self {
        ApiError::Rejected { status, detail: extract_detail(body) }
    }

    /// transport and decode failures both read as "could not reach the server"
    pub fn is_transport(&self) -> bool {
        !matches!(self, ApiError::Rejected { .. })
    }

    /// the backend-provided message, if this is an application failure
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// pull the `detail` field out of an error body.
///
/// validation errors arrive as `[{ "msg": ... }, ...]`; their messages are
/// joined. anything else that is not a string is shown as json.
pub fn extract_detail(body: &str) -> String {
    let detail = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { detail: Some(detail) }) => detail,
        _ => return UNKNOWN_DETAIL.to_string(),
    };

    match detail {
        Value::String(s) => s,
        Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .map(str::to_string)
                .collect();
            if messages.is_empty() {
                Value::Array(items).to_string()
            } else {
                messages.join("; ")
            }
        }
        Value::Null => UNKNOWN_DETAIL.to_string(),
        other => other.to_string(),
    }
}

/// local validation of the rental form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("missing required fields: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),

    #[error("invalid customer id")]
    InvalidCustomer,
}

// ==============================================================================
// tests
// ==============================================================================
