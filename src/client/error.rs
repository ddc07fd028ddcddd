//! Error type shared by the request gateway and every domain API module.
//!
//! Every failure surfaces as a `ClientError` whose `Display` output is the
//! human-readable message a caller can show as-is.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::navigation::Navigation;

/// Message used for every connectivity failure.
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Cannot connect to server. Please ensure the backend server is running.";

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("{0}")]
    Connection(String),

    /// A success body that does not match the endpoint's result type.
    #[error("Failed to decode server response: {0}")]
    Decode(String),

    #[error("Failed to encode request body: {0}")]
    Encode(String),

    #[error("Token storage error: {0}")]
    Storage(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    pub fn connection() -> Self {
        ClientError::Connection(CONNECTION_ERROR_MESSAGE.to_string())
    }

    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED.as_u16())
    }

    /// Navigation the caller should perform after this error.
    ///
    /// `Login` after a 401. The gateway has already cleared the token.
    pub fn redirect(&self) -> Option<Navigation> {
        if self.is_unauthorized() {
            Some(Navigation::Login)
        } else {
            None
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Storage(err.to_string())
    }
}

/// Generic message used when the error body carries nothing better.
pub fn generic_status_message(status: u16) -> String {
    format!("HTTP error! status: {}", status)
}

/// Build the message for a non-success response from its raw body.
///
/// Preference order is `detail`, then `message`, then the generic
/// status-coded message. A `detail` list (request validation failures) is
/// flattened by joining each entry's `msg`.
pub fn extract_error_message(status: u16, body: &str) -> String {
    let parsed: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return generic_status_message(status),
    };

    if let Some(detail) = parsed.get("detail").and_then(message_from_value) {
        return detail;
    }
    if let Some(message) = parsed.get("message").and_then(message_from_value) {
        return message;
    }

    generic_status_message(status)
}

fn message_from_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Object(obj) => obj
                        .get("msg")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    _ => None,
                })
                .collect();
            if parts.is_empty() {
                Some(value.to_string())
            } else {
                Some(parts.join("; "))
            }
        }
        Value::Bool(false) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_takes_precedence() {
        let body = r#"{"detail": "Doctor not found", "message": "ignored"}"#;
        assert_eq!(extract_error_message(404, body), "Doctor not found");
    }

    #[test]
    fn test_message_fallback() {
        let body = r#"{"message": "Admin access required"}"#;
        assert_eq!(extract_error_message(403, body), "Admin access required");
    }

    #[test]
    fn test_unparsable_body_uses_status() {
        let msg = extract_error_message(502, "<html>Bad Gateway</html>");
        assert_eq!(msg, "HTTP error! status: 502");
    }

    #[test]
    fn test_empty_object_uses_status() {
        assert_eq!(extract_error_message(500, "{}"), "HTTP error! status: 500");
        assert_eq!(
            extract_error_message(500, r#"{"detail": ""}"#),
            "HTTP error! status: 500"
        );
    }

    #[test]
    fn test_validation_detail_list_is_joined() {
        let body = r#"{"detail": [
            {"loc": ["body", "mobile"], "msg": "field required", "type": "value_error.missing"},
            {"loc": ["body", "password"], "msg": "field required", "type": "value_error.missing"}
        ]}"#;
        assert_eq!(
            extract_error_message(422, body),
            "field required; field required"
        );
    }

    #[test]
    fn test_unauthorized_redirects_to_login() {
        let err = ClientError::Http {
            status: 401,
            message: "Could not validate credentials".to_string(),
        };
        assert!(err.is_unauthorized());
        assert_eq!(err.redirect(), Some(Navigation::Login));
        assert_eq!(err.to_string(), "Could not validate credentials");

        let err = ClientError::Http {
            status: 400,
            message: "Invalid time slot".to_string(),
        };
        assert_eq!(err.redirect(), None);
        assert_eq!(ClientError::connection().redirect(), None);
    }

    #[test]
    fn test_connection_message_is_fixed() {
        assert_eq!(
            ClientError::connection().to_string(),
            CONNECTION_ERROR_MESSAGE
        );
    }
}
