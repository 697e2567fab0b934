//! Errors returned by [`crate::ProfileApi`] implementations.
//!
//! The UI never shows `Display` output of transport errors directly; it asks
//! [`ApiError::user_message`] for the text to put in a notice.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL (or a path joined onto it) is not a valid URL.
    #[error("invalid API url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },

    /// A success response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of a server-side rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for a user-facing notice.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::InvalidUrl { .. } => self.to_string(),
            ApiError::Transport(_) => "Could not reach the server".to_string(),
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Decode(_) => "The server sent an unexpected response".to_string(),
        }
    }
}

/// Pull a human readable message out of an error response body.
///
/// Understands `{"message": "..."}`, `{"message": [...]}`, `{"error": "..."}`,
/// `{"errors": {"field": [...]}}` and `{"errors": [...]}`. A non-JSON body is used
/// verbatim; an empty one falls back to the status reason.
pub fn server_message(status: u16, reason: Option<&str>, body: &str) -> String {
    let body = body.trim();
    let fallback = || match reason {
        Some(reason) => format!("Request failed: {status} {reason}"),
        None => format!("Request failed: {status}"),
    };

    if body.is_empty() {
        return fallback();
    }

    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return body.to_string();
    };

    for key in ["message", "error", "errors"] {
        if let Some(value) = json.get(key) {
            let mut messages = Vec::new();
            collect_messages(value, &mut messages);
            if !messages.is_empty() {
                return messages.join("; ");
            }
        }
    }

    match json {
        Value::String(s) if !s.is_empty() => s,
        _ => fallback(),
    }
}

fn collect_messages(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) if !s.trim().is_empty() => out.push(s.trim().to_string()),
        Value::Array(items) => items.iter().for_each(|v| collect_messages(v, out)),
        Value::Object(fields) => {
            // `{ "errors": { "username": ["taken"] } }` or `{ "errors": [{ "msg": ".." }] }`
            if let Some(msg) = fields.get("message").or_else(|| fields.get("msg")) {
                collect_messages(msg, out);
            } else {
                fields.values().for_each(|v| collect_messages(v, out));
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_string() {
        let msg = server_message(409, Some("Conflict"), r#"{"message":"Username already exists"}"#);
        assert_eq!(msg, "Username already exists");
    }

    #[test]
    fn test_message_array() {
        let body = r#"{"message":["email must be an email","username should not be empty"],"statusCode":400}"#;
        assert_eq!(
            server_message(400, None, body),
            "email must be an email; username should not be empty"
        );
    }

    #[test]
    fn test_errors_object() {
        let body = r#"{"errors":{"username":["is taken"]}}"#;
        assert_eq!(server_message(422, None, body), "is taken");
    }

    #[test]
    fn test_errors_list_of_objects() {
        let body = r#"{"errors":[{"msg":"Invalid value","param":"email"}]}"#;
        assert_eq!(server_message(400, None, body), "Invalid value");
    }

    #[test]
    fn test_plain_text_body() {
        assert_eq!(server_message(500, None, "database down\n"), "database down");
    }

    #[test]
    fn test_empty_body_uses_reason() {
        assert_eq!(
            server_message(404, Some("Not Found"), ""),
            "Request failed: 404 Not Found"
        );
        assert_eq!(server_message(418, None, "{}"), "Request failed: 418");
    }

    #[test]
    fn test_user_message() {
        let err = ApiError::Server {
            status: 409,
            message: "Username already exists".into(),
        };
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.user_message(), "Username already exists");
    }
}
