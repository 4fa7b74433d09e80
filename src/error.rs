use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Session expired - please log in again")]
    Unauthorized,

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-2xx response to an error value. 401 and 403 collapse into
    /// the session-invalidation variant regardless of which endpoint
    /// produced them.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            _ => ApiError::Server {
                status,
                message: server_message(status, body),
            },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Prefer the backend's `{"message": ...}` field, fall back to the raw body,
/// then to a generic line carrying the status code.
fn server_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = value.get("message").and_then(|m| m.as_str()) {
            return msg.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Request failed with status {}", status)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_statuses_map_to_session_invalidation() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_status(403, r#"{"message":"forbidden"}"#),
            ApiError::Unauthorized
        );
    }

    #[test]
    fn server_message_prefers_json_message_field() {
        let err = ApiError::from_status(422, r#"{"message":"Amount must be positive"}"#);
        assert_eq!(
            err,
            ApiError::Server {
                status: 422,
                message: "Amount must be positive".to_string()
            }
        );
    }

    #[test]
    fn server_message_falls_back_to_raw_body() {
        let err = ApiError::from_status(500, "boom");
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: "boom".to_string()
            }
        );
    }

    #[test]
    fn server_message_falls_back_to_status_line_when_body_empty() {
        let err = ApiError::from_status(502, "  ");
        match err {
            ApiError::Server { status, message } => {
                assert_eq!(status, 502);
                assert!(message.contains("502"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn json_body_without_message_field_is_kept_verbatim() {
        let err = ApiError::from_status(400, r#"{"error":"bad"}"#);
        assert_eq!(
            err,
            ApiError::Server {
                status: 400,
                message: r#"{"error":"bad"}"#.to_string()
            }
        );
    }
}
