//! Error type shared by every API call.

use thiserror::Error;

/// Everything that can go wrong talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, CORS, offline, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The backend answered 2xx but its envelope status was not `OK`.
    #[error("{0}")]
    Rejected(String),

    /// The response body was not the JSON we expected.
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The client was built from an unusable configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Build a status error from a failed response body.
    ///
    /// The backend reports failures as JSON with a `detail` (or `notification`,
    /// or `message`) string. When none is present the reason phrase is used.
    pub fn from_status(status: u16, reason: Option<&str>, body: &str) -> Self {
        let message = detail_from_body(body)
            .or_else(|| reason.map(str::to_string))
            .unwrap_or_else(|| format!("HTTP {status}"));
        ApiError::Status { status, message }
    }

    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Text suitable for showing to the user as-is.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Network error".to_string(),
            other => other.to_string(),
        }
    }
}

fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["detail", "notification", "message"]
        .iter()
        .find_map(|field| value.get(field)?.as_str().map(str::to_string))
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_prefers_detail() {
        let err = ApiError::from_status(403, Some("Forbidden"), r#"{"detail":"Architects only"}"#);
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.user_message(), "Architects only");
    }

    #[test]
    fn test_status_error_falls_back_to_notification() {
        let err = ApiError::from_status(400, Some("Bad Request"), r#"{"notification":"Already voted"}"#);
        assert_eq!(err.to_string(), "Already voted");
    }

    #[test]
    fn test_status_error_falls_back_to_reason() {
        let err = ApiError::from_status(409, Some("Conflict"), "<html>conflict</html>");
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.to_string(), "Conflict");
    }

    #[test]
    fn test_status_error_without_reason() {
        let err = ApiError::from_status(599, None, "");
        assert_eq!(err.to_string(), "HTTP 599");
    }

    #[test]
    fn test_rejected_has_no_status() {
        let err = ApiError::Rejected("Server returned wrong response".to_string());
        assert!(err.status().is_none());
        assert_eq!(err.user_message(), "Server returned wrong response");
    }
}
