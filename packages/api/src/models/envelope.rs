use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Status string the backend uses for success.
pub const STATUS_OK: &str = "OK";

/// The backend's `{status, data, notification}` response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Some endpoints (the hall of fame list) answer without a status.
    #[serde(default)]
    pub status: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub notification: Option<String>,
}

/// An envelope whose payload, if any, is not needed.
pub type Ack = Envelope<IgnoredAny>;

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            data: Some(data),
            notification: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Fail with [`ApiError::Rejected`] unless the status is `OK`.
    pub fn check(self) -> Result<Self, ApiError> {
        if self.is_ok() {
            return Ok(self);
        }
        let message = self
            .notification
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Server returned status {}", self.status));
        Err(ApiError::Rejected(message))
    }

    /// The payload of an `OK` envelope; a missing payload counts as empty.
    pub fn into_data(self) -> Result<T, ApiError>
    where
        T: Default,
    {
        Ok(self.check()?.data.unwrap_or_default())
    }

    /// The payload whatever the status says; a missing payload counts as empty.
    pub fn into_payload(self) -> T
    where
        T: Default,
    {
        self.data.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Architect;

    #[test]
    fn test_ok_envelope_yields_data() {
        let env: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"status":"OK","data":[1,2]}"#).unwrap();
        assert!(env.is_ok());
        assert_eq!(env.into_data().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_missing_data_is_empty() {
        let env: Envelope<Vec<u32>> = serde_json::from_str(r#"{"status":"OK"}"#).unwrap();
        assert!(env.into_data().unwrap().is_empty());
    }

    #[test]
    fn test_non_ok_envelope_is_rejected_with_notification() {
        let env: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"status":"FAIL","data":[],"notification":"Vote closed"}"#)
                .unwrap();
        match env.into_data() {
            Err(ApiError::Rejected(msg)) => assert_eq!(msg, "Vote closed"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_non_ok_envelope_without_notification() {
        let env: Envelope<Vec<u32>> = serde_json::from_str(r#"{"status":"FAIL"}"#).unwrap();
        let err = env.check().unwrap_err();
        assert_eq!(err.to_string(), "Server returned status FAIL");
    }

    #[test]
    fn test_statusless_list_keeps_its_data() {
        let env: Envelope<Vec<Architect>> =
            serde_json::from_str(r#"{"data":[{"id":1,"username":"Architect1"}]}"#).unwrap();
        assert!(!env.is_ok());
        assert_eq!(
            env.into_payload(),
            vec![Architect {
                id: 1,
                username: "Architect1".to_string(),
            }]
        );
    }

    #[test]
    fn test_payload_of_empty_envelope() {
        let env: Envelope<Vec<Architect>> = serde_json::from_str("{}").unwrap();
        assert!(env.into_payload().is_empty());
    }

    #[test]
    fn test_ack_ignores_any_payload() {
        let ack: Ack =
            serde_json::from_str(r#"{"status":"OK","data":{"anything":[1,"two"]}}"#).unwrap();
        assert!(ack.check().is_ok());
    }
}
