//! Entry gate, login and registration payloads.

use serde::{Deserialize, Serialize};

/// Body of the entry-password check.
#[derive(Debug, Clone, Serialize)]
pub struct EntryPassword {
    pub password: String,
}

/// Answer to the entry-password check.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EntryVerdict {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Body of a login request.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of a registration request.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// User as the backend describes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if the username is not set.
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            &self.email
        } else {
            &self.username
        }
    }
}

/// Successful login: the bearer token and, sometimes, the user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access", alias = "access_token")]
    pub token: String,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default, alias = "userId")]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Body of an invitation request.
#[derive(Debug, Clone, Serialize)]
pub struct Invitation {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_accepts_token_aliases() {
        let plain: LoginResponse =
            serde_json::from_str(r#"{"token":"abc123","user":{"id":1}}"#).unwrap();
        assert_eq!(plain.token, "abc123");
        assert_eq!(plain.user.map(|u| u.id), Some(1));

        let access: LoginResponse = serde_json::from_str(r#"{"access":"xyz"}"#).unwrap();
        assert_eq!(access.token, "xyz");
        assert!(access.user.is_none());
    }

    #[test]
    fn test_entry_verdict_defaults_to_rejected() {
        let verdict: EntryVerdict = serde_json::from_str(r#"{"detail":"Wrong password"}"#).unwrap();
        assert!(!verdict.ok);
        assert_eq!(verdict.detail.as_deref(), Some("Wrong password"));
    }

    #[test]
    fn test_register_response_reads_camel_case_id() {
        let resp: RegisterResponse =
            serde_json::from_str(r#"{"success":true,"userId":1}"#).unwrap();
        assert_eq!(resp.user_id, Some(1));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserInfo {
            id: 3,
            email: "mason@example.com".to_string(),
            ..UserInfo::default()
        };
        assert_eq!(user.display_name(), "mason@example.com");
    }
}
