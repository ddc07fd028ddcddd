//! User and session models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A user as returned by the backend. `role` is an open string
/// (`patient`, `doctor`, `pharma`, ...), not a closed set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub mobile: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn is_doctor(&self) -> bool {
        self.role.eq_ignore_ascii_case("doctor")
    }
}

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub mobile: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("mobile", &self.mobile)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Default, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub mobile: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("mobile", &self.mobile)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Login/register response.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_skips_absent_optionals() {
        let req = RegisterRequest {
            name: "Asha".to_string(),
            mobile: "9876543210".to_string(),
            password: "secret".to_string(),
            role: Some("patient".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["role"], "patient");
        assert!(json.get("email").is_none());
        assert!(json.get("specialty").is_none());
    }

    #[test]
    fn test_debug_redacts_password() {
        let req = LoginRequest {
            mobile: "9876543210".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(!format!("{:?}", req).contains("hunter2"));
    }

    #[test]
    fn test_user_keeps_unknown_fields() {
        let user: User = serde_json::from_str(
            r#"{"id": 3, "name": "Dr. Priya Patel", "mobile": "9000000001",
                "role": "doctor", "specialty": "Cardiology", "hospital_id": 2}"#,
        )
        .unwrap();
        assert!(user.is_doctor());
        assert_eq!(user.specialty.as_deref(), Some("Cardiology"));
        assert_eq!(user.extra["hospital_id"], 2);
    }

    #[test]
    fn test_auth_session_defaults_token_type() {
        let session: AuthSession = serde_json::from_str(
            r#"{"access_token": "abc", "user": {"id": 1, "name": "A", "mobile": "1", "role": "patient"}}"#,
        )
        .unwrap();
        assert_eq!(session.token_type, "bearer");
        assert!(session.message.is_none());
    }
}
