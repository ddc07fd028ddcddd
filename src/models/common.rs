//! Shapes shared by several endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Reply to state-changing calls such as confirm or cancel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A money amount the backend sends either as a number or as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            Amount::Number(n) => write!(f, "{:.2}", n),
            Amount::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_accepts_number_and_string() {
        let n: Amount = serde_json::from_str("500").unwrap();
        let s: Amount = serde_json::from_str("\"500\"").unwrap();
        assert_eq!(n.to_string(), "500");
        assert_eq!(s.to_string(), "500");
        assert_eq!(Amount::Number(12.5).to_string(), "12.50");
    }

    #[test]
    fn test_action_response_keeps_extra_fields() {
        let resp: ActionResponse = serde_json::from_str(
            r#"{"message": "Appointment marked as visited", "visit_date": "2025-01-05"}"#,
        )
        .unwrap();
        assert_eq!(resp.message.as_deref(), Some("Appointment marked as visited"));
        assert_eq!(resp.extra["visit_date"], "2025-01-05");
    }
}
