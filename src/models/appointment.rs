//! Appointment models.
//!
//! Dates and time slots are plain strings; the backend owns their format.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize)]
pub struct BookAppointmentRequest {
    pub doctor_id: i64,
    pub date: String,
    pub time_slot: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    #[serde(default)]
    pub doctor_id: Option<i64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time_slot: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSlots {
    pub doctor_id: i64,
    pub doctor_name: String,
    pub date: String,
    #[serde(default)]
    pub available_slots: Vec<String>,
    #[serde(default)]
    pub booked_slots: Vec<String>,
}

/// State changes a doctor or patient can apply to an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentAction {
    Confirm,
    Cancel,
    MarkVisited,
}

impl AppointmentAction {
    pub fn as_path(&self) -> &'static str {
        match self {
            AppointmentAction::Confirm => "confirm",
            AppointmentAction::Cancel => "cancel",
            AppointmentAction::MarkVisited => "mark-visited",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_request_omits_missing_reason() {
        let req = BookAppointmentRequest {
            doctor_id: 4,
            date: "2025-01-05".to_string(),
            time_slot: "10:30".to_string(),
            reason: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["doctor_id"], 4);
        assert!(json.get("reason").is_none());
    }

    #[test]
    fn test_action_paths() {
        assert_eq!(AppointmentAction::Confirm.as_path(), "confirm");
        assert_eq!(AppointmentAction::Cancel.as_path(), "cancel");
        assert_eq!(AppointmentAction::MarkVisited.as_path(), "mark-visited");
    }
}
