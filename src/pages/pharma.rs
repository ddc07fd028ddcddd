//! Meeting request form for pharma representatives.
//!
//! A valid submission is acknowledged after a short simulated delay. Nothing
//! is sent to the backend and nothing is persisted.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::validation::{
    validate_min_trimmed, validate_required, ValidationErrorBuilder, ValidationErrors,
};

/// Delay before a valid submission is acknowledged.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoctorOption {
    pub name: &'static str,
    pub specialty: &'static str,
}

pub const DOCTORS: [DoctorOption; 5] = [
    DoctorOption { name: "Dr. Rahul Sharma", specialty: "General Medicine" },
    DoctorOption { name: "Dr. Priya Patel", specialty: "Cardiology" },
    DoctorOption { name: "Dr. Amit Kumar", specialty: "Orthopedics" },
    DoctorOption { name: "Dr. Sneha Gupta", specialty: "Neurology" },
    DoctorOption { name: "Dr. Vikram Singh", specialty: "Dermatology" },
];

pub const HOSPITALS: [&str; 5] = [
    "Anagha City Hospital",
    "Central Medical Center",
    "Apollo Healthcare",
    "Max Super Specialty",
    "Fortis Hospital",
];

pub const PURPOSES: [&str; 5] = [
    "Product Presentation",
    "Sample Distribution",
    "Medical Conference Invite",
    "Research Collaboration",
    "General Meeting",
];

/// Form fields, all held as the raw strings the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PharmaBookingForm {
    pub representative_name: String,
    pub company_name: String,
    pub phone: String,
    pub product1: String,
    pub product2: String,
    pub product3: String,
    pub product4: String,
    pub date: String,
    pub time: String,
    pub doctor: String,
    pub hospital: String,
    pub purpose: String,
    pub notes: String,
}

/// Success toast shown after submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl PharmaBookingForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrorBuilder::new();
        errors
            .check(
                "representative_name",
                validate_min_trimmed(&self.representative_name, 2, "Name is required"),
            )
            .check(
                "company_name",
                validate_min_trimmed(&self.company_name, 2, "Company name is required"),
            )
            .check(
                "phone",
                validate_min_trimmed(&self.phone, 10, "Valid phone number is required"),
            )
            .check(
                "product1",
                validate_min_trimmed(&self.product1, 2, "Product 1 is required"),
            )
            .check("date", validate_required(&self.date, "Date is required"))
            .check("time", validate_required(&self.time, "Time is required"))
            .check("doctor", validate_required(&self.doctor, "Doctor is required"))
            .check(
                "hospital",
                validate_required(&self.hospital, "Hospital is required"),
            )
            .check(
                "purpose",
                validate_required(&self.purpose, "Purpose is required"),
            );
        errors.finish()
    }

    /// Products entered, trimmed, skipping empty slots.
    pub fn products(&self) -> Vec<&str> {
        [&self.product1, &self.product2, &self.product3, &self.product4]
            .into_iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Validate, wait `delay`, then acknowledge.
    ///
    /// Validation failures return immediately without waiting.
    pub async fn submit(&self, delay: Duration) -> Result<Notification, ValidationErrors> {
        self.validate()?;

        debug!(
            doctor = %self.doctor,
            hospital = %self.hospital,
            products = self.products().len(),
            "Pharma meeting request accepted"
        );
        tokio::time::sleep(delay).await;

        Ok(Notification {
            title: "Appointment Requested!".to_string(),
            description: format!(
                "Your meeting request has been sent for {} at {}. You will receive confirmation once the doctor approves.",
                self.date, self.time
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use tokio_test::{assert_err, assert_ok};

    fn valid_form() -> PharmaBookingForm {
        PharmaBookingForm {
            representative_name: "Ravi Menon".to_string(),
            company_name: "Sun Pharma".to_string(),
            phone: "9876543210".to_string(),
            product1: "Atorvastatin".to_string(),
            date: "2025-02-14".to_string(),
            time: "11:00".to_string(),
            doctor: DOCTORS[1].name.to_string(),
            hospital: HOSPITALS[0].to_string(),
            purpose: PURPOSES[0].to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_ok!(valid_form().validate());
    }

    #[test]
    fn test_short_phone_rejected() {
        let form = PharmaBookingForm {
            phone: "12345".to_string(),
            ..valid_form()
        };
        let errors = assert_err!(form.validate());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first("phone"), Some("Valid phone number is required"));
    }

    #[test]
    fn test_phone_is_trimmed_before_length_check() {
        let form = PharmaBookingForm {
            phone: "  98765432  ".to_string(),
            ..valid_form()
        };
        assert!(form.validate().unwrap_err().contains("phone"));
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = PharmaBookingForm::default().validate().unwrap_err();
        assert_eq!(
            errors.fields(),
            vec![
                "company_name",
                "date",
                "doctor",
                "hospital",
                "phone",
                "product1",
                "purpose",
                "representative_name",
                "time",
            ]
        );
        assert_eq!(errors.first("representative_name"), Some("Name is required"));
        assert_eq!(errors.first("product1"), Some("Product 1 is required"));
        assert_eq!(errors.first("purpose"), Some("Purpose is required"));
    }

    #[test]
    fn test_optional_fields_not_checked() {
        let form = PharmaBookingForm {
            product2: "x".to_string(),
            notes: String::new(),
            ..valid_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_products_skips_blanks() {
        let form = PharmaBookingForm {
            product2: "   ".to_string(),
            product3: " Metformin ".to_string(),
            ..valid_form()
        };
        assert_eq!(form.products(), vec!["Atorvastatin", "Metformin"]);
    }

    #[tokio::test]
    async fn test_submit_acknowledges_after_delay() {
        let delay = Duration::from_millis(20);
        let started = Instant::now();
        let notification = valid_form().submit(delay).await.unwrap();

        assert!(started.elapsed() >= delay);
        assert_eq!(notification.title, "Appointment Requested!");
        assert_eq!(
            notification.description,
            "Your meeting request has been sent for 2025-02-14 at 11:00. You will receive confirmation once the doctor approves."
        );
    }

    #[tokio::test]
    async fn test_submit_invalid_returns_without_waiting() {
        let form = PharmaBookingForm {
            phone: "12345".to_string(),
            ..valid_form()
        };
        let started = Instant::now();
        let errors = form.submit(Duration::from_secs(30)).await.unwrap_err();

        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(errors.contains("phone"));
    }
}
