//! `/api/hospitals` endpoints.

use serde_json::Value;

use crate::client::{query_string, ApiClient, Result};
use crate::models::{Hospital, HospitalDecision, HospitalPaymentInfo};

pub struct HospitalsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> HospitalsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Hospitals whose registration has been approved, ordered by name.
    pub async fn approved(&self) -> Result<Vec<Hospital>> {
        self.client.get("/api/hospitals/approved").await
    }

    /// All hospitals, optionally filtered by registration status.
    pub async fn list(&self, status: Option<&str>) -> Result<Vec<Hospital>> {
        let query = match status {
            Some(status) => query_string(&[("status_filter", status.to_string())]),
            None => String::new(),
        };
        self.client.get(&format!("/api/hospitals/{}", query)).await
    }

    /// Submit a hospital registration for admin approval.
    ///
    /// The registration payload is passed through untouched.
    pub async fn register(&self, registration: &Value) -> Result<Hospital> {
        self.client.post("/api/hospitals/register", registration).await
    }

    pub async fn get(&self, id: i64) -> Result<Hospital> {
        self.client.get(&format!("/api/hospitals/{}", id)).await
    }

    pub async fn approve(&self, id: i64) -> Result<HospitalDecision> {
        self.client
            .put_empty(&format!("/api/hospitals/{}/approve", id))
            .await
    }

    pub async fn reject(&self, id: i64) -> Result<HospitalDecision> {
        self.client
            .put_empty(&format!("/api/hospitals/{}/reject", id))
            .await
    }

    /// UPI identifiers for a hospital, or for the first approved hospital
    /// when `hospital_id` is `None`.
    pub async fn payment_info(&self, hospital_id: Option<i64>) -> Result<HospitalPaymentInfo> {
        let query = match hospital_id {
            Some(id) => query_string(&[("hospital_id", id.to_string())]),
            None => String::new(),
        };
        self.client
            .get(&format!("/api/hospitals/payment-info{}", query))
            .await
    }
}
