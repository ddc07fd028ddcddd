//! `/api/payments` endpoints.

use crate::client::{ApiClient, Result};
use crate::models::{CreatePaymentRequest, HospitalOrderRequest, PaymentOrder, PaymentStatus};

pub struct PaymentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PaymentsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn create_order(&self, amount: u64, hospital_id: Option<i64>) -> Result<PaymentOrder> {
        let body = CreatePaymentRequest {
            amount,
            hospital_id,
        };
        self.client.post("/api/payments/create", &body).await
    }

    /// Order for the one-time installation fee of a hospital plan, in INR.
    pub async fn create_hospital_registration_order(
        &self,
        plan_name: &str,
        amount: u64,
    ) -> Result<PaymentOrder> {
        let body = HospitalOrderRequest::new(plan_name, amount);
        self.client
            .post("/api/payments/create-order-hospital", &body)
            .await
    }

    /// Ask the backend to verify a payment. The ID travels in the path.
    pub async fn verify(&self, payment_id: i64) -> Result<PaymentStatus> {
        self.client
            .post_empty(&format!("/api/payments/verify/{}", payment_id))
            .await
    }

    pub async fn status(&self, payment_id: i64) -> Result<PaymentStatus> {
        self.client
            .get(&format!("/api/payments/{}/status", payment_id))
            .await
    }
}
