//! Payment order models. The client only shapes requests; the backend
//! owns every payment-gateway detail.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Amount;

/// Currency used for every hospital-registration order.
pub const DEFAULT_CURRENCY: &str = "INR";

#[derive(Debug, Clone, Serialize)]
pub struct CreatePaymentRequest {
    pub amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HospitalOrderRequest {
    pub hospital_registration: bool,
    pub plan_name: String,
    pub amount: u64,
    pub currency: String,
}

impl HospitalOrderRequest {
    pub fn new(plan_name: impl Into<String>, amount: u64) -> Self {
        Self {
            hospital_registration: true,
            plan_name: plan_name.into(),
            amount,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentOrder {
    #[serde(default)]
    pub payment_id: Option<i64>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub amount: Option<Amount>,
    #[serde(default)]
    pub upi_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentStatus {
    #[serde(default)]
    pub payment_id: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hospital_order_request_shape() {
        let req = HospitalOrderRequest::new("Professional", 10000);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hospital_registration": true,
                "plan_name": "Professional",
                "amount": 10000,
                "currency": "INR"
            })
        );
    }

    #[test]
    fn test_create_payment_request_without_hospital() {
        let req = CreatePaymentRequest {
            amount: 500,
            hospital_id: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"amount": 500})
        );
    }

    #[test]
    fn test_payment_order_accepts_string_amount() {
        let order: PaymentOrder = serde_json::from_str(
            r#"{"payment_id": 9, "transaction_id": "TXN1", "amount": "500", "status": "pending",
                "qr_codes": {"gpay": "data:image/png;base64,AAA"}}"#,
        )
        .unwrap();
        assert_eq!(order.payment_id, Some(9));
        assert_eq!(order.amount, Some(Amount::Text("500".to_string())));
        assert!(order.extra.contains_key("qr_codes"));
    }
}
