//! Hospital models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hospital {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    /// `pending`, `approved` or `rejected` on current backends.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Hospital {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("-")
    }
}

/// Reply to approve/reject calls.
#[derive(Debug, Clone, Deserialize)]
pub struct HospitalDecision {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub hospital: Option<Hospital>,
}

/// UPI identifiers shown on the payment screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HospitalPaymentInfo {
    pub upi_id: String,
    #[serde(default)]
    pub gpay_upi_id: Option<String>,
    #[serde(default)]
    pub phonepay_upi_id: Option<String>,
    #[serde(default)]
    pub paytm_upi_id: Option<String>,
    #[serde(default)]
    pub bhim_upi_id: Option<String>,
}
