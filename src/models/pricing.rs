//! Pricing configuration managed through the admin endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Amount;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    pub plans: Vec<PricingTier>,
    #[serde(default)]
    pub annual_discount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub currency_symbol: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price: Amount,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricingUpdateResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub pricing: Option<PricingConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backend_pricing_decodes() {
        let config: PricingConfig = serde_json::from_str(
            r#"{
                "plans": [{
                    "name": "Starter",
                    "price": "999",
                    "period": "month",
                    "description": "Perfect for small clinics",
                    "features": ["Up to 5 doctors", "Unlimited appointments"],
                    "popular": false
                }],
                "annual_discount": 20,
                "currency": "INR",
                "currency_symbol": "₹"
            }"#,
        )
        .unwrap();
        assert_eq!(config.plans.len(), 1);
        assert_eq!(config.plans[0].price.to_string(), "999");
        assert_eq!(config.annual_discount, Some(20.0));
    }
}
