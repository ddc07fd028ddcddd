//! `/api/admin` pricing endpoints.

use crate::client::{ApiClient, Result};
use crate::models::{PricingConfig, PricingUpdateResponse};

pub struct AdminApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Current pricing configuration. Requires an admin session.
    pub async fn pricing(&self) -> Result<PricingConfig> {
        self.client.get("/api/admin/pricing").await
    }

    /// Pricing shown during hospital registration. No session required.
    pub async fn public_pricing(&self) -> Result<PricingConfig> {
        self.client.get("/api/admin/pricing/public").await
    }

    pub async fn update_pricing(&self, pricing: &PricingConfig) -> Result<PricingUpdateResponse> {
        self.client.post("/api/admin/update-pricing", pricing).await
    }
}
