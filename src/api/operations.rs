//! `/api/operations` endpoints.

use crate::client::{encode_segment, ApiClient, Result};
use crate::models::{ActionResponse, BookOperationRequest, Operation, OperationAction};

pub struct OperationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> OperationsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn book(&self, request: &BookOperationRequest) -> Result<Operation> {
        self.client.post("/api/operations/book", request).await
    }

    pub async fn mine(&self) -> Result<Vec<Operation>> {
        self.client.get("/api/operations/my-operations").await
    }

    pub async fn for_doctor(&self) -> Result<Vec<Operation>> {
        self.client.get("/api/operations/doctor-operations").await
    }

    /// Operations of the current user (patient or doctor) in one specialty.
    pub async fn by_specialty(&self, specialty: &str) -> Result<Vec<Operation>> {
        self.client
            .get(&format!(
                "/api/operations/by-specialty/{}",
                encode_segment(specialty)
            ))
            .await
    }

    pub async fn apply(&self, id: i64, action: OperationAction) -> Result<ActionResponse> {
        self.client
            .put_empty(&format!("/api/operations/{}/{}", id, action.as_path()))
            .await
    }

    pub async fn confirm(&self, id: i64) -> Result<ActionResponse> {
        self.apply(id, OperationAction::Confirm).await
    }

    pub async fn cancel(&self, id: i64) -> Result<ActionResponse> {
        self.apply(id, OperationAction::Cancel).await
    }
}
