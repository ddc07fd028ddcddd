use crate::client::{ApiClient, Result};
use crate::models::User;

pub struct DoctorsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> DoctorsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List every registered doctor.
    pub async fn list(&self) -> Result<Vec<User>> {
        self.client.get("/api/users/doctors").await
    }
}
