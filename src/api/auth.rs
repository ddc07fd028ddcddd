//! `/api/users` authentication endpoints.

use crate::client::{ApiClient, Result};
use crate::models::{AuthSession, LoginRequest, RegisterRequest, User};

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Log in with mobile number and password.
    pub async fn login(&self, mobile: &str, password: &str) -> Result<AuthSession> {
        let body = LoginRequest {
            mobile: mobile.to_string(),
            password: password.to_string(),
        };
        self.client.post("/api/users/login", &body).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthSession> {
        self.client.post("/api/users/register", request).await
    }

    /// Fetch the user the current token belongs to.
    pub async fn current_user(&self) -> Result<User> {
        self.client.get("/api/users/me").await
    }
}
