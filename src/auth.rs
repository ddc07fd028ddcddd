//! Login state on top of the auth endpoints and the session store.
//!
//! Two states only: anonymous (no token) and authenticated (token present).
//! Login and register move to authenticated; logout or a failed
//! current-user lookup move back to anonymous.

use tracing::{info, warn};

use crate::client::{ApiClient, Result};
use crate::models::{RegisterRequest, User};
use crate::navigation::Navigation;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated,
}

pub struct Auth<'a> {
    client: &'a ApiClient,
}

impl<'a> Auth<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    fn session(&self) -> &Session {
        self.client.session()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    pub fn state(&self) -> AuthState {
        if self.is_authenticated() {
            AuthState::Authenticated
        } else {
            AuthState::Anonymous
        }
    }

    /// Log in and persist the issued token.
    ///
    /// On failure the stored token is left as it was.
    pub async fn login(&self, mobile: &str, password: &str) -> Result<User> {
        let response = self.client.auth().login(mobile, password).await?;
        self.session().set_token(&response.access_token)?;
        info!(user_id = response.user.id, role = %response.user.role, "Logged in");
        Ok(response.user)
    }

    /// Register a new account and log straight into it.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User> {
        let response = self.client.auth().register(request).await?;
        self.session().set_token(&response.access_token)?;
        info!(user_id = response.user.id, role = %response.user.role, "Registered and logged in");
        Ok(response.user)
    }

    /// Drop the stored token. The caller routes to the returned screen.
    pub fn logout(&self) -> Result<Navigation> {
        self.session().clear()?;
        info!("Logged out");
        Ok(Navigation::Login)
    }

    /// The logged-in user, or `None`.
    ///
    /// Without a token no request is made. Any failure clears the token and
    /// yields `None` instead of an error.
    pub async fn current_user(&self) -> Option<User> {
        if !self.is_authenticated() {
            return None;
        }

        match self.client.auth().current_user().await {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "Failed to load current user, clearing session");
                if let Err(e) = self.session().clear() {
                    warn!(error = %e, "Failed to clear session");
                }
                None
            }
        }
    }
}

impl ApiClient {
    /// Auth helper bound to this client's session.
    pub fn auth_helper(&self) -> Auth<'_> {
        Auth::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::session::MemoryTokenStore;

    #[test]
    fn test_state_follows_token_presence() {
        let session = Session::new(Arc::new(MemoryTokenStore::with_token("t")));
        let client = ApiClient::new("http://127.0.0.1:9", session).unwrap();
        let auth = client.auth_helper();
        assert_eq!(auth.state(), AuthState::Authenticated);

        assert_eq!(auth.logout().unwrap(), Navigation::Login);
        assert_eq!(auth.state(), AuthState::Anonymous);
    }

    #[tokio::test]
    async fn test_current_user_without_token_is_none() {
        let client = ApiClient::new("http://127.0.0.1:9", Session::in_memory()).unwrap();
        assert!(client.auth_helper().current_user().await.is_none());
    }
}
