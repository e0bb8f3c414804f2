//! Authentication API client methods

use super::{ApiClient, ClientError};
use crate::types::{LoginRequest, LoginResponse, MessageResponse};

impl ApiClient {
    /// Log in and record the session
    ///
    /// On success the token, display name and email are written to the session
    /// store, so every later request is authenticated.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.post_json("/auth/login", &request).await?;

        self.session()
            .establish(
                &response.token,
                Some(response.user.name.as_str()),
                Some(response.user.email.as_str()),
            )?;

        tracing::info!(email = %response.user.email, role = %response.user.role, "Logged in");
        Ok(response)
    }

    /// Tell the server the session is over
    ///
    /// Local session state is left alone; clearing it is the page's job.
    pub async fn logout(&self) -> Result<MessageResponse, ClientError> {
        self.post_json("/auth/logout", &serde_json::json!({})).await
    }
}
