//! Auth gateway over HTTP

use crate::constants::{
    LOGIN_ENDPOINT, LOGOUT_ENDPOINT, PROFILE_ENDPOINT, REFRESH_ENDPOINT, REGISTER_ENDPOINT,
};
use crate::http::client::ApiClient;
use async_trait::async_trait;
use medrep_domain::error::{Error, Result};
use medrep_domain::ports::AuthGateway;
use medrep_domain::value_objects::{Credentials, LoginReply, ProfileUpdate, Registration};
use serde_json::Value;

/// [`AuthGateway`] backed by the `/auth` and `/user` endpoints
#[derive(Clone)]
pub struct HttpAuthGateway {
    client: ApiClient,
}

impl HttpAuthGateway {
    /// Create the gateway
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, credentials: &Credentials) -> Result<LoginReply> {
        let body = self
            .client
            .post_json(LOGIN_ENDPOINT, None, Some(credentials))
            .await?;
        if body.is_null() {
            return Ok(LoginReply::default());
        }
        serde_json::from_value(body)
            .map_err(|e| Error::invalid_response(format!("Malformed login reply: {e}")))
    }

    async fn logout(&self, token: &str) -> Result<()> {
        self.client
            .post_json::<Value>(LOGOUT_ENDPOINT, Some(token), None)
            .await
            .map(|_| ())
    }

    async fn register(&self, registration: &Registration) -> Result<()> {
        self.client
            .post_json(REGISTER_ENDPOINT, None, Some(registration))
            .await
            .map(|_| ())
    }

    async fn refresh(&self, token: &str) -> Result<String> {
        let body = self
            .client
            .post_json::<Value>(REFRESH_ENDPOINT, Some(token), None)
            .await?;
        body.get("token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .map(ToString::to_string)
            .ok_or_else(|| Error::invalid_response("refresh reply without token"))
    }

    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<()> {
        self.client
            .put_json(PROFILE_ENDPOINT, Some(token), update)
            .await
            .map(|_| ())
    }
}
