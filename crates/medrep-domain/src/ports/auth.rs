//! Authentication Gateway Port
//!
//! Defines the contract for the backend that issues and revokes tokens.

use crate::error::Result;
use crate::value_objects::{Credentials, LoginReply, ProfileUpdate, Registration};
use async_trait::async_trait;

/// Auth collaborator
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for an identity and a token
    async fn login(&self, credentials: &Credentials) -> Result<LoginReply>;

    /// Tell the backend the token is no longer in use
    async fn logout(&self, token: &str) -> Result<()>;

    /// Create an account
    async fn register(&self, registration: &Registration) -> Result<()>;

    /// Trade a token for a fresh one
    async fn refresh(&self, token: &str) -> Result<String>;

    /// Update the profile of the token's owner
    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<()>;
}
