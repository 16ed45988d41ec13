//! Identity, credentials and the auth collaborator's payloads

use super::role::Role;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Authenticated user's role-bearing profile record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Backend user id (numeric ids are kept as their decimal text)
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    /// Login email
    pub email: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Role deciding landing page and reachable areas
    #[serde(alias = "user_type", alias = "userType")]
    pub role: Role,
}

impl Identity {
    /// Create an identity
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            role,
        }
    }
}

/// Email and password submitted to `POST /auth/login`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Login email
    pub email: String,
    /// Plaintext password
    pub password: String,
}

impl Credentials {
    /// Create credentials
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a `POST /auth/login` success response
///
/// Both fields are optional on the wire; the session store decides what a
/// missing field means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginReply {
    /// Identity of the logged-in user
    #[serde(default)]
    pub user: Option<Identity>,
    /// Opaque auth token
    #[serde(default)]
    pub token: Option<String>,
}

/// Body of `POST /auth/register`
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Plaintext password
    pub password: String,
    /// Requested role
    pub user_type: Role,
    /// Role-specific extra fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<serde_json::Value>,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("user_type", &self.user_type)
            .finish_non_exhaustive()
    }
}

/// Body of `PUT /user/profile`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form profile fields merged by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<serde_json::Value>,
}

impl ProfileUpdate {
    /// Apply the locally visible part of the update to an identity
    pub fn apply_to(&self, identity: &Identity) -> Identity {
        let mut updated = identity.clone();
        if let Some(name) = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            updated.name = name.to_string();
        }
        updated
    }
}

/// Accept either a JSON string or an integer
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Signed(n) => n.to_string(),
        Raw::Unsigned(n) => n.to_string(),
    })
}
