//! Session value object

use super::identity::Identity;
use super::role::Role;

/// Who is currently using the app
///
/// Identity and token travel together: there is no state holding one without
/// the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// Nobody is logged in
    #[default]
    Anonymous,
    /// A logged-in user and the credential proving it
    Authenticated {
        /// The user's identity
        identity: Identity,
        /// Opaque bearer token
        token: String,
    },
}

impl Session {
    /// Create an authenticated session
    pub fn authenticated(identity: Identity, token: impl Into<String>) -> Self {
        Self::Authenticated {
            identity,
            token: token.into(),
        }
    }

    /// Identity, when logged in
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { identity, .. } => Some(identity),
        }
    }

    /// Token, when logged in
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { token, .. } => Some(token),
        }
    }

    /// Role of the logged-in user
    pub fn role(&self) -> Option<Role> {
        self.identity().map(|identity| identity.role)
    }

    /// True when logged in
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}
