//! Session Store Use Case
//!
//! Single source of truth for who is logged in. Memory is authoritative;
//! persisted storage is written through on every change so the session
//! survives a restart.

use medrep_domain::constants::{TOKEN_STORAGE_KEY, USER_STORAGE_KEY};
use medrep_domain::error::{Error, LoginError, Result};
use medrep_domain::ports::{AuthGateway, SessionStorage};
use medrep_domain::value_objects::{Credentials, Identity, Session};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// In-memory session backed by a [`SessionStorage`]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    auth: Arc<dyn AuthGateway>,
    session: Session,
}

impl SessionStore {
    /// Create an anonymous store; call [`SessionStore::hydrate`] to restore a saved session
    pub fn new(storage: Arc<dyn SessionStorage>, auth: Arc<dyn AuthGateway>) -> Self {
        Self {
            storage,
            auth,
            session: Session::Anonymous,
        }
    }

    /// Restore the session from persisted storage
    ///
    /// Never fails: unreadable, corrupt or half-present state leaves the store
    /// anonymous and removes what was stored.
    pub fn hydrate(&mut self) -> &Session {
        self.session = match self.read_persisted() {
            Ok(Some(session)) => session,
            Ok(None) => Session::Anonymous,
            Err(e) => {
                warn!(error = %e, "Failed to read persisted session, starting anonymous");
                self.clear_persisted();
                Session::Anonymous
            }
        };

        match self.session.identity() {
            Some(identity) => {
                info!(user_id = %identity.id, role = %identity.role, "Session restored");
            }
            None => debug!("No persisted session"),
        }
        &self.session
    }

    fn read_persisted(&self) -> Result<Option<Session>> {
        let user = self.storage.load(USER_STORAGE_KEY)?;
        let token = self
            .storage
            .load(TOKEN_STORAGE_KEY)?
            .filter(|token| !token.is_empty());

        let Some(raw_user) = user else {
            if token.is_some() {
                warn!("Persisted token without a user, clearing it");
                self.clear_persisted();
            }
            return Ok(None);
        };

        let identity = match serde_json::from_str::<Identity>(&raw_user) {
            Ok(identity) => identity,
            Err(e) => {
                warn!(error = %e, "Persisted user is not valid JSON, discarding it");
                self.clear_persisted();
                return Ok(None);
            }
        };

        match token {
            Some(token) => Ok(Some(Session::authenticated(identity, token))),
            None => {
                warn!(user_id = %identity.id, "Persisted user without a token, clearing it");
                self.clear_persisted();
                Ok(None)
            }
        }
    }

    /// Exchange credentials for a session
    ///
    /// Every failure is reported as a [`LoginError`]; the previous session is
    /// left untouched when the login fails.
    pub async fn login(&mut self, credentials: &Credentials) -> std::result::Result<Identity, LoginError> {
        debug!(email = %credentials.email, "Logging in");

        let reply = self.auth.login(credentials).await.map_err(|e| {
            warn!(email = %credentials.email, error = %e, "Login rejected");
            LoginError::from(e)
        })?;

        let token = reply.token.filter(|token| !token.is_empty());
        let (Some(identity), Some(token)) = (reply.user, token) else {
            warn!(email = %credentials.email, "Login reply is missing the user or the token");
            return Err(LoginError::from(Error::invalid_response(
                "login reply without user or token",
            )));
        };

        self.persist_identity(&identity);
        self.persist_token(&token);
        info!(user_id = %identity.id, role = %identity.role, "Logged in");
        self.session = Session::authenticated(identity.clone(), token);
        Ok(identity)
    }

    /// End the session
    ///
    /// Memory and storage are cleared before this returns. The backend is
    /// told in the background; a failure there is only logged. The returned
    /// handle lets a caller that is about to exit wait for that call.
    pub fn logout(&mut self) -> Option<JoinHandle<()>> {
        let previous = std::mem::take(&mut self.session);
        self.clear_persisted();

        let Session::Authenticated { identity, token } = previous else {
            debug!("Logout without a session");
            return None;
        };
        info!(user_id = %identity.id, "Logged out");

        let auth = Arc::clone(&self.auth);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => Some(handle.spawn(async move {
                if let Err(e) = auth.logout(&token).await {
                    warn!(error = %e, "Backend logout failed");
                }
            })),
            Err(_) => {
                debug!("No async runtime, skipping backend logout");
                None
            }
        }
    }

    /// Drop the session without contacting the backend
    pub fn invalidate(&mut self) {
        if let Some(identity) = self.session.identity() {
            info!(user_id = %identity.id, "Session invalidated");
        }
        self.session = Session::Anonymous;
        self.clear_persisted();
    }

    /// Replace the identity of the current session and persist it
    pub fn update_identity(&mut self, identity: Identity) -> Result<()> {
        let Session::Authenticated { token, .. } = &self.session else {
            return Err(Error::NotAuthenticated);
        };
        let token = token.clone();
        self.persist_identity(&identity);
        debug!(user_id = %identity.id, "Identity updated");
        self.session = Session::authenticated(identity, token);
        Ok(())
    }

    /// Replace the token of the current session and persist it
    pub fn replace_token(&mut self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        if token.is_empty() {
            return Err(Error::invalid_response("empty token"));
        }
        let Session::Authenticated { identity, .. } = &self.session else {
            return Err(Error::NotAuthenticated);
        };
        let identity = identity.clone();
        self.persist_token(&token);
        debug!(user_id = %identity.id, "Token replaced");
        self.session = Session::authenticated(identity, token);
        Ok(())
    }

    /// Identity of the logged-in user
    pub fn current_identity(&self) -> Option<&Identity> {
        self.session.identity()
    }

    /// Token of the logged-in user
    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    /// Whole session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// True when someone is logged in
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Auth collaborator used by this store
    pub fn auth(&self) -> &Arc<dyn AuthGateway> {
        &self.auth
    }

    fn persist_identity(&self, identity: &Identity) {
        let result = serde_json::to_string(identity)
            .map_err(Error::from)
            .and_then(|raw| self.storage.save(USER_STORAGE_KEY, &raw));
        if let Err(e) = result {
            warn!(error = %e, "Failed to persist user, keeping it in memory only");
        }
    }

    fn persist_token(&self, token: &str) {
        if let Err(e) = self.storage.save(TOKEN_STORAGE_KEY, token) {
            warn!(error = %e, "Failed to persist token, keeping it in memory only");
        }
    }

    fn clear_persisted(&self) {
        for key in [USER_STORAGE_KEY, TOKEN_STORAGE_KEY] {
            if let Err(e) = self.storage.delete(key) {
                warn!(key, error = %e, "Failed to delete persisted session key");
            }
        }
    }
}
