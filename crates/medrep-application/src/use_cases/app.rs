//! Application Shell
//!
//! Composes the session store, access policy, route resolver and
//! notification center, and drives the backend calls a signed-in user makes.
//!
//! Every call that carries the session token goes through one interceptor:
//! an authorization failure from any of them ends the session and moves the
//! shell to the login view.

use crate::domain_services::access_policy::{AccessPolicy, normalize_path};
use crate::domain_services::notifications::NotificationCenter;
use crate::domain_services::route_resolver::resolve;
use crate::domain_services::validation::{LoginForm, RegistrationForm, validate_upload};
use crate::use_cases::session_store::SessionStore;
use medrep_domain::constants::{HOME_ROUTE, LOGIN_ROUTE, MAX_REDIRECT_HOPS, NOT_FOUND_ROUTE};
use medrep_domain::error::{Error, Result};
use medrep_domain::ports::ReportGateway;
use medrep_domain::value_objects::{
    AccessDecision, Identity, Navigation, NotificationKind, ProfileUpdate, Report, ReportUpload,
    Session, View,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Shown after the reports fetch fails
pub const REPORTS_FAILED_MESSAGE: &str = "Failed to load reports";
/// Shown after a successful upload
pub const UPLOAD_SUCCEEDED_MESSAGE: &str = "Report uploaded and analyzed successfully!";
/// Shown when an upload fails without a backend message
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed. Please try again.";
/// Shown after a report fails to load
pub const REPORT_FAILED_MESSAGE: &str = "Failed to load report";
/// Shown after a report is deleted
pub const REPORT_DELETED_MESSAGE: &str = "Report deleted";
/// Shown when a delete fails without a backend message
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete report";
/// Shown when the backend rejects the session token
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// The portal's application state
pub struct App {
    sessions: SessionStore,
    reports_gateway: Arc<dyn ReportGateway>,
    policy: AccessPolicy,
    notifications: NotificationCenter,
    reports: Vec<Report>,
    location: String,
    view: View,
    recovery: Option<String>,
    pending_logout: Option<JoinHandle<()>>,
}

impl App {
    /// Create the shell; nothing is loaded until [`App::start`]
    pub fn new(
        sessions: SessionStore,
        reports_gateway: Arc<dyn ReportGateway>,
        notifications: NotificationCenter,
    ) -> Self {
        Self {
            sessions,
            reports_gateway,
            policy: AccessPolicy::new(),
            notifications,
            reports: Vec::new(),
            location: HOME_ROUTE.to_string(),
            view: View::Home,
            recovery: None,
            pending_logout: None,
        }
    }

    /// Restore the saved session, load reports if signed in, and open `path`
    pub async fn start(&mut self, path: &str) -> Navigation {
        self.sessions.hydrate();
        if self.sessions.is_authenticated() {
            self.load_reports_quietly().await;
        }
        self.navigate(path)
    }

    /// Restore the saved session and open `path` without loading reports
    pub fn restore(&mut self, path: &str) -> Navigation {
        self.sessions.hydrate();
        self.navigate(path)
    }

    /// Open `path`, following redirects until a view is allowed
    pub fn navigate(&mut self, path: &str) -> Navigation {
        let requested = normalize_path(path);
        let mut location = requested.clone();
        let mut hops = 0;

        loop {
            let target = match self.policy.decide(&location, self.sessions.session()) {
                AccessDecision::Allow => break,
                AccessDecision::RedirectLogin => LOGIN_ROUTE,
                AccessDecision::RedirectDefault(route) => route,
            };
            hops += 1;
            if hops > MAX_REDIRECT_HOPS {
                error!(requested = %requested, location = %location, "Redirect loop, giving up");
                location = NOT_FOUND_ROUTE.to_string();
                break;
            }
            debug!(from = %location, to = target, "Redirecting");
            location = target.to_string();
        }

        let view = resolve(&location, self.sessions.session().role());
        self.location.clone_from(&location);
        self.view = view.clone();
        self.recovery = None;

        Navigation {
            requested,
            location,
            view,
        }
    }

    /// Validate the form, log in, load reports and open the landing page
    pub async fn login(&mut self, form: &LoginForm) -> Result<Navigation> {
        form.check().map_err(Error::Validation)?;

        match self.sessions.login(&form.credentials()).await {
            Ok(identity) => {
                self.load_reports_quietly().await;
                Ok(self.navigate(identity.role.landing_route()))
            }
            Err(e) => {
                self.notifications
                    .push(NotificationKind::Error, e.message.clone());
                Err(Error::Login(e))
            }
        }
    }

    /// End the session and return to the login page
    pub fn logout(&mut self) -> Navigation {
        self.pending_logout = self.sessions.logout();
        self.reports.clear();
        self.notifications.clear();
        self.navigate(LOGIN_ROUTE)
    }

    /// Wait at most `limit` for the backend logout started by [`App::logout`]
    pub async fn settle(&mut self, limit: Duration) {
        let Some(task) = self.pending_logout.take() else {
            return;
        };
        match tokio::time::timeout(limit, task).await {
            Ok(Ok(())) => debug!("Backend logout finished"),
            Ok(Err(e)) => warn!(error = %e, "Backend logout task failed"),
            Err(_) => warn!(?limit, "Backend logout still pending, giving up"),
        }
    }

    /// Reload the report list
    pub async fn refresh_reports(&mut self) -> Result<()> {
        let gateway = Arc::clone(&self.reports_gateway);
        let outcome = self
            .authorized(move |token| async move { gateway.list_reports(&token).await })
            .await;

        match outcome {
            Ok(reports) => {
                debug!(count = reports.len(), "Reports loaded");
                self.reports = reports;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load reports");
                self.notifications
                    .push(NotificationKind::Error, REPORTS_FAILED_MESSAGE);
                Err(e)
            }
        }
    }

    /// Fetch one report
    pub async fn open_report(&mut self, id: &str) -> Result<Report> {
        let gateway = Arc::clone(&self.reports_gateway);
        let report_id = id.to_string();
        let outcome = self
            .authorized(move |token| async move { gateway.get_report(&token, &report_id).await })
            .await;

        if let Err(e) = &outcome {
            warn!(report_id = id, error = %e, "Failed to load report");
            self.notifications
                .push(NotificationKind::Error, REPORT_FAILED_MESSAGE);
        }
        outcome
    }

    /// Delete a report and drop it from the loaded list
    pub async fn delete_report(&mut self, id: &str) -> Result<()> {
        let gateway = Arc::clone(&self.reports_gateway);
        let report_id = id.to_string();
        let outcome = self
            .authorized(move |token| async move { gateway.delete_report(&token, &report_id).await })
            .await;

        match outcome {
            Ok(()) => {
                info!(report_id = id, "Report deleted");
                self.reports.retain(|report| report.id != id);
                self.notifications
                    .push(NotificationKind::Success, REPORT_DELETED_MESSAGE);
                Ok(())
            }
            Err(e) => {
                warn!(report_id = id, error = %e, "Failed to delete report");
                let message = match &e {
                    Error::Rejected { message, .. } if !message.is_empty() => message.clone(),
                    _ => DELETE_FAILED_MESSAGE.to_string(),
                };
                self.notifications.push(NotificationKind::Error, message);
                Err(e)
            }
        }
    }

    /// Validate and upload a report; the new report goes first in the list
    pub async fn upload(&mut self, upload: ReportUpload) -> Result<Report> {
        validate_upload(&upload).map_err(Error::Validation)?;

        let gateway = Arc::clone(&self.reports_gateway);
        let file_name = upload.file_name.clone();
        let outcome = self
            .authorized(move |token| async move { gateway.upload_report(&token, upload).await })
            .await;

        match outcome {
            Ok(report) => {
                info!(report_id = %report.id, file = %file_name, "Report uploaded");
                self.reports.insert(0, report.clone());
                self.notifications
                    .push(NotificationKind::Success, UPLOAD_SUCCEEDED_MESSAGE);
                Ok(report)
            }
            Err(e) => {
                warn!(file = %file_name, error = %e, "Upload failed");
                let message = match &e {
                    Error::Rejected { message, .. } if !message.is_empty() => message.clone(),
                    _ => UPLOAD_FAILED_MESSAGE.to_string(),
                };
                self.notifications.push(NotificationKind::Error, message);
                Err(e)
            }
        }
    }

    /// Validate the form and create an account
    pub async fn register(&mut self, form: &RegistrationForm) -> Result<()> {
        form.check().map_err(Error::Validation)?;

        let registration = form.registration();
        match self.sessions.auth().register(&registration).await {
            Ok(()) => {
                info!(email = %registration.email, role = %registration.user_type, "Account registered");
                self.notifications.push(
                    NotificationKind::Success,
                    "Registration successful! Please log in.",
                );
                Ok(())
            }
            Err(e) => {
                warn!(email = %registration.email, error = %e, "Registration failed");
                self.notifications
                    .push(NotificationKind::Error, e.user_message());
                Err(e)
            }
        }
    }

    /// Send a profile update and apply it to the session identity
    pub async fn update_profile(&mut self, update: ProfileUpdate) -> Result<Identity> {
        let auth = Arc::clone(self.sessions.auth());
        let body = update.clone();
        self.authorized(move |token| async move { auth.update_profile(&token, &body).await })
            .await?;

        let current = self
            .sessions
            .current_identity()
            .ok_or(Error::NotAuthenticated)?;
        let updated = update.apply_to(current);
        self.sessions.update_identity(updated.clone())?;
        self.notifications
            .push(NotificationKind::Success, "Profile updated");
        Ok(updated)
    }

    /// Trade the session token for a fresh one
    pub async fn refresh_token(&mut self) -> Result<()> {
        let auth = Arc::clone(self.sessions.auth());
        let token = self
            .authorized(move |token| async move { auth.refresh(&token).await })
            .await?;
        self.sessions.replace_token(token)
    }

    /// Run a view renderer; a failure switches the shell to the recovery view
    pub fn render_guarded<T, F>(&mut self, render: F) -> Option<T>
    where
        F: FnOnce(&View) -> Result<T>,
    {
        match render(&self.view) {
            Ok(rendered) => Some(rendered),
            Err(e) => {
                error!(location = %self.location, view = %self.view, error = %e, "View failed to render");
                self.recovery = Some(e.to_string());
                self.view = View::Recovery;
                None
            }
        }
    }

    /// Leave the recovery view and retry the current location
    pub fn reset(&mut self) -> Navigation {
        let location = self.location.clone();
        self.navigate(&location)
    }

    /// Start over from persisted state at the current location
    pub async fn reload(&mut self) -> Navigation {
        let location = self.location.clone();
        self.start(&location).await
    }

    /// Message of the failure that triggered the recovery view
    pub fn recovery_message(&self) -> Option<&str> {
        self.recovery.as_deref()
    }

    /// Current location
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Current view
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Loaded reports, newest upload first
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Current session
    pub fn session(&self) -> &Session {
        self.sessions.session()
    }

    /// Session store
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Notification center
    pub fn notifications(&mut self) -> &mut NotificationCenter {
        &mut self.notifications
    }

    /// Access policy in use
    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    async fn load_reports_quietly(&mut self) {
        if let Err(e) = self.refresh_reports().await {
            debug!(error = %e, "Continuing without reports");
        }
    }

    /// Run an authenticated call; a 401 ends the session
    async fn authorized<T, F, Fut>(&mut self, call: F) -> Result<T>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let token = self
            .sessions
            .token()
            .ok_or(Error::NotAuthenticated)?
            .to_string();

        let outcome = call(token).await;
        if let Err(e) = &outcome
            && e.is_unauthorized()
        {
            self.expire_session();
        }
        outcome
    }

    fn expire_session(&mut self) {
        warn!(location = %self.location, "Backend rejected the session token");
        self.sessions.invalidate();
        self.reports.clear();
        self.notifications
            .push(NotificationKind::Warning, SESSION_EXPIRED_MESSAGE);
        self.navigate(LOGIN_ROUTE);
    }
}
