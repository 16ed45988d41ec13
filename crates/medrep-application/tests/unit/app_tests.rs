//! Application shell: navigation, login flow, reports and the 401 interceptor

use crate::fakes::{FakeAuth, FakeReports, MemoryStorage, clinic, patient, report};
use medrep_application::{
    App, DELETE_FAILED_MESSAGE, LoginForm, NotificationCenter, REPORT_DELETED_MESSAGE,
    REPORT_FAILED_MESSAGE, REPORTS_FAILED_MESSAGE, RegistrationForm, SESSION_EXPIRED_MESSAGE,
    SessionStore, UPLOAD_SUCCEEDED_MESSAGE,
};
use medrep_domain::constants::{MAX_UPLOAD_BYTES, TOKEN_STORAGE_KEY, USER_STORAGE_KEY};
use medrep_domain::error::Error;
use medrep_domain::value_objects::{
    Identity, NotificationKind, ProfileUpdate, ReportType, ReportUpload, Role, View,
};
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

struct Harness {
    app: App,
    storage: Arc<MemoryStorage>,
    auth: Arc<FakeAuth>,
    reports: Arc<FakeReports>,
}

fn harness() -> Harness {
    let storage = Arc::new(MemoryStorage::default());
    let auth = Arc::new(
        FakeAuth::default()
            .with_account("secret1", patient())
            .with_account("clinic-pass", clinic()),
    );
    let reports = Arc::new(FakeReports::with_reports(vec![report("1", "Lipid panel")]));
    let sessions = SessionStore::new(storage.clone(), auth.clone());
    let app = App::new(sessions, reports.clone(), NotificationCenter::default());
    Harness {
        app,
        storage,
        auth,
        reports,
    }
}

fn persist(storage: &MemoryStorage, identity: &Identity, token: &str) {
    storage.put(USER_STORAGE_KEY, &serde_json::to_string(identity).unwrap());
    storage.put(TOKEN_STORAGE_KEY, token);
}

fn pdf(title: &str, size: usize) -> ReportUpload {
    ReportUpload {
        title: title.to_string(),
        report_type: ReportType::BloodTest,
        file_name: "labs.pdf".to_string(),
        content_type: "application/pdf".to_string(),
        bytes: vec![b'%'; size],
    }
}

fn messages(app: &mut App) -> Vec<(NotificationKind, String)> {
    app.notifications()
        .active()
        .iter()
        .map(|n| (n.kind, n.message.clone()))
        .collect()
}

#[tokio::test]
async fn test_start_anonymous_on_dashboard_lands_on_login() {
    let mut h = harness();
    let nav = h.app.start("/dashboard").await;

    assert_eq!(nav.requested, "/dashboard");
    assert_eq!(nav.location, "/login");
    assert_eq!(nav.view, View::Login);
    assert_eq!(h.reports.list_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_start_with_saved_session_loads_reports() {
    let mut h = harness();
    persist(&h.storage, &patient(), "tok");

    let nav = h.app.start("/").await;

    assert_eq!(nav.location, "/dashboard");
    assert_eq!(nav.view, View::PatientDashboard);
    assert_eq!(h.app.reports().len(), 1);
}

#[tokio::test]
async fn test_login_then_upload_is_allowed() {
    let mut h = harness();
    h.app.start("/login").await;

    let nav = h
        .app
        .login(&LoginForm::new("a@b.com", "secret1"))
        .await
        .unwrap();
    assert_eq!(nav.location, "/dashboard");
    assert_eq!(nav.view, View::PatientDashboard);
    assert_eq!(h.reports.list_calls.load(Ordering::SeqCst), 1);

    let nav = h.app.navigate("/upload");
    assert_eq!(nav.view, View::Upload);
    assert!(!nav.redirected());
}

#[tokio::test]
async fn test_clinic_login_lands_on_clinic_dashboard() {
    let mut h = harness();
    let nav = h
        .app
        .login(&LoginForm::new("clinic@example.com", "clinic-pass"))
        .await
        .unwrap();
    assert_eq!(nav.location, "/clinic/dashboard");
    assert_eq!(nav.view, View::ClinicDashboard);

    let nav = h.app.navigate("/government/dashboard");
    assert_eq!(nav.location, "/clinic/dashboard");

    let nav = h.app.navigate("/dashboard");
    assert_eq!(nav.view, View::ClinicDashboard);
}

#[tokio::test]
async fn test_invalid_login_form_never_reaches_backend() {
    let mut h = harness();
    let err = h
        .app
        .login(&LoginForm::new("not-an-email", "123"))
        .await
        .unwrap_err();

    let Error::Validation(errors) = err else {
        panic!("Expected Validation error");
    };
    assert_eq!(errors.get("email"), Some("Email is invalid"));
    assert_eq!(h.auth.login_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_failed_login_pushes_notification() {
    let mut h = harness();
    let err = h
        .app
        .login(&LoginForm::new("a@b.com", "wrong-pass"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Login(_)));
    assert_eq!(
        messages(&mut h.app),
        vec![(NotificationKind::Error, "Invalid credentials".to_string())]
    );
}

#[tokio::test]
async fn test_unauthorized_upload_ends_session() {
    let mut h = harness();
    h.app
        .login(&LoginForm::new("a@b.com", "secret1"))
        .await
        .unwrap();
    h.app.navigate("/upload");
    h.reports.reject_tokens.store(true, Ordering::SeqCst);

    let err = h.app.upload(pdf("Labs", 128)).await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(!h.app.session().is_authenticated());
    assert_eq!(h.app.view(), &View::Login);
    assert_eq!(h.app.location(), "/login");
    assert!(h.storage.get(TOKEN_STORAGE_KEY).is_none());
    assert!(
        messages(&mut h.app).contains(&(
            NotificationKind::Warning,
            SESSION_EXPIRED_MESSAGE.to_string()
        ))
    );
}

#[tokio::test]
async fn test_unauthorized_refresh_ends_session() {
    let mut h = harness();
    h.app
        .login(&LoginForm::new("a@b.com", "secret1"))
        .await
        .unwrap();
    h.auth.reject_tokens.store(true, Ordering::SeqCst);

    assert!(h.app.refresh_token().await.is_err());
    assert!(!h.app.session().is_authenticated());
    assert_eq!(h.app.view(), &View::Login);
}

#[tokio::test]
async fn test_report_fetch_failure_is_notified() {
    let mut h = harness();
    h.app
        .login(&LoginForm::new("a@b.com", "secret1"))
        .await
        .unwrap();
    h.reports.unavailable.store(true, Ordering::SeqCst);

    assert!(h.app.refresh_reports().await.is_err());
    assert!(h.app.session().is_authenticated());
    assert!(
        messages(&mut h.app)
            .contains(&(NotificationKind::Error, REPORTS_FAILED_MESSAGE.to_string()))
    );
}

#[tokio::test]
async fn test_upload_prepends_report() {
    let mut h = harness();
    h.app
        .login(&LoginForm::new("a@b.com", "secret1"))
        .await
        .unwrap();

    let created = h.app.upload(pdf("Glucose log", 2048)).await.unwrap();

    assert_eq!(h.app.reports()[0], created);
    assert_eq!(h.app.reports().len(), 2);
    assert!(
        messages(&mut h.app)
            .contains(&(NotificationKind::Success, UPLOAD_SUCCEEDED_MESSAGE.to_string()))
    );
}

#[tokio::test]
async fn test_oversized_upload_is_rejected_locally() {
    let mut h = harness();
    h.app
        .login(&LoginForm::new("a@b.com", "secret1"))
        .await
        .unwrap();

    let too_big = usize::try_from(MAX_UPLOAD_BYTES).unwrap() + 1;
    let err = h.app.upload(pdf("Scan", too_big)).await.unwrap_err();

    let Error::Validation(errors) = err else {
        panic!("Expected Validation error");
    };
    assert_eq!(errors.get("file"), Some("labs.pdf is too large (max 10MB)"));
    assert_eq!(h.app.reports().len(), 1);
}

#[tokio::test]
async fn test_upload_without_session() {
    let mut h = harness();
    let err = h.app.upload(pdf("Labs", 10)).await.unwrap_err();
    assert!(matches!(err, Error::NotAuthenticated));
}

#[tokio::test]
async fn test_logout_clears_everything() {
    let mut h = harness();
    h.app
        .login(&LoginForm::new("a@b.com", "secret1"))
        .await
        .unwrap();
    h.app.notifications().push(NotificationKind::Info, "hello");

    let nav = h.app.logout();

    assert_eq!(nav.view, View::Login);
    assert!(h.app.reports().is_empty());
    assert!(h.app.notifications().is_empty());
    assert!(h.storage.get(USER_STORAGE_KEY).is_none());
}

#[tokio::test]
async fn test_settle_waits_for_backend_logout() {
    let mut h = harness();
    h.app
        .login(&LoginForm::new("a@b.com", "secret1"))
        .await
        .unwrap();

    h.app.logout();
    h.app.settle(Duration::from_secs(1)).await;

    assert_eq!(*h.auth.logout_calls.lock().unwrap(), vec!["token-1".to_string()]);
    h.app.settle(Duration::from_secs(1)).await;
    assert_eq!(h.auth.logout_calls.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_restore_skips_report_fetch() {
    let mut h = harness();
    persist(&h.storage, &patient(), "tok");

    let nav = h.app.restore("/reports");

    assert_eq!(nav.view, View::Reports);
    assert!(h.app.session().is_authenticated());
    assert_eq!(h.reports.list_calls.load(Ordering::SeqCst), 0);
    assert!(h.app.reports().is_empty());
}

#[tokio::test]
async fn test_open_report_by_id() {
    let mut h = harness();
    h.app
        .login(&LoginForm::new("a@b.com", "secret1"))
        .await
        .unwrap();

    let opened = h.app.open_report("1").await.unwrap();
    assert_eq!(opened.title, "Lipid panel");

    let err = h.app.open_report("77").await.unwrap_err();
    assert!(matches!(err, Error::Rejected { status: 404, .. }));
    assert!(
        messages(&mut h.app)
            .contains(&(NotificationKind::Error, REPORT_FAILED_MESSAGE.to_string()))
    );
}

#[tokio::test]
async fn test_delete_report_drops_it_from_list() {
    let mut h = harness();
    h.app
        .login(&LoginForm::new("a@b.com", "secret1"))
        .await
        .unwrap();
    assert_eq!(h.app.reports().len(), 1);

    h.app.delete_report("1").await.unwrap();

    assert!(h.app.reports().is_empty());
    assert!(h.reports.reports.lock().unwrap().is_empty());
    assert!(
        messages(&mut h.app)
            .contains(&(NotificationKind::Success, REPORT_DELETED_MESSAGE.to_string()))
    );
}

#[tokio::test]
async fn test_delete_failure_shows_backend_message() {
    let mut h = harness();
    h.app
        .login(&LoginForm::new("a@b.com", "secret1"))
        .await
        .unwrap();

    assert!(h.app.delete_report("77").await.is_err());
    assert!(
        messages(&mut h.app)
            .contains(&(NotificationKind::Error, "Report not found".to_string()))
    );

    h.reports.unavailable.store(true, Ordering::SeqCst);
    assert!(h.app.delete_report("1").await.is_err());
    assert_eq!(h.app.reports().len(), 1);
    assert!(
        messages(&mut h.app)
            .contains(&(NotificationKind::Error, DELETE_FAILED_MESSAGE.to_string()))
    );
}

#[tokio::test]
async fn test_unauthorized_delete_ends_session() {
    let mut h = harness();
    h.app
        .login(&LoginForm::new("a@b.com", "secret1"))
        .await
        .unwrap();
    h.reports.reject_tokens.store(true, Ordering::SeqCst);

    let err = h.app.delete_report("1").await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(!h.app.session().is_authenticated());
    assert_eq!(h.app.location(), "/login");
}

#[tokio::test]
async fn test_update_profile_applies_name() {
    let mut h = harness();
    h.app
        .login(&LoginForm::new("a@b.com", "secret1"))
        .await
        .unwrap();

    let updated = h
        .app
        .update_profile(ProfileUpdate {
            name: Some("Ann Smith".to_string()),
            profile: None,
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "Ann Smith");
    assert_eq!(h.app.sessions().current_identity(), Some(&updated));
    let stored: Identity =
        serde_json::from_str(&h.storage.get(USER_STORAGE_KEY).unwrap()).unwrap();
    assert_eq!(stored.name, "Ann Smith");
}

#[tokio::test]
async fn test_refresh_token_replaces_token() {
    let mut h = harness();
    h.app
        .login(&LoginForm::new("a@b.com", "secret1"))
        .await
        .unwrap();

    h.app.refresh_token().await.unwrap();

    assert_eq!(h.app.sessions().token(), Some("token-1-refreshed"));
}

#[tokio::test]
async fn test_register_sends_role_profile() {
    let mut h = harness();
    let mut form = RegistrationForm::new(Role::Clinic);
    form.name = "City Clinic".to_string();
    form.email = "New@Clinic.org".to_string();
    form.password = "Str0ngPass".to_string();
    form.confirm_password = "Str0ngPass".to_string();
    form.clinic_name = "City Clinic".to_string();
    form.license_number = "LIC-1".to_string();
    form.address = "1 Main St".to_string();
    form.agree_to_terms = true;
    form.agree_to_privacy = true;

    h.app.register(&form).await.unwrap();

    let sent = h.auth.registrations.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].email, "new@clinic.org");
    assert_eq!(sent[0].user_type, Role::Clinic);
    assert_eq!(
        sent[0].profile.as_ref().unwrap()["license_number"],
        "LIC-1"
    );
}

#[tokio::test]
async fn test_render_failure_shows_recovery_until_reset() {
    let mut h = harness();
    h.app.navigate("/help");

    let rendered: Option<()> = h
        .app
        .render_guarded(|_| Err(Error::invalid_response("chart data missing")));

    assert!(rendered.is_none());
    assert_eq!(h.app.view(), &View::Recovery);
    assert!(h.app.recovery_message().unwrap().contains("chart data missing"));

    let nav = h.app.reset();
    assert_eq!(nav.view, View::Help);
    assert!(h.app.recovery_message().is_none());
}
