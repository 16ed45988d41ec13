//! HTTP gateway tests against a mock backend

use medrep_domain::ports::{AuthGateway, ReportGateway};
use medrep_domain::{
    Credentials, Error, ProfileUpdate, Registration, ReportStatus, ReportType, ReportUpload, Role,
};
use medrep_infrastructure::config::ApiConfig;
use medrep_infrastructure::http::{ApiClient, HttpAuthGateway, HttpReportGateway};
use mockito::{Matcher, Server};
use serde_json::json;

fn client_for(server: &Server) -> ApiClient {
    let config = ApiConfig {
        base_url: format!("{}/", server.url()),
        ..ApiConfig::default()
    };
    ApiClient::new(&config).unwrap()
}

#[test]
fn test_url_joins_base_and_endpoint() {
    let config = ApiConfig {
        base_url: "http://localhost:8000/api/".to_string(),
        ..ApiConfig::default()
    };
    let client = ApiClient::new(&config).unwrap();
    assert_eq!(client.url("/reports"), "http://localhost:8000/api/reports");
}

#[tokio::test]
async fn test_login_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/auth/login")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"email": "a@b.com", "password": "secret1"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"user": {"id": 7, "email": "a@b.com", "name": "Ann", "user_type": "patient"}, "token": "tok-7"}"#,
        )
        .create_async()
        .await;

    let gateway = HttpAuthGateway::new(client_for(&server));
    let reply = gateway
        .login(&Credentials::new("a@b.com", "secret1"))
        .await
        .unwrap();

    mock.assert_async().await;
    let user = reply.user.unwrap();
    assert_eq!(user.id, "7");
    assert_eq!(user.role, Role::Patient);
    assert_eq!(reply.token.as_deref(), Some("tok-7"));
}

#[tokio::test]
async fn test_login_rejected_credentials() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/auth/login")
        .with_status(401)
        .with_body(r#"{"detail": "Incorrect email or password"}"#)
        .create_async()
        .await;

    let gateway = HttpAuthGateway::new(client_for(&server));
    let err = gateway
        .login(&Credentials::new("a@b.com", "wrong-pass"))
        .await
        .unwrap_err();

    match err {
        Error::Unauthorized { message } => assert_eq!(message, "Incorrect email or password"),
        other => panic!("Expected Unauthorized, got {other:?}"),
    }
}

#[tokio::test]
async fn test_login_reply_missing_token_is_passed_through() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_body(r#"{"user": {"id": "1", "email": "a@b.com", "role": "patient"}}"#)
        .create_async()
        .await;

    let reply = HttpAuthGateway::new(client_for(&server))
        .login(&Credentials::new("a@b.com", "secret1"))
        .await
        .unwrap();
    assert!(reply.user.is_some());
    assert!(reply.token.is_none());
}

#[tokio::test]
async fn test_logout_sends_bearer_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/auth/logout")
        .match_header("authorization", "Bearer tok-1")
        .with_status(204)
        .create_async()
        .await;

    HttpAuthGateway::new(client_for(&server))
        .logout("tok-1")
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_register_reports_backend_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/auth/register")
        .match_body(Matcher::PartialJson(json!({"email": "new@b.com", "user_type": "clinic"})))
        .with_status(400)
        .with_body(r#"{"detail": "Email already registered"}"#)
        .create_async()
        .await;

    let registration = Registration {
        name: "City Clinic".to_string(),
        email: "new@b.com".to_string(),
        password: "Secret123".to_string(),
        user_type: Role::Clinic,
        profile: Some(json!({"clinic_name": "City Clinic"})),
    };
    let err = HttpAuthGateway::new(client_for(&server))
        .register(&registration)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Rejected { status: 400, .. }));
    assert_eq!(err.user_message(), "Email already registered");
}

#[tokio::test]
async fn test_refresh_and_profile_update() {
    let mut server = Server::new_async().await;
    let _refresh = server
        .mock("POST", "/auth/refresh")
        .match_header("authorization", "Bearer old")
        .with_status(200)
        .with_body(r#"{"token": "new"}"#)
        .create_async()
        .await;
    let profile = server
        .mock("PUT", "/user/profile")
        .match_header("authorization", "Bearer new")
        .match_body(Matcher::Json(json!({"name": "Ann B"})))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let gateway = HttpAuthGateway::new(client_for(&server));
    let token = gateway.refresh("old").await.unwrap();
    assert_eq!(token, "new");

    let update = ProfileUpdate {
        name: Some("Ann B".to_string()),
        profile: None,
    };
    gateway.update_profile(&token, &update).await.unwrap();
    profile.assert_async().await;
}

#[tokio::test]
async fn test_refresh_without_token_is_invalid_response() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/auth/refresh")
        .with_status(200)
        .with_body(r#"{"ok": true}"#)
        .create_async()
        .await;

    let err = HttpAuthGateway::new(client_for(&server))
        .refresh("old")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_list_reports_accepts_both_shapes() {
    let mut server = Server::new_async().await;
    let _bare = server
        .mock("GET", "/reports")
        .match_header("authorization", "Bearer bare")
        .with_status(200)
        .with_body(r#"[{"id": 1, "title": "Blood Test Results", "type": "blood_test", "status": "analyzed"}]"#)
        .create_async()
        .await;
    let _wrapped = server
        .mock("GET", "/reports")
        .match_header("authorization", "Bearer wrapped")
        .with_status(200)
        .with_body(r#"{"reports": [{"id": "r-2", "title": "Glucose"}], "total": 1}"#)
        .create_async()
        .await;

    let gateway = HttpReportGateway::new(client_for(&server));

    let bare = gateway.list_reports("bare").await.unwrap();
    assert_eq!(bare.len(), 1);
    assert_eq!(bare[0].id, "1");
    assert_eq!(bare[0].report_type, ReportType::BloodTest);
    assert_eq!(bare[0].status, ReportStatus::Analyzed);

    let wrapped = gateway.list_reports("wrapped").await.unwrap();
    assert_eq!(wrapped[0].id, "r-2");
    assert_eq!(wrapped[0].status, ReportStatus::Pending);
}

#[tokio::test]
async fn test_list_reports_status_mapping() {
    let mut server = Server::new_async().await;
    let _expired = server
        .mock("GET", "/reports")
        .match_header("authorization", "Bearer expired")
        .with_status(401)
        .create_async()
        .await;
    let _down = server
        .mock("GET", "/reports")
        .match_header("authorization", "Bearer down")
        .with_status(503)
        .create_async()
        .await;
    let _garbage = server
        .mock("GET", "/reports")
        .match_header("authorization", "Bearer garbage")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let gateway = HttpReportGateway::new(client_for(&server));

    assert!(gateway.list_reports("expired").await.unwrap_err().is_unauthorized());
    assert!(matches!(
        gateway.list_reports("down").await.unwrap_err(),
        Error::Server { status: 503, .. }
    ));
    assert!(matches!(
        gateway.list_reports("garbage").await.unwrap_err(),
        Error::InvalidResponse { .. }
    ));
}

#[tokio::test]
async fn test_upload_sends_multipart_form() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/reports/upload")
        .match_header("authorization", "Bearer tok")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="title""#.to_string()),
            Matcher::Regex(r#"filename="labs.pdf""#.to_string()),
            Matcher::Regex("glucose_monitor".to_string()),
        ]))
        .with_status(201)
        .with_body(r#"{"message": "ok", "report": {"id": 42, "title": "Labs", "type": "glucose_monitor", "status": "analyzing"}}"#)
        .create_async()
        .await;

    let upload = ReportUpload {
        title: "Labs".to_string(),
        report_type: ReportType::GlucoseMonitor,
        file_name: "labs.pdf".to_string(),
        content_type: "application/pdf".to_string(),
        bytes: b"%PDF-1.4 sample".to_vec(),
    };
    let report = HttpReportGateway::new(client_for(&server))
        .upload_report("tok", upload)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(report.id, "42");
    assert_eq!(report.status, ReportStatus::Analyzing);
}

#[tokio::test]
async fn test_upload_rejection_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/reports/upload")
        .with_status(413)
        .with_body(r#"{"message": "File exceeds the server limit"}"#)
        .create_async()
        .await;

    let upload = ReportUpload {
        title: "Scan".to_string(),
        report_type: ReportType::General,
        file_name: "scan.png".to_string(),
        content_type: "image/png".to_string(),
        bytes: vec![1, 2, 3],
    };
    let err = HttpReportGateway::new(client_for(&server))
        .upload_report("tok", upload)
        .await
        .unwrap_err();

    match err {
        Error::Rejected { status, message } => {
            assert_eq!(status, 413);
            assert_eq!(message, "File exceeds the server limit");
        }
        other => panic!("Expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_report_by_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/reports/12")
        .match_header("authorization", "Bearer tok")
        .with_status(200)
        .with_body(r#"{"id": 12, "title": "HbA1c", "type": "glucose_monitor", "status": "analyzed"}"#)
        .create_async()
        .await;

    let report = HttpReportGateway::new(client_for(&server))
        .get_report("tok", "12")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(report.id, "12");
    assert_eq!(report.report_type, ReportType::GlucoseMonitor);
}

#[tokio::test]
async fn test_get_missing_report_is_rejected() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/reports/99")
        .with_status(404)
        .with_body(r#"{"detail": "Report not found"}"#)
        .create_async()
        .await;

    let err = HttpReportGateway::new(client_for(&server))
        .get_report("tok", "99")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Rejected { status: 404, ref message } if message == "Report not found"));
}

#[tokio::test]
async fn test_delete_report_sends_bearer_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/reports/12")
        .match_header("authorization", "Bearer tok")
        .with_status(200)
        .with_body(r#"{"message": "Report deleted successfully"}"#)
        .create_async()
        .await;

    HttpReportGateway::new(client_for(&server))
        .delete_report("tok", "12")
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_report_forbidden_and_bad_id() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/reports/5")
        .with_status(403)
        .with_body(r#"{"detail": "Access denied"}"#)
        .create_async()
        .await;
    let gateway = HttpReportGateway::new(client_for(&server));

    let err = gateway.delete_report("tok", "5").await.unwrap_err();
    assert!(matches!(err, Error::Forbidden { .. }));

    let err = gateway.delete_report("tok", "5/raw").await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let config = ApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        request_timeout_secs: 2,
        ..ApiConfig::default()
    };
    let gateway = HttpReportGateway::new(ApiClient::new(&config).unwrap());

    let err = gateway.list_reports("tok").await.unwrap_err();
    assert!(err.is_network());
    assert_eq!(
        err.user_message(),
        "Unable to reach the server. Please try again."
    );
}
