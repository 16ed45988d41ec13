//! Report gateway over HTTP

use crate::constants::{REPORTS_ENDPOINT, UPLOAD_ENDPOINT};
use crate::http::client::ApiClient;
use async_trait::async_trait;
use medrep_domain::error::{Error, Result};
use medrep_domain::ports::ReportGateway;
use medrep_domain::value_objects::{Report, ReportUpload};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::debug;

/// [`ReportGateway`] backed by the `/reports` endpoints
#[derive(Clone)]
pub struct HttpReportGateway {
    client: ApiClient,
}

impl HttpReportGateway {
    /// Create the gateway
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

/// Endpoint of one report; the id must be a single path segment
fn report_endpoint(id: &str) -> Result<String> {
    if id.is_empty() || id.contains(['/', '?', '#']) {
        return Err(Error::invalid_argument(format!("Invalid report id '{id}'")));
    }
    Ok(format!("{REPORTS_ENDPOINT}/{id}"))
}

/// A report body, bare or wrapped as `{"report": ...}`
fn parse_report(body: Value, what: &str) -> Result<Report> {
    let report = match body {
        Value::Object(mut wrapper) if wrapper.contains_key("report") => wrapper
            .remove("report")
            .unwrap_or(Value::Null),
        other => other,
    };
    serde_json::from_value(report)
        .map_err(|e| Error::invalid_response(format!("Malformed {what}: {e}")))
}

#[async_trait]
impl ReportGateway for HttpReportGateway {
    async fn list_reports(&self, token: &str) -> Result<Vec<Report>> {
        let body = self.client.get_json(REPORTS_ENDPOINT, Some(token)).await?;
        let list = match body {
            Value::Array(_) => body,
            Value::Object(mut wrapper) => wrapper
                .remove("reports")
                .ok_or_else(|| Error::invalid_response("report list without reports"))?,
            _ => return Err(Error::invalid_response("report list is not an array")),
        };
        serde_json::from_value(list)
            .map_err(|e| Error::invalid_response(format!("Malformed report list: {e}")))
    }

    async fn get_report(&self, token: &str, id: &str) -> Result<Report> {
        let endpoint = report_endpoint(id)?;
        let body = self.client.get_json(&endpoint, Some(token)).await?;
        parse_report(body, "report")
    }

    async fn upload_report(&self, token: &str, upload: ReportUpload) -> Result<Report> {
        debug!(file = %upload.file_name, bytes = upload.size(), "Uploading report");
        let file = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)
            .map_err(|e| {
                Error::invalid_argument(format!(
                    "Invalid content type '{}': {e}",
                    upload.content_type
                ))
            })?;
        let form = Form::new()
            .part("file", file)
            .text("title", upload.title)
            .text("report_type", upload.report_type.as_str());

        let body = self
            .client
            .post_multipart(UPLOAD_ENDPOINT, Some(token), form)
            .await?;
        parse_report(body, "upload reply")
    }

    async fn delete_report(&self, token: &str, id: &str) -> Result<()> {
        let endpoint = report_endpoint(id)?;
        debug!(report_id = id, "Deleting report");
        self.client.delete(&endpoint, Some(token)).await?;
        Ok(())
    }
}
