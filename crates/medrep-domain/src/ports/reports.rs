//! Report Gateway Port

use crate::error::Result;
use crate::value_objects::{Report, ReportUpload};
use async_trait::async_trait;

/// Report collaborator
#[async_trait]
pub trait ReportGateway: Send + Sync {
    /// Reports visible to the token's owner
    async fn list_reports(&self, token: &str) -> Result<Vec<Report>>;

    /// One report by id
    async fn get_report(&self, token: &str, id: &str) -> Result<Report>;

    /// Upload a file and return the created report
    async fn upload_report(&self, token: &str, upload: ReportUpload) -> Result<Report>;

    /// Delete a report owned by the token's owner
    async fn delete_report(&self, token: &str, id: &str) -> Result<()>;
}
