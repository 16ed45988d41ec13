//! Medical report records returned by the report collaborator

use super::identity::string_or_number;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of medical report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    /// Laboratory blood work
    BloodTest,
    /// Continuous or spot glucose readings
    GlucoseMonitor,
    /// Anything else
    #[default]
    General,
    /// Prescriptions and medication lists
    Medication,
    /// Notes from a consultation
    DoctorVisit,
    /// A type this client does not know about
    #[serde(other)]
    Other,
}

impl ReportType {
    /// Wire name used in multipart forms
    pub fn as_str(self) -> &'static str {
        match self {
            ReportType::BloodTest => "blood_test",
            ReportType::GlucoseMonitor => "glucose_monitor",
            ReportType::General | ReportType::Other => "general",
            ReportType::Medication => "medication",
            ReportType::DoctorVisit => "doctor_visit",
        }
    }
}

impl FromStr for ReportType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "blood_test" => Ok(ReportType::BloodTest),
            "glucose_monitor" => Ok(ReportType::GlucoseMonitor),
            "general" => Ok(ReportType::General),
            "medication" => Ok(ReportType::Medication),
            "doctor_visit" => Ok(ReportType::DoctorVisit),
            other => Err(Error::invalid_argument(format!("Unknown report type: {other}"))),
        }
    }
}

/// Processing status of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Uploaded, not yet picked up
    #[default]
    Pending,
    /// Analysis in progress
    Analyzing,
    /// Summary available
    Analyzed,
    /// Analysis failed
    Error,
    /// A status this client does not know about
    #[serde(other)]
    Unknown,
}

/// AI-generated analysis attached to a report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportAnalysis {
    /// Plain-language summary
    #[serde(default)]
    pub summary: Option<String>,
    /// Risk score reported by the analysis service
    #[serde(default)]
    pub risk_score: Option<f64>,
    /// Suggested next steps
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// A report as listed by `GET /reports`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Backend report id
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Title given at upload
    #[serde(default)]
    pub title: String,
    /// Kind of report
    #[serde(rename = "type", default)]
    pub report_type: ReportType,
    /// Processing status
    #[serde(default)]
    pub status: ReportStatus,
    /// Original file name
    #[serde(default)]
    pub filename: Option<String>,
    /// Creation timestamp as sent by the backend
    #[serde(default)]
    pub created_at: Option<String>,
    /// Analysis, once available
    #[serde(default)]
    pub ai_analysis: Option<ReportAnalysis>,
}

/// A file selected for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportUpload {
    /// Title sent with the file
    pub title: String,
    /// Kind of report
    pub report_type: ReportType,
    /// File name as selected
    pub file_name: String,
    /// MIME content type
    pub content_type: String,
    /// File contents
    pub bytes: Vec<u8>,
}

impl ReportUpload {
    /// Size of the file in bytes
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
