//! HTTP gateways to the analysis backend
//!
//! [`ApiClient`] owns transport concerns (base URL, timeouts, bearer
//! tokens, status mapping); the gateways translate port calls into requests.

pub mod auth;
pub mod client;
pub mod reports;
pub mod response;

pub use auth::HttpAuthGateway;
pub use client::ApiClient;
pub use reports::HttpReportGateway;
pub use response::HttpResponseUtils;
