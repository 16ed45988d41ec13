//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Role`] | Patient, clinic or government, with its capability row |
//! | [`Identity`] | Role-bearing profile of the logged-in user |
//! | [`Session`] | Identity and token, or nobody |
//! | [`Notification`] | Auto-expiring message for the user |
//! | [`Report`] | Medical report as listed by the backend |
//! | [`View`] | What gets rendered for a resolved path |
//! | [`FieldErrors`] | Per-field validation messages |

/// Identity, credentials and auth payloads
pub mod identity;
/// Transient notifications
pub mod notification;
/// Report records and uploads
pub mod report;
/// Roles and the capability table
pub mod role;
/// Visibility, access decisions and views
pub mod route;
/// Session state
pub mod session;
/// Validation messages
pub mod validation;

// Re-export commonly used value objects
pub use identity::{Credentials, Identity, LoginReply, ProfileUpdate, Registration};
pub use notification::{Notification, NotificationKind};
pub use report::{Report, ReportAnalysis, ReportStatus, ReportType, ReportUpload};
pub use role::{ROLE_PROFILES, Role, RoleProfile};
pub use route::{AccessDecision, Navigation, View, Visibility};
pub use session::Session;
pub use validation::FieldErrors;
