//! Use Cases
//!
//! Stateful services that talk to the ports.

/// Application shell
pub mod app;
/// Session store
pub mod session_store;

pub use app::{
    App, DELETE_FAILED_MESSAGE, REPORT_DELETED_MESSAGE, REPORT_FAILED_MESSAGE,
    REPORTS_FAILED_MESSAGE, SESSION_EXPIRED_MESSAGE, UPLOAD_FAILED_MESSAGE,
    UPLOAD_SUCCEEDED_MESSAGE,
};
pub use session_store::SessionStore;
