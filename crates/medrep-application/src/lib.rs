//! Application Layer - medrep
//!
//! Session handling, access control and navigation for the medical report
//! portal, written against the port traits of `medrep-domain`.
//!
//! ## Use Cases
//!
//! - [`SessionStore`]: login, logout, hydration and persistence of the session
//! - [`App`]: navigation with redirects, report loading and upload, registration,
//!   profile updates, token refresh and the authorization-failure interceptor
//!
//! ## Domain Services
//!
//! - [`AccessPolicy`]: allow / redirect-to-login / redirect-to-landing
//! - [`resolve`]: path and role to view
//! - [`NotificationCenter`]: auto-expiring notifications
//! - form validation for login, registration and upload
//!
//! ## Dependencies
//!
//! This crate depends only on `medrep-domain` and pure libraries; HTTP and
//! storage implementations live in `medrep-infrastructure`.

pub mod domain_services;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
