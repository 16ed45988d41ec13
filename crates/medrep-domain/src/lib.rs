//! # medrep Domain Layer
//!
//! Core types for the medical report portal's session and access-control
//! layer. This crate holds no I/O: identities, sessions, roles, routes,
//! notifications and the port traits the other layers implement.
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`value_objects`] | Role, Identity, Session, Report, View, Notification |
//! | [`ports`] | `SessionStorage`, `AuthGateway`, `ReportGateway` |
//! | [`error`] | `Error`, `LoginError`, `Result` |
//! | [`constants`] | Storage keys, routes, validation limits |

/// Domain constants
pub mod constants;
/// Error types
pub mod error;
/// Port traits
pub mod ports;
/// Value objects
pub mod value_objects;

pub use error::{Error, LoginError, Result};
pub use ports::{AuthGateway, ReportGateway, SessionStorage};
pub use value_objects::*;
