//! Domain Services
//!
//! Pure decision logic used by the application shell.
//!
//! ## Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`AccessPolicy`] | Path and session to allow or redirect |
//! | [`resolve`] | Allowed path and role to view |
//! | [`NotificationCenter`] | Transient, auto-expiring notifications |
//! | [`LoginForm`], [`RegistrationForm`] | Client-side form checks |

/// Access policy over the route rule table
pub mod access_policy;
/// Transient notifications
pub mod notifications;
/// Path to view resolution
pub mod route_resolver;
/// Form validation
pub mod validation;

pub use access_policy::{
    AccessPolicy, AccessRule, DEFAULT_RULE, RoutePattern, default_route_for, match_template,
    normalize_path,
};
pub use notifications::NotificationCenter;
pub use route_resolver::resolve;
pub use validation::{LoginForm, RegistrationForm, is_accepted_type, validate_upload};
