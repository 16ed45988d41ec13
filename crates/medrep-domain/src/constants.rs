//! Domain layer constants
//!
//! Values shared by the session, access and validation logic. Transport and
//! configuration defaults live in `medrep_infrastructure::constants`.

// ============================================================================
// SESSION PERSISTENCE
// ============================================================================

/// Storage key holding the JSON-serialized identity
pub const USER_STORAGE_KEY: &str = "user";

/// Storage key holding the opaque auth token
pub const TOKEN_STORAGE_KEY: &str = "token";

// ============================================================================
// ROUTES
// ============================================================================

/// Public landing page
pub const HOME_ROUTE: &str = "/";

/// Login page; target of every `RedirectLogin`
pub const LOGIN_ROUTE: &str = "/login";

/// Registration page
pub const REGISTER_ROUTE: &str = "/register";

/// Help page
pub const HELP_ROUTE: &str = "/help";

/// Explicit not-found page
pub const NOT_FOUND_ROUTE: &str = "/404";

/// Shared dashboard path that fans out by role
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Upper bound on redirects followed by a single navigation
pub const MAX_REDIRECT_HOPS: usize = 4;

// ============================================================================
// NOTIFICATIONS
// ============================================================================

/// Default lifetime of a notification in seconds
pub const NOTIFICATION_TTL_SECS: u64 = 5;

// ============================================================================
// VALIDATION
// ============================================================================

/// Minimum password length accepted by the login form
pub const LOGIN_PASSWORD_MIN_LENGTH: usize = 6;

/// Minimum password length accepted by the registration form
pub const REGISTER_PASSWORD_MIN_LENGTH: usize = 8;

/// Minimum length of a display name
pub const NAME_MIN_LENGTH: usize = 2;

/// Largest report file accepted for upload (10 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Content types accepted for upload; entries ending in `/*` match a whole family
pub const ACCEPTED_UPLOAD_TYPES: &[&str] = &[
    "application/pdf",
    "image/*",
    "text/plain",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];
