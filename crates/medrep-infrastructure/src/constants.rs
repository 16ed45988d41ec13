//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `medrep_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "medrep.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "medrep";

/// Environment variable prefix for configuration (`MEDREP__API__BASE_URL`)
pub const CONFIG_ENV_PREFIX: &str = "MEDREP";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "MEDREP_LOG";

// ============================================================================
// HTTP CLIENT CONSTANTS
// ============================================================================

/// Default backend base URL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Timeout for ordinary requests in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Timeout for report uploads in seconds
pub const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 60;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("medrep/", env!("CARGO_PKG_VERSION"));

/// Bearer token prefix
pub const BEARER_PREFIX: &str = "Bearer ";

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

// ============================================================================
// BACKEND ENDPOINTS
// ============================================================================

/// `POST` credentials, returns user and token
pub const LOGIN_ENDPOINT: &str = "/auth/login";

/// `POST` with bearer token
pub const LOGOUT_ENDPOINT: &str = "/auth/logout";

/// `POST` registration body
pub const REGISTER_ENDPOINT: &str = "/auth/register";

/// `POST` with bearer token, returns a fresh token
pub const REFRESH_ENDPOINT: &str = "/auth/refresh";

/// `PUT` profile changes
pub const PROFILE_ENDPOINT: &str = "/user/profile";

/// `GET` report list
pub const REPORTS_ENDPOINT: &str = "/reports";

/// `POST` multipart upload
pub const UPLOAD_ENDPOINT: &str = "/reports/upload";

// ============================================================================
// STORAGE CONSTANTS
// ============================================================================

/// File name of the persisted session under the data directory
pub const SESSION_FILE_NAME: &str = "session.json";

/// Unix permissions of the session file
pub const SESSION_FILE_MODE: u32 = 0o600;
