//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::api::ApiConfig;
pub use super::logging::LoggingConfig;
pub use super::notifications::NotificationConfig;
pub use super::storage::{StorageBackend, StorageConfig, default_session_file};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend API
    #[serde(default)]
    pub api: ApiConfig,

    /// Session persistence
    #[serde(default)]
    pub storage: StorageConfig,

    /// Notifications
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}
