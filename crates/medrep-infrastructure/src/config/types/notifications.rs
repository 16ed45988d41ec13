//! Notification configuration types

use medrep_domain::constants::NOTIFICATION_TTL_SECS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Notification lifetime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Seconds a notification stays visible
    pub ttl_secs: u64,
}

impl NotificationConfig {
    /// Lifetime as a duration
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            ttl_secs: NOTIFICATION_TTL_SECS,
        }
    }
}
