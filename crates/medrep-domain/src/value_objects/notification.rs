//! Transient user notifications

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Operation completed
    Success,
    /// Operation failed
    Error,
    /// Informational
    Info,
    /// Needs attention but nothing failed
    Warning,
}

/// A message shown to the user until it expires or is dismissed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique id used for dismissal
    pub id: Uuid,
    /// Severity
    pub kind: NotificationKind,
    /// Text shown to the user
    pub message: String,
    /// Creation instant
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create a notification stamped at `created_at`
    pub fn new(kind: NotificationKind, message: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            created_at,
        }
    }

    /// True once `ttl` has elapsed since creation
    pub fn is_expired_at(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        now - self.created_at >= ttl
    }
}
