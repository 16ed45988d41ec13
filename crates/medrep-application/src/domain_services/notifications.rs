//! Notification Center
//!
//! Holds transient notifications until they expire or are dismissed.
//! Expiry is evaluated lazily against the caller's clock.

use chrono::{DateTime, TimeDelta, Utc};
use medrep_domain::constants::NOTIFICATION_TTL_SECS;
use medrep_domain::value_objects::{Notification, NotificationKind};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// Ordered set of live notifications
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    ttl: TimeDelta,
    entries: Vec<Notification>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::from_secs(NOTIFICATION_TTL_SECS))
    }
}

impl NotificationCenter {
    /// Create a center whose notifications live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        let ttl = TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX);
        Self {
            ttl,
            entries: Vec::new(),
        }
    }

    /// Lifetime of each notification
    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Add a notification stamped now
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> Uuid {
        self.push_at(kind, message, Utc::now())
    }

    /// Add a notification stamped at `at`
    pub fn push_at(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Uuid {
        let notification = Notification::new(kind, message, at);
        let id = notification.id;
        debug!(id = %id, kind = ?kind, message = %notification.message, "Notification pushed");
        self.entries.push(notification);
        id
    }

    /// Remove a notification early; false if it was already gone
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        before != self.entries.len()
    }

    /// Unexpired notifications as of now
    pub fn active(&mut self) -> &[Notification] {
        self.active_at(Utc::now())
    }

    /// Prune notifications expired at `now` and return the rest in creation order
    pub fn active_at(&mut self, now: DateTime<Utc>) -> &[Notification] {
        let ttl = self.ttl;
        self.entries.retain(|n| !n.is_expired_at(now, ttl));
        &self.entries
    }

    /// Drop every notification
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored notifications, expired or not
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
