//! Transient notifications shown in the footer.

use chrono::{DateTime, Duration, Utc};

/// How long a notification stays visible.
pub const NOTIFICATION_TTL_SECS: i64 = 4;

const MAX_RETAINED: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
    Success,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at >= Duration::seconds(NOTIFICATION_TTL_SECS)
    }
}

/// Notification sink handed to every page operation.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.items.push(Notification::new(level, message));
        if self.items.len() > MAX_RETAINED {
            let overflow = self.items.len() - MAX_RETAINED;
            self.items.drain(..overflow);
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Success, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Error, message);
    }

    /// Newest notification that has not outlived the TTL.
    pub fn current(&self, now: DateTime<Utc>) -> Option<&Notification> {
        self.items.last().filter(|n| !n.is_expired(now))
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn count(&self, level: NotificationLevel) -> usize {
        self.items.iter().filter(|n| n.level == level).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_respects_ttl() {
        let mut notes = Notifications::new();
        notes.error("加载失败");
        let created = notes.latest().unwrap().created_at;
        assert!(notes.current(created).is_some());
        assert!(notes
            .current(created + Duration::seconds(NOTIFICATION_TTL_SECS))
            .is_none());
    }

    #[test]
    fn test_counts_by_level() {
        let mut notes = Notifications::new();
        notes.success("ok");
        notes.warning("careful");
        notes.error("boom");
        notes.error("boom again");
        assert_eq!(notes.count(NotificationLevel::Error), 2);
        assert_eq!(notes.count(NotificationLevel::Info), 0);
        assert_eq!(notes.len(), 4);
    }

    #[test]
    fn test_retention_is_bounded() {
        let mut notes = Notifications::new();
        for i in 0..(MAX_RETAINED + 10) {
            notes.info(format!("n{}", i));
        }
        assert_eq!(notes.len(), MAX_RETAINED);
        assert_eq!(notes.latest().unwrap().message, format!("n{}", MAX_RETAINED + 9));
    }
}
