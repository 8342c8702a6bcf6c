// src/toast.rs
//
// Transient notifications. Time is passed in so expiry is testable.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub expires_at: Instant,
}

#[derive(Clone, Debug)]
pub struct Toasts {
    items: Vec<Toast>,
    ttl: Duration,
}

impl Toasts {
    pub fn new(ttl: Duration) -> Self {
        Self { items: Vec::new(), ttl }
    }

    pub fn push(&mut self, message: impl Into<String>, level: ToastLevel, now: Instant) {
        self.items.push(Toast {
            message: message.into(),
            level,
            expires_at: now + self.ttl,
        });
    }

    pub fn info(&mut self, message: impl Into<String>, now: Instant) {
        self.push(message, ToastLevel::Info, now);
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.push(message, ToastLevel::Error, now);
    }

    /// Drop expired toasts. Returns the time until the next one expires.
    pub fn prune(&mut self, now: Instant) -> Option<Duration> {
        self.items.retain(|t| t.expires_at > now);
        self.items.iter().map(|t| t.expires_at - now).min()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_ttl() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new(Duration::from_secs(3));
        toasts.info("Opened in new tab", t0);
        toasts.error("Failed to copy XPath", t0 + Duration::from_secs(1));

        assert_eq!(toasts.prune(t0 + Duration::from_secs(2)), Some(Duration::from_secs(1)));
        assert_eq!(toasts.len(), 2);

        toasts.prune(t0 + Duration::from_secs(3));
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.iter().next().map(|t| t.level), Some(ToastLevel::Error));

        assert_eq!(toasts.prune(t0 + Duration::from_secs(10)), None);
        assert!(toasts.is_empty());
    }
}
