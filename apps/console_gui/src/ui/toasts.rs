use std::time::{Duration, Instant};

use console_core::{Notification, Severity};

pub const TOAST_TTL: Duration = Duration::from_secs(5);
const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone)]
pub struct Toast {
    pub severity: Severity,
    pub message: String,
    shown_at: Instant,
}

/// Transient notifications, oldest first.
#[derive(Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    ttl: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(TOAST_TTL)
    }
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            ttl,
        }
    }

    pub fn push(&mut self, notification: Notification, now: Instant) {
        self.toasts.push(Toast {
            severity: notification.severity,
            message: notification.message,
            shown_at: now,
        });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
    }

    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < ttl);
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.toasts.len() {
            self.toasts.remove(index);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
