//! Single-slot, auto-dismissing notification
//!
//! Only one message is live at a time. Raising a new one replaces the text and
//! moves the single deadline, so there is never more than one pending expiry.

use std::time::{Duration, Instant};
use tracing::debug;

pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct NotificationSlot {
    current: Option<Notification>,
    dismiss_after: Duration,
}

impl Default for NotificationSlot {
    fn default() -> Self {
        Self::new(DEFAULT_DISMISS_AFTER)
    }
}

impl NotificationSlot {
    #[must_use]
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            current: None,
            dismiss_after,
        }
    }

    #[must_use]
    pub fn dismiss_after(&self) -> Duration {
        self.dismiss_after
    }

    /// Show `message` until `now + dismiss_after`, replacing any live one
    pub fn raise(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        let expires_at = now + self.dismiss_after;
        if self.current.is_some() {
            debug!("Replacing live notification, deadline moved");
        }
        self.current = Some(Notification {
            message,
            expires_at,
        });
    }

    /// Message still visible at `now`
    #[must_use]
    pub fn active(&self, now: Instant) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|n| now < n.expires_at)
            .map(|n| n.message.as_str())
    }

    /// When the live notification should disappear
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(|n| n.expires_at)
    }

    /// Drop the notification once its deadline has passed.
    /// Returns true when one was cleared.
    pub fn dismiss_expired(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(n) if now >= n.expires_at => {
                debug!("Notification expired: {}", n.message);
                self.current = None;
                true
            }
            _ => false,
        }
    }
}
