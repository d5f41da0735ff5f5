// SPDX-License-Identifier: MPL-2.0
//! Core notification data and per-instance lifecycle.
//!
//! A [`Notification`] couples the caller-owned record data (id, message,
//! kind, duration) with the private [`Lifecycle`] driving its visibility.
//! Record fields are read-only after construction; only the lifecycle moves.

use super::kind::Kind;
use super::lifecycle::{Event, Lifecycle, Phase};
use std::fmt;
use std::time::{Duration, Instant};

/// Auto-dismiss duration applied when the caller specifies none.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// Caller-supplied notification identifier, numeric or textual.
///
/// Uniqueness within a list is the caller's responsibility. Equality never
/// coerces across the two forms: `Id::from(1)` and `Id::from("1")` are
/// distinct identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Id {
    Num(u64),
    Text(String),
}

impl From<u64> for Id {
    fn from(n: u64) -> Self {
        Id::Num(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Text(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Text(s)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Num(n) => write!(f, "{n}"),
            Id::Text(s) => f.write_str(s),
        }
    }
}

/// One transient message element with its own timed show/hide lifecycle.
#[derive(Debug, Clone)]
pub struct Notification {
    id: Id,
    message: String,
    kind: Kind,
    lifecycle: Lifecycle,
}

impl Notification {
    /// Creates a notification with the given kind and the default
    /// auto-dismiss duration.
    ///
    /// An empty message is a contract violation and trips a debug assertion;
    /// release builds render the empty string rather than degrade further.
    pub fn new(kind: Kind, id: impl Into<Id>, message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "notification message must not be empty");
        Self {
            id: id.into(),
            message,
            kind,
            lifecycle: Lifecycle::new(Some(DEFAULT_DURATION)),
        }
    }

    /// Creates an info notification.
    pub fn info(id: impl Into<Id>, message: impl Into<String>) -> Self {
        Self::new(Kind::Info, id, message)
    }

    /// Creates a success notification.
    pub fn success(id: impl Into<Id>, message: impl Into<String>) -> Self {
        Self::new(Kind::Success, id, message)
    }

    /// Creates a warning notification.
    pub fn warning(id: impl Into<Id>, message: impl Into<String>) -> Self {
        Self::new(Kind::Warning, id, message)
    }

    /// Creates an error notification.
    pub fn error(id: impl Into<Id>, message: impl Into<String>) -> Self {
        Self::new(Kind::Error, id, message)
    }

    /// Sets the auto-dismiss duration; `None` disables automatic dismissal.
    ///
    /// Must be called before the notification is first ticked.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Option<Duration>) -> Self {
        self.lifecycle = Lifecycle::new(duration);
        self
    }

    /// Sets the auto-dismiss duration in milliseconds.
    ///
    /// A non-positive value disables automatic dismissal, leaving manual
    /// dismissal as the only exit trigger.
    #[must_use]
    pub fn duration_ms(self, ms: i64) -> Self {
        let duration = (ms > 0).then(|| Duration::from_millis(ms as u64));
        self.auto_dismiss(duration)
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    /// Whether this notification should currently be rendered.
    pub fn is_visible(&self) -> bool {
        self.lifecycle.is_visible()
    }

    /// Triggers manual dismissal. Idempotent; returns whether the exit
    /// sequence actually started.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        self.lifecycle.dismiss(now)
    }

    /// Advances this notification's lifecycle to `now`.
    pub fn tick(&mut self, now: Instant) -> Option<Event> {
        self.lifecycle.tick(now)
    }
}
