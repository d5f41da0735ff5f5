// SPDX-License-Identifier: MPL-2.0
//! Show/leave/hide state machine for a single notification.
//!
//! Each notification owns one `Lifecycle`. The lifecycle is deadline-driven:
//! the host loop calls [`Lifecycle::tick`] periodically with the current
//! instant, and the lifecycle reports the transitions it performed. There is
//! no background timer — when the owning notification is dropped, nothing
//! can fire against it.

use std::time::{Duration, Instant};

/// Grace period between a dismissal trigger and final removal, matching the
/// length of the exit animation.
pub const EXIT_DELAY: Duration = Duration::from_millis(300);

/// The three lifecycle stages of a notification.
///
/// A notification is rendered while it is not [`Phase::Hidden`]. `Hidden` is
/// terminal: there is no transition out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Fully visible, waiting for a dismissal trigger.
    #[default]
    Shown,
    /// Dismissal has been triggered; the exit animation is running.
    Leaving,
    /// The exit animation finished. Terminal.
    Hidden,
}

/// A transition reported by [`Lifecycle::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The auto-dismiss deadline elapsed and the exit sequence began.
    Dismissed,
    /// The exit sequence completed; the notification is now hidden.
    ///
    /// Reported exactly once per lifecycle. This is the moment a host should
    /// notify its removal handler.
    Closed,
}

/// Deadline-driven state machine driving [`Phase`] transitions.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    phase: Phase,
    /// Auto-dismiss duration. `None` means manual dismissal only.
    duration: Option<Duration>,
    /// Auto-dismiss instant, armed by the first `tick`.
    deadline: Option<Instant>,
    /// Instant at which the exit animation completes, set on entering
    /// `Leaving`.
    exit_at: Option<Instant>,
}

impl Lifecycle {
    /// Creates a lifecycle in [`Phase::Shown`].
    ///
    /// The auto-dismiss countdown is not started here; it arms on the first
    /// `tick`, the moment the notification is first driven by its host.
    pub fn new(duration: Option<Duration>) -> Self {
        Self {
            phase: Phase::Shown,
            duration,
            deadline: None,
            exit_at: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the notification should currently be rendered.
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// Begins the exit sequence.
    ///
    /// Only valid from [`Phase::Shown`]; calling it again while leaving or
    /// hidden is a no-op, so a manual dismissal racing the auto-dismiss
    /// deadline cannot schedule a second exit or report `Closed` twice.
    /// Returns whether a transition occurred.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Shown {
            return false;
        }
        self.phase = Phase::Leaving;
        self.exit_at = Some(now + EXIT_DELAY);
        true
    }

    /// Advances the state machine to `now`.
    ///
    /// Returns the transition performed, if any. At most one transition is
    /// performed per call.
    pub fn tick(&mut self, now: Instant) -> Option<Event> {
        match self.phase {
            Phase::Shown => {
                let duration = self.duration?;
                let deadline = *self.deadline.get_or_insert(now + duration);
                if now >= deadline {
                    self.dismiss(now);
                    Some(Event::Dismissed)
                } else {
                    None
                }
            }
            Phase::Leaving => match self.exit_at {
                Some(exit_at) if now >= exit_at => {
                    self.phase = Phase::Hidden;
                    self.exit_at = None;
                    Some(Event::Closed)
                }
                _ => None,
            },
            Phase::Hidden => None,
        }
    }
}
