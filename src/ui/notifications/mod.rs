// SPDX-License-Identifier: MPL-2.0
//! Toast notification components.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, errors, etc.) without blocking
//! interaction, and dismiss themselves after a timeout.
//!
//! # Components
//!
//! - [`notification`] - Core [`Notification`] with its caller-supplied [`Id`]
//! - [`kind`] - [`Kind`] enum driving icon and accent selection
//! - [`lifecycle`] - The shown/leaving/hidden state machine
//! - [`toast`] - Widget rendering one notification
//! - [`list`] - [`NotificationList`] rendering the ordered collection
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::ui::notifications::{Notification, NotificationList};
//!
//! // The caller owns the ordered sequence.
//! let mut toasts = vec![Notification::success(1, "Image saved")];
//!
//! // In update, on a periodic tick:
//! let mut removed = Vec::new();
//! NotificationList::tick_all(&mut toasts, now, |id| removed.push(id.clone()));
//! toasts.retain(|n| !removed.contains(n.id()));
//!
//! // In view:
//! let overlay = NotificationList::view(&toasts, Message::DismissToast);
//! ```
//!
//! # Design Considerations
//!
//! - Auto-dismiss after 5 s by default; a non-positive duration disables it
//! - Dismissal is idempotent: the exit sequence runs once no matter how the
//!   triggers interleave
//! - The exit grace period is fixed at 300 ms ([`lifecycle::EXIT_DELAY`])
//! - Position: bottom-right corner, input order preserved

pub mod kind;
pub mod lifecycle;
pub mod list;
pub mod notification;
pub mod toast;

pub use kind::Kind;
pub use lifecycle::{Event, Phase, EXIT_DELAY};
pub use list::NotificationList;
pub use notification::{Id, Notification, DEFAULT_DURATION};
pub use toast::Toast;
