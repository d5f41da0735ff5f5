// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Tick cadence while notifications are on screen.
///
/// Coarse enough to stay cheap, fine enough that the 300 ms exit grace
/// period still reads as an animation step.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates a periodic tick subscription for notification auto-dismiss and
/// exit timers.
///
/// Returns no subscription when nothing is on screen, so the event loop
/// stays idle between notifications.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
