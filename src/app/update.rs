// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the demo application.

use super::{App, Message};
use crate::config;
use crate::ui::notifications::{Id, Kind, Notification, NotificationList};
use iced::Task;
use std::time::Instant;

/// Sample message shown for each kind in the playground.
fn sample_message(kind: &Kind) -> &'static str {
    match kind {
        Kind::Info => "Heads up: nothing needs your attention",
        Kind::Success => "Saved successfully",
        Kind::Warning => "Disk space is running low",
        Kind::Error => "Could not reach the server",
        Kind::Other(_) => "A notification of an unrecognized kind",
    }
}

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Push(kind) => {
                self.next_id += 1;
                let text = sample_message(&kind);
                let notification = Notification::new(kind, self.next_id, text)
                    .auto_dismiss(self.default_duration);
                self.notifications.push(notification);
                Task::none()
            }
            Message::Dismiss(id) => {
                let now = Instant::now();
                if let Some(notification) =
                    self.notifications.iter_mut().find(|n| *n.id() == id)
                {
                    notification.dismiss(now);
                }
                Task::none()
            }
            Message::Tick(now) => {
                let mut removed: Vec<Id> = Vec::new();
                NotificationList::tick_all(&mut self.notifications, now, |id| {
                    removed.push(id.clone());
                });
                if !removed.is_empty() {
                    for id in &removed {
                        log::debug!("notification {id} closed");
                    }
                    self.notifications.retain(|n| !removed.contains(n.id()));
                }
                Task::none()
            }
            Message::ToggleTheme => {
                self.dark_theme = !self.dark_theme;
                // Only the theme is written back; the stored duration stays
                // whatever the user configured, since a CLI override is
                // one-shot and must not leak into the file.
                if let Err(err) = config::save_dark_theme(self.dark_theme) {
                    log::warn!("failed to persist theme preference: {err}");
                }
                Task::none()
            }
        }
    }
}
