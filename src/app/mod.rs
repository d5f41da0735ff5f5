// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the toast demo.
//!
//! The `App` struct wires the notification components to a minimal playground
//! UI and translates messages into state changes. This file keeps policy
//! decisions (window sizing, default duration resolution, theme persistence)
//! close to the main loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::ui::notifications::Notification;
use iced::{window, Subscription, Theme};
use std::fmt;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 520;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state bridging the toast components and persisted
/// preferences.
pub struct App {
    /// Active notifications, oldest first. The app owns the sequence; each
    /// notification owns its own lifecycle.
    notifications: Vec<Notification>,
    /// Monotonic counter minting numeric notification ids.
    next_id: u64,
    /// Auto-dismiss duration applied to new notifications; `None` disables
    /// the automatic path.
    default_duration: Option<Duration>,
    /// Whether the dark theme is active.
    dark_theme: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("notifications", &self.notifications.len())
            .field("dark_theme", &self.dark_theme)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            notifications: Vec::new(),
            next_id: 0,
            default_duration: Some(Duration::from_millis(config::DEFAULT_DURATION_MS as u64)),
            dark_theme: true,
        }
    }
}

impl App {
    /// Creates the application state from CLI flags and the persisted config.
    ///
    /// The CLI duration override takes precedence over the config file.
    pub fn new(flags: Flags) -> (Self, iced::Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            log::warn!("failed to load config, using defaults: {err}");
            config::Config::default()
        });

        let duration_ms = flags
            .duration_ms
            .or(config.default_duration_ms)
            .unwrap_or(config::DEFAULT_DURATION_MS);
        if duration_ms <= 0 {
            log::info!("auto-dismiss disabled; toasts require manual dismissal");
        }
        let default_duration = (duration_ms > 0).then(|| Duration::from_millis(duration_ms as u64));

        let app = Self {
            default_duration,
            dark_theme: config.dark_theme.unwrap_or(true),
            ..Self::default()
        };
        (app, iced::Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Toasts")
    }

    fn theme(&self) -> Theme {
        if self.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(!self.notifications.is_empty())
    }

    /// Active notifications, oldest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{Id, Kind, Phase};
    use std::time::Instant;

    #[test]
    fn push_appends_in_insertion_order() {
        let mut app = App::default();
        let _ = app.update(Message::Push(Kind::Info));
        let _ = app.update(Message::Push(Kind::Error));

        let ids: Vec<&Id> = app.notifications().iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec![&Id::from(1), &Id::from(2)]);
    }

    #[test]
    fn dismiss_targets_only_the_matching_id() {
        let mut app = App::default();
        let _ = app.update(Message::Push(Kind::Info));
        let _ = app.update(Message::Push(Kind::Warning));

        let _ = app.update(Message::Dismiss(Id::from(1)));
        assert_eq!(app.notifications()[0].phase(), Phase::Leaving);
        assert_eq!(app.notifications()[1].phase(), Phase::Shown);
    }

    #[test]
    fn dismissing_an_unknown_id_is_harmless() {
        let mut app = App::default();
        let _ = app.update(Message::Push(Kind::Info));
        let _ = app.update(Message::Dismiss(Id::from("not-there")));
        assert_eq!(app.notifications()[0].phase(), Phase::Shown);
    }

    #[test]
    fn tick_removes_toasts_whose_exit_completed() {
        let mut app = App::default();
        let _ = app.update(Message::Push(Kind::Success));
        let _ = app.update(Message::Push(Kind::Info));
        assert_eq!(app.notifications().len(), 2);

        let now = Instant::now();
        let _ = app.update(Message::Dismiss(Id::from(1)));
        let _ = app.update(Message::Tick(now + Duration::from_secs(1)));

        // The dismissed toast left after its 300 ms grace period; the other
        // one is still counting down its five seconds.
        assert_eq!(app.notifications().len(), 1);
        assert_eq!(app.notifications()[0].id(), &Id::from(2));
    }

    #[test]
    fn theme_toggle_flips_the_palette() {
        let mut app = App::default();
        assert!(matches!(app.theme(), Theme::Dark));
        let _ = app.update(Message::ToggleTheme);
        assert!(matches!(app.theme(), Theme::Light));
    }
}
