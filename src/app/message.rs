// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications::{Id, Kind};
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Push a new notification of the given kind.
    Push(Kind),
    /// The dismiss button of the toast with this id was pressed.
    Dismiss(Id),
    /// Periodic tick driving auto-dismiss countdowns and exit timers.
    Tick(Instant),
    /// Switch between the dark and light theme.
    ToggleTheme,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional auto-dismiss duration override in milliseconds. A
    /// non-positive value disables auto-dismiss. Takes precedence over the
    /// config file.
    pub duration_ms: Option<i64>,
}
