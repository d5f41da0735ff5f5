// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` provides transient toast notifications for the Iced GUI
//! framework.
//!
//! A [`ui::notifications::Notification`] renders one message with a
//! kind-derived icon and dismisses itself after a timeout through a
//! shown → leaving → hidden lifecycle; a
//! [`ui::notifications::NotificationList`] renders the caller-owned ordered
//! collection and routes each completed exit back to the caller's removal
//! handler. The crate also ships a small demo application exercising the
//! components.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
