// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! The playground content sits underneath; the notification overlay is
//! stacked on top so toasts float over it in the bottom-right corner.

use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{Kind, NotificationList};
use iced::widget::{button, stack, Column, Container, Row, Text};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let kind_buttons = Row::new()
            .spacing(spacing::XS)
            .push(push_button("Info", Kind::Info))
            .push(push_button("Success", Kind::Success))
            .push(push_button("Warning", Kind::Warning))
            .push(push_button("Error", Kind::Error))
            .push(push_button("Custom", Kind::Other(String::from("celebration"))));

        let theme_label = if self.dark_theme {
            "Switch to light theme"
        } else {
            "Switch to dark theme"
        };

        let controls = Column::new()
            .spacing(spacing::MD)
            .push(Text::new("Toast playground").size(typography::TITLE_MD))
            .push(Text::new("Push a notification and watch it dismiss itself.").size(typography::BODY))
            .push(kind_buttons)
            .push(button(Text::new(theme_label).size(typography::BODY)).on_press(Message::ToggleTheme));

        let content = Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG);

        let overlay = NotificationList::view(&self.notifications, Message::Dismiss);

        stack([content.into(), overlay]).into()
    }
}

fn push_button<'a>(label: &'static str, kind: Kind) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(Message::Push(kind))
        .into()
}
