// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as small
//! cards with a kind-colored accent border and a dismiss button. A leaving
//! toast renders washed out for the exit grace period; a hidden toast renders
//! nothing at all.

use super::lifecycle::Phase;
use super::notification::{Id, Notification};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    ///
    /// `on_dismiss` builds the message emitted when the dismiss button is
    /// pressed; it receives the notification's id.
    pub fn view<'a, M: Clone + 'a>(
        notification: &'a Notification,
        on_dismiss: impl Fn(Id) -> M + 'a,
    ) -> Element<'a, M> {
        // A notification is rendered if and only if it is visible.
        if notification.phase() == Phase::Hidden {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let accent = notification.kind().accent_color();
        let leaving = notification.phase() == Phase::Leaving;
        let alpha = if leaving {
            opacity::LEAVING
        } else {
            opacity::OPAQUE
        };

        // Kind icon, tinted with the accent color
        let icon_widget = Text::new(notification.kind().icon())
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color { a: alpha, ..accent }),
            });

        // Message text
        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..theme.palette().text
                }),
            });

        // Dismiss button (always visible; dismissal is idempotent)
        let id = notification.id().clone();
        let dismiss_button = button(Text::new("\u{2715}").size(typography::CAPTION))
            .on_press(on_dismiss(id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
            .into()
    }
}

/// Style function for the toast container.
///
/// `alpha` fades the card during the exit grace period.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..bg_color
        })),
        border: iced::Border {
            color: Color {
                a: alpha,
                ..accent_color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent, opacity::OPAQUE);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn leaving_alpha_fades_the_accent_border() {
        let theme = Theme::Dark;
        let accent = palette::ERROR_500;
        let style = toast_container_style(&theme, accent, opacity::LEAVING);

        assert_eq!(style.border.color.a, opacity::LEAVING);
        assert_eq!(style.border.color.r, accent.r);
    }
}
