// SPDX-License-Identifier: MPL-2.0
//! Renderer and tick router for the ordered collection of notifications.
//!
//! The list owns no timing logic of its own: every notification drives its own
//! lifecycle, and the list only renders them in input order and routes each
//! completed exit to the caller's removal handler. Removing a record from the
//! backing sequence is entirely the caller's responsibility, typically done in
//! response to `on_remove`.

use super::lifecycle::Event;
use super::notification::{Id, Notification};
use super::toast::Toast;
use crate::ui::design_tokens::spacing;
use iced::widget::{text, Column, Container};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Container component rendering one toast per notification record.
pub struct NotificationList;

impl NotificationList {
    /// Renders the notifications in slice order, stacked in the bottom-right
    /// corner.
    ///
    /// An empty slice renders an empty container, not nothing, so the overlay
    /// keeps a stable place in the widget tree. `on_dismiss` builds the
    /// message emitted when a toast's dismiss button is pressed.
    pub fn view<'a, M: Clone + 'a>(
        notifications: &'a [Notification],
        on_dismiss: impl Fn(Id) -> M + Clone + 'a,
    ) -> Element<'a, M> {
        if notifications.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toasts: Vec<Element<'a, M>> = notifications
            .iter()
            .map(|notification| Toast::view(notification, on_dismiss.clone()))
            .collect();

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }

    /// Advances every notification to `now` and invokes `on_remove` with the
    /// id of each one whose exit sequence completed on this tick, in list
    /// order.
    ///
    /// The list performs no removal itself; hidden notifications stay in the
    /// slice until the caller drops them.
    pub fn tick_all(
        notifications: &mut [Notification],
        now: Instant,
        mut on_remove: impl FnMut(&Id),
    ) {
        for notification in notifications.iter_mut() {
            if notification.tick(now) == Some(Event::Closed) {
                on_remove(notification.id());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn empty_list_still_builds_a_container() {
        let notifications: Vec<Notification> = Vec::new();
        // Building the element must not panic; the container is present even
        // when there is nothing to show.
        let _: Element<'_, ()> = NotificationList::view(&notifications, |_| ());
    }

    #[test]
    fn tick_all_reports_completed_exits_in_list_order() {
        let t0 = Instant::now();
        let mut notifications = vec![
            Notification::info(1, "first").duration_ms(100),
            Notification::info(2, "second").duration_ms(100),
            Notification::info(3, "third").duration_ms(5000),
        ];

        NotificationList::tick_all(&mut notifications, t0, |_| {});

        let mut removed = Vec::new();
        NotificationList::tick_all(&mut notifications, t0 + Duration::from_millis(100), |id| {
            removed.push(id.clone())
        });
        assert!(removed.is_empty()); // first two just entered Leaving

        NotificationList::tick_all(&mut notifications, t0 + Duration::from_millis(400), |id| {
            removed.push(id.clone())
        });
        assert_eq!(removed, vec![Id::from(1), Id::from(2)]);

        // The slice is untouched; removal is the caller's decision.
        assert_eq!(notifications.len(), 3);
        assert!(!notifications[0].is_visible());
        assert!(notifications[2].is_visible());
    }

    #[test]
    fn tick_all_reports_each_exit_once() {
        let t0 = Instant::now();
        let mut notifications = vec![Notification::error("e", "boom").duration_ms(50)];
        NotificationList::tick_all(&mut notifications, t0, |_| {});

        let mut count = 0;
        for offset_ms in [350, 400, 1000] {
            NotificationList::tick_all(
                &mut notifications,
                t0 + Duration::from_millis(offset_ms),
                |_| count += 1,
            );
        }
        assert_eq!(count, 1);
    }
}
