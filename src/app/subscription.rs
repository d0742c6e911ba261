// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions: file drag-and-drop on the window and the toast timer.

use super::Message;
use crate::ui::notifications::NotificationMessage;
use crate::uploader;
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Interval at which expired toasts are removed.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Routes window file drag-and-drop events to the uploader.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        let message = match event {
            Event::Window(window::Event::FileHovered(_)) => uploader::Message::FileHovered,
            Event::Window(window::Event::FilesHoveredLeft) => uploader::Message::FilesHoveredLeft,
            Event::Window(window::Event::FileDropped(path)) => {
                uploader::Message::FileDropped(path)
            }
            _ => return None,
        };
        Some(Message::Uploader(message))
    })
}

/// Ticks only while toasts are on screen.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK).map(|_| Message::Notification(NotificationMessage::Tick))
    } else {
        Subscription::none()
    }
}
