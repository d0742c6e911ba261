// SPDX-License-Identifier: MPL-2.0
//! Root view: the uploader centered in the window with toasts layered on top.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::theming::ThemeMode;
use crate::uploader;
use iced::widget::{Container, Stack};
use iced::{alignment, Element, Length};

/// Widest the uploader column grows on large windows.
const CONTENT_MAX_WIDTH: f32 = 1024.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub uploader: &'a uploader::State,
    pub theme_mode: ThemeMode,
    pub notifications: &'a Manager,
}

#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let uploader = uploader::view::view(
        ctx.uploader,
        uploader::ViewContext {
            i18n: ctx.i18n,
            theme_mode: ctx.theme_mode,
        },
    )
    .map(Message::Uploader);

    let centered = Container::new(
        Container::new(uploader)
            .max_width(CONTENT_MAX_WIDTH)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(centered)
        .push(toasts)
        .into()
}
