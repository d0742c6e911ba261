// SPDX-License-Identifier: MPL-2.0
//! Uploader rendering.
//!
//! Layout, top to bottom: theme toggle (top-right), title and subtitle, the
//! clickable drop area, then, once an image is present, the Original and
//! Compressed panels, the status line and the action buttons.

use super::component::{Message, State};
use super::format;
use super::state::{Asset, CompressionStatus, UploaderState};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, image, mouse_area, Button, Column, Container, Row, Text};
use iced::{alignment, mouse, ContentFit, Element, Length, Theme};

/// Host-provided context. The theme is injected, never read from a global.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    if !state.is_ready() {
        return Column::new().into();
    }

    let uploader = state.uploader();

    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(theme_toggle(ctx.theme_mode))
        .push(banner(ctx.i18n, ctx.theme_mode))
        .push(drop_area(ctx.i18n, state.is_hovering()));

    if let Some(original) = uploader.original() {
        content = content
            .push(previews(uploader, original, ctx.i18n, ctx.theme_mode))
            .push(status_line(uploader.status(), ctx.i18n, ctx.theme_mode))
            .push(actions(uploader, ctx.i18n));
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .into()
}

fn theme_toggle<'a>(mode: ThemeMode) -> Element<'a, Message> {
    // Moon offers dark mode, sun offers light mode.
    let glyph = if mode.is_dark() { "☀" } else { "☾" };

    let toggle = button(Text::new(glyph).size(typography::TITLE_SM))
        .padding(spacing::XS)
        .style(styles::button::theme_toggle)
        .on_press(Message::SetTheme(mode.toggled()));

    Container::new(toggle)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .into()
}

fn banner<'a>(i18n: &I18n, mode: ThemeMode) -> Element<'a, Message> {
    let colors = mode.colors();

    Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr("uploader-title"))
                .size(typography::TITLE_SM)
                .color(colors.text_secondary),
        )
        .push(
            Text::new(i18n.tr("uploader-subtitle"))
                .size(typography::BODY)
                .color(colors.text_secondary),
        )
        .into()
}

fn drop_area<'a>(i18n: &I18n, hovering: bool) -> Element<'a, Message> {
    let hint = Text::new(i18n.tr("uploader-drop-hint")).size(typography::BODY_LG);

    let zone = Container::new(hint)
        .width(Length::Fixed(sizing::DROP_ZONE_WIDTH))
        .height(Length::Fixed(sizing::DROP_ZONE_MIN_HEIGHT))
        .padding(spacing::XXL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::drop_zone(hovering));

    mouse_area(zone)
        .on_press(Message::BrowseRequested)
        .interaction(mouse::Interaction::Pointer)
        .into()
}

fn previews<'a>(
    uploader: &'a UploaderState,
    original: &'a Asset,
    i18n: &I18n,
    mode: ThemeMode,
) -> Element<'a, Message> {
    let colors = mode.colors();

    let original_title = Text::new(original_heading(i18n, original.size()))
        .size(typography::TITLE_MD)
        .color(colors.text_primary);

    let mut row = Row::new()
        .spacing(spacing::XL)
        .align_y(alignment::Vertical::Top)
        .push(preview_panel(
            original_title.into(),
            uploader.preview(original),
        ));

    if let Some(compressed) = uploader.compressed() {
        let heading = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                Text::new(compressed_heading(i18n, compressed.size()))
                    .size(typography::TITLE_MD)
                    .color(colors.text_primary),
            )
            .push(
                Text::new(format::savings_badge(original.size(), compressed.size()))
                    .size(typography::TITLE_MD)
                    .color(colors.success),
            );

        row = row.push(preview_panel(heading.into(), uploader.preview(compressed)));
    }

    row.into()
}

/// Heading of the original panel, e.g. `Original (1953.13 KB)`.
#[must_use]
pub fn original_heading(i18n: &I18n, size: u64) -> String {
    let kb = format::format_kb(size);
    i18n.tr_with_args("uploader-original-title", &[("size", kb.as_str())])
}

/// Heading of the compressed panel, e.g. `Compressed (488.28 KB)`. The
/// savings badge is drawn next to it.
#[must_use]
pub fn compressed_heading(i18n: &I18n, size: u64) -> String {
    let kb = format::format_kb(size);
    i18n.tr_with_args("uploader-compressed-title", &[("size", kb.as_str())])
}

fn preview_panel<'a>(
    heading: Element<'a, Message>,
    handle: Option<&'a image::Handle>,
) -> Element<'a, Message> {
    let mut panel = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(heading);

    if let Some(handle) = handle {
        panel = panel.push(
            image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::PREVIEW_MAX_HEIGHT))
                .content_fit(ContentFit::Contain),
        );
    }

    Container::new(panel)
        .width(Length::FillPortion(1))
        .max_width(sizing::PREVIEW_WIDTH)
        .padding(spacing::SM)
        .style(styles::container::preview_panel)
        .into()
}

fn status_line<'a>(
    status: &CompressionStatus,
    i18n: &I18n,
    mode: ThemeMode,
) -> Element<'a, Message> {
    let colors = mode.colors();

    let line = match status {
        CompressionStatus::Idle => return Column::new().into(),
        CompressionStatus::Compressing(_) => {
            Text::new(i18n.tr("uploader-status-compressing")).color(colors.text_secondary)
        }
        CompressionStatus::Failed(err) => {
            let reason = i18n.tr(err.i18n_key());
            Text::new(i18n.tr_with_args("uploader-status-failed", &[("reason", reason.as_str())]))
                .color(colors.error)
        }
    };

    line.size(typography::BODY).into()
}

fn actions<'a>(uploader: &UploaderState, i18n: &I18n) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::LG);

    if uploader.compressed().is_some() {
        row = row.push(
            action_button(
                format!("⬇ {}", i18n.tr("uploader-download")),
                styles::button::download,
            )
            .on_press(Message::DownloadRequested),
        );
    }

    row.push(
        action_button(
            format!("✕ {}", i18n.tr("uploader-delete")),
            styles::button::delete,
        )
        .on_press(Message::DeleteRequested),
    )
    .into()
}

fn action_button<'a>(
    label: String,
    style: fn(&Theme, button::Status) -> button::Style,
) -> Button<'a, Message> {
    button(
        Text::new(label)
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(sizing::ACTION_BUTTON_WIDTH))
    .padding([spacing::SM, spacing::LG])
    .style(style)
}
