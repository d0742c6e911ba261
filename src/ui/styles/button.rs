// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Bordered action button that fills with `accent` on hover.
///
/// `accent` is the light-theme color, `accent_dark` the dark-theme one.
pub fn outlined(
    accent: Color,
    accent_dark: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let is_dark = theme.extended_palette().is_dark;
        let color = if is_dark { accent_dark } else { accent };

        let (background, text_color, shadow) = match status {
            button::Status::Hovered => (Some(Background::Color(color)), palette::WHITE, shadow::MD),
            button::Status::Pressed => (
                Some(Background::Color(Color {
                    a: opacity::OVERLAY_PRESSED,
                    ..color
                })),
                palette::WHITE,
                shadow::SM,
            ),
            button::Status::Active => (None, color, shadow::SM),
            button::Status::Disabled => (
                None,
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..color
                },
                shadow::NONE,
            ),
        };

        button::Style {
            background,
            text_color,
            border: Border {
                color,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow,
            snap: true,
        }
    }
}

/// Download action (blue).
pub fn download(theme: &Theme, status: button::Status) -> button::Style {
    outlined(palette::PRIMARY_600, palette::PRIMARY_400)(theme, status)
}

/// Delete action (red).
pub fn delete(theme: &Theme, status: button::Status) -> button::Style {
    outlined(palette::ERROR_500, palette::ERROR_400)(theme, status)
}

/// Round button in the corner that flips the theme.
pub fn theme_toggle(theme: &Theme, status: button::Status) -> button::Style {
    let is_dark = theme.extended_palette().is_dark;
    let (base, text_color) = if is_dark {
        (palette::GRAY_700, palette::SUN_400)
    } else {
        (palette::GRAY_200, palette::GRAY_900)
    };
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        button::Status::Active | button::Status::Disabled => opacity::OPAQUE,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..base })),
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}
