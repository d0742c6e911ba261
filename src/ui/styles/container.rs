// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Drop area surface. Highlighted while files hover over the window.
pub fn drop_zone(hovering: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        let base = extended.background.weak.color;

        let (background, border_color) = if hovering {
            (
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::PRIMARY_400
                },
                palette::PRIMARY_500,
            )
        } else {
            (
                Color {
                    a: opacity::SURFACE,
                    ..base
                },
                extended.background.strong.color,
            )
        };

        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            ..Default::default()
        }
    }
}

/// Frame around an image preview.
pub fn preview_panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
