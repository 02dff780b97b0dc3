// SPDX-License-Identifier: MPL-2.0
//! Button styles for tiles and the modal close control.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Gallery tile: no chrome of its own, a brand outline on hover.
pub fn tile(_theme: &Theme, status: button::Status) -> button::Style {
    let (border_color, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, shadow::LG),
        button::Status::Pressed => (palette::PRIMARY_600, shadow::MD),
        _ => (Color::TRANSPARENT, shadow::MD),
    };

    button::Style {
        background: None,
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow,
        snap: true,
    }
}

/// Modal close control, faded together with the modal text block.
pub fn close(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, border_color) = match status {
            button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500),
            _ => (palette::PRIMARY_500, palette::PRIMARY_600),
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..background
            })),
            text_color: Color { a: alpha, ..WHITE },
            border: Border {
                color: Color {
                    a: alpha,
                    ..border_color
                },
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: if alpha > 0.0 { shadow::SM } else { shadow::NONE },
            snap: true,
        }
    }
}
