// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::opacity;
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Full-window modal backdrop.
///
/// The color is the active theme background; `reveal` (0..=1) scales its
/// opacity during the fade-in.
pub fn backdrop(reveal: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.color;

        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::BACKDROP * reveal.clamp(0.0, 1.0),
                ..base
            })),
            ..Default::default()
        }
    }
}
