// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use iced::widget::text;
use iced::{Color, Theme};

/// Theme text color faded by `alpha`.
pub fn faded(alpha: f32) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| text::Style {
        color: Some(Color {
            a: alpha.clamp(0.0, 1.0),
            ..theme.palette().text
        }),
    }
}
