// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Tiles have no visible caption, so their accessible label is shown as a
//! tooltip. The tooltip inverts the theme so it stands out over photos.

use crate::ui::design_tokens::{radius, shadow, sizing, spacing, typography};
use iced::widget::{container, text, tooltip, Container};
use iced::{Background, Border, Color, Element, Theme};

/// Style for the tooltip container.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    let (bg_color, text_color) = if palette.is_dark {
        (
            Color::from_rgba(0.95, 0.95, 0.95, 0.98),
            Color::from_rgb(0.1, 0.1, 0.1),
        )
    } else {
        (
            Color::from_rgba(0.15, 0.15, 0.15, 0.98),
            Color::from_rgb(0.95, 0.95, 0.95),
        )
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: Color { a: 0.3, ..text_color },
        },
        shadow: shadow::MD,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` in a styled tooltip showing `label`.
pub fn labelled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    label: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip = Container::new(text(label.into()).size(typography::BODY_SM))
        .max_width(sizing::TOOLTIP_MAX_WIDTH)
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip, position).gap(spacing::XS)
}
