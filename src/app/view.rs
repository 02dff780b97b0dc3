// SPDX-License-Identifier: MPL-2.0
//! View composition for the application root.

use super::Message;
use crate::gallery::GalleryItem;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{grid, modal};
use iced::widget::{center, text, Column, Container, Stack};
use iced::{Alignment, Element, Length};

/// Contextual data needed to render the application.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub grid: &'a grid::State,
    pub modal: &'a modal::State,
    pub images: &'a ImageCache,
    /// i18n key describing why the gallery could not be loaded.
    pub load_error: Option<&'a str>,
    /// i18n key of a startup notice (e.g. settings fell back to defaults).
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body = if ctx.grid.is_empty() {
        empty_state(&ctx)
    } else {
        gallery(&ctx)
    };

    match ctx.notice {
        Some(key) => Column::new()
            .push(
                Container::new(text(ctx.i18n.tr(key)).size(typography::BODY_SM))
                    .padding(spacing::XS)
                    .width(Length::Fill),
            )
            .push(body)
            .into(),
        None => body,
    }
}

fn gallery<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let grid_view = grid::view(
        ctx.grid,
        grid::ViewContext {
            i18n: ctx.i18n,
            images: ctx.images,
            scroll_locked: ctx.modal.locks_scroll(),
        },
    )
    .map(Message::Grid);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(grid_view);
    if let Some(overlay) = modal_layer(ctx) {
        layers = layers.push(overlay);
    }
    layers.into()
}

/// The item handed to the modal, present only while the modal is open.
fn modal_item<'a>(grid: &'a grid::State, modal: &modal::State) -> Option<&'a GalleryItem> {
    grid.selected().filter(|_| modal.is_open())
}

fn modal_layer<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let item = modal_item(ctx.grid, ctx.modal)?;
    let overlay = modal::view(
        ctx.modal,
        modal::ViewContext {
            item,
            i18n: ctx.i18n,
            images: ctx.images,
        },
    )?;
    Some(overlay.map(Message::Modal))
}

fn empty_state<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let hint_key = ctx.load_error.unwrap_or("gallery-empty-hint");

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Alignment::Center)
        .push(text(ctx.i18n.tr("gallery-empty-title")).size(typography::TITLE_MD))
        .push(text(ctx.i18n.tr(hint_key)).size(typography::BODY));

    center(content).into()
}
