// SPDX-License-Identifier: MPL-2.0
//! Grid view rendering.

use super::{layout_for_width, Message, State, Tile};
use crate::i18n::fluent::I18n;
use crate::media::{ImageProvider, ImageRequest, SizeHint};
use crate::ui::design_tokens::sizing;
use crate::ui::styles;
use crate::ui::widgets::{reveal, scroll_lock};
use iced::widget::image::FilterMethod;
use iced::widget::{
    button, container, image, mouse_area, responsive, tooltip, Column, Row, Scrollable, Space,
};
use iced::{ContentFit, Element, Length, Radians, Rotation, Size};

/// Tiles show the whole image so the tilt reads on the picture's own edges.
const TILE_CONTENT_FIT: ContentFit = ContentFit::Contain;

/// Contextual data needed to render the grid.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a dyn ImageProvider,
    /// Set while the modal holds the scroll lock.
    pub scroll_locked: bool,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    responsive(move |available: Size| view_inner(state, ctx, available)).into()
}

fn view_inner<'a>(state: &'a State, ctx: ViewContext<'a>, available: Size) -> Element<'a, Message> {
    let layout = layout_for_width(available.width);
    let columns = layout.columns as f32;
    let edge = ((available.width - layout.gap * (columns + 1.0)) / columns).max(0.0);

    let mut rows = Column::new().spacing(layout.gap);
    for chunk in state.tiles().chunks(layout.columns) {
        let mut cells = Row::new().spacing(layout.gap);
        for tile in chunk {
            cells = cells.push(tile_view(*tile, ctx, edge));
        }
        for _ in chunk.len()..layout.columns {
            cells = cells.push(Space::new().width(Length::Fill));
        }
        rows = rows.push(cells);
    }

    let content = Scrollable::new(container(rows).padding(layout.gap))
        .width(Length::Fill)
        .height(Length::Fill);

    scroll_lock(content).locked(ctx.scroll_locked).into()
}

fn tile_view<'a>(tile: Tile<'a>, ctx: ViewContext<'a>, edge: f32) -> Element<'a, Message> {
    let request = ImageRequest {
        source: tile.source,
        label: tile.label,
        width: sizing::TILE_IMAGE,
        height: sizing::TILE_IMAGE,
        priority: tile.priority,
        sizes: SizeHint::TILE,
    };

    // Floating rotation leaves layout untouched, so unclipped neighbours keep
    // their slots while the picture tilts past its own bounds.
    let picture = image(ctx.images.handle(&request))
        .width(Length::Fill)
        .height(Length::Fixed(edge))
        .content_fit(TILE_CONTENT_FIT)
        .filter_method(FilterMethod::Linear)
        .rotation(Rotation::Floating(Radians(tile.rotation.to_radians())))
        .scale(tile.scale * tile.zoom);

    let activatable = button(picture)
        .padding(0)
        .width(Length::Fill)
        .on_press(Message::TileActivated(tile.index))
        .style(styles::button::tile);

    let hoverable = mouse_area(activatable)
        .on_enter(Message::TileHovered(tile.index))
        .on_exit(Message::TileUnhovered(tile.index));

    let label = ctx.i18n.tr_with_args("tile-label", &[("alt", tile.label)]);

    reveal(styles::tooltip::labelled(
        hoverable,
        label,
        tooltip::Position::Bottom,
    ))
    .into()
}
