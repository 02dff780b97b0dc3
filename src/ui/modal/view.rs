// SPDX-License-Identifier: MPL-2.0
//! Modal view rendering.

use super::{Message, RevealFrame, State};
use crate::gallery::GalleryItem;
use crate::i18n::fluent::I18n;
use crate::media::{ImageProvider, ImageRequest, SizeHint};
use crate::ui::design_tokens::{motion, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, center, container, image, mouse_area, opaque, responsive, text, Column, Space, Stack,
};
use iced::{Alignment, ContentFit, Element, Length, Padding, Size};

/// Contextual data needed to render the modal.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    /// The selected item.
    pub item: &'a GalleryItem,
    pub i18n: &'a I18n,
    pub images: &'a dyn ImageProvider,
}

/// Renders the modal overlay, or nothing while the modal is closed.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !state.is_open() {
        return None;
    }

    let frame = state.reveal();
    let show_image = state.shows_image();

    Some(responsive(move |available: Size| overlay(ctx, frame, show_image, available)).into())
}

fn overlay<'a>(
    ctx: ViewContext<'a>,
    frame: RevealFrame,
    show_image: bool,
    available: Size,
) -> Element<'a, Message> {
    let backdrop = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop(frame.backdrop_opacity)),
    )
    .on_press(Message::BackdropPressed);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(Alignment::Center)
        .max_width(sizing::MODAL_MAX_WIDTH);

    if show_image {
        content = content.push(image_block(ctx, frame, available.width));
    }
    content = content.push(text_block(ctx, frame));

    Stack::new()
        .push(backdrop)
        .push(center(opaque(content)).padding(spacing::XL))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn image_block<'a>(
    ctx: ViewContext<'a>,
    frame: RevealFrame,
    viewport_width: f32,
) -> Element<'a, Message> {
    let request = ImageRequest {
        source: ctx.item.source(),
        label: ctx.item.label(),
        width: sizing::MODAL_IMAGE,
        height: sizing::MODAL_IMAGE,
        priority: true,
        sizes: SizeHint::MODAL,
    };
    let size = request.display_size(viewport_width);

    image(ctx.images.handle(&request))
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .content_fit(ContentFit::Contain)
        .scale(frame.image_scale)
        .opacity(frame.image_opacity)
        .into()
}

fn text_block<'a>(ctx: ViewContext<'a>, frame: RevealFrame) -> Element<'a, Message> {
    let alpha = frame.text_opacity;

    let mut block = Column::new()
        .spacing(spacing::MD)
        .align_x(Alignment::Center)
        .push(
            text(ctx.item.title.as_str())
                .size(typography::TITLE_LG)
                .style(styles::text::faded(alpha)),
        );

    if !ctx.item.description.is_empty() {
        block = block.push(
            text(ctx.item.description.as_str())
                .size(typography::BODY_LG)
                .style(styles::text::faded(alpha)),
        );
    }

    let close = button(text(ctx.i18n.tr("modal-close")).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press(Message::ClosePressed)
        .style(styles::button::close(alpha));
    block = block.push(close);

    // Offset through padding so the block's total height stays constant.
    container(block)
        .padding(Padding {
            top: frame.text_offset,
            bottom: motion::TEXT_START_OFFSET - frame.text_offset,
            ..Padding::ZERO
        })
        .into()
}
