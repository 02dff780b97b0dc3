// SPDX-License-Identifier: MPL-2.0
//! A wrapper that holds back its content until it scrolls into view.
//!
//! The content is laid out as usual but not drawn until its bounds first
//! intersect the visible viewport. It then slides up into place once and
//! stays visible from then on.

use crate::ui::design_tokens::motion;
use crate::ui::motion::{lerp, Transition};
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{window, Element, Event, Length, Rectangle, Size, Vector};
use std::time::Instant;

const ENTRANCE: Transition = Transition::new(motion::REVEAL_ENTRANCE);

#[derive(Debug, Clone, Copy, Default)]
struct State {
    revealed_at: Option<Instant>,
    now: Option<Instant>,
}

impl State {
    fn offset(&self) -> f32 {
        match (self.revealed_at, self.now) {
            (Some(revealed_at), Some(now)) => entrance_offset(revealed_at, now),
            _ => motion::REVEAL_DISTANCE,
        }
    }
}

/// Vertical offset of the content `now`, given when it was revealed.
fn entrance_offset(revealed_at: Instant, now: Instant) -> f32 {
    let t = ENTRANCE.progress(now.saturating_duration_since(revealed_at));
    lerp(motion::REVEAL_DISTANCE, 0.0, t)
}

pub struct Reveal<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
}

impl<'a, Message, Theme, Renderer> Reveal<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Reveal<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        if state.revealed_at.is_none() {
            return;
        }

        renderer.with_translation(Vector::new(0.0, state.offset()), |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                layout,
                cursor,
                viewport,
            );
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if let Event::Window(window::Event::RedrawRequested(now)) = event {
            let state = tree.state.downcast_mut::<State>();
            state.now = Some(*now);

            match state.revealed_at {
                None if layout.bounds().intersects(viewport) => {
                    state.revealed_at = Some(*now);
                    shell.request_redraw();
                }
                Some(revealed_at)
                    if !ENTRANCE.is_finished(now.saturating_duration_since(revealed_at)) =>
                {
                    shell.request_redraw();
                }
                _ => {}
            }
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        if tree.state.downcast_ref::<State>().revealed_at.is_none() {
            return None;
        }

        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Reveal<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(wrapper: Reveal<'a, Message, Theme, Renderer>) -> Self {
        Self::new(wrapper)
    }
}

/// Wraps `content` so it only appears once scrolled into view.
pub fn reveal<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> Reveal<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    Reveal::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn unrevealed_state_sits_at_full_offset() {
        assert_eq!(State::default().offset(), motion::REVEAL_DISTANCE);
    }

    #[test]
    fn entrance_settles_to_zero() {
        let start = Instant::now();
        assert_eq!(entrance_offset(start, start), motion::REVEAL_DISTANCE);

        let midway = entrance_offset(start, start + motion::REVEAL_ENTRANCE / 2);
        assert!(midway > 0.0 && midway < motion::REVEAL_DISTANCE);

        let settled = entrance_offset(start, start + motion::REVEAL_ENTRANCE);
        assert_eq!(settled, 0.0);
    }

    #[test]
    fn entrance_never_moves_backwards() {
        let start = Instant::now();
        let mut previous = f32::MAX;
        for step in 0..=10 {
            let offset = entrance_offset(start, start + Duration::from_millis(step * 60));
            assert!(offset <= previous);
            previous = offset;
        }
    }
}
