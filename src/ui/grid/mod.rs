// SPDX-License-Identifier: MPL-2.0
//! Gallery grid: one tile per item, owner of the current selection.
//!
//! Each tile gets a fixed tilt from [`ROTATIONS`] based on its position, so
//! the layout looks hand-placed but renders identically every time. The grid
//! is the only place the selection changes: a tile activation sets it and
//! [`State::clear_selection`] (called when the modal closes) clears it.

mod view;

pub use view::{view, ViewContext};

use crate::config::{HOVER_ZOOM_MS, HOVER_ZOOM_SCALE};
use crate::gallery::GalleryItem;
use crate::ui::design_tokens::{layout, spacing};
use crate::ui::motion::{Transition, Tween};
use std::path::Path;
use std::time::{Duration, Instant};

/// Tile tilt in degrees, cycled by tile position.
pub const ROTATIONS: [f32; 12] = [
    -6.0, 3.0, -2.0, 5.0, -4.0, 2.0, -5.0, 4.0, -3.0, 6.0, -1.0, 3.0,
];

/// Tiles before this index are requested with the priority hint.
pub const PRIORITY_TILES: usize = 4;

const HOVER_ZOOM: Transition = Transition::new(Duration::from_millis(HOVER_ZOOM_MS));

/// Rotation in degrees for the tile at `index`.
#[must_use]
pub fn rotation_for(index: usize) -> f32 {
    ROTATIONS[index % ROTATIONS.len()]
}

/// Column count and spacing for a given window width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub gap: f32,
}

#[must_use]
pub fn layout_for_width(width: f32) -> GridLayout {
    let columns = if width < layout::BREAKPOINT_MD {
        layout::COLUMNS_NARROW
    } else {
        layout::COLUMNS_WIDE
    };

    let gap = if width < layout::BREAKPOINT_SM {
        spacing::MD
    } else if width < layout::BREAKPOINT_MD {
        spacing::LG
    } else {
        spacing::XL
    };

    GridLayout { columns, gap }
}

/// Everything the view needs to draw one tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile<'a> {
    pub index: usize,
    pub rotation: f32,
    pub scale: f32,
    /// Hover zoom factor, 1.0 at rest.
    pub zoom: f32,
    pub label: &'a str,
    pub priority: bool,
    pub source: &'a Path,
}

#[derive(Debug, Clone)]
pub enum Message {
    TileActivated(usize),
    TileHovered(usize),
    TileUnhovered(usize),
    Frame(Instant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    SelectionChanged(Option<usize>),
}

#[derive(Debug, Clone)]
pub struct State {
    items: Vec<GalleryItem>,
    selected: Option<usize>,
    hover: Vec<Tween>,
    hover_zoom: bool,
    now: Instant,
}

impl State {
    #[must_use]
    pub fn new(items: Vec<GalleryItem>) -> Self {
        let hover = vec![Tween::new(1.0, HOVER_ZOOM); items.len()];
        Self {
            items,
            selected: None,
            hover,
            hover_zoom: true,
            now: Instant::now(),
        }
    }

    /// Enables or disables the hover zoom.
    #[must_use]
    pub fn with_hover_zoom(mut self, enabled: bool) -> Self {
        self.hover_zoom = enabled;
        self
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected(&self) -> Option<&GalleryItem> {
        self.selected.and_then(|index| self.items.get(index))
    }

    /// Clears the selection. Returns whether anything was selected.
    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Sources of the tiles requested with the priority hint.
    #[must_use]
    pub fn priority_sources(&self) -> Vec<std::path::PathBuf> {
        self.items
            .iter()
            .take(PRIORITY_TILES)
            .map(|item| item.source.clone())
            .collect()
    }

    #[must_use]
    pub fn tiles(&self) -> Vec<Tile<'_>> {
        self.items
            .iter()
            .zip(&self.hover)
            .enumerate()
            .map(|(index, (item, hover))| Tile {
                index,
                rotation: rotation_for(index),
                scale: item.scale(),
                zoom: hover.value_at(self.now),
                label: item.label(),
                priority: index < PRIORITY_TILES,
                source: item.source(),
            })
            .collect()
    }

    /// True while a hover zoom is in flight.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.hover.iter().any(|tween| tween.is_running(self.now))
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Effect {
        match message {
            Message::TileActivated(index) => {
                if index >= self.items.len() || self.selected == Some(index) {
                    return Effect::None;
                }
                self.selected = Some(index);
                Effect::SelectionChanged(self.selected)
            }
            Message::TileHovered(index) => {
                self.set_hover(index, HOVER_ZOOM_SCALE, now);
                Effect::None
            }
            Message::TileUnhovered(index) => {
                self.set_hover(index, 1.0, now);
                Effect::None
            }
            Message::Frame(now) => {
                self.now = now;
                Effect::None
            }
        }
    }

    fn set_hover(&mut self, index: usize, target: f32, now: Instant) {
        if !self.hover_zoom {
            return;
        }
        self.now = now;
        if let Some(tween) = self.hover.get_mut(index) {
            tween.retarget(target, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn items(count: usize) -> Vec<GalleryItem> {
        (0..count)
            .map(|i| {
                GalleryItem::new(
                    PathBuf::from(format!("/img/{i}.jpg")),
                    format!("Alt {i}"),
                    format!("Title {i}"),
                )
            })
            .collect()
    }

    #[test]
    fn renders_one_tile_per_item_with_table_rotation() {
        for count in [0, 1, 5, 12, 13, 30] {
            let state = State::new(items(count));
            let tiles = state.tiles();

            assert_eq!(tiles.len(), count);
            for (index, tile) in tiles.iter().enumerate() {
                assert_eq!(tile.index, index);
                assert_eq!(tile.rotation, ROTATIONS[index % 12]);
            }
        }
    }

    #[test]
    fn rotation_cycles_every_twelve_tiles() {
        assert_eq!(rotation_for(0), -6.0);
        assert_eq!(rotation_for(11), 3.0);
        assert_eq!(rotation_for(12), rotation_for(0));
        assert_eq!(rotation_for(25), rotation_for(1));
    }

    #[test]
    fn tile_scale_defaults_to_one() {
        let mut gallery = items(2);
        gallery[1] = gallery[1].clone().with_scale(0.8);
        let state = State::new(gallery);
        let tiles = state.tiles();

        assert_eq!(tiles[0].scale, 1.0);
        assert_eq!(tiles[1].scale, 0.8);
    }

    #[test]
    fn only_first_four_tiles_are_priority() {
        let state = State::new(items(6));
        let priority: Vec<bool> = state.tiles().iter().map(|t| t.priority).collect();

        assert_eq!(priority, [true, true, true, true, false, false]);
        assert_eq!(state.priority_sources().len(), PRIORITY_TILES);
    }

    #[test]
    fn tile_label_comes_from_alt_text() {
        let state = State::new(items(1));
        assert_eq!(state.tiles()[0].label, "Alt 0");
    }

    #[test]
    fn activating_a_tile_selects_its_item() {
        let mut state = State::new(items(3));
        let effect = state.update(Message::TileActivated(1), Instant::now());

        assert_eq!(effect, Effect::SelectionChanged(Some(1)));
        assert_eq!(state.selected().map(|i| i.title.as_str()), Some("Title 1"));
    }

    #[test]
    fn out_of_range_activation_is_ignored() {
        let mut state = State::new(items(2));
        let effect = state.update(Message::TileActivated(2), Instant::now());

        assert_eq!(effect, Effect::None);
        assert!(state.selected().is_none());
    }

    #[test]
    fn hover_does_not_change_selection() {
        let mut state = State::new(items(2));
        state.update(Message::TileHovered(0), Instant::now());
        state.update(Message::TileUnhovered(0), Instant::now());

        assert!(state.selected_index().is_none());
    }

    #[test]
    fn clear_selection_reports_previous_state() {
        let mut state = State::new(items(2));
        assert!(!state.clear_selection());

        state.update(Message::TileActivated(0), Instant::now());
        assert!(state.clear_selection());
        assert!(state.selected().is_none());
    }

    #[test]
    fn hover_zoom_animates_and_settles() {
        let start = Instant::now();
        let mut state = State::new(items(1));

        state.update(Message::TileHovered(0), start);
        assert!(state.needs_frames());
        assert_eq!(state.tiles()[0].zoom, 1.0);

        state.update(Message::Frame(start + Duration::from_millis(150)), start);
        let zoom = state.tiles()[0].zoom;
        assert!(zoom > 1.0 && zoom < HOVER_ZOOM_SCALE);

        state.update(Message::Frame(start + Duration::from_millis(HOVER_ZOOM_MS)), start);
        assert!((state.tiles()[0].zoom - HOVER_ZOOM_SCALE).abs() < 1e-6);
        assert!(!state.needs_frames());
    }

    #[test]
    fn disabled_hover_zoom_never_animates() {
        let mut state = State::new(items(1)).with_hover_zoom(false);
        state.update(Message::TileHovered(0), Instant::now());

        assert!(!state.needs_frames());
        assert_eq!(state.tiles()[0].zoom, 1.0);
    }

    #[test]
    fn layout_switches_columns_and_gaps_at_breakpoints() {
        assert_eq!(
            layout_for_width(500.0),
            GridLayout {
                columns: 2,
                gap: 16.0
            }
        );
        assert_eq!(
            layout_for_width(700.0),
            GridLayout {
                columns: 2,
                gap: 24.0
            }
        );
        assert_eq!(
            layout_for_width(768.0),
            GridLayout {
                columns: 4,
                gap: 32.0
            }
        );
    }
}
