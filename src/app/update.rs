// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The grid owns the selection and the modal owns its entrance. Every
//! handler that may change the selection finishes by syncing the modal's
//! open flag from it, so the two never disagree.

use super::Message;
use crate::error::Error;
use crate::media::{ImageCache, ImageData};
use crate::ui::{grid, modal};
use iced::{window, Task};
use std::path::PathBuf;
use std::time::Instant;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub grid: &'a mut grid::State,
    pub modal: &'a mut modal::State,
    pub images: &'a mut ImageCache,
}

impl UpdateContext<'_> {
    fn sync_modal(&mut self, now: Instant) {
        self.modal.sync(self.grid.selected().is_some(), now);
    }
}

pub fn handle_grid_message(ctx: &mut UpdateContext<'_>, message: grid::Message) -> Task<Message> {
    let now = Instant::now();
    match ctx.grid.update(message, now) {
        grid::Effect::SelectionChanged(index) => {
            log::debug!("Selection changed to {index:?}");
            ctx.sync_modal(now);
        }
        grid::Effect::None => {}
    }
    Task::none()
}

pub fn handle_modal_message(
    ctx: &mut UpdateContext<'_>,
    message: modal::Message,
) -> Task<Message> {
    match ctx.modal.update(message) {
        modal::Effect::CloseRequested => {
            ctx.grid.clear_selection();
            ctx.sync_modal(Instant::now());
        }
        modal::Effect::None => {}
    }
    Task::none()
}

pub fn handle_frame(ctx: &mut UpdateContext<'_>, at: Instant) -> Task<Message> {
    ctx.grid.update(grid::Message::Frame(at), at);
    ctx.modal.update(modal::Message::Frame(at));
    Task::none()
}

pub fn handle_image_preloaded(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    match result {
        Ok(data) => {
            let (width, height) = (data.width, data.height);
            if ctx.images.insert(path.clone(), data) {
                log::debug!("Preloaded {} ({width}x{height})", path.display());
            } else {
                log::debug!("Preloaded image too large to cache: {}", path.display());
            }

            let stats = ctx.images.stats();
            log::debug!(
                "Preload cache: {} images, {} KiB, {} inserted, {} evicted, {} rejected",
                stats.image_count,
                ctx.images.memory_usage() / 1024,
                stats.insertions,
                stats.evictions,
                stats.rejections
            );
        }
        Err(err) => {
            log::warn!("Failed to preload {}: {err}", path.display());
        }
    }
    Task::none()
}

/// Releases the modal's scope before the window goes away.
pub fn handle_window_close_requested(
    ctx: &mut UpdateContext<'_>,
    window_id: window::Id,
) -> Task<Message> {
    ctx.grid.clear_selection();
    ctx.modal.teardown();

    let stats = ctx.modal.scope_stats();
    log::info!(
        "Closing window; modal scopes acquired {} released {}",
        stats.acquired,
        stats.released
    );

    window::close(window_id)
}
