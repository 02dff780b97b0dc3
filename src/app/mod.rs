// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the grid and the modal.
//!
//! The `App` struct wires together the gallery grid, the detail modal,
//! localization and the preload cache, and translates messages into side
//! effects like background image decoding or closing the window.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::gallery::{self, GalleryItem};
use crate::i18n::fluent::I18n;
use crate::media::{self, CacheLimits, ImageCache};
use crate::ui::theming::ThemeMode;
use crate::ui::{grid, modal};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    grid: grid::State,
    modal: modal::State,
    images: ImageCache,
    theme_mode: ThemeMode,
    /// i18n key explaining why the gallery is empty, if loading failed.
    load_error: Option<String>,
    /// i18n key of a startup notice.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("items", &self.grid.items().len())
            .field("selected", &self.grid.selected_index())
            .field("modal_open", &self.modal.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 768.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Builds the window settings.
///
/// Close requests are handled by the app so the modal can release its scope
/// before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let sort_order = config.gallery.sort_order.unwrap_or_default();

        let (items, load_error) = match flags.gallery_path.as_deref() {
            Some(path) => match gallery::load_source(path, sort_order) {
                Ok(items) => (items, None),
                Err(err) => {
                    log::error!("Failed to load gallery from {}: {err}", path.display());
                    (Vec::new(), Some(err.i18n_key().to_string()))
                }
            },
            None => (Vec::new(), None),
        };

        let mut app = Self::with_items(items, &config, i18n);
        app.load_error = load_error;
        app.notice = config_warning;

        let task = app.preload_priority_images();
        (app, task)
    }

    /// Builds the application state for `items` without touching the disk.
    #[must_use]
    pub fn with_items(items: Vec<GalleryItem>, config: &Config, i18n: I18n) -> Self {
        let hover_zoom = config.gallery.hover_zoom.unwrap_or(true);
        let show_image = config.modal.show_image.unwrap_or(true);

        Self {
            i18n,
            grid: grid::State::new(items).with_hover_zoom(hover_zoom),
            modal: modal::State::new(config.animation.timings(), show_image),
            images: ImageCache::new(CacheLimits::from(&config.cache)),
            theme_mode: config.general.theme_mode,
            load_error: None,
            notice: None,
        }
    }

    fn preload_priority_images(&self) -> Task<Message> {
        let pending = self.images.paths_to_preload(&self.grid.priority_sources());
        if pending.is_empty() {
            return Task::none();
        }

        log::info!("Preloading {} priority images", pending.len());
        Task::batch(pending.into_iter().map(|path| {
            Task::perform(media::load_image_for_preload(path), |(path, result)| {
                Message::ImagePreloaded { path, result }
            })
        }))
    }

    #[must_use]
    pub fn grid(&self) -> &grid::State {
        &self.grid
    }

    #[must_use]
    pub fn modal(&self) -> &modal::State {
        &self.modal
    }

    #[must_use]
    pub fn images(&self) -> &ImageCache {
        &self.images
    }

    #[must_use]
    pub fn title(&self) -> String {
        let count = self.grid.items().len();
        if count == 0 {
            self.i18n.tr("window-title")
        } else {
            self.i18n
                .tr_with_args("window-title-with-count", &[("count", &count.to_string())])
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_escape_subscription(self.modal.listens_for_escape()),
            subscription::create_frame_subscription(
                self.modal.needs_frames() || self.grid.needs_frames(),
            ),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            grid: &mut self.grid,
            modal: &mut self.modal,
            images: &mut self.images,
        };

        match message {
            Message::Grid(grid_message) => update::handle_grid_message(&mut ctx, grid_message),
            Message::Modal(modal_message) => {
                update::handle_modal_message(&mut ctx, modal_message)
            }
            Message::Frame(at) => update::handle_frame(&mut ctx, at),
            Message::ImagePreloaded { path, result } => {
                update::handle_image_preloaded(&mut ctx, path, result)
            }
            Message::WindowCloseRequested(window_id) => {
                update::handle_window_close_requested(&mut ctx, window_id)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            grid: &self.grid,
            modal: &self.modal,
            images: &self.images,
            load_error: self.load_error.as_deref(),
            notice: self.notice.as_deref(),
        })
    }
}
