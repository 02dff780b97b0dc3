// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a responsive image gallery built with the Iced GUI framework.
//!
//! Selecting a tile in the grid opens a detail modal whose backdrop, image and
//! text are revealed in stages. Galleries come from a TOML manifest or an
//! image folder; settings, localization and theming follow the usual desktop
//! conventions.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod ui;
