// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns a `State`, consumes its own `Message` and reports an `Effect` to the
//! application root.
//!
//! # Components
//!
//! - [`grid`] - Responsive tile grid, owner of the selection
//! - [`modal`] - Detail overlay with a staged entrance
//!
//! # Shared Infrastructure
//!
//! - [`motion`] - Easing, transitions and tweens
//! - [`widgets`] - Custom Iced widgets (scroll lock, reveal on scroll)
//! - [`styles`] - Centralized styling (buttons, containers, text, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, motion)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod grid;
pub mod modal;
pub mod motion;
pub mod styles;
pub mod theming;
pub mod widgets;
