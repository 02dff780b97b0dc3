// SPDX-License-Identifier: MPL-2.0
pub mod reveal;
pub mod scroll_lock;

pub use reveal::{reveal, Reveal};
pub use scroll_lock::{scroll_lock, ScrollLock};
