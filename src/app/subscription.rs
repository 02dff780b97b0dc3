// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The window close listener is always active. The Escape listener exists
//! only while the modal holds its scope, and frames are requested only while
//! something is animating.

use super::Message;
use crate::ui::modal;
use iced::keyboard::{self, key};
use iced::{event, window, Subscription};

/// Routes window close requests so the modal can be torn down first.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(window::Event::CloseRequested) = event {
            Some(Message::WindowCloseRequested(window_id))
        } else {
            None
        }
    })
}

/// Listens for Escape while `active`.
pub fn create_escape_subscription(active: bool) -> Subscription<Message> {
    if !active {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        }) => Some(Message::Modal(modal::Message::EscapePressed)),
        _ => None,
    })
}

/// Emits a message after every redraw while `animating`.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}
