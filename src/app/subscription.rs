// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::message::Hotkey;
use super::Message;
use crate::config::PROGRESS_TICK_MS;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes the global hotkeys (F1, Escape) regardless of the focused widget.
pub fn create_hotkey_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        let event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(named),
            ..
        }) = event
        else {
            return None;
        };

        match named {
            Named::F1 => Some(Message::Hotkey(Hotkey::ShowAbout)),
            Named::Escape => Some(Message::Hotkey(Hotkey::Back)),
            _ => None,
        }
    })
}

/// Creates the tick that applies queued progress commands on the UI thread.
///
/// Only runs while a progress queue is attached.
pub fn create_tick_subscription(progress_attached: bool) -> Subscription<Message> {
    if progress_attached {
        time::every(Duration::from_millis(PROGRESS_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
