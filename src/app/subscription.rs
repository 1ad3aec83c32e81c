// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module routes native events (keyboard, window) to the appropriate
//! widgets based on the current screen, and drives the periodic tick used
//! for transient invalid flags and toast auto-dismiss.

use super::{Message, Screen};
use crate::ui::{quantity, uploader};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the native event subscription for the current screen.
///
/// - Escape is routed everywhere; `App::update` closes the topmost overlay.
/// - File drag/drop events are only meaningful on the car form, where the
///   uploader lives.
/// - ArrowUp/`+` and ArrowDown/`-` give the quantity stepper buttons
///   keyboard parity on the car form, but only when no widget captured the
///   key (typing into an input must not step the quantity).
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| Some((event, status)))
        .with(screen)
        .filter_map(|(screen, (event, status))| resolve_event(screen, &event, status))
}

/// Routes a single native event to a message for the given screen.
fn resolve_event(
    screen: Screen,
    event: &event::Event,
    status: event::Status,
) -> Option<Message> {
    if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event {
        if matches!(key, Key::Named(Named::Escape)) {
            return Some(Message::EscapePressed);
        }

        if screen == Screen::Home
            && status == event::Status::Ignored
            && matches!(key, Key::Named(Named::Enter))
        {
            return Some(Message::PrimaryActionActivated);
        }

        if screen == Screen::CarForm && status == event::Status::Ignored {
            if let Some(msg) = quantity_key(key) {
                return Some(Message::Quantity(msg));
            }
        }
    }

    if screen == Screen::CarForm {
        if let event::Event::Window(window_event) = event {
            match window_event {
                iced::window::Event::FileHovered(_) => {
                    return Some(Message::Uploader(uploader::Message::DragEntered));
                }
                iced::window::Event::FilesHoveredLeft => {
                    return Some(Message::Uploader(uploader::Message::DragLeft));
                }
                iced::window::Event::FileDropped(path) => {
                    return Some(Message::Uploader(uploader::Message::FileDropped(
                        path.clone(),
                    )));
                }
                _ => {}
            }
        }
    }

    None
}

fn quantity_key(key: &Key) -> Option<quantity::Message> {
    match key {
        Key::Named(Named::ArrowUp) => Some(quantity::Message::Increment),
        Key::Named(Named::ArrowDown) => Some(quantity::Message::Decrement),
        Key::Character(c) if c.as_str() == "+" || c.as_str() == "=" => {
            Some(quantity::Message::Increment)
        }
        Key::Character(c) if c.as_str() == "-" => Some(quantity::Message::Decrement),
        _ => None,
    }
}

/// Creates a periodic tick subscription for transient invalid flags and
/// notification auto-dismiss. Idle when neither needs it.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
