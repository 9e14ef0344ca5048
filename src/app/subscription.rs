// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use crate::app::message::Message;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Roughly 60 frames per second.
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Animation clock, alive only while the browser has something in motion
/// (spinner, enter or exit animation, or a pending swipe transition). When
/// the component settles, the subscription is dropped and the timer dies
/// with it, so a torn-down transition can never fire a late fetch.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Keyboard shortcuts. The only binding is Ctrl/Cmd+D, which exports the
/// diagnostics buffer.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Keyboard(keyboard::Event::KeyPressed {
            ref key, modifiers, ..
        }) = event
        {
            if is_export_shortcut(key, modifiers) {
                return Some(Message::ExportDiagnostics);
            }
        }
        None
    })
}

fn is_export_shortcut(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> bool {
    matches!(key, keyboard::Key::Character(c) if c.as_str() == "d")
        && modifiers.command()
        && !modifiers.alt()
        && !modifiers.shift()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_interval_is_frame_paced() {
        assert!(ANIMATION_TICK <= Duration::from_millis(17));
        assert!(ANIMATION_TICK >= Duration::from_millis(8));
    }

    #[test]
    fn export_shortcut_requires_command_modifier() {
        let key = keyboard::Key::Character("d".into());
        assert!(is_export_shortcut(&key, keyboard::Modifiers::COMMAND));
        assert!(!is_export_shortcut(&key, keyboard::Modifiers::empty()));
        assert!(!is_export_shortcut(
            &key,
            keyboard::Modifiers::COMMAND | keyboard::Modifiers::SHIFT
        ));
    }

    #[test]
    fn export_shortcut_ignores_other_keys() {
        let key = keyboard::Key::Character("x".into());
        assert!(!is_export_shortcut(&key, keyboard::Modifiers::COMMAND));
        assert!(!is_export_shortcut(
            &keyboard::Key::Named(keyboard::key::Named::Enter),
            keyboard::Modifiers::COMMAND
        ));
    }
}
