// SPDX-License-Identifier: MPL-2.0
//! Swipe-browser component: the fetch/display/respond loop.
//!
//! The component owns one [`Phase`] value and a spinner angle, and follows
//! the state machine
//!
//! ```text
//! Loading -> Displaying     (fetch ok)
//! Loading -> Failed         (fetch error)
//! Failed  -> Loading        (retry)
//! Displaying -> Transitioning  (respond)
//! Transitioning -> Loading  (swipe delay elapsed)
//! ```
//!
//! It never issues network requests itself: leaving for `Loading` is
//! signalled through [`Effect::FetchNext`] and the app's update loop turns
//! that into a `Task`. Since a fetch effect is emitted only on those three
//! edges and each first puts the machine in `Loading`, at most one fetch is
//! outstanding at any time.

pub mod state;
mod view;

pub use state::{ExitDirection, Phase, ENTER_ANIMATION, EXIT_ANIMATION, SWIPE_DELAY};
pub use view::{view, ViewEnv};

use crate::api::CatCard;
use crate::error::ApiError;
use std::time::Instant;

/// Spinner advance per animation tick, in radians.
const SPINNER_SPEED: f32 = 0.12;

/// Browser component state.
#[derive(Debug, Clone)]
pub struct State {
    phase: Phase,
    spinner_rotation: f32,
}

/// Messages consumed by the browser.
#[derive(Debug, Clone)]
pub enum Message {
    /// The outstanding fetch settled, successfully or not.
    FetchSettled(Result<CatCard, ApiError>),
    /// The user responded to the displayed card.
    Respond { liked: bool },
    /// Retry after a failed fetch.
    Retry,
    /// Animation tick while loading, entering, or transitioning.
    Tick(Instant),
}

/// Effects produced by the browser for the app to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// A new fetch should be issued.
    FetchNext,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Fresh browser in `Loading`; the app issues the mount fetch alongside.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::loading_now(),
            spinner_rotation: 0.0,
        }
    }

    /// Builds a browser in a specific phase. Used by tests and previews.
    #[must_use]
    pub fn from_phase(phase: Phase) -> Self {
        Self {
            phase,
            spinner_rotation: 0.0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Whether the tick subscription needs to run.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        match &self.phase {
            Phase::Loading { .. } | Phase::Transitioning { .. } => true,
            Phase::Displaying { shown_at, .. } => shown_at.elapsed() < ENTER_ANIMATION,
            Phase::Failed { .. } => false,
        }
    }

    /// Handle a browser message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::FetchSettled(result) => self.settle_fetch(result),
            Message::Respond { liked } => self.respond(liked),
            Message::Retry => self.retry(),
            Message::Tick(_now) => self.tick(),
        }
    }

    fn settle_fetch(&mut self, result: Result<CatCard, ApiError>) -> Effect {
        // A settle can only arrive while loading; anything else is a stale
        // completion and is dropped.
        if !self.phase.is_loading() {
            return Effect::None;
        }

        self.spinner_rotation = 0.0;
        self.phase = match result {
            Ok(card) => Phase::Displaying {
                card,
                shown_at: Instant::now(),
            },
            Err(err) => Phase::Failed {
                message_key: err.i18n_key(),
                detail: err.to_string(),
            },
        };
        Effect::None
    }

    fn respond(&mut self, liked: bool) -> Effect {
        // Responses are only live while a card is displayed; the buttons are
        // disabled in every other phase, so this also rules out overlapping
        // transitions.
        if !matches!(self.phase, Phase::Displaying { .. }) {
            return Effect::None;
        }

        if let Phase::Displaying { card, .. } =
            std::mem::replace(&mut self.phase, Phase::loading_now())
        {
            self.phase = Phase::Transitioning {
                card,
                direction: ExitDirection::from_liked(liked),
                started_at: Instant::now(),
            };
        }
        Effect::None
    }

    fn retry(&mut self) -> Effect {
        if !matches!(self.phase, Phase::Failed { .. }) {
            return Effect::None;
        }
        self.phase = Phase::loading_now();
        Effect::FetchNext
    }

    fn tick(&mut self) -> Effect {
        match &self.phase {
            Phase::Loading { .. } => {
                self.spinner_rotation += SPINNER_SPEED;
                if self.spinner_rotation > std::f32::consts::TAU {
                    self.spinner_rotation -= std::f32::consts::TAU;
                }
                Effect::None
            }
            Phase::Transitioning { started_at, .. } => {
                if started_at.elapsed() >= SWIPE_DELAY {
                    self.phase = Phase::loading_now();
                    Effect::FetchNext
                } else {
                    Effect::None
                }
            }
            Phase::Displaying { .. } | Phase::Failed { .. } => Effect::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image::Handle;
    use std::time::Duration;

    fn card(url: &str) -> CatCard {
        CatCard {
            record: crate::api::CatRecord {
                id: None,
                url: url.to_string(),
                width: None,
                height: None,
            },
            handle: Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
        }
    }

    #[test]
    fn starts_loading() {
        let state = State::new();
        assert!(state.is_loading());
        assert!(state.phase().card().is_none());
    }

    #[test]
    fn fetch_ok_moves_to_displaying() {
        let mut state = State::new();
        let effect = state.handle(Message::FetchSettled(Ok(card("https://x/1.jpg"))));
        assert_eq!(effect, Effect::None);
        assert!(!state.is_loading());
        assert_eq!(
            state.phase().card().map(|c| c.record.url.as_str()),
            Some("https://x/1.jpg")
        );
    }

    #[test]
    fn fetch_err_moves_to_failed_without_panic() {
        let mut state = State::new();
        state.handle(Message::FetchSettled(Err(ApiError::Network(
            "unreachable".into(),
        ))));
        assert!(!state.is_loading());
        assert!(state.phase().card().is_none());
        assert!(matches!(
            state.phase(),
            Phase::Failed { message_key, .. } if *message_key == "error-fetch-network"
        ));
    }

    #[test]
    fn stale_settle_outside_loading_is_dropped() {
        let mut state = State::new();
        state.handle(Message::FetchSettled(Ok(card("https://x/1.jpg"))));
        state.handle(Message::FetchSettled(Ok(card("https://x/2.jpg"))));
        assert_eq!(
            state.phase().card().map(|c| c.record.url.as_str()),
            Some("https://x/1.jpg")
        );
    }

    #[test]
    fn respond_true_always_exits_right() {
        let mut state = State::new();
        state.handle(Message::FetchSettled(Ok(card("https://x/1.jpg"))));
        state.handle(Message::Respond { liked: true });
        assert_eq!(state.phase().exit_direction(), Some(ExitDirection::Right));
    }

    #[test]
    fn respond_false_always_exits_left() {
        let mut state = State::new();
        state.handle(Message::FetchSettled(Ok(card("https://x/1.jpg"))));
        state.handle(Message::Respond { liked: false });
        assert_eq!(state.phase().exit_direction(), Some(ExitDirection::Left));
    }

    #[test]
    fn respond_is_ignored_while_loading() {
        let mut state = State::new();
        state.handle(Message::Respond { liked: true });
        assert!(state.is_loading());
        assert!(state.phase().exit_direction().is_none());
    }

    #[test]
    fn direction_exists_only_between_respond_and_reset() {
        let mut state = State::new();
        assert!(state.phase().exit_direction().is_none());

        state.handle(Message::FetchSettled(Ok(card("https://x/1.jpg"))));
        assert!(state.phase().exit_direction().is_none());

        state.handle(Message::Respond { liked: true });
        assert!(state.phase().exit_direction().is_some());

        // Force the delay to elapse, then tick.
        state.phase = Phase::Transitioning {
            card: card("https://x/1.jpg"),
            direction: ExitDirection::Right,
            started_at: Instant::now() - SWIPE_DELAY - Duration::from_millis(1),
        };
        let effect = state.handle(Message::Tick(Instant::now()));
        assert_eq!(effect, Effect::FetchNext);
        assert!(state.phase().exit_direction().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn tick_before_delay_does_not_fetch() {
        let mut state = State::new();
        state.handle(Message::FetchSettled(Ok(card("https://x/1.jpg"))));
        state.handle(Message::Respond { liked: false });
        let effect = state.handle(Message::Tick(Instant::now()));
        assert_eq!(effect, Effect::None);
        assert!(state.phase().exit_direction().is_some());
    }

    #[test]
    fn retry_from_failed_requests_fetch() {
        let mut state = State::new();
        state.handle(Message::FetchSettled(Err(ApiError::EmptyResponse)));
        let effect = state.handle(Message::Retry);
        assert_eq!(effect, Effect::FetchNext);
        assert!(state.is_loading());
    }

    #[test]
    fn retry_outside_failed_is_ignored() {
        let mut state = State::new();
        state.handle(Message::FetchSettled(Ok(card("https://x/1.jpg"))));
        let effect = state.handle(Message::Retry);
        assert_eq!(effect, Effect::None);
        assert!(!state.is_loading());
    }

    #[test]
    fn spinner_advances_only_while_loading() {
        let mut state = State::new();
        state.handle(Message::Tick(Instant::now()));
        assert!(state.spinner_rotation() > 0.0);

        state.handle(Message::FetchSettled(Ok(card("https://x/1.jpg"))));
        assert_eq!(state.spinner_rotation(), 0.0);

        state.handle(Message::Tick(Instant::now()));
        assert_eq!(state.spinner_rotation(), 0.0);
    }

    #[test]
    fn failed_phase_does_not_animate() {
        let mut state = State::new();
        state.handle(Message::FetchSettled(Err(ApiError::EmptyResponse)));
        assert!(!state.is_animating());
    }
}
