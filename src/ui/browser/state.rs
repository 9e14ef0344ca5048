// SPDX-License-Identifier: MPL-2.0
//! Tagged phase type for the browser.
//!
//! The phase carries everything the screen can show at a given moment, so
//! invalid combinations (an exit direction while loading, a spinner over a
//! displayed card) are unrepresentable.

use crate::api::CatCard;
use std::time::{Duration, Instant};

/// Delay between a response and the next fetch. Matches the exit animation
/// so the card is fully off-screen before the spinner appears.
pub const SWIPE_DELAY: Duration = Duration::from_millis(500);

/// Duration of the lateral exit travel and fade.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);

/// Duration of the enter fade/scale when a new card arrives.
pub const ENTER_ANIMATION: Duration = Duration::from_millis(250);

/// Lateral direction a dismissed card travels. Encodes the user's decision:
/// right for like, left for dislike. The decision is not recorded anywhere
/// else; it only parameterizes the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDirection {
    Left,
    Right,
}

impl ExitDirection {
    #[must_use]
    pub fn from_liked(liked: bool) -> Self {
        if liked {
            ExitDirection::Right
        } else {
            ExitDirection::Left
        }
    }

    /// Horizontal sign of the travel: -1.0 for left, 1.0 for right.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            ExitDirection::Left => -1.0,
            ExitDirection::Right => 1.0,
        }
    }
}

/// What the browser is doing right now.
#[derive(Debug, Clone)]
pub enum Phase {
    /// A fetch is outstanding. Entered on mount, on transition expiry, and
    /// on retry; left exactly once when the fetch settles.
    Loading { started_at: Instant },
    /// A card is on screen and the response buttons are live.
    Displaying { card: CatCard, shown_at: Instant },
    /// The user responded; the card is animating off-screen until the swipe
    /// delay elapses and the next fetch starts.
    Transitioning {
        card: CatCard,
        direction: ExitDirection,
        started_at: Instant,
    },
    /// The last fetch failed. Shows a localized message and a retry button.
    Failed {
        message_key: &'static str,
        detail: String,
    },
}

impl Phase {
    #[must_use]
    pub fn loading_now() -> Self {
        Phase::Loading {
            started_at: Instant::now(),
        }
    }

    /// Whether a fetch is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading { .. })
    }

    /// The card currently involved in rendering, if any.
    #[must_use]
    pub fn card(&self) -> Option<&CatCard> {
        match self {
            Phase::Displaying { card, .. } | Phase::Transitioning { card, .. } => Some(card),
            Phase::Loading { .. } | Phase::Failed { .. } => None,
        }
    }

    /// Exit direction, present only while transitioning.
    #[must_use]
    pub fn exit_direction(&self) -> Option<ExitDirection> {
        match self {
            Phase::Transitioning { direction, .. } => Some(*direction),
            _ => None,
        }
    }

    /// Enter animation progress in [0, 1] while displaying.
    #[must_use]
    pub fn enter_progress(&self) -> f32 {
        match self {
            Phase::Displaying { shown_at, .. } => {
                (shown_at.elapsed().as_secs_f32() / ENTER_ANIMATION.as_secs_f32()).min(1.0)
            }
            _ => 1.0,
        }
    }

    /// Exit animation progress in [0, 1] while transitioning.
    #[must_use]
    pub fn exit_progress(&self) -> f32 {
        match self {
            Phase::Transitioning { started_at, .. } => {
                (started_at.elapsed().as_secs_f32() / EXIT_ANIMATION.as_secs_f32()).min(1.0)
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image::Handle;

    fn test_card() -> CatCard {
        let pixels = vec![255, 255, 255, 255];
        CatCard {
            record: crate::api::CatRecord {
                id: None,
                url: "https://x/1.jpg".to_string(),
                width: Some(1),
                height: Some(1),
            },
            handle: Handle::from_rgba(1, 1, pixels),
        }
    }

    #[test]
    fn direction_maps_liked_to_right() {
        assert_eq!(ExitDirection::from_liked(true), ExitDirection::Right);
        assert_eq!(ExitDirection::from_liked(false), ExitDirection::Left);
    }

    #[test]
    fn direction_signs_are_opposite() {
        assert_eq!(ExitDirection::Right.sign(), 1.0);
        assert_eq!(ExitDirection::Left.sign(), -1.0);
    }

    #[test]
    fn loading_phase_has_no_card_and_no_direction() {
        let phase = Phase::loading_now();
        assert!(phase.is_loading());
        assert!(phase.card().is_none());
        assert!(phase.exit_direction().is_none());
    }

    #[test]
    fn displaying_phase_exposes_card() {
        let phase = Phase::Displaying {
            card: test_card(),
            shown_at: Instant::now(),
        };
        assert!(!phase.is_loading());
        assert_eq!(phase.card().map(|c| c.record.url.as_str()), Some("https://x/1.jpg"));
        assert!(phase.exit_direction().is_none());
    }

    #[test]
    fn transitioning_phase_exposes_direction() {
        let phase = Phase::Transitioning {
            card: test_card(),
            direction: ExitDirection::Right,
            started_at: Instant::now(),
        };
        assert_eq!(phase.exit_direction(), Some(ExitDirection::Right));
        assert!(phase.card().is_some());
    }

    #[test]
    fn exit_progress_saturates_at_one() {
        let phase = Phase::Transitioning {
            card: test_card(),
            direction: ExitDirection::Left,
            started_at: Instant::now() - Duration::from_secs(2),
        };
        assert_eq!(phase.exit_progress(), 1.0);
    }

    #[test]
    fn enter_progress_is_one_outside_displaying() {
        assert_eq!(Phase::loading_now().enter_progress(), 1.0);
    }
}
