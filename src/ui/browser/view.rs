// SPDX-License-Identifier: MPL-2.0
//! Card stage and action buttons.
//!
//! The stage is a fixed, clipped container. Enter is an opacity/size ease on
//! the arriving image; exit slides the card laterally out of the clipped
//! stage while fading it. Offsets are realized with spacers inside the
//! stage: for a rightward exit the spacer grows on the left, for a leftward
//! exit it grows on the right with the oversized row end-aligned, so the
//! overflow is always on the dismissing side and gets clipped.

use super::{Message, Phase, State};
use crate::api::CatCard;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, Column, Container, Image, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Context required to render the browser.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
}

/// Renders the card stage with the action row underneath.
pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let stage = stage(state, &env);
    let actions = action_row(state, env.colors);

    Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .push(stage)
        .push(actions)
        .into()
}

fn stage<'a>(state: &'a State, env: &ViewEnv<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match state.phase() {
        Phase::Loading { .. } => loading_view(state, env),
        Phase::Displaying { card, .. } => entering_card(card, state.phase().enter_progress()),
        Phase::Transitioning {
            card, direction, ..
        } => exiting_card(card, *direction, state.phase().exit_progress()),
        Phase::Failed {
            message_key,
            detail,
        } => failed_view(env, message_key, detail),
    };

    Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .clip(true)
        .style(styles::container::card(env.colors))
        .into()
}

fn loading_view<'a>(state: &State, env: &ViewEnv<'a>) -> Element<'a, Message> {
    let spinner =
        AnimatedSpinner::new(env.colors.brand, state.spinner_rotation(), sizing::ICON_XL)
            .into_element();

    let caption = Text::new(env.i18n.tr("loading-cat"))
        .size(typography::CAPTION)
        .color(env.colors.text_secondary);

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(caption)
        .into()
}

/// Arriving card: fade and grow from 90% to full size, centered.
fn entering_card(card: &CatCard, progress: f32) -> Element<'_, Message> {
    let eased = ease_out(progress);
    let scale = 0.9 + 0.1 * eased;

    Image::new(card.handle.clone())
        .width(Length::Fixed(sizing::CARD_WIDTH * scale))
        .height(Length::Fixed(sizing::CARD_HEIGHT * scale))
        .content_fit(ContentFit::Cover)
        .opacity(eased)
        .into()
}

/// Dismissed card: full-size image sliding out laterally while fading.
fn exiting_card(
    card: &CatCard,
    direction: super::ExitDirection,
    progress: f32,
) -> Element<'_, Message> {
    let eased = ease_out(progress);
    let offset = sizing::EXIT_TRAVEL * eased;

    let image = Image::new(card.handle.clone())
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .content_fit(ContentFit::Cover)
        .opacity(1.0 - eased);

    let (row, align) = match direction {
        super::ExitDirection::Right => (
            Row::new()
                .push(Space::new().width(Length::Fixed(offset)))
                .push(image),
            alignment::Horizontal::Left,
        ),
        super::ExitDirection::Left => (
            Row::new()
                .push(image)
                .push(Space::new().width(Length::Fixed(offset))),
            alignment::Horizontal::Right,
        ),
    };

    Container::new(row)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .align_x(align)
        .clip(true)
        .into()
}

fn failed_view<'a>(
    env: &ViewEnv<'a>,
    message_key: &'a str,
    detail: &'a str,
) -> Element<'a, Message> {
    let icon = icons::tinted(icons::sized(icons::cat(), sizing::ICON_XL), env.colors.error);

    let message = Text::new(env.i18n.tr(message_key))
        .size(typography::BODY)
        .color(env.colors.text_primary)
        .align_x(alignment::Horizontal::Center);

    let details = Text::new(detail)
        .size(typography::CAPTION)
        .color(env.colors.text_secondary)
        .align_x(alignment::Horizontal::Center);

    let retry = button(Text::new(env.i18n.tr("action-retry")))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::Retry);

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(message)
        .push(details)
        .push(retry)
        .into()
}

/// Like/dislike disc buttons. Live only while a card is displayed, which is
/// what keeps a second response unreachable during a transition.
fn action_row<'a>(state: &State, colors: &ColorScheme) -> Element<'a, Message> {
    let responsive = matches!(state.phase(), Phase::Displaying { .. });

    let dislike = action_button(
        icons::cross(),
        colors.dislike,
        responsive.then_some(Message::Respond { liked: false }),
    );
    let like = action_button(
        icons::heart(),
        colors.like,
        responsive.then_some(Message::Respond { liked: true }),
    );

    Row::new()
        .spacing(spacing::LG)
        .push(dislike)
        .push(like)
        .into()
}

fn action_button<'a>(
    icon: iced::widget::svg::Svg<'a>,
    accent: iced::Color,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let icon = icons::tinted(icons::sized(icon, sizing::ICON_LG), accent);

    let content = Container::new(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(content)
        .width(Length::Fixed(sizing::ACTION_BUTTON))
        .height(Length::Fixed(sizing::ACTION_BUTTON))
        .style(styles::button::action(accent))
        .on_press_maybe(on_press)
        .into()
}

/// Cubic ease-out.
fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_hits_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert!((ease_out(1.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn ease_out_clamps_out_of_range_input() {
        assert_eq!(ease_out(-0.5), 0.0);
        assert!((ease_out(2.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn ease_out_is_monotonic() {
        let mut last = 0.0;
        for i in 1..=10 {
            let value = ease_out(i as f32 / 10.0);
            assert!(value >= last);
            last = value;
        }
    }
}
