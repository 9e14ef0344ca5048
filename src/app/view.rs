// SPDX-License-Identifier: MPL-2.0
//! Top-level layout: header above the card browser, on the app backdrop.

use crate::app::message::Message;
use crate::i18n::fluent::I18n;
use crate::ui::browser;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub browser: &'a browser::State,
    pub colors: &'a ColorScheme,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = header(&ctx);

    let browser = browser::view(
        ctx.browser,
        browser::ViewEnv {
            i18n: ctx.i18n,
            colors: ctx.colors,
        },
    )
    .map(Message::Browser);

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .push(header)
        .push(browser);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::backdrop(ctx.colors))
        .into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let logo = icons::tinted(icons::sized(icons::cat(), sizing::ICON_MD), ctx.colors.brand);

    let title = Text::new(ctx.i18n.tr("window-title"))
        .size(typography::TITLE_LG)
        .color(ctx.colors.text_primary);

    let name_row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(logo)
        .push(title);

    let tagline = Text::new(ctx.i18n.tr("app-tagline"))
        .size(typography::BODY)
        .color(ctx.colors.text_secondary);

    Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(name_row)
        .push(tagline)
        .into()
}
