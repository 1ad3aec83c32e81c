// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! A row of section buttons at the top of the window. The sections mirror
//! the pages of the web application the client fronts: home, auth, and the
//! car form.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Top-level sections reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Auth,
    CarForm,
}

impl Section {
    const ALL: [Section; 3] = [Section::Home, Section::Auth, Section::CarForm];

    fn label_key(self) -> &'static str {
        match self {
            Section::Home => "navbar-home",
            Section::Auth => "navbar-auth",
            Section::CarForm => "navbar-car-form",
        }
    }
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    SectionPressed(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenSection(Section),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::SectionPressed(section) => Event::OpenSection(section),
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Section,
}

/// Renders the navbar row.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::XS).align_y(Vertical::Center);

    row = row.push(
        Text::new(ctx.i18n.tr("app-title"))
            .size(typography::TITLE_SM),
    );
    row = row.push(Container::new(Text::new("")).width(Length::Fixed(spacing::LG)));

    for section in Section::ALL {
        let style = if section == ctx.active {
            button::primary
        } else {
            button::text
        };
        row = row.push(
            button(Text::new(ctx.i18n.tr(section.label_key())).size(typography::BODY))
                .on_press(Message::SectionPressed(section))
                .padding(spacing::XS)
                .style(style),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .into()
}
