// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen, stacks the booking and video overlays above it, and floats the
//! toast notifications on top.

use super::{App, Message, Screen};
use crate::ui::booking;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Toast;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Renders the current application view.
pub fn view(app: &App) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: &app.i18n,
        active: app.screen.section(),
    })
    .map(Message::Navbar);

    let content: Element<'_, Message> = match app.screen {
        Screen::Home => home_view(app),
        Screen::Auth => auth_view(app),
        Screen::CarForm => car_form_view(app),
    };

    let base: Element<'_, Message> = Column::new()
        .push(navbar_view)
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::LG),
        )
        .into();

    let mut stack = Stack::new().push(base);

    if app.video_modal.is_open() {
        stack = stack.push(app.video_modal.overlay_view(&app.i18n).map(Message::VideoModal));
    }
    if app.booking.is_open() {
        stack = stack.push(app.booking.overlay_view(&app.i18n).map(Message::Booking));
    }

    stack = stack.push(Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification));

    stack.into()
}

/// Home: hero video with the promo modal, and the booking entry points the
/// server page carries as its primary and side actions.
fn home_view(app: &App) -> Element<'_, Message> {
    let hero = app.video_modal.hero_view(&app.i18n).map(Message::VideoModal);

    let book_service = button(
        Text::new(app.i18n.tr("home-book-service")).size(typography::BODY),
    )
    .on_press(Message::Booking(booking::Message::Open(
        app.featured_service_context(),
    )))
    .padding(spacing::XS)
    .style(button::primary);

    let book_car = button(Text::new(app.i18n.tr("home-book-car")).size(typography::BODY))
        .on_press(Message::Booking(booking::Message::Open(
            app.featured_car_context(),
        )))
        .padding(spacing::XS)
        .style(button::secondary);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(book_service)
        .push(book_car);

    Column::new()
        .spacing(spacing::LG)
        .max_width(720.0)
        .push(Text::new(app.i18n.tr("home-headline")).size(typography::TITLE_LG))
        .push(hero)
        .push(actions)
        .into()
}

fn auth_view(app: &App) -> Element<'_, Message> {
    Container::new(app.auth.view(&app.i18n).map(Message::AuthTabs))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn car_form_view(app: &App) -> Element<'_, Message> {
    let uploader = app.uploader.view(&app.i18n).map(Message::Uploader);

    let quantity_row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(app.i18n.tr("car-form-seats")).size(typography::BODY))
        .push(app.quantity.view(&app.i18n).map(Message::Quantity));

    Column::new()
        .spacing(spacing::LG)
        .max_width(520.0)
        .push(Text::new(app.i18n.tr("car-form-title")).size(typography::TITLE_LG))
        .push(uploader)
        .push(quantity_row)
        .into()
}
