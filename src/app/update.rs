// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function and the specialized
//! handlers that execute widget effects: location rewrites, the order POST,
//! the native file picker, and notifications.

use super::{persist_location, App, Message, Screen};
use crate::location::Location;
use crate::orders;
use crate::session::CsrfTokenProvider;
use crate::ui::auth_tabs::{self, TAB_PARAM};
use crate::ui::booking;
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use crate::ui::uploader;
use iced::widget::operation;
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;

/// Routes a top-level message to its widget and executes the effects.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(msg) => {
            let navbar::Event::OpenSection(section) = navbar::update(msg);
            open_screen(app, Screen::for_section(section));
            Task::none()
        }
        Message::AuthTabs(msg) => handle_auth_effect(app, msg),
        Message::VideoModal(msg) => {
            app.video_modal.handle(msg);
            Task::none()
        }
        Message::Booking(msg) => {
            let effect = app.booking.handle(msg, Instant::now());
            run_booking_effect(app, effect)
        }
        Message::Uploader(msg) => handle_uploader_effect(app, msg),
        Message::Quantity(msg) => {
            // The stepper's change notification has no dependent UI yet;
            // the committed value is read from the form on submission.
            let _ = app.quantity.handle(msg);
            Task::none()
        }
        Message::Notification(msg) => {
            app.notifications.handle_message(&msg);
            Task::none()
        }
        Message::OrderSubmitted(result) => {
            let effect = app.booking.handle_outcome(result);
            run_booking_effect(app, effect)
        }
        Message::EscapePressed => {
            // Topmost overlay wins; both close on Escape.
            if app.booking.is_open() {
                app.booking.close();
            } else {
                app.video_modal.close();
            }
            Task::none()
        }
        Message::PrimaryActionActivated => {
            if app.screen == Screen::Home && !app.booking.is_open() && !app.video_modal.is_open() {
                let context = app.featured_service_context();
                app.booking.open(context);
            }
            Task::none()
        }
        Message::Tick(now) => {
            let _ = app.booking.handle(booking::Message::Tick(now), now);
            app.notifications.tick();
            Task::none()
        }
    }
}

/// Switches screens the way the web app switches pages: the location is
/// replaced with the screen's canonical path. The auth screen keeps its
/// active tab in the query.
pub(super) fn open_screen(app: &mut App, screen: Screen) {
    app.screen = screen;
    let mut location = Location::parse(screen.path());
    if screen == Screen::Auth {
        location.set_param(TAB_PARAM, app.auth.active().as_str());
    }
    app.location = location;
    persist_location(app);
}

fn handle_auth_effect(app: &mut App, msg: auth_tabs::Message) -> Task<Message> {
    match app.auth.handle(msg) {
        auth_tabs::Effect::None => Task::none(),
        auth_tabs::Effect::TabChanged(tab) => {
            // History replacement: rewrite the parameter, no navigation.
            app.location.set_param(TAB_PARAM, tab.as_str());
            persist_location(app);
            Task::none()
        }
        auth_tabs::Effect::FocusInput(id) => operation::focus(id),
    }
}

fn run_booking_effect(app: &mut App, effect: booking::Effect) -> Task<Message> {
    match effect {
        booking::Effect::None => Task::none(),
        booking::Effect::FocusWhen => {
            operation::focus(booking::WHEN_INPUT_ID)
        }
        booking::Effect::Notify(notification) => {
            app.notifications.push(notification);
            Task::none()
        }
        booking::Effect::Navigate(url) => {
            navigate(app, &url);
            Task::none()
        }
        booking::Effect::Submit { action, payload } => {
            let url = resolve_action(app.config.base_url(), &action);
            let csrf_token = app.session.csrf_token().unwrap_or_default();
            let cookies = app.session.header().to_string();
            Task::perform(
                orders::submit(url, payload, csrf_token, cookies),
                Message::OrderSubmitted,
            )
        }
    }
}

fn handle_uploader_effect(app: &mut App, msg: uploader::Message) -> Task<Message> {
    match app.uploader.handle(msg) {
        uploader::Effect::None => Task::none(),
        uploader::Effect::OpenPicker => {
            let initial_dir = app.app_state.last_open_directory.clone();
            Task::perform(pick_image(initial_dir), |result| {
                Message::Uploader(uploader::Message::PickerResult(result))
            })
        }
        uploader::Effect::SelectionChanged => {
            if let Some(path) = app.uploader.selected() {
                app.app_state.set_last_open_directory_from_file(path);
                if let Some(key) = app.app_state.save_to(app.data_dir_override.clone()) {
                    app.notifications.push(Notification::warning(key));
                }
            }
            Task::none()
        }
    }
}

/// Follows a server-provided redirect: the location is assigned (the
/// desktop analogue of `window.location.href`), the matching screen is
/// shown when one claims the path, and otherwise the destination is
/// surfaced as an informational toast.
pub(super) fn navigate(app: &mut App, url: &str) {
    app.location = Location::parse(url);
    match Screen::for_location(&app.location) {
        Some(screen) => app.screen = screen,
        None => app.notifications.push(
            Notification::info("booking-redirect").with_arg("location", app.location.to_string()),
        ),
    }
    persist_location(app);
}

/// Resolves a context-supplied action against the configured server:
/// absolute URLs pass through, server-relative paths are joined.
pub(super) fn resolve_action(base_url: &str, action: &str) -> String {
    if action.starts_with("http://") || action.starts_with("https://") {
        action.to_string()
    } else {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            action.trim_start_matches('/')
        )
    }
}

async fn pick_image(initial_dir: Option<PathBuf>) -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"]);
    if let Some(dir) = initial_dir {
        dialog = dialog.set_directory(dir);
    }
    dialog
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrderError;
    use crate::orders::SubmitOutcome;
    use crate::ui::auth_tabs::Tab;
    use crate::ui::video_modal;
    use tempfile::tempdir;

    fn test_app() -> (App, tempfile::TempDir) {
        let dir = tempdir().expect("tempdir");
        let mut app = App::default();
        app.data_dir_override = Some(dir.path().to_path_buf());
        (app, dir)
    }

    #[test]
    fn resolve_action_joins_relative_paths() {
        assert_eq!(
            resolve_action("http://localhost:8000", "/orders/create/"),
            "http://localhost:8000/orders/create/"
        );
        assert_eq!(
            resolve_action("https://sky.example/", "orders/create/"),
            "https://sky.example/orders/create/"
        );
    }

    #[test]
    fn resolve_action_passes_absolute_urls_through() {
        assert_eq!(
            resolve_action("http://localhost:8000", "https://other.example/create/"),
            "https://other.example/create/"
        );
    }

    #[test]
    fn tab_switch_rewrites_location_param() {
        let (mut app, _dir) = test_app();
        open_screen(&mut app, Screen::Auth);
        assert_eq!(app.location.param(TAB_PARAM), Some("login"));

        let _ = update(
            &mut app,
            Message::AuthTabs(auth_tabs::Message::TabPressed(Tab::Register)),
        );

        assert_eq!(app.location.param(TAB_PARAM), Some("register"));
        assert_eq!(app.location.path(), Screen::Auth.path());
        // No navigation happened.
        assert_eq!(app.screen, Screen::Auth);
    }

    #[test]
    fn successful_order_with_redirect_navigates() {
        let (mut app, _dir) = test_app();
        let _ = update(
            &mut app,
            Message::OrderSubmitted(Ok(SubmitOutcome::Created {
                redirect: Some("/orders/5/".to_string()),
                order_id: Some(5),
            })),
        );

        assert_eq!(app.location.path(), "/orders/5/");
        assert!(!app.booking.is_open());
        // The destination has no client screen, so it surfaces as a toast.
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn rejected_order_keeps_wizard_open_and_notifies() {
        let (mut app, _dir) = test_app();
        app.booking.open(crate::orders::BookingContext {
            object_type: crate::orders::ObjectType::Service,
            object_id: 1,
            action: "/orders/create/".to_string(),
            orders_list_url: None,
        });

        let _ = update(
            &mut app,
            Message::OrderSubmitted(Ok(SubmitOutcome::Rejected {
                message: Some("Slot full".to_string()),
            })),
        );

        assert!(app.booking.is_open());
        let toast = app.notifications.visible().next().expect("one toast");
        assert_eq!(toast.message_key(), "booking-error-server");
    }

    #[test]
    fn network_failure_notifies_generically() {
        let (mut app, _dir) = test_app();
        let _ = update(
            &mut app,
            Message::OrderSubmitted(Err(OrderError::Network("refused".into()))),
        );
        let toast = app.notifications.visible().next().expect("one toast");
        assert_eq!(toast.message_key(), "booking-error-network");
    }

    #[test]
    fn escape_closes_booking_before_video_modal() {
        let (mut app, _dir) = test_app();
        app.video_modal.handle(video_modal::Message::OpenPressed);
        app.booking.open(crate::orders::BookingContext {
            object_type: crate::orders::ObjectType::Car,
            object_id: 2,
            action: "/orders/create/".to_string(),
            orders_list_url: None,
        });

        let _ = update(&mut app, Message::EscapePressed);
        assert!(!app.booking.is_open());
        assert!(app.video_modal.is_open());

        let _ = update(&mut app, Message::EscapePressed);
        assert!(!app.video_modal.is_open());
    }

    #[test]
    fn open_screen_persists_location() {
        let (mut app, dir) = test_app();
        open_screen(&mut app, Screen::CarForm);

        let (state, _) =
            super::super::persisted_state::AppState::load_from(Some(dir.path().to_path_buf()));
        assert_eq!(state.last_location.as_deref(), Some("/cars/manage/"));
    }

    #[test]
    fn uploader_selection_remembers_directory() {
        let (mut app, _dir) = test_app();
        let _ = update(
            &mut app,
            Message::Uploader(uploader::Message::PickerResult(Some(PathBuf::from(
                "/home/user/pictures/car.png",
            )))),
        );
        assert_eq!(
            app.app_state.last_open_directory,
            Some(PathBuf::from("/home/user/pictures"))
        );
    }
}
