// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens and widgets.
//!
//! The `App` struct wires together the widgets (auth tabs, video modal,
//! booking wizard, uploader, quantity stepper), localization, and persisted
//! state, and translates widget effects into side effects like location
//! rewrites, the order POST, or config persistence. Policy decisions
//! (location restore order, session cookie sourcing, overlay precedence)
//! live close to the main update loop so user-facing behavior is easy to
//! audit.

mod message;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::location::Location;
use crate::orders::{BookingContext, ObjectType};
use crate::session::SessionCookies;
use crate::ui::auth_tabs::{self, TAB_PARAM};
use crate::ui::booking;
use crate::ui::notifications;
use crate::ui::quantity;
use crate::ui::uploader;
use crate::ui::video_modal;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 520;

/// Order-creation endpoint, as the server templates carry it in their
/// `data-action` attribute.
const ORDER_ACTION_PATH: &str = "/orders/create/";

/// Orders list page, as carried in `data-orders-list-url`.
const ORDERS_LIST_PATH: &str = "/orders/";

/// Root Iced application state that bridges the widgets, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    data_dir_override: Option<PathBuf>,
    screen: Screen,
    /// The current location, restorable across runs and shareable via
    /// `--url`.
    location: Location,
    auth: auth_tabs::State,
    video_modal: video_modal::State,
    booking: booking::State,
    uploader: uploader::State,
    quantity: quantity::State,
    /// Session cookies established out-of-band; source of the CSRF token.
    session: SessionCookies,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Persisted application state (last location, last picker directory).
    app_state: persisted_state::AppState,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("location", &self.location.to_string())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            data_dir_override: None,
            screen: Screen::Home,
            location: Location::default(),
            auth: auth_tabs::State::default(),
            video_modal: video_modal::State::default(),
            booking: booking::State::default(),
            uploader: uploader::State::default(),
            quantity: quantity::State::new(1.0, Some(1.0), Some(9.0), Some(1.0)),
            session: SessionCookies::default(),
            notifications: notifications::Manager::new(),
            app_state: persisted_state::AppState::default(),
        }
    }
}

impl App {
    /// Initializes application state from `Flags`: configuration, locale,
    /// session cookies, and the restored or shared location.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_override = flags.config_dir.clone().map(PathBuf::from);
        let data_override = flags.data_dir.clone().map(PathBuf::from);

        let (config, config_warning) = config::load_with_override(config_override);
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let mut app = App {
            i18n,
            session: SessionCookies::new(config.server.cookies.clone().unwrap_or_default()),
            config,
            data_dir_override: data_override,
            ..Self::default()
        };

        let (app_state, state_warning) =
            persisted_state::AppState::load_from(app.data_dir_override.clone());
        app.app_state = app_state;

        // Location restore order: shared link, persisted location, root.
        let location = flags
            .url
            .as_deref()
            .or(app.app_state.last_location.as_deref())
            .map(Location::parse)
            .unwrap_or_default();
        app.screen = Screen::for_location(&location).unwrap_or(Screen::Home);
        app.location = location;

        // The auth panel resolves its initial tab from the location, then
        // mirrors it back into the query so the location is shareable.
        let initial = auth_tabs::initial_tab(&app.location, false);
        app.auth = auth_tabs::State::new(initial);
        if app.screen == Screen::Auth {
            app.location.set_param(TAB_PARAM, initial.as_str());
        }

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.config.general.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_needed =
            self.notifications.has_notifications() || self.booking.has_transient_flags();
        Subscription::batch([
            subscription::create_event_subscription(self.screen),
            subscription::create_tick_subscription(tick_needed),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Booking context of the featured airport service on the home screen,
    /// mirroring the data attributes of the server-rendered hero card.
    fn featured_service_context(&self) -> BookingContext {
        BookingContext {
            object_type: ObjectType::Service,
            object_id: 1,
            action: ORDER_ACTION_PATH.to_string(),
            orders_list_url: Some(ORDERS_LIST_PATH.to_string()),
        }
    }

    /// Booking context of the featured rental car side card.
    fn featured_car_context(&self) -> BookingContext {
        BookingContext {
            object_type: ObjectType::Car,
            object_id: 1,
            action: ORDER_ACTION_PATH.to_string(),
            orders_list_url: Some(ORDERS_LIST_PATH.to_string()),
        }
    }
}

/// Remembers the current location so the next launch restores it.
pub(crate) fn persist_location(app: &mut App) {
    app.app_state.last_location = Some(app.location.to_string());
    if let Some(key) = app.app_state.save_to(app.data_dir_override.clone()) {
        app.notifications
            .push(notifications::Notification::warning(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::auth_tabs::Tab;

    #[test]
    fn default_app_starts_on_home() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.location.path(), "/");
    }

    #[test]
    fn title_is_localized() {
        let app = App::default();
        assert!(!app.title().starts_with("MISSING:"));
    }

    #[test]
    fn featured_contexts_point_at_the_order_endpoint() {
        let app = App::default();
        assert_eq!(app.featured_service_context().action, "/orders/create/");
        assert_eq!(app.featured_car_context().action, "/orders/create/");
        assert!(app.featured_service_context().is_complete());
    }

    #[test]
    fn auth_tab_restores_from_location() {
        let mut app = App::default();
        app.location = Location::parse("/accounts/auth/?tab=register");
        app.screen = Screen::Auth;
        let initial = auth_tabs::initial_tab(&app.location, false);
        app.auth = auth_tabs::State::new(initial);

        assert_eq!(app.auth.active(), Tab::Register);
    }
}
