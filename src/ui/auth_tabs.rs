// SPDX-License-Identifier: MPL-2.0
//! Login/register tab switcher for the auth screen.
//!
//! Exactly one of the two panels is visible at a time; the active tab is
//! mirrored into the `tab` query parameter of the application location so a
//! restored or shared location lands on the same panel. Password inputs
//! carry a visibility toggle that swaps masking and returns focus to the
//! input.

use crate::i18n::fluent::I18n;
use crate::location::Location;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::icons;
use iced::widget::{button, container, text_input, Button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Name of the query parameter mirroring the active tab.
pub const TAB_PARAM: &str = "tab";

/// The two auth panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Login,
    Register,
}

impl Tab {
    /// Parses a query-parameter value; anything but the two known names is
    /// rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "login" => Some(Tab::Login),
            "register" => Some(Tab::Register),
            _ => None,
        }
    }

    /// Wire name used in the query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Login => "login",
            Tab::Register => "register",
        }
    }
}

/// Resolves the tab to show on entry: a valid `tab` parameter wins, then
/// whichever panel is already visible, then login.
pub fn initial_tab(location: &Location, register_visible: bool) -> Tab {
    if let Some(tab) = location.param(TAB_PARAM).and_then(Tab::parse) {
        return tab;
    }
    if register_visible {
        Tab::Register
    } else {
        Tab::Login
    }
}

/// A password input that owns a visibility toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordSlot {
    LoginPassword,
    RegisterPassword,
    RegisterConfirm,
}

impl PasswordSlot {
    /// Stable widget id, used to return focus to the input after a toggle.
    pub fn input_id(self) -> &'static str {
        match self {
            PasswordSlot::LoginPassword => "auth-login-password",
            PasswordSlot::RegisterPassword => "auth-register-password",
            PasswordSlot::RegisterConfirm => "auth-register-confirm",
        }
    }
}

/// Text fields across both panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    LoginEmail,
    LoginPassword,
    RegisterEmail,
    RegisterPassword,
    RegisterConfirm,
}

/// Tab switcher state.
#[derive(Debug, Clone)]
pub struct State {
    active: Tab,
    login_email: String,
    login_password: String,
    register_email: String,
    register_password: String,
    register_confirm: String,
    login_password_masked: bool,
    register_password_masked: bool,
    register_confirm_masked: bool,
}

/// Messages for the tab switcher.
#[derive(Debug, Clone)]
pub enum Message {
    /// A tab button was pressed.
    TabPressed(Tab),
    /// A switch link inside a panel was followed ("already registered?").
    SwitchLink(Tab),
    /// A text field changed.
    FieldChanged(TextField, String),
    /// A password visibility toggle was pressed.
    ToggleVisibility(PasswordSlot),
}

/// Effects produced by the tab switcher.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// The active tab changed; the location's `tab` parameter should be
    /// rewritten (no navigation).
    TabChanged(Tab),
    /// Focus should return to the given input.
    FocusInput(&'static str),
}

impl Default for State {
    fn default() -> Self {
        Self::new(Tab::Login)
    }
}

impl State {
    /// Creates the switcher with the given initial tab.
    #[must_use]
    pub fn new(initial: Tab) -> Self {
        Self {
            active: initial,
            login_email: String::new(),
            login_password: String::new(),
            register_email: String::new(),
            register_password: String::new(),
            register_confirm: String::new(),
            login_password_masked: true,
            register_password_masked: true,
            register_confirm_masked: true,
        }
    }

    /// Activates a tab. Exactly one panel is visible afterwards.
    pub fn show_tab(&mut self, tab: Tab) -> Effect {
        self.active = tab;
        Effect::TabChanged(tab)
    }

    /// The currently active tab.
    #[must_use]
    pub fn active(&self) -> Tab {
        self.active
    }

    /// Whether the given panel is visible.
    #[must_use]
    pub fn panel_visible(&self, tab: Tab) -> bool {
        self.active == tab
    }

    /// Whether the given password input is masked.
    #[must_use]
    pub fn masked(&self, slot: PasswordSlot) -> bool {
        match slot {
            PasswordSlot::LoginPassword => self.login_password_masked,
            PasswordSlot::RegisterPassword => self.register_password_masked,
            PasswordSlot::RegisterConfirm => self.register_confirm_masked,
        }
    }

    /// Handle a tab switcher message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::TabPressed(tab) | Message::SwitchLink(tab) => self.show_tab(tab),
            Message::FieldChanged(field, value) => {
                *self.field_mut(field) = value;
                Effect::None
            }
            Message::ToggleVisibility(slot) => {
                let masked = self.masked_mut(slot);
                *masked = !*masked;
                Effect::FocusInput(slot.input_id())
            }
        }
    }

    fn field_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::LoginEmail => &mut self.login_email,
            TextField::LoginPassword => &mut self.login_password,
            TextField::RegisterEmail => &mut self.register_email,
            TextField::RegisterPassword => &mut self.register_password,
            TextField::RegisterConfirm => &mut self.register_confirm,
        }
    }

    fn masked_mut(&mut self, slot: PasswordSlot) -> &mut bool {
        match slot {
            PasswordSlot::LoginPassword => &mut self.login_password_masked,
            PasswordSlot::RegisterPassword => &mut self.register_password_masked,
            PasswordSlot::RegisterConfirm => &mut self.register_confirm_masked,
        }
    }

    /// Renders the tab bar and the active panel.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let tabs = Row::new()
            .spacing(spacing::XS)
            .push(tab_button(
                i18n.tr("auth-tab-login"),
                Tab::Login,
                self.active,
            ))
            .push(tab_button(
                i18n.tr("auth-tab-register"),
                Tab::Register,
                self.active,
            ));

        let panel = match self.active {
            Tab::Login => self.login_panel(i18n),
            Tab::Register => self.register_panel(i18n),
        };

        Column::new()
            .spacing(spacing::LG)
            .width(Length::Fixed(360.0))
            .push(tabs)
            .push(panel)
            .into()
    }

    fn login_panel<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let email = text_input(&i18n.tr("auth-email-placeholder"), &self.login_email)
            .on_input(|v| Message::FieldChanged(TextField::LoginEmail, v))
            .size(typography::BODY)
            .padding(spacing::XS);

        let password = password_row(
            i18n,
            &self.login_password,
            TextField::LoginPassword,
            PasswordSlot::LoginPassword,
            self.login_password_masked,
        );

        let switch = link_button(i18n.tr("auth-switch-to-register"), Tab::Register);

        Column::new()
            .spacing(spacing::SM)
            .push(email)
            .push(password)
            .push(switch)
            .into()
    }

    fn register_panel<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let email = text_input(&i18n.tr("auth-email-placeholder"), &self.register_email)
            .on_input(|v| Message::FieldChanged(TextField::RegisterEmail, v))
            .size(typography::BODY)
            .padding(spacing::XS);

        let password = password_row(
            i18n,
            &self.register_password,
            TextField::RegisterPassword,
            PasswordSlot::RegisterPassword,
            self.register_password_masked,
        );

        let confirm = password_row(
            i18n,
            &self.register_confirm,
            TextField::RegisterConfirm,
            PasswordSlot::RegisterConfirm,
            self.register_confirm_masked,
        );

        let switch = link_button(i18n.tr("auth-switch-to-login"), Tab::Login);

        Column::new()
            .spacing(spacing::SM)
            .push(email)
            .push(password)
            .push(confirm)
            .push(switch)
            .into()
    }
}

fn tab_button<'a>(label: String, tab: Tab, active: Tab) -> Button<'a, Message> {
    let style = if tab == active {
        button::primary
    } else {
        button::secondary
    };
    button(
        Text::new(label)
            .size(typography::BODY)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(Message::TabPressed(tab))
    .padding(spacing::XS)
    .width(Length::Fill)
    .style(style)
}

fn link_button<'a>(label: String, target: Tab) -> Element<'a, Message> {
    Container::new(
        button(Text::new(label).size(typography::CAPTION))
            .on_press(Message::SwitchLink(target))
            .style(button::text),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .into()
}

fn password_row<'a>(
    i18n: &'a I18n,
    value: &'a str,
    field: TextField,
    slot: PasswordSlot,
    masked: bool,
) -> Element<'a, Message> {
    let input = text_input(&i18n.tr("auth-password-placeholder"), value)
        .on_input(move |v| Message::FieldChanged(field, v))
        .secure(masked)
        .id(slot.input_id())
        .size(typography::BODY)
        .padding(spacing::XS)
        .width(Length::Fill);

    let glyph = if masked {
        icons::EYE_OPEN
    } else {
        icons::EYE_CLOSED
    };
    let toggle = button(Text::new(glyph).size(typography::BODY))
        .on_press(Message::ToggleVisibility(slot))
        .padding(spacing::XXS)
        .style(button::text);

    Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(input)
        .push(container(toggle))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_tab_leaves_exactly_one_panel_visible() {
        let mut state = State::new(Tab::Login);
        for tab in [Tab::Login, Tab::Register, Tab::Login] {
            state.show_tab(tab);
            assert!(state.panel_visible(tab));
            let other = match tab {
                Tab::Login => Tab::Register,
                Tab::Register => Tab::Login,
            };
            assert!(!state.panel_visible(other));
        }
    }

    #[test]
    fn show_tab_reports_tab_change() {
        let mut state = State::new(Tab::Login);
        let effect = state.show_tab(Tab::Register);
        assert!(matches!(effect, Effect::TabChanged(Tab::Register)));
    }

    #[test]
    fn initial_tab_prefers_valid_param() {
        let loc = Location::parse("/accounts/auth/?tab=register");
        assert_eq!(initial_tab(&loc, false), Tab::Register);

        let loc = Location::parse("/accounts/auth/?tab=login");
        assert_eq!(initial_tab(&loc, true), Tab::Login);
    }

    #[test]
    fn initial_tab_without_param_uses_visible_panel() {
        let loc = Location::parse("/accounts/auth/");
        assert_eq!(initial_tab(&loc, false), Tab::Login);
        assert_eq!(initial_tab(&loc, true), Tab::Register);
    }

    #[test]
    fn initial_tab_with_invalid_param_falls_back() {
        let loc = Location::parse("/accounts/auth/?tab=foo");
        assert_eq!(initial_tab(&loc, false), Tab::Login);
        assert_eq!(initial_tab(&loc, true), Tab::Register);
    }

    #[test]
    fn toggle_swaps_masking_and_focuses_input() {
        let mut state = State::new(Tab::Login);
        assert!(state.masked(PasswordSlot::LoginPassword));

        let effect = state.handle(Message::ToggleVisibility(PasswordSlot::LoginPassword));
        assert!(!state.masked(PasswordSlot::LoginPassword));
        assert!(
            matches!(effect, Effect::FocusInput(id) if id == PasswordSlot::LoginPassword.input_id())
        );

        state.handle(Message::ToggleVisibility(PasswordSlot::LoginPassword));
        assert!(state.masked(PasswordSlot::LoginPassword));
    }

    #[test]
    fn toggles_are_independent() {
        let mut state = State::new(Tab::Register);
        state.handle(Message::ToggleVisibility(PasswordSlot::RegisterPassword));
        assert!(!state.masked(PasswordSlot::RegisterPassword));
        assert!(state.masked(PasswordSlot::RegisterConfirm));
        assert!(state.masked(PasswordSlot::LoginPassword));
    }

    #[test]
    fn switch_link_changes_tab_like_a_tab_press() {
        let mut state = State::new(Tab::Login);
        let effect = state.handle(Message::SwitchLink(Tab::Register));
        assert!(matches!(effect, Effect::TabChanged(Tab::Register)));
        assert!(state.panel_visible(Tab::Register));
    }

    #[test]
    fn field_edits_are_kept_per_panel() {
        let mut state = State::new(Tab::Login);
        state.handle(Message::FieldChanged(
            TextField::LoginEmail,
            "jane@x.com".to_string(),
        ));
        state.show_tab(Tab::Register);
        state.show_tab(Tab::Login);
        assert_eq!(state.login_email, "jane@x.com");
    }

    #[test]
    fn tab_parse_accepts_only_known_names() {
        assert_eq!(Tab::parse("login"), Some(Tab::Login));
        assert_eq!(Tab::parse("register"), Some(Tab::Register));
        assert_eq!(Tab::parse("Register"), None);
        assert_eq!(Tab::parse(""), None);
    }
}
