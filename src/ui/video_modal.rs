// SPDX-License-Identifier: MPL-2.0
//! Promo video modal for the home screen.
//!
//! Opening the modal hands playback from the hero video to the modal video;
//! closing reverses it. The playback handles are best-effort controls over
//! external players: requesting a transition that is already in effect is a
//! no-op, never an error. Close triggers: the dialog's close button, the
//! backdrop (but not the dialog content), and Escape while open.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{button, container, mouse_area, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Best-effort play/pause handle over a video surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    paused: bool,
}

impl PlaybackState {
    /// A surface that is currently playing.
    #[must_use]
    pub fn playing() -> Self {
        Self { paused: false }
    }

    /// A surface that is currently paused.
    #[must_use]
    pub fn paused_state() -> Self {
        Self { paused: true }
    }

    /// Whether the surface is paused.
    #[must_use]
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Starts playback. Already playing is a no-op.
    pub fn play(&mut self) {
        self.paused = false;
    }

    /// Pauses playback. Already paused is a no-op.
    pub fn pause(&mut self) {
        self.paused = true;
    }
}

/// Video modal state.
#[derive(Debug, Clone)]
pub struct State {
    open: bool,
    hero: PlaybackState,
    modal: PlaybackState,
}

/// Messages for the video modal.
#[derive(Debug, Clone)]
pub enum Message {
    /// The open button on the hero area was pressed.
    OpenPressed,
    /// A close control inside the dialog was pressed.
    ClosePressed,
    /// The backdrop (outside the dialog content) was clicked.
    BackdropPressed,
}

impl Default for State {
    fn default() -> Self {
        Self {
            open: false,
            hero: PlaybackState::playing(),
            modal: PlaybackState::paused_state(),
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the modal is currently shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hero video playback state.
    #[must_use]
    pub fn hero(&self) -> PlaybackState {
        self.hero
    }

    /// Modal video playback state.
    #[must_use]
    pub fn modal(&self) -> PlaybackState {
        self.modal
    }

    /// Shows the modal: the hero video pauses, the modal video starts if it
    /// was paused.
    pub fn open(&mut self) {
        self.open = true;
        self.hero.pause();
        if self.modal.paused() {
            self.modal.play();
        }
    }

    /// Hides the modal: the modal video pauses if playing, the hero video
    /// resumes. Calling this while already closed changes nothing.
    pub fn close(&mut self) {
        self.open = false;
        if !self.modal.paused() {
            self.modal.pause();
        }
        self.hero.play();
    }

    /// Handle a modal message.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::OpenPressed => self.open(),
            Message::ClosePressed | Message::BackdropPressed => self.close(),
        }
    }

    /// Renders the hero video area with its open control.
    pub fn hero_view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let surface = video_surface(i18n.tr("video-hero-label"), self.hero);

        let open_button = button(Text::new(i18n.tr("video-open-button")).size(typography::BODY))
            .on_press(Message::OpenPressed)
            .padding(spacing::XS)
            .style(button::primary);

        Column::new()
            .spacing(spacing::SM)
            .push(surface)
            .push(open_button)
            .into()
    }

    /// Renders the modal's overlay layers (backdrop plus dialog). Only
    /// meaningful while the modal is open; the caller stacks this above the
    /// screen content.
    pub fn overlay_view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let close_button = button(Text::new(icons::CROSS).size(typography::BODY))
            .on_press(Message::ClosePressed)
            .padding(spacing::XXS)
            .style(button::text);

        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(Text::new(i18n.tr("video-modal-title")).size(typography::TITLE_SM))
                    .width(Length::Fill),
            )
            .push(close_button);

        let dialog = Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(header)
                .push(video_surface(i18n.tr("video-modal-label"), self.modal)),
        )
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::MD)
        .style(dialog_style);

        // The backdrop layer closes on click; the dialog sits above it, so
        // clicks on the content never reach the backdrop.
        let backdrop = mouse_area(
            Container::new(Text::new(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(backdrop_style),
        )
        .on_press(Message::BackdropPressed);

        let dialog_layer = Container::new(dialog)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        Stack::new().push(backdrop).push(dialog_layer).into()
    }
}

/// A placeholder playback surface: the real streams are hosted by the
/// server, the client only reflects and drives their play state.
fn video_surface<'a>(label: String, playback: PlaybackState) -> Element<'a, Message> {
    let glyph = if playback.paused() {
        icons::PAUSE
    } else {
        icons::PLAY
    };

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(glyph).size(sizing::ICON_MD).color(palette::GRAY_200))
            .push(Text::new(label).size(typography::CAPTION).color(palette::GRAY_400)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::VIDEO_SURFACE_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(surface_style)
    .into()
}

fn surface_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::BLACK)),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn dialog_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}
