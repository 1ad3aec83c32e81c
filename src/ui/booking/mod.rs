// SPDX-License-Identifier: MPL-2.0
//! Two-step booking wizard.
//!
//! Step 1 collects the booking details, step 2 shows them read-only for
//! confirmation; confirming with a payment method fires exactly one order
//! POST. Opening always resets to step 1; typed details survive closing,
//! matching the form the server renders. Validation is presence-only, with
//! a transient invalid flag on empty fields that clears itself after
//! [`INVALID_FLAG_DURATION`].
//!
//! The confirm buttons are deliberately not disabled while a request is in
//! flight and closing the wizard does not abort it: the endpoint is treated
//! as idempotent-safe, so at-least-once is acceptable.

use crate::error::OrderError;
use crate::i18n::fluent::I18n;
use crate::orders::{
    self, BookingContext, Field, OrderDraft, OrderPayload, Payment, SubmitOutcome,
};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::Notification;
use iced::widget::{button, container, mouse_area, text_input, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

/// How long an empty field stays visually flagged after a failed continue.
pub const INVALID_FLAG_DURATION: Duration = Duration::from_millis(900);

/// Widget id of the date/time input, used by the picker affordance.
pub const WHEN_INPUT_ID: &str = "booking-when";

/// The wizard's two steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Details,
    Review,
}

/// Transient invalid markers, keyed by field with an expiry instant.
#[derive(Debug, Clone, Default)]
struct InvalidFlags {
    entries: Vec<(Field, Instant)>,
}

impl InvalidFlags {
    fn mark(&mut self, field: Field, now: Instant) {
        let expires = now + INVALID_FLAG_DURATION;
        if let Some(entry) = self.entries.iter_mut().find(|(f, _)| *f == field) {
            entry.1 = expires;
        } else {
            self.entries.push((field, expires));
        }
    }

    fn is_flagged(&self, field: Field) -> bool {
        self.entries.iter().any(|(f, _)| *f == field)
    }

    fn clear_expired(&mut self, now: Instant) {
        self.entries.retain(|(_, expires)| *expires > now);
    }

    fn any(&self) -> bool {
        !self.entries.is_empty()
    }
}

/// Booking wizard state.
#[derive(Debug, Clone)]
pub struct State {
    open: bool,
    step: Step,
    context: Option<BookingContext>,
    draft: OrderDraft,
    invalid: InvalidFlags,
    continue_enabled: bool,
}

/// Messages for the wizard.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the wizard for the given object.
    Open(BookingContext),
    /// A close control was pressed.
    ClosePressed,
    /// The backdrop (outside the dialog content) was clicked.
    BackdropPressed,
    /// A step-1 field changed.
    FieldChanged(Field, String),
    /// The date-picker affordance was pressed; focus the date input.
    OpenPickerPressed,
    /// The clear-date affordance was pressed.
    ClearWhenPressed,
    /// Continue to the review step.
    ContinuePressed,
    /// Go back to the details step.
    EditPressed,
    /// Confirm with a payment method; issues the order request.
    PayPressed(Payment),
    /// Periodic tick, clears expired invalid flags.
    Tick(Instant),
}

/// Effects produced by the wizard for the application to execute.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// Issue the order POST. `action` is as supplied by the context and may
    /// be server-relative.
    Submit { action: String, payload: OrderPayload },
    /// Focus the date input.
    FocusWhen,
    /// Navigate to a server-provided location.
    Navigate(String),
    /// Show a notification.
    Notify(Notification),
}

impl Default for State {
    fn default() -> Self {
        Self {
            open: false,
            step: Step::Details,
            context: None,
            draft: OrderDraft::default(),
            invalid: InvalidFlags::default(),
            continue_enabled: true,
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the wizard is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current step.
    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    /// The details draft.
    #[must_use]
    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// Whether the continue control is enabled.
    #[must_use]
    pub fn continue_enabled(&self) -> bool {
        self.continue_enabled
    }

    /// Whether a field currently carries the invalid flag.
    #[must_use]
    pub fn is_flagged(&self, field: Field) -> bool {
        self.invalid.is_flagged(field)
    }

    /// Whether any transient flag is pending (drives the tick subscription).
    #[must_use]
    pub fn has_transient_flags(&self) -> bool {
        self.invalid.any()
    }

    /// The date/time as rendered on the review step.
    #[must_use]
    pub fn review_when(&self) -> String {
        orders::format_review_when(&self.draft.when)
    }

    /// Opens the wizard, always back on step 1. The draft is kept; only the
    /// step machinery resets.
    pub fn open(&mut self, context: BookingContext) {
        self.open = true;
        self.context = Some(context);
        self.reset();
    }

    /// Closes the wizard. Any in-flight request keeps running.
    pub fn close(&mut self) {
        self.open = false;
    }

    fn reset(&mut self) {
        self.step = Step::Details;
        self.continue_enabled = true;
        self.invalid = InvalidFlags::default();
    }

    /// Handle a wizard message.
    pub fn handle(&mut self, msg: Message, now: Instant) -> Effect {
        match msg {
            Message::Open(context) => {
                self.open(context);
                Effect::None
            }
            Message::ClosePressed | Message::BackdropPressed => {
                self.close();
                Effect::None
            }
            Message::FieldChanged(field, value) => {
                *self.draft.value_mut(field) = value;
                Effect::None
            }
            Message::OpenPickerPressed => Effect::FocusWhen,
            Message::ClearWhenPressed => {
                self.draft.when.clear();
                Effect::None
            }
            Message::ContinuePressed => self.to_review(now),
            Message::EditPressed => {
                self.step = Step::Details;
                self.continue_enabled = true;
                Effect::None
            }
            Message::PayPressed(payment) => self.create_order(payment),
            Message::Tick(now) => {
                self.invalid.clear_expired(now);
                Effect::None
            }
        }
    }

    /// Step 1 → step 2, guarded by the presence check. On failure every
    /// empty field gets a transient flag and the wizard stays on step 1.
    fn to_review(&mut self, now: Instant) -> Effect {
        if !self.draft.is_valid() {
            for field in self.draft.empty_fields() {
                self.invalid.mark(field, now);
            }
            return Effect::None;
        }
        self.step = Step::Review;
        self.continue_enabled = false;
        Effect::None
    }

    /// Builds the order payload and asks the application to POST it.
    fn create_order(&mut self, payment: Payment) -> Effect {
        if self.step != Step::Review {
            return Effect::None;
        }
        let Some(context) = self.context.as_ref().filter(|c| c.is_complete()) else {
            return Effect::Notify(Notification::error("booking-error-missing-context"));
        };

        let payload = OrderPayload::new(context, &self.draft, Some(payment));
        Effect::Submit {
            action: context.action.clone(),
            payload,
        }
    }

    /// Routes the finished submission back into the wizard.
    ///
    /// Failure paths leave the wizard open and untouched; success closes it
    /// first and then navigates or acknowledges, in that order.
    pub fn handle_outcome(&mut self, result: Result<SubmitOutcome, OrderError>) -> Effect {
        match result {
            Err(err) => Effect::Notify(Notification::error(err.i18n_key())),
            Ok(SubmitOutcome::Rejected { message: Some(msg) }) => Effect::Notify(
                Notification::error("booking-error-server").with_arg("message", msg),
            ),
            Ok(SubmitOutcome::Rejected { message: None }) => {
                Effect::Notify(Notification::error("booking-error-generic"))
            }
            Ok(SubmitOutcome::Created { redirect, .. }) => {
                self.close();
                match redirect {
                    Some(url) => Effect::Navigate(url),
                    None => Effect::Notify(Notification::success("booking-success")),
                }
            }
        }
    }

    /// Renders the wizard's overlay layers (backdrop plus dialog). Only
    /// meaningful while the wizard is open; the caller stacks this above
    /// the screen content.
    pub fn overlay_view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let body: Element<'a, Message> = match self.step {
            Step::Details => self.details_view(i18n),
            Step::Review => self.review_view(i18n),
        };

        let close_button = button(Text::new(icons::CROSS).size(typography::BODY))
            .on_press(Message::ClosePressed)
            .padding(spacing::XXS)
            .style(button::text);

        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(
                    Text::new(i18n.tr("booking-title")).size(typography::TITLE_SM),
                )
                .width(Length::Fill),
            )
            .push(close_button);

        let dialog = Container::new(
            Column::new()
                .spacing(spacing::MD)
                .push(header)
                .push(body),
        )
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::MD)
        .style(dialog_style);

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

    fn details_view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let when_input = text_input(&i18n.tr("booking-when-placeholder"), &self.draft.when)
            .on_input(|v| Message::FieldChanged(Field::When, v))
            .id(WHEN_INPUT_ID)
            .size(typography::BODY)
            .padding(spacing::XS)
            .style(field_style(self.is_flagged(Field::When)));

        let picker = button(Text::new(i18n.tr("booking-open-picker")).size(typography::CAPTION))
            .on_press(Message::OpenPickerPressed)
            .padding(spacing::XXS)
            .style(button::text);

        let clear = button(Text::new(i18n.tr("booking-clear-when")).size(typography::CAPTION))
            .on_press(Message::ClearWhenPressed)
            .padding(spacing::XXS)
            .style(button::text);

        let when_row = Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(when_input)
            .push(picker)
            .push(clear);

        let continue_button = {
            let label = Text::new(i18n.tr("booking-continue")).size(typography::BODY);
            let mut b = button(label).padding(spacing::XS).style(button::primary);
            if self.continue_enabled {
                b = b.on_press(Message::ContinuePressed);
            }
            b
        };

        Column::new()
            .spacing(spacing::SM)
            .push(when_row)
            .push(self.text_field(i18n, Field::Name, "booking-name-placeholder"))
            .push(self.text_field(i18n, Field::Email, "booking-email-placeholder"))
            .push(self.text_field(i18n, Field::Phone, "booking-phone-placeholder"))
            .push(
                Container::new(continue_button)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right),
            )
            .into()
    }

    fn text_field<'a>(
        &'a self,
        i18n: &'a I18n,
        field: Field,
        placeholder_key: &str,
    ) -> Element<'a, Message> {
        text_input(&i18n.tr(placeholder_key), self.draft.value(field))
            .on_input(move |v| Message::FieldChanged(field, v))
            .size(typography::BODY)
            .padding(spacing::XS)
            .style(field_style(self.is_flagged(field)))
            .into()
    }

    fn review_view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let rows = Column::new()
            .spacing(spacing::XS)
            .push(review_row(i18n.tr("booking-review-when"), self.review_when()))
            .push(review_row(
                i18n.tr("booking-review-name"),
                self.draft.name.clone(),
            ))
            .push(review_row(
                i18n.tr("booking-review-email"),
                self.draft.email.clone(),
            ))
            .push(review_row(
                i18n.tr("booking-review-phone"),
                self.draft.phone.clone(),
            ));

        let edit = button(Text::new(i18n.tr("booking-edit")).size(typography::BODY))
            .on_press(Message::EditPressed)
            .padding(spacing::XS)
            .style(button::secondary);

        let pay_cash = button(Text::new(i18n.tr("booking-pay-cash")).size(typography::BODY))
            .on_press(Message::PayPressed(Payment::Cash))
            .padding(spacing::XS)
            .style(button::primary);

        let pay_paypal = button(Text::new(i18n.tr("booking-pay-paypal")).size(typography::BODY))
            .on_press(Message::PayPressed(Payment::Paypal))
            .padding(spacing::XS)
            .style(button::primary);

        let actions = Row::new()
            .spacing(spacing::XS)
            .push(edit)
            .push(Container::new(Text::new("")).width(Length::Fill))
            .push(pay_cash)
            .push(pay_paypal);

        Column::new()
            .spacing(spacing::MD)
            .push(rows)
            .push(actions)
            .into()
    }
}

fn review_row<'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .push(
            Text::new(label)
                .size(typography::CAPTION)
                .color(palette::GRAY_400)
                .width(Length::Fixed(90.0)),
        )
        .push(Text::new(value).size(typography::BODY))
        .into()
}

/// Step-1 input styling; flagged fields get the error accent.
fn field_style(
    flagged: bool,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme: &Theme, status: text_input::Status| {
        let mut style = text_input::default(theme, status);
        if flagged {
            style.border = iced::Border {
                color: palette::ERROR_500,
                width: 2.0,
                radius: radius::SM.into(),
            };
        }
        style
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
