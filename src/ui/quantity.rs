// SPDX-License-Identifier: MPL-2.0
//! Quantity stepper sub-component.
//!
//! A numeric input flanked by decrement/increment controls. Steps are
//! clamped into the `[min, max]` range; absent bounds are unbounded. The
//! buttons have keyboard parity: the hosting screen routes ArrowUp / `+`
//! and ArrowDown / `-` to the same handlers as clicks.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::icons;
use iced::widget::{button, text_input, Row, Text};
use iced::{alignment, Element, Length};

/// Quantity stepper state.
#[derive(Debug, Clone)]
pub struct State {
    /// Raw input text; may be non-numeric while the user is typing.
    input: String,
    min: Option<f64>,
    max: Option<f64>,
    step: f64,
}

/// Messages for the stepper.
#[derive(Debug, Clone)]
pub enum Message {
    /// Step the value down (click or ArrowDown / `-`).
    Decrement,
    /// Step the value up (click or ArrowUp / `+`).
    Increment,
    /// The input text changed.
    InputChanged(String),
}

/// Effects produced by stepper changes.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// The committed value changed; dependent UI should react.
    Changed(f64),
}

impl Default for State {
    fn default() -> Self {
        Self {
            input: "1".to_string(),
            min: None,
            max: None,
            step: 1.0,
        }
    }
}

impl State {
    /// Creates a stepper with the given initial value and constraints.
    ///
    /// A `step` of `None` (or a non-positive value) falls back to 1.
    #[must_use]
    pub fn new(initial: f64, min: Option<f64>, max: Option<f64>, step: Option<f64>) -> Self {
        let step = match step {
            Some(s) if s > 0.0 => s,
            _ => 1.0,
        };
        Self {
            input: format_value(initial),
            min,
            max,
            step,
        }
    }

    /// Handle a stepper message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Decrement => self.apply_delta(-self.step),
            Message::Increment => self.apply_delta(self.step),
            Message::InputChanged(input) => {
                self.input = input;
                Effect::None
            }
        }
    }

    /// Current numeric value; non-numeric input counts as 0.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.input.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
    }

    /// Raw input text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.input
    }

    fn apply_delta(&mut self, delta: f64) -> Effect {
        let next = self.clamp(self.value() + delta);
        self.input = format_value(next);
        Effect::Changed(next)
    }

    fn clamp(&self, v: f64) -> f64 {
        let mut out = v;
        if let Some(min) = self.min {
            out = out.max(min);
        }
        if let Some(max) = self.max {
            out = out.min(max);
        }
        out
    }

    /// Renders the stepper row.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let minus = button(Text::new(icons::MINUS).size(typography::BODY))
            .on_press(Message::Decrement)
            .padding(spacing::XS)
            .style(button::secondary);

        let input = text_input(&i18n.tr("quantity-placeholder"), &self.input)
            .on_input(Message::InputChanged)
            .size(typography::BODY)
            .width(Length::Fixed(72.0))
            .align_x(alignment::Horizontal::Center);

        let plus = button(Text::new(icons::PLUS).size(typography::BODY))
            .on_press(Message::Increment)
            .padding(spacing::XS)
            .style(button::secondary);

        Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(minus)
            .push(input)
            .push(plus)
            .into()
    }
}

/// Renders a value the way a form field would: integral values without a
/// trailing fraction.
fn format_value(v: f64) -> String {
    format!("{}", v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_steps_up() {
        let mut state = State::new(2.0, Some(1.0), Some(5.0), Some(1.0));
        let effect = state.handle(Message::Increment);
        assert!(matches!(effect, Effect::Changed(v) if v == 3.0));
        assert_eq!(state.text(), "3");
    }

    #[test]
    fn increment_clamps_at_max() {
        let mut state = State::new(5.0, Some(1.0), Some(5.0), Some(1.0));
        let effect = state.handle(Message::Increment);
        assert!(matches!(effect, Effect::Changed(v) if v == 5.0));
        assert_eq!(state.value(), 5.0);
    }

    #[test]
    fn decrement_clamps_at_min() {
        let mut state = State::new(1.0, Some(1.0), Some(5.0), Some(1.0));
        let effect = state.handle(Message::Decrement);
        assert!(matches!(effect, Effect::Changed(v) if v == 1.0));
        assert_eq!(state.value(), 1.0);
    }

    #[test]
    fn missing_bounds_are_unbounded() {
        let mut state = State::new(0.0, None, None, Some(10.0));
        state.handle(Message::Decrement);
        assert_eq!(state.value(), -10.0);
        state.handle(Message::Increment);
        state.handle(Message::Increment);
        assert_eq!(state.value(), 10.0);
    }

    #[test]
    fn non_numeric_input_counts_as_zero() {
        let mut state = State::new(1.0, None, None, None);
        state.handle(Message::InputChanged("abc".to_string()));
        assert_eq!(state.value(), 0.0);

        let effect = state.handle(Message::Increment);
        assert!(matches!(effect, Effect::Changed(v) if v == 1.0));
    }

    #[test]
    fn empty_input_counts_as_zero() {
        let mut state = State::new(1.0, Some(0.0), None, None);
        state.handle(Message::InputChanged(String::new()));
        let effect = state.handle(Message::Decrement);
        assert!(matches!(effect, Effect::Changed(v) if v == 0.0));
    }

    #[test]
    fn fractional_step_formats_cleanly() {
        let mut state = State::new(1.0, None, None, Some(0.5));
        state.handle(Message::Increment);
        assert_eq!(state.text(), "1.5");
        assert_eq!(state.value(), 1.5);
    }

    #[test]
    fn non_positive_step_falls_back_to_one() {
        let state = State::new(1.0, None, None, Some(0.0));
        assert_eq!(state.step, 1.0);
    }

    #[test]
    fn typing_does_not_commit_a_change() {
        let mut state = State::new(1.0, None, None, None);
        let effect = state.handle(Message::InputChanged("4".to_string()));
        assert!(matches!(effect, Effect::None));
        assert_eq!(state.value(), 4.0);
    }
}
