// SPDX-License-Identifier: MPL-2.0
//! Order creation protocol.
//!
//! One POST per confirmation: a JSON payload built from the booking draft
//! plus the hosting screen's context, authenticated by the session cookies
//! and a CSRF header. The server owns validation and persistence; this
//! module only classifies what came back.

use crate::error::OrderError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Header carrying the CSRF token, mirrored from the cookie of the same name.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// What kind of object is being booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Service,
    Car,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectType::Service => write!(f, "service"),
            ObjectType::Car => write!(f, "car"),
        }
    }
}

/// Payment method chosen on the review step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payment {
    Cash,
    Paypal,
}

impl Payment {
    /// Wire label for the payment field.
    pub fn label(&self) -> &'static str {
        match self {
            Payment::Cash => "cash",
            Payment::Paypal => "paypal",
        }
    }
}

/// Context the hosting screen supplies when opening the wizard: which object
/// is being booked and where to send the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingContext {
    pub object_type: ObjectType,
    pub object_id: u32,
    /// Order-creation endpoint, absolute or server-relative.
    pub action: String,
    /// Where the user's orders can be reviewed afterwards.
    pub orders_list_url: Option<String>,
}

impl BookingContext {
    /// Returns whether enough context is present to submit an order.
    pub fn is_complete(&self) -> bool {
        !self.action.is_empty()
    }
}

/// The details the user types into step 1 of the wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub when: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A step-1 field, used for validation feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    When,
    Name,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::When, Field::Name, Field::Email, Field::Phone];
}

impl OrderDraft {
    /// Presence check gating the review step: the date must be set and the
    /// text fields must be non-blank.
    pub fn is_valid(&self) -> bool {
        !self.when.is_empty()
            && !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
    }

    /// Fields whose raw value is empty, in display order. These get the
    /// transient invalid flag; a whitespace-only value fails `is_valid` but
    /// is not flagged, matching the inline feedback of the original form.
    pub fn empty_fields(&self) -> Vec<Field> {
        let mut fields = Vec::new();
        for field in Field::ALL {
            if self.value(field).is_empty() {
                fields.push(field);
            }
        }
        fields
    }

    /// Raw value of a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::When => &self.when,
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    /// Mutable access for input handlers.
    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::When => &mut self.when,
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        }
    }
}

/// JSON body of the order-creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderPayload {
    pub object_type: ObjectType,
    pub object_id: u32,
    pub when: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub payment: String,
}

impl OrderPayload {
    /// Builds the wire payload: text fields trimmed, the payment label sent
    /// verbatim (empty when absent).
    pub fn new(context: &BookingContext, draft: &OrderDraft, payment: Option<Payment>) -> Self {
        Self {
            object_type: context.object_type,
            object_id: context.object_id,
            when: draft.when.clone(),
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            phone: draft.phone.trim().to_string(),
            payment: payment.map(|p| p.label().to_string()).unwrap_or_default(),
        }
    }
}

/// Response body shape; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
struct OrderResponse {
    #[serde(default)]
    redirect: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    order_id: Option<u64>,
}

/// What the server's answer means for the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Success; navigate to `redirect` when present, otherwise acknowledge.
    Created {
        redirect: Option<String>,
        order_id: Option<u64>,
    },
    /// The server refused the order; `message` is its verbatim `error`
    /// field when one was supplied.
    Rejected { message: Option<String> },
}

/// Classifies a finished HTTP exchange.
///
/// JSON parsing is best effort on both paths: an unreadable error body
/// falls through to the generic rejection, an unreadable success body to a
/// plain acknowledgement.
pub fn classify_response(status: u16, body: &str) -> SubmitOutcome {
    let parsed: Option<OrderResponse> = serde_json::from_str(body).ok();

    if (200..300).contains(&status) {
        let parsed = parsed.unwrap_or_default();
        SubmitOutcome::Created {
            redirect: parsed.redirect,
            order_id: parsed.order_id,
        }
    } else {
        let message = parsed
            .and_then(|r| r.error)
            .filter(|m| !m.is_empty());
        SubmitOutcome::Rejected { message }
    }
}

/// Submits one order-creation request.
///
/// Exactly one request per call; the caller deliberately performs no retry,
/// no debounce, and no cancellation. `cookies` is forwarded as the `Cookie`
/// header so the session travels with the request.
pub async fn submit(
    action: String,
    payload: OrderPayload,
    csrf_token: String,
    cookies: String,
) -> Result<SubmitOutcome, OrderError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("Skybook/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| OrderError::Network(e.to_string()))?;

    let mut request = client.post(&action).json(&payload).header(CSRF_HEADER, csrf_token);
    if !cookies.trim().is_empty() {
        request = request.header(reqwest::header::COOKIE, cookies);
    }

    let response = request
        .send()
        .await
        .map_err(|e| OrderError::Network(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    Ok(classify_response(status, &body))
}

/// Accepted review date formats, tried in order.
const WHEN_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Formats the chosen date/time for the review step.
///
/// Parseable values are re-rendered in a human-readable form; anything else
/// is shown verbatim (a fallback, not an error).
pub fn format_review_when(raw: &str) -> String {
    for format in WHEN_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return dt.format("%d %b %Y, %H:%M").to_string();
        }
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d %b %Y, %H:%M").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> BookingContext {
        BookingContext {
            object_type: ObjectType::Service,
            object_id: 7,
            action: "/orders/create/".to_string(),
            orders_list_url: Some("/orders/".to_string()),
        }
    }

    fn full_draft() -> OrderDraft {
        OrderDraft {
            when: "2025-01-01T10:00".to_string(),
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555-1234".to_string(),
        }
    }

    #[test]
    fn draft_with_all_fields_is_valid() {
        assert!(full_draft().is_valid());
        assert!(full_draft().empty_fields().is_empty());
    }

    #[test]
    fn draft_with_missing_field_is_invalid() {
        for field in Field::ALL {
            let mut draft = full_draft();
            draft.value_mut(field).clear();
            assert!(!draft.is_valid());
            assert_eq!(draft.empty_fields(), vec![field]);
        }
    }

    #[test]
    fn whitespace_name_fails_validation_but_is_not_flagged() {
        let mut draft = full_draft();
        draft.name = "   ".to_string();
        assert!(!draft.is_valid());
        assert!(draft.empty_fields().is_empty());
    }

    #[test]
    fn payload_serializes_to_wire_shape() {
        let payload = OrderPayload::new(&context(), &full_draft(), Some(Payment::Cash));
        let json = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "object_type": "service",
                "object_id": 7,
                "when": "2025-01-01T10:00",
                "name": "Jane",
                "email": "jane@x.com",
                "phone": "555-1234",
                "payment": "cash",
            })
        );
    }

    #[test]
    fn payload_trims_text_fields_but_not_when() {
        let mut draft = full_draft();
        draft.name = "  Jane  ".to_string();
        draft.phone = " 555-1234 ".to_string();
        let payload = OrderPayload::new(&context(), &draft, Some(Payment::Paypal));
        assert_eq!(payload.name, "Jane");
        assert_eq!(payload.phone, "555-1234");
        assert_eq!(payload.payment, "paypal");
    }

    #[test]
    fn payload_without_payment_sends_empty_label() {
        let payload = OrderPayload::new(&context(), &full_draft(), None);
        assert_eq!(payload.payment, "");
    }

    #[test]
    fn classify_success_with_redirect() {
        let outcome = classify_response(201, r#"{"ok": true, "order_id": 5, "redirect": "/orders/5/"}"#);
        assert_eq!(
            outcome,
            SubmitOutcome::Created {
                redirect: Some("/orders/5/".to_string()),
                order_id: Some(5),
            }
        );
    }

    #[test]
    fn classify_success_without_redirect() {
        let outcome = classify_response(200, r#"{"ok": true}"#);
        assert_eq!(
            outcome,
            SubmitOutcome::Created {
                redirect: None,
                order_id: None,
            }
        );
    }

    #[test]
    fn classify_success_with_unreadable_body() {
        let outcome = classify_response(200, "<html>surprise</html>");
        assert_eq!(
            outcome,
            SubmitOutcome::Created {
                redirect: None,
                order_id: None,
            }
        );
    }

    #[test]
    fn classify_rejection_with_server_message() {
        let outcome = classify_response(400, r#"{"error": "Slot full"}"#);
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: Some("Slot full".to_string()),
            }
        );
    }

    #[test]
    fn classify_rejection_without_message() {
        assert_eq!(
            classify_response(500, "internal error"),
            SubmitOutcome::Rejected { message: None }
        );
        assert_eq!(
            classify_response(400, r#"{"error": ""}"#),
            SubmitOutcome::Rejected { message: None }
        );
    }

    #[test]
    fn format_review_when_parses_datetime_local() {
        let formatted = format_review_when("2025-01-01T10:00");
        assert_eq!(formatted, "01 Jan 2025, 10:00");
    }

    #[test]
    fn format_review_when_parses_seconds_and_rfc3339() {
        assert_eq!(
            format_review_when("2025-06-30T23:59:07"),
            "30 Jun 2025, 23:59"
        );
        assert_eq!(
            format_review_when("2025-06-30T23:59:07+02:00"),
            "30 Jun 2025, 23:59"
        );
    }

    #[test]
    fn format_review_when_falls_back_to_raw() {
        assert_eq!(format_review_when("next tuesday"), "next tuesday");
        assert_eq!(format_review_when(""), "");
    }

    #[test]
    fn context_without_action_is_incomplete() {
        let mut ctx = context();
        ctx.action.clear();
        assert!(!ctx.is_complete());
    }

    #[tokio::test]
    async fn submit_transport_failure_maps_to_network_error() {
        // Port 9 (discard) is closed on any sane host; the connection is
        // refused before a request goes out.
        let payload = OrderPayload::new(&context(), &full_draft(), Some(Payment::Cash));
        let result = submit(
            "http://127.0.0.1:9/orders/create/".to_string(),
            payload,
            "tok".to_string(),
            String::new(),
        )
        .await;
        assert!(matches!(result, Err(OrderError::Network(_))));
    }
}
