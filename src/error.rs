// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Order(OrderError),
}

/// Specific error types for the order submission flow.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// The hosting screen supplied no booking context (object type, id, action).
    MissingContext,

    /// The request never reached the server (DNS, connect, TLS, ...).
    Network(String),

    /// The server answered with a non-success status.
    /// `message` carries the server-provided `error` field when present.
    Rejected { message: Option<String> },
}

impl OrderError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            OrderError::MissingContext => "booking-error-missing-context",
            OrderError::Network(_) => "booking-error-network",
            OrderError::Rejected { message: Some(_) } => "booking-error-server",
            OrderError::Rejected { message: None } => "booking-error-generic",
        }
    }
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderError::MissingContext => write!(f, "Missing booking context"),
            OrderError::Network(msg) => write!(f, "Network error: {}", msg),
            OrderError::Rejected { message: Some(msg) } => write!(f, "{}", msg),
            OrderError::Rejected { message: None } => write!(f, "Booking was not accepted"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Order(e) => write!(f, "Order Error: {}", e),
        }
    }
}

impl From<OrderError> for Error {
    fn from(err: OrderError) -> Self {
        Error::Order(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn order_error_display_shows_server_message_verbatim() {
        let err = OrderError::Rejected {
            message: Some("Slot full".to_string()),
        };
        assert_eq!(format!("{}", err), "Slot full");
    }

    #[test]
    fn order_error_i18n_keys() {
        assert_eq!(
            OrderError::MissingContext.i18n_key(),
            "booking-error-missing-context"
        );
        assert_eq!(
            OrderError::Network("timeout".into()).i18n_key(),
            "booking-error-network"
        );
        assert_eq!(
            OrderError::Rejected { message: None }.i18n_key(),
            "booking-error-generic"
        );
    }

    #[test]
    fn order_error_converts_to_crate_error() {
        let err: Error = OrderError::MissingContext.into();
        assert!(matches!(err, Error::Order(OrderError::MissingContext)));
    }
}
