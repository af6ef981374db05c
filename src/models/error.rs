use thiserror::Error;

pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    #[error("guest name is empty")]
    EmptyName,
    #[error("invalid nights/guests for room")]
    ValidationFailed,
    #[error("unknown room type or season: {key}")]
    UnknownConfiguration { key: String },
    #[error("field `{field}` is not a whole number: {value:?}")]
    MalformedNumericField { field: &'static str, value: String },
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl BookingError {
    pub fn unknown(key: &str) -> Self {
        BookingError::UnknownConfiguration {
            key: key.to_string(),
        }
    }

    /// Text shown to the guest. Malformed numbers keep the generic message.
    pub fn user_message(&self) -> &'static str {
        match self {
            BookingError::EmptyName => "Please enter a guest name.",
            BookingError::ValidationFailed => "Booking rejected (invalid nights/guests for room).",
            BookingError::UnknownConfiguration { .. } => "Invalid room type or season.",
            BookingError::MalformedNumericField { .. } | BookingError::Unexpected(_) => {
                GENERIC_ERROR_MESSAGE
            }
        }
    }
}
