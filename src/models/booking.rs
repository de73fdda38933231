use std::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_LANGUAGE: &str = "en";

/// A numeric field that clients send either as a JSON number or a string.
/// Rendered exactly as it arrived.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Number(serde_json::Number),
    Text(String),
}

impl FieldValue {
    fn is_blank(&self) -> bool {
        match self {
            FieldValue::Number(_) => false,
            FieldValue::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integral floats print without a fraction, so `1e2` renders as `100`.
            FieldValue::Number(number) => match number.as_f64() {
                Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e21 => {
                    write!(f, "{:.0}", value)
                }
                _ => write!(f, "{}", number),
            },
            FieldValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// Booking body as posted by the frontend, before any field is checked.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<FieldValue>,
    pub apartment_title: Option<String>,
    pub price_per_night: Option<FieldValue>,
    pub payment_method: Option<String>,
    /// Kept loose: anything other than a string falls back to the default language.
    pub language: Option<serde_json::Value>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: FieldValue,
    pub apartment_title: String,
    pub price_per_night: FieldValue,
    pub payment_method: String,
    pub language: String,
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, BookingValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(BookingValidationError::MissingField(field)),
    }
}

fn required_value(
    value: Option<FieldValue>,
    field: &'static str,
) -> Result<FieldValue, BookingValidationError> {
    match value {
        Some(value) if !value.is_blank() => Ok(value),
        _ => Err(BookingValidationError::MissingField(field)),
    }
}

impl TryFrom<BookingPayload> for BookingRequest {
    type Error = BookingValidationError;

    fn try_from(payload: BookingPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            first_name: required_text(payload.first_name, "firstName")?,
            last_name: required_text(payload.last_name, "lastName")?,
            email: required_text(payload.email, "email")?,
            check_in: required_text(payload.check_in, "checkIn")?,
            check_out: required_text(payload.check_out, "checkOut")?,
            guests: required_value(payload.guests, "guests")?,
            apartment_title: required_text(payload.apartment_title, "apartmentTitle")?,
            price_per_night: required_value(payload.price_per_night, "pricePerNight")?,
            payment_method: required_text(payload.payment_method, "paymentMethod")?,
            language: match payload.language {
                Some(serde_json::Value::String(code)) => code,
                _ => DEFAULT_LANGUAGE.to_string(),
            },
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BookingResponse {
    pub fn sent(message_id: String) -> Self {
        Self {
            success: true,
            message_id: Some(message_id),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message_id: None,
            error: Some(error.into()),
        }
    }
}
