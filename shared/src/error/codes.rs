//! Unified error codes for the Omakase configurator
//!
//! Error codes are shared between the server and frontend and are
//! organized by category:
//! - 0xxx: General errors
//! - 1xxx: Booking errors
//! - 2xxx: Selection/session errors
//! - 3xxx: Catalog errors
//! - 4xxx: Submission errors
//! - 9xxx: System errors

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient
/// serialization and cross-language compatibility (Rust, TypeScript).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Booking ====================
    /// Required booking fields are missing
    BookingIncomplete = 1001,
    /// Adults plus kids exceed the table capacity
    GuestCapacityExceeded = 1002,
    /// Fewer adults than the minimum party size
    AdultCountTooLow = 1003,
    /// Kid or toddler count above the per-booking limit
    ChildCountExceeded = 1004,
    /// Booking date outside the allowed window
    DateOutOfRange = 1005,
    /// Course tier not offered for the requested meal period
    TierNotAvailable = 1006,

    // ==================== 2xxx: Selection / Session ====================
    /// Category already holds its maximum number of selections
    SelectionLimitReached = 2001,
    /// Menu item not found in the catalog
    ItemNotFound = 2002,
    /// Item not offered for the current meal or serving style
    ItemNotSelectable = 2003,
    /// Summed quantities exceed the adult count
    QuantityExceedsGuests = 2004,
    /// Quantity outside the selectable range
    QuantityOutOfRange = 2005,
    /// Session is in display-only mode
    SessionReadonly = 2006,
    /// Session not found
    SessionNotFound = 2007,
    /// Selections are not yet valid for submission
    SelectionIncomplete = 2008,

    // ==================== 3xxx: Catalog ====================
    /// No catalog source could be reached
    CatalogUnavailable = 3001,
    /// Catalog loaded but contains no usable rows
    CatalogEmpty = 3002,
    /// Catalog payload could not be parsed
    CatalogParseError = 3003,

    // ==================== 4xxx: Submission ====================
    /// A submission is already in flight for this session and channel
    SubmissionInFlight = 4001,
    /// Delivery failed at the outbound channel
    SubmissionFailed = 4002,
    /// Outbound channel is not configured
    ChannelNotConfigured = 4003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// I/O error
    IoError = 9002,
    /// Outbound HTTP error
    HttpClientError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",

            Self::BookingIncomplete => "Please fill in all required booking fields",
            Self::GuestCapacityExceeded => "Combined adults and children exceed capacity",
            Self::AdultCountTooLow => "At least two adults are required",
            Self::ChildCountExceeded => "Too many children for one booking",
            Self::DateOutOfRange => "Booking date must be between tomorrow and three months ahead",
            Self::TierNotAvailable => "Menu not available for this meal period",

            Self::SelectionLimitReached => "Maximum selections reached for this course",
            Self::ItemNotFound => "Menu item not found",
            Self::ItemNotSelectable => "Item not available for the current configuration",
            Self::QuantityExceedsGuests => "Quantities exceed the number of adults",
            Self::QuantityOutOfRange => "Quantity outside the selectable range",
            Self::SessionReadonly => "Session is display-only",
            Self::SessionNotFound => "Session not found",
            Self::SelectionIncomplete => "Menu selection is not complete",

            Self::CatalogUnavailable => "Menu data could not be loaded",
            Self::CatalogEmpty => "Menu data contains no items",
            Self::CatalogParseError => "Menu data could not be parsed",

            Self::SubmissionInFlight => "A submission is already in progress",
            Self::SubmissionFailed => "Failed to send the menu selection",
            Self::ChannelNotConfigured => "Submission channel is not configured",

            Self::InternalError => "Internal server error",
            Self::IoError => "I/O error",
            Self::HttpClientError => "Outbound request failed",
        }
    }

    /// Get the HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::NotFound | Self::ItemNotFound | Self::SessionNotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::SubmissionInFlight => StatusCode::CONFLICT,
            Self::SessionReadonly => StatusCode::FORBIDDEN,
            Self::CatalogUnavailable | Self::CatalogEmpty => StatusCode::SERVICE_UNAVAILABLE,
            Self::SubmissionFailed | Self::HttpClientError => StatusCode::BAD_GATEWAY,
            Self::InternalError | Self::IoError | Self::CatalogParseError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::ChannelNotConfigured => StatusCode::NOT_IMPLEMENTED,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6 => Self::InvalidFormat,
            7 => Self::RequiredField,
            8 => Self::ValueOutOfRange,

            1001 => Self::BookingIncomplete,
            1002 => Self::GuestCapacityExceeded,
            1003 => Self::AdultCountTooLow,
            1004 => Self::ChildCountExceeded,
            1005 => Self::DateOutOfRange,
            1006 => Self::TierNotAvailable,

            2001 => Self::SelectionLimitReached,
            2002 => Self::ItemNotFound,
            2003 => Self::ItemNotSelectable,
            2004 => Self::QuantityExceedsGuests,
            2005 => Self::QuantityOutOfRange,
            2006 => Self::SessionReadonly,
            2007 => Self::SessionNotFound,
            2008 => Self::SelectionIncomplete,

            3001 => Self::CatalogUnavailable,
            3002 => Self::CatalogEmpty,
            3003 => Self::CatalogParseError,

            4001 => Self::SubmissionInFlight,
            4002 => Self::SubmissionFailed,
            4003 => Self::ChannelNotConfigured,

            9001 => Self::InternalError,
            9002 => Self::IoError,
            9003 => Self::HttpClientError,

            other => return Err(format!("unknown error code: {}", other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::GuestCapacityExceeded,
            ErrorCode::SelectionLimitReached,
            ErrorCode::CatalogUnavailable,
            ErrorCode::SubmissionInFlight,
            ErrorCode::InternalError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()).unwrap(), code);
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!(ErrorCode::try_from(1234).is_err());
        assert!(ErrorCode::try_from(65535).is_err());
    }

    #[test]
    fn test_http_status() {
        assert_eq!(
            ErrorCode::SessionNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::SubmissionInFlight.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::CatalogUnavailable.http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ErrorCode::GuestCapacityExceeded.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_serialize_as_u16() {
        let json = serde_json::to_string(&ErrorCode::SelectionLimitReached).unwrap();
        assert_eq!(json, "2001");
        let code: ErrorCode = serde_json::from_str("1005").unwrap();
        assert_eq!(code, ErrorCode::DateOutOfRange);
    }
}
