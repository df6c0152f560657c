//! Booking info: the basic-information form fields

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Guest-entered booking details
///
/// Created empty with the session and filled in field by field; the
/// submission gate requires [`BookingInfo::is_complete`] plus a valid
/// date window and guest counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct BookingInfo {
    #[validate(length(max = 120))]
    #[serde(default)]
    pub customer_name: String,
    #[validate(length(max = 32))]
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub booking_date: Option<NaiveDate>,
    /// Free-text arrival time, e.g. "7:30 PM"
    #[validate(length(max = 32))]
    #[serde(default)]
    pub arrival_time: String,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub allergies: String,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub occasion: String,
    /// Checked special-request options (predefined labels)
    #[serde(default)]
    pub special_requests: Vec<String>,
    /// Free text for the "Others" special request
    #[serde(default)]
    pub other_request: Option<String>,
}

impl BookingInfo {
    /// All required fields present (date window and guest counts are
    /// checked separately).
    pub fn is_complete(&self) -> bool {
        !self.customer_name.trim().is_empty()
            && !self.contact_number.trim().is_empty()
            && self.booking_date.is_some()
            && !self.arrival_time.trim().is_empty()
    }

    /// Special requests flattened for the summary, `Others` appended
    /// as a trailing entry when present.
    pub fn special_requests_line(&self) -> Option<String> {
        let mut parts: Vec<String> = self
            .special_requests
            .iter()
            .filter(|s| !s.trim().is_empty())
            .cloned()
            .collect();
        if let Some(other) = &self.other_request
            && !other.trim().is_empty()
        {
            parts.push(format!("Others: {}", other.trim()));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}
