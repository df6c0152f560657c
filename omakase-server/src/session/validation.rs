//! Validation engine
//!
//! Derives per-category and overall validity from the selection
//! state, rule table, and guest counts. Re-evaluated after every
//! mutation; the result gates submission.

use super::MenuSession;
use crate::utils::date_in_window;
use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{CourseCategory, MAX_CAPACITY};
use shared::types::ServingStyle;

/// Validity of one category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryStatus {
    pub category: CourseCategory,
    pub selected: usize,
    pub max_selections: usize,
    pub required: bool,
    /// Selection count within the category's rule
    pub selection_valid: bool,
    /// Summed quantities within the adult count (vacuously true where
    /// the quantity rule does not apply)
    pub quantity_valid: bool,
    pub total_quantity: u32,
    /// Both sub-checks pass
    pub valid: bool,
}

/// Full validity picture for a session
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Required booking fields all present
    pub booking_complete: bool,
    /// Seating-cap violation, rendered inline next to the guest controls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_error: Option<String>,
    /// Date-window violation, rendered inline next to the date control
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_error: Option<String>,
    /// Booking fields complete and free of inline errors
    pub basic_info_valid: bool,
    pub categories: Vec<CategoryStatus>,
    /// Basic info valid and every required category valid
    pub can_submit: bool,
}

impl ValidationReport {
    /// Status row for one category
    pub fn category(&self, category: CourseCategory) -> &CategoryStatus {
        // ALL ordering matches the report rows
        &self.categories[category as usize]
    }
}

/// Whether summed quantities are checked against the adult count
///
/// Starters carry no quantities (the tier fixes their count), add-ons
/// are unlimited, and sharing-style mains are exempt: shared dishes
/// are not per-guest.
pub fn quantity_rule_applies(category: CourseCategory, style: ServingStyle) -> bool {
    match category {
        CourseCategory::Starters | CourseCategory::Addons => false,
        CourseCategory::Mains => style == ServingStyle::Individual,
        _ => true,
    }
}

/// Evaluate a session against all rules
pub(super) fn evaluate(session: &MenuSession, today: NaiveDate) -> ValidationReport {
    let adults = session.guests.adults;

    let categories: Vec<CategoryStatus> = CourseCategory::ALL
        .into_iter()
        .map(|category| {
            let rule = session.rules.rule(category);
            let selected = session.selection.count(category);

            let selection_valid = if !rule.allow_multiple {
                selected == 1
            } else if rule.exact_count {
                selected == rule.max_selections
            } else if rule.required {
                selected >= 1 && selected <= rule.max_selections
            } else {
                selected <= rule.max_selections
            };

            let ids: Vec<&str> = session
                .selection
                .items(category)
                .iter()
                .map(|i| i.id.as_str())
                .collect();
            let total_quantity = session.quantities.sum(ids);
            let quantity_valid = !quantity_rule_applies(category, session.serving_style)
                || adults == 0
                || total_quantity <= adults;

            CategoryStatus {
                category,
                selected,
                max_selections: rule.max_selections,
                required: rule.required,
                selection_valid,
                quantity_valid,
                total_quantity,
                valid: selection_valid && quantity_valid,
            }
        })
        .collect();

    let guest_error = session.guests.capacity_exceeded().then(|| {
        format!(
            "The combined number of adults and children cannot exceed {}",
            MAX_CAPACITY
        )
    });

    let date_error = session
        .booking
        .booking_date
        .filter(|date| !date_in_window(*date, today))
        .map(|_| "Please select a date up to 3 months in advance.".to_string());

    let booking_complete = session.booking.is_complete();
    let basic_info_valid = booking_complete && guest_error.is_none() && date_error.is_none();

    let selections_valid = categories
        .iter()
        .filter(|s| s.required)
        .all(|s| s.valid);

    ValidationReport {
        booking_complete,
        guest_error,
        date_error,
        basic_info_valid,
        categories,
        can_submit: basic_info_valid && selections_valid,
    }
}
