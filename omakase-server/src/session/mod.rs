//! Menu sessions - the selection/validation state machine
//!
//! One [`MenuSession`] per configuring guest. All mutations go through
//! the methods here so the rule table, selection lists, and quantity
//! map stay mutually consistent:
//!
//! ```text
//! toggle / set_quantity ────────────────┐
//! set_serving_style ─ mains reset ──────┤
//! set_course_tier ─── starters cap ─────┼─→ validate() → can_submit
//! set_guests ──────── quantity rebound, │
//!                     desserts cap,     │
//!                     mains cascade ────┘
//! ```
//!
//! Sessions live in the in-memory [`SessionService`] registry; there
//! is no persistence, mirroring the single-visit nature of the form.

mod quantity;
mod rules;
mod selection;
mod summary;
mod validation;

#[cfg(test)]
mod tests;

pub use quantity::QuantityMap;
pub use rules::RuleTable;
pub use selection::{SelectionState, ToggleOutcome};
pub use validation::{CategoryStatus, ValidationReport, quantity_rule_applies};

use chrono::{DateTime, NaiveDate, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{BookingInfo, CourseCategory, CourseTier, GuestCounts, MenuItem};
use shared::types::{MealPeriod, ServingStyle};
use std::collections::HashMap;
use uuid::Uuid;
use validator::Validate;

/// Add-on portions are picked from a fixed 1..=5 dropdown
const ADDON_MAX_PORTIONS: u32 = 5;

/// One guest's in-progress menu configuration
#[derive(Debug, Clone)]
pub struct MenuSession {
    pub id: Uuid,
    pub meal: MealPeriod,
    pub readonly: bool,
    pub serving_style: ServingStyle,
    pub tier: CourseTier,
    pub guests: GuestCounts,
    pub booking: BookingInfo,
    pub created_at: DateTime<Utc>,
    rules: RuleTable,
    selection: SelectionState,
    quantities: QuantityMap,
}

impl MenuSession {
    /// Create a fresh session for a meal period
    ///
    /// The course tier starts at the meal's default and the rule caps
    /// are derived from it and from the default guest counts.
    pub fn new(meal: MealPeriod, readonly: bool) -> AppResult<Self> {
        let tier = CourseTier::default_for(meal)
            .ok_or_else(|| AppError::new(ErrorCode::TierNotAvailable))?;
        let guests = GuestCounts::default();

        let mut rules = RuleTable::new();
        rules.set_max_selections(CourseCategory::Starters, tier.starter_count);
        rules.set_max_selections(
            CourseCategory::Mains,
            RuleTable::mains_cap(ServingStyle::Individual, guests.adults),
        );
        rules.set_max_selections(
            CourseCategory::Desserts,
            RuleTable::desserts_cap(guests.adults),
        );

        let selection = SelectionState::new(&rules);
        Ok(Self {
            id: Uuid::new_v4(),
            meal,
            readonly,
            serving_style: ServingStyle::Individual,
            tier,
            guests,
            booking: BookingInfo::default(),
            created_at: Utc::now(),
            rules,
            selection,
            quantities: QuantityMap::new(),
        })
    }

    fn ensure_mutable(&self) -> AppResult<()> {
        if self.readonly {
            Err(AppError::session_readonly())
        } else {
            Ok(())
        }
    }

    // ==================== Toggle / quantities ====================

    /// Toggle an item's membership in a category
    ///
    /// The item must be offered for the session's meal period, and a
    /// main must match the current serving style. Selecting an add-on
    /// with no recorded quantity defaults it to one portion.
    pub fn toggle(&mut self, category: CourseCategory, item: MenuItem) -> AppResult<ToggleOutcome> {
        self.ensure_mutable()?;

        if !item.meal_availability.includes(self.meal) {
            return Err(AppError::with_message(
                ErrorCode::ItemNotSelectable,
                format!("{} is not offered for {}", item.name, self.meal),
            ));
        }
        if category == CourseCategory::Mains && item.serving_style != self.serving_style {
            return Err(AppError::with_message(
                ErrorCode::ItemNotSelectable,
                format!(
                    "{} is a {} dish but the session is set to {}",
                    item.name, item.serving_style, self.serving_style
                ),
            ));
        }

        let item_id = item.id.clone();
        let outcome = self
            .selection
            .toggle(category, item, self.rules.max_selections(category));

        match &outcome {
            ToggleOutcome::Deselected => self.quantities.remove(&item_id),
            ToggleOutcome::Replaced { previous } => self.quantities.remove(&previous.id),
            ToggleOutcome::Selected => {
                if category == CourseCategory::Addons && !self.quantities.contains(&item_id) {
                    self.quantities.set(&item_id, Some(1));
                }
            }
            ToggleOutcome::Rejected => {}
        }
        Ok(outcome)
    }

    /// Set or clear the portion/guest quantity for a selected item
    ///
    /// `None` reverts to "unspecified". Quantities only exist for
    /// currently selected items in categories where the selector is
    /// shown: not starters, not sharing-style mains.
    pub fn set_quantity(&mut self, item_id: &str, value: Option<u32>) -> AppResult<()> {
        self.ensure_mutable()?;

        let category = self.selection.category_of(item_id).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::ItemNotFound,
                format!("Menu item {} is not selected", item_id),
            )
        })?;

        if category == CourseCategory::Starters
            || (category == CourseCategory::Mains && self.serving_style == ServingStyle::Sharing)
        {
            return Err(AppError::with_message(
                ErrorCode::InvalidRequest,
                format!("Quantities do not apply to {}", category.display_name()),
            ));
        }

        if let Some(v) = value {
            let (min, max) = if category == CourseCategory::Addons {
                (1, ADDON_MAX_PORTIONS)
            } else {
                (0, self.guests.adults)
            };
            if v < min || v > max {
                return Err(AppError::new(ErrorCode::QuantityOutOfRange)
                    .with_detail("item_id", item_id)
                    .with_detail("quantity", v)
                    .with_detail("max", max));
            }
        }

        self.quantities.set(item_id, value);
        Ok(())
    }

    // ==================== Structural cascades ====================

    /// Switch the main-course serving style
    ///
    /// Every transition is a full reset of the mains subsystem: cap,
    /// selections, and quantities. Nothing carries over between
    /// styles.
    pub fn set_serving_style(&mut self, style: ServingStyle) -> AppResult<()> {
        self.ensure_mutable()?;
        self.serving_style = style;
        self.reset_mains();
        Ok(())
    }

    /// Pick a course tier, adjusting the starter quota
    pub fn set_course_tier(&mut self, courses: u8) -> AppResult<()> {
        self.ensure_mutable()?;
        let tier = CourseTier::find(courses, self.meal).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::TierNotAvailable,
                format!("No {}-course menu for {}", courses, self.meal),
            )
        })?;
        self.apply_cap(CourseCategory::Starters, tier.starter_count);
        self.tier = tier;
        Ok(())
    }

    /// Update the party composition
    ///
    /// Per-field bounds are rejected outright (the selectors cannot
    /// produce them); a combined seating-cap overflow is accepted and
    /// surfaced by the validation report instead. The adult count
    /// re-bounds quantities, recomputes the desserts cap, and cascades
    /// into the mains reset while sharing.
    pub fn set_guests(&mut self, guests: GuestCounts) -> AppResult<()> {
        self.ensure_mutable()?;
        guests.validate_bounds()?;
        self.apply_guest_cascade(guests);
        Ok(())
    }

    /// Replace booking fields that are present in the update
    pub fn update_booking(&mut self, update: BookingUpdate) -> AppResult<()> {
        self.ensure_mutable()?;
        let booking = &mut self.booking;
        if let Some(v) = update.customer_name {
            booking.customer_name = v;
        }
        if let Some(v) = update.contact_number {
            booking.contact_number = v;
        }
        if let Some(v) = update.booking_date {
            booking.booking_date = Some(v);
        }
        if let Some(v) = update.arrival_time {
            booking.arrival_time = v;
        }
        if let Some(v) = update.allergies {
            booking.allergies = v;
        }
        if let Some(v) = update.occasion {
            booking.occasion = v;
        }
        if let Some(v) = update.special_requests {
            booking.special_requests = v;
        }
        if let Some(v) = update.other_request {
            booking.other_request = if v.trim().is_empty() { None } else { Some(v) };
        }
        Ok(())
    }

    /// Cap a category, truncating overflowing selections (stable,
    /// insertion order) and clearing quantities of the removed items
    fn apply_cap(&mut self, category: CourseCategory, n: usize) {
        self.rules.set_max_selections(category, n);
        let removed = self.selection.truncate(category, n);
        self.quantities
            .remove_all(removed.iter().map(|i| i.id.as_str()));
    }

    /// Wholesale mains reset: recompute the cap for the current style
    /// and adult count, drop all mains selections and their quantities
    fn reset_mains(&mut self) {
        let cap = RuleTable::mains_cap(self.serving_style, self.guests.adults);
        self.rules.set_max_selections(CourseCategory::Mains, cap);
        let removed = self.selection.clear(CourseCategory::Mains);
        self.quantities
            .remove_all(removed.iter().map(|i| i.id.as_str()));
    }

    fn apply_guest_cascade(&mut self, guests: GuestCounts) {
        self.guests = guests;

        // Quantity selectors re-bound to [0, adults]; stale values
        // above the bound revert to unspecified. Add-ons keep their
        // fixed 1..=5 range.
        for category in CourseCategory::ALL {
            if category == CourseCategory::Addons {
                continue;
            }
            let ids: Vec<String> = self
                .selection
                .items(category)
                .iter()
                .map(|i| i.id.clone())
                .collect();
            self.quantities
                .drop_above(ids.iter().map(|s| s.as_str()), guests.adults);
        }

        self.apply_cap(
            CourseCategory::Desserts,
            RuleTable::desserts_cap(guests.adults),
        );

        // Sharing caps depend on the adult count crossing eight
        if self.serving_style == ServingStyle::Sharing {
            self.reset_mains();
        }
    }

    // ==================== Projections ====================

    /// Current validity picture, date checks relative to `today`
    pub fn validate(&self, today: NaiveDate) -> ValidationReport {
        validation::evaluate(self, today)
    }

    /// Plain-text summary of the current selections
    pub fn summary_text(&self) -> String {
        summary::render_text(self)
    }

    /// Full state snapshot for API responses
    pub fn snapshot(&self, today: NaiveDate) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            meal: self.meal,
            readonly: self.readonly,
            serving_style: self.serving_style,
            tier: self.tier.clone(),
            guests: self.guests,
            booking: self.booking.clone(),
            selections: CourseCategory::ALL
                .into_iter()
                .map(|category| SelectionView {
                    category,
                    max_selections: self.rules.max_selections(category),
                    items: self.selection.items(category).into_iter().cloned().collect(),
                })
                .collect(),
            quantities: self.quantities.entries().clone(),
            report: self.validate(today),
            summary: self.summary_text(),
        }
    }

    /// Selected items of one category, in selection order
    pub fn selected(&self, category: CourseCategory) -> Vec<&MenuItem> {
        self.selection.items(category)
    }

    /// Recorded quantity for an item (0 when unspecified)
    pub fn quantity(&self, item_id: &str) -> u32 {
        self.quantities.get(item_id)
    }

    /// Whether a quantity is recorded (an explicit 0 counts)
    pub fn has_quantity(&self, item_id: &str) -> bool {
        self.quantities.contains(item_id)
    }

    /// Current cap for a category
    pub fn max_selections(&self, category: CourseCategory) -> usize {
        self.rules.max_selections(category)
    }
}

/// Partial booking-info update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BookingUpdate {
    #[validate(length(max = 120))]
    pub customer_name: Option<String>,
    #[validate(length(max = 32))]
    pub contact_number: Option<String>,
    pub booking_date: Option<NaiveDate>,
    #[validate(length(max = 32))]
    pub arrival_time: Option<String>,
    #[validate(length(max = 500))]
    pub allergies: Option<String>,
    #[validate(length(max = 200))]
    pub occasion: Option<String>,
    pub special_requests: Option<Vec<String>>,
    pub other_request: Option<String>,
}

/// Per-category slice of a snapshot
#[derive(Debug, Clone, Serialize)]
pub struct SelectionView {
    pub category: CourseCategory,
    pub max_selections: usize,
    pub items: Vec<MenuItem>,
}

/// Serializable session state for API responses
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub meal: MealPeriod,
    pub readonly: bool,
    pub serving_style: ServingStyle,
    pub tier: CourseTier,
    pub guests: GuestCounts,
    pub booking: BookingInfo,
    pub selections: Vec<SelectionView>,
    pub quantities: HashMap<String, u32>,
    pub report: ValidationReport,
    pub summary: String,
}

/// Options for creating a session (query-parameter driven)
#[derive(Debug, Clone, Default)]
pub struct CreateSessionOptions {
    pub meal: MealPeriod,
    pub readonly: bool,
    pub customer_name: Option<String>,
    pub contact_number: Option<String>,
    pub booking_date: Option<NaiveDate>,
    pub num_adults: Option<u32>,
}

/// In-memory session registry
#[derive(Debug, Default)]
pub struct SessionService {
    sessions: DashMap<Uuid, MenuSession>,
}

impl SessionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a session, applying prepopulation values
    ///
    /// Prepopulated fields behave as if the guest had entered them:
    /// a valid adult count runs the full guest cascade; an invalid
    /// one is ignored with a warning, like a link with a bad value.
    pub fn create(&self, opts: CreateSessionOptions) -> AppResult<Uuid> {
        let mut session = MenuSession::new(opts.meal, opts.readonly)?;

        if let Some(name) = opts.customer_name {
            session.booking.customer_name = name;
        }
        if let Some(contact) = opts.contact_number {
            session.booking.contact_number = contact;
        }
        if let Some(date) = opts.booking_date {
            session.booking.booking_date = Some(date);
        }
        if let Some(adults) = opts.num_adults {
            let guests = GuestCounts::new(adults, 0, 0);
            match guests.validate_bounds() {
                Ok(()) => session.apply_guest_cascade(guests),
                Err(e) => {
                    tracing::warn!(adults, error = %e, "Ignoring prepopulated adult count")
                }
            }
        }

        let id = session.id;
        tracing::info!(session_id = %id, meal = %session.meal, readonly = session.readonly, "Session created");
        self.sessions.insert(id, session);
        Ok(id)
    }

    /// Run a closure against a session
    pub fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&MenuSession) -> AppResult<R>,
    ) -> AppResult<R> {
        let session = self
            .sessions
            .get(&id)
            .ok_or_else(|| AppError::session_not_found(id.to_string()))?;
        f(&session)
    }

    /// Run a mutating closure against a session
    pub fn with_session_mut<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut MenuSession) -> AppResult<R>,
    ) -> AppResult<R> {
        let mut session = self
            .sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::session_not_found(id.to_string()))?;
        f(&mut session)
    }

    /// Drop a session
    pub fn remove(&self, id: Uuid) -> AppResult<()> {
        self.sessions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::session_not_found(id.to_string()))
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
