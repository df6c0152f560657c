//! Guest counts and table capacity rules

use crate::error::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};

/// Seated guests the largest table can hold (adults + kids)
pub const MAX_CAPACITY: u32 = 18;
/// Kids or toddlers allowed per booking
pub const MAX_CHILDREN: u32 = 9;
/// Set menus are for two or more adults
pub const MIN_ADULTS: u32 = 2;

/// Party composition for a booking
///
/// Toddlers do not count towards the seating cap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestCounts {
    pub adults: u32,
    #[serde(default)]
    pub kids: u32,
    #[serde(default)]
    pub toddlers: u32,
}

impl Default for GuestCounts {
    fn default() -> Self {
        Self {
            adults: MIN_ADULTS,
            kids: 0,
            toddlers: 0,
        }
    }
}

impl GuestCounts {
    pub fn new(adults: u32, kids: u32, toddlers: u32) -> Self {
        Self {
            adults,
            kids,
            toddlers,
        }
    }

    /// Guests occupying a seat
    pub fn seated(&self) -> u32 {
        self.adults + self.kids
    }

    /// Whether adults + kids exceed the seating cap
    ///
    /// A cap overflow is a reportable state (inline error), not a
    /// rejected mutation; the individual bounds below are rejected
    /// outright.
    pub fn capacity_exceeded(&self) -> bool {
        self.seated() > MAX_CAPACITY
    }

    /// Check the per-field bounds that the selectors enforce
    pub fn validate_bounds(&self) -> AppResult<()> {
        if self.adults < MIN_ADULTS {
            return Err(AppError::new(ErrorCode::AdultCountTooLow)
                .with_detail("adults", self.adults)
                .with_detail("min", MIN_ADULTS));
        }
        if self.adults > MAX_CAPACITY {
            return Err(AppError::with_message(
                ErrorCode::GuestCapacityExceeded,
                format!("Adult count cannot exceed {}", MAX_CAPACITY),
            )
            .with_detail("adults", self.adults));
        }
        if self.kids > MAX_CHILDREN || self.toddlers > MAX_CHILDREN {
            return Err(AppError::new(ErrorCode::ChildCountExceeded)
                .with_detail("kids", self.kids)
                .with_detail("toddlers", self.toddlers)
                .with_detail("max", MAX_CHILDREN));
        }
        Ok(())
    }

    /// Check all capacity rules, including the combined seating cap
    pub fn validate(&self) -> AppResult<()> {
        self.validate_bounds()?;
        if self.capacity_exceeded() {
            return Err(AppError::with_message(
                ErrorCode::GuestCapacityExceeded,
                format!(
                    "The combined number of adults and children cannot exceed {}",
                    MAX_CAPACITY
                ),
            )
            .with_detail("seated", self.seated()));
        }
        Ok(())
    }
}
