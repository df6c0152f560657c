//! Course tiers: the fixed 4..8-course menu bundles
//!
//! Each tier carries its price, the starter quota it grants, and the
//! meal periods it is offered for. The 4-course menu is a lunch-only
//! offering and the lunch default; the 6-course menu is the dinner
//! default.

use crate::types::{MealAvailability, MealPeriod};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One course-count bundle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseTier {
    /// Number of courses (4..=8)
    pub courses: u8,
    /// Label shown in the dropdown and in outbound messages
    pub label: String,
    /// Menu price per booking
    pub price: Decimal,
    /// Meal periods this tier is offered for
    pub meals: MealAvailability,
    /// Preselected tier for its meal period
    pub is_default: bool,
    /// How many starters this tier includes (drives the starters cap)
    pub starter_count: usize,
}

impl CourseTier {
    /// The full tier table in menu order
    pub fn all() -> Vec<CourseTier> {
        vec![
            CourseTier {
                courses: 4,
                label: "4 Course Lunch Menu - 1 starter ($448)".to_string(),
                price: Decimal::from(448),
                meals: MealAvailability::Lunch,
                is_default: true,
                starter_count: 1,
            },
            CourseTier {
                courses: 5,
                label: "5 Course Menu - 2 starters ($580)".to_string(),
                price: Decimal::from(580),
                meals: MealAvailability::Both,
                is_default: false,
                starter_count: 2,
            },
            CourseTier {
                courses: 6,
                label: "6 Course Menu - 3 starters ($638)".to_string(),
                price: Decimal::from(638),
                meals: MealAvailability::Both,
                is_default: true,
                starter_count: 3,
            },
            CourseTier {
                courses: 7,
                label: "7 Course Menu - 4 starters ($688)".to_string(),
                price: Decimal::from(688),
                meals: MealAvailability::Both,
                is_default: false,
                starter_count: 4,
            },
            CourseTier {
                courses: 8,
                label: "8 Course Menu - 5 starters ($728)".to_string(),
                price: Decimal::from(728),
                meals: MealAvailability::Both,
                is_default: false,
                starter_count: 5,
            },
        ]
    }

    /// Tiers offered for a meal period, in menu order
    pub fn available_for(meal: MealPeriod) -> Vec<CourseTier> {
        Self::all()
            .into_iter()
            .filter(|t| t.meals.includes(meal))
            .collect()
    }

    /// The preselected tier for a meal period: the first flagged
    /// default among the available tiers, else the first available.
    pub fn default_for(meal: MealPeriod) -> Option<CourseTier> {
        let available = Self::available_for(meal);
        available
            .iter()
            .find(|t| t.is_default)
            .cloned()
            .or_else(|| available.into_iter().next())
    }

    /// Look up a tier by course count, restricted to a meal period
    pub fn find(courses: u8, meal: MealPeriod) -> Option<CourseTier> {
        Self::available_for(meal)
            .into_iter()
            .find(|t| t.courses == courses)
    }
}
