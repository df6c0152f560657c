//! Core enums shared across the configurator

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a main course is served
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServingStyle {
    /// One plate per guest
    #[default]
    Individual,
    /// Shared dishes for the table
    Sharing,
}

impl ServingStyle {
    /// Lenient parse from catalog data; unrecognized values fall back to
    /// individual, matching how the catalog source is curated.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "sharing" => Self::Sharing,
            _ => Self::Individual,
        }
    }
}

impl fmt::Display for ServingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Individual => write!(f, "individual"),
            Self::Sharing => write!(f, "sharing"),
        }
    }
}

/// Meal period requested by the guest (query parameter `meal`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum MealPeriod {
    Lunch,
    /// Default when the parameter is absent or unrecognized
    #[default]
    Dinner,
}

impl MealPeriod {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "lunch" => Self::Lunch,
            _ => Self::Dinner,
        }
    }
}

impl fmt::Display for MealPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lunch => write!(f, "lunch"),
            Self::Dinner => write!(f, "dinner"),
        }
    }
}

/// Which meal periods an item or tier is offered for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum MealAvailability {
    Lunch,
    Dinner,
    /// Default when the catalog column is blank
    #[default]
    Both,
}

impl MealAvailability {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            _ => Self::Both,
        }
    }

    /// Whether this availability covers the given meal period
    pub fn includes(&self, meal: MealPeriod) -> bool {
        match self {
            Self::Both => true,
            Self::Lunch => meal == MealPeriod::Lunch,
            Self::Dinner => meal == MealPeriod::Dinner,
        }
    }
}
