//! Course categories and selection rules

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One course grouping of the set menu
///
/// A closed enum rather than free-form keys so that rule lookups are
/// exhaustive and the compiler tracks every category-specific branch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CourseCategory {
    Soups,
    Starters,
    Mains,
    Desserts,
    Addons,
}

impl CourseCategory {
    /// All categories in display/summary order
    pub const ALL: [CourseCategory; 5] = [
        Self::Soups,
        Self::Starters,
        Self::Mains,
        Self::Desserts,
        Self::Addons,
    ];

    /// Stable key used in API paths and catalog data
    pub fn key(&self) -> &'static str {
        match self {
            Self::Soups => "soups",
            Self::Starters => "starters",
            Self::Mains => "mains",
            Self::Desserts => "desserts",
            Self::Addons => "addons",
        }
    }

    /// Human-readable name used in summaries and error messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Soups => "Soups",
            Self::Starters => "Starters",
            Self::Mains => "Main Courses",
            Self::Desserts => "Desserts",
            Self::Addons => "Add-ons",
        }
    }

}

impl FromStr for CourseCategory {
    type Err = String;

    /// Tolerant of catalog spellings: case-insensitive, internal
    /// whitespace and hyphens ignored ("Main Courses" == "mains").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "soups" | "soup" => Ok(Self::Soups),
            "starters" | "starter" => Ok(Self::Starters),
            "mains" | "main" | "maincourses" | "maincourse" => Ok(Self::Mains),
            "desserts" | "dessert" => Ok(Self::Desserts),
            "addons" | "addon" => Ok(Self::Addons),
            _ => Err(format!("unknown category: {}", s)),
        }
    }
}

impl fmt::Display for CourseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Selection rule for one category
///
/// `max_selections` is the only field mutated at runtime; the cascade
/// triggers live in the session layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryRule {
    /// Upper bound on concurrent selections
    pub max_selections: usize,
    /// Multi-select list vs. single-select slot
    pub allow_multiple: bool,
    /// Category must be valid for the booking to submit
    pub required: bool,
    /// Valid only at exactly `max_selections` (starters), not 1..=max
    pub exact_count: bool,
}

impl CategoryRule {
    /// Effectively unlimited cap for the add-ons category
    pub const UNLIMITED: usize = 99;

    /// The initial rule set; course count, serving style, and adult
    /// count adjust the caps afterwards.
    pub fn default_for(category: CourseCategory) -> Self {
        match category {
            CourseCategory::Soups => Self {
                max_selections: 2,
                allow_multiple: true,
                required: true,
                exact_count: false,
            },
            CourseCategory::Starters => Self {
                max_selections: 2,
                allow_multiple: true,
                required: true,
                exact_count: true,
            },
            CourseCategory::Mains => Self {
                max_selections: 2,
                allow_multiple: true,
                required: true,
                exact_count: false,
            },
            CourseCategory::Desserts => Self {
                max_selections: 3,
                allow_multiple: true,
                required: true,
                exact_count: false,
            },
            CourseCategory::Addons => Self {
                max_selections: Self::UNLIMITED,
                allow_multiple: true,
                required: false,
                exact_count: false,
            },
        }
    }
}
