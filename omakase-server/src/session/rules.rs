//! Per-category selection rule table
//!
//! Caps start from the category defaults and are adjusted by three
//! triggers: the course tier (starters), the serving style and adult
//! count (mains), and the adult count alone (desserts).

use shared::models::{CategoryRule, CourseCategory};
use shared::types::ServingStyle;

/// Rule records for every category
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: [CategoryRule; CourseCategory::ALL.len()],
}

impl RuleTable {
    pub fn new() -> Self {
        Self {
            rules: CourseCategory::ALL.map(CategoryRule::default_for),
        }
    }

    pub fn rule(&self, category: CourseCategory) -> &CategoryRule {
        &self.rules[category as usize]
    }

    pub fn max_selections(&self, category: CourseCategory) -> usize {
        self.rule(category).max_selections
    }

    /// Update a cap; selection truncation is the session's job
    pub fn set_max_selections(&mut self, category: CourseCategory, n: usize) {
        self.rules[category as usize].max_selections = n;
    }

    /// Mains cap for a serving style: sharing parties pick one dish
    /// for the table (two for parties above eight adults), individual
    /// style always allows two.
    pub fn mains_cap(style: ServingStyle, adults: u32) -> usize {
        match style {
            ServingStyle::Sharing => {
                if adults > 8 {
                    2
                } else {
                    1
                }
            }
            ServingStyle::Individual => 2,
        }
    }

    /// Desserts cap: a two-adult party gets two dessert picks, larger
    /// parties three.
    pub fn desserts_cap(adults: u32) -> usize {
        if adults == 2 { 2 } else { 3 }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_rules() {
        let table = RuleTable::new();
        assert_eq!(table.max_selections(CourseCategory::Soups), 2);
        assert_eq!(table.max_selections(CourseCategory::Starters), 2);
        assert_eq!(table.max_selections(CourseCategory::Mains), 2);
        assert_eq!(table.max_selections(CourseCategory::Desserts), 3);
        assert_eq!(
            table.max_selections(CourseCategory::Addons),
            CategoryRule::UNLIMITED
        );
    }

    #[test]
    fn test_set_max_selections() {
        let mut table = RuleTable::new();
        table.set_max_selections(CourseCategory::Starters, 5);
        assert_eq!(table.max_selections(CourseCategory::Starters), 5);
        // Other categories untouched
        assert_eq!(table.max_selections(CourseCategory::Desserts), 3);
    }

    #[test]
    fn test_mains_cap() {
        assert_eq!(RuleTable::mains_cap(ServingStyle::Individual, 2), 2);
        assert_eq!(RuleTable::mains_cap(ServingStyle::Individual, 12), 2);
        assert_eq!(RuleTable::mains_cap(ServingStyle::Sharing, 8), 1);
        assert_eq!(RuleTable::mains_cap(ServingStyle::Sharing, 9), 2);
    }

    #[test]
    fn test_desserts_cap() {
        assert_eq!(RuleTable::desserts_cap(2), 2);
        assert_eq!(RuleTable::desserts_cap(3), 3);
        assert_eq!(RuleTable::desserts_cap(18), 3);
    }
}
