//! Selection state: which items are chosen per category
//!
//! Multi-select categories keep an ordered list (insertion order is
//! selection order and decides what survives a cap reduction);
//! single-select categories keep one optional slot. The single-select
//! variant is unused by the default rule set but stays part of the
//! contract.

use shared::models::{CourseCategory, MenuItem};
use crate::session::rules::RuleTable;

/// Result of a toggle operation
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    /// Item added to the category
    Selected,
    /// Item was selected and has been removed
    Deselected,
    /// Single-select slot: previous item swapped out
    Replaced { previous: MenuItem },
    /// Category already at its cap; nothing changed
    Rejected,
}

#[derive(Debug, Clone)]
enum SelectionSlot {
    Multi(Vec<MenuItem>),
    Single(Option<MenuItem>),
}

/// Per-category selections
#[derive(Debug, Clone)]
pub struct SelectionState {
    slots: [SelectionSlot; CourseCategory::ALL.len()],
}

impl SelectionState {
    /// Build slots matching the rule table's multiplicity
    pub fn new(rules: &RuleTable) -> Self {
        Self {
            slots: CourseCategory::ALL.map(|c| {
                if rules.rule(c).allow_multiple {
                    SelectionSlot::Multi(Vec::new())
                } else {
                    SelectionSlot::Single(None)
                }
            }),
        }
    }

    fn slot(&self, category: CourseCategory) -> &SelectionSlot {
        &self.slots[category as usize]
    }

    fn slot_mut(&mut self, category: CourseCategory) -> &mut SelectionSlot {
        &mut self.slots[category as usize]
    }

    /// Selected items in selection order
    pub fn items(&self, category: CourseCategory) -> Vec<&MenuItem> {
        match self.slot(category) {
            SelectionSlot::Multi(items) => items.iter().collect(),
            SelectionSlot::Single(item) => item.iter().collect(),
        }
    }

    pub fn count(&self, category: CourseCategory) -> usize {
        match self.slot(category) {
            SelectionSlot::Multi(items) => items.len(),
            SelectionSlot::Single(item) => usize::from(item.is_some()),
        }
    }

    pub fn contains(&self, category: CourseCategory, item_id: &str) -> bool {
        self.items(category).iter().any(|i| i.id == item_id)
    }

    /// Category an item is currently selected in, if any
    pub fn category_of(&self, item_id: &str) -> Option<CourseCategory> {
        CourseCategory::ALL
            .into_iter()
            .find(|c| self.contains(*c, item_id))
    }

    /// Toggle an item's membership, honoring the cap
    ///
    /// A toggle on a selected item always deselects. A toggle on a new
    /// item selects it only below the cap; at the cap the operation is
    /// rejected with no state change. Single-select slots swap instead
    /// of rejecting.
    pub fn toggle(
        &mut self,
        category: CourseCategory,
        item: MenuItem,
        max_selections: usize,
    ) -> ToggleOutcome {
        match self.slot_mut(category) {
            SelectionSlot::Multi(items) => {
                if let Some(pos) = items.iter().position(|i| i.id == item.id) {
                    items.remove(pos);
                    ToggleOutcome::Deselected
                } else if items.len() < max_selections {
                    items.push(item);
                    ToggleOutcome::Selected
                } else {
                    ToggleOutcome::Rejected
                }
            }
            SelectionSlot::Single(slot) => match slot.take() {
                Some(previous) if previous.id == item.id => ToggleOutcome::Deselected,
                Some(previous) => {
                    *slot = Some(item);
                    ToggleOutcome::Replaced { previous }
                }
                None => {
                    *slot = Some(item);
                    ToggleOutcome::Selected
                }
            },
        }
    }

    /// Remove every selection in a category, returning the removed items
    pub fn clear(&mut self, category: CourseCategory) -> Vec<MenuItem> {
        match self.slot_mut(category) {
            SelectionSlot::Multi(items) => std::mem::take(items),
            SelectionSlot::Single(item) => item.take().into_iter().collect(),
        }
    }

    /// Keep the first `n` selections (insertion order), returning the
    /// truncated tail
    pub fn truncate(&mut self, category: CourseCategory, n: usize) -> Vec<MenuItem> {
        match self.slot_mut(category) {
            SelectionSlot::Multi(items) => {
                if items.len() > n {
                    items.split_off(n)
                } else {
                    Vec::new()
                }
            }
            SelectionSlot::Single(item) => {
                if n == 0 {
                    item.take().into_iter().collect()
                } else {
                    Vec::new()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::types::{MealAvailability, ServingStyle};

    fn item(id: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            description: String::new(),
            image: String::new(),
            upgrade_price: Default::default(),
            upgrade_caption: String::new(),
            remarks: String::new(),
            remarks_color: None,
            serving_style: ServingStyle::Individual,
            is_signature: false,
            meal_availability: MealAvailability::Both,
        }
    }

    fn multi_state() -> SelectionState {
        SelectionState::new(&RuleTable::new())
    }

    #[test]
    fn test_toggle_select_deselect() {
        let mut state = multi_state();
        let c = CourseCategory::Soups;

        assert_eq!(state.toggle(c, item("a"), 2), ToggleOutcome::Selected);
        assert!(state.contains(c, "a"));
        assert_eq!(state.count(c), 1);

        assert_eq!(state.toggle(c, item("a"), 2), ToggleOutcome::Deselected);
        assert!(!state.contains(c, "a"));
        assert_eq!(state.count(c), 0);
    }

    #[test]
    fn test_toggle_rejected_at_cap() {
        let mut state = multi_state();
        let c = CourseCategory::Starters;

        assert_eq!(state.toggle(c, item("a"), 1), ToggleOutcome::Selected);
        assert_eq!(state.toggle(c, item("b"), 1), ToggleOutcome::Rejected);
        assert_eq!(state.count(c), 1);
        assert!(!state.contains(c, "b"));
        // Deselecting still works at the cap
        assert_eq!(state.toggle(c, item("a"), 1), ToggleOutcome::Deselected);
    }

    #[test]
    fn test_selection_order_preserved() {
        let mut state = multi_state();
        let c = CourseCategory::Desserts;
        for id in ["x", "y", "z"] {
            state.toggle(c, item(id), 3);
        }
        let ids: Vec<&str> = state.items(c).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["x", "y", "z"]);
    }

    #[test]
    fn test_truncate_keeps_head() {
        let mut state = multi_state();
        let c = CourseCategory::Desserts;
        for id in ["x", "y", "z"] {
            state.toggle(c, item(id), 3);
        }
        let removed = state.truncate(c, 2);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].id, "z");
        let ids: Vec<&str> = state.items(c).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["x", "y"]);

        // Truncating below the count again
        assert!(state.truncate(c, 2).is_empty());
    }

    #[test]
    fn test_clear_returns_removed() {
        let mut state = multi_state();
        let c = CourseCategory::Mains;
        state.toggle(c, item("m1"), 2);
        state.toggle(c, item("m2"), 2);
        let removed = state.clear(c);
        assert_eq!(removed.len(), 2);
        assert_eq!(state.count(c), 0);
    }

    #[test]
    fn test_single_slot_swap_and_toggle_off() {
        // Single-select is unused by the default rules but part of the
        // contract: selecting a new item swaps the previous one out.
        let mut state = multi_state();
        state.slots[CourseCategory::Soups as usize] = SelectionSlot::Single(None);
        let c = CourseCategory::Soups;

        assert_eq!(state.toggle(c, item("a"), 1), ToggleOutcome::Selected);
        match state.toggle(c, item("b"), 1) {
            ToggleOutcome::Replaced { previous } => assert_eq!(previous.id, "a"),
            other => panic!("expected swap, got {:?}", other),
        }
        assert_eq!(state.count(c), 1);
        assert!(state.contains(c, "b"));

        assert_eq!(state.toggle(c, item("b"), 1), ToggleOutcome::Deselected);
        assert_eq!(state.count(c), 0);

        // Truncating a single slot to zero empties it
        state.toggle(c, item("a"), 1);
        let removed = state.truncate(c, 0);
        assert_eq!(removed.len(), 1);
        assert_eq!(state.count(c), 0);
    }

    #[test]
    fn test_category_of() {
        let mut state = multi_state();
        state.toggle(CourseCategory::Soups, item("s"), 2);
        assert_eq!(state.category_of("s"), Some(CourseCategory::Soups));
        assert_eq!(state.category_of("nope"), None);
    }
}
