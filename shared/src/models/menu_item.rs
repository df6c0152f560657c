//! Menu Item Model

use crate::types::{MealAvailability, ServingStyle};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One selectable dish, immutable once loaded from the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Resolved image URL (placeholder when the catalog has none)
    #[serde(default)]
    pub image: String,
    /// Per-guest surcharge on top of the tier price, zero for most items
    #[serde(default)]
    pub upgrade_price: Decimal,
    #[serde(default)]
    pub upgrade_caption: String,
    /// Ribbon text shown on the item card
    #[serde(default)]
    pub remarks: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks_color: Option<String>,
    /// Only meaningful for mains; everything else is individual
    #[serde(default)]
    pub serving_style: ServingStyle,
    #[serde(default)]
    pub is_signature: bool,
    #[serde(default)]
    pub meal_availability: MealAvailability,
}

impl MenuItem {
    /// Upgrade annotation reused by the item card and the summary,
    /// e.g. `(+$40 for Wagyu)`. None when the item has no surcharge.
    pub fn upgrade_label(&self) -> Option<String> {
        if self.upgrade_price <= Decimal::ZERO {
            return None;
        }
        let price = self.upgrade_price.round();
        if self.upgrade_caption.is_empty() {
            Some(format!("(+${})", price))
        } else {
            Some(format!("(+${} {})", price, self.upgrade_caption))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn item(price: i64, caption: &str) -> MenuItem {
        MenuItem {
            id: "m1".into(),
            name: "Test".into(),
            description: String::new(),
            image: String::new(),
            upgrade_price: Decimal::from(price),
            upgrade_caption: caption.into(),
            remarks: String::new(),
            remarks_color: None,
            serving_style: ServingStyle::Individual,
            is_signature: false,
            meal_availability: MealAvailability::Both,
        }
    }

    #[test]
    fn test_upgrade_label() {
        assert_eq!(item(0, "").upgrade_label(), None);
        assert_eq!(item(40, "").upgrade_label(), Some("(+$40)".into()));
        assert_eq!(
            item(88, "per person").upgrade_label(),
            Some("(+$88 per person)".into())
        );
    }
}
