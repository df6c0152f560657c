//! Session state machine tests
//!
//! Shared helpers plus scenario suites split by concern.

use super::*;
use chrono::NaiveDate;
use shared::types::MealAvailability;

mod test_cascades;
mod test_selection;

/// Fixed "today" so the date-window checks are deterministic
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

fn create_test_session() -> MenuSession {
    MenuSession::new(MealPeriod::Dinner, false).unwrap()
}

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

fn sharing_item(id: &str) -> MenuItem {
    MenuItem {
        serving_style: ServingStyle::Sharing,
        ..item(id)
    }
}

fn lunch_item(id: &str) -> MenuItem {
    MenuItem {
        meal_availability: MealAvailability::Lunch,
        ..item(id)
    }
}

/// Fill in a booking that passes the basic-info checks
fn complete_booking(session: &mut MenuSession) {
    session
        .update_booking(BookingUpdate {
            customer_name: Some("Test User".into()),
            contact_number: Some("12345678".into()),
            booking_date: NaiveDate::from_ymd_opt(2026, 8, 20),
            arrival_time: Some("7:30 PM".into()),
            ..Default::default()
        })
        .unwrap();
}

/// Select a full valid dinner: 2 soups, 3 starters (6-course default),
/// 1 main, 2 desserts
fn complete_selections(session: &mut MenuSession) {
    session.toggle(CourseCategory::Soups, item("so1")).unwrap();
    session.toggle(CourseCategory::Soups, item("so2")).unwrap();
    for id in ["st1", "st2", "st3"] {
        session.toggle(CourseCategory::Starters, item(id)).unwrap();
    }
    session.toggle(CourseCategory::Mains, item("m1")).unwrap();
    session.toggle(CourseCategory::Desserts, item("d1")).unwrap();
    session.toggle(CourseCategory::Desserts, item("d2")).unwrap();
}
