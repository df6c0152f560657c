use super::*;
use shared::models::GuestCounts;

#[test]
fn test_serving_style_switch_resets_mains() {
    let mut session = create_test_session();
    session.toggle(CourseCategory::Mains, item("m1")).unwrap();
    session.toggle(CourseCategory::Mains, item("m2")).unwrap();
    session.set_quantity("m1", Some(2)).unwrap();

    session.set_serving_style(ServingStyle::Sharing).unwrap();

    assert!(session.selected(CourseCategory::Mains).is_empty());
    assert!(!session.has_quantity("m1"));
    // Sharing with 2 adults allows a single main
    assert_eq!(session.max_selections(CourseCategory::Mains), 1);

    // Switching back resets again and restores the individual cap
    session.set_serving_style(ServingStyle::Individual).unwrap();
    assert!(session.selected(CourseCategory::Mains).is_empty());
    assert_eq!(session.max_selections(CourseCategory::Mains), 2);
}

#[test]
fn test_sharing_cap_crosses_eight_adults() {
    let mut session = create_test_session();
    session.set_serving_style(ServingStyle::Sharing).unwrap();
    assert_eq!(session.max_selections(CourseCategory::Mains), 1);

    session.set_guests(GuestCounts::new(9, 0, 0)).unwrap();
    assert_eq!(session.max_selections(CourseCategory::Mains), 2);

    session.set_guests(GuestCounts::new(8, 0, 0)).unwrap();
    assert_eq!(session.max_selections(CourseCategory::Mains), 1);
}

#[test]
fn test_adult_change_resets_mains_only_when_sharing() {
    let mut session = create_test_session();
    session.toggle(CourseCategory::Mains, item("m1")).unwrap();

    // Individual style: adult changes leave mains selections alone
    session.set_guests(GuestCounts::new(6, 0, 0)).unwrap();
    assert_eq!(session.selected(CourseCategory::Mains).len(), 1);

    session.set_serving_style(ServingStyle::Sharing).unwrap();
    session
        .toggle(CourseCategory::Mains, sharing_item("m2"))
        .unwrap();
    session.set_guests(GuestCounts::new(7, 0, 0)).unwrap();
    assert!(session.selected(CourseCategory::Mains).is_empty());
}

#[test]
fn test_course_tier_sets_starter_quota() {
    let mut session = MenuSession::new(MealPeriod::Lunch, false).unwrap();
    // Lunch defaults to the 4-course tier with a single starter
    assert_eq!(session.tier.courses, 4);
    assert_eq!(session.max_selections(CourseCategory::Starters), 1);

    session.toggle(CourseCategory::Starters, item("st1")).unwrap();
    let outcome = session
        .toggle(CourseCategory::Starters, item("st2"))
        .unwrap();
    assert_eq!(outcome, ToggleOutcome::Rejected);
    assert_eq!(session.selected(CourseCategory::Starters).len(), 1);

    session.set_course_tier(8).unwrap();
    assert_eq!(session.max_selections(CourseCategory::Starters), 5);
}

#[test]
fn test_tier_reduction_truncates_starters() {
    let mut session = create_test_session();
    session.set_course_tier(7).unwrap();
    for id in ["st1", "st2", "st3", "st4"] {
        session.toggle(CourseCategory::Starters, item(id)).unwrap();
    }

    session.set_course_tier(5).unwrap();

    let kept: Vec<&str> = session
        .selected(CourseCategory::Starters)
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(kept, ["st1", "st2"]);
}

#[test]
fn test_four_course_tier_is_lunch_only() {
    let mut session = create_test_session();
    let err = session.set_course_tier(4).unwrap_err();
    assert_eq!(err.code, ErrorCode::TierNotAvailable);

    let mut lunch = MenuSession::new(MealPeriod::Lunch, false).unwrap();
    lunch.set_course_tier(4).unwrap();
    assert_eq!(lunch.tier.courses, 4);
}

#[test]
fn test_two_adults_caps_desserts_and_truncates() {
    let mut session = create_test_session();
    session.set_guests(GuestCounts::new(4, 0, 0)).unwrap();
    assert_eq!(session.max_selections(CourseCategory::Desserts), 3);

    for id in ["d1", "d2", "d3"] {
        session.toggle(CourseCategory::Desserts, item(id)).unwrap();
    }
    session.set_quantity("d3", Some(1)).unwrap();
    session.set_quantity("d1", Some(2)).unwrap();

    session.set_guests(GuestCounts::new(2, 0, 0)).unwrap();

    assert_eq!(session.max_selections(CourseCategory::Desserts), 2);
    let kept: Vec<&str> = session
        .selected(CourseCategory::Desserts)
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(kept, ["d1", "d2"]);
    // Quantities removed only for the truncated item
    assert!(session.has_quantity("d1"));
    assert!(!session.has_quantity("d3"));
}

#[test]
fn test_new_session_with_two_adults_starts_capped() {
    let session = create_test_session();
    assert_eq!(session.guests.adults, 2);
    assert_eq!(session.max_selections(CourseCategory::Desserts), 2);
}

#[test]
fn test_adult_shrink_drops_overbound_quantities() {
    let mut session = create_test_session();
    session.set_guests(GuestCounts::new(6, 0, 0)).unwrap();

    session.toggle(CourseCategory::Soups, item("s1")).unwrap();
    session.toggle(CourseCategory::Soups, item("s2")).unwrap();
    session.set_quantity("s1", Some(6)).unwrap();
    session.set_quantity("s2", Some(3)).unwrap();

    session.set_guests(GuestCounts::new(4, 0, 0)).unwrap();

    // 6 no longer fits the [0, adults] selector; 3 still does
    assert!(!session.has_quantity("s1"));
    assert_eq!(session.quantity("s2"), 3);
}

#[test]
fn test_addon_quantities_survive_adult_changes() {
    let mut session = create_test_session();
    session.toggle(CourseCategory::Addons, item("a1")).unwrap();
    session.set_quantity("a1", Some(5)).unwrap();

    session.set_guests(GuestCounts::new(3, 0, 0)).unwrap();
    assert_eq!(session.quantity("a1"), 5);
}

#[test]
fn test_guest_bounds_rejected_cap_overflow_reported() {
    let mut session = create_test_session();

    assert_eq!(
        session.set_guests(GuestCounts::new(1, 0, 0)).unwrap_err().code,
        ErrorCode::AdultCountTooLow
    );
    assert_eq!(
        session.set_guests(GuestCounts::new(2, 10, 0)).unwrap_err().code,
        ErrorCode::ChildCountExceeded
    );

    // 10 + 9 breaks the combined cap but is an accepted, reportable state
    session.set_guests(GuestCounts::new(10, 9, 0)).unwrap();
    let report = session.validate(today());
    assert!(report.guest_error.is_some());
    assert!(!report.can_submit);
}
