use super::*;

#[test]
fn test_toggle_select_and_deselect() {
    let mut session = create_test_session();

    let outcome = session.toggle(CourseCategory::Soups, item("s1")).unwrap();
    assert_eq!(outcome, ToggleOutcome::Selected);
    assert_eq!(session.selected(CourseCategory::Soups).len(), 1);

    let outcome = session.toggle(CourseCategory::Soups, item("s1")).unwrap();
    assert_eq!(outcome, ToggleOutcome::Deselected);
    assert!(session.selected(CourseCategory::Soups).is_empty());
}

#[test]
fn test_cap_invariant_over_toggle_sequences() {
    let mut session = create_test_session();

    // Hammer one category with more toggles than the cap allows
    for id in ["a", "b", "c", "d", "e", "f"] {
        let _ = session.toggle(CourseCategory::Desserts, item(id));
    }
    assert!(
        session.selected(CourseCategory::Desserts).len()
            <= session.max_selections(CourseCategory::Desserts)
    );

    // Mixed select/deselect churn keeps the invariant too
    for id in ["a", "b", "a", "c", "d", "b", "e"] {
        let _ = session.toggle(CourseCategory::Soups, item(id));
    }
    assert!(
        session.selected(CourseCategory::Soups).len()
            <= session.max_selections(CourseCategory::Soups)
    );
}

#[test]
fn test_toggle_rejected_at_cap() {
    let mut session = create_test_session();
    // Dinner defaults to the 6-course tier; the 5-course tier caps
    // starters at two
    session.set_course_tier(5).unwrap();
    assert_eq!(session.max_selections(CourseCategory::Starters), 2);

    session.toggle(CourseCategory::Starters, item("a")).unwrap();
    session.toggle(CourseCategory::Starters, item("b")).unwrap();
    let outcome = session.toggle(CourseCategory::Starters, item("c")).unwrap();
    assert_eq!(outcome, ToggleOutcome::Rejected);
    assert_eq!(session.selected(CourseCategory::Starters).len(), 2);
}

#[test]
fn test_double_toggle_round_trips_state() {
    let mut session = create_test_session();

    session.toggle(CourseCategory::Soups, item("s1")).unwrap();
    session.set_quantity("s1", Some(2)).unwrap();
    assert_eq!(session.quantity("s1"), 2);

    // Deselect drops the quantity entry with the selection
    session.toggle(CourseCategory::Soups, item("s1")).unwrap();
    assert!(session.selected(CourseCategory::Soups).is_empty());
    assert!(!session.has_quantity("s1"));

    // Re-selecting starts clean, not with the stale quantity
    session.toggle(CourseCategory::Soups, item("s1")).unwrap();
    assert!(!session.has_quantity("s1"));
}

#[test]
fn test_addon_defaults_to_one_portion() {
    let mut session = create_test_session();

    session.toggle(CourseCategory::Addons, item("a1")).unwrap();
    assert_eq!(session.quantity("a1"), 1);

    // An explicit quantity survives reselection priming
    session.set_quantity("a1", Some(4)).unwrap();
    session.toggle(CourseCategory::Addons, item("a1")).unwrap();
    session.toggle(CourseCategory::Addons, item("a1")).unwrap();
    // Deselect cleared it, so the default applies again
    assert_eq!(session.quantity("a1"), 1);
}

#[test]
fn test_meal_availability_enforced() {
    let mut session = create_test_session();
    // Dinner session cannot take a lunch-only item
    let err = session
        .toggle(CourseCategory::Starters, lunch_item("L1"))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ItemNotSelectable);
}

#[test]
fn test_mains_must_match_serving_style() {
    let mut session = create_test_session();

    let err = session
        .toggle(CourseCategory::Mains, sharing_item("m9"))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ItemNotSelectable);

    session.set_serving_style(ServingStyle::Sharing).unwrap();
    session
        .toggle(CourseCategory::Mains, sharing_item("m9"))
        .unwrap();
    assert_eq!(session.selected(CourseCategory::Mains).len(), 1);
}

#[test]
fn test_quantity_bounds() {
    let mut session = create_test_session();
    session
        .set_guests(shared::models::GuestCounts::new(4, 0, 0))
        .unwrap();

    session.toggle(CourseCategory::Soups, item("s1")).unwrap();
    session.set_quantity("s1", Some(4)).unwrap();
    let err = session.set_quantity("s1", Some(5)).unwrap_err();
    assert_eq!(err.code, ErrorCode::QuantityOutOfRange);

    // Zero is allowed and distinct from unspecified
    session.set_quantity("s1", Some(0)).unwrap();
    assert!(session.has_quantity("s1"));
    session.set_quantity("s1", None).unwrap();
    assert!(!session.has_quantity("s1"));

    // Add-ons run 1..=5 regardless of the adult count
    session.toggle(CourseCategory::Addons, item("a1")).unwrap();
    session.set_quantity("a1", Some(5)).unwrap();
    assert_eq!(
        session.set_quantity("a1", Some(6)).unwrap_err().code,
        ErrorCode::QuantityOutOfRange
    );
    assert_eq!(
        session.set_quantity("a1", Some(0)).unwrap_err().code,
        ErrorCode::QuantityOutOfRange
    );
}

#[test]
fn test_quantity_requires_selection() {
    let mut session = create_test_session();
    let err = session.set_quantity("ghost", Some(1)).unwrap_err();
    assert_eq!(err.code, ErrorCode::ItemNotFound);
}

#[test]
fn test_quantity_not_applicable_to_starters() {
    let mut session = create_test_session();
    session.toggle(CourseCategory::Starters, item("st1")).unwrap();
    let err = session.set_quantity("st1", Some(1)).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidRequest);
}

#[test]
fn test_readonly_session_rejects_mutation() {
    let mut session = MenuSession::new(MealPeriod::Dinner, true).unwrap();

    assert_eq!(
        session
            .toggle(CourseCategory::Soups, item("s1"))
            .unwrap_err()
            .code,
        ErrorCode::SessionReadonly
    );
    assert_eq!(
        session
            .set_serving_style(ServingStyle::Sharing)
            .unwrap_err()
            .code,
        ErrorCode::SessionReadonly
    );
    assert_eq!(
        session.set_course_tier(5).unwrap_err().code,
        ErrorCode::SessionReadonly
    );
}
