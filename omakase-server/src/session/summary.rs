//! Summary projection
//!
//! Renders the current selections into the plain-text block shared by
//! the on-screen summary and both outbound channels. The rendering
//! consumes a session snapshot; it never mutates state.

use super::MenuSession;
use shared::models::CourseCategory;

/// Render the selections and booking extras as plain text
pub(super) fn render_text(session: &MenuSession) -> String {
    let mut out = String::new();

    for category in CourseCategory::ALL {
        let items = session.selection.items(category);
        if items.is_empty() {
            continue;
        }

        out.push_str(category.display_name());
        out.push_str(":\n");
        for item in items {
            out.push_str("• ");
            out.push_str(&item.name);
            let quantity = session.quantities.get(&item.id);
            if quantity > 0 {
                out.push_str(&format!(" (x{})", quantity));
            }
            if let Some(label) = item.upgrade_label() {
                out.push(' ');
                out.push_str(&label);
            }
            out.push('\n');
        }
    }

    let booking = &session.booking;
    if !booking.allergies.trim().is_empty() {
        out.push_str(&format!(
            "Allergies/Restrictions: {}\n",
            booking.allergies.trim()
        ));
    }
    if !booking.occasion.trim().is_empty() {
        out.push_str(&format!("Occasion: {}\n", booking.occasion.trim()));
    }
    if let Some(requests) = booking.special_requests_line() {
        out.push_str(&format!("Special Requests: {}\n", requests));
    }

    out
}
