//! Booking date window
//!
//! Bookings must be made at least one day ahead and at most three
//! months ahead.

use chrono::{Months, NaiveDate};

/// Inclusive (earliest, latest) bookable dates relative to `today`
pub fn booking_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let earliest = today.succ_opt().unwrap_or(today);
    let latest = today
        .checked_add_months(Months::new(3))
        .unwrap_or(earliest);
    (earliest, latest)
}

/// Whether `date` falls inside the bookable window
pub fn date_in_window(date: NaiveDate, today: NaiveDate) -> bool {
    let (earliest, latest) = booking_window(today);
    date >= earliest && date <= latest
}
