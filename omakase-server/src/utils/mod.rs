//! Utility helpers

pub mod encode;
pub mod logger;
pub mod time;

pub use encode::percent_encode;
pub use time::{booking_window, date_in_window};
