//! Domain models for the set-menu configurator

pub mod booking;
pub mod category;
pub mod course_tier;
pub mod guest;
pub mod menu_item;

pub use booking::BookingInfo;
pub use category::{CategoryRule, CourseCategory};
pub use course_tier::CourseTier;
pub use guest::{GuestCounts, MAX_CAPACITY, MAX_CHILDREN, MIN_ADULTS};
pub use menu_item::MenuItem;
