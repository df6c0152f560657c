//! Shared types for the Omakase set-menu configurator
//!
//! Domain model and error types used across the workspace: course
//! categories and rules, menu items, course tiers, guest counts,
//! booking info, and the unified error/response structures.

pub mod error;
pub mod models;
pub mod types;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    BookingInfo, CategoryRule, CourseCategory, CourseTier, GuestCounts, MenuItem,
};
pub use types::{MealAvailability, MealPeriod, ServingStyle};
