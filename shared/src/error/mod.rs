//! Unified error handling
//!
//! Error codes, categories, and API response structures shared by the
//! server and any future clients.

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{ApiResponse, AppError, AppResult};
