//! API routes
//!
//! # Structure
//!
//! - [`health`] - liveness and catalog counts
//! - [`catalog`] - per-meal menu views and course tiers
//! - [`sessions`] - configurator sessions: creation, mutation,
//!   validation snapshots, submission

pub mod catalog;
pub mod health;
pub mod sessions;

// Re-export common types for handlers
pub use shared::error::{ApiResponse, AppResult};
