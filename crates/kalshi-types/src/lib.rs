//! Shared types for the Kalshi trade API v2
//!
//! This crate provides the leaf building blocks used across the workspace.
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Method`] - HTTP methods used by the trade API
//! - [`Clock`], [`SystemClock`], [`ManualClock`] - Injectable time source
//! - [`RateLimiter`] - Minimum-interval client-side rate limiting

pub mod clock;
pub mod method;
pub mod rate_limit;

// Re-export commonly used types
pub use clock::*;
pub use method::*;
pub use rate_limit::*;
