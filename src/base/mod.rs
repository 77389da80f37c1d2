//! Base types and error handling.
//!
//! Provides the error taxonomy shared by every round of zone generation:
//! - [`error::ZoneError`]: one variant per failure class, every failure fatal
//!   for the round that raised it.

pub mod error;

pub use error::ZoneError;
