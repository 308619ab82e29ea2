//! # lunar-time
//!
//! Gregorian date type and the mapping from absolute instants to civil dates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Instant → civil date resolution in a [`Zone`].
pub mod civil;

/// `SolarDate` type.
pub mod date;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use civil::{civil_date, civil_naive_date, end_of_day, instant_from_millis, start_of_day};
pub use date::SolarDate;
pub use lunar_core::Zone;
