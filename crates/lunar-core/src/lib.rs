//! # lunar-core
//!
//! Core types, error definitions, and settings for lunar-rs.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace: the error hierarchy, the conversion [`Zone`], the process-wide
//! [`Settings`], and the primitive aliases used for calendar fields.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Global library settings (conversion zone).
pub mod settings;

/// Civil-date zone selection.
pub mod zone;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A calendar year number (solar or lunar).
pub type Year = u16;

/// A month number, 1–12.
pub type MonthNumber = u8;

/// A day-of-month number (1–31 solar, 1–30 lunar).
pub type Day = u8;

/// A count of whole days.
pub type DayCount = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedZone, Settings};
pub use zone::Zone;
