//! Error types for lunar-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum.  The `ensure!` and `fail!` macros
//! defined here provide early-return shorthands for precondition checks.

use thiserror::Error;

/// The top-level error type used throughout lunar-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input lies outside the tabulated conversion range.
    ///
    /// Callers should treat the input as unconvertible; retrying cannot
    /// change the outcome.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// A lunar table entry decodes to an impossible leap month.
    ///
    /// This signals a defect in the static table, never a user input problem.
    #[error("corrupt lunar table entry for {year}: {bits:#b}")]
    DataCorruption {
        /// The lunar year whose entry is malformed.
        year: u16,
        /// The raw encoded entry.
        bits: u32,
    },

    /// Invalid Gregorian date fields.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout lunar-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lunar_core::{ensure, errors::Error};
/// fn month(n: u8) -> lunar_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&n), "month {n} not in 1..=12");
///     Ok(n)
/// }
/// assert!(month(1).is_ok());
/// assert!(matches!(month(13), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::OutOfRange(...))` immediately.
///
/// # Example
/// ```
/// use lunar_core::{fail, errors::Error};
/// fn always_err() -> lunar_core::errors::Result<()> {
///     fail!("year {} is not tabulated", 2101);
/// }
/// assert_eq!(
///     always_err(),
///     Err(Error::OutOfRange("year 2101 is not tabulated".into()))
/// );
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::OutOfRange(format!($($msg)*)))
    };
}
