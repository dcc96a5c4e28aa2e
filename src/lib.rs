//! The `gregorian_eaf` crate converts proleptic Gregorian dates to and from
//! day counts with Euclidean affine functions.
//!
//! ```rust
//! use gregorian_eaf::{Calendar, Date, Gregorian, UnixEpoch};
//!
//! type Engine = Gregorian<i32, i32, UnixEpoch>;
//!
//! let leap_day = Date::try_new(2000, 2, 29).unwrap();
//! assert_eq!(Engine::to_rata_die(leap_day), 11_016);
//! assert_eq!(Engine::to_date(-1), Date::new_unchecked(1969, 12, 31));
//!
//! // The domain of every configuration is known at compile time.
//! const LAST: Date<i32> = Engine::DATE_MAX;
//! assert_eq!(LAST, Date::new_unchecked(1_471_745, 2, 28));
//! assert!(Engine::try_to_date(Engine::RATA_DIE_MAX + 1).is_err());
//! ```
//!
//! An engine is a zero-sized marker type configured by its year storage, its
//! rata die storage and, for the signed engine, its epoch. Conversions are
//! `const fn`s without loops or lookup tables, and they stay exact up to the
//! bounds derived for each configuration:
//!
//!   - [`UnsignedGregorian`] works on unsigned storage, counting days from
//!     `0000-03-01`.
//!   - [`Gregorian`] works on signed storage with any [`Epoch`], translating
//!     onto the unsigned engine of the same width.
//!
//! The raw conversions do not validate their inputs. The [`Calendar`] trait
//! adds checked variants that report values outside of the domain as a
//! [`CalendarError`].
//!
//! The algorithms are described in Cassio Neri and Lorenz Schneider,
//! "Euclidean affine functions and their application to calendar algorithms".
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::unreadable_literal,
    clippy::inconsistent_digit_grouping,

    // Narrowing and sign changing casts are part of the modular translations.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
)]

pub mod date;
pub mod domain;
pub mod error;
pub mod primitives;
pub mod signed;
pub mod unsigned;

#[doc(inline)]
pub use error::CalendarError;

/// The `gregorian_eaf` result type
pub type CalendarResult<T> = Result<T, CalendarError>;

pub use crate::{
    date::Date,
    domain::{Bounds, Calendar},
    signed::{CommonEraEpoch, ComputationalEpoch, Epoch, Gregorian, UnixEpoch},
    unsigned::UnsignedGregorian,
};

#[doc(hidden)]
#[macro_export]
macro_rules! calendar_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::CalendarError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::CalendarError::assert());
        }
    };
}
