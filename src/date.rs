//! The `Date` record shared by every engine.
//!
//! A `Date<Y>` is a plain `(year, month, day)` triple over the year storage
//! `Y`. Dates produced by an engine always satisfy
//! `day <= last_day_of_month(year, month)`; dates built with
//! [`Date::new_unchecked`] are not checked.

use core::fmt;

use num_traits::Bounded;

use crate::{primitives::Year, CalendarError, CalendarResult};

/// A proleptic Gregorian calendar date.
///
/// The derived ordering is lexicographic on `(year, month, day)`.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date<Y> {
    pub year: Y,
    pub month: u8,
    pub day: u8,
}

impl<Y> Date<Y> {
    /// Creates a new `Date` without any validation.
    #[inline]
    #[must_use]
    pub const fn new_unchecked(year: Y, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl<Y: Year> Date<Y> {
    /// Creates a new validated `Date`.
    pub fn try_new(year: Y, month: u8, day: u8) -> CalendarResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::range().with_message("month is not within 1..=12."));
        }
        if day == 0 || day > year.last_day_of_month(month) {
            return Err(CalendarError::range().with_message("day is not within the month."));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Returns whether this date names an existing day.
    #[inline]
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && self.day != 0
            && self.day <= self.year.last_day_of_month(self.month)
    }

    /// Returns the date of the following day, or `None` when the year
    /// would overflow `Y`.
    pub fn next_day(&self) -> Option<Self> {
        if self.day != self.year.last_day_of_month(self.month) {
            return Some(Self::new_unchecked(self.year, self.month, self.day + 1));
        }
        if self.month != 12 {
            return Some(Self::new_unchecked(self.year, self.month + 1, 1));
        }
        let year = self.year.checked_add(&Y::one())?;
        Some(Self::new_unchecked(year, 1, 1))
    }

    /// Returns the date of the preceding day, or `None` when the year
    /// would underflow `Y`.
    pub fn previous_day(&self) -> Option<Self> {
        if self.day != 1 {
            return Some(Self::new_unchecked(self.year, self.month, self.day - 1));
        }
        let (year, month) = if self.month != 1 {
            (self.year, self.month - 1)
        } else {
            (self.year.checked_sub(&Y::one())?, 12)
        };
        Some(Self::new_unchecked(year, month, year.last_day_of_month(month)))
    }
}

impl<Y: Bounded> Bounded for Date<Y> {
    fn min_value() -> Self {
        Self::new_unchecked(Y::min_value(), 1, 1)
    }

    fn max_value() -> Self {
        Self::new_unchecked(Y::max_value(), 12, 31)
    }
}

macro_rules! impl_const_date {
    ($($t:ty),*) => {
        $(
            impl Date<$t> {
                /// The earliest date representable with this year storage.
                pub const MIN: Self = Self::new_unchecked(<$t>::MIN, 1, 1);

                /// The latest date representable with this year storage.
                pub const MAX: Self = Self::new_unchecked(<$t>::MAX, 12, 31);

                /// Lexicographic `self < other`, usable in constant contexts.
                #[inline]
                #[must_use]
                pub const fn precedes(&self, other: &Self) -> bool {
                    if self.year != other.year {
                        return self.year < other.year;
                    }
                    if self.month != other.month {
                        return self.month < other.month;
                    }
                    self.day < other.day
                }
            }
        )*
    };
}

impl_const_date!(i8, i16, i32, i64, u8, u16, u32, u64);

impl<Y: fmt::Display> fmt::Display for Date<Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}
