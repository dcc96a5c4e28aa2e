//! Domain analysis shared by every engine.
//!
//! Each engine configuration exposes four pairs of bounds, all derived from
//! its storage types and epoch at compile time:
//!
//!   - `DATE_MIN` / `DATE_MAX`: the dates `to_rata_die` accepts.
//!   - `RATA_DIE_MIN` / `RATA_DIE_MAX`: the rata dies `to_date` accepts.
//!   - `ROUND_DATE_MIN` / `ROUND_DATE_MAX` and `ROUND_RATA_DIE_MIN` /
//!     `ROUND_RATA_DIE_MAX`: the sub-domains on which the two conversions are
//!     mutual inverses.
//!
//! The round trip bounds are not a plain intersection of the other two pairs.
//! Each candidate is pushed through the conversion it bounds, so a limit that
//! is in the domain but lands on a month or year boundary the other direction
//! cannot reproduce is replaced by its converted image.

use core::fmt::{Debug, Display};

use num_traits::PrimInt;

use crate::{calendar_assert, primitives::Year, CalendarError, CalendarResult, Date};

/// The derived bounds of an engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds<Y, R> {
    /// The date mapped to rata die zero.
    pub epoch: Date<Y>,
    /// Minimum date allowed as input to `to_rata_die`.
    pub date_min: Date<Y>,
    /// Maximum date allowed as input to `to_rata_die`.
    pub date_max: Date<Y>,
    /// Minimum rata die allowed as input to `to_date`.
    pub rata_die_min: R,
    /// Maximum rata die allowed as input to `to_date`.
    pub rata_die_max: R,
    /// Minimum date of the round trip range.
    pub round_date_min: Date<Y>,
    /// Maximum date of the round trip range.
    pub round_date_max: Date<Y>,
    /// Minimum rata die of the round trip range.
    pub round_rata_die_min: R,
    /// Maximum rata die of the round trip range.
    pub round_rata_die_max: R,
}

impl<Y: Ord, R: Ord> Bounds<Y, R> {
    /// Returns whether `date` is in the domain of `to_rata_die`.
    #[inline]
    pub fn contains_date(&self, date: &Date<Y>) -> bool {
        self.date_min <= *date && *date <= self.date_max
    }

    /// Returns whether `rata_die` is in the domain of `to_date`.
    #[inline]
    pub fn contains_rata_die(&self, rata_die: &R) -> bool {
        self.rata_die_min <= *rata_die && *rata_die <= self.rata_die_max
    }

    /// Returns whether `date` survives `to_rata_die` followed by `to_date`.
    #[inline]
    pub fn is_round_trip_date(&self, date: &Date<Y>) -> bool {
        self.round_date_min <= *date && *date <= self.round_date_max
    }

    /// Returns whether `rata_die` survives `to_date` followed by `to_rata_die`.
    #[inline]
    pub fn is_round_trip_rata_die(&self, rata_die: &R) -> bool {
        self.round_rata_die_min <= *rata_die && *rata_die <= self.round_rata_die_max
    }
}

/// A configured Gregorian calendar engine.
///
/// Implemented by every supported instantiation of
/// [`UnsignedGregorian`](crate::UnsignedGregorian) and
/// [`Gregorian`](crate::Gregorian). The unchecked conversions forward to the
/// engines' `const fn`s; the `try_` variants validate against [`Self::BOUNDS`]
/// first.
pub trait Calendar {
    /// Year storage type.
    type Year: Year;
    /// Rata die storage type.
    type RataDie: PrimInt + Debug + Display;

    /// The date mapped to rata die zero.
    const EPOCH: Date<Self::Year>;

    /// The derived bounds of this configuration.
    const BOUNDS: Bounds<Self::Year, Self::RataDie>;

    /// Returns the rata die of `date`.
    ///
    /// `date` must lie within `[BOUNDS.date_min, BOUNDS.date_max]`; outside of
    /// it the result is unspecified.
    fn to_rata_die(date: Date<Self::Year>) -> Self::RataDie;

    /// Returns the date of `rata_die`.
    ///
    /// `rata_die` must lie within `[BOUNDS.rata_die_min, BOUNDS.rata_die_max]`;
    /// outside of it the result is unspecified.
    fn to_date(rata_die: Self::RataDie) -> Date<Self::Year>;

    /// Returns the rata die of `date`, or a range error when `date` is not a
    /// valid date or is outside of the domain.
    fn try_to_rata_die(date: Date<Self::Year>) -> CalendarResult<Self::RataDie> {
        if !date.is_valid() {
            return Err(CalendarError::range().with_message("date does not name an existing day."));
        }
        if !Self::BOUNDS.contains_date(&date) {
            #[cfg(feature = "log")]
            log::debug!(
                "date {date} is outside of [{}, {}]",
                Self::BOUNDS.date_min,
                Self::BOUNDS.date_max
            );
            return Err(CalendarError::range().with_message("date is outside of the domain."));
        }
        Ok(Self::to_rata_die(date))
    }

    /// Returns the date of `rata_die`, or a range error when `rata_die` is
    /// outside of the domain.
    fn try_to_date(rata_die: Self::RataDie) -> CalendarResult<Date<Self::Year>> {
        if !Self::BOUNDS.contains_rata_die(&rata_die) {
            #[cfg(feature = "log")]
            log::debug!(
                "rata die {rata_die} is outside of [{}, {}]",
                Self::BOUNDS.rata_die_min,
                Self::BOUNDS.rata_die_max
            );
            return Err(CalendarError::range().with_message("rata die is outside of the domain."));
        }
        let date = Self::to_date(rata_die);
        calendar_assert!(date.is_valid(), "rata die {rata_die} produced invalid date {date}");
        Ok(date)
    }
}

/// Expands to the round trip bounds and the [`Bounds`] record of an engine.
///
/// Must be invoked inside an inherent `impl` that already defines `EPOCH`,
/// `DATE_MIN`, `DATE_MAX`, `RATA_DIE_MIN`, `RATA_DIE_MAX` and the `const fn`s
/// `to_rata_die` / `to_date`.
macro_rules! impl_round_trip_bounds {
    ($year:ty, $rata_die:ty) => {
        /// Minimum rata die allowed as input to `to_date` for round trip.
        pub const ROUND_RATA_DIE_MIN: $rata_die = {
            let first = Self::to_rata_die(Self::DATE_MIN);
            if first > Self::RATA_DIE_MIN {
                first
            } else {
                Self::RATA_DIE_MIN
            }
        };

        /// Maximum rata die allowed as input to `to_date` for round trip.
        pub const ROUND_RATA_DIE_MAX: $rata_die = {
            let last = Self::to_rata_die(Self::DATE_MAX);
            if last < Self::RATA_DIE_MAX {
                last
            } else {
                Self::RATA_DIE_MAX
            }
        };

        // Images of the round trip rata dies, as `to_date` may not reach `DATE_MIN` or `DATE_MAX`.
        /// Minimum date allowed as input to `to_rata_die` for round trip.
        pub const ROUND_DATE_MIN: $crate::Date<$year> = Self::to_date(Self::ROUND_RATA_DIE_MIN);

        /// Maximum date allowed as input to `to_rata_die` for round trip.
        pub const ROUND_DATE_MAX: $crate::Date<$year> = Self::to_date(Self::ROUND_RATA_DIE_MAX);

        /// All derived bounds of this configuration.
        pub const BOUNDS: $crate::domain::Bounds<$year, $rata_die> = $crate::domain::Bounds {
            epoch: Self::EPOCH,
            date_min: Self::DATE_MIN,
            date_max: Self::DATE_MAX,
            rata_die_min: Self::RATA_DIE_MIN,
            rata_die_max: Self::RATA_DIE_MAX,
            round_date_min: Self::ROUND_DATE_MIN,
            round_date_max: Self::ROUND_DATE_MAX,
            round_rata_die_min: Self::ROUND_RATA_DIE_MIN,
            round_rata_die_max: Self::ROUND_RATA_DIE_MAX,
        };
    };
}

pub(crate) use impl_round_trip_bounds;
