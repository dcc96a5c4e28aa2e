//! The unsigned Gregorian engine.
//!
//! `UnsignedGregorian<Y, R>` converts between dates with unsigned year storage
//! `Y` and unsigned rata dies `R`. Its epoch is fixed at `0000-03-01`: with the
//! computational year starting in March, the leap day is the last day of the
//! year and the month lengths of March through January follow a single
//! Euclidean affine function.
//!
//! Every conversion is a short sequence of EAFs `(a * n + b) / c`. Divisions by
//! powers of two become shifts and the division by 1461 becomes a
//! multiplication by a precomputed reciprocal, so no loops or tables are used.

use core::marker::PhantomData;

use crate::{
    domain::{impl_round_trip_bounds, Bounds, Calendar},
    primitives::is_leap_year_wide,
    Date,
};

// Days in 4 years and in 400 years.
const DAYS_IN_4_YEARS: u32 = 1461;
const DAYS_IN_400_YEARS: u32 = 146_097;

// `(979 * m - 2919) / 32` is the number of days between March 1st and the
// first of computational month `m`, for `m` in `[3, 14]`.
const MONTH_SLOPE: u32 = 979;
const MONTH_OFFSET: u32 = 2919;

// `2^32 / 2_939_745` approximates 1461 closely enough that the quotient and
// the remainder of the year-of-century division come out of one 64-bit
// product.
const YEAR_RECIPROCAL: u64 = 2_939_745;

// Inverse of the month step, scaled by `2^16`.
const MONTH_INVERSE_SLOPE: u32 = 2141;
const MONTH_INVERSE_OFFSET: u32 = 197_913;

// First day of the computational year that falls in January.
const FIRST_DAY_OF_JANUARY: u32 = 306;

/// A Gregorian calendar engine over unsigned storage.
///
/// `Y` is the year storage and `R` the rata die storage. Rata die `0` is
/// `0000-03-01`, so neither conversion ever sees a negative value.
///
/// Supported configurations are `(u8, u32)`, `(u16, u32)`, `(u32, u32)`,
/// `(u16, u64)`, `(u32, u64)` and `(u64, u64)`.
///
/// ```rust
/// use gregorian_eaf::{Date, UnsignedGregorian};
///
/// type Engine = UnsignedGregorian<u16, u32>;
///
/// assert_eq!(Engine::to_rata_die(Date::new_unchecked(0, 3, 1)), 0);
/// assert_eq!(Engine::to_date(719_468), Date::new_unchecked(1970, 1, 1));
/// assert_eq!(Engine::DATE_MAX, Date::new_unchecked(u16::MAX, 12, 31));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnsignedGregorian<Y = u32, R = Y>(PhantomData<fn() -> (Y, R)>);

macro_rules! impl_unsigned_gregorian {
    ($(($year:ty, $rata_die:ty)),* $(,)?) => {
        $(
            impl UnsignedGregorian<$year, $rata_die> {
                /// The date mapped to rata die `0`.
                pub const EPOCH: Date<$year> = Date::new_unchecked(0, 3, 1);

                /// Returns the rata die of `date`.
                ///
                /// `date` must be a valid date within `[Self::DATE_MIN, Self::DATE_MAX]`.
                /// Outside of that range the result is unspecified.
                #[inline]
                #[must_use]
                pub const fn to_rata_die(date: Date<$year>) -> $rata_die {
                    // Move January and February to the end of the previous year.
                    let j = (date.month < 3) as $rata_die;
                    let y0 = date.year as $rata_die - j;
                    let m0 = date.month as $rata_die + 12 * j;
                    let d0 = date.day as $rata_die - 1;

                    let century = y0 / 100;
                    let days_of_years =
                        DAYS_IN_4_YEARS as $rata_die * y0 / 4 - century + century / 4;
                    let days_of_months =
                        (MONTH_SLOPE as $rata_die * m0 - MONTH_OFFSET as $rata_die) / 32;

                    days_of_years + days_of_months + d0
                }

                /// Returns the date of `rata_die`.
                ///
                /// `rata_die` must be within `[Self::RATA_DIE_MIN, Self::RATA_DIE_MAX]`.
                /// Outside of that range the result is unspecified.
                #[inline]
                #[must_use]
                pub const fn to_date(rata_die: $rata_die) -> Date<$year> {
                    // Century and day of century.
                    let n1 = 4 * rata_die + 3;
                    let century = n1 / DAYS_IN_400_YEARS as $rata_die;
                    let day_of_century = (n1 % DAYS_IN_400_YEARS as $rata_die / 4) as u32;

                    // Year of century and day of year.
                    let n2 = 4 * day_of_century + 3;
                    let p2 = YEAR_RECIPROCAL * n2 as u64;
                    let year_of_century = (p2 >> 32) as u32;
                    let day_of_year = p2 as u32 / YEAR_RECIPROCAL as u32 / 4;

                    // Month and day of month.
                    let n3 = MONTH_INVERSE_SLOPE * day_of_year + MONTH_INVERSE_OFFSET;
                    let month = n3 >> 16;
                    let day = (n3 & 0xFFFF) / MONTH_INVERSE_SLOPE;

                    // Map the computational year back onto January.
                    let j = day_of_year >= FIRST_DAY_OF_JANUARY;
                    let year = 100 * century + year_of_century as $rata_die + j as $rata_die;
                    let month = if j { month - 12 } else { month };

                    Date::new_unchecked(year as $year, month as u8, day as u8 + 1)
                }

                /// Minimum date allowed as input to `to_rata_die`.
                pub const DATE_MIN: Date<$year> = Self::EPOCH;

                /// Maximum date allowed as input to `to_rata_die`.
                ///
                /// Limited either by the year storage or by `1461 * year` fitting
                /// in the rata die storage, whichever comes first.
                pub const DATE_MAX: Date<$year> = {
                    let y = <$rata_die>::MAX / DAYS_IN_4_YEARS as $rata_die;
                    if <$year>::MAX as $rata_die <= y {
                        Date::<$year>::MAX
                    } else {
                        let year = y + 1;
                        let day = 28 + is_leap_year_wide(year as u128) as u8;
                        Date::new_unchecked(year as $year, 2, day)
                    }
                };

                /// Minimum rata die allowed as input to `to_date`.
                pub const RATA_DIE_MIN: $rata_die = 0;

                /// Maximum rata die allowed as input to `to_date`.
                ///
                /// Limited either by `4 * rata_die + 3` fitting in the rata die
                /// storage or by the last date of the year storage, whichever comes
                /// first. Both are evaluated on the engine promoted to
                /// `UnsignedGregorian<R, R>`.
                pub const RATA_DIE_MAX: $rata_die = {
                    let n = (<$rata_die>::MAX - 3) / 4;
                    let last = UnsignedGregorian::<$rata_die, $rata_die>::to_date(n);
                    let year_max = Date::new_unchecked(<$year>::MAX as $rata_die, 12, 31);
                    if !year_max.precedes(&last) {
                        n
                    } else {
                        UnsignedGregorian::<$rata_die, $rata_die>::to_rata_die(year_max)
                    }
                };

                impl_round_trip_bounds!($year, $rata_die);
            }

            impl Calendar for UnsignedGregorian<$year, $rata_die> {
                type Year = $year;
                type RataDie = $rata_die;

                const EPOCH: Date<$year> = <UnsignedGregorian<$year, $rata_die>>::EPOCH;
                const BOUNDS: Bounds<$year, $rata_die> =
                    <UnsignedGregorian<$year, $rata_die>>::BOUNDS;

                #[inline]
                fn to_rata_die(date: Date<$year>) -> $rata_die {
                    <UnsignedGregorian<$year, $rata_die>>::to_rata_die(date)
                }

                #[inline]
                fn to_date(rata_die: $rata_die) -> Date<$year> {
                    <UnsignedGregorian<$year, $rata_die>>::to_date(rata_die)
                }
            }
        )*
    };
}

impl_unsigned_gregorian!(
    (u8, u32),
    (u16, u32),
    (u32, u32),
    (u16, u64),
    (u32, u64),
    (u64, u64),
);
