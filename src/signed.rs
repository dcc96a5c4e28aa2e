//! The signed Gregorian engine.
//!
//! `Gregorian<Y, R, E>` accepts signed years and signed rata dies, counted
//! from an arbitrary epoch `E`. It does no calendar arithmetic of its own:
//! dates and rata dies are shifted by a constant offset onto the unsigned
//! engine of the same rata die width, converted there, and shifted back.
//!
//! The offset is chosen so that the epoch lands close to the middle of the
//! unsigned engine's rata die range, which keeps the signed domain roughly
//! symmetric around the epoch. The shifts are modular, so a signed value that
//! falls outside of the unsigned domain wraps around instead of overflowing,
//! and the bounds below detect that wrap.

use core::marker::PhantomData;

use crate::{
    domain::{impl_round_trip_bounds, Bounds, Calendar},
    Date, UnsignedGregorian,
};

/// A date used as rata die `0` by [`Gregorian`].
///
/// Implement this on a marker type to define a custom epoch.
///
/// ```rust
/// use gregorian_eaf::{Date, Epoch, Gregorian};
///
/// struct Gregorian1582;
///
/// impl Epoch<i32> for Gregorian1582 {
///     const DATE: Date<i32> = Date::new_unchecked(1582, 10, 15);
/// }
///
/// type Engine = Gregorian<i32, i32, Gregorian1582>;
///
/// assert_eq!(Engine::to_rata_die(Date::new_unchecked(1582, 10, 15)), 0);
/// assert_eq!(Engine::to_date(-1), Date::new_unchecked(1582, 10, 14));
/// ```
pub trait Epoch<Y> {
    /// The epoch date. It must be a valid date.
    const DATE: Date<Y>;
}

/// The Unix epoch, `1970-01-01`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnixEpoch;

/// The first day of the common era, `0001-01-01`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommonEraEpoch;

/// The epoch of the unsigned engine, `0000-03-01`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComputationalEpoch;

macro_rules! impl_epochs {
    ($($year:ty),*) => {
        $(
            impl Epoch<$year> for UnixEpoch {
                const DATE: Date<$year> = Date::new_unchecked(1970, 1, 1);
            }

            impl Epoch<$year> for CommonEraEpoch {
                const DATE: Date<$year> = Date::new_unchecked(1, 1, 1);
            }

            impl Epoch<$year> for ComputationalEpoch {
                const DATE: Date<$year> = Date::new_unchecked(0, 3, 1);
            }
        )*
    };
}

impl_epochs!(i16, i32, i64);

/// The translation between a signed configuration and its unsigned engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Offset<U> {
    year: U,
    rata_die: U,
}

/// A Gregorian calendar engine over signed storage with a configurable epoch.
///
/// `Y` is the year storage, `R` the rata die storage and `E` the
/// [`Epoch`]. Supported configurations are `(i16, i32)`, `(i32, i32)`,
/// `(i16, i64)`, `(i32, i64)` and `(i64, i64)`, with any epoch.
///
/// ```rust
/// use gregorian_eaf::{Date, Gregorian};
///
/// // Unix epoch by default.
/// type Engine = Gregorian<i32, i32>;
///
/// assert_eq!(Engine::to_date(0), Date::new_unchecked(1970, 1, 1));
/// assert_eq!(Engine::to_date(-1), Date::new_unchecked(1969, 12, 31));
/// assert_eq!(Engine::to_rata_die(Date::new_unchecked(2000, 3, 1)), 11_017);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gregorian<Y = i32, R = Y, E = UnixEpoch>(PhantomData<fn() -> (Y, R, E)>);

macro_rules! impl_gregorian {
    ($(($year:ty, $rata_die:ty, $unsigned:ty)),* $(,)?) => {
        $(
            impl<E: Epoch<$year>> Gregorian<$year, $rata_die, E> {
                /// The date mapped to rata die `0`.
                pub const EPOCH: Date<$year> = E::DATE;

                const OFFSET: Offset<$unsigned> = {
                    let epoch = E::DATE;
                    let q = epoch.year / 400;
                    let r = epoch.year % 400;

                    // `r + 400` keeps the year non-negative, one 400-year cycle
                    // later than the epoch.
                    let n = UnsignedGregorian::<$unsigned, $unsigned>::to_rata_die(
                        Date::new_unchecked((r + 400) as $unsigned, epoch.month, epoch.day),
                    )
                    .wrapping_sub(146_097);

                    let t = UnsignedGregorian::<$unsigned, $unsigned>::RATA_DIE_MAX / 146_097 / 2;

                    Offset {
                        year: (q as $unsigned).wrapping_sub(t).wrapping_mul(400),
                        rata_die: t.wrapping_mul(146_097).wrapping_add(n),
                    }
                };

                #[inline]
                const fn to_unsigned_date(date: Date<$year>) -> Date<$unsigned> {
                    let year = (date.year as $unsigned).wrapping_sub(Self::OFFSET.year);
                    Date::new_unchecked(year, date.month, date.day)
                }

                #[inline]
                const fn from_unsigned_date(date: Date<$unsigned>) -> Date<$year> {
                    let year = date.year.wrapping_add(Self::OFFSET.year) as $year;
                    Date::new_unchecked(year, date.month, date.day)
                }

                #[inline]
                const fn to_unsigned_rata_die(rata_die: $rata_die) -> $unsigned {
                    (rata_die as $unsigned).wrapping_add(Self::OFFSET.rata_die)
                }

                #[inline]
                const fn from_unsigned_rata_die(rata_die: $unsigned) -> $rata_die {
                    rata_die.wrapping_sub(Self::OFFSET.rata_die) as $rata_die
                }

                /// Returns the rata die of `date`.
                ///
                /// `date` must be a valid date within `[Self::DATE_MIN, Self::DATE_MAX]`.
                /// Outside of that range the result is unspecified.
                #[inline]
                #[must_use]
                pub const fn to_rata_die(date: Date<$year>) -> $rata_die {
                    let date = Self::to_unsigned_date(date);
                    let rata_die = UnsignedGregorian::<$unsigned, $unsigned>::to_rata_die(date);
                    Self::from_unsigned_rata_die(rata_die)
                }

                /// Returns the date of `rata_die`.
                ///
                /// `rata_die` must be within `[Self::RATA_DIE_MIN, Self::RATA_DIE_MAX]`.
                /// Outside of that range the result is unspecified.
                #[inline]
                #[must_use]
                pub const fn to_date(rata_die: $rata_die) -> Date<$year> {
                    let rata_die = Self::to_unsigned_rata_die(rata_die);
                    let date = UnsignedGregorian::<$unsigned, $unsigned>::to_date(rata_die);
                    Self::from_unsigned_date(date)
                }

                /// Minimum date allowed as input to `to_rata_die`.
                pub const DATE_MIN: Date<$year> = {
                    let min = Self::to_unsigned_date(Date::<$year>::MIN);
                    if UnsignedGregorian::<$unsigned, $unsigned>::DATE_MAX.precedes(&min) {
                        Self::from_unsigned_date(UnsignedGregorian::<$unsigned, $unsigned>::DATE_MIN)
                    } else {
                        Date::<$year>::MIN
                    }
                };

                /// Maximum date allowed as input to `to_rata_die`.
                pub const DATE_MAX: Date<$year> = {
                    let max = Self::to_unsigned_date(Date::<$year>::MAX);
                    if UnsignedGregorian::<$unsigned, $unsigned>::DATE_MAX.precedes(&max) {
                        Self::from_unsigned_date(UnsignedGregorian::<$unsigned, $unsigned>::DATE_MAX)
                    } else {
                        Date::<$year>::MAX
                    }
                };

                /// Minimum rata die allowed as input to `to_date`.
                pub const RATA_DIE_MIN: $rata_die = {
                    type U = UnsignedGregorian<$unsigned, $unsigned>;
                    let last = U::to_date(U::RATA_DIE_MAX);
                    if last.precedes(&Self::to_unsigned_date(Date::<$year>::MIN)) {
                        Self::from_unsigned_rata_die(U::RATA_DIE_MIN)
                    } else {
                        Self::to_rata_die(Date::<$year>::MIN)
                    }
                };

                /// Maximum rata die allowed as input to `to_date`.
                pub const RATA_DIE_MAX: $rata_die = {
                    type U = UnsignedGregorian<$unsigned, $unsigned>;
                    let last = U::to_date(U::RATA_DIE_MAX);
                    if last.precedes(&Self::to_unsigned_date(Date::<$year>::MAX)) {
                        Self::from_unsigned_rata_die(U::RATA_DIE_MAX)
                    } else {
                        Self::to_rata_die(Date::<$year>::MAX)
                    }
                };

                impl_round_trip_bounds!($year, $rata_die);
            }

            impl<E: Epoch<$year>> Calendar for Gregorian<$year, $rata_die, E> {
                type Year = $year;
                type RataDie = $rata_die;

                const EPOCH: Date<$year> = <Gregorian<$year, $rata_die, E>>::EPOCH;
                const BOUNDS: Bounds<$year, $rata_die> = <Gregorian<$year, $rata_die, E>>::BOUNDS;

                #[inline]
                fn to_rata_die(date: Date<$year>) -> $rata_die {
                    <Gregorian<$year, $rata_die, E>>::to_rata_die(date)
                }

                #[inline]
                fn to_date(rata_die: $rata_die) -> Date<$year> {
                    <Gregorian<$year, $rata_die, E>>::to_date(rata_die)
                }
            }
        )*
    };
}

impl_gregorian!(
    (i16, i32, u32),
    (i32, i32, u32),
    (i16, i64, u64),
    (i32, i64, u64),
    (i64, i64, u64),
);
