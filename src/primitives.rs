//! Calendar primitives: leap years and month lengths.
//!
//! The `i32` functions in this module are the fast paths. They replace the
//! divisions of the textbook rules with a multiply-and-compare and with bit
//! masks, and they are only specified on the documented year domain
//! `[FAST_YEAR_MIN, FAST_YEAR_MAX]`.
//!
//! The [`Year`] trait extends the same predicates to every storage type an
//! engine can be configured with. Narrow types are widened onto the fast path,
//! wide types fall back to the modulo rules.

use core::fmt::{Debug, Display};

use num_traits::PrimInt;

/// The smallest year accepted by [`is_multiple_of_100`] and [`is_leap_year`].
pub const FAST_YEAR_MIN: i32 = -536_870_800;

/// The largest year accepted by [`is_multiple_of_100`] and [`is_leap_year`].
pub const FAST_YEAR_MAX: i32 = 536_870_999;

// mcomp constants for the divisor 100: the multiplier is the modular inverse
// of 25 modulo 2^32 and the bound is 2^32 / 100 rounded down.
const MCOMP_MULTIPLIER: u32 = 42_949_673;
const MCOMP_BOUND: u32 = 42_949_669;
const MCOMP_OFFSET: u32 = 536_870_800;

// Bit `m` is set iff month `m` (other than February) has 31 days.
const LONG_MONTHS: u32 = 0b1_0101_1010_1010;

/// Checks whether `n` is a multiple of 100 without a division instruction.
///
/// The modular-inverse multiply ("mcomp") maps the multiples of 100 in the
/// shifted domain onto `[0, MCOMP_BOUND)` and everything else above it.
///
/// The caller must guarantee `FAST_YEAR_MIN <= n <= FAST_YEAR_MAX`. Outside of
/// that domain the result is unspecified.
#[inline]
#[must_use]
pub const fn is_multiple_of_100(n: i32) -> bool {
    MCOMP_MULTIPLIER.wrapping_mul((n as u32).wrapping_add(MCOMP_OFFSET)) < MCOMP_BOUND
}

/// Returns whether `y` is a Gregorian leap year.
///
/// For multiples of 100 in the fast domain, divisibility by 400 is equivalent
/// to divisibility by 16, since 25 and 16 are coprime.
///
/// The caller must guarantee `FAST_YEAR_MIN <= y <= FAST_YEAR_MAX`.
#[inline]
#[must_use]
pub const fn is_leap_year(y: i32) -> bool {
    (!is_multiple_of_100(y) || y % 16 == 0) & (y % 4 == 0)
}

/// Returns the number of days in month `m` of year `y`.
///
/// `m` must be in `1..=12` and `y` in the fast domain.
#[inline]
#[must_use]
pub const fn last_day_of_month(y: i32, m: u8) -> u8 {
    if m != 2 {
        month_length(m)
    } else {
        february_length(is_leap_year(y))
    }
}

#[inline]
const fn month_length(m: u8) -> u8 {
    30 + ((LONG_MONTHS >> m) & 1) as u8
}

#[inline]
const fn february_length(leap: bool) -> u8 {
    28 + leap as u8
}

/// The reference leap year rule on the widest unsigned storage.
///
/// Used while deriving engine bounds, where the years involved are far outside
/// of the fast domain.
#[inline]
pub(crate) const fn is_leap_year_wide(y: u128) -> bool {
    y % 4 == 0 && (y % 100 != 0 || y % 400 == 0)
}

mod sealed {
    pub trait Sealed {}
}

/// A year storage type.
///
/// This trait is sealed and implemented for the primitive integers that the
/// engines can be configured with.
pub trait Year: PrimInt + Debug + Display + sealed::Sealed {
    /// Returns whether this year is a multiple of 100.
    fn is_multiple_of_100(self) -> bool;

    /// Returns whether this year is a Gregorian leap year.
    fn is_leap_year(self) -> bool;

    /// Returns the number of days in `month` of this year.
    ///
    /// `month` must be in `1..=12`.
    #[inline]
    fn last_day_of_month(self, month: u8) -> u8 {
        if month != 2 {
            month_length(month)
        } else {
            february_length(self.is_leap_year())
        }
    }
}

macro_rules! impl_narrow_year {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Year for $t {
                #[inline]
                fn is_multiple_of_100(self) -> bool {
                    is_multiple_of_100(i32::from(self))
                }

                #[inline]
                fn is_leap_year(self) -> bool {
                    is_leap_year(i32::from(self))
                }
            }
        )*
    };
}

macro_rules! impl_wide_year {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Year for $t {
                #[inline]
                fn is_multiple_of_100(self) -> bool {
                    self % 100 == 0
                }

                #[inline]
                fn is_leap_year(self) -> bool {
                    (!Year::is_multiple_of_100(self) || self % 16 == 0) & (self % 4 == 0)
                }
            }
        )*
    };
}

impl_narrow_year!(i8, i16, u8, u16);
impl_wide_year!(u32, i64, u64);

impl sealed::Sealed for i32 {}

impl Year for i32 {
    #[inline]
    fn is_multiple_of_100(self) -> bool {
        if (FAST_YEAR_MIN..=FAST_YEAR_MAX).contains(&self) {
            is_multiple_of_100(self)
        } else {
            self % 100 == 0
        }
    }

    #[inline]
    fn is_leap_year(self) -> bool {
        (!Year::is_multiple_of_100(self) || self % 16 == 0) & (self % 4 == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_leap_year(y: i64) -> bool {
        y % 4 == 0 && (y % 100 != 0 || y % 400 == 0)
    }

    fn reference_last_day_of_month(y: i64, m: u8) -> u8 {
        match m {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if reference_leap_year(y) => 29,
            2 => 28,
            _ => unreachable!(),
        }
    }

    #[test]
    fn multiple_of_100_near_domain_edges() {
        let edges = [
            FAST_YEAR_MIN..=FAST_YEAR_MIN + 100_000,
            -100_000..=100_000,
            FAST_YEAR_MAX - 100_000..=FAST_YEAR_MAX,
        ];
        for range in edges {
            for n in range {
                assert_eq!(is_multiple_of_100(n), n % 100 == 0, "n = {n}");
            }
        }
    }

    #[test]
    fn multiple_of_100_strided() {
        let mut n = FAST_YEAR_MIN;
        while n <= FAST_YEAR_MAX - 9_973 {
            assert_eq!(is_multiple_of_100(n), n % 100 == 0, "n = {n}");
            n += 9_973;
        }
    }

    #[test]
    #[ignore = "full domain sweep, run with --release -- --ignored"]
    fn multiple_of_100_full_domain() {
        for n in FAST_YEAR_MIN..=FAST_YEAR_MAX {
            assert_eq!(is_multiple_of_100(n), n % 100 == 0, "n = {n}");
        }
    }

    #[test]
    #[ignore = "full domain sweep, run with --release -- --ignored"]
    fn leap_year_full_domain() {
        for y in FAST_YEAR_MIN..=FAST_YEAR_MAX {
            assert_eq!(is_leap_year(y), reference_leap_year(i64::from(y)), "y = {y}");
        }
    }

    #[test]
    fn leap_year() {
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2001));
        assert!(is_leap_year(2004));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
        assert!(is_leap_year(-400));
        assert!(is_leap_year(FAST_YEAR_MIN));
        assert!(!is_leap_year(FAST_YEAR_MIN + 100));
        assert!(!is_leap_year(FAST_YEAR_MAX));
        for y in -1_000_000..=1_000_000 {
            assert_eq!(is_leap_year(y), reference_leap_year(i64::from(y)), "y = {y}");
        }
    }

    #[test]
    fn number_of_days_in_month() {
        for y in [-401, -400, -100, -1, 0, 1900, 2000, 2023, 2024, 2100] {
            for m in 1..=12 {
                assert_eq!(
                    last_day_of_month(y, m),
                    reference_last_day_of_month(i64::from(y), m),
                    "{y}-{m}"
                );
            }
        }
        assert_eq!(last_day_of_month(2024, 7), 31);
        assert_eq!(last_day_of_month(2024, 8), 31);
        assert_eq!(last_day_of_month(2024, 2), 29);
        assert_eq!(last_day_of_month(2025, 2), 28);
    }

    #[test]
    fn year_trait_agrees_across_storage() {
        for y in -2_000i16..=2_000 {
            let expected = reference_leap_year(i64::from(y));
            assert_eq!(Year::is_leap_year(y), expected);
            assert_eq!(Year::is_leap_year(i32::from(y)), expected);
            assert_eq!(Year::is_leap_year(i64::from(y)), expected);
        }
        for y in 0u16..=u16::MAX {
            let expected = reference_leap_year(i64::from(y));
            assert_eq!(Year::is_leap_year(y), expected);
            assert_eq!(Year::is_leap_year(u32::from(y)), expected);
            assert_eq!(Year::is_leap_year(u64::from(y)), expected);
        }
        for y in 0u8..=u8::MAX {
            assert_eq!(Year::is_leap_year(y), reference_leap_year(i64::from(y)));
        }
    }

    #[test]
    fn year_trait_outside_fast_domain() {
        for y in [i32::MIN, i32::MIN + 400, FAST_YEAR_MAX + 1, 2_000_000_000, i32::MAX] {
            assert_eq!(Year::is_leap_year(y), reference_leap_year(i64::from(y)), "y = {y}");
            for m in 1..=12 {
                assert_eq!(
                    Year::last_day_of_month(y, m),
                    reference_last_day_of_month(i64::from(y), m)
                );
            }
        }
        assert!(Year::is_leap_year(4_000_000_000u32));
        assert!(!Year::is_leap_year(4_000_000_100u32));
        assert!(!Year::is_leap_year(u64::MAX));
        assert!(Year::is_leap_year(i64::MIN));
    }

    #[test]
    fn wide_reference_rule() {
        assert!(is_leap_year_wide(2000));
        assert!(!is_leap_year_wide(1900));
        assert!(is_leap_year_wide(12_626_108_195_557_532));
    }
}
