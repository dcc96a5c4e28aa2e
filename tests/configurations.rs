use std::panic::{self, AssertUnwindSafe};

use gregorian_eaf::{
    Bounds, Calendar, CommonEraEpoch, ComputationalEpoch, Date, Epoch, Gregorian, UnixEpoch,
    UnsignedGregorian,
};
use num_traits::{CheckedAdd, CheckedSub, One, Zero};

// Number of days checked at each end of a round trip range.
const EDGE_DAYS: u32 = 20_000;

struct Bastille;

impl Epoch<i16> for Bastille {
    const DATE: Date<i16> = Date::new_unchecked(-1912, 6, 23);
}

impl Epoch<i32> for Bastille {
    const DATE: Date<i32> = Date::new_unchecked(-1912, 6, 23);
}

impl Epoch<i64> for Bastille {
    const DATE: Date<i64> = Date::new_unchecked(-1912, 6, 23);
}

fn assert_nested<C: Calendar>() {
    let b = C::BOUNDS;
    assert!(b.date_min <= b.round_date_min && b.round_date_max <= b.date_max);
    assert!(b.rata_die_min <= b.round_rata_die_min && b.round_rata_die_max <= b.rata_die_max);
    assert!(b.contains_date(&b.epoch));
    assert!(b.contains_rata_die(&C::RataDie::zero()));
    assert!(b.is_round_trip_date(&b.epoch));
    assert!(b.is_round_trip_rata_die(&C::RataDie::zero()));
    assert_eq!(C::to_rata_die(b.epoch), C::RataDie::zero());
    assert_eq!(C::to_date(b.round_rata_die_min), b.round_date_min);
    assert_eq!(C::to_date(b.round_rata_die_max), b.round_date_max);
    assert_eq!(C::to_rata_die(b.round_date_min), b.round_rata_die_min);
    assert_eq!(C::to_rata_die(b.round_date_max), b.round_rata_die_max);
}

fn assert_round_trip_edges<C: Calendar>() {
    let b = C::BOUNDS;

    let mut n = b.round_rata_die_min;
    let mut date = b.round_date_min;
    for _ in 0..EDGE_DAYS {
        assert!(date.is_valid(), "{date}");
        assert_eq!(C::to_date(n), date, "rata die {n}");
        assert_eq!(C::to_rata_die(date), n, "date {date}");
        n = n + C::RataDie::one();
        date = date.next_day().unwrap();
    }

    let mut n = b.round_rata_die_max;
    let mut date = b.round_date_max;
    for _ in 0..EDGE_DAYS {
        assert!(date.is_valid(), "{date}");
        assert_eq!(C::to_date(n), date, "rata die {n}");
        assert_eq!(C::to_rata_die(date), n, "date {date}");
        n = n - C::RataDie::one();
        date = date.previous_day().unwrap();
    }
}

fn assert_rejects_outside<C: Calendar>() {
    let b = C::BOUNDS;
    if let Some(before) = b.rata_die_min.checked_sub(&C::RataDie::one()) {
        assert!(C::try_to_date(before).is_err());
    }
    if let Some(after) = b.rata_die_max.checked_add(&C::RataDie::one()) {
        assert!(C::try_to_date(after).is_err());
    }
    if let Some(before) = b.date_min.previous_day() {
        assert!(C::try_to_rata_die(before).is_err());
    }
    if let Some(after) = b.date_max.next_day() {
        assert!(C::try_to_rata_die(after).is_err());
    }
    assert_eq!(C::try_to_date(b.rata_die_min), Ok(C::to_date(b.rata_die_min)));
    assert_eq!(C::try_to_rata_die(b.date_max), Ok(C::to_rata_die(b.date_max)));
}

// Outside of the domain the conversions may overflow, which panics in debug
// builds. A panic counts as a different result.
fn outcome<T>(f: impl FnOnce() -> T) -> Option<T> {
    panic::catch_unwind(AssertUnwindSafe(f)).ok()
}

fn assert_sharp<C: Calendar>() {
    let b = C::BOUNDS;
    let one = C::RataDie::one();
    if let (Some(after), Some(next)) = (
        b.rata_die_max.checked_add(&one),
        C::to_date(b.rata_die_max).next_day(),
    ) {
        assert_ne!(outcome(|| C::to_date(after)), Some(next), "rata die {after}");
    }
    if let (Some(before), Some(previous)) = (
        b.rata_die_min.checked_sub(&one),
        C::to_date(b.rata_die_min).previous_day(),
    ) {
        assert_ne!(outcome(|| C::to_date(before)), Some(previous), "rata die {before}");
    }
    if let (Some(next), Some(after)) = (
        b.date_max.next_day(),
        C::to_rata_die(b.date_max).checked_add(&one),
    ) {
        assert_ne!(outcome(|| C::to_rata_die(next)), Some(after), "date {next}");
    }
    if let (Some(previous), Some(before)) = (
        b.date_min.previous_day(),
        C::to_rata_die(b.date_min).checked_sub(&one),
    ) {
        assert_ne!(outcome(|| C::to_rata_die(previous)), Some(before), "date {previous}");
    }
}

macro_rules! for_each_configuration {
    ($check:ident) => {
        $check::<UnsignedGregorian<u8, u32>>();
        $check::<UnsignedGregorian<u16, u32>>();
        $check::<UnsignedGregorian<u32, u32>>();
        $check::<UnsignedGregorian<u16, u64>>();
        $check::<UnsignedGregorian<u32, u64>>();
        $check::<UnsignedGregorian<u64, u64>>();
        $check::<Gregorian<i16, i32, UnixEpoch>>();
        $check::<Gregorian<i16, i32, CommonEraEpoch>>();
        $check::<Gregorian<i16, i32, ComputationalEpoch>>();
        $check::<Gregorian<i16, i32, Bastille>>();
        $check::<Gregorian<i32, i32, UnixEpoch>>();
        $check::<Gregorian<i32, i32, Bastille>>();
        $check::<Gregorian<i16, i64, UnixEpoch>>();
        $check::<Gregorian<i32, i64, CommonEraEpoch>>();
        $check::<Gregorian<i32, i64, Bastille>>();
        $check::<Gregorian<i64, i64, UnixEpoch>>();
        $check::<Gregorian<i64, i64, ComputationalEpoch>>();
    };
}

#[test]
fn bounds_are_nested() {
    for_each_configuration!(assert_nested);
}

#[test]
fn round_trip_at_the_edges() {
    for_each_configuration!(assert_round_trip_edges);
}

#[test]
fn checked_conversions_reject_outside_values() {
    for_each_configuration!(assert_rejects_outside);
}

#[test]
fn bounds_are_sharp() {
    for_each_configuration!(assert_sharp);
}

#[test]
fn narrow_years_share_bounds_across_rata_die_widths() {
    fn same(a: Bounds<i16, i32>, b: Bounds<i16, i64>) {
        assert_eq!(a.date_min, b.date_min);
        assert_eq!(a.date_max, b.date_max);
        assert_eq!(i64::from(a.rata_die_min), b.rata_die_min);
        assert_eq!(i64::from(a.rata_die_max), b.rata_die_max);
        assert_eq!(i64::from(a.round_rata_die_min), b.round_rata_die_min);
        assert_eq!(i64::from(a.round_rata_die_max), b.round_rata_die_max);
    }
    same(
        Gregorian::<i16, i32, UnixEpoch>::BOUNDS,
        Gregorian::<i16, i64, UnixEpoch>::BOUNDS,
    );
    same(
        Gregorian::<i16, i32, CommonEraEpoch>::BOUNDS,
        Gregorian::<i16, i64, CommonEraEpoch>::BOUNDS,
    );
    same(
        Gregorian::<i16, i32, ComputationalEpoch>::BOUNDS,
        Gregorian::<i16, i64, ComputationalEpoch>::BOUNDS,
    );
}

#[test]
fn widths_agree_on_shared_values() {
    type Narrow = Gregorian<i16, i32, UnixEpoch>;
    type Mid = Gregorian<i32, i32, UnixEpoch>;
    type Wide = Gregorian<i64, i64, UnixEpoch>;

    let mut n = Narrow::RATA_DIE_MIN;
    while n <= Narrow::RATA_DIE_MAX {
        let date = Narrow::to_date(n);
        let mid = Mid::to_date(n);
        let wide = Wide::to_date(i64::from(n));
        assert_eq!(i32::from(date.year), mid.year, "rata die {n}");
        assert_eq!(i64::from(date.year), wide.year, "rata die {n}");
        assert_eq!((date.month, date.day), (mid.month, mid.day));
        assert_eq!((date.month, date.day), (wide.month, wide.day));
        assert_eq!(Gregorian::<i32, i64, UnixEpoch>::to_date(i64::from(n)), mid);
        n += 4_099;
    }
}

#[test]
fn widths_agree_on_shared_dates() {
    type Narrow = Gregorian<i16, i32, UnixEpoch>;
    type Mid = Gregorian<i32, i32, UnixEpoch>;
    type NarrowWide = Gregorian<i16, i64, UnixEpoch>;
    type MidWide = Gregorian<i32, i64, UnixEpoch>;
    type Wide = Gregorian<i64, i64, UnixEpoch>;

    let (first, last) = (Narrow::DATE_MIN.year, Narrow::DATE_MAX.year);
    for year in (first..=last).step_by(7) {
        for (month, day) in [(1, 1), (2, 28), (3, 1), (12, 31)] {
            let date = Date::new_unchecked(year, month, day);
            if !Narrow::BOUNDS.contains_date(&date) {
                continue;
            }
            let mid = Date::new_unchecked(i32::from(year), month, day);
            let wide = Date::new_unchecked(i64::from(year), month, day);
            let n = Narrow::to_rata_die(date);
            assert_eq!(Mid::to_rata_die(mid), n, "date {date}");
            assert_eq!(NarrowWide::to_rata_die(date), i64::from(n), "date {date}");
            assert_eq!(MidWide::to_rata_die(mid), i64::from(n), "date {date}");
            assert_eq!(Wide::to_rata_die(wide), i64::from(n), "date {date}");
        }
    }
}

#[test]
fn computational_epoch_matches_unsigned_engine() {
    type Signed = Gregorian<i32, i32, ComputationalEpoch>;
    type Unsigned = UnsignedGregorian<u32, u32>;

    let mut n = 0i32;
    while n <= Signed::RATA_DIE_MAX {
        let signed = Signed::to_date(n);
        let unsigned = Unsigned::to_date(n as u32);
        assert_eq!(signed.year as u32, unsigned.year, "rata die {n}");
        assert_eq!((signed.month, signed.day), (unsigned.month, unsigned.day));
        n += 65_537;
    }
}

#[test]
fn epochs_differ_by_constant_shift() {
    type Unix = Gregorian<i32, i64, UnixEpoch>;
    type CommonEra = Gregorian<i32, i64, CommonEraEpoch>;

    let shift = CommonEra::to_rata_die(Date::new_unchecked(1970, 1, 1));
    assert_eq!(shift, 719_162);
    for year in (-100_000..100_000).step_by(997) {
        for (month, day) in [(1, 1), (2, 28), (3, 1), (12, 31)] {
            let date = Date::new_unchecked(year, month, day);
            assert_eq!(Unix::to_rata_die(date) + shift, CommonEra::to_rata_die(date));
        }
    }
}
