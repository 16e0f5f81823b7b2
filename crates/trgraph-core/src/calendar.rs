//! # Calendar Arithmetic
//!
//! Proleptic Gregorian day counting on arbitrary-precision years.
//!
//! Nothing here goes through a platform timestamp, so the day count between
//! two dates is exact for any year a packed date can carry, far beyond the
//! range of `i64` milliseconds or chrono's `NaiveDate`.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Milliseconds in one calendar day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Cumulative day count before each month of a common year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Gregorian leap rule: divisible by 4, except centuries not divisible by 400.
pub fn is_leap_year(year: &BigInt) -> bool {
    year.is_multiple_of(&BigInt::from(4))
        && (!year.is_multiple_of(&BigInt::from(100)) || year.is_multiple_of(&BigInt::from(400)))
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub fn days_in_month(year: &BigInt, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days in the year before the first of `month` (1-12).
///
/// February contributes 29 days in a leap year.
pub fn days_before_month(year: &BigInt, month: u32) -> u32 {
    let idx = month.clamp(1, 12) as usize - 1;
    let leap_day = u32::from(month > 2 && is_leap_year(year));
    DAYS_BEFORE_MONTH[idx] + leap_day
}

/// Count of leap years `y` with `start <= y < end`, i.e. the leap days
/// between the year boundaries `start-01-01` and `end-01-01`.
///
/// Negative when `end < start`.
pub fn leap_years_between(start: &BigInt, end: &BigInt) -> BigInt {
    leaps_before(end) - leaps_before(start)
}

/// Leap years strictly before `year`, offset so that differences are exact
/// for negative years too.
fn leaps_before(year: &BigInt) -> BigInt {
    let y = year - BigInt::one();
    y.div_floor(&BigInt::from(4)) - y.div_floor(&BigInt::from(100))
        + y.div_floor(&BigInt::from(400))
}

/// A calendar date; fields are not validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CivilDate {
    /// Proleptic Gregorian year.
    pub year: BigInt,
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
}

impl CivilDate {
    pub fn new(year: impl Into<BigInt>, month: u32, day: u32) -> Self {
        Self {
            year: year.into(),
            month,
            day,
        }
    }

    /// 1970-01-01.
    pub fn unix_epoch() -> Self {
        Self::new(1970, 1, 1)
    }

    /// Zero-based day of the year.
    pub fn day_of_year(&self) -> u32 {
        days_before_month(&self.year, self.month) + self.day.saturating_sub(1)
    }

    /// Days from 1 January of this date's year to 1 January of `other`'s
    /// year, plus the difference in day-of-year. Signed: negative when
    /// `other` is earlier.
    fn days_until(&self, other: &CivilDate) -> BigInt {
        let whole_years = (&other.year - &self.year) * 365u32
            + leap_years_between(&self.year, &other.year);
        whole_years + BigInt::from(other.day_of_year()) - BigInt::from(self.day_of_year())
    }
}

impl PartialOrd for CivilDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CivilDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (&self.year, self.month, self.day).cmp(&(&other.year, other.month, other.day))
    }
}

/// Number of whole days between two dates, irrespective of order.
pub fn days_between(a: &CivilDate, b: &CivilDate) -> BigInt {
    a.days_until(b).abs()
}

/// Signed day count from the unix epoch to `date`: negative before 1970.
pub fn days_since_epoch(date: &CivilDate) -> BigInt {
    let epoch = CivilDate::unix_epoch();
    let days = days_between(&epoch, date);
    if *date < epoch && !days.is_zero() {
        -days
    } else {
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn y(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn leap_rule() {
        assert!(is_leap_year(&y(2024)));
        assert!(is_leap_year(&y(2000)));
        assert!(is_leap_year(&y(0)));
        assert!(!is_leap_year(&y(1900)));
        assert!(!is_leap_year(&y(2023)));
        assert!(is_leap_year(&y(-4)));
    }

    #[test]
    fn february_length() {
        assert_eq!(days_in_month(&y(2024), 2), 29);
        assert_eq!(days_in_month(&y(1900), 2), 28);
        assert_eq!(days_in_month(&y(2023), 13), 0);
    }

    #[test]
    fn days_before_month_table() {
        assert_eq!(days_before_month(&y(2023), 1), 0);
        assert_eq!(days_before_month(&y(2023), 3), 59);
        assert_eq!(days_before_month(&y(2024), 3), 60);
        assert_eq!(days_before_month(&y(2024), 12), 335);
    }

    #[test]
    fn leap_years_between_counts_half_open_range() {
        assert_eq!(leap_years_between(&y(1970), &y(1970)), y(0));
        assert_eq!(leap_years_between(&y(1970), &y(1973)), y(1)); // 1972
        assert_eq!(leap_years_between(&y(1970), &y(1972)), y(0));
        assert_eq!(leap_years_between(&y(1896), &y(1904)), y(1)); // 1896; 1900 is not
        assert_eq!(leap_years_between(&y(1), &y(2001)), y(485));
        assert_eq!(leap_years_between(&y(-1), &y(1)), y(1)); // year 0
    }

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(days_since_epoch(&CivilDate::unix_epoch()), y(0));
    }

    #[test]
    fn day_before_epoch_is_minus_one() {
        assert_eq!(days_since_epoch(&CivilDate::new(1969, 12, 31)), y(-1));
    }

    #[test]
    fn known_day_counts() {
        // 2000-03-01 is day 11017 of the unix era.
        assert_eq!(days_since_epoch(&CivilDate::new(2000, 3, 1)), y(11017));
        // 1900-01-01 is 25567 days before the epoch.
        assert_eq!(days_since_epoch(&CivilDate::new(1900, 1, 1)), y(-25567));
        // 0001-01-01 is 719162 days before the epoch.
        assert_eq!(days_since_epoch(&CivilDate::new(1, 1, 1)), y(-719162));
    }

    #[test]
    fn days_between_is_symmetric() {
        let a = CivilDate::new(1867, 12, 31);
        let b = CivilDate::new(2024, 5, 9);
        assert_eq!(days_between(&a, &b), days_between(&b, &a));
    }

    #[test]
    fn huge_years_do_not_overflow() {
        let first_beyond_four_digits = CivilDate::new(y(10_000), 1, 1);
        assert_eq!(days_since_epoch(&first_beyond_four_digits), y(2_932_897));

        // 10957 days to 2000-01-01, then whole 400-year cycles of 146097 days.
        let far = CivilDate::new(BigInt::from(10u8).pow(30u32), 1, 1);
        let expected: BigInt = "365242499999999999999999999280472".parse().unwrap();
        assert_eq!(days_since_epoch(&far), expected);
    }
}
