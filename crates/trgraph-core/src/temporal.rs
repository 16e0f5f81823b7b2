//! # Temporal Codecs — ISO Dates, Unix Time, Packed Dates
//!
//! ## Packed date layout
//!
//! Seven big-endian fields concatenated, all UTC:
//!
//! ```text
//! | year (1+ bytes) | month | day | hour | minute | second | millisecond (2 bytes) |
//! ```
//!
//! The year takes as many bytes as its magnitude needs; every other field
//! is one byte except the millisecond, which is always two. Unpacking slices
//! from the end, so all leading bytes belong to the year.
//!
//! `2024-05-09T12:45:25.309Z` packs to `[7, 232, 5, 9, 12, 45, 25, 1, 53]`.
//!
//! ## Unix time
//!
//! [`PackedDate::unix_millis`] does not go through chrono: it counts days
//! from 1970-01-01 with [`crate::calendar`] and adds the time of day, so
//! years far outside a platform timestamp still convert exactly.
//! `unixtime19` is the same instant measured from 1900-01-01.
//!
//! ## ISO forms
//!
//! chrono covers RFC 3339 with any offset, date-times without an offset and
//! bare dates, all with four-digit years. Packed years have no upper bound,
//! so the UTC shape [`PackedDate::to_iso_string`] emits is also read with
//! any number of year digits (at least four) and an optional leading `+`:
//! `10000-01-01T00:00:00.000Z` and `+010000-01-01T00:00:00.000Z` name the
//! same instant.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, Timelike, Utc};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::ToPrimitive;

use crate::calendar::{self, CivilDate, MS_PER_DAY};
use crate::error::CodecError;
use crate::numeric;

/// Milliseconds from 1900-01-01T00:00:00Z to 1970-01-01T00:00:00Z.
pub const MS_FROM_1900_TO_1970: i64 = 2_208_988_800_000;

/// Minimum length of a packed date: one year byte plus the fixed fields.
pub const PACKED_DATE_MIN_LEN: usize = 8;

/// Parse an ISO 8601 calendar string as a UTC instant.
///
/// Accepts RFC 3339 (any offset, converted to UTC), a date-time without
/// offset (read as UTC), and a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_iso(s: &str) -> Result<DateTime<Utc>, CodecError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }
    Err(CodecError::invalid_date(s, "not an ISO 8601 date"))
}

/// True if `s` parses with [`parse_iso`] or is an expanded-year UTC
/// instant that [`PackedDate::parse_iso`] accepts.
pub fn is_iso(s: &str) -> bool {
    parse_iso(s).is_ok() || PackedDate::parse_iso(s).is_ok()
}

/// Render an instant the way a browser's `toISOString` does:
/// `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn to_iso(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Milliseconds since the unix epoch for an ISO string.
pub fn iso_to_unix_millis(s: &str) -> Result<BigInt, CodecError> {
    match parse_iso(s) {
        Ok(dt) => Ok(BigInt::from(dt.timestamp_millis())),
        Err(_) => Ok(PackedDate::parse_iso(s)?.unix_millis()),
    }
}

/// ISO string for a unix millisecond timestamp.
pub fn unix_millis_to_iso(ms: &BigInt) -> Result<String, CodecError> {
    let out_of_range = || CodecError::OutOfRange {
        kind: "isodate".to_string(),
        value: ms.to_string(),
    };
    let ms = ms.to_i64().ok_or_else(out_of_range)?;
    let dt = DateTime::from_timestamp_millis(ms).ok_or_else(out_of_range)?;
    Ok(to_iso(&dt))
}

/// Shift a 1970-based timestamp to the 1900 epoch.
pub fn unix_to_unix19(ms: &BigInt) -> BigInt {
    ms + BigInt::from(MS_FROM_1900_TO_1970)
}

/// Shift a 1900-based timestamp back to the 1970 epoch.
pub fn unix19_to_unix(ms: &BigInt) -> BigInt {
    ms - BigInt::from(MS_FROM_1900_TO_1970)
}

/// A calendar instant split into the packed-date fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedDate {
    pub year: BigUint,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl PackedDate {
    /// Split a UTC instant into fields. Years before 0 and leap-second
    /// instants cannot be packed.
    pub fn from_datetime(dt: &DateTime<Utc>) -> Result<Self, CodecError> {
        let year = u32::try_from(dt.year()).map_err(|_| CodecError::OutOfRange {
            kind: "bytesdate".to_string(),
            value: to_iso(dt),
        })?;
        let millisecond = dt.timestamp_subsec_millis();
        if millisecond >= 1000 {
            return Err(CodecError::invalid_date(to_iso(dt), "leap second"));
        }
        // chrono keeps every component below 256 and the millisecond below 1000.
        Ok(Self {
            year: BigUint::from(year),
            month: dt.month() as u8,
            day: dt.day() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8,
            millisecond: millisecond as u16,
        })
    }

    /// Parse an ISO string into packed-date fields.
    ///
    /// The `[+]YYYY…-MM-DDTHH:MM:SS[.mmm]Z` shape is read field by field so
    /// the year is unbounded; anything else goes through chrono.
    pub fn parse_iso(s: &str) -> Result<Self, CodecError> {
        match split_utc(s) {
            Some(date) => {
                date.validate()?;
                Ok(date)
            }
            None => Self::from_datetime(&parse_iso(s)?),
        }
    }

    /// Concatenate the fields in the packed layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = numeric::to_be_bytes(&self.year);
        out.extend_from_slice(&[self.month, self.day, self.hour, self.minute, self.second]);
        out.extend_from_slice(&self.millisecond.to_be_bytes());
        out
    }

    /// Slice a packed date from the end and validate every field.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        if bytes.len() < PACKED_DATE_MIN_LEN {
            return Err(CodecError::invalid_date(
                format!("0x{}", hex::encode(bytes)),
                format!("packed date needs at least {PACKED_DATE_MIN_LEN} bytes"),
            ));
        }
        let n = bytes.len();
        let date = Self {
            year: numeric::from_be_bytes(&bytes[..n - 7]),
            month: bytes[n - 7],
            day: bytes[n - 6],
            hour: bytes[n - 5],
            minute: bytes[n - 4],
            second: bytes[n - 3],
            millisecond: u16::from_be_bytes([bytes[n - 2], bytes[n - 1]]),
        };
        date.validate()?;
        Ok(date)
    }

    fn validate(&self) -> Result<(), CodecError> {
        let year = BigInt::from_biguint(Sign::Plus, self.year.clone());
        let month_days = calendar::days_in_month(&year, u32::from(self.month));
        let reason = if month_days == 0 {
            "month must be 1-12"
        } else if self.day == 0 || u32::from(self.day) > month_days {
            "day outside month"
        } else if self.hour > 23 {
            "hour must be below 24"
        } else if self.minute > 59 {
            "minute must be below 60"
        } else if self.second > 59 {
            "second must be below 60"
        } else if self.millisecond > 999 {
            "millisecond must be below 1000"
        } else {
            return Ok(());
        };
        Err(CodecError::invalid_date(self.to_iso_string(), reason))
    }

    /// Render as `YYYY-MM-DDTHH:MM:SS.mmmZ`; the year is zero-padded to
    /// four digits and never truncated.
    pub fn to_iso_string(&self) -> String {
        format!(
            "{:0>4}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            self.year.to_string(),
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.millisecond
        )
    }

    /// The calendar date part.
    pub fn civil_date(&self) -> CivilDate {
        CivilDate::new(
            BigInt::from_biguint(Sign::Plus, self.year.clone()),
            u32::from(self.month),
            u32::from(self.day),
        )
    }

    /// Milliseconds elapsed since midnight.
    pub fn time_of_day_millis(&self) -> i64 {
        i64::from(self.hour) * 3_600_000
            + i64::from(self.minute) * 60_000
            + i64::from(self.second) * 1_000
            + i64::from(self.millisecond)
    }

    /// Milliseconds since 1970-01-01T00:00:00Z, by explicit day counting.
    pub fn unix_millis(&self) -> BigInt {
        let days = calendar::days_since_epoch(&self.civil_date());
        days * MS_PER_DAY + self.time_of_day_millis()
    }

    /// Milliseconds since 1900-01-01T00:00:00Z.
    pub fn unix19_millis(&self) -> BigInt {
        unix_to_unix19(&self.unix_millis())
    }
}

/// Split `[+]Y…Y-MM-DDTHH:MM:SS[.f{1,3}]Z` into unchecked fields.
fn split_utc(s: &str) -> Option<PackedDate> {
    let s = s.strip_prefix('+').unwrap_or(s);
    let (date, time) = s.strip_suffix('Z')?.split_once('T')?;

    let mut date_parts = date.rsplitn(3, '-');
    let day = fixed_digits(date_parts.next()?, 2)?;
    let month = fixed_digits(date_parts.next()?, 2)?;
    let year = date_parts.next()?;
    if year.len() < 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (clock, fraction) = match time.split_once('.') {
        Some((clock, fraction)) => (clock, Some(fraction)),
        None => (time, None),
    };
    let mut clock_parts = clock.split(':');
    let hour = fixed_digits(clock_parts.next()?, 2)?;
    let minute = fixed_digits(clock_parts.next()?, 2)?;
    let second = fixed_digits(clock_parts.next()?, 2)?;
    if clock_parts.next().is_some() {
        return None;
    }
    let millisecond = match fraction {
        None => 0,
        Some(f) if (1..=3).contains(&f.len()) => {
            let digits = fixed_digits(f, f.len())?;
            digits * 10u16.pow(3 - f.len() as u32)
        }
        Some(_) => return None,
    };

    Some(PackedDate {
        year: year.parse().ok()?,
        month: u8::try_from(month).ok()?,
        day: u8::try_from(day).ok()?,
        hour: u8::try_from(hour).ok()?,
        minute: u8::try_from(minute).ok()?,
        second: u8::try_from(second).ok()?,
        millisecond,
    })
}

/// Exactly `len` ASCII digits.
fn fixed_digits(s: &str, len: usize) -> Option<u16> {
    if s.len() != len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u8; 9] = [7, 232, 5, 9, 12, 45, 25, 1, 53];

    fn chrono_millis(s: &str) -> BigInt {
        BigInt::from(parse_iso(s).unwrap().timestamp_millis())
    }

    #[test]
    fn packs_reference_instant() {
        let packed = PackedDate::parse_iso("2024-05-09T12:45:25.309Z").unwrap();
        assert_eq!(packed.to_bytes(), SAMPLE.to_vec());
    }

    #[test]
    fn millisecond_field_is_left_padded() {
        let packed = PackedDate::parse_iso("2022-12-31T00:00:00.255Z").unwrap();
        assert_eq!(packed.to_bytes(), vec![7, 230, 12, 31, 0, 0, 0, 0, 255]);
    }

    #[test]
    fn unpacks_reference_instant() {
        let packed = PackedDate::from_bytes(&SAMPLE).unwrap();
        assert_eq!(packed.to_iso_string(), "2024-05-09T12:45:25.309Z");
    }

    #[test]
    fn short_years_are_zero_padded() {
        let packed = PackedDate::parse_iso("0001-12-31T12:23:58.499Z").unwrap();
        assert_eq!(packed.to_bytes()[0], 1);
        assert_eq!(
            PackedDate::from_bytes(&packed.to_bytes()).unwrap().to_iso_string(),
            "0001-12-31T12:23:58.499Z"
        );
    }

    #[test]
    fn unix_millis_matches_chrono() {
        for s in [
            "2024-05-09T12:45:25.309Z",
            "1970-01-01T00:00:00.000Z",
            "1969-12-31T23:59:59.999Z",
            "1867-12-31T12:23:58.499Z",
            "1967-12-31T12:23:58.499Z",
            "0001-12-31T12:23:58.499Z",
            "3000-12-31T12:23:58.499Z",
            "2000-08-05",
            "1945-05-09",
        ] {
            let packed = PackedDate::parse_iso(s).unwrap();
            assert_eq!(packed.unix_millis(), chrono_millis(s), "{s}");
        }
    }

    #[test]
    fn unix19_adds_epoch_gap() {
        let packed = PackedDate::parse_iso("1970-01-01T00:00:00.000Z").unwrap();
        assert_eq!(packed.unix19_millis(), BigInt::from(MS_FROM_1900_TO_1970));
    }

    #[test]
    fn years_beyond_chrono_convert() {
        // One millisecond after 9999-12-31T23:59:59.999Z.
        let packed = PackedDate::from_bytes(&[0x27, 0x10, 1, 1, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(packed.to_iso_string(), "10000-01-01T00:00:00.000Z");
        assert_eq!(packed.unix_millis(), BigInt::from(253_402_300_800_000i64));

        // Year 1_000_000 = 0x0F4240: 30 years to 2000 plus 2495 Gregorian cycles.
        let packed = PackedDate::from_bytes(&[0x0F, 0x42, 0x40, 1, 1, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(packed.to_iso_string(), "1000000-01-01T00:00:00.000Z");
        assert_eq!(packed.unix_millis(), BigInt::from(31_494_784_780_800_000i64));
    }

    #[test]
    fn year_one_converts() {
        let packed = PackedDate::parse_iso("0001-01-01T00:00:00.000Z").unwrap();
        assert_eq!(packed.unix_millis(), BigInt::from(-62_135_596_800_000i64));
    }

    #[test]
    fn expanded_years_parse() {
        let plain = PackedDate::parse_iso("10000-01-01T00:00:00.000Z").unwrap();
        let signed = PackedDate::parse_iso("+010000-01-01T00:00:00.000Z").unwrap();
        assert_eq!(plain, signed);
        assert_eq!(plain.to_bytes(), vec![0x27, 0x10, 1, 1, 0, 0, 0, 0, 0]);

        let packed = PackedDate::parse_iso("1000000-02-29T23:59:59.5Z").unwrap();
        assert_eq!(packed.millisecond, 500);
        assert_eq!(packed.to_iso_string(), "1000000-02-29T23:59:59.500Z");

        assert_eq!(
            iso_to_unix_millis("10000-01-01T00:00:00.000Z").unwrap(),
            BigInt::from(253_402_300_800_000i64)
        );
    }

    #[test]
    fn expanded_years_are_validated() {
        // 10001 is not a leap year.
        assert!(matches!(
            PackedDate::parse_iso("10001-02-29T00:00:00.000Z"),
            Err(CodecError::InvalidDate { .. })
        ));
        assert!(PackedDate::parse_iso("10000-01-01T24:00:00.000Z").is_err());
        assert!(PackedDate::parse_iso("10000-01-01T00:00:00.0000Z").is_err());
        assert!(PackedDate::parse_iso("-010000-01-01T00:00:00.000Z").is_err());
    }

    #[test]
    fn rejects_short_input() {
        let err = PackedDate::from_bytes(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, CodecError::InvalidDate { .. }));
    }

    #[test]
    fn rejects_invalid_fields() {
        // February 30th.
        assert!(PackedDate::from_bytes(&[7, 232, 2, 30, 0, 0, 0, 0, 0]).is_err());
        // Month 13.
        assert!(PackedDate::from_bytes(&[7, 232, 13, 1, 0, 0, 0, 0, 0]).is_err());
        // Millisecond 1000.
        assert!(PackedDate::from_bytes(&[7, 232, 1, 1, 0, 0, 0, 0x03, 0xe8]).is_err());
        // Leap day in a leap year is fine.
        assert!(PackedDate::from_bytes(&[7, 232, 2, 29, 0, 0, 0, 0, 0]).is_ok());
    }

    #[test]
    fn iso_forms() {
        assert!(is_iso("2024-05-09T12:45:25.309Z"));
        assert!(is_iso("2024-05-09T14:45:25+02:00"));
        assert!(is_iso("2024-05-09T12:45:25"));
        assert!(is_iso("2024-05-09"));
        assert!(!is_iso("yesterday"));
        assert!(!is_iso("2024-13-01"));
        assert!(is_iso("10000-01-01T00:00:00.000Z"));
        assert!(is_iso("+010000-01-01T00:00:00.000Z"));
        assert!(!is_iso("10000-01-01"));
    }

    #[test]
    fn unix_round_trip_through_iso() {
        let ms = iso_to_unix_millis("2024-05-09T12:45:25.309Z").unwrap();
        assert_eq!(ms, BigInt::from(1_715_258_725_309i64));
        assert_eq!(unix_millis_to_iso(&ms).unwrap(), "2024-05-09T12:45:25.309Z");
    }

    #[test]
    fn unix_to_iso_rejects_unrepresentable() {
        let huge = BigInt::from(i64::MAX) * 4u32;
        assert!(matches!(
            unix_millis_to_iso(&huge),
            Err(CodecError::OutOfRange { .. })
        ));
    }

    #[test]
    fn epoch_shift_round_trips() {
        let ms = BigInt::from(1);
        assert_eq!(unix_to_unix19(&ms), BigInt::from(2_208_988_800_001i64));
        assert_eq!(unix19_to_unix(&unix_to_unix19(&ms)), ms);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Explicit day counting agrees with chrono across its whole year range.
        #[test]
        fn unix_millis_agrees_with_chrono(
            ms in -62_135_596_800_000i64..=253_402_300_799_999i64
        ) {
            let dt = DateTime::from_timestamp_millis(ms).unwrap();
            let packed = PackedDate::from_datetime(&dt).unwrap();
            prop_assert_eq!(packed.unix_millis(), BigInt::from(ms));
        }

        /// Packing and unpacking preserves the ISO rendering.
        #[test]
        fn pack_unpack_round_trip(
            ms in 0i64..=253_402_300_799_999i64
        ) {
            let dt = DateTime::from_timestamp_millis(ms).unwrap();
            let packed = PackedDate::from_datetime(&dt).unwrap();
            let unpacked = PackedDate::from_bytes(&packed.to_bytes()).unwrap();
            prop_assert_eq!(unpacked.to_iso_string(), to_iso(&dt));
        }
    }
}
