//! Temporal parameter types for MySQL.
//!
//! `Datetime`, `Date` and `Timestamp` mirror the broken-down layout
//! MySQL uses in the binary protocol. `Time` is a signed nanosecond
//! count, since MySQL `TIME` is a duration that may exceed 24 hours
//! or be negative.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use super::{ToParam, Value};
use crate::error::BindError;

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Date and time of day with nanosecond precision, bound as `DATETIME`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Datetime {
    pub year: i16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosec: u32,
}

impl Datetime {
    pub fn new(
        year: i16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanosec: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            nanosec,
        }
    }

    /// Date part.
    pub fn date(&self) -> Date {
        Date::new(self.year, self.month, self.day)
    }
}

impl fmt::Display for Datetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        if self.nanosec != 0 {
            write!(f, ".{:09}", self.nanosec)?;
        }
        Ok(())
    }
}

impl ToParam for Datetime {
    fn to_value(&self) -> Option<Value<'_>> {
        Some(Value::Datetime(self))
    }
}

/// Calendar date, bound as `DATE`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Date {
    pub year: i16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    pub fn new(year: i16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl ToParam for Date {
    fn to_value(&self) -> Option<Value<'_>> {
        Some(Value::Date(self))
    }
}

/// Same layout as [`Datetime`], bound as `TIMESTAMP`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    pub year: i16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosec: u32,
}

impl From<Datetime> for Timestamp {
    fn from(dt: Datetime) -> Self {
        Self {
            year: dt.year,
            month: dt.month,
            day: dt.day,
            hour: dt.hour,
            minute: dt.minute,
            second: dt.second,
            nanosec: dt.nanosec,
        }
    }
}

impl From<Timestamp> for Datetime {
    fn from(ts: Timestamp) -> Self {
        Datetime::new(ts.year, ts.month, ts.day, ts.hour, ts.minute, ts.second, ts.nanosec)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Datetime::from(*self), f)
    }
}

impl ToParam for Timestamp {
    fn to_value(&self) -> Option<Value<'_>> {
        Some(Value::Timestamp(self))
    }
}

/// MySQL `TIME` as signed nanoseconds.
///
/// MySQL does not store the fractional part of the second, but it is
/// accepted in temporal literals, so it is kept here.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Time(pub i64);

impl Time {
    pub fn from_nanos(nanos: i64) -> Self {
        Time(nanos)
    }

    /// Fails when `secs` does not fit in i64 nanoseconds.
    pub fn from_secs(secs: i64) -> Result<Self, BindError> {
        secs.checked_mul(NANOS_PER_SEC as i64)
            .map(Time)
            .ok_or_else(|| {
                BindError::InvalidTemporal(format!("Seconds overflow i64 nanoseconds: {}", secs))
            })
    }

    pub fn as_nanos(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

/// Renders `H:MM:SS[.NNNNNNNNN]`. Negative values carry a leading `-`
/// even when the hour is zero (`-0:00:01`).
impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut t = self.0.unsigned_abs();
        let ns = t % NANOS_PER_SEC;
        t /= NANOS_PER_SEC;
        let sec = t % 60;
        t /= 60;
        let min = t % 60;
        let hour = t / 60;

        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}:{:02}:{:02}", sign, hour, min, sec)?;
        if ns != 0 {
            write!(f, ".{:09}", ns)?;
        }
        Ok(())
    }
}

impl ToParam for Time {
    fn to_value(&self) -> Option<Value<'_>> {
        Some(Value::Time(self))
    }
}

// ==================== chrono ====================

fn narrow_year(year: i32) -> Result<i16, BindError> {
    i16::try_from(year)
        .map_err(|_| BindError::InvalidTemporal(format!("Year out of range: {}", year)))
}

fn check_nanos(nanos: u32) -> Result<u32, BindError> {
    // chrono encodes leap seconds as nanos >= 1s
    if nanos as u64 >= NANOS_PER_SEC {
        return Err(BindError::InvalidTemporal("Leap seconds are not representable".to_string()));
    }
    Ok(nanos)
}

impl TryFrom<NaiveDate> for Date {
    type Error = BindError;

    fn try_from(d: NaiveDate) -> Result<Self, Self::Error> {
        Ok(Date::new(narrow_year(d.year())?, d.month() as u8, d.day() as u8))
    }
}

impl TryFrom<Date> for NaiveDate {
    type Error = BindError;

    fn try_from(d: Date) -> Result<Self, Self::Error> {
        NaiveDate::from_ymd_opt(d.year as i32, d.month as u32, d.day as u32)
            .ok_or_else(|| BindError::InvalidTemporal(format!("Invalid date: {}", d)))
    }
}

impl TryFrom<NaiveDateTime> for Datetime {
    type Error = BindError;

    fn try_from(dt: NaiveDateTime) -> Result<Self, Self::Error> {
        Ok(Datetime::new(
            narrow_year(dt.year())?,
            dt.month() as u8,
            dt.day() as u8,
            dt.hour() as u8,
            dt.minute() as u8,
            dt.second() as u8,
            check_nanos(dt.nanosecond())?,
        ))
    }
}

impl TryFrom<Datetime> for NaiveDateTime {
    type Error = BindError;

    fn try_from(dt: Datetime) -> Result<Self, Self::Error> {
        NaiveDate::from_ymd_opt(dt.year as i32, dt.month as u32, dt.day as u32)
            .and_then(|d| {
                d.and_hms_nano_opt(dt.hour as u32, dt.minute as u32, dt.second as u32, dt.nanosec)
            })
            .ok_or_else(|| BindError::InvalidTemporal(format!("Invalid datetime: {}", dt)))
    }
}

impl TryFrom<NaiveDateTime> for Timestamp {
    type Error = BindError;

    fn try_from(dt: NaiveDateTime) -> Result<Self, Self::Error> {
        Datetime::try_from(dt).map(Timestamp::from)
    }
}

impl TryFrom<Timestamp> for NaiveDateTime {
    type Error = BindError;

    fn try_from(ts: Timestamp) -> Result<Self, Self::Error> {
        NaiveDateTime::try_from(Datetime::from(ts))
    }
}

impl TryFrom<TimeDelta> for Time {
    type Error = BindError;

    fn try_from(delta: TimeDelta) -> Result<Self, Self::Error> {
        delta
            .num_nanoseconds()
            .map(Time)
            .ok_or_else(|| {
                BindError::InvalidTemporal(format!("Duration overflows i64 nanoseconds: {}", delta))
            })
    }
}

impl From<Time> for TimeDelta {
    fn from(t: Time) -> Self {
        TimeDelta::nanoseconds(t.0)
    }
}

impl From<NaiveTime> for Time {
    fn from(t: NaiveTime) -> Self {
        let secs = t.num_seconds_from_midnight() as i64;
        Time(secs * NANOS_PER_SEC as i64 + t.nanosecond() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_display() {
        let dt = Datetime::new(2024, 12, 25, 17, 30, 5, 0);
        assert_eq!(dt.to_string(), "2024-12-25 17:30:05");

        let dt = Datetime::new(2024, 12, 25, 17, 30, 5, 123);
        assert_eq!(dt.to_string(), "2024-12-25 17:30:05.000000123");
    }

    #[test]
    fn test_timestamp_renders_like_datetime() {
        let ts = Timestamp::from(Datetime::new(1999, 1, 2, 3, 4, 5, 600_000_000));
        assert_eq!(ts.to_string(), "1999-01-02 03:04:05.600000000");
    }

    #[test]
    fn test_date_display() {
        assert_eq!(Date::new(7, 3, 9).to_string(), "0007-03-09");
    }

    #[test]
    fn test_time_display() {
        assert_eq!(Time::from_nanos(-3_661_000_000_000).to_string(), "-1:01:01");
        assert_eq!(Time::from_secs(90_000).unwrap().to_string(), "25:00:00");
        assert_eq!(Time::from_nanos(1_500_000_000).to_string(), "0:00:01.500000000");
        assert_eq!(Time::from_secs(-1).unwrap().to_string(), "-0:00:01");
        assert_eq!(Time::default().to_string(), "0:00:00");
    }

    #[test]
    fn test_from_secs_overflow() {
        assert!(matches!(
            Time::from_secs(i64::MAX / 1000),
            Err(BindError::InvalidTemporal(_))
        ));
        assert!(Time::from_secs(i64::MIN).is_err());
        assert_eq!(Time::from_secs(-3661).unwrap().as_nanos(), -3_661_000_000_000);
    }

    #[test]
    fn test_time_extremes_do_not_overflow() {
        assert!(Time(i64::MIN).to_string().starts_with('-'));
        assert!(!Time(i64::MAX).to_string().starts_with('-'));
    }

    #[test]
    fn test_chrono_datetime_conversion() {
        let naive = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_nano_opt(23, 59, 58, 42)
            .unwrap();
        let dt = Datetime::try_from(naive).unwrap();
        assert_eq!(dt, Datetime::new(2024, 2, 29, 23, 59, 58, 42));
        assert_eq!(NaiveDateTime::try_from(dt).unwrap(), naive);
    }

    #[test]
    fn test_chrono_rejects_invalid() {
        assert!(NaiveDate::try_from(Date::new(2023, 2, 29)).is_err());

        let far = NaiveDate::from_ymd_opt(40_000, 1, 1).unwrap();
        assert!(matches!(Date::try_from(far), Err(BindError::InvalidTemporal(_))));
    }

    #[test]
    fn test_chrono_time_conversion() {
        let t = NaiveTime::from_hms_opt(1, 2, 3).unwrap();
        assert_eq!(Time::from(t), Time::from_secs(3723).unwrap());

        let delta = TimeDelta::seconds(-3661);
        let time = Time::try_from(delta).unwrap();
        assert_eq!(time.to_string(), "-1:01:01");
        assert_eq!(TimeDelta::from(time), delta);
    }
}
