//! Mutable civil calendar point with carry-on-write normalization.
//!
//! Window arithmetic adds raw deltas to a single field (`month += 7`, `day += 103`) and relies on
//! the result being folded back into a valid date. [`CalendarTime`] owns that contract: every
//! write goes through [`Fields::normalize`], which carries seconds into minutes, minutes into
//! hours, hours into days, months into years, and finally applies the day offset from the first
//! of the normalized month.

use std::fmt;
use std::str::FromStr;

use jiff::civil::{Date, DateTime, Time};
use jiff::Span;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::WindowError;
use crate::frequency::Weekday;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;

/// Raw, possibly out-of-range calendar fields.
///
/// Any combination is accepted here; validity is only established by [`Fields::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fields {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
}

impl Fields {
    /// Fields for midnight on the given (possibly unnormalized) date.
    pub fn date(year: i64, month: i64, day: i64) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    /// Fold the fields into a valid civil datetime.
    pub fn normalize(&self) -> Result<DateTime, WindowError> {
        let out_of_range = || WindowError::range(format!("calendar fields out of range: {self}"));

        let seconds = self
            .hour
            .checked_mul(SECONDS_PER_HOUR)
            .zip(self.minute.checked_mul(SECONDS_PER_MINUTE))
            .and_then(|(h, m)| h.checked_add(m))
            .and_then(|hm| hm.checked_add(self.second))
            .ok_or_else(out_of_range)?;
        let carry_days = seconds.div_euclid(SECONDS_PER_DAY);
        let seconds = seconds.rem_euclid(SECONDS_PER_DAY);

        let (year, month) = self.year_month().ok_or_else(out_of_range)?;

        let day_offset = self
            .day
            .checked_sub(1)
            .and_then(|d| d.checked_add(carry_days))
            .ok_or_else(out_of_range)?;

        let first = Date::new(year, month, 1)?;
        let date = first.checked_add(Span::new().try_days(day_offset)?)?;
        // seconds is in 0..86_400 so every component fits in i8
        let time = Time::new(
            (seconds / SECONDS_PER_HOUR) as i8,
            (seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as i8,
            (seconds % SECONDS_PER_MINUTE) as i8,
            0,
        )?;
        Ok(date.to_datetime(time))
    }

    /// Fold month overflow into the year and pin `day` to the last day of that month.
    ///
    /// Used where a month-based step must stay inside its target month, so Jan 31 plus one
    /// month is Feb 29 (in 2012) rather than Mar 2.
    pub fn clamp_day(&mut self) -> Result<(), WindowError> {
        let (year, month) = self
            .year_month()
            .ok_or_else(|| WindowError::range(format!("calendar fields out of range: {self}")))?;
        let last = Date::new(year, month, 1)?.days_in_month();
        self.year = i64::from(year);
        self.month = i64::from(month);
        self.day = self.day.min(i64::from(last));
        Ok(())
    }

    fn year_month(&self) -> Option<(i16, i8)> {
        let months = self
            .year
            .checked_mul(12)
            .zip(self.month.checked_sub(1))
            .and_then(|(y, m)| y.checked_add(m))?;
        let year = i16::try_from(months.div_euclid(12)).ok()?;
        // rem_euclid(12) + 1 is always in 1..=12
        Some((year, (months.rem_euclid(12) + 1) as i8))
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "year={} month={} day={} hour={} minute={} second={}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Signed difference between two calendar times.
///
/// All components share the sign of the difference; `days` counts whole days only, so two
/// times twelve hours apart are zero days apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateDuration {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl DateDuration {
    fn from_seconds(total: i64) -> Self {
        Self {
            days: total / SECONDS_PER_DAY,
            hours: total % SECONDS_PER_DAY / SECONDS_PER_HOUR,
            minutes: total % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.days < 0 || self.hours < 0 || self.minutes < 0 || self.seconds < 0
    }

    pub fn total_seconds(&self) -> i64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

/// A civil (time zone free) calendar point, mutated in place by window operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarTime {
    dt: DateTime,
}

impl CalendarTime {
    /// Midnight on the given date. Out-of-range fields are normalized, so
    /// `CalendarTime::new(2012, 13, 1)` is 2013-01-01.
    pub fn new(year: i64, month: i64, day: i64) -> Result<Self, WindowError> {
        Self::from_fields(Fields::date(year, month, day))
    }

    pub fn from_fields(fields: Fields) -> Result<Self, WindowError> {
        Ok(Self {
            dt: fields.normalize()?,
        })
    }

    pub fn from_datetime(dt: DateTime) -> Self {
        Self { dt }
    }

    pub fn datetime(&self) -> DateTime {
        self.dt
    }

    pub fn date(&self) -> Date {
        self.dt.date()
    }

    pub fn year(&self) -> i64 {
        i64::from(self.dt.year())
    }

    pub fn month(&self) -> i64 {
        i64::from(self.dt.month())
    }

    pub fn day(&self) -> i64 {
        i64::from(self.dt.day())
    }

    pub fn hour(&self) -> i64 {
        i64::from(self.dt.hour())
    }

    pub fn minute(&self) -> i64 {
        i64::from(self.dt.minute())
    }

    pub fn second(&self) -> i64 {
        i64::from(self.dt.second())
    }

    pub fn subsec_nanosecond(&self) -> i32 {
        self.dt.subsec_nanosecond()
    }

    /// Current values as raw fields, down to whole seconds.
    pub fn fields(&self) -> Fields {
        Fields {
            year: self.year(),
            month: self.month(),
            day: self.day(),
            hour: self.hour(),
            minute: self.minute(),
            second: self.second(),
        }
    }

    /// Edit any number of fields, then normalize once.
    ///
    /// All writes made inside `edit` are seen by a single normalization pass, so
    /// `f.month += 1; f.day = 1` on Jan 31 lands on Feb 1. The sub-second part is carried over
    /// unchanged. On error `self` is left untouched.
    pub fn update(&mut self, edit: impl FnOnce(&mut Fields)) -> Result<(), WindowError> {
        self.try_update(|f| {
            edit(f);
            Ok(())
        })
    }

    /// Like [`update`](Self::update), for edits that can themselves fail.
    pub fn try_update(
        &mut self,
        edit: impl FnOnce(&mut Fields) -> Result<(), WindowError>,
    ) -> Result<(), WindowError> {
        let mut fields = self.fields();
        edit(&mut fields)?;
        let dt = fields.normalize()?;
        self.dt = dt
            .with()
            .subsec_nanosecond(self.dt.subsec_nanosecond())
            .build()?;
        Ok(())
    }

    pub fn set_year(&mut self, year: i64) -> Result<(), WindowError> {
        self.update(|f| f.year = year)
    }

    pub fn set_month(&mut self, month: i64) -> Result<(), WindowError> {
        self.update(|f| f.month = month)
    }

    pub fn set_day(&mut self, day: i64) -> Result<(), WindowError> {
        self.update(|f| f.day = day)
    }

    pub fn set_hour(&mut self, hour: i64) -> Result<(), WindowError> {
        self.update(|f| f.hour = hour)
    }

    pub fn set_minute(&mut self, minute: i64) -> Result<(), WindowError> {
        self.update(|f| f.minute = minute)
    }

    pub fn set_second(&mut self, second: i64) -> Result<(), WindowError> {
        self.update(|f| f.second = second)
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_jiff(self.dt.weekday())
    }

    /// Position of this date's weekday in a week beginning on `week_start` (1..=7).
    pub fn day_of_week(&self, week_start: Weekday) -> u8 {
        self.weekday().position_from(week_start)
    }

    /// `self - other`, truncated to whole seconds.
    pub fn subtract_date(&self, other: &CalendarTime) -> DateDuration {
        DateDuration::from_seconds(self.dt.duration_since(other.dt).as_secs())
    }
}

impl From<DateTime> for CalendarTime {
    fn from(dt: DateTime) -> Self {
        Self::from_datetime(dt)
    }
}

impl From<Date> for CalendarTime {
    fn from(date: Date) -> Self {
        Self::from_datetime(date.to_datetime(Time::midnight()))
    }
}

impl fmt::Display for CalendarTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dt)
    }
}

impl FromStr for CalendarTime {
    type Err = WindowError;

    /// Accepts an ISO 8601 date (`2012-01-05`) or civil datetime (`2012-01-05T09:30:00`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(dt) = s.parse::<DateTime>() {
            return Ok(Self::from(dt));
        }
        s.parse::<Date>()
            .map(Self::from)
            .map_err(|e| WindowError::invalid_argument(format!("invalid date '{s}': {e}")))
    }
}

#[cfg(feature = "serde")]
impl Serialize for CalendarTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CalendarTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
