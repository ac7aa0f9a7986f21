use std::fmt;

use crate::error::WindowError;
use crate::frequency::{Frequency, Weekday};
use crate::options::WindowOptions;
use crate::strategy::{Jump, Params};
use crate::time::CalendarTime;

/// The FREQ/INTERVAL/WKST scope of a recurrence rule.
///
/// A window is immutable configuration. Its operations only mutate the [`CalendarTime`] they
/// are handed, so one window can be shared freely across calls and threads.
///
/// ```
/// use rrwindow::{CalendarTime, Frequency, Window};
///
/// let window = Window::new(Frequency::Monthly).with_interval(5);
/// let mut time = CalendarTime::new(2012, 5, 1)?;
///
/// window.increment(&mut time)?;
/// assert_eq!(time.to_string(), "2012-10-01T00:00:00");
/// # Ok::<(), rrwindow::WindowError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    frequency: Frequency,
    interval: u32,
    week_start: Weekday,
}

impl Window {
    pub const DEFAULT_INTERVAL: u32 = 1;

    /// A window of the given frequency with interval 1 and weeks starting on Monday.
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            interval: Self::DEFAULT_INTERVAL,
            week_start: Weekday::Monday,
        }
    }

    /// Set the interval. Zero is ignored and keeps the current value.
    pub fn with_interval(mut self, interval: u32) -> Self {
        if interval > 0 {
            self.interval = interval;
        }
        self
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// Build a window from a loosely typed options record.
    ///
    /// The frequency is required and must name one of the four supported frequencies. An
    /// interval that does not read as a positive integer is ignored, leaving the default of 1.
    /// A week start, if given, must be a day number from 1 (Monday) to 7 (Sunday).
    pub fn from_options(options: &WindowOptions) -> Result<Self, WindowError> {
        let frequency = Frequency::parse(options.frequency.as_deref().unwrap_or_default())?;
        let mut window = Self::new(frequency);

        if let Some(value) = &options.interval {
            match value
                .leading_integer()
                .filter(|n| *n > 0)
                .and_then(|n| u32::try_from(n).ok())
            {
                Some(interval) => window.interval = interval,
                None => tracing::debug!(
                    interval = %value,
                    "interval is not a positive integer, keeping default"
                ),
            }
        }

        if let Some(value) = &options.week_start {
            if !value.is_numeric() {
                return Err(WindowError::config(format!(
                    "week start should be numeric, got {value}"
                )));
            }
            window.week_start = value
                .as_integer()
                .and_then(|n| u8::try_from(n).ok())
                .and_then(Weekday::from_number)
                .ok_or_else(|| {
                    WindowError::config(format!(
                        "week start must be a day number from 1 (monday) to 7 (sunday), got {value}"
                    ))
                })?;
        }

        tracing::debug!(
            frequency = %window.frequency,
            interval = window.interval,
            week_start = %window.week_start,
            "built window"
        );
        Ok(window)
    }

    /// Build a window from a JSON options object such as
    /// `{"frequency": "weekly", "interval": 2, "weekStart": 7}`.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, WindowError> {
        let options: WindowOptions = serde_json::from_str(json)
            .map_err(|e| WindowError::config(format!("invalid window options: {e}")))?;
        Self::from_options(&options)
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    fn params(&self) -> Params {
        Params {
            interval: i64::from(self.interval),
            week_start: self.week_start,
        }
    }

    /// Move `time` to the start of the next window. Always advances.
    pub fn increment(&self, time: &mut CalendarTime) -> Result<(), WindowError> {
        let before = *time;
        self.frequency.increment(time, self.params())?;
        tracing::trace!(
            frequency = %self.frequency,
            interval = self.interval,
            from = %before,
            to = %time,
            "incremented window"
        );
        Ok(())
    }

    /// Move `time` to the interval-aligned window boundary closest to `target` without
    /// passing it.
    ///
    /// This is best effort: when `target` lies within the remainder of the current window,
    /// `time` is left as it is and [`Jump::Unchanged`] is returned. Fails without touching
    /// `time` if `target` is before `time`, or for daily windows, which define no jump.
    pub fn move_to_nearest_date(
        &self,
        target: &CalendarTime,
        time: &mut CalendarTime,
    ) -> Result<Jump, WindowError> {
        if target < time {
            return Err(WindowError::invalid_argument(format!(
                "move target must not be before the current time ({target} < {time})"
            )));
        }

        let before = *time;
        let jump = self
            .frequency
            .move_to_nearest_date(target, time, self.params())?;
        tracing::trace!(
            frequency = %self.frequency,
            interval = self.interval,
            from = %before,
            to = %time,
            target = %target,
            unchanged = jump.is_unchanged(),
            "moved to nearest window"
        );
        Ok(jump)
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.interval == 1 {
            write!(f, "every {}", self.frequency.unit())?;
        } else {
            write!(f, "every {} {}s", self.interval, self.frequency.unit())?;
        }
        if self.frequency == Frequency::Weekly {
            write!(f, " starting {}", self.week_start)?;
        }
        Ok(())
    }
}
