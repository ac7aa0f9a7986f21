//! Per-frequency window arithmetic.
//!
//! Each [`Frequency`] arm knows how to step to the next window boundary (`increment`) and how
//! to jump straight to the last interval-aligned boundary at or before a target
//! (`move_to_nearest_date`). Both are closed-form: the work done never depends on the interval
//! or on how far away the target is.

use crate::error::WindowError;
use crate::frequency::{Frequency, Weekday};
use crate::time::{CalendarTime, Fields};

const DAYS_PER_WEEK: i64 = 7;

/// Yearly and monthly jumps keep the anchor's finer fields, so the aligned candidate in the
/// target's own period may still lie past the target. One interval back is always before it.
const MAX_CANDIDATES: usize = 2;

/// Outcome of a `move_to_nearest_date` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jump {
    /// No aligned boundary lies after the time and at or before the target; the time was not
    /// touched.
    Unchanged,
    /// The time was moved by `units` whole periods of the window's frequency
    /// (years, months or weeks).
    Moved { units: i64 },
}

impl Jump {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

/// Window settings a strategy reads. Interval is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Params {
    pub interval: i64,
    pub week_start: Weekday,
}

impl Frequency {
    /// Truncate finer-grained fields to the canonical start of a period.
    pub(crate) fn flatten(self, fields: &mut Fields) {
        match self {
            Self::Yearly => {
                fields.month = 1;
                fields.day = 1;
            }
            Self::Monthly => fields.day = 1,
            Self::Weekly | Self::Daily => {}
        }
    }

    /// Advance `time` to the start of the next window.
    pub(crate) fn increment(self, time: &mut CalendarTime, p: Params) -> Result<(), WindowError> {
        match self {
            Self::Yearly => time.update(|f| {
                f.year = f.year.saturating_add(p.interval);
                self.flatten(f);
            }),
            Self::Monthly => time.update(|f| {
                f.month = f.month.saturating_add(p.interval);
                self.flatten(f);
            }),
            Self::Weekly => {
                let dow = i64::from(time.day_of_week(p.week_start));
                let to_next_week_start = 8 - dow;
                let days = to_next_week_start + DAYS_PER_WEEK * (p.interval - 1);
                time.update(|f| f.day = f.day.saturating_add(days))
            }
            Self::Daily => time.update(|f| f.day = f.day.saturating_add(p.interval)),
        }
    }

    /// Move `time` to the interval-aligned boundary closest to `target` without passing it.
    ///
    /// Callers guarantee `target >= time`.
    pub(crate) fn move_to_nearest_date(
        self,
        target: &CalendarTime,
        time: &mut CalendarTime,
        p: Params,
    ) -> Result<Jump, WindowError> {
        match self {
            Self::Yearly => {
                let diff = target.year() - time.year();
                jump_aligned(target, time, diff, p.interval, |f, years| {
                    f.year = f.year.saturating_add(years);
                })
            }
            Self::Monthly => {
                let diff = (target.year() - time.year()) * 12 + (target.month() - time.month());
                jump_aligned(target, time, diff, p.interval, |f, months| {
                    f.month = f.month.saturating_add(months);
                })
            }
            Self::Weekly => jump_weekly(target, time, p),
            Self::Daily => Err(WindowError::unsupported(
                "move to nearest date is not defined for the daily frequency",
            )),
        }
    }
}

/// Shared yearly/monthly jump: add the largest multiple of `interval` not exceeding `diff`
/// units, stepping back an interval while the candidate lies past `target`.
///
/// The day of month is clamped to the candidate month (Nov 30 plus three months is Feb 28), so
/// the candidate always stays in the period it was aimed at.
fn jump_aligned(
    target: &CalendarTime,
    time: &mut CalendarTime,
    diff: i64,
    interval: i64,
    apply: impl Fn(&mut Fields, i64),
) -> Result<Jump, WindowError> {
    let mut units = diff - diff.rem_euclid(interval);
    for _ in 0..MAX_CANDIDATES {
        if units <= 0 {
            break;
        }
        let mut candidate = *time;
        candidate.try_update(|f| {
            apply(f, units);
            f.clamp_day()
        })?;
        if candidate <= *target {
            *time = candidate;
            return Ok(Jump::Moved { units });
        }
        units -= interval;
    }
    Ok(Jump::Unchanged)
}

fn jump_weekly(
    target: &CalendarTime,
    time: &mut CalendarTime,
    p: Params,
) -> Result<Jump, WindowError> {
    let diff = target.subtract_date(time).days;
    let dow = i64::from(time.day_of_week(p.week_start));
    let to_next_week_start = 8 - dow;

    // target is still inside the current week
    if diff < to_next_week_start {
        return Ok(Jump::Unchanged);
    }

    let target_offset = i64::from(target.day_of_week(p.week_start)) - 1;
    // whole week-start-to-week-start weeks between the two dates
    let mut weeks = (diff - target_offset + (dow - 1)) / DAYS_PER_WEEK;
    weeks -= weeks % p.interval;

    // measured from the start of time's own week, not from time itself
    let days = weeks * DAYS_PER_WEEK - (dow - 1);
    if days == 0 {
        return Ok(Jump::Unchanged);
    }
    time.update(|f| f.day = f.day.saturating_add(days))?;
    Ok(Jump::Moved { units: weeks })
}
