//! rrwindow — recurrence windows for iCalendar rules.
//!
//! Given the FREQ/INTERVAL/WKST parts of a recurrence rule, a [`Window`] steps an anchor date
//! to the start of the next period ([`Window::increment`]) or jumps it straight to the last
//! interval-aligned period boundary at or before a target ([`Window::move_to_nearest_date`]).
//! The jump is closed-form, so skipping decades of a daily-ish rule costs the same as
//! skipping one period.
//!
//! # Examples
//!
//! ```
//! use rrwindow::{CalendarTime, Window, WindowOptions};
//!
//! let window = Window::from_options(&WindowOptions::new("weekly").with_interval(15u32))?;
//!
//! let target = CalendarTime::new(2013, 1, 1)?;
//! let mut time = CalendarTime::new(2012, 7, 18)?;
//! window.move_to_nearest_date(&target, &mut time)?;
//!
//! assert_eq!(time.to_string(), "2012-10-29T00:00:00");
//! # Ok::<(), rrwindow::WindowError>(())
//! ```

pub mod error;
pub mod frequency;
pub mod options;
pub mod strategy;
pub mod time;
pub mod window;

pub use error::WindowError;
pub use frequency::{Frequency, Weekday};
pub use options::{OptionValue, WindowOptions};
pub use strategy::Jump;
pub use time::{CalendarTime, DateDuration, Fields};
pub use window::Window;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

#[cfg(feature = "serde")]
impl Serialize for Window {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("frequency", &self.frequency())?;
        map.serialize_entry("interval", &self.interval())?;
        map.serialize_entry("weekStart", &self.week_start().number())?;
        map.end()
    }
}
