use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::WindowError;

/// Recurrence granularity of a window (the FREQ part of an RRULE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Yearly,
    Monthly,
    Weekly,
    Daily,
}

impl Frequency {
    /// Every supported frequency, coarsest first.
    pub const ALL: [Frequency; 4] = [
        Frequency::Yearly,
        Frequency::Monthly,
        Frequency::Weekly,
        Frequency::Daily,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yearly => "yearly",
            Self::Monthly => "monthly",
            Self::Weekly => "weekly",
            Self::Daily => "daily",
        }
    }

    /// Unit name used when describing an interval, e.g. "every 3 weeks".
    pub fn unit(self) -> &'static str {
        match self {
            Self::Yearly => "year",
            Self::Monthly => "month",
            Self::Weekly => "week",
            Self::Daily => "day",
        }
    }

    /// Whether `move_to_nearest_date` is defined for this frequency.
    pub fn supports_jump(self) -> bool {
        !matches!(self, Self::Daily)
    }

    /// Parse a frequency name, ignoring case.
    pub fn parse(s: &str) -> Result<Self, WindowError> {
        match s.trim().to_lowercase().as_str() {
            "yearly" => Ok(Self::Yearly),
            "monthly" => Ok(Self::Monthly),
            "weekly" => Ok(Self::Weekly),
            "daily" => Ok(Self::Daily),
            other => Err(WindowError::config(format!(
                "invalid frequency \"{other}\": use one of {}",
                valid_frequencies()
            ))),
        }
    }
}

fn valid_frequencies() -> String {
    Frequency::ALL
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Frequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Frequency::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Day of the week, numbered the RFC 5545 way (Monday = 1 .. Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Weekday {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    pub fn from_jiff(wd: jiff::civil::Weekday) -> Self {
        match wd {
            jiff::civil::Weekday::Monday => Self::Monday,
            jiff::civil::Weekday::Tuesday => Self::Tuesday,
            jiff::civil::Weekday::Wednesday => Self::Wednesday,
            jiff::civil::Weekday::Thursday => Self::Thursday,
            jiff::civil::Weekday::Friday => Self::Friday,
            jiff::civil::Weekday::Saturday => Self::Saturday,
            jiff::civil::Weekday::Sunday => Self::Sunday,
        }
    }

    /// RFC 5545 day number: Monday=1, Sunday=7.
    pub fn number(self) -> u8 {
        match self {
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
            Self::Sunday => 7,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            7 => Some(Self::Sunday),
            _ => None,
        }
    }

    /// Position of `self` in a week that begins on `week_start` (1 = `week_start` itself).
    pub fn position_from(self, week_start: Weekday) -> u8 {
        let offset = (i16::from(self.number()) - i16::from(week_start.number())).rem_euclid(7);
        // offset is in 0..7
        offset as u8 + 1
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_weekday(s).ok_or_else(|| WindowError::config(format!("unknown weekday: {s}")))
    }
}

#[cfg(feature = "serde")]
impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_weekday(&s).ok_or_else(|| serde::de::Error::custom(format!("unknown weekday: {s}")))
    }
}

/// Parse a weekday from its full name, three-letter or two-letter abbreviation, or its
/// RFC 5545 number.
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    match s.trim().to_lowercase().as_str() {
        "monday" | "mon" | "mo" | "1" => Some(Weekday::Monday),
        "tuesday" | "tue" | "tu" | "2" => Some(Weekday::Tuesday),
        "wednesday" | "wed" | "we" | "3" => Some(Weekday::Wednesday),
        "thursday" | "thu" | "th" | "4" => Some(Weekday::Thursday),
        "friday" | "fri" | "fr" | "5" => Some(Weekday::Friday),
        "saturday" | "sat" | "sa" | "6" => Some(Weekday::Saturday),
        "sunday" | "sun" | "su" | "7" => Some(Weekday::Sunday),
        _ => None,
    }
}
