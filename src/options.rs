//! Loosely typed configuration record for building a [`Window`](crate::Window).
//!
//! Options usually arrive from JSON or a command line, where an interval may be a number or a
//! numeric string. [`Window::from_options`](crate::Window::from_options) applies the validation
//! rules; this module only holds the values and knows how to read numbers out of them.

use std::fmt;

/// A single option value as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum OptionValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl OptionValue {
    /// Read an integer the lenient way: text yields its leading integer (`"12abc"` → 12) and
    /// floats are truncated. Returns `None` when no integer can be read.
    pub fn leading_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Float(x) if x.is_finite() => Some(x.trunc() as i64),
            Self::Float(_) => None,
            Self::Text(s) => parse_leading_integer(s),
        }
    }

    /// The value as an integer, only if it was given as a number with no fractional part.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 => Some(*x as i64),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Text(_))
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "\"{s}\""),
        }
    }
}

fn parse_leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let n: i64 = digits[..end].parse().ok()?;
    Some(if negative { -n } else { n })
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<u32> for OptionValue {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<f64> for OptionValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Configuration record for a window: `frequency`, `interval`, `weekStart`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WindowOptions {
    /// Frequency name, case-insensitive. Required.
    pub frequency: Option<String>,
    /// Interval; ignored unless it reads as an integer greater than zero.
    pub interval: Option<OptionValue>,
    /// RFC 5545 day number of the week start (1 = Monday .. 7 = Sunday).
    pub week_start: Option<OptionValue>,
}

impl WindowOptions {
    pub fn new(frequency: impl Into<String>) -> Self {
        Self {
            frequency: Some(frequency.into()),
            ..Self::default()
        }
    }

    pub fn with_interval(mut self, interval: impl Into<OptionValue>) -> Self {
        self.interval = Some(interval.into());
        self
    }

    pub fn with_week_start(mut self, week_start: impl Into<OptionValue>) -> Self {
        self.week_start = Some(week_start.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_integer_text() {
        assert_eq!(OptionValue::from("3").leading_integer(), Some(3));
        assert_eq!(OptionValue::from("  12abc").leading_integer(), Some(12));
        assert_eq!(OptionValue::from("-4").leading_integer(), Some(-4));
        assert_eq!(OptionValue::from("+7").leading_integer(), Some(7));
        assert_eq!(OptionValue::from("abc").leading_integer(), None);
        assert_eq!(OptionValue::from("").leading_integer(), None);
        assert_eq!(OptionValue::from("-").leading_integer(), None);
    }

    #[test]
    fn test_leading_integer_numbers() {
        assert_eq!(OptionValue::from(2.9).leading_integer(), Some(2));
        assert_eq!(OptionValue::from(f64::NAN).leading_integer(), None);
        assert_eq!(OptionValue::from(5u32).leading_integer(), Some(5));
    }

    #[test]
    fn test_as_integer_rejects_fractions_and_text() {
        assert_eq!(OptionValue::from(2.0).as_integer(), Some(2));
        assert_eq!(OptionValue::from(2.5).as_integer(), None);
        assert_eq!(OptionValue::from("2").as_integer(), None);
        assert!(!OptionValue::from("2").is_numeric());
    }

    #[test]
    fn test_builder_fills_fields() {
        let opts = WindowOptions::new("weekly")
            .with_interval(15u32)
            .with_week_start(7i64);
        assert_eq!(opts.frequency.as_deref(), Some("weekly"));
        assert_eq!(opts.interval, Some(OptionValue::Integer(15)));
        assert_eq!(opts.week_start, Some(OptionValue::Integer(7)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_mixed_value_types() {
        let opts: WindowOptions =
            serde_json::from_str(r#"{"frequency":"MONTHLY","interval":"3","weekStart":2}"#)
                .unwrap();
        assert_eq!(opts.frequency.as_deref(), Some("MONTHLY"));
        assert_eq!(opts.interval, Some(OptionValue::Text("3".into())));
        assert_eq!(opts.week_start, Some(OptionValue::Integer(2)));

        let bare: WindowOptions = serde_json::from_str(r#"{"frequency":"daily"}"#).unwrap();
        assert_eq!(bare.interval, None);
        assert_eq!(bare.week_start, None);
    }
}
