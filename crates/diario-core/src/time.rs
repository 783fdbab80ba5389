use crate::error::DiarioError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Wall-clock time of day, stored as minutes since midnight.
///
/// Ordering is chronological within a single day. There is no notion of a
/// time that wraps past midnight: `23:30` is always later than `00:15`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(u16::from(hour) * 60 + u16::from(minute)))
        } else {
            None
        }
    }

    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Minutes from `self` to `end`, or `None` when `end` is not later.
    pub fn minutes_until(self, end: ClockTime) -> Option<u32> {
        (end.0 > self.0).then(|| u32::from(end.0 - self.0))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = DiarioError;

    /// Accepts `HH:MM` and the backend's `HH:MM:SS` column form. Seconds are
    /// validated and dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DiarioError::InvalidTime(s.to_string());
        let mut parts = s.split(':');
        let hour = two_digits(parts.next()).ok_or_else(err)?;
        let minute = two_digits(parts.next()).ok_or_else(err)?;
        if let Some(sec) = parts.next() {
            match two_digits(Some(sec)) {
                Some(v) if v < 60 => {}
                _ => return Err(err()),
            }
        }
        if parts.next().is_some() {
            return Err(err());
        }
        ClockTime::new(hour, minute).ok_or_else(err)
    }
}

fn two_digits(part: Option<&str>) -> Option<u8> {
    let part = part?;
    if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Render a duration as `H:MM`, e.g. `90` → `1:30`.
pub fn format_duration(minutes: u32) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
