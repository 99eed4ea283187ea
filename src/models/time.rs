//! Time-of-day and slot primitives.
//!
//! All placement arithmetic happens on minute-of-day integers; the wire
//! format is the `"HH:MM"` string used by the surrounding application.
//!
//! # Time Model
//!
//! [`TimeOfDay`] counts minutes since midnight. Values at or past 24:00
//! are representable — an activity starting at 23:30 with a 60-minute
//! duration ends at `"24:30"` — and there is no wraparound.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error parsing an `"HH:MM"` time string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTimeError {
    /// Input is not two numeric fields separated by `:`.
    #[error("expected \"HH:MM\", got \"{0}\"")]
    Malformed(String),
    /// Minute field is 60 or more.
    #[error("minute field out of range in \"{0}\"")]
    MinuteOutOfRange(String),
}

/// A time of day, stored as minutes since midnight.
///
/// Serializes as an `"HH:MM"` string. Ordering and equality follow the
/// underlying minute count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(i32);

impl TimeOfDay {
    /// 00:00.
    pub const MIDNIGHT: Self = Self(0);

    /// Creates a time from a raw minute-of-day count.
    pub const fn from_minutes(minutes: i32) -> Self {
        Self(minutes)
    }

    /// Creates a time from hour and minute components.
    pub const fn from_hm(hours: i32, minutes: i32) -> Self {
        Self(hours * 60 + minutes)
    }

    /// Minutes since midnight.
    #[inline]
    pub const fn minutes(self) -> i32 {
        self.0
    }

    /// Returns this time shifted forward by `minutes` (no wraparound).
    #[inline]
    pub const fn add_minutes(self, minutes: i32) -> Self {
        Self(self.0 + minutes)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| ParseTimeError::Malformed(s.to_string()))?;
        let hours: u32 = h
            .parse()
            .map_err(|_| ParseTimeError::Malformed(s.to_string()))?;
        let minutes: u32 = m
            .parse()
            .map_err(|_| ParseTimeError::Malformed(s.to_string()))?;
        if minutes >= 60 {
            return Err(ParseTimeError::MinuteOutOfRange(s.to_string()));
        }
        Ok(Self((hours * 60 + minutes) as i32))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A time interval `[start, end)`.
///
/// Half-open: includes start, excludes end. Back-to-back slots sharing
/// a boundary do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Interval start (inclusive).
    pub start: TimeOfDay,
    /// Interval end (exclusive).
    pub end: TimeOfDay,
}

impl TimeSlot {
    /// Creates a new slot.
    pub const fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Creates a slot from a start time and duration in minutes.
    pub const fn from_start(start: TimeOfDay, duration_min: i32) -> Self {
        Self {
            start,
            end: start.add_minutes(duration_min),
        }
    }

    /// Duration of this slot in minutes.
    #[inline]
    pub const fn duration_min(&self) -> i32 {
        self.end.minutes() - self.start.minutes()
    }

    /// Whether a time falls within this slot.
    #[inline]
    pub fn contains(&self, t: TimeOfDay) -> bool {
        t >= self.start && t < self.end
    }

    /// Whether two slots overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let t: TimeOfDay = "09:30".parse().unwrap();
        assert_eq!(t.minutes(), 570);
        assert_eq!(t.to_string(), "09:30");

        // Single-digit hour accepted, always formatted zero-padded
        let t: TimeOfDay = "8:05".parse().unwrap();
        assert_eq!(t.to_string(), "08:05");
    }

    #[test]
    fn test_no_wraparound_past_midnight() {
        let t = TimeOfDay::from_hm(23, 30).add_minutes(60);
        assert_eq!(t.minutes(), 1470);
        assert_eq!(t.to_string(), "24:30");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(
            "930".parse::<TimeOfDay>(),
            Err(ParseTimeError::Malformed("930".to_string()))
        );
        assert_eq!(
            "ab:cd".parse::<TimeOfDay>(),
            Err(ParseTimeError::Malformed("ab:cd".to_string()))
        );
        assert_eq!(
            "09:75".parse::<TimeOfDay>(),
            Err(ParseTimeError::MinuteOutOfRange("09:75".to_string()))
        );
        assert!("-1:00".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_serde_string_form() {
        let t = TimeOfDay::from_hm(14, 0);
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"14:00\"");

        let back: TimeOfDay = serde_json::from_str("\"14:00\"").unwrap();
        assert_eq!(back, t);

        assert!(serde_json::from_str::<TimeOfDay>("\"nope\"").is_err());
    }

    #[test]
    fn test_slot_contains() {
        let slot = TimeSlot::from_start(TimeOfDay::from_hm(9, 0), 60);
        assert!(slot.contains(TimeOfDay::from_hm(9, 0)));
        assert!(slot.contains(TimeOfDay::from_hm(9, 59)));
        assert!(!slot.contains(TimeOfDay::from_hm(10, 0))); // exclusive end
        assert_eq!(slot.duration_min(), 60);
    }

    #[test]
    fn test_slot_overlap_strict() {
        let a = TimeSlot::from_start(TimeOfDay::from_hm(9, 0), 60);
        let b = TimeSlot::from_start(TimeOfDay::from_hm(9, 30), 60);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        // Touching boundary is not overlap
        let c = TimeSlot::from_start(TimeOfDay::from_hm(10, 0), 60);
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }
}
