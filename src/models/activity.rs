//! Activity model.
//!
//! An activity is a user-defined task template: something to fit into
//! the day, with a duration, a priority, and optional placement hints
//! (preferred start time, energy level).
//!
//! Several fields are carried for the surrounding application but never
//! read during placement: recurrence, travel times, location, notes,
//! and color are display/future-use metadata.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TimeOfDay;

/// Activity classification.
///
/// Used for display coloring and the same-type clustering bonus during
/// slot scoring — never as a hard placement constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Meeting,
    Class,
    Hobby,
    Meal,
    Relax,
    Work,
    Custom,
}

impl ActivityType {
    /// Default display color (hex) for this type.
    pub const fn default_color(self) -> &'static str {
        match self {
            Self::Meeting => "#3b82f6",
            Self::Class => "#8b5cf6",
            Self::Hobby => "#ec4899",
            Self::Meal => "#f59e0b",
            Self::Relax => "#10b981",
            Self::Work => "#6366f1",
            Self::Custom => "#6b7280",
        }
    }
}

/// How demanding an activity is, used by slot scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    High,
    Medium,
    Low,
}

/// Recurrence frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

/// Recurrence description.
///
/// Carried in the data model for the surrounding application; the
/// single-day engine never expands it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrencePattern {
    /// Repeat frequency.
    pub frequency: Frequency,
    /// Repeat every `interval` units of the frequency.
    pub interval: u32,
    /// Weekdays (0 = Sunday) for weekly patterns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<u8>>,
    /// Last date the pattern applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Total number of occurrences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// A user-defined activity to be placed into the day.
///
/// IDs must be unique across a collection (see
/// [`validate_input`](crate::validation::validate_input)); collection
/// order is not meaningful — the engine re-sorts before placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Unique identifier, stable across edits.
    pub id: String,
    /// Display name (non-empty).
    pub title: String,
    /// Activity classification.
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    /// Duration in minutes.
    #[serde(rename = "duration")]
    pub duration_min: i32,
    /// Placement priority, 1–5 (5 = highest).
    pub priority: u8,
    /// Whether the engine may move this activity off its preferred time.
    pub is_flexible: bool,
    /// Whether this activity recurs (pass-through).
    pub is_recurring: bool,
    /// Recurrence description (pass-through).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurrencePattern>,
    /// Time the engine tries first.
    #[serde(
        default,
        rename = "preferredStartTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub preferred_start: Option<TimeOfDay>,
    /// Travel minutes before the activity (pass-through).
    #[serde(
        default,
        rename = "travelTimeBefore",
        skip_serializing_if = "Option::is_none"
    )]
    pub travel_before_min: Option<i32>,
    /// Travel minutes after the activity (pass-through).
    #[serde(
        default,
        rename = "travelTimeAfter",
        skip_serializing_if = "Option::is_none"
    )]
    pub travel_after_min: Option<i32>,
    /// Energy demand, consulted by slot scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<EnergyLevel>,
    /// Where the activity happens (pass-through).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Free-form notes (pass-through).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Explicit display color; falls back to the type default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Fixed activities are placed before all non-fixed ones regardless
    /// of priority. Placement is still best-effort: a fixed activity
    /// whose time is taken can end up unplaced.
    #[serde(default)]
    pub is_fixed: bool,
}

impl Activity {
    /// Creates a new flexible activity with middle priority.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        activity_type: ActivityType,
        duration_min: i32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            activity_type,
            duration_min,
            priority: 3,
            is_flexible: true,
            is_recurring: false,
            recurrence: None,
            preferred_start: None,
            travel_before_min: None,
            travel_after_min: None,
            energy_level: None,
            location: None,
            notes: None,
            color: None,
            is_fixed: false,
        }
    }

    /// Sets the priority (1–5, 5 = highest).
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the preferred start time.
    pub fn with_preferred_start(mut self, start: TimeOfDay) -> Self {
        self.preferred_start = Some(start);
        self
    }

    /// Sets the energy level.
    pub fn with_energy(mut self, level: EnergyLevel) -> Self {
        self.energy_level = Some(level);
        self
    }

    /// Marks the activity as fixed (immovable commitment).
    pub fn fixed(mut self) -> Self {
        self.is_fixed = true;
        self.is_flexible = false;
        self
    }

    /// Sets the recurrence pattern.
    pub fn with_recurrence(mut self, pattern: RecurrencePattern) -> Self {
        self.is_recurring = true;
        self.recurrence = Some(pattern);
        self
    }

    /// Sets travel minutes before and after.
    pub fn with_travel(mut self, before_min: i32, after_min: i32) -> Self {
        self.travel_before_min = Some(before_min);
        self.travel_after_min = Some(after_min);
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets free-form notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets an explicit display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Display color: the explicit color if set, else the type default.
    pub fn display_color(&self) -> &str {
        self.color
            .as_deref()
            .unwrap_or_else(|| self.activity_type.default_color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_builder() {
        let act = Activity::new("a1", "Deep work", ActivityType::Work, 90)
            .with_priority(5)
            .with_preferred_start(TimeOfDay::from_hm(9, 0))
            .with_energy(EnergyLevel::High)
            .with_location("office");

        assert_eq!(act.id, "a1");
        assert_eq!(act.duration_min, 90);
        assert_eq!(act.priority, 5);
        assert_eq!(act.preferred_start, Some(TimeOfDay::from_hm(9, 0)));
        assert_eq!(act.energy_level, Some(EnergyLevel::High));
        assert!(act.is_flexible);
        assert!(!act.is_fixed);
    }

    #[test]
    fn test_fixed_clears_flexibility() {
        let act = Activity::new("a1", "Standup", ActivityType::Meeting, 15).fixed();
        assert!(act.is_fixed);
        assert!(!act.is_flexible);
    }

    #[test]
    fn test_display_color_fallback() {
        let act = Activity::new("a1", "Lunch", ActivityType::Meal, 45);
        assert_eq!(act.display_color(), "#f59e0b");

        let act = act.with_color("#000000");
        assert_eq!(act.display_color(), "#000000");
    }

    #[test]
    fn test_wire_format_camel_case() {
        // Shape produced by the companion frontend
        let json = r#"{
            "id": "1",
            "title": "Morning Meeting",
            "type": "meeting",
            "duration": 60,
            "priority": 4,
            "isFlexible": false,
            "isRecurring": false,
            "preferredStartTime": "09:00",
            "energyLevel": "high",
            "isFixed": true
        }"#;

        let act: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(act.activity_type, ActivityType::Meeting);
        assert_eq!(act.duration_min, 60);
        assert_eq!(act.preferred_start, Some(TimeOfDay::from_hm(9, 0)));
        assert_eq!(act.energy_level, Some(EnergyLevel::High));
        assert!(act.is_fixed);

        let out = serde_json::to_value(&act).unwrap();
        assert_eq!(out["preferredStartTime"], "09:00");
        assert_eq!(out["type"], "meeting");
        assert!(out.get("recurrence").is_none());
    }

    #[test]
    fn test_recurrence_is_carried() {
        let pattern = RecurrencePattern {
            frequency: Frequency::Weekly,
            interval: 1,
            days_of_week: Some(vec![1, 3, 5]),
            end_date: None,
            count: Some(10),
        };
        let act = Activity::new("a1", "Spin class", ActivityType::Hobby, 60)
            .with_recurrence(pattern.clone());
        assert!(act.is_recurring);

        let out = serde_json::to_value(&act).unwrap();
        assert_eq!(out["recurrence"]["frequency"], "weekly");
        assert_eq!(out["recurrence"]["daysOfWeek"][1], 3);

        let back: Activity = serde_json::from_str(&out.to_string()).unwrap();
        assert_eq!(back.recurrence, Some(pattern));
    }

    #[test]
    fn test_is_fixed_defaults_false() {
        let json = r#"{
            "id": "2",
            "title": "Gym",
            "type": "hobby",
            "duration": 45,
            "priority": 2,
            "isFlexible": true,
            "isRecurring": false
        }"#;

        let act: Activity = serde_json::from_str(json).unwrap();
        assert!(!act.is_fixed);
        assert!(act.preferred_start.is_none());
    }
}
