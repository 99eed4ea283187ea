//! Schedule (result) model.
//!
//! A generated day plan: placed activities with their time slots, the
//! conflicts detected among them, and the activities that could not be
//! placed at all.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Activity, TimeOfDay, TimeSlot};

/// An activity with its assigned time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledActivity {
    /// The source activity.
    #[serde(flatten)]
    pub activity: Activity,
    /// Assigned start time.
    pub scheduled_start: TimeOfDay,
    /// Assigned end time (`start + duration`).
    pub scheduled_end: TimeOfDay,
    /// False only when the activity landed exactly on a fixed
    /// activity's preferred time.
    pub is_auto_scheduled: bool,
    /// IDs of conflicting entries. Left empty by the engine — the
    /// rendering layer fills this from the conflict list if it wants
    /// per-entry annotations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicts_with: Option<Vec<String>>,
}

impl ScheduledActivity {
    /// Creates an entry for an activity placed at `slot`.
    pub fn new(activity: Activity, slot: TimeSlot, is_auto_scheduled: bool) -> Self {
        Self {
            activity,
            scheduled_start: slot.start,
            scheduled_end: slot.end,
            is_auto_scheduled,
            conflicts_with: None,
        }
    }

    /// The occupied `[start, end)` interval.
    #[inline]
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.scheduled_start, self.scheduled_end)
    }

    /// ID of the underlying activity.
    #[inline]
    pub fn id(&self) -> &str {
        &self.activity.id
    }
}

/// Per-activity placement outcome.
///
/// Makes the engine's silent-drop policy explicit: an activity either
/// gets a slot or comes back untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    /// The activity received a slot.
    Placed(ScheduledActivity),
    /// No free slot existed for the activity.
    Unplaced(Activity),
}

impl Placement {
    /// Whether this outcome carries a slot.
    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed(_))
    }
}

/// Classification of detected scheduling problems.
///
/// Only `Overlap` is produced today; the other kinds are part of the
/// external contract and kept for callers that match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// Two entries occupy intersecting time slots.
    Overlap,
    /// Gap between entries shorter than the configured minimum break.
    InsufficientBreak,
    /// Activity energy demand mismatched with its time of day.
    EnergyMismatch,
}

/// A detected scheduling problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    /// Problem classification.
    #[serde(rename = "type")]
    pub kind: ConflictKind,
    /// IDs of the activities involved.
    pub activities: Vec<String>,
    /// Human-readable description.
    pub description: String,
}

impl Conflict {
    /// Creates an overlap conflict between two placed entries.
    pub fn overlap(a: &ScheduledActivity, b: &ScheduledActivity) -> Self {
        Self {
            kind: ConflictKind::Overlap,
            activities: vec![a.activity.id.clone(), b.activity.id.clone()],
            description: format!(
                "\"{}\" overlaps with \"{}\"",
                a.activity.title, b.activity.title
            ),
        }
    }
}

/// A generated schedule for one day.
///
/// `entries` keeps placement order (fixed and high-priority activities
/// first), not chronological order — use [`DaySchedule::chronological`]
/// for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    /// The day this schedule was generated for (labelling only).
    pub date: NaiveDate,
    /// Placed activities, in placement order.
    pub entries: Vec<ScheduledActivity>,
    /// Problems detected among the placed entries.
    pub conflicts: Vec<Conflict>,
    /// Activities no free slot was found for.
    pub unplaced: Vec<Activity>,
}

impl DaySchedule {
    /// Creates an empty schedule for a day.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
            conflicts: Vec::new(),
            unplaced: Vec::new(),
        }
    }

    /// Finds the entry for a given activity ID.
    pub fn entry_for(&self, activity_id: &str) -> Option<&ScheduledActivity> {
        self.entries.iter().find(|e| e.activity.id == activity_id)
    }

    /// Whether no conflicts were detected.
    pub fn is_conflict_free(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Number of placed entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Entries sorted by start time — the presentation ordering.
    pub fn chronological(&self) -> Vec<&ScheduledActivity> {
        let mut sorted: Vec<&ScheduledActivity> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.scheduled_start);
        sorted
    }

    /// Latest end time across all entries.
    pub fn latest_end(&self) -> Option<TimeOfDay> {
        self.entries.iter().map(|e| e.scheduled_end).max()
    }
}
