//! User preference model.
//!
//! The full configuration surface the surrounding application exposes.
//! Only `working_hours` currently drives placement (it bounds the slot
//! search); the remaining fields are carried so a future engine can
//! enforce them without changing the external contract.

use serde::{Deserialize, Serialize};

use super::TimeOfDay;

/// Daily window bounding the heuristic slot search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHours {
    /// Earliest candidate start.
    pub start: TimeOfDay,
    /// Latest candidate end.
    pub end: TimeOfDay,
}

impl WorkingHours {
    /// Creates a working window.
    pub const fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }
}

/// Sleep times (pass-through, not consulted during placement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepSchedule {
    pub bedtime: TimeOfDay,
    pub wakeup: TimeOfDay,
}

/// Meal times (pass-through, not consulted during placement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealTimes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<TimeOfDay>,
}

/// User scheduling preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Bounds of the slot search.
    pub working_hours: WorkingHours,
    /// Sleep times (pass-through).
    pub sleep_schedule: SleepSchedule,
    /// Meal times (pass-through).
    pub meal_times: MealTimes,
    /// Minimum gap between activities in minutes (pass-through).
    #[serde(rename = "minimumBreakBetweenActivities")]
    pub minimum_break_min: i32,
    /// Buffer around activities in minutes (pass-through).
    #[serde(rename = "bufferTime")]
    pub buffer_min: i32,
    /// Desired daily relax time in minutes (pass-through).
    #[serde(rename = "preferredRelaxTime")]
    pub preferred_relax_min: i32,
}

impl UserPreferences {
    /// Sets the working window.
    pub fn with_working_hours(mut self, start: TimeOfDay, end: TimeOfDay) -> Self {
        self.working_hours = WorkingHours::new(start, end);
        self
    }

    /// Sets the sleep schedule.
    pub fn with_sleep_schedule(mut self, bedtime: TimeOfDay, wakeup: TimeOfDay) -> Self {
        self.sleep_schedule = SleepSchedule { bedtime, wakeup };
        self
    }

    /// Sets the meal times.
    pub fn with_meal_times(mut self, meal_times: MealTimes) -> Self {
        self.meal_times = meal_times;
        self
    }

    /// Sets the minimum break between activities.
    pub fn with_minimum_break(mut self, minutes: i32) -> Self {
        self.minimum_break_min = minutes;
        self
    }

    /// Sets the buffer time.
    pub fn with_buffer(mut self, minutes: i32) -> Self {
        self.buffer_min = minutes;
        self
    }
}

impl Default for UserPreferences {
    /// The surrounding application's initial preferences.
    fn default() -> Self {
        Self {
            working_hours: WorkingHours::new(TimeOfDay::from_hm(8, 0), TimeOfDay::from_hm(22, 0)),
            sleep_schedule: SleepSchedule {
                bedtime: TimeOfDay::from_hm(23, 0),
                wakeup: TimeOfDay::from_hm(7, 0),
            },
            meal_times: MealTimes {
                breakfast: Some(TimeOfDay::from_hm(8, 0)),
                lunch: Some(TimeOfDay::from_hm(12, 0)),
                dinner: Some(TimeOfDay::from_hm(18, 0)),
            },
            minimum_break_min: 15,
            buffer_min: 10,
            preferred_relax_min: 120,
        }
    }
}
