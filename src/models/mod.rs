//! Day-planning domain models.
//!
//! Core data types for describing a day's activities, the user's
//! preferences, and a generated schedule. All model types serialize in
//! the camelCase `"HH:MM"` wire format of the surrounding application.

mod activity;
mod preferences;
mod schedule;
mod time;

pub use activity::{Activity, ActivityType, EnergyLevel, Frequency, RecurrencePattern};
pub use preferences::{MealTimes, SleepSchedule, UserPreferences, WorkingHours};
pub use schedule::{Conflict, ConflictKind, DaySchedule, Placement, ScheduledActivity};
pub use time::{ParseTimeError, TimeOfDay, TimeSlot};
