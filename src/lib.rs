//! Personal daily-activity scheduling.
//!
//! Given a list of user-defined activities (duration, priority, energy
//! level, optional preferred start time) and the user's preferences
//! (working hours, sleep and meal times, break rules), computes a
//! non-overlapping placement of activities across a single day and
//! reports residual conflicts.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Activity`, `UserPreferences`,
//!   `ScheduledActivity`, `DaySchedule`, `Conflict`, `TimeOfDay`
//! - **`scheduler`**: The greedy placement engine and slot scoring
//! - **`validation`**: Input integrity checks (duplicate IDs, empty
//!   titles, degenerate working windows)
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use dayplan::models::{Activity, ActivityType, EnergyLevel, TimeOfDay, UserPreferences};
//! use dayplan::scheduler::ScheduleEngine;
//!
//! let activities = vec![
//!     Activity::new("standup", "Standup", ActivityType::Meeting, 15)
//!         .with_preferred_start(TimeOfDay::from_hm(9, 30))
//!         .fixed(),
//!     Activity::new("deep-work", "Deep work", ActivityType::Work, 90)
//!         .with_priority(5)
//!         .with_energy(EnergyLevel::High),
//!     Activity::new("gym", "Gym", ActivityType::Hobby, 45),
//! ];
//!
//! let engine = ScheduleEngine::new();
//! let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
//! let schedule = engine.generate(&activities, &UserPreferences::default(), date);
//!
//! assert_eq!(schedule.entry_count(), 3);
//! assert!(schedule.is_conflict_free());
//! ```
//!
//! # Design notes
//!
//! The engine is greedy and deterministic: no backtracking, no
//! randomness, no clock. Activities that fit nowhere come back in the
//! `unplaced` partition instead of raising an error, and the returned
//! entries keep placement order — sort by start time at the
//! presentation layer if chronological display is needed.

pub mod models;
pub mod scheduler;
pub mod validation;
