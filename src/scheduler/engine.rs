//! Greedy single-day scheduling engine.
//!
//! # Algorithm
//!
//! 1. Sort activities: fixed first, then priority descending (stable).
//! 2. Place each activity in order against the accumulating schedule:
//!    the preferred time when available, otherwise the best-scoring
//!    free slot in the working window.
//! 3. Run a pairwise overlap pass over the final entries.
//!
//! Greedy with no backtracking: once an activity holds a slot, later
//! activities route around it. An activity with no viable slot ends up
//! in the `unplaced` partition rather than producing an error.
//!
//! # Complexity
//! O(n × s × n) for placement (n activities, s candidate slots) plus
//! O(n²) for conflict detection — negligible at daily activity counts.

use chrono::NaiveDate;
use tracing::debug;

use super::score::slot_score;
use crate::models::{
    Activity, Conflict, DaySchedule, Placement, ScheduledActivity, TimeOfDay, TimeSlot,
    UserPreferences,
};

/// Granularity of the candidate slot search (minutes).
const SLOT_STEP_MIN: i32 = 15;

/// Input container for one generation run.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Activities to place.
    pub activities: Vec<Activity>,
    /// User preferences (only `working_hours` affects placement).
    pub preferences: UserPreferences,
    /// The day being planned (labelling only).
    pub date: NaiveDate,
}

impl ScheduleRequest {
    /// Creates a new request.
    pub fn new(activities: Vec<Activity>, preferences: UserPreferences, date: NaiveDate) -> Self {
        Self {
            activities,
            preferences,
            date,
        }
    }
}

/// Greedy day scheduler.
///
/// A stateless transform from `(activities, preferences, date)` to a
/// [`DaySchedule`]. Deterministic: identical inputs produce identical
/// output — there is no randomness and no wall-clock dependency.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use dayplan::models::{Activity, ActivityType, TimeOfDay, UserPreferences};
/// use dayplan::scheduler::ScheduleEngine;
///
/// let activities = vec![
///     Activity::new("standup", "Standup", ActivityType::Meeting, 15)
///         .with_preferred_start(TimeOfDay::from_hm(9, 0))
///         .fixed(),
///     Activity::new("gym", "Gym", ActivityType::Hobby, 45),
/// ];
///
/// let engine = ScheduleEngine::new();
/// let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// let schedule = engine.generate(&activities, &UserPreferences::default(), date);
/// assert_eq!(schedule.entry_count(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleEngine;

impl ScheduleEngine {
    /// Creates a new engine.
    pub fn new() -> Self {
        Self
    }

    /// Generates a schedule for one day.
    ///
    /// Entries come back in placement order, not chronological order.
    /// Activities that fit nowhere are returned in
    /// [`DaySchedule::unplaced`] — placement failure is not an error.
    pub fn generate(
        &self,
        activities: &[Activity],
        preferences: &UserPreferences,
        date: NaiveDate,
    ) -> DaySchedule {
        debug!(
            target: "dayplan::engine",
            %date,
            count = activities.len(),
            "generating day schedule"
        );

        // Fixed activities claim slots before anything else, then
        // priority descending. The sort is stable, so equal activities
        // keep their input order.
        let mut ordered = activities.to_vec();
        ordered.sort_by(|a, b| {
            b.is_fixed
                .cmp(&a.is_fixed)
                .then(b.priority.cmp(&a.priority))
        });

        let mut schedule = DaySchedule::new(date);
        for activity in ordered {
            match self.place_activity(activity, &schedule.entries, preferences) {
                Placement::Placed(entry) => {
                    debug!(
                        target: "dayplan::engine",
                        id = %entry.activity.id,
                        start = %entry.scheduled_start,
                        auto = entry.is_auto_scheduled,
                        "placed"
                    );
                    schedule.entries.push(entry);
                }
                Placement::Unplaced(activity) => {
                    debug!(target: "dayplan::engine", id = %activity.id, "no free slot");
                    schedule.unplaced.push(activity);
                }
            }
        }

        schedule.conflicts = detect_conflicts(&schedule.entries);
        schedule
    }

    /// Generates from a request.
    pub fn generate_request(&self, request: &ScheduleRequest) -> DaySchedule {
        self.generate(&request.activities, &request.preferences, request.date)
    }

    /// Places one activity against the entries placed so far.
    fn place_activity(
        &self,
        activity: Activity,
        placed: &[ScheduledActivity],
        preferences: &UserPreferences,
    ) -> Placement {
        if let Some(preferred) = activity.preferred_start {
            let slot = TimeSlot::from_start(preferred, activity.duration_min);
            // A free preferred time wins regardless of score. Fixed
            // commitments keep their requested time even when it is
            // taken; the conflict pass reports the collision.
            if activity.is_fixed || !overlaps_any(slot, placed) {
                let auto = !activity.is_fixed;
                return Placement::Placed(ScheduledActivity::new(activity, slot, auto));
            }
        }

        match self.find_best_slot(&activity, placed, preferences) {
            Some(slot) => Placement::Placed(ScheduledActivity::new(activity, slot, true)),
            None => Placement::Unplaced(activity),
        }
    }

    /// Scans every 15-minute boundary in the working window for the
    /// highest-scoring free slot.
    ///
    /// Candidates run from `working_hours.start` to
    /// `working_hours.end - duration` inclusive, in ascending order;
    /// the comparison is strict, so ties go to the earliest candidate.
    /// Returns `None` when every candidate overlaps an existing entry
    /// (or the window is too small to hold the activity at all).
    fn find_best_slot(
        &self,
        activity: &Activity,
        placed: &[ScheduledActivity],
        preferences: &UserPreferences,
    ) -> Option<TimeSlot> {
        let window = preferences.working_hours;
        let latest_start = window.end.minutes() - activity.duration_min;

        let mut best_slot: Option<TimeSlot> = None;
        let mut best_score = i32::MIN;

        let mut start_min = window.start.minutes();
        while start_min <= latest_start {
            let slot =
                TimeSlot::from_start(TimeOfDay::from_minutes(start_min), activity.duration_min);
            if !overlaps_any(slot, placed) {
                let score = slot_score(activity, slot.start, placed);
                if score > best_score {
                    best_score = score;
                    best_slot = Some(slot);
                }
            }
            start_min += SLOT_STEP_MIN;
        }

        best_slot
    }
}

/// Whether a slot intersects any placed entry.
fn overlaps_any(slot: TimeSlot, placed: &[ScheduledActivity]) -> bool {
    placed.iter().any(|entry| entry.slot().overlaps(&slot))
}

/// Pairwise overlap pass over the final entries.
///
/// Search-placed entries cannot overlap by construction; what this
/// surfaces in practice is fixed activities whose preferred times
/// collide. The check still runs over every pair as a safety net.
fn detect_conflicts(entries: &[ScheduledActivity]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            if entries[i].slot().overlaps(&entries[j].slot()) {
                conflicts.push(Conflict::overlap(&entries[i], &entries[j]));
            }
        }
    }

    conflicts
}
