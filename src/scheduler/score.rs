//! Slot scoring heuristic.
//!
//! Scores a candidate start time for an activity against the entries
//! already placed. The rules are independent and additive, with no
//! normalization:
//!
//! | rule | score |
//! |------|-------|
//! | high energy, start in 08:00–11:00 | +30 |
//! | medium energy, start in 12:00–16:00 | +20 |
//! | start after 21:00 | −20 |
//! | same-type entry ends within 30 min of start | +15 |

use crate::models::{Activity, EnergyLevel, ScheduledActivity, TimeOfDay};

/// Bonus for high-energy activities starting in the morning window.
const MORNING_BONUS: i32 = 30;
/// Bonus for medium-energy activities starting in the afternoon window.
const AFTERNOON_BONUS: i32 = 20;
/// Penalty for starts after [`LATE_NIGHT_MIN`].
const LATE_NIGHT_PENALTY: i32 = 20;
/// Bonus for clustering next to a same-type entry.
const CLUSTER_BONUS: i32 = 15;

/// Morning window, minutes of day (08:00–11:00 inclusive).
const MORNING: (i32, i32) = (480, 660);
/// Afternoon window, minutes of day (12:00–16:00 inclusive).
const AFTERNOON: (i32, i32) = (720, 960);
/// Starts strictly after this minute (21:00) are penalized.
const LATE_NIGHT_MIN: i32 = 1260;
/// Maximum distance (minutes) for the clustering bonus.
const CLUSTER_WINDOW_MIN: i32 = 30;

/// Scores a candidate start for `activity` given the entries placed so far.
///
/// Higher is better. An activity can match several rules at once.
pub fn slot_score(activity: &Activity, start: TimeOfDay, placed: &[ScheduledActivity]) -> i32 {
    let mut score = 0;
    let start_min = start.minutes();

    if activity.energy_level == Some(EnergyLevel::High)
        && (MORNING.0..=MORNING.1).contains(&start_min)
    {
        score += MORNING_BONUS;
    }

    if activity.energy_level == Some(EnergyLevel::Medium)
        && (AFTERNOON.0..=AFTERNOON.1).contains(&start_min)
    {
        score += AFTERNOON_BONUS;
    }

    if start_min > LATE_NIGHT_MIN {
        score -= LATE_NIGHT_PENALTY;
    }

    // Clustering compares the candidate start against existing END
    // times only; an entry that merely starts nearby does not count.
    let near_same_type = placed.iter().any(|entry| {
        (entry.scheduled_end.minutes() - start_min).abs() <= CLUSTER_WINDOW_MIN
            && entry.activity.activity_type == activity.activity_type
    });
    if near_same_type {
        score += CLUSTER_BONUS;
    }

    score
}
