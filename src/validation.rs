//! Input validation for day-planning requests.
//!
//! Checks structural integrity of activities and preferences before
//! scheduling. The engine itself never validates — it degrades
//! gracefully on malformed input — so these checks are for callers
//! that want to reject bad data up front. Detects:
//! - Duplicate activity IDs
//! - Empty titles
//! - Non-positive durations
//! - Priorities outside 1–5
//! - Empty working windows

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Activity, UserPreferences};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two activities share the same ID.
    DuplicateId,
    /// An activity has an empty title.
    EmptyTitle,
    /// An activity has a zero or negative duration.
    NonPositiveDuration,
    /// An activity priority falls outside 1–5.
    PriorityOutOfRange,
    /// Working hours start at or after they end.
    EmptyWorkingWindow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates activities and preferences for a scheduling run.
///
/// Checks:
/// 1. No duplicate activity IDs
/// 2. All titles non-empty
/// 3. All durations positive
/// 4. All priorities within 1–5
/// 5. Working hours span a non-empty window
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_input(activities: &[Activity], preferences: &UserPreferences) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for activity in activities {
        if !ids.insert(activity.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate activity ID: {}", activity.id),
            ));
        }

        if activity.title.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTitle,
                format!("Activity '{}' has an empty title", activity.id),
            ));
        }

        if activity.duration_min <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!(
                    "Activity '{}' has non-positive duration {}",
                    activity.id, activity.duration_min
                ),
            ));
        }

        if !(1..=5).contains(&activity.priority) {
            errors.push(ValidationError::new(
                ValidationErrorKind::PriorityOutOfRange,
                format!(
                    "Activity '{}' has priority {} outside 1-5",
                    activity.id, activity.priority
                ),
            ));
        }
    }

    let window = &preferences.working_hours;
    if window.start >= window.end {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkingWindow,
            format!(
                "Working hours {}-{} span no usable time",
                window.start, window.end
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityType;

    fn sample_activities() -> Vec<Activity> {
        vec![
            Activity::new("a1", "Deep work", ActivityType::Work, 90).with_priority(5),
            Activity::new("a2", "Lunch", ActivityType::Meal, 45).with_priority(3),
        ]
    }

    #[test]
    fn test_valid_input() {
        let prefs = UserPreferences::default();
        assert!(validate_input(&sample_activities(), &prefs).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let mut activities = sample_activities();
        activities.push(Activity::new("a1", "Dup", ActivityType::Custom, 30));
        let errors = validate_input(&activities, &UserPreferences::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_empty_title() {
        let activities = vec![Activity::new("a1", "  ", ActivityType::Work, 30)];
        let errors = validate_input(&activities, &UserPreferences::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyTitle));
    }

    #[test]
    fn test_non_positive_duration() {
        let activities = vec![Activity::new("a1", "Nap", ActivityType::Relax, 0)];
        let errors = validate_input(&activities, &UserPreferences::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveDuration));
    }

    #[test]
    fn test_priority_out_of_range() {
        let activities =
            vec![Activity::new("a1", "Errand", ActivityType::Custom, 30).with_priority(9)];
        let errors = validate_input(&activities, &UserPreferences::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::PriorityOutOfRange));
    }

    #[test]
    fn test_empty_working_window() {
        use crate::models::TimeOfDay;

        let prefs = UserPreferences::default()
            .with_working_hours(TimeOfDay::from_hm(18, 0), TimeOfDay::from_hm(9, 0));
        let errors = validate_input(&sample_activities(), &prefs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyWorkingWindow));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let activities = vec![
            Activity::new("a1", "", ActivityType::Work, -10),
            Activity::new("a1", "Dup", ActivityType::Work, 30),
        ];
        let errors = validate_input(&activities, &UserPreferences::default()).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_error_display() {
        let e = ValidationError::new(
            ValidationErrorKind::DuplicateId,
            "Duplicate activity ID: a1",
        );
        assert_eq!(e.to_string(), "Duplicate activity ID: a1");
    }
}
