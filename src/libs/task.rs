//! Study task record.
//!
//! A [`Task`] is the unit stored in the [`TaskIndex`](crate::libs::index::TaskIndex).
//! Its fields are plain values; optional text and timestamps use `None` for
//! "not set", which is written as an empty line or `0` in the task file.

use chrono::{DateTime, Utc};
use std::fmt;

/// Id value meaning "assign the next free id on insert".
pub const UNASSIGNED_ID: u32 = 0;

/// Upper bound accepted for planned minutes (roughly one year).
pub const MAX_TOTAL_MINUTES: u32 = 525_600;

/// Task priority. The discriminants are the codes used by the task file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, clap::ValueEnum)]
pub enum Priority {
    High = 1,
    #[default]
    Medium = 2,
    Low = 3,
}

impl Priority {
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Unknown codes fall back to [`Priority::Medium`].
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Priority::High,
            3 => Priority::Low,
            _ => Priority::Medium,
        }
    }

    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Task {
    pub id: u32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub course: Option<String>,
    pub inserted_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub total_minutes: u32,
    pub used_minutes: u32,
    pub priority: Priority,
}

impl Task {
    /// Creates a task with an unassigned id, inserted now, with no time used yet.
    pub fn new(name: &str, description: &str, course: &str, total_minutes: u32, priority: Priority) -> Self {
        Task {
            id: UNASSIGNED_ID,
            name: non_empty(name),
            description: non_empty(description),
            course: non_empty(course),
            inserted_at: Some(Utc::now()),
            expires_at: None,
            completed_at: None,
            total_minutes,
            used_minutes: 0,
            priority,
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    pub fn is_yet_to_begin(&self) -> bool {
        self.used_minutes == 0
    }

    pub fn was_completed_after(&self, threshold: DateTime<Utc>) -> bool {
        matches!(self.completed_at, Some(completed_at) if completed_at > threshold)
    }

    pub fn has_expired_before(&self, threshold: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(expires_at) if expires_at < threshold)
    }

    /// `used * 100 / total`, or 0 when no total is planned. May exceed 100.
    pub fn completion_percentage(&self) -> u64 {
        if self.total_minutes == 0 {
            return 0;
        }
        u64::from(self.used_minutes) * 100 / u64::from(self.total_minutes)
    }

    /// Minutes left until the planned total; 0 once the plan is overrun.
    pub fn minutes_to_completion(&self) -> u32 {
        self.total_minutes.saturating_sub(self.used_minutes)
    }

    pub fn mark_completed(&mut self, at: DateTime<Utc>) {
        self.completed_at = Some(at);
    }
}

/// Planned minutes must be within `1..=MAX_TOTAL_MINUTES`.
pub fn is_valid_total_minutes(minutes: u32) -> bool {
    (1..=MAX_TOTAL_MINUTES).contains(&minutes)
}

/// Maps empty input to an absent field.
pub fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_completion_percentage() {
        let mut task = Task::new("Essay", "", "History", 200, Priority::Low);
        assert_eq!(task.completion_percentage(), 0);

        task.used_minutes = 50;
        assert_eq!(task.completion_percentage(), 25);

        task.used_minutes = 300;
        assert_eq!(task.completion_percentage(), 150);
    }

    #[test]
    fn test_completion_percentage_without_total() {
        let mut task = Task::new("Essay", "", "History", 0, Priority::Low);
        task.used_minutes = 40;
        assert_eq!(task.completion_percentage(), 0);
    }

    #[test]
    fn test_minutes_to_completion_saturates() {
        let mut task = Task::new("Lab", "", "", 60, Priority::High);
        task.used_minutes = 45;
        assert_eq!(task.minutes_to_completion(), 15);
        task.used_minutes = 90;
        assert_eq!(task.minutes_to_completion(), 0);
    }

    #[test]
    fn test_status_predicates() {
        let threshold = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let mut task = Task::new("Lab", "", "", 60, Priority::High);
        assert!(!task.is_completed());
        assert!(!task.was_completed_after(threshold));
        assert!(!task.has_expired_before(threshold));

        task.completed_at = Some(threshold);
        assert!(task.is_completed());
        assert!(!task.was_completed_after(threshold));

        task.expires_at = Some(threshold - chrono::Duration::minutes(1));
        assert!(task.has_expired_before(threshold));
    }

    #[test]
    fn test_priority_codes() {
        assert_eq!(Priority::from_code(1), Priority::High);
        assert_eq!(Priority::from_code(2), Priority::Medium);
        assert_eq!(Priority::from_code(3), Priority::Low);
        assert_eq!(Priority::from_code(9), Priority::Medium);
        assert_eq!(Priority::Low.code(), 3);
    }

    #[test]
    fn test_total_minutes_bounds() {
        assert!(!is_valid_total_minutes(0));
        assert!(is_valid_total_minutes(1));
        assert!(is_valid_total_minutes(MAX_TOTAL_MINUTES));
        assert!(!is_valid_total_minutes(MAX_TOTAL_MINUTES + 1));
    }

    #[test]
    fn test_new_maps_empty_text_to_none() {
        let task = Task::new("Read chapter", "", "Physics", 30, Priority::Medium);
        assert_eq!(task.id, UNASSIGNED_ID);
        assert_eq!(task.name.as_deref(), Some("Read chapter"));
        assert_eq!(task.description, None);
        assert!(task.inserted_at.is_some());
    }
}
