//! Orderings over tasks.
//!
//! One comparator per sortable field plus [`compare`], which dispatches on a
//! [`SortBy`] criterion. Worklists and listings pass the criterion explicitly.
//!
//! Absent values sort first: an unset name comes before any set name and an
//! unset timestamp before any set one.

use super::task::Task;
use std::cmp::Ordering;
use std::fmt;

/// Sorting criterion for task listings and report sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum SortBy {
    #[default]
    Id,
    Name,
    Description,
    Course,
    InsertedAt,
    ExpiresAt,
    CompletedAt,
    TotalMinutes,
    UsedMinutes,
    Priority,
    Completion,
    TimeToCompletion,
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SortBy::Id => "id",
            SortBy::Name => "name",
            SortBy::Description => "description",
            SortBy::Course => "course",
            SortBy::InsertedAt => "insertion date",
            SortBy::ExpiresAt => "expiry date",
            SortBy::CompletedAt => "completion date",
            SortBy::TotalMinutes => "total time",
            SortBy::UsedMinutes => "used time",
            SortBy::Priority => "priority",
            SortBy::Completion => "completion percentage",
            SortBy::TimeToCompletion => "time to completion",
        };
        f.write_str(text)
    }
}

pub fn compare_with_id(task: &Task, id: u32) -> Ordering {
    task.id.cmp(&id)
}

pub fn by_id(a: &Task, b: &Task) -> Ordering {
    compare_with_id(a, b.id)
}

pub fn by_name(a: &Task, b: &Task) -> Ordering {
    a.name.cmp(&b.name)
}

pub fn by_description(a: &Task, b: &Task) -> Ordering {
    a.description.cmp(&b.description)
}

pub fn by_course(a: &Task, b: &Task) -> Ordering {
    a.course.cmp(&b.course)
}

pub fn by_inserted_at(a: &Task, b: &Task) -> Ordering {
    a.inserted_at.cmp(&b.inserted_at)
}

pub fn by_expires_at(a: &Task, b: &Task) -> Ordering {
    a.expires_at.cmp(&b.expires_at)
}

pub fn by_completed_at(a: &Task, b: &Task) -> Ordering {
    a.completed_at.cmp(&b.completed_at)
}

pub fn by_total_minutes(a: &Task, b: &Task) -> Ordering {
    a.total_minutes.cmp(&b.total_minutes)
}

pub fn by_used_minutes(a: &Task, b: &Task) -> Ordering {
    a.used_minutes.cmp(&b.used_minutes)
}

pub fn by_priority(a: &Task, b: &Task) -> Ordering {
    a.priority.code().cmp(&b.priority.code())
}

pub fn by_completion(a: &Task, b: &Task) -> Ordering {
    a.completion_percentage().cmp(&b.completion_percentage())
}

pub fn by_time_to_completion(a: &Task, b: &Task) -> Ordering {
    a.minutes_to_completion().cmp(&b.minutes_to_completion())
}

/// Compares two tasks by the given criterion.
pub fn compare(a: &Task, b: &Task, by: SortBy) -> Ordering {
    match by {
        SortBy::Id => by_id(a, b),
        SortBy::Name => by_name(a, b),
        SortBy::Description => by_description(a, b),
        SortBy::Course => by_course(a, b),
        SortBy::InsertedAt => by_inserted_at(a, b),
        SortBy::ExpiresAt => by_expires_at(a, b),
        SortBy::CompletedAt => by_completed_at(a, b),
        SortBy::TotalMinutes => by_total_minutes(a, b),
        SortBy::UsedMinutes => by_used_minutes(a, b),
        SortBy::Priority => by_priority(a, b),
        SortBy::Completion => by_completion(a, b),
        SortBy::TimeToCompletion => by_time_to_completion(a, b),
    }
}

/// Like [`compare`], for slots that may be empty.
///
/// Two empty slots are equal; a present task is greater than an empty slot.
pub fn compare_optional(a: Option<&Task>, b: Option<&Task>, by: SortBy) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare(a, b, by),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::Priority;
    use chrono::{TimeZone, Utc};

    fn task(id: u32) -> Task {
        Task {
            id,
            ..Task::default()
        }
    }

    #[test]
    fn test_unset_strings_sort_first() {
        let mut a = task(1);
        let mut b = task(2);
        assert_eq!(by_name(&a, &b), Ordering::Equal);

        b.name = Some("Algebra".to_string());
        assert_eq!(by_name(&a, &b), Ordering::Less);
        assert_eq!(by_name(&b, &a), Ordering::Greater);

        a.name = Some("Biology".to_string());
        assert_eq!(by_name(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_timestamps_compare_both_operands() {
        let mut a = task(1);
        let mut b = task(2);
        a.expires_at = Some(Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap());
        b.expires_at = Some(Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap());
        assert_eq!(compare(&a, &b, SortBy::ExpiresAt), Ordering::Greater);

        b.expires_at = None;
        assert_eq!(compare(&a, &b, SortBy::ExpiresAt), Ordering::Greater);
    }

    #[test]
    fn test_priority_orders_high_first() {
        let mut a = task(1);
        let mut b = task(2);
        a.priority = Priority::High;
        b.priority = Priority::Low;
        assert_eq!(compare(&a, &b, SortBy::Priority), Ordering::Less);
    }

    #[test]
    fn test_derived_criteria() {
        let mut a = task(1);
        let mut b = task(2);
        a.total_minutes = 100;
        a.used_minutes = 80;
        b.total_minutes = 100;
        b.used_minutes = 20;
        assert_eq!(compare(&a, &b, SortBy::Completion), Ordering::Greater);
        assert_eq!(compare(&a, &b, SortBy::TimeToCompletion), Ordering::Less);
    }

    #[test]
    fn test_compare_optional() {
        let a = task(1);
        assert_eq!(compare_optional(None, None, SortBy::Id), Ordering::Equal);
        assert_eq!(compare_optional(Some(&a), None, SortBy::Id), Ordering::Greater);
        assert_eq!(compare_optional(None, Some(&a), SortBy::Id), Ordering::Less);
    }
}
