//! Contains shared logic for report generation.
//!
//! A report walks the index once and stages every task into one of four
//! worklists, then sorts each list by its own criterion. Completed tasks only
//! count when they were completed inside the reporting window.

use super::compare::SortBy;
use super::index::TaskIndex;
use super::task::Task;
use super::worklist::Worklist;
use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// Default reporting window in days.
pub const DEFAULT_PERIOD_DAYS: i64 = 7;

/// Longest report window accepted from the configuration (about a century).
pub const MAX_PERIOD_DAYS: i64 = 36_500;

/// Where a task stands at a given moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Completed,
    Expired,
    YetToBegin,
    Ongoing,
}

impl TaskStatus {
    pub fn of(task: &Task, now: DateTime<Utc>) -> Self {
        if task.is_completed() {
            TaskStatus::Completed
        } else if task.has_expired_before(now) {
            TaskStatus::Expired
        } else if task.is_yet_to_begin() {
            TaskStatus::YetToBegin
        } else {
            TaskStatus::Ongoing
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TaskStatus::Completed => "completed",
            TaskStatus::Expired => "expired",
            TaskStatus::YetToBegin => "yet to begin",
            TaskStatus::Ongoing => "ongoing",
        };
        f.write_str(text)
    }
}

/// Categorized tasks borrowed from a [`TaskIndex`].
pub struct Report<'a> {
    pub period_start: DateTime<Utc>,
    pub now: DateTime<Utc>,
    pub completed: Worklist<&'a Task>,
    pub yet_to_begin: Worklist<&'a Task>,
    pub ongoing: Worklist<&'a Task>,
    pub expired: Worklist<&'a Task>,
}

impl<'a> Report<'a> {
    fn empty(period_start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Report {
            period_start,
            now,
            completed: Worklist::new(),
            yet_to_begin: Worklist::new(),
            ongoing: Worklist::new(),
            expired: Worklist::new(),
        }
    }

    fn stage(&mut self, task: &'a Task) {
        match TaskStatus::of(task, self.now) {
            TaskStatus::Completed => {
                if task.was_completed_after(self.period_start) {
                    self.completed.push_front(task);
                }
            }
            TaskStatus::Expired => self.expired.push_front(task),
            TaskStatus::YetToBegin => self.yet_to_begin.push_front(task),
            TaskStatus::Ongoing => self.ongoing.push_front(task),
        }
    }

    fn sort(&mut self) {
        self.completed.sort(SortBy::CompletedAt);
        self.yet_to_begin.sort(SortBy::InsertedAt);
        self.ongoing.sort(SortBy::Completion);
        self.expired.sort(SortBy::ExpiresAt);
    }

    /// Number of tasks that made it into any section.
    pub fn len(&self) -> usize {
        self.completed.len() + self.yet_to_begin.len() + self.ongoing.len() + self.expired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits the index into the four report sections and sorts each one.
///
/// - completed: completed after `period_start`, by completion date
/// - yet to begin: no time used yet, by insertion date
/// - ongoing: some time used, by completion percentage
/// - expired: not completed and past the expiry date at `now`, by expiry date
pub fn categorize_and_sort(index: &TaskIndex, period_start: DateTime<Utc>, now: DateTime<Utc>) -> Report<'_> {
    let mut report = Report::empty(period_start, now);
    for task in index {
        report.stage(task);
    }
    report.sort();
    report
}

/// Start of the default window: `days` days before `now`.
///
/// A window reaching past the representable range starts at the earliest
/// representable instant.
pub fn default_period_start(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    Duration::try_days(days)
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Picks the window start, ignoring a requested start that is not in the past.
pub fn resolve_period_start(requested: Option<DateTime<Utc>>, now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    match requested {
        Some(start) if start < now => start,
        _ => default_period_start(now, days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_status_precedence() {
        let now = at(10);
        let mut task = Task {
            used_minutes: 5,
            expires_at: Some(at(9)),
            completed_at: Some(at(8)),
            ..Task::default()
        };
        assert_eq!(TaskStatus::of(&task, now), TaskStatus::Completed);

        task.completed_at = None;
        assert_eq!(TaskStatus::of(&task, now), TaskStatus::Expired);

        task.expires_at = Some(at(11));
        assert_eq!(TaskStatus::of(&task, now), TaskStatus::Ongoing);

        task.used_minutes = 0;
        assert_eq!(TaskStatus::of(&task, now), TaskStatus::YetToBegin);
    }

    #[test]
    fn test_huge_window_does_not_overflow() {
        let now = at(10);
        assert_eq!(default_period_start(now, i64::MAX), DateTime::<Utc>::MIN_UTC);
        assert_eq!(resolve_period_start(None, now, i64::MAX / 86_400), DateTime::<Utc>::MIN_UTC);
        assert_eq!(default_period_start(now, 3), at(7));
    }

    #[test]
    fn test_resolve_period_start() {
        let now = at(10);
        assert_eq!(resolve_period_start(None, now, 7), at(3));
        assert_eq!(resolve_period_start(Some(at(1)), now, 7), at(1));
        assert_eq!(resolve_period_start(Some(at(12)), now, 7), at(3));
        assert_eq!(resolve_period_start(Some(now), now, 7), at(3));
    }

    #[test]
    fn test_completed_on_period_start_is_excluded() {
        let mut index = TaskIndex::new();
        index.insert(Task {
            completed_at: Some(at(3)),
            ..Task::default()
        });
        let report = categorize_and_sort(&index, at(3), at(10));
        assert!(report.is_empty());
    }
}
