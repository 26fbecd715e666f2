#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use coursework::libs::compare::{compare, SortBy};
    use coursework::libs::index::TaskIndex;
    use coursework::libs::report::{categorize_and_sort, default_period_start, TaskStatus};
    use coursework::libs::task::{Priority, Task};
    use coursework::libs::worklist::Worklist;
    use proptest::prelude::*;
    use std::cmp::Ordering;
    use std::collections::BTreeSet;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
    }

    fn days_ago(days: i64) -> Option<DateTime<Utc>> {
        Some(now() - Duration::days(days))
    }

    fn ids(list: &Worklist<&Task>) -> Vec<u32> {
        list.iter().map(|task| task.id).collect()
    }

    fn assert_sorted(list: &Worklist<&Task>, by: SortBy) {
        let tasks: Vec<&Task> = list.iter().copied().collect();
        for pair in tasks.windows(2) {
            assert_ne!(compare(pair[0], pair[1], by), Ordering::Greater);
        }
    }

    fn sample_index() -> TaskIndex {
        let tasks = vec![
            // completed inside the window
            Task {
                id: 1,
                completed_at: days_ago(1),
                used_minutes: 60,
                total_minutes: 60,
                ..Task::default()
            },
            // completed before the window, left out
            Task {
                id: 2,
                completed_at: days_ago(30),
                ..Task::default()
            },
            // expired, even though time was spent
            Task {
                id: 3,
                expires_at: days_ago(2),
                used_minutes: 10,
                total_minutes: 100,
                ..Task::default()
            },
            // yet to begin
            Task {
                id: 4,
                inserted_at: days_ago(3),
                expires_at: Some(now() + Duration::days(3)),
                total_minutes: 90,
                ..Task::default()
            },
            // ongoing, 75%
            Task {
                id: 5,
                used_minutes: 75,
                total_minutes: 100,
                ..Task::default()
            },
            // ongoing, 20%
            Task {
                id: 6,
                used_minutes: 20,
                total_minutes: 100,
                ..Task::default()
            },
            // completed inside the window, earlier than task 1
            Task {
                id: 7,
                completed_at: days_ago(5),
                ..Task::default()
            },
            // yet to begin, inserted earlier than task 4
            Task {
                id: 8,
                inserted_at: days_ago(6),
                priority: Priority::High,
                ..Task::default()
            },
        ];
        tasks.into_iter().collect()
    }

    #[test]
    fn test_sections() {
        let index = sample_index();
        let report = categorize_and_sort(&index, default_period_start(now(), 7), now());

        assert_eq!(ids(&report.completed), vec![7, 1]);
        assert_eq!(ids(&report.yet_to_begin), vec![8, 4]);
        assert_eq!(ids(&report.ongoing), vec![6, 5]);
        assert_eq!(ids(&report.expired), vec![3]);
        assert_eq!(report.len(), 7);
    }

    #[test]
    fn test_wider_window_includes_older_completions() {
        let index = sample_index();
        let report = categorize_and_sort(&index, default_period_start(now(), 60), now());
        assert_eq!(ids(&report.completed), vec![2, 7, 1]);
    }

    #[test]
    fn test_empty_index() {
        let index = TaskIndex::new();
        let report = categorize_and_sort(&index, default_period_start(now(), 7), now());
        assert!(report.is_empty());
        assert!(report.completed.is_empty());
        assert!(report.expired.is_empty());
    }

    fn offset() -> impl Strategy<Value = Option<DateTime<Utc>>> {
        prop::option::of((-20i64..20).prop_map(|days| now() + Duration::days(days)))
    }

    proptest! {
        #[test]
        fn prop_sections_partition_the_index(
            specs in prop::collection::vec((offset(), offset(), offset(), 0u32..3, 0u32..100), 0..60)
        ) {
            let index: TaskIndex = specs
                .into_iter()
                .map(|(inserted_at, expires_at, completed_at, used_minutes, total_minutes)| Task {
                    inserted_at,
                    expires_at,
                    completed_at,
                    used_minutes,
                    total_minutes,
                    ..Task::default()
                })
                .collect();
            let period_start = default_period_start(now(), 7);
            let report = categorize_and_sort(&index, period_start, now());

            let sections = [
                (&report.completed, TaskStatus::Completed),
                (&report.yet_to_begin, TaskStatus::YetToBegin),
                (&report.ongoing, TaskStatus::Ongoing),
                (&report.expired, TaskStatus::Expired),
            ];
            let mut seen = BTreeSet::new();
            for (list, status) in sections {
                for task in list.iter() {
                    prop_assert_eq!(TaskStatus::of(task, now()), status);
                    prop_assert!(seen.insert(task.id), "task {} in two sections", task.id);
                }
            }

            for task in &index {
                let left_out = TaskStatus::of(task, now()) == TaskStatus::Completed && !task.was_completed_after(period_start);
                prop_assert_eq!(seen.contains(&task.id), !left_out);
            }

            assert_sorted(&report.completed, SortBy::CompletedAt);
            assert_sorted(&report.yet_to_begin, SortBy::InsertedAt);
            assert_sorted(&report.ongoing, SortBy::Completion);
            assert_sorted(&report.expired, SortBy::ExpiresAt);
        }
    }
}
