#[cfg(test)]
mod tests {
    use coursework::libs::index::TaskIndex;
    use coursework::libs::task::{Priority, Task};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn ids(index: &TaskIndex) -> Vec<u32> {
        index.iter().map(|task| task.id).collect()
    }

    fn named(name: &str) -> Task {
        Task::new(name, "", "Algorithms", 60, Priority::Medium)
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut index = TaskIndex::new();
        for name in ["a", "b", "c", "d"] {
            assert!(index.insert(named(name)));
        }
        assert_eq!(ids(&index), vec![1, 2, 3, 4]);

        let removed = index.remove(2).expect("task 2 exists");
        assert_eq!(removed.name.as_deref(), Some("b"));
        assert_eq!(ids(&index), vec![1, 3, 4]);
        assert_eq!(index.next_id(), 5);

        index.insert(named("e"));
        assert_eq!(ids(&index), vec![1, 3, 4, 5]);
        assert_eq!(index.find(5).and_then(|task| task.name.as_deref()), Some("e"));
    }

    #[test]
    fn test_removing_highest_id_keeps_counter() {
        let mut index: TaskIndex = ["a", "b", "c"].into_iter().map(named).collect();
        assert_eq!(index.next_id(), 4);
        index.remove(3);
        assert_eq!(index.next_id(), 4);
    }

    #[test]
    fn test_in_order_traverse_visits_ascending() {
        let index: TaskIndex = [9, 2, 7, 4, 1].into_iter().map(|id| Task::default().with_id(id)).collect();
        let mut visited = Vec::new();
        index.in_order_traverse(|task| visited.push(task.id));
        assert_eq!(visited, vec![1, 2, 4, 7, 9]);
    }

    #[test]
    fn test_sequential_inserts_stay_shallow() {
        let index: TaskIndex = (0..1024).map(|_| Task::default()).collect();
        assert_eq!(index.len(), 1024);
        assert!(index.is_balanced());
        assert!(index.height() <= 11);
    }

    #[test]
    fn test_missing_ids() {
        let mut index = TaskIndex::new();
        assert!(index.find(1).is_none());
        assert!(index.remove(1).is_none());

        index.insert(named("a"));
        assert!(index.find(2).is_none());
        assert!(index.remove(2).is_none());
        assert_eq!(index.len(), 1);
    }

    fn max_height(len: usize) -> i32 {
        (1.45 * ((len + 2) as f64).log2()).floor() as i32
    }

    proptest! {
        #[test]
        fn prop_insert_keeps_order_and_balance(inserted in prop::collection::vec(1u32..500, 0..200)) {
            let mut index = TaskIndex::new();
            let mut model = BTreeSet::new();

            for id in &inserted {
                let fresh = model.insert(*id);
                prop_assert_eq!(index.insert(Task::default().with_id(*id)), fresh);
                prop_assert!(index.is_balanced());
            }

            prop_assert_eq!(ids(&index), model.iter().copied().collect::<Vec<_>>());
            prop_assert_eq!(index.len(), model.len());
            prop_assert!(index.height() <= max_height(model.len()));
        }

        #[test]
        fn prop_remove_matches_model(
            inserted in prop::collection::vec(1u32..300, 1..150),
            removed in prop::collection::vec(1u32..300, 0..150),
        ) {
            let mut index: TaskIndex = inserted.iter().map(|id| Task::default().with_id(*id)).collect();
            let mut model: BTreeSet<u32> = inserted.iter().copied().collect();
            let next_id = index.next_id();

            for id in &removed {
                let expected = model.remove(id);
                prop_assert_eq!(index.remove(*id).map(|task| task.id), expected.then_some(*id));
                prop_assert!(index.is_balanced());
                prop_assert!(!index.contains(*id));
            }

            prop_assert_eq!(ids(&index), model.iter().copied().collect::<Vec<_>>());
            prop_assert_eq!(index.len(), model.len());
            prop_assert_eq!(index.next_id(), next_id);
        }

        #[test]
        fn prop_duplicate_insert_keeps_original(id in 1u32..100, minutes in 1u32..1000) {
            let mut index = TaskIndex::new();
            let mut original = Task::default().with_id(id);
            original.total_minutes = minutes;
            index.insert(original);

            let mut duplicate = Task::default().with_id(id);
            duplicate.total_minutes = minutes + 1;
            prop_assert!(!index.insert(duplicate));
            prop_assert_eq!(index.find(id).map(|task| task.total_minutes), Some(minutes));
            prop_assert_eq!(index.next_id(), id + 1);
        }
    }
}
