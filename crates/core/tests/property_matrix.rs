use std::collections::BTreeSet;

use containers_core::{Bst, Queue, SortedList, Stack};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum QueueOp {
    Enqueue(i32),
    Dequeue,
}

fn queue_op() -> impl Strategy<Value = QueueOp> {
    prop_oneof![
        any::<i32>().prop_map(QueueOp::Enqueue),
        Just(QueueOp::Dequeue),
    ]
}

proptest! {
    #[test]
    fn queue_is_fifo(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut q = Queue::new();
        for (i, v) in values.iter().enumerate() {
            q.enqueue(*v);
            prop_assert_eq!(q.count(), i + 1);
        }
        let n = values.len();
        for (j, v) in values.iter().enumerate() {
            prop_assert_eq!(q.dequeue(), Some(*v));
            prop_assert_eq!(q.count(), n - j - 1);
        }
        prop_assert_eq!(q.dequeue(), None);
        prop_assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn queue_matches_vecdeque(ops in prop::collection::vec(queue_op(), 0..400)) {
        let mut q = Queue::new();
        let mut model = std::collections::VecDeque::new();
        for op in ops {
            match op {
                QueueOp::Enqueue(v) => {
                    q.enqueue(v);
                    model.push_back(v);
                }
                QueueOp::Dequeue => prop_assert_eq!(q.dequeue(), model.pop_front()),
            }
            prop_assert_eq!(q.front(), model.front());
            prop_assert_eq!(q.back(), model.back());
            prop_assert_eq!(q.is_empty(), model.is_empty());
        }
    }

    #[test]
    fn stack_is_lifo(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut s = Stack::new();
        for v in &values {
            s.push(*v);
            prop_assert_eq!(s.front(), Some(v));
        }
        for v in values.iter().rev() {
            prop_assert_eq!(s.pop(), Some(*v));
        }
        prop_assert_eq!(s.pop(), None);
        prop_assert!(s.is_empty());
    }

    #[test]
    fn sorted_list_stays_sorted(values in prop::collection::vec(-100i32..100, 0..200)) {
        let list: SortedList<i32> = values.iter().copied().collect();
        let mut expected = values.clone();
        expected.sort();
        prop_assert!(list.iter().eq(expected.iter()));
    }

    #[test]
    fn bst_via_facade_tracks_set(values in prop::collection::vec(0u16..300, 0..200)) {
        let mut tree = Bst::new();
        let mut model = BTreeSet::new();
        for v in &values {
            prop_assert_eq!(tree.insert(*v), model.insert(*v));
        }
        for v in values.iter().step_by(2) {
            prop_assert_eq!(tree.remove(v).is_some(), model.remove(v));
        }
        prop_assert!(tree.assert_valid().is_ok());
        prop_assert!(tree.iter().eq(model.iter()));
    }
}
