use containers_core::Queue;

#[test]
fn queue_empty_matrix() {
    let mut q = Queue::<i64>::new();
    assert_eq!(q.count(), 0);
    assert_eq!(q.front(), None);
    assert_eq!(q.back(), None);
    assert!(q.is_empty());
    assert_eq!(q.dequeue(), None);
    assert_eq!(q.dequeue(), None);
    assert_eq!(q.to_string(), "[]");
}

#[test]
fn queue_million_fifo_matrix() {
    let mut q = Queue::new();
    for i in 0..1_000_000 {
        q.enqueue(i);
        assert_eq!(q.count(), i + 1);
    }
    assert_eq!(q.count(), 1_000_000);
    assert_eq!(q.front(), Some(&0));
    assert_eq!(q.back(), Some(&999_999));
    assert!(!q.is_empty());

    for i in 0..1_000_000 {
        assert_eq!(q.dequeue(), Some(i));
    }
    assert_eq!(q.count(), 0);
    assert_eq!(q.front(), None);
    assert_eq!(q.back(), None);
    assert!(q.is_empty());
}

#[test]
fn queue_front_back_track_every_step_matrix() {
    let n = 100_000;
    let mut q = Queue::new();
    for i in 0..n {
        q.enqueue(i);
        assert_eq!(q.front(), Some(&0));
        assert_eq!(q.back(), Some(&i));
    }
    for i in 0..n - 1 {
        assert_eq!(q.front(), Some(&i));
        assert_eq!(q.dequeue(), Some(i));
        assert_eq!(q.back(), Some(&(n - 1)));
        assert_eq!(q.count(), n - 1 - i);
    }
    assert_eq!(q.front(), Some(&(n - 1)));
    assert_eq!(q.dequeue(), Some(n - 1));
    assert_eq!(q.front(), None);
    assert_eq!(q.back(), None);
}

#[test]
fn queue_interleaved_matrix() {
    let mut q = Queue::with_capacity(8);
    let mut expected = std::collections::VecDeque::new();
    for round in 0..1_000 {
        for k in 0..3 {
            q.enqueue(round * 3 + k);
            expected.push_back(round * 3 + k);
        }
        for _ in 0..2 {
            assert_eq!(q.dequeue(), expected.pop_front());
        }
        assert_eq!(q.count(), expected.len());
    }
    assert!(q.iter().eq(expected.iter()));
    q.clear();
    assert!(q.is_empty());
    assert_eq!(q.dequeue(), None);
}

#[test]
fn queue_try_enqueue_and_conversions_matrix() {
    let mut q = Queue::new();
    for word in ["a", "b", "c"] {
        q.try_enqueue(word.to_string()).unwrap();
    }
    assert_eq!(q.to_string(), "[a, b, c]");
    assert_eq!(format!("{q:?}"), r#"["a", "b", "c"]"#);

    let borrowed: Vec<&String> = (&q).into_iter().collect();
    assert_eq!(borrowed.len(), 3);
    let owned: Vec<String> = q.into_iter().collect();
    assert_eq!(owned, vec!["a", "b", "c"]);
}
