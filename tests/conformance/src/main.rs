fn main() {
    println!("Run `cargo test -p conformance` to execute the ring buffer conformance suite.");
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use ringkit_algo::{equal_range, is_sorted, reverse, sort_unstable};
    use ringkit_buffer::{BufferError, OverflowPolicy, RingBuffer};

    const POLICIES: [OverflowPolicy; 2] = [OverflowPolicy::Evict, OverflowPolicy::Grow];

    fn contents<T: Clone>(rb: &RingBuffer<T>) -> Vec<T> {
        rb.iter().cloned().collect()
    }

    fn pushed(capacity: usize, policy: OverflowPolicy, values: &[i32]) -> RingBuffer<i32> {
        let mut rb = RingBuffer::with_policy(capacity, policy);
        rb.extend(values.iter().copied());
        rb
    }

    /// A buffer whose live region wraps past the end of the backing store.
    fn wrapped(capacity: usize, policy: OverflowPolicy, values: &[i32]) -> RingBuffer<i32> {
        let mut rb = RingBuffer::with_policy(capacity, policy);
        let shift = capacity / 2;
        for _ in 0..shift {
            rb.push_back(0);
        }
        for _ in 0..shift {
            rb.pop_front();
        }
        rb.extend(values.iter().copied());
        rb
    }

    // --- Concrete scenarios ---

    #[test]
    fn erase_inner_range_of_five() {
        for policy in POLICIES {
            let mut rb = pushed(5, policy, &[1, 2, 3, 4, 5]);
            rb.erase_range(rb.begin() + 1, rb.end() - 1).unwrap();
            assert_eq!(contents(&rb), vec![1, 5], "{policy:?}");
        }
    }

    #[test]
    fn evicting_capacity_three_keeps_last_three() {
        let rb = pushed(3, OverflowPolicy::Evict, &[3, 4, 5, 6, 7]);
        assert_eq!(contents(&rb), vec![5, 6, 7]);
        assert_eq!(rb.max_size(), 3);
    }

    #[test]
    fn growing_capacity_three_keeps_all_five() {
        let rb = pushed(3, OverflowPolicy::Grow, &[3, 4, 5, 6, 7]);
        assert_eq!(contents(&rb), vec![3, 4, 5, 6, 7]);
        assert!(rb.capacity() >= 5);
    }

    #[test]
    fn sort_then_reverse_through_cursors() {
        for policy in POLICIES {
            let mut rb = wrapped(6, policy, &[2, 6, 3, 4, 1, 5]);
            let all = rb.range(rb.begin(), rb.end()).unwrap();

            sort_unstable(&mut rb, all.clone());
            assert_eq!(contents(&rb), vec![1, 2, 3, 4, 5, 6], "{policy:?}");
            assert!(is_sorted(&rb, all.clone()));

            reverse(&mut rb, all);
            assert_eq!(contents(&rb), vec![6, 5, 4, 3, 2, 1], "{policy:?}");
        }
    }

    #[test]
    fn equal_range_on_sorted_buffer() {
        let mut rb = wrapped(8, OverflowPolicy::Evict, &[4, 2, 2, 9, 2, 1]);
        rb.sort_unstable();
        let all = rb.range(rb.begin(), rb.end()).unwrap();
        assert_eq!(equal_range(&rb, all, &2), 1..4);
    }

    #[test]
    fn construct_filled_for_several_types() {
        let ints = RingBuffer::from_elem(4, 0, OverflowPolicy::Evict);
        let strings = RingBuffer::from_elem(2, "Hi".to_string(), OverflowPolicy::Grow);
        let bools = RingBuffer::from_elem(3, true, OverflowPolicy::Evict);

        assert_eq!(ints, [0, 0, 0, 0]);
        assert_eq!(strings, ["Hi", "Hi"]);
        assert_eq!(bools, [true, true, true]);
        assert_eq!(strings.max_size(), 2);
    }

    #[test]
    fn copies_compare_equal_and_are_independent() {
        for policy in POLICIES {
            let original = RingBuffer::from_elem(4, 0, policy);
            let mut copy = original.clone();
            assert_eq!(copy, original);

            copy.push_back(1);
            assert_ne!(copy, original);
            assert_eq!(original, [0, 0, 0, 0]);
        }
    }

    #[test]
    fn insert_past_end_faults_for_both_policies() {
        for policy in POLICIES {
            let mut rb = pushed(4, policy, &[1]);
            assert!(matches!(
                rb.insert(rb.end() + 1, 2),
                Err(BufferError::OutOfRange { .. })
            ));
        }
    }

    #[test]
    fn stale_cursor_after_growth_is_reported() {
        let mut rb = pushed(2, OverflowPolicy::Grow, &[1, 2]);
        let cursor = rb.begin() + 1;
        rb.push_back(3);
        assert!(matches!(
            rb.erase(cursor),
            Err(BufferError::StaleCursor { .. })
        ));
        assert_eq!(contents(&rb), vec![1, 2, 3]);
    }

    #[test]
    fn serde_representation_is_logical() {
        let rb = wrapped(4, OverflowPolicy::Grow, &[1, 2, 3, 4, 5]);
        let text = serde_json::to_string(&rb).unwrap();
        let back: RingBuffer<i32> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, rb);
        assert_eq!(back.capacity(), rb.capacity());
    }

    // --- Properties ---

    fn policy() -> impl Strategy<Value = OverflowPolicy> {
        prop_oneof![Just(OverflowPolicy::Evict), Just(OverflowPolicy::Grow)]
    }

    proptest! {
        #[test]
        fn filled_buffer_is_uniform(capacity in 0usize..32, value in any::<i16>()) {
            let rb = RingBuffer::from_elem(capacity, value, OverflowPolicy::Evict);
            prop_assert_eq!(rb.len(), capacity);
            prop_assert_eq!(rb.max_size(), capacity);
            prop_assert!(rb.iter().all(|&v| v == value));
        }

        #[test]
        fn evicting_push_back_never_exceeds_capacity(capacity in 1usize..16) {
            let mut rb = RingBuffer::new(capacity);
            for v in 0..=capacity {
                rb.push_back(v);
            }
            prop_assert_eq!(rb.len(), capacity);
            prop_assert_eq!(rb.front(), Some(&1));
            prop_assert_eq!(rb.back(), Some(&capacity));
        }

        #[test]
        fn evicting_push_front_never_exceeds_capacity(capacity in 1usize..16) {
            let mut rb = RingBuffer::new(capacity);
            for v in 0..=capacity {
                rb.push_front(v);
            }
            prop_assert_eq!(rb.len(), capacity);
            prop_assert_eq!(rb.front(), Some(&capacity));
            prop_assert!(!rb.iter().any(|&v| v == 0));
        }

        #[test]
        fn growing_push_never_evicts(
            capacity in 0usize..16,
            values in proptest::collection::vec(any::<i32>(), 0..64),
        ) {
            let mut rb = RingBuffer::growable(capacity);
            for &v in &values {
                prop_assert_eq!(rb.push_back(v), None);
            }
            prop_assert_eq!(contents(&rb), values.clone());
            prop_assert!(rb.capacity() >= values.len());
            prop_assert!(rb.capacity() >= capacity);
        }

        #[test]
        fn insert_then_erase_restores_sequence(
            policy in policy(),
            values in proptest::collection::vec(any::<i32>(), 0..12),
            extra in 1usize..4,
            pos in any::<prop::sample::Index>(),
            x in any::<i32>(),
        ) {
            let mut rb = wrapped(values.len() + extra, policy, &values);
            let before = contents(&rb);
            let at = rb.cursor(pos.index(values.len() + 1));

            let inserted = rb.insert(at, x).unwrap();
            prop_assert_eq!(rb.at(inserted), Ok(&x));
            rb.erase(inserted).unwrap();

            prop_assert_eq!(contents(&rb), before);
        }

        #[test]
        fn erase_range_removes_exactly_the_slice(
            policy in policy(),
            values in proptest::collection::vec(any::<i32>(), 0..20),
            a in any::<prop::sample::Index>(),
            b in any::<prop::sample::Index>(),
        ) {
            let mut rb = wrapped(values.len(), policy, &values);
            let (lo, hi) = {
                let (x, y) = (a.index(values.len() + 1), b.index(values.len() + 1));
                (x.min(y), x.max(y))
            };
            let (first, last) = (rb.cursor(lo), rb.cursor(hi));
            let removed_count = (last - first) as usize;

            rb.erase_range(first, last).unwrap();

            let mut expected = values.clone();
            expected.drain(lo..hi);
            prop_assert_eq!(rb.len(), values.len() - removed_count);
            prop_assert_eq!(contents(&rb), expected);
        }

        #[test]
        fn push_front_then_pop_front_is_layout_independent(
            values in proptest::collection::vec(any::<i32>(), 1..10),
            rounds in 0usize..10,
        ) {
            let capacity = values.len() + 2 * rounds;
            let mut rb = wrapped(capacity, OverflowPolicy::Evict, &values);
            for r in 0..rounds {
                rb.push_front(r as i32);
                rb.push_back(r as i32);
            }
            for _ in 0..rounds {
                rb.pop_front();
                rb.pop_back();
            }
            prop_assert_eq!(contents(&rb), values);
        }

        #[test]
        fn equality_ignores_capacity(
            values in proptest::collection::vec(any::<u8>(), 0..16),
            spare in 0usize..8,
        ) {
            let tight: RingBuffer<u8> = values.iter().copied().collect();
            let mut roomy = RingBuffer::growable(values.len() + spare);
            roomy.extend(values.iter().copied());
            prop_assert_eq!(&tight, &roomy);
            prop_assert!(tight == values);
        }

        #[test]
        fn sort_matches_slice_sort(
            policy in policy(),
            values in proptest::collection::vec(any::<i32>(), 0..40),
        ) {
            let mut rb = wrapped(values.len(), policy, &values);
            rb.sort_unstable();

            let mut expected = values.clone();
            expected.sort_unstable();
            prop_assert_eq!(contents(&rb), expected);
        }
    }
}
