//! Property-based tests for [`GuardedVec`] using proptest
//!
//! Op sequences are replayed against a plain `Vec` model, mirroring the
//! keep-length `clear` semantic, and sorting is checked against the
//! adjacent-pair definition of sortedness.

use super::GuardedVec;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum VecOp {
    Push(i32),
    Set(usize, i32),
    Clear,
}

fn vec_op() -> impl Strategy<Value = VecOp> {
    prop_oneof![
        4 => any::<i32>().prop_map(VecOp::Push),
        3 => (0usize..80, any::<i32>()).prop_map(|(i, v)| VecOp::Set(i, v)),
        1 => Just(VecOp::Clear),
    ]
}

proptest! {
    #[test]
    fn matches_vec_model(ops in prop::collection::vec(vec_op(), 0..100)) {
        let vec: GuardedVec<i32> = GuardedVec::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                VecOp::Push(v) => {
                    vec.push(v);
                    model.push(v);
                }
                VecOp::Set(i, v) => {
                    let ok = vec.set(i, v);
                    prop_assert_eq!(ok, i < model.len());
                    if ok {
                        model[i] = v;
                    }
                }
                VecOp::Clear => {
                    // Keep-length clear: slots reset, length untouched
                    vec.clear();
                    model.iter_mut().for_each(|slot| *slot = 0);
                }
            }

            prop_assert_eq!(vec.len(), model.len());
        }

        for (i, &expected) in model.iter().enumerate() {
            prop_assert_eq!(vec.get(i), Some(expected));
        }
        prop_assert_eq!(vec.get(model.len()), None);
    }

    #[test]
    fn sort_yields_adjacent_pairs_in_order(elems in prop::collection::vec(any::<i32>(), 0..100)) {
        let vec = GuardedVec::new();
        vec.append(elems.iter().copied());

        vec.sort_by(|a, b| a.cmp(b));

        // Same multiset, sorted under the comparator
        prop_assert_eq!(vec.len(), elems.len());
        let mut previous: Option<i32> = None;
        vec.scan(|_, &elem| {
            if let Some(prev) = previous {
                assert!(prev <= elem, "adjacent pair out of order: {} > {}", prev, elem);
            }
            previous = Some(elem);
            true
        });

        let mut expected = elems;
        expected.sort_unstable();
        for (i, &value) in expected.iter().enumerate() {
            prop_assert_eq!(vec.get(i), Some(value));
        }
    }

    #[test]
    fn append_batches_preserve_order(batches in prop::collection::vec(prop::collection::vec(any::<i32>(), 0..10), 0..10)) {
        let vec = GuardedVec::new();
        let mut model = Vec::new();

        for batch in &batches {
            vec.append(batch.iter().copied());
            model.extend_from_slice(batch);
        }

        prop_assert_eq!(vec.len(), model.len());
        for (i, &expected) in model.iter().enumerate() {
            prop_assert_eq!(vec.get(i), Some(expected));
        }
    }
}
