//! Property-based tests for [`GuardedMap`] using proptest
//!
//! Single-threaded op sequences are replayed against `std::collections::HashMap`
//! as a reference model; the two must agree on every observable after every
//! step.

use super::GuardedMap;
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum MapOp {
    Set(u8, i32),
    Delete(u8),
    Clear,
}

fn map_op() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        4 => (any::<u8>(), any::<i32>()).prop_map(|(k, v)| MapOp::Set(k, v)),
        2 => any::<u8>().prop_map(MapOp::Delete),
        1 => Just(MapOp::Clear),
    ]
}

proptest! {
    #[test]
    fn matches_hashmap_model(ops in prop::collection::vec(map_op(), 0..100)) {
        let map: GuardedMap<u8, i32> = GuardedMap::new();
        let mut model: HashMap<u8, i32> = HashMap::new();

        for op in ops {
            match op {
                MapOp::Set(k, v) => {
                    map.set(k, v);
                    model.insert(k, v);
                }
                MapOp::Delete(k) => {
                    let removed = map.delete(&k);
                    prop_assert_eq!(removed, model.remove(&k).is_some());
                }
                MapOp::Clear => {
                    map.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(map.len(), model.len());
        }

        // Final state agrees key by key over the whole key space
        for k in 0..=u8::MAX {
            prop_assert_eq!(map.get(&k), model.get(&k).copied());
        }
    }

    #[test]
    fn snapshots_are_consistent(entries in prop::collection::hash_map(any::<u8>(), any::<i32>(), 0..50)) {
        let map = GuardedMap::new();
        for (&k, &v) in &entries {
            map.set(k, v);
        }

        let keys = map.keys();
        let values = map.values();
        prop_assert_eq!(keys.len(), entries.len());
        prop_assert_eq!(values.len(), entries.len());

        for key in &keys {
            prop_assert_eq!(map.get(key), entries.get(key).copied());
        }
    }

    #[test]
    fn scan_early_exit_bounds_visits(len in 1usize..50, stop_after in 1usize..50) {
        let map = GuardedMap::new();
        for i in 0..len {
            map.set(i, i);
        }

        let mut visits = 0;
        map.scan(|_, _| {
            visits += 1;
            visits < stop_after
        });

        prop_assert_eq!(visits, stop_after.min(len));
    }
}
