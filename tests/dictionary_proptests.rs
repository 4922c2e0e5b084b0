// Dictionary property tests.
//
// Property 1: model equivalence against hashbrown::HashMap.
//  - Operations: put, delete, get over a small key space so keys collide,
//    with few rows so chains grow past their initial capacity.
//  - Invariant: get/contains/len agree with the model after every step;
//    delete reports presence exactly as the model does.
//
// Property 2: row invariants hold after any sequence.
//  - Every row satisfies len <= capacity, capacity is initial * 2^k, and
//    every key sits in the row its hash names.
use hashbrown::HashMap;
use proptest::prelude::*;
use rowdict::hash::dict_hash;
use rowdict::Dictionary;

proptest! {
    #[test]
    fn prop_matches_hashmap_model(
        rows in 1usize..=8,
        ops in proptest::collection::vec((0u8..=2u8, 0usize..40usize, any::<u32>()), 1..300),
    ) {
        let mut dict = Dictionary::create(rows).unwrap();
        let mut model: HashMap<String, u32> = HashMap::new();

        for (op, raw_k, v) in ops {
            let key = format!("k{}", raw_k);
            match op {
                0 => {
                    dict.put(&key, v).unwrap();
                    model.insert(key.clone(), v);
                }
                1 => {
                    prop_assert_eq!(dict.delete(&key), model.remove(&key).is_some());
                }
                _ => {
                    prop_assert_eq!(dict.get(&key), model.get(&key).copied());
                }
            }
            prop_assert_eq!(dict.len(), model.len());
            prop_assert_eq!(dict.contains_key(&key), model.contains_key(&key));
        }

        for (k, v) in &model {
            prop_assert_eq!(dict.get(k), Some(*v));
        }
    }

    #[test]
    fn prop_row_invariants(
        rows in 1usize..=4,
        ops in proptest::collection::vec((any::<bool>(), "[a-z\u{e9}]{0,6}"), 1..200),
    ) {
        let mut dict = Dictionary::create(rows).unwrap();
        for (is_put, key) in ops {
            if is_put {
                dict.put(&key, ()).unwrap();
            } else {
                dict.delete(&key);
            }
        }

        for idx in 0..dict.row_count() {
            let row = dict.row(idx).unwrap();
            prop_assert!(row.len() <= row.capacity());
            prop_assert!(row.capacity() >= 8 && (row.capacity() / 8).is_power_of_two());
            prop_assert_eq!(row.capacity() % 8, 0);
            for key in row.keys() {
                prop_assert_eq!(dict_hash(key.as_bytes(), rows), idx);
            }
        }
    }

    #[test]
    fn prop_hash_in_range(key in ".*", m in 1usize..100_000) {
        let h = dict_hash(key.as_bytes(), m);
        prop_assert!(h < m);
        prop_assert_eq!(h, dict_hash(key.as_bytes(), m));
    }
}
