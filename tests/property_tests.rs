use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;
use tinymap::{Dispose, DisposeError, TinyMap, Value};

#[derive(Debug, Clone)]
enum Op {
    Set(Vec<u8>, u16),
    Reset,
}

fn small_key() -> impl Strategy<Value = Vec<u8>> {
    // A small alphabet so that keys repeat often.
    proptest::collection::vec(prop_oneof![Just(b'a'), Just(b'b'), Just(b'c')], 0..3)
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => (small_key(), any::<u16>()).prop_map(|(k, v)| Op::Set(k, v)),
        1 => Just(Op::Reset),
    ]
}

struct Counted(Rc<Cell<usize>>);

impl Dispose for Counted {
    fn dispose(&mut self) -> Result<(), DisposeError> {
        self.0.set(self.0.get() + 1);
        Ok(())
    }
}

impl Value for Counted {
    fn as_dispose(&mut self) -> Option<&mut dyn Dispose> {
        Some(self)
    }
}

proptest! {
    #[test]
    fn matches_association_list_model(ops in proptest::collection::vec(op(), 0..64)) {
        let mut map = TinyMap::new();
        let mut model: Vec<(Vec<u8>, u16)> = Vec::new();

        for op in ops {
            match op {
                Op::Set(key, value) => {
                    map.set(&key, value);
                    match model.iter_mut().find(|(k, _)| *k == key) {
                        Some(entry) => entry.1 = value,
                        None => model.push((key, value)),
                    }
                }
                Op::Reset => {
                    map.reset();
                    model.clear();
                }
            }

            let actual: Vec<(Vec<u8>, u16)> =
                map.iter().map(|(k, v)| (k.to_vec(), *v)).collect();
            prop_assert_eq!(&actual, &model);
            prop_assert_eq!(map.len(), model.len());
            for (key, value) in &model {
                prop_assert_eq!(map.get(key), Some(value));
            }
        }
    }

    #[test]
    fn keys_stay_unique(keys in proptest::collection::vec(small_key(), 0..32)) {
        let mut map = TinyMap::new();
        for (i, key) in keys.iter().enumerate() {
            map.set(key, i);
        }

        let stored: Vec<&[u8]> = map.keys().collect();
        for (i, key) in stored.iter().enumerate() {
            prop_assert!(!stored[i + 1..].contains(key));
        }
        for key in &keys {
            prop_assert_eq!(stored.iter().filter(|k| **k == key.as_slice()).count(), 1);
        }
    }

    #[test]
    fn reset_disposes_each_live_value_once(keys in proptest::collection::vec(small_key(), 0..32)) {
        let disposed = Rc::new(Cell::new(0));
        let mut map = TinyMap::new();
        for key in &keys {
            map.set(key, Counted(Rc::clone(&disposed)));
        }
        let live = map.len();

        map.reset();

        prop_assert_eq!(disposed.get(), live);
        prop_assert!(map.is_empty());
        for key in &keys {
            prop_assert!(map.get(key).is_none());
        }
    }
}
