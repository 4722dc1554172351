use polycoll::{new_dictionary, new_sorted_dictionary, to_vec, Dictionary, Set};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::ControlFlow;

#[derive(Clone, Debug)]
enum Op {
    Set(u8, u32),
    Delete(u8),
    Get(u8),
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0u8..40, any::<u32>()).prop_map(|(k, v)| Op::Set(k, v)),
        3 => (0u8..40).prop_map(Op::Delete),
        3 => (0u8..40).prop_map(Op::Get),
        1 => Just(Op::Clear),
    ]
}

#[derive(Clone, Debug)]
enum SetOp {
    Add(u16),
    Delete(u16),
    Clear,
}

fn arb_set_op() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        6 => (0u16..64).prop_map(SetOp::Add),
        3 => (0u16..64).prop_map(SetOp::Delete),
        1 => Just(SetOp::Clear),
    ]
}

fn desc(a: &u8, b: &u8) -> bool {
    a > b
}

// Both backends of each contract track a std model. The sorted backends also
// enumerate in comparator order after every step.
proptest! {
    #[test]
    fn prop_dictionaries_match_model(ops in proptest::collection::vec(arb_op(), 1..200)) {
        let mut hashed = new_dictionary();
        let mut sorted = new_sorted_dictionary(desc);
        let mut model: BTreeMap<u8, u32> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Set(k, v) => {
                    let expected = model.insert(k, v);
                    prop_assert_eq!(hashed.set(k, v), expected);
                    prop_assert_eq!(sorted.set(k, v), expected);
                }
                Op::Delete(k) => {
                    let expected = model.remove(&k);
                    prop_assert_eq!(hashed.delete(&k), expected);
                    prop_assert_eq!(sorted.delete(&k), expected);
                }
                Op::Get(k) => {
                    let expected = model.get(&k);
                    prop_assert_eq!(hashed.get(&k), expected);
                    prop_assert_eq!(sorted.get(&k), expected);
                    prop_assert_eq!(sorted.has(&k), expected.is_some());
                }
                Op::Clear => {
                    hashed.clear();
                    sorted.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(hashed.size(), model.len());
            prop_assert_eq!(sorted.size(), model.len());

            let keys: Vec<u8> = to_vec(&sorted.keys()).into_iter().copied().collect();
            let expected: Vec<u8> = model.keys().rev().copied().collect();
            prop_assert_eq!(keys, expected);
        }

        let mut pairs = Vec::new();
        let flow = hashed.for_each(|p| {
            let (k, v) = p.into_inner();
            pairs.push((*k, *v));
            ControlFlow::<()>::Continue(())
        });
        prop_assert_eq!(flow, ControlFlow::Continue(()));
        pairs.sort_unstable();
        prop_assert_eq!(pairs, model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn prop_sets_match_model(ops in proptest::collection::vec(arb_set_op(), 1..200)) {
        let mut hashed = polycoll::new_set();
        let mut sorted = polycoll::new_sorted_set(|a: &u16, b: &u16| a < b);
        let mut model: BTreeSet<u16> = BTreeSet::new();

        for op in ops {
            match op {
                SetOp::Add(v) => {
                    let expected = model.insert(v);
                    prop_assert_eq!(hashed.add(v), expected);
                    prop_assert_eq!(sorted.add(v), expected);
                }
                SetOp::Delete(v) => {
                    let expected = model.remove(&v);
                    prop_assert_eq!(hashed.delete(&v), expected);
                    prop_assert_eq!(sorted.delete(&v), expected);
                    prop_assert!(!hashed.has(&v));
                }
                SetOp::Clear => {
                    hashed.clear();
                    sorted.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(hashed.size(), model.len());
            prop_assert_eq!(sorted.size(), model.len());

            let got: Vec<u16> = to_vec(&sorted.elements()).into_iter().copied().collect();
            prop_assert_eq!(got, model.iter().copied().collect::<Vec<_>>());
        }

        let mut got_hashed: Vec<u16> = to_vec(&hashed.elements()).into_iter().copied().collect();
        got_hashed.sort_unstable();
        prop_assert_eq!(got_hashed, model.into_iter().collect::<Vec<_>>());
    }
}
