#![cfg(test)]

// Property tests for the ordered engine kept inside the crate so they can
// reach the balance check, which is not part of the public surface.

use crate::tree::{Less, Tree};
use core::ops::ControlFlow;
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Orders `(key, payload)` items by key alone, like the sorted dictionary does.
struct ByKey;
impl Less<(u8, u32)> for ByKey {
    fn less(&self, a: &(u8, u32), b: &(u8, u32)) -> bool {
        a.0 < b.0
    }
}

#[derive(Clone, Debug)]
enum Op {
    Set(u8, u32),
    Delete(u8),
    DeleteBy(u8),
    Get(u8),
    ScanUntil(u8),
}

fn arb_op() -> impl Strategy<Value = Op> {
    // Small key space so replacements and deletions of present keys are common.
    let key = 0u8..48;
    prop_oneof![
        4 => (key.clone(), any::<u32>()).prop_map(|(k, v)| Op::Set(k, v)),
        2 => key.clone().prop_map(Op::Delete),
        1 => key.clone().prop_map(Op::DeleteBy),
        2 => key.clone().prop_map(Op::Get),
        1 => key.prop_map(Op::ScanUntil),
    ]
}

// Property: state-machine equivalence against std::collections::BTreeMap.
// Invariants exercised across random operation sequences:
// - `set` replaces the equivalent item and hands back the old one.
// - `delete`/`delete_by` remove exactly the equivalent item; absent is a no-op.
// - `get` finds an item iff the model holds its key, payload included.
// - `scan` is ascending and stops right after the first `Break`.
// - Heights stay AVL-balanced and `len` matches the model after every step.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(ops in proptest::collection::vec(arb_op(), 1..200)) {
        let mut sut = Tree::new(ByKey);
        let mut model: BTreeMap<u8, u32> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Set(k, v) => {
                    let old = sut.set((k, v));
                    let expected = model.insert(k, v).map(|old| (k, old));
                    prop_assert_eq!(old, expected);
                }
                Op::Delete(k) => {
                    let removed = sut.delete(&(k, 0));
                    let expected = model.remove(&k).map(|v| (k, v));
                    prop_assert_eq!(removed, expected);
                }
                Op::DeleteBy(k) => {
                    let removed = sut.delete_by(|_, item| k.cmp(&item.0));
                    let expected = model.remove(&k).map(|v| (k, v));
                    prop_assert_eq!(removed, expected);
                }
                Op::Get(k) => {
                    let got = sut.get(&(k, 0)).copied();
                    let expected = model.get(&k).map(|v| (k, *v));
                    prop_assert_eq!(got, expected);
                }
                Op::ScanUntil(stop) => {
                    let mut seen = Vec::new();
                    let flow = sut.scan(|item| {
                        seen.push(item.0);
                        if item.0 >= stop { ControlFlow::Break(item.0) } else { ControlFlow::Continue(()) }
                    });
                    let mut expected: Vec<u8> = model.keys().copied().take_while(|k| *k < stop).collect();
                    match model.range(stop..).next() {
                        Some((k, _)) => {
                            expected.push(*k);
                            prop_assert_eq!(flow, ControlFlow::Break(*k));
                        }
                        None => prop_assert_eq!(flow, ControlFlow::Continue(())),
                    }
                    prop_assert_eq!(seen, expected);
                }
            }

            sut.assert_balanced();
            prop_assert_eq!(sut.len(), model.len());
        }

        let all: Vec<(u8, u32)> = sut.iter().copied().collect();
        let expected: Vec<(u8, u32)> = model.into_iter().collect();
        prop_assert_eq!(all, expected);
    }
}
