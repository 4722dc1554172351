use polycoll::{
    map, new_dictionary, new_set, new_sorted_dictionary, new_sorted_set, to_vec, Collection,
    Deque, Dictionary, HashDictionary, HashSet, Pair, Set,
};
use proptest::prelude::*;
use std::ops::ControlFlow;

// Counts callback invocations, breaking on the `stop`-th one (1-based).
fn visits_until<C, T>(c: &C, stop: usize) -> (usize, ControlFlow<usize>)
where
    C: Collection<T>,
{
    let mut calls = 0;
    let flow = c.for_each(|_| {
        calls += 1;
        if calls == stop {
            ControlFlow::Break(calls)
        } else {
            ControlFlow::Continue(())
        }
    });
    (calls, flow)
}

proptest! {
    // map(map(c, f), g) enumerates the same as map(c, g . f).
    #[test]
    fn prop_map_composes(values in proptest::collection::vec(any::<i32>(), 0..64), a in any::<i64>(), b in any::<i64>()) {
        let d: Deque<i32> = values.iter().copied().collect();
        let f = |v: &i32| i64::from(*v).wrapping_mul(a);
        let g = |v: i64| v.wrapping_add(b);

        let chained = map(map(&d, f), g);
        let fused = map(&d, |v: &i32| g(f(v)));
        prop_assert_eq!(to_vec(&chained), to_vec(&fused));
        prop_assert_eq!(chained.size(), d.size());

        let expected: Vec<i64> = values.iter().map(|v| g(f(v))).collect();
        prop_assert_eq!(to_vec(&chained), expected);
    }

    // Breaking on the m-th call means exactly m calls, for every container kind.
    #[test]
    fn prop_early_exit_visits_exactly_m(keys in proptest::collection::btree_set(any::<u16>(), 1..64), pick in any::<prop::sample::Index>()) {
        let n = keys.len();
        let m = pick.index(n) + 1;

        let d: Deque<u16> = keys.iter().copied().collect();
        prop_assert_eq!(visits_until(&&d, m), (m, ControlFlow::Break(m)));

        let mut dict = new_sorted_dictionary(|a: &u16, b: &u16| a < b);
        let mut set = new_sorted_set(|a: &u16, b: &u16| a < b);
        let mut hashed_dict: HashDictionary<u16, ()> = new_dictionary();
        let mut hashed_set: HashSet<u16> = new_set();
        for k in &keys {
            dict.set(*k, ());
            set.add(*k);
            hashed_dict.set(*k, ());
            hashed_set.add(*k);
        }
        prop_assert_eq!(visits_until(&dict.entries(), m), (m, ControlFlow::Break(m)));
        prop_assert_eq!(visits_until(&dict.keys(), m), (m, ControlFlow::Break(m)));
        prop_assert_eq!(visits_until(&set.elements(), m), (m, ControlFlow::Break(m)));
        prop_assert_eq!(visits_until(&hashed_dict.entries(), m), (m, ControlFlow::Break(m)));
        prop_assert_eq!(visits_until(&hashed_dict.values(), m), (m, ControlFlow::Break(m)));
        prop_assert_eq!(visits_until(&hashed_set.elements(), m), (m, ControlFlow::Break(m)));

        // Never breaking visits everything.
        prop_assert_eq!(visits_until(&set.elements(), n + 1), (n, ControlFlow::Continue(())));
        prop_assert_eq!(visits_until(&hashed_set.elements(), n + 1), (n, ControlFlow::Continue(())));
    }
}

#[test]
fn views_over_views_stay_lazy_and_reusable() {
    let mut dict = new_sorted_dictionary(|a: &&str, b: &&str| a < b);
    dict.set("pear", 3);
    dict.set("apple", 5);
    dict.set("fig", 1);

    let weighted = map(dict.entries(), |p: Pair<&&str, &i32>| {
        let (name, count) = p.into_inner();
        name.len() as i32 * *count
    });
    assert_eq!(to_vec(&weighted), vec![25, 3, 12]);
    // The view reads through to the live container.
    dict.set("kiwi", 2);
    let weighted = map(dict.entries(), |p: Pair<&&str, &i32>| {
        let (name, count) = p.into_inner();
        name.len() as i32 * *count
    });
    assert_eq!(to_vec(&weighted), vec![25, 3, 8, 12]);
}

#[test]
fn error_from_inside_a_mapped_view_reaches_the_caller() {
    let d: Deque<&str> = ["4", "8", "fifteen", "16"].into_iter().collect();
    let parsed = map(&d, |s: &&str| s.parse::<u32>());
    let mut sum = 0;
    let flow = parsed.for_each(|r| match r {
        Ok(v) => {
            sum += v;
            ControlFlow::Continue(())
        }
        Err(e) => ControlFlow::Break(e),
    });
    assert!(matches!(flow, ControlFlow::Break(_)));
    assert_eq!(sum, 12);
}
