use super::*;

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

fn key_strategy() -> impl Strategy<Value = Vec<u8>> + Clone {
    // A small alphabet forces shared prefixes, and therefore splits.
    prop::collection::vec(prop::sample::select(b"abc".to_vec()), 0..=12)
}

fn keys_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(key_strategy(), 0..=64)
}

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Insert(#[proptest(strategy = "key_strategy()")] Vec<u8>),
    Search(#[proptest(strategy = "key_strategy()")] Vec<u8>),
    Suffixes(#[proptest(strategy = "key_strategy()")] Vec<u8>),
}

/// The key set an index should hold, as a sorted-set model.
fn model_insert(m: &mut BTreeSet<Vec<u8>>, key: &[u8]) {
    if !key.is_empty() {
        m.insert(key.to_vec());
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_with_model(ops in prop::collection::vec(any::<Op>(), 0..=300)) {
        let mut plain: Trie<Plain> = Trie::new();
        let mut radix: Trie<Radix> = Trie::new();
        let mut m: BTreeSet<Vec<u8>> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    let expected = !key.is_empty() && !m.contains(&key);
                    model_insert(&mut m, &key);
                    prop_assert_eq!(plain.insert(&key), expected);
                    prop_assert_eq!(radix.insert(&key), expected);
                    prop_assert!(radix.validate().is_ok(), "{:?}", radix.validate());
                }
                Op::Search(key) => {
                    let want = m.contains(&key);
                    let got_plain = plain.search(&key);
                    let got_radix = radix.search(&key);
                    prop_assert_eq!(got_plain.is_some(), want);
                    prop_assert_eq!(got_radix.is_some(), want);
                    if let (Some(p), Some(r)) = (got_plain, got_radix) {
                        prop_assert_eq!(p, key.len());
                        prop_assert!(r >= 1 && r <= p);
                    }
                }
                Op::Suffixes(key) => {
                    for i in 0..key.len() {
                        model_insert(&mut m, &key[i..]);
                    }
                    plain.build_suffix_index([&key]);
                    radix.build_suffix_index([&key]);
                    prop_assert!(radix.validate().is_ok(), "{:?}", radix.validate());
                }
            }

            prop_assert_eq!(plain.len(), m.len());
            prop_assert_eq!(radix.len(), m.len());
        }

        prop_assert!(plain.validate().is_ok(), "{:?}", plain.validate());
    }

    #[test]
    fn prop_round_trip(keys in keys_strategy()) {
        let mut plain: Trie<Plain> = Trie::new();
        let mut radix: Trie<Radix> = Trie::new();
        plain.build_from_words(&keys);
        radix.build_from_words(&keys);

        for k in keys.iter().filter(|k| !k.is_empty()) {
            prop_assert_eq!(plain.search(k), Some(k.len()));
            prop_assert!(radix.search(k).is_some());
        }
    }

    #[test]
    fn prop_insert_twice_is_invisible(keys in keys_strategy(), probes in keys_strategy()) {
        let mut once: Trie<Radix> = Trie::new();
        let mut twice: Trie<Radix> = Trie::new();
        once.build_from_words(&keys);
        twice.build_from_words(&keys).build_from_words(&keys);

        prop_assert_eq!(once.stats(), twice.stats());
        for p in probes.iter().chain(keys.iter()) {
            prop_assert_eq!(once.search(p), twice.search(p));
        }
    }

    #[test]
    fn prop_suffix_coverage(s in key_strategy()) {
        let mut index = Index::new(true);
        index.build_suffix_index([&s]);
        for i in 0..s.len() {
            prop_assert!(index.contains(&s[i..]));
        }
        let distinct: BTreeSet<&[u8]> = (0..s.len()).map(|i| &s[i..]).collect();
        prop_assert_eq!(index.len(), distinct.len());
    }
}

/// Calls `f` once per ordering of `items` (Heap's algorithm, iterative).
fn for_each_order<T: Clone>(items: &[T], mut f: impl FnMut(&[T])) {
    let mut order = items.to_vec();
    let mut counters = vec![0usize; order.len()];
    f(&order);

    let mut i = 1;
    while i < order.len() {
        if counters[i] < i {
            let j = if i % 2 == 0 { 0 } else { counters[i] };
            order.swap(j, i);
            f(&order);
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
}

#[test]
fn heap_order_visits_every_permutation_once() {
    let mut seen = BTreeSet::new();
    let mut calls = 0;
    for_each_order(&[1, 2, 3, 4], |o| {
        calls += 1;
        seen.insert(o.to_vec());
    });
    assert_eq!(calls, 24);
    assert_eq!(seen.len(), 24);
}

#[test]
fn exhaustive_insert_order_small_set() {
    let keys = ["te", "test", "team", "toast", "t", "tea"];

    let mut reference: Trie<Radix> = Trie::new();
    reference.build_from_words(keys);
    let expected = reference.stats();

    for_each_order(&keys, |perm| {
        let mut t: Trie<Radix> = Trie::new();
        for k in perm {
            t.insert(k);
            t.validate().unwrap();
        }

        // The compressed shape does not depend on insertion order.
        assert_eq!(t.stats().nodes, expected.nodes);
        assert_eq!(t.stats().segment_bytes, expected.segment_bytes);
        for k in keys {
            assert_eq!(t.search(k), reference.search(k), "{k} after {perm:?}");
        }
        assert_eq!(t.search("toa"), None);
        assert_eq!(t.search("tests"), None);
    });
}

#[test]
fn randomized_corpus() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let words: Vec<String> = (0..5_000)
        .map(|_| {
            let len = rng.gen_range(1..=16);
            (0..len).map(|_| rng.gen_range(b'a'..=b'f') as char).collect()
        })
        .collect();

    let mut plain = Index::new(false);
    let mut radix = Index::new(true);
    plain.build_from_words(&words);
    radix.build_from_words(&words);
    plain.validate().unwrap();
    radix.validate().unwrap();

    let distinct: BTreeSet<&String> = words.iter().collect();
    assert_eq!(plain.len(), distinct.len());
    assert_eq!(radix.len(), distinct.len());

    for w in &words {
        assert_eq!(plain.search(w), Some(w.len()));
        assert!(radix.search(w).unwrap() <= w.len());
    }

    let radix_stats = radix.stats();
    let plain_stats = plain.stats();
    assert!(radix_stats.nodes <= plain_stats.nodes);
    assert!(radix_stats.max_depth <= plain_stats.max_depth);
    assert_eq!(plain_stats.segment_bytes, plain_stats.nodes);
}
