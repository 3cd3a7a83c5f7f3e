// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! End-to-end checks of zipped traversals.

use lockstep::capability::{
    BidirectionalTag, Capability, CapabilityKind, ForwardTag, InputTag, OutputTag,
    RandomAccessTag, Weakest,
};
use lockstep::{
    has_size, BidirectionalCursor, Cursor, InputSequence, Pairs, RandomAccessCursor, Sequence,
    SequenceTuple, Zip, ZipCursor,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};

fn kind<T: Capability>() -> CapabilityKind {
    T::KIND
}

fn declared<C: Cursor>(_: &C) -> CapabilityKind {
    <C::Capability as Capability>::KIND
}

#[test]
fn weakest_capability() {
    assert_eq!(
        kind::<Weakest<(BidirectionalTag, RandomAccessTag)>>(),
        CapabilityKind::Bidirectional
    );
    assert_eq!(
        kind::<Weakest<(ForwardTag, RandomAccessTag)>>(),
        CapabilityKind::Forward
    );
    assert_eq!(
        kind::<Weakest<(InputTag, BidirectionalTag)>>(),
        CapabilityKind::Forward
    );
    assert_eq!(
        kind::<Weakest<(OutputTag, OutputTag)>>(),
        CapabilityKind::Forward
    );
    assert_eq!(
        kind::<Weakest<(RandomAccessTag, RandomAccessTag)>>(),
        CapabilityKind::RandomAccess
    );
}

#[test]
fn deref_advance_retreat() {
    let numbers = vec![1, 2, 3];
    let floats = vec![1.0, 2.0, 3.0];
    let zip = Zip::new((&numbers, &floats));

    let mut cursor = zip.begin();
    assert_eq!(cursor.get(), (&1, &1.0));
    cursor.advance();
    assert_eq!(cursor.get(), (&2, &2.0));

    let mut cursor = zip.end();
    cursor.retreat();
    assert_eq!(cursor.get(), (&3, &3.0));
}

#[test]
fn owned_slots_do_not_alias() {
    let original = vec![1, 2, 3];
    let mut zip = Zip::new((original.clone(), vec![4.0, 5.0, 6.0]));
    zip.containers_mut().0[0] = 100;
    zip.containers_mut().1.push(7.0);
    assert_eq!(original, [1, 2, 3]);
    assert_eq!(zip.containers().0, [100, 2, 3]);
    assert_eq!(zip.containers().1.len(), 4);
}

#[test]
fn borrowed_slots_alias() {
    let mut numbers = vec![1, 2, 3];
    let mut list: LinkedList<_> = [1.0, 2.0, 3.0].into_iter().collect();
    {
        let mut zip = Zip::new((&mut numbers, &mut list));
        zip.containers_mut().0[2] = 30;
        zip.containers_mut().1.push_back(4.0);
        assert_eq!(zip.iter().last(), Some((&30, &3.0)));
    }
    assert_eq!(numbers, [1, 2, 30]);
    assert_eq!(list.len(), 4);
}

#[test]
fn mixed_slot_types() {
    let floats = vec![1.0f32, 2.0, 3.0];
    let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
    let set: HashSet<u8> = [1, 2, 3].into_iter().collect();

    let zip = Zip::new((floats, &list, set));
    let (floats, list_ref, set): &(Vec<f32>, &LinkedList<i32>, HashSet<u8>) = zip.containers();
    assert!(std::ptr::eq(*list_ref, &list));
    assert_eq!(floats.len(), 3);
    assert_eq!(set.len(), 3);
}

#[test]
fn capability_of_mixed_zips() {
    let numbers = vec![1, 2, 3];
    let list: LinkedList<_> = [1, 2, 3].into_iter().collect();
    let set: HashSet<_> = [1, 2, 3].into_iter().collect();

    assert_eq!(
        declared(&Zip::new((&numbers, &list, &set)).begin()),
        CapabilityKind::Forward
    );
    assert_eq!(
        declared(&Zip::new((&list,)).begin()),
        CapabilityKind::Bidirectional
    );
    assert_eq!(
        Zip::new((&numbers, VecDeque::from([1, 2, 3]))).capability(),
        CapabilityKind::RandomAccess
    );
}

#[test]
fn size_probe() {
    assert!(has_size!(Vec<f64>));
    assert!(has_size!(LinkedList<f64>));
    assert!(has_size!(HashSet<String>));
    assert!(!has_size!(f64));
    assert!(!has_size!(Option<Vec<u8>>));
    assert!(!has_size!(InputSequence<std::str::Chars<'static>>));
}

#[test]
fn cursor_equality() {
    let left = [1, 2, 3, 4];
    let right: VecDeque<_> = (0..4).collect();
    let zip = Zip::new((&left, &right));

    let begin = zip.begin();
    let end = zip.end();
    assert_eq!(begin, begin);
    assert_ne!(begin, end);
    assert_ne!(end, begin);

    let mut forward = zip.begin();
    forward.advance();
    let mut backward = zip.end();
    backward.jump(-3);
    assert_eq!(forward, backward);
    assert_eq!(backward, forward);

    // Only the first component differs.
    let skewed = ZipCursor::new((left.end(), right.begin()));
    assert_ne!(skewed, begin);
    assert_ne!(skewed, end);
}

#[test]
fn single_sequence() {
    let input: BTreeSet<_> = [5, 3, 8].into_iter().collect();
    let zip = Zip::new((&input,));
    let values = zip.iter().map(|(x,)| *x).collect::<Vec<_>>();
    assert_eq!(values, input.iter().copied().collect::<Vec<_>>());
}

#[test]
fn for_loop_over_zip() {
    let keys = ["a", "b", "c"];
    let values: VecDeque<_> = (1..=3).collect();
    let zip = (&keys, values).zip();
    let mut concatenated = String::new();
    for (key, value) in &zip {
        concatenated.push_str(&format!("{key}={value};"));
    }
    assert_eq!(concatenated, "a=1;b=2;c=3;");
}

#[test]
fn input_sequence_in_zip() {
    let numbers = vec![1, 2, 3, 4];
    let words = InputSequence::new("one two three".split(' '));
    let zip = Zip::new((&numbers, words));
    assert_eq!(
        zip.iter().collect::<Vec<_>>(),
        [(&1, "one"), (&2, "two"), (&3, "three")]
    );
}

#[test]
fn pairs_of_list() {
    let list: LinkedList<_> = (1..=5).collect();
    let pairs = Pairs::new(&list);
    assert_eq!(pairs.len(), 4);
    assert_eq!(
        pairs.iter().map(|(a, b)| a * b).collect::<Vec<_>>(),
        [2, 6, 12, 20]
    );
    assert_eq!(declared(&pairs.begin()), CapabilityKind::Bidirectional);
}

#[test]
fn randomized_lockstep() {
    let mut rng = ChaCha12Rng::seed_from_u64(42);
    for _ in 0..100 {
        let len_a: usize = rng.random_range(0..50);
        let len_b: usize = rng.random_range(0..50);
        let a = (0..len_a).map(|_| rng.random::<u32>()).collect::<Vec<_>>();
        let b = (0..len_b)
            .map(|_| rng.random::<u16>())
            .collect::<LinkedList<_>>();

        let zip = Zip::new((&a, &b));
        let expected = a.iter().zip(b.iter()).collect::<Vec<_>>();
        assert_eq!(zip.len(), expected.len());
        assert_eq!(zip.iter().collect::<Vec<_>>(), expected);
        assert_eq!(
            zip.iter().size_hint(),
            (expected.len(), Some(expected.len()))
        );

        if len_a == len_b {
            let zip = Zip::new_eq((&a, &b));
            let mut reversed = zip.iter().rev().collect::<Vec<_>>();
            reversed.reverse();
            assert_eq!(reversed, expected);
        }
    }
}

#[test]
fn randomized_mutation() {
    let mut rng = ChaCha12Rng::seed_from_u64(7);
    let len: usize = rng.random_range(10..100);
    let left = (0..len).map(|_| rng.random_range(0..1000u64)).collect::<Vec<_>>();
    let right = (0..len)
        .map(|_| rng.random_range(0..1000u64))
        .collect::<VecDeque<_>>();
    let mut output = vec![0; len];

    // The inputs are moved into the zip, only the output is borrowed.
    let mut zip = Zip::new_eq((&mut output, left.clone(), right.clone()));
    for (out, a, b) in zip.iter_mut() {
        *out = *a + *b;
    }
    drop(zip);

    let expected = left
        .iter()
        .zip(&right)
        .map(|(a, b)| a + b)
        .collect::<Vec<_>>();
    assert_eq!(output, expected);
}

#[test]
fn reverse_over_long_list() {
    let len = 200_000u64;
    let vec = (0..len).collect::<Vec<_>>();
    let list = (0..len).map(|x| x * 2).collect::<LinkedList<_>>();
    let zip = Zip::new((&vec, &list));

    let mut expected = len;
    for (a, b) in zip.iter().rev() {
        expected -= 1;
        assert_eq!(*a, expected);
        assert_eq!(*b, expected * 2);
    }
    assert_eq!(expected, 0);
}

#[test]
fn randomized_mutation_backward() {
    let mut rng = ChaCha12Rng::seed_from_u64(13);
    for _ in 0..20 {
        let len_a: usize = rng.random_range(0..50);
        let len_b: usize = rng.random_range(0..50);
        let len_c: usize = rng.random_range(0..50);
        let a = (0..len_a).map(|_| rng.random::<u8>()).collect::<Vec<_>>();
        let b = (0..len_b)
            .map(|_| rng.random::<u8>())
            .collect::<VecDeque<_>>();
        let c = (0..len_c)
            .map(|_| rng.random::<u8>())
            .collect::<LinkedList<_>>();

        let expected = a
            .iter()
            .zip(&b)
            .zip(&c)
            .rev()
            .map(|((x, y), z)| (*x, *y, *z))
            .collect::<Vec<_>>();

        let mut zip = Zip::new((a, b, c));
        let mut iter = zip.iter_mut();
        assert_eq!(iter.len(), expected.len());
        let mut actual = Vec::new();
        while let Some((x, y, z)) = iter.next_back() {
            actual.push((*x, *y, *z));
        }
        assert_eq!(actual, expected);
    }
}
