// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Zipping several sequences together.

mod cursor;
mod iter_mut;

use crate::capability::{Capability, CapabilityKind};
use crate::cursor::{Cursor, CursorRange};
use crate::macros::{all_eq, count, log_debug, min_of};
use crate::probe::SizedSequence;
use crate::source::{Sequence, SequenceMut};
pub use cursor::{BidirectionalCursorTuple, CursorTuple, RandomAccessCursorTuple, ZipCursor};
pub use iter_mut::{
    DoubleEndedIteratorTuple, ExactSizeIteratorTuple, FusedIteratorTuple, IteratorTuple, ZipMut,
};

/// A helper trait for zipping together multiple [`Sequence`]s into a single
/// [`Zip`] that produces items grouped from the original sequences.
///
/// This trait is automatically implemented for [tuples](tuple) of
/// [`Sequence`]s (with up to 12 elements). Each element of the tuple can be
/// an owned sequence or a reference to one.
pub trait SequenceTuple: Sized {
    /// Number of sequences in the tuple.
    const ARITY: usize;

    /// Cursor types of the sequences.
    type Cursors<'a>: CursorTuple
    where
        Self: 'a;

    /// Returns cursors to the start of all the sequences.
    fn begins(&self) -> Self::Cursors<'_>;

    /// Returns cursors past the end of all the sequences.
    fn ends(&self) -> Self::Cursors<'_>;

    /// Returns a [`Zip`] over these sequences, stopping at the shortest one.
    ///
    /// ```
    /// # use lockstep::SequenceTuple;
    /// # use std::collections::LinkedList;
    /// let left = [1, 2, 3, 4, 5];
    /// let right: LinkedList<_> = ["a", "b", "c"].into_iter().collect();
    ///
    /// let pairs = (&left, &right)
    ///     .zip()
    ///     .iter()
    ///     .map(|(&x, &s)| format!("{s}{x}"))
    ///     .collect::<Vec<_>>();
    /// assert_eq!(pairs, ["a1", "b2", "c3"]);
    /// ```
    fn zip(self) -> Zip<Self> {
        Zip::new(self)
    }

    /// Returns a [`Zip`] over these sequences, which must all have the same
    /// length. Otherwise this function panics.
    ///
    /// ```should_panic
    /// # use lockstep::SequenceTuple;
    /// let left = [1, 2, 3];
    /// let right = [1, 2];
    /// let _ = (&left, &right).zip_eq();
    /// ```
    fn zip_eq(self) -> Zip<Self>
    where
        Self: SizedSequenceTuple,
    {
        Zip::new_eq(self)
    }
}

/// A [`SequenceTuple`] made of [`SizedSequence`]s.
pub trait SizedSequenceTuple: SequenceTuple {
    /// Length of the shortest sequence.
    fn min_len(&self) -> usize;

    /// Whether all the sequences have the same length.
    fn same_len(&self) -> bool;
}

/// A [tuple](tuple) of [`SequenceMut`]s (with up to 12 elements).
pub trait SequenceMutTuple {
    /// Mutable iterator types of the sequences.
    type IterMuts<'a>: IteratorTuple
    where
        Self: 'a;

    /// Returns mutable iterators over all the sequences.
    fn iter_muts(&mut self) -> Self::IterMuts<'_>;
}

/// Several sequences zipped together.
///
/// Each sequence is either owned by the `Zip` or borrowed from the caller,
/// depending on whether it was passed by value or by reference to
/// [`Zip::new()`]. This choice is part of the type: `Zip<(Vec<i32>,
/// &LinkedList<f32>)>` owns its first sequence and borrows its second one.
///
/// Traversal goes through [`ZipCursor`]s, whose declared capability is the
/// weakest capability of the sequences' cursors. In particular, a `Zip` can
/// be iterated from the back only if all its sequences can.
///
/// ```
/// # use lockstep::Zip;
/// # use std::collections::LinkedList;
/// let numbers = vec![1, 2, 3];
/// let names: LinkedList<_> = ["one", "two", "three"].into_iter().collect();
///
/// let zip = Zip::new((numbers, &names));
/// for (number, name) in &zip {
///     println!("{number} is spelled {name}");
/// }
///
/// let last = zip.iter().next_back();
/// assert_eq!(last, Some((&3, &"three")));
/// ```
///
/// At least one sequence is needed.
///
/// ```compile_fail
/// # use lockstep::Zip;
/// let zip = Zip::new(());
/// let _ = zip.iter().next();
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Zip<T> {
    sequences: T,
}

impl<T: SequenceTuple> Zip<T> {
    /// Zips the given sequences together, without checking their lengths.
    /// Traversals stop at the end of the shortest sequence.
    pub fn new(sequences: T) -> Self {
        let zip = Self { sequences };
        log_debug!(
            "zipping {} sequences with {} traversal",
            T::ARITY,
            zip.capability()
        );
        zip
    }

    /// Zips the given sequences together, which must all have the same
    /// length. Otherwise this function panics.
    pub fn new_eq(sequences: T) -> Self
    where
        T: SizedSequenceTuple,
    {
        log_debug!(
            "checking that {} zipped sequences have the same length",
            T::ARITY
        );
        assert!(
            sequences.same_len(),
            "called Zip::new_eq() with sequences of different lengths"
        );
        Self::new(sequences)
    }

    /// Returns a cursor to the start of all the sequences.
    pub fn begin(&self) -> ZipCursor<T::Cursors<'_>> {
        ZipCursor::new(self.sequences.begins())
    }

    /// Returns a cursor past the end of all the sequences.
    pub fn end(&self) -> ZipCursor<T::Cursors<'_>> {
        ZipCursor::new(self.sequences.ends())
    }

    /// Returns an iterator over tuples of references to the elements of the
    /// sequences.
    pub fn iter(&self) -> CursorRange<ZipCursor<T::Cursors<'_>>> {
        CursorRange::new(self.begin(), self.end())
    }

    /// The traversal capability of this zip's cursors.
    pub fn capability(&self) -> CapabilityKind {
        fn kind_of<C: Cursor>(_: &C) -> CapabilityKind {
            <C::Capability as Capability>::KIND
        }
        kind_of(&self.begin())
    }

    /// Length of the shortest sequence.
    pub fn len(&self) -> usize
    where
        T: SizedSequenceTuple,
    {
        self.sequences.min_len()
    }

    /// Whether the shortest sequence is empty.
    pub fn is_empty(&self) -> bool
    where
        T: SizedSequenceTuple,
    {
        self.len() == 0
    }
}

impl<T: SequenceMutTuple> Zip<T> {
    /// Returns an iterator over tuples of mutable references to the elements
    /// of the sequences.
    pub fn iter_mut(&mut self) -> ZipMut<T::IterMuts<'_>> {
        ZipMut::new(self.sequences.iter_muts())
    }
}

impl<T> Zip<T> {
    /// Returns the zipped sequences. Owned sequences are borrowed from this
    /// zip, and borrowed sequences are returned as the original references.
    pub fn containers(&self) -> &T {
        &self.sequences
    }

    /// Returns the zipped sequences mutably.
    ///
    /// Mutating an owned sequence only affects this zip, while mutating
    /// through a `&mut` sequence affects the caller's sequence.
    pub fn containers_mut(&mut self) -> &mut T {
        &mut self.sequences
    }

    /// Consumes this zip and returns the zipped sequences.
    pub fn into_containers(self) -> T {
        self.sequences
    }
}

impl<T: SequenceTuple> From<T> for Zip<T> {
    fn from(sequences: T) -> Self {
        Zip::new(sequences)
    }
}

impl<'a, T: SequenceTuple + 'a> IntoIterator for &'a Zip<T> {
    type Item = <T::Cursors<'a> as CursorTuple>::Refs;
    type IntoIter = CursorRange<ZipCursor<T::Cursors<'a>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: SequenceMutTuple + 'a> IntoIterator for &'a mut Zip<T> {
    type Item = <T::IterMuts<'a> as IteratorTuple>::Items;
    type IntoIter = ZipMut<T::IterMuts<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

macro_rules! sequence_tuple {
    ( $($seq:ident $i:tt),+ ) => {
        impl<$($seq: Sequence),+> SequenceTuple for ($($seq,)+) {
            const ARITY: usize = count!($($i),+);

            type Cursors<'a> = ($($seq::Cursor<'a>,)+)
            where
                Self: 'a;

            fn begins(&self) -> Self::Cursors<'_> {
                ( $(self.$i.begin(),)+ )
            }

            fn ends(&self) -> Self::Cursors<'_> {
                ( $(self.$i.end(),)+ )
            }
        }

        impl<$($seq: SizedSequence),+> SizedSequenceTuple for ($($seq,)+) {
            fn min_len(&self) -> usize {
                let lens = ( $(self.$i.len(),)+ );
                min_of!(lens, $($i),+)
            }

            fn same_len(&self) -> bool {
                let lens = ( $(self.$i.len(),)+ );
                all_eq!(lens, $($i),+)
            }
        }

        impl<$($seq: SequenceMut),+> SequenceMutTuple for ($($seq,)+) {
            type IterMuts<'a> = ($($seq::IterMut<'a>,)+)
            where
                Self: 'a;

            fn iter_muts(&mut self) -> Self::IterMuts<'_> {
                ( $(self.$i.iter_mut(),)+ )
            }
        }
    }
}

sequence_tuple!(A 0);
sequence_tuple!(A 0, B 1);
sequence_tuple!(A 0, B 1, C 2);
sequence_tuple!(A 0, B 1, C 2, D 3);
sequence_tuple!(A 0, B 1, C 2, D 3, E 4);
sequence_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
sequence_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
sequence_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
sequence_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
sequence_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
sequence_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
sequence_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);

#[cfg(test)]
mod test {
    use super::*;
    use crate::capability::{BidirectionalTag, ForwardTag};
    use crate::cursor::BidirectionalCursor;
    use crate::InputSequence;
    use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};

    fn assert_capability<C: Cursor<Capability = K>, K>(_: &C) {}

    #[test]
    fn borrowed_slots() {
        let v = vec![1.0f32, 2.0, 3.0];
        let l: LinkedList<_> = [1, 2, 3].into_iter().collect();
        let zip = Zip::new((&v, &l));
        let _: &(&Vec<f32>, &LinkedList<i32>) = zip.containers();
    }

    #[test]
    fn owned_slots() {
        let v = vec![1.0f32, 2.0, 3.0];
        let l: LinkedList<_> = [1, 2, 3].into_iter().collect();
        let zip = Zip::new((v, l));
        let containers: &(Vec<f32>, LinkedList<i32>) = zip.containers();
        assert_eq!(containers.0.len(), 3);
        assert_eq!(containers.1.len(), 3);
    }

    #[test]
    fn mixed_slots() {
        let v = vec![1.0f32, 2.0, 3.0];
        let l: LinkedList<_> = [1, 2, 3].into_iter().collect();
        let s: HashSet<_> = [1, 2, 3].into_iter().collect();
        let zip = Zip::new((v, &l, s));
        let _: &(Vec<f32>, &LinkedList<i32>, HashSet<i32>) = zip.containers();
        assert_eq!(zip.len(), 3);
    }

    #[test]
    fn mutate_borrowed_slot() {
        let mut v = vec![1, 2, 3];
        let l: LinkedList<_> = [1, 2, 3].into_iter().collect();
        let mut zip = Zip::new((&mut v, &l));
        zip.containers_mut().0[0] = 5;
        assert_eq!(zip.begin().get(), (&5, &1));
        drop(zip);
        assert_eq!(v[0], 5);
    }

    #[test]
    fn mutate_owned_slot() {
        let v = vec![1, 2, 3];
        let mut zip = Zip::new((v.clone(), [1, 2, 3]));
        zip.containers_mut().0[0] = 5;
        assert_eq!(zip.iter().next(), Some((&5, &1)));
        assert_eq!(v, [1, 2, 3]);
        let (owned, _) = zip.into_containers();
        assert_eq!(owned, [5, 2, 3]);
    }

    #[test]
    fn iterate_by_reference() {
        let v = vec![1, 2, 3];
        let f = vec![1.0, 2.0, 3.0];
        let zip = Zip::new((&v, &f));
        let mut collected = Vec::new();
        for (a, b) in &zip {
            collected.push((*a, *b));
        }
        assert_eq!(collected, [(1, 1.0), (2, 2.0), (3, 3.0)]);
    }

    #[test]
    fn iterate_backward() {
        let v = vec![1, 2, 3];
        let l: LinkedList<_> = [1.0, 2.0, 3.0].into_iter().collect();
        let zip = Zip::new((v, l));
        assert_eq!(
            zip.iter().rev().collect::<Vec<_>>(),
            [(&3, &3.0), (&2, &2.0), (&1, &1.0)]
        );
        let mut end = zip.end();
        end.retreat();
        assert_eq!(end.get(), (&3, &3.0));
    }

    #[test]
    fn stops_at_shortest() {
        let long = vec![1, 2, 3, 4, 5];
        let short: BTreeSet<_> = ["a", "b"].into_iter().collect();
        let zip = Zip::new((&long, &short));
        assert_eq!(zip.len(), 2);
        assert_eq!(zip.iter().collect::<Vec<_>>(), [(&1, &"a"), (&2, &"b")]);

        let zip = Zip::new((&short, &long));
        assert_eq!(zip.iter().count(), 2);
    }

    #[test]
    fn exact_size_hint() {
        let long = vec![1, 2, 3, 4, 5];
        let short: VecDeque<_> = (0..3).collect();
        let zip = Zip::new((&long, &short));
        let mut iter = zip.iter();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }

    #[test]
    #[should_panic(expected = "called Zip::new_eq() with sequences of different lengths")]
    fn new_eq_rejects_different_lengths() {
        let _ = Zip::new_eq((vec![1, 2, 3], [1, 2]));
    }

    #[test]
    fn new_eq_accepts_same_lengths() {
        let zip = Zip::new_eq((vec![1, 2, 3], [4, 5, 6], VecDeque::from([7, 8, 9])));
        assert_eq!(zip.len(), 3);
        assert!(!zip.is_empty());
        assert_eq!(
            zip.iter().map(|(a, b, c)| a + b + c).collect::<Vec<_>>(),
            [12, 15, 18]
        );
    }

    #[test]
    fn capability() {
        let v = vec![1, 2, 3];
        let l: LinkedList<_> = [1, 2, 3].into_iter().collect();
        let s: HashSet<_> = [1, 2, 3].into_iter().collect();

        let zip = Zip::new((&v,));
        assert_eq!(zip.capability(), CapabilityKind::RandomAccess);

        let zip = Zip::new((&l,));
        assert_capability::<_, BidirectionalTag>(&zip.begin());
        assert_eq!(zip.capability(), CapabilityKind::Bidirectional);

        let zip = Zip::new((&v, &l, &s));
        assert_capability::<_, ForwardTag>(&zip.begin());
        assert_eq!(zip.capability(), CapabilityKind::Forward);

        let chars = InputSequence::new("xyz".chars());
        let zip = Zip::new((&v, chars));
        assert_eq!(zip.capability(), CapabilityKind::Forward);
        assert_eq!(
            zip.iter().collect::<Vec<_>>(),
            [(&1, 'x'), (&2, 'y'), (&3, 'z')]
        );
    }

    #[test]
    fn iter_mut() {
        let mut totals = vec![0; 4];
        let mut zip = Zip::new((
            &mut totals,
            VecDeque::from([1, 2, 3]),
            LinkedList::from([10, 20, 30, 40]),
        ));
        for (total, a, b) in &mut zip {
            *total = *a + *b;
            *a = 0;
        }
        assert_eq!(zip.containers().1, [0, 0, 0]);
        drop(zip);
        assert_eq!(totals, [11, 22, 33, 0]);
    }

    #[test]
    fn iter_mut_backward() {
        let mut v = vec![1, 2, 3, 4, 5];
        let mut d = VecDeque::from([10, 20, 30]);
        let mut l = LinkedList::from([100, 200, 300, 400]);
        let mut zip = Zip::new((&mut v, &mut d, &mut l));
        assert_eq!(zip.iter_mut().len(), 3);

        let mut order = Vec::new();
        for (a, b, c) in zip.iter_mut().rev() {
            order.push((*a, *b, *c));
            *a += *b + *c;
        }
        assert_eq!(order, [(3, 30, 300), (2, 20, 200), (1, 10, 100)]);
        drop(zip);
        assert_eq!(v, [111, 222, 333, 4, 5]);
        assert_eq!(d, [10, 20, 30]);
        assert_eq!(l, LinkedList::from([100, 200, 300, 400]));
    }

    #[test]
    fn from_and_zip() {
        let v = [1, 2];
        let zip: Zip<_> = (&v, &v).into();
        assert_eq!(zip.iter().count(), 2);
        let zip = (&v, &v).zip();
        assert_eq!(zip.begin(), zip.begin());
        let zip = (&v, &v).zip_eq();
        assert_eq!(zip.len(), 2);
    }

    #[test]
    fn empty_sequences() {
        let zip = Zip::new((Vec::<i32>::new(), LinkedList::<i32>::new()));
        assert!(zip.is_empty());
        assert_eq!(zip.begin(), zip.end());
        assert_eq!(zip.iter().next(), None);
        assert_eq!(zip.iter().next_back(), None);
    }

    fn arity_of<T: SequenceTuple>(_: &T) -> usize {
        T::ARITY
    }

    #[test]
    fn arity() {
        assert_eq!(<(Vec<i32>,) as SequenceTuple>::ARITY, 1);
        assert_eq!(
            <(Vec<i32>, &[u8], LinkedList<f32>) as SequenceTuple>::ARITY,
            3
        );
        let x = [0u8];
        let twelve = (&x, &x, &x, &x, &x, &x, &x, &x, &x, &x, &x, &x);
        assert_eq!(Zip::new(twelve).iter().count(), 1);
        assert_eq!(arity_of(&twelve), 12);
    }

    #[test]
    fn single_sequence_lengths() {
        let zip = Zip::new_eq((vec![1, 2, 3],));
        assert_eq!(zip.len(), 3);
        assert!(zip.containers().same_len());
        assert_eq!(zip.containers().min_len(), 3);
    }
}
