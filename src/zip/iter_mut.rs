// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::macros::min_of;
use std::iter::FusedIterator;

/// A [tuple](tuple) of [`Iterator`]s (with up to 12 elements) that can be
/// advanced in lockstep.
pub trait IteratorTuple {
    /// Item types of the iterators.
    type Items;

    /// Advances all the iterators in order, returning [`None`] as soon as one
    /// of them is exhausted.
    fn next_all(&mut self) -> Option<Self::Items>;

    /// Combined size hint: the tightest bounds among the iterators.
    fn size_hint_all(&self) -> (usize, Option<usize>);
}

/// An [`IteratorTuple`] made of [`ExactSizeIterator`]s.
pub trait ExactSizeIteratorTuple: IteratorTuple {
    /// Length of the shortest iterator.
    fn len_all(&self) -> usize;
}

/// An [`ExactSizeIteratorTuple`] made of [`DoubleEndedIterator`]s.
pub trait DoubleEndedIteratorTuple: ExactSizeIteratorTuple {
    /// Trims the longer iterators from the back down to the length of the
    /// shortest one, then takes the last element of each iterator.
    fn next_back_all(&mut self) -> Option<Self::Items>;
}

/// An iterator over mutable references to the elements of the sequences of a
/// [`Zip`](super::Zip), in lockstep. This struct is created by the
/// [`iter_mut()`](super::Zip::iter_mut) method on [`Zip`](super::Zip).
///
/// Iteration stops as soon as any sequence is exhausted. When all the
/// sequences can be iterated from the back with a known length, so can this
/// iterator: the trailing elements of the longer sequences are skipped, so
/// that items stay aligned from the front as with [`Iterator::zip()`].
///
/// ```
/// # use lockstep::Zip;
/// # use std::collections::VecDeque;
/// let mut totals = vec![0, 0, 0];
/// let increments: VecDeque<_> = (1..=3).collect();
///
/// let mut zip = Zip::new((&mut totals, increments));
/// for (total, increment) in zip.iter_mut() {
///     *total += *increment;
/// }
/// drop(zip);
/// assert_eq!(totals, [1, 2, 3]);
///
/// let mut left = vec![1, 2, 3, 4];
/// let mut right: VecDeque<_> = (10..=30).step_by(10).collect();
/// let mut zip = Zip::new((&mut left, &mut right));
/// let last = zip.iter_mut().next_back();
/// assert_eq!(last, Some((&mut 3, &mut 30)));
/// ```
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ZipMut<I> {
    iters: I,
}

impl<I: IteratorTuple> ZipMut<I> {
    pub(crate) fn new(iters: I) -> Self {
        Self { iters }
    }
}

impl<I: IteratorTuple> Iterator for ZipMut<I> {
    type Item = I::Items;

    fn next(&mut self) -> Option<Self::Item> {
        self.iters.next_all()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iters.size_hint_all()
    }
}

impl<I: DoubleEndedIteratorTuple> DoubleEndedIterator for ZipMut<I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iters.next_back_all()
    }
}

impl<I: ExactSizeIteratorTuple> ExactSizeIterator for ZipMut<I> {
    fn len(&self) -> usize {
        self.iters.len_all()
    }
}

impl<I: IteratorTuple> FusedIterator for ZipMut<I> where I: FusedIteratorTuple {}

/// An [`IteratorTuple`] made of [`FusedIterator`]s.
pub trait FusedIteratorTuple: IteratorTuple {}

fn min_upper(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

macro_rules! iterator_tuple {
    ( $($iter:ident $i:tt),+ ) => {
        impl<$($iter: Iterator),+> IteratorTuple for ($($iter,)+) {
            type Items = ($($iter::Item,)+);

            fn next_all(&mut self) -> Option<Self::Items> {
                Some(( $(self.$i.next()?,)+ ))
            }

            fn size_hint_all(&self) -> (usize, Option<usize>) {
                let hints = ( $(self.$i.size_hint(),)+ );
                let lower = ( $(hints.$i.0,)+ );
                let mut upper = None;
                $( upper = min_upper(upper, hints.$i.1); )+
                (min_of!(lower, $($i),+), upper)
            }
        }

        impl<$($iter: ExactSizeIterator),+> ExactSizeIteratorTuple for ($($iter,)+) {
            fn len_all(&self) -> usize {
                let lens = ( $(self.$i.len(),)+ );
                min_of!(lens, $($i),+)
            }
        }

        impl<$($iter),+> DoubleEndedIteratorTuple for ($($iter,)+)
        where
            $($iter: DoubleEndedIterator + ExactSizeIterator,)+
        {
            fn next_back_all(&mut self) -> Option<Self::Items> {
                let len = self.len_all();
                $(
                    let excess = self.$i.len() - len;
                    if excess != 0 {
                        self.$i.nth_back(excess - 1);
                    }
                )+
                Some(( $(self.$i.next_back()?,)+ ))
            }
        }

        impl<$($iter: FusedIterator),+> FusedIteratorTuple for ($($iter,)+) {}
    }
}

iterator_tuple!(A 0);
iterator_tuple!(A 0, B 1);
iterator_tuple!(A 0, B 1, C 2);
iterator_tuple!(A 0, B 1, C 2, D 3);
iterator_tuple!(A 0, B 1, C 2, D 3, E 4);
iterator_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
iterator_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
iterator_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
iterator_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
iterator_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
iterator_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
iterator_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);
