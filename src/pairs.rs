// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Traversal of the adjacent pairs of a sequence.

use crate::cursor::{BidirectionalCursor, Cursor, CursorRange};
use crate::macros::log_debug;
use crate::probe::SizedSequence;
use crate::source::Sequence;
use crate::zip::ZipCursor;

/// A sequence viewed as its adjacent pairs of elements `(x[i], x[i + 1])`.
///
/// The pairs are traversed with a [`ZipCursor`] made of two cursors into the
/// same sequence, one position apart. The sequence must support
/// [bidirectional](BidirectionalCursor) traversal, and can be owned or
/// borrowed like the sequences of a [`Zip`](crate::Zip).
///
/// ```
/// # use lockstep::Pairs;
/// # use std::collections::LinkedList;
/// let values: LinkedList<_> = [1, 4, 9, 16].into_iter().collect();
/// let pairs = Pairs::new(&values);
///
/// let deltas = pairs.iter().map(|(a, b)| b - a).collect::<Vec<_>>();
/// assert_eq!(deltas, [3, 5, 7]);
/// assert_eq!(pairs.iter().next_back(), Some((&9, &16)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pairs<S> {
    sequence: S,
}

impl<S: Sequence> Pairs<S> {
    /// Views the given sequence as its adjacent pairs.
    pub fn new(sequence: S) -> Self {
        log_debug!("pairing adjacent elements of a sequence");
        Self { sequence }
    }

    /// Returns a cursor to the first pair.
    ///
    /// For sequences with fewer than two elements, this is equal to
    /// [`end()`](Self::end).
    pub fn begin<'a>(&'a self) -> ZipCursor<(S::Cursor<'a>, S::Cursor<'a>)>
    where
        S::Cursor<'a>: BidirectionalCursor,
    {
        let first = self.sequence.begin();
        if first == self.sequence.end() {
            return ZipCursor::new((first.clone(), first));
        }
        let mut second = first.clone();
        second.advance();
        ZipCursor::new((first, second))
    }

    /// Returns a cursor past the last pair.
    pub fn end<'a>(&'a self) -> ZipCursor<(S::Cursor<'a>, S::Cursor<'a>)>
    where
        S::Cursor<'a>: BidirectionalCursor,
    {
        let last = self.sequence.end();
        if last == self.sequence.begin() {
            return ZipCursor::new((last.clone(), last));
        }
        let mut before_last = last.clone();
        before_last.retreat();
        ZipCursor::new((before_last, last))
    }

    /// Returns an iterator over the adjacent pairs.
    pub fn iter<'a>(&'a self) -> CursorRange<ZipCursor<(S::Cursor<'a>, S::Cursor<'a>)>>
    where
        S::Cursor<'a>: BidirectionalCursor,
    {
        CursorRange::new(self.begin(), self.end())
    }

    /// Number of adjacent pairs.
    pub fn len(&self) -> usize
    where
        S: SizedSequence,
    {
        self.sequence.len().saturating_sub(1)
    }

    /// Whether there are no adjacent pairs, i.e. the sequence contains fewer
    /// than two elements.
    pub fn is_empty(&self) -> bool
    where
        S: SizedSequence,
    {
        self.len() == 0
    }
}

impl<S> Pairs<S> {
    /// Returns the underlying sequence.
    pub fn inner(&self) -> &S {
        &self.sequence
    }

    /// Consumes this view and returns the underlying sequence.
    pub fn into_inner(self) -> S {
        self.sequence
    }
}

impl<'a, S> IntoIterator for &'a Pairs<S>
where
    S: Sequence + 'a,
    S::Cursor<'a>: BidirectionalCursor,
{
    type Item = (
        <S::Cursor<'a> as Cursor>::Ref,
        <S::Cursor<'a> as Cursor>::Ref,
    );
    type IntoIter = CursorRange<ZipCursor<(S::Cursor<'a>, S::Cursor<'a>)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
