// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::{BidirectionalCursor, Cursor};
use std::iter::FusedIterator;

/// An [`Iterator`] over the half-open range between two cursors.
///
/// Iteration stops as soon as the front cursor [meets](Cursor::meets) the
/// back cursor. The range is a [`DoubleEndedIterator`] when the cursors are
/// [`BidirectionalCursor`]s.
///
/// ```
/// # use lockstep::{CursorRange, Sequence};
/// let input = vec![1, 2, 3, 4];
/// let range = CursorRange::new(input.begin(), input.end());
/// assert_eq!(range.rev().copied().collect::<Vec<_>>(), [4, 3, 2, 1]);
/// ```
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct CursorRange<C> {
    front: C,
    back: C,
}

impl<C: Cursor> CursorRange<C> {
    /// Creates a range from `front` (included) to `back` (excluded).
    pub fn new(front: C, back: C) -> Self {
        Self { front, back }
    }

    /// Current front cursor, pointing to the next item to yield.
    pub fn front(&self) -> &C {
        &self.front
    }

    /// Current back cursor, pointing past the last item to yield.
    pub fn back(&self) -> &C {
        &self.back
    }

    /// Returns the current front and back cursors.
    pub fn into_bounds(self) -> (C, C) {
        (self.front, self.back)
    }
}

impl<C: Cursor> Iterator for CursorRange<C> {
    type Item = C::Ref;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front.meets(&self.back) {
            return None;
        }
        let item = self.front.get();
        self.front.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.front.remaining(&self.back) {
            Some(remaining) => (remaining, Some(remaining)),
            None => (0, None),
        }
    }
}

impl<C: BidirectionalCursor> DoubleEndedIterator for CursorRange<C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front.meets(&self.back) {
            return None;
        }
        self.back.retreat();
        Some(self.back.get())
    }
}

impl<C: Cursor> FusedIterator for CursorRange<C> {}
