// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::{Sequence, SequenceMut};
use crate::capability::RandomAccessTag;
use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::probe::SizedSequence;
use std::fmt;

/// A random access cursor into a [slice](slice). This is the cursor type of
/// slices, arrays and [`Vec`]s.
///
/// ```
/// # use lockstep::{Cursor, RandomAccessCursor, Sequence};
/// let input = [10, 20, 30, 40];
/// let mut cursor = input.begin();
/// cursor.jump(3);
/// assert_eq!(cursor.get(), &40);
/// assert_eq!(cursor.distance_to(&input.end()), 1);
/// ```
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Creates a cursor at the given index of the slice. The index may be
    /// equal to the slice length, to represent the end.
    pub fn new(slice: &'a [T], index: usize) -> Self {
        assert!(
            index <= slice.len(),
            "created a slice cursor beyond the end of the slice"
        );
        Self { slice, index }
    }

    /// Index of this cursor in the slice.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.slice, other.slice) && self.index == other.index
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Capability = RandomAccessTag;
    type Item = T;
    type Ref = &'a T;

    fn get(&self) -> &'a T {
        &self.slice[self.index]
    }

    fn advance(&mut self) {
        assert!(
            self.index < self.slice.len(),
            "advanced a slice cursor past the end"
        );
        self.index += 1;
    }

    fn remaining(&self, end: &Self) -> Option<usize> {
        Some(end.index.saturating_sub(self.index))
    }
}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
    fn retreat(&mut self) {
        assert_ne!(self.index, 0, "retreated a slice cursor before the start");
        self.index -= 1;
    }
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
    fn jump(&mut self, offset: isize) {
        let index = self.index.checked_add_signed(offset);
        match index {
            Some(index) if index <= self.slice.len() => self.index = index,
            _ => panic!("jumped a slice cursor out of bounds"),
        }
    }

    fn distance_to(&self, other: &Self) -> isize {
        other.index as isize - self.index as isize
    }
}

impl<T> Sequence for [T] {
    type Cursor<'a> = SliceCursor<'a, T>
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor<'_> {
        SliceCursor::new(self, 0)
    }

    fn end(&self) -> Self::Cursor<'_> {
        SliceCursor::new(self, self.len())
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Cursor<'a> = SliceCursor<'a, T>
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor<'_> {
        SliceCursor::new(self, 0)
    }

    fn end(&self) -> Self::Cursor<'_> {
        SliceCursor::new(self, N)
    }
}

impl<T> Sequence for Vec<T> {
    type Cursor<'a> = SliceCursor<'a, T>
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor<'_> {
        SliceCursor::new(self, 0)
    }

    fn end(&self) -> Self::Cursor<'_> {
        SliceCursor::new(self, self.len())
    }
}

impl<T> SequenceMut for [T] {
    type IterMut<'a> = std::slice::IterMut<'a, T>
    where
        Self: 'a;

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        <[T]>::iter_mut(self)
    }
}

impl<T, const N: usize> SequenceMut for [T; N] {
    type IterMut<'a> = std::slice::IterMut<'a, T>
    where
        Self: 'a;

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        <[T]>::iter_mut(self)
    }
}

impl<T> SequenceMut for Vec<T> {
    type IterMut<'a> = std::slice::IterMut<'a, T>
    where
        Self: 'a;

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        <[T]>::iter_mut(self)
    }
}

impl<T> SizedSequence for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T, const N: usize> SizedSequence for [T; N] {
    fn len(&self) -> usize {
        N
    }
}

impl<T> SizedSequence for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}
