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
use std::collections::VecDeque;
use std::fmt;

/// A random access cursor into a [`VecDeque`].
pub struct VecDequeCursor<'a, T> {
    deque: &'a VecDeque<T>,
    index: usize,
}

impl<T> VecDequeCursor<'_, T> {
    /// Index of this cursor in the deque.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for VecDequeCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VecDequeCursor<'_, T> {}

impl<T> PartialEq for VecDequeCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.deque, other.deque) && self.index == other.index
    }
}

impl<T> Eq for VecDequeCursor<'_, T> {}

impl<T> fmt::Debug for VecDequeCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VecDequeCursor")
            .field("index", &self.index)
            .field("len", &self.deque.len())
            .finish()
    }
}

impl<'a, T> Cursor for VecDequeCursor<'a, T> {
    type Capability = RandomAccessTag;
    type Item = T;
    type Ref = &'a T;

    fn get(&self) -> &'a T {
        &self.deque[self.index]
    }

    fn advance(&mut self) {
        assert!(
            self.index < self.deque.len(),
            "advanced a deque cursor past the end"
        );
        self.index += 1;
    }

    fn remaining(&self, end: &Self) -> Option<usize> {
        Some(end.index.saturating_sub(self.index))
    }
}

impl<T> BidirectionalCursor for VecDequeCursor<'_, T> {
    fn retreat(&mut self) {
        assert_ne!(self.index, 0, "retreated a deque cursor before the start");
        self.index -= 1;
    }
}

impl<T> RandomAccessCursor for VecDequeCursor<'_, T> {
    fn jump(&mut self, offset: isize) {
        match self.index.checked_add_signed(offset) {
            Some(index) if index <= self.deque.len() => self.index = index,
            _ => panic!("jumped a deque cursor out of bounds"),
        }
    }

    fn distance_to(&self, other: &Self) -> isize {
        other.index as isize - self.index as isize
    }
}

impl<T> Sequence for VecDeque<T> {
    type Cursor<'a> = VecDequeCursor<'a, T>
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor<'_> {
        VecDequeCursor {
            deque: self,
            index: 0,
        }
    }

    fn end(&self) -> Self::Cursor<'_> {
        VecDequeCursor {
            deque: self,
            index: self.len(),
        }
    }
}

impl<T> SequenceMut for VecDeque<T> {
    type IterMut<'a> = std::collections::vec_deque::IterMut<'a, T>
    where
        Self: 'a;

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        VecDeque::iter_mut(self)
    }
}

impl<T> SizedSequence for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}
