// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::Sequence;
use crate::capability::ForwardTag;
use crate::cursor::Cursor;
use crate::probe::SizedSequence;
use std::collections::hash_map::RandomState;
use std::collections::hash_set::{self, HashSet};
use std::fmt;

/// A forward cursor into a [`HashSet`], in the set's iteration order.
pub struct HashSetCursor<'a, T, S = RandomState> {
    set: &'a HashSet<T, S>,
    // Yields the elements from `position` onwards. Unused at the end.
    tail: hash_set::Iter<'a, T>,
    position: usize,
}

impl<T, S> HashSetCursor<'_, T, S> {
    /// Number of elements before this cursor in the set's iteration order.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<T, S> Clone for HashSetCursor<'_, T, S> {
    fn clone(&self) -> Self {
        Self {
            set: self.set,
            tail: self.tail.clone(),
            position: self.position,
        }
    }
}

impl<T, S> PartialEq for HashSetCursor<'_, T, S> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.set, other.set) && self.position == other.position
    }
}

impl<T, S> Eq for HashSetCursor<'_, T, S> {}

impl<T, S> fmt::Debug for HashSetCursor<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSetCursor")
            .field("position", &self.position)
            .field("len", &self.set.len())
            .finish()
    }
}

impl<'a, T, S> Cursor for HashSetCursor<'a, T, S> {
    type Capability = ForwardTag;
    type Item = T;
    type Ref = &'a T;

    fn get(&self) -> &'a T {
        assert!(
            self.position < self.set.len(),
            "dereferenced a set cursor at the end"
        );
        match self.tail.clone().next() {
            Some(item) => item,
            None => unreachable!(),
        }
    }

    fn advance(&mut self) {
        assert!(
            self.position < self.set.len(),
            "advanced a set cursor past the end"
        );
        self.tail.next();
        self.position += 1;
    }

    fn remaining(&self, end: &Self) -> Option<usize> {
        Some(end.position.saturating_sub(self.position))
    }
}

impl<T, S> Sequence for HashSet<T, S> {
    type Cursor<'a> = HashSetCursor<'a, T, S>
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor<'_> {
        HashSetCursor {
            set: self,
            tail: self.iter(),
            position: 0,
        }
    }

    fn end(&self) -> Self::Cursor<'_> {
        HashSetCursor {
            set: self,
            tail: self.iter(),
            position: self.len(),
        }
    }
}

impl<T, S> SizedSequence for HashSet<T, S> {
    fn len(&self) -> usize {
        HashSet::len(self)
    }
}
