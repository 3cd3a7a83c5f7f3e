// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::Sequence;
use crate::capability::BidirectionalTag;
use crate::cursor::{BidirectionalCursor, Cursor};
use crate::probe::SizedSequence;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Bound;

/// A bidirectional cursor into a [`BTreeSet`], in ascending order.
///
/// Moving the cursor is a logarithmic-time lookup of the neighboring element.
pub struct BTreeSetCursor<'a, T> {
    set: &'a BTreeSet<T>,
    // `None` at the end.
    current: Option<&'a T>,
}

impl<T> Clone for BTreeSetCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for BTreeSetCursor<'_, T> {}

impl<T> PartialEq for BTreeSetCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.set, other.set)
            && match (self.current, other.current) {
                (Some(a), Some(b)) => std::ptr::eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl<T> Eq for BTreeSetCursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for BTreeSetCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BTreeSetCursor")
            .field("current", &self.current)
            .finish()
    }
}

impl<'a, T: Ord> Cursor for BTreeSetCursor<'a, T> {
    type Capability = BidirectionalTag;
    type Item = T;
    type Ref = &'a T;

    fn get(&self) -> &'a T {
        match self.current {
            Some(item) => item,
            None => panic!("dereferenced a set cursor at the end"),
        }
    }

    fn advance(&mut self) {
        let Some(current) = self.current else {
            panic!("advanced a set cursor past the end");
        };
        self.current = self
            .set
            .range::<T, _>((Bound::Excluded(current), Bound::Unbounded))
            .next();
    }
}

impl<T: Ord> BidirectionalCursor for BTreeSetCursor<'_, T> {
    fn retreat(&mut self) {
        let previous = match self.current {
            Some(current) => self.set.range::<T, _>(..current).next_back(),
            None => self.set.last(),
        };
        match previous {
            Some(_) => self.current = previous,
            None => panic!("retreated a set cursor before the start"),
        }
    }
}

impl<T: Ord> Sequence for BTreeSet<T> {
    type Cursor<'a> = BTreeSetCursor<'a, T>
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor<'_> {
        BTreeSetCursor {
            set: self,
            current: self.first(),
        }
    }

    fn end(&self) -> Self::Cursor<'_> {
        BTreeSetCursor {
            set: self,
            current: None,
        }
    }
}

impl<T: Ord> SizedSequence for BTreeSet<T> {
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}
