// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::{Sequence, SequenceMut};
use crate::capability::BidirectionalTag;
use crate::cursor::{BidirectionalCursor, Cursor};
use crate::probe::SizedSequence;
use std::collections::linked_list::{self, LinkedList};
use std::fmt;

/// A bidirectional cursor into a [`LinkedList`].
///
/// Walking in a single direction takes constant time per step, whether forward
/// from the start or backward from the end. Reversing the direction of travel
/// re-seeks from the nearest end of the list.
pub struct LinkedListCursor<'a, T> {
    list: &'a LinkedList<T>,
    walk: Walk<'a, T>,
    index: usize,
}

/// Iterator state of a list cursor, depending on the direction of travel.
enum Walk<'a, T> {
    /// Yields the elements from `index` onwards.
    Forward { tail: linked_list::Iter<'a, T> },
    /// Yields the elements before `index`. `current` is the element at
    /// `index`, if any.
    Backward {
        head: linked_list::Iter<'a, T>,
        current: Option<&'a T>,
    },
}

impl<T> Clone for Walk<'_, T> {
    fn clone(&self) -> Self {
        match self {
            Walk::Forward { tail } => Walk::Forward { tail: tail.clone() },
            Walk::Backward { head, current } => Walk::Backward {
                head: head.clone(),
                current: *current,
            },
        }
    }
}

impl<'a, T> LinkedListCursor<'a, T> {
    /// Iterator over the elements from `index` onwards.
    fn tail_from(list: &'a LinkedList<T>, index: usize) -> linked_list::Iter<'a, T> {
        let mut tail = list.iter();
        if index != 0 {
            tail.nth(index - 1);
        }
        tail
    }

    /// Iterator over the elements before `index`.
    fn head_before(list: &'a LinkedList<T>, index: usize) -> linked_list::Iter<'a, T> {
        let mut head = list.iter();
        let skip = list.len() - index;
        if skip != 0 {
            head.nth_back(skip - 1);
        }
        head
    }

    /// Index of this cursor in the list.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for LinkedListCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            walk: self.walk.clone(),
            index: self.index,
        }
    }
}

impl<T> PartialEq for LinkedListCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list) && self.index == other.index
    }
}

impl<T> Eq for LinkedListCursor<'_, T> {}

impl<T> fmt::Debug for LinkedListCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedListCursor")
            .field("index", &self.index)
            .field("len", &self.list.len())
            .finish()
    }
}

impl<'a, T> Cursor for LinkedListCursor<'a, T> {
    type Capability = BidirectionalTag;
    type Item = T;
    type Ref = &'a T;

    fn get(&self) -> &'a T {
        assert!(
            self.index < self.list.len(),
            "dereferenced a list cursor at the end"
        );
        let item = match &self.walk {
            Walk::Forward { tail } => tail.clone().next(),
            Walk::Backward { current, .. } => *current,
        };
        match item {
            Some(item) => item,
            None => unreachable!(),
        }
    }

    fn advance(&mut self) {
        assert!(
            self.index < self.list.len(),
            "advanced a list cursor past the end"
        );
        self.index += 1;
        match &mut self.walk {
            Walk::Forward { tail } => {
                tail.next();
            }
            Walk::Backward { .. } => {
                self.walk = Walk::Forward {
                    tail: Self::tail_from(self.list, self.index),
                };
            }
        }
    }

    fn remaining(&self, end: &Self) -> Option<usize> {
        Some(end.index.saturating_sub(self.index))
    }
}

impl<T> BidirectionalCursor for LinkedListCursor<'_, T> {
    fn retreat(&mut self) {
        assert_ne!(self.index, 0, "retreated a list cursor before the start");
        match &mut self.walk {
            Walk::Backward { head, current } => *current = head.next_back(),
            Walk::Forward { .. } => {
                let mut head = Self::head_before(self.list, self.index);
                let current = head.next_back();
                self.walk = Walk::Backward { head, current };
            }
        }
        self.index -= 1;
    }
}

impl<T> Sequence for LinkedList<T> {
    type Cursor<'a> = LinkedListCursor<'a, T>
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor<'_> {
        LinkedListCursor {
            list: self,
            walk: Walk::Forward { tail: self.iter() },
            index: 0,
        }
    }

    fn end(&self) -> Self::Cursor<'_> {
        LinkedListCursor {
            list: self,
            walk: Walk::Backward {
                head: self.iter(),
                current: None,
            },
            index: self.len(),
        }
    }
}

impl<T> SequenceMut for LinkedList<T> {
    type IterMut<'a> = linked_list::IterMut<'a, T>
    where
        Self: 'a;

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        LinkedList::iter_mut(self)
    }
}

impl<T> SizedSequence for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}
