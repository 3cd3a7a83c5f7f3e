// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::Sequence;
use crate::capability::InputTag;
use crate::cursor::Cursor;
use std::fmt;

/// A sequence backed by a single-pass [`Iterator`].
///
/// Each call to [`begin()`](Sequence::begin) replays a fresh copy of the
/// iterator, whose cursors only declare the [`InputTag`] capability. The
/// number of elements isn't known upfront, so this sequence isn't a
/// [`SizedSequence`](crate::SizedSequence).
///
/// ```
/// # use lockstep::{Cursor, InputSequence, Sequence};
/// let squares = InputSequence::new((1..=3).map(|x| x * x));
/// let mut cursor = squares.begin();
/// assert_eq!(cursor.get(), 1);
/// cursor.advance();
/// assert_eq!(cursor.get(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct InputSequence<I> {
    iter: I,
}

impl<I: Iterator + Clone> InputSequence<I> {
    /// Wraps the given iterator.
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter(),
        }
    }
}

/// A cursor over a single-pass [`Iterator`], that yields items by value.
///
/// Two cursors are equal when both are exhausted, or when both have consumed
/// the same number of items.
pub struct InputCursor<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
    consumed: usize,
}

impl<I: Iterator> InputCursor<I> {
    /// Creates a cursor at the first item of the iterator.
    pub fn new(mut iter: I) -> Self {
        let current = iter.next();
        Self {
            iter,
            current,
            consumed: 0,
        }
    }

    /// Creates an exhausted cursor.
    pub fn exhausted(iter: I) -> Self {
        Self {
            iter,
            current: None,
            consumed: 0,
        }
    }

    /// Whether the iterator is exhausted.
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }
}

impl<I> Clone for InputCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            current: self.current.clone(),
            consumed: self.consumed,
        }
    }
}

impl<I: Iterator> PartialEq for InputCursor<I> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_exhausted(), other.is_exhausted()) {
            (true, true) => true,
            (false, false) => self.consumed == other.consumed,
            _ => false,
        }
    }
}

impl<I: Iterator> fmt::Debug for InputCursor<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputCursor")
            .field("consumed", &self.consumed)
            .field("exhausted", &self.is_exhausted())
            .finish()
    }
}

impl<I> Cursor for InputCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Capability = InputTag;
    type Item = I::Item;
    type Ref = I::Item;

    fn get(&self) -> I::Item {
        match &self.current {
            Some(item) => item.clone(),
            None => panic!("dereferenced an exhausted input cursor"),
        }
    }

    fn advance(&mut self) {
        assert!(!self.is_exhausted(), "advanced an exhausted input cursor");
        self.current = self.iter.next();
        self.consumed += 1;
    }
}

impl<I> Sequence for InputSequence<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Cursor<'a> = InputCursor<I>
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor<'_> {
        InputCursor::new(self.iter.clone())
    }

    fn end(&self) -> Self::Cursor<'_> {
        InputCursor::exhausted(self.iter.clone())
    }
}
