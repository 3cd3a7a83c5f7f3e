// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sequences that provide cursors, and their implementations for the standard
//! collections.

mod btree_set;
mod hash_set;
mod input;
mod linked_list;
mod slice;
mod vec_deque;

use crate::cursor::Cursor;
pub use btree_set::BTreeSetCursor;
pub use hash_set::HashSetCursor;
pub use input::{InputCursor, InputSequence};
pub use linked_list::LinkedListCursor;
pub use slice::SliceCursor;
pub use vec_deque::VecDequeCursor;

/// A sequence that exposes cursors to its start and to its end.
///
/// This trait is implemented for the standard collections, and forwarded
/// through shared and mutable references, so that a
/// [`Zip`](crate::Zip) can either own or borrow each of its sequences.
///
/// ```
/// # use lockstep::{Cursor, Sequence};
/// let input = vec![1, 2, 3];
/// let mut cursor = input.begin();
/// assert_eq!(cursor.get(), &1);
/// cursor.advance();
/// cursor.advance();
/// cursor.advance();
/// assert!(cursor == input.end());
/// ```
pub trait Sequence {
    /// Cursor type into this sequence.
    type Cursor<'a>: Cursor
    where
        Self: 'a;

    /// Returns a cursor to the first element.
    fn begin(&self) -> Self::Cursor<'_>;

    /// Returns a cursor past the last element.
    fn end(&self) -> Self::Cursor<'_>;
}

/// A sequence whose elements can be mutated in order.
pub trait SequenceMut {
    /// Iterator over mutable references to the elements.
    type IterMut<'a>: Iterator
    where
        Self: 'a;

    /// Returns an iterator over mutable references to the elements.
    fn iter_mut(&mut self) -> Self::IterMut<'_>;
}

// Cursors into a shared borrow outlive the borrow of the reference itself.
impl<'s, S: Sequence + ?Sized> Sequence for &'s S {
    type Cursor<'a> = S::Cursor<'s>
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor<'_> {
        S::begin(*self)
    }

    fn end(&self) -> Self::Cursor<'_> {
        S::end(*self)
    }
}

impl<'s, S: Sequence + ?Sized> Sequence for &'s mut S {
    type Cursor<'a> = S::Cursor<'a>
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor<'_> {
        (**self).begin()
    }

    fn end(&self) -> Self::Cursor<'_> {
        (**self).end()
    }
}

impl<'s, S: SequenceMut + ?Sized> SequenceMut for &'s mut S {
    type IterMut<'a> = S::IterMut<'a>
    where
        Self: 'a;

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        (**self).iter_mut()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Cursor<'a> = S::Cursor<'a>
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor<'_> {
        (**self).begin()
    }

    fn end(&self) -> Self::Cursor<'_> {
        (**self).end()
    }
}

impl<S: SequenceMut + ?Sized> SequenceMut for Box<S> {
    type IterMut<'a> = S::IterMut<'a>
    where
        Self: 'a;

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        (**self).iter_mut()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::capability::{Capability, CapabilityKind};

    fn kind_of<S: Sequence>(sequence: &S) -> CapabilityKind {
        fn kind<C: Cursor>(_: &C) -> CapabilityKind {
            <C::Capability as Capability>::KIND
        }
        kind(&sequence.begin())
    }

    #[test]
    fn forwarded_through_references() {
        let mut input = vec![1, 2, 3];
        assert_eq!(kind_of(&input), CapabilityKind::RandomAccess);
        assert_eq!(kind_of(&&input), CapabilityKind::RandomAccess);
        assert_eq!(kind_of(&&mut input), CapabilityKind::RandomAccess);

        let borrowed = &input;
        assert!(borrowed.begin() == input.begin());
        assert!(borrowed.end() == input.end());
    }

    #[test]
    fn cursor_outlives_shared_reference() {
        let input = vec![1, 2, 3];
        let cursor = {
            let borrowed = &input;
            let reborrowed = &borrowed;
            reborrowed.begin()
        };
        assert_eq!(cursor.get(), &1);
    }

    #[test]
    fn forwarded_through_box() {
        let mut boxed: Box<[i32]> = vec![1, 2, 3].into_boxed_slice();
        assert_eq!(kind_of(&boxed), CapabilityKind::RandomAccess);
        assert_eq!(boxed.begin().get(), &1);
        for x in SequenceMut::iter_mut(&mut boxed) {
            *x += 1;
        }
        assert_eq!(*boxed, [2, 3, 4]);
    }

    #[test]
    fn iter_mut_through_reference() {
        let mut input = vec![1, 2, 3];
        let mut borrowed = &mut input;
        for x in SequenceMut::iter_mut(&mut borrowed) {
            *x *= 10;
        }
        assert_eq!(input, [10, 20, 30]);
    }
}
