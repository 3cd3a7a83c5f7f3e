// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::capability::{CapabilitySet, Weakest};
use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};
use crate::macros::{count, log_trace, min_of, nearest_zero_of};

/// A [tuple](tuple) of [`Cursor`]s (with up to 12 elements) that can be moved
/// in lockstep.
///
/// You most likely won't need to interact with this trait directly: it is
/// the bound behind the [`Cursor`] implementation of [`ZipCursor`].
pub trait CursorTuple: Clone + PartialEq {
    /// Number of cursors in the tuple.
    const ARITY: usize;

    /// Capability tags of the cursors.
    type Capabilities: CapabilitySet;

    /// Value types of the cursors.
    type Items;

    /// Reference types of the cursors.
    type Refs;

    /// Dereferences all the cursors.
    fn get_all(&self) -> Self::Refs;

    /// Advances all the cursors by one position, in order.
    fn advance_all(&mut self);

    /// Whether any cursor meets its counterpart in `end`.
    fn any_meets(&self, end: &Self) -> bool;

    /// Minimal number of remaining positions, if known for every cursor.
    fn min_remaining(&self, end: &Self) -> Option<usize>;
}

/// A [`CursorTuple`] of [`BidirectionalCursor`]s.
pub trait BidirectionalCursorTuple: CursorTuple {
    /// Retreats all the cursors by one position, in order.
    fn retreat_all(&mut self);
}

/// A [`CursorTuple`] of [`RandomAccessCursor`]s.
pub trait RandomAccessCursorTuple: BidirectionalCursorTuple {
    /// Moves all the cursors by the same offset, in order.
    fn jump_all(&mut self, offset: isize);

    /// Distance from each cursor to its counterpart in `other` that is the
    /// closest to zero, so that swapping the two tuples negates the result.
    fn nearest_distance(&self, other: &Self) -> isize;
}

/// A cursor made of several cursors, moved in lockstep.
///
/// Dereferencing yields the tuple of the components' references, in order.
/// The declared [`Capability`](Cursor::Capability) is the weakest capability
/// of the components, so a `ZipCursor` only implements
/// [`BidirectionalCursor`] (resp. [`RandomAccessCursor`]) when all of its
/// components do.
///
/// Two `ZipCursor`s are equal when all their components are equal. A
/// traversal however stops as soon as any component reaches its end (see
/// [`meets()`](Cursor::meets)), so that zipping sequences of different
/// lengths stops at the shortest one.
///
/// ```
/// # use lockstep::{BidirectionalCursor, Cursor, Sequence, ZipCursor};
/// # use std::collections::LinkedList;
/// let numbers = vec![1, 2, 3];
/// let floats: LinkedList<_> = [1.0, 2.0, 3.0].into_iter().collect();
///
/// let mut cursor = ZipCursor::new((numbers.begin(), floats.begin()));
/// assert_eq!(cursor.get(), (&1, &1.0));
/// cursor.advance();
/// assert_eq!(cursor.get(), (&2, &2.0));
///
/// let mut end = ZipCursor::new((numbers.end(), floats.end()));
/// end.retreat();
/// assert_eq!(end.get(), (&3, &3.0));
/// ```
///
/// A hash set only supports forward traversal, so a `ZipCursor` with a
/// component into one cannot retreat.
///
/// ```compile_fail
/// # use lockstep::{BidirectionalCursor, Sequence, ZipCursor};
/// # use std::collections::HashSet;
/// let numbers = vec![1, 2, 3];
/// let set: HashSet<_> = [1, 2, 3].into_iter().collect();
///
/// let mut end = ZipCursor::new((numbers.end(), set.end()));
/// end.retreat();
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ZipCursor<C> {
    cursors: C,
}

impl<C> ZipCursor<C> {
    /// Groups the given cursors. No check is made that they point to the same
    /// offset of sequences of the same length.
    pub fn new(cursors: C) -> Self {
        Self { cursors }
    }

    /// Returns the component cursors.
    pub fn components(&self) -> &C {
        &self.cursors
    }

    /// Consumes this cursor and returns the component cursors.
    pub fn into_inner(self) -> C {
        self.cursors
    }
}

impl<C: CursorTuple> Cursor for ZipCursor<C> {
    type Capability = Weakest<C::Capabilities>;
    type Item = C::Items;
    type Ref = C::Refs;

    fn get(&self) -> Self::Ref {
        self.cursors.get_all()
    }

    fn advance(&mut self) {
        log_trace!("advancing {} cursors in lockstep", C::ARITY);
        self.cursors.advance_all();
    }

    fn meets(&self, end: &Self) -> bool {
        self.cursors.any_meets(&end.cursors)
    }

    fn remaining(&self, end: &Self) -> Option<usize> {
        self.cursors.min_remaining(&end.cursors)
    }
}

impl<C: BidirectionalCursorTuple> BidirectionalCursor for ZipCursor<C> {
    fn retreat(&mut self) {
        log_trace!("retreating {} cursors in lockstep", C::ARITY);
        self.cursors.retreat_all();
    }
}

impl<C: RandomAccessCursorTuple> RandomAccessCursor for ZipCursor<C> {
    fn jump(&mut self, offset: isize) {
        log_trace!("jumping {} cursors by {offset} in lockstep", C::ARITY);
        self.cursors.jump_all(offset);
    }

    fn distance_to(&self, other: &Self) -> isize {
        self.cursors.nearest_distance(&other.cursors)
    }
}

macro_rules! cursor_tuple {
    ( $($cursor:ident $i:tt),+ ) => {
        impl<$($cursor: Cursor),+> CursorTuple for ($($cursor,)+) {
            const ARITY: usize = count!($($i),+);

            type Capabilities = ($($cursor::Capability,)+);
            type Items = ($($cursor::Item,)+);
            type Refs = ($($cursor::Ref,)+);

            fn get_all(&self) -> Self::Refs {
                ( $(self.$i.get(),)+ )
            }

            fn advance_all(&mut self) {
                $( self.$i.advance(); )+
            }

            fn any_meets(&self, end: &Self) -> bool {
                false $( || self.$i.meets(&end.$i) )+
            }

            fn min_remaining(&self, end: &Self) -> Option<usize> {
                let remaining = ( $(self.$i.remaining(&end.$i)?,)+ );
                Some(min_of!(remaining, $($i),+))
            }
        }

        impl<$($cursor: BidirectionalCursor),+> BidirectionalCursorTuple for ($($cursor,)+) {
            fn retreat_all(&mut self) {
                $( self.$i.retreat(); )+
            }
        }

        impl<$($cursor: RandomAccessCursor),+> RandomAccessCursorTuple for ($($cursor,)+) {
            fn jump_all(&mut self, offset: isize) {
                $( self.$i.jump(offset); )+
            }

            fn nearest_distance(&self, other: &Self) -> isize {
                let distances = ( $(self.$i.distance_to(&other.$i),)+ );
                nearest_zero_of!(distances, $($i),+)
            }
        }
    }
}

cursor_tuple!(A 0);
cursor_tuple!(A 0, B 1);
cursor_tuple!(A 0, B 1, C 2);
cursor_tuple!(A 0, B 1, C 2, D 3);
cursor_tuple!(A 0, B 1, C 2, D 3, E 4);
cursor_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
cursor_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
cursor_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
cursor_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
cursor_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
cursor_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
cursor_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);
