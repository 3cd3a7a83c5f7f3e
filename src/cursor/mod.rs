// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Cursors: position markers into a sequence.

mod range;

use crate::capability::Capability;
pub use range::CursorRange;

/// A position into a sequence.
///
/// A cursor can be dereferenced with [`get()`](Self::get) and moved forward
/// with [`advance()`](Self::advance). Stronger cursors additionally implement
/// [`BidirectionalCursor`] and [`RandomAccessCursor`], and declare so in their
/// [`Capability`](Self::Capability).
///
/// Two cursors are equal when they point to the same position of the same
/// sequence. Dereferencing or advancing a cursor that is at the end of its
/// sequence panics.
pub trait Cursor: Clone + PartialEq {
    /// Declared traversal capability.
    type Capability: Capability;

    /// Value type of the elements of the sequence.
    type Item;

    /// Type obtained when dereferencing this cursor.
    type Ref;

    /// Dereferences this cursor.
    fn get(&self) -> Self::Ref;

    /// Moves this cursor forward by one position.
    fn advance(&mut self);

    /// Whether a traversal from this cursor has reached the given end.
    fn meets(&self, end: &Self) -> bool {
        self == end
    }

    /// Number of positions between this cursor and the given end, if known
    /// in constant time.
    fn remaining(&self, end: &Self) -> Option<usize> {
        let _ = end;
        None
    }
}

/// A cursor that can also move backward.
pub trait BidirectionalCursor: Cursor {
    /// Moves this cursor backward by one position.
    fn retreat(&mut self);
}

/// A cursor that can move by arbitrary offsets in constant time.
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Moves this cursor by the given signed number of positions.
    fn jump(&mut self, offset: isize);

    /// Signed number of positions from this cursor to the other one.
    fn distance_to(&self, other: &Self) -> isize;
}
