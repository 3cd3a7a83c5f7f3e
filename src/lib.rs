// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![doc = include_str!("../README.md")]
#![forbid(missing_docs, unsafe_code)]

mod macros;

pub mod capability;
mod cursor;
mod pairs;
pub mod probe;
mod source;
mod zip;

pub use cursor::{BidirectionalCursor, Cursor, CursorRange, RandomAccessCursor};
pub use pairs::Pairs;
pub use probe::SizedSequence;
pub use source::{
    BTreeSetCursor, HashSetCursor, InputCursor, InputSequence, LinkedListCursor, Sequence,
    SequenceMut, SliceCursor, VecDequeCursor,
};
pub use zip::{
    BidirectionalCursorTuple, CursorTuple, DoubleEndedIteratorTuple, ExactSizeIteratorTuple,
    FusedIteratorTuple, IteratorTuple, RandomAccessCursorTuple, SequenceMutTuple, SequenceTuple,
    SizedSequenceTuple, Zip, ZipCursor, ZipMut,
};
