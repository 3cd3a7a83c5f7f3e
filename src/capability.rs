// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Traversal capabilities of cursors, and the type-level computation of the
//! weakest capability among several cursors.
//!
//! Each cursor type declares exactly one capability tag. Tags are mapped to a
//! rank (input, output and forward are rank 1, bidirectional is rank 2,
//! random access is rank 3), and a set of tags resolves to the tag of the
//! minimal rank. A rank-1 minimum always resolves to [`ForwardTag`].
//!
//! ```
//! # use lockstep::capability::{
//! #     BidirectionalTag, Capability, CapabilityKind, ForwardTag, InputTag, RandomAccessTag,
//! #     Weakest,
//! # };
//! assert_eq!(
//!     <Weakest<(BidirectionalTag, RandomAccessTag)> as Capability>::KIND,
//!     CapabilityKind::Bidirectional
//! );
//! assert_eq!(
//!     <Weakest<(InputTag, BidirectionalTag)> as Capability>::KIND,
//!     CapabilityKind::Forward
//! );
//! ```
//!
//! An empty set of tags has no weakest capability.
//!
//! ```compile_fail
//! # use lockstep::capability::{Capability, Weakest};
//! let _ = <Weakest<()> as Capability>::KIND;
//! ```

use std::fmt;

/// Runtime mirror of a capability tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CapabilityKind {
    /// Single-pass reading.
    Input,
    /// Single-pass writing.
    Output,
    /// Multi-pass traversal in one direction.
    Forward,
    /// Multi-pass traversal in both directions.
    Bidirectional,
    /// Traversal by arbitrary offsets.
    RandomAccess,
}

impl CapabilityKind {
    /// All the capability kinds, from the weakest to the strongest.
    pub const ALL: [CapabilityKind; 5] = [
        CapabilityKind::Input,
        CapabilityKind::Output,
        CapabilityKind::Forward,
        CapabilityKind::Bidirectional,
        CapabilityKind::RandomAccess,
    ];

    /// Returns the rank of this capability.
    pub const fn rank(self) -> u8 {
        match self {
            CapabilityKind::Input | CapabilityKind::Output | CapabilityKind::Forward => 1,
            CapabilityKind::Bidirectional => 2,
            CapabilityKind::RandomAccess => 3,
        }
    }

    /// Returns the capability of the given rank, or [`None`] if the rank is
    /// outside of `1..=3`. Rank 1 maps to [`CapabilityKind::Forward`].
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(CapabilityKind::Forward),
            2 => Some(CapabilityKind::Bidirectional),
            3 => Some(CapabilityKind::RandomAccess),
            _ => None,
        }
    }

    /// Returns the weakest capability among the given ones.
    ///
    /// Calling this with an empty array fails to compile.
    ///
    /// ```compile_fail
    /// # use lockstep::capability::CapabilityKind;
    /// const WEAKEST: CapabilityKind = CapabilityKind::weakest([]);
    /// println!("{WEAKEST}");
    /// ```
    ///
    /// ```
    /// # use lockstep::capability::CapabilityKind;
    /// assert_eq!(
    ///     CapabilityKind::weakest([CapabilityKind::RandomAccess, CapabilityKind::Bidirectional]),
    ///     CapabilityKind::Bidirectional
    /// );
    /// assert_eq!(
    ///     CapabilityKind::weakest([CapabilityKind::Output]),
    ///     CapabilityKind::Forward
    /// );
    /// ```
    pub const fn weakest<const N: usize>(kinds: [CapabilityKind; N]) -> CapabilityKind {
        const { assert!(N != 0, "called weakest() on an empty set of capabilities") };
        let mut min = kinds[0].rank();
        let mut i = 1;
        while i < N {
            let rank = kinds[i].rank();
            if rank < min {
                min = rank;
            }
            i += 1;
        }
        match Self::from_rank(min) {
            Some(kind) => kind,
            None => unreachable!(),
        }
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CapabilityKind::Input => "input",
            CapabilityKind::Output => "output",
            CapabilityKind::Forward => "forward",
            CapabilityKind::Bidirectional => "bidirectional",
            CapabilityKind::RandomAccess => "random-access",
        })
    }
}

/// A capability tag, declared by every [`Cursor`](crate::Cursor) type.
pub trait Capability: Copy + Default + fmt::Debug + 'static {
    /// Rank of this capability.
    type Rank: Rank;

    /// Runtime mirror of this tag.
    const KIND: CapabilityKind;
}

/// Tag of single-pass reading cursors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputTag;

/// Tag of single-pass writing cursors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputTag;

/// Tag of multi-pass cursors that only move forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForwardTag;

/// Tag of cursors that move forward and backward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BidirectionalTag;

/// Tag of cursors that move by arbitrary offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RandomAccessTag;

impl Capability for InputTag {
    type Rank = Rank1;
    const KIND: CapabilityKind = CapabilityKind::Input;
}

impl Capability for OutputTag {
    type Rank = Rank1;
    const KIND: CapabilityKind = CapabilityKind::Output;
}

impl Capability for ForwardTag {
    type Rank = Rank1;
    const KIND: CapabilityKind = CapabilityKind::Forward;
}

impl Capability for BidirectionalTag {
    type Rank = Rank2;
    const KIND: CapabilityKind = CapabilityKind::Bidirectional;
}

impl Capability for RandomAccessTag {
    type Rank = Rank3;
    const KIND: CapabilityKind = CapabilityKind::RandomAccess;
}

/// A type-level capability rank.
pub trait Rank: 'static {
    /// Numeric value of this rank.
    const RANK: u8;

    /// Canonical capability tag of this rank.
    type Tag: Capability;

    /// The minimum of this rank and [`Rank2`].
    type AtMost2: Rank;

    /// The minimum of this rank and `R`.
    type Min<R: Rank>: Rank;
}

/// Rank of input, output and forward cursors.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rank1;

/// Rank of bidirectional cursors.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rank2;

/// Rank of random access cursors.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rank3;

impl Rank for Rank1 {
    const RANK: u8 = 1;
    type Tag = ForwardTag;
    type AtMost2 = Rank1;
    type Min<R: Rank> = Rank1;
}

impl Rank for Rank2 {
    const RANK: u8 = 2;
    type Tag = BidirectionalTag;
    type AtMost2 = Rank2;
    type Min<R: Rank> = R::AtMost2;
}

impl Rank for Rank3 {
    const RANK: u8 = 3;
    type Tag = RandomAccessTag;
    type AtMost2 = Rank2;
    type Min<R: Rank> = R;
}

/// A non-empty [tuple](tuple) of capability tags (with up to 12 elements).
pub trait CapabilitySet {
    /// Minimal rank among the tags.
    type Rank: Rank;

    /// Weakest capability among the tags.
    type Weakest: Capability;

    /// Runtime mirrors of the tags, in order.
    const KINDS: &'static [CapabilityKind];
}

/// The weakest capability of a [`CapabilitySet`].
pub type Weakest<T> = <T as CapabilitySet>::Weakest;

macro_rules! capability_set {
    ( $head:ident ) => {
        impl<$head: Capability> CapabilitySet for ($head,) {
            type Rank = $head::Rank;
            type Weakest = <$head::Rank as Rank>::Tag;
            const KINDS: &'static [CapabilityKind] = &[$head::KIND];
        }
    };
    ( $head:ident, $($tail:ident),+ ) => {
        impl<$head: Capability, $($tail: Capability),+> CapabilitySet for ($head, $($tail),+) {
            type Rank = <$head::Rank as Rank>::Min<<($($tail,)+) as CapabilitySet>::Rank>;
            type Weakest = <Self::Rank as Rank>::Tag;
            const KINDS: &'static [CapabilityKind] = &[$head::KIND, $($tail::KIND),+];
        }

        capability_set!($($tail),+);
    };
}

capability_set!(A, B, C, D, E, F, G, H, I, J, K, L);
