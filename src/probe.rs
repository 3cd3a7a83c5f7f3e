// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Detection of sequences that know their number of elements.

use crate::source::Sequence;

/// A [`Sequence`] that knows its number of elements.
///
/// This is implemented for all the standard collections, but not for
/// single-pass [`InputSequence`](crate::InputSequence)s. Whether a type
/// implements this trait can be queried with [`has_size!`](crate::has_size).
pub trait SizedSequence: Sequence {
    /// Number of elements in the sequence.
    fn len(&self) -> usize;

    /// Whether the sequence contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: SizedSequence + ?Sized> SizedSequence for &S {
    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<S: SizedSequence + ?Sized> SizedSequence for &mut S {
    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<S: SizedSequence + ?Sized> SizedSequence for Box<S> {
    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Returns whether the given type implements [`SizedSequence`], for any
/// concrete type (including types that aren't sequences at all).
///
/// The type is never instantiated: the answer is resolved at compile time.
///
/// ```
/// # use lockstep::{has_size, InputSequence};
/// # use std::collections::LinkedList;
/// assert!(has_size!(LinkedList<i32>));
/// assert!(has_size!(&[u8]));
/// assert!(!has_size!(i32));
/// assert!(!has_size!(InputSequence<std::ops::Range<u8>>));
/// ```
#[macro_export]
macro_rules! has_size {
    ( $t:ty ) => {{
        #[allow(unused_imports)]
        use $crate::probe::__private::{FallbackProbe as _, SizeProbe as _};
        (&&$crate::probe::__private::Probe::<$t>::new()).has_size()
    }};
}

#[doc(hidden)]
pub mod __private {
    //! Autoref-based dispatch behind [`has_size!`](crate::has_size): the
    //! method on `&Probe<T>` is only found when `T: SizedSequence`, otherwise
    //! method resolution falls back to the one on `Probe<T>`.

    use super::SizedSequence;
    use std::marker::PhantomData;

    /// Zero-sized carrier of the probed type.
    pub struct Probe<T: ?Sized>(PhantomData<T>);

    impl<T: ?Sized> Probe<T> {
        /// Creates a probe.
        pub const fn new() -> Self {
            Probe(PhantomData)
        }
    }

    /// Selected when the probed type is a [`SizedSequence`].
    pub trait SizeProbe {
        /// Returns `true`.
        fn has_size(&self) -> bool {
            true
        }
    }

    impl<T: SizedSequence + ?Sized> SizeProbe for &Probe<T> {}

    /// Selected for any other type.
    pub trait FallbackProbe {
        /// Returns `false`.
        fn has_size(&self) -> bool {
            false
        }
    }

    impl<T: ?Sized> FallbackProbe for Probe<T> {}
}
