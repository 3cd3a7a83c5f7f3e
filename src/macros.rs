// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Internal macros, to swap the logging macros implementation based on whether
//! the `log` feature is enabled or not, and helpers to fold over the elements
//! of a tuple.

#[cfg(feature = "log")]
macro_rules! log_debug {
    ( $($args:tt)* ) => {
        log::debug!( $($args)* )
    }
}

#[cfg(feature = "log_cursors")]
macro_rules! log_trace {
    ( $($args:tt)* ) => {
        log::trace!( $($args)* )
    }
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ( $($args:tt)* ) => {
        ()
    };
}

#[cfg(not(feature = "log_cursors"))]
macro_rules! log_trace {
    ( $($args:tt)* ) => {
        ()
    };
}

/// Minimum of the elements of a tuple. The first index is skipped so that the
/// fold starts from element 0.
macro_rules! min_of {
    ( $tuple:expr, $zero:tt $(, $i:tt)* ) => {
        $tuple.0 $( .min($tuple.$i) )*
    }
}

/// Element of a tuple of signed integers that is the closest to zero. Ties keep
/// the first such element.
macro_rules! nearest_zero_of {
    ( $tuple:expr, $zero:tt $(, $i:tt)* ) => {
        [$tuple.$zero $(, $tuple.$i)*].into_iter().fold($tuple.$zero, |nearest, x| {
            if x.unsigned_abs() < nearest.unsigned_abs() {
                x
            } else {
                nearest
            }
        })
    }
}

/// Whether all the elements of a tuple are equal. The elements must be `Copy`.
macro_rules! all_eq {
    ( $tuple:expr, $zero:tt $(, $i:tt)* ) => {
        <[_]>::windows(&[$tuple.$zero $(, $tuple.$i)*], 2).all(|pair| pair[0] == pair[1])
    }
}

/// Number of elements of a tuple, given its indices. Usable in constants, and
/// immune to `len()` methods of the crate's own traits.
macro_rules! count {
    ( $($i:tt),* ) => {
        <[usize]>::len(&[$($i),*])
    }
}

pub(crate) use all_eq;
pub(crate) use count;
pub(crate) use log_debug;
pub(crate) use log_trace;
pub(crate) use min_of;
pub(crate) use nearest_zero_of;
