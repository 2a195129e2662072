// ARA - ara-core
// Module: Result Chaining
// SW-REQ-ID: SWS_CORE_00765
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Return-type dispatch for [`Result::bind`](crate::Result::bind).
//!
//! The callable given to `bind` returns either a plain `T` or a complete
//! `Result<T, E>`. Both shapes implement [`BindResult`] under a different
//! marker, so the compiler picks the single matching impl from the callable's
//! return type and no runtime check is involved.

use crate::Result;

/// Marker selecting the impl for callables returning a plain value.
#[derive(Debug)]
pub enum Wrapped {}

/// Marker selecting the impl for callables returning a whole result.
#[derive(Debug)]
pub enum Flattened {}

/// Conversion of a `bind` callable's output into the chained result.
///
/// `M` is [`Wrapped`] or [`Flattened`] and is always inferred.
pub trait BindResult<T, E, M> {
    /// Turn the callable's output into a `Result<T, E>`.
    fn into_result(self) -> Result<T, E>;
}

impl<T, E> BindResult<T, E, Wrapped> for T {
    fn into_result(self) -> Result<T, E> {
        Result::from_value(self)
    }
}

impl<T, E> BindResult<T, E, Flattened> for Result<T, E> {
    fn into_result(self) -> Result<T, E> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain<R, M>(
        start: Result<u32, &'static str>,
        f: impl FnOnce(u32) -> R,
    ) -> Result<u32, &'static str>
    where
        R: BindResult<u32, &'static str, M>,
    {
        start.bind(f)
    }

    #[test]
    fn plain_output_is_wrapped() {
        let r = chain(Result::from_value(4), |v| v + 1);
        assert!(r.eq_value(&5));
    }

    #[test]
    fn result_output_is_returned_as_is() {
        let r = chain(Result::from_value(4), |_| Result::<u32, &str>::from_error("rejected"));
        assert!(r.eq_error(&"rejected"));
    }

    #[test]
    fn error_skips_callable() {
        let mut called = false;
        let r = chain(Result::from_error("early"), |v| {
            called = true;
            v
        });
        assert!(!called);
        assert!(r.eq_error(&"early"));
    }
}
