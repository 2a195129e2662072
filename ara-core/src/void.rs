// ARA - ara-core
// Module: ARA Result without value
// SW-REQ-ID: SWS_CORE_00801
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Results of operations that produce no value.
//!
//! `()` is zero-sized, so `Result<(), E>` stores nothing besides the error
//! and every value-returning operation of [`Result`] degenerates to unit:
//! `emplace_value(())`, `value_or(())` and `resolve` all yield `()`.

use ara_error::ErrorCode;

use crate::Result;

/// Result of an operation that either succeeds without a value or fails with
/// an error of type `E`.
pub type VoidResult<E = ErrorCode> = Result<(), E>;

impl<E> Result<(), E> {
    /// A successful result.
    ///
    /// ```
    /// use ara_core::VoidResult;
    ///
    /// let done: VoidResult = VoidResult::new();
    /// assert!(done.has_value());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self::from_value(())
    }
}

impl<E> Default for Result<(), E> {
    fn default() -> Self {
        Self::new()
    }
}
