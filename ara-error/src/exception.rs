// ARA - ara-error
// Module: ARA Exception
// SW-REQ-ID: SWS_CORE_00601
// SW-REQ-ID: SWS_CORE_00611
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Exception carrier and escalation.
//!
//! Errors travel as values. Escalating one into an unwinding exception is an
//! explicit step taken by the caller through [`raise`] (usually reached via
//! `ErrorCode::throw_as_exception` or `Result::value_or_throw`). A raised
//! exception is recovered with [`catch`], either as its concrete domain type
//! or as the base [`Exception`].
//!
//! Escalation unwinds the stack, so it is only available with the
//! `exceptions` feature. A binary built with `panic = "abort"` terminates
//! instead, which matches a toolchain without exception support.

use core::fmt;

use crate::ErrorCode;

/// Base type of all exceptions raised for an [`ErrorCode`].
///
/// The exception owns a copy of its code, so it stays valid however long
/// the handler keeps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exception {
    error: ErrorCode,
}

impl Exception {
    /// Create an exception carrying `error`.
    #[must_use]
    pub const fn new(error: ErrorCode) -> Self {
        Self { error }
    }

    /// The explanatory string: the embedded code's message.
    #[must_use]
    pub fn what(&self) -> &'static str {
        self.error.message()
    }

    /// The embedded error code.
    #[must_use]
    pub const fn error(&self) -> &ErrorCode {
        &self.error
    }
}

impl AsRef<Self> for Exception {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl From<ErrorCode> for Exception {
    fn from(error: ErrorCode) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.what())
    }
}

impl core::error::Error for Exception {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(feature = "exceptions")]
pub use self::unwind::{catch, raise};

#[cfg(feature = "exceptions")]
mod unwind {
    use std::{
        any::Any,
        boxed::Box,
        panic::{self, AssertUnwindSafe},
    };

    use super::Exception;

    /// Unwind payload: the concrete exception plus its base view.
    struct Raised {
        base:     Exception,
        concrete: Box<dyn Any + Send>,
    }

    /// Raise `exception`, unwinding to the nearest [`catch`].
    ///
    /// Any domain exception type works as long as it exposes its base
    /// [`Exception`]. The process panic hook is not invoked; with
    /// `panic = "abort"` the process terminates.
    pub fn raise<X>(exception: X) -> !
    where
        X: AsRef<Exception> + Send + 'static,
    {
        let base = *exception.as_ref();

        #[cfg(feature = "log")]
        log::debug!(
            target: "ara_error::exception",
            "raising exception for {}",
            base.error()
        );

        // Bypasses the panic hook
        panic::resume_unwind(Box::new(Raised {
            base,
            concrete: Box::new(exception),
        }))
    }

    /// Run `f`, recovering an exception of type `X` raised inside it.
    ///
    /// `X` is either the concrete exception type that was raised or the base
    /// [`Exception`]. Exceptions of other types and ordinary panics keep
    /// unwinding.
    ///
    /// `f` is treated as unwind safe: like a C++ `try` block, state touched by
    /// `f` must tolerate being observed after an exception.
    ///
    /// # Errors
    ///
    /// Returns the caught exception.
    pub fn catch<X, R, F>(f: F) -> Result<R, X>
    where
        X: 'static,
        F: FnOnce() -> R,
    {
        let payload = match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => return Ok(value),
            Err(payload) => payload,
        };

        let raised = match payload.downcast::<Raised>() {
            Ok(raised) => *raised,
            Err(other) => panic::resume_unwind(other),
        };

        let Raised { base, concrete } = raised;
        let concrete = match concrete.downcast::<X>() {
            Ok(exception) => return Err(*exception),
            Err(concrete) => concrete,
        };

        let base_view: Box<dyn Any + Send> = Box::new(base);
        match base_view.downcast::<X>() {
            Ok(exception) => Err(*exception),
            Err(_) => panic::resume_unwind(Box::new(Raised { base, concrete })),
        }
    }
}
