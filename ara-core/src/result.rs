// ARA - ara-core
// Module: ARA Result
// SW-REQ-ID: SWS_CORE_00701
// SW-REQ-ID: SWS_CORE_00711
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The value-or-error result type.
//!
//! [`Result`] holds exactly one of a value of type `T` or an error of type
//! `E`. Which one is fixed at construction and changed only through the
//! `emplace_*` operations or [`swap`](Result::swap); a result holding neither
//! cannot be expressed.
//!
//! Asking for the payload that is not present (a value from an error-holding
//! result or the other way round) violates the accessor contract and panics
//! with a descriptive message. Use [`has_value`](Result::has_value),
//! [`value_or`](Result::value_or), [`resolve`](Result::resolve) or the
//! [`Option`]-returning [`ok`](Result::ok)/[`err`](Result::err) when the
//! state is not known.

use core::{
    fmt,
    ops::{Deref, DerefMut},
};

use ara_error::ErrorCode;
#[cfg(feature = "exceptions")]
use ara_error::ThrowAsException;

use crate::bind::BindResult;

#[derive(Clone, Copy)]
enum Repr<T, E> {
    Value(T),
    Error(E),
}

/// A value of type `T` or an error of type `E`.
///
/// `E` defaults to [`ErrorCode`], the error type of all platform APIs.
///
/// # Equality
///
/// Two results compare equal only when both hold a value and the values are
/// equal. Two error-holding results are never equal, not even to themselves,
/// which is why `Result` implements [`PartialEq`] but never [`Eq`]. Compare
/// against a bare value or error with [`eq_value`](Result::eq_value) and
/// [`eq_error`](Result::eq_error).
///
/// ```
/// use ara_core::{CoreErrc, ErrorCode, Result};
///
/// let error = ErrorCode::from(CoreErrc::InvalidArgument);
/// let a: Result<i32> = Result::from_error(error);
/// let b: Result<i32> = Result::from_error(error);
/// assert!(a != b);
/// assert!(a.eq_error(&error));
/// ```
#[derive(Clone, Copy)]
pub struct Result<T, E = ErrorCode> {
    repr: Repr<T, E>,
}

/// Report an accessor used on the wrong alternative.
#[cold]
#[track_caller]
#[allow(clippy::panic)]
fn contract_violation(what: &'static str) -> ! {
    #[cfg(feature = "log")]
    log::error!(target: "ara_core::result", "contract violation: {what}");

    panic!("contract violation: {what}")
}

const NO_VALUE: &str = "value accessed on a Result that holds an error";
const NO_ERROR: &str = "error accessed on a Result that holds a value";

impl<T, E> Result<T, E> {
    /// Build a result holding `value`.
    #[must_use]
    pub const fn from_value(value: T) -> Self {
        Self {
            repr: Repr::Value(value),
        }
    }

    /// Build a result holding the value produced by `make`.
    ///
    /// The value is constructed directly from the closure's output, the Rust
    /// counterpart of constructing it in place from arguments.
    #[must_use]
    pub fn from_value_with<F>(make: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::from_value(make())
    }

    /// Build a result holding `error`.
    #[must_use]
    pub const fn from_error(error: E) -> Self {
        Self {
            repr: Repr::Error(error),
        }
    }

    /// Build a result holding the error produced by `make`.
    #[must_use]
    pub fn from_error_with<F>(make: F) -> Self
    where
        F: FnOnce() -> E,
    {
        Self::from_error(make())
    }

    /// Replace the contents with `value`.
    pub fn emplace_value(&mut self, value: T) {
        self.repr = Repr::Value(value);
    }

    /// Replace the contents with the value produced by `make`.
    ///
    /// The old contents are dropped only after `make` has returned, so a
    /// panic inside `make` leaves `self` unchanged.
    pub fn emplace_value_with<F>(&mut self, make: F)
    where
        F: FnOnce() -> T,
    {
        let value = make();
        self.repr = Repr::Value(value);
    }

    /// Replace the contents with `error`.
    pub fn emplace_error(&mut self, error: E) {
        self.repr = Repr::Error(error);
    }

    /// Replace the contents with the error produced by `make`.
    ///
    /// Like [`emplace_value_with`](Self::emplace_value_with), `self` is left
    /// unchanged if `make` panics.
    pub fn emplace_error_with<F>(&mut self, make: F)
    where
        F: FnOnce() -> E,
    {
        let error = make();
        self.repr = Repr::Error(error);
    }

    /// Exchange the contents of `self` and `other`, whichever alternatives
    /// they hold.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.repr, &mut other.repr);
    }

    /// Whether this result holds a value.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        matches!(self.repr, Repr::Value(_))
    }

    /// The contained value.
    ///
    /// # Panics
    ///
    /// Panics if the result holds an error.
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.repr {
            Repr::Value(value) => value,
            Repr::Error(_) => contract_violation(NO_VALUE),
        }
    }

    /// The contained value, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the result holds an error.
    #[must_use]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match &mut self.repr {
            Repr::Value(value) => value,
            Repr::Error(_) => contract_violation(NO_VALUE),
        }
    }

    /// Move the contained value out.
    ///
    /// # Panics
    ///
    /// Panics if the result holds an error.
    #[must_use]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.repr {
            Repr::Value(value) => value,
            Repr::Error(_) => contract_violation(NO_VALUE),
        }
    }

    /// The contained error.
    ///
    /// # Panics
    ///
    /// Panics if the result holds a value.
    #[must_use]
    #[track_caller]
    pub fn error(&self) -> &E {
        match &self.repr {
            Repr::Error(error) => error,
            Repr::Value(_) => contract_violation(NO_ERROR),
        }
    }

    /// Move the contained error out.
    ///
    /// # Panics
    ///
    /// Panics if the result holds a value.
    #[must_use]
    #[track_caller]
    pub fn into_error(self) -> E {
        match self.repr {
            Repr::Error(error) => error,
            Repr::Value(_) => contract_violation(NO_ERROR),
        }
    }

    /// The contained value, or `default` converted to `T`.
    #[must_use]
    pub fn value_or<U>(&self, default: U) -> T
    where
        T: Clone,
        U: Into<T>,
    {
        match &self.repr {
            Repr::Value(value) => value.clone(),
            Repr::Error(_) => default.into(),
        }
    }

    /// Move the contained value out, or convert `default` to `T`.
    #[must_use]
    pub fn into_value_or<U>(self, default: U) -> T
    where
        U: Into<T>,
    {
        match self.repr {
            Repr::Value(value) => value,
            Repr::Error(_) => default.into(),
        }
    }

    /// The contained error, or `default` converted to `E`.
    #[must_use]
    pub fn error_or<G>(&self, default: G) -> E
    where
        E: Clone,
        G: Into<E>,
    {
        match &self.repr {
            Repr::Error(error) => error.clone(),
            Repr::Value(_) => default.into(),
        }
    }

    /// Move the contained error out, or convert `default` to `E`.
    #[must_use]
    pub fn into_error_or<G>(self, default: G) -> E
    where
        G: Into<E>,
    {
        match self.repr {
            Repr::Error(error) => error,
            Repr::Value(_) => default.into(),
        }
    }

    /// Whether this result holds an error equal to `error`.
    ///
    /// ```
    /// use ara_core::{CoreErrc, Result};
    ///
    /// let r: Result<u8> = Result::from_error(CoreErrc::InvalidArgument.into());
    /// assert!(r.check_error(CoreErrc::InvalidArgument));
    /// assert!(!r.check_error(CoreErrc::InvalidMetaModelPath));
    /// ```
    #[must_use]
    pub fn check_error<G>(&self, error: G) -> bool
    where
        E: PartialEq,
        G: Into<E>,
    {
        match &self.repr {
            Repr::Error(held) => *held == error.into(),
            Repr::Value(_) => false,
        }
    }

    /// The contained value, or the value computed from the error by `f`.
    ///
    /// This is the non-escalating counterpart of `value_or_throw`.
    #[cfg_attr(
        not(feature = "exceptions"),
        doc = r#"
Without the `exceptions` feature `value_or_throw` does not exist:

```compile_fail
use ara_core::{CoreErrc, Result};

let r: Result<i32> = Result::from_error(CoreErrc::InvalidArgument.into());
let _ = r.value_or_throw();
```
"#
    )]
    #[must_use]
    pub fn resolve<F, U>(self, f: F) -> T
    where
        F: FnOnce(&E) -> U,
        U: Into<T>,
    {
        match self.repr {
            Repr::Value(value) => value,
            Repr::Error(error) => f(&error).into(),
        }
    }

    /// Feed the contained value to `f`.
    ///
    /// `f` may return either a plain `T`, which is wrapped into a new result,
    /// or a whole `Result<T, E>`, which is returned as is. The choice is made
    /// at compile time from the return type of `f`. An error is passed on
    /// without calling `f`.
    ///
    /// ```
    /// use ara_core::{CoreErrc, Result};
    ///
    /// let start: Result<i32> = Result::from_value(10);
    /// let doubled = start.bind(|v| v * 2);
    /// assert!(doubled.eq_value(&20));
    ///
    /// let checked = doubled.bind(|v| {
    ///     if v > 15 {
    ///         Result::<i32>::from_error(CoreErrc::InvalidArgument.into())
    ///     } else {
    ///         Result::from_value(v)
    ///     }
    /// });
    /// assert!(checked.check_error(CoreErrc::InvalidArgument));
    /// ```
    pub fn bind<F, R, M>(self, f: F) -> Self
    where
        F: FnOnce(T) -> R,
        R: BindResult<T, E, M>,
    {
        match self.repr {
            Repr::Value(value) => f(value).into_result(),
            Repr::Error(error) => Self::from_error(error),
        }
    }

    /// Transform the contained value with `f`, passing an error on.
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self.repr {
            Repr::Value(value) => Result::from_value(f(value)),
            Repr::Error(error) => Result::from_error(error),
        }
    }

    /// Transform the contained error with `f`, passing a value on.
    pub fn map_error<G, F>(self, f: F) -> Result<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self.repr {
            Repr::Value(value) => Result::from_value(value),
            Repr::Error(error) => Result::from_error(f(error)),
        }
    }

    /// The value, if any.
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self.repr {
            Repr::Value(value) => Some(value),
            Repr::Error(_) => None,
        }
    }

    /// The error, if any.
    #[must_use]
    pub fn err(self) -> Option<E> {
        match self.repr {
            Repr::Value(_) => None,
            Repr::Error(error) => Some(error),
        }
    }

    /// Borrow the contents as a [`core::result::Result`].
    ///
    /// # Errors
    ///
    /// Returns the contained error by reference.
    pub const fn as_std(&self) -> core::result::Result<&T, &E> {
        match &self.repr {
            Repr::Value(value) => Ok(value),
            Repr::Error(error) => Err(error),
        }
    }

    /// Convert into a [`core::result::Result`], making `?` available.
    ///
    /// # Errors
    ///
    /// Returns the contained error.
    pub fn into_std(self) -> core::result::Result<T, E> {
        self.into()
    }

    /// Whether this result holds a value equal to `value`.
    #[must_use]
    pub fn eq_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(&self.repr, Repr::Value(held) if held == value)
    }

    /// Whether this result holds an error equal to `error`.
    #[must_use]
    pub fn eq_error(&self, error: &E) -> bool
    where
        E: PartialEq,
    {
        matches!(&self.repr, Repr::Error(held) if held == error)
    }
}

#[cfg(feature = "exceptions")]
impl<T, E> Result<T, E>
where
    E: ThrowAsException,
{
    /// Move the contained value out, or escalate the error.
    ///
    /// An error is raised as the exception its domain associates with it;
    /// catch it with [`catch`](crate::catch). Without the `exceptions`
    /// feature this method does not exist; use [`resolve`](Self::resolve)
    /// there.
    ///
    /// ```
    /// use ara_core::{catch, CoreErrc, CoreException, ErrorCode, Result};
    ///
    /// let r: Result<i32> = Result::from_error(CoreErrc::InvalidArgument.into());
    /// let caught = catch::<CoreException, _, _>(|| r.value_or_throw());
    /// assert_eq!(
    ///     *caught.unwrap_err().error(),
    ///     ErrorCode::from(CoreErrc::InvalidArgument)
    /// );
    /// ```
    #[must_use]
    pub fn value_or_throw(self) -> T {
        match self.repr {
            Repr::Value(value) => value,
            Repr::Error(error) => escalate(&error),
        }
    }

    /// The contained value by reference, or escalate the error.
    #[must_use]
    pub fn value_or_throw_ref(&self) -> &T {
        match &self.repr {
            Repr::Value(value) => value,
            Repr::Error(error) => escalate(error),
        }
    }
}

#[cfg(feature = "exceptions")]
#[cold]
fn escalate<E: ThrowAsException>(error: &E) -> ! {
    #[cfg(feature = "log")]
    log::debug!(
        target: "ara_core::result",
        "escalating {} held by Result",
        core::any::type_name::<E>()
    );

    error.throw_as_exception()
}

/// Exchange the contents of two results.
pub fn swap<T, E>(a: &mut Result<T, E>, b: &mut Result<T, E>) {
    a.swap(b);
}

/// Dereferences to the contained value.
///
/// # Panics
///
/// Panics if the result holds an error. Autoderef applies this to any method
/// `Result` itself lacks, so `r.to_string()` or `r.len()` on an error-holding
/// result panics like [`Result::value`].
impl<T, E> Deref for Result<T, E> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &T {
        self.value()
    }
}

/// Mutably dereferences to the contained value.
///
/// # Panics
///
/// Panics if the result holds an error, like [`Result::value_mut`].
impl<T, E> DerefMut for Result<T, E> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        self.value_mut()
    }
}

impl<T: PartialEq, E> PartialEq for Result<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Value(a), Repr::Value(b)) => a == b,
            _ => false,
        }
    }
}

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(result: core::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::from_value(value),
            Err(error) => Self::from_error(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result.repr {
            Repr::Value(value) => Ok(value),
            Repr::Error(error) => Err(error),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Result<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Repr::Error(error) => f.debug_tuple("Error").field(error).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ara_error::CoreErrc;

    fn invalid() -> ErrorCode {
        ErrorCode::from(CoreErrc::InvalidArgument)
    }

    #[test]
    fn emplace_replaces_alternative() {
        let mut r: Result<i32> = Result::from_value(1);
        r.emplace_error(invalid());
        assert!(!r.has_value());
        r.emplace_value_with(|| 7);
        assert_eq!(*r.value(), 7);
    }

    #[test]
    fn panicking_emplace_keeps_contents() {
        let mut r: Result<i32> = Result::from_value(3);
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            r.emplace_error_with(|| panic!("construction failed"));
        }));
        assert!(outcome.is_err());
        assert!(r.eq_value(&3));
    }

    #[test]
    #[should_panic(expected = "value accessed on a Result that holds an error")]
    fn value_of_error_panics() {
        let r: Result<i32> = Result::from_error(invalid());
        let _ = r.value();
    }

    #[test]
    #[should_panic(expected = "error accessed on a Result that holds a value")]
    fn error_of_value_panics() {
        let r: Result<i32> = Result::from_value(0);
        let _ = r.into_error();
    }

    #[test]
    fn deref_reaches_value() {
        let mut r: Result<Vec<u8>> = Result::from_value(vec![1, 2]);
        r.push(3);
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn debug_names_alternative() {
        let r: Result<i32, u8> = Result::from_error(4);
        assert_eq!(format!("{r:?}"), "Error(4)");
        let r: Result<i32, u8> = Result::from_value(4);
        assert_eq!(format!("{r:?}"), "Value(4)");
    }
}
