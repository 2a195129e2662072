// ARA - ara-error
// Module: ARA Error Domain
// SW-REQ-ID: SWS_CORE_00110
// SW-REQ-ID: SWS_CORE_00137
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error domain identity.
//!
//! An error domain is the controlling entity for an [`ErrorCode`]'s raw value:
//! it defines which values exist and maps them to text and, when escalation is
//! enabled, to the exception type raised for them.
//!
//! Domains are singletons. Implementors declare a `static` instance and hand
//! out `&'static dyn ErrorDomain` only; domain types must not implement
//! `Clone` or `Copy` and should keep their fields private so that no second
//! instance can be created outside the defining module:
//!
//! ```compile_fail
//! // A domain can only be observed through a shared reference.
//! let copy = *ara_error::CoreErrorDomain::instance();
//! ```
//!
//! [`ErrorCode`]: crate::ErrorCode

use core::{
    fmt,
    hash::{Hash, Hasher},
};

/// Unique identifier of an error domain.
pub type IdType = u64;

/// Domain-specific raw error code value.
pub type CodeType = i32;

/// Vendor-specific supplementary error context data.
pub type SupportDataType = u32;

/// A family of error codes with a system-wide unique identifier.
///
/// Two domains compare equal iff their [`id`](ErrorDomain::id) values are
/// equal; names and messages play no part in identity.
///
/// The `Sync + 'static` bound lets every [`ErrorCode`](crate::ErrorCode)
/// refer to its domain without owning it and lets domains be read from any
/// thread without locking.
pub trait ErrorDomain: Sync + 'static {
    /// Return the unique domain identifier.
    fn id(&self) -> IdType;

    /// Return the short name of this domain.
    fn name(&self) -> &'static str;

    /// Return a textual representation of the given code value.
    ///
    /// Passing a code that did not originate from this domain is a contract
    /// violation; implementations return an implementation-defined text.
    fn message(&self, code: CodeType) -> &'static str;

    /// Raise the exception type this domain associates with `error_code`.
    ///
    /// Never returns normally.
    #[cfg(feature = "exceptions")]
    fn throw_as_exception(&self, error_code: &crate::ErrorCode) -> !;
}

impl PartialEq for dyn ErrorDomain {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for dyn ErrorDomain {}

impl Hash for dyn ErrorDomain {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for dyn ErrorDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorDomain")
            .field("id", &format_args!("{:#018x}", self.id()))
            .field("name", &self.name())
            .finish()
    }
}

impl fmt::Display for dyn ErrorDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
