// ARA - ara-error
// Module: ARA Core Error Domain
// SW-REQ-ID: SWS_CORE_05200
// SW-REQ-ID: SWS_CORE_05221
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error domain of the Core functional cluster.

use core::fmt;

use crate::{
    domain::{CodeType, ErrorDomain, IdType, SupportDataType},
    ErrorCode, Exception, IntoErrorCode,
};

/// Errors of the Core functional cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum CoreErrc {
    /// An invalid argument was passed to a function
    InvalidArgument           = 22,
    /// Given string is not a valid model element shortname
    InvalidMetaModelShortname = 137,
    /// Missing or invalid path to model element
    InvalidMetaModelPath      = 138,
}

impl CoreErrc {
    /// The raw code value of this error.
    #[must_use]
    pub const fn code(self) -> CodeType {
        self as CodeType
    }
}

impl TryFrom<CodeType> for CoreErrc {
    type Error = CodeType;

    fn try_from(code: CodeType) -> Result<Self, Self::Error> {
        match code {
            22 => Ok(Self::InvalidArgument),
            137 => Ok(Self::InvalidMetaModelShortname),
            138 => Ok(Self::InvalidMetaModelPath),
            other => Err(other),
        }
    }
}

impl IntoErrorCode for CoreErrc {
    fn make_error_code(self, support_data: SupportDataType) -> ErrorCode {
        make_error_code(self, support_data)
    }
}

impl From<CoreErrc> for ErrorCode {
    fn from(errc: CoreErrc) -> Self {
        make_error_code(errc, SupportDataType::default())
    }
}

/// Exception raised for errors of the Core domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreException(Exception);

impl CoreException {
    /// Create a Core exception carrying `error`.
    #[must_use]
    pub const fn new(error: ErrorCode) -> Self {
        Self(Exception::new(error))
    }

    /// The embedded error code.
    #[must_use]
    pub const fn error(&self) -> &ErrorCode {
        self.0.error()
    }
}

impl AsRef<Exception> for CoreException {
    fn as_ref(&self) -> &Exception {
        &self.0
    }
}

impl From<CoreException> for Exception {
    fn from(exception: CoreException) -> Self {
        exception.0
    }
}

impl fmt::Display for CoreException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl core::error::Error for CoreException {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// The error domain of the Core functional cluster.
pub struct CoreErrorDomain {
    id: IdType,
}

static CORE_ERROR_DOMAIN: CoreErrorDomain = CoreErrorDomain {
    id: CoreErrorDomain::ID,
};

impl CoreErrorDomain {
    /// Identifier of the Core domain.
    pub const ID: IdType = 0x8000_0000_0000_0014;

    /// The process-wide Core domain instance.
    #[must_use]
    pub fn instance() -> &'static Self {
        &CORE_ERROR_DOMAIN
    }
}

impl ErrorDomain for CoreErrorDomain {
    fn id(&self) -> IdType {
        self.id
    }

    fn name(&self) -> &'static str {
        "Core"
    }

    fn message(&self, code: CodeType) -> &'static str {
        match CoreErrc::try_from(code) {
            Ok(CoreErrc::InvalidArgument) => "an invalid argument was passed to a function",
            Ok(CoreErrc::InvalidMetaModelShortname) => {
                "given string is not a valid model element shortname"
            },
            Ok(CoreErrc::InvalidMetaModelPath) => "missing or invalid path to model element",
            Err(_) => "Invalid code value",
        }
    }

    #[cfg(feature = "exceptions")]
    fn throw_as_exception(&self, error_code: &ErrorCode) -> ! {
        crate::raise(CoreException::new(*error_code))
    }
}

/// The Core error domain as a generic domain reference.
#[must_use]
pub fn core_error_domain() -> &'static dyn ErrorDomain {
    CoreErrorDomain::instance()
}

/// Create an [`ErrorCode`] within the Core domain.
#[must_use]
pub fn make_error_code(errc: CoreErrc, support_data: SupportDataType) -> ErrorCode {
    ErrorCode::with_support_data(errc.code(), core_error_domain(), support_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errc_values() {
        assert_eq!(CoreErrc::InvalidArgument.code(), 22);
        assert_eq!(CoreErrc::InvalidMetaModelShortname.code(), 137);
        assert_eq!(CoreErrc::InvalidMetaModelPath.code(), 138);
    }

    #[test]
    fn unknown_code_has_fallback_message() {
        assert_eq!(core_error_domain().message(0), "Invalid code value");
        assert_eq!(CoreErrc::try_from(23), Err(23));
    }

    #[test]
    fn singleton_identity() {
        assert!(core::ptr::eq(CoreErrorDomain::instance(), CoreErrorDomain::instance()));
        assert_eq!(core_error_domain().id(), 0x8000_0000_0000_0014);
    }
}
