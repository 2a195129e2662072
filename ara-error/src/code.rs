// ARA - ara-error
// Module: ARA Error Code
// SW-REQ-ID: SWS_CORE_00501
// SW-REQ-ID: SWS_CORE_00571
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

use core::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::domain::{CodeType, ErrorDomain, SupportDataType};

/// Conversion capability for domain-specific error enums.
///
/// A domain registers its code enum once by implementing this trait; every
/// generic consumer (`ErrorCode::from_errc`, `From<Errc> for ErrorCode`, the
/// `Result` error factories) goes through it.
pub trait IntoErrorCode: Copy {
    /// Create an [`ErrorCode`] within the enum's domain.
    fn make_error_code(self, support_data: SupportDataType) -> ErrorCode;
}

/// Escalation hook used by `Result::value_or_throw`.
///
/// Implemented by [`ErrorCode`]; custom error types that want to be escalated
/// implement it by raising their own exception.
#[cfg(feature = "exceptions")]
pub trait ThrowAsException {
    /// Raise the exception associated with this error. Never returns.
    fn throw_as_exception(&self) -> !;
}

/// A raw error code value tagged with the [`ErrorDomain`] it belongs to.
///
/// `ErrorCode` is `Copy`: one code, one domain reference, one word of support
/// data. Two codes compare equal when their values and domains are equal;
/// support data is context, not identity.
#[derive(Clone, Copy)]
pub struct ErrorCode {
    value:        CodeType,
    domain:       &'static dyn ErrorDomain,
    support_data: SupportDataType,
}

impl ErrorCode {
    /// Create an error code from a raw value and its domain.
    #[must_use]
    pub const fn new(value: CodeType, domain: &'static dyn ErrorDomain) -> Self {
        Self::with_support_data(value, domain, 0)
    }

    /// Create an error code carrying vendor-specific support data.
    #[must_use]
    pub const fn with_support_data(
        value: CodeType,
        domain: &'static dyn ErrorDomain,
        support_data: SupportDataType,
    ) -> Self {
        Self {
            value,
            domain,
            support_data,
        }
    }

    /// Create an error code from a domain enum value.
    #[must_use]
    pub fn from_errc<C: IntoErrorCode>(errc: C) -> Self {
        errc.make_error_code(SupportDataType::default())
    }

    /// Create an error code from a domain enum value with support data.
    #[must_use]
    pub fn from_errc_with_data<C: IntoErrorCode>(errc: C, support_data: SupportDataType) -> Self {
        errc.make_error_code(support_data)
    }

    /// The raw error code value.
    #[must_use]
    pub const fn value(&self) -> CodeType {
        self.value
    }

    /// The domain this code belongs to.
    #[must_use]
    pub const fn domain(&self) -> &'static dyn ErrorDomain {
        self.domain
    }

    /// The supplementary error context data.
    #[must_use]
    pub const fn support_data(&self) -> SupportDataType {
        self.support_data
    }

    /// Short text for this code: the name of its domain.
    ///
    /// Use [`description`](Self::description) for the per-code message.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.domain.name()
    }

    /// The domain's message for this code value.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.domain.message(self.value)
    }

    /// Raise this code as the exception its domain associates with it.
    #[cfg(feature = "exceptions")]
    pub fn throw_as_exception(&self) -> ! {
        self.domain.throw_as_exception(self)
    }
}

#[cfg(feature = "exceptions")]
impl ThrowAsException for ErrorCode {
    fn throw_as_exception(&self) -> ! {
        self.domain.throw_as_exception(self)
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && *self.domain == *other.domain
    }
}

impl Eq for ErrorCode {}

impl Hash for ErrorCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.domain.hash(state);
    }
}

impl fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCode")
            .field("value", &self.value)
            .field("domain", &self.domain.name())
            .field("support_data", &self.support_data)
            .finish()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.domain.name(),
            self.value,
            self.description()
        )
    }
}

impl core::error::Error for ErrorCode {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core_error_domain, CoreErrc};

    #[test]
    fn support_data_is_not_identity() {
        let a = ErrorCode::with_support_data(22, core_error_domain(), 1);
        let b = ErrorCode::with_support_data(22, core_error_domain(), 2);
        assert_eq!(a, b);
        assert_ne!(a.support_data(), b.support_data());
    }

    #[test]
    fn message_is_domain_name() {
        let code = ErrorCode::from_errc(CoreErrc::InvalidMetaModelPath);
        assert_eq!(code.message(), "Core");
        assert_eq!(code.description(), "missing or invalid path to model element");
    }

    #[test]
    fn display_names_domain_value_and_text() {
        let code = ErrorCode::from_errc(CoreErrc::InvalidArgument);
        assert_eq!(
            format!("{code}"),
            "Core:22: an invalid argument was passed to a function"
        );
    }
}
