// ARA - ara-error
// Module: Error Domain Declaration Macros
// SW-REQ-ID: SWS_CORE_00110
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Macros for declaring error domains
//!
//! A domain consists of a code enum, a singleton domain type, the glue that
//! turns codes into [`ErrorCode`](crate::ErrorCode)s and the exception type
//! raised on escalation. [`define_error_domain!`] writes all of it from one
//! table.

/// Expands its input only when this crate has escalation enabled.
///
/// Exported so that [`define_error_domain!`] follows `ara-error`'s
/// `exceptions` feature rather than the invoking crate's features.
#[cfg(feature = "exceptions")]
#[doc(hidden)]
#[macro_export]
macro_rules! __ara_if_exceptions {
    ($($item:tt)*) => {
        $($item)*
    };
}

#[cfg(not(feature = "exceptions"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __ara_if_exceptions {
    ($($item:tt)*) => {};
}

/// Declare an error domain together with its code enum and exception type.
///
/// # Examples
///
/// ```
/// use ara_error::{define_error_domain, ErrorCode, ErrorDomain};
///
/// define_error_domain! {
///     /// Errors of a persistent key-value store.
///     pub enum StorageErrc {
///         /// The store has no space left
///         Full = 1 => "the store is full",
///         /// A record failed its integrity check
///         Corrupted = 2 => "stored data is corrupted",
///     }
///
///     /// Domain of the persistent key-value store.
///     pub domain StorageErrorDomain {
///         id: 0x8000_0000_0000_0101,
///         name: "Storage",
///         unknown: "unknown storage error",
///         accessor: storage_error_domain,
///         exception: StorageException,
///     }
/// }
///
/// let code = ErrorCode::from(StorageErrc::Corrupted);
/// assert_eq!(code.domain().name(), "Storage");
/// assert_eq!(code.description(), "stored data is corrupted");
/// assert_eq!(storage_error_domain().message(99), "unknown storage error");
/// ```
#[macro_export]
macro_rules! define_error_domain {
    (
        $(#[$errc_meta:meta])*
        $vis:vis enum $errc:ident {
            $(
                $(#[$code_meta:meta])*
                $code:ident = $value:literal => $message:literal
            ),+ $(,)?
        }

        $(#[$domain_meta:meta])*
        $dvis:vis domain $domain:ident {
            id: $id:expr,
            name: $name:literal,
            unknown: $unknown:literal,
            accessor: $accessor:ident,
            exception: $exception:ident $(,)?
        }
    ) => {
        $(#[$errc_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        $vis enum $errc {
            $(
                $(#[$code_meta])*
                $code = $value,
            )+
        }

        impl $errc {
            /// The raw code value of this error.
            #[must_use]
            pub const fn code(self) -> $crate::CodeType {
                self as $crate::CodeType
            }
        }

        impl ::core::convert::TryFrom<$crate::CodeType> for $errc {
            type Error = $crate::CodeType;

            fn try_from(code: $crate::CodeType) -> ::core::result::Result<Self, Self::Error> {
                match code {
                    $( $value => ::core::result::Result::Ok(Self::$code), )+
                    other => ::core::result::Result::Err(other),
                }
            }
        }

        $(#[$domain_meta])*
        $dvis struct $domain {
            id: $crate::IdType,
        }

        impl $domain {
            /// Identifier of this domain.
            pub const ID: $crate::IdType = $id;

            /// The process-wide instance of this domain.
            #[must_use]
            pub fn instance() -> &'static Self {
                static INSTANCE: $domain = $domain { id: $domain::ID };
                &INSTANCE
            }
        }

        impl $crate::ErrorDomain for $domain {
            fn id(&self) -> $crate::IdType {
                self.id
            }

            fn name(&self) -> &'static str {
                $name
            }

            fn message(&self, code: $crate::CodeType) -> &'static str {
                match code {
                    $( $value => $message, )+
                    _ => $unknown,
                }
            }

            $crate::__ara_if_exceptions! {
                fn throw_as_exception(&self, error_code: &$crate::ErrorCode) -> ! {
                    $crate::raise($exception::new(*error_code))
                }
            }
        }

        #[doc = concat!("The ", $name, " error domain as a generic domain reference.")]
        #[must_use]
        $dvis fn $accessor() -> &'static dyn $crate::ErrorDomain {
            $domain::instance()
        }

        impl $crate::IntoErrorCode for $errc {
            fn make_error_code(self, support_data: $crate::SupportDataType) -> $crate::ErrorCode {
                $crate::ErrorCode::with_support_data(self.code(), $accessor(), support_data)
            }
        }

        impl ::core::convert::From<$errc> for $crate::ErrorCode {
            fn from(errc: $errc) -> Self {
                $crate::IntoErrorCode::make_error_code(errc, 0)
            }
        }

        #[doc = concat!("Exception raised for errors of the ", $name, " domain.")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $dvis struct $exception($crate::Exception);

        impl $exception {
            /// Create an exception carrying `error`.
            #[must_use]
            pub const fn new(error: $crate::ErrorCode) -> Self {
                Self($crate::Exception::new(error))
            }

            /// The embedded error code.
            #[must_use]
            pub const fn error(&self) -> &$crate::ErrorCode {
                self.0.error()
            }
        }

        impl ::core::convert::AsRef<$crate::Exception> for $exception {
            fn as_ref(&self) -> &$crate::Exception {
                &self.0
            }
        }

        impl ::core::convert::From<$exception> for $crate::Exception {
            fn from(exception: $exception) -> Self {
                exception.0
            }
        }

        impl ::core::fmt::Display for $exception {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::error::Error for $exception {
            fn source(&self) -> ::core::option::Option<&(dyn ::core::error::Error + 'static)> {
                ::core::option::Option::Some(&self.0)
            }
        }
    };
}
