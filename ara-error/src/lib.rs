// ARA - ara-error
// Module: ARA Error Handling
// SW-REQ-ID: SWS_CORE_00110
// SW-REQ-ID: SWS_CORE_00501
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! ARA error identity model
//!
//! This library provides the vocabulary that failures are expressed in across
//! the ARA core primitives:
//!
//! - [`ErrorDomain`]: a process-wide singleton identifying a family of error
//!   codes. Domains compare equal iff their ids are equal.
//! - [`ErrorCode`]: a cheap `Copy` value pairing a raw code with the domain it
//!   came from, plus opaque vendor support data.
//! - [`Exception`]: the carrier used when an error code is escalated.
//! - [`CoreErrorDomain`]: the domain of the Core functional cluster.
//!
//! # Error domains
//!
//! Each domain owns a range of raw code values and maps them to text:
//!
//! | Domain | Id                    | Codes |
//! |--------|-----------------------|-------|
//! | Core   | `0x8000_0000_0000_0014` | 22, 137, 138 |
//!
//! Further domains are declared with [`define_error_domain!`].
//!
//! # Usage
//!
//! ```
//! use ara_error::{CoreErrc, ErrorCode};
//!
//! let code = ErrorCode::from(CoreErrc::InvalidArgument);
//! assert_eq!(code.value(), 22);
//! assert_eq!(code.domain().name(), "Core");
//! assert_eq!(code.description(), "an invalid argument was passed to a function");
//! ```
//!
//! # Feature Flags
//!
//! | Flag         | Effect |
//! |--------------|--------|
//! | `std`        | Standard library support (otherwise `no_std`) |
//! | `exceptions` | Escalation: [`raise`], [`catch`], `throw_as_exception` |
//! | `log`        | Log records at escalation points |

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![allow(clippy::cargo)]
#![warn(clippy::pedantic)]
#![warn(clippy::missing_panics_doc)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

// Standard library support
#[cfg(feature = "std")]
extern crate std;

/// Error code values and the conversion capability for domain enums
pub mod code;
/// The Core functional cluster's error domain
pub mod core_domain;
/// Error domain identity
pub mod domain;
/// Exception carrier and escalation
pub mod exception;

pub mod prelude;

// Macros for declaring error domains
#[macro_use]
pub mod macros;

// Re-export key types
pub use code::{ErrorCode, IntoErrorCode};
#[cfg(feature = "exceptions")]
pub use code::ThrowAsException;
pub use core_domain::{
    core_error_domain, make_error_code, CoreErrc, CoreErrorDomain, CoreException,
};
pub use domain::{CodeType, ErrorDomain, IdType, SupportDataType};
pub use exception::Exception;
#[cfg(feature = "exceptions")]
pub use exception::{catch, raise};
