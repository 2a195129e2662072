//! Core value types for the ARA adaptive platform.
//!
//! The centrepiece is [`Result`], a value-based alternative to exceptions:
//! an operation returns either its value or an [`ErrorCode`] and the caller
//! decides how to handle the error. Alongside it live the small vocabulary
//! types the platform APIs are written in.
//!
//! It supports three configurations:
//! - `std`: Full standard library support, escalation via `exceptions`
//! - `no_std` + `alloc`: No standard library but with the heap containers
//! - `no_std` + `no_alloc`: `Result`, [`Byte`] and [`Array`] only
//!
//! # Feature Flags
//!
//! - `std`: Enables standard library support (implies `alloc`)
//! - `alloc`: Enables [`Vector`] and [`Map`] in `no_std` environments
//! - `exceptions`: Enables [`Result::value_or_throw`] (implies `std`)
//! - `log`: Log records at escalation points and contract violations
//!
//! # Example
//!
//! ```
//! use ara_core::{CoreErrc, ErrorCode, Result};
//!
//! fn parse_shortname(name: &str) -> Result<&str> {
//!     if name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
//!         Result::from_value(name)
//!     } else {
//!         Result::from_error(CoreErrc::InvalidMetaModelShortname.into())
//!     }
//! }
//!
//! assert!(parse_shortname("Wheel_Speed").has_value());
//! let failed = parse_shortname("wheel speed");
//! assert_eq!(*failed.error(), ErrorCode::from(CoreErrc::InvalidMetaModelShortname));
//! assert_eq!(failed.value_or("unnamed"), "unnamed");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// ARA - ara-core
// SW-REQ-ID: SWS_CORE_00701
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

// Prelude module for consistent imports across std and no_std environments
pub mod prelude;

/// Chaining support for [`Result::bind`]
pub mod bind;
/// Byte type with bitwise semantics only
pub mod byte;
/// Container type aliases
pub mod containers;
/// The value-or-error result type
pub mod result;
/// Generic container access helpers
pub mod utility;
/// The result type of operations without a value
pub mod void;

pub use bind::{BindResult, Flattened, Wrapped};
pub use byte::Byte;
#[cfg(feature = "alloc")]
pub use containers::{Map, Vector};
pub use containers::Array;
pub use result::{swap, Result};
pub use utility::{data, empty, size, Container, ContiguousContainer};
pub use void::VoidResult;

// Re-export the error model so users need only one dependency
#[cfg(feature = "exceptions")]
pub use ara_error::{catch, raise, ThrowAsException};
pub use ara_error::{
    core_error_domain, define_error_domain, make_error_code, CodeType, CoreErrc,
    CoreErrorDomain, CoreException, ErrorCode, ErrorDomain, Exception, IdType, IntoErrorCode,
    SupportDataType,
};
