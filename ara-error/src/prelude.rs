// ARA - ara-error
// Module: ARA Error Prelude
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for ara-error
//!
//! Re-exports the error model so that dependent crates can
//! `use ara_error::prelude::*`.

#[cfg(feature = "exceptions")]
pub use crate::{catch, raise, ThrowAsException};
pub use crate::{
    core_error_domain, define_error_domain, make_error_code, CodeType, CoreErrc,
    CoreErrorDomain, CoreException, ErrorCode, ErrorDomain, Exception, IdType, IntoErrorCode,
    SupportDataType,
};
