// ARA - ara-core
// Module: ARA Core Prelude
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for ara-core
//!
//! `use ara_core::prelude::*` brings the result type, the error model and the
//! container helpers into scope. The platform [`Result`] replaces the
//! standard one in the importing module; the standard type stays reachable
//! as `core::result::Result`.

pub use ara_error::prelude::*;

pub use crate::{
    bind::{BindResult, Flattened, Wrapped},
    byte::Byte,
    containers::Array,
    result::{swap, Result},
    utility::{data, empty, size, Container, ContiguousContainer},
    void::VoidResult,
};
#[cfg(feature = "alloc")]
pub use crate::containers::{Map, Vector};
