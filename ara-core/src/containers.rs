// ARA - ara-core
// Module: ARA Container Types
// SW-REQ-ID: SWS_CORE_01201
// SW-REQ-ID: SWS_CORE_01301
// SW-REQ-ID: SWS_CORE_01401
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Container names used by the platform APIs.
//!
//! Fixed-size arrays are always available; the heap-backed containers need
//! the `alloc` feature.

/// Fixed-size array of `N` elements.
pub type Array<T, const N: usize> = [T; N];

/// Growable contiguous sequence.
#[cfg(feature = "alloc")]
pub type Vector<T> = alloc::vec::Vec<T>;

/// Sorted associative container.
#[cfg(feature = "alloc")]
pub type Map<K, V> = alloc::collections::BTreeMap<K, V>;
