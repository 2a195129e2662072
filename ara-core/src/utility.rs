// ARA - ara-core
// Module: ARA Container Access
// SW-REQ-ID: SWS_CORE_04110
// SW-REQ-ID: SWS_CORE_04120
// SW-REQ-ID: SWS_CORE_04130
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Uniform size, emptiness and data access across containers.
//!
//! ```
//! use ara_core::{data, empty, size};
//!
//! let readings = [3_u16, 5, 8];
//! assert_eq!(size(&readings), 3);
//! assert!(!empty(&readings));
//! assert_eq!(data(&readings)[1], 5);
//! assert!(empty(""));
//! ```

#[cfg(feature = "alloc")]
use alloc::{collections::BTreeMap, string::String, vec::Vec};

/// A container with a known number of elements.
pub trait Container {
    /// Number of elements.
    fn size(&self) -> usize;

    /// Whether the container has no elements.
    fn empty(&self) -> bool {
        self.size() == 0
    }
}

/// A container whose elements are stored contiguously.
pub trait ContiguousContainer: Container {
    /// The stored element type.
    type Element;

    /// The stored elements as a slice.
    fn data(&self) -> &[Self::Element];
}

/// Number of elements in `container`.
#[must_use]
pub fn size<C: Container + ?Sized>(container: &C) -> usize {
    container.size()
}

/// Whether `container` has no elements.
#[must_use]
pub fn empty<C: Container + ?Sized>(container: &C) -> bool {
    container.empty()
}

/// The contiguous elements of `container`.
#[must_use]
pub fn data<C: ContiguousContainer + ?Sized>(container: &C) -> &[C::Element] {
    container.data()
}

impl<T> Container for [T] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> ContiguousContainer for [T] {
    type Element = T;

    fn data(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Container for [T; N] {
    fn size(&self) -> usize {
        N
    }
}

impl<T, const N: usize> ContiguousContainer for [T; N] {
    type Element = T;

    fn data(&self) -> &[T] {
        self
    }
}

impl Container for str {
    fn size(&self) -> usize {
        self.len()
    }
}

impl ContiguousContainer for str {
    type Element = u8;

    fn data(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "alloc")]
impl<T> Container for Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "alloc")]
impl<T> ContiguousContainer for Vec<T> {
    type Element = T;

    fn data(&self) -> &[T] {
        self
    }
}

#[cfg(feature = "alloc")]
impl Container for String {
    fn size(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "alloc")]
impl ContiguousContainer for String {
    type Element = u8;

    fn data(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "alloc")]
impl<K, V> Container for BTreeMap<K, V> {
    fn size(&self) -> usize {
        self.len()
    }
}
