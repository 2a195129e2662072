// ARA - ara-core
// Module: ARA Byte
// SW-REQ-ID: SWS_CORE_10100
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! A byte that is only a collection of bits.
//!
//! [`Byte`] has no arithmetic, only comparison, shifts and bitwise logic.
//! Conversion to a number is explicit through [`Byte::to_integer`].

use core::{
    fmt,
    ops::{
        BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
        ShrAssign,
    },
};

/// A single byte of raw memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Byte(u8);

impl Byte {
    /// Create a byte holding `bits`.
    #[must_use]
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// The byte's bits as an integer of type `I`.
    ///
    /// ```
    /// use ara_core::Byte;
    ///
    /// let b = Byte::new(0x80);
    /// assert_eq!(b.to_integer::<u32>(), 128);
    /// assert_eq!(b.to_integer::<i16>(), 128);
    /// ```
    #[must_use]
    pub fn to_integer<I: From<u8>>(self) -> I {
        I::from(self.0)
    }
}

impl From<u8> for Byte {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<Byte> for u8 {
    fn from(byte: Byte) -> Self {
        byte.0
    }
}

impl fmt::Binary for Byte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for Byte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Byte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

// Negative counts and counts of 8 or more shift every bit out.
macro_rules! impl_byte_shifts {
    ($($int:ty),* $(,)?) => {
        $(
            impl Shl<$int> for Byte {
                type Output = Self;

                fn shl(self, count: $int) -> Self {
                    let bits = u32::try_from(count)
                        .ok()
                        .and_then(|count| self.0.checked_shl(count))
                        .unwrap_or(0);
                    Self(bits)
                }
            }

            impl Shr<$int> for Byte {
                type Output = Self;

                fn shr(self, count: $int) -> Self {
                    let bits = u32::try_from(count)
                        .ok()
                        .and_then(|count| self.0.checked_shr(count))
                        .unwrap_or(0);
                    Self(bits)
                }
            }

            impl ShlAssign<$int> for Byte {
                fn shl_assign(&mut self, count: $int) {
                    *self = *self << count;
                }
            }

            impl ShrAssign<$int> for Byte {
                fn shr_assign(&mut self, count: $int) {
                    *self = *self >> count;
                }
            }
        )*
    };
}

impl_byte_shifts!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_byte_logic {
    ($($trait:ident::$method:ident, $assign:ident::$assign_method:ident, $op:tt;)*) => {
        $(
            impl $trait for Byte {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self {
                    Self(self.0 $op rhs.0)
                }
            }

            impl $assign for Byte {
                fn $assign_method(&mut self, rhs: Self) {
                    self.0 = self.0 $op rhs.0;
                }
            }
        )*
    };
}

impl_byte_logic! {
    BitOr::bitor, BitOrAssign::bitor_assign, |;
    BitAnd::bitand, BitAndAssign::bitand_assign, &;
    BitXor::bitxor, BitXorAssign::bitxor_assign, ^;
}

impl Not for Byte {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}
