// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Masks
//!
//! A `Mask<D>` is a runtime combination of flags of one domain. Masks only
//! come into existence from flags: either by converting a single flag or by
//! combining two with `|`, `&` or `^`. Every operator accepts a mask or a
//! flag of the same domain on either side; mixing domains does not compile.
//!
//! ```rust
//! keel_core::flag_domain! {
//!     pub struct Bits: u32 {
//!         const TWO = 2;
//!         const FOUR = 4;
//!         const EIGHT = 8;
//!     }
//! }
//!
//! let left = Bits::TWO | Bits::FOUR;
//! let right = Bits::FOUR | Bits::EIGHT;
//! assert_eq!(left & right, Bits::FOUR);
//! ```

use super::{bits::FlagBits, domain::Domain, value::Flag};

/// A combination of flags of the domain `D`.
pub struct Mask<D: Domain> {
    bits: D::Bits,
}

impl<D: Domain> Mask<D> {
    #[inline(always)]
    const fn from_bits(bits: D::Bits) -> Self {
        Self { bits }
    }

    /// Returns the raw value of the mask.
    #[inline(always)]
    pub const fn bits(&self) -> D::Bits {
        self.bits
    }

    /// Checks if no bit of the mask is set.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bits == D::Bits::EMPTY
    }

    /// Checks if every bit of `other` is also set in this mask.
    ///
    /// # Examples
    ///
    /// ```rust
    /// keel_core::flag_domain! {
    ///     pub struct Share: u32 {
    ///         const READ = 0x1;
    ///         const WRITE = 0x2;
    ///         const DELETE = 0x4;
    ///     }
    /// }
    ///
    /// let mode = Share::READ | Share::WRITE;
    /// assert!(mode.contains(Share::READ));
    /// assert!(mode.contains(Share::READ | Share::WRITE));
    /// assert!(!mode.contains(Share::READ | Share::DELETE));
    /// ```
    #[inline]
    pub fn contains(&self, other: impl Into<Mask<D>>) -> bool {
        let other = other.into().bits;
        (self.bits & other) == other
    }

    /// Checks if this mask and `other` share at least one set bit.
    #[inline]
    pub fn intersects(&self, other: impl Into<Mask<D>>) -> bool {
        (self.bits & other.into().bits) != D::Bits::EMPTY
    }
}

impl<D: Domain> From<Flag<D>> for Mask<D> {
    #[inline(always)]
    fn from(flag: Flag<D>) -> Self {
        Self::from_bits(flag.bits())
    }
}

impl<D: Domain> Clone for Mask<D> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Domain> Copy for Mask<D> {}

impl<D: Domain> PartialEq for Mask<D> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<D: Domain> Eq for Mask<D> {}

impl<D: Domain> PartialEq<Flag<D>> for Mask<D> {
    #[inline(always)]
    fn eq(&self, other: &Flag<D>) -> bool {
        self.bits == other.bits()
    }
}

impl<D: Domain> PartialEq<Mask<D>> for Flag<D> {
    #[inline(always)]
    fn eq(&self, other: &Mask<D>) -> bool {
        self.bits() == other.bits
    }
}

impl<D: Domain> std::hash::Hash for Mask<D> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<D: Domain> std::fmt::Debug for Mask<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::Mask({:?})", D::NAME, self.bits)
    }
}

impl<D: Domain> std::ops::Not for Mask<D> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Self::from_bits(!self.bits)
    }
}

macro_rules! impl_mask_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<D: Domain> std::ops::$trait_name for Mask<D> {
            type Output = Mask<D>;

            #[inline(always)]
            fn $method(self, rhs: Mask<D>) -> Self::Output {
                Mask::from_bits(self.bits $op rhs.bits)
            }
        }

        impl<D: Domain> std::ops::$trait_name<Flag<D>> for Mask<D> {
            type Output = Mask<D>;

            #[inline(always)]
            fn $method(self, rhs: Flag<D>) -> Self::Output {
                Mask::from_bits(self.bits $op rhs.bits())
            }
        }

        impl<D: Domain> std::ops::$trait_name<Mask<D>> for Flag<D> {
            type Output = Mask<D>;

            #[inline(always)]
            fn $method(self, rhs: Mask<D>) -> Self::Output {
                Mask::from_bits(self.bits() $op rhs.bits)
            }
        }

        impl<D: Domain> std::ops::$trait_name for Flag<D> {
            type Output = Mask<D>;

            #[inline(always)]
            fn $method(self, rhs: Flag<D>) -> Self::Output {
                Mask::from_bits(self.bits() $op rhs.bits())
            }
        }

        impl<D: Domain> std::ops::$assign_trait for Mask<D> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Mask<D>) {
                self.bits = self.bits $op rhs.bits;
            }
        }

        impl<D: Domain> std::ops::$assign_trait<Flag<D>> for Mask<D> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Flag<D>) {
                self.bits = self.bits $op rhs.bits();
            }
        }
    };
}

impl_mask_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_mask_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_mask_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);
