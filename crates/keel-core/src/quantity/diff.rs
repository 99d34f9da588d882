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

//! # Signed Element Offsets
//!
//! `DiffOf<T>` is the signed companion of [`CountOf<T>`](super::count::CountOf):
//! the distance between two counts of `T`, or an amount by which a count is
//! moved. It supports negation, addition and subtraction with itself, and
//! scaling, division and remainder by primitive integers. A scalar that does
//! not fit in `isize` panics instead of wrapping.

use num_traits::{PrimInt, ToPrimitive};
use std::marker::PhantomData;

/// A signed difference of element counts of type `T`.
///
/// # Examples
///
/// ```rust
/// # use keel_core::quantity::{count_of, DiffOf};
/// let head = count_of(&[0u64; 3]);
/// let tail = count_of(&[0u64; 8]);
///
/// let step: DiffOf<u64> = head - tail;
/// assert_eq!(step.get(), -5);
/// assert_eq!((-step * 2).get(), 10);
/// assert_eq!((step % 3).get(), -2);
/// ```
#[repr(transparent)]
pub struct DiffOf<T> {
    value: isize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> DiffOf<T> {
    /// The empty difference.
    pub const ZERO: Self = Self::new(0);

    #[inline(always)]
    pub(crate) const fn new(value: isize) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Returns the difference as a raw `isize`.
    #[inline(always)]
    pub const fn get(&self) -> isize {
        self.value
    }

    /// Checks if the difference is zero.
    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Checks if the difference is strictly negative.
    #[inline(always)]
    pub const fn is_negative(&self) -> bool {
        self.value < 0
    }
}

impl<T> Clone for DiffOf<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DiffOf<T> {}

impl<T> Default for DiffOf<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T> PartialEq for DiffOf<T> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for DiffOf<T> {}

impl<T> PartialOrd for DiffOf<T> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for DiffOf<T> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> std::hash::Hash for DiffOf<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> std::fmt::Debug for DiffOf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiffOf<{}>({})", std::any::type_name::<T>(), self.value)
    }
}

impl<T> std::fmt::Display for DiffOf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<DiffOf<T>> for isize {
    #[inline(always)]
    fn from(diff: DiffOf<T>) -> Self {
        diff.value
    }
}

impl<T> std::ops::Neg for DiffOf<T> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self::new(-self.value)
    }
}

macro_rules! impl_diff_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T> std::ops::$trait_name for DiffOf<T> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self::Output {
                Self::new(self.value $op rhs.value)
            }
        }

        impl<T> std::ops::$assign_trait for DiffOf<T> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                self.value = self.value $op rhs.value;
            }
        }
    };
}

impl_diff_op!(Add, add, AddAssign, add_assign, +);
impl_diff_op!(Sub, sub, SubAssign, sub_assign, -);

/// Converts a scalar operand without losing bits or sign.
#[inline(always)]
#[track_caller]
fn scalar_to_isize<N: ToPrimitive>(rhs: N) -> isize {
    match rhs.to_isize() {
        Some(value) => value,
        None => scalar_out_of_range(),
    }
}

#[cold]
#[track_caller]
fn scalar_out_of_range() -> ! {
    panic!("scalar operand of a `DiffOf` does not fit in `isize`")
}

macro_rules! impl_diff_scalar_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T, N> std::ops::$trait_name<N> for DiffOf<T>
        where
            N: PrimInt,
        {
            type Output = Self;

            #[inline(always)]
            #[track_caller]
            fn $method(self, rhs: N) -> Self::Output {
                Self::new(self.value $op scalar_to_isize(rhs))
            }
        }

        impl<T, N> std::ops::$assign_trait<N> for DiffOf<T>
        where
            N: PrimInt,
        {
            #[inline(always)]
            #[track_caller]
            fn $assign_method(&mut self, rhs: N) {
                self.value = self.value $op scalar_to_isize(rhs);
            }
        }
    };
}

impl_diff_scalar_op!(Mul, mul, MulAssign, mul_assign, *);
impl_diff_scalar_op!(Div, div, DivAssign, div_assign, /);
impl_diff_scalar_op!(Rem, rem, RemAssign, rem_assign, %);
