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

//! # Element Counts
//!
//! `CountOf<T>` is a non-negative number of elements of type `T`. The element
//! type only exists at the type level: a count of `u16` values and a count of
//! bytes are different types, and neither can be mixed up with a bare `usize`.
//!
//! Counts are produced by the counting functions in [`super::counted`] and by
//! the byte conversions in [`super::bytes`]; there is no public constructor
//! from a raw integer. The numeric value can be read back with
//! [`CountOf::get`] or an explicit `usize::from`.

use super::diff::DiffOf;
use num_traits::{PrimInt, ToPrimitive, Unsigned};
use std::marker::PhantomData;

/// A number of elements of type `T`.
///
/// # Examples
///
/// ```rust
/// # use keel_core::quantity::{count_of, CountOf};
/// let samples = [0u16; 6];
/// let count: CountOf<u16> = count_of(&samples);
/// assert_eq!(count.get(), 6);
///
/// let consumed = count_of(&samples[..2]);
/// let left = count - (count - consumed);
/// assert_eq!(left, consumed);
/// assert_eq!((count * 2u8).get(), 12);
/// ```
///
/// Counts scale by unsigned integers only. An operand that does not fit in
/// `usize` panics instead of being truncated.
///
/// ```rust,compile_fail
/// # use keel_core::quantity::count_of;
/// let count = count_of(&[0u16; 6]);
/// let _ = count / -3i32;
/// ```
#[repr(transparent)]
pub struct CountOf<T> {
    value: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> CountOf<T> {
    /// The empty count.
    pub const ZERO: Self = Self::new(0);

    #[inline(always)]
    pub(crate) const fn new(value: usize) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements as a raw `usize`.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.value
    }

    /// Checks if the count is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::quantity::{count_of, CountOf};
    /// let empty: [u8; 0] = [];
    /// assert!(count_of(&empty).is_zero());
    /// assert!(CountOf::<u64>::ZERO.is_zero());
    /// ```
    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Moves the count by `diff`, returning `None` if the result would be
    /// negative or exceed `usize::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::quantity::count_of;
    /// let four = count_of(&[1u32, 2, 3, 4]);
    /// let one = count_of(&[1u32]);
    ///
    /// assert_eq!(one.checked_add_diff(one - four), None);
    /// assert_eq!(four.checked_add_diff(one - four), Some(one));
    /// ```
    #[inline]
    pub const fn checked_add_diff(self, diff: DiffOf<T>) -> Option<Self> {
        match self.value.checked_add_signed(diff.get()) {
            Some(value) => Some(Self::new(value)),
            None => None,
        }
    }
}

#[inline(always)]
fn add_delta(value: usize, delta: isize) -> usize {
    let (result, overflowed) = value.overflowing_add_signed(delta);
    debug_assert!(!overflowed, "attempt to move a count outside of `usize`");
    result
}

#[inline(always)]
fn sub_delta(value: usize, delta: isize) -> usize {
    let (result, overflowed) = if delta >= 0 {
        value.overflowing_sub(delta as usize)
    } else {
        value.overflowing_add(delta.unsigned_abs())
    };
    debug_assert!(!overflowed, "attempt to move a count outside of `usize`");
    result
}

impl<T> Clone for CountOf<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CountOf<T> {}

impl<T> Default for CountOf<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T> PartialEq for CountOf<T> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for CountOf<T> {}

impl<T> PartialOrd for CountOf<T> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for CountOf<T> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> std::hash::Hash for CountOf<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> std::fmt::Debug for CountOf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CountOf<{}>({})", std::any::type_name::<T>(), self.value)
    }
}

impl<T> std::fmt::Display for CountOf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<CountOf<T>> for usize {
    #[inline(always)]
    fn from(count: CountOf<T>) -> Self {
        count.value
    }
}

impl<T> std::ops::Sub for CountOf<T> {
    type Output = DiffOf<T>;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        DiffOf::new(self.value as isize - rhs.value as isize)
    }
}

impl<T> std::ops::Add<DiffOf<T>> for CountOf<T> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: DiffOf<T>) -> Self::Output {
        Self::new(add_delta(self.value, rhs.get()))
    }
}

impl<T> std::ops::AddAssign<DiffOf<T>> for CountOf<T> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: DiffOf<T>) {
        self.value = add_delta(self.value, rhs.get());
    }
}

impl<T> std::ops::Sub<DiffOf<T>> for CountOf<T> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: DiffOf<T>) -> Self::Output {
        Self::new(sub_delta(self.value, rhs.get()))
    }
}

impl<T> std::ops::SubAssign<DiffOf<T>> for CountOf<T> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: DiffOf<T>) {
        self.value = sub_delta(self.value, rhs.get());
    }
}

/// Converts an unsigned scalar operand without losing bits.
#[inline(always)]
#[track_caller]
fn scalar_to_usize<N: ToPrimitive>(rhs: N) -> usize {
    match rhs.to_usize() {
        Some(value) => value,
        None => scalar_out_of_range(),
    }
}

#[cold]
#[track_caller]
fn scalar_out_of_range() -> ! {
    panic!("scalar operand of a `CountOf` does not fit in `usize`")
}

macro_rules! impl_count_scalar_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T, N> std::ops::$trait_name<N> for CountOf<T>
        where
            N: PrimInt + Unsigned,
        {
            type Output = Self;

            #[inline(always)]
            #[track_caller]
            fn $method(self, rhs: N) -> Self::Output {
                Self::new(self.value $op scalar_to_usize(rhs))
            }
        }

        impl<T, N> std::ops::$assign_trait<N> for CountOf<T>
        where
            N: PrimInt + Unsigned,
        {
            #[inline(always)]
            #[track_caller]
            fn $assign_method(&mut self, rhs: N) {
                self.value = self.value $op scalar_to_usize(rhs);
            }
        }
    };
}

impl_count_scalar_op!(Mul, mul, MulAssign, mul_assign, *);
impl_count_scalar_op!(Div, div, DivAssign, div_assign, /);
