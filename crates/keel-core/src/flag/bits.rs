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

//! Underlying representations a flag domain can be built on.

use std::ops::{BitAnd, BitOr, BitXor, Not};

mod private {
    pub trait Sealed {}
}

/// A primitive type that can hold the value of a flag.
///
/// Implemented for every primitive integer and for `bool`. Complement (`!`)
/// is bitwise for integers and logical for `bool`.
pub trait FlagBits:
    private::Sealed
    + Copy
    + Eq
    + std::hash::Hash
    + std::fmt::Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// The value with no flag set.
    const EMPTY: Self;
}

macro_rules! impl_flag_bits {
    ($empty:expr => $($t:ty),+) => {
        $(
            impl private::Sealed for $t {}

            impl FlagBits for $t {
                const EMPTY: Self = $empty;
            }
        )+
    };
}

impl_flag_bits!(0 => u8, u16, u32, u64, u128, usize);
impl_flag_bits!(0 => i8, i16, i32, i64, i128, isize);
impl_flag_bits!(false => bool);

#[cfg(test)]
mod tests {
    use super::FlagBits;

    fn complement<B: FlagBits>(bits: B) -> B {
        !bits
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(<u32 as FlagBits>::EMPTY, 0);
        assert_eq!(<i8 as FlagBits>::EMPTY, 0);
        assert!(!<bool as FlagBits>::EMPTY);
    }

    #[test]
    fn test_complement_is_bitwise_or_logical() {
        assert_eq!(complement(0b1010_0000u8), 0b0101_1111);
        assert_eq!(complement(0i32), -1);
        assert!(!complement(true));
    }
}
