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

//! # Byte Quantities
//!
//! Byte-denominated counts and offsets, and the conversions between them and
//! element-denominated quantities. Every conversion scales by the byte width
//! of the element type, so a wrapper that hands a length to the operating
//! system always states whether it starts from elements or from bytes.
//!
//! ```rust
//! # use keel_core::quantity::{count_of, count_of_bytes, size_of_count, tail_of};
//! let numbers = [0i32; 5];
//! let count = count_of(&numbers);
//! let bytes = size_of_count(count);
//!
//! assert_eq!(count.get(), 5);
//! assert_eq!(bytes.get(), 20);
//! assert_eq!(count_of_bytes::<i32>(bytes), count);
//! assert!(tail_of(count).is_zero());
//! ```

use super::{count::CountOf, diff::DiffOf};

/// The one-byte element type that byte quantities are counted in.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Byte(u8);

/// A number of bytes.
pub type CountOfBytes = CountOf<Byte>;

/// A signed byte offset.
pub type OffsetOfBytes = DiffOf<Byte>;

/// A forward offset of exactly one byte.
pub const ONE_BYTE: OffsetOfBytes = DiffOf::new(1);

/// Returns the byte width of one `T`.
///
/// # Examples
///
/// ```rust
/// # use keel_core::quantity::{size_of, Byte};
/// assert_eq!(size_of::<u32>().get(), 4);
/// assert_eq!(size_of::<Byte>().get(), 1);
/// ```
#[inline(always)]
pub const fn size_of<T>() -> CountOfBytes {
    CountOf::new(std::mem::size_of::<T>())
}

/// Returns the byte footprint of `value`.
///
/// Arrays and slices report their whole footprint, which is the same as
/// scaling their element count with [`size_of_count`].
///
/// # Examples
///
/// ```rust
/// # use keel_core::quantity::{count_of, size_of_count, size_of_val};
/// let text = *b"test\0";
/// assert_eq!(size_of_val(&text), size_of_count(count_of(&text)));
/// assert_eq!(size_of_val(&7u16).get(), 2);
/// ```
#[inline(always)]
pub fn size_of_val<T: ?Sized>(value: &T) -> CountOfBytes {
    CountOf::new(std::mem::size_of_val(value))
}

/// Scales an element count to its exact byte footprint.
#[inline(always)]
pub const fn size_of_count<T>(count: CountOf<T>) -> CountOfBytes {
    CountOf::new(count.get() * std::mem::size_of::<T>())
}

/// Scales a signed element offset to a signed byte offset.
///
/// # Examples
///
/// ```rust
/// # use keel_core::quantity::{count_of, offset_of};
/// let before = count_of(&[0u64; 2]);
/// let after = count_of(&[0u64; 5]);
/// assert_eq!(offset_of(before - after).get(), -24);
/// ```
#[inline(always)]
pub const fn offset_of<T>(diff: DiffOf<T>) -> OffsetOfBytes {
    DiffOf::new(diff.get() * std::mem::size_of::<T>() as isize)
}

/// Converts a byte count into the number of whole `T` elements it holds,
/// discarding any remainder.
///
/// Zero-sized element types yield a zero count.
///
/// # Examples
///
/// ```rust
/// # use keel_core::quantity::{count_of_bytes, size_of_count, count_of, tail_of_bytes};
/// let bytes = size_of_count(count_of(&[0u8; 10]));
/// assert_eq!(count_of_bytes::<u32>(bytes).get(), 2);
/// assert_eq!(tail_of_bytes::<u32>(bytes).get(), 2);
/// ```
#[inline(always)]
pub const fn count_of_bytes<T>(bytes: CountOfBytes) -> CountOf<T> {
    match std::mem::size_of::<T>() {
        0 => CountOf::ZERO,
        width => CountOf::new(bytes.get() / width),
    }
}

/// Returns the bytes of `count`'s footprint that do not fill a whole `T`.
///
/// Since [`size_of_count`] is exact this is always zero; it exists so that
/// code converting in both directions can state the remainder explicitly.
#[inline(always)]
pub const fn tail_of<T>(count: CountOf<T>) -> CountOfBytes {
    tail_of_bytes::<T>(size_of_count(count))
}

/// Returns the bytes left over when `bytes` is divided into whole `T`
/// elements.
#[inline(always)]
pub const fn tail_of_bytes<T>(bytes: CountOfBytes) -> CountOfBytes {
    match std::mem::size_of::<T>() {
        0 => CountOf::ZERO,
        width => CountOf::new(bytes.get() % width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::count_of;

    #[repr(C)]
    struct Record {
        _id: u32,
        _flags: u16,
        _kind: u8,
    }

    #[test]
    fn test_size_of() {
        assert_eq!(size_of::<u8>().get(), 1);
        assert_eq!(size_of::<u64>().get(), 8);
        assert_eq!(size_of::<Record>().get(), 8);
        assert_eq!(size_of::<()>().get(), 0);
    }

    #[test]
    fn test_size_of_val_matches_count_footprint() {
        let numbers = [0i32; 5];
        assert_eq!(size_of_val(&numbers), size_of_count(count_of(&numbers)));

        let text = "test";
        assert_eq!(size_of_val(text), size_of_count(count_of(text)));

        let empty: Vec<u64> = Vec::new();
        assert!(size_of_count(count_of(&empty)).is_zero());
    }

    #[test]
    fn test_five_ints_scenario() {
        let numbers = [0i32; 5];
        let count = count_of(&numbers);
        let bytes = size_of_count(count);

        assert_eq!(count.get(), 5);
        assert_eq!(bytes.get(), 20);
        assert_eq!(count_of_bytes::<i32>(bytes).get(), 5);
        assert!(tail_of_bytes::<i32>(bytes).is_zero());
    }

    #[test]
    fn test_footprint_is_width_times_length() {
        let lengths = [0usize, 1, 3, 17, 256];
        for &len in &lengths {
            let words = vec![0u16; len];
            let records: Vec<Record> = (0..len)
                .map(|_| Record {
                    _id: 0,
                    _flags: 0,
                    _kind: 0,
                })
                .collect();

            assert_eq!(size_of_count(count_of(&words)).get(), 2 * len);
            assert_eq!(
                size_of_count(count_of(&records)).get(),
                size_of::<Record>().get() * len
            );
        }
    }

    #[test]
    fn test_round_trip_through_bytes() {
        for n in [0usize, 1, 9, 1024] {
            let count = CountOf::<u64>::new(n);
            assert_eq!(count_of_bytes::<u64>(size_of_count(count)), count);

            let records = CountOf::<Record>::new(n);
            assert_eq!(count_of_bytes::<Record>(size_of_count(records)), records);
        }
    }

    #[test]
    fn test_tail_of_is_always_zero() {
        for n in [0usize, 1, 3, 1000] {
            assert!(tail_of(CountOf::<u8>::new(n)).is_zero());
            assert!(tail_of(CountOf::<u32>::new(n)).is_zero());
            assert!(tail_of(CountOf::<Record>::new(n)).is_zero());
        }
    }

    #[test]
    fn test_truncating_conversion() {
        let bytes = CountOfBytes::new(11);
        assert_eq!(count_of_bytes::<u32>(bytes).get(), 2);
        assert_eq!(tail_of_bytes::<u32>(bytes).get(), 3);
    }

    #[test]
    fn test_zero_sized_elements() {
        let bytes = CountOfBytes::new(11);
        assert!(count_of_bytes::<()>(bytes).is_zero());
        assert!(tail_of_bytes::<()>(bytes).is_zero());
        assert!(tail_of(CountOf::<()>::new(4)).is_zero());
    }

    #[test]
    fn test_offset_of() {
        let diff = DiffOf::<u32>::new(-3);
        assert_eq!(offset_of(diff).get(), -12);
        assert_eq!(offset_of(ONE_BYTE), ONE_BYTE);
        assert_eq!(ONE_BYTE.get(), 1);
    }
}
