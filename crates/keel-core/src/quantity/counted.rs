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

//! # Counting Sequences
//!
//! Entry points that turn a homogeneous sequence into a [`CountOf`]. A count
//! can only be obtained from something that actually holds elements of the
//! counted type: a container, a fixed-size array, or a pointer range.

use super::count::CountOf;
use std::collections::VecDeque;
use std::ops::Range;

/// A homogeneous sequence whose length can be expressed as a typed count.
///
/// # Examples
///
/// ```rust
/// # use keel_core::quantity::{Counted, CountOf};
/// let queue: std::collections::VecDeque<char> = "abc".chars().collect();
/// let count: CountOf<char> = queue.element_count();
/// assert_eq!(count.get(), 3);
/// ```
pub trait Counted {
    /// The type of the counted elements.
    type Element;

    /// Returns the number of elements.
    fn element_count(&self) -> CountOf<Self::Element>;
}

impl<T> Counted for [T] {
    type Element = T;

    #[inline(always)]
    fn element_count(&self) -> CountOf<T> {
        CountOf::new(self.len())
    }
}

impl<T, const N: usize> Counted for [T; N] {
    type Element = T;

    #[inline(always)]
    fn element_count(&self) -> CountOf<T> {
        CountOf::new(N)
    }
}

impl<T> Counted for Vec<T> {
    type Element = T;

    #[inline(always)]
    fn element_count(&self) -> CountOf<T> {
        CountOf::new(self.len())
    }
}

impl<T> Counted for VecDeque<T> {
    type Element = T;

    #[inline(always)]
    fn element_count(&self) -> CountOf<T> {
        CountOf::new(self.len())
    }
}

impl<T> Counted for Box<[T]> {
    type Element = T;

    #[inline(always)]
    fn element_count(&self) -> CountOf<T> {
        CountOf::new(self.len())
    }
}

/// Strings are counted in UTF-8 code units.
impl Counted for str {
    type Element = u8;

    #[inline(always)]
    fn element_count(&self) -> CountOf<u8> {
        CountOf::new(self.len())
    }
}

impl Counted for String {
    type Element = u8;

    #[inline(always)]
    fn element_count(&self) -> CountOf<u8> {
        CountOf::new(self.len())
    }
}

/// Slice iterators count the elements they have not yielded yet.
impl<T> Counted for std::slice::Iter<'_, T> {
    type Element = T;

    #[inline(always)]
    fn element_count(&self) -> CountOf<T> {
        CountOf::new(self.len())
    }
}

impl<T> Counted for std::slice::IterMut<'_, T> {
    type Element = T;

    #[inline(always)]
    fn element_count(&self) -> CountOf<T> {
        CountOf::new(self.len())
    }
}

/// Counts the elements of a sequence.
///
/// # Examples
///
/// ```rust
/// # use keel_core::quantity::count_of;
/// let chars = count_of("test");
/// let ints = count_of(&[0i32; 5]);
/// let words = count_of(&vec![0u16; 3]);
///
/// assert_eq!(chars.get(), 4);
/// assert_eq!(ints.get(), 5);
/// assert_eq!(words.get(), 3);
/// ```
///
/// Counts of different element types do not mix:
///
/// ```rust,compile_fail
/// # use keel_core::quantity::count_of;
/// let chars = count_of("test");
/// let ints = count_of(&[0i32; 5]);
/// let _ = ints - chars;
/// ```
#[inline(always)]
pub fn count_of<C>(sequence: &C) -> CountOf<C::Element>
where
    C: Counted + ?Sized,
{
    sequence.element_count()
}

/// Counts the elements of a fixed-size array at compile time.
///
/// # Examples
///
/// ```rust
/// # use keel_core::quantity::{count_of_array, CountOf};
/// const TABLE: [u32; 4] = [1, 2, 4, 8];
/// const ENTRIES: CountOf<u32> = count_of_array(&TABLE);
/// assert_eq!(ENTRIES.get(), 4);
/// ```
#[inline(always)]
pub const fn count_of_array<T, const N: usize>(_array: &[T; N]) -> CountOf<T> {
    CountOf::new(N)
}

/// Counts the elements between two pointers into the same allocation.
///
/// The pointers are only compared, never dereferenced.
///
/// # Panics
///
/// Panics if `range.end` lies before `range.start`, or if `T` is zero-sized.
///
/// # Examples
///
/// ```rust
/// # use keel_core::quantity::count_of_range;
/// let samples = [0.5f32; 8];
/// let count = count_of_range(samples[2..].as_ptr_range());
/// assert_eq!(count.get(), 6);
/// ```
#[track_caller]
pub fn count_of_range<T>(range: Range<*const T>) -> CountOf<T> {
    let width = std::mem::size_of::<T>();
    assert!(
        width != 0,
        "called `count_of_range` with a zero-sized element type"
    );

    let start = range.start.addr();
    let end = range.end.addr();
    assert!(
        end >= start,
        "called `count_of_range` with a range that ends before it starts"
    );

    CountOf::new((end - start) / width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_of_containers() {
        let array = [1u8, 2, 3];
        let slice: &[u8] = &array[1..];
        let vec = vec![1u64; 4];
        let deque: VecDeque<i16> = VecDeque::from(vec![1, 2]);
        let boxed: Box<[char]> = vec!['a'; 6].into_boxed_slice();
        let string = String::from("hello");

        assert_eq!(count_of(&array).get(), 3);
        assert_eq!(count_of(slice).get(), 2);
        assert_eq!(count_of(&vec).get(), 4);
        assert_eq!(count_of(&deque).get(), 2);
        assert_eq!(count_of(&boxed).get(), 6);
        assert_eq!(count_of(&string).get(), 5);
        assert_eq!(count_of("héllo").get(), 6);
    }

    #[test]
    fn test_count_of_iterators() {
        let values = [1u32, 2, 3, 4];
        let mut iter = values.iter();
        assert_eq!(count_of(&iter).get(), 4);

        iter.next();
        assert_eq!(count_of(&iter).get(), 3);

        let mut owned = values;
        let iter_mut = owned.iter_mut();
        assert_eq!(count_of(&iter_mut).get(), 4);
    }

    #[test]
    fn test_element_count_leaves_iterator_usable() {
        let values = [1u8, 2, 3];
        let mut iter = values.iter();

        assert_eq!(iter.element_count().get(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.element_count().get(), 2);
        assert_eq!(iter.count(), 2);
    }

    #[test]
    fn test_count_of_array_is_const() {
        const TABLE: [u16; 7] = [0; 7];
        const COUNT: CountOf<u16> = count_of_array(&TABLE);
        assert_eq!(COUNT.get(), 7);
        assert_eq!(COUNT, count_of(&TABLE));
    }

    #[test]
    fn test_count_of_range() {
        let values = [0u64; 10];
        let range = values.as_ptr_range();
        assert_eq!(count_of_range(range).get(), 10);

        let empty = values[4..4].as_ptr_range();
        assert!(count_of_range(empty).is_zero());

        let middle = values[3..8].as_ptr_range();
        assert_eq!(count_of_range(middle), count_of(&values[3..8]));
    }

    #[test]
    #[should_panic(expected = "called `count_of_range` with a range that ends before it starts")]
    fn test_count_of_reversed_range_panics() {
        let values = [0u32; 4];
        let range = values.as_ptr_range();
        let _ = count_of_range(range.end..range.start);
    }

    #[test]
    #[should_panic(expected = "called `count_of_range` with a zero-sized element type")]
    fn test_count_of_zero_sized_range_panics() {
        let units = [(); 3];
        let _ = count_of_range(units.as_ptr_range());
    }
}
