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

//! # Typed Quantities
//!
//! Element counts and offsets that carry their element type, so that "five
//! `u32` values", "twenty bytes" and a bare `5usize` are three different
//! things to the compiler.
//!
//! ## Submodules
//!
//! - `count`: `CountOf<T>`, a non-negative number of `T` elements.
//! - `diff`: `DiffOf<T>`, the signed distance between two counts of `T`.
//! - `bytes`: the `Byte` element type, `CountOfBytes`/`OffsetOfBytes`, and
//!   the conversions `size_of`, `size_of_val`, `size_of_count`, `offset_of`,
//!   `count_of_bytes`, `tail_of` and `tail_of_bytes`.
//! - `counted`: the `Counted` trait and the `count_of`, `count_of_array` and
//!   `count_of_range` entry points.
//!
//! ## Arithmetic
//!
//! | left         | op      | right                  | result       |
//! |--------------|---------|------------------------|--------------|
//! | `CountOf<T>` | `-`     | `CountOf<T>`           | `DiffOf<T>`  |
//! | `CountOf<T>` | `+` `-` | `DiffOf<T>`            | `CountOf<T>` |
//! | `CountOf<T>` | `*` `/` | unsigned integer       | `CountOf<T>` |
//! | `DiffOf<T>`  | `+` `-` | `DiffOf<T>`            | `DiffOf<T>`  |
//! | `DiffOf<T>`  | `*` `/` `%` | primitive integer  | `DiffOf<T>`  |
//!
//! Overflow behaves like the underlying `usize`/`isize`: it panics in debug
//! builds and wraps in release builds. Use [`CountOf::checked_add_diff`] where
//! a count may legitimately run out of range. A scalar operand that does not
//! fit in `usize` (for counts) or `isize` (for differences) always panics.

pub mod bytes;
pub mod count;
pub mod counted;
pub mod diff;

pub use bytes::{
    Byte, CountOfBytes, ONE_BYTE, OffsetOfBytes, count_of_bytes, offset_of, size_of,
    size_of_count, size_of_val, tail_of, tail_of_bytes,
};
pub use count::CountOf;
pub use counted::{Counted, count_of, count_of_array, count_of_range};
pub use diff::DiffOf;
