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

//! # Keel Core
//!
//! Type-level guard rails for thin wrappers around operating system calls.
//! System interfaces traffic in raw lengths, loosely related bitmask
//! constants, and a thread-local "last error" that is easy to read too late
//! or not at all. This crate gives each of those its own type so the
//! compiler catches the mix-ups.
//!
//! ## Modules
//!
//! - `quantity`: `CountOf<T>` and `DiffOf<T>`, element counts and offsets
//!   tagged with their element type, plus byte-denominated counterparts and
//!   explicit conversions between elements and bytes (`size_of_count`,
//!   `count_of_bytes`, `offset_of`, `tail_of`).
//! - `flag`: `Flag<D>` and `Mask<D>`, bit flags branded with a domain type
//!   declared through `flag_domain!`; flags of different domains cannot be
//!   combined, and there is no arithmetic on flags at all.
//! - `maybe`: `OccurredError`, a snapshot of the last platform error, and
//!   `Maybe<T>`, a value or such an error, with panicking accessors as the
//!   single fatal exit.
//!
//! ## Example
//!
//! ```rust
//! use keel_core::flag_domain;
//! use keel_core::flag::Mask;
//! use keel_core::maybe::Maybe;
//! use keel_core::quantity::{count_of, count_of_bytes, size_of_count, CountOfBytes};
//!
//! flag_domain! {
//!     pub struct Protection: u32 {
//!         const READ = 0x1;
//!         const WRITE = 0x2;
//!     }
//! }
//!
//! fn reserve(bytes: CountOfBytes, protection: Mask<Protection>) -> Maybe<Vec<u8>> {
//!     assert!(protection.contains(Protection::READ));
//!     Maybe::success(vec![0; bytes.get()])
//! }
//!
//! let records = [0u64; 16];
//! let bytes = size_of_count(count_of(&records));
//! let buffer = reserve(bytes, Protection::READ | Protection::WRITE);
//!
//! assert!(buffer.okay());
//! assert_eq!(count_of(buffer.value()).get(), bytes.get());
//! assert_eq!(count_of_bytes::<u64>(bytes), count_of(&records));
//! ```

pub mod flag;
pub mod maybe;
pub mod quantity;
