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

//! # Domain-Branded Flags
//!
//! Bit flags whose type records the family they belong to. Operating system
//! interfaces take many bitmask parameters built from loosely related
//! constants; here a share-mode flag and a file-attribute flag have different
//! types, so passing one where the other is expected fails to compile.
//!
//! ## Submodules
//!
//! - `bits`: `FlagBits`, the primitive representations a domain can use
//!   (every integer type and `bool`).
//! - `domain`: the `Domain` trait and the `flag_domain!` declaration macro.
//! - `value`: `Flag<D>`, a single declared flag.
//! - `mask`: `Mask<D>`, a runtime combination of flags of one domain.
//!
//! ## Algebra
//!
//! `|`, `&` and `^` combine any two operands of the same domain (flag or
//! mask) into a `Mask<D>`; `!` complements flags and masks (logically for
//! `bool` domains); `|=`, `&=` and `^=` update a mask in place. Flags and
//! masks compare for equality only. There is deliberately no `+` or `-`: set
//! union and difference are written with `|` and `& !`.

pub mod bits;
pub mod domain;
pub mod mask;
pub mod value;

pub use bits::FlagBits;
pub use domain::Domain;
pub use mask::Mask;
pub use value::Flag;
