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

//! # Flag Domains
//!
//! A domain is a family of flags that may be combined with each other. Every
//! declaration creates a new, uninhabited marker type, so flags from two
//! declarations never share a type, even when their names and values agree.
//!
//! ```rust
//! keel_core::flag_domain! {
//!     /// How other openers may share a file.
//!     pub struct ShareMode: u32 {
//!         const NONE = 0x0;
//!         const READ = 0x1;
//!         const WRITE = 0x2;
//!         const DELETE = 0x4;
//!     }
//!
//!     /// Initial state of an event.
//!     pub struct EventState: bool {
//!         const SIGNALED = true;
//!     }
//! }
//!
//! let mode = ShareMode::READ | ShareMode::WRITE;
//! assert_eq!(mode.bits(), 0x3);
//! assert!(!(!EventState::SIGNALED).bits());
//! ```
//!
//! Two declarations with the same name and value in different modules are
//! still different domains:
//!
//! ```rust,compile_fail
//! mod first {
//!     keel_core::flag_domain! { pub struct Tag: u32 { const ONE = 1; } }
//! }
//! mod second {
//!     keel_core::flag_domain! { pub struct Tag: u32 { const ONE = 1; } }
//! }
//!
//! let _ = first::Tag::ONE | second::Tag::ONE;
//! ```

use super::bits::FlagBits;

/// A family of flags that can be combined into a [`Mask`](super::mask::Mask).
///
/// Implemented by the marker types that [`flag_domain!`](crate::flag_domain)
/// declares.
pub trait Domain: 'static {
    /// The primitive type holding the value of a flag or mask.
    type Bits: FlagBits;

    /// A human-readable name used for `Debug` output.
    const NAME: &'static str;
}

/// Declares one or more flag domains and their flags.
///
/// Each `struct` item becomes an uninhabited marker type implementing
/// [`Domain`], and each `const` inside it becomes an associated
/// [`Flag`](crate::flag::Flag) constant of that domain. The visibility of the
/// marker type is applied to its flags as well.
#[macro_export]
macro_rules! flag_domain {
    (
        $(
            $(#[$outer:meta])*
            $vis:vis struct $name:ident : $bits:ty {
                $(
                    $(#[$inner:meta])*
                    const $flag:ident = $value:expr;
                )*
            }
        )+
    ) => {
        $(
            $(#[$outer])*
            #[derive(Debug)]
            $vis enum $name {}

            impl $crate::flag::Domain for $name {
                type Bits = $bits;
                const NAME: &'static str = ::core::stringify!($name);
            }

            #[allow(dead_code)]
            impl $name {
                $(
                    $(#[$inner])*
                    $vis const $flag: $crate::flag::Flag<$name> =
                        $crate::flag::Flag::__declare($value);
                )*
            }
        )+
    };
}
