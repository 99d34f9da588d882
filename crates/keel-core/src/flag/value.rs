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

//! # Flags
//!
//! A `Flag<D>` is a single named value of the domain `D`. Flags are declared
//! once with [`flag_domain!`](crate::flag_domain) and never change; combining
//! them yields a [`Mask`](super::mask::Mask).
//!
//! Flags compare for equality but have no ordering, and there is no `+` or
//! `-` between them:
//!
//! ```rust,compile_fail
//! keel_core::flag_domain! {
//!     pub struct ShareMode: u32 {
//!         const READ = 0x1;
//!         const WRITE = 0x2;
//!     }
//! }
//!
//! let _ = ShareMode::READ + ShareMode::WRITE;
//! ```
//!
//! ```rust,compile_fail
//! keel_core::flag_domain! {
//!     pub struct ShareMode: u32 {
//!         const READ = 0x1;
//!         const WRITE = 0x2;
//!     }
//! }
//!
//! let _ = ShareMode::READ < ShareMode::WRITE;
//! ```

use super::domain::Domain;

/// A single flag of the domain `D`.
///
/// # Examples
///
/// ```rust
/// keel_core::flag_domain! {
///     pub struct Attributes: u32 {
///         const HIDDEN = 0x2;
///         const SYSTEM = 0x4;
///     }
/// }
///
/// assert_eq!(Attributes::HIDDEN, Attributes::HIDDEN);
/// assert_ne!(Attributes::HIDDEN, Attributes::SYSTEM);
/// assert_eq!((!Attributes::HIDDEN).bits(), !0x2u32);
/// ```
pub struct Flag<D: Domain> {
    bits: D::Bits,
}

impl<D: Domain> Flag<D> {
    /// Declares a flag from its raw value.
    ///
    /// Only [`flag_domain!`](crate::flag_domain) may call this. It is public
    /// because the exported macro expands in the caller's crate. Calling it
    /// anywhere else creates a flag its domain never declared, which breaks
    /// the guarantee that every `Flag<D>` comes from `D`'s declaration. It is
    /// not part of the stable API and may change without notice.
    #[doc(hidden)]
    #[inline(always)]
    pub const fn __declare(bits: D::Bits) -> Self {
        Self { bits }
    }

    /// Returns the raw value of the flag.
    #[inline(always)]
    pub const fn bits(&self) -> D::Bits {
        self.bits
    }
}

impl<D: Domain> Clone for Flag<D> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Domain> Copy for Flag<D> {}

impl<D: Domain> PartialEq for Flag<D> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<D: Domain> Eq for Flag<D> {}

impl<D: Domain> std::hash::Hash for Flag<D> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<D: Domain> std::fmt::Debug for Flag<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::Flag({:?})", D::NAME, self.bits)
    }
}

impl<D: Domain> std::ops::Not for Flag<D> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Self { bits: !self.bits }
    }
}

#[cfg(test)]
mod tests {
    crate::flag_domain! {
        struct Mode: u16 {
            const A = 0x0001;
            const B = 0x0100;
        }

        struct Signal: bool {
            const RAISED = true;
        }
    }

    #[test]
    fn test_equality() {
        assert_eq!(Mode::A, Mode::A);
        assert_ne!(Mode::A, Mode::B);
    }

    #[test]
    fn test_integer_complement() {
        assert_eq!((!Mode::A).bits(), 0xFFFE);
        assert_eq!(!!Mode::B, Mode::B);
    }

    #[test]
    fn test_boolean_negation() {
        let lowered = !Signal::RAISED;
        assert!(!lowered.bits());
        assert_ne!(lowered, Signal::RAISED);
        assert_eq!(!lowered, Signal::RAISED);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Mode::B), "Mode::Flag(256)");
        assert_eq!(format!("{:?}", Signal::RAISED), "Signal::Flag(true)");
    }

    #[test]
    fn test_flags_are_usable_in_consts() {
        const DEFAULT_MODE: crate::flag::Flag<Mode> = Mode::B;
        assert_eq!(DEFAULT_MODE.bits(), 0x0100);
    }
}
