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

//! # Captured Errors and Fallible Results
//!
//! ## Submodules
//!
//! - `error`: `ErrorCode` and `OccurredError`, a snapshot of the last
//!   platform error taken right after a failing call.
//! - `result`: `Maybe<T>`, either the value of a successful call or the
//!   captured error of a failed one; `Maybe<()>` for calls without a value.
//!
//! ## Failure Policy
//!
//! Every fallible call returns a `Maybe`, and nothing here swallows an error.
//! Callers either check it (`okay`, `code`, `message`), propagate it
//! (`into_result` and `?`), or take the value with an accessor that panics
//! with the captured code. Those accessors are the only place this module
//! panics.

pub mod error;
pub mod result;

pub use error::{ErrorCode, OccurredError};
pub use result::Maybe;
