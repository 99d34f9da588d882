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

//! # Captured Platform Errors
//!
//! `OccurredError` is a snapshot of the calling thread's last platform error
//! (`errno` on Unix, `GetLastError` on Windows), and `ErrorCode` is the
//! portable code it carries.
//!
//! The snapshot must be taken on the thread that made the failing call and
//! before anything else that may overwrite the status runs; this module
//! cannot check that ordering for its callers.

use std::io::ErrorKind;

/// A platform status code.
///
/// # Examples
///
/// ```rust
/// # use keel_core::maybe::ErrorCode;
/// assert!(ErrorCode::SUCCESS.is_success());
/// assert_eq!(ErrorCode::SUCCESS.raw(), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    /// The status reported when no error occurred.
    pub const SUCCESS: Self = Self(0);

    #[inline(always)]
    pub(crate) const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw platform value.
    #[inline(always)]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Checks if this is the "no error" status.
    #[inline(always)]
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }

    /// Returns the portable category of the code.
    pub fn kind(self) -> ErrorKind {
        self.to_io_error().kind()
    }

    /// Returns the platform's description of the code.
    pub fn message(self) -> String {
        let rendered = self.to_io_error().to_string();
        let suffix = format!(" (os error {})", self.0);
        match rendered.strip_suffix(suffix.as_str()) {
            Some(message) => message.to_owned(),
            None => rendered,
        }
    }

    #[inline(always)]
    fn to_io_error(self) -> std::io::Error {
        std::io::Error::from_raw_os_error(self.0)
    }
}

impl std::fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ErrorCode({})", self.0)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "os error {}", self.0)
    }
}

impl From<ErrorCode> for i32 {
    #[inline(always)]
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

/// The last platform error, captured right after a failing call.
///
/// # Examples
///
/// ```rust
/// # use keel_core::maybe::OccurredError;
/// # use std::io::ErrorKind;
/// let opened = std::fs::File::open("/this/path/does/not/exist");
/// if opened.is_err() {
///     let error = OccurredError::capture();
///     assert_eq!(error.kind(), ErrorKind::NotFound);
/// }
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OccurredError {
    code: ErrorCode,
}

impl OccurredError {
    /// Captures the calling thread's last platform error.
    #[must_use]
    pub fn capture() -> Self {
        let raw = std::io::Error::last_os_error()
            .raw_os_error()
            .unwrap_or(0);
        log::trace!("captured platform error: os error {raw}");
        Self::from_raw(raw)
    }

    #[inline(always)]
    pub(crate) const fn from_raw(raw: i32) -> Self {
        Self {
            code: ErrorCode::from_raw(raw),
        }
    }

    /// Returns the captured code.
    #[inline(always)]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Returns the portable category of the captured code.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    /// Returns the platform's description of the captured code.
    #[inline]
    pub fn message(&self) -> String {
        self.code.message()
    }
}

impl std::fmt::Debug for OccurredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OccurredError")
            .field("code", &self.code.raw())
            .field("kind", &self.kind())
            .field("message", &self.message())
            .finish()
    }
}

impl std::fmt::Display for OccurredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), self.code)
    }
}

impl std::error::Error for OccurredError {}

impl From<OccurredError> for std::io::Error {
    fn from(error: OccurredError) -> Self {
        std::io::Error::from_raw_os_error(error.code.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ENOENT on Unix, ERROR_FILE_NOT_FOUND on Windows.
    const NOT_FOUND: i32 = 2;

    #[test]
    fn test_code_accessors() {
        let code = ErrorCode::from_raw(NOT_FOUND);
        assert_eq!(code.raw(), NOT_FOUND);
        assert_eq!(i32::from(code), NOT_FOUND);
        assert!(!code.is_success());
        assert_eq!(code.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_message_matches_platform_text() {
        let code = ErrorCode::from_raw(NOT_FOUND);
        let expected = std::io::Error::from_raw_os_error(NOT_FOUND).to_string();

        assert!(!code.message().is_empty());
        assert!(!code.message().ends_with(")"));
        assert_eq!(format!("{} (os error {})", code.message(), NOT_FOUND), expected);
    }

    #[test]
    fn test_display_matches_io_error() {
        let error = OccurredError::from_raw(NOT_FOUND);
        let io_error = std::io::Error::from(error);

        assert_eq!(error.to_string(), io_error.to_string());
        assert_eq!(io_error.raw_os_error(), Some(NOT_FOUND));
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_capture_after_failed_call() {
        let opened = std::fs::File::open("/keel/this/path/does/not/exist");
        assert!(opened.is_err());

        let error = OccurredError::capture();
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(Some(error.code().raw()), opened.err().and_then(|e| e.raw_os_error()));
    }

    #[test]
    fn test_debug_output() {
        assert_eq!(format!("{:?}", ErrorCode::from_raw(5)), "ErrorCode(5)");
        assert_eq!(format!("{}", ErrorCode::from_raw(5)), "os error 5");

        let debug = format!("{:?}", OccurredError::from_raw(NOT_FOUND));
        assert!(debug.starts_with("OccurredError { code: 2, kind: NotFound"));
    }
}
