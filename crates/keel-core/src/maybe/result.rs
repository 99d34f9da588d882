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

//! # Fallible Results
//!
//! `Maybe<T>` holds either the value produced by a fallible platform call or
//! the [`OccurredError`] captured right after it failed. Which of the two it
//! holds is fixed at construction.
//!
//! Callers inspect it with [`Maybe::okay`], [`Maybe::code`] and
//! [`Maybe::message`], propagate it with [`Maybe::into_result`] and `?`, or,
//! where a failure is fatal, take the value with one of the panicking
//! accessors ([`Maybe::value`], [`Maybe::value_mut`], [`Maybe::into_value`],
//! [`Maybe::unwrap`], [`Maybe::unwrap_with`]).
//!
//! ```rust
//! # use keel_core::maybe::{Maybe, OccurredError};
//! fn open(path: &str) -> Maybe<std::fs::File> {
//!     match std::fs::File::open(path) {
//!         Ok(file) => Maybe::success(file),
//!         Err(_) => Maybe::last_error(),
//!     }
//! }
//!
//! let missing = open("/this/path/does/not/exist");
//! assert!(!missing.okay());
//! assert_eq!(missing.code().kind(), std::io::ErrorKind::NotFound);
//!
//! let status: Result<(), OccurredError> = missing.discard().into_result();
//! assert!(status.is_err());
//! ```

use super::error::{ErrorCode, OccurredError};

enum State<T> {
    Success(T),
    Failure(OccurredError),
}

/// The outcome of a fallible platform call: a `T` or a captured error.
///
/// `Maybe<()>` carries only success or failure.
#[must_use = "this `Maybe` may hold a captured platform error, which should be checked"]
pub struct Maybe<T> {
    state: State<T>,
}

#[cold]
#[track_caller]
fn failed(label: std::fmt::Arguments<'_>, error: OccurredError) -> ! {
    log::error!("{label}: {error}");
    panic!("{label}: {error}")
}

impl<T> Maybe<T> {
    /// Wraps the value of a successful call.
    #[inline(always)]
    pub const fn success(value: T) -> Self {
        Self {
            state: State::Success(value),
        }
    }

    /// Wraps a captured error.
    #[inline(always)]
    pub const fn failure(error: OccurredError) -> Self {
        Self {
            state: State::Failure(error),
        }
    }

    /// Captures the last platform error and wraps it.
    ///
    /// Call this immediately after the failing call.
    #[inline]
    pub fn last_error() -> Self {
        Self::failure(OccurredError::capture())
    }

    /// Checks if the call succeeded.
    ///
    /// This is decided by how the `Maybe` was built, not by the captured
    /// code: a failure whose captured code is [`ErrorCode::SUCCESS`] (the
    /// platform reported no error) is still not okay.
    #[inline(always)]
    pub const fn okay(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    /// Returns the captured code, or [`ErrorCode::SUCCESS`] for a success.
    ///
    /// A failure may also carry [`ErrorCode::SUCCESS`] when the failing call
    /// left no platform error behind; check [`Maybe::okay`] rather than
    /// [`ErrorCode::is_success`] to tell the two apart.
    #[inline]
    pub const fn code(&self) -> ErrorCode {
        match &self.state {
            State::Success(_) => ErrorCode::SUCCESS,
            State::Failure(error) => error.code(),
        }
    }

    /// Returns the platform's description of [`Maybe::code`].
    #[inline]
    pub fn message(&self) -> String {
        self.code().message()
    }

    /// Returns the captured error, if any.
    #[inline]
    pub const fn error(&self) -> Option<OccurredError> {
        match &self.state {
            State::Success(_) => None,
            State::Failure(error) => Some(*error),
        }
    }

    /// Returns a reference to the value.
    ///
    /// # Panics
    ///
    /// Panics with the captured error code if the call failed.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.state {
            State::Success(value) => value,
            State::Failure(error) => {
                failed(format_args!("called `Maybe::value()` on a failure"), *error)
            }
        }
    }

    /// Returns a mutable reference to the value.
    ///
    /// # Panics
    ///
    /// Panics with the captured error code if the call failed.
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match &mut self.state {
            State::Success(value) => value,
            State::Failure(error) => failed(
                format_args!("called `Maybe::value_mut()` on a failure"),
                *error,
            ),
        }
    }

    /// Moves the value out.
    ///
    /// # Panics
    ///
    /// Panics with the captured error code if the call failed.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(error) => failed(
                format_args!("called `Maybe::into_value()` on a failure"),
                error,
            ),
        }
    }

    /// Moves the value out.
    ///
    /// # Panics
    ///
    /// Panics with the captured error code if the call failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::maybe::Maybe;
    /// let handle = Maybe::success(3u32);
    /// assert_eq!(handle.unwrap(), 3);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(error) => failed(
                format_args!("called `Maybe::unwrap()` on a failure"),
                error,
            ),
        }
    }

    /// Moves the value out, describing the failed operation with `context`.
    ///
    /// # Panics
    ///
    /// Panics with `context` and the captured error code if the call failed.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// # use keel_core::maybe::Maybe;
    /// let path = "/this/path/does/not/exist";
    /// let file = match std::fs::File::open(path) {
    ///     Ok(file) => Maybe::success(file),
    ///     Err(_) => Maybe::last_error(),
    /// };
    ///
    /// // panics with "failed to open /this/path/does/not/exist: ... (os error 2)"
    /// let _file = file.unwrap_with(format_args!("failed to open {path}"));
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_with(self, context: std::fmt::Arguments<'_>) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(error) => failed(context, error),
        }
    }

    /// Converts into a `Result` for propagation with `?`.
    #[inline]
    pub fn into_result(self) -> Result<T, OccurredError> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(error) => Err(error),
        }
    }

    /// Returns the value, discarding a captured error.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// Borrows the value, keeping the error.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match &self.state {
            State::Success(value) => Maybe::success(value),
            State::Failure(error) => Maybe::failure(*error),
        }
    }

    /// Mutably borrows the value, keeping the error.
    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match &mut self.state {
            State::Success(value) => Maybe::success(value),
            State::Failure(error) => Maybe::failure(*error),
        }
    }

    /// Transforms the value of a success, keeping the error of a failure.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Success(value) => Maybe::success(f(value)),
            State::Failure(error) => Maybe::failure(error),
        }
    }

    /// Drops the value and keeps only whether the call succeeded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use keel_core::maybe::Maybe;
    /// let written = Maybe::success(512usize);
    /// let status: Maybe<()> = written.discard();
    /// assert!(status.okay());
    /// ```
    #[inline]
    pub fn discard(self) -> Maybe<()> {
        match self.state {
            State::Success(_) => Maybe::done(),
            State::Failure(error) => Maybe::failure(error),
        }
    }
}

impl Maybe<()> {
    /// A success without a value.
    #[inline(always)]
    pub const fn done() -> Self {
        Self::success(())
    }
}

impl Default for Maybe<()> {
    #[inline(always)]
    fn default() -> Self {
        Self::done()
    }
}

impl<T> From<OccurredError> for Maybe<T> {
    #[inline(always)]
    fn from(error: OccurredError) -> Self {
        Self::failure(error)
    }
}

impl<T> From<Result<T, OccurredError>> for Maybe<T> {
    #[inline]
    fn from(result: Result<T, OccurredError>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T> From<Maybe<T>> for Result<T, OccurredError> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_result()
    }
}

impl<T> std::fmt::Debug for Maybe<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.state {
            State::Success(value) => f.debug_tuple("Success").field(value).finish(),
            State::Failure(error) => f.debug_tuple("Failure").field(error).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOT_FOUND: i32 = 2;
    const ACCESS_DENIED: i32 = 5;

    fn not_found() -> OccurredError {
        OccurredError::from_raw(NOT_FOUND)
    }

    #[test]
    fn test_success_state() {
        let maybe = Maybe::success(42u64);

        assert!(maybe.okay());
        assert_eq!(maybe.code(), ErrorCode::SUCCESS);
        assert!(maybe.code().is_success());
        assert_eq!(maybe.error(), None);
        assert_eq!(*maybe.value(), 42);
    }

    #[test]
    fn test_failure_state() {
        let maybe: Maybe<u64> = Maybe::failure(not_found());

        assert!(!maybe.okay());
        assert_eq!(maybe.code().raw(), NOT_FOUND);
        assert_eq!(maybe.error(), Some(not_found()));
        assert_eq!(maybe.message(), not_found().message());
    }

    #[test]
    fn test_okay_iff_constructed_from_value() {
        for raw in [0, 1, NOT_FOUND, ACCESS_DENIED, 13] {
            let failure: Maybe<i32> = Maybe::failure(OccurredError::from_raw(raw));
            assert!(!failure.okay());

            let success = Maybe::success(raw);
            assert!(success.okay());
        }
    }

    #[test]
    fn test_failure_with_success_code_is_not_okay() {
        let maybe: Maybe<u8> = Maybe::failure(OccurredError::from_raw(0));

        assert!(!maybe.okay());
        assert!(maybe.code().is_success());
        assert_eq!(maybe.code(), ErrorCode::SUCCESS);
        assert_eq!(maybe.error(), Some(OccurredError::from_raw(0)));
        assert_eq!(maybe.message(), ErrorCode::SUCCESS.message());
        assert!(maybe.into_result().is_err());
    }

    #[test]
    #[should_panic(expected = "called `Maybe::value()` on a failure: ")]
    fn test_value_on_failure_with_success_code_panics() {
        let maybe: Maybe<u8> = Maybe::failure(OccurredError::from_raw(0));
        let _ = maybe.value();
    }

    #[test]
    fn test_value_round_trip() {
        let text = String::from("payload");
        let maybe = Maybe::success(text.clone());

        assert_eq!(maybe.value(), &text);
        assert_eq!(maybe.into_value(), text);
        assert_eq!(Maybe::success(vec![1, 2, 3]).unwrap(), vec![1, 2, 3]);
        assert_eq!(
            Maybe::success('x').unwrap_with(format_args!("reading {}", "char")),
            'x'
        );
    }

    #[test]
    fn test_value_mut() {
        let mut maybe = Maybe::success(vec![1u8]);
        maybe.value_mut().push(2);
        assert_eq!(maybe.value(), &[1, 2]);
    }

    #[test]
    #[should_panic(expected = "called `Maybe::value()` on a failure")]
    fn test_value_on_failure_panics() {
        let maybe: Maybe<u8> = Maybe::failure(not_found());
        let _ = maybe.value();
    }

    #[test]
    #[should_panic(expected = "(os error 5)")]
    fn test_value_mut_on_failure_carries_code() {
        let mut maybe: Maybe<u8> = Maybe::failure(OccurredError::from_raw(ACCESS_DENIED));
        let _ = maybe.value_mut();
    }

    #[test]
    #[should_panic(expected = "called `Maybe::into_value()` on a failure")]
    fn test_into_value_on_failure_panics() {
        let maybe: Maybe<String> = Maybe::failure(not_found());
        let _ = maybe.into_value();
    }

    #[test]
    #[should_panic(expected = "called `Maybe::unwrap()` on a failure")]
    fn test_unwrap_on_failure_panics() {
        let maybe: Maybe<()> = Maybe::failure(not_found());
        maybe.unwrap();
    }

    #[test]
    #[should_panic(expected = "failed to open config.toml: ")]
    fn test_unwrap_with_formats_context() {
        let name = "config.toml";
        let maybe: Maybe<u32> = Maybe::failure(not_found());
        let _ = maybe.unwrap_with(format_args!("failed to open {name}"));
    }

    #[test]
    fn test_panic_message_carries_code() {
        let result = std::panic::catch_unwind(|| {
            let maybe: Maybe<u32> = Maybe::failure(not_found());
            maybe.unwrap_with(format_args!("step {}", 3))
        });

        let payload = result.expect_err("unwrap of a failure must panic");
        let message = payload
            .downcast_ref::<String>()
            .expect("panic payload should be a formatted message");
        assert_eq!(message, &format!("step 3: {}", not_found()));
        assert!(message.ends_with("(os error 2)"));
    }

    #[test]
    fn test_result_conversions() {
        let ok: Result<u8, OccurredError> = Maybe::success(1u8).into();
        assert_eq!(ok, Ok(1));

        let err: Result<u8, OccurredError> = Maybe::failure(not_found()).into_result();
        assert_eq!(err, Err(not_found()));

        let back: Maybe<u8> = Maybe::from(err);
        assert_eq!(back.code().raw(), NOT_FOUND);

        let from_error: Maybe<Vec<u8>> = not_found().into();
        assert!(!from_error.okay());
    }

    #[test]
    fn test_question_mark_propagation() {
        fn step(input: Maybe<u32>) -> Result<u32, OccurredError> {
            let value = input.into_result()?;
            Ok(value * 2)
        }

        assert_eq!(step(Maybe::success(4)), Ok(8));
        assert_eq!(step(Maybe::failure(not_found())), Err(not_found()));
    }

    #[test]
    fn test_ok_as_ref_and_map() {
        let success = Maybe::success(String::from("abc"));
        assert_eq!(success.as_ref().map(|s| s.len()).unwrap(), 3);
        assert_eq!(success.ok(), Some(String::from("abc")));

        let mut failure: Maybe<String> = Maybe::failure(not_found());
        assert!(!failure.as_mut().okay());
        assert_eq!(failure.as_ref().code().raw(), NOT_FOUND);
        assert_eq!(failure.map(|s| s.len()).error(), Some(not_found()));
    }

    #[test]
    fn test_unit_results() {
        let done = Maybe::done();
        assert!(done.okay());
        assert!(Maybe::<()>::default().okay());
        done.value();

        let adapted = Maybe::success(String::from("ignored")).discard();
        assert!(adapted.okay());

        let failed = Maybe::<String>::failure(not_found()).discard();
        assert!(!failed.okay());
        assert_eq!(failed.code().raw(), NOT_FOUND);
    }

    #[test]
    fn test_last_error_after_failed_call() {
        let opened = std::fs::File::open("/keel/this/path/does/not/exist");
        let maybe: Maybe<std::fs::File> = match opened {
            Ok(file) => Maybe::success(file),
            Err(_) => Maybe::last_error(),
        };

        assert!(!maybe.okay());
        assert_eq!(maybe.code().kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Maybe::success(7)), "Success(7)");

        let failure: Maybe<i32> = Maybe::failure(not_found());
        assert!(format!("{:?}", failure).starts_with("Failure(OccurredError { code: 2"));
    }
}
