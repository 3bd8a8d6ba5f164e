//! Native backend status.

//---------------------------------------------------------------------------------------------------- use
use std::borrow::Cow;

//---------------------------------------------------------------------------------------------------- Constants
/// `errno` the backend reports for an overrun/underrun (broken pipe).
pub const EPIPE: i32 = 32;

//---------------------------------------------------------------------------------------------------- BackendError
/// A failed call into the audio subsystem.
///
/// This carries the (positive) `errno` the subsystem returned
/// along with its own description of it, e.g:
/// ```rust
/// # use pcmio::error::*;
/// let e = BackendError::new(EPIPE, "Broken pipe");
/// assert!(e.is_pipe());
/// assert_eq!(e.to_string(), "Broken pipe (errno 32)");
/// ```
#[derive(thiserror::Error, Clone, Debug, Hash, PartialEq, Eq)]
#[error("{message} (errno {errno})")]
pub struct BackendError {
	errno: i32,
	message: Cow<'static, str>,
}

impl BackendError {
	#[inline]
	#[must_use]
	/// Create a [`BackendError`].
	///
	/// `errno` is normalized to be positive, so both the
	/// `-EPIPE` a C call returns and `EPIPE` are accepted.
	pub fn new(errno: i32, message: impl Into<Cow<'static, str>>) -> Self {
		Self {
			errno: errno.saturating_abs(),
			message: message.into(),
		}
	}

	#[inline]
	#[must_use]
	/// The positive `errno`.
	pub const fn errno(&self) -> i32 {
		self.errno
	}

	#[inline]
	#[must_use]
	/// The backend's description of the error.
	pub fn message(&self) -> &str {
		&self.message
	}

	#[inline]
	#[must_use]
	/// Is this a broken pipe, i.e. an overrun (capture)
	/// or underrun (playback)?
	pub const fn is_pipe(&self) -> bool {
		self.errno == EPIPE
	}
}

//---------------------------------------------------------------------------------------------------- TESTS
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn negative_errno() {
		let e = BackendError::new(-EPIPE, "Broken pipe");
		assert_eq!(e.errno(), EPIPE);
		assert!(e.is_pipe());
	}

	#[test]
	fn not_pipe() {
		let e = BackendError::new(-5, "Input/output error");
		assert!(!e.is_pipe());
		assert_eq!(e.message(), "Input/output error");
	}
}
