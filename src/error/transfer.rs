//! Stream transfer errors.

//---------------------------------------------------------------------------------------------------- use
use crate::error::BackendError;

//---------------------------------------------------------------------------------------------------- TransferError
/// Error that occurs during `read()`, `write()` or `discard()`.
///
/// [`TransferError::Overrun`] and [`TransferError::Underrun`] are
/// recoverable, the stream was already re-armed before they were
/// returned and the same call can simply be made again.
/// The data of the failing call was _not_ transferred.
#[derive(thiserror::Error, Debug)]
pub enum TransferError {
	#[error("overrun")]
	/// Capture buffer overflowed because it was not read fast enough.
	Overrun,

	#[error("underrun")]
	/// Playback buffer ran dry because it was not written fast enough.
	Underrun,

	#[error("slice element size ({found} bytes) does not correspond to the device sample size ({expected} bytes)")]
	/// The buffer's element width does not match the negotiated format.
	SampleSize {
		/// [`SampleFormat::byte_width`](crate::SampleFormat::byte_width) of the device.
		expected: usize,
		/// Width of the caller's buffer element.
		found: usize,
	},

	#[error("buffer of {bytes} bytes is not a whole number of {width} byte samples")]
	/// A raw byte buffer does not end on a sample boundary.
	PartialSample {
		/// Bytes in the buffer.
		bytes: usize,
		/// [`SampleFormat::byte_width`](crate::SampleFormat::byte_width) of the device.
		width: usize,
	},

	#[error("buffer of {samples} samples is not a whole number of {channels} channel frames")]
	/// The buffer does not end on a frame boundary.
	PartialFrame {
		/// Samples in the buffer.
		samples: usize,
		/// Channels per frame.
		channels: u32,
	},

	#[error("device is closed")]
	/// The device was already closed.
	Closed,

	#[error("could not re-arm stream after xrun: {0}")]
	/// An overrun/underrun happened and re-arming the stream failed.
	///
	/// The stream is most likely unusable.
	Recover(BackendError),

	#[error("read error: {0}")]
	/// Any other capture failure.
	Read(BackendError),

	#[error("write error: {0}")]
	/// Any other playback failure.
	Write(BackendError),

	#[error("could not drop the stream: {0}")]
	/// Discarding pending playback failed.
	Discard(BackendError),
}

impl TransferError {
	#[inline]
	#[must_use]
	/// Is this an overrun or underrun?
	///
	/// If so, the stream has been re-armed and
	/// the operation may be retried.
	pub const fn is_xrun(&self) -> bool {
		matches!(self, Self::Overrun | Self::Underrun)
	}
}

//---------------------------------------------------------------------------------------------------- TESTS
#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn xrun() {
		assert!(TransferError::Overrun.is_xrun());
		assert!(TransferError::Underrun.is_xrun());
		assert!(!TransferError::Closed.is_xrun());
		assert!(!TransferError::Recover(BackendError::new(32, "Broken pipe")).is_xrun());
	}
}
