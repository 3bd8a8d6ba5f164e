//! Loose buffering request.

//---------------------------------------------------------------------------------------------------- use
use std::num::{NonZeroU32,NonZeroUsize};

//---------------------------------------------------------------------------------------------------- BufferHint
/// How large the device's ring buffer and periods should (roughly) be.
///
/// Every field is a hint, the device adjusts each value to the
/// nearest one it supports and the result is what ends up in
/// [`NegotiatedLayout`](crate::NegotiatedLayout).
///
/// ## Buffer
/// - `buffer_frames: None` asks for the largest buffer the device can give
/// - `buffer_frames: Some(n)` asks for the buffer nearest to `n` frames
///
/// ## Period
/// In order of precedence:
/// 1. `period_frames: Some(n)` asks for a period nearest to `n` frames
/// 2. `periods: Some(n)` asks for a period of `buffer / n` frames,
///    where `buffer` is the size the device accepted above
/// 3. Neither: a period of `rate / 8` frames (125ms)
///
/// Setting both `period_frames` and `periods` is allowed,
/// `periods` is ignored in that case.
///
/// ```rust
/// # use pcmio::*;
/// let hint = BufferHint::DEFAULT
/// 	.buffer_frames(4096)
/// 	.periods(4);
///
/// assert_eq!(hint.buffer_frames.unwrap().get(), 4096);
/// assert_eq!(hint.periods.unwrap().get(), 4);
/// assert!(hint.period_frames.is_none());
///
/// // `0` unsets a field.
/// assert_eq!(hint.buffer_frames(0), BufferHint::DEFAULT.periods(4));
/// ```
#[derive(Copy,Clone,Debug,Default,Hash,PartialEq,Eq,PartialOrd,Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
pub struct BufferHint {
	/// Total ring buffer length in frames.
	pub buffer_frames: Option<NonZeroUsize>,
	/// Length of a single period in frames.
	pub period_frames: Option<NonZeroUsize>,
	/// How many periods the buffer should be split into.
	pub periods: Option<NonZeroU32>,
}

impl BufferHint {
	/// No hints, the device picks the maximum buffer and 125ms periods.
	pub const DEFAULT: Self = Self {
		buffer_frames: None,
		period_frames: None,
		periods:       None,
	};

	#[inline]
	#[must_use]
	/// Set [`Self::buffer_frames`], `0` unsets it.
	pub const fn buffer_frames(mut self, frames: usize) -> Self {
		self.buffer_frames = NonZeroUsize::new(frames);
		self
	}

	#[inline]
	#[must_use]
	/// Set [`Self::period_frames`], `0` unsets it.
	pub const fn period_frames(mut self, frames: usize) -> Self {
		self.period_frames = NonZeroUsize::new(frames);
		self
	}

	#[inline]
	#[must_use]
	/// Set [`Self::periods`], `0` unsets it.
	pub const fn periods(mut self, periods: u32) -> Self {
		self.periods = NonZeroU32::new(periods);
		self
	}

	#[must_use]
	/// The period length (in frames) to request from the device.
	///
	/// `buffer_frames` is the buffer length the device already
	/// accepted, `rate` is the stream's sample rate.
	///
	/// ```rust
	/// # use pcmio::*;
	/// // Default: 1/8th of a second.
	/// assert_eq!(BufferHint::DEFAULT.period_request(8192, 48_000), 6000);
	///
	/// // Count derived.
	/// assert_eq!(BufferHint::DEFAULT.periods(4).period_request(8192, 48_000), 2048);
	///
	/// // Explicit frames win over a count.
	/// let hint = BufferHint::DEFAULT.periods(4).period_frames(1000);
	/// assert_eq!(hint.period_request(8192, 48_000), 1000);
	/// ```
	pub const fn period_request(&self, buffer_frames: usize, rate: u32) -> usize {
		if let Some(frames) = self.period_frames {
			frames.get()
		} else if let Some(periods) = self.periods {
			buffer_frames / periods.get() as usize
		} else {
			(rate / crate::config::PERIOD_DIVISOR) as usize
		}
	}
}

//---------------------------------------------------------------------------------------------------- TESTS
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn zero_unsets() {
		let hint = BufferHint::DEFAULT
			.buffer_frames(1)
			.period_frames(1)
			.periods(1)
			.buffer_frames(0)
			.period_frames(0)
			.periods(0);
		assert_eq!(hint, BufferHint::DEFAULT);
		assert_eq!(hint, BufferHint::default());
	}

	#[test]
	fn period_request_integer_division() {
		let hint = BufferHint::DEFAULT.periods(3);
		assert_eq!(hint.period_request(1000, 44_100), 333);
	}

	#[test]
	fn period_request_default_ignores_buffer() {
		assert_eq!(BufferHint::DEFAULT.period_request(1, 44_100), 5512);
		assert_eq!(BufferHint::DEFAULT.period_request(usize::MAX, 8_000), 1000);
	}

	#[test]
	#[cfg(feature = "serde")]
	fn serde() {
		let hint = BufferHint::DEFAULT.buffer_frames(4096).periods(2);
		let json = serde_json::to_string(&hint).unwrap();
		assert_eq!(json, r#"{"buffer_frames":4096,"period_frames":null,"periods":2}"#);
		assert_eq!(serde_json::from_str::<BufferHint>(&json).unwrap(), hint);
	}
}
