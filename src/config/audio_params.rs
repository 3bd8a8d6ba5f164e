//! The stream request.

//---------------------------------------------------------------------------------------------------- use
use crate::format::SampleFormat;

//---------------------------------------------------------------------------------------------------- AudioParams
/// What the stream should carry.
///
/// This is the caller's request, the device may still reject it
/// during negotiation. It is never modified after the device opens.
///
/// Both `channels` and `rate` must be non-zero, this is
/// checked before the backend is touched.
#[derive(Copy,Clone,Debug,Hash,PartialEq,Eq,PartialOrd,Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
pub struct AudioParams {
	/// Interleaved channel count.
	pub channels: u32,
	/// Frames per second.
	pub rate: u32,
	/// Binary encoding of each sample.
	pub format: SampleFormat,
}

impl AudioParams {
	/// 2 channel, 44.1kHz, signed 16-bit little endian.
	///
	/// ```rust
	/// # use pcmio::*;
	/// assert_eq!(AudioParams::DEFAULT.channels, 2);
	/// assert_eq!(AudioParams::DEFAULT.rate, 44_100);
	/// assert_eq!(AudioParams::DEFAULT.format, SampleFormat::S16LE);
	/// ```
	pub const DEFAULT: Self = Self {
		channels: 2,
		rate:     44_100,
		format:   SampleFormat::S16LE,
	};

	#[inline]
	#[must_use]
	/// Create a new [`AudioParams`].
	pub const fn new(channels: u32, rate: u32, format: SampleFormat) -> Self {
		Self { channels, rate, format }
	}

	#[inline]
	#[must_use]
	/// Bytes in a single frame (`channels * format.byte_width()`).
	///
	/// ```rust
	/// # use pcmio::*;
	/// let p = AudioParams::new(6, 96_000, SampleFormat::S24LE);
	/// assert_eq!(p.frame_bytes(), 24);
	/// ```
	pub const fn frame_bytes(&self) -> usize {
		self.channels as usize * self.format.byte_width()
	}
}

impl Default for AudioParams {
	#[inline]
	fn default() -> Self {
		Self::DEFAULT
	}
}
