//! The sample format catalog.

//---------------------------------------------------------------------------------------------------- use
use strum::{
	AsRefStr,
	Display,
	EnumCount,
	EnumIter,
	EnumString,
	IntoStaticStr,
};

//---------------------------------------------------------------------------------------------------- SampleFormat
/// Binary sample encodings a device can be opened with.
///
/// This is a static table, it is not a capability query;
/// whether a specific device accepts a format is decided
/// during negotiation (see [`crate::error::NegotiateError`]).
///
/// Buffers passed to `read`/`write` must already be
/// encoded in this format, `pcmio` does no conversion.
///
/// ```rust
/// # use pcmio::*;
/// assert_eq!(SampleFormat::S16LE.to_string(), "s16_le");
/// assert_eq!("float64_be".parse::<SampleFormat>().unwrap(), SampleFormat::Float64BE);
/// ```
#[derive(Copy,Clone,Debug,Hash,PartialEq,Eq,PartialOrd,Ord)]
#[derive(AsRefStr,Display,EnumCount,EnumIter,EnumString,IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum SampleFormat {
	/// Signed 8-bit.
	S8,
	/// Unsigned 8-bit.
	U8,
	#[strum(serialize = "s16_le")]
	#[cfg_attr(feature = "serde", serde(rename = "s16_le"))]
	/// Signed 16-bit, little endian.
	S16LE,
	#[strum(serialize = "s16_be")]
	#[cfg_attr(feature = "serde", serde(rename = "s16_be"))]
	/// Signed 16-bit, big endian.
	S16BE,
	#[strum(serialize = "u16_le")]
	#[cfg_attr(feature = "serde", serde(rename = "u16_le"))]
	/// Unsigned 16-bit, little endian.
	U16LE,
	#[strum(serialize = "u16_be")]
	#[cfg_attr(feature = "serde", serde(rename = "u16_be"))]
	/// Unsigned 16-bit, big endian.
	U16BE,
	#[strum(serialize = "s24_le")]
	#[cfg_attr(feature = "serde", serde(rename = "s24_le"))]
	/// Signed 24-bit in the low 3 bytes of a 4 byte container, little endian.
	S24LE,
	#[strum(serialize = "s24_be")]
	#[cfg_attr(feature = "serde", serde(rename = "s24_be"))]
	/// Signed 24-bit in the low 3 bytes of a 4 byte container, big endian.
	S24BE,
	#[strum(serialize = "u24_le")]
	#[cfg_attr(feature = "serde", serde(rename = "u24_le"))]
	/// Unsigned 24-bit in the low 3 bytes of a 4 byte container, little endian.
	U24LE,
	#[strum(serialize = "u24_be")]
	#[cfg_attr(feature = "serde", serde(rename = "u24_be"))]
	/// Unsigned 24-bit in the low 3 bytes of a 4 byte container, big endian.
	U24BE,
	#[strum(serialize = "s32_le")]
	#[cfg_attr(feature = "serde", serde(rename = "s32_le"))]
	/// Signed 32-bit, little endian.
	S32LE,
	#[strum(serialize = "s32_be")]
	#[cfg_attr(feature = "serde", serde(rename = "s32_be"))]
	/// Signed 32-bit, big endian.
	S32BE,
	#[strum(serialize = "u32_le")]
	#[cfg_attr(feature = "serde", serde(rename = "u32_le"))]
	/// Unsigned 32-bit, little endian.
	U32LE,
	#[strum(serialize = "u32_be")]
	#[cfg_attr(feature = "serde", serde(rename = "u32_be"))]
	/// Unsigned 32-bit, big endian.
	U32BE,
	#[strum(serialize = "float_le")]
	#[cfg_attr(feature = "serde", serde(rename = "float_le"))]
	/// 32-bit IEEE-754 float, little endian.
	FloatLE,
	#[strum(serialize = "float_be")]
	#[cfg_attr(feature = "serde", serde(rename = "float_be"))]
	/// 32-bit IEEE-754 float, big endian.
	FloatBE,
	#[strum(serialize = "float64_le")]
	#[cfg_attr(feature = "serde", serde(rename = "float64_le"))]
	/// 64-bit IEEE-754 float, little endian.
	Float64LE,
	#[strum(serialize = "float64_be")]
	#[cfg_attr(feature = "serde", serde(rename = "float64_be"))]
	/// 64-bit IEEE-754 float, big endian.
	Float64BE,
}

impl SampleFormat {
	#[inline]
	#[must_use]
	/// How many bytes a single sample of this format occupies.
	///
	/// 24-bit formats live in a 4 byte container.
	///
	/// ```rust
	/// # use pcmio::*;
	/// assert_eq!(SampleFormat::U8.byte_width(),        1);
	/// assert_eq!(SampleFormat::S16BE.byte_width(),     2);
	/// assert_eq!(SampleFormat::S24LE.byte_width(),     4);
	/// assert_eq!(SampleFormat::FloatLE.byte_width(),   4);
	/// assert_eq!(SampleFormat::Float64BE.byte_width(), 8);
	/// ```
	pub const fn byte_width(self) -> usize {
		match self {
			Self::S8 | Self::U8 => 1,

			Self::S16LE | Self::S16BE |
			Self::U16LE | Self::U16BE => 2,

			Self::S24LE | Self::S24BE |
			Self::U24LE | Self::U24BE |
			Self::S32LE | Self::S32BE |
			Self::U32LE | Self::U32BE |
			Self::FloatLE | Self::FloatBE => 4,

			Self::Float64LE | Self::Float64BE => 8,
		}
	}

	#[inline]
	#[must_use]
	/// Is this a little endian format?
	///
	/// Single byte formats return `true` for both
	/// this and [`Self::is_big_endian`].
	pub const fn is_little_endian(self) -> bool {
		!matches!(
			self,
			Self::S16BE | Self::U16BE | Self::S24BE | Self::U24BE |
			Self::S32BE | Self::U32BE | Self::FloatBE | Self::Float64BE
		)
	}

	#[inline]
	#[must_use]
	/// Is this a big endian format?
	pub const fn is_big_endian(self) -> bool {
		self.byte_width() == 1 || !self.is_little_endian()
	}

	#[inline]
	#[must_use]
	/// Is this an IEEE-754 float format?
	pub const fn is_float(self) -> bool {
		matches!(self, Self::FloatLE | Self::FloatBE | Self::Float64LE | Self::Float64BE)
	}
}
