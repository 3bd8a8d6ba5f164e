//! Typed sample buffers.

//---------------------------------------------------------------------------------------------------- use
use bytemuck::Pod;

//---------------------------------------------------------------------------------------------------- Sample
/// A primitive that can back a typed `read()`/`write()` buffer.
///
/// Its width is its size, nothing else.
/// The bytes inside are passed to the device as-is, so an
/// `i16` buffer must already hold e.g. [`SampleFormat::S16BE`]
/// data when the device was opened with that format.
///
/// The device checks `size_of::<Self>()` against
/// [`SampleFormat::byte_width`] before touching the backend.
///
/// [`SampleFormat::S16BE`]: crate::SampleFormat::S16BE
/// [`SampleFormat::byte_width`]: crate::SampleFormat::byte_width
pub trait Sample: Pod {}

macro_rules! impl_sample {
	($($t:ty),* $(,)?) => {$(
		impl Sample for $t {}
	)*}
}

impl_sample!(i8, u8, i16, u16, i32, u32, f32, f64);

//---------------------------------------------------------------------------------------------------- TESTS
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn width<S: Sample>() -> usize {
		std::mem::size_of::<S>()
	}

	#[test]
	fn widths() {
		assert_eq!(width::<i8>(),  1);
		assert_eq!(width::<u8>(),  1);
		assert_eq!(width::<i16>(), 2);
		assert_eq!(width::<u16>(), 2);
		assert_eq!(width::<i32>(), 4);
		assert_eq!(width::<u32>(), 4);
		assert_eq!(width::<f32>(), 4);
		assert_eq!(width::<f64>(), 8);
	}
}
