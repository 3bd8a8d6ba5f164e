//! Playing stream.

//---------------------------------------------------------------------------------------------------- use
use std::ops::{Deref,DerefMut};
use crate::{
	backend::{Backend,DefaultBackend,Pcm,Direction},
	config::{AudioParams,BufferHint,DeviceConfig},
	device::Device,
	error::{NegotiateError,TransferError},
	format::Sample,
	macros::debug2,
};

//---------------------------------------------------------------------------------------------------- Playback
/// A blocking playback stream.
///
/// Lifecycle and accessors are on [`Device`], which this dereferences to.
#[derive(Debug)]
pub struct Playback<B: Backend = DefaultBackend>(Device<B>);

impl<B: Backend> Playback<B> {
	/// Open `config.device` for playback and negotiate `params`.
	///
	/// # Errors
	/// No device is returned on error, and whatever
	/// the backend opened has already been released.
	pub fn open(
		backend: &B,
		config: &DeviceConfig,
		params: AudioParams,
		hint: BufferHint,
	) -> Result<Self, NegotiateError> {
		Device::open(backend, config, params, Direction::Playback, hint).map(Self)
	}

	/// Write interleaved samples from `buf`, blocking until done.
	///
	/// The samples must already be in the device's format,
	/// no conversion is done. `S` must be exactly as wide as
	/// that format and `buf` must hold a whole number of frames.
	///
	/// Returns how many samples (not frames) were written,
	/// which can be less than `buf.len()`.
	///
	/// # Errors
	/// [`TransferError::Underrun`] means the stream was re-armed
	/// and nothing was written, the same `buf` may be written again.
	pub fn write<S: Sample>(&mut self, buf: &[S]) -> Result<usize, TransferError> {
		let bytes: &[u8] = bytemuck::cast_slice(buf);
		self.0.transfer(buf.len(), std::mem::size_of::<S>(), |pcm, len| pcm.writei(&bytes[..len]))
	}

	/// [`Playback::write`], but from raw bytes.
	///
	/// `buf.len()` must be a whole number of frames in bytes.
	///
	/// Returns how many samples (not bytes) were written.
	///
	/// # Errors
	/// Same as [`Playback::write`].
	pub fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, TransferError> {
		let samples = self.0.samples_in(buf.len())?;
		let width   = self.0.sample_size();
		self.0.transfer(samples, width, |pcm, len| pcm.writei(&buf[..len]))
	}

	/// Stop playback now, throwing away everything not yet played.
	///
	/// Unlike [`Device::close`] this does not wait, and the
	/// stream is re-armed afterwards so writing can continue.
	///
	/// # Errors
	/// [`TransferError::Closed`] if the device is closed,
	/// [`TransferError::Discard`] if the backend failed to stop or re-arm.
	pub fn discard(&mut self) -> Result<(), TransferError> {
		debug2!("playback - discarding pending frames");
		let pcm = self.0.pcm_mut()?;
		pcm.discard().map_err(TransferError::Discard)?;
		pcm.prepare().map_err(TransferError::Discard)
	}
}

impl<B: Backend> Deref for Playback<B> {
	type Target = Device<B>;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<B: Backend> DerefMut for Playback<B> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

//---------------------------------------------------------------------------------------------------- TESTS
#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		backend::{Dummy,DummyCaps},
		format::SampleFormat,
		tests::{playback,stereo_s16},
	};
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	#[test]
	fn writes_exact_bytes() {
		let dummy = Dummy::new();
		let mut p = playback(&dummy);

		assert_eq!(p.write(&[1_i16, 2, 3, 4]).unwrap(), 4);
		assert_eq!(dummy.played(), bytemuck::cast_slice::<i16, u8>(&[1, 2, 3, 4]));
		assert_eq!(dummy.stats().frames_written, 2);
	}

	#[test]
	fn write_bytes() {
		let dummy = Dummy::new();
		let mut p = playback(&dummy);

		assert_eq!(p.write_bytes(&[9; 8]).unwrap(), 4);
		assert_eq!(dummy.played(), [9; 8]);
		assert!(matches!(p.write_bytes(&[0; 5]), Err(TransferError::PartialSample { .. })));
	}

	#[test]
	fn empty_buffer() {
		let dummy = Dummy::new();
		let mut p = playback(&dummy);
		assert_eq!(p.write::<i16>(&[]).unwrap(), 0);
		assert_eq!(dummy.stats().writes, 0);
	}

	#[test]
	fn size_mismatch_touches_nothing() {
		let dummy = Dummy::new();
		let mut p = playback(&dummy);

		let e = p.write(&[0_i32; 4]).unwrap_err();
		assert_eq!(
			e.to_string(),
			"slice element size (4 bytes) does not correspond to the device sample size (2 bytes)",
		);
		assert!(matches!(p.write(&[0_i16; 3]), Err(TransferError::PartialFrame { samples: 3, channels: 2 })));

		let stats = dummy.stats();
		assert_eq!(stats.writes, 0);
		assert!(dummy.played().is_empty());
	}

	// A caller-defined sample, 1 byte wide.
	#[derive(Copy,Clone)]
	#[repr(transparent)]
	struct Narrow(u8);
	unsafe impl bytemuck::Zeroable for Narrow {}
	unsafe impl bytemuck::Pod for Narrow {}
	impl Sample for Narrow {}

	// A caller-defined sample, 2 bytes wide.
	#[derive(Copy,Clone)]
	#[repr(transparent)]
	struct Wide([u8; 2]);
	unsafe impl bytemuck::Zeroable for Wide {}
	unsafe impl bytemuck::Pod for Wide {}
	impl Sample for Wide {}

	#[test]
	fn custom_sample_width_is_its_size() {
		let dummy = Dummy::new();
		let mut p = playback(&dummy);

		let e = p.write(&[Narrow(1); 4]).unwrap_err();
		assert!(matches!(e, TransferError::SampleSize { expected: 2, found: 1 }), "{e}");
		assert_eq!(dummy.stats().writes, 0);

		assert_eq!(p.write(&[Wide([1, 2]), Wide([3, 4])]).unwrap(), 2);
		assert_eq!(dummy.played(), [1, 2, 3, 4]);
	}

	#[test]
	fn underrun_rearms_then_succeeds() {
		let dummy = Dummy::new();
		let mut p = playback(&dummy);

		dummy.inject_xruns(1);
		assert!(matches!(p.write(&[7_i16; 4]), Err(TransferError::Underrun)));
		// Nothing from the failed call was written.
		assert!(dummy.played().is_empty());

		assert_eq!(p.write(&[7_i16; 4]).unwrap(), 4);
		assert_eq!(dummy.stats().frames_written, 2);
	}

	#[test]
	fn partial_transfer() {
		let dummy = Dummy::with_caps(DummyCaps {
			max_transfer_frames: Some(3),
			..DummyCaps::default()
		});
		let mut p = playback(&dummy);

		// 5 frames in, 3 accepted.
		assert_eq!(p.write(&[1_i16; 10]).unwrap(), 6);
		assert_eq!(dummy.played().len(), 3 * 4);
	}

	#[test]
	fn discard_keeps_stream_usable() {
		let dummy = Dummy::new();
		let mut p = playback(&dummy);

		p.write(&[0_i16; 4]).unwrap();
		p.discard().unwrap();
		assert_eq!(dummy.stats().discarded, 1);
		assert_eq!(p.write(&[0_i16; 4]).unwrap(), 4);

		p.close().unwrap();
		assert!(matches!(p.discard(), Err(TransferError::Closed)));
	}

	#[test]
	fn discard_rearm_failure() {
		let dummy = Dummy::new();
		let mut p = playback(&dummy);
		dummy.fail_prepare(true);
		assert!(matches!(p.discard(), Err(TransferError::Discard(_))));
	}

	#[test]
	fn generic_write_error() {
		let dummy = Dummy::new();
		let mut p = playback(&dummy);
		dummy.fail_next_transfer(5);
		let e = p.write(&[0_i16; 2]).unwrap_err();
		assert!(matches!(e, TransferError::Write(_)));
		assert!(!e.is_xrun());
	}

	#[test]
	fn negotiation_failure_returns_no_device() {
		let dummy = Dummy::new();
		let params = AudioParams::new(2, 48_000, SampleFormat::U8);
		dummy.fail_open(true);
		assert!(Playback::open(&dummy, &DeviceConfig::DEFAULT, params, BufferHint::DEFAULT).is_err());
		assert_eq!(dummy.stats().opened, 0);
	}

	proptest! {
		#[test]
		fn k_frames(channels in 1_u32..=8, k in 1_usize..=512) {
			let dummy  = Dummy::new();
			let params = AudioParams::new(channels, 48_000, SampleFormat::S16LE);
			let mut p  = Playback::open(&dummy, &DeviceConfig::DEFAULT, params, BufferHint::DEFAULT).unwrap();

			let buf = vec![0_i16; channels as usize * k];
			prop_assert_eq!(p.write(&buf).unwrap(), buf.len());
			prop_assert_eq!(dummy.stats().frames_written, k);
		}
	}

	#[test]
	fn periods_hint_honoured() {
		let dummy = Dummy::new();
		let p = Playback::open(&dummy, &DeviceConfig::DEFAULT, stereo_s16(), BufferHint::DEFAULT.periods(4)).unwrap();
		assert_eq!(p.layout().periods, 4);
	}
}
