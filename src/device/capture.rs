//! Recording stream.

//---------------------------------------------------------------------------------------------------- use
use std::ops::{Deref,DerefMut};
use crate::{
	backend::{Backend,DefaultBackend,Pcm,Direction},
	config::{AudioParams,BufferHint,DeviceConfig},
	device::Device,
	error::{NegotiateError,TransferError},
	format::Sample,
};

//---------------------------------------------------------------------------------------------------- Capture
/// A blocking capture (recording) stream.
///
/// Lifecycle and accessors are on [`Device`], which this dereferences to.
///
/// ```rust
/// # use pcmio::*;
/// # use pcmio::backend::Dummy;
/// let backend = Dummy::new();
/// let params  = AudioParams::new(1, 16_000, SampleFormat::FloatLE);
/// let mut capture = Capture::open(&backend, &DeviceConfig::DEFAULT, params, BufferHint::DEFAULT).unwrap();
///
/// let mut buf = [0.0_f32; 160];
/// assert_eq!(capture.read(&mut buf).unwrap(), 160);
/// ```
#[derive(Debug)]
pub struct Capture<B: Backend = DefaultBackend>(Device<B>);

impl<B: Backend> Capture<B> {
	/// Open `config.device` for capture and negotiate `params`.
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
		Device::open(backend, config, params, Direction::Capture, hint).map(Self)
	}

	/// Read interleaved samples into `buf`, blocking until done.
	///
	/// `S` must be exactly as wide as the device's sample format
	/// (e.g. `i16`/`u16` for [`SampleFormat::S16LE`](crate::SampleFormat::S16LE)),
	/// and `buf` must hold a whole number of frames.
	///
	/// Returns how many samples (not frames) were read,
	/// which can be less than `buf.len()`.
	///
	/// # Errors
	/// [`TransferError::Overrun`] means the stream was re-armed
	/// and nothing was read, the call may simply be retried.
	pub fn read<S: Sample>(&mut self, buf: &mut [S]) -> Result<usize, TransferError> {
		let samples = buf.len();
		let bytes: &mut [u8] = bytemuck::cast_slice_mut(buf);
		self.0.transfer(samples, std::mem::size_of::<S>(), |pcm, len| pcm.readi(&mut bytes[..len]))
	}

	/// [`Capture::read`], but into raw bytes.
	///
	/// `buf.len()` must be a whole number of frames in bytes.
	///
	/// Returns how many samples (not bytes) were read.
	///
	/// # Errors
	/// Same as [`Capture::read`].
	pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, TransferError> {
		let samples = self.0.samples_in(buf.len())?;
		let width   = self.0.sample_size();
		self.0.transfer(samples, width, |pcm, len| pcm.readi(&mut buf[..len]))
	}
}

impl<B: Backend> Deref for Capture<B> {
	type Target = Device<B>;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<B: Backend> DerefMut for Capture<B> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}
