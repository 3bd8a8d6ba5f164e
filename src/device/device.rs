//! Stream lifecycle & the shared transfer path.

//---------------------------------------------------------------------------------------------------- use
use crate::{
	backend::{Backend,DefaultBackend,Pcm,Direction},
	config::{AudioParams,BufferHint,DeviceConfig},
	error::{BackendError,CloseError,NegotiateError,TransferError},
	format::SampleFormat,
	negotiate::{negotiate,NegotiatedLayout},
	macros::{debug2,error2,info2,trace2,warn2},
};

//---------------------------------------------------------------------------------------------------- Device
/// An open (or closed) PCM stream.
///
/// This is what [`Capture`](crate::Capture) and [`Playback`](crate::Playback)
/// dereference to, it holds the backend handle along with
/// the request and layout it was opened with.
///
/// ## Lifecycle
/// The handle is released exactly once, either by:
/// - [`Device::close`], which drains and reports failures
/// - dropping the [`Device`], which does the same but can only log failures
///
/// After [`Device::close`], every transfer returns
/// [`TransferError::Closed`] and further `close()` calls
/// are no-ops that return `Ok(())`.
pub struct Device<B: Backend = DefaultBackend> {
	pcm: Option<B::Pcm>,
	params: AudioParams,
	layout: NegotiatedLayout,
	direction: Direction,
}

impl<B: Backend> Device<B> {
	// Negotiate and wrap the resulting handle.
	pub(crate) fn open(
		backend: &B,
		config: &DeviceConfig,
		params: AudioParams,
		direction: Direction,
		hint: BufferHint,
	) -> Result<Self, NegotiateError> {
		let (pcm, layout) = negotiate(backend, config, params, direction, hint)?;

		info2!("{direction} - opened `{}`: {params:?}, {layout:?}", config.device);

		Ok(Self {
			pcm: Some(pcm),
			params,
			layout,
			direction,
		})
	}

	//------------------------------------------ Accessors
	#[inline]
	#[must_use]
	/// Channel count the stream was opened with.
	pub const fn channels(&self) -> u32 {
		self.params.channels
	}

	#[inline]
	#[must_use]
	/// Sample rate the stream was opened with.
	pub const fn rate(&self) -> u32 {
		self.params.rate
	}

	#[inline]
	#[must_use]
	/// Sample format the stream was opened with.
	pub const fn format(&self) -> SampleFormat {
		self.params.format
	}

	#[inline]
	#[must_use]
	/// Width of a single sample in bytes.
	pub const fn sample_size(&self) -> usize {
		self.params.format.byte_width()
	}

	#[inline]
	#[must_use]
	/// The full request the stream was opened with.
	pub const fn params(&self) -> AudioParams {
		self.params
	}

	#[inline]
	#[must_use]
	/// The buffer layout the backend accepted.
	pub const fn layout(&self) -> NegotiatedLayout {
		self.layout
	}

	#[inline]
	#[must_use]
	/// Capture or playback.
	pub const fn direction(&self) -> Direction {
		self.direction
	}

	#[inline]
	#[must_use]
	/// Has this device been closed?
	pub const fn is_closed(&self) -> bool {
		self.pcm.is_none()
	}

	//------------------------------------------ Lifecycle
	/// Drain pending samples and release the backend handle.
	///
	/// For [`Playback`](crate::Playback) this blocks until
	/// every written sample has been played.
	///
	/// The handle is released even if draining fails.
	/// If both fail, the close error is returned.
	///
	/// Calling this on a closed device does nothing.
	///
	/// # Errors
	/// The device is closed after this returns regardless,
	/// the error only reports what went wrong while doing so.
	///
	/// [`CloseError::Close`] only comes from backends that
	/// report a close status. The `alsa` backend can't, so
	/// with it only [`CloseError::Drain`] is ever returned.
	pub fn close(&mut self) -> Result<(), CloseError> {
		let Some(mut pcm) = self.pcm.take() else {
			trace2!("{} - already closed", self.direction);
			return Ok(());
		};

		debug2!("{} - draining & closing", self.direction);

		let drained = pcm.drain();
		let closed  = pcm.close();

		match (drained, closed) {
			(_, Err(e))        => Err(CloseError::Close(e)),
			(Err(e), Ok(()))   => Err(CloseError::Drain(e)),
			(Ok(()), Ok(()))   => Ok(()),
		}
	}

	//------------------------------------------ Transfer
	// The open handle, or `Closed`.
	pub(crate) fn pcm_mut(&mut self) -> Result<&mut B::Pcm, TransferError> {
		self.pcm.as_mut().ok_or(TransferError::Closed)
	}

	// How many samples a raw byte buffer of `bytes` holds.
	pub(crate) fn samples_in(&self, bytes: usize) -> Result<usize, TransferError> {
		let width = self.sample_size();
		if bytes % width != 0 {
			return Err(TransferError::PartialSample { bytes, width });
		}
		Ok(bytes / width)
	}

	/// The shared `read()`/`write()` path.
	///
	/// `samples` elements of `width` bytes each are validated
	/// against the stream before `io` is called with the handle
	/// and the exact byte length covering those frames.
	///
	/// `io` returns frames moved, this returns samples moved.
	///
	/// A broken pipe re-arms the stream and is returned as
	/// [`TransferError::Overrun`] or [`TransferError::Underrun`].
	pub(crate) fn transfer<F>(
		&mut self,
		samples: usize,
		width: usize,
		io: F,
	) -> Result<usize, TransferError>
	where
		F: FnOnce(&mut B::Pcm, usize) -> Result<usize, BackendError>,
	{
		let direction = self.direction;
		let params    = self.params;
		let pcm       = self.pcm.as_mut().ok_or(TransferError::Closed)?;

		// INVARIANT:
		// Nothing below this point may run with a
		// buffer the backend would misinterpret.
		let expected = params.format.byte_width();
		if width != expected {
			return Err(TransferError::SampleSize { expected, found: width });
		}
		let channels = params.channels as usize;
		if samples % channels != 0 {
			return Err(TransferError::PartialFrame { samples, channels: params.channels });
		}

		let frames = samples / channels;
		if frames == 0 {
			return Ok(0);
		}

		match io(&mut *pcm, frames * params.frame_bytes()) {
			Ok(moved) => {
				trace2!("{direction} - {moved}/{frames} frames");
				Ok(moved * channels)
			},

			Err(e) if e.is_pipe() => {
				let xrun = match direction {
					Direction::Capture  => TransferError::Overrun,
					Direction::Playback => TransferError::Underrun,
				};
				warn2!("{direction} - {xrun}, re-arming stream");

				match pcm.prepare() {
					Ok(()) => Err(xrun),
					Err(e) => {
						error2!("{direction} - could not re-arm stream: {e}");
						Err(TransferError::Recover(e))
					},
				}
			},

			Err(e) => Err(match direction {
				Direction::Capture  => TransferError::Read(e),
				Direction::Playback => TransferError::Write(e),
			}),
		}
	}
}

impl<B: Backend> std::fmt::Debug for Device<B> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Device")
			.field("direction", &self.direction)
			.field("params", &self.params)
			.field("layout", &self.layout)
			.field("closed", &self.is_closed())
			.finish()
	}
}

impl<B: Backend> Drop for Device<B> {
	fn drop(&mut self) {
		if let Err(e) = self.close() {
			error2!("{} - close on drop failed: {e}", self.direction);
		}
	}
}

//---------------------------------------------------------------------------------------------------- TESTS
#[cfg(test)]
mod tests {
	use super::*;
	use crate::backend::Dummy;
	use crate::tests::{playback,stereo_s16};
	use pretty_assertions::assert_eq;

	fn device(dummy: &Dummy, direction: Direction) -> Device<Dummy> {
		Device::open(dummy, &DeviceConfig::DEFAULT, stereo_s16(), direction, BufferHint::DEFAULT).unwrap()
	}

	#[test]
	fn accessors() {
		let dummy = Dummy::new();
		let d = device(&dummy, Direction::Capture);

		assert_eq!(d.channels(), 2);
		assert_eq!(d.rate(), 48_000);
		assert_eq!(d.format(), SampleFormat::S16LE);
		assert_eq!(d.sample_size(), 2);
		assert_eq!(d.params(), stereo_s16());
		assert_eq!(d.direction(), Direction::Capture);
		assert!(!d.is_closed());
		assert_eq!(d.layout().buffer_frames, 65_536);
	}

	#[test]
	fn close_twice() {
		let dummy = Dummy::new();
		let mut d = device(&dummy, Direction::Playback);

		d.close().unwrap();
		d.close().unwrap();
		assert!(d.is_closed());
		drop(d);

		let stats = dummy.stats();
		assert_eq!(stats.drained, 1);
		assert_eq!(stats.closed, 1);
	}

	#[test]
	fn drop_drains_and_closes_once() {
		let dummy = Dummy::new();
		drop(device(&dummy, Direction::Playback));

		let stats = dummy.stats();
		assert_eq!(stats.opened, 1);
		assert_eq!(stats.drained, 1);
		assert_eq!(stats.closed, 1);
	}

	#[test]
	fn drain_failure_still_closes() {
		let dummy = Dummy::new();
		let mut d = device(&dummy, Direction::Playback);

		dummy.fail_drain(true);
		assert!(matches!(d.close(), Err(CloseError::Drain(_))));
		assert!(d.is_closed());
		assert_eq!(dummy.stats().closed, 1);

		// No second release.
		d.close().unwrap();
		drop(d);
		assert_eq!(dummy.stats().closed, 1);
	}

	#[test]
	fn close_error_wins() {
		let dummy = Dummy::new();
		let mut d = device(&dummy, Direction::Capture);

		dummy.fail_drain(true);
		dummy.fail_close(true);
		assert!(matches!(d.close(), Err(CloseError::Close(_))));
		assert!(d.is_closed());
		assert_eq!(dummy.stats().closed, 1);
	}

	#[test]
	fn drop_swallows_close_error() {
		let dummy = Dummy::new();
		let d = device(&dummy, Direction::Playback);
		dummy.fail_close(true);
		drop(d);
		assert_eq!(dummy.stats().closed, 1);
	}

	#[test]
	fn transfer_after_close() {
		let dummy = Dummy::new();
		let mut p = playback(&dummy);
		p.close().unwrap();

		assert!(matches!(p.write(&[0_i16; 4]), Err(TransferError::Closed)));
		assert!(matches!(p.pcm_mut(), Err(TransferError::Closed)));
		assert_eq!(dummy.stats().writes, 0);
	}

	#[test]
	fn samples_in() {
		let dummy = Dummy::new();
		let d = device(&dummy, Direction::Playback);
		assert_eq!(d.samples_in(8).unwrap(), 4);
		assert!(matches!(
			d.samples_in(7),
			Err(TransferError::PartialSample { bytes: 7, width: 2 }),
		));
	}

	#[test]
	fn debug_hides_handle() {
		let dummy = Dummy::new();
		let mut d = device(&dummy, Direction::Capture);
		d.close().unwrap();
		let s = format!("{d:?}");
		assert!(s.starts_with("Device { direction: Capture"), "{s}");
		assert!(s.ends_with("closed: true }"), "{s}");
	}
}
