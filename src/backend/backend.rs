//! The audio subsystem contract.
//!
//! These traits are a 1:1 simplification of the PCM and simple
//! mixer APIs of ALSA. Implementors only translate calls and
//! statuses, all the negotiation/recovery logic lives above them.

//----------------------------------------------------------------------------------------------- use
use strum::{
	AsRefStr,
	Display,
	IntoStaticStr,
};
use crate::{
	error::BackendError,
	format::SampleFormat,
};

//----------------------------------------------------------------------------------------------- Direction
/// Stream direction.
#[derive(Copy,Clone,Debug,Hash,PartialEq,Eq,PartialOrd,Ord)]
#[derive(AsRefStr,Display,IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
	/// Recording, device -> caller.
	Capture,
	/// Playing, caller -> device.
	Playback,
}

//----------------------------------------------------------------------------------------------- Backend
/// Entry point into an audio subsystem.
///
/// This is cheap to clone, every clone refers to the same subsystem.
pub trait Backend: Clone {
	/// An open PCM stream.
	type Pcm: Pcm;
	/// An open mixer.
	type Mixer: Mixer;

	/// Open the PCM device `name` in `direction`.
	///
	/// The stream must be blocking.
	fn open_pcm(&self, name: &str, direction: Direction) -> Result<Self::Pcm, BackendError>;

	/// Open an empty mixer, not attached to any card.
	///
	/// Dropping the returned value closes it.
	fn open_mixer(&self) -> Result<Self::Mixer, BackendError>;
}

//----------------------------------------------------------------------------------------------- Pcm
/// An open PCM stream.
///
/// Dropping this without calling [`Pcm::close`] must
/// still release it, but without draining.
pub trait Pcm {
	/// Hardware parameter space of this stream.
	type HwParams<'a>: HwParams where Self: 'a;

	/// Allocate a parameter descriptor filled with the
	/// full configuration space of this stream.
	///
	/// The descriptor is freed when dropped.
	fn hw_params_any(&self) -> Result<Self::HwParams<'_>, BackendError>;

	/// Install `params` on the stream and prepare it.
	///
	/// Either every parameter is applied or none are.
	fn commit(&self, params: &Self::HwParams<'_>) -> Result<(), BackendError>;

	/// Blocking interleaved read into `buf`.
	///
	/// `buf` holds a whole number of frames. Returns frames read.
	fn readi(&mut self, buf: &mut [u8]) -> Result<usize, BackendError>;

	/// Blocking interleaved write of `buf`.
	///
	/// `buf` holds a whole number of frames. Returns frames written.
	fn writei(&mut self, buf: &[u8]) -> Result<usize, BackendError>;

	/// Bring the stream back to a usable state after an xrun.
	fn prepare(&mut self) -> Result<(), BackendError>;

	/// Stop immediately, discarding pending frames.
	fn discard(&mut self) -> Result<(), BackendError>;

	/// Stop after all pending frames have been played.
	fn drain(&mut self) -> Result<(), BackendError>;

	/// Release the stream.
	///
	/// Backends that cannot observe the release status
	/// (like `alsa`, which closes in `Drop`) return `Ok(())`.
	fn close(self) -> Result<(), BackendError>;
}

//----------------------------------------------------------------------------------------------- HwParams
/// A hardware parameter descriptor being narrowed down.
///
/// Every `set_*` narrows the space further and fails
/// if the value is outside of what is left of it.
pub trait HwParams {
	/// Restrict to interleaved read/write access.
	fn set_access_interleaved(&mut self) -> Result<(), BackendError>;
	/// Restrict to exactly `format`.
	fn set_format(&mut self, format: SampleFormat) -> Result<(), BackendError>;
	/// Restrict to exactly `channels`.
	fn set_channels(&mut self, channels: u32) -> Result<(), BackendError>;
	/// Restrict to exactly `rate`, never a nearby one.
	fn set_rate(&mut self, rate: u32) -> Result<(), BackendError>;

	/// The largest buffer (in frames) left in the space.
	fn buffer_size_max(&self) -> Result<usize, BackendError>;
	/// Restrict to the buffer size closest to `frames`, returning it.
	fn set_buffer_size_near(&mut self, frames: usize) -> Result<usize, BackendError>;
	/// Restrict to the period size closest to `frames`, returning it.
	fn set_period_size_near(&mut self, frames: usize) -> Result<usize, BackendError>;
	/// Period count of the current space.
	fn periods(&self) -> Result<u32, BackendError>;
}

//----------------------------------------------------------------------------------------------- Mixer
/// An open mixer.
pub trait Mixer {
	/// A simple mixer element of this mixer.
	type Selem<'a>: Selem where Self: 'a;

	/// Attach to the card named `card`.
	fn attach(&mut self, card: &str) -> Result<(), BackendError>;
	/// Register the simple element interface.
	fn register(&mut self) -> Result<(), BackendError>;
	/// Load the elements of all attached cards.
	fn load(&mut self) -> Result<(), BackendError>;
	/// Find the simple element `name,index`.
	fn find_selem(&self, name: &str, index: u32) -> Option<Self::Selem<'_>>;
}

//----------------------------------------------------------------------------------------------- Selem
/// A simple mixer element.
pub trait Selem {
	/// Native `(min, max)` playback volume.
	fn playback_volume_range(&self) -> Result<(i64, i64), BackendError>;
	/// Current native playback volume of the mono/first channel.
	fn playback_volume_mono(&self) -> Result<i64, BackendError>;
	/// Set the native playback volume of every channel.
	fn set_playback_volume_all(&self, value: i64) -> Result<(), BackendError>;
}
