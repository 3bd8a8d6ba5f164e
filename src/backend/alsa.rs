//! ALSA backend.
//!
//! This file implements the [`Backend`] traits
//! using the `alsa` crate (`libasound` bindings).
//!
//! Nothing here makes decisions, it only translates
//! types and maps `alsa::Error` into [`BackendError`].

//----------------------------------------------------------------------------------------------- use
use std::ffi::CString;
use alsa::{
	mixer::{Mixer as AMixer, Selem as ASelem, SelemChannelId, SelemId},
	pcm::{Access, Format, Frames, HwParams as AHwParams, PCM},
	ValueOr,
};
use crate::{
	backend::{Backend,Pcm,HwParams,Mixer,Selem,Direction},
	error::BackendError,
	format::SampleFormat,
	macros::trace2,
};

//----------------------------------------------------------------------------------------------- Helpers
const EINVAL: i32 = 22;

fn c_string(s: &str) -> Result<CString, BackendError> {
	CString::new(s).map_err(|_| BackendError::new(EINVAL, "name contains a NUL byte"))
}

fn to_frames(frames: usize) -> Result<Frames, BackendError> {
	Frames::try_from(frames).map_err(|_| BackendError::new(EINVAL, "frame count out of range"))
}

fn from_frames(frames: Frames) -> Result<usize, BackendError> {
	usize::try_from(frames).map_err(|_| BackendError::new(EINVAL, "negative frame count"))
}

const fn format(format: SampleFormat) -> Format {
	use SampleFormat as S;
	match format {
		S::S8        => Format::S8,
		S::U8        => Format::U8,
		S::S16LE     => Format::S16LE,
		S::S16BE     => Format::S16BE,
		S::U16LE     => Format::U16LE,
		S::U16BE     => Format::U16BE,
		S::S24LE     => Format::S24LE,
		S::S24BE     => Format::S24BE,
		S::U24LE     => Format::U24LE,
		S::U24BE     => Format::U24BE,
		S::S32LE     => Format::S32LE,
		S::S32BE     => Format::S32BE,
		S::U32LE     => Format::U32LE,
		S::U32BE     => Format::U32BE,
		S::FloatLE   => Format::FloatLE,
		S::FloatBE   => Format::FloatBE,
		S::Float64LE => Format::Float64LE,
		S::Float64BE => Format::Float64BE,
	}
}

//----------------------------------------------------------------------------------------------- Alsa
/// The system's ALSA library.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Alsa;

impl Backend for Alsa {
	type Pcm = AlsaPcm;
	type Mixer = AlsaMixer;

	fn open_pcm(&self, name: &str, direction: Direction) -> Result<Self::Pcm, BackendError> {
		trace2!("Alsa - snd_pcm_open({name}, {direction})");

		let direction = match direction {
			Direction::Capture => alsa::Direction::Capture,
			Direction::Playback => alsa::Direction::Playback,
		};

		Ok(AlsaPcm(PCM::open(&c_string(name)?, direction, false)?))
	}

	fn open_mixer(&self) -> Result<Self::Mixer, BackendError> {
		trace2!("Alsa - snd_mixer_open()");
		Ok(AlsaMixer(AMixer::open(false)?))
	}
}

//----------------------------------------------------------------------------------------------- AlsaPcm
/// An ALSA PCM handle, `snd_pcm_close()`'d on drop.
pub struct AlsaPcm(PCM);

impl std::fmt::Debug for AlsaPcm {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("AlsaPcm").finish_non_exhaustive()
	}
}

impl Pcm for AlsaPcm {
	type HwParams<'a> = AlsaHwParams<'a> where Self: 'a;

	fn hw_params_any(&self) -> Result<Self::HwParams<'_>, BackendError> {
		Ok(AlsaHwParams(AHwParams::any(&self.0)?))
	}

	fn commit(&self, params: &Self::HwParams<'_>) -> Result<(), BackendError> {
		Ok(self.0.hw_params(&params.0)?)
	}

	fn readi(&mut self, buf: &mut [u8]) -> Result<usize, BackendError> {
		Ok(self.0.io_bytes().readi(buf)?)
	}

	fn writei(&mut self, buf: &[u8]) -> Result<usize, BackendError> {
		Ok(self.0.io_bytes().writei(buf)?)
	}

	fn prepare(&mut self) -> Result<(), BackendError> {
		Ok(self.0.prepare()?)
	}

	fn discard(&mut self) -> Result<(), BackendError> {
		Ok(self.0.drop()?)
	}

	fn drain(&mut self) -> Result<(), BackendError> {
		Ok(self.0.drain()?)
	}

	/// Always `Ok(())`.
	///
	/// `alsa` closes in `Drop` and does not surface the status,
	/// so a failing `snd_pcm_close()` can't be reported here.
	fn close(self) -> Result<(), BackendError> {
		drop(self.0);
		Ok(())
	}
}

//----------------------------------------------------------------------------------------------- AlsaHwParams
/// An ALSA `snd_pcm_hw_params_t`, freed on drop.
pub struct AlsaHwParams<'a>(AHwParams<'a>);

impl std::fmt::Debug for AlsaHwParams<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("AlsaHwParams").finish_non_exhaustive()
	}
}

impl HwParams for AlsaHwParams<'_> {
	fn set_access_interleaved(&mut self) -> Result<(), BackendError> {
		Ok(self.0.set_access(Access::RWInterleaved)?)
	}

	fn set_format(&mut self, f: SampleFormat) -> Result<(), BackendError> {
		Ok(self.0.set_format(format(f))?)
	}

	fn set_channels(&mut self, channels: u32) -> Result<(), BackendError> {
		Ok(self.0.set_channels(channels)?)
	}

	fn set_rate(&mut self, rate: u32) -> Result<(), BackendError> {
		// `Nearest` is `dir = 0`, an exact match, not rounding.
		Ok(self.0.set_rate(rate, ValueOr::Nearest)?)
	}

	fn buffer_size_max(&self) -> Result<usize, BackendError> {
		from_frames(self.0.get_buffer_size_max()?)
	}

	fn set_buffer_size_near(&mut self, frames: usize) -> Result<usize, BackendError> {
		from_frames(self.0.set_buffer_size_near(to_frames(frames)?)?)
	}

	fn set_period_size_near(&mut self, frames: usize) -> Result<usize, BackendError> {
		from_frames(self.0.set_period_size_near(to_frames(frames)?, ValueOr::Nearest)?)
	}

	fn periods(&self) -> Result<u32, BackendError> {
		Ok(self.0.get_periods()?)
	}
}

//----------------------------------------------------------------------------------------------- AlsaMixer
/// An ALSA mixer handle, `snd_mixer_close()`'d on drop.
pub struct AlsaMixer(AMixer);

impl std::fmt::Debug for AlsaMixer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("AlsaMixer").finish_non_exhaustive()
	}
}

impl Mixer for AlsaMixer {
	type Selem<'a> = AlsaSelem<'a> where Self: 'a;

	fn attach(&mut self, card: &str) -> Result<(), BackendError> {
		Ok(self.0.attach(&c_string(card)?)?)
	}

	fn register(&mut self) -> Result<(), BackendError> {
		Ok(ASelem::register(&mut self.0)?)
	}

	fn load(&mut self) -> Result<(), BackendError> {
		Ok(self.0.load()?)
	}

	fn find_selem(&self, name: &str, index: u32) -> Option<Self::Selem<'_>> {
		// `SelemId::new` panics on interior NUL.
		if name.contains('\0') {
			return None;
		}
		self.0.find_selem(&SelemId::new(name, index)).map(AlsaSelem)
	}
}

//----------------------------------------------------------------------------------------------- AlsaSelem
/// An ALSA simple mixer element.
pub struct AlsaSelem<'a>(ASelem<'a>);

impl std::fmt::Debug for AlsaSelem<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("AlsaSelem").finish_non_exhaustive()
	}
}

impl Selem for AlsaSelem<'_> {
	fn playback_volume_range(&self) -> Result<(i64, i64), BackendError> {
		Ok(self.0.get_playback_volume_range())
	}

	fn playback_volume_mono(&self) -> Result<i64, BackendError> {
		Ok(self.0.get_playback_volume(SelemChannelId::mono())?)
	}

	fn set_playback_volume_all(&self, value: i64) -> Result<(), BackendError> {
		Ok(self.0.set_playback_volume_all(value)?)
	}
}

//----------------------------------------------------------------------------------------------- Error re-map
impl From<alsa::Error> for BackendError {
	fn from(error: alsa::Error) -> Self {
		Self::new(error.errno(), error.to_string())
	}
}
