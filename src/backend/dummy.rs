//! Dummy audio subsystem.
//!
//! This implements [`Backend`] with a fake in-memory
//! device that behaves like an ALSA PCM + simple mixer
//! without connecting to any hardware:
//!
//! - hardware parameters are narrowed down within [`DummyCaps`]
//!   and "nearest" requests are rounded to a frame granularity
//! - written frames are kept, read frames come from a queue (or noise)
//! - xruns put the stream in a broken state until it is re-prepared
//! - drop/drain leave the stream stopped until it is re-prepared
//! - every negotiation step, open, prepare, drain and close can be made to fail
//!
//! Every clone of a [`Dummy`] shares the same device state,
//! so a test can keep one and hand another to `pcmio`.

//----------------------------------------------------------------------------------------------- use
use std::{
	borrow::Cow,
	cell::Cell,
	collections::{BTreeMap,VecDeque},
	ops::RangeInclusive,
	sync::Arc,
};
use parking_lot::Mutex;
use rand::RngCore;
use strum::IntoEnumIterator;
use crate::{
	backend::{Backend,Pcm,HwParams,Mixer,Selem,Direction},
	error::{BackendError,HwParamStep,EPIPE},
	format::SampleFormat,
	macros::trace2,
};

//----------------------------------------------------------------------------------------------- Errno
const ENOENT: i32 = 2;
const EIO:    i32 = 5;
const EBUSY:  i32 = 16;
const EINVAL: i32 = 22;
const EBADFD: i32 = 77;

fn errno(errno: i32) -> BackendError {
	let message = match errno {
		ENOENT => "No such file or directory",
		EIO    => "Input/output error",
		EBUSY  => "Device or resource busy",
		EINVAL => "Invalid argument",
		EPIPE  => "Broken pipe",
		EBADFD => "File descriptor in bad state",
		_      => "Unknown error",
	};
	BackendError::new(errno, message)
}

// Round to the nearest multiple of `step` that is `>= step` and `<= max`.
fn round_step(frames: usize, step: usize, max: usize) -> usize {
	let step = step.max(1);
	let mut v = ((frames + step / 2) / step * step).max(step);
	while v > max && v > step {
		v -= step;
	}
	v
}

//----------------------------------------------------------------------------------------------- DummyCaps
/// What the dummy device supports.
#[derive(Clone,Debug,PartialEq,Eq)]
pub struct DummyCaps {
	/// Device names that can be opened.
	pub devices: Vec<Cow<'static, str>>,
	/// Accepted sample formats.
	pub formats: Vec<SampleFormat>,
	/// Accepted channel counts.
	pub channels: RangeInclusive<u32>,
	/// Accepted sample rates.
	pub rates: RangeInclusive<u32>,
	/// Accepted buffer lengths (frames).
	pub buffer_frames: RangeInclusive<usize>,
	/// Accepted period lengths (frames).
	pub period_frames: RangeInclusive<usize>,
	/// Buffer & period lengths are rounded to a multiple of this.
	pub granularity: usize,
	/// Most frames a single `readi`/`writei` moves, `None` is unlimited.
	pub max_transfer_frames: Option<usize>,
	/// Period count to report instead of `ceil(buffer / period)`.
	pub reported_periods: Option<u32>,
	/// The only card the mixer can attach to.
	pub card: Cow<'static, str>,
}

impl Default for DummyCaps {
	fn default() -> Self {
		Self {
			devices: vec![Cow::Borrowed("default"), Cow::Borrowed("hw:0,0")],
			formats: SampleFormat::iter().collect(),
			channels: 1..=8,
			rates: 8_000..=192_000,
			buffer_frames: 64..=65_536,
			period_frames: 32..=16_384,
			granularity: 32,
			max_transfer_frames: None,
			reported_periods: None,
			card: Cow::Borrowed("default"),
		}
	}
}

//----------------------------------------------------------------------------------------------- DummyStats
/// Call counters of a [`Dummy`].
#[derive(Copy,Clone,Debug,Default,Hash,PartialEq,Eq)]
pub struct DummyStats {
	/// PCM streams opened.
	pub opened: usize,
	/// PCM streams released (closed or dropped).
	pub closed: usize,
	/// `drain()` calls.
	pub drained: usize,
	/// `discard()` calls.
	pub discarded: usize,
	/// `prepare()` calls.
	pub prepared: usize,
	/// Successful `readi()` calls.
	pub reads: usize,
	/// Successful `writei()` calls.
	pub writes: usize,
	/// Frames moved by `readi()`.
	pub frames_read: usize,
	/// Frames moved by `writei()`.
	pub frames_written: usize,
	/// Mixers opened.
	pub mixers_opened: usize,
	/// Mixers released.
	pub mixers_closed: usize,
}

//----------------------------------------------------------------------------------------------- Shared
#[derive(Debug, Default)]
struct Faults {
	open: bool,
	step: Option<HwParamStep>,
	xruns: usize,
	transfer: Option<i32>,
	prepare: bool,
	drain: bool,
	close: bool,
	mixer_open: bool,
	mixer_load: bool,
}

#[derive(Copy, Clone, Debug)]
struct Element {
	min: i64,
	max: i64,
	value: i64,
}

#[derive(Debug)]
struct Shared {
	caps: DummyCaps,
	faults: Faults,
	stats: DummyStats,
	played: Vec<u8>,
	recorded: VecDeque<u8>,
	elements: BTreeMap<(String, u32), Element>,
}

//----------------------------------------------------------------------------------------------- Dummy
/// Handle to a fake audio subsystem.
///
/// By default it has the [`DummyCaps::default`] device and two
/// mixer elements on the `default` card:
/// - `Master,0` with a native range of `[0, 87]`
/// - `PCM,0` with a native range of `[20, 255]`
#[derive(Clone, Debug)]
pub struct Dummy {
	shared: Arc<Mutex<Shared>>,
}

impl Default for Dummy {
	fn default() -> Self {
		Self::new()
	}
}

impl Dummy {
	#[must_use]
	/// A device with [`DummyCaps::default`].
	pub fn new() -> Self {
		Self::with_caps(DummyCaps::default())
	}

	#[must_use]
	/// A device with custom capabilities.
	pub fn with_caps(caps: DummyCaps) -> Self {
		let mut elements = BTreeMap::new();
		elements.insert(("Master".into(), 0), Element { min: 0, max: 87, value: 87 });
		elements.insert(("PCM".into(), 0), Element { min: 20, max: 255, value: 255 });

		Self {
			shared: Arc::new(Mutex::new(Shared {
				caps,
				faults: Faults::default(),
				stats: DummyStats::default(),
				played: Vec::new(),
				recorded: VecDeque::new(),
				elements,
			})),
		}
	}

	//------------------------------------------ Inspection
	#[must_use]
	/// Snapshot of the call counters.
	pub fn stats(&self) -> DummyStats {
		self.shared.lock().stats
	}

	#[must_use]
	/// Every byte written so far.
	pub fn played(&self) -> Vec<u8> {
		self.shared.lock().played.clone()
	}

	/// Queue bytes for future reads.
	///
	/// Reads with nothing queued are filled with noise.
	pub fn push_recorded(&self, bytes: &[u8]) {
		self.shared.lock().recorded.extend(bytes);
	}

	/// Add (or replace) the simple element `name,index`.
	///
	/// Its volume starts at `max`.
	pub fn add_element(&self, name: &str, index: u32, min: i64, max: i64) {
		self.shared.lock().elements.insert((name.into(), index), Element { min, max, value: max });
	}

	/// Remove the simple element `name,index`.
	pub fn remove_element(&self, name: &str, index: u32) {
		self.shared.lock().elements.remove(&(name.to_string(), index));
	}

	#[must_use]
	/// Native volume of `name,index`.
	pub fn element_volume(&self, name: &str, index: u32) -> Option<i64> {
		self.shared.lock().elements.get(&(name.to_string(), index)).map(|e| e.value)
	}

	//------------------------------------------ Faults
	/// Make `open_pcm()` fail with `EBUSY`.
	pub fn fail_open(&self, fail: bool) {
		self.shared.lock().faults.open = fail;
	}

	/// Make a negotiation step fail with `EINVAL`.
	pub fn fail_step(&self, step: Option<HwParamStep>) {
		self.shared.lock().faults.step = step;
	}

	/// The next `n` transfers fail with `EPIPE` and break the stream.
	pub fn inject_xruns(&self, n: usize) {
		self.shared.lock().faults.xruns = n;
	}

	/// The next transfer fails with `errno`, without breaking the stream.
	pub fn fail_next_transfer(&self, errno: i32) {
		self.shared.lock().faults.transfer = Some(errno);
	}

	/// Make `prepare()` fail with `EIO`.
	pub fn fail_prepare(&self, fail: bool) {
		self.shared.lock().faults.prepare = fail;
	}

	/// Make `drain()` fail with `EIO`.
	pub fn fail_drain(&self, fail: bool) {
		self.shared.lock().faults.drain = fail;
	}

	/// Make `close()` fail with `EIO` (the stream is still released).
	pub fn fail_close(&self, fail: bool) {
		self.shared.lock().faults.close = fail;
	}

	/// Make `open_mixer()` fail with `EBUSY`.
	pub fn fail_mixer_open(&self, fail: bool) {
		self.shared.lock().faults.mixer_open = fail;
	}

	/// Make mixer `load()` fail with `EIO`.
	pub fn fail_mixer_load(&self, fail: bool) {
		self.shared.lock().faults.mixer_load = fail;
	}
}

impl Backend for Dummy {
	type Pcm = DummyPcm;
	type Mixer = DummyMixer;

	fn open_pcm(&self, name: &str, direction: Direction) -> Result<Self::Pcm, BackendError> {
		let mut shared = self.shared.lock();

		if shared.faults.open {
			return Err(errno(EBUSY));
		}
		if !shared.caps.devices.iter().any(|d| d == name) {
			return Err(errno(ENOENT));
		}

		shared.stats.opened += 1;
		drop(shared);

		Ok(DummyPcm {
			shared: Arc::clone(&self.shared),
			direction,
			setup: Cell::new(None),
			state: State::Open,
			released: false,
		})
	}

	fn open_mixer(&self) -> Result<Self::Mixer, BackendError> {
		let mut shared = self.shared.lock();

		if shared.faults.mixer_open {
			return Err(errno(EBUSY));
		}

		shared.stats.mixers_opened += 1;
		drop(shared);

		Ok(DummyMixer {
			shared: Arc::clone(&self.shared),
			attached: false,
			registered: false,
			loaded: false,
		})
	}
}

//----------------------------------------------------------------------------------------------- DummyPcm
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
	Open,
	Prepared,
	Xrun,
	Stopped,
}

#[derive(Copy, Clone, Debug)]
struct Setup {
	frame_bytes: usize,
}

/// A [`Dummy`] PCM stream.
#[derive(Debug)]
pub struct DummyPcm {
	shared: Arc<Mutex<Shared>>,
	direction: Direction,
	setup: Cell<Option<Setup>>,
	state: State,
	released: bool,
}

impl DummyPcm {
	// Common `readi`/`writei` prologue, returns frames to move.
	fn transfer_frames(&mut self, shared: &mut Shared, len: usize) -> Result<usize, BackendError> {
		let Some(setup) = self.setup.get() else {
			return Err(errno(EBADFD));
		};

		// `commit()` can't change `state` from `&self`.
		if self.state == State::Open {
			self.state = State::Prepared;
		}

		match self.state {
			State::Xrun => return Err(errno(EPIPE)),
			State::Stopped => return Err(errno(EBADFD)),
			State::Open | State::Prepared => {},
		}

		if shared.faults.xruns > 0 {
			shared.faults.xruns -= 1;
			self.state = State::Xrun;
			trace2!("Dummy - injected xrun ({})", self.direction);
			return Err(errno(EPIPE));
		}

		if let Some(e) = shared.faults.transfer.take() {
			return Err(errno(e));
		}

		let frames = len / setup.frame_bytes;
		Ok(shared.caps.max_transfer_frames.map_or(frames, |max| frames.min(max)))
	}

	fn frame_bytes(&self) -> usize {
		self.setup.get().map_or(1, |s| s.frame_bytes)
	}
}

impl Pcm for DummyPcm {
	type HwParams<'a> = DummyHwParams<'a> where Self: 'a;

	fn hw_params_any(&self) -> Result<Self::HwParams<'_>, BackendError> {
		let shared = self.shared.lock();
		if shared.faults.step == Some(HwParamStep::Any) {
			return Err(errno(EINVAL));
		}
		let caps = shared.caps.clone();
		drop(shared);

		Ok(DummyHwParams {
			pcm: self,
			caps,
			access: false,
			format: None,
			channels: None,
			rate: None,
			buffer: None,
			period: None,
		})
	}

	fn commit(&self, params: &Self::HwParams<'_>) -> Result<(), BackendError> {
		params.fault(HwParamStep::Commit)?;

		let (Some(format), Some(channels), Some(_rate)) = (params.format, params.channels, params.rate) else {
			return Err(errno(EINVAL));
		};
		if !params.access {
			return Err(errno(EINVAL));
		}

		self.setup.set(Some(Setup {
			frame_bytes: channels as usize * format.byte_width(),
		}));

		Ok(())
	}

	fn readi(&mut self, buf: &mut [u8]) -> Result<usize, BackendError> {
		let shared = Arc::clone(&self.shared);
		let mut shared = shared.lock();

		let frames = self.transfer_frames(&mut shared, buf.len())?;
		let bytes  = frames * self.frame_bytes();

		let queued = bytes.min(shared.recorded.len());
		for (b, r) in buf[..queued].iter_mut().zip(shared.recorded.drain(..queued)) {
			*b = r;
		}
		rand::thread_rng().fill_bytes(&mut buf[queued..bytes]);

		shared.stats.reads += 1;
		shared.stats.frames_read += frames;
		Ok(frames)
	}

	fn writei(&mut self, buf: &[u8]) -> Result<usize, BackendError> {
		let shared = Arc::clone(&self.shared);
		let mut shared = shared.lock();

		let frames = self.transfer_frames(&mut shared, buf.len())?;
		let bytes  = frames * self.frame_bytes();

		shared.played.extend_from_slice(&buf[..bytes]);
		shared.stats.writes += 1;
		shared.stats.frames_written += frames;
		Ok(frames)
	}

	fn prepare(&mut self) -> Result<(), BackendError> {
		let mut shared = self.shared.lock();
		if shared.faults.prepare {
			return Err(errno(EIO));
		}
		if self.setup.get().is_none() {
			return Err(errno(EBADFD));
		}
		shared.stats.prepared += 1;
		self.state = State::Prepared;
		Ok(())
	}

	fn discard(&mut self) -> Result<(), BackendError> {
		if self.setup.get().is_none() {
			return Err(errno(EBADFD));
		}
		self.shared.lock().stats.discarded += 1;
		self.state = State::Stopped;
		Ok(())
	}

	fn drain(&mut self) -> Result<(), BackendError> {
		let mut shared = self.shared.lock();
		if shared.faults.drain {
			return Err(errno(EIO));
		}
		shared.stats.drained += 1;
		self.state = State::Stopped;
		Ok(())
	}

	fn close(mut self) -> Result<(), BackendError> {
		self.released = true;
		let mut shared = self.shared.lock();
		shared.stats.closed += 1;
		if shared.faults.close {
			Err(errno(EIO))
		} else {
			Ok(())
		}
	}
}

impl Drop for DummyPcm {
	fn drop(&mut self) {
		if !self.released {
			self.shared.lock().stats.closed += 1;
		}
	}
}

//----------------------------------------------------------------------------------------------- DummyHwParams
/// A [`Dummy`] hardware parameter descriptor.
#[derive(Debug)]
pub struct DummyHwParams<'a> {
	pcm: &'a DummyPcm,
	caps: DummyCaps,
	access: bool,
	format: Option<SampleFormat>,
	channels: Option<u32>,
	rate: Option<u32>,
	buffer: Option<usize>,
	period: Option<usize>,
}

impl DummyHwParams<'_> {
	fn fault(&self, step: HwParamStep) -> Result<(), BackendError> {
		if self.pcm.shared.lock().faults.step == Some(step) {
			Err(errno(EINVAL))
		} else {
			Ok(())
		}
	}
}

impl HwParams for DummyHwParams<'_> {
	fn set_access_interleaved(&mut self) -> Result<(), BackendError> {
		self.fault(HwParamStep::Access)?;
		self.access = true;
		Ok(())
	}

	fn set_format(&mut self, format: SampleFormat) -> Result<(), BackendError> {
		self.fault(HwParamStep::Format)?;
		if !self.caps.formats.contains(&format) {
			return Err(errno(EINVAL));
		}
		self.format = Some(format);
		Ok(())
	}

	fn set_channels(&mut self, channels: u32) -> Result<(), BackendError> {
		self.fault(HwParamStep::Channels)?;
		if !self.caps.channels.contains(&channels) {
			return Err(errno(EINVAL));
		}
		self.channels = Some(channels);
		Ok(())
	}

	fn set_rate(&mut self, rate: u32) -> Result<(), BackendError> {
		self.fault(HwParamStep::Rate)?;
		if !self.caps.rates.contains(&rate) {
			return Err(errno(EINVAL));
		}
		self.rate = Some(rate);
		Ok(())
	}

	fn buffer_size_max(&self) -> Result<usize, BackendError> {
		self.fault(HwParamStep::BufferSizeMax)?;
		Ok(*self.caps.buffer_frames.end())
	}

	fn set_buffer_size_near(&mut self, frames: usize) -> Result<usize, BackendError> {
		self.fault(HwParamStep::BufferSize)?;
		let (min, max) = (*self.caps.buffer_frames.start(), *self.caps.buffer_frames.end());
		let frames = round_step(frames.clamp(min, max), self.caps.granularity, max);
		self.buffer = Some(frames);
		Ok(frames)
	}

	fn set_period_size_near(&mut self, frames: usize) -> Result<usize, BackendError> {
		self.fault(HwParamStep::PeriodSize)?;
		let min = *self.caps.period_frames.start();
		let max = match self.buffer {
			Some(b) => b.min(*self.caps.period_frames.end()),
			None => *self.caps.period_frames.end(),
		};
		let frames = round_step(frames.clamp(min, max.max(min)), self.caps.granularity, max);
		self.period = Some(frames);
		Ok(frames)
	}

	fn periods(&self) -> Result<u32, BackendError> {
		self.fault(HwParamStep::Periods)?;
		if let Some(periods) = self.caps.reported_periods {
			return Ok(periods);
		}
		match (self.buffer, self.period) {
			(Some(b), Some(p)) => u32::try_from((b + p - 1) / p).map_err(|_| errno(EINVAL)),
			_ => Err(errno(EINVAL)),
		}
	}
}

//----------------------------------------------------------------------------------------------- DummyMixer
/// A [`Dummy`] mixer.
#[derive(Debug)]
pub struct DummyMixer {
	shared: Arc<Mutex<Shared>>,
	attached: bool,
	registered: bool,
	loaded: bool,
}

impl Mixer for DummyMixer {
	type Selem<'a> = DummySelem<'a> where Self: 'a;

	fn attach(&mut self, card: &str) -> Result<(), BackendError> {
		if self.shared.lock().caps.card != card {
			return Err(errno(ENOENT));
		}
		self.attached = true;
		Ok(())
	}

	fn register(&mut self) -> Result<(), BackendError> {
		self.registered = true;
		Ok(())
	}

	fn load(&mut self) -> Result<(), BackendError> {
		if self.shared.lock().faults.mixer_load {
			return Err(errno(EIO));
		}
		self.loaded = true;
		Ok(())
	}

	fn find_selem(&self, name: &str, index: u32) -> Option<Self::Selem<'_>> {
		if !(self.attached && self.registered && self.loaded) {
			return None;
		}
		let key = (name.to_string(), index);
		if self.shared.lock().elements.contains_key(&key) {
			Some(DummySelem { mixer: self, key })
		} else {
			None
		}
	}
}

impl Drop for DummyMixer {
	fn drop(&mut self) {
		self.shared.lock().stats.mixers_closed += 1;
	}
}

//----------------------------------------------------------------------------------------------- DummySelem
/// A [`Dummy`] simple mixer element.
#[derive(Debug)]
pub struct DummySelem<'a> {
	mixer: &'a DummyMixer,
	key: (String, u32),
}

impl DummySelem<'_> {
	fn element(&self) -> Result<Element, BackendError> {
		self.mixer.shared.lock().elements.get(&self.key).copied().ok_or_else(|| errno(ENOENT))
	}
}

impl Selem for DummySelem<'_> {
	fn playback_volume_range(&self) -> Result<(i64, i64), BackendError> {
		self.element().map(|e| (e.min, e.max))
	}

	fn playback_volume_mono(&self) -> Result<i64, BackendError> {
		self.element().map(|e| e.value)
	}

	fn set_playback_volume_all(&self, value: i64) -> Result<(), BackendError> {
		let mut shared = self.mixer.shared.lock();
		let e = shared.elements.get_mut(&self.key).ok_or_else(|| errno(ENOENT))?;
		e.value = value.clamp(e.min.min(e.max), e.max.max(e.min));
		Ok(())
	}
}

//----------------------------------------------------------------------------------------------- TESTS
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn round_step_nearest() {
		assert_eq!(round_step(6000, 32, 16_384), 6016);
		assert_eq!(round_step(0, 32, 16_384), 32);
		assert_eq!(round_step(16_384, 32, 16_384), 16_384);
		assert_eq!(round_step(100, 64, 100), 64);
	}

	#[test]
	fn unknown_device() {
		let dummy = Dummy::new();
		let e = dummy.open_pcm("hw:9,9", Direction::Playback).unwrap_err();
		assert_eq!(e.errno(), ENOENT);
		assert_eq!(dummy.stats().opened, 0);
	}

	#[test]
	fn drop_releases_once() {
		let dummy = Dummy::new();
		let pcm = dummy.open_pcm("default", Direction::Capture).unwrap();
		drop(pcm);
		assert_eq!(dummy.stats().closed, 1);

		let pcm = dummy.open_pcm("default", Direction::Capture).unwrap();
		pcm.close().unwrap();
		assert_eq!(dummy.stats().closed, 2);
	}

	#[test]
	fn transfer_before_commit() {
		let dummy = Dummy::new();
		let mut pcm = dummy.open_pcm("default", Direction::Playback).unwrap();
		assert_eq!(pcm.writei(&[0; 4]).unwrap_err().errno(), EBADFD);
	}

	#[test]
	fn xrun_sticks_until_prepare() {
		let dummy = Dummy::new();
		let mut pcm = dummy.open_pcm("default", Direction::Playback).unwrap();
		{
			let mut hw = pcm.hw_params_any().unwrap();
			hw.set_access_interleaved().unwrap();
			hw.set_format(SampleFormat::U8).unwrap();
			hw.set_channels(1).unwrap();
			hw.set_rate(8_000).unwrap();
			pcm.commit(&hw).unwrap();
		}

		dummy.inject_xruns(1);
		assert!(pcm.writei(&[1, 2]).unwrap_err().is_pipe());
		assert!(pcm.writei(&[1, 2]).unwrap_err().is_pipe());
		pcm.prepare().unwrap();
		assert_eq!(pcm.writei(&[1, 2]).unwrap(), 2);
		assert_eq!(dummy.played(), [1, 2]);
	}

	#[test]
	fn period_clamped_to_buffer() {
		let dummy = Dummy::new();
		let pcm = dummy.open_pcm("default", Direction::Playback).unwrap();
		let mut hw = pcm.hw_params_any().unwrap();
		assert_eq!(hw.set_buffer_size_near(1000).unwrap(), 992);
		assert_eq!(hw.set_period_size_near(5000).unwrap(), 992);
		assert_eq!(hw.periods().unwrap(), 1);
		assert_eq!(hw.set_period_size_near(300).unwrap(), 288);
		assert_eq!(hw.periods().unwrap(), 4);
	}

	#[test]
	fn mixer_needs_load() {
		let dummy = Dummy::new();
		let mut mixer = dummy.open_mixer().unwrap();
		mixer.attach("default").unwrap();
		mixer.register().unwrap();
		assert!(mixer.find_selem("Master", 0).is_none());
		mixer.load().unwrap();
		assert!(mixer.find_selem("Master", 0).is_some());
		assert!(mixer.find_selem("Master", 1).is_none());
		drop(mixer);
		assert_eq!(dummy.stats().mixers_closed, 1);
	}

	#[test]
	fn selem_clamps() {
		let dummy = Dummy::new();
		let mut mixer = dummy.open_mixer().unwrap();
		mixer.attach("default").unwrap();
		mixer.register().unwrap();
		mixer.load().unwrap();
		let selem = mixer.find_selem("PCM", 0).unwrap();
		selem.set_playback_volume_all(9000).unwrap();
		assert_eq!(selem.playback_volume_mono().unwrap(), 255);
		selem.set_playback_volume_all(-1).unwrap();
		assert_eq!(dummy.element_volume("PCM", 0), Some(20));
	}
}
