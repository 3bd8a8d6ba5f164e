//! Master volume get/set over a mixer simple element.
//!
//! Every call opens its own mixer, walks it to the configured
//! element and releases it before returning. Nothing is cached,
//! the element's native range is re-read on every call.

//---------------------------------------------------------------------------------------------------- use
use crate::{
	backend::{Backend,DefaultBackend,Mixer,Selem},
	config::MixerConfig,
	error::VolumeError,
	volume::Percent,
	macros::{debug2,info2},
};

//---------------------------------------------------------------------------------------------------- Scaling
// `percent` onto `[min, max]`: `min + percent * (max - min) / 100`.
fn to_native(percent: Percent, min: i64, max: i64) -> i64 {
	let span = i128::from(max) - i128::from(min);
	let v = i128::from(min) + i128::from(percent.inner()) * span / 100;
	i64::try_from(v).unwrap_or(max)
}

// `value` in `[min, max]` onto `0..=100`, truncating.
fn to_percent(value: i64, min: i64, max: i64) -> Percent {
	let span = i128::from(max) - i128::from(min);
	let p = (i128::from(value) - i128::from(min)) * 100 / span;
	Percent::new(u8::try_from(p.clamp(0, 100)).unwrap_or(100))
}

//---------------------------------------------------------------------------------------------------- VolumeController
/// Reads and writes the playback volume of a mixer element.
///
/// This needs no open stream and holds no mixer between calls.
///
/// ```rust
/// # use pcmio::*;
/// # use pcmio::backend::Dummy;
/// let volume = VolumeController::new(Dummy::new(), MixerConfig::DEFAULT);
///
/// volume.set_master_volume(Percent::NEW_100).unwrap();
/// assert_eq!(volume.get_master_volume().unwrap(), Percent::NEW_100);
/// ```
#[derive(Clone,Debug)]
pub struct VolumeController<B: Backend = DefaultBackend> {
	backend: B,
	config: MixerConfig,
}

impl<B: Backend> VolumeController<B> {
	#[inline]
	#[must_use]
	/// Control `config`'s element through `backend`.
	pub const fn new(backend: B, config: MixerConfig) -> Self {
		Self { backend, config }
	}

	#[inline]
	#[must_use]
	/// The element being controlled.
	pub const fn config(&self) -> &MixerConfig {
		&self.config
	}

	/// Current volume of the element.
	///
	/// The element's first (mono) channel is read and
	/// scaled from its native range, truncating.
	///
	/// # Errors
	/// Any mixer step failing, or the element's range being empty.
	pub fn get_master_volume(&self) -> Result<Percent, VolumeError> {
		let mixer = self.mixer()?;
		let selem = self.find(&mixer)?;
		let (min, max) = range(&selem)?;

		let value = selem.playback_volume_mono().map_err(VolumeError::Get)?;
		let percent = to_percent(value, min, max);

		debug2!("VolumeController - {} = {value} [{min}, {max}] ({percent})", self.config.element);
		Ok(percent)
	}

	/// Set every channel of the element to `volume`.
	///
	/// # Errors
	/// Any mixer step failing, or the element's range being empty.
	pub fn set_master_volume(&self, volume: Percent) -> Result<(), VolumeError> {
		let mixer = self.mixer()?;
		let selem = self.find(&mixer)?;
		let (min, max) = range(&selem)?;

		let value = to_native(volume, min, max);
		selem.set_playback_volume_all(value).map_err(VolumeError::Set)?;

		info2!("VolumeController - {} = {value} [{min}, {max}] ({volume})", self.config.element);
		Ok(())
	}

	// Open a mixer and load the configured card into it.
	fn mixer(&self) -> Result<B::Mixer, VolumeError> {
		let mut mixer = self.backend.open_mixer().map_err(VolumeError::Open)?;

		mixer.attach(&self.config.card).map_err(|source| VolumeError::Attach {
			card: self.config.card.clone(),
			source,
		})?;
		mixer.register().map_err(VolumeError::Register)?;
		mixer.load().map_err(VolumeError::Load)?;

		Ok(mixer)
	}

	fn find<'m>(&self, mixer: &'m B::Mixer) -> Result<<B::Mixer as Mixer>::Selem<'m>, VolumeError> {
		mixer
			.find_selem(&self.config.element, self.config.index)
			.ok_or_else(|| VolumeError::ElementNotFound {
				name: self.config.element.clone(),
				index: self.config.index,
			})
	}
}

// Native range, rejecting ranges that can't be scaled.
fn range<S: Selem>(selem: &S) -> Result<(i64, i64), VolumeError> {
	let (min, max) = selem.playback_volume_range().map_err(VolumeError::Range)?;
	if max <= min {
		return Err(VolumeError::EmptyRange { min, max });
	}
	Ok((min, max))
}

//---------------------------------------------------------------------------------------------------- TESTS
#[cfg(test)]
mod tests {
	use super::*;
	use crate::backend::Dummy;
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	fn assert_round_trip(volume: &VolumeController<Dummy>) {
		for p in [Percent::NEW_0, Percent::NEW_50, Percent::NEW_100] {
			volume.set_master_volume(p).unwrap();
			let got = volume.get_master_volume().unwrap();
			assert!(got.inner().abs_diff(p.inner()) <= 1, "set {p}, got {got}");
		}
	}

	#[test]
	fn round_trip_master() {
		let dummy = Dummy::new();
		assert_round_trip(&VolumeController::new(dummy.clone(), MixerConfig::DEFAULT));

		let stats = dummy.stats();
		assert_eq!(stats.mixers_opened, 6);
		assert_eq!(stats.mixers_closed, 6);
	}

	#[test]
	fn round_trip_pcm_with_offset_min() {
		let dummy = Dummy::new();
		let volume = VolumeController::new(dummy.clone(), MixerConfig::PCM);
		assert_round_trip(&volume);

		// Min offset is applied both ways.
		volume.set_master_volume(Percent::NEW_0).unwrap();
		assert_eq!(dummy.element_volume("PCM", 0), Some(20));
		volume.set_master_volume(Percent::NEW_50).unwrap();
		assert_eq!(dummy.element_volume("PCM", 0), Some(137));
		assert_eq!(volume.get_master_volume().unwrap(), Percent::NEW_49);
	}

	#[test]
	fn get_truncates() {
		let dummy = Dummy::new();
		let volume = VolumeController::new(dummy.clone(), MixerConfig::DEFAULT);
		volume.set_master_volume(Percent::NEW_50).unwrap();
		// 50 * 87 / 100 = 43, 43 * 100 / 87 = 49.4
		assert_eq!(dummy.element_volume("Master", 0), Some(43));
		assert_eq!(volume.get_master_volume().unwrap(), Percent::NEW_49);
	}

	#[test]
	fn element_not_found() {
		let dummy = Dummy::new();
		dummy.remove_element("Master", 0);
		let volume = VolumeController::new(dummy.clone(), MixerConfig::DEFAULT);

		let e = volume.get_master_volume().unwrap_err();
		assert_eq!(e.to_string(), "could not find simple element `Master,0`");
		assert!(matches!(volume.set_master_volume(Percent::MAX), Err(VolumeError::ElementNotFound { .. })));

		let stats = dummy.stats();
		assert_eq!(stats.mixers_opened, 2);
		assert_eq!(stats.mixers_closed, 2);
	}

	#[test]
	fn wrong_card() {
		let dummy = Dummy::new();
		let volume = VolumeController::new(dummy.clone(), MixerConfig::new("hw:3", "Master"));

		match volume.get_master_volume() {
			Err(VolumeError::Attach { card, source }) => {
				assert_eq!(card, "hw:3");
				assert_eq!(source.errno(), 2);
			},
			other => panic!("{other:?}"),
		}
		assert_eq!(dummy.stats().mixers_closed, 1);
	}

	#[test]
	fn open_and_load_failures() {
		let dummy = Dummy::new();
		let volume = VolumeController::new(dummy.clone(), MixerConfig::DEFAULT);

		dummy.fail_mixer_open(true);
		assert!(matches!(volume.get_master_volume(), Err(VolumeError::Open(_))));
		assert_eq!(dummy.stats().mixers_opened, 0);
		dummy.fail_mixer_open(false);

		dummy.fail_mixer_load(true);
		assert!(matches!(volume.set_master_volume(Percent::MIN), Err(VolumeError::Load(_))));
		assert_eq!(dummy.stats().mixers_closed, 1);
		// Nothing was written.
		assert_eq!(dummy.element_volume("Master", 0), Some(87));
	}

	#[test]
	fn empty_range() {
		let dummy = Dummy::new();
		dummy.add_element("Speaker", 1, 5, 5);
		let mut config = MixerConfig::new("default", "Speaker");
		config.index = 1;
		let volume = VolumeController::new(dummy, config);

		assert!(matches!(volume.get_master_volume(), Err(VolumeError::EmptyRange { min: 5, max: 5 })));
	}

	#[test]
	fn scaling_extremes() {
		assert_eq!(to_native(Percent::MAX, i64::MIN, i64::MAX), i64::MAX);
		assert_eq!(to_native(Percent::MIN, i64::MIN, i64::MAX), i64::MIN);
		assert_eq!(to_percent(i64::MAX, i64::MIN, i64::MAX), Percent::MAX);
		// Out of range values are clamped.
		assert_eq!(to_percent(-10, 0, 10), Percent::MIN);
		assert_eq!(to_percent(20, 0, 10), Percent::MAX);
	}

	proptest! {
		#[test]
		fn round_trip_any_range(p in 0_u8..=100, min in -100_000_i64..100_000, span in 100_i64..1_000_000) {
			let max = min + span;
			let got = to_percent(to_native(Percent::new(p), min, max), min, max);
			prop_assert!(got.inner() <= p);
			prop_assert!(p - got.inner() <= 1, "{p} -> {got}");
		}
	}
}
