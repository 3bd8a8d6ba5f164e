//! Audio subsystem backends.
//!
//! The negotiation, transfer and volume logic in `pcmio` never
//! talks to the audio subsystem directly, it drives a [`Backend`].
//!
//! Two exist:
//! - `Alsa` (feature `alsa`): the real thing, through the `alsa` crate
//! - [`Dummy`]: an in-memory device with scriptable failures, used for testing

mod backend;
pub use backend::{Backend,Pcm,HwParams,Mixer,Selem,Direction};

mod dummy;
pub use dummy::{
	Dummy,DummyCaps,DummyStats,
	DummyPcm,DummyHwParams,DummyMixer,DummySelem,
};

#[cfg(feature = "alsa")]
mod alsa;
#[cfg(feature = "alsa")]
pub use self::alsa::{Alsa,AlsaPcm,AlsaHwParams,AlsaMixer,AlsaSelem};

// Use the dummy if:
// - testing
// - it is explicitly enabled
// - no real backend is enabled
cfg_if::cfg_if! {
	if #[cfg(any(test, feature = "dummy"))] {
		/// The backend used when none is specified.
		pub type DefaultBackend = Dummy;
		/// Name of [`DefaultBackend`].
		pub const BACKEND: &str = "dummy";
	} else if #[cfg(feature = "alsa")] {
		/// The backend used when none is specified.
		pub type DefaultBackend = Alsa;
		/// Name of [`DefaultBackend`].
		pub const BACKEND: &str = "alsa";
	} else {
		/// The backend used when none is specified.
		pub type DefaultBackend = Dummy;
		/// Name of [`DefaultBackend`].
		pub const BACKEND: &str = "dummy";
	}
}
