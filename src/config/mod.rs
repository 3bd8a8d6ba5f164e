//! Stream requests & device/mixer naming.
//!
//! Everything here is plain data handed to [`Capture::open`],
//! [`Playback::open`] or [`VolumeController::new`].
//!
//! [`Capture::open`]: crate::Capture::open
//! [`Playback::open`]: crate::Playback::open
//! [`VolumeController::new`]: crate::VolumeController::new

mod audio_params;
pub use audio_params::AudioParams;

mod buffer_hint;
pub use buffer_hint::BufferHint;

mod device_config;
pub use device_config::DeviceConfig;

mod mixer_config;
pub use mixer_config::MixerConfig;

mod constants;
pub use constants::{
	DEFAULT_DEVICE,
	DEFAULT_CARD,
	MASTER_ELEMENT,
	PCM_ELEMENT,
	PERIOD_DIVISOR,
};
