//! PCM device naming.

//---------------------------------------------------------------------------------------------------- use
use std::borrow::Cow;
use crate::config::DEFAULT_DEVICE;

//---------------------------------------------------------------------------------------------------- DeviceConfig
/// Which PCM device a stream is opened on.
///
/// ```rust
/// # use pcmio::*;
/// assert_eq!(DeviceConfig::DEFAULT.device, "default");
/// assert_eq!(DeviceConfig::new("hw:1,0").device, "hw:1,0");
/// ```
#[derive(Clone,Debug,Hash,PartialEq,Eq,PartialOrd,Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceConfig {
	/// Backend device name, e.g. `default`, `hw:0,0`, `plughw:1`.
	pub device: Cow<'static, str>,
}

impl DeviceConfig {
	/// The `default` device.
	pub const DEFAULT: Self = Self {
		device: Cow::Borrowed(DEFAULT_DEVICE),
	};

	#[must_use]
	/// Create a [`DeviceConfig`] for a named device.
	pub fn new(device: impl Into<Cow<'static, str>>) -> Self {
		Self { device: device.into() }
	}
}

impl Default for DeviceConfig {
	#[inline]
	fn default() -> Self {
		Self::DEFAULT
	}
}
