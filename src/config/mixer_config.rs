//! Mixer element naming.

//---------------------------------------------------------------------------------------------------- use
use std::borrow::Cow;
use crate::config::{DEFAULT_CARD,MASTER_ELEMENT,PCM_ELEMENT};

//---------------------------------------------------------------------------------------------------- MixerConfig
/// Which mixer control [`VolumeController`](crate::VolumeController) drives.
///
/// A simple element is addressed by `(element, index)` on `card`.
///
/// ```rust
/// # use pcmio::*;
/// assert_eq!(MixerConfig::DEFAULT.card, "default");
/// assert_eq!(MixerConfig::DEFAULT.element, "Master");
/// assert_eq!(MixerConfig::PCM.element, "PCM");
///
/// let cfg = MixerConfig::new("hw:1", "Speaker");
/// assert_eq!(cfg.index, 0);
/// ```
#[derive(Clone,Debug,Hash,PartialEq,Eq,PartialOrd,Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MixerConfig {
	/// Sound card to attach to.
	pub card: Cow<'static, str>,
	/// Simple element name.
	pub element: Cow<'static, str>,
	/// Simple element index.
	pub index: u32,
}

impl MixerConfig {
	/// `Master` on the `default` card.
	pub const DEFAULT: Self = Self {
		card:    Cow::Borrowed(DEFAULT_CARD),
		element: Cow::Borrowed(MASTER_ELEMENT),
		index:   0,
	};

	/// `PCM` on the `default` card.
	pub const PCM: Self = Self {
		card:    Cow::Borrowed(DEFAULT_CARD),
		element: Cow::Borrowed(PCM_ELEMENT),
		index:   0,
	};

	#[must_use]
	/// Index `0` of `element` on `card`.
	pub fn new(
		card: impl Into<Cow<'static, str>>,
		element: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			card: card.into(),
			element: element.into(),
			index: 0,
		}
	}
}

impl Default for MixerConfig {
	#[inline]
	fn default() -> Self {
		Self::DEFAULT
	}
}

//---------------------------------------------------------------------------------------------------- TESTS
#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	#[cfg(feature = "serde")]
	fn serde() {
		let json = serde_json::to_string(&MixerConfig::PCM).unwrap();
		assert_eq!(json, r#"{"card":"default","element":"PCM","index":0}"#);
		let cfg: MixerConfig = serde_json::from_str(&json).unwrap();
		assert_eq!(cfg, MixerConfig::PCM);
	}
}
