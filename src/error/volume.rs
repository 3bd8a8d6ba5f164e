//! Master volume errors.

//---------------------------------------------------------------------------------------------------- use
use std::borrow::Cow;
use crate::error::BackendError;

//---------------------------------------------------------------------------------------------------- VolumeError
/// Error that occurs when getting/setting the master volume.
///
/// The mixer handle is always released before this is returned.
#[derive(thiserror::Error, Debug)]
pub enum VolumeError {
	#[error("could not open mixer: {0}")]
	/// Opening a mixer handle failed.
	Open(BackendError),

	#[error("could not attach mixer to card `{card}`: {source}")]
	/// Attaching to the configured card failed.
	Attach {
		/// Card name.
		card: Cow<'static, str>,
		/// Backend status.
		source: BackendError,
	},

	#[error("could not register simple element class: {0}")]
	/// Registering the simple element interface failed.
	Register(BackendError),

	#[error("could not load mixer handle: {0}")]
	/// Loading the mixer elements failed.
	Load(BackendError),

	#[error("could not find simple element `{name},{index}`")]
	/// The configured element does not exist on the card.
	ElementNotFound {
		/// Element name.
		name: Cow<'static, str>,
		/// Element index.
		index: u32,
	},

	#[error("could not get simple element volume range: {0}")]
	/// Reading the native volume range failed.
	Range(BackendError),

	#[error("simple element volume range [{min}, {max}] is empty")]
	/// The element reported a range that cannot be scaled to a percentage.
	EmptyRange {
		/// Native minimum.
		min: i64,
		/// Native maximum.
		max: i64,
	},

	#[error("could not get playback volume: {0}")]
	/// Reading the current volume failed.
	Get(BackendError),

	#[error("could not set playback volume: {0}")]
	/// Writing the new volume failed.
	Set(BackendError),
}
