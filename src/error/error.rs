//---------------------------------------------------------------------------------------------------- use
use crate::error::{NegotiateError,TransferError,CloseError,VolumeError};

//---------------------------------------------------------------------------------------------------- PcmError
#[derive(thiserror::Error, Debug)]
/// All `pcmio` errors.
///
/// Every operation returns its own specific error,
/// this exists for callers that want a single type.
pub enum PcmError {
	#[error("negotiation error: {0}")]
	/// Error occurred while opening a device
	Negotiate(#[from] NegotiateError),

	#[error("transfer error: {0}")]
	/// Error occurred while reading/writing
	Transfer(#[from] TransferError),

	#[error("close error: {0}")]
	/// Error occurred while closing a device
	Close(#[from] CloseError),

	#[error("volume error: {0}")]
	/// Error occurred while getting/setting the volume
	Volume(#[from] VolumeError),
}
