//---------------------------------------------------------------------------------------------------- use
use crate::error::BackendError;

//---------------------------------------------------------------------------------------------------- CloseError
/// Error that occurs when closing a device.
///
/// The device is closed regardless, calling
/// [`Device::close`](crate::Device::close) again is a no-op.
#[derive(thiserror::Error, Debug)]
pub enum CloseError {
	#[error("could not drain the stream: {0}")]
	/// Waiting for pending samples failed, the handle was still released.
	Drain(BackendError),

	#[error("could not close the stream: {0}")]
	/// Releasing the handle failed.
	Close(BackendError),
}
