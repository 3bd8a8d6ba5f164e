//! Errors that can occur.

mod backend;
pub use backend::{BackendError,EPIPE};

mod negotiate;
pub use negotiate::{NegotiateError,HwParamStep};

mod transfer;
pub use transfer::TransferError;

mod close;
pub use close::CloseError;

mod volume;
pub use volume::VolumeError;

mod error;
pub use error::PcmError;
