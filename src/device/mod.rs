//! Open streams.
//!
//! [`Device`] holds everything shared between directions (the
//! backend handle, lifecycle, accessors), [`Capture`] and
//! [`Playback`] add the transfer operations on top.

mod device;
pub use device::Device;

mod capture;
pub use capture::Capture;

mod playback;
pub use playback::Playback;
