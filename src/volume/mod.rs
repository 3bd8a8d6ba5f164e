//! Master volume.

mod percent;
pub use percent::Percent;

mod controller;
pub use controller::VolumeController;
