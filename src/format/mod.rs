//! Sample formats & typed sample buffers.

mod format;
pub use format::SampleFormat;

mod sample;
pub use sample::Sample;
