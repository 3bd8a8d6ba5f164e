//! Blocking PCM streams & master volume over ALSA.
//!
//! This is the API reference for `pcmio`, meant to solely
//! document inputs/outputs and other note-worthy things.
//!
//! ## Overview
//! 1. Describe what you want with [`AudioParams`] and (optionally) a [`BufferHint`]
//! 2. Open a [`Capture`] or [`Playback`] device, which negotiates the
//!    hardware parameters and records the [`NegotiatedLayout`] the device accepted
//! 3. Call [`Capture::read`] / [`Playback::write`] in a loop
//! 4. [`Device::close`] (or just drop the device)
//!
//! Master volume is handled separately by [`VolumeController`],
//! which does not need a live stream.
//!
//! ```rust
//! # use pcmio::*;
//! # use pcmio::backend::Dummy;
//! let backend = Dummy::new();
//! let params  = AudioParams::new(2, 48_000, SampleFormat::S16LE);
//!
//! let mut playback = Playback::open(&backend, &DeviceConfig::DEFAULT, params, BufferHint::DEFAULT).unwrap();
//! assert!(playback.layout().buffer_frames >= playback.layout().period_frames);
//!
//! // 64 frames of stereo silence.
//! let samples = [0_i16; 128];
//! assert_eq!(playback.write(&samples).unwrap(), 128);
//!
//! playback.close().unwrap();
//! ```

//---------------------------------------------------------------------------------------------------- Lints
#![allow(
    clippy::len_zero,
    clippy::type_complexity,
    clippy::module_inception,
)]

#![deny(
    nonstandard_style,
    deprecated,
    missing_docs,
)]

#![forbid(
    unused_mut,
    unused_unsafe,
    future_incompatible,
    break_with_label_and_loop,
    coherence_leak_check,
    duplicate_macro_attributes,
    exported_private_dependencies,
    for_loops_over_fallibles,
    large_assignments,
    overlapping_range_endpoints,
    semicolon_in_expressions_from_macros,
    redundant_semicolons,
    unconditional_recursion,
    unreachable_patterns,
    unused_allocation,
    unused_braces,
    unused_comparisons,
    unused_doc_comments,
    unused_parens,
    unused_labels,
    while_true,
    keyword_idents,
    non_ascii_idents,
    noop_method_call,
	unreachable_pub,
)]

//---------------------------------------------------------------------------------------------------- Public API
mod format;
pub use format::{Sample,SampleFormat};

pub mod config;
pub use config::{AudioParams,BufferHint,DeviceConfig,MixerConfig};

pub mod backend;
pub use backend::{Backend,DefaultBackend,Direction,BACKEND};

mod negotiate;
pub use negotiate::NegotiatedLayout;

mod device;
pub use device::{Device,Capture,Playback};

mod volume;
pub use volume::{Percent,VolumeController};

pub mod error;
pub use error::PcmError;

//---------------------------------------------------------------------------------------------------- Private Usage
mod macros;
