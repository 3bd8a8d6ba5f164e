//! Hardware parameter negotiation errors.

//---------------------------------------------------------------------------------------------------- use
use std::borrow::Cow;
use strum::{
	AsRefStr,
	Display,
	EnumCount,
	EnumIter,
	IntoStaticStr,
};
use crate::{
	backend::Direction,
	error::BackendError,
};

//---------------------------------------------------------------------------------------------------- HwParamStep
/// The negotiation step that was rejected.
///
/// Steps are listed in the order they are performed.
#[derive(Copy,Clone,Debug,Hash,PartialEq,Eq,PartialOrd,Ord)]
#[derive(AsRefStr,Display,EnumCount,EnumIter,IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum HwParamStep {
	/// Allocating & filling the full configuration space.
	Any,
	/// Setting interleaved read/write access.
	Access,
	/// Setting the sample format.
	Format,
	/// Setting the channel count.
	Channels,
	/// Setting the sample rate.
	Rate,
	/// Querying the maximum buffer size.
	BufferSizeMax,
	/// Setting the (nearest) buffer size.
	BufferSize,
	/// Setting the (nearest) period size.
	PeriodSize,
	/// Reading back the period count.
	Periods,
	/// Installing the parameters on the device.
	Commit,
}

//---------------------------------------------------------------------------------------------------- NegotiateError
/// Error that occurs when opening a stream.
///
/// No device is returned and any backend handle
/// that was opened has already been released.
#[derive(thiserror::Error, Debug)]
pub enum NegotiateError {
	#[error("channel count must be non-zero")]
	/// [`AudioParams::channels`](crate::AudioParams::channels) was `0`.
	InvalidChannels,

	#[error("sample rate must be non-zero")]
	/// [`AudioParams::rate`](crate::AudioParams::rate) was `0`.
	InvalidRate,

	#[error("could not open {direction} device `{device}`: {source}")]
	/// The backend refused to open the device.
	Open {
		/// Device name that was requested.
		device: Cow<'static, str>,
		/// Capture or playback.
		direction: Direction,
		/// Backend status.
		source: BackendError,
	},

	#[error("could not set hw params ({step}): {source}")]
	/// A hardware parameter was rejected.
	HwParams {
		/// Which step failed.
		step: HwParamStep,
		/// Backend status.
		source: BackendError,
	},
}

impl NegotiateError {
	#[inline]
	#[must_use]
	/// The failing negotiation step, if this error came from one.
	pub const fn step(&self) -> Option<HwParamStep> {
		match self {
			Self::HwParams { step, .. } => Some(*step),
			_ => None,
		}
	}
}

//---------------------------------------------------------------------------------------------------- TESTS
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn step_display() {
		assert_eq!(HwParamStep::BufferSizeMax.to_string(), "buffer_size_max");
		assert_eq!(HwParamStep::Commit.as_ref(), "commit");
	}

	#[test]
	fn message() {
		let e = NegotiateError::HwParams {
			step: HwParamStep::Rate,
			source: BackendError::new(22, "Invalid argument"),
		};
		assert_eq!(e.to_string(), "could not set hw params (rate): Invalid argument (errno 22)");
		assert_eq!(e.step(), Some(HwParamStep::Rate));
	}
}
