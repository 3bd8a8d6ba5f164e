//! Turns a stream request into a configured backend stream.
//!
//! The order of operations is fixed, each step narrows the
//! backend's parameter space and a later step only ever sees
//! what the earlier ones left:
//!
//! 1. open the device
//! 2. access -> format -> channels -> rate
//! 3. buffer size (maximum, or nearest to the hint)
//! 4. period size (nearest to the hint, derived from the accepted buffer)
//! 5. read back the period count
//! 6. commit
//!
//! Any rejection aborts, and the stream opened in `1` is released.

//---------------------------------------------------------------------------------------------------- use
use crate::{
	backend::{Backend,Pcm,HwParams,Direction},
	config::{AudioParams,BufferHint,DeviceConfig},
	error::{BackendError,HwParamStep,NegotiateError},
	negotiate::NegotiatedLayout,
	macros::{debug2,error2},
};

//---------------------------------------------------------------------------------------------------- Negotiate
// Wrap a backend status into the error for `step`.
fn rejected(step: HwParamStep) -> impl FnOnce(BackendError) -> NegotiateError {
	move |source| {
		error2!("negotiate - {step} rejected: {source}");
		NegotiateError::HwParams { step, source }
	}
}

/// Open `config.device` in `direction` and negotiate `params`/`hint` on it.
///
/// The returned layout holds the backend's values, not the requested ones.
pub(crate) fn negotiate<B: Backend>(
	backend: &B,
	config: &DeviceConfig,
	params: AudioParams,
	direction: Direction,
	hint: BufferHint,
) -> Result<(B::Pcm, NegotiatedLayout), NegotiateError> {
	debug2!("negotiate - {direction} `{}`: {params:?}, {hint:?}", config.device);

	if params.channels == 0 {
		return Err(NegotiateError::InvalidChannels);
	}
	if params.rate == 0 {
		return Err(NegotiateError::InvalidRate);
	}

	let pcm = backend.open_pcm(&config.device, direction).map_err(|source| {
		error2!("negotiate - could not open {direction} device `{}`: {source}", config.device);
		NegotiateError::Open {
			device: config.device.clone(),
			direction,
			source,
		}
	})?;

	let layout = {
		let mut hw = pcm.hw_params_any().map_err(rejected(HwParamStep::Any))?;

		hw.set_access_interleaved().map_err(rejected(HwParamStep::Access))?;
		hw.set_format(params.format).map_err(rejected(HwParamStep::Format))?;
		hw.set_channels(params.channels).map_err(rejected(HwParamStep::Channels))?;
		hw.set_rate(params.rate).map_err(rejected(HwParamStep::Rate))?;

		let buffer_request = match hint.buffer_frames {
			Some(frames) => frames.get(),
			None => hw.buffer_size_max().map_err(rejected(HwParamStep::BufferSizeMax))?,
		};
		let buffer_frames = hw
			.set_buffer_size_near(buffer_request)
			.map_err(rejected(HwParamStep::BufferSize))?;
		debug2!("negotiate - buffer_frames: {buffer_request} -> {buffer_frames}");

		let period_request = hint.period_request(buffer_frames, params.rate);
		let period_frames = hw
			.set_period_size_near(period_request)
			.map_err(rejected(HwParamStep::PeriodSize))?;
		debug2!("negotiate - period_frames: {period_request} -> {period_frames}");

		// INVARIANT:
		// This is the backend's count, it is not
		// recomputed from the values above.
		let periods = hw.periods().map_err(rejected(HwParamStep::Periods))?;
		debug2!("negotiate - periods: {periods}");

		pcm.commit(&hw).map_err(rejected(HwParamStep::Commit))?;

		NegotiatedLayout {
			buffer_frames,
			period_frames,
			periods,
		}
	};

	debug2!("negotiate - accepted: {layout:?}");
	Ok((pcm, layout))
}
