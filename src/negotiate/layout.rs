//---------------------------------------------------------------------------------------------------- use
use std::time::Duration;

//---------------------------------------------------------------------------------------------------- NegotiatedLayout
/// The buffer layout a device actually accepted.
///
/// These are the backend's final values, which may differ from
/// what was asked for in the [`BufferHint`](crate::BufferHint).
#[derive(Copy,Clone,Debug,Default,Hash,PartialEq,Eq,PartialOrd,Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
pub struct NegotiatedLayout {
	/// Ring buffer length in frames.
	pub buffer_frames: usize,
	/// Period length in frames.
	pub period_frames: usize,
	/// Period count, as reported by the backend.
	pub periods: u32,
}

impl NegotiatedLayout {
	#[must_use]
	/// How long a full buffer takes to play at `rate`.
	///
	/// ```rust
	/// # use pcmio::*;
	/// # use std::time::Duration;
	/// let layout = NegotiatedLayout { buffer_frames: 24_000, period_frames: 6_000, periods: 4 };
	/// assert_eq!(layout.buffer_duration(48_000), Duration::from_millis(500));
	/// assert_eq!(layout.buffer_duration(0), Duration::ZERO);
	/// ```
	pub fn buffer_duration(&self, rate: u32) -> Duration {
		frames_to_duration(self.buffer_frames, rate)
	}

	#[must_use]
	/// How long a single period takes to play at `rate`.
	pub fn period_duration(&self, rate: u32) -> Duration {
		frames_to_duration(self.period_frames, rate)
	}
}

fn frames_to_duration(frames: usize, rate: u32) -> Duration {
	if rate == 0 {
		return Duration::ZERO;
	}
	Duration::from_secs_f64(frames as f64 / f64::from(rate))
}
