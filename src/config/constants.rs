//! Default names & negotiation constants.

//---------------------------------------------------------------------------------------------------- Constants
/// PCM device opened when no other is configured.
pub const DEFAULT_DEVICE: &str = "default";

/// Sound card the mixer attaches to when no other is configured.
pub const DEFAULT_CARD: &str = "default";

/// The usual aggregate volume control.
pub const MASTER_ELEMENT: &str = "Master";

/// Fallback volume control on cards without a `Master` element.
pub const PCM_ELEMENT: &str = "PCM";

/// Without a period hint, the period is `rate / PERIOD_DIVISOR` frames (125ms).
pub const PERIOD_DIVISOR: u32 = 8;

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_period_is_125ms() {
		let rate = 48_000_u32;
		let period = rate / PERIOD_DIVISOR;
		assert_eq!(period * 1000 / rate, 125);
	}
}
