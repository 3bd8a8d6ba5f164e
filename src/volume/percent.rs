//! Logical volume level.

//---------------------------------------------------------------------------------------------------- use
use std::ops::{Add,Sub};

//---------------------------------------------------------------------------------------------------- Percent
/// Logical volume level, `0..=100`
///
/// `0` maps to the mixer element's native minimum and `100`
/// to its native maximum, the values in-between are scaled
/// linearly onto that range.
///
/// This is the type [`VolumeController`](crate::VolumeController) takes and returns.
#[derive(Copy,Clone,Debug,Default,Hash,PartialEq,Eq,PartialOrd,Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub struct Percent(u8);

macro_rules! impl_const {
	($num:tt) => {
		paste::paste! {
			#[doc = "Returns [`Percent`] with a value of `" $num "`"]
			pub const [<NEW_ $num>]: Self = Self($num);
		}
	}
}

impl Percent {
	/// ```rust
	/// # use pcmio::*;
	/// assert_eq!(Percent::MAX.inner(), 100);
	/// ```
	pub const MAX: Self = Self(100);
	/// ```rust
	/// # use pcmio::*;
	/// assert_eq!(Percent::MIN.inner(), 0);
	/// ```
	pub const MIN: Self = Self(0);

	#[inline]
	#[must_use]
	/// Create a new [`Percent`], saturating at [`Percent::MAX`].
	///
	/// ```rust
	/// # use pcmio::*;
	/// assert_eq!(Percent::new(0),   Percent::MIN);
	/// assert_eq!(Percent::new(50),  Percent::NEW_50);
	/// assert_eq!(Percent::new(100), Percent::MAX);
	/// assert_eq!(Percent::new(101), Percent::MAX);
	/// assert_eq!(Percent::new(255), Percent::MAX);
	/// ```
	pub const fn new(percent: u8) -> Self {
		if percent > 100 {
			Self::MAX
		} else {
			Self(percent)
		}
	}

	#[inline]
	#[must_use]
	/// Returns the inner [`u8`]
	pub const fn inner(&self) -> u8 {
		self.0
	}

	seq_macro::seq!(N in 0..=100 {
		impl_const!(N);
	});
}

impl std::fmt::Display for Percent {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}%", self.0)
	}
}

impl Add for Percent {
	type Output = Self;
	#[inline]
	fn add(self, other: Self) -> Self {
		Self::new(self.0.saturating_add(other.0))
	}
}

impl Sub for Percent {
	type Output = Self;
	#[inline]
	fn sub(self, other: Self) -> Self {
		Self(self.0.saturating_sub(other.0))
	}
}

impl From<u8> for Percent {
	#[inline]
	fn from(percent: u8) -> Self {
		Self::new(percent)
	}
}

impl From<Percent> for u8 {
	#[inline]
	fn from(percent: Percent) -> Self {
		percent.0
	}
}

//---------------------------------------------------------------------------------------------------- TESTS
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn consts() {
		assert_eq!(Percent::NEW_0, Percent::MIN);
		assert_eq!(Percent::NEW_25.inner(), 25);
		assert_eq!(Percent::NEW_100, Percent::MAX);
		assert_eq!(Percent::default(), Percent::MIN);
	}

	#[test]
	fn saturating_math() {
		assert_eq!(Percent::NEW_60 + Percent::NEW_60, Percent::MAX);
		assert_eq!(Percent::NEW_10 - Percent::NEW_60, Percent::MIN);
		assert_eq!(Percent::NEW_60 - Percent::NEW_10, Percent::NEW_50);
		assert_eq!(Percent::MAX + Percent::MAX, Percent::MAX);
	}

	#[test]
	fn display() {
		assert_eq!(Percent::NEW_42.to_string(), "42%");
	}

	#[test]
	#[cfg(feature = "serde")]
	fn serde() {
		assert_eq!(serde_json::to_string(&Percent::NEW_75).unwrap(), "75");
		assert_eq!(serde_json::from_str::<Percent>("75").unwrap(), Percent::NEW_75);
		// Saturates like `new()`.
		assert_eq!(serde_json::from_str::<Percent>("200").unwrap(), Percent::MAX);
	}
}
