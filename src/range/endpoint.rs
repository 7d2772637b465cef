use crate::RangeError;
use range_traits::{Bounded, PartialEnum};
use std::fmt;

pub(crate) const NEG_INFINITY: &str = "-Infinity";
pub(crate) const POS_INFINITY: &str = "Infinity";

/// A point of the extended key line.
///
/// The variants are declared in ascending order, so the derived ordering
/// places `NegInfinity` before every finite value and `PosInfinity` after.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Endpoint<N> {
	NegInfinity,
	Finite(N),
	PosInfinity,
}

impl<N> Endpoint<N> {
	pub fn is_finite(&self) -> bool {
		matches!(self, Endpoint::Finite(_))
	}

	pub fn as_finite(&self) -> Option<&N> {
		match self {
			Endpoint::Finite(n) => Some(n),
			_ => None,
		}
	}

	pub fn as_ref(&self) -> Endpoint<&N> {
		match self {
			Endpoint::NegInfinity => Endpoint::NegInfinity,
			Endpoint::Finite(n) => Endpoint::Finite(n),
			Endpoint::PosInfinity => Endpoint::PosInfinity,
		}
	}

	/// Successor, where both infinities absorb the increment.
	pub(crate) fn saturating_succ(&self) -> Self
	where
		N: PartialEnum + Bounded,
	{
		match self {
			Endpoint::PosInfinity => Endpoint::PosInfinity,
			other => other.succ().unwrap_or(Endpoint::PosInfinity),
		}
	}

	/// Predecessor, where both infinities absorb the decrement.
	pub(crate) fn saturating_pred(&self) -> Self
	where
		N: PartialEnum + Bounded,
	{
		match self {
			Endpoint::NegInfinity => Endpoint::NegInfinity,
			other => other.pred().unwrap_or(Endpoint::NegInfinity),
		}
	}
}

impl<N: Clone> Endpoint<&N> {
	pub fn cloned(self) -> Endpoint<N> {
		match self {
			Endpoint::NegInfinity => Endpoint::NegInfinity,
			Endpoint::Finite(n) => Endpoint::Finite(n.clone()),
			Endpoint::PosInfinity => Endpoint::PosInfinity,
		}
	}
}

/// The infinities sit right outside the finite domain: `-inf` is followed by
/// `N::MIN` and `N::MAX` is followed by `+inf`.
impl<N: PartialEnum> Bounded for Endpoint<N> {
	const MIN: Self = Endpoint::NegInfinity;
	const MAX: Self = Endpoint::PosInfinity;
}

impl<N: PartialEnum + Bounded> PartialEnum for Endpoint<N> {

	fn pred(&self) -> Option<Self> {
		match self {
			Endpoint::NegInfinity => None,
			Endpoint::Finite(n) => Some(n.pred().map(Endpoint::Finite).unwrap_or(Endpoint::NegInfinity)),
			Endpoint::PosInfinity => Some(Endpoint::Finite(N::MAX)),
		}
	}

	fn succ(&self) -> Option<Self> {
		match self {
			Endpoint::NegInfinity => Some(Endpoint::Finite(N::MIN)),
			Endpoint::Finite(n) => Some(n.succ().map(Endpoint::Finite).unwrap_or(Endpoint::PosInfinity)),
			Endpoint::PosInfinity => None,
		}
	}
}

impl<N> From<N> for Endpoint<N> {
	fn from(n: N) -> Self {
		Endpoint::Finite(n)
	}
}

impl TryFrom<f64> for Endpoint<i64> {
	type Error = RangeError;

	fn try_from(value: f64) -> Result<Self, RangeError> {
		if value == f64::INFINITY {
			Ok(Endpoint::PosInfinity)
		} else if value == f64::NEG_INFINITY {
			Ok(Endpoint::NegInfinity)
		} else if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
			Ok(Endpoint::Finite(value as i64))
		} else {
			Err(RangeError::InvalidEndpoint {
				value: value.to_string(),
			})
		}
	}
}

impl<N: fmt::Display> fmt::Display for Endpoint<N> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Endpoint::NegInfinity => f.write_str(NEG_INFINITY),
			Endpoint::Finite(n) => fmt::Display::fmt(n, f),
			Endpoint::PosInfinity => f.write_str(POS_INFINITY),
		}
	}
}
