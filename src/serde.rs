use std::{fmt, marker::PhantomData};

use serde::{de::Error, ser::SerializeTuple, Deserialize, Serialize};

use crate::{
	range::{NEG_INFINITY, POS_INFINITY},
	Endpoint, Range, RangeError,
};

/// Finite endpoints are serialized as their value, infinite ones as the
/// strings `"-Infinity"` and `"Infinity"`.
impl<N: Serialize> Serialize for Endpoint<N> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		match self {
			Endpoint::NegInfinity => serializer.serialize_str(NEG_INFINITY),
			Endpoint::Finite(n) => n.serialize(serializer),
			Endpoint::PosInfinity => serializer.serialize_str(POS_INFINITY),
		}
	}
}

impl<'de, N: Deserialize<'de>> Deserialize<'de> for Endpoint<N> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Repr<N> {
			Finite(N),
			Named(String),
		}

		match Repr::deserialize(deserializer)? {
			Repr::Finite(n) => Ok(Endpoint::Finite(n)),
			Repr::Named(name) if name == NEG_INFINITY => Ok(Endpoint::NegInfinity),
			Repr::Named(name) if name == POS_INFINITY => Ok(Endpoint::PosInfinity),
			Repr::Named(value) => Err(D::Error::custom(RangeError::InvalidEndpoint { value })),
		}
	}
}

impl<N: Serialize> Serialize for Range<N> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		let mut t = serializer.serialize_tuple(2)?;
		t.serialize_element(self.from())?;
		t.serialize_element(self.to())?;
		t.end()
	}
}

impl<'de, N: Ord + fmt::Display + Deserialize<'de>> Deserialize<'de> for Range<N> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		struct Visitor<N>(PhantomData<N>);

		impl<'de, N: Ord + fmt::Display + Deserialize<'de>> serde::de::Visitor<'de> for Visitor<N> {
			type Value = Range<N>;

			fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
				write!(formatter, "a range")
			}

			fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
			where
				A: serde::de::SeqAccess<'de>,
			{
				let from = seq
					.next_element()?
					.ok_or_else(|| A::Error::custom("missing from bound"))?;
				let to = seq
					.next_element()?
					.ok_or_else(|| A::Error::custom("missing to bound"))?;
				Range::from_endpoints(from, to).map_err(A::Error::custom)
			}
		}

		deserializer.deserialize_tuple(2, Visitor(PhantomData))
	}
}
