/*! `serde`-powered de/serialization.

Each type serializes in its most transparent shape:

- [`BitList`] round-trips as its bare raw integer;
- [`KeyTable`] round-trips as a sequence of names, re-running table validation
  on the way in;
- [`KeyedBitList`] serializes as a name→flag map — the same shape its flag
  mapping produces — and is serialize-**only**, because the serialized form
  does not carry the key table needed to rebuild the binding. Deserialize the
  raw integer and rebind it with [`KeyedBitList::with_raw`] instead.
!*/

#![cfg(feature = "serde")]

use crate::{
	keys::{
		KeyTable,
		KeyedBitList,
	},
	list::BitList,
};

use serde::{
	de,
	ser::{
		SerializeMap,
		SerializeSeq,
	},
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
};

use tap::Pipe;

impl Serialize for BitList {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where S: Serializer {
		serializer.serialize_u64(self.raw())
	}
}

impl<'de> Deserialize<'de> for BitList {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where D: Deserializer<'de> {
		u64::deserialize(deserializer).map(Self::from_raw)
	}
}

impl Serialize for KeyTable {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where S: Serializer {
		let mut seq = serializer.serialize_seq(Some(self.len()))?;
		for key in self {
			seq.serialize_element(key)?;
		}
		seq.end()
	}
}

impl<'de> Deserialize<'de> for KeyTable {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where D: Deserializer<'de> {
		Vec::<String>::deserialize(deserializer)?
			.pipe(Self::new)
			.map_err(de::Error::custom)
	}
}

impl Serialize for KeyedBitList {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where S: Serializer {
		let keys = self.keys();
		let mut map = serializer.serialize_map(Some(keys.len()))?;
		//  Table order, not lexicographic order.
		for (index, key) in keys.iter().enumerate() {
			map.serialize_entry(key, &(self.raw() >> index & 1 != 0))?;
		}
		map.end()
	}
}
