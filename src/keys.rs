/*! Named-key binding over [`BitList`].

A [`KeyTable`] is an ordered, duplicate-free list of names, fixed at
construction. The position of a name in the table is the bit index it governs:
the first name is flag 0. Tables are shared read-only, through `Arc`, by every
list bound to them; a [`KeyedBitList`] carries only the `Arc` and the raw
integer.

The keyed list is composition, not inheritance: it wraps a plain [`BitList`]
and `Deref`s to it, so index-based access stays available alongside the
key-based accessors.

Key lookup policy is deliberately asymmetric, matching the bulk/single split
of the operations:

- explicit single-key access ([`get`], [`set`], [`KeyTable::index_of`]) fails
  loudly on an unknown name;
- bulk named-flag writes ([`set_flags`]) silently skip names the table does
  not know, and leave table names absent from the input unchanged.

[`get`]: KeyedBitList::get
[`set`]: KeyedBitList::set
[`set_flags`]: KeyedBitList::set_flags
!*/

use crate::{
	error::{
		Error,
		Result,
	},
	list::BitList,
};

use core::{
	fmt::{
		self,
		Debug,
		Formatter,
	},
	iter::FusedIterator,
	ops::{
		Deref,
		DerefMut,
		Index,
	},
	slice,
};

use std::{
	collections::BTreeMap,
	sync::Arc,
};

/** An ordered, duplicate-free table of key names bound to bit indices.

The table is immutable once built. Construction enforces the two properties
every keyed operation relies on: no name occurs twice, and the table is never
longer than [`BitList::CAPACITY`].

# Examples

```rust
use bitlist::KeyTable;

let table = KeyTable::new(["read", "write", "exec"])?;
assert_eq!(table.index_of("write"), Ok(1));
assert!(table.index_of("delete").is_err());
# Ok::<(), bitlist::Error>(())
```
**/
#[derive(Clone, PartialEq, Eq)]
pub struct KeyTable {
	keys: Box<[Box<str>]>,
}

impl KeyTable {
	/// Builds a table from an ordered sequence of names.
	///
	/// Fails with [`Error::DuplicateKey`] on a repeated name, and with
	/// [`Error::TooManyKeys`] when the sequence is longer than
	/// [`BitList::CAPACITY`].
	pub fn new<I, S>(keys: I) -> Result<Self>
	where I: IntoIterator<Item = S>, S: Into<String> {
		let keys: Vec<Box<str>> = keys
			.into_iter()
			.map(|key| key.into().into_boxed_str())
			.collect();
		if keys.len() > BitList::CAPACITY {
			return Err(Error::TooManyKeys { len: keys.len() });
		}
		for (index, key) in keys.iter().enumerate() {
			if keys[.. index].contains(key) {
				return Err(Error::DuplicateKey {
					key: key.to_string(),
				});
			}
		}
		Ok(Self {
			keys: keys.into_boxed_slice(),
		})
	}

	/// Builds a table and wraps it for sharing across list instances.
	pub fn shared<I, S>(keys: I) -> Result<Arc<Self>>
	where I: IntoIterator<Item = S>, S: Into<String> {
		Self::new(keys).map(Arc::new)
	}

	/// Resolves a name to its bit index.
	///
	/// Unknown names fail with [`Error::UnknownKey`], which carries both the
	/// offending name and the full table contents for diagnostics. Lookup is
	/// a linear scan; tables are at most [`BitList::CAPACITY`] entries.
	pub fn index_of(&self, key: &str) -> Result<usize> {
		self.keys
			.iter()
			.position(|name| &**name == key)
			.ok_or_else(|| Error::UnknownKey {
				key: key.to_owned(),
				keys: self.names(),
			})
	}

	/// Whether the table knows a name.
	pub fn contains(&self, key: &str) -> bool {
		self.keys.iter().any(|name| &**name == key)
	}

	/// The number of names in the table.
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	/// Whether the table has no names at all.
	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	/// The name at a bit index, if the table extends that far.
	pub fn get(&self, index: usize) -> Option<&str> {
		self.keys.get(index).map(|name| &**name)
	}

	/// Iterates the names in table order.
	pub fn iter(&self) -> Keys {
		Keys {
			inner: self.keys.iter(),
		}
	}

	/// Copies the names out as owned strings, in table order.
	pub fn names(&self) -> Vec<String> {
		self.keys.iter().map(|name| name.to_string()).collect()
	}
}

impl Debug for KeyTable {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_list().entries(self.iter()).finish()
	}
}

impl Index<usize> for KeyTable {
	type Output = str;

	fn index(&self, index: usize) -> &str {
		&self.keys[index]
	}
}

impl<'a> IntoIterator for &'a KeyTable {
	type Item = &'a str;
	type IntoIter = Keys<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// An iterator over the names of a [`KeyTable`], in table order.
#[derive(Clone, Debug)]
pub struct Keys<'a> {
	inner: slice::Iter<'a, Box<str>>,
}

impl<'a> Iterator for Keys<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<&'a str> {
		self.inner.next().map(|name| &**name)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<'a> DoubleEndedIterator for Keys<'a> {
	fn next_back(&mut self) -> Option<&'a str> {
		self.inner.next_back().map(|name| &**name)
	}
}

impl ExactSizeIterator for Keys<'_> {}

impl FusedIterator for Keys<'_> {}

/// Conversions between a list and the name→flag mapping shape. These live on
/// the base type, taking the table as an explicit argument; the keyed wrapper
/// supplies its bound table automatically.
impl BitList {
	/// Converts the list to a name→flag mapping over a table.
	///
	/// Every table name is present in the output; names whose index lies at
	/// or above the list's logical length map to `false`.
	pub fn to_flags<'a>(&self, table: &'a KeyTable) -> BTreeMap<&'a str, bool> {
		table
			.iter()
			.enumerate()
			.map(|(index, key)| (key, self.raw() >> index & 1 != 0))
			.collect()
	}
}

/** A flag list whose bits are named by a shared [`KeyTable`].

This is the keyed variant: the same raw integer as [`BitList`], plus an `Arc`
to the table that names its flags. It `Deref`s to the inner list, so all of
the index-based operations remain callable on it.

# Examples

```rust
use bitlist::{KeyTable, KeyedBitList};

let table = KeyTable::shared(["a", "b", "c"])?;
let mut list = KeyedBitList::from_flags(&table, [("a", true), ("c", true)])?;

assert_eq!(list.raw(), 0b101);
assert_eq!(list.enabled_keys(), ["a", "c"]);
assert_eq!(list.disabled_keys(), ["b"]);

list.set("b", true)?;
assert_eq!(list.get("b"), Ok(true));
# Ok::<(), bitlist::Error>(())
```
**/
#[derive(Clone, PartialEq, Eq)]
pub struct KeyedBitList {
	table: Arc<KeyTable>,
	list: BitList,
}

impl KeyedBitList {
	/// Constructs an empty keyed list over a table.
	pub fn new(table: &Arc<KeyTable>) -> Self {
		Self::with_raw(table, 0)
	}

	/// Constructs a keyed list over a table, directly from a raw integer.
	pub fn with_raw(table: &Arc<KeyTable>, raw: u64) -> Self {
		Self {
			table: Arc::clone(table),
			list: BitList::from_raw(raw),
		}
	}

	/// Constructs a keyed list from an ordered bit sequence.
	pub fn from_bits(table: &Arc<KeyTable>, bits: &[bool]) -> Result<Self> {
		Ok(Self {
			table: Arc::clone(table),
			list: BitList::from_bits(bits)?,
		})
	}

	/// Constructs a keyed list from named flags.
	///
	/// Names the table does not know are silently skipped; table names absent
	/// from the input start clear.
	pub fn from_flags<'a, I>(table: &Arc<KeyTable>, flags: I) -> Result<Self>
	where I: IntoIterator<Item = (&'a str, bool)> {
		let mut this = Self::new(table);
		this.set_flags(flags)?;
		Ok(this)
	}

	/// Reads the flag a name governs.
	///
	/// Unknown names fail with [`Error::UnknownKey`].
	pub fn get(&self, key: &str) -> Result<bool> {
		self.list.bit(self.table.index_of(key)?)
	}

	/// Writes the flag a name governs.
	///
	/// Unknown names fail with [`Error::UnknownKey`].
	pub fn set(&mut self, key: &str, value: bool) -> Result<()> {
		let index = self.table.index_of(key)?;
		self.list.set_bit(index, value)
	}

	/// Writes a batch of named flags.
	///
	/// Names the table does not know are skipped, not errors; table names
	/// absent from the input keep their current value. This mirrors the
	/// merge semantics of [`BitList::set_bits`].
	pub fn set_flags<'a, I>(&mut self, flags: I) -> Result<()>
	where I: IntoIterator<Item = (&'a str, bool)> {
		for (key, value) in flags {
			if let Ok(index) = self.table.index_of(key) {
				self.list.set_bit(index, value)?;
			}
		}
		Ok(())
	}

	/// Lists the names whose flags are set, in table order.
	pub fn enabled_keys(&self) -> Vec<&str> {
		self.select(true)
	}

	/// Lists the names whose flags are clear, in table order.
	///
	/// Together with [`enabled_keys`] this partitions the table: every name
	/// appears in exactly one of the two lists.
	///
	/// [`enabled_keys`]: Self::enabled_keys
	pub fn disabled_keys(&self) -> Vec<&str> {
		self.select(false)
	}

	/// The bound table.
	pub fn keys(&self) -> &KeyTable {
		&self.table
	}

	/// The bound table, in its shareable form.
	pub fn table(&self) -> &Arc<KeyTable> {
		&self.table
	}

	/// Converts the list to a name→flag mapping over the bound table.
	pub fn to_flags(&self) -> BTreeMap<&str, bool> {
		self.list.to_flags(&self.table)
	}

	/// Unwraps the inner unnamed list, discarding the table binding.
	pub fn into_inner(self) -> BitList {
		self.list
	}

	fn select(&self, value: bool) -> Vec<&str> {
		self.table
			.iter()
			.enumerate()
			.filter(|&(index, _)| (self.list.raw() >> index & 1 != 0) == value)
			.map(|(_, key)| key)
			.collect()
	}
}

impl Deref for KeyedBitList {
	type Target = BitList;

	fn deref(&self) -> &BitList {
		&self.list
	}
}

impl DerefMut for KeyedBitList {
	fn deref_mut(&mut self) -> &mut BitList {
		&mut self.list
	}
}

impl Debug for KeyedBitList {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_struct("KeyedBitList")
			.field("table", &self.table)
			.field("list", &self.list)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use crate::prelude::*;

	fn rwx() -> std::sync::Arc<KeyTable> {
		KeyTable::shared(["read", "write", "exec"]).unwrap()
	}

	#[test]
	fn table_construction() {
		let table = rwx();
		assert_eq!(table.len(), 3);
		assert!(!table.is_empty());
		assert_eq!(table.get(1), Some("write"));
		assert_eq!(table.get(3), None);
		assert_eq!(&table[2], "exec");
		assert!(table.contains("read"));
		assert!(!table.contains("delete"));

		assert_eq!(KeyTable::new(["a", "b", "a"]), Err(Error::DuplicateKey {
			key: "a".to_owned(),
		}));

		let too_many: Vec<String> =
			(0 ..= BitList::CAPACITY).map(|n| n.to_string()).collect();
		assert_eq!(
			KeyTable::new(too_many),
			Err(Error::TooManyKeys { len: 65 }),
		);

		let empty = KeyTable::new::<_, String>([]).unwrap();
		assert!(empty.is_empty());
	}

	#[test]
	fn key_resolution() {
		let table = rwx();
		assert_eq!(table.index_of("read"), Ok(0));
		assert_eq!(table.index_of("exec"), Ok(2));
		assert_eq!(table.index_of("nonexistent"), Err(Error::UnknownKey {
			key: "nonexistent".to_owned(),
			keys: vec![
				"read".to_owned(),
				"write".to_owned(),
				"exec".to_owned(),
			],
		}));
	}

	#[test]
	fn keyed_access() {
		let table = rwx();
		let mut list = KeyedBitList::new(&table);
		assert_eq!(list.get("read"), Ok(false));

		list.set("read", true).unwrap();
		list.set("exec", true).unwrap();
		assert_eq!(list.raw(), 0b101);
		assert_eq!(list.get("read"), Ok(true));
		assert_eq!(list.get("write"), Ok(false));
		assert!(list.set("delete", true).is_err());

		//  Index access still works through the deref.
		assert_eq!(list.bit(2), Ok(true));
		list.set_bit(1, true).unwrap();
		assert_eq!(list.get("write"), Ok(true));
	}

	#[test]
	fn named_flag_bulk() {
		let table = rwx();
		let list =
			KeyedBitList::from_flags(&table, [("read", true), ("exec", true)])
				.unwrap();
		assert_eq!(list.raw(), 0b101);

		//  Unknown names are skipped, known ones applied.
		let mut list = list;
		list.set_flags([("bogus", true), ("read", false)]).unwrap();
		assert_eq!(list.raw(), 0b100);

		//  Names absent from the input are untouched, not cleared.
		list.set_flags([("write", true)]).unwrap();
		assert_eq!(list.raw(), 0b110);
	}

	#[test]
	fn partition() {
		let table = rwx();
		let mut list = KeyedBitList::with_raw(&table, 0b101);
		assert_eq!(list.enabled_keys(), ["read", "exec"]);
		assert_eq!(list.disabled_keys(), ["write"]);

		for raw in 0 .. 8 {
			list.set_raw(raw);
			let mut both = list.enabled_keys();
			both.extend(list.disabled_keys());
			both.sort_unstable();
			assert_eq!(both, ["exec", "read", "write"]);
		}
	}

	#[test]
	fn flag_mapping() {
		let table = rwx();
		let list =
			KeyedBitList::from_flags(&table, [("read", true), ("exec", true)])
				.unwrap();
		let flags = list.to_flags();
		assert_eq!(flags[&"read"], true);
		assert_eq!(flags[&"write"], false);
		assert_eq!(flags[&"exec"], true);
		assert_eq!(flags.len(), 3);

		//  The base form takes the table explicitly.
		assert_eq!(BitList::from_raw(0b101).to_flags(&table), flags);
	}

	#[test]
	fn table_is_shared() {
		let table = rwx();
		let one = KeyedBitList::new(&table);
		let two = KeyedBitList::with_raw(&table, 3);
		assert!(std::sync::Arc::ptr_eq(one.table(), two.table()));
		assert_eq!(one.keys().names(), two.keys().names());
		assert_eq!(two.into_inner(), BitList::from_raw(3));
	}
}
