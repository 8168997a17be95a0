//! End-to-end exercises of the keyed list surface, from table construction
//! through key-based mutation and back out to every conversion shape.

use bitlist::prelude::*;

use std::sync::Arc;

#[test]
fn whole_flow() {
	let table = KeyTable::shared(["my_key", "other_key"]).unwrap();

	let mut list =
		KeyedBitList::from_flags(&table, [("my_key", true)]).unwrap();
	assert_eq!(list.raw(), 1);
	assert_eq!(list.get("my_key"), Ok(true));
	assert_eq!(list.get("other_key"), Ok(false));

	list.set("other_key", true).unwrap();
	assert_eq!(list.get("other_key"), Ok(true));
	assert_eq!(list.enabled_keys(), ["my_key", "other_key"]);
	assert_eq!(list.disabled_keys(), Vec::<&str>::new());
	assert_eq!(list.raw(), 0b11);
}

#[test]
fn every_construction_shape() {
	let table = KeyTable::shared(["a", "b", "c"]).unwrap();

	let empty = KeyedBitList::new(&table);
	let from_raw = KeyedBitList::with_raw(&table, 0b101);
	let from_bits =
		KeyedBitList::from_bits(&table, &[true, false, true]).unwrap();
	let from_flags =
		KeyedBitList::from_flags(&table, [("a", true), ("c", true)]).unwrap();

	assert_eq!(empty.raw(), 0);
	assert_eq!(from_raw, from_bits);
	assert_eq!(from_bits, from_flags);

	//  The unnamed type accepts the same shapes through `Source`.
	assert_eq!(
		BitList::from_source(Source::Raw(0b101)),
		BitList::from_source(Source::Bits(&[true, false, true])),
	);
	assert_eq!(BitList::from_source(Source::Empty), Ok(BitList::new()));
}

#[test]
fn mapping_shape() {
	let table = KeyTable::shared(["a", "b", "c"]).unwrap();
	let list =
		KeyedBitList::from_flags(&table, [("a", true), ("c", true)]).unwrap();

	let flags = list.to_flags();
	assert_eq!(
		flags.into_iter().collect::<Vec<_>>(),
		vec![("a", true), ("b", false), ("c", true)],
	);
}

#[test]
fn unknown_key_diagnostics() {
	let table = KeyTable::shared(["a", "b", "c"]).unwrap();
	let list = KeyedBitList::new(&table);

	let err = list.get("nonexistent").unwrap_err();
	match &err {
		Error::UnknownKey { key, keys } => {
			assert_eq!(key, "nonexistent");
			assert_eq!(keys, &["a", "b", "c"]);
		},
		other => panic!("wrong error: {other:?}"),
	}
	let text = err.to_string();
	assert!(text.contains("nonexistent"));
	assert!(text.contains('b'));
}

#[test]
fn stale_high_flags_merge() {
	//  Bulk bit writes merge rather than replace, so reusing one list with a
	//  shorter sequence leaves the high flags from the earlier write.
	let table = KeyTable::shared(["a", "b", "c", "d"]).unwrap();
	let mut list =
		KeyedBitList::from_bits(&table, &[true, true, true, true]).unwrap();

	list.set_bits(&[false, false]).unwrap();
	assert_eq!(list.raw(), 0b1100);
	assert_eq!(list.enabled_keys(), ["c", "d"]);
}

#[test]
fn tables_survive_their_factory() {
	let list = {
		let table = KeyTable::shared(["x", "y"]).unwrap();
		KeyedBitList::from_flags(&table, [("y", true)]).unwrap()
	};
	assert_eq!(list.enabled_keys(), ["y"]);
	assert_eq!(Arc::strong_count(list.table()), 1);
}
