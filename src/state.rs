/*! Reactive-state integration.

External reactive frameworks commonly hold state as a single plain value and
re-run consumers when that value is replaced. The natural way to keep a flag
list in such a cell is to store only the raw integer, and to wrap it in a list
type at each read. The bindings here implement exactly that bridge:

- [`RawState`] is the two-function contract with the external cell — read the
  current raw integer, replace it.
- [`Binding`] and [`KeyedBinding`] sit over a cell and materialize a **fresh**
  list instance on every read; writing publishes `raw()` back through the
  cell's setter.

A binding never retains a list across calls, so consumers always observe the
cell's latest value and never a stale wrapper. Read-modify-write through a
binding is last-writer-wins; the cell provides no locking.
!*/

use crate::{
	error::Result,
	keys::{
		KeyTable,
		KeyedBitList,
	},
	list::BitList,
};

use core::cell::Cell;

use std::sync::{
	atomic::{
		AtomicU64,
		Ordering,
	},
	Arc,
};

use tap::Pipe;

/** An external storage cell holding the raw integer of a flag list.

The trait is deliberately minimal: one getter, one setter, both through a
shared reference, matching the handle pair a reactive state hook hands out.
The setter replaces the whole value; there is no partial update at this layer.
**/
pub trait RawState {
	/// The cell's current raw value.
	fn get(&self) -> u64;

	/// Replaces the cell's value.
	fn set(&self, raw: u64);
}

impl RawState for Cell<u64> {
	fn get(&self) -> u64 {
		Cell::get(self)
	}

	fn set(&self, raw: u64) {
		Cell::set(self, raw);
	}
}

impl RawState for AtomicU64 {
	//  The cell is a single independent value; ordering against other memory
	//  is the caller's concern.
	fn get(&self) -> u64 {
		self.load(Ordering::Relaxed)
	}

	fn set(&self, raw: u64) {
		self.store(raw, Ordering::Relaxed);
	}
}

impl<S: RawState + ?Sized> RawState for &S {
	fn get(&self) -> u64 {
		(**self).get()
	}

	fn set(&self, raw: u64) {
		(**self).set(raw);
	}
}

impl<S: RawState + ?Sized> RawState for Arc<S> {
	fn get(&self) -> u64 {
		(**self).get()
	}

	fn set(&self, raw: u64) {
		(**self).set(raw);
	}
}

/** A binding between a state cell and the unnamed [`BitList`] type.

The binding owns no list state: it holds only the cell handle. [`read`]
materializes a fresh list from the cell's current value on every call, and
[`write`] stores a list's raw integer back.

# Examples

```rust
use core::cell::Cell;
use bitlist::{Binding, BitList};

let cell = Cell::new(0b01u64);
let binding = Binding::new(&cell);

let mut list = binding.read();
list.set_bit(1, true)?;
binding.write(list);

assert_eq!(cell.get(), 0b11);
# Ok::<(), bitlist::Error>(())
```

[`read`]: Self::read
[`write`]: Self::write
**/
#[derive(Clone, Debug)]
pub struct Binding<S> {
	state: S,
}

impl<S: RawState> Binding<S> {
	/// Binds a state cell.
	pub fn new(state: S) -> Self {
		Self { state }
	}

	/// Materializes a fresh list from the cell's current value.
	pub fn read(&self) -> BitList {
		self.state.get().pipe(BitList::from_raw)
	}

	/// Publishes a list's raw integer into the cell.
	pub fn write(&self, list: BitList) {
		self.state.set(list.raw());
	}

	/// Reads, transforms, and writes back in one motion.
	///
	/// The cell is only written when the closure succeeds.
	pub fn update<F>(&self, func: F) -> Result<()>
	where F: FnOnce(&mut BitList) -> Result<()> {
		let mut list = self.read();
		func(&mut list)?;
		self.write(list);
		Ok(())
	}

	/// The bound cell handle.
	pub fn state(&self) -> &S {
		&self.state
	}

	/// Releases the cell handle.
	pub fn into_inner(self) -> S {
		self.state
	}
}

/** A binding between a state cell and a [`KeyedBitList`] type.

Identical to [`Binding`], plus a shared [`KeyTable`] so that each read
materializes the keyed variant. Only the raw integer lives in the cell; the
table travels with the binding.
**/
#[derive(Clone, Debug)]
pub struct KeyedBinding<S> {
	state: S,
	table: Arc<KeyTable>,
}

impl<S: RawState> KeyedBinding<S> {
	/// Binds a state cell and the table naming its flags.
	pub fn new(state: S, table: &Arc<KeyTable>) -> Self {
		Self {
			state,
			table: Arc::clone(table),
		}
	}

	/// Materializes a fresh keyed list from the cell's current value.
	pub fn read(&self) -> KeyedBitList {
		KeyedBitList::with_raw(&self.table, self.state.get())
	}

	/// Publishes a keyed list's raw integer into the cell.
	pub fn write(&self, list: &KeyedBitList) {
		self.state.set(list.raw());
	}

	/// Reads, transforms, and writes back in one motion.
	///
	/// The cell is only written when the closure succeeds.
	pub fn update<F>(&self, func: F) -> Result<()>
	where F: FnOnce(&mut KeyedBitList) -> Result<()> {
		let mut list = self.read();
		func(&mut list)?;
		self.write(&list);
		Ok(())
	}

	/// The table naming the cell's flags.
	pub fn keys(&self) -> &KeyTable {
		&self.table
	}

	/// The bound cell handle.
	pub fn state(&self) -> &S {
		&self.state
	}

	/// Releases the cell handle, dropping the table binding.
	pub fn into_inner(self) -> S {
		self.state
	}
}

#[cfg(test)]
mod tests {
	use crate::prelude::*;

	use core::cell::Cell;

	use std::sync::{
		atomic::AtomicU64,
		Arc,
	};

	#[test]
	fn cell_round_trip() {
		let cell = Cell::new(0u64);
		let binding = Binding::new(&cell);

		assert!(binding.read().is_empty());

		let mut list = binding.read();
		list.set_bit(0, true).unwrap();
		list.set_bit(2, true).unwrap();
		binding.write(list);
		assert_eq!(cell.get(), 0b101);

		//  Each read materializes from the latest cell value.
		cell.set(0b10);
		assert_eq!(binding.read().raw(), 0b10);
	}

	#[test]
	fn update_only_writes_on_success() {
		let cell = Cell::new(0b1u64);
		let binding = Binding::new(&cell);

		binding
			.update(|list| list.set_bit(3, true))
			.unwrap();
		assert_eq!(cell.get(), 0b1001);

		let err = binding.update(|list| list.set_bit(usize::MAX, true));
		assert!(err.is_err());
		assert_eq!(cell.get(), 0b1001);
	}

	#[test]
	fn keyed_binding() {
		let table = KeyTable::shared(["a", "b", "c"]).unwrap();
		let cell = AtomicU64::new(0);
		let binding = KeyedBinding::new(&cell, &table);

		binding
			.update(|list| list.set("a", true))
			.unwrap();
		binding
			.update(|list| list.set("c", true))
			.unwrap();

		let list = binding.read();
		assert_eq!(list.raw(), 0b101);
		assert_eq!(list.enabled_keys(), ["a", "c"]);
		assert_eq!(binding.keys().len(), 3);

		assert!(binding.update(|list| list.set("nope", true)).is_err());
		assert_eq!(binding.read().raw(), 0b101);
	}

	#[test]
	fn shared_cell_handles() {
		let cell: Arc<AtomicU64> = Arc::new(AtomicU64::new(7));
		let one = Binding::new(Arc::clone(&cell));
		let two = Binding::new(Arc::clone(&cell));

		one.write(BitList::from_raw(9));
		assert_eq!(two.read().raw(), 9);
		assert_eq!(two.into_inner().get(), 9);
	}
}
