/*! `bitlist` – ordered boolean flags packed into a single integer.

This crate stores a fixed ordered collection of boolean flags inside one
`u64`, the "raw list": bit `i` of the integer, least significant bit first, is
flag `i`. On top of that single value it provides three layers:

- [`BitList`] — the core type. Single-bit reads and writes, bulk construction
  from a raw integer or an ordered bit sequence, bulk extraction back out.
  All mutation funnels through one single-bit write.
- [`KeyTable`] and [`KeyedBitList`] — named-key binding. A table fixes an
  ordered, duplicate-free list of names to bit positions; lists bound to it
  gain key-based accessors (`get`/`set` by name, enabled/disabled key
  listings, name→flag conversion) while keeping the index-based surface.
- [`Binding`] and [`KeyedBinding`] — reactive-state integration. A binding
  sits over an external single-value state cell holding the raw integer,
  materializes a fresh list on every read, and publishes `raw()` on every
  write, so the cell only ever stores a plain integer.

Everything is synchronous and allocation-light; the crate performs no I/O and
holds no locks. With the `serde` feature enabled, lists round-trip as bare
integers, tables as name sequences, and keyed lists serialize as name→flag
maps.

# Examples

```rust
use bitlist::prelude::*;

let table = KeyTable::shared(["read", "write", "exec"])?;
let mut flags =
	KeyedBitList::from_flags(&table, [("read", true), ("exec", true)])?;

assert_eq!(flags.raw(), 0b101);
assert_eq!(flags.enabled_keys(), ["read", "exec"]);

flags.set("write", true)?;
assert_eq!(flags.to_bits(), [true, true, true]);
# Ok::<(), bitlist::Error>(())
```
!*/

#[macro_use]
mod macros;

pub mod error;
pub mod keys;
pub mod list;
pub mod prelude;
pub mod state;

mod serdes;

pub use crate::{
	error::{
		Error,
		Result,
	},
	keys::{
		KeyTable,
		KeyedBitList,
	},
	list::{
		BitList,
		Source,
	},
	state::{
		Binding,
		KeyedBinding,
		RawState,
	},
};
