/*! Failure values.

Every fallible operation in the crate fails immediately and synchronously with
an [`Error`]; nothing is retried, buffered, or degraded internally. Callers
that can guarantee their inputs upstream (indices below [`CAPACITY`], keys
taken from the bound table) may treat the corresponding `Result`s as
infallible.

[`CAPACITY`]: crate::list::BitList::CAPACITY
!*/

use crate::list::BitList;

use thiserror::Error;

/// Shorthand for results produced by this crate.
pub type Result<T> = core::result::Result<T, Error>;

/** Any failure a list or key-table operation can produce.

The first two variants are the interesting ones: an index that the backing
integer cannot address, and a key name that the bound table does not know.
The remaining variants can only occur while constructing a [`KeyTable`].

[`KeyTable`]: crate::keys::KeyTable
**/
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
	/// A bit index addressed a flag beyond what the raw integer can hold.
	#[error("bit index {bit} is out of range for a list of {} flags", BitList::CAPACITY)]
	BitOutOfRange {
		/// The rejected index.
		bit: usize,
	},
	/// A key name was not found in the bound key table.
	#[error("unknown key `{key}`; available keys are {keys:?}")]
	UnknownKey {
		/// The name that failed to resolve.
		key: String,
		/// The full set of names the table does know, in table order.
		keys: Vec<String>,
	},
	/// A key table was given the same name twice.
	#[error("duplicate key `{key}` in key table")]
	DuplicateKey {
		/// The repeated name.
		key: String,
	},
	/// A key table was given more names than a list has flags.
	#[error("key table holds {len} keys, but a list stores at most {} flags", BitList::CAPACITY)]
	TooManyKeys {
		/// The number of names received.
		len: usize,
	},
}
