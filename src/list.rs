/*! The integer-backed flag list.

A [`BitList`] stores an ordered collection of boolean flags inside a single
`u64`. Bit `i` of the integer, counted from the least significant end, is flag
`i` of the list. Setting a flag ORs its mask into the integer; clearing a flag
ANDs the inverted mask; everything else in the crate funnels through these two
moves and the matching single-bit read.

The backing integer gives the list a hard width: [`BitList::CAPACITY`] flags.
Unlike dynamic bit vectors, a `BitList` has no stored length. Its *logical*
length is derived from its value: the position of the highest set flag plus
one. Flags above that position read as `false`, and trailing `false`s are
invisible to [`to_bits`].

[`to_bits`]: BitList::to_bits
!*/

use crate::error::{
	Error,
	Result,
};

use core::{
	fmt::{
		self,
		Binary,
		Debug,
		Formatter,
	},
	iter::FusedIterator,
};

/** An ordered list of boolean flags packed into one `u64`.

The raw integer is the only state. Two lists compare equal exactly when their
raw integers are equal, so a list constructed from `[true, false, true]` is the
same value as one constructed from `0b101`.

# Examples

```rust
use bitlist::BitList;

let mut list = BitList::from_raw(0b101);
assert_eq!(list.bit(0), Ok(true));
assert_eq!(list.bit(1), Ok(false));

list.set_bit(1, true)?;
assert_eq!(list.raw(), 0b111);
# Ok::<(), bitlist::Error>(())
```
**/
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitList {
	/// The raw list. Bit `i` is flag `i`.
	raw: u64,
}

/** A tagged description of one initial value for a [`BitList`].

Each constructor input shape the list accepts has a variant here, so that code
receiving "some initial value" from elsewhere can carry it as one typed value
instead of dispatching on runtime shape. [`BitList::from_source`] consumes it.

The keyed variant adds a fourth shape, named flags, which requires a key table
and therefore lives on [`KeyedBitList::from_flags`] rather than here.

[`KeyedBitList::from_flags`]: crate::keys::KeyedBitList::from_flags
**/
#[derive(Clone, Copy, Debug)]
pub enum Source<'a> {
	/// No initial value. All flags start clear.
	Empty,
	/// A raw integer whose binary representation is the whole list.
	Raw(u64),
	/// An ordered bit sequence, flag 0 first.
	Bits(&'a [bool]),
}

impl BitList {
	/// The number of flags a list can hold.
	pub const CAPACITY: usize = u64::BITS as usize;

	/// Constructs an empty list. All flags are clear.
	pub const fn new() -> Self {
		Self { raw: 0 }
	}

	/// Constructs a list directly from its raw integer.
	///
	/// No validation occurs, and none is needed: every `u64` is a valid list.
	pub const fn from_raw(raw: u64) -> Self {
		Self { raw }
	}

	/// Constructs a list from an ordered bit sequence, flag 0 first.
	///
	/// Fails with [`Error::BitOutOfRange`] when the sequence is longer than
	/// [`CAPACITY`].
	///
	/// # Examples
	///
	/// ```rust
	/// use bitlist::BitList;
	///
	/// let list = BitList::from_bits(&[true, false, true])?;
	/// assert_eq!(list.raw(), 0b101);
	/// # Ok::<(), bitlist::Error>(())
	/// ```
	///
	/// [`CAPACITY`]: Self::CAPACITY
	pub fn from_bits(bits: &[bool]) -> Result<Self> {
		let mut this = Self::new();
		this.set_bits(bits)?;
		Ok(this)
	}

	/// Constructs a list from any [`Source`] variant.
	pub fn from_source(source: Source<'_>) -> Result<Self> {
		match source {
			Source::Empty => Ok(Self::new()),
			Source::Raw(raw) => Ok(Self::from_raw(raw)),
			Source::Bits(bits) => Self::from_bits(bits),
		}
	}

	/// Reads one flag.
	///
	/// Flags above the highest set flag read as `false`; only indices at or
	/// above [`CAPACITY`] are errors.
	///
	/// [`CAPACITY`]: Self::CAPACITY
	pub fn bit(&self, bit: usize) -> Result<bool> {
		Self::mask(bit).map(|mask| self.raw & mask != 0)
	}

	/// Writes one flag. This is the single point of mutation for everything
	/// except [`set_raw`].
	///
	/// Writing a flag to the value it already holds is a no-op.
	///
	/// [`set_raw`]: Self::set_raw
	pub fn set_bit(&mut self, bit: usize, value: bool) -> Result<()> {
		let mask = Self::mask(bit)?;
		if value {
			self.raw |= mask;
		}
		else {
			self.raw &= !mask;
		}
		Ok(())
	}

	/// Replaces the entire list with a new raw integer, unconditionally.
	pub fn set_raw(&mut self, raw: u64) {
		self.raw = raw;
	}

	/// Writes a bit sequence into the list, flag 0 first.
	///
	/// This is a *merge*, not a replacement: flags at and above `bits.len()`
	/// keep whatever value they already held. Reusing one list with a shorter
	/// sequence than a previous write therefore leaves stale high flags set;
	/// use [`from_bits`] or [`set_raw`] when replacement is wanted.
	///
	/// [`from_bits`]: Self::from_bits
	/// [`set_raw`]: Self::set_raw
	pub fn set_bits(&mut self, bits: &[bool]) -> Result<()> {
		for (index, &bit) in bits.iter().enumerate() {
			self.set_bit(index, bit)?;
		}
		Ok(())
	}

	/// The raw integer encoding the whole list. Pure; never mutates.
	pub const fn raw(&self) -> u64 {
		self.raw
	}

	/// The logical length of the list: the highest set flag plus one, or zero
	/// when no flag is set.
	pub const fn len(&self) -> usize {
		(u64::BITS - self.raw.leading_zeros()) as usize
	}

	/// Whether no flag is set.
	pub const fn is_empty(&self) -> bool {
		self.raw == 0
	}

	/// Counts the set flags.
	pub const fn count_ones(&self) -> usize {
		self.raw.count_ones() as usize
	}

	/// Iterates the flags from index 0 through the highest set flag.
	///
	/// The iterator is empty for an empty list; see [`to_bits`] for the
	/// collection form, which renders the empty list as `[false]`.
	///
	/// [`to_bits`]: Self::to_bits
	pub fn iter_bits(&self) -> IterBits {
		IterBits {
			raw: self.raw,
			next: 0,
			back: self.len(),
		}
	}

	/// Converts the list to an ordered bit sequence, flag 0 first, ending at
	/// the highest set flag.
	///
	/// This is **not** a fixed-width encoding: trailing clear flags are
	/// stripped, and the empty list renders as `[false]` rather than `[]`.
	/// Callers that need a fixed width must pad or truncate against a known
	/// flag count themselves.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitlist::BitList;
	///
	/// assert_eq!(BitList::from_raw(7).to_bits(), [true, true, true]);
	/// assert_eq!(BitList::new().to_bits(), [false]);
	/// ```
	pub fn to_bits(&self) -> Vec<bool> {
		if self.is_empty() {
			return vec![false];
		}
		self.iter_bits().collect()
	}

	/// Produces the selection mask for one flag, or the error for an index
	/// the backing integer cannot address.
	fn mask(bit: usize) -> Result<u64> {
		if bit < Self::CAPACITY {
			Ok(1 << bit)
		}
		else {
			Err(Error::BitOutOfRange { bit })
		}
	}
}

impl From<u64> for BitList {
	fn from(raw: u64) -> Self {
		Self::from_raw(raw)
	}
}

impl From<BitList> for u64 {
	fn from(list: BitList) -> Self {
		list.raw()
	}
}

impl TryFrom<&[bool]> for BitList {
	type Error = Error;

	fn try_from(bits: &[bool]) -> Result<Self> {
		Self::from_bits(bits)
	}
}

impl Binary for BitList {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		Binary::fmt(&self.raw, fmt)
	}
}

impl Debug for BitList {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		write!(fmt, "BitList({:#b})", self.raw)
	}
}

/** An iterator over the flags of a [`BitList`], from flag 0 through the
highest set flag.

Produced by [`BitList::iter_bits`].
**/
#[derive(Clone, Debug)]
pub struct IterBits {
	raw: u64,
	next: usize,
	back: usize,
}

impl Iterator for IterBits {
	type Item = bool;

	fn next(&mut self) -> Option<bool> {
		if self.next == self.back {
			return None;
		}
		let bit = self.raw >> self.next & 1 != 0;
		self.next += 1;
		Some(bit)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let rem = self.back - self.next;
		(rem, Some(rem))
	}
}

impl DoubleEndedIterator for IterBits {
	fn next_back(&mut self) -> Option<bool> {
		if self.next == self.back {
			return None;
		}
		self.back -= 1;
		Some(self.raw >> self.back & 1 != 0)
	}
}

impl ExactSizeIterator for IterBits {}

impl FusedIterator for IterBits {}
