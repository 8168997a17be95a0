/*! Constructor macros for the crate's list type. !*/

/** Constructs a [`BitList`] from a bit-pattern description.

This macro takes a subset of the [`vec!`] argument syntax: either a sequence
of bit expressions, flag 0 first, or a single bit expression and a repetition
counter. Bit expressions must be integers; any non-zero value sets the flag,
and `0` clears it.

The expansion is plain `const`-evaluable arithmetic, so the macro can
initialize `const` and `static` items. Patterns longer than
[`BitList::CAPACITY`] fail to evaluate.

# Examples

```rust
use bitlist::{bitlist, BitList};

const MASK: BitList = bitlist![1, 0, 1];
assert_eq!(MASK.raw(), 0b101);

assert_eq!(bitlist![], BitList::new());
assert_eq!(bitlist![1; 4].raw(), 0b1111);
assert_eq!(bitlist![0; 4], BitList::new());
```

[`BitList`]: crate::BitList
[`BitList::CAPACITY`]: crate::BitList::CAPACITY
**/
#[macro_export]
macro_rules! bitlist {
	() => {
		$crate::BitList::new()
	};

	($($bit:expr),+ $(,)?) => {{
		let mut raw = 0u64;
		let mut index = 0u32;
		$(
			if $bit != 0 {
				raw |= 1u64 << index;
			}
			index += 1;
		)+
		let _ = index;
		$crate::BitList::from_raw(raw)
	}};

	($bit:expr; $count:expr) => {{
		let count: u32 = $count;
		let raw = if $bit != 0 && count > 0 {
			u64::MAX >> (u64::BITS - count)
		}
		else {
			0
		};
		$crate::BitList::from_raw(raw)
	}};
}

#[cfg(test)]
mod tests {
	use crate::prelude::*;

	#[test]
	fn literal_patterns() {
		assert_eq!(bitlist![], BitList::new());
		assert_eq!(bitlist![1].raw(), 1);
		assert_eq!(bitlist![1, 0, 1, 1].raw(), 0b1101);
		assert_eq!(bitlist![0, 0, 0], BitList::new());
	}

	#[test]
	fn repetition_patterns() {
		assert_eq!(bitlist![1; 0], BitList::new());
		assert_eq!(bitlist![0; 64], BitList::new());
		assert_eq!(bitlist![1; 3].raw(), 0b111);
		assert_eq!(bitlist![1; 64].raw(), u64::MAX);
	}

	#[test]
	fn const_contexts() {
		const LIST: BitList = bitlist![1, 1, 0, 1];
		assert_eq!(LIST.raw(), 0b1011);

		static FULL: BitList = bitlist![1; 8];
		assert_eq!(FULL.raw(), 0xFF);
	}
}
