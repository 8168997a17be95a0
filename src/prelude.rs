/*! `bitlist` symbol export.

This module collects the general public API into a single spot for inclusion,
as `use bitlist::prelude::*;`, without polluting the root namespace of the
crate.
!*/

pub use crate::{
	bitlist,
	error::{
		Error,
		Result,
	},
	keys::{
		KeyTable,
		KeyedBitList,
		Keys,
	},
	list::{
		BitList,
		IterBits,
		Source,
	},
	state::{
		Binding,
		KeyedBinding,
		RawState,
	},
};
