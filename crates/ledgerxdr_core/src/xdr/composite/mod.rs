use std::ops::Deref;

use crate::xdr::bytes::Sink;
use crate::xdr::primitive::{read_len, write_len};
use crate::xdr::{ReadXdr, Reader, Result, WriteXdr, XdrError};

/// Smallest encoding of any XDR value, used to cap preallocation.
const MIN_ELEMENT_BYTES: usize = 4;

/// Length-prefixed vector with at most `MAX` elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VecM<T, const MAX: u32 = { u32::MAX }>(Vec<T>);

impl<T, const MAX: u32> VecM<T, MAX> {
	/// Declared element limit.
	pub const MAX_LEN: u32 = MAX;

	/// Empty vector.
	pub fn new() -> Self {
		Self(Vec::new())
	}

	/// Consume and return the elements.
	pub fn into_vec(self) -> Vec<T> {
		self.0
	}

	/// Append one element, failing when the bound is already reached.
	pub fn push(&mut self, item: T) -> Result<()> {
		if self.0.len() >= MAX as usize {
			return Err(XdrError::InvariantViolation {
				type_name: "vector",
				len: self.0.len() + 1,
				max: MAX,
			});
		}
		self.0.push(item);
		Ok(())
	}
}

impl<T, const MAX: u32> Default for VecM<T, MAX> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T, const MAX: u32> Deref for VecM<T, MAX> {
	type Target = [T];

	fn deref(&self) -> &[T] {
		&self.0
	}
}

impl<T, const MAX: u32> TryFrom<Vec<T>> for VecM<T, MAX> {
	type Error = XdrError;

	fn try_from(value: Vec<T>) -> Result<Self> {
		if u32::try_from(value.len()).map_or(true, |len| len > MAX) {
			return Err(XdrError::InvariantViolation {
				type_name: "vector",
				len: value.len(),
				max: MAX,
			});
		}
		Ok(Self(value))
	}
}

impl<T: ReadXdr, const MAX: u32> ReadXdr for VecM<T, MAX> {
	fn read_xdr(r: &mut Reader<'_>) -> Result<Self> {
		let count = read_len(r, MAX)?;
		let mut items = Vec::with_capacity(count.min(r.remaining() / MIN_ELEMENT_BYTES));
		for _ in 0..count {
			items.push(T::read_xdr(r)?);
		}
		Ok(Self(items))
	}
}

impl<T: WriteXdr, const MAX: u32> WriteXdr for VecM<T, MAX> {
	fn write_xdr(&self, w: &mut Sink) {
		write_len(self.0.len(), w);
		for item in &self.0 {
			item.write_xdr(w);
		}
	}
}

impl<T: ReadXdr, const N: usize> ReadXdr for [T; N] {
	fn read_xdr(r: &mut Reader<'_>) -> Result<Self> {
		let mut items = Vec::with_capacity(N);
		for _ in 0..N {
			items.push(T::read_xdr(r)?);
		}
		items.try_into().map_err(|items: Vec<T>| XdrError::InvariantViolation {
			type_name: "fixed array",
			len: items.len(),
			max: u32::try_from(N).unwrap_or(u32::MAX),
		})
	}
}

impl<T: WriteXdr, const N: usize> WriteXdr for [T; N] {
	fn write_xdr(&self, w: &mut Sink) {
		for item in self {
			item.write_xdr(w);
		}
	}
}

impl<T: ReadXdr> ReadXdr for Option<T> {
	fn read_xdr(r: &mut Reader<'_>) -> Result<Self> {
		if bool::read_xdr(r)? { Ok(Some(T::read_xdr(r)?)) } else { Ok(None) }
	}
}

impl<T: WriteXdr> WriteXdr for Option<T> {
	fn write_xdr(&self, w: &mut Sink) {
		match self {
			Some(value) => {
				true.write_xdr(w);
				value.write_xdr(w);
			}
			None => false.write_xdr(w),
		}
	}
}

impl<T: ReadXdr> ReadXdr for Box<T> {
	fn read_xdr(r: &mut Reader<'_>) -> Result<Self> {
		Ok(Box::new(T::read_xdr(r)?))
	}
}

impl<T: WriteXdr> WriteXdr for Box<T> {
	fn write_xdr(&self, w: &mut Sink) {
		self.as_ref().write_xdr(w);
	}
}

#[cfg(feature = "serde")]
mod serde_impls {
	use serde::de::Error as _;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use super::VecM;

	impl<T: Serialize, const MAX: u32> Serialize for VecM<T, MAX> {
		fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
			self.0.serialize(serializer)
		}
	}

	impl<'de, T: Deserialize<'de>, const MAX: u32> Deserialize<'de> for VecM<T, MAX> {
		fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
			let items = Vec::<T>::deserialize(deserializer)?;
			Self::try_from(items).map_err(D::Error::custom)
		}
	}
}

#[cfg(test)]
mod tests;
