//! Versioned extension points.
//!
//! An extension is a union whose discriminant 0 carries nothing and whose
//! single later version `V` carries the next payload. Chains of versions are
//! built by nesting: the payload of version 1 holds its own `Extension<_, 2>`.

use crate::xdr::bytes::Sink;
use crate::xdr::macros::xdr_union;
use crate::xdr::{ReadXdr, Reader, Result, WriteXdr, XdrError};

/// Two-state extension: absent (`V0`) or the version-`V` payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "snake_case"))]
pub enum Extension<T, const V: i32 = 1> {
	/// No extension data.
	V0,
	/// Payload introduced at version `V`.
	Present(T),
}

impl<T, const V: i32> Extension<T, V> {
	/// Discriminant carried by [`Extension::Present`].
	pub const VERSION: i32 = V;

	/// Wire discriminant of this value.
	pub fn discriminant(&self) -> i32 {
		match self {
			Self::V0 => 0,
			Self::Present(_) => V,
		}
	}

	/// Borrow the payload when present.
	pub fn payload(&self) -> Option<&T> {
		match self {
			Self::V0 => None,
			Self::Present(value) => Some(value),
		}
	}

	/// Consume into the payload when present.
	pub fn into_payload(self) -> Option<T> {
		match self {
			Self::V0 => None,
			Self::Present(value) => Some(value),
		}
	}

	/// Return `true` when a payload is present.
	pub fn is_present(&self) -> bool {
		matches!(self, Self::Present(_))
	}
}

impl<T, const V: i32> Default for Extension<T, V> {
	fn default() -> Self {
		Self::V0
	}
}

impl<T, const V: i32> From<Option<T>> for Extension<T, V> {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::V0, Self::Present)
	}
}

impl<T: ReadXdr, const V: i32> ReadXdr for Extension<T, V> {
	fn read_xdr(r: &mut Reader<'_>) -> Result<Self> {
		r.nested(|r| match i32::read_xdr(r)? {
			0 => Ok(Self::V0),
			disc if disc == V => Ok(Self::Present(T::read_xdr(r)?)),
			value => Err(XdrError::UnrecognizedDiscriminant {
				type_name: std::any::type_name::<Self>(),
				value,
			}),
		})
	}
}

impl<T: WriteXdr, const V: i32> WriteXdr for Extension<T, V> {
	fn write_xdr(&self, w: &mut Sink) {
		match self {
			Self::V0 => w.write_i32(0),
			Self::Present(value) => {
				w.write_i32(V);
				value.write_xdr(w);
			}
		}
	}
}

xdr_union! {
	/// Extension slot with no defined versions yet.
	pub enum ExtensionPoint switch (i32) {
		/// Only legal value.
		V0(0),
	}
}

impl Default for ExtensionPoint {
	fn default() -> Self {
		Self::V0
	}
}

#[cfg(test)]
mod tests;
