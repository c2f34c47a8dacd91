use std::fmt;

use crate::xdr::bytes::Sink;
use crate::xdr::{ReadXdr, Reader, Result, WriteXdr, XdrError};

impl ReadXdr for bool {
	fn read_xdr(r: &mut Reader<'_>) -> Result<Self> {
		let at = r.pos();
		match r.cursor().read_u32()? {
			0 => Ok(false),
			1 => Ok(true),
			value => Err(XdrError::InvalidBooleanEncoding { at, value }),
		}
	}
}

impl WriteXdr for bool {
	fn write_xdr(&self, w: &mut Sink) {
		w.write_u32(u32::from(*self));
	}
}

impl ReadXdr for i32 {
	fn read_xdr(r: &mut Reader<'_>) -> Result<Self> {
		r.cursor().read_i32()
	}
}

impl WriteXdr for i32 {
	fn write_xdr(&self, w: &mut Sink) {
		w.write_i32(*self);
	}
}

impl ReadXdr for u32 {
	fn read_xdr(r: &mut Reader<'_>) -> Result<Self> {
		r.cursor().read_u32()
	}
}

impl WriteXdr for u32 {
	fn write_xdr(&self, w: &mut Sink) {
		w.write_u32(*self);
	}
}

impl ReadXdr for i64 {
	fn read_xdr(r: &mut Reader<'_>) -> Result<Self> {
		r.cursor().read_i64()
	}
}

impl WriteXdr for i64 {
	fn write_xdr(&self, w: &mut Sink) {
		w.write_i64(*self);
	}
}

impl ReadXdr for u64 {
	fn read_xdr(r: &mut Reader<'_>) -> Result<Self> {
		r.cursor().read_u64()
	}
}

impl WriteXdr for u64 {
	fn write_xdr(&self, w: &mut Sink) {
		w.write_u64(*self);
	}
}

/// Read `N` bytes of fixed-length opaque data plus padding.
pub fn read_fixed_opaque<const N: usize>(r: &mut Reader<'_>) -> Result<[u8; N]> {
	let out = r.cursor().read_array::<N>()?;
	r.skip_padding(N)?;
	Ok(out)
}

/// Write fixed-length opaque data plus padding.
pub fn write_fixed_opaque(bytes: &[u8], w: &mut Sink) {
	w.write_bytes(bytes);
	w.write_padding(bytes.len());
}

/// Read a length prefix and check it against `max`.
pub(crate) fn read_len(r: &mut Reader<'_>, max: u32) -> Result<usize> {
	let at = r.pos();
	let declared = r.cursor().read_u32()?;
	if declared > max {
		return Err(XdrError::LengthMismatch { at, declared, max });
	}
	Ok(declared as usize)
}

/// Write a length prefix for a container already checked against its bound.
pub(crate) fn write_len(len: usize, w: &mut Sink) {
	let len = u32::try_from(len).unwrap_or(u32::MAX);
	w.write_u32(len);
}

fn read_var_opaque(r: &mut Reader<'_>, max: u32) -> Result<Vec<u8>> {
	let len = read_len(r, max)?;
	let bytes = r.cursor().read_exact(len)?.to_vec();
	r.skip_padding(len)?;
	Ok(bytes)
}

fn write_var_opaque(bytes: &[u8], w: &mut Sink) {
	write_len(bytes.len(), w);
	w.write_bytes(bytes);
	w.write_padding(bytes.len());
}

fn check_len(type_name: &'static str, len: usize, max: u32) -> Result<()> {
	if u32::try_from(len).map_or(true, |len| len > max) {
		return Err(XdrError::InvariantViolation { type_name, len, max });
	}
	Ok(())
}

/// Variable-length opaque data with at most `MAX` bytes.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BytesM<const MAX: u32 = { u32::MAX }>(Vec<u8>);

impl<const MAX: u32> BytesM<MAX> {
	/// Declared byte limit.
	pub const MAX_LEN: u32 = MAX;

	/// Empty payload.
	pub fn new() -> Self {
		Self(Vec::new())
	}

	/// Borrow payload bytes.
	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}

	/// Consume and return payload bytes.
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Number of payload bytes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Return `true` when the payload is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<const MAX: u32> TryFrom<Vec<u8>> for BytesM<MAX> {
	type Error = XdrError;

	fn try_from(value: Vec<u8>) -> Result<Self> {
		check_len("opaque", value.len(), MAX)?;
		Ok(Self(value))
	}
}

impl<const MAX: u32> TryFrom<&[u8]> for BytesM<MAX> {
	type Error = XdrError;

	fn try_from(value: &[u8]) -> Result<Self> {
		Self::try_from(value.to_vec())
	}
}

impl<const MAX: u32> AsRef<[u8]> for BytesM<MAX> {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl<const MAX: u32> fmt::Debug for BytesM<MAX> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "BytesM({})", hex::encode(&self.0))
	}
}

impl<const MAX: u32> ReadXdr for BytesM<MAX> {
	fn read_xdr(r: &mut Reader<'_>) -> Result<Self> {
		Ok(Self(read_var_opaque(r, MAX)?))
	}
}

impl<const MAX: u32> WriteXdr for BytesM<MAX> {
	fn write_xdr(&self, w: &mut Sink) {
		write_var_opaque(&self.0, w);
	}
}

/// Length-prefixed string with at most `MAX` bytes.
///
/// The wire carries raw bytes; UTF-8 is checked only on [`StringM::as_str`].
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StringM<const MAX: u32 = { u32::MAX }>(Vec<u8>);

impl<const MAX: u32> StringM<MAX> {
	/// Declared byte limit.
	pub const MAX_LEN: u32 = MAX;

	/// Borrow raw string bytes.
	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	/// UTF-8 view of the bytes.
	pub fn as_str(&self) -> std::result::Result<&str, std::str::Utf8Error> {
		std::str::from_utf8(&self.0)
	}

	/// Lossy UTF-8 rendering.
	pub fn to_string_lossy(&self) -> String {
		String::from_utf8_lossy(&self.0).into_owned()
	}

	/// Number of bytes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Return `true` when the string is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<const MAX: u32> TryFrom<Vec<u8>> for StringM<MAX> {
	type Error = XdrError;

	fn try_from(value: Vec<u8>) -> Result<Self> {
		check_len("string", value.len(), MAX)?;
		Ok(Self(value))
	}
}

impl<const MAX: u32> TryFrom<&str> for StringM<MAX> {
	type Error = XdrError;

	fn try_from(value: &str) -> Result<Self> {
		Self::try_from(value.as_bytes().to_vec())
	}
}

impl<const MAX: u32> TryFrom<String> for StringM<MAX> {
	type Error = XdrError;

	fn try_from(value: String) -> Result<Self> {
		Self::try_from(value.into_bytes())
	}
}

impl<const MAX: u32> fmt::Debug for StringM<MAX> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "StringM({:?})", self.to_string_lossy())
	}
}

impl<const MAX: u32> fmt::Display for StringM<MAX> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_string_lossy())
	}
}

impl<const MAX: u32> ReadXdr for StringM<MAX> {
	fn read_xdr(r: &mut Reader<'_>) -> Result<Self> {
		Ok(Self(read_var_opaque(r, MAX)?))
	}
}

impl<const MAX: u32> WriteXdr for StringM<MAX> {
	fn write_xdr(&self, w: &mut Sink) {
		write_var_opaque(&self.0, w);
	}
}

#[cfg(feature = "serde")]
mod serde_impls {
	use serde::de::Error as _;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use super::{BytesM, StringM};

	impl<const MAX: u32> Serialize for BytesM<MAX> {
		fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
			serializer.serialize_str(&hex::encode(&self.0))
		}
	}

	impl<'de, const MAX: u32> Deserialize<'de> for BytesM<MAX> {
		fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
			let text = String::deserialize(deserializer)?;
			let bytes = hex::decode(text).map_err(D::Error::custom)?;
			Self::try_from(bytes).map_err(D::Error::custom)
		}
	}

	impl<const MAX: u32> Serialize for StringM<MAX> {
		fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
			serializer.serialize_str(&self.to_string_lossy())
		}
	}

	impl<'de, const MAX: u32> Deserialize<'de> for StringM<MAX> {
		fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
			let text = String::deserialize(deserializer)?;
			Self::try_from(text).map_err(D::Error::custom)
		}
	}
}

#[cfg(test)]
mod tests;
