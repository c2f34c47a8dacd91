use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::xdr::bytes::{Cursor, Sink};
use crate::xdr::{Result, XdrError};

/// Default nesting ceiling; fits a 2 MiB thread stack in unoptimized builds.
pub const DEFAULT_MAX_DEPTH: u32 = 200;

/// Runtime limits and behavior switches for XDR decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum nesting depth of structs and unions.
	pub max_depth: u32,
	/// Reject padding bytes that are not zero.
	pub strict_padding: bool,
	/// Accept input that continues past the decoded value.
	pub allow_trailing_bytes: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
			strict_padding: true,
			allow_trailing_bytes: false,
		}
	}
}

impl DecodeOptions {
	/// Preset that tolerates non-canonical padding and trailing data.
	pub fn lenient() -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
			strict_padding: false,
			allow_trailing_bytes: true,
		}
	}

	/// Copy of these options with a different depth ceiling.
	pub fn with_max_depth(mut self, max_depth: u32) -> Self {
		self.max_depth = max_depth;
		self
	}
}

/// Decoding state: a cursor plus options and current nesting depth.
pub struct Reader<'a> {
	cursor: Cursor<'a>,
	options: DecodeOptions,
	depth: u32,
}

impl<'a> Reader<'a> {
	/// Create a reader over `bytes`.
	pub fn new(bytes: &'a [u8], options: &DecodeOptions) -> Self {
		Self {
			cursor: Cursor::new(bytes),
			options: options.clone(),
			depth: 0,
		}
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.cursor.pos()
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.cursor.remaining()
	}

	/// Borrow the active options.
	pub fn options(&self) -> &DecodeOptions {
		&self.options
	}

	/// Mutable access to the underlying cursor.
	pub fn cursor(&mut self) -> &mut Cursor<'a> {
		&mut self.cursor
	}

	/// Run `f` one nesting level deeper, enforcing `max_depth`.
	pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
		if self.depth >= self.options.max_depth {
			return Err(XdrError::RecursionLimitExceeded {
				max_depth: self.options.max_depth,
			});
		}
		self.depth += 1;
		let out = f(self);
		self.depth -= 1;
		out
	}

	/// Consume padding after `len` payload bytes.
	pub fn skip_padding(&mut self, len: usize) -> Result<()> {
		let strict = self.options.strict_padding;
		self.cursor.skip_padding(len, strict)
	}

	/// Fail unless all input was consumed (or trailing data is allowed).
	pub fn finish(self) -> Result<()> {
		let leftover = self.cursor.remaining();
		if leftover > 0 && !self.options.allow_trailing_bytes {
			return Err(XdrError::TrailingBytes { leftover });
		}
		Ok(())
	}
}

/// Types that can be decoded from XDR.
pub trait ReadXdr: Sized {
	/// Decode one value at the reader's position.
	fn read_xdr(r: &mut Reader<'_>) -> Result<Self>;

	/// Decode a complete buffer with default options.
	fn from_xdr(bytes: &[u8]) -> Result<Self> {
		Self::from_xdr_with(bytes, &DecodeOptions::default())
	}

	/// Decode a complete buffer with explicit options.
	fn from_xdr_with(bytes: &[u8], options: &DecodeOptions) -> Result<Self> {
		let mut reader = Reader::new(bytes, options);
		let value = Self::read_xdr(&mut reader).inspect_err(|err| {
			tracing::debug!(type_name = std::any::type_name::<Self>(), %err, "xdr decode failed");
		})?;
		reader.finish()?;
		Ok(value)
	}

	/// Decode standard base64 text.
	fn from_xdr_base64(text: &str) -> Result<Self> {
		let bytes = STANDARD.decode(text.trim())?;
		Self::from_xdr(&bytes)
	}
}

/// Types that can be encoded as XDR.
///
/// Encoding cannot fail: bounded containers validate their limits when built.
pub trait WriteXdr {
	/// Append the encoding of `self` to `w`.
	fn write_xdr(&self, w: &mut Sink);

	/// Encode into a fresh byte vector.
	fn to_xdr(&self) -> Vec<u8> {
		let mut sink = Sink::new();
		self.write_xdr(&mut sink);
		sink.into_bytes()
	}

	/// Encode as standard base64 text.
	fn to_xdr_base64(&self) -> String {
		STANDARD.encode(self.to_xdr())
	}
}

/// Integer view of a union discriminant.
pub trait XdrDiscriminant: Copy + PartialEq {
	/// Raw wire value.
	fn as_i32(&self) -> i32;
}

impl XdrDiscriminant for i32 {
	fn as_i32(&self) -> i32 {
		*self
	}
}

/// Encode a value into bytes.
pub fn encode<T: WriteXdr + ?Sized>(value: &T) -> Vec<u8> {
	let mut sink = Sink::new();
	value.write_xdr(&mut sink);
	sink.into_bytes()
}

/// Decode a complete buffer with default options.
pub fn decode<T: ReadXdr>(bytes: &[u8]) -> Result<T> {
	T::from_xdr(bytes)
}

/// Decode a complete buffer with explicit options.
pub fn decode_with<T: ReadXdr>(bytes: &[u8], options: &DecodeOptions) -> Result<T> {
	T::from_xdr_with(bytes, options)
}

#[cfg(test)]
mod tests;
