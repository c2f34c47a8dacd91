use crate::xdr::{Result, XdrError};

/// Number of zero bytes needed to pad `len` up to a 4-byte boundary.
pub const fn padding_len(len: usize) -> usize {
	(4 - len % 4) % 4
}

/// Bounded big-endian cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(XdrError::TruncatedInput {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read a fixed-size byte array.
	pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read a big-endian `u32`.
	pub fn read_u32(&mut self) -> Result<u32> {
		Ok(u32::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i32`.
	pub fn read_i32(&mut self) -> Result<i32> {
		Ok(i32::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `u64`.
	pub fn read_u64(&mut self) -> Result<u64> {
		Ok(u64::from_be_bytes(self.read_array()?))
	}

	/// Read a big-endian `i64`.
	pub fn read_i64(&mut self) -> Result<i64> {
		Ok(i64::from_be_bytes(self.read_array()?))
	}

	/// Consume the padding that follows `len` payload bytes.
	///
	/// With `require_zero` set, any non-zero padding byte is rejected.
	pub fn skip_padding(&mut self, len: usize, require_zero: bool) -> Result<()> {
		let at = self.pos;
		let pad = self.read_exact(padding_len(len))?;
		if require_zero && let Some(idx) = pad.iter().position(|byte| *byte != 0) {
			return Err(XdrError::NonZeroPadding { at: at + idx });
		}
		Ok(())
	}
}

/// Append-only big-endian write buffer.
#[derive(Debug, Default)]
pub struct Sink {
	buf: Vec<u8>,
}

impl Sink {
	/// Create an empty sink.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a sink with preallocated capacity.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buf: Vec::with_capacity(capacity),
		}
	}

	/// Return number of bytes written so far.
	pub fn len(&self) -> usize {
		self.buf.len()
	}

	/// Return `true` when nothing has been written.
	pub fn is_empty(&self) -> bool {
		self.buf.is_empty()
	}

	/// Borrow written bytes.
	pub fn as_slice(&self) -> &[u8] {
		&self.buf
	}

	/// Consume the sink and return its bytes.
	pub fn into_bytes(self) -> Vec<u8> {
		self.buf
	}

	/// Append raw bytes.
	pub fn write_bytes(&mut self, bytes: &[u8]) {
		self.buf.extend_from_slice(bytes);
	}

	/// Append a big-endian `u32`.
	pub fn write_u32(&mut self, value: u32) {
		self.write_bytes(&value.to_be_bytes());
	}

	/// Append a big-endian `i32`.
	pub fn write_i32(&mut self, value: i32) {
		self.write_bytes(&value.to_be_bytes());
	}

	/// Append a big-endian `u64`.
	pub fn write_u64(&mut self, value: u64) {
		self.write_bytes(&value.to_be_bytes());
	}

	/// Append a big-endian `i64`.
	pub fn write_i64(&mut self, value: i64) {
		self.write_bytes(&value.to_be_bytes());
	}

	/// Append zero padding for a payload of `len` bytes.
	pub fn write_padding(&mut self, len: usize) {
		const ZEROS: [u8; 3] = [0; 3];
		self.write_bytes(&ZEROS[..padding_len(len)]);
	}
}

#[cfg(test)]
mod tests;
