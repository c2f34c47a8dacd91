//! Record-marked XDR streams.
//!
//! Each record is one or more fragments. A fragment starts with a 4-byte
//! big-endian mark whose high bit flags the last fragment of the record and
//! whose low 31 bits hold the fragment length.

use std::marker::PhantomData;

use crate::xdr::bytes::{Cursor, Sink};
use crate::xdr::{DecodeOptions, ReadXdr, Result, WriteXdr, XdrError};

const LAST_FRAGMENT: u32 = 0x8000_0000;
const MAX_FRAGMENT_LEN: usize = 0x7FFF_FFFF;

/// One reassembled record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
	/// Record payload with fragment marks removed.
	pub payload: Vec<u8>,
	/// Byte offset of the record's first mark.
	pub offset: usize,
	/// Number of fragments the record was split into.
	pub fragments: usize,
}

/// Iterator over raw records of a marked stream.
pub struct RecordIter<'a> {
	cursor: Cursor<'a>,
	done: bool,
}

impl<'a> RecordIter<'a> {
	/// Iterate records in `bytes`.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self {
			cursor: Cursor::new(bytes),
			done: false,
		}
	}

	fn read_record(&mut self) -> Result<Record> {
		let offset = self.cursor.pos();
		let mut payload = Vec::new();
		let mut fragments = 0;
		loop {
			let at = self.cursor.pos();
			if self.cursor.remaining() < 4 {
				return Err(XdrError::InvalidFrame {
					at,
					reason: "stream ends inside a record",
				});
			}
			let mark = self.cursor.read_u32()?;
			let len = (mark & !LAST_FRAGMENT) as usize;
			if len > self.cursor.remaining() {
				return Err(XdrError::InvalidFrame {
					at,
					reason: "fragment length exceeds remaining input",
				});
			}
			payload.extend_from_slice(self.cursor.read_exact(len)?);
			fragments += 1;
			if mark & LAST_FRAGMENT != 0 {
				return Ok(Record {
					payload,
					offset,
					fragments,
				});
			}
		}
	}
}

impl Iterator for RecordIter<'_> {
	type Item = Result<Record>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		if self.cursor.remaining() == 0 {
			self.done = true;
			return None;
		}

		match self.read_record() {
			Ok(record) => {
				tracing::trace!(offset = record.offset, len = record.payload.len(), fragments = record.fragments, "xdr record");
				Some(Ok(record))
			}
			Err(err) => {
				self.done = true;
				Some(Err(err))
			}
		}
	}
}

/// Iterator decoding every record of a marked stream as `T`.
///
/// Each record must decode to exactly its own length.
pub struct Frames<'a, T> {
	records: RecordIter<'a>,
	options: DecodeOptions,
	done: bool,
	_marker: PhantomData<fn() -> T>,
}

impl<'a, T: ReadXdr> Frames<'a, T> {
	/// Decode records with default options.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self::with_options(bytes, DecodeOptions::default())
	}

	/// Decode records with explicit options.
	pub fn with_options(bytes: &'a [u8], options: DecodeOptions) -> Self {
		let options = DecodeOptions {
			allow_trailing_bytes: false,
			..options
		};
		Self {
			records: RecordIter::new(bytes),
			options,
			done: false,
			_marker: PhantomData,
		}
	}
}

impl<T: ReadXdr> Iterator for Frames<'_, T> {
	type Item = Result<T>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		let out = match self.records.next()? {
			Ok(record) => T::from_xdr_with(&record.payload, &self.options),
			Err(err) => Err(err),
		};
		if out.is_err() {
			self.done = true;
		}
		Some(out)
	}
}

/// Append `value` as a single-fragment record.
pub fn write_record<T: WriteXdr + ?Sized>(value: &T, w: &mut Sink) -> Result<()> {
	let body = crate::xdr::encode(value);
	if body.len() > MAX_FRAGMENT_LEN {
		return Err(XdrError::InvalidFrame {
			at: w.len(),
			reason: "record longer than one fragment allows",
		});
	}
	w.write_u32(LAST_FRAGMENT | body.len() as u32);
	w.write_bytes(&body);
	Ok(())
}

/// Encode `values` as a record-marked stream.
pub fn write_framed<'v, T: WriteXdr + 'v>(values: impl IntoIterator<Item = &'v T>) -> Result<Vec<u8>> {
	let mut sink = Sink::new();
	for value in values {
		write_record(value, &mut sink)?;
	}
	Ok(sink.into_bytes())
}

#[cfg(test)]
mod tests;
