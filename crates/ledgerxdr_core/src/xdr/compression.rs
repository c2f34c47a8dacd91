use std::io::Read;

use crate::xdr::{Result, XdrError};

const MAX_DECOMPRESSED_BYTES: usize = 512 * 1024 * 1024;
/// zstd frame magic used by compressed ledger exports.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw XDR bytes.
	None,
	/// zstd-compressed stream.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Detect and undo compression, returning `(mode, decoded_bytes)`.
///
/// Input without the zstd magic is returned unchanged.
pub fn decompress(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	if raw.starts_with(&ZSTD_MAGIC) {
		let out = decode_zstd(&raw, MAX_DECOMPRESSED_BYTES)?;
		tracing::debug!(compressed = raw.len(), decompressed = out.len(), "inflated zstd input");
		return Ok((Compression::Zstd, out));
	}
	Ok((Compression::None, raw))
}

fn decode_zstd(raw: &[u8], limit: usize) -> Result<Vec<u8>> {
	let mut decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > limit {
			return Err(XdrError::DecompressedTooLarge { limit });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::{Compression, decode_zstd, decompress};
	use crate::xdr::XdrError;

	#[test]
	fn raw_input_passes_through() {
		let (mode, out) = decompress(vec![0, 0, 0, 1]).expect("raw");
		assert_eq!(mode, Compression::None);
		assert_eq!(out, vec![0, 0, 0, 1]);
	}

	#[test]
	fn zstd_input_is_inflated() {
		let payload = vec![7_u8; 4096];
		let packed = zstd::encode_all(payload.as_slice(), 3).expect("compress");
		let (mode, out) = decompress(packed).expect("inflate");
		assert_eq!(mode, Compression::Zstd);
		assert_eq!(mode.as_str(), "zstd");
		assert_eq!(out, payload);
	}

	#[test]
	fn output_over_limit_is_rejected() {
		let packed = zstd::encode_all(vec![0_u8; 10_000].as_slice(), 3).expect("compress");
		let err = decode_zstd(&packed, 1024).expect_err("limit");
		assert!(matches!(err, XdrError::DecompressedTooLarge { limit: 1024 }));
	}
}
