//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Write `bytes` to `<target>/ledgerxdr-tests/<name>` and return the path.
pub fn scratch_file(name: &str, bytes: &[u8]) -> PathBuf {
	let dir = target_dir().join("ledgerxdr-tests");
	std::fs::create_dir_all(&dir).unwrap_or_else(|err| panic!("create {}: {err}", dir.display()));
	let path = dir.join(name);
	std::fs::write(&path, bytes).unwrap_or_else(|err| panic!("write {}: {err}", path.display()));
	path
}

/// Read a hex fixture, ignoring whitespace and `#` comments.
pub fn read_hex_fixture(name: &str) -> Vec<u8> {
	let path = fixture_path(name);
	let text = std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("read {}: {err}", path.display()));
	let digits: String = text
		.lines()
		.map(|line| line.split('#').next().unwrap_or(""))
		.flat_map(|line| line.chars().filter(|c| !c.is_whitespace()))
		.collect();
	hex::decode(digits).unwrap_or_else(|err| panic!("hex in {}: {err}", path.display()))
}

/// Every strict prefix of `bytes`, shortest first.
pub fn strict_prefixes(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
	(0..bytes.len()).map(move |end| &bytes[..end])
}

/// Hand-assembled big-endian wire buffer.
///
/// Builds encodings independently of the codec so tests can compare the two
/// and produce malformed input on purpose.
#[derive(Debug, Default, Clone)]
pub struct WireBuilder {
	buf: Vec<u8>,
}

impl WireBuilder {
	/// Empty buffer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a 32-bit unsigned word.
	pub fn u32(mut self, value: u32) -> Self {
		self.buf.extend_from_slice(&value.to_be_bytes());
		self
	}

	/// Append a 32-bit signed word.
	pub fn i32(mut self, value: i32) -> Self {
		self.buf.extend_from_slice(&value.to_be_bytes());
		self
	}

	/// Append a 64-bit unsigned value.
	pub fn u64(mut self, value: u64) -> Self {
		self.buf.extend_from_slice(&value.to_be_bytes());
		self
	}

	/// Append a 64-bit signed value.
	pub fn i64(mut self, value: i64) -> Self {
		self.buf.extend_from_slice(&value.to_be_bytes());
		self
	}

	/// Append a boolean word.
	pub fn bool(self, value: bool) -> Self {
		self.u32(u32::from(value))
	}

	/// Append fixed-length opaque bytes plus zero padding.
	pub fn fixed(mut self, bytes: &[u8]) -> Self {
		self.buf.extend_from_slice(bytes);
		self.pad(bytes.len())
	}

	/// Append a length prefix, the bytes, and zero padding.
	pub fn var(self, bytes: &[u8]) -> Self {
		let len = u32::try_from(bytes.len()).expect("test payload fits u32");
		self.u32(len).fixed(bytes)
	}

	/// Append bytes verbatim, without padding.
	pub fn raw(mut self, bytes: &[u8]) -> Self {
		self.buf.extend_from_slice(bytes);
		self
	}

	/// Finished buffer.
	pub fn build(self) -> Vec<u8> {
		self.buf
	}

	fn pad(mut self, len: usize) -> Self {
		let pad = (4 - len % 4) % 4;
		self.buf.extend(std::iter::repeat_n(0_u8, pad));
		self
	}
}

#[cfg(test)]
mod tests {
	use super::{WireBuilder, scratch_file, strict_prefixes, target_dir};

	#[test]
	fn var_pads_to_word() {
		let bytes = WireBuilder::new().var(b"abcde").build();
		assert_eq!(bytes, vec![0, 0, 0, 5, b'a', b'b', b'c', b'd', b'e', 0, 0, 0]);
	}

	#[test]
	fn prefixes_exclude_full_buffer() {
		let all: Vec<_> = strict_prefixes(&[1, 2, 3]).collect();
		assert_eq!(all, vec![&[][..], &[1][..], &[1, 2][..]]);
	}

	#[test]
	fn scratch_file_lands_under_target() {
		let path = scratch_file("testkit_scratch_file.bin", &[0, 0, 0, 1]);
		assert!(path.starts_with(target_dir()));
		assert_eq!(std::fs::read(&path).expect("read back"), vec![0, 0, 0, 1]);

		let again = scratch_file("testkit_scratch_file.bin", &[9]);
		assert_eq!(again, path);
		assert_eq!(std::fs::read(&path).expect("read back"), vec![9]);
	}
}
