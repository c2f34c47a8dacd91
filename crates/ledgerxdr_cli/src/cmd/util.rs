use std::io::Read;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use ledgerxdr::xdr::{Compression, DecodeOptions, Result, TypeVariant, decompress};

/// Text or binary representation of XDR input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum InputFormat {
	Base64,
	Hex,
	Raw,
}

/// Representation for encoded output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
	Base64,
	Hex,
	Raw,
}

/// Decoder limits shared by commands that read XDR.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DecodeFlags {
	/// Maximum struct/union nesting depth.
	#[arg(long)]
	pub max_depth: Option<u32>,
	/// Tolerate non-zero padding and trailing bytes.
	#[arg(long)]
	pub lenient: bool,
}

impl DecodeFlags {
	pub(crate) fn options(&self) -> DecodeOptions {
		let base = if self.lenient {
			DecodeOptions::lenient()
		} else {
			DecodeOptions::default()
		};
		match self.max_depth {
			Some(depth) => base.with_max_depth(depth),
			None => base,
		}
	}
}

/// Resolve a type name, accepting snake_case and any letter case.
pub(crate) fn parse_variant(name: &str) -> Result<TypeVariant> {
	TypeVariant::lookup(name)
}

/// Read a file, or stdin when `path` is absent or `-`.
pub(crate) fn read_source(path: Option<&Path>) -> Result<Vec<u8>> {
	match path {
		Some(path) if path != Path::new("-") => Ok(std::fs::read(path)?),
		_ => {
			let mut out = Vec::new();
			std::io::stdin().read_to_end(&mut out)?;
			Ok(out)
		}
	}
}

/// Turn raw source bytes into XDR bytes.
pub(crate) fn decode_input(raw: Vec<u8>, format: InputFormat) -> Result<(Compression, Vec<u8>)> {
	match format {
		InputFormat::Base64 => {
			let text = strip_whitespace(&raw);
			Ok((Compression::None, STANDARD.decode(text)?))
		}
		InputFormat::Hex => {
			let text = strip_whitespace(&raw);
			let bytes = hex::decode(text).map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
			Ok((Compression::None, bytes))
		}
		InputFormat::Raw => decompress(raw),
	}
}

/// Render XDR bytes in the requested representation.
pub(crate) fn encode_output(bytes: &[u8], format: OutputFormat) -> Vec<u8> {
	match format {
		OutputFormat::Base64 => with_newline(STANDARD.encode(bytes)),
		OutputFormat::Hex => with_newline(hex::encode(bytes)),
		OutputFormat::Raw => bytes.to_vec(),
	}
}

/// Print pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
	println!("{text}");
	Ok(())
}

/// Display label for an optional input path.
pub(crate) fn source_label(path: Option<&PathBuf>) -> String {
	match path {
		Some(path) => path.display().to_string(),
		None => "-".to_owned(),
	}
}

fn strip_whitespace(raw: &[u8]) -> Vec<u8> {
	raw.iter().copied().filter(|b| !b.is_ascii_whitespace()).collect()
}

fn with_newline(mut text: String) -> Vec<u8> {
	text.push('\n');
	text.into_bytes()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn text_inputs_ignore_whitespace() {
		let (_, bytes) = decode_input(b"AAAA\nAQ==\n".to_vec(), InputFormat::Base64).expect("base64");
		assert_eq!(bytes, vec![0, 0, 0, 1]);

		let (_, bytes) = decode_input(b"0000 0001\n".to_vec(), InputFormat::Hex).expect("hex");
		assert_eq!(bytes, vec![0, 0, 0, 1]);
	}

	#[test]
	fn bad_hex_is_reported() {
		let err = decode_input(b"zz".to_vec(), InputFormat::Hex).expect_err("hex");
		assert!(err.to_string().starts_with("io:"), "{err}");
	}

	#[test]
	fn raw_input_inflates_zstd() {
		let packed = zstd::encode_all(&[0_u8, 0, 0, 7][..], 1).expect("compress");
		let (mode, bytes) = decode_input(packed, InputFormat::Raw).expect("raw");
		assert_eq!(mode, Compression::Zstd);
		assert_eq!(bytes, vec![0, 0, 0, 7]);
	}

	#[test]
	fn flags_map_onto_options() {
		let flags = DecodeFlags {
			max_depth: Some(8),
			lenient: true,
		};
		let options = flags.options();
		assert_eq!(options.max_depth, 8);
		assert!(!options.strict_padding);
		assert!(options.allow_trailing_bytes);

		let strict = DecodeFlags {
			max_depth: None,
			lenient: false,
		}
		.options();
		assert_eq!(strict.max_depth, ledgerxdr::xdr::DEFAULT_MAX_DEPTH);
		assert!(strict.strict_padding);
	}

	#[test]
	fn encoded_text_ends_with_newline() {
		assert_eq!(encode_output(&[0, 0, 0, 1], OutputFormat::Hex), b"00000001\n".to_vec());
		assert_eq!(encode_output(&[0, 0, 0, 1], OutputFormat::Raw), vec![0, 0, 0, 1]);
	}
}
