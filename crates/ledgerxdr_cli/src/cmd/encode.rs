use std::io::Write;
use std::path::PathBuf;

use ledgerxdr::xdr::{Result, Type, WriteXdr};

use crate::cmd::util::{OutputFormat, encode_output, parse_variant, read_source};

#[derive(clap::Args)]
pub struct Args {
	/// Type the JSON document describes.
	#[arg(long = "type")]
	pub type_name: String,
	/// JSON input file, stdin when omitted or `-`.
	pub file: Option<PathBuf>,
	#[arg(long, value_enum, default_value = "base64")]
	pub output: OutputFormat,
}

/// Build a value from JSON and print its XDR encoding.
pub fn run(args: Args) -> Result<()> {
	let Args { type_name, file, output } = args;

	let variant = parse_variant(&type_name)?;
	let text = read_source(file.as_deref())?;

	let mut de = serde_json::Deserializer::from_slice(&text);
	let value = Type::deserialize_as(variant, &mut de).map_err(std::io::Error::from)?;
	de.end().map_err(std::io::Error::from)?;

	let bytes = value.to_xdr();
	tracing::debug!(type_name = variant.name(), len = bytes.len(), "encoded value");

	let mut stdout = std::io::stdout().lock();
	stdout.write_all(&encode_output(&bytes, output))?;
	stdout.flush()?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::cmd::test_support::run_ledgerxdr_stdin;

	#[test]
	fn encode_native_asset() {
		let output = run_ledgerxdr_stdin(&["encode", "--type", "Asset", "--output", "hex"], br#""native""#);
		assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
		assert_eq!(String::from_utf8_lossy(&output.stdout), "00000000\n");
	}

	#[test]
	fn encode_memo_text_to_base64() {
		let output = run_ledgerxdr_stdin(&["encode", "--type", "Memo"], br#"{"text":"hi"}"#);
		assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
		// 00000001 00000002 68690000
		assert_eq!(String::from_utf8_lossy(&output.stdout), "AAAAAQAAAAJoaQAA\n");
	}

	#[test]
	fn encode_rejects_over_long_memo() {
		let json = format!(r#"{{"text":"{}"}}"#, "x".repeat(29));
		let output = run_ledgerxdr_stdin(&["encode", "--type", "Memo"], json.as_bytes());
		assert!(!output.status.success());
		assert!(String::from_utf8_lossy(&output.stderr).starts_with("error:"));
	}

	#[test]
	fn encode_then_decode_round_trips() {
		let json = br#"{"before_absolute_time":1700000000}"#;
		let encoded = run_ledgerxdr_stdin(&["encode", "--type", "ClaimPredicate"], json);
		assert!(encoded.status.success(), "{}", String::from_utf8_lossy(&encoded.stderr));

		let decoded = run_ledgerxdr_stdin(&["decode", "--type", "ClaimPredicate", "--json"], &encoded.stdout);
		assert!(decoded.status.success(), "{}", String::from_utf8_lossy(&decoded.stderr));
		let value: serde_json::Value = serde_json::from_slice(&decoded.stdout).expect("json");
		assert_eq!(value["before_absolute_time"], 1_700_000_000);
	}
}
