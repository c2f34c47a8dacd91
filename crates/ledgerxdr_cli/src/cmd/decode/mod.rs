use std::path::PathBuf;

use ledgerxdr::xdr::{Result, Type};

use crate::cmd::util::{DecodeFlags, InputFormat, decode_input, emit_json, parse_variant, read_source, source_label};

#[derive(clap::Args)]
pub struct Args {
	/// Type to decode as.
	#[arg(long = "type")]
	pub type_name: String,
	/// Input file, stdin when omitted or `-`.
	pub file: Option<PathBuf>,
	#[arg(long, value_enum, default_value = "base64")]
	pub input: InputFormat,
	#[command(flatten)]
	pub flags: DecodeFlags,
	#[arg(long)]
	pub json: bool,
}

/// Decode one value and print it.
pub fn run(args: Args) -> Result<()> {
	let Args {
		type_name,
		file,
		input,
		flags,
		json,
	} = args;

	let variant = parse_variant(&type_name)?;
	let (compression, bytes) = decode_input(read_source(file.as_deref())?, input)?;
	let value = Type::from_xdr_with(variant, &bytes, &flags.options())?;

	if json {
		return emit_json(&value);
	}

	println!("source: {}", source_label(file.as_ref()));
	println!("type: {}", variant.name());
	println!("compression: {}", compression.as_str());
	println!("bytes: {}", bytes.len());
	println!("{value:#?}");
	Ok(())
}
