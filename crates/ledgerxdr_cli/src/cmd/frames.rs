use std::path::PathBuf;

use ledgerxdr::xdr::{RecordIter, Result, Type, decompress};

use crate::cmd::util::{DecodeFlags, emit_json, parse_variant};

#[derive(clap::Args)]
pub struct Args {
	/// Type of every record.
	#[arg(long = "type")]
	pub type_name: String,
	/// Record-marked stream, optionally zstd-compressed.
	pub file: PathBuf,
	/// Stop after this many records.
	#[arg(long)]
	pub limit: Option<usize>,
	#[command(flatten)]
	pub flags: DecodeFlags,
	#[arg(long)]
	pub json: bool,
}

#[derive(serde::Serialize)]
struct FramesJson {
	path: String,
	#[serde(rename = "type")]
	type_name: &'static str,
	compression: &'static str,
	records: Vec<RecordJson>,
}

#[derive(serde::Serialize)]
struct RecordJson {
	index: usize,
	offset: usize,
	len: usize,
	fragments: usize,
	value: Type,
}

/// Decode each record of a stream as one type.
pub fn run(args: Args) -> Result<()> {
	let Args {
		type_name,
		file,
		limit,
		flags,
		json,
	} = args;

	let variant = parse_variant(&type_name)?;
	let (compression, bytes) = decompress(std::fs::read(&file)?)?;
	let mut options = flags.options();
	options.allow_trailing_bytes = false;

	let mut records = Vec::new();
	for (index, record) in RecordIter::new(&bytes).take(limit.unwrap_or(usize::MAX)).enumerate() {
		let record = record?;
		let value = Type::from_xdr_with(variant, &record.payload, &options)?;
		records.push(RecordJson {
			index,
			offset: record.offset,
			len: record.payload.len(),
			fragments: record.fragments,
			value,
		});
	}
	tracing::debug!(count = records.len(), "decoded stream records");

	if json {
		return emit_json(&FramesJson {
			path: file.display().to_string(),
			type_name: variant.name(),
			compression: compression.as_str(),
			records,
		});
	}

	println!("path: {}", file.display());
	println!("type: {}", variant.name());
	println!("compression: {}", compression.as_str());
	println!("records: {}", records.len());
	println!("idx\toffset\tlen\tfragments");
	for record in &records {
		println!("{}\t{}\t{}\t{}", record.index, record.offset, record.len, record.fragments);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use ledgerxdr::xdr::{Asset, ClaimPredicate, write_framed};
	use ledgerxdr_testkit::scratch_file;

	use crate::cmd::test_support::{run_ledgerxdr, run_ledgerxdr_json};

	fn write_stream(name: &str) -> String {
		let stream = write_framed(&[ClaimPredicate::Unconditional, ClaimPredicate::BeforeAbsoluteTime(9)]).expect("frame");
		scratch_file(name, &stream).display().to_string()
	}

	#[test]
	fn frames_json_lists_each_record() {
		let path = write_stream("frames_json_lists_each_record.xdr");
		let json = run_ledgerxdr_json(&["frames", "--type", "ClaimPredicate", &path, "--json"]);

		assert_eq!(json["type"], "ClaimPredicate");
		assert_eq!(json["compression"], "none");
		let records = json["records"].as_array().expect("records array");
		assert_eq!(records.len(), 2);
		assert_eq!(records[0]["value"], "unconditional");
		assert_eq!(records[1]["offset"], 8);
		assert_eq!(records[1]["len"], 12);
		assert_eq!(records[1]["value"]["before_absolute_time"], 9);
	}

	#[test]
	fn frames_limit_stops_early() {
		let path = write_stream("frames_limit_stops_early.xdr");
		let json = run_ledgerxdr_json(&["frames", "--type", "ClaimPredicate", &path, "--limit", "1", "--json"]);
		assert_eq!(json["records"].as_array().map(Vec::len), Some(1));
	}

	#[test]
	fn frames_record_of_wrong_type_fails() {
		let stream = write_framed(&[Asset::Native]).expect("frame");
		let mut bytes = stream;
		bytes.extend_from_slice(&[0x80, 0, 0, 4, 0, 0, 0, 9]);
		let path = scratch_file("frames_record_of_wrong_type_fails.xdr", &bytes);

		let output = run_ledgerxdr(&["frames", "--type", "Asset", &path.display().to_string()]);
		assert!(!output.status.success());
		assert!(String::from_utf8_lossy(&output.stderr).contains("unrecognized discriminant 9"));
	}
}
