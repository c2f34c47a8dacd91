use ledgerxdr::xdr::{Result, TypeVariant};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Keep names containing this text (case-insensitive).
	#[arg(long)]
	pub filter: Option<String>,
	#[arg(long)]
	pub json: bool,
}

#[derive(serde::Serialize)]
struct TypeRow {
	name: &'static str,
	shape: &'static str,
}

/// List registered type names with their shapes.
pub fn run(args: Args) -> Result<()> {
	let Args { filter, json } = args;
	let needle = filter.map(|text| text.to_ascii_lowercase());

	let rows: Vec<TypeRow> = TypeVariant::ALL
		.iter()
		.filter(|variant| {
			needle
				.as_deref()
				.is_none_or(|needle| variant.name().to_ascii_lowercase().contains(needle))
		})
		.map(|variant| TypeRow {
			name: variant.name(),
			shape: variant.descriptor().shape.as_str(),
		})
		.collect();

	if json {
		return emit_json(&rows);
	}

	for row in &rows {
		println!("{}\t{}", row.name, row.shape);
	}
	Ok(())
}
