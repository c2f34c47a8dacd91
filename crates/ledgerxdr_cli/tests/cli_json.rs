#![allow(missing_docs)]

use std::process::Command;

use serde_json::Value;

#[test]
fn types_json_lists_every_registered_type() {
	let json = run_json(&["types", "--json"]);
	let rows = json.as_array().expect("array of types");
	assert!(rows.len() > 250, "expected the full catalog, got {}", rows.len());
	assert!(
		rows.iter()
			.any(|row| row["name"] == "TransactionEnvelope" && row["shape"] == "union")
	);
	assert!(rows.iter().any(|row| row["name"] == "Hash" && row["shape"] == "opaque"));
}

#[test]
fn types_filter_is_case_insensitive() {
	let json = run_json(&["types", "--filter", "scval", "--json"]);
	let names: Vec<&str> = json
		.as_array()
		.expect("array of types")
		.iter()
		.filter_map(|row| row["name"].as_str())
		.collect();
	assert_eq!(names, vec!["ScVal", "ScValType"]);
}

#[test]
fn schema_json_describes_union_arms() {
	let json = run_json(&["schema", "memo", "--json"]);
	assert_eq!(json["name"], "Memo");
	assert_eq!(json["shape"], "union");
	assert_eq!(json["discriminant"], "MemoType");
	let arms = json["arms"].as_array().expect("arms");
	assert_eq!(arms.len(), 5);
	assert_eq!(arms[0]["variant"], "None");
	assert!(arms[0]["payload"].is_null());
	assert!(arms[1]["payload"].as_str().is_some_and(|ty| ty.starts_with("StringM")));
}

#[test]
fn schema_json_describes_struct_fields_and_enum_members() {
	let json = run_json(&["schema", "Price", "--json"]);
	assert_eq!(json["shape"], "struct");
	assert_eq!(json["fields"][0]["name"], "n");
	assert_eq!(json["fields"][0]["type"], "i32");

	let json = run_json(&["schema", "AssetType", "--json"]);
	assert_eq!(json["shape"], "enum");
	assert_eq!(json["members"].as_array().map(Vec::len), Some(4));
}

#[test]
fn unknown_type_name_is_an_error() {
	let output = Command::new(env!("CARGO_BIN_EXE_ledgerxdr"))
		.args(["schema", "NoSuchType"])
		.output()
		.expect("command executes");
	assert_eq!(output.status.code(), Some(1));
	assert_eq!(String::from_utf8_lossy(&output.stderr).trim(), "error: unknown type name: NoSuchType");
}

fn run_json(args: &[&str]) -> Value {
	let output = Command::new(env!("CARGO_BIN_EXE_ledgerxdr"))
		.args(args)
		.output()
		.expect("command executes");
	assert!(
		output.status.success(),
		"command failed: {}",
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}
