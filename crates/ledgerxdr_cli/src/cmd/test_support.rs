use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::sync::OnceLock;

use ledgerxdr_testkit::target_dir as workspace_target_dir;

static LEDGERXDR_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn run_ledgerxdr(args: &[&str]) -> Output {
	Command::new(ledgerxdr_bin()).args(args).output().expect("ledgerxdr command executes")
}

pub(crate) fn run_ledgerxdr_stdin(args: &[&str], stdin: &[u8]) -> Output {
	let mut child = Command::new(ledgerxdr_bin())
		.args(args)
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("ledgerxdr command spawns");
	child.stdin.take().expect("stdin piped").write_all(stdin).expect("stdin written");
	child.wait_with_output().expect("ledgerxdr command completes")
}

pub(crate) fn run_ledgerxdr_json(args: &[&str]) -> serde_json::Value {
	let output = run_ledgerxdr(args);
	assert!(
		output.status.success(),
		"ledgerxdr command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn ledgerxdr_bin() -> &'static PathBuf {
	LEDGERXDR_BIN.get_or_init(resolve_ledgerxdr_bin)
}

fn resolve_ledgerxdr_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_ledgerxdr") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "ledgerxdr.exe" } else { "ledgerxdr" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "ledgerxdr"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build ledgerxdr binary at {}", bin.display());

	bin
}
