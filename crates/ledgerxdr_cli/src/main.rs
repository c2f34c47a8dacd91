#![allow(missing_docs)]

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "ledgerxdr", about = "Ledger XDR inspection tools")]
struct Cli {
	/// Raise log verbosity on stderr (repeat for trace).
	#[arg(short, long, global = true, action = ArgAction::Count)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// List registered schema types.
	Types(cmd::types::Args),
	/// Show the declared layout of one type.
	Schema(cmd::schema::Args),
	/// Decode one XDR value.
	Decode(cmd::decode::Args),
	/// Encode one value from JSON.
	Encode(cmd::encode::Args),
	/// Decode every record of a record-marked stream.
	Frames(cmd::frames::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> ledgerxdr::xdr::Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match cli.command {
		Commands::Types(args) => cmd::types::run(args),
		Commands::Schema(args) => cmd::schema::run(args),
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Encode(args) => cmd::encode::run(args),
		Commands::Frames(args) => cmd::frames::run(args),
	}
}

fn init_tracing(verbose: u8) {
	let default_level = match verbose {
		0 => "warn",
		1 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
