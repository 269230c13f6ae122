//! `polyslot` command line.
//!
//! Replays the dispatch runs and exposes field access over a demo registry.

mod model;
mod runs;
mod table;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polyslot::RegistryConfig;
use tracing::info;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "polyslot")]
#[command(about = "Index-addressed field access and closed-set dispatch runs")]
struct Args {
	/// Registry config file (TOML)
	#[arg(short, long, value_name = "PATH", global = true)]
	config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Two-record field walk
	Poc,
	/// Dispatch every sample alternative
	Variants,
	/// Field and row counts of the demo tables
	Tables {
		/// Erase this user row before counting
		#[arg(long, value_name = "KEY")]
		drop_user: Option<u64>,
	},
	/// List the demo registry's slots
	Describe,
	/// Read a field with its kind
	Get { object: usize, field: usize },
	/// Write a field, then print it
	Set { object: usize, field: usize, value: String },
	/// Print a field as text
	Print { object: usize, field: usize },
}

fn main() -> Result<()> {
	let args = Args::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if args.verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::INFO
		})
		.with_writer(io::stderr)
		.finish();

	tracing::subscriber::set_global_default(subscriber)?;

	let config = match &args.config {
		Some(path) => RegistryConfig::load(path)
			.with_context(|| format!("loading config from {}", path.display()))?,
		None => RegistryConfig::default(),
	};
	info!(policy = ?config.unresolved, command = ?args.command, "running");

	let stdout = io::stdout();
	let mut out = stdout.lock();
	match args.command {
		Command::Poc => runs::poc(config, &mut out)?,
		Command::Variants => runs::variants(&mut out)?,
		Command::Tables { drop_user } => runs::tables(config, drop_user, &mut out)?,
		Command::Describe => runs::describe(config, &mut out)?,
		Command::Get { object, field } => runs::get(config, object, field, &mut out)?,
		Command::Set { object, field, value } => {
			runs::set(config, object, field, &value, &mut out)?
		}
		Command::Print { object, field } => runs::print(config, object, field, &mut out)?,
	}
	out.flush()?;
	Ok(())
}
