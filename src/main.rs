use anyhow::{Context, Result};
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use qatch::QatchError;
use qatch::config::{LoadedManifest, load_manifest};
use qatch::patch::run as run_patches;
use qatch::target::{create_backup, read_target, write_target};

#[derive(Parser)]
#[command(name = "qatch")]
#[command(
	author,
	version,
	about = "Quick patch tool: find and replace hex byte patterns in binary files"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Target file to patch
	#[arg(short, long, value_name = "FILE")]
	target: Option<PathBuf>,

	/// Create a backup with a .BAK extension before patching
	#[arg(short, long)]
	backup: bool,

	/// Read find/replace pairs (and optionally target and backup) from a TOML manifest
	#[arg(short, long, value_name = "TOML")]
	manifest: Option<PathBuf>,

	/// Find pattern, e.g. "48 8B ?? 05" (pairs with the next --replace)
	#[arg(short, long, value_name = "HEX")]
	find: Vec<String>,

	/// Replace pattern for the preceding --find
	#[arg(short, long, value_name = "HEX")]
	replace: Vec<String>,

	/// Combined find and replace pattern
	#[arg(long, visible_alias = "fr", value_name = "FIND:REPLACE")]
	find_replace: Vec<String>,

	/// Log verbosity (logs go to stderr)
	#[arg(long, value_enum, value_name = "LEVEL", default_value_t = LogLevel::Warn)]
	log_level: LogLevel,
}

#[derive(Subcommand)]
enum Commands {
	/// Patch manifest commands
	Manifest {
		#[command(subcommand)]
		action: ManifestAction,
	},
}

#[derive(Subcommand)]
enum ManifestAction {
	/// Display a manifest's settings and patches
	Show {
		/// Manifest file
		path: PathBuf,
	},
	/// Check every pattern in a manifest without touching any file
	Validate {
		/// Manifest file
		path: PathBuf,
	},
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
	Off,
	Error,
	Warn,
	Info,
	Debug,
	Trace,
}

impl From<LogLevel> for log::LevelFilter {
	fn from(level: LogLevel) -> Self {
		match level {
			LogLevel::Off => log::LevelFilter::Off,
			LogLevel::Error => log::LevelFilter::Error,
			LogLevel::Warn => log::LevelFilter::Warn,
			LogLevel::Info => log::LevelFilter::Info,
			LogLevel::Debug => log::LevelFilter::Debug,
			LogLevel::Trace => log::LevelFilter::Trace,
		}
	}
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let matches = Cli::command().get_matches();
	let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

	env_logger::Builder::new()
		.filter_level(cli.log_level.into())
		.format_timestamp(None)
		.init();

	// Handle subcommands
	if let Some(command) = cli.command {
		return match command {
			Commands::Manifest { action } => match action {
				ManifestAction::Show { path } => handle_manifest_show(&path),
				ManifestAction::Validate { path } => handle_manifest_validate(&path),
			},
		};
	}

	let pairs = collect_cli_pairs(&matches)?;
	handle_patch(cli.target, cli.backup, cli.manifest.as_deref(), pairs)
}

/// One pattern-bearing flag, tagged with its position on the command line.
enum PatternArg {
	Find(String),
	Replace(String),
	Combined(String),
}

/// Assemble find/replace pairs in command-line order.
///
/// Each `--find` pairs with the next `--replace`; `--find-replace` splits on
/// its first `:`.
fn collect_cli_pairs(matches: &ArgMatches) -> Result<Vec<(String, String)>> {
	let mut args: Vec<(usize, PatternArg)> = Vec::new();
	args.extend(indexed_values(matches, "find", PatternArg::Find));
	args.extend(indexed_values(matches, "replace", PatternArg::Replace));
	args.extend(indexed_values(
		matches,
		"find_replace",
		PatternArg::Combined,
	));
	args.sort_by_key(|(index, _)| *index);

	let mut pairs = Vec::new();
	let mut pending_find: Option<String> = None;

	for (_, arg) in args {
		match arg {
			PatternArg::Find(find) => {
				if let Some(previous) = pending_find.replace(find) {
					anyhow::bail!("--find {previous} requires a corresponding --replace");
				}
			}
			PatternArg::Replace(replace) => {
				let find = pending_find
					.take()
					.ok_or_else(|| anyhow::anyhow!("--replace {replace} has no preceding --find"))?;
				pairs.push((find, replace));
			}
			PatternArg::Combined(combined) => {
				let (find, replace) = combined.split_once(':').ok_or_else(|| {
					anyhow::anyhow!(
						"Invalid find-replace format: {combined}. Use <find>:<replace>"
					)
				})?;
				pairs.push((find.to_string(), replace.to_string()));
			}
		}
	}

	if let Some(find) = pending_find {
		anyhow::bail!("--find {find} requires a corresponding --replace");
	}

	Ok(pairs)
}

fn indexed_values(
	matches: &ArgMatches,
	id: &str,
	wrap: fn(String) -> PatternArg,
) -> Vec<(usize, PatternArg)> {
	match (matches.indices_of(id), matches.get_many::<String>(id)) {
		(Some(indices), Some(values)) => indices.zip(values.cloned().map(wrap)).collect(),
		_ => Vec::new(),
	}
}

fn handle_patch(
	target: Option<PathBuf>,
	backup: bool,
	manifest_path: Option<&Path>,
	cli_pairs: Vec<(String, String)>,
) -> Result<ExitCode> {
	let manifest = manifest_path
		.map(|path| {
			load_manifest(path)
				.with_context(|| format!("Failed to load manifest {}", path.display()))
		})
		.transpose()?;

	let target = target
		.or_else(|| manifest.as_ref().and_then(LoadedManifest::target_path))
		.ok_or_else(|| anyhow::anyhow!("Target path is required"))?;
	let backup = backup || manifest.as_ref().is_some_and(|m| m.manifest.backup);

	// Manifest patches run before command-line ones
	let mut pairs: Vec<(String, String)> = manifest
		.iter()
		.flat_map(|m| m.manifest.pairs())
		.map(|(find, replace)| (find.to_string(), replace.to_string()))
		.collect();
	pairs.extend(cli_pairs);

	if pairs.is_empty() {
		anyhow::bail!("At least one find-replace pattern required");
	}

	if !target.is_file() {
		return Err(QatchError::TargetNotFound { path: target }.into());
	}

	if backup {
		let backup_path = create_backup(&target).context("Failed to create backup")?;
		println!("Created backup: {}", backup_path.display());
	}

	let mut data = read_target(&target)?;
	log::debug!("Read {} bytes from {}", data.len(), target.display());

	let outcome = run_patches(
		&mut data,
		pairs.iter().map(|(find, replace)| (find.as_str(), replace.as_str())),
	);
	for report in &outcome.reports {
		println!("{report}");
	}

	if outcome.modified {
		write_target(&target, &data)?;
		println!("File successfully patched");
	} else {
		println!("No changes made");
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_manifest_show(path: &Path) -> Result<ExitCode> {
	let loaded = load_manifest(path)
		.with_context(|| format!("Failed to load manifest {}", path.display()))?;
	let manifest = &loaded.manifest;

	println!("# Source: {}", loaded.path.display());
	match loaded.target_path() {
		Some(target) => println!("# target: {}", target.display()),
		None => println!("# target: (none, use --target)"),
	}
	println!("# backup: {}", manifest.backup);
	println!("# patches: {}", manifest.patches.len());
	println!();

	for (i, entry) in manifest.patches.iter().enumerate() {
		println!("  Patch {}:", i + 1);
		if let Some(ref description) = entry.description {
			println!("    description: {}", description);
		}
		println!("    find: {}", entry.find);
		println!("    replace: {}", entry.replace);
		println!();
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_manifest_validate(path: &Path) -> Result<ExitCode> {
	let loaded = match load_manifest(path) {
		Ok(loaded) => loaded,
		Err(e) => {
			eprintln!("Manifest error: {}", e);
			return Ok(ExitCode::FAILURE);
		}
	};

	let invalid = loaded.manifest.invalid_patches();
	if invalid.is_empty() {
		println!(
			"All patches are valid: {} ({} patches)",
			loaded.path.display(),
			loaded.manifest.patches.len()
		);
		return Ok(ExitCode::SUCCESS);
	}

	for (i, entry, err) in &invalid {
		eprintln!(
			"  Patch {}: {}:{}: {}",
			i + 1,
			entry.find,
			entry.replace,
			err
		);
	}
	eprintln!(
		"{} of {} patches are invalid",
		invalid.len(),
		loaded.manifest.patches.len()
	);
	Ok(ExitCode::FAILURE)
}
