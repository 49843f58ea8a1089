mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmd::{cmd_build, cmd_plan, cmd_var, cmd_version};
use output::OutputFormat;

/// blogc-run - Incremental site builds with blogc
#[derive(Parser)]
#[command(name = "blogc-run")]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build every outdated target in a manifest
  Build {
    /// Path to the build manifest
    #[arg(default_value = "blogc.json")]
    manifest: PathBuf,

    /// Variable definition overriding the manifest, may be repeated
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
    defines: Vec<String>,
  },

  /// Show which targets in a manifest are outdated, without building
  Plan {
    /// Path to the build manifest
    #[arg(default_value = "blogc.json")]
    manifest: PathBuf,

    /// Variable definition overriding the manifest, may be repeated
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
    defines: Vec<String>,

    /// Also list up-to-date targets
    #[arg(short, long)]
    verbose: bool,

    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
  },

  /// Print a variable as blogc evaluates it for the given inputs
  Var {
    /// Variable name
    name: String,

    /// Input files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Evaluate in listing mode
    #[arg(short, long)]
    listing: bool,

    /// Listing entry file (listing mode only)
    #[arg(short, long)]
    entry: Option<PathBuf>,

    /// Global variable definition, may be repeated
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
    defines: Vec<String>,

    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
  },

  /// Show the blogc binary in use
  Version {
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
  },
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let cli = Cli::parse();

  match cli.command {
    Commands::Build { manifest, defines } => cmd_build(&manifest, &defines),
    Commands::Plan {
      manifest,
      defines,
      verbose,
      output,
    } => cmd_plan(&manifest, &defines, verbose, output),
    Commands::Var {
      name,
      inputs,
      listing,
      entry,
      defines,
      output,
    } => cmd_var(&name, inputs, listing, entry, defines, output),
    Commands::Version { output } => cmd_version(output),
  }
}
