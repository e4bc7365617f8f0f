//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// patternbook - creational patterns and SOLID principles, one provider at a time
#[derive(Parser)]
#[command(name = "patternbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use this config file instead of the global and project ones
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List capability kinds and their variants
    List(ListArgs),

    /// Resolve a provider and run its use case
    Run(RunArgs),

    /// Run a SOLID principle demonstration
    Principle(PrincipleArgs),

    /// Pick variants from a prompt until the exit token
    Interactive(InteractiveArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct RunArgs {
    /// Capability kind (gui, logistics, creator, dialog, payment, shipping, database, cloud)
    pub kind: String,

    /// Variant key (see `patternbook list`)
    pub variant: String,

    /// Print the effect trace as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct PrincipleArgs {
    /// Principle to demonstrate (srp, ocp, lsp, isp, dip)
    pub principle: String,

    /// Run the violating design instead of the corrected one
    #[arg(long)]
    pub violation: bool,

    /// Print the effect trace as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct InteractiveArgs {
    /// Capability kind (defaults to `interactive.default_kind` from config)
    pub kind: Option<String>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
