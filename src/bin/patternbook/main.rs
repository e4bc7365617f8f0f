//! patternbook CLI - creational patterns and SOLID principles

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use patternbook::resolver::ResolveError;
use patternbook::util::config::Config;
use patternbook::util::diagnostic::{self, suggestions, Diagnostic};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && std::io::stderr().is_terminal();

    // Logs go to stderr so stdout carries only effects
    let filter = if cli.verbose {
        EnvFilter::new("patternbook=debug")
    } else {
        EnvFilter::new("patternbook=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let config = match commands::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let mut diag =
                Diagnostic::error(format!("{:#}", e)).with_suggestion(suggestions::CHECK_CONFIG);
            if let Some(path) = &cli.config {
                diag = diag.with_location(path);
            }
            diagnostic::emit(&diag, color);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli.command, &config) {
        match e.downcast_ref::<ResolveError>() {
            Some(resolve) => diagnostic::emit(&resolve.to_diagnostic(), color),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::List(args) => commands::list::execute(args),
        Commands::Run(args) => commands::run::execute(args),
        Commands::Principle(args) => commands::principle::execute(args),
        Commands::Interactive(args) => commands::interactive::execute(args, config),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
