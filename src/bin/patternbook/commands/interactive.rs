//! `patternbook interactive` command

use std::io;

use anyhow::{bail, Result};

use crate::cli::InteractiveArgs;
use patternbook::core::{CapabilityKind, Catalog};
use patternbook::ops::run_interactive;
use patternbook::util::config::Config;

pub fn execute(args: InteractiveArgs, config: &Config) -> Result<()> {
    let kind: CapabilityKind = match args.kind {
        Some(kind) => kind.parse()?,
        None => match config.default_kind() {
            Some(kind) => kind,
            None => bail!(
                "no capability kind given\n\
                 Pass one (e.g. `patternbook interactive gui`) or set `interactive.default_kind` in the config"
            ),
        },
    };

    let catalog = Catalog::builtin()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_interactive(&catalog, kind, config, stdin.lock(), stdout.lock())?;

    Ok(())
}
