//! `patternbook run` command
//!
//! Resolves one provider and runs the use case of its kind.

use anyhow::{Context, Result};
use serde_json::json;

use crate::cli::RunArgs;
use patternbook::core::{CapabilityKind, Catalog, Console, Trace, VariantKey};
use patternbook::ops::run_use_case;

pub fn execute(args: RunArgs) -> Result<()> {
    let kind: CapabilityKind = args.kind.parse()?;
    let catalog = Catalog::builtin()?;

    if args.json {
        let mut trace = Trace::new();
        run_use_case(&catalog, kind, &args.variant, &mut trace)?;

        let output = json!({
            "kind": kind,
            "variant": VariantKey::new(&args.variant),
            "effects": trace,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let mut console = Console::stdout();
    run_use_case(&catalog, kind, &args.variant, &mut console)?;
    console.finish().context("failed to write to stdout")?;

    Ok(())
}
