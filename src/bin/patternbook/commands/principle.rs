//! `patternbook principle` command
//!
//! A violation stage that ends in an unsupported operation is the expected
//! outcome; it is reported on stdout after the effects and exits 0.

use anyhow::{Context, Result};
use serde_json::json;

use crate::cli::PrincipleArgs;
use patternbook::core::{Catalog, Console, EffectSink, Trace};
use patternbook::principles::{self, Principle, PrincipleError, Stage};

pub fn execute(args: PrincipleArgs) -> Result<()> {
    let principle: Principle = args.principle.parse()?;
    let stage = if args.violation {
        Stage::Violation
    } else {
        Stage::Corrected
    };
    let catalog = Catalog::builtin()?;

    if args.json {
        let mut trace = Trace::new();
        let violation = demonstrate(principle, stage, &catalog, &mut trace)?;

        let output = json!({
            "principle": principle,
            "title": principle.title(),
            "stage": stage,
            "effects": trace,
            "violation": violation.map(|err| err.to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} ({})", principle.title(), stage);
    let mut console = Console::stdout();
    let violation = demonstrate(principle, stage, &catalog, &mut console)?;
    console.finish().context("failed to write to stdout")?;

    if let Some(err) = violation {
        println!("Violation: {}", err);
    }

    Ok(())
}

/// Run the demonstration, turning an expected violation into a value.
fn demonstrate(
    principle: Principle,
    stage: Stage,
    catalog: &Catalog,
    sink: &mut dyn EffectSink,
) -> Result<Option<principles::UnsupportedOperation>> {
    match principles::run(principle, stage, catalog, sink) {
        Ok(()) => Ok(None),
        Err(PrincipleError::Unsupported(err)) if stage == Stage::Violation => Ok(Some(err)),
        Err(e) => Err(e).with_context(|| format!("{} {} stage failed", principle, stage)),
    }
}
