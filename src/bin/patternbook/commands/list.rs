//! `patternbook list` command

use anyhow::Result;

use crate::cli::ListArgs;
use patternbook::core::Catalog;

pub fn execute(args: ListArgs) -> Result<()> {
    let catalog = Catalog::builtin()?;
    let summaries = catalog.summaries();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("Capabilities:");
    println!();

    for summary in summaries {
        let variants: Vec<&str> = summary.variants.iter().map(|v| v.as_str()).collect();
        println!("  {} - {}", summary.kind, summary.description);
        println!("    Variants: {}", variants.join(", "));
        println!();
    }

    Ok(())
}
