use anyhow::{Context, Result};
use tracing::info;
use zigzag_core::{EphemerisGenerator, summarize, write_json};

use crate::cli::GenerateArgs;
use crate::config::Scenario;

/// Generate a tablet and write it as JSON.
pub fn run(args: GenerateArgs) -> Result<()> {
    let scenario = Scenario::resolve(&args.scenario, args.output.as_deref())?;
    info!(
        start = %scenario.start,
        initial_phase = scenario.initial_phase,
        num_months = scenario.num_months,
        threshold = scenario.threshold,
        "scenario resolved"
    );

    let generator = EphemerisGenerator::new(scenario.start, scenario.initial_phase)?;
    let records = generator
        .generate(scenario.num_months, scenario.threshold)
        .context("tablet generation failed")?;

    let summary = summarize(&records);
    info!(
        total = summary.total,
        south = summary.south,
        north = summary.north,
        first = ?summary.first.map(|d| d.to_string()),
        last = ?summary.last.map(|d| d.to_string()),
        "tablet summary"
    );

    write_json(&scenario.output, &records)
        .with_context(|| format!("failed to write {}", scenario.output.display()))?;

    println!(
        "{} potential eclipses found and written to {}",
        summary.total,
        scenario.output.display()
    );
    Ok(())
}
