use std::io::{self, Write};

use anyhow::Result;
use zigzag_core::{EphemerisGenerator, classify, validate_threshold};

use crate::cli::TableArgs;
use crate::config::Scenario;

/// Print the month-by-month tablet to stdout.
pub fn run(args: TableArgs) -> Result<()> {
    let scenario = Scenario::resolve(&args.scenario, None)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(&mut out, &scenario, args.flagged_only)?;
    out.flush()?;
    Ok(())
}

fn write_table<W: Write>(out: &mut W, scenario: &Scenario, flagged_only: bool) -> Result<()> {
    let generator = EphemerisGenerator::new(scenario.start, scenario.initial_phase)?;
    validate_threshold(scenario.threshold)?;

    writeln!(
        out,
        "{:>6}  {:<10}  {:>8}  {:>8}  {:<8}  type",
        "month", "date", "phase", "distance", "eclipse"
    )?;
    for state in generator.steps(scenario.num_months) {
        let state = state?;
        let node = classify(&state.distances, scenario.threshold);
        if flagged_only && node.is_none() {
            continue;
        }
        writeln!(
            out,
            "{:>6}  {:<10}  {:>8.5}  {:>8.5}  {:<8}  {}",
            state.month_index,
            state.date,
            state.normalized_phase,
            state.distances.min(),
            if node.is_some() { "POSSIBLE" } else { "NO" },
            node.map_or("N/A", |n| n.label()),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use zigzag_core::CivilDate;

    fn scenario(num_months: usize) -> Scenario {
        Scenario {
            start: CivilDate::new(2024, 1, 11).unwrap(),
            initial_phase: 0.48,
            num_months,
            threshold: 0.045,
            output: PathBuf::from("unused.json"),
        }
    }

    fn render(num_months: usize, flagged_only: bool) -> String {
        let mut buf = Vec::new();
        write_table(&mut buf, &scenario(num_months), flagged_only).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn lists_every_month() {
        let text = render(7, false);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[1].contains("2024-01-11"));
        assert!(lines[1].contains("South Node Eclipse (Descending)"));
        assert!(lines[2].contains("2024-02-09"));
        assert!(lines[2].contains("NO"));
        assert!(lines[2].ends_with("N/A"));
        assert!(lines[7].contains("North Node Eclipse (Ascending)"));
    }

    #[test]
    fn flagged_only_matches_generate() {
        let text = render(2400, true);
        assert_eq!(text.lines().count(), 1 + 430);
    }

    #[test]
    fn rejects_bad_threshold() {
        let mut s = scenario(3);
        s.threshold = 0.0;
        assert!(write_table(&mut Vec::new(), &s, false).is_err());
    }
}
