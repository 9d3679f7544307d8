//! Headless trace output for `bubbletrace trace`.

use std::io::{self, Write};

use clap::ValueEnum;

use crate::trace::{Step, TraceSummary};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    /// One readable line per step plus a summary
    #[default]
    Text,
    /// One JSON object per step
    Json,
}

/// Write every step of `steps` to `out`.
pub fn write_trace<W: Write>(out: &mut W, steps: &[Step], format: DumpFormat) -> io::Result<()> {
    match format {
        DumpFormat::Text => {
            for (idx, step) in steps.iter().enumerate() {
                writeln!(out, "{}", text_line(idx, step))?;
            }
            let summary = TraceSummary::of(steps);
            writeln!(
                out,
                "-- {} steps: {} compares, {} swaps, {} sorted boundaries",
                summary.steps, summary.compares, summary.swaps, summary.boundaries
            )?;
        }
        DumpFormat::Json => {
            for step in steps {
                let line = serde_json::to_string(step).map_err(io::Error::other)?;
                writeln!(out, "{}", line)?;
            }
        }
    }
    out.flush()
}

fn text_line(idx: usize, step: &Step) -> String {
    format!(
        "#{:<4} {:<8} {:<12} {:?}  {}",
        idx,
        step.kind.label(),
        format!("{:?}", step.indices),
        step.array,
        step.narrative
    )
}
