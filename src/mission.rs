//! End-to-end mission pipeline: parse, simulate every rover, render.

use crate::error::{CliError, RoverError};
use crate::interpreter::RoverInterpreter;
use crate::parser::{Mission, parse_input};
use crate::plateau::RoverReport;
use crate::rover::RoverState;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// How rover results are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum OutputFormat {
    /// One `"x y D"` line per rover.
    #[default]
    Text,
    /// A JSON array of rover reports.
    Json,
}

#[derive(Serialize)]
struct ErrorReport {
    error: String,
}

/// Simulates every rover of `mission` in input order.
///
/// Rovers do not interact; each starts from its own record and shares only
/// the plateau.
pub fn simulate(
    mission: &Mission,
    interpreter: &RoverInterpreter,
) -> Result<Vec<RoverReport>, RoverError> {
    mission
        .rovers
        .iter()
        .map(|record| {
            let start: RoverState = record.position.parse()?;
            Ok(interpreter.run(start, &record.instructions, &mission.plateau))
        })
        .collect()
}

/// Runs a full mission from raw text and writes the result to `out`.
///
/// A validation failure is written to `out` as a single message and no
/// rover output is produced. Only I/O and encoding failures are returned.
pub fn run_mission<W: Write>(
    input: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let interpreter = RoverInterpreter::standard();
    let outcome = parse_input(input).and_then(|mission| simulate(&mission, &interpreter));

    match outcome {
        Ok(reports) => write_reports(&reports, format, out),
        Err(err) => write_error(err, format, out),
    }
}

/// Writes rover reports in the requested format.
pub fn write_reports<W: Write>(
    reports: &[RoverReport],
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                writeln!(out, "{}", report.final_state)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, reports)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_error<W: Write>(
    err: RoverError,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => writeln!(out, "{err}")?,
        OutputFormat::Json => {
            serde_json::to_writer(
                &mut *out,
                &ErrorReport {
                    error: err.to_string(),
                },
            )?;
            writeln!(out)?;
        }
    }
    Ok(())
}
