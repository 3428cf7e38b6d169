//! Error types for mission parsing and the command-line front end.

use thiserror::Error;

/// A mission input that failed validation.
///
/// Messages are user-facing and printed verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RoverError {
    /// Plateau line missing, non-numeric, wrong arity, or negative.
    #[error("invalid plateau size")]
    InvalidPlateauSize,

    /// Odd number of rover-data lines after the plateau line.
    #[error("missing rover instructions")]
    MissingInstructions,

    /// A position or instruction line does not match its format.
    #[error("invalid rover position or instructions")]
    InvalidRoverRecord,
}

/// Failures of a full run that are not about the mission text itself.
///
/// Validation failures are reported in the run's output, not through this type.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}
