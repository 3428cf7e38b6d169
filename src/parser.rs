//! Mission text parser and validator.
//!
//! Input is one plateau line (`"W H"`) followed by pairs of lines per rover:
//! a position (`"x y D"`) and an instruction string over `L`, `R`, `M`.
//! Validation stops at the first failing rule.

use crate::error::RoverError;
use crate::plateau::Plateau;
use crate::rover::RoverState;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One rover's raw input lines, exactly as they appeared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverRecord {
    pub position: String,
    /// Instruction line with its original whitespace kept.
    pub instructions: String,
}

/// A validated mission: the plateau and every rover in input order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub plateau: Plateau,
    pub rovers: Vec<RoverRecord>,
}

/// Parses and validates a complete mission description.
///
/// Leading and trailing whitespace of the whole input is discarded; lines
/// in between are taken as-is, so a blank line between rovers counts as a
/// (malformed) record line.
///
/// Starting positions are not checked against the plateau.
pub fn parse_input(input: &str) -> Result<Mission, RoverError> {
    let mut lines = input.trim().split('\n');

    let plateau = parse_plateau(lines.next().unwrap_or_default())?;

    let record_lines: Vec<&str> = lines.collect();
    if record_lines.len() % 2 != 0 {
        return Err(RoverError::MissingInstructions);
    }

    let rovers = record_lines
        .chunks_exact(2)
        .map(|pair| {
            let (position, instructions) = (pair[0], pair[1]);
            if !is_position_line(position) || !is_instruction_line(instructions) {
                return Err(RoverError::InvalidRoverRecord);
            }
            Ok(RoverRecord {
                position: position.to_owned(),
                instructions: instructions.to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        max_x = plateau.max_x(),
        max_y = plateau.max_y(),
        rovers = rovers.len(),
        "mission parsed"
    );

    Ok(Mission { plateau, rovers })
}

/// Parses `"W H"`: exactly two whitespace-separated non-negative integers.
pub fn parse_plateau(line: &str) -> Result<Plateau, RoverError> {
    let mut fields = line.split_whitespace();
    let (Some(w), Some(h), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(RoverError::InvalidPlateauSize);
    };

    let dim = |s: &str| match s.parse::<i64>() {
        Ok(v) if v >= 0 => Ok(v),
        _ => Err(RoverError::InvalidPlateauSize),
    };

    Ok(Plateau::new(dim(w)?, dim(h)?))
}

/// True for `digits SP digits SP [NESW]` and nothing else.
pub fn is_position_line(line: &str) -> bool {
    line.parse::<RoverState>().is_ok()
}

/// True for a line that starts with `L`, `R` or `M` and otherwise holds only
/// those letters and whitespace.
pub fn is_instruction_line(line: &str) -> bool {
    let mut chars = line.chars();
    matches!(chars.next(), Some('L' | 'R' | 'M'))
        && chars.all(|c| matches!(c, 'L' | 'R' | 'M') || c.is_whitespace())
}
