//! Rover state and instructions.

use crate::error::RoverError;
use glam::I64Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A compass heading on the plateau grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// A quarter turn, applied in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// Counter-clockwise (`L`).
    Left,
    /// Clockwise (`R`).
    Right,
}

/// Heading transition table, indexed by `[Direction as usize][Turn as usize]`.
const TURN_TABLE: [[Direction; 2]; 4] = [
    // North
    [Direction::West, Direction::East],
    // East
    [Direction::North, Direction::South],
    // South
    [Direction::East, Direction::West],
    // West
    [Direction::South, Direction::North],
];

impl Direction {
    /// All headings in clockwise order starting at North.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Resolves a single-letter heading code (`N`, `E`, `S`, `W`).
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// The single-letter code used in position strings.
    pub fn code(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Unit grid step taken by a `Move` while facing this way.
    pub fn step(self) -> I64Vec2 {
        match self {
            Self::North => I64Vec2::Y,
            Self::East => I64Vec2::X,
            Self::South => I64Vec2::NEG_Y,
            Self::West => I64Vec2::NEG_X,
        }
    }

    /// Heading after a quarter turn.
    pub fn turned(self, turn: Turn) -> Self {
        TURN_TABLE[self as usize][turn as usize]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The mutable state of a single rover.
///
/// The position is not required to lie on the plateau: a rover may be
/// placed anywhere, only moves are bounds-checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoverState {
    /// Grid cell currently occupied.
    pub position: I64Vec2,
    /// Current heading.
    pub direction: Direction,
}

impl RoverState {
    pub fn new(x: i64, y: i64, direction: Direction) -> Self {
        Self {
            position: I64Vec2::new(x, y),
            direction,
        }
    }

    /// Rotates the rover a quarter turn without changing its cell.
    pub fn turn(&mut self, turn: Turn) {
        self.direction = self.direction.turned(turn);
    }

    /// The cell one step ahead of the rover, or `None` if it is not
    /// representable.
    pub fn ahead(&self) -> Option<I64Vec2> {
        let step = self.direction.step();
        Some(I64Vec2::new(
            self.position.x.checked_add(step.x)?,
            self.position.y.checked_add(step.y)?,
        ))
    }
}

impl fmt::Display for RoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.position.x, self.position.y, self.direction
        )
    }
}

/// Parses the strict `"x y D"` form: ASCII digits, one space, ASCII digits,
/// one space, one heading letter. Nothing else is allowed on the line.
impl FromStr for RoverState {
    type Err = RoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split(' ');
        let (Some(x), Some(y), Some(d), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(RoverError::InvalidRoverRecord);
        };

        let mut code = d.chars();
        let direction = match (code.next(), code.next()) {
            (Some(c), None) => Direction::from_code(c).ok_or(RoverError::InvalidRoverRecord)?,
            _ => return Err(RoverError::InvalidRoverRecord),
        };

        Ok(Self::new(
            parse_coordinate(x)?,
            parse_coordinate(y)?,
            direction,
        ))
    }
}

fn parse_coordinate(digits: &str) -> Result<i64, RoverError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RoverError::InvalidRoverRecord);
    }
    digits.parse().map_err(|_| RoverError::InvalidRoverRecord)
}

/// Operations a rover can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Quarter turn in place (`L` / `R`).
    Turn(Turn),
    /// Advance one cell in the current heading (`M`).
    Move,
    /// No-op. Symbol has no registered meaning.
    Ignore,
}
