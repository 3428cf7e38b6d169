use crate::rover::RoverState;
use glam::I64Vec2;
use serde::{Deserialize, Serialize};

/// The rectangular grid rovers drive on.
///
/// The lower-left corner is always `(0, 0)`; `max` is the inclusive
/// upper-right corner. Shared read-only by every rover in a mission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plateau {
    pub max: I64Vec2,
}

impl Plateau {
    pub fn new(max_x: i64, max_y: i64) -> Self {
        Self {
            max: I64Vec2::new(max_x, max_y),
        }
    }

    pub fn max_x(&self) -> i64 {
        self.max.x
    }

    pub fn max_y(&self) -> i64 {
        self.max.y
    }

    /// Returns true if `pos` lies within `[0, max_x] x [0, max_y]`.
    pub fn contains(&self, pos: I64Vec2) -> bool {
        pos.cmpge(I64Vec2::ZERO).all() && pos.cmple(self.max).all()
    }
}

/// Outcome of driving one rover through its instruction string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverReport {
    /// State the rover was placed in.
    pub initial: RoverState,

    /// State after the last instruction.
    pub final_state: RoverState,

    /// Move instructions that were committed.
    pub moves: usize,

    /// Move instructions dropped because the target cell was off the plateau.
    pub blocked_moves: usize,
}
