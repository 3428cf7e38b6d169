//! Interpreter that drives a [`RoverState`] across a [`Plateau`].
//!
//! The entry point is [`RoverInterpreter`]. Register symbol-to-instruction
//! mappings via [`RoverInterpreter::set_op`] or use
//! [`RoverInterpreter::standard`], then call [`RoverInterpreter::run`] with a
//! starting state and an instruction string.

use crate::error::RoverError;
use crate::plateau::{Plateau, RoverReport};
use crate::rover::{Instruction, RoverState, Turn};
use tracing::{debug, trace, warn};

/// Interprets instruction strings against a plateau.
#[derive(Clone, Debug, Default)]
pub struct RoverInterpreter {
    op_map: Vec<Instruction>,
}

impl RoverInterpreter {
    /// Creates an interpreter with an empty symbol map.
    ///
    /// Every symbol resolves to [`Instruction::Ignore`] until registered with
    /// [`set_op`](Self::set_op).
    pub fn new() -> Self {
        Self { op_map: Vec::new() }
    }

    /// Creates an interpreter with the conventional `L`, `R`, `M` mapping.
    pub fn standard() -> Self {
        let mut interpreter = Self::new();
        interpreter.populate_standard_symbols();
        interpreter
    }

    /// Replaces the entire symbol-to-instruction map in one step (builder pattern).
    ///
    /// `map` is indexed by ASCII byte value. Any symbol outside the slice is
    /// treated as [`Instruction::Ignore`].
    pub fn with_map(mut self, map: Vec<Instruction>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`Instruction`] to an ASCII symbol.
    ///
    /// The map is grown automatically; gaps are filled with [`Instruction::Ignore`].
    pub fn set_op(&mut self, symbol: u8, op: Instruction) {
        let idx = symbol as usize;
        if idx >= self.op_map.len() {
            self.op_map.resize(idx + 1, Instruction::Ignore);
        }
        self.op_map[idx] = op;
    }

    /// Registers `L` (turn left), `R` (turn right) and `M` (move).
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            (b'L', Instruction::Turn(Turn::Left)),
            (b'R', Instruction::Turn(Turn::Right)),
            (b'M', Instruction::Move),
        ];

        for (sym, op) in mappings {
            self.set_op(sym, op);
        }
    }

    /// Resolves a symbol to its registered instruction.
    pub fn op(&self, symbol: char) -> Instruction {
        if !symbol.is_ascii() {
            return Instruction::Ignore;
        }
        self.op_map
            .get(symbol as usize)
            .copied()
            .unwrap_or(Instruction::Ignore)
    }

    /// Drives `start` through `instructions` and reports where it ended up.
    ///
    /// Symbols are consumed left to right. Whitespace is skipped and symbols
    /// with no registered meaning are ignored. A move whose target cell lies
    /// off the plateau, or past the `i64` range, is dropped: the rover keeps
    /// its cell and heading and the next instruction runs as usual.
    pub fn run(&self, start: RoverState, instructions: &str, plateau: &Plateau) -> RoverReport {
        if !plateau.contains(start.position) {
            warn!(rover = %start, "rover starts outside the plateau");
        }

        let mut rover = start;
        let mut moves = 0;
        let mut blocked_moves = 0;

        for symbol in instructions.chars().filter(|c| !c.is_whitespace()) {
            match self.op(symbol) {
                Instruction::Turn(turn) => rover.turn(turn),
                Instruction::Move => {
                    match rover.ahead().filter(|&target| plateau.contains(target)) {
                        Some(target) => {
                            rover.position = target;
                            moves += 1;
                        }
                        None => {
                            trace!(rover = %rover, "move blocked at plateau edge");
                            blocked_moves += 1;
                        }
                    }
                }
                Instruction::Ignore => {}
            }
        }

        debug!(start = %start, end = %rover, moves, blocked_moves, "rover finished");

        RoverReport {
            initial: start,
            final_state: rover,
            moves,
            blocked_moves,
        }
    }

    /// Runs a rover given as raw text and returns its final `"x y D"` string.
    pub fn process_rover(
        &self,
        position: &str,
        instructions: &str,
        plateau: &Plateau,
    ) -> Result<String, RoverError> {
        let start: RoverState = position.parse()?;
        Ok(self.run(start, instructions, plateau).final_state.to_string())
    }
}
