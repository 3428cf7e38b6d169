//! # plateau-rover
//!
//! Simulates rovers on a bounded rectangular plateau. Each rover has a grid
//! position and a compass heading and is driven by a string of `L` (turn
//! left), `R` (turn right) and `M` (move forward) instructions.
//!
//! Input text is validated by [`parse_input`] into a [`Mission`], each rover
//! is driven by a [`RoverInterpreter`], and [`run_mission`] ties the two
//! together for the `rover` binary. Moves that would leave the plateau are
//! dropped; rovers never interact with each other.

pub mod error;
pub mod interpreter;
pub mod mission;
pub mod parser;
pub mod plateau;
pub mod rover;

pub use error::*;
pub use interpreter::*;
pub use mission::*;
pub use parser::*;
pub use plateau::*;
pub use rover::*;
