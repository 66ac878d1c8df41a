//! A key-and-door maze on a 4-connected grid: the concrete
//! [`Environment`](crate::search::Environment) the heuristics in this crate
//! are written against. Instances are parsed from a fixed character grid;
//! generating mazes and checking their connectivity is the business of the
//! surrounding tooling, not of this crate.

mod environment;
mod state;

pub use environment::{GridAction, GridEnvironment, GridError, STEP_COST};
pub use state::GridState;
