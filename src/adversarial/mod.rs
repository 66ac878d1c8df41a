//! Two-player adversarial search. The game tree is never materialized: the
//! engines are plain recursion over a single mutable game state with a strict
//! apply/undo discipline, and each call frame owns only its local bounds.

mod connect_four;
mod engine;
mod evaluation;
mod game_state;

pub use connect_four::{ConnectFour, COLS, CONNECT, ROWS};
pub use engine::{alphabeta_search, minimax_search, AdversarialEngineName, SearchTracker};
pub use evaluation::{Evaluator, LineEvaluator, WIN_SCORE};
pub use game_state::{GameError, GameState, Outcome, Player};
