use smallvec::SmallVec;
use strum_macros::EnumIs;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

/// Terminal game value from one player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIs)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("column {column} is not a legal move in this position")]
    IllegalMove { column: usize },
    #[error("undo called with an empty move history")]
    NothingToUndo,
    #[error("state has no legal moves but is not terminal")]
    InconsistentTerminal,
}

/// A two-player, zero-sum game position mutated in place. `apply` and `undo`
/// must be exact inverses: after a matched pair the board and the side to
/// move equal the prior state, for every reachable state and every legal
/// move. `legal_moves` is empty exactly when the position is terminal.
pub trait GameState {
    type Move: Copy + Eq + std::fmt::Debug;

    fn to_move(&self) -> Player;

    fn legal_moves(&self) -> SmallVec<[Self::Move; 8]>;

    fn apply(&mut self, mv: Self::Move) -> Result<(), GameError>;

    fn undo(&mut self) -> Result<(), GameError>;

    /// Terminal status as a pure function of the board, never cached. `None`
    /// while the game is still live.
    fn terminal_value(&self, perspective: Player) -> Option<Outcome>;
}
