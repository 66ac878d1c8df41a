use crate::adversarial::{GameError, GameState, Outcome, Player};
use itertools::iproduct;
use ndarray::Array2;
use once_cell::sync::Lazy;
use smallvec::SmallVec;
use std::fmt;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CONNECT: usize = 4;

/// Every straight four-cell window of the board, precomputed once. Row 0 is
/// the top of the board; gravity fills row `ROWS - 1` first.
pub(crate) static LINES: Lazy<Vec<[(usize, usize); CONNECT]>> = Lazy::new(|| {
    let directions = [(0isize, 1isize), (1, 0), (1, 1), (1, -1)];
    let mut lines = vec![];
    for (row, col, (dr, dc)) in iproduct!(0..ROWS as isize, 0..COLS as isize, directions) {
        let end_row = row + dr * (CONNECT as isize - 1);
        let end_col = col + dc * (CONNECT as isize - 1);
        if !(0..ROWS as isize).contains(&end_row) || !(0..COLS as isize).contains(&end_col) {
            continue;
        }
        let mut cells = [(0usize, 0usize); CONNECT];
        for (i, cell) in cells.iter_mut().enumerate() {
            let offset = i as isize;
            *cell = ((row + dr * offset) as usize, (col + dc * offset) as usize);
        }
        lines.push(cells);
    }
    lines
});

/// The standard 6×7 connect-four position: a gravity board, the side to
/// move, and the move history that makes undo exact.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectFour {
    board: Array2<Option<Player>>,
    to_move: Player,
    history: Vec<(usize, usize)>,
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectFour {
    pub fn new() -> Self {
        Self {
            board: Array2::from_elem((ROWS, COLS), None),
            to_move: Player::First,
            history: vec![],
        }
    }

    /// Build a position by replaying a column sequence from the empty board.
    pub fn from_moves(columns: &[usize]) -> Result<Self, GameError> {
        let mut game = Self::new();
        for &column in columns {
            game.apply(column)?;
        }
        Ok(game)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        self.board[(row, col)]
    }

    /// Number of plies played so far. Always equals the history length.
    pub fn plies(&self) -> usize {
        self.history.len()
    }

    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|line| {
            let first = self.cell(line[0].0, line[0].1)?;
            line[1..]
                .iter()
                .all(|&(row, col)| self.cell(row, col) == Some(first))
                .then_some(first)
        })
    }

    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.board[(0, col)].is_some())
    }

    fn drop_row(&self, column: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&row| self.board[(row, column)].is_none())
    }
}

impl fmt::Display for ConnectFour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                let piece = match self.cell(row, col) {
                    Some(Player::First) => 'X',
                    Some(Player::Second) => 'O',
                    None => '.',
                };
                write!(f, "{piece}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl GameState for ConnectFour {
    type Move = usize;

    fn to_move(&self) -> Player {
        self.to_move
    }

    fn legal_moves(&self) -> SmallVec<[usize; 8]> {
        if self.winner().is_some() {
            return SmallVec::new();
        }
        (0..COLS)
            .filter(|&col| self.board[(0, col)].is_none())
            .collect()
    }

    fn apply(&mut self, column: usize) -> Result<(), GameError> {
        if column >= COLS {
            return Err(GameError::IllegalMove { column });
        }
        let row = self
            .drop_row(column)
            .ok_or(GameError::IllegalMove { column })?;
        self.board[(row, column)] = Some(self.to_move);
        self.history.push((row, column));
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    fn undo(&mut self) -> Result<(), GameError> {
        let (row, column) = self.history.pop().ok_or(GameError::NothingToUndo)?;
        self.board[(row, column)] = None;
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    fn terminal_value(&self, perspective: Player) -> Option<Outcome> {
        if let Some(winner) = self.winner() {
            return Some(if winner == perspective {
                Outcome::Win
            } else {
                Outcome::Loss
            });
        }
        if self.is_full() {
            return Some(Outcome::Draw);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pieces_stack_from_the_bottom() {
        let game = ConnectFour::from_moves(&[3, 3, 3]).unwrap();
        assert_eq!(game.cell(ROWS - 1, 3), Some(Player::First));
        assert_eq!(game.cell(ROWS - 2, 3), Some(Player::Second));
        assert_eq!(game.cell(ROWS - 3, 3), Some(Player::First));
        assert_eq!(game.plies(), 3);
        assert_eq!(game.to_move(), Player::Second);
    }

    #[test]
    fn apply_then_undo_restores_every_reachable_first_move() {
        let openings: Vec<Vec<usize>> =
            vec![vec![], vec![0], vec![3, 3], vec![0, 1, 2, 3, 4, 5, 6]];
        for opening in openings {
            let mut game = ConnectFour::from_moves(&opening).unwrap();
            let before = game.clone();
            for mv in game.legal_moves() {
                game.apply(mv).unwrap();
                game.undo().unwrap();
                assert_eq!(game, before, "undo did not restore after move {mv}");
            }
        }
    }

    #[test]
    fn a_full_column_is_not_playable() {
        let mut game = ConnectFour::from_moves(&[0, 0, 0, 0, 0, 0]).unwrap();
        assert!(!game.legal_moves().contains(&0));
        assert_eq!(
            game.apply(0),
            Err(GameError::IllegalMove { column: 0 })
        );
        assert_eq!(game.apply(7), Err(GameError::IllegalMove { column: 7 }));
    }

    #[test]
    fn undo_on_the_empty_board_is_an_error() {
        let mut game = ConnectFour::new();
        assert_eq!(game.undo(), Err(GameError::NothingToUndo));
    }

    #[test]
    fn detects_a_horizontal_win() {
        let game = ConnectFour::from_moves(&[0, 0, 1, 1, 2, 2, 3]).unwrap();
        assert_eq!(game.winner(), Some(Player::First));
        assert_eq!(game.terminal_value(Player::First), Some(Outcome::Win));
        assert_eq!(game.terminal_value(Player::Second), Some(Outcome::Loss));
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn detects_a_vertical_win() {
        let game = ConnectFour::from_moves(&[2, 3, 2, 3, 2, 3, 2]).unwrap();
        assert_eq!(game.winner(), Some(Player::First));
    }

    #[test]
    fn detects_a_diagonal_win() {
        // first player builds the rising diagonal 0,1,2,3
        let game =
            ConnectFour::from_moves(&[0, 1, 1, 2, 2, 3, 2, 3, 3, 5, 3]).unwrap();
        assert_eq!(game.winner(), Some(Player::First));
    }

    #[test]
    fn live_position_has_no_terminal_value() {
        let game = ConnectFour::from_moves(&[0, 1, 2]).unwrap();
        assert_eq!(game.terminal_value(Player::First), None);
        assert_eq!(game.terminal_value(Player::Second), None);
    }

    #[test]
    fn display_renders_the_board_top_down() {
        let game = ConnectFour::from_moves(&[3, 3]).unwrap();
        let rendered = game.to_string();
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows.len(), ROWS);
        assert_eq!(rows[ROWS - 1], "...X...");
        assert_eq!(rows[ROWS - 2], "...O...");
    }
}
