use crate::adversarial::connect_four::LINES;
use crate::adversarial::{ConnectFour, GameState, Outcome, Player, COLS, CONNECT, ROWS};
use itertools::iproduct;

/// Base magnitude of a decided game. Terminal scores are offset by the
/// remaining search depth so that a win found sooner (more depth left)
/// outranks the same win found later, and a loss that can be delayed is
/// preferred to an immediate one.
pub const WIN_SCORE: f64 = 10_000.0;

/// Static evaluation of a position from one player's perspective. Required to
/// be symmetric: `evaluate(state, player) == -evaluate(state, opponent)`.
pub trait Evaluator<G: GameState> {
    fn evaluate(&self, state: &G, perspective: Player, remaining_depth: u32) -> f64;
}

pub(crate) fn terminal_score(outcome: Outcome, remaining_depth: u32) -> f64 {
    match outcome {
        Outcome::Win => WIN_SCORE + f64::from(remaining_depth),
        Outcome::Loss => -(WIN_SCORE + f64::from(remaining_depth)),
        Outcome::Draw => 0.0,
    }
}

/// Weighted line features: open three-in-a-row threats dominate, control of
/// the center files counts a little, raw adjacent pairs count least. Every
/// term is a difference between the two players, which is what makes the
/// function symmetric.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineEvaluator {}

impl LineEvaluator {
    pub fn new() -> Self {
        LineEvaluator {}
    }
}

const THREAT_WEIGHT: f64 = 100.0;
const CENTER_WEIGHT: f64 = 2.0;
const PAIR_WEIGHT: f64 = 5.0;

impl Evaluator<ConnectFour> for LineEvaluator {
    fn evaluate(&self, state: &ConnectFour, perspective: Player, remaining_depth: u32) -> f64 {
        if let Some(outcome) = state.terminal_value(perspective) {
            return terminal_score(outcome, remaining_depth);
        }

        let opponent = perspective.opponent();
        let threats = count_threats(state, perspective) as f64 - count_threats(state, opponent) as f64;
        let center = center_control(state, perspective) as f64 - center_control(state, opponent) as f64;
        let pairs = count_pairs(state, perspective) as f64 - count_pairs(state, opponent) as f64;
        threats * THREAT_WEIGHT + center * CENTER_WEIGHT + pairs * PAIR_WEIGHT
    }
}

/// A threat is a four-window holding three of `player`'s pieces and one empty
/// cell that is immediately playable: on the bottom row or sitting on a piece.
fn count_threats(state: &ConnectFour, player: Player) -> usize {
    LINES
        .iter()
        .filter(|line| {
            let mut own = 0;
            let mut empty = None;
            for &(row, col) in line.iter() {
                match state.cell(row, col) {
                    Some(piece) if piece == player => own += 1,
                    None => empty = Some((row, col)),
                    Some(_) => return false,
                }
            }
            own == CONNECT - 1 && matches!(empty, Some(cell) if is_playable(state, cell))
        })
        .count()
}

fn is_playable(state: &ConnectFour, (row, col): (usize, usize)) -> bool {
    row == ROWS - 1 || state.cell(row + 1, col).is_some()
}

/// Pieces in the three center files, weighted by closeness to the middle.
fn center_control(state: &ConnectFour, player: Player) -> usize {
    let middle = (COLS / 2) as isize;
    iproduct!(0..ROWS, COLS / 2 - 1..=COLS / 2 + 1)
        .filter(|&(row, col)| state.cell(row, col) == Some(player))
        .map(|(_, col)| (3 - (col as isize - middle).abs()) as usize)
        .sum()
}

/// Adjacent same-player pairs in all four directions.
fn count_pairs(state: &ConnectFour, player: Player) -> usize {
    let directions = [(0isize, 1isize), (1, 0), (1, 1), (1, -1)];
    iproduct!(0..ROWS as isize, 0..COLS as isize, directions)
        .filter(|&(row, col, (dr, dc))| {
            let (next_row, next_col) = (row + dr, col + dc);
            (0..ROWS as isize).contains(&next_row)
                && (0..COLS as isize).contains(&next_col)
                && state.cell(row as usize, col as usize) == Some(player)
                && state.cell(next_row as usize, next_col as usize) == Some(player)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn symmetric_for_both_players() {
        let positions = [
            vec![],
            vec![3],
            vec![3, 3, 2, 4],
            vec![0, 1, 1, 2, 2, 3],
            vec![0, 0, 1, 1, 2, 2, 3], // terminal, first player won
        ];
        let evaluator = LineEvaluator::new();
        for moves in positions {
            let state = ConnectFour::from_moves(&moves).unwrap();
            for depth in [0, 2] {
                assert_approx_eq!(
                    evaluator.evaluate(&state, Player::First, depth),
                    -evaluator.evaluate(&state, Player::Second, depth)
                );
            }
        }
    }

    #[test]
    fn faster_wins_score_higher() {
        let won = ConnectFour::from_moves(&[0, 0, 1, 1, 2, 2, 3]).unwrap();
        let evaluator = LineEvaluator::new();
        let fast = evaluator.evaluate(&won, Player::First, 5);
        let slow = evaluator.evaluate(&won, Player::First, 2);
        assert!(fast > slow);
        assert!(fast > WIN_SCORE);
        // the losing side sees the mirror image
        assert!(evaluator.evaluate(&won, Player::Second, 5) < -WIN_SCORE);
    }

    #[test]
    fn counts_a_supported_open_three_as_a_threat() {
        // first player holds the bottom row cells 0..=2, cell 3 is playable
        let state = ConnectFour::from_moves(&[0, 0, 1, 1, 2]).unwrap();
        assert_eq!(count_threats(&state, Player::First), 1);
        assert_eq!(count_threats(&state, Player::Second), 0);
    }

    #[test]
    fn a_vertical_three_threatens_its_own_column() {
        let vertical = ConnectFour::from_moves(&[0, 1, 0, 1, 0]).unwrap();
        assert_eq!(count_threats(&vertical, Player::First), 1);
    }

    #[test]
    fn an_extension_cell_above_a_hole_is_not_a_threat() {
        // first player rows a three on row 4 (on top of second player's
        // pieces); both extension cells of that row float above empty cells
        let state = ConnectFour::from_moves(&[6, 2, 2, 3, 3, 4, 4]).unwrap();
        assert_eq!(count_threats(&state, Player::First), 0);
        // second player's own bottom-row three is extendable on both sides
        assert_eq!(count_threats(&state, Player::Second), 2);
    }

    #[test]
    fn a_gap_inside_a_bottom_row_three_counts_once() {
        // pieces at columns 0, 1 and 3: only the window 0..=3 has three
        // pieces plus a playable gap at column 2
        let state = ConnectFour::from_moves(&[0, 6, 1, 6, 3]).unwrap();
        assert_eq!(count_threats(&state, Player::First), 1);
    }

    #[test]
    fn center_pieces_outweigh_edge_pieces() {
        let centered = ConnectFour::from_moves(&[3]).unwrap();
        let edged = ConnectFour::from_moves(&[0]).unwrap();
        let evaluator = LineEvaluator::new();
        assert!(
            evaluator.evaluate(&centered, Player::First, 0)
                > evaluator.evaluate(&edged, Player::First, 0)
        );
    }
}
