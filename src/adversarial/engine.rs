use crate::adversarial::{Evaluator, GameError, GameState, Player};
use std::time::{Duration, Instant};
use tracing::info;

/// Accumulator threaded through one engine invocation. Owned by the
/// top-level call and passed down the recursion; never ambient state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchTracker {
    /// Number of recursive calls entered
    pub nodes_expanded: u64,
    /// Number of sibling moves skipped by cutoffs
    pub nodes_pruned: u64,
    /// Deepest ply reached below the root
    pub max_ply_reached: u32,
    /// Value of the chosen move, from the root player's perspective
    pub value: f64,
    pub elapsed: Duration,
}

impl SearchTracker {
    fn new() -> Self {
        Self {
            nodes_expanded: 0,
            nodes_pruned: 0,
            max_ply_reached: 0,
            value: 0.0,
            elapsed: Duration::ZERO,
        }
    }
}

/// Shared head of both engines: count the call, and stop the recursion on a
/// decided position or an exhausted depth budget. The evaluation is taken
/// from the side to move, so one negation per ply keeps every frame
/// maximizing; the symmetric evaluation function makes this identical to the
/// max/min formulation.
fn leaf_value<G: GameState, V: Evaluator<G>>(
    game: &G,
    depth: u32,
    evaluator: &V,
) -> Option<f64> {
    let side = game.to_move();
    if depth == 0 || game.terminal_value(side).is_some() {
        Some(evaluator.evaluate(game, side, depth))
    } else {
        None
    }
}

fn minimax<G: GameState, V: Evaluator<G>>(
    game: &mut G,
    depth: u32,
    ply: u32,
    evaluator: &V,
    tracker: &mut SearchTracker,
) -> Result<(f64, Option<G::Move>), GameError> {
    tracker.nodes_expanded += 1;
    tracker.max_ply_reached = tracker.max_ply_reached.max(ply);

    if let Some(value) = leaf_value(game, depth, evaluator) {
        return Ok((value, None));
    }

    let moves = game.legal_moves();
    if moves.is_empty() {
        return Err(GameError::InconsistentTerminal);
    }

    let mut best_value = f64::NEG_INFINITY;
    let mut best_move = None;
    for mv in moves {
        game.apply(mv)?;
        let result = minimax(game, depth - 1, ply + 1, evaluator, tracker);
        // the undo must run even when the recursion failed, or the caller
        // would see a corrupted board
        game.undo()?;
        let (value, _) = result?;
        let value = -value;
        if value > best_value {
            best_value = value;
            best_move = Some(mv);
        }
    }
    Ok((best_value, best_move))
}

fn alphabeta<G: GameState, V: Evaluator<G>>(
    game: &mut G,
    depth: u32,
    ply: u32,
    mut alpha: f64,
    beta: f64,
    evaluator: &V,
    tracker: &mut SearchTracker,
) -> Result<(f64, Option<G::Move>), GameError> {
    tracker.nodes_expanded += 1;
    tracker.max_ply_reached = tracker.max_ply_reached.max(ply);

    if let Some(value) = leaf_value(game, depth, evaluator) {
        return Ok((value, None));
    }

    let moves = game.legal_moves();
    if moves.is_empty() {
        return Err(GameError::InconsistentTerminal);
    }

    let mut best_value = f64::NEG_INFINITY;
    let mut best_move = None;
    for (index, &mv) in moves.iter().enumerate() {
        game.apply(mv)?;
        // the child searches the negated, swapped window
        let result = alphabeta(game, depth - 1, ply + 1, -beta, -alpha, evaluator, tracker);
        game.undo()?;
        let (value, _) = result?;
        let value = -value;
        if value > best_value {
            best_value = value;
            best_move = Some(mv);
        }
        alpha = alpha.max(value);
        if alpha >= beta {
            tracker.nodes_pruned += (moves.len() - index - 1) as u64;
            break;
        }
    }
    Ok((best_value, best_move))
}

/// Full-width minimax to `max_depth` plies. Returns the chosen move (`None`
/// when the position is already decided or the depth budget is zero) and the
/// tracker for this invocation.
pub fn minimax_search<G: GameState, V: Evaluator<G>>(
    game: &mut G,
    max_depth: u32,
    evaluator: &V,
) -> Result<(Option<G::Move>, SearchTracker), GameError> {
    let start = Instant::now();
    let mut tracker = SearchTracker::new();
    let (value, chosen) = minimax(game, max_depth, 0, evaluator, &mut tracker)?;
    tracker.value = value;
    tracker.elapsed = start.elapsed();
    info!(
        value,
        nodes_expanded = tracker.nodes_expanded,
        max_ply_reached = tracker.max_ply_reached,
        "minimax finished"
    );
    Ok((chosen, tracker))
}

/// Alpha-beta to `max_depth` plies. Chooses the same move as
/// [`minimax_search`] at the same depth with the same evaluation function;
/// pruning only changes the node counts.
pub fn alphabeta_search<G: GameState, V: Evaluator<G>>(
    game: &mut G,
    max_depth: u32,
    evaluator: &V,
) -> Result<(Option<G::Move>, SearchTracker), GameError> {
    let start = Instant::now();
    let mut tracker = SearchTracker::new();
    let (value, chosen) = alphabeta(
        game,
        max_depth,
        0,
        f64::NEG_INFINITY,
        f64::INFINITY,
        evaluator,
        &mut tracker,
    )?;
    tracker.value = value;
    tracker.elapsed = start.elapsed();
    info!(
        value,
        nodes_expanded = tracker.nodes_expanded,
        nodes_pruned = tracker.nodes_pruned,
        max_ply_reached = tracker.max_ply_reached,
        "alpha-beta finished"
    );
    Ok((chosen, tracker))
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum AdversarialEngineName {
    #[clap(help = "Full-width minimax.")]
    Minimax,
    #[clap(name = "alpha-beta", help = "Minimax with alpha-beta pruning.")]
    AlphaBeta,
}

impl AdversarialEngineName {
    pub fn search<G: GameState, V: Evaluator<G>>(
        &self,
        game: &mut G,
        max_depth: u32,
        evaluator: &V,
    ) -> Result<(Option<G::Move>, SearchTracker), GameError> {
        match self {
            AdversarialEngineName::Minimax => minimax_search(game, max_depth, evaluator),
            AdversarialEngineName::AlphaBeta => alphabeta_search(game, max_depth, evaluator),
        }
    }
}
