use crate::grid::GridEnvironment;
use crate::search::heuristics::{EuclideanDistance, ManhattanDistance, ZeroHeuristic};
use crate::search::Environment;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

/// A heuristic maps a state and the environment's static goal information to
/// a non-negative estimate of the remaining cost. Estimates are pure in the
/// state; `&mut self` only allows implementations to keep caches.
pub trait Heuristic<E: Environment>: Debug {
    fn evaluate(&mut self, state: &E::State, env: &E) -> HeuristicValue;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(help = "Manhattan distance, routed through the key cell while the key is not held.")]
    Manhattan,
    #[clap(help = "Euclidean distance, routed through the key cell while the key is not held.")]
    Euclidean,
    #[clap(name = "zero", help = "The zero heuristic.")]
    Zero,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic<GridEnvironment>> {
        match self {
            HeuristicName::Manhattan => Box::new(ManhattanDistance::new()),
            HeuristicName::Euclidean => Box::new(EuclideanDistance::new()),
            HeuristicName::Zero => Box::new(ZeroHeuristic::new()),
        }
    }
}
