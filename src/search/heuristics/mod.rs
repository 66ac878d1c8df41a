mod euclidean;
mod heuristic;
mod manhattan;
mod zero_heuristic;

pub use euclidean::EuclideanDistance;
pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use manhattan::ManhattanDistance;
pub use zero_heuristic::ZeroHeuristic;
