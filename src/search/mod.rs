mod environment;
mod errors;
pub mod heuristics;
pub mod search_engines;
mod search_node;
mod search_report;
mod search_space;
mod search_statistics;
mod validate;

pub use environment::{checked_successors, Environment, Transition};
pub use errors::SearchError;
pub use heuristics::{Heuristic, HeuristicValue};
pub use search_node::{NodeId, SearchNode, SearchNodeStatus};
pub use search_report::SearchReport;
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use validate::validate;
