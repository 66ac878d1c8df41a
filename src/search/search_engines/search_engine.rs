use crate::search::search_engines::{AStar, Bfs, Dfs, Gbfs, Ids, Ucs};
use crate::search::{Environment, Heuristic, SearchError, SearchReport};

/// Strategy-specific knobs, bundled so the registry can build any strategy
/// from one place. Strategies ignore the fields that do not concern them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Hard depth limit for depth-first search.
    pub depth_limit: u32,
    /// Largest limit iterative deepening will try before giving up.
    pub max_depth: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            depth_limit: 10_000,
            max_depth: 1_000,
        }
    }
}

/// One synchronous invocation per call: collaborators in, report out. The
/// uninformed strategies receive the heuristic for interface uniformity and
/// ignore it.
pub trait SearchEngine<E: Environment> {
    fn search(
        &mut self,
        env: &E,
        heuristic: &mut dyn Heuristic<E>,
    ) -> Result<SearchReport<E::State, E::Action>, SearchError>;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum StrategyName {
    #[clap(help = "Breadth-first search. Optimal for uniform step costs.")]
    Bfs,
    #[clap(help = "Depth-first search with a hard depth limit.")]
    Dfs,
    #[clap(help = "Uniform-cost search. Optimal for non-negative step costs.")]
    Ucs,
    #[clap(help = "Iterative deepening over depth-limited search.")]
    Ids,
    #[clap(help = "Greedy best-first search, ordered by the heuristic alone.")]
    Gbfs,
    #[clap(name = "a-star", help = "A*, ordered by path cost plus heuristic.")]
    AStar,
}

impl StrategyName {
    pub fn create<E: Environment>(&self, options: &SearchOptions) -> Box<dyn SearchEngine<E>> {
        match self {
            StrategyName::Bfs => Box::new(Bfs::new()),
            StrategyName::Dfs => Box::new(Dfs::new(options.depth_limit)),
            StrategyName::Ucs => Box::new(Ucs::new()),
            StrategyName::Ids => Box::new(Ids::new(options.max_depth)),
            StrategyName::Gbfs => Box::new(Gbfs::new()),
            StrategyName::AStar => Box::new(AStar::new()),
        }
    }
}
