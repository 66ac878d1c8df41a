use crate::search::{Environment, Heuristic, HeuristicValue};

#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl<E: Environment> Heuristic<E> for ZeroHeuristic {
    fn evaluate(&mut self, _state: &E::State, _env: &E) -> HeuristicValue {
        (0.).into()
    }
}
