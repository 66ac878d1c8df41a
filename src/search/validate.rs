use crate::search::{Environment, SearchReport};

/// Replay a successful report against the environment: every action must be
/// applicable in sequence, the replayed states must match the reported path,
/// the final state must satisfy the goal test, and the summed step costs must
/// match the reported cost.
pub fn validate<E: Environment>(
    report: &SearchReport<E::State, E::Action>,
    env: &E,
) -> Result<(), String> {
    if !report.success {
        return Err("cannot validate a failed search".to_string());
    }

    let mut current = env.initial_state();
    if report.path.first() != Some(&current) {
        return Err(format!(
            "path does not start at the initial state {current:?}"
        ));
    }
    if report.path.len() != report.actions.len() + 1 {
        return Err(format!(
            "path of {} states does not fit {} actions",
            report.path.len(),
            report.actions.len()
        ));
    }

    let mut cost = 0.0;
    for (step, action) in report.actions.iter().enumerate() {
        let transition = env
            .successors(&current)
            .into_iter()
            .find(|transition| &transition.action == action)
            .ok_or_else(|| format!("action {action:?} is not applicable in state {current:?}"))?;
        cost += transition.cost;
        current = transition.state;
        if report.path.get(step + 1) != Some(&current) {
            return Err(format!(
                "replayed state {current:?} diverges from the path at step {}",
                step + 1
            ));
        }
    }

    if !env.is_goal(&current) {
        return Err(format!(
            "path does not reach a goal state, final state is {current:?}"
        ));
    }
    if (cost - report.path_cost).abs() > 1e-9 {
        return Err(format!(
            "replayed cost {cost} does not match reported cost {}",
            report.path_cost
        ));
    }

    Ok(())
}
