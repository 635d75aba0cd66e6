//! Board-wide and per-domain progress summaries.

use lifeboard_core::{BoardState, Domain, DomainId, Goal};
use serde::{Deserialize, Serialize};

/// Totals across every goal on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    /// Number of goals
    pub total_goals: usize,
    /// Goals at or above target
    pub completed_goals: usize,
    /// Unweighted mean of per-goal progress percentages
    pub overall_progress_percent: f64,
}

/// Statistics shown on a domain card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSummary {
    /// Domain id
    pub id: DomainId,
    /// Display name
    pub name: String,
    /// Display color
    pub color: String,
    /// Display icon
    pub icon: String,
    /// Number of goals
    pub total_goals: usize,
    /// Completed goals
    pub completed_goals: usize,
    /// Mean progress percentage of the domain's goals
    pub average_progress_percent: f64,
}

fn mean_percent<'a>(goals: impl Iterator<Item = &'a Goal>) -> f64 {
    let (sum, count) = goals.fold((0.0, 0usize), |(sum, count), g| {
        (sum + g.progress_percent(), count + 1)
    });
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Board totals. Every goal weighs the same regardless of its domain.
pub fn derive_overview(state: &BoardState) -> Overview {
    Overview {
        total_goals: state.goal_count(),
        completed_goals: state.goals().filter(|(_, g)| g.is_completed()).count(),
        overall_progress_percent: mean_percent(state.goals().map(|(_, g)| g)),
    }
}

fn summarize(domain: &Domain) -> DomainSummary {
    DomainSummary {
        id: domain.id.clone(),
        name: domain.name.clone(),
        color: domain.color.clone(),
        icon: domain.icon.clone(),
        total_goals: domain.goals.len(),
        completed_goals: domain.completed_count(),
        average_progress_percent: mean_percent(domain.goals.iter()),
    }
}

/// One summary per domain, in display order.
pub fn summarize_domains(state: &BoardState) -> Vec<DomainSummary> {
    state.domains.iter().map(summarize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeboard_core::{CadenceType, Domain, Goal, NewGoal};

    fn goal(progress: f64, target: f64) -> Goal {
        let mut goal = Goal::new(NewGoal::new("g", target, "x", CadenceType::Weekly)).unwrap();
        goal.progress = progress;
        goal
    }

    #[test]
    fn test_overview_is_per_goal_mean() {
        let state = BoardState::new(vec![
            Domain::new("a", "A", "#000", "a").with_goals(vec![goal(1.0, 1.0)]),
            Domain::new("b", "B", "#000", "b").with_goals(vec![goal(0.0, 4.0), goal(2.0, 4.0)]),
        ]);
        let overview = derive_overview(&state);
        assert_eq!(overview.total_goals, 3);
        assert_eq!(overview.completed_goals, 1);
        assert!((overview.overall_progress_percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_overview_empty_board() {
        let overview = derive_overview(&BoardState::new(vec![]));
        assert_eq!(overview.total_goals, 0);
        assert_eq!(overview.overall_progress_percent, 0.0);
    }

    #[test]
    fn test_overview_is_idempotent() {
        let state = BoardState::seeded();
        assert_eq!(derive_overview(&state), derive_overview(&state));
    }

    #[test]
    fn test_domain_summaries() {
        let state = BoardState::new(vec![
            Domain::new("a", "A", "#111", "a").with_goals(vec![goal(1.0, 1.0), goal(1.0, 2.0)]),
            Domain::new("empty", "Empty", "#222", "e"),
        ]);
        let summaries = summarize_domains(&state);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].completed_goals, 1);
        assert!((summaries[0].average_progress_percent - 75.0).abs() < 1e-9);
        assert_eq!(summaries[1].total_goals, 0);
        assert_eq!(summaries[1].average_progress_percent, 0.0);
    }

    #[test]
    fn test_seed_has_one_completed_goal() {
        // "Attend 1 social event" starts at its target
        let overview = derive_overview(&BoardState::seeded());
        assert_eq!(overview.total_goals, 22);
        assert_eq!(overview.completed_goals, 1);
    }
}
