//! State-level operations for the UI collaborator.
//!
//! Each function takes the current [`BoardState`] and either derives a
//! view from it or returns the next state. Nothing here is cached: the
//! views are cheap at board scale and recomputing them avoids any
//! invalidation.

use chrono::NaiveDate;
use lifeboard_core::{Achievements, BoardError, BoardState, DomainId, Goal, GoalId, Time};
use tracing::{debug, warn};

use crate::achievement::evaluate_achievements;
use crate::engine::{apply_delta as apply_goal_delta, CompletionSignal};
use crate::focus::{rank_focus, rank_focus_scored, FocusConfig, ScoredGoal};
use crate::timeline::{group_by_timeline, TimelineBucket};

/// Next state after a progress change.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardUpdate {
    /// The new state (equal to the input for no-ops)
    pub state: BoardState,
    /// Present when the change completed a goal
    pub completion: Option<CompletionSignal>,
}

/// Apply a progress delta to one goal, reporting unknown ids.
pub fn try_apply_delta(
    state: &BoardState,
    domain_id: &DomainId,
    goal_id: &GoalId,
    delta: f64,
    today: NaiveDate,
) -> Result<BoardUpdate, BoardError> {
    let goal = state.goal(domain_id, goal_id)?;
    let color = state
        .domain(domain_id)
        .map(|d| d.color.as_str())
        .unwrap_or_default();

    let outcome = apply_goal_delta(goal, color, delta, today);
    if outcome.goal == *goal {
        debug!("Delta {:+} on goal {} changed nothing", delta, goal_id);
        return Ok(BoardUpdate {
            state: state.clone(),
            completion: None,
        });
    }

    Ok(BoardUpdate {
        state: state.with_goal_replaced(domain_id, outcome.goal)?,
        completion: outcome.signal,
    })
}

/// Apply a progress delta to one goal.
///
/// Unknown domain or goal ids leave the state unchanged.
pub fn apply_delta(
    state: &BoardState,
    domain_id: &DomainId,
    goal_id: &GoalId,
    delta: f64,
    today: NaiveDate,
) -> BoardUpdate {
    try_apply_delta(state, domain_id, goal_id, delta, today).unwrap_or_else(|e| {
        warn!("Ignoring delta: {}", e);
        BoardUpdate {
            state: state.clone(),
            completion: None,
        }
    })
}

fn all_goals(state: &BoardState) -> impl Iterator<Item = &Goal> {
    state.goals().map(|(_, g)| g)
}

/// Today's focus list.
pub fn derive_focus(state: &BoardState, today: NaiveDate, config: &FocusConfig) -> Vec<Goal> {
    rank_focus(all_goals(state), today, config.limit)
}

/// Today's focus list with scores.
pub fn derive_focus_scored(
    state: &BoardState,
    today: NaiveDate,
    config: &FocusConfig,
) -> Vec<ScoredGoal> {
    rank_focus_scored(all_goals(state), today, config.limit)
}

/// Achievements after this state.
pub fn derive_achievements(state: &BoardState, previous: &Achievements, now: Time) -> Achievements {
    evaluate_achievements(previous, state.goals(), state.domains.len(), now)
}

/// Goals bucketed by cadence.
pub fn derive_timeline(state: &BoardState) -> Vec<TimelineBucket> {
    group_by_timeline(all_goals(state))
}
