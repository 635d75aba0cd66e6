//! Progress engine - bounded updates with rising-edge completion detection.

use chrono::NaiveDate;
use lifeboard_core::{Goal, GoalId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::streak::compute_streak;

/// Emitted when a goal transitions into completed.
///
/// The UI collaborator uses it for a transient celebration; dropping it
/// has no effect on board state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionSignal {
    /// Goal that was completed
    pub goal_id: GoalId,
    /// Goal title
    pub title: String,
    /// Color of the owning domain
    pub domain_color: String,
    /// Streak reached by this completion
    pub streak: u32,
}

/// Result of applying a delta to one goal.
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaOutcome {
    /// The updated goal
    pub goal: Goal,
    /// True only on a false -> true completion transition
    pub completed_now: bool,
    /// Present iff `completed_now`
    pub signal: Option<CompletionSignal>,
}

/// Apply `delta` to a goal's progress.
///
/// Progress is clamped to `0..=target`. Only a rising edge (below target
/// before, at or above after) records `today` as a completion and updates
/// the streak; deltas on an already completed goal never do. Dropping
/// below target again is silent.
pub fn apply_delta(goal: &Goal, domain_color: &str, delta: f64, today: NaiveDate) -> DeltaOutcome {
    let was_completed = goal.is_completed();

    let mut next = goal.clone();
    let raw = goal.progress + delta;
    next.progress = if raw.is_nan() { goal.progress } else { raw.clamp(0.0, goal.target) };

    let completed_now = !was_completed && next.is_completed();
    debug!(
        "Goal {} progress {} -> {} (delta {:+})",
        goal.id, goal.progress, next.progress, delta
    );

    if !completed_now {
        return DeltaOutcome {
            goal: next,
            completed_now: false,
            signal: None,
        };
    }

    let streak = compute_streak(&next, today);
    next.last_completed = Some(today);
    next.streak = Some(streak);
    // Set semantics keep this idempotent per day
    next.completion_history.insert(today);

    info!("Goal {} '{}' completed on {} (streak {})", next.id, next.title, today, streak);

    let signal = CompletionSignal {
        goal_id: next.id.clone(),
        title: next.title.clone(),
        domain_color: domain_color.to_string(),
        streak,
    };

    DeltaOutcome {
        goal: next,
        completed_now: true,
        signal: Some(signal),
    }
}
