//! Priority ranking for the "today's focus" list.

use chrono::NaiveDate;
use lifeboard_core::{CadenceType, Goal};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default size of the focus list.
pub const DEFAULT_FOCUS_LIMIT: usize = 5;

/// Configuration for focus ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusConfig {
    /// Maximum number of goals returned
    pub limit: usize,
}

impl FocusConfig {
    /// Create a config with the default limit.
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_FOCUS_LIMIT,
        }
    }

    /// Set the limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A goal with its computed priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredGoal {
    /// Priority score, higher first
    pub score: u32,
    /// The goal
    pub goal: Goal,
}

/// Urgency from the deadline. Only the first matching band applies.
fn deadline_score(deadline: Option<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(deadline) = deadline else {
        return 0;
    };
    match (deadline - today).num_days() {
        d if d < 0 => 1000,
        d if d <= 3 => 500,
        d if d <= 7 => 300,
        d if d <= 14 => 100,
        _ => 0,
    }
}

fn cadence_score(cadence: CadenceType) -> u32 {
    match cadence {
        CadenceType::Daily => 400,
        CadenceType::Weekly => 200,
        CadenceType::Monthly => 50,
        CadenceType::Quarterly | CadenceType::Yearly | CadenceType::Deadline => 0,
    }
}

/// Goals "in motion" get a bonus, and a further one when nearly done.
fn momentum_score(percent: f64) -> u32 {
    let mut score = 0;
    if percent > 0.0 && percent < 100.0 {
        score += 150;
    }
    if percent > 75.0 {
        score += 100;
    }
    score
}

/// Priority score of a single goal.
pub fn score_goal(goal: &Goal, today: NaiveDate) -> u32 {
    deadline_score(goal.deadline, today)
        + cadence_score(goal.cadence)
        + momentum_score(goal.progress_percent())
}

/// Rank active goals, keeping scores.
///
/// Completed goals are skipped. The sort is stable, so equal scores keep
/// their input order.
pub fn rank_focus_scored<'a, I>(goals: I, today: NaiveDate, limit: usize) -> Vec<ScoredGoal>
where
    I: IntoIterator<Item = &'a Goal>,
{
    let mut scored: Vec<ScoredGoal> = goals
        .into_iter()
        .filter(|g| !g.is_completed())
        .map(|g| ScoredGoal {
            score: score_goal(g, today),
            goal: g.clone(),
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);

    debug!("Focus list: {} goals (limit {})", scored.len(), limit);
    scored
}

/// Rank active goals into a bounded focus list.
pub fn rank_focus<'a, I>(goals: I, today: NaiveDate, limit: usize) -> Vec<Goal>
where
    I: IntoIterator<Item = &'a Goal>,
{
    rank_focus_scored(goals, today, limit)
        .into_iter()
        .map(|s| s.goal)
        .collect()
}
