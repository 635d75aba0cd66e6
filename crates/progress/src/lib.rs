//! Goal-progress engine.
//!
//! Progress updates, streaks, focus ranking, achievements, timeline
//! grouping and overview statistics. Every function is pure: it reads a
//! snapshot and returns a value or the next snapshot.

#![warn(missing_docs)]

pub mod engine;
pub mod streak;
pub mod focus;
pub mod achievement;
pub mod timeline;
pub mod overview;
pub mod board;

pub use engine::{apply_delta as apply_goal_delta, CompletionSignal, DeltaOutcome};
pub use streak::compute_streak;
pub use focus::{rank_focus, rank_focus_scored, score_goal, FocusConfig, ScoredGoal, DEFAULT_FOCUS_LIMIT};
pub use achievement::{evaluate_achievements, newly_unlocked, GoalStats};
pub use timeline::{group_by_timeline, TimelineBucket};
pub use overview::{derive_overview, summarize_domains, DomainSummary, Overview};
pub use board::{
    apply_delta, derive_achievements, derive_focus, derive_focus_scored, derive_timeline,
    try_apply_delta, BoardUpdate,
};
