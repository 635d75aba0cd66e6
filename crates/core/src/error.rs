//! Error types for board mutations.

use crate::id::{DomainId, GoalId};

/// Result alias for goal creation.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Reasons a new goal is rejected.
///
/// These are user-facing: the form that produced the goal stays open and
/// the message is shown inline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// No domain with this id
    #[error("unknown domain: {0}")]
    UnknownDomain(DomainId),

    /// Title missing or whitespace only
    #[error("goal title must not be empty")]
    EmptyTitle,

    /// Unit missing or whitespace only
    #[error("goal unit must not be empty")]
    EmptyUnit,

    /// Target text is not a number
    #[error("target is not a number: {0:?}")]
    NonNumericTarget(String),

    /// Target is zero, negative or not finite
    #[error("target must be a positive number, got {0}")]
    InvalidTarget(f64),

    /// Cadence name not recognised
    #[error("unknown cadence type: {0:?}")]
    UnknownCadence(String),

    /// Deadline is not a `YYYY-MM-DD` date
    #[error("invalid deadline {0:?}, expected YYYY-MM-DD")]
    InvalidDeadline(String),
}

/// Errors from state-level lookups.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardError {
    /// Domain id not present on the board
    #[error("domain not found: {0}")]
    DomainNotFound(DomainId),

    /// Goal id not present in the given domain
    #[error("goal {goal} not found in domain {domain}")]
    GoalNotFound {
        /// Domain that was searched
        domain: DomainId,
        /// Goal that was requested
        goal: GoalId,
    },
}
