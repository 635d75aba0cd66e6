//! Lifeboard core data models.
//!
//! This crate defines the life domains, goals and achievements that the
//! progress engine derives its views from, together with the immutable
//! board state that every operation threads through.

#![warn(missing_docs)]

// Core identities
mod id;
mod error;

// Board contents
mod goal;
mod domain;
mod achievement;

// State
mod state;
mod seed;

// Re-exports
pub use id::{DomainId, GoalId};
pub use error::{BoardError, Result, ValidationError};

pub use goal::{CadenceType, Goal, NewGoal};
pub use domain::Domain;
pub use achievement::{Achievement, AchievementId, Achievements};

pub use state::{add_goal, BoardState};
pub use seed::seed_domains;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
