//! Domain model - a life area grouping related goals.

use serde::{Deserialize, Serialize};

use crate::goal::Goal;
use crate::id::{DomainId, GoalId};

/// A top-level life area ("Cycling", "Gym", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    /// Stable identifier
    pub id: DomainId,

    /// Display name
    pub name: String,

    /// Display color (CSS hex)
    pub color: String,

    /// Display icon
    pub icon: String,

    /// Goals in creation order
    pub goals: Vec<Goal>,
}

impl Domain {
    /// Create an empty domain.
    pub fn new(
        id: impl Into<DomainId>,
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
            goals: Vec::new(),
        }
    }

    /// Attach goals, keeping their order.
    pub fn with_goals(mut self, goals: Vec<Goal>) -> Self {
        self.goals = goals;
        self
    }

    /// Look up a goal by id.
    pub fn goal(&self, id: &GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| &g.id == id)
    }

    /// Number of completed goals.
    pub fn completed_count(&self) -> usize {
        self.goals.iter().filter(|g| g.is_completed()).count()
    }
}
