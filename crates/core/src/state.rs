//! Board state - the immutable, versioned snapshot threaded through every
//! engine call.
//!
//! Operations never mutate a snapshot in place. Each one borrows the
//! current state and hands back the next one; whoever owns the "current"
//! binding swaps it wholesale. Readers of an older snapshot are therefore
//! never invalidated mid-read.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::Domain;
use crate::error::{BoardError, Result, ValidationError};
use crate::goal::{Goal, NewGoal};
use crate::id::{DomainId, GoalId};
use crate::seed;

/// A complete board snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardState {
    /// Incremented on every state-changing operation
    pub version: u64,

    /// Domains in display order
    pub domains: Vec<Domain>,
}

impl BoardState {
    /// Create a state at version 0.
    pub fn new(domains: Vec<Domain>) -> Self {
        Self { version: 0, domains }
    }

    /// The fixed initial board.
    pub fn seeded() -> Self {
        Self::new(seed::seed_domains())
    }

    /// Look up a domain.
    pub fn domain(&self, id: &DomainId) -> Option<&Domain> {
        self.domains.iter().find(|d| &d.id == id)
    }

    /// Look up a goal within a domain.
    pub fn goal(&self, domain_id: &DomainId, goal_id: &GoalId) -> std::result::Result<&Goal, BoardError> {
        let domain = self
            .domain(domain_id)
            .ok_or_else(|| BoardError::DomainNotFound(domain_id.clone()))?;
        domain.goal(goal_id).ok_or_else(|| BoardError::GoalNotFound {
            domain: domain_id.clone(),
            goal: goal_id.clone(),
        })
    }

    /// Every goal paired with its domain id, in display order.
    pub fn goals(&self) -> impl Iterator<Item = (&DomainId, &Goal)> {
        self.domains
            .iter()
            .flat_map(|d| d.goals.iter().map(move |g| (&d.id, g)))
    }

    /// Total number of goals across all domains.
    pub fn goal_count(&self) -> usize {
        self.domains.iter().map(|d| d.goals.len()).sum()
    }

    /// Append a new goal to a domain.
    ///
    /// # Errors
    /// - `UnknownDomain` when `domain_id` is not on the board.
    /// - Field errors from [`NewGoal::validate`].
    pub fn add_goal(&self, domain_id: &DomainId, spec: NewGoal) -> Result<BoardState> {
        if self.domain(domain_id).is_none() {
            return Err(ValidationError::UnknownDomain(domain_id.clone()));
        }
        let goal = Goal::new(spec)?;
        info!("Adding goal {} '{}' to domain {}", goal.id, goal.title, domain_id);

        let mut next = self.clone();
        next.version += 1;
        if let Some(domain) = next.domains.iter_mut().find(|d| &d.id == domain_id) {
            domain.goals.push(goal);
        }
        Ok(next)
    }

    /// Return a new state with one goal swapped for `goal` (matched by id).
    pub fn with_goal_replaced(
        &self,
        domain_id: &DomainId,
        goal: Goal,
    ) -> std::result::Result<BoardState, BoardError> {
        // Validates both ids before cloning
        self.goal(domain_id, &goal.id)?;

        let mut next = self.clone();
        next.version += 1;
        let slot = next
            .domains
            .iter_mut()
            .find(|d| &d.id == domain_id)
            .and_then(|d| d.goals.iter_mut().find(|g| g.id == goal.id));
        if let Some(slot) = slot {
            debug!("Replacing goal {} in domain {}", goal.id, domain_id);
            *slot = goal;
        }
        Ok(next)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Free-function form of [`BoardState::add_goal`].
pub fn add_goal(state: &BoardState, domain_id: &DomainId, spec: NewGoal) -> Result<BoardState> {
    state.add_goal(domain_id, spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::CadenceType;

    fn spec() -> NewGoal {
        NewGoal::new("Swim 2km", 2.0, "km", CadenceType::Weekly)
    }

    #[test]
    fn test_add_goal_appends_to_domain() {
        let state = BoardState::seeded();
        let gym = DomainId::from("gym");
        let before = state.domain(&gym).unwrap().goals.len();

        let next = add_goal(&state, &gym, spec()).unwrap();
        let goals = &next.domain(&gym).unwrap().goals;
        assert_eq!(goals.len(), before + 1);
        assert_eq!(goals.last().unwrap().title, "Swim 2km");
        assert_eq!(goals.last().unwrap().progress, 0.0);
        assert_eq!(next.version, state.version + 1);

        // Previous snapshot untouched
        assert_eq!(state.domain(&gym).unwrap().goals.len(), before);
    }

    #[test]
    fn test_add_goal_unknown_domain() {
        let state = BoardState::seeded();
        let err = state.add_goal(&DomainId::from("knitting"), spec()).unwrap_err();
        assert_eq!(err, ValidationError::UnknownDomain(DomainId::from("knitting")));
    }

    #[test]
    fn test_add_goal_invalid_spec_leaves_state() {
        let state = BoardState::seeded();
        let mut bad = spec();
        bad.target = -1.0;
        assert!(state.add_goal(&DomainId::from("gym"), bad).is_err());
    }

    #[test]
    fn test_added_goal_ids_are_unique() {
        let mut state = BoardState::seeded();
        let travel = DomainId::from("travel");
        for _ in 0..20 {
            state = state.add_goal(&travel, spec()).unwrap();
        }
        let ids: std::collections::HashSet<_> = state.goals().map(|(_, g)| g.id.clone()).collect();
        assert_eq!(ids.len(), state.goal_count());
    }

    #[test]
    fn test_goal_lookup_errors() {
        let state = BoardState::seeded();
        let err = state.goal(&DomainId::from("nope"), &GoalId::from("c1")).unwrap_err();
        assert!(matches!(err, BoardError::DomainNotFound(_)));

        let err = state.goal(&DomainId::from("cycling"), &GoalId::from("g1")).unwrap_err();
        assert!(matches!(err, BoardError::GoalNotFound { .. }));

        assert!(state.goal(&DomainId::from("cycling"), &GoalId::from("c1")).is_ok());
    }

    #[test]
    fn test_with_goal_replaced() {
        let state = BoardState::seeded();
        let cycling = DomainId::from("cycling");
        let mut goal = state.goal(&cycling, &GoalId::from("c2")).unwrap().clone();
        goal.progress = 3.0;

        let next = state.with_goal_replaced(&cycling, goal).unwrap();
        assert_eq!(next.goal(&cycling, &GoalId::from("c2")).unwrap().progress, 3.0);
        assert_eq!(state.goal(&cycling, &GoalId::from("c2")).unwrap().progress, 2.0);
    }
}
