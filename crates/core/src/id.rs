//! Unique identifiers for Lifeboard entities.

use std::sync::{Mutex, OnceLock, PoisonError};

use serde::{Deserialize, Serialize};
use ulid::{Generator, Ulid};

/// Process-wide monotonic ULID source.
static GENERATOR: OnceLock<Mutex<Generator>> = OnceLock::new();

/// Next ULID, strictly greater than every one handed out before.
fn next_ulid() -> Ulid {
    let mut generator = GENERATOR
        .get_or_init(|| Mutex::new(Generator::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    loop {
        match generator.generate() {
            Ok(ulid) => return ulid,
            // Random part exhausted within this millisecond
            Err(_) => std::thread::yield_now(),
        }
    }
}

/// Unique identifier for a Goal.
///
/// Freshly created goals get a ULID; seeded goals keep their short
/// hand-written keys (`"c1"`, `"g2"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(String);

impl GoalId {
    /// Generate a new GoalId, unique and increasing within the process
    pub fn new() -> Self {
        Self(next_ulid().to_string())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GoalId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GoalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for GoalId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for GoalId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Stable identifier for a life Domain (`"cycling"`, `"gym"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainId(String);

impl DomainId {
    /// Create a domain id from its slug.
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for DomainId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DomainId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_goal_ids_are_unique() {
        let ids: std::collections::HashSet<GoalId> = (0..256).map(|_| GoalId::new()).collect();
        assert_eq!(ids.len(), 256);
    }

    #[test]
    fn test_generated_goal_ids_increase() {
        let ids: Vec<GoalId> = (0..1000).map(|_| GoalId::new()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&DomainId::from("gym")).unwrap();
        assert_eq!(json, "\"gym\"");

        let id: GoalId = serde_json::from_str("\"c1\"").unwrap();
        assert_eq!(id.as_str(), "c1");
    }
}
