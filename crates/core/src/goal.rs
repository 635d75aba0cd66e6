//! Goal model - a trackable target with bounded progress and a cadence.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::id::GoalId;

/// Time-horizon classification of a goal.
///
/// Drives streak rules, focus weighting and timeline bucketing. The variant
/// order is the canonical timeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CadenceType {
    /// Every day
    Daily,
    /// Every week
    Weekly,
    /// Every month
    Monthly,
    /// Every quarter
    Quarterly,
    /// Every year
    Yearly,
    /// One-off, finished by a date
    Deadline,
}

impl CadenceType {
    /// All cadences in canonical timeline order.
    pub const ALL: [CadenceType; 6] = [
        CadenceType::Daily,
        CadenceType::Weekly,
        CadenceType::Monthly,
        CadenceType::Quarterly,
        CadenceType::Yearly,
        CadenceType::Deadline,
    ];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CadenceType::Daily => "daily",
            CadenceType::Weekly => "weekly",
            CadenceType::Monthly => "monthly",
            CadenceType::Quarterly => "quarterly",
            CadenceType::Yearly => "yearly",
            CadenceType::Deadline => "deadline",
        }
    }
}

impl std::fmt::Display for CadenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CadenceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        CadenceType::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownCadence(s.to_string()))
    }
}

/// A goal inside a life domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Goal title
    pub title: String,

    /// Current progress, always within `0..=target`
    pub progress: f64,

    /// Target value, fixed at creation
    pub target: f64,

    /// Display unit ("km", "sessions", "%")
    pub unit: String,

    /// Cadence type
    #[serde(rename = "type")]
    pub cadence: CadenceType,

    /// Optional due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,

    /// Day of the most recent rising-edge completion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_completed: Option<NaiveDate>,

    /// Consecutive completion streak, absent until first completion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streak: Option<u32>,

    /// Days on which the goal transitioned into completed. Never pruned.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub completion_history: BTreeSet<NaiveDate>,
}

impl Goal {
    /// Create a new goal with zero progress from a validated spec.
    pub fn new(spec: NewGoal) -> Result<Self> {
        spec.validate()?;
        Ok(Self {
            id: GoalId::new(),
            title: spec.title.trim().to_string(),
            progress: 0.0,
            target: spec.target,
            unit: spec.unit.trim().to_string(),
            cadence: spec.cadence,
            deadline: spec.deadline,
            last_completed: None,
            streak: None,
            completion_history: BTreeSet::new(),
        })
    }

    /// Seed constructor used for the fixed initial board.
    pub(crate) fn seeded(
        id: &str,
        title: &str,
        progress: f64,
        target: f64,
        unit: &str,
        cadence: CadenceType,
    ) -> Self {
        Self {
            id: GoalId::from(id),
            title: title.to_string(),
            progress: progress.clamp(0.0, target),
            target,
            unit: unit.to_string(),
            cadence,
            deadline: None,
            last_completed: None,
            streak: None,
            completion_history: BTreeSet::new(),
        }
    }

    /// Whether progress has reached the target.
    pub fn is_completed(&self) -> bool {
        self.progress >= self.target
    }

    /// Progress as a percentage of target (0-100).
    pub fn progress_percent(&self) -> f64 {
        self.progress / self.target * 100.0
    }
}

/// Input for creating a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGoal {
    /// Goal title
    pub title: String,
    /// Target value
    pub target: f64,
    /// Display unit
    pub unit: String,
    /// Cadence type
    #[serde(rename = "type")]
    pub cadence: CadenceType,
    /// Optional due date
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

impl NewGoal {
    /// Create a goal spec without a deadline.
    pub fn new(
        title: impl Into<String>,
        target: f64,
        unit: impl Into<String>,
        cadence: CadenceType,
    ) -> Self {
        Self {
            title: title.into(),
            target,
            unit: unit.into(),
            cadence,
            deadline: None,
        }
    }

    /// Set the deadline.
    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Build a spec from raw form fields.
    ///
    /// An empty `deadline` is treated as absent.
    pub fn from_form(
        title: &str,
        target: &str,
        unit: &str,
        cadence: &str,
        deadline: Option<&str>,
    ) -> Result<Self> {
        let target_text = target.trim();
        let target: f64 = target_text
            .parse()
            .map_err(|_| ValidationError::NonNumericTarget(target_text.to_string()))?;
        let cadence: CadenceType = cadence.parse()?;
        let deadline = match deadline.map(str::trim).filter(|d| !d.is_empty()) {
            Some(d) => Some(
                NaiveDate::parse_from_str(d, "%Y-%m-%d")
                    .map_err(|_| ValidationError::InvalidDeadline(d.to_string()))?,
            ),
            None => None,
        };

        let spec = Self {
            title: title.to_string(),
            target,
            unit: unit.to_string(),
            cadence,
            deadline,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check title, unit and target.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if !self.target.is_finite() || self.target <= 0.0 {
            return Err(ValidationError::InvalidTarget(self.target));
        }
        if self.unit.trim().is_empty() {
            return Err(ValidationError::EmptyUnit);
        }
        Ok(())
    }
}
