//! Achievement model - badges unlocked by aggregate goal statistics.

use serde::{Deserialize, Serialize};

use crate::Time;

/// Identifier of an achievement in the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    /// At least one goal completed
    #[serde(rename = "first-goal")]
    FirstGoal,
    /// At least ten goals completed
    #[serde(rename = "complete-10")]
    Complete10,
    /// Some goal reached a streak of 7
    #[serde(rename = "streak-7")]
    Streak7,
    /// Some goal reached a streak of 30
    #[serde(rename = "streak-30")]
    Streak30,
    /// Every domain has a completed goal
    #[serde(rename = "all-domains")]
    AllDomains,
}

impl AchievementId {
    /// Catalog order.
    pub const ALL: [AchievementId; 5] = [
        AchievementId::FirstGoal,
        AchievementId::Complete10,
        AchievementId::Streak7,
        AchievementId::Streak30,
        AchievementId::AllDomains,
    ];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementId::FirstGoal => "first-goal",
            AchievementId::Complete10 => "complete-10",
            AchievementId::Streak7 => "streak-7",
            AchievementId::Streak30 => "streak-30",
            AchievementId::AllDomains => "all-domains",
        }
    }

    fn presentation(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            AchievementId::FirstGoal => ("First Steps", "Complete your first goal", "🎯"),
            AchievementId::Complete10 => ("Goal Crusher", "Complete 10 goals", "🏆"),
            AchievementId::Streak7 => ("Week Warrior", "Reach a 7 streak on any goal", "🔥"),
            AchievementId::Streak30 => ("Unstoppable", "Reach a 30 streak on any goal", "⚡"),
            AchievementId::AllDomains => ("Well Rounded", "Complete a goal in every domain", "🌟"),
        }
    }
}

impl std::fmt::Display for AchievementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single badge and its unlock state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Catalog identifier
    pub id: AchievementId,
    /// Display title
    pub title: String,
    /// What it takes to unlock
    pub description: String,
    /// Display icon
    pub icon: String,
    /// Whether it has been unlocked
    pub unlocked: bool,
    /// When it was first unlocked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<Time>,
}

impl Achievement {
    /// A locked achievement with its catalog presentation.
    pub fn locked(id: AchievementId) -> Self {
        let (title, description, icon) = id.presentation();
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            unlocked: false,
            unlocked_at: None,
        }
    }
}

/// The full set of achievements in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Achievements(pub Vec<Achievement>);

impl Achievements {
    /// Every catalog entry, all locked.
    pub fn catalog() -> Self {
        Self(AchievementId::ALL.into_iter().map(Achievement::locked).collect())
    }

    /// Look up one achievement.
    pub fn get(&self, id: AchievementId) -> Option<&Achievement> {
        self.0.iter().find(|a| a.id == id)
    }

    /// Whether the given achievement is unlocked.
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.get(id).is_some_and(|a| a.unlocked)
    }

    /// Iterate in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Achievement> {
        self.0.iter()
    }

    /// Number of unlocked achievements.
    pub fn unlocked_count(&self) -> usize {
        self.0.iter().filter(|a| a.unlocked).count()
    }
}

impl Default for Achievements {
    fn default() -> Self {
        Self::catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_starts_locked() {
        let achievements = Achievements::catalog();
        assert_eq!(achievements.0.len(), 5);
        assert_eq!(achievements.unlocked_count(), 0);
        assert!(achievements.iter().all(|a| a.unlocked_at.is_none()));
    }

    #[test]
    fn test_achievement_ids_use_kebab_names() {
        for id in AchievementId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }
}
