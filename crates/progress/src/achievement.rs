//! Achievement evaluation from aggregate goal statistics.

use std::collections::HashSet;

use lifeboard_core::{Achievement, AchievementId, Achievements, DomainId, Goal, Time};
use tracing::info;

/// Aggregates the unlock rules look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalStats {
    /// Goals at or above target
    pub completed_goals: usize,
    /// Highest streak on any goal
    pub max_streak: u32,
    /// Distinct domains holding at least one completed goal
    pub domains_with_completion: usize,
}

impl GoalStats {
    /// Collect stats over `(domain, goal)` pairs.
    pub fn collect<'a, I>(goals: I) -> Self
    where
        I: IntoIterator<Item = (&'a DomainId, &'a Goal)>,
    {
        let mut stats = Self::default();
        let mut domains: HashSet<&DomainId> = HashSet::new();

        for (domain_id, goal) in goals {
            if goal.is_completed() {
                stats.completed_goals += 1;
                domains.insert(domain_id);
            }
            stats.max_streak = stats.max_streak.max(goal.streak.unwrap_or(0));
        }

        stats.domains_with_completion = domains.len();
        stats
    }
}

fn condition_met(id: AchievementId, stats: &GoalStats, domain_count: usize) -> bool {
    match id {
        AchievementId::FirstGoal => stats.completed_goals >= 1,
        AchievementId::Complete10 => stats.completed_goals >= 10,
        AchievementId::Streak7 => stats.max_streak >= 7,
        AchievementId::Streak30 => stats.max_streak >= 30,
        AchievementId::AllDomains => {
            domain_count > 0 && stats.domains_with_completion == domain_count
        }
    }
}

/// Recompute achievements against the current goals.
///
/// Unlocks are monotonic: anything already unlocked in `previous` is kept
/// as-is, `unlocked_at` included, without re-checking its rule. Newly met
/// rules are stamped with `now`.
pub fn evaluate_achievements<'a, I>(
    previous: &Achievements,
    goals: I,
    domain_count: usize,
    now: Time,
) -> Achievements
where
    I: IntoIterator<Item = (&'a DomainId, &'a Goal)>,
{
    let stats = GoalStats::collect(goals);

    let evaluated = AchievementId::ALL
        .into_iter()
        .map(|id| {
            let current = previous
                .get(id)
                .cloned()
                .unwrap_or_else(|| Achievement::locked(id));
            if current.unlocked {
                return current;
            }
            if condition_met(id, &stats, domain_count) {
                info!("Achievement unlocked: {}", id);
                Achievement {
                    unlocked: true,
                    unlocked_at: Some(now),
                    ..current
                }
            } else {
                current
            }
        })
        .collect();

    Achievements(evaluated)
}

/// Achievements unlocked in `next` that were locked in `previous`.
pub fn newly_unlocked(previous: &Achievements, next: &Achievements) -> Vec<AchievementId> {
    next.iter()
        .filter(|a| a.unlocked && !previous.is_unlocked(a.id))
        .map(|a| a.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use lifeboard_core::{CadenceType, NewGoal};

    fn t(hour: u32) -> Time {
        Utc.with_ymd_and_hms(2026, 1, 10, hour, 0, 0).unwrap()
    }

    fn goal(completed: bool, streak: Option<u32>) -> Goal {
        let mut goal = Goal::new(NewGoal::new("Goal", 1.0, "x", CadenceType::Daily)).unwrap();
        goal.progress = if completed { 1.0 } else { 0.0 };
        goal.streak = streak;
        goal
    }

    fn pairs<'a>(items: &'a [(DomainId, Goal)]) -> impl Iterator<Item = (&'a DomainId, &'a Goal)> {
        items.iter().map(|(d, g)| (d, g))
    }

    #[test]
    fn test_nothing_unlocks_without_completions() {
        let items = vec![(DomainId::from("a"), goal(false, None))];
        let next = evaluate_achievements(&Achievements::catalog(), pairs(&items), 1, t(9));
        assert_eq!(next.unlocked_count(), 0);
    }

    #[test]
    fn test_first_goal_and_all_domains() {
        let items = vec![
            (DomainId::from("a"), goal(true, Some(1))),
            (DomainId::from("b"), goal(false, None)),
        ];
        let next = evaluate_achievements(&Achievements::catalog(), pairs(&items), 2, t(9));
        assert!(next.is_unlocked(AchievementId::FirstGoal));
        assert!(!next.is_unlocked(AchievementId::AllDomains));
        assert_eq!(next.get(AchievementId::FirstGoal).unwrap().unlocked_at, Some(t(9)));

        let items = vec![
            (DomainId::from("a"), goal(true, Some(1))),
            (DomainId::from("b"), goal(true, Some(1))),
        ];
        let next = evaluate_achievements(&next, pairs(&items), 2, t(10));
        assert!(next.is_unlocked(AchievementId::AllDomains));
    }

    #[test]
    fn test_all_domains_needs_domains() {
        let next = evaluate_achievements(&Achievements::catalog(), std::iter::empty::<(&DomainId, &Goal)>(), 0, t(9));
        assert!(!next.is_unlocked(AchievementId::AllDomains));
    }

    #[test]
    fn test_complete_ten() {
        let d = DomainId::from("a");
        let items: Vec<_> = (0..10).map(|_| (d.clone(), goal(true, Some(1)))).collect();
        let next = evaluate_achievements(&Achievements::catalog(), pairs(&items), 1, t(9));
        assert!(next.is_unlocked(AchievementId::Complete10));

        let items: Vec<_> = (0..9).map(|_| (d.clone(), goal(true, Some(1)))).collect();
        let next = evaluate_achievements(&Achievements::catalog(), pairs(&items), 1, t(9));
        assert!(!next.is_unlocked(AchievementId::Complete10));
    }

    #[test]
    fn test_streak_thresholds() {
        let items = vec![(DomainId::from("a"), goal(false, Some(7)))];
        let next = evaluate_achievements(&Achievements::catalog(), pairs(&items), 1, t(9));
        assert!(next.is_unlocked(AchievementId::Streak7));
        assert!(!next.is_unlocked(AchievementId::Streak30));

        let items = vec![(DomainId::from("a"), goal(false, Some(30)))];
        let next = evaluate_achievements(&next, pairs(&items), 1, t(10));
        assert!(next.is_unlocked(AchievementId::Streak30));
        // Earlier unlock keeps its timestamp
        assert_eq!(next.get(AchievementId::Streak7).unwrap().unlocked_at, Some(t(9)));
    }

    #[test]
    fn test_unlocks_are_never_revoked() {
        let items = vec![(DomainId::from("a"), goal(true, Some(1)))];
        let unlocked = evaluate_achievements(&Achievements::catalog(), pairs(&items), 1, t(9));

        let items = vec![(DomainId::from("a"), goal(false, Some(1)))];
        let later = evaluate_achievements(&unlocked, pairs(&items), 1, t(12));
        assert!(later.is_unlocked(AchievementId::FirstGoal));
        assert_eq!(later.get(AchievementId::FirstGoal).unwrap().unlocked_at, Some(t(9)));
    }

    #[test]
    fn test_newly_unlocked() {
        let before = Achievements::catalog();
        let items = vec![(DomainId::from("a"), goal(true, Some(7)))];
        let after = evaluate_achievements(&before, pairs(&items), 1, t(9));

        let fresh = newly_unlocked(&before, &after);
        assert_eq!(
            fresh,
            vec![AchievementId::FirstGoal, AchievementId::Streak7, AchievementId::AllDomains]
        );
        assert!(newly_unlocked(&after, &after).is_empty());
    }
}
