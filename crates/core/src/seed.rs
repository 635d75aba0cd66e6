//! Fixed initial board.

use crate::domain::Domain;
use crate::goal::{CadenceType::*, Goal};

/// The seven seeded life domains with their starting goals.
pub fn seed_domains() -> Vec<Domain> {
    vec![
        Domain::new("cycling", "Cycling", "#10b981", "🚴").with_goals(vec![
            Goal::seeded("c1", "Ride 100km this week", 45.0, 100.0, "km", Weekly),
            Goal::seeded("c2", "Cycle 3 times this week", 2.0, 3.0, "rides", Weekly),
            Goal::seeded("c3", "Climb 500m elevation", 320.0, 500.0, "m", Weekly),
        ]),
        Domain::new("gym", "Gym", "#ef4444", "💪").with_goals(vec![
            Goal::seeded("g1", "Gym 3x per week", 2.0, 3.0, "sessions", Weekly),
            Goal::seeded("g2", "Bench press 100kg", 85.0, 100.0, "kg", Deadline),
            Goal::seeded("g3", "Squat 120kg", 105.0, 120.0, "kg", Deadline),
            Goal::seeded("g4", "Deadlift 150kg", 140.0, 150.0, "kg", Deadline),
        ]),
        Domain::new("leetcode", "LeetCode", "#3b82f6", "💻").with_goals(vec![
            Goal::seeded("l1", "Solve 5 problems this week", 3.0, 5.0, "problems", Weekly),
            Goal::seeded("l2", "Complete 200 problems total", 156.0, 200.0, "problems", Yearly),
            Goal::seeded("l3", "Master Dynamic Programming", 12.0, 20.0, "patterns", Monthly),
        ]),
        Domain::new("system-design", "System Design", "#8b5cf6", "🏗️").with_goals(vec![
            Goal::seeded("s1", "Complete 10 case studies", 4.0, 10.0, "studies", Monthly),
            Goal::seeded("s2", "Design 3 systems from scratch", 1.0, 3.0, "systems", Quarterly),
            Goal::seeded("s3", "Read 5 design books", 2.0, 5.0, "books", Yearly),
        ]),
        Domain::new("side-project", "Side Project", "#f59e0b", "🚀").with_goals(vec![
            Goal::seeded("p1", "Complete MVP", 75.0, 100.0, "%", Deadline),
            Goal::seeded("p2", "Deploy to production", 30.0, 100.0, "%", Monthly),
            Goal::seeded("p3", "Get 100 users", 23.0, 100.0, "users", Quarterly),
        ]),
        Domain::new("socializing", "Socializing", "#ec4899", "👥").with_goals(vec![
            Goal::seeded("so1", "Meet 2 new people this week", 1.0, 2.0, "people", Weekly),
            Goal::seeded("so2", "Attend 1 social event", 1.0, 1.0, "events", Weekly),
            Goal::seeded("so3", "Call friends 3 times", 2.0, 3.0, "calls", Weekly),
        ]),
        Domain::new("travel", "Travel", "#06b6d4", "✈️").with_goals(vec![
            Goal::seeded("t1", "Visit 3 new countries", 1.0, 3.0, "countries", Yearly),
            Goal::seeded("t2", "Save $5000 for travel", 3200.0, 5000.0, "$", Yearly),
            Goal::seeded("t3", "Plan next trip", 60.0, 100.0, "%", Monthly),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_shape() {
        let domains = seed_domains();
        assert_eq!(domains.len(), 7);
        assert_eq!(domains.iter().map(|d| d.goals.len()).sum::<usize>(), 22);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let domains = seed_domains();
        let domain_ids: HashSet<_> = domains.iter().map(|d| d.id.clone()).collect();
        assert_eq!(domain_ids.len(), domains.len());

        let goal_ids: HashSet<_> = domains
            .iter()
            .flat_map(|d| d.goals.iter().map(|g| g.id.clone()))
            .collect();
        assert_eq!(goal_ids.len(), 22);
    }

    #[test]
    fn test_seed_respects_progress_bounds() {
        for domain in seed_domains() {
            for goal in &domain.goals {
                assert!(goal.target > 0.0);
                assert!(goal.progress >= 0.0 && goal.progress <= goal.target, "{}", goal.id);
            }
        }
    }
}
