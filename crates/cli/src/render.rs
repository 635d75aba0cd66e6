//! Plain-text and JSON rendering of board views.

use std::fmt::Write;

use lifeboard_core::{Achievements, Domain, Goal};
use lifeboard_progress::{CompletionSignal, DomainSummary, Overview, ScoredGoal, TimelineBucket};
use serde::Serialize;

/// Render any view as pretty JSON.
pub fn json<T: Serialize>(view: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}

fn bar(percent: f64) -> String {
    let filled = (percent.clamp(0.0, 100.0) / 10.0).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(10 - filled))
}

fn goal_line(goal: &Goal) -> String {
    let mut line = format!(
        "{} {:>5.1}% {} / {} {}  {} ({})",
        bar(goal.progress_percent()),
        goal.progress_percent(),
        goal.progress,
        goal.target,
        goal.unit,
        goal.title,
        goal.id,
    );
    if let Some(deadline) = goal.deadline {
        let _ = write!(line, " due {}", deadline.format("%b %-d, %Y"));
    }
    if let Some(streak) = goal.streak {
        let _ = write!(line, " 🔥{}", streak);
    }
    if goal.is_completed() {
        line.push_str(" ✓");
    }
    line
}

/// Board totals.
pub fn overview(view: &Overview) -> String {
    format!(
        "Goals: {} total, {} completed\nOverall progress: {} {:.1}%",
        view.total_goals,
        view.completed_goals,
        bar(view.overall_progress_percent),
        view.overall_progress_percent,
    )
}

/// Domain cards.
pub fn domains(summaries: &[DomainSummary]) -> String {
    let mut out = String::new();
    for s in summaries {
        let _ = writeln!(
            out,
            "{} {:<14} {} {:>5.1}%  {}/{} completed  [{}] {}",
            s.icon,
            s.name,
            bar(s.average_progress_percent),
            s.average_progress_percent,
            s.completed_goals,
            s.total_goals,
            s.id,
            s.color,
        );
    }
    out.trim_end().to_string()
}

/// One domain's goal list.
pub fn domain(domain: &Domain) -> String {
    let mut out = format!("{} {}\n", domain.icon, domain.name);
    for goal in &domain.goals {
        let _ = writeln!(out, "  [{}] {}", goal.cadence, goal_line(goal));
    }
    out.trim_end().to_string()
}

/// Ranked focus list.
pub fn focus(ranked: &[ScoredGoal]) -> String {
    if ranked.is_empty() {
        return "Nothing to focus on - everything is complete.".to_string();
    }
    let mut out = String::from("Today's focus\n");
    for (i, entry) in ranked.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. ({:>4}) [{}] {}",
            i + 1,
            entry.score,
            entry.goal.cadence,
            goal_line(&entry.goal)
        );
    }
    out.trim_end().to_string()
}

/// Cadence buckets.
pub fn timeline(buckets: &[TimelineBucket]) -> String {
    let mut out = String::new();
    for bucket in buckets {
        let _ = writeln!(out, "{}", bucket.cadence.as_str().to_uppercase());
        for goal in &bucket.goals {
            let _ = writeln!(out, "  {}", goal_line(goal));
        }
    }
    out.trim_end().to_string()
}

/// Achievement list.
pub fn achievements(achievements: &Achievements) -> String {
    let mut out = format!("Achievements ({}/{})\n", achievements.unlocked_count(), achievements.0.len());
    for a in achievements.iter() {
        let state = match a.unlocked_at {
            Some(at) if a.unlocked => format!("unlocked {}", at.format("%Y-%m-%d %H:%M")),
            _ => "locked".to_string(),
        };
        let _ = writeln!(out, "  {} {:<14} {:<36} {}", a.icon, a.title, a.description, state);
    }
    out.trim_end().to_string()
}

/// Celebration line for a completion.
pub fn celebration(signal: &CompletionSignal) -> String {
    format!(
        "🎉 Completed \"{}\"! streak {} ({})",
        signal.title, signal.streak, signal.domain_color
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeboard_core::BoardState;
    use lifeboard_progress::{derive_overview, summarize_domains};

    #[test]
    fn test_bar_bounds() {
        assert_eq!(bar(0.0), "[..........]");
        assert_eq!(bar(100.0), "[##########]");
        assert_eq!(bar(250.0), "[##########]");
        assert_eq!(bar(45.0), "[#####.....]");
    }

    #[test]
    fn test_overview_text() {
        let text = overview(&derive_overview(&BoardState::seeded()));
        assert!(text.starts_with("Goals: 22 total, 1 completed"));
    }

    #[test]
    fn test_domains_lists_every_domain() {
        let text = domains(&summarize_domains(&BoardState::seeded()));
        assert_eq!(text.lines().count(), 7);
        assert!(text.contains("Cycling"));
    }

    #[test]
    fn test_focus_empty() {
        assert!(focus(&[]).starts_with("Nothing to focus on"));
    }
}
