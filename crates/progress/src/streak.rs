//! Consecutive-completion streaks.

use chrono::{Duration, NaiveDate};
use lifeboard_core::{CadenceType, Goal};

/// Slack absorbed when matching a weekly entry to its expected day.
const TOLERANCE_DAYS: i64 = 1;

/// Streak a goal reaches by completing on `today`.
///
/// History is walked most-recent-first, skipping entries dated `today` or
/// later (a same-day re-completion is the same completion). Each remaining
/// entry must land on the slot expected for it: `today - (i+1)` days for
/// daily, within one day of `today - (i+1)` weeks for weekly. Daily slots
/// get no slack since one day there is a whole missed period. The first
/// miss ends the walk. Other cadences never advance past 1.
pub fn compute_streak(goal: &Goal, today: NaiveDate) -> u32 {
    let (period_days, tolerance) = match goal.cadence {
        CadenceType::Daily => (1, 0),
        CadenceType::Weekly => (7, TOLERANCE_DAYS),
        _ => return 1,
    };

    let mut streak = 1;
    for (i, entry) in goal.completion_history.range(..today).rev().enumerate() {
        let expected = today - Duration::days((i as i64 + 1) * period_days);
        if (*entry - expected).num_days().abs() > tolerance {
            break;
        }
        streak += 1;
    }
    streak
}
