//! Timeline grouping by cadence and deadline.

use std::cmp::Ordering;

use lifeboard_core::{CadenceType, Goal};
use serde::{Deserialize, Serialize};

/// All goals of one cadence, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineBucket {
    /// Bucket cadence
    pub cadence: CadenceType,
    /// Goals sorted by deadline, then title
    pub goals: Vec<Goal>,
}

/// Dated goals first by ascending deadline, undated ones after; title breaks
/// every remaining tie.
fn timeline_order(a: &Goal, b: &Goal) -> Ordering {
    match (a.deadline, b.deadline) {
        (Some(da), Some(db)) => da.cmp(&db).then_with(|| a.title.cmp(&b.title)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.title.cmp(&b.title),
    }
}

/// Bucket goals by cadence in canonical order, skipping empty buckets.
pub fn group_by_timeline<'a, I>(goals: I) -> Vec<TimelineBucket>
where
    I: IntoIterator<Item = &'a Goal>,
{
    let goals: Vec<&Goal> = goals.into_iter().collect();

    CadenceType::ALL
        .into_iter()
        .filter_map(|cadence| {
            let mut bucket: Vec<Goal> = goals
                .iter()
                .filter(|g| g.cadence == cadence)
                .map(|g| (*g).clone())
                .collect();
            if bucket.is_empty() {
                return None;
            }
            bucket.sort_by(timeline_order);
            Some(TimelineBucket {
                cadence,
                goals: bucket,
            })
        })
        .collect()
}
