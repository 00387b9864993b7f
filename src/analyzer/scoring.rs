//! The four factor scorers.
//!
//! Each is a pure total function mapping one task dimension to a score in
//! [0, 1]. Invalid input degrades to a documented neutral value; no scorer
//! ever fails. Coercion of raw input happens in normalization, never here.

use crate::analyzer::types::{Task, TaskId};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

/// Urgency bucketed by days until the due date; `None` means no deadline.
///
/// The curve is not monotonic at the two-week boundary: 15 days out scores
/// 10/15 above the fixed 0.3 of the 8-14 day bucket. Kept as-is for
/// compatibility with existing rankings; see DESIGN.md.
pub fn urgency_score(due_date: Option<NaiveDate>, today: NaiveDate) -> f64 {
    let Some(due) = due_date else {
        return 0.3;
    };
    let days = (due - today).num_days();
    match days {
        ..=-1 => 1.0,
        0 => 0.9,
        1 => 0.8,
        2..=3 => 0.7,
        4..=7 => 0.5,
        8..=14 => 0.3,
        _ => (10.0 / days as f64).max(0.1),
    }
}

/// Inverted effort: smaller estimates score higher, quick wins peak at 1.0.
///
/// Shares the urgency curve's discontinuity (9 hours scores 8/9, above the
/// 4-8 hour bucket); also kept as-is.
pub fn effort_score(estimated_hours: f64) -> f64 {
    if !estimated_hours.is_finite() || estimated_hours <= 0.0 {
        return 0.5;
    }
    if estimated_hours <= 1.0 {
        1.0
    } else if estimated_hours <= 2.0 {
        0.8
    } else if estimated_hours <= 4.0 {
        0.6
    } else if estimated_hours <= 8.0 {
        0.4
    } else {
        (8.0 / estimated_hours).max(0.1)
    }
}

/// Importance on the 1-10 scale normalized to [0.1, 1.0]; anything outside
/// the scale scores the 0.5 neutral
pub fn importance_score(importance: u8) -> f64 {
    if (1..=10).contains(&importance) {
        importance as f64 / 10.0
    } else {
        0.5
    }
}

/// Step function over the number of tasks waiting on this one
pub fn blocking_score(dependents: u32) -> f64 {
    match dependents {
        0 => 0.1,
        1 => 0.4,
        2 => 0.7,
        _ => 1.0,
    }
}

/// Count, for every task id, how many other tasks list it as a dependency.
///
/// One linear pass over the batch instead of a per-task rescan, so blocking
/// scores stay O(n) overall. Duplicate dependency entries within one task
/// count once; ids nobody references simply have no entry.
pub fn blocking_counts(tasks: &[Task]) -> HashMap<TaskId, u32> {
    let mut counts: HashMap<TaskId, u32> = HashMap::with_capacity(tasks.len());
    let mut seen = HashSet::new();

    for task in tasks {
        seen.clear();
        for &dep in &task.dependencies {
            if dep != task.id && seen.insert(dep) {
                *counts.entry(dep).or_insert(0) += 1;
            }
        }
    }

    counts
}
