//! Leaderboard Aggregator: fold the raw robot feed into a ranked,
//! name-deduplicated top-N score table.

use crate::model::snapshot::RobotView;
use std::collections::HashMap;

/// Default number of rows shown in the table.
pub const DEFAULT_TABLE_SIZE: usize = 8;

/// One row of the leaderboard. `name` is unique within a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: i64,
}

/// Sum scores per name, rank descending, keep the top `top_n`.
///
/// Entries sharing a name are contributions to one logical entrant, so a
/// robot appearing twice in the feed must not produce two rows (or be
/// ranked by only one of its scores, as a naive sort of the raw list
/// would). The fold uses an explicit map keyed by name; first-seen order
/// is kept as the pre-sort order.
pub fn aggregate(robots: &[RobotView], top_n: usize) -> Vec<LeaderboardEntry> {
    let mut totals: HashMap<&str, i64> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for r in robots {
        let total = totals.entry(r.name.as_str()).or_insert_with(|| {
            order.push(r.name.as_str());
            0
        });
        *total += r.score;
    }

    let mut table: Vec<LeaderboardEntry> = order
        .into_iter()
        .map(|name| LeaderboardEntry {
            name: name.to_string(),
            score: totals[name],
        })
        .collect();
    table.sort_by(|a, b| b.score.cmp(&a.score));
    table.truncate(top_n);
    table
}
