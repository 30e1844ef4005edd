//! Per-snapshot bundle of everything the presentation layer reads.

use crate::model::grid::{compose_grid, Cell};
use crate::model::leaderboard::{aggregate, LeaderboardEntry};
use crate::model::snapshot::{RobotView, StateSnapshot};
use crate::model::vision::compute_vision_set;

/// Display-ready view of one snapshot: the ordered cell matrix, the ranked
/// leaderboard, and the raw robot list (unaggregated, for icon placement).
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFrame {
    pub round: u64,
    pub grid: u32,
    pub delay_ns: u64,
    pub cells: Vec<Cell>,
    pub leaders: Vec<LeaderboardEntry>,
    pub robots: Vec<RobotView>,
}

impl DisplayFrame {
    /// Run the three derivations over one snapshot. Pure; calling it twice
    /// on the same snapshot yields identical frames.
    pub fn derive(snapshot: &StateSnapshot, leaderboard_size: usize) -> Self {
        let vision = compute_vision_set(&snapshot.robots);
        Self {
            round: snapshot.round,
            grid: snapshot.grid,
            delay_ns: snapshot.delay,
            cells: compose_grid(snapshot.grid, &vision),
            leaders: aggregate(&snapshot.robots, leaderboard_size),
            robots: snapshot.robots.clone(),
        }
    }
}
