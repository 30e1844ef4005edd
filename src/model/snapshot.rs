//! Wire types for the `/state` document served by the game server.
//!
//! A snapshot is immutable once received: the poller replaces the whole
//! thing, there is no incremental patching.

use serde::{Deserialize, Serialize};

/// One complete description of the simulation at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub round: u64,
    /// Side length of the square grid.
    pub grid: u32,
    /// Current round delay in nanoseconds. Older server builds omit it.
    #[serde(default)]
    pub delay: u64,
    pub robots: Vec<RobotView>,
}

/// A single robot entry as the server reports it.
///
/// `name` is NOT unique across entries: the same entrant may appear more
/// than once in a feed, and the leaderboard sums those contributions while
/// the grid renders each entry on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotView {
    pub name: String,
    pub x: i64,
    pub y: i64,
    /// Hex color token, e.g. "#e6194b".
    pub color: String,
    /// 0 = up, 1 = right, 2 = down, 3 = left.
    pub direction: u8,
    /// Vision radius class: 0, 4 or 8.
    pub vision: u32,
    pub score: i64,
}

/// Facing arrows indexed by `direction`.
pub const ARROWS: [char; 4] = ['↑', '→', '↓', '←'];

/// Unit offset of the cell a robot faces, indexed by `direction`.
pub const FACING: [(i64, i64); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

impl RobotView {
    /// Arrow glyph for this robot's heading, if the direction is valid.
    pub fn arrow(&self) -> Option<char> {
        ARROWS.get(self.direction as usize).copied()
    }

    /// Coordinates of the cell this robot faces, if the direction is valid.
    pub fn facing_cell(&self) -> Option<(i64, i64)> {
        FACING
            .get(self.direction as usize)
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("grid side length must be positive")]
    ZeroGrid,
    #[error("robot at index {0} has an empty name")]
    EmptyName(usize),
    #[error("robot {name:?} has direction {direction}, expected 0..=3")]
    BadDirection { name: String, direction: u8 },
}

impl StateSnapshot {
    /// Fail-fast structural check applied before a snapshot is committed.
    ///
    /// Out-of-grid coordinates and unrecognized vision classes are NOT
    /// rejected here: both are inert downstream (they illuminate nothing
    /// and match no cell).
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.grid == 0 {
            return Err(SnapshotError::ZeroGrid);
        }
        for (i, robot) in self.robots.iter().enumerate() {
            if robot.name.is_empty() {
                return Err(SnapshotError::EmptyName(i));
            }
            if robot.direction > 3 {
                return Err(SnapshotError::BadDirection {
                    name: robot.name.clone(),
                    direction: robot.direction,
                });
            }
        }
        Ok(())
    }
}
