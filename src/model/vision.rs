//! Vision Field Calculator: which grid cells are lit by at least one
//! robot's field of view in the current snapshot.

use crate::model::snapshot::RobotView;
use std::collections::HashSet;

/// Illuminated cell coordinates. May hold negative or out-of-grid entries;
/// those simply never match a real cell when the grid is composed.
pub type VisionSet = HashSet<(i64, i64)>;

/// Four orthogonal neighbors.
const ORTHOGONAL: &[(i64, i64)] = &[(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The 3x3 block around a robot, excluding its own cell.
const SURROUNDING: &[(i64, i64)] = &[
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Offset pattern for a vision class. The set of supported classes is
/// closed; anything else contributes nothing.
fn offsets_for(vision: u32) -> &'static [(i64, i64)] {
    match vision {
        4 => ORTHOGONAL,
        8 => SURROUNDING,
        _ => &[],
    }
}

/// Union of every robot's vision footprint. Pure; no bounds clipping.
pub fn compute_vision_set(robots: &[RobotView]) -> VisionSet {
    let mut set = VisionSet::new();
    for r in robots {
        for (dx, dy) in offsets_for(r.vision) {
            set.insert((r.x + dx, r.y + dy));
        }
    }
    set
}
