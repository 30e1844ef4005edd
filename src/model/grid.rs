//! Grid Composer: expand the vision set into the full ordered cell matrix.

use crate::model::vision::VisionSet;

/// One grid position with its illumination flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
    pub illuminated: bool,
}

/// Emit all `size * size` cells in row-major order (y outer, x inner).
///
/// The ordering is load-bearing: the renderer maps positional index to
/// screen layout, so it must match the reference row-major walk exactly.
/// Vision entries outside `[0, size)` never match a cell and are ignored.
pub fn compose_grid(size: u32, vision: &VisionSet) -> Vec<Cell> {
    let side = size as i64;
    let mut cells = Vec::with_capacity((side * side) as usize);
    for y in 0..side {
        for x in 0..side {
            cells.push(Cell {
                x,
                y,
                illuminated: vision.contains(&(x, y)),
            });
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two_in_reference_order() {
        let vision: VisionSet = [(1, 0)].into_iter().collect();
        let cells = compose_grid(2, &vision);
        assert_eq!(
            cells,
            vec![
                Cell {
                    x: 0,
                    y: 0,
                    illuminated: false
                },
                Cell {
                    x: 1,
                    y: 0,
                    illuminated: true
                },
                Cell {
                    x: 0,
                    y: 1,
                    illuminated: false
                },
                Cell {
                    x: 1,
                    y: 1,
                    illuminated: false
                },
            ]
        );
    }

    #[test]
    fn out_of_grid_vision_entries_are_inert() {
        let vision: VisionSet = [(-1, 0), (0, -1), (2, 0), (0, 2)].into_iter().collect();
        let cells = compose_grid(2, &vision);
        assert!(cells.iter().all(|c| !c.illuminated));
    }

    #[test]
    fn cell_count_is_size_squared() {
        let vision = VisionSet::new();
        assert_eq!(compose_grid(16, &vision).len(), 256);
        assert_eq!(compose_grid(1, &vision).len(), 1);
    }
}
