//! Intersection-space movement and the 2x2 forward field of view.
//!
//! This is the single home of the offset arithmetic. Player and spectator
//! surfaces must call through here instead of re-deriving it, so the three
//! call sites can never drift apart geometrically.

use crate::labels::shop_name;
use crate::mapgen::MapGrid;
use crate::types::{CellPos, CellView, CellViewport, Direction, Intersection};

/// Canonical facing-north view: left/right near then left/right far, as cell
/// offsets from the player's intersection.
const FOV_NORTH: [(i32, i32); 4] = [(-1, -1), (0, -1), (-1, -2), (0, -2)];

/// The four forward cells seen from `at` when facing `direction`, split into
/// left/right near/far relative to the facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FovCells {
    pub left_near: CellPos,
    pub right_near: CellPos,
    pub left_far: CellPos,
    pub right_far: CellPos,
}

impl FovCells {
    pub fn all(self) -> [CellPos; 4] {
        [self.left_near, self.right_near, self.left_far, self.right_far]
    }
}

/// One quarter turn clockwise of a cell offset about the intersection origin.
/// Cells are corner-indexed, so the rotated square `(dx, dy)..(dx+1, dy+1)`
/// lands at `(-dy-1, dx)`.
fn rotate_cell_offset(offset: (i32, i32)) -> (i32, i32) {
    (-offset.1 - 1, offset.0)
}

pub fn field_of_view(at: Intersection, direction: Direction) -> FovCells {
    let mut offsets = FOV_NORTH;
    for _ in 0..direction.index() {
        for offset in &mut offsets {
            *offset = rotate_cell_offset(*offset);
        }
    }
    let cell = |(dx, dy): (i32, i32)| CellPos { x: at.ix + dx, y: at.iy + dy };
    FovCells {
        left_near: cell(offsets[0]),
        right_near: cell(offsets[1]),
        left_far: cell(offsets[2]),
        right_far: cell(offsets[3]),
    }
}

/// The two grid cells straddling the edge crossed when stepping from `at`
/// towards `direction`.
fn edge_cells(at: Intersection, direction: Direction) -> (CellPos, CellPos) {
    let (ix, iy) = (at.ix, at.iy);
    match direction {
        Direction::North => (CellPos { x: ix - 1, y: iy - 1 }, CellPos { x: ix, y: iy - 1 }),
        Direction::East => (CellPos { x: ix, y: iy - 1 }, CellPos { x: ix, y: iy }),
        Direction::South => (CellPos { x: ix - 1, y: iy }, CellPos { x: ix, y: iy }),
        Direction::West => (CellPos { x: ix - 1, y: iy - 1 }, CellPos { x: ix - 1, y: iy }),
    }
}

/// Attempts one step in `direction`. Returns the next intersection, or `None`
/// when the step leaves `[0, size]` on either axis or both straddling cells
/// are walls. One open side is enough to pass: walls block the gap between
/// two cells, not the intersection itself.
pub fn try_move(grid: &MapGrid, at: Intersection, direction: Direction) -> Option<Intersection> {
    let (dx, dy) = direction.step();
    let next = Intersection { ix: at.ix + dx, iy: at.iy + dy };
    let limit = grid.size() as i32;
    if next.ix < 0 || next.ix > limit || next.iy < 0 || next.iy > limit {
        return None;
    }

    let (first, second) = edge_cells(at, direction);
    if grid.is_wall(first.x, first.y) && grid.is_wall(second.x, second.y) {
        return None;
    }
    Some(next)
}

/// Resolves one cell for display. Out-of-range cells are reported as such,
/// not as walls, so the HUD can distinguish the map edge from a building.
pub fn describe_cell(grid: &MapGrid, seed: &str, cell: CellPos) -> CellView {
    let limit = grid.size() as i32;
    if cell.x < 0 || cell.x >= limit || cell.y < 0 || cell.y >= limit {
        return CellView::OutOfBounds;
    }
    if grid.is_wall(cell.x, cell.y) {
        return CellView::Wall;
    }
    CellView::Shop(shop_name(seed, cell.x, cell.y))
}

/// The fully resolved forward view, ready for any surface to render.
pub fn view_forward(
    grid: &MapGrid,
    seed: &str,
    at: Intersection,
    direction: Direction,
) -> CellViewport {
    let cells = field_of_view(at, direction);
    CellViewport {
        left_near: describe_cell(grid, seed, cells.left_near),
        right_near: describe_cell(grid, seed, cells.right_near),
        left_far: describe_cell(grid, seed, cells.left_far),
        right_far: describe_cell(grid, seed, cells.right_far),
    }
}
