//! Wall segment placement over an open grid.

use crate::rng::SeedStream;
use crate::types::CellPos;

use super::grid::MapGrid;

/// Wall density tier by board size. Small boards stay sparser so the 2x2
/// forward view is not blocked from the first intersection on.
fn wall_density(size: usize) -> f64 {
    if size <= 10 {
        0.035
    } else if size <= 25 {
        0.06
    } else {
        0.08
    }
}

/// Average painted segment length; lengths are drawn in 2..=4.
const MEAN_SEGMENT_LENGTH: f64 = 3.0;

pub(super) fn wall_segment_count(size: usize) -> usize {
    let total_cells = (size * size) as f64;
    ((total_cells * wall_density(size) / MEAN_SEGMENT_LENGTH) as usize).max(1)
}

/// Paints `segments` straight wall runs, consuming the stream in a fixed
/// order: orientation, length, start x, start y per segment. Cells falling
/// outside the grid are clipped. Connectivity is not guaranteed here; session
/// validation owns that.
pub(super) fn paint_wall_segments(grid: &mut MapGrid, stream: &mut SeedStream, segments: usize) {
    let size = grid.size();
    for _ in 0..segments {
        let horizontal = stream.next_f64() < 0.5;
        let length = 2 + stream.next_below(3);
        let start_x = stream.next_below(size) as i32;
        let start_y = stream.next_below(size) as i32;
        for offset in 0..length as i32 {
            let (x, y) = if horizontal {
                (start_x + offset, start_y)
            } else {
                (start_x, start_y + offset)
            };
            grid.set_wall(CellPos { x, y });
        }
    }
}
