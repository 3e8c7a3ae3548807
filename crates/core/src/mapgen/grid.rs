//! Grid storage and cell-space queries shared by generation, validation, and
//! movement.

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{CellKind, CellPos};

/// Square grid of road/wall cells. A pure function of `(seed, size)` when
/// produced by [`crate::mapgen::generate_map`]; the mutators exist for
/// collaborators and tests that assemble fixture layouts by hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapGrid {
    size: usize,
    cells: Vec<CellKind>,
}

impl MapGrid {
    /// All-road grid, the starting point of generation and the layout used in
    /// fallback mode.
    pub fn open(size: usize) -> Self {
        Self { size, cells: vec![CellKind::Road; size * size] }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Out-of-range cells always read as wall, so the border needs no special
    /// casing anywhere else.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return true;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.size || y >= self.size {
            return true;
        }
        self.cells[y * self.size + x] == CellKind::Wall
    }

    /// Silently ignores out-of-range positions; wall segments are clipped at
    /// the border rather than rejected.
    pub fn set_wall(&mut self, pos: CellPos) {
        if pos.x < 0 || pos.y < 0 {
            return;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= self.size || y >= self.size {
            return;
        }
        self.cells[y * self.size + x] = CellKind::Wall;
    }

    /// Road cells in row-major order. The order is part of the deterministic
    /// contract: start-pair selection indexes into it.
    pub fn road_cells(&self) -> Vec<CellPos> {
        let mut roads = Vec::new();
        for y in 0..self.size {
            for x in 0..self.size {
                if self.cells[y * self.size + x] == CellKind::Road {
                    roads.push(CellPos { x: x as i32, y: y as i32 });
                }
            }
        }
        roads
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(4 + self.cells.len());
        bytes.extend((self.size as u32).to_le_bytes());
        for cell in &self.cells {
            bytes.push(match cell {
                CellKind::Road => 0,
                CellKind::Wall => 1,
            });
        }
        bytes
    }

    /// Stable digest for cross-client divergence checks: two participants that
    /// regenerated the same `(seed, size)` must agree on this value.
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

pub fn manhattan(a: CellPos, b: CellPos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}
