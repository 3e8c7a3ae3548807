//! Spectator-side queries over the regenerated world.

use crate::labels::shop_name;
use crate::mapgen::{MapGrid, manhattan};
use crate::types::CellPos;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NearbyShop {
    pub pos: CellPos,
    pub name: String,
    pub distance: u32,
}

/// Shops within Manhattan `radius` of `center`, closest first, ties broken by
/// `(y, x)` so spectators render the list in a stable order.
pub fn nearby_shops(grid: &MapGrid, seed: &str, center: CellPos, radius: u32) -> Vec<NearbyShop> {
    let reach = radius as i32;
    let mut found = Vec::new();
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            let cell = CellPos { x: center.x + dx, y: center.y + dy };
            if manhattan(center, cell) > radius || grid.is_wall(cell.x, cell.y) {
                continue;
            }
            found.push(NearbyShop {
                pos: cell,
                name: shop_name(seed, cell.x, cell.y),
                distance: manhattan(center, cell),
            });
        }
    }
    found.sort_by_key(|shop| (shop.distance, shop.pos.y, shop.pos.x));
    found
}
