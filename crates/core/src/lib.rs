pub mod labels;
pub mod mapgen;
pub mod movement;
pub mod overview;
pub mod records;
pub mod rng;
pub mod session;
pub mod types;

pub use labels::{block_theme, shop_name};
pub use mapgen::{MapGrid, generate_map, manhattan};
pub use movement::{FovCells, describe_cell, field_of_view, try_move, view_forward};
pub use overview::{NearbyShop, nearby_shops};
pub use records::{PlayerRecord, RoomRecord, RoomStatus, StoredPlayer};
pub use session::{SessionEvent, SessionPlan, build_session, build_session_traced};
pub use types::*;
