//! Deterministic per-cell shop labels with 5x5 theme clustering.
//!
//! Labels are derived, never stored: every surface recomputes them from the
//! session seed, so a label can never drift between a player and a spectator.

use crate::rng::hash_text;

pub const PREFIXES: [&str; 30] = [
    "Brightstar", "Silverbirch", "Redgate", "Bluetide", "Goldrow", "Whitefeather",
    "Deepsky", "Glimmer", "Pinegrove", "Stonebridge", "Sunrise", "Starriver",
    "Violetlight", "Cloudtop", "Hillside", "Harborview", "Corner", "Seabreeze",
    "Bambooshade", "Fairweather", "Leafwood", "Mistpeak", "Lumen", "Riverrun",
    "Newmoon", "Ironstreet", "Rainlane", "Southeast", "Northbay", "Westport",
];

/// Shop types; one becomes dominant per 5x5 block.
pub const THEMES: [&str; 30] = [
    "Coffee☕", "Bakery🥐", "Pharmacy💊", "Convenience🛒", "Clinic⚕️", "Books📘",
    "Stationery✏️", "Flowers🌸", "Teahouse🍵", "Icehouse🧊", "Diner🍱", "Breakfast🥚",
    "Grocery🏪", "Department🛍️", "Phones📱", "Clothing👗", "Toys🧸", "Hardware🔧",
    "Newsstand📰", "Sundries🧂", "Fruit🍎", "Noodles🍜", "Dumplings🍡", "Desserts🍰",
    "Household🧴", "Bazaar🎪", "Snacks🍿", "Drinks🥤", "Soups🍲", "Pasta🍝",
];

pub const SUFFIXES: [&str; 30] = [
    "Stall", "Store", "Hall", "Cottage", "Atelier", "Center", "House", "Trading",
    "Grove", "Stop", "Workshop", "Market", "Room", "Nook", "Tower", "Depot",
    "Hut", "Pavilion", "Emporium", "Base", "Kitchen", "Studio", "Collective",
    "Club", "Alley", "Courtyard", "Rowhouse", "Garden", "Pier", "Shed",
];

/// Side length of a theme cluster block.
const BLOCK: i32 = 5;

/// Share of cells in a block that take the dominant theme, in percent.
const DOMINANT_SHARE: u32 = 70;

/// Display label for cell `(x, y)`. Same inputs always yield the identical
/// string; no state is kept between calls.
pub fn shop_name(seed: &str, x: i32, y: i32) -> String {
    let base = hash_text(&format!("{seed}:{x}:{y}"));
    let group = block_hash(seed, x, y);

    let prefix = PREFIXES[base as usize % PREFIXES.len()];
    let suffix = SUFFIXES[(base / 31) as usize % SUFFIXES.len()];

    let theme_count = THEMES.len() as u32;
    let dominant = group % theme_count;
    // Two independent digits of the cell hash decide dominant vs. alternate,
    // keeping blocks thematic without turning them monotone.
    let roll = (base / (31 * 31)) % 100;
    let theme_index = if roll < DOMINANT_SHARE {
        dominant
    } else {
        (dominant + 1 + group % (theme_count - 1)) % theme_count
    };

    format!("{prefix} {} {suffix}", THEMES[theme_index as usize])
}

/// Dominant theme of the 5x5 block containing `(x, y)`.
pub fn block_theme(seed: &str, x: i32, y: i32) -> &'static str {
    THEMES[(block_hash(seed, x, y) as usize) % THEMES.len()]
}

fn block_hash(seed: &str, x: i32, y: i32) -> u32 {
    let block_x = x.div_euclid(BLOCK);
    let block_y = y.div_euclid(BLOCK);
    hash_text(&format!("{seed}:cluster:{block_x}:{block_y}"))
}
