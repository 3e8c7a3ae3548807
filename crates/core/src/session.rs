//! Session construction: choosing a `(seed, start, start)` triple whose two
//! starting positions can actually reach each other.
//!
//! This is the only component that retries, and the only one with a
//! user-visible failure. Everything it returns is regenerated by every
//! consumer from the seed alone; the grid itself is never persisted.

use std::collections::{BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::mapgen::{MapGrid, generate_map, manhattan};
use crate::records::PlayerRecord;
use crate::rng::SeedStream;
use crate::types::{CellPos, Intersection, Role};

/// Seed variants tried before giving up on wall layouts entirely.
pub const SEED_ATTEMPTS: usize = 10;
/// Start pairs sampled per seed variant.
pub const PAIR_ATTEMPTS: usize = 80;

/// The externally persisted outcome of session construction. Consumers call
/// [`SessionPlan::realize_grid`] to rebuild the board; nothing else is shared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPlan {
    pub seed: String,
    pub start_a: Intersection,
    pub start_b: Intersection,
    /// When set, the board is treated as obstacle-free: wall layouts for this
    /// seed were exhausted without a reachable pair.
    pub fallback: bool,
}

impl SessionPlan {
    /// The grid every participant must use for this session. Fallback
    /// sessions ignore the generated walls entirely.
    pub fn realize_grid(&self, size: usize) -> MapGrid {
        if self.fallback { MapGrid::open(size) } else { generate_map(&self.seed, size) }
    }

    /// Initial rows for the external player store.
    pub fn player_records(&self) -> [PlayerRecord; 2] {
        [
            PlayerRecord::at_start(Role::A, self.start_a),
            PlayerRecord::at_start(Role::B, self.start_b),
        ]
    }
}

/// Trace of what session construction burned through. Pure data; the caller
/// decides whether to log it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    TooFewRoadCells { seed: String, road_cells: usize },
    SeedExhausted { seed: String, pairs_tried: usize },
    PairAccepted { seed: String, pair_attempt: usize, distance: u32 },
    FallbackEngaged,
}

pub fn build_session(seed_hint: &str, size: usize) -> Option<SessionPlan> {
    build_session_traced(seed_hint, size).0
}

/// Like [`build_session`], also returning the attempt trace.
///
/// Up to [`SEED_ATTEMPTS`] seed variants are generated; on each grid up to
/// [`PAIR_ATTEMPTS`] road-cell pairs are sampled from the `"{seed}:start"`
/// stream and validated by breadth-first search. Exhaustion falls back to an
/// obstacle-free board; `None` is only possible when `size < 4` leaves no
/// valid interior pair.
pub fn build_session_traced(seed_hint: &str, size: usize) -> (Option<SessionPlan>, Vec<SessionEvent>) {
    let mut events = Vec::new();

    for attempt in 0..SEED_ATTEMPTS {
        let candidate =
            if attempt == 0 { seed_hint.to_string() } else { format!("{seed_hint}_{attempt}") };
        let grid = generate_map(&candidate, size);

        match plan_on_grid(&candidate, &grid, &mut events) {
            Ok(plan) => return (Some(plan), events),
            Err(event) => events.push(event),
        }
    }

    let fallback = fallback_plan(seed_hint, size);
    if fallback.is_some() {
        events.push(SessionEvent::FallbackEngaged);
    }
    (fallback, events)
}

/// One seed attempt: sample pairs on `grid` until one passes the distance and
/// reachability checks. The returned error event says why the grid was
/// abandoned.
fn plan_on_grid(
    seed: &str,
    grid: &MapGrid,
    events: &mut Vec<SessionEvent>,
) -> Result<SessionPlan, SessionEvent> {
    let roads = grid.road_cells();
    if roads.len() < 2 {
        return Err(SessionEvent::TooFewRoadCells { seed: seed.to_string(), road_cells: roads.len() });
    }

    let min_distance = (grid.size() / 3) as u32;
    let mut stream = SeedStream::new(&format!("{seed}:start"));

    for pair_attempt in 0..PAIR_ATTEMPTS {
        let start_a = roads[stream.next_below(roads.len())];
        let start_b = roads[stream.next_below(roads.len())];
        if start_a == start_b {
            continue;
        }
        let distance = manhattan(start_a, start_b);
        if distance < min_distance {
            continue;
        }
        if road_path_exists(grid, start_a, start_b) {
            events.push(SessionEvent::PairAccepted {
                seed: seed.to_string(),
                pair_attempt,
                distance,
            });
            return Ok(SessionPlan {
                seed: seed.to_string(),
                start_a: corner_of(start_a),
                start_b: corner_of(start_b),
                fallback: false,
            });
        }
    }

    Err(SessionEvent::SeedExhausted { seed: seed.to_string(), pairs_tried: PAIR_ATTEMPTS })
}

/// Obstacle-free plan of last resort: interior corners, margin 1 from the
/// border. Their separation `2 * (size - 3)` clears the `size / 3` minimum
/// for every `size >= 4`; reachability is trivial without walls.
fn fallback_plan(seed_hint: &str, size: usize) -> Option<SessionPlan> {
    if size < 4 {
        return None;
    }
    let far = (size - 2) as i32;
    Some(SessionPlan {
        seed: seed_hint.to_string(),
        start_a: Intersection { ix: 1, iy: 1 },
        start_b: Intersection { ix: far, iy: far },
        fallback: true,
    })
}

/// A start cell's position doubles as its north-west corner intersection;
/// cell indices are always valid in the one-larger intersection space.
fn corner_of(cell: CellPos) -> Intersection {
    Intersection { ix: cell.x, iy: cell.y }
}

/// Breadth-first search over road cells with 4-directional adjacency.
/// Out-of-range and wall neighbours are pruned by the grid's wall rule.
pub fn road_path_exists(grid: &MapGrid, start: CellPos, goal: CellPos) -> bool {
    if grid.is_wall(start.x, start.y) || grid.is_wall(goal.x, goal.y) {
        return false;
    }
    if start == goal {
        return true;
    }

    let mut open = VecDeque::from([start]);
    let mut seen = BTreeSet::from([start]);
    while let Some(cell) = open.pop_front() {
        for next in [
            CellPos { x: cell.x, y: cell.y - 1 },
            CellPos { x: cell.x + 1, y: cell.y },
            CellPos { x: cell.x, y: cell.y + 1 },
            CellPos { x: cell.x - 1, y: cell.y },
        ] {
            if seen.contains(&next) || grid.is_wall(next.x, next.y) {
                continue;
            }
            if next == goal {
                return true;
            }
            seen.insert(next);
            open.push_back(next);
        }
    }
    false
}
