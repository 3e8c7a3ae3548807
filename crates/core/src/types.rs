use serde::{Deserialize, Serialize};

/// A cell of the map grid, indexed in `[0, size - 1]` on each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellKind {
    Road,
    Wall,
}

/// A grid corner point. The intersection space is one unit larger than the
/// cell space on each axis: an intersection at `(ix, iy)` touches up to four
/// cells, `(ix-1, iy-1)` through `(ix, iy)`. Player positions live here, never
/// in cell space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Intersection {
    pub ix: i32,
    pub iy: i32,
}

/// Facing, stored externally as a rotation index 0..=3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn index(self) -> u8 {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Total: any stored byte maps to a facing, wrapping modulo 4.
    pub fn from_index(raw: u8) -> Self {
        match raw % 4 {
            0 => Self::North,
            1 => Self::East,
            2 => Self::South,
            _ => Self::West,
        }
    }

    /// Turn by `delta` quarter turns, positive clockwise. Always succeeds.
    pub fn turned(self, delta: i32) -> Self {
        let index = (i32::from(self.index()) + delta).rem_euclid(4);
        Self::from_index(index as u8)
    }

    pub fn opposite(self) -> Self {
        self.turned(2)
    }

    /// Unit step in intersection space. North decreases `iy`.
    pub fn step(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction.index()
    }
}

impl From<u8> for Direction {
    fn from(raw: u8) -> Self {
        Self::from_index(raw)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    A,
    B,
}

impl Role {
    /// Facing assigned when a session starts: A looks north, B looks south.
    pub fn initial_direction(self) -> Direction {
        match self {
            Self::A => Direction::North,
            Self::B => Direction::South,
        }
    }
}

/// What a surface shows for one cell. Shared by players and spectators so the
/// three call sites can never disagree on cell resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellView {
    OutOfBounds,
    Wall,
    Shop(String),
}

/// The resolved 2x2 forward view, one entry per field-of-view cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellViewport {
    pub left_near: CellView,
    pub right_near: CellView,
    pub left_far: CellView,
    pub right_far: CellView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turning_clockwise_cycles_through_all_facings() {
        let mut facing = Direction::North;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(facing);
            facing = facing.turned(1);
        }
        assert_eq!(facing, Direction::North);
        assert_eq!(
            seen,
            vec![Direction::North, Direction::East, Direction::South, Direction::West]
        );
    }

    #[test]
    fn counter_clockwise_turn_undoes_clockwise_turn() {
        for raw in 0..4 {
            let facing = Direction::from_index(raw);
            assert_eq!(facing.turned(1).turned(-1), facing);
        }
    }

    #[test]
    fn opposite_is_two_quarter_turns_and_self_inverse() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);
        for raw in 0..4 {
            let facing = Direction::from_index(raw);
            assert_eq!(facing.opposite().opposite(), facing);
        }
    }

    #[test]
    fn from_index_wraps_out_of_range_bytes() {
        assert_eq!(Direction::from_index(5), Direction::East);
        assert_eq!(Direction::from_index(255), Direction::West);
    }

    #[test]
    fn opposite_steps_cancel() {
        for raw in 0..4 {
            let facing = Direction::from_index(raw);
            let (dx, dy) = facing.step();
            let (ox, oy) = facing.opposite().step();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }
}
