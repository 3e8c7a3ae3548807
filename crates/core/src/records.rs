//! Boundary records mirroring the external store's rows.
//!
//! The core never reads or writes the store; collaborators pass these fields
//! in and persist what comes back. Legacy rows that predate intersection
//! coordinates are translated here, at the boundary, and nowhere else.

use serde::{Deserialize, Serialize};

use crate::types::{Direction, Intersection, Role};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub code: String,
    pub seed: String,
    pub size: usize,
    pub status: RoomStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Waiting,
    Active,
    Finished,
}

/// A player row in canonical form: intersection position plus facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub role: Role,
    pub ix: i32,
    pub iy: i32,
    pub direction: Direction,
}

impl PlayerRecord {
    pub fn at_start(role: Role, start: Intersection) -> Self {
        Self { role, ix: start.ix, iy: start.iy, direction: role.initial_direction() }
    }

    pub fn position(&self) -> Intersection {
        Intersection { ix: self.ix, iy: self.iy }
    }

    pub fn moved_to(self, next: Intersection) -> Self {
        Self { ix: next.ix, iy: next.iy, ..self }
    }

    pub fn turned(self, delta: i32) -> Self {
        Self { direction: self.direction.turned(delta), ..self }
    }
}

/// A player row as the store may actually deliver it: older rows carry only
/// cell-based `x`/`y`, newer ones intersection-based `ix`/`iy`, and facing may
/// be absent entirely.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StoredPlayer {
    pub role: Role,
    #[serde(default)]
    pub ix: Option<i32>,
    #[serde(default)]
    pub iy: Option<i32>,
    #[serde(default)]
    pub x: Option<i32>,
    #[serde(default)]
    pub y: Option<i32>,
    #[serde(default)]
    pub direction: Option<u8>,
}

impl StoredPlayer {
    /// Canonical position: intersection fields win, legacy cell fields fill
    /// in, `None` when the row has neither.
    pub fn position(&self) -> Option<Intersection> {
        let ix = self.ix.or(self.x)?;
        let iy = self.iy.or(self.y)?;
        Some(Intersection { ix, iy })
    }

    /// Translates to the canonical record. A missing facing defaults to
    /// north, matching what fresh rows are created with.
    pub fn into_record(self) -> Option<PlayerRecord> {
        let position = self.position()?;
        Some(PlayerRecord {
            role: self.role,
            ix: position.ix,
            iy: position.iy,
            direction: Direction::from_index(self.direction.unwrap_or(0)),
        })
    }
}
