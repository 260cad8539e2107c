//! Game-record value types.
//!
//! Small `Copy` types handed out by [`Record`](super::Record) accessors.
//! They carry no reference back into the record's internal representation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two players of a game record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Both players in move order (Black moves first).
    pub const ALL: [Player; 2] = [Player::Black, Player::White];

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "B"),
            Player::White => write!(f, "W"),
        }
    }
}

/// A board location: either a point or the pass marker.
///
/// Pass is its own variant rather than a reserved coordinate pair, so it can
/// never be confused with a real point, (0, 0) included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Loc {
    /// A point on the board, 0-based from the top-left corner.
    Point { x: u32, y: u32 },
    /// The pass move; carries no coordinates.
    Pass,
}

impl Loc {
    #[inline]
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Loc::Pass)
    }

    /// The coordinates, or `None` for a pass.
    #[inline]
    #[must_use]
    pub const fn point(self) -> Option<(u32, u32)> {
        match self {
            Loc::Point { x, y } => Some((x, y)),
            Loc::Pass => None,
        }
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Loc::Point { x, y } => write!(f, "({x},{y})"),
            Loc::Pass => write!(f, "pass"),
        }
    }
}

/// One move of a game record: a location plus the player who made it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub loc: Loc,
    pub player: Player,
}

impl Move {
    /// Placeholder returned for out-of-range accesses: a Black move at
    /// (0, 0). Callers gate with `move_count` first; the sentinel only
    /// keeps the accessor total.
    pub const SENTINEL: Move = Move {
        loc: Loc::Point { x: 0, y: 0 },
        player: Player::Black,
    };

    #[inline]
    #[must_use]
    pub const fn new(loc: Loc, player: Player) -> Self {
        Move { loc, player }
    }

    #[inline]
    #[must_use]
    pub const fn is_pass(self) -> bool {
        self.loc.is_pass()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.player, self.loc)
    }
}
