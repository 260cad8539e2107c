//! Immutable projection of SGF game records.
//!
//! Parsing is delegated to the `sgf-parse` crate; this module flattens the
//! first game tree's main variation into a compact read-only structure.
//! Parser types never cross this module's public surface, and every accessor
//! is total: malformed text yields the invalid record, out-of-range indices
//! a sentinel move.

mod types;

#[cfg(test)]
mod tests;

pub use types::{Loc, Move, Player};

use std::fmt;

use sgf_parse::go::{self, Prop};
use sgf_parse::SgfParseError;

/// Largest board dimension an SGF point coordinate can express.
const MAX_BOARD_SIZE: u32 = 52;

/// Board size assumed when the record carries no SZ property.
const DEFAULT_BOARD_SIZE: u32 = 19;

/// Flattened-index marker for a pass move.
const PASS: u32 = u32::MAX;

/// Error cases for record construction.
#[derive(Debug)]
pub enum RecordError {
    /// The SGF text failed to parse.
    Parse(SgfParseError),
    /// The text parsed but contained no game tree.
    EmptyCollection,
    /// Board dimensions outside 1..=52.
    BadSize { x: u32, y: u32 },
    /// A move location outside the board (and not the `tt` pass form).
    OffBoardMove { x: u32, y: u32 },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Parse(e) => write!(f, "SGF parse error: {e}"),
            RecordError::EmptyCollection => write!(f, "SGF text contains no game tree"),
            RecordError::BadSize { x, y } => write!(f, "unsupported board size {x}x{y}"),
            RecordError::OffBoardMove { x, y } => write!(f, "move at ({x},{y}) is off the board"),
        }
    }
}

impl std::error::Error for RecordError {}

impl From<SgfParseError> for RecordError {
    fn from(e: SgfParseError) -> Self {
        RecordError::Parse(e)
    }
}

/// A move in flattened storage: `y * x_size + x`, or [`PASS`].
struct RawMove {
    loc: u32,
    player: Player,
}

/// Read-only projection of one parsed game record.
///
/// Built once from text and immutable afterwards. An invalid record (failed
/// parse) reports zero dimensions and zero moves; no partially parsed state
/// is ever observable.
pub struct Record {
    x_size: u32,
    y_size: u32,
    moves: Vec<RawMove>,
    valid: bool,
}

impl Record {
    /// Build a record from SGF text. Total: on any parse failure the
    /// invalid record is returned instead of an error.
    #[must_use]
    pub fn from_sgf(text: &str) -> Record {
        Self::try_from_sgf(text).unwrap_or_else(|_| Record::invalid())
    }

    /// Build a record from SGF text, reporting the failure cause.
    pub fn try_from_sgf(text: &str) -> Result<Record, RecordError> {
        let collection = go::parse(text)?;
        let root = collection.first().ok_or(RecordError::EmptyCollection)?;

        let (x_size, y_size) = match root.get_property("SZ") {
            Some(Prop::SZ((x, y))) => (u32::from(*x), u32::from(*y)),
            _ => (DEFAULT_BOARD_SIZE, DEFAULT_BOARD_SIZE),
        };
        if x_size == 0 || y_size == 0 || x_size > MAX_BOARD_SIZE || y_size > MAX_BOARD_SIZE {
            return Err(RecordError::BadSize { x: x_size, y: y_size });
        }

        let mut moves = Vec::new();
        let mut current = Some(root);
        while let Some(node) = current {
            for player in Player::ALL {
                let prop = match player {
                    Player::Black => node.get_property("B"),
                    Player::White => node.get_property("W"),
                };
                let mv = match prop {
                    Some(Prop::B(mv)) | Some(Prop::W(mv)) => mv,
                    _ => continue,
                };
                let loc = flatten(mv, x_size, y_size)?;
                moves.push(RawMove { loc, player });
            }
            current = node.children().next();
        }

        Ok(Record {
            x_size,
            y_size,
            moves,
            valid: true,
        })
    }

    /// The invalid record: zero dimensions, no moves.
    #[must_use]
    fn invalid() -> Record {
        Record {
            x_size: 0,
            y_size: 0,
            moves: Vec::new(),
            valid: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Board width; 0 for an invalid record.
    #[inline]
    #[must_use]
    pub const fn x_size(&self) -> u32 {
        self.x_size
    }

    /// Board height; 0 for an invalid record.
    #[inline]
    #[must_use]
    pub const fn y_size(&self) -> u32 {
        self.y_size
    }

    /// Number of main-variation moves; 0 for an invalid record.
    #[inline]
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    #[must_use]
    pub fn is_valid_index(&self, index: usize) -> bool {
        index < self.moves.len()
    }

    /// The move at `index`, unflattened to coordinates.
    ///
    /// Total: any out-of-range index (on a valid or invalid record) returns
    /// [`Move::SENTINEL`].
    #[must_use]
    pub fn move_at(&self, index: usize) -> Move {
        self.get_move(index).unwrap_or(Move::SENTINEL)
    }

    /// The move at `index`, or `None` when out of range.
    #[must_use]
    pub fn get_move(&self, index: usize) -> Option<Move> {
        let raw = self.moves.get(index)?;
        let loc = if raw.loc == PASS {
            Loc::Pass
        } else {
            Loc::Point {
                x: raw.loc % self.x_size,
                y: raw.loc / self.x_size,
            }
        };
        Some(Move::new(loc, raw.player))
    }

    /// Index of the last move, or `None` for an empty or invalid record.
    #[must_use]
    pub fn last_move_index(&self) -> Option<usize> {
        self.moves.len().checked_sub(1)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("valid", &self.valid)
            .field("x_size", &self.x_size)
            .field("y_size", &self.y_size)
            .field("moves", &self.moves.len())
            .finish()
    }
}

/// Flatten a parsed move into `y * x_size + x` form.
///
/// The `tt` compatibility form (point at (19, 19) on boards up to 19x19)
/// counts as a pass; any other off-board point is malformed.
fn flatten(mv: &go::Move, x_size: u32, y_size: u32) -> Result<u32, RecordError> {
    match mv {
        go::Move::Pass => Ok(PASS),
        go::Move::Move(point) => {
            let x = u32::from(point.x);
            let y = u32::from(point.y);
            if x < x_size && y < y_size {
                Ok(y * x_size + x)
            } else if x == 19 && y == 19 && x_size <= 19 && y_size <= 19 {
                Ok(PASS)
            } else {
                Err(RecordError::OffBoardMove { x, y })
            }
        }
    }
}
