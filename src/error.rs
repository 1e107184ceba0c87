//! Error types.
//!
//! [`MoveError`] is the only error a caller of [`Position`](crate::position::Position)
//! needs to handle: every variant is a rejected move and leaves the position
//! untouched. [`BoardError`] reports misuse of the low-level [`Board`](crate::board::Board)
//! and is never expected from a validated move.

use crate::colour::{Colour, Point};

/// A move was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Unrecognized move colour")]
    UnrecognizedColour,

    #[error("point off the board: {0}")]
    OffBoard(Point),

    #[error("Playing on another stone at {0}")]
    Occupied(Point),

    #[error("ko locked point {0}")]
    KoLocked(Point),

    /// Suicide into a point surrounded only by the mover's own stones.
    #[error("friendly eye at {0}")]
    FriendlyEye(Point),

    #[error("self capture at {0}")]
    SelfCapture(Point),

    #[error("no legal actions")]
    NoLegalActions,

    /// A move list could not be replayed.
    #[error("move {index} at {point}: {source}")]
    Replay {
        index: usize,
        point: Point,
        source: Box<MoveError>,
    },
}

impl MoveError {
    /// The fixed, human-readable reason, without point context.
    pub fn reason(&self) -> &'static str {
        match self {
            MoveError::UnrecognizedColour => "Unrecognized move colour",
            MoveError::OffBoard(_) => "point off the board",
            MoveError::Occupied(_) => "Playing on another stone",
            MoveError::KoLocked(_) => "ko locked point",
            MoveError::FriendlyEye(_) => "friendly eye",
            MoveError::SelfCapture(_) => "self capture",
            MoveError::NoLegalActions => "no legal actions",
            MoveError::Replay { source, .. } => source.reason(),
        }
    }
}

/// Invariant violations inside the board. These indicate a bug in the caller,
/// not an illegal move.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("point {0} is already occupied")]
    Occupied(Point),

    #[error("point {point} is off a {size}x{size} board")]
    OffBoard { point: Point, size: usize },

    #[error("cannot place a stone of colour {0:?}")]
    OpenColour(Colour),
}
