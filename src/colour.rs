//! Stone colours, board points and move records.

use std::fmt;

use crate::error::MoveError;

/// A point on the board: a row-major index in `0..size * size`.
pub type Point = usize;

/// The state of a point, doubling as its contribution to the score.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Colour {
    Black,
    White,
    #[default]
    Open,
}

impl Colour {
    /// Arithmetic value: Black +1, White -1, Open 0.
    #[inline]
    pub fn value(self) -> i32 {
        match self {
            Colour::Black => 1,
            Colour::White => -1,
            Colour::Open => 0,
        }
    }

    /// The other player. `Open` has no opponent and maps to itself.
    #[inline]
    pub fn opponent(self) -> Colour {
        match self {
            Colour::Black => Colour::White,
            Colour::White => Colour::Black,
            Colour::Open => Colour::Open,
        }
    }

    #[inline]
    pub fn is_stone(self) -> bool {
        self != Colour::Open
    }
}

impl TryFrom<i8> for Colour {
    type Error = MoveError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Colour::Black),
            -1 => Ok(Colour::White),
            0 => Ok(Colour::Open),
            _ => Err(MoveError::UnrecognizedColour),
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Colour::Black => 'X',
            Colour::White => 'O',
            Colour::Open => '.',
        };
        write!(f, "{ch}")
    }
}

/// A move as recorded in a position's history.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Play { point: Point, colour: Colour },
    Pass { colour: Colour },
}

impl Move {
    pub fn colour(self) -> Colour {
        match self {
            Move::Play { colour, .. } | Move::Pass { colour } => colour,
        }
    }

    /// The point played, or `None` for a pass.
    pub fn point(self) -> Option<Point> {
        match self {
            Move::Play { point, .. } => Some(point),
            Move::Pass { .. } => None,
        }
    }

    pub fn is_pass(self) -> bool {
        matches!(self, Move::Pass { .. })
    }
}
