//! Default parameters for positions and playouts.
//!
//! Board size is a runtime parameter: every [`Position`](crate::position::Position)
//! carries its own size, so these are only the values used when a caller
//! does not supply one.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN). Standard Go sizes are 9, 13, or 19.
pub const DEFAULT_SIZE: usize = 19;

/// Smallest board the driver accepts. A 1x1 board is legal but has no moves.
pub const MIN_SIZE: usize = 1;

// =============================================================================
// Scoring
// =============================================================================

/// Default komi. Scores are from Black's point of view, so the compensation
/// for White is negative.
pub const DEFAULT_KOMI: f64 = -7.5;

// =============================================================================
// Playouts
// =============================================================================

/// Playout length ceiling, as a multiple of the board area.
pub const GAME_LEN_FACTOR: usize = 3;

/// Maximum number of moves (passes included) a playout may run on a board of
/// the given size. Repeating double-ko cycles are legal under a simple ko
/// rule, so playouts need a hard stop besides two consecutive passes.
pub const fn max_game_len(size: usize) -> usize {
    size * size * GAME_LEN_FACTOR
}
