//! Thick-Goban: a Go position that remembers what it has discovered.
//!
//! Groups live in a union-find forest over the board points. Their liberties
//! are found lazily and cached, so a move only scans as much of its
//! neighbourhood as it needs to decide captures, suicide and ko.
//!
//! ## Modules
//!
//! - [`constants`] - Default size, komi and playout limits
//! - [`colour`] - Colours, points and move records
//! - [`error`] - Move and board errors
//! - [`neighbors`] - Per-size adjacency tables
//! - [`group`] - Connected groups of stones
//! - [`board`] - Union-find board with lazy liberty discovery
//! - [`actions`] - Candidate move set
//! - [`position`] - Game state, move legality and scoring
//! - [`playout`] - Move policies for random play
//!
//! ## Example
//!
//! ```
//! use thick_goban::colour::Colour;
//! use thick_goban::position::Position;
//!
//! let mut pos = Position::new(9);
//! pos.play(40, Colour::Black).unwrap();
//! assert_eq!(pos.next_player(), Colour::White);
//!
//! let (end, moves) = pos.random_playout();
//! assert!(!moves.is_empty());
//! println!("score {:.1}\n{}", end.score(), end.board());
//! ```

pub mod actions;
pub mod board;
pub mod colour;
pub mod constants;
pub mod error;
pub mod group;
pub mod neighbors;
pub mod playout;
pub mod position;

pub use colour::{Colour, Move, Point};
pub use error::{BoardError, MoveError};
pub use position::Position;
