//! Move policies for random moves and playouts.
//!
//! A [`MovePolicy`] proposes candidate points for the side to move, best
//! first; [`Position::random_move_with`] plays the first legal one and
//! [`Position::random_playout_with`] loops that until both sides pass.
//!
//! [`Position::random_move_with`]: crate::position::Position::random_move_with
//! [`Position::random_playout_with`]: crate::position::Position::random_playout_with

use std::collections::VecDeque;

use crate::colour::Point;
use crate::position::Position;

/// Given a position, propose the moves to try for the side to move.
///
/// An empty list means the policy has nothing to offer and the player passes.
pub trait MovePolicy {
    fn candidates(&mut self, position: &Position) -> Vec<Point>;
}

impl<F> MovePolicy for F
where
    F: FnMut(&Position) -> Vec<Point>,
{
    fn candidates(&mut self, position: &Position) -> Vec<Point> {
        self(position)
    }
}

/// Every candidate point in random order.
///
/// Own-eye fills are among them; [`Position::play`] refuses those.
///
/// [`Position::play`]: crate::position::Position::play
pub struct UniformRandom {
    rng: fastrand::Rng,
}

impl Default for UniformRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformRandom {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl MovePolicy for UniformRandom {
    fn candidates(&mut self, position: &Position) -> Vec<Point> {
        let mut candidates = position.actions().as_slice().to_vec();
        self.rng.shuffle(&mut candidates);
        candidates
    }
}

/// Plays a fixed list of points, one per call, then runs dry.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    moves: VecDeque<Point>,
}

impl Scripted {
    pub fn new(moves: impl IntoIterator<Item = Point>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MovePolicy for Scripted {
    fn candidates(&mut self, _position: &Position) -> Vec<Point> {
        self.moves.pop_front().into_iter().collect()
    }
}
