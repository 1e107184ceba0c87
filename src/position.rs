//! Go position: move legality, captures, ko, passes and scoring.
//!
//! A [`Position`] owns a [`Board`] and the game state around it: whose turn
//! it is, the ko lock, the candidate move set, komi and the move history.
//! Every rejected move leaves the position exactly as it was: legality is
//! decided from the neighbouring groups before the stone is written.

use std::sync::Arc;

use log::{debug, trace};

use crate::actions::ActionSet;
use crate::board::Board;
use crate::colour::{Colour, Move, Point};
use crate::constants::{DEFAULT_KOMI, max_game_len};
use crate::error::MoveError;
use crate::group::GroupId;
use crate::neighbors::NeighborTable;
use crate::playout::{MovePolicy, UniformRandom};

/// Whether the game is still going.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Active,
    /// Two consecutive passes.
    Terminal,
}

/// What an accepted move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The group now containing the placed stone.
    pub group: GroupId,
    /// Points freed by captures, sorted per captured group.
    pub captured: Vec<Point>,
}

#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    next_player: Colour,
    ko_lock: Option<Point>,
    actions: ActionSet,
    komi: f64,
    history: Vec<Move>,
}

impl Position {
    /// An empty board of `size` with the default komi, Black to play.
    pub fn new(size: usize) -> Self {
        Self::with_komi(size, DEFAULT_KOMI)
    }

    /// Any size is accepted; a 1x1 board has no legal move for either side.
    pub fn with_komi(size: usize, komi: f64) -> Self {
        Self::with_table(Arc::new(NeighborTable::new(size)), komi)
    }

    /// An empty position sharing an existing neighbour table.
    pub fn with_table(table: Arc<NeighborTable>, komi: f64) -> Self {
        let area = table.area();
        Self {
            board: Board::with_table(table),
            next_player: Colour::Black,
            ko_lock: None,
            actions: ActionSet::full(area),
            komi,
            history: Vec::new(),
        }
    }

    /// Replay a game.
    ///
    /// `setup` stones (handicap) are placed first and are not part of the
    /// history; afterwards the opponent of the last setup colour moves, so
    /// White starts a handicap game. `moves` then alternate. On failure the
    /// error carries the index into `setup` followed by `moves`.
    pub fn from_moves(
        size: usize,
        moves: &[Point],
        setup: &[(Point, Colour)],
    ) -> Result<Self, MoveError> {
        let mut position = Self::new(size);
        for (index, &(point, colour)) in setup.iter().enumerate() {
            position.play(point, colour).map_err(|err| MoveError::Replay {
                index,
                point,
                source: Box::new(err),
            })?;
        }
        position.history.clear();
        position.ko_lock = None;

        for (i, &point) in moves.iter().enumerate() {
            let colour = position.next_player;
            position.play(point, colour).map_err(|err| MoveError::Replay {
                index: setup.len() + i,
                point,
                source: Box::new(err),
            })?;
        }
        Ok(position)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn next_player(&self) -> Colour {
        self.next_player
    }

    /// The point the side to move may not play, if any.
    #[inline]
    pub fn ko_lock(&self) -> Option<Point> {
        self.ko_lock
    }

    #[inline]
    pub fn komi(&self) -> f64 {
        self.komi
    }

    /// Candidate moves: every open point. Whether a candidate is legal for a
    /// given colour is only settled by [`play`](Self::play).
    #[inline]
    pub fn actions(&self) -> &ActionSet {
        &self.actions
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn state(&self) -> GameState {
        match self.history.as_slice() {
            [.., a, b] if a.is_pass() && b.is_pass() => GameState::Terminal,
            _ => GameState::Active,
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.state() == GameState::Terminal
    }

    /// Force full liberty discovery on every group.
    pub fn discover_all_libs(&mut self) {
        self.board.discover_all_libs();
    }

    /// Play a stone of `colour` at `pt`.
    ///
    /// Filling one of your own true eyes is refused as a friendly eye even
    /// when the group would keep other liberties. A refused move leaves the
    /// position untouched, the ko lock included.
    pub fn play(&mut self, pt: Point, colour: Colour) -> Result<PlayOutcome, MoveError> {
        if !colour.is_stone() {
            return Err(MoveError::UnrecognizedColour);
        }
        if pt >= self.board.area() {
            return Err(MoveError::OffBoard(pt));
        }
        if self.board.colour(pt).is_stone() {
            return Err(MoveError::Occupied(pt));
        }
        if self.ko_lock == Some(pt) {
            debug!("{colour:?} at {pt} rejected: ko lock");
            return Err(MoveError::KoLocked(pt));
        }
        if self.board.is_eye(pt, colour) {
            trace!("{colour:?} at {pt} rejected: own eye");
            return Err(MoveError::FriendlyEye(pt));
        }

        let table = Arc::clone(self.board.table());
        let mut doomed: Vec<GroupId> = Vec::new();
        let mut breathes = false;
        for &n in table.neighbors(pt) {
            let (Some(id), _) = self.board.find(n) else {
                breathes = true;
                continue;
            };
            let other_liberty = self.board.has_liberty_other_than(id, pt);
            if self.board.colour(n) == colour {
                breathes |= other_liberty;
            } else if !other_liberty && !doomed.contains(&id) {
                doomed.push(id);
            }
        }

        if doomed.is_empty() && !breathes {
            let neighbors = table.neighbors(pt);
            let enclosed = !neighbors.is_empty()
                && neighbors.iter().all(|&n| self.board.colour(n) == colour);
            let err = if enclosed {
                MoveError::FriendlyEye(pt)
            } else {
                MoveError::SelfCapture(pt)
            };
            trace!("{colour:?} at {pt} rejected: {err}");
            return Err(err);
        }

        let group = self
            .board
            .place(pt, colour)
            .unwrap_or_else(|err| panic!("validated move {pt} failed: {err}"));
        let mut captured = Vec::new();
        for id in doomed {
            captured.extend(self.board.remove_group(id));
        }
        if !captured.is_empty() {
            debug!("{colour:?} at {pt} captured {} stone(s)", captured.len());
        }

        self.actions.remove(pt);
        for &freed in &captured {
            self.actions.insert(freed);
        }
        self.next_player = colour.opponent();
        self.history.push(Move::Play { point: pt, colour });

        self.ko_lock = None;
        if let [single] = captured[..] {
            let lone_stone = self.board.group(group).is_some_and(|g| g.size() == 1);
            if lone_stone && self.board.discover_liberties(group, 2) == 1 {
                debug!("ko lock at {single}");
                self.ko_lock = Some(single);
            }
        }

        Ok(PlayOutcome { group, captured })
    }

    /// Pass. Leaves the ko lock and the candidate set alone.
    pub fn pass_move(&mut self) {
        self.history.push(Move::Pass {
            colour: self.next_player,
        });
        self.next_player = self.next_player.opponent();
    }

    /// Play a uniformly random legal move for the side to move.
    ///
    /// Fails with [`MoveError::NoLegalActions`] only when `play` refuses
    /// every point in [`actions`](Self::actions).
    pub fn random_move(&mut self) -> Result<Point, MoveError> {
        self.random_move_with(&mut UniformRandom::new())
    }

    /// Play the first legal move among the policy's candidates.
    pub fn random_move_with<P>(&mut self, policy: &mut P) -> Result<Point, MoveError>
    where
        P: MovePolicy + ?Sized,
    {
        let colour = self.next_player;
        for pt in policy.candidates(self) {
            if self.play(pt, colour).is_ok() {
                return Ok(pt);
            }
        }
        Err(MoveError::NoLegalActions)
    }

    /// Play random moves on a copy of this position until two consecutive
    /// passes. Returns the final position and the moves played.
    pub fn random_playout(&self) -> (Position, Vec<Move>) {
        self.random_playout_with(&mut UniformRandom::new())
    }

    /// [`random_playout`](Self::random_playout) driven by `policy`.
    ///
    /// Also stops after [`max_game_len`] moves, since repeating ko cycles are
    /// possible.
    pub fn random_playout_with<P>(&self, policy: &mut P) -> (Position, Vec<Move>)
    where
        P: MovePolicy + ?Sized,
    {
        let mut position = self.clone();
        let start = position.history.len();
        let limit = max_game_len(position.size());
        let mut passes = 0;
        while passes < 2 && position.history.len() - start < limit {
            match position.random_move_with(policy) {
                Ok(_) => passes = 0,
                Err(_) => {
                    position.pass_move();
                    passes += 1;
                }
            }
        }
        if passes < 2 {
            debug!("playout stopped at the {limit} move ceiling");
        }
        let moves = position.history[start..].to_vec();
        (position, moves)
    }

    /// Area score from Black's point of view.
    ///
    /// Komi plus, for every point, its stone value, and for open points the
    /// sum of the distinct colours next to it. An open point touching both
    /// colours, or none, counts zero. This is a one-layer approximation of
    /// area scoring, not a territory flood fill.
    pub fn score(&self) -> f64 {
        let board = &self.board;
        let mut total = 0;
        for pt in board.points() {
            let colour = board.colour(pt);
            total += colour.value();
            if colour == Colour::Open {
                let (mut black, mut white) = (false, false);
                for &n in board.neighbors(pt) {
                    match board.colour(n) {
                        Colour::Black => black = true,
                        Colour::White => white = true,
                        Colour::Open => {}
                    }
                }
                total += i32::from(black) - i32::from(white);
            }
        }
        self.komi + f64::from(total)
    }
}
