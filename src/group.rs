//! Connected groups of same-colour stones.

use std::collections::HashSet;

use crate::colour::{Colour, Point};

/// Index of a group in its board's arena.
pub type GroupId = usize;

/// A maximal connected set of same-colour stones, with the liberties found
/// so far.
///
/// `liberties` is sound but possibly incomplete. Every liberty not yet in it
/// is adjacent to a stone still waiting in `frontier`, so an empty frontier
/// means the liberty set is exact.
#[derive(Debug, Clone)]
pub struct Group {
    colour: Colour,
    stones: HashSet<Point>,
    liberties: HashSet<Point>,
    frontier: Vec<Point>,
}

impl Group {
    /// A group of `stones` whose liberties have not been looked at yet.
    pub fn new(colour: Colour, stones: impl IntoIterator<Item = Point>) -> Self {
        let stones: HashSet<Point> = stones.into_iter().collect();
        let frontier = stones.iter().copied().collect();
        Self {
            colour,
            stones,
            liberties: HashSet::new(),
            frontier,
        }
    }

    #[inline]
    pub fn colour(&self) -> Colour {
        self.colour
    }

    #[inline]
    pub fn stones(&self) -> &HashSet<Point> {
        &self.stones
    }

    /// Liberties discovered so far.
    #[inline]
    pub fn liberties(&self) -> &HashSet<Point> {
        &self.liberties
    }

    /// Number of stones.
    #[inline]
    pub fn size(&self) -> usize {
        self.stones.len()
    }

    /// Number of liberties discovered so far.
    #[inline]
    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    /// True once every liberty has been discovered.
    #[inline]
    pub fn fully_discovered(&self) -> bool {
        self.frontier.is_empty()
    }

    pub(crate) fn pop_frontier(&mut self) -> Option<Point> {
        self.frontier.pop()
    }

    /// Queue `stone` for rescanning. Duplicates are harmless.
    pub(crate) fn push_frontier(&mut self, stone: Point) {
        debug_assert!(self.stones.contains(&stone));
        self.frontier.push(stone);
    }

    pub(crate) fn add_liberty(&mut self, pt: Point) -> bool {
        self.liberties.insert(pt)
    }

    /// Forget `pt` as a liberty: it has just been occupied.
    pub(crate) fn remove_liberty(&mut self, pt: Point) -> bool {
        self.liberties.remove(&pt)
    }

    /// Absorb `other` into `self`. Both must have the same colour.
    pub(crate) fn absorb(&mut self, other: Group) {
        debug_assert_eq!(self.colour, other.colour);
        // Keep the larger sets as the destination.
        let Group {
            stones,
            liberties,
            frontier,
            ..
        } = other;
        if stones.len() > self.stones.len() {
            let small = std::mem::replace(&mut self.stones, stones);
            self.stones.extend(small);
        } else {
            self.stones.extend(stones);
        }
        if liberties.len() > self.liberties.len() {
            let small = std::mem::replace(&mut self.liberties, liberties);
            self.liberties.extend(small);
        } else {
            self.liberties.extend(liberties);
        }
        self.frontier.extend(frontier);
    }

    pub(crate) fn into_stones(self) -> HashSet<Point> {
        self.stones
    }
}

/// Groups compare by colour and stones only; discovery progress is a cache.
impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.colour == other.colour && self.stones == other.stones
    }
}

impl Eq for Group {}
