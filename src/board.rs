//! Union-find board with lazily discovered liberties.
//!
//! Every point has a parent pointer; the root of each tree names the arena
//! slot of its [`Group`]. Placing a stone links it to the roots of its
//! same-colour neighbours (union by size, path compression on lookup).
//!
//! Liberties are not maintained eagerly. A group keeps a frontier of stones
//! whose surroundings have not been scanned, and [`Board::discover_liberties`]
//! scans just enough of it to answer "zero, one, or at least N" questions.
//! Occupying a point strikes it from the neighbouring groups' liberty sets;
//! removing a group requeues the bordering stones of its neighbours so the
//! freed points are picked up on the next scan.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use log::trace;

use crate::colour::{Colour, Point};
use crate::error::BoardError;
use crate::group::{Group, GroupId};
use crate::neighbors::NeighborTable;

/// Discovery limit that forces a full scan.
pub const UNBOUNDED: usize = usize::MAX;

#[derive(Clone, Debug)]
pub struct Board {
    table: Arc<NeighborTable>,
    colours: Vec<Colour>,
    parent: Vec<Point>,
    /// Arena slot of the group rooted at a point; `None` for non-roots.
    root_group: Vec<Option<GroupId>>,
    groups: Vec<Option<Group>>,
    /// Root point of each arena slot.
    group_root: Vec<Point>,
    free: Vec<GroupId>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self::with_table(Arc::new(NeighborTable::new(size)))
    }

    /// An empty board sharing an existing neighbour table.
    pub fn with_table(table: Arc<NeighborTable>) -> Self {
        let area = table.area();
        Self {
            table,
            colours: vec![Colour::Open; area],
            parent: (0..area).collect(),
            root_group: vec![None; area],
            groups: Vec::new(),
            group_root: Vec::new(),
            free: Vec::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.table.size()
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.colours.len()
    }

    /// All points of the board.
    #[inline]
    pub fn points(&self) -> Range<Point> {
        0..self.area()
    }

    #[inline]
    pub fn table(&self) -> &Arc<NeighborTable> {
        &self.table
    }

    #[inline]
    pub fn neighbors(&self, pt: Point) -> &[Point] {
        self.table.neighbors(pt)
    }

    #[inline]
    pub fn colour(&self, pt: Point) -> Colour {
        self.colours[pt]
    }

    /// Whether `pt` is an open true eye of `colour`.
    ///
    /// Every orthogonal neighbour must be `colour`. Each opposing stone on a
    /// diagonal counts as one bad point, and so does sitting on the edge; two
    /// bad points make a false eye. A point with no neighbours is no eye.
    pub fn is_eye(&self, pt: Point, colour: Colour) -> bool {
        let neighbors = self.neighbors(pt);
        if !colour.is_stone() || self.colours[pt] != Colour::Open || neighbors.is_empty() {
            return false;
        }
        if !neighbors.iter().all(|&n| self.colours[n] == colour) {
            return false;
        }
        let opponent = colour.opponent();
        let bad = self
            .table
            .diagonals(pt)
            .iter()
            .filter(|&&d| self.colours[d] == opponent)
            .count()
            + usize::from(self.table.is_edge(pt));
        bad < 2
    }

    /// The live group in arena slot `id`, if any.
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id).and_then(Option::as_ref)
    }

    /// Live groups with their ids.
    pub fn groups(&self) -> impl Iterator<Item = (GroupId, &Group)> + '_ {
        self.groups
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|g| (id, g)))
    }

    /// Resolve the group owning `pt`, compressing the path to its root.
    ///
    /// Returns `(None, pt)` for an open point.
    pub fn find(&mut self, pt: Point) -> (Option<GroupId>, Point) {
        if !self.colours[pt].is_stone() {
            return (None, pt);
        }
        let mut root = pt;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = pt;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        (self.root_group[root], root)
    }

    /// Read-only lookup of the group id owning `pt`.
    pub fn group_id_at(&self, pt: Point) -> Option<GroupId> {
        if !self.colours[pt].is_stone() {
            return None;
        }
        let mut root = pt;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        self.root_group[root]
    }

    /// Read-only lookup of the group owning `pt`.
    pub fn group_at(&self, pt: Point) -> Option<&Group> {
        self.group_id_at(pt).and_then(|id| self.group(id))
    }

    /// Put a stone on an open point and merge it with its same-colour
    /// neighbours. Legality is the caller's business.
    pub fn place(&mut self, pt: Point, colour: Colour) -> Result<GroupId, BoardError> {
        if pt >= self.area() {
            return Err(BoardError::OffBoard {
                point: pt,
                size: self.size(),
            });
        }
        if !colour.is_stone() {
            return Err(BoardError::OpenColour(colour));
        }
        if self.colours[pt].is_stone() {
            return Err(BoardError::Occupied(pt));
        }

        self.colours[pt] = colour;
        self.parent[pt] = pt;
        let mut id = self.alloc(Group::new(colour, [pt]), pt);

        let table = Arc::clone(&self.table);
        for &n in table.neighbors(pt) {
            let (Some(nid), _) = self.find(n) else {
                continue;
            };
            if nid == id {
                continue;
            }
            self.group_mut(nid).remove_liberty(pt);
            if self.colours[n] == colour {
                id = self.union(id, nid);
            }
        }
        Ok(id)
    }

    /// Scan frontier stones of group `id` until it has at least `limit`
    /// liberties or none are left to find. Returns the liberty count.
    pub fn discover_liberties(&mut self, id: GroupId, limit: usize) -> usize {
        let Board {
            table,
            colours,
            groups,
            ..
        } = self;
        let group = groups
            .get_mut(id)
            .and_then(Option::as_mut)
            .unwrap_or_else(|| panic!("group {id} is not live"));
        while group.liberty_count() < limit {
            let Some(stone) = group.pop_frontier() else {
                break;
            };
            for &n in table.neighbors(stone) {
                if colours[n] == Colour::Open && group.add_liberty(n) {
                    trace!("group {id}: liberty {n} found from {stone}");
                }
            }
        }
        group.liberty_count()
    }

    /// [`discover_liberties`](Self::discover_liberties) for the group at `pt`.
    /// Returns `None` when `pt` is open.
    pub fn discover_liberties_at(&mut self, pt: Point, limit: usize) -> Option<usize> {
        let (id, _) = self.find(pt);
        id.map(|id| self.discover_liberties(id, limit))
    }

    /// Fully discover the liberties of every live group.
    pub fn discover_all_libs(&mut self) {
        for id in 0..self.groups.len() {
            if self.groups[id].is_some() {
                self.discover_liberties(id, UNBOUNDED);
            }
        }
    }

    /// True if group `id` has a liberty other than `pt`.
    pub fn has_liberty_other_than(&mut self, id: GroupId, pt: Point) -> bool {
        self.discover_liberties(id, 2);
        self.group_mut(id).liberties().iter().any(|&lib| lib != pt)
    }

    /// Take group `id` off the board. Returns the freed points, sorted.
    pub fn remove_group(&mut self, id: GroupId) -> Vec<Point> {
        let group = self.groups[id]
            .take()
            .unwrap_or_else(|| panic!("group {id} is not live"));
        let root = self.group_root[id];
        self.root_group[root] = None;
        self.free.push(id);

        let mut stones: Vec<Point> = group.into_stones().into_iter().collect();
        stones.sort_unstable();
        for &s in &stones {
            self.colours[s] = Colour::Open;
            self.parent[s] = s;
        }

        let table = Arc::clone(&self.table);
        for &s in &stones {
            for &n in table.neighbors(s) {
                if let (Some(nid), _) = self.find(n) {
                    self.group_mut(nid).push_frontier(n);
                }
            }
        }
        trace!("removed group {id}: {stones:?}");
        stones
    }

    fn group_mut(&mut self, id: GroupId) -> &mut Group {
        self.groups[id]
            .as_mut()
            .unwrap_or_else(|| panic!("group {id} is not live"))
    }

    fn alloc(&mut self, group: Group, root: Point) -> GroupId {
        let id = match self.free.pop() {
            Some(id) => {
                self.groups[id] = Some(group);
                self.group_root[id] = root;
                id
            }
            None => {
                self.groups.push(Some(group));
                self.group_root.push(root);
                self.groups.len() - 1
            }
        };
        self.root_group[root] = Some(id);
        id
    }

    /// Merge two live groups of one colour, smaller into larger.
    fn union(&mut self, a: GroupId, b: GroupId) -> GroupId {
        let (big, small) = if self.group_mut(a).size() >= self.group_mut(b).size() {
            (a, b)
        } else {
            (b, a)
        };
        let absorbed = self.groups[small]
            .take()
            .unwrap_or_else(|| panic!("group {small} is not live"));
        let small_root = self.group_root[small];
        let big_root = self.group_root[big];
        self.parent[small_root] = big_root;
        self.root_group[small_root] = None;
        self.free.push(small);
        self.group_mut(big).absorb(absorbed);
        trace!("merged group {small} into {big}");
        big
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        for row in 0..size {
            for col in 0..size {
                write!(f, "{} ", self.colours[row * size + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn true_liberties(board: &Board, pt: Point) -> HashSet<Point> {
        let group = board.group_at(pt).unwrap();
        group
            .stones()
            .iter()
            .flat_map(|&s| board.neighbors(s).iter().copied())
            .filter(|&n| board.colour(n) == Colour::Open)
            .collect()
    }

    #[test]
    fn test_find_open_point() {
        let mut board = Board::new(5);
        assert_eq!(board.find(12), (None, 12));
        assert!(board.group_at(12).is_none());
    }

    #[test]
    fn test_place_singleton() {
        let mut board = Board::new(5);
        let id = board.place(12, Colour::Black).unwrap();
        assert_eq!(board.colour(12), Colour::Black);
        assert_eq!(board.find(12).0, Some(id));
        assert_eq!(board.discover_liberties(id, UNBOUNDED), 4);
        assert_eq!(board.group(id).unwrap(), &Group::new(Colour::Black, [12]));
    }

    #[test]
    fn test_place_errors() {
        let mut board = Board::new(5);
        board.place(0, Colour::White).unwrap();
        assert_eq!(board.place(0, Colour::Black), Err(BoardError::Occupied(0)));
        assert_eq!(
            board.place(25, Colour::Black),
            Err(BoardError::OffBoard { point: 25, size: 5 })
        );
        assert_eq!(board.place(1, Colour::Open), Err(BoardError::OpenColour(Colour::Open)));
    }

    #[test]
    fn test_union_merges_groups() {
        let mut board = Board::new(5);
        board.place(0, Colour::Black).unwrap();
        board.place(2, Colour::Black).unwrap();
        board.place(6, Colour::White).unwrap();
        let id = board.place(1, Colour::Black).unwrap();
        assert_eq!(board.find(0).0, Some(id));
        assert_eq!(board.find(2).0, Some(id));
        assert_ne!(board.find(6).0, Some(id));
        assert_eq!(board.group(id).unwrap(), &Group::new(Colour::Black, [0, 1, 2]));
        assert_eq!(board.groups().count(), 2);

        board.discover_liberties(id, UNBOUNDED);
        let libs = board.group(id).unwrap().liberties().clone();
        assert_eq!(libs, HashSet::from([3, 5, 7]));
        assert_eq!(libs, true_liberties(&board, 0));
    }

    #[test]
    fn test_occupying_a_liberty_removes_it() {
        let mut board = Board::new(5);
        let black = board.place(12, Colour::Black).unwrap();
        board.discover_liberties(black, UNBOUNDED);
        board.place(7, Colour::White).unwrap();
        let libs = board.group(black).unwrap().liberties();
        assert!(!libs.contains(&7));
        assert_eq!(libs.len(), 3);
    }

    #[test]
    fn test_discovery_stops_at_limit() {
        let mut board = Board::new(9);
        for pt in [40, 41, 42, 43] {
            board.place(pt, Colour::White).unwrap();
        }
        let id = board.find(40).0.unwrap();
        let found = board.discover_liberties(id, 1);
        assert!(found >= 1);
        assert!(found < 10);
        assert!(!board.group(id).unwrap().fully_discovered());
        assert_eq!(board.discover_liberties(id, UNBOUNDED), 10);
        assert!(board.group(id).unwrap().fully_discovered());
    }

    #[test]
    fn test_remove_group_requeues_neighbours() {
        let mut board = Board::new(5);
        // White stone at 0 surrounded by black at 1 and 5.
        board.place(0, Colour::White).unwrap();
        let b1 = board.place(1, Colour::Black).unwrap();
        let b5 = board.place(5, Colour::Black).unwrap();
        board.discover_all_libs();
        let white = board.find(0).0.unwrap();
        assert_eq!(board.discover_liberties(white, UNBOUNDED), 0);

        assert_eq!(board.remove_group(white), vec![0]);
        assert_eq!(board.colour(0), Colour::Open);
        assert_eq!(board.find(0), (None, 0));
        assert!(board.group(white).is_none());

        for (id, pt) in [(b1, 1), (b5, 5)] {
            board.discover_liberties(id, UNBOUNDED);
            assert!(board.group(id).unwrap().liberties().contains(&0));
            assert_eq!(board.group(id).unwrap().liberties(), &true_liberties(&board, pt));
        }
    }

    #[test]
    fn test_arena_slots_are_reused() {
        let mut board = Board::new(5);
        let a = board.place(0, Colour::White).unwrap();
        board.remove_group(a);
        let b = board.place(24, Colour::Black).unwrap();
        assert_eq!(a, b);
        assert_eq!(board.find(24).0, Some(b));
    }

    #[test]
    fn test_path_compression_keeps_membership() {
        let mut board = Board::new(9);
        for pt in 0..9 {
            board.place(pt, Colour::Black).unwrap();
        }
        let id = board.find(0).0.unwrap();
        for pt in 0..9 {
            assert_eq!(board.find(pt).0, Some(id));
            assert_eq!(board.group_id_at(pt), Some(id));
        }
        assert_eq!(board.group(id).unwrap().size(), 9);
    }

    fn board_with(size: usize, black: &[Point], white: &[Point]) -> Board {
        let mut board = Board::new(size);
        for &pt in black {
            board.place(pt, Colour::Black).unwrap();
        }
        for &pt in white {
            board.place(pt, Colour::White).unwrap();
        }
        board
    }

    #[test]
    fn test_is_eye_corner_and_centre() {
        // Corner 0 enclosed by black 1 and 5.
        let board = board_with(5, &[1, 5, 7, 11, 13, 17], &[]);
        assert!(board.is_eye(0, Colour::Black));
        assert!(!board.is_eye(0, Colour::White));
        assert!(board.is_eye(12, Colour::Black));
        assert!(!board.is_eye(2, Colour::Black));
        assert!(!board.is_eye(1, Colour::Black));
        assert!(!board.is_eye(12, Colour::Open));
    }

    #[test]
    fn test_false_eyes() {
        // Centre 12 with two white diagonals.
        let board = board_with(5, &[7, 11, 13, 17], &[6, 18]);
        assert!(!board.is_eye(12, Colour::Black));
        // One white diagonal is tolerated in the centre.
        let board = board_with(5, &[7, 11, 13, 17], &[6]);
        assert!(board.is_eye(12, Colour::Black));
        // But not on the edge.
        let board = board_with(5, &[1, 3, 7], &[6]);
        assert!(!board.is_eye(2, Colour::Black));
    }

    #[test]
    fn test_lone_point_is_no_eye() {
        let board = Board::new(1);
        assert!(board.neighbors(0).is_empty());
        assert!(!board.is_eye(0, Colour::Black));
        assert!(!board.is_eye(0, Colour::White));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(2);
        board.place(0, Colour::Black).unwrap();
        board.place(3, Colour::White).unwrap();
        assert_eq!(board.to_string(), "X . \n. O \n");
    }
}
