//! Precomputed adjacency for a given board size.
//!
//! Points are row-major indices with no padding border: edges are simply
//! missing entries. One table is built per
//! size and shared by every board of that size.

use std::collections::HashMap;
use std::sync::Arc;

use crate::colour::Point;

/// Orthogonal and diagonal neighbours of every point on an NxN board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborTable {
    size: usize,
    /// `adjacent[offsets[pt]..offsets[pt + 1]]` are the neighbours of `pt`.
    adjacent: Vec<Point>,
    offsets: Vec<usize>,
    diagonal: Vec<Point>,
    diagonal_offsets: Vec<usize>,
}

impl NeighborTable {
    pub fn new(size: usize) -> Self {
        let area = size * size;
        let mut adjacent = Vec::with_capacity(4 * area);
        let mut offsets = Vec::with_capacity(area + 1);
        let mut diagonal = Vec::with_capacity(4 * area);
        let mut diagonal_offsets = Vec::with_capacity(area + 1);

        const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
        const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

        for pt in 0..area {
            let (row, col) = ((pt / size) as isize, (pt % size) as isize);
            let on_board = |(dr, dc): &(isize, isize)| {
                let (r, c) = (row + dr, col + dc);
                (r >= 0 && c >= 0 && r < size as isize && c < size as isize)
                    .then(|| r as usize * size + c as usize)
            };
            offsets.push(adjacent.len());
            adjacent.extend(ORTHOGONAL.iter().filter_map(on_board));
            diagonal_offsets.push(diagonal.len());
            diagonal.extend(DIAGONAL.iter().filter_map(on_board));
        }
        offsets.push(adjacent.len());
        diagonal_offsets.push(diagonal.len());

        Self {
            size,
            adjacent,
            offsets,
            diagonal,
            diagonal_offsets,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of points on the board.
    #[inline]
    pub fn area(&self) -> usize {
        self.size * self.size
    }

    /// Orthogonally adjacent on-board points of `pt`.
    #[inline]
    pub fn neighbors(&self, pt: Point) -> &[Point] {
        &self.adjacent[self.offsets[pt]..self.offsets[pt + 1]]
    }

    /// Diagonally adjacent on-board points of `pt`.
    #[inline]
    pub fn diagonals(&self, pt: Point) -> &[Point] {
        &self.diagonal[self.diagonal_offsets[pt]..self.diagonal_offsets[pt + 1]]
    }

    /// Whether `pt` lies on the first or last row or column.
    #[inline]
    pub fn is_edge(&self, pt: Point) -> bool {
        self.neighbors(pt).len() < 4
    }
}

/// Enumerate `(point, neighbours)` for every point of a board of `size`.
pub fn make_neighbors(size: usize) -> Vec<(Point, Vec<Point>)> {
    let table = NeighborTable::new(size);
    (0..table.area())
        .map(|pt| (pt, table.neighbors(pt).to_vec()))
        .collect()
}

/// Caller-owned cache of neighbour tables keyed by board size.
#[derive(Debug, Default, Clone)]
pub struct NeighborCache {
    tables: HashMap<usize, Arc<NeighborTable>>,
}

impl NeighborCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table for `size`, built on first request.
    pub fn get(&mut self, size: usize) -> Arc<NeighborTable> {
        Arc::clone(
            self.tables
                .entry(size)
                .or_insert_with(|| Arc::new(NeighborTable::new(size))),
        )
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_counts(size: usize) -> Vec<usize> {
        let row = |ends: usize, middle: usize| {
            let mut r = vec![ends];
            r.extend(std::iter::repeat_n(middle, size - 2));
            r.push(ends);
            r
        };
        let mut counts = row(2, 3);
        for _ in 0..size - 2 {
            counts.extend(row(3, 4));
        }
        counts.extend(row(2, 3));
        counts
    }

    #[test]
    fn test_neighbor_counts_all_sizes() {
        for size in 2..=25 {
            let mut counts = vec![0; size * size];
            for (_, neighs) in make_neighbors(size) {
                for pt in neighs {
                    counts[pt] += 1;
                }
            }
            assert_eq!(counts, expected_counts(size), "size {size}");
        }
    }

    #[test]
    fn test_neighbors_are_symmetric() {
        let table = NeighborTable::new(7);
        for pt in 0..table.area() {
            for &n in table.neighbors(pt) {
                assert!(table.neighbors(n).contains(&pt));
            }
        }
    }

    #[test]
    fn test_diagonals() {
        let table = NeighborTable::new(5);
        assert_eq!(table.diagonals(0), &[6]);
        assert_eq!(table.diagonals(12), &[6, 8, 16, 18]);
        assert_eq!(table.diagonals(2), &[6, 8]);
        assert!(table.is_edge(2));
        assert!(!table.is_edge(12));
    }

    #[test]
    fn test_cache_shares_tables() {
        let mut cache = NeighborCache::new();
        let a = cache.get(9);
        let b = cache.get(9);
        let c = cache.get(13);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(c.size(), 13);
        assert_eq!(cache.len(), 2);
    }
}
