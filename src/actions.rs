//! Candidate move set with constant-time update.

use crate::colour::Point;

/// A set of points backed by a dense vector plus a reverse index, so that
/// membership tests, insertion and removal are all O(1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionSet {
    items: Vec<Point>,
    index: Vec<Option<usize>>,
}

impl ActionSet {
    /// Every point in `0..area`.
    pub fn full(area: usize) -> Self {
        Self {
            items: (0..area).collect(),
            index: (0..area).map(Some).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        self.index.get(pt).is_some_and(Option::is_some)
    }

    /// Returns false if `pt` was already present.
    pub fn insert(&mut self, pt: Point) -> bool {
        if self.contains(pt) {
            return false;
        }
        self.index[pt] = Some(self.items.len());
        self.items.push(pt);
        true
    }

    /// Returns false if `pt` was absent.
    pub fn remove(&mut self, pt: Point) -> bool {
        let Some(slot) = self.index.get_mut(pt).and_then(Option::take) else {
            return false;
        };
        self.items.swap_remove(slot);
        if let Some(&moved) = self.items.get(slot) {
            self.index[moved] = Some(slot);
        }
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.items.iter().copied()
    }

    /// Members in insertion order, modulo swap-removals. Random policies
    /// copy and shuffle this.
    pub fn as_slice(&self) -> &[Point] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full() {
        let full = ActionSet::full(9);
        assert_eq!(full.len(), 9);
        assert!((0..9).all(|pt| full.contains(pt)));
        assert!(!full.contains(9));
        assert_eq!(full.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);

        let none = ActionSet::full(0);
        assert!(none.is_empty());
        assert!(!none.contains(0));
    }

    #[test]
    fn test_insert_remove() {
        let mut set = ActionSet::full(5);
        assert!(set.remove(0));
        assert!(!set.remove(0));
        assert!(set.remove(3));
        assert!(!set.contains(0));
        assert!(!set.contains(3));
        assert_eq!(set.len(), 3);
        for pt in [1, 2, 4] {
            assert!(set.contains(pt));
        }

        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.contains(3));
        assert_eq!(set.len(), 4);

        let mut members: Vec<_> = set.iter().collect();
        members.sort_unstable();
        assert_eq!(members, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_remove_last_element() {
        let mut set = ActionSet::full(3);
        assert!(set.remove(2));
        assert!(set.remove(1));
        assert!(set.remove(0));
        assert!(set.is_empty());
        assert!(set.as_slice().is_empty());
    }

    #[test]
    fn test_swap_remove_keeps_index() {
        let mut set = ActionSet::full(4);
        assert!(set.remove(1));
        assert_eq!(set.as_slice(), &[0, 3, 2]);
        assert!(set.remove(3));
        assert_eq!(set.as_slice(), &[0, 2]);
        assert!(set.contains(2));
        assert!(set.insert(1));
        assert_eq!(set.as_slice(), &[0, 2, 1]);
    }
}
