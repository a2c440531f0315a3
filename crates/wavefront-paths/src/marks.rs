//! Visited-set and parent bookkeeping for the traversal engine.
//!
//! A vertex is *discovered* once, when it is first reached; from then on it
//! keeps the parent it was discovered from. [`HashMarks`] works for any
//! hashable vertex, [`DenseMarks`] addresses grid cells by flat index.

use std::collections::HashMap;
use std::hash::Hash;

use wavefront_core::{Point, Range};

/// Storage for discovered vertices and their parents.
pub trait Marks<V> {
    /// Mark `v` as discovered from `parent` (`None` for a root). Returns
    /// `false`, leaving the store unchanged, if `v` was already discovered
    /// or cannot be stored.
    fn discover(&mut self, v: &V, parent: Option<&V>) -> bool;

    /// Whether `v` has been discovered.
    fn is_discovered(&self, v: &V) -> bool;

    /// The vertex `v` was discovered from. Roots and undiscovered vertices
    /// have none.
    fn parent(&self, v: &V) -> Option<V>;

    /// Forget every discovered vertex.
    fn clear(&mut self);
}

// ---------------------------------------------------------------------------
// HashMarks
// ---------------------------------------------------------------------------

/// Hashed visited set with a parent map.
#[derive(Debug, Clone)]
pub struct HashMarks<V> {
    parents: HashMap<V, Option<V>>,
}

impl<V> Default for HashMarks<V> {
    fn default() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }
}

impl<V: Clone + Eq + Hash> HashMarks<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of discovered vertices.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

impl<V: Clone + Eq + Hash> Marks<V> for HashMarks<V> {
    fn discover(&mut self, v: &V, parent: Option<&V>) -> bool {
        if self.parents.contains_key(v) {
            return false;
        }
        self.parents.insert(v.clone(), parent.cloned());
        true
    }

    #[inline]
    fn is_discovered(&self, v: &V) -> bool {
        self.parents.contains_key(v)
    }

    #[inline]
    fn parent(&self, v: &V) -> Option<V> {
        self.parents.get(v).cloned().flatten()
    }

    fn clear(&mut self) {
        self.parents.clear();
    }
}

// ---------------------------------------------------------------------------
// DenseMarks
// ---------------------------------------------------------------------------

const NO_PARENT: usize = usize::MAX;

/// Flat-array visited set and parent map over the cells of a [`Range`].
///
/// Clearing is O(1): each slot carries the generation it was discovered in,
/// and bumping the generation invalidates every slot at once.
#[derive(Debug, Clone)]
pub struct DenseMarks {
    rng: Range,
    parents: Vec<usize>,
    stamps: Vec<u32>,
    generation: u32,
}

impl DenseMarks {
    /// Create marks covering `rng`.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            parents: vec![NO_PARENT; len],
            stamps: vec![0; len],
            generation: 1,
        }
    }

    /// The range of cells that can be marked.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Replace the covered range and clear all marks.
    ///
    /// Storage is only reallocated if the new range has more cells than the
    /// current capacity.
    pub fn set_range(&mut self, rng: Range) {
        let len = rng.len();
        self.rng = rng;
        if len > self.stamps.len() {
            self.parents.resize(len, NO_PARENT);
            self.stamps.resize(len, 0);
        }
        self.clear();
    }

    #[inline]
    fn slot(&self, p: &Point) -> Option<usize> {
        self.rng.index(*p)
    }
}

impl Marks<Point> for DenseMarks {
    fn discover(&mut self, p: &Point, parent: Option<&Point>) -> bool {
        let Some(i) = self.slot(p) else {
            return false;
        };
        if self.stamps[i] == self.generation {
            return false;
        }
        let pi = parent.and_then(|q| self.slot(q)).unwrap_or(NO_PARENT);
        self.stamps[i] = self.generation;
        self.parents[i] = pi;
        true
    }

    #[inline]
    fn is_discovered(&self, p: &Point) -> bool {
        self.slot(p)
            .is_some_and(|i| self.stamps[i] == self.generation)
    }

    fn parent(&self, p: &Point) -> Option<Point> {
        let i = self.slot(p)?;
        if self.stamps[i] != self.generation || self.parents[i] == NO_PARENT {
            return None;
        }
        Some(self.rng.point(self.parents[i]))
    }

    fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale stamps could now collide.
            self.stamps.fill(0);
            self.generation = 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_marks_discover_once() {
        let mut m = HashMarks::new();
        assert!(m.discover(&1, None));
        assert!(m.discover(&2, Some(&1)));
        assert!(!m.discover(&2, Some(&3)));
        assert_eq!(m.parent(&2), Some(1));
        assert_eq!(m.parent(&1), None);
        assert_eq!(m.parent(&9), None);
        assert_eq!(m.len(), 2);
        m.clear();
        assert!(m.is_empty());
        assert!(!m.is_discovered(&1));
    }

    #[test]
    fn dense_marks_discover_once() {
        let mut m = DenseMarks::new(Range::with_size(3, 3));
        let a = Point::new(0, 0);
        let b = Point::new(0, 1);
        assert!(m.discover(&a, None));
        assert!(m.discover(&b, Some(&a)));
        assert!(!m.discover(&b, None));
        assert_eq!(m.parent(&b), Some(a));
        assert_eq!(m.parent(&a), None);
        assert!(m.is_discovered(&b));
    }

    #[test]
    fn dense_marks_reject_out_of_range() {
        let mut m = DenseMarks::new(Range::with_size(2, 2));
        assert!(!m.discover(&Point::new(2, 0), None));
        assert!(!m.discover(&Point::new(-1, 0), None));
        assert!(!m.is_discovered(&Point::new(2, 0)));
    }

    #[test]
    fn dense_marks_clear_is_generational() {
        let mut m = DenseMarks::new(Range::with_size(2, 2));
        let p = Point::new(1, 1);
        m.discover(&p, None);
        m.clear();
        assert!(!m.is_discovered(&p));
        assert!(m.discover(&p, None));
    }

    #[test]
    fn dense_marks_survive_generation_wrap() {
        let mut m = DenseMarks::new(Range::with_size(1, 2));
        let p = Point::new(0, 0);
        m.generation = u32::MAX;
        m.discover(&p, None);
        m.clear();
        assert_eq!(m.generation, 1);
        assert!(!m.is_discovered(&p));
    }

    #[test]
    fn set_range_smaller_preserves_capacity() {
        let mut m = DenseMarks::new(Range::with_size(20, 20));
        m.set_range(Range::with_size(5, 5));
        assert_eq!(m.range(), Range::with_size(5, 5));
        assert_eq!(m.stamps.len(), 400);
        m.set_range(Range::with_size(30, 30));
        assert_eq!(m.stamps.len(), 900);
    }
}
