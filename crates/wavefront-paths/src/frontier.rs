//! The breadth-first frontier expansion shared by every query.
//!
//! [`Frontier::run`] owns the only BFS loop in the crate. Queries steer it
//! with a [`Policy`] that decides, per vertex, whether to keep expanding,
//! skip the vertex's neighbours, or stop the whole search.
//!
//! A vertex is marked the moment it is discovered, not when it is dequeued,
//! so it enters the queue at most once and vertices leave the queue in
//! non-decreasing distance from the sources. Ties follow the neighbour order
//! of the [`Adjacency`].

use std::collections::VecDeque;

use crate::marks::Marks;
use crate::traits::Adjacency;

/// What the engine should do after showing a vertex to the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// On dequeue: do not expand this vertex. On discovery: keep the vertex
    /// marked but do not enqueue it.
    Prune,
    /// End the search now.
    Stop,
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The frontier ran empty.
    Exhausted,
    /// The policy returned [`Flow::Stop`].
    Stopped,
}

/// Per-vertex hooks called by [`Frontier::run`].
///
/// `depth` is the distance from the nearest source.
pub trait Policy<V> {
    /// Called when `v` is taken from the head of the queue, before its
    /// neighbours are enumerated.
    fn dequeued(&mut self, _v: &V, _depth: usize) -> Flow {
        Flow::Continue
    }

    /// Called when `v` is first reached from `parent`, after it has been
    /// marked and before it is enqueued.
    fn discovered(&mut self, _v: &V, _parent: &V, _depth: usize) -> Flow {
        Flow::Continue
    }
}

/// Policy that expands everything.
impl<V> Policy<V> for () {}

/// Adapts a closure into a policy that only looks at dequeued vertices.
pub struct OnDequeue<F>(pub F);

impl<V, F: FnMut(&V, usize) -> Flow> Policy<V> for OnDequeue<F> {
    #[inline]
    fn dequeued(&mut self, v: &V, depth: usize) -> Flow {
        (self.0)(v, depth)
    }
}

/// Adapts a closure into a policy that only looks at discoveries.
pub struct OnDiscover<F>(pub F);

impl<V, F: FnMut(&V, &V, usize) -> Flow> Policy<V> for OnDiscover<F> {
    #[inline]
    fn discovered(&mut self, v: &V, parent: &V, depth: usize) -> Flow {
        (self.0)(v, parent, depth)
    }
}

/// Breadth-first search state: a FIFO queue of `(vertex, depth)` pairs plus
/// the visited/parent store `M`.
///
/// Marks persist across [`run`](Self::run) calls until
/// [`reset`](Self::reset), so several searches can share one visited set.
#[derive(Debug, Clone)]
pub struct Frontier<V, M> {
    queue: VecDeque<(V, usize)>,
    marks: M,
    nbuf: Vec<V>,
}

impl<V: Clone + Eq, M: Marks<V> + Default> Default for Frontier<V, M> {
    fn default() -> Self {
        Self::new(M::default())
    }
}

impl<V: Clone + Eq, M: Marks<V>> Frontier<V, M> {
    /// Create a frontier over the given store.
    pub fn new(marks: M) -> Self {
        Self {
            queue: VecDeque::new(),
            marks,
            nbuf: Vec::new(),
        }
    }

    /// The visited/parent store.
    #[inline]
    pub fn marks(&self) -> &M {
        &self.marks
    }

    #[inline]
    pub fn marks_mut(&mut self) -> &mut M {
        &mut self.marks
    }

    /// Forget all discovered vertices.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.marks.clear();
    }

    /// Breadth-first search from `start`.
    ///
    /// Does nothing if `start` is not in `space` or was already discovered.
    pub fn run<A, P>(&mut self, space: &A, start: V, policy: &mut P) -> Outcome
    where
        A: Adjacency<Vertex = V>,
        P: Policy<V>,
    {
        self.run_many(space, std::iter::once(start), policy)
    }

    /// Breadth-first search from several sources at depth 0.
    ///
    /// Sources outside `space` or already discovered are skipped.
    pub fn run_many<A, P, I>(&mut self, space: &A, sources: I, policy: &mut P) -> Outcome
    where
        A: Adjacency<Vertex = V>,
        P: Policy<V>,
        I: IntoIterator<Item = V>,
    {
        self.queue.clear();
        for src in sources {
            if space.contains(&src) && self.marks.discover(&src, None) {
                self.queue.push_back((src, 0));
            }
        }
        let mut discovered = self.queue.len();

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let outcome = 'search: loop {
            let Some((v, depth)) = self.queue.pop_front() else {
                break 'search Outcome::Exhausted;
            };
            match policy.dequeued(&v, depth) {
                Flow::Continue => {}
                Flow::Prune => continue,
                Flow::Stop => break 'search Outcome::Stopped,
            }

            nbuf.clear();
            space.neighbors(&v, &mut nbuf);

            for n in nbuf.drain(..) {
                if !self.marks.discover(&n, Some(&v)) {
                    continue;
                }
                discovered += 1;
                match policy.discovered(&n, &v, depth + 1) {
                    Flow::Continue => self.queue.push_back((n, depth + 1)),
                    Flow::Prune => {}
                    Flow::Stop => break 'search Outcome::Stopped,
                }
            }
        };
        self.nbuf = nbuf;

        log::trace!("frontier: {outcome:?} after discovering {discovered} vertices");
        outcome
    }

    /// Walk parent links back from `target` and return the path from its
    /// root to `target`, both included.
    ///
    /// Returns `None` if `target` was not discovered.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.marks.is_discovered(target) {
            return None;
        }
        let mut path = vec![target.clone()];
        let mut cur = target.clone();
        while let Some(p) = self.marks.parent(&cur) {
            path.push(p.clone());
            cur = p;
        }
        path.reverse();
        Some(path)
    }
}
