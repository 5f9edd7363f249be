/*!
Graph traversal iterators.

[`TraversalSearch`] maintains an explicit frontier (queue or stack) of vertices to visit and
a set of already discovered vertices. Every step yields a [`Visit`], ie. the visited vertex
together with the vertex it was discovered from.

- [`VecDeque`] as frontier -> queue semantics -> **BFS**
- [`Vec`] as frontier -> stack semantics -> **DFS**

Vertices are marked as discovered when they are pushed, so the DFS variant visits every vertex
exactly once but is not a strict recursive depth-first order.
A finished search can be restarted at an undiscovered vertex, which makes these iterators the
building block for per-component algorithms.
*/

use std::collections::VecDeque;

use super::*;

/// `(predecessor, vertex)`: the predecessor is `None` for roots of the search
pub type Visit<'a, V> = (Option<&'a V>, &'a V);

/// Abstraction for the traversal frontier data structure.
pub trait NodeSequencer<T>: Default {
    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn push(&mut self, item: T) {
        self.push_back(item)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn push(&mut self, item: T) {
        self.push(item)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: FxHashSet<&'a G::Vertex>,
    sequencer: S,
}

/// A BFS traversal iterator over the graph.
pub type Bfs<'a, G> = TraversalSearch<'a, G, VecDeque<Visit<'a, <G as GraphVertexOrder>::Vertex>>>;

/// A DFS traversal iterator over the graph.
pub type Dfs<'a, G> = TraversalSearch<'a, G, Vec<Visit<'a, <G as GraphVertexOrder>::Vertex>>>;

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer<Visit<'a, G::Vertex>>,
{
    /// Creates a search that has not discovered any vertex yet.
    /// Call [`TraversalSearch::try_restart_at_unvisited`] to start it.
    pub fn new_idle(graph: &'a G) -> Self {
        Self {
            graph,
            visited: FxHashSet::default(),
            sequencer: S::default(),
        }
    }

    /// Creates a new traversal iterator starting from `start`.
    pub fn new(graph: &'a G, start: &'a G::Vertex) -> Self {
        let mut search = Self::new_idle(graph);
        search.visited.insert(start);
        search.sequencer.push((None, start));
        search
    }

    /// Returns *true* if `u` was already discovered by this search
    pub fn did_visit_node(&self, u: &G::Vertex) -> bool {
        self.visited.contains(u)
    }

    /// Tries to restart the search at a yet unvisited vertex (the smallest one) and returns
    /// *true* iff successful. Requires that the search came to a hold earlier,
    /// ie. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert_eq!(self.sequencer.cardinality(), 0);
        let unvisited = self.graph.vertices().find(|u| !self.visited.contains(u));
        match unvisited {
            None => false,
            Some(u) => {
                self.visited.insert(u);
                self.sequencer.push((None, u));
                true
            }
        }
    }
}

impl<'a, G, S> Iterator for TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer<Visit<'a, G::Vertex>>,
{
    type Item = Visit<'a, G::Vertex>;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.1;

        for v in self.graph.neighbors_of(u) {
            if self.visited.insert(v) {
                self.sequencer.push((Some(u), v));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(
                self.graph.len().saturating_sub(self.visited.len())
                    + self.sequencer.cardinality(),
            ),
        )
    }
}

/// Exposes traversals directly as methods on graphs.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns a BFS iterator starting at `start`
    ///
    /// # Examples
    /// ```
    /// use graphprops::{prelude::*, algo::*};
    ///
    /// let graph = build([Edge(1, 2), Edge(1, 3), Edge(3, 4)]);
    /// let order: Vec<_> = graph.bfs(&1).map(|(_, u)| *u).collect();
    /// assert_eq!(order, vec![1, 2, 3, 4]);
    /// ```
    fn bfs<'a>(&'a self, start: &'a Self::Vertex) -> Bfs<'a, Self> {
        TraversalSearch::new(self, start)
    }

    /// Returns a DFS iterator starting at `start`
    fn dfs<'a>(&'a self, start: &'a Self::Vertex) -> Dfs<'a, Self> {
        TraversalSearch::new(self, start)
    }

    /// Returns a DFS iterator that visits *every* vertex of the graph,
    /// restarting at the smallest unvisited vertex whenever a component is exhausted.
    fn dfs_all(&self) -> DfsAll<'_, Self> {
        DfsAll {
            search: TraversalSearch::new_idle(self),
        }
    }
}

impl<G: AdjacencyList> Traversal for G {}

/// DFS over all components, see [`Traversal::dfs_all`]
pub struct DfsAll<'a, G: AdjacencyList> {
    search: Dfs<'a, G>,
}

impl<'a, G: AdjacencyList> Iterator for DfsAll<'a, G> {
    type Item = Visit<'a, G::Vertex>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(visit) = self.search.next() {
                return Some(visit);
            }
            if !self.search.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}
