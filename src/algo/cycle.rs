use super::*;

/// Cycle detection in undirected graphs.
///
/// A cycle is a closed walk that does not immediately retrace the edge it just used.
/// In particular, a single edge `{u, v}` is **not** a cycle: when the search arrives at `v`
/// from `u`, the way back to `u` is ignored.
pub trait CycleDetection: AdjacencyList + Sized {
    /// Returns the vertices of some cycle in the order they appear along it,
    /// or `None` if the graph is a forest.
    ///
    /// # Examples
    /// ```
    /// use graphprops::{prelude::*, algo::*};
    ///
    /// let graph = build([Edge(1, 2), Edge(2, 3), Edge(3, 1), Edge(3, 4)]);
    /// assert_eq!(graph.find_cycle(), Some(vec![1, 2, 3]));
    /// ```
    fn find_cycle(&self) -> Option<Vec<Self::Vertex>>;

    /// Returns *true* if the graph contains a cycle
    ///
    /// # Examples
    /// ```
    /// use graphprops::{prelude::*, algo::*};
    ///
    /// assert!(build([Edge(1, 2), Edge(2, 3), Edge(3, 1)]).has_cycle());
    /// assert!(!build([Edge(1, 2), Edge(2, 3)]).has_cycle());
    /// ```
    fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }
}

impl<G> CycleDetection for G
where
    G: AdjacencyList,
{
    fn find_cycle(&self) -> Option<Vec<G::Vertex>> {
        CycleSearch::new(self).compute()
    }
}

/// One entry of the explicit DFS stack
struct Frame<'a, V> {
    vertex: &'a V,
    parent: Option<&'a V>,
    /// Index of the next neighbor to explore
    next: usize,
}

struct CycleSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: FxHashSet<&'a G::Vertex>,
    /// Position of every vertex on the current DFS path within `stack`
    on_stack: FxHashMap<&'a G::Vertex, usize>,
    stack: Vec<Frame<'a, G::Vertex>>,
}

impl<'a, G> CycleSearch<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: FxHashSet::default(),
            on_stack: FxHashMap::default(),
            stack: Vec::new(),
        }
    }

    fn compute(mut self) -> Option<Vec<G::Vertex>> {
        let graph = self.graph;
        for root in graph.vertices() {
            if !self.visited.insert(root) {
                continue;
            }

            self.push(root, None);
            if let Some(cycle) = self.compute_from_root() {
                return Some(cycle);
            }
        }

        None
    }

    fn push(&mut self, vertex: &'a G::Vertex, parent: Option<&'a G::Vertex>) {
        self.on_stack.insert(vertex, self.stack.len());
        self.stack.push(Frame {
            vertex,
            parent,
            next: 0,
        });
    }

    fn compute_from_root(&mut self) -> Option<Vec<G::Vertex>> {
        let graph = self.graph;
        while let Some(frame) = self.stack.last_mut() {
            let u = frame.vertex;
            let parent = frame.parent;

            let Some(v) = graph.neighbors_of(u).get(frame.next) else {
                self.on_stack.remove(u);
                self.stack.pop();
                continue;
            };
            frame.next += 1;

            if parent == Some(v) {
                continue;
            }

            if let Some(&pos) = self.on_stack.get(v) {
                return Some(
                    self.stack[pos..]
                        .iter()
                        .map(|frame| frame.vertex.clone())
                        .collect(),
                );
            }

            if self.visited.insert(v) {
                self.push(v, Some(u));
            }
        }

        None
    }
}
