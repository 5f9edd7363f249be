/*!
# Bipartite Graph Algorithms

This module provides the bipartiteness test via two-coloring.

Functionality includes:
- Representing a bipartition (a side per vertex)
- Testing whether a given bipartition is valid
- Computing a valid bipartition if one exists
*/

use super::*;

/// The two sides of a bipartition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the other side
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Assignment of vertices to the [`Side::Left`] or [`Side::Right`] side.
/// Vertices without an explicit assignment are considered to be on the left side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bipartition<V: Vertex> {
    sides: FxHashMap<V, Side>,
}

impl<V: Vertex> Default for Bipartition<V> {
    fn default() -> Self {
        Self {
            sides: FxHashMap::default(),
        }
    }
}

impl<V: Vertex> Bipartition<V> {
    /// Creates a bipartition with all vertices on the left side
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `u` to `side`
    pub fn assign(&mut self, u: V, side: Side) {
        self.sides.insert(u, side);
    }

    /// Returns the side of `u`
    pub fn side_of(&self, u: &V) -> Side {
        self.sides.get(u).copied().unwrap_or(Side::Left)
    }

    /// Returns `true` if the vertex is on the left side of the partition.
    pub fn is_on_left_side(&self, u: &V) -> bool {
        self.side_of(u) == Side::Left
    }

    /// Returns `true` if the vertex is on the right side of the partition.
    pub fn is_on_right_side(&self, u: &V) -> bool {
        self.side_of(u) == Side::Right
    }

    /// Returns all explicitly assigned vertices of the given side
    pub fn vertices_on(&self, side: Side) -> impl Iterator<Item = &V> + '_ {
        self.sides
            .iter()
            .filter_map(move |(u, s)| (*s == side).then_some(u))
    }
}

impl<V: Vertex> FromIterator<(V, Side)> for Bipartition<V> {
    fn from_iter<T: IntoIterator<Item = (V, Side)>>(iter: T) -> Self {
        Self {
            sides: iter.into_iter().collect(),
        }
    }
}

/// A trait for testing and computing bipartitions in graphs.
pub trait BipartiteTest: AdjacencyList + Sized {
    /// Tests whether the given candidate partition is a valid bipartition,
    /// ie. every edge connects two different sides.
    ///
    /// # Examples
    /// ```
    /// use graphprops::{prelude::*, algo::*};
    ///
    /// let graph = build([Edge(1, 2), Edge(2, 3)]);
    /// let bip: Bipartition<_> = [(2, Side::Right)].into_iter().collect();
    /// assert!(graph.is_bipartition(&bip));
    /// ```
    fn is_bipartition(&self, bipartition: &Bipartition<Self::Vertex>) -> bool;

    /// Computes a valid bipartition of the graph, if one exists.
    /// The smallest vertex of every connected component is put on the left side.
    /// Returns `None` if the graph is not bipartite.
    fn compute_bipartition(&self) -> Option<Bipartition<Self::Vertex>>;

    /// Tests whether the graph is bipartite, ie. whether its vertices can be two-colored
    /// such that no edge connects vertices of the same color.
    /// A graph without vertices is bipartite.
    ///
    /// # Examples
    /// ```
    /// use graphprops::{prelude::*, algo::*};
    ///
    /// assert!(build([Edge(1, 2), Edge(2, 3)]).is_bipartite());
    /// assert!(!build([Edge(1, 2), Edge(2, 3), Edge(3, 1)]).is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition().is_some()
    }
}

impl<G> BipartiteTest for G
where
    G: AdjacencyList,
{
    fn is_bipartition(&self, bipartition: &Bipartition<G::Vertex>) -> bool {
        self.vertices().all(|u| {
            let side = bipartition.side_of(u);
            self.neighbors_of(u)
                .iter()
                .all(|v| bipartition.side_of(v) != side)
        })
    }

    fn compute_bipartition(&self) -> Option<Bipartition<G::Vertex>> {
        let bipartition = propose_possibly_illegal_bipartition(self);
        self.is_bipartition(&bipartition).then_some(bipartition)
    }
}

/// Two-colors the graph along a DFS forest: roots go left and every vertex gets the
/// opposite side of the vertex it was discovered from.
///
/// - If the graph is bipartite, the returned partition is valid
/// - If the graph is not bipartite, the returned partition is invalid
fn propose_possibly_illegal_bipartition<G>(graph: &G) -> Bipartition<G::Vertex>
where
    G: AdjacencyList,
{
    let mut sides: FxHashMap<&G::Vertex, Side> = FxHashMap::default();

    for (pred, u) in graph.dfs_all() {
        let side = match pred {
            None => Side::Left,
            Some(pred) => sides.get(pred).map_or(Side::Left, |s| s.opposite()),
        };
        sides.insert(u, side);
    }

    sides
        .into_iter()
        .map(|(u, side)| (u.clone(), side))
        .collect()
}
