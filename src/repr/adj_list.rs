use std::collections::BTreeMap;

use super::*;

/// An undirected graph stored as a map from every vertex to the list of its neighbors.
///
/// - Vertices are iterated in ascending label order.
/// - Neighbor lists keep edge insertion order (they are not sorted).
/// - If `v` is in the neighborhood of `u`, then `u` is in the neighborhood of `v`.
///
/// The representation is lenient: it stores self-loops and duplicate edges exactly as given.
/// Use [`validate`](crate::validation::validate) beforehand if the input is untrusted.
#[derive(Clone, PartialEq, Eq)]
pub struct AdjList<V: Vertex> {
    nbs: BTreeMap<V, Vec<V>>,
    num_edges: NumEdges,
}

impl<V: Vertex> Default for AdjList<V> {
    fn default() -> Self {
        Self {
            nbs: BTreeMap::new(),
            num_edges: 0,
        }
    }
}

impl<V: Vertex> std::fmt::Debug for AdjList<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.nbs.iter()).finish()
    }
}

impl<V: Vertex> AdjList<V> {
    /// Creates a graph without vertices
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph directly from the neighborhoods of all vertices.
    ///
    /// The caller is responsible for passing symmetric neighborhoods, ie. if `v` is listed
    /// as a neighbor of `u`, then `u` must be listed as a neighbor of `v`.
    /// Every neighbor must also be listed as a vertex.
    /// ** Panics in debug builds if this is violated **
    ///
    /// # Examples
    /// ```
    /// use graphprops::prelude::*;
    ///
    /// let graph = AdjList::from_adjacency([(1, vec![2]), (2, vec![1]), (3, vec![])]);
    /// assert_eq!(graph.number_of_vertices(), 3);
    /// assert_eq!(graph.number_of_edges(), 1);
    /// ```
    pub fn from_adjacency<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        let nbs: BTreeMap<V, Vec<V>> = adjacency
            .into_iter()
            .map(|(u, nbs)| (u, nbs.into_iter().collect()))
            .collect();

        debug_assert!(
            nbs.iter().all(|(u, nbs_u)| nbs_u
                .iter()
                .all(|v| nbs.get(v).is_some_and(|nbs_v| nbs_v.contains(u)))),
            "Adjacency is not symmetric"
        );

        let num_endpoints: usize = nbs.values().map(Vec::len).sum();

        Self {
            nbs,
            num_edges: (num_endpoints / 2) as NumEdges,
        }
    }

    /// Adds `Edge(u, v)` by appending `v` to the neighbors of `u` and vice versa.
    /// Unknown endpoints are inserted as new vertices.
    /// No check for loops or duplicates is performed.
    pub fn add_edge(&mut self, u: V, v: V) {
        self.nbs.entry(u.clone()).or_default().push(v.clone());
        self.nbs.entry(v).or_default().push(u);
        self.num_edges += 1;
    }

    /// Adds an isolated vertex. Returns *true* if the vertex was already present.
    pub fn add_vertex(&mut self, u: V) -> bool {
        if self.nbs.contains_key(&u) {
            return true;
        }
        self.nbs.insert(u, Vec::new());
        false
    }

    /// Returns an iterator over all vertices with their neighborhoods
    pub fn neighborhoods(&self) -> impl Iterator<Item = (&V, &[V])> + '_ {
        self.nbs.iter().map(|(u, nbs)| (u, nbs.as_slice()))
    }
}

impl<V: Vertex> GraphVertexOrder for AdjList<V> {
    type Vertex = V;

    fn number_of_vertices(&self) -> NumVertices {
        self.nbs.len() as NumVertices
    }

    fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.nbs.keys()
    }

    fn contains_vertex(&self, u: &V) -> bool {
        self.nbs.contains_key(u)
    }
}

impl<V: Vertex> GraphEdgeOrder for AdjList<V> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<V: Vertex> AdjacencyList for AdjList<V> {
    fn neighbors_of(&self, u: &V) -> &[V] {
        self.nbs.get(u).map(Vec::as_slice).unwrap_or_default()
    }
}

impl<V: Vertex> GraphFromEdges for AdjList<V> {
    fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<V>>,
    {
        let mut graph = Self::new();
        for Edge(u, v) in edges.into_iter().map(Into::into) {
            graph.add_edge(u, v);
        }
        graph
    }
}

impl<V: Vertex> FromIterator<Edge<V>> for AdjList<V> {
    fn from_iter<T: IntoIterator<Item = Edge<V>>>(iter: T) -> Self {
        Self::from_edges(iter)
    }
}
