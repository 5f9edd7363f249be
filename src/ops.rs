use itertools::Itertools;

use crate::{edge::*, vertex::*};

/// Provides getters pertaining to the vertex-set of a graph
pub trait GraphVertexOrder {
    /// Label type of the vertices of this graph
    type Vertex: Vertex;

    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Return the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_vertices() as usize
    }

    /// Returns an iterator over V in ascending order of the labels.
    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex> + '_;

    /// Returns *true* if `u` is a vertex of the graph
    fn contains_vertex(&self, u: &Self::Vertex) -> bool;

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-set of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphVertexOrder + Sized {
    /// Returns the neighbors of `u` in the order their edges were inserted.
    /// Vertices that are not part of the graph have no neighbors.
    fn neighbors_of(&self, u: &Self::Vertex) -> &[Self::Vertex];

    /// Returns the number of neighbors of `u`
    fn degree_of(&self, u: &Self::Vertex) -> NumVertices {
        self.neighbors_of(u).len() as NumVertices
    }

    /// Returns the degree of every vertex (in vertex order)
    fn degrees(&self) -> impl Iterator<Item = NumVertices> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns all degrees sorted ascending
    fn degree_sequence(&self) -> Vec<NumVertices> {
        self.degrees().sorted_unstable().collect_vec()
    }

    /// Returns a distribution `(degree, #vertices)` sorted by degree
    fn degree_distribution(&self) -> Vec<(NumVertices, NumVertices)> {
        self.degrees()
            .counts()
            .into_iter()
            .map(|(d, n)| (d, n as NumVertices))
            .sorted_by_key(|(d, _)| *d)
            .collect_vec()
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumVertices {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns *true* if `v` is a neighbor of `u`
    fn has_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool {
        self.neighbors_of(u).contains(v)
    }

    /// Returns an iterator over all edges incident to `u`.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges_of<'a>(
        &'a self,
        u: &'a Self::Vertex,
        only_normalized: bool,
    ) -> impl Iterator<Item = Edge<Self::Vertex>> + 'a {
        self.neighbors_of(u)
            .iter()
            .map(move |v| Edge(u.clone(), v.clone()))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges of the graph.
    /// If `only_normalized`, every undirected edge is reported once as `(u, v)` with `u <= v`,
    /// otherwise in both orientations.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge<Self::Vertex>> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }
}

/// Trait for constructing a graph from an edge list
pub trait GraphFromEdges: GraphVertexOrder + Sized {
    /// Creates a graph containing exactly the endpoints of `edges` and one adjacency per
    /// edge endpoint. Edges are **not** validated: loops and duplicates are kept as given.
    fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<Self::Vertex>>;
}
