use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

use crate::vertex::Vertex;

/// An edge is defined by two vertices/endpoints.
/// All graphs in this crate are undirected, so `Edge(u, v)` and `Edge(v, u)` describe the same edge.
///
/// (De)serializes as a 2-element array `[u, v]`; any other arity is rejected.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge<V>(pub V, pub V);

/// Edges in the order supplied by the caller. May contain self-loops and duplicates
/// until it passed [`validate`](crate::validation::validate).
pub type EdgeList<V> = Vec<Edge<V>>;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl<V: Display> Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl<V: Debug> Debug for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?})", self.0, self.1)
    }
}

impl<V: Vertex> Edge<V> {
    /// Normalizes the edge such that the smaller endpoint comes first
    pub fn normalized(&self) -> Self {
        if self.is_normalized() {
            self.clone()
        } else {
            self.reverse()
        }
    }

    /// Returns true if the smaller endpoint comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1.clone(), self.0.clone())
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from(value: (V, V)) -> Self {
        Edge(value.0, value.1)
    }
}

impl<V: Clone> From<&(V, V)> for Edge<V> {
    fn from(value: &(V, V)) -> Self {
        Edge(value.0.clone(), value.1.clone())
    }
}

impl<V> From<[V; 2]> for Edge<V> {
    fn from([u, v]: [V; 2]) -> Self {
        Edge(u, v)
    }
}

/// Anything that *should* describe an edge, but may have the wrong number of endpoints.
///
/// Used by [`validate`](crate::validation::validate) to check loosely-typed input such as
/// `Vec<Vec<V>>` in addition to already well-formed [`EdgeList`]s.
pub trait VertexPair {
    type Vertex;

    /// Returns both endpoints if this is a pair and `None` otherwise
    fn endpoints(&self) -> Option<(&Self::Vertex, &Self::Vertex)>;
}

impl<V> VertexPair for Edge<V> {
    type Vertex = V;

    fn endpoints(&self) -> Option<(&V, &V)> {
        Some((&self.0, &self.1))
    }
}

impl<V> VertexPair for (V, V) {
    type Vertex = V;

    fn endpoints(&self) -> Option<(&V, &V)> {
        Some((&self.0, &self.1))
    }
}

impl<V> VertexPair for [V; 2] {
    type Vertex = V;

    fn endpoints(&self) -> Option<(&V, &V)> {
        Some((&self[0], &self[1]))
    }
}

impl<V> VertexPair for [V] {
    type Vertex = V;

    fn endpoints(&self) -> Option<(&V, &V)> {
        match self {
            [u, v] => Some((u, v)),
            _ => None,
        }
    }
}

impl<V> VertexPair for Vec<V> {
    type Vertex = V;

    fn endpoints(&self) -> Option<(&V, &V)> {
        self.as_slice().endpoints()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalize_and_loops() {
        assert_eq!(Edge(3, 1).normalized(), Edge(1, 3));
        assert_eq!(Edge(1, 3).normalized(), Edge(1, 3));
        assert!(Edge("a", "a").is_loop());
        assert!(!Edge(1, 2).is_loop());
        assert_eq!(Edge(1, 2).reverse(), Edge(2, 1));
    }

    #[test]
    fn vertex_pair_arity() {
        assert_eq!(vec![1, 2].endpoints(), Some((&1, &2)));
        assert_eq!(vec![1, 2, 3].endpoints(), None);
        assert_eq!(Vec::<u32>::new().endpoints(), None);
        assert_eq!([4, 5].endpoints(), Some((&4, &5)));
        assert_eq!(Edge(6, 7).endpoints(), Some((&6, &7)));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Edge(1, 2)), "(1,2)");
        assert_eq!(format!("{:?}", Edge("a", "b")), "(\"a\",\"b\")");
    }
}
