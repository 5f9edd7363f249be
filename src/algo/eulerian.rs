use super::*;

pub trait EulerianTest: AdjacencyList + Connectivity + Sized {
    /// Returns all vertices with odd degree
    fn odd_degree_vertices(&self) -> impl Iterator<Item = &Self::Vertex> + '_ {
        self.vertices().filter(|u| self.degree_of(u) % 2 == 1)
    }

    /// Returns *true* if the graph is Eulerian, ie. it consists of exactly one connected
    /// component and every vertex has even degree. Such a graph admits a closed walk
    /// that uses every edge exactly once.
    ///
    /// Isolated vertices count as components of their own.
    /// A graph without vertices is treated as a single trivial component and hence Eulerian.
    ///
    /// # Examples
    /// ```
    /// use graphprops::{prelude::*, algo::*};
    ///
    /// assert!(build([Edge(1, 2), Edge(2, 3), Edge(3, 1)]).is_eulerian());
    /// assert!(!build([Edge(1, 2), Edge(2, 3)]).is_eulerian());
    /// ```
    fn is_eulerian(&self) -> bool {
        if self.is_empty() {
            return true;
        }

        self.odd_degree_vertices().next().is_none() && self.is_connected()
    }
}

impl<G: AdjacencyList> EulerianTest for G {}
