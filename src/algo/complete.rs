use super::*;

pub trait Completeness: AdjacencyList {
    /// Returns *true* if every vertex is adjacent to all other vertices,
    /// ie. every vertex has degree `n - 1`.
    ///
    /// Only meaningful for simple graphs: duplicate neighbors are counted as given.
    /// A graph without vertices is complete.
    ///
    /// # Examples
    /// ```
    /// use graphprops::{prelude::*, algo::*};
    ///
    /// assert!(build([Edge(1, 2), Edge(2, 3), Edge(3, 1)]).is_complete());
    /// assert!(!build([Edge(1, 2), Edge(2, 3)]).is_complete());
    /// ```
    fn is_complete(&self) -> bool {
        let n = self.number_of_vertices();
        self.degrees().all(|d| d + 1 == n)
    }

    /// Returns the number of edges missing to make the graph complete
    fn number_of_missing_edges(&self) -> u64 {
        let n = self.number_of_vertices() as u64;
        let degree_sum: u64 = self.degrees().map(u64::from).sum();
        (n * n.saturating_sub(1)).saturating_sub(degree_sum) / 2
    }
}

impl<G: AdjacencyList> Completeness for G {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;

    #[test]
    fn triangle_and_path() {
        assert!(triangle().is_complete());
        assert!(!path3().is_complete());
        assert_eq!(path3().number_of_missing_edges(), 1);
    }

    #[test]
    fn cliques() {
        for n in 2..15 {
            let graph = build(clique_edges(n));
            assert!(graph.is_complete());
            assert_eq!(graph.number_of_missing_edges(), 0);

            if n > 2 {
                assert!(!build(cycle_edges(n + 1)).is_complete());

                let mut edges = clique_edges(n);
                edges.pop();
                let graph = build(edges);
                assert!(!graph.is_complete());
                assert_eq!(graph.number_of_missing_edges(), 1);
            }
        }
    }

    #[test]
    fn trivial_graphs() {
        assert!(AdjList::<u32>::new().is_complete());
        assert!(adj_list! { 1 => [] }.is_complete());
        assert!(!adj_list! { 1 => [], 2 => [] }.is_complete());
        assert!(build([Edge(1, 2)]).is_complete());
    }

    #[test]
    fn idempotent() {
        for graph in [triangle(), path3(), build(clique_edges(6))] {
            assert_eq!(graph.is_complete(), graph.is_complete());
            assert_eq!(
                graph.number_of_missing_edges(),
                graph.number_of_missing_edges()
            );
        }
    }
}
