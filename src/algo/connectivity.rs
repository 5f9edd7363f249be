use std::iter::FusedIterator;

use itertools::Itertools;

use super::*;

pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns an iterator over the connected components of the graph.
    /// Components are discovered in ascending order of their smallest vertex;
    /// isolated vertices form components of their own.
    fn connected_components(&self) -> ConnectedComponents<'_, Self>;

    /// Returns the number of connected components.
    /// A graph without vertices has no components.
    ///
    /// # Examples
    /// ```
    /// use graphprops::{prelude::*, algo::*};
    ///
    /// let graph = AdjList::from_adjacency([(1, vec![2]), (2, vec![1, 3]), (3, vec![2]), (4, vec![])]);
    /// assert_eq!(graph.count_connected_components(), 2);
    /// ```
    fn count_connected_components(&self) -> NumVertices {
        self.connected_components().count() as NumVertices
    }

    /// Returns *true* if the graph consists of exactly one connected component
    fn is_connected(&self) -> bool {
        self.connected_components().nth(1).is_none() && !self.is_empty()
    }
}

impl<G> Connectivity for G
where
    G: AdjacencyList + Sized,
{
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }
}

/// Iterator over the connected components of a graph, see [`Connectivity::connected_components`]
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    dfs: Dfs<'a, G>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            dfs: TraversalSearch::new_idle(graph),
        }
    }
}

impl<'a, G> Iterator for ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    type Item = Vec<&'a G::Vertex>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cc = self.dfs.by_ref().map(|(_, u)| u).collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !self.dfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

impl<G: AdjacencyList> FusedIterator for ConnectedComponents<'_, G> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn path_with_isolated_vertex() {
        let graph = adj_list! { 1 => [2], 2 => [1, 3], 3 => [2], 4 => [] };

        assert_eq!(graph.count_connected_components(), 2);
        assert!(!graph.is_connected());

        let ccs = graph
            .connected_components()
            .map(|cc| cc.into_iter().copied().sorted().collect_vec())
            .collect_vec();
        assert_eq!(ccs, vec![vec![1, 2, 3], vec![4]]);
    }

    #[test]
    fn connected_graphs() {
        assert_eq!(triangle().count_connected_components(), 1);
        assert_eq!(path3().count_connected_components(), 1);
        assert!(triangle().is_connected());

        for n in 2..20 {
            let graph = build(path_edges(n));
            assert_eq!(graph.count_connected_components(), 1);
        }
    }

    #[test]
    fn empty_graph_has_no_components() {
        let graph = AdjList::<u32>::new();
        assert_eq!(graph.count_connected_components(), 0);
        assert!(!graph.is_connected());
    }

    #[test]
    fn disjoint_paths() {
        for k in 1..6u32 {
            let edges = (0..k)
                .flat_map(|i| {
                    path_edges(4)
                        .into_iter()
                        .map(move |Edge(u, v)| Edge(u + 10 * i, v + 10 * i))
                })
                .collect_vec();
            let graph = build(edges);
            assert_eq!(graph.count_connected_components(), k);
        }
    }

    #[test]
    fn components_partition_vertices() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in [5, 20, 50] {
            let mut graph = build(random_edges(rng, n, n / 2));
            for u in 0..n {
                graph.add_vertex(u);
            }

            let ccs = graph.connected_components().collect_vec();
            assert_eq!(ccs.iter().map(Vec::len).sum::<usize>(), n as usize);
            assert_eq!(ccs.len() as u32, graph.count_connected_components());

            // no edge leaves a component
            for cc in &ccs {
                for u in cc {
                    for v in graph.neighbors_of(u) {
                        assert!(cc.contains(&v));
                    }
                }
            }

            // idempotent
            assert_eq!(
                graph.count_connected_components(),
                graph.count_connected_components()
            );
        }
    }
}
