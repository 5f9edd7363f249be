use itertools::Itertools;
use rand::Rng;

use crate::prelude::*;

/// Builds an [`AdjList`] from literal neighborhoods, eg. `adj_list! { 1 => [2], 2 => [1] }`
macro_rules! adj_list {
    ($($u:expr => [$($v:expr),*]),* $(,)?) => {
        $crate::repr::AdjList::from_adjacency([$(($u, vec![$($v),*])),*])
    };
}

pub(crate) use adj_list;

/// `{1: [2, 3], 2: [1, 3], 3: [2, 1]}`
pub(crate) fn triangle() -> AdjList<u32> {
    adj_list! { 1 => [2, 3], 2 => [1, 3], 3 => [2, 1] }
}

/// `{1: [2], 2: [1, 3], 3: [2]}`
pub(crate) fn path3() -> AdjList<u32> {
    adj_list! { 1 => [2], 2 => [1, 3], 3 => [2] }
}

/// Edges of a path `0 - 1 - ... - (n-1)`
pub(crate) fn path_edges(n: u32) -> Vec<Edge<u32>> {
    (0..n).tuple_windows().map(|(u, v)| Edge(u, v)).collect_vec()
}

/// Edges of a cycle `0 - 1 - ... - (n-1) - 0`
pub(crate) fn cycle_edges(n: u32) -> Vec<Edge<u32>> {
    let mut edges = path_edges(n);
    if n > 2 {
        edges.push(Edge(n - 1, 0));
    }
    edges
}

/// Edges of a clique on `0..n`
pub(crate) fn clique_edges(n: u32) -> Vec<Edge<u32>> {
    (0..n).tuple_combinations().map(|(u, v)| Edge(u, v)).collect_vec()
}

/// Creates a list of at most `m_ub` random edges for vertices `0..n`
/// without loops or duplicates (in either orientation).
pub(crate) fn random_edges<R: Rng>(rng: &mut R, n: u32, m_ub: u32) -> Vec<Edge<u32>> {
    (0..m_ub)
        .map(|_| {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            Edge(u, v)
        })
        .filter(|e| !e.is_loop())
        .unique_by(Edge::normalized)
        .collect_vec()
}
