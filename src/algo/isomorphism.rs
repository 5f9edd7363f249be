/*!
# Isomorphism Tests

Two graphs are isomorphic if there exists a bijection between their vertices that maps
edges onto edges. This module offers two ways of asking that question:

- [`IsomorphismTest::is_likely_isomorphic`] only compares vertex counts and degree sequences.
  It is cheap, but **approximate**: a `false` answer is always correct, a `true` answer is not
  a proof. A 6-cycle and two disjoint triangles, for example, are reported as likely isomorphic.
- [`IsomorphismTest::find_isomorphism`] performs a backtracking correspondence search and
  returns an explicit vertex mapping. It is exact, but exponential in the worst case.

[`IsomorphismCheck`] selects between both via an [`IsomorphismStrategy`].
*/

use itertools::Itertools;

use super::*;

pub trait IsomorphismTest: AdjacencyList {
    /// Returns *true* if both graphs have the same number of vertices and the same degree sequence.
    ///
    /// This is a heuristic: graphs rejected by it are certainly not isomorphic, but graphs
    /// accepted by it may still differ structurally. Two graphs without vertices are isomorphic.
    ///
    /// # Examples
    /// ```
    /// use graphprops::{prelude::*, algo::*};
    ///
    /// let a = build([Edge(1, 2), Edge(2, 3)]);
    /// let b = build([Edge(5, 4), Edge(6, 5)]);
    /// assert!(a.is_likely_isomorphic(&b));
    ///
    /// let c = build([Edge(4, 5), Edge(5, 6), Edge(5, 7)]);
    /// assert!(!a.is_likely_isomorphic(&c));
    /// ```
    fn is_likely_isomorphic<H: AdjacencyList>(&self, other: &H) -> bool;

    /// Searches for an isomorphism between `self` and `other` and returns it as a list of
    /// `(vertex of self, vertex of other)` pairs. The search starts at a vertex of maximum degree
    /// in `self`, which is therefore the first entry.
    /// Returns `None` if the graphs are not isomorphic.
    ///
    /// # Examples
    /// ```
    /// use graphprops::{prelude::*, algo::*};
    ///
    /// let hexagon = build([Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 4), Edge(4, 5), Edge(5, 0)]);
    /// let triangles = build([Edge(0, 1), Edge(1, 2), Edge(2, 0), Edge(3, 4), Edge(4, 5), Edge(5, 3)]);
    ///
    /// assert!(hexagon.is_likely_isomorphic(&triangles));
    /// assert_eq!(hexagon.find_isomorphism(&triangles), None);
    /// ```
    fn find_isomorphism<H: AdjacencyList>(
        &self,
        other: &H,
    ) -> Option<Vec<(Self::Vertex, H::Vertex)>>;

    /// Returns *true* if the graphs are isomorphic, see [`IsomorphismTest::find_isomorphism`]
    fn is_isomorphic<H: AdjacencyList>(&self, other: &H) -> bool {
        self.find_isomorphism(other).is_some()
    }
}

impl<G> IsomorphismTest for G
where
    G: AdjacencyList,
{
    fn is_likely_isomorphic<H: AdjacencyList>(&self, other: &H) -> bool {
        if self.number_of_vertices() != other.number_of_vertices() {
            return false;
        }

        if self.degree_sequence() != other.degree_sequence() {
            return false;
        }

        if self.is_empty() {
            return true;
        }

        let degrees: FxHashSet<NumVertices> = other.degrees().collect();
        self.degrees().any(|d| degrees.contains(&d))
    }

    fn find_isomorphism<H: AdjacencyList>(
        &self,
        other: &H,
    ) -> Option<Vec<(G::Vertex, H::Vertex)>> {
        if !self.is_likely_isomorphic(other) {
            return None;
        }

        IsomorphismSearch::new(self, other).compute()
    }
}

/// Which test an [`IsomorphismCheck`] runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IsomorphismStrategy {
    /// Compare vertex counts and degree sequences only (approximate)
    #[default]
    DegreeSequence,
    /// Search for an explicit vertex mapping (exact, exponential worst case)
    Exhaustive,
}

/// Configurable isomorphism test between two graphs.
///
/// # Examples
/// ```
/// use graphprops::{prelude::*, algo::*};
///
/// let hexagon = build([Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 4), Edge(4, 5), Edge(5, 0)]);
/// let triangles = build([Edge(0, 1), Edge(1, 2), Edge(2, 0), Edge(3, 4), Edge(4, 5), Edge(5, 3)]);
///
/// assert!(IsomorphismCheck::new().is_isomorphic(&hexagon, &triangles));
/// assert!(!IsomorphismCheck::new()
///     .strategy(IsomorphismStrategy::Exhaustive)
///     .is_isomorphic(&hexagon, &triangles));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsomorphismCheck {
    strategy: IsomorphismStrategy,
}

impl IsomorphismCheck {
    /// Creates a check using [`IsomorphismStrategy::DegreeSequence`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the strategy used by [`IsomorphismCheck::is_isomorphic`]
    pub fn strategy(mut self, strategy: IsomorphismStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Runs the configured test on both graphs
    pub fn is_isomorphic<G, H>(&self, graph: &G, other: &H) -> bool
    where
        G: AdjacencyList,
        H: AdjacencyList,
    {
        match self.strategy {
            IsomorphismStrategy::DegreeSequence => graph.is_likely_isomorphic(other),
            IsomorphismStrategy::Exhaustive => graph.is_isomorphic(other),
        }
    }
}

/// Number of times `v` occurs in the neighborhood of `u`
fn multiplicity<G: AdjacencyList>(graph: &G, u: &G::Vertex, v: &G::Vertex) -> usize {
    graph.neighbors_of(u).iter().filter(|w| *w == v).count()
}

struct IsomorphismSearch<'a, G, H>
where
    G: AdjacencyList,
    H: AdjacencyList,
{
    graph: &'a G,
    other: &'a H,
    /// Vertices of `graph` in the order they get assigned
    order: Vec<&'a G::Vertex>,
    candidates: Vec<&'a H::Vertex>,
}

impl<'a, G, H> IsomorphismSearch<'a, G, H>
where
    G: AdjacencyList,
    H: AdjacencyList,
{
    fn new(graph: &'a G, other: &'a H) -> Self {
        // next vertex is the one with most already placed neighbors (ties: highest degree),
        // so that inconsistent assignments are detected as early as possible
        let mut remaining = graph.vertices().collect_vec();
        let mut placed: FxHashSet<&G::Vertex> = FxHashSet::default();
        let mut order = Vec::with_capacity(remaining.len());

        loop {
            let Some(i) = remaining.iter().position_max_by_key(|u| {
                let placed_nbs = graph
                    .neighbors_of(u)
                    .iter()
                    .filter(|v| placed.contains(v))
                    .count();
                (placed_nbs, graph.degree_of(u))
            }) else {
                break;
            };

            let u = remaining.swap_remove(i);
            placed.insert(u);
            order.push(u);
        }

        Self {
            graph,
            other,
            order,
            candidates: other.vertices().collect_vec(),
        }
    }

    /// Returns *true* if `order[mapped.len()] -> candidates[c]` agrees with all previous assignments
    fn is_consistent(&self, mapped: &[usize], c: usize) -> bool {
        let u = self.order[mapped.len()];
        let x = self.candidates[c];

        self.graph.degree_of(u) == self.other.degree_of(x)
            && multiplicity(self.graph, u, u) == multiplicity(self.other, x, x)
            && mapped.iter().enumerate().all(|(i, &d)| {
                multiplicity(self.graph, u, self.order[i])
                    == multiplicity(self.other, x, self.candidates[d])
            })
    }

    fn compute(self) -> Option<Vec<(G::Vertex, H::Vertex)>> {
        let n = self.order.len();
        if n != self.candidates.len() {
            return None;
        }

        let mut used = vec![false; n];
        // `mapped[i]` is the candidate index assigned to `order[i]`
        let mut mapped: Vec<usize> = Vec::with_capacity(n);
        let mut cursor = 0;

        while mapped.len() < n {
            let next = (cursor..n).find(|&c| !used[c] && self.is_consistent(&mapped, c));

            match next {
                Some(c) => {
                    used[c] = true;
                    mapped.push(c);
                    cursor = 0;
                }
                None => {
                    let c = mapped.pop()?;
                    used[c] = false;
                    cursor = c + 1;
                }
            }
        }

        Some(
            self.order
                .iter()
                .zip(mapped)
                .map(|(&u, c)| (u.clone(), self.candidates[c].clone()))
                .collect(),
        )
    }
}
