/*!
# Graph Representation

Currently a single representation is provided: [`AdjList`], an adjacency list keyed by vertex label.
It is built once from an edge list and immutable afterwards; all algorithms in [`crate::algo`]
only need the read-only traits of [`crate::ops`].
*/

use crate::{edge::*, ops::*, vertex::*};

mod adj_list;

pub use adj_list::*;

/// Builds an [`AdjList`] from an edge list.
///
/// Shorthand for [`GraphFromEdges::from_edges`]; see there for details.
///
/// # Examples
/// ```
/// use graphprops::prelude::*;
///
/// let graph = build([Edge(1, 2), Edge(2, 3), Edge(3, 1)]);
/// assert_eq!(graph.neighbors_of(&3), &[2, 1]);
/// ```
pub fn build<V, I>(edges: I) -> AdjList<V>
where
    V: Vertex,
    I: IntoIterator<Item = Edge<V>>,
{
    AdjList::from_edges(edges)
}
