/*!
`graphprops` is a small library of structural checks for graphs that are
- **simple** : no self-loops and no parallel edges (checked by [`validation`], not assumed)
- **finite** and **unweighted**
- **undirected** : `Edge(u, v)` and `Edge(v, u)` describe the same edge

Graphs are supplied as an *edge list*, most often in the textual array-of-pairs
notation `[[1, 2], [2, 3], [3, 1]]`.

# Pipeline

```text
text --parse--> EdgeList --validate--> ValidationResult
                   |
                   +--build--> AdjList --algo--> bool / counts
```

- [`io`] parses (and writes) the textual notation,
- [`validation`] checks arity, self-loops and duplicate edges,
- [`repr`] builds the adjacency-list representation [`AdjList`](crate::repr::AdjList),
- [`algo`] answers questions about it: connected components, cycles, completeness,
  bipartiteness, the Eulerian property and (approximate) isomorphism,
- [`report`] runs the whole pipeline at once and collects a serializable summary.

# Vertices

Every graph is generic over a single vertex type `V` (see [`Vertex`](crate::vertex::Vertex)).
The text pipeline uses [`Label`](crate::vertex::Label), which accepts integers and strings
and never mixes the two representations within a map key and a traversal comparison.

# Usage

```rust
use graphprops::{prelude::*, algo::*, io::*};

let edges: EdgeList<Label> = parse_edge_list("[[1, 2], [2, 3], [3, 1]]").unwrap();
assert!(validate(&edges).valid);

let graph = AdjList::from_edges(edges);
assert_eq!(graph.count_connected_components(), 1);
assert!(graph.has_cycle());
assert!(graph.is_complete());
assert!(graph.is_eulerian());
assert!(!graph.is_bipartite());
```

In most use-cases, `use graphprops::{prelude::*, algo::*};` suffices.

# Isomorphism

[`IsomorphismTest::is_likely_isomorphic`](crate::algo::IsomorphismTest::is_likely_isomorphic)
only compares vertex counts and degree sequences. A `true` result is **not** a proof;
use [`IsomorphismCheck`](crate::algo::IsomorphismCheck) with
[`IsomorphismStrategy::Exhaustive`](crate::algo::IsomorphismStrategy::Exhaustive) for an exact answer.
*/

pub mod algo;
pub mod edge;
pub mod io;
pub mod ops;
pub mod report;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod validation;
pub mod vertex;

/// `graphprops::prelude` includes definitions for vertices and edges, all basic graph operation traits,
/// the adjacency-list representation and edge-list validation.
pub mod prelude {
    pub use super::{edge::*, ops::*, repr::*, validation::*, vertex::*};
}
