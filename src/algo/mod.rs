/*!
# Graph Algorithms

This module provides the structural queries on top of [`AdjacencyList`] graphs.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use graphprops::algo::*;
```
and gain access to traversal, connectivity, cycle detection, completeness, bipartiteness,
the Eulerian check and isomorphism tests.

Every query is read-only: it allocates its own bookkeeping (visited sets, colorings, ...),
never mutates the graph and returns the same answer when called repeatedly.
Traversals use explicit stacks, so deep graphs cannot overflow the call stack.
*/

mod bipartite;
mod complete;
mod connectivity;
mod cycle;
mod eulerian;
mod isomorphism;
mod traversal;

use fxhash::{FxHashMap, FxHashSet};

use crate::prelude::*;

pub use bipartite::*;
pub use complete::*;
pub use connectivity::*;
pub use cycle::*;
pub use eulerian::*;
pub use isomorphism::*;
pub use traversal::*;
