/*!
# Edge-List Validation

Checks whether an edge list describes a *simple* undirected graph:
1. every edge consists of exactly two vertices,
2. no edge connects a vertex to itself,
3. no two edges connect the same pair of vertices, regardless of orientation.

Conditions 1 and 2 are checked for all edges first, then condition 3.
The first violation found is reported.
*/

use fxhash::FxHashSet;
use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::{edge::*, vertex::*};

/// Reason why an edge list does not describe a simple graph.
/// Each variant carries the index of the first offending edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("edges must be vertex pairs")]
    NotAPair(usize),
    #[error("graph may not contain self-loops")]
    SelfLoop(usize),
    #[error("graph may not contain duplicate edges")]
    DuplicateEdge(usize),
}

impl ValidationFailure {
    /// Index of the offending edge in the validated edge list
    pub fn edge_index(&self) -> usize {
        match *self {
            ValidationFailure::NotAPair(i)
            | ValidationFailure::SelfLoop(i)
            | ValidationFailure::DuplicateEdge(i) => i,
        }
    }
}

/// Outcome of [`validate`]: `reason` is empty iff `valid` is *true*.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub reason: String,
}

impl ValidationResult {
    /// The result for a simple graph
    pub fn valid() -> Self {
        Self {
            valid: true,
            reason: String::new(),
        }
    }
}

impl From<Result<(), ValidationFailure>> for ValidationResult {
    fn from(value: Result<(), ValidationFailure>) -> Self {
        match value {
            Ok(()) => Self::valid(),
            Err(failure) => Self {
                valid: false,
                reason: failure.to_string(),
            },
        }
    }
}

/// Checks that `edges` describe a simple graph and returns the first violation otherwise.
///
/// Duplicates are detected on normalized edges, so `[1, 2]` and `[2, 1]` are the same edge.
///
/// # Examples
/// ```
/// use graphprops::prelude::*;
///
/// assert_eq!(try_validate(&[Edge(1, 2), Edge(2, 1)]), Err(ValidationFailure::DuplicateEdge(1)));
/// assert_eq!(try_validate(&[vec![1, 2], vec![2, 3, 4]]), Err(ValidationFailure::NotAPair(1)));
/// ```
pub fn try_validate<E>(edges: &[E]) -> Result<(), ValidationFailure>
where
    E: VertexPair,
    E::Vertex: Vertex,
{
    for (i, edge) in edges.iter().enumerate() {
        let Some((u, v)) = edge.endpoints() else {
            return Err(ValidationFailure::NotAPair(i));
        };
        if u == v {
            return Err(ValidationFailure::SelfLoop(i));
        }
    }

    let mut seen = FxHashSet::default();
    for (i, (u, v)) in edges.iter().filter_map(VertexPair::endpoints).enumerate() {
        if !seen.insert(if u <= v { (u, v) } else { (v, u) }) {
            return Err(ValidationFailure::DuplicateEdge(i));
        }
    }

    Ok(())
}

/// Checks that `edges` describe a simple graph, see [`try_validate`].
///
/// # Examples
/// ```
/// use graphprops::prelude::*;
///
/// let result = validate(&[Edge(1, 1), Edge(2, 3)]);
/// assert!(!result.valid);
/// assert_eq!(result.reason, "graph may not contain self-loops");
///
/// assert_eq!(validate(&[Edge(1, 2), Edge(2, 3)]), ValidationResult::valid());
/// ```
pub fn validate<E>(edges: &[E]) -> ValidationResult
where
    E: VertexPair,
    E::Vertex: Vertex,
{
    let result = try_validate(edges);
    if let Err(failure) = &result {
        debug!(
            "Edge list invalid at edge {}: {failure}",
            failure.edge_index()
        );
    }
    result.into()
}
