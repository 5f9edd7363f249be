/*!
# IO

Utilities for turning the textual edge-list notation into an [`EdgeList`] and back.

## Format

An edge list is written as an array of 2-element arrays of vertex identifiers,
e.g. `[[1, 2], [2, 3], [3, 1]]` or `[["a", "b"]]`.
Whitespace is irrelevant. Every inner array must have exactly two entries;
`[[1, 2], [2, 3, 4]]` is rejected while parsing.

Semantic checks (self-loops, duplicate edges) are **not** performed here,
see [`validation`](crate::validation) for those.

No files are read or written: parsing works on `&str` and writing produces a `String`.
*/

pub mod edge_list;

use thiserror::Error;

use crate::edge::*;

pub use edge_list::*;

/// Errors raised when reading or writing the textual edge-list notation.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// The input is not an array of vertex pairs at all
    #[error("invalid input: {0}")]
    Syntax(#[source] serde_json::Error),
    /// The input is an empty array but the parser was configured to reject those
    #[error("invalid input: edge list is empty")]
    Empty,
    /// The edge list could not be encoded
    #[error("cannot encode edge list: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Shorthand for `Result<T, EdgeListError>`
pub type Result<T> = std::result::Result<T, EdgeListError>;
