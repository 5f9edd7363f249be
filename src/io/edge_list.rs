//! # EdgeList
//!
//! Reading and writing of the array-of-pairs notation `[[u, v], ...]`.
//! Edges keep the order in which they appear in the input.

use log::{debug, trace};
use serde::{Serialize, de::DeserializeOwned};

use super::*;

/// A configurable parser for the array-of-pairs notation.
///
/// # Examples
/// ```
/// use graphprops::{prelude::*, io::*};
///
/// let edges: EdgeList<u32> = EdgeListParser::new().parse("[[1, 2], [2, 3]]").unwrap();
/// assert_eq!(edges, vec![Edge(1, 2), Edge(2, 3)]);
///
/// assert!(EdgeListParser::new().allow_empty(false).parse::<u32>("[]").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EdgeListParser {
    /// If *false*, `[]` is rejected with [`EdgeListError::Empty`]
    allow_empty: bool,
}

impl Default for EdgeListParser {
    fn default() -> Self {
        Self { allow_empty: true }
    }
}

impl EdgeListParser {
    /// Creates a new (default) parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates whether an empty edge list is accepted
    pub fn allow_empty(mut self, allow: bool) -> EdgeListParser {
        self.allow_empty = allow;
        self
    }

    /// Tries to parse an edge list from `text`.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Syntax`] if `text` is not an array of vertex pairs whose entries
    /// decode as `V`, and [`EdgeListError::Empty`] for `[]` if empty lists are disallowed.
    pub fn parse<V>(&self, text: &str) -> Result<EdgeList<V>>
    where
        V: DeserializeOwned,
    {
        let edges: EdgeList<V> = serde_json::from_str(text).map_err(|err| {
            debug!("Rejecting edge list: {err}");
            EdgeListError::Syntax(err)
        })?;

        if edges.is_empty() && !self.allow_empty {
            debug!("Rejecting empty edge list");
            return Err(EdgeListError::Empty);
        }

        trace!("Parsed {} edges", edges.len());
        Ok(edges)
    }
}

/// Parses an edge list with the default [`EdgeListParser`].
///
/// # Examples
/// ```
/// use graphprops::{prelude::*, io::*};
///
/// let edges: EdgeList<Label> = parse_edge_list(r#"[[1, "x"]]"#).unwrap();
/// assert_eq!(edges, vec![Edge(Label::Number(1), Label::Text("x".into()))]);
///
/// assert!(parse_edge_list::<Label>("[[1, 2], [2, 3, 4]]").is_err());
/// ```
pub fn parse_edge_list<V>(text: &str) -> Result<EdgeList<V>>
where
    V: DeserializeOwned,
{
    EdgeListParser::default().parse(text)
}

/// Writes edges in the array-of-pairs notation, eg. `[[1,2],[2,3]]`.
/// The output can be read back with [`parse_edge_list`].
///
/// # Errors
/// Only fails if a vertex cannot be serialized.
pub fn write_edge_list<V>(edges: &[Edge<V>]) -> Result<String>
where
    V: Serialize,
{
    serde_json::to_string(edges).map_err(EdgeListError::Encode)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{testing::*, vertex::Label};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn parse_triangle() {
        let edges: EdgeList<u32> = parse_edge_list("[[1, 2], [2, 3], [3, 1]]").unwrap();
        assert_eq!(edges, vec![Edge(1, 2), Edge(2, 3), Edge(3, 1)]);
    }

    #[test]
    fn parse_keeps_loops_and_duplicates() {
        let edges: EdgeList<u32> = parse_edge_list("[[1,1],[1,2],[2,1]]").unwrap();
        assert_eq!(edges, vec![Edge(1, 1), Edge(1, 2), Edge(2, 1)]);
    }

    #[test]
    fn reject_malformed() {
        for text in [
            "[[1, 2], [2, 3, 4]]",
            "[[1]]",
            "[1, 2]",
            "[[1, 2]",
            "{\"a\": 1}",
            "",
            "edges",
            "[[1.5, 2]]",
            "[[null, 2]]",
            "[[[1], 2]]",
        ] {
            assert!(
                matches!(
                    parse_edge_list::<Label>(text),
                    Err(EdgeListError::Syntax(_))
                ),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn labels() {
        let edges: EdgeList<Label> = parse_edge_list(r#"[["a", "b"], [1, "b"]]"#).unwrap();
        assert_eq!(
            edges,
            vec![
                Edge(Label::from("a"), Label::from("b")),
                Edge(Label::from(1), Label::from("b"))
            ]
        );

        // numeric vertices may not be negative for unsigned labels
        assert!(parse_edge_list::<u32>("[[-1, 2]]").is_err());
        assert!(parse_edge_list::<Label>("[[-1, 2]]").is_ok());
    }

    #[test]
    fn large_numeric_labels() {
        let text = "[[9223372036854775808, 1], [18446744073709551615, -9223372036854775808]]";
        let edges: EdgeList<Label> = parse_edge_list(text).unwrap();
        assert_eq!(
            edges,
            vec![
                Edge(Label::Number(1 << 63), Label::from(1)),
                Edge(Label::Number(u64::MAX.into()), Label::from(i64::MIN))
            ]
        );
        assert_ne!(edges[0].0, Label::from(i64::MAX));

        let err = parse_edge_list::<Label>("[[true, 1]]").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("an integer or a string as vertex label"));
    }

    #[test]
    fn empty() {
        assert!(parse_edge_list::<u32>("[]").unwrap().is_empty());
        assert!(matches!(
            EdgeListParser::new().allow_empty(false).parse::<u32>(" [ ] "),
            Err(EdgeListError::Empty)
        ));
    }

    #[test]
    fn error_message() {
        let err = parse_edge_list::<u32>("[[1, 2], [2, 3, 4]]").unwrap_err();
        assert!(err.to_string().starts_with("invalid input"));
    }

    #[test]
    fn write_then_parse() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [2, 10, 40] {
            let edges = random_edges(rng, n, 3 * n);
            let text = write_edge_list(&edges).unwrap();
            assert_eq!(parse_edge_list::<u32>(&text).unwrap(), edges);
        }

        let labels = vec![
            Edge(Label::from(1), Label::from("a")),
            Edge(Label::from("b"), Label::from(-7)),
            Edge(Label::Number(u64::MAX.into()), Label::from("1")),
        ];
        let text = write_edge_list(&labels).unwrap();
        assert_eq!(text, r#"[[1,"a"],["b",-7],[18446744073709551615,"1"]]"#);
        assert_eq!(parse_edge_list::<Label>(&text).unwrap(), labels);

        assert_eq!(
            write_edge_list(&[Edge(1, 2), Edge(2, 3)]).unwrap(),
            "[[1,2],[2,3]]"
        );
        assert_eq!(write_edge_list::<u32>(&[]).unwrap(), "[]");
    }
}
