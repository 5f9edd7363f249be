/*!
# Graph Reports

A [`GraphReport`] runs the full pipeline (parse, validate, build, analyze) on a single edge list
and collects every answer in one serializable value, ready to be rendered by a presentation layer.

Invalid edge lists are analyzed anyway: the builder keeps loops and duplicates as given and the
report carries the [`ValidationResult`] next to the structural answers.
*/

use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::debug;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    algo::*,
    io::{self, EdgeListError, EdgeListParser},
    prelude::*,
};

/// Summary of all structural properties of a graph given as an edge list.
///
/// # Examples
/// ```
/// use graphprops::{prelude::*, report::GraphReport};
///
/// let report = GraphReport::<Label>::from_text("[[1, 2], [2, 3], [3, 1]]").unwrap();
/// assert!(report.validation.valid);
/// assert_eq!(report.connected_components, 1);
/// assert!(report.has_cycle && report.is_complete && report.is_eulerian);
/// assert!(!report.is_bipartite);
///
/// assert!(GraphReport::<Label>::from_text("[[1, 2], [2, 3, 4]]").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphReport<V> {
    /// The edges in input order
    pub edges: EdgeList<V>,
    pub validation: ValidationResult,
    pub number_of_vertices: NumVertices,
    pub number_of_edges: NumEdges,
    pub connected_components: NumVertices,
    pub has_cycle: bool,
    /// The vertices of some cycle, if any
    pub cycle: Option<Vec<V>>,
    pub is_complete: bool,
    pub is_bipartite: bool,
    pub is_eulerian: bool,
}

impl<V: Vertex> GraphReport<V> {
    /// Validates `edges`, builds the graph and runs all queries on it
    pub fn from_edges(edges: EdgeList<V>) -> Self {
        let validation = validate(&edges);
        let graph = AdjList::from_edges(edges.iter().cloned());
        let cycle = graph.find_cycle();

        let report = Self {
            validation,
            number_of_vertices: graph.number_of_vertices(),
            number_of_edges: graph.number_of_edges(),
            connected_components: graph.count_connected_components(),
            has_cycle: cycle.is_some(),
            cycle,
            is_complete: graph.is_complete(),
            is_bipartite: graph.is_bipartite(),
            is_eulerian: graph.is_eulerian(),
            edges,
        };

        debug!(
            "Analyzed graph with n={} m={} (valid: {})",
            report.number_of_vertices, report.number_of_edges, report.validation.valid
        );
        report
    }

    /// Parses `text` with the default [`EdgeListParser`] and reports on the result.
    ///
    /// # Errors
    /// Fails only if `text` is not an edge list at all; invalid graphs still yield a report.
    pub fn from_text(text: &str) -> io::Result<Self>
    where
        V: DeserializeOwned,
    {
        Self::from_text_with(&EdgeListParser::new(), text)
    }

    /// Like [`GraphReport::from_text`], using a custom parser
    pub fn from_text_with(parser: &EdgeListParser, text: &str) -> io::Result<Self>
    where
        V: DeserializeOwned,
    {
        Ok(Self::from_edges(parser.parse(text)?))
    }

    /// Serializes the report as JSON
    pub fn to_json(&self) -> io::Result<String>
    where
        V: Serialize,
    {
        serde_json::to_string(self).map_err(EdgeListError::Encode)
    }
}

impl<V: Display> Display for GraphReport<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "edges: [{}]", self.edges.iter().join(", "))?;
        writeln!(
            f,
            "vertices: {}, edges: {}",
            self.number_of_vertices, self.number_of_edges
        )?;
        writeln!(f, "connected components: {}", self.connected_components)?;

        match &self.cycle {
            Some(cycle) => writeln!(f, "contains a cycle: {}", cycle.iter().join(" - "))?,
            None => writeln!(f, "contains no cycle")?,
        }

        writeln!(f, "complete: {}", self.is_complete)?;
        writeln!(f, "bipartite: {}", self.is_bipartite)?;
        writeln!(f, "eulerian: {}", self.is_eulerian)?;

        if self.validation.valid {
            write!(f, "the graph is valid")
        } else {
            write!(f, "the graph is not valid: {}", self.validation.reason)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn triangle() {
        let report = GraphReport::<Label>::from_text("[[1, 2], [2, 3], [3, 1]]").unwrap();

        assert_eq!(report.edges.len(), 3);
        assert_eq!(report.validation, ValidationResult::valid());
        assert_eq!(report.number_of_vertices, 3);
        assert_eq!(report.number_of_edges, 3);
        assert_eq!(report.connected_components, 1);
        assert!(report.has_cycle);
        assert_eq!(
            report.cycle,
            Some(vec![Label::Number(1), Label::Number(2), Label::Number(3)])
        );
        assert!(report.is_complete);
        assert!(!report.is_bipartite);
        assert!(report.is_eulerian);
    }

    #[test]
    fn invalid_graphs_are_analyzed() {
        let report = GraphReport::from_edges(vec![Edge(1, 2), Edge(2, 3), Edge(1, 2)]);

        assert!(!report.validation.valid);
        assert_eq!(
            report.validation.reason,
            "graph may not contain duplicate edges"
        );
        assert_eq!(report.number_of_vertices, 3);
        assert_eq!(report.number_of_edges, 3);
        assert_eq!(report.connected_components, 1);

        let report = GraphReport::from_edges(vec![Edge(1, 1), Edge(2, 3)]);
        assert_eq!(report.validation.reason, "graph may not contain self-loops");
        assert_eq!(report.connected_components, 2);
        assert!(!report.is_bipartite);
    }

    #[test]
    fn empty_graph() {
        let report = GraphReport::<Label>::from_text("[]").unwrap();

        assert!(report.validation.valid);
        assert_eq!(report.number_of_vertices, 0);
        assert_eq!(report.connected_components, 0);
        assert!(!report.has_cycle);
        assert!(report.is_complete);
        assert!(report.is_bipartite);
        assert!(report.is_eulerian);

        let strict = EdgeListParser::new().allow_empty(false);
        assert!(matches!(
            GraphReport::<Label>::from_text_with(&strict, "[]"),
            Err(EdgeListError::Empty)
        ));
    }

    #[test]
    fn malformed_input() {
        for text in ["", "[[1, 2]", "[[1, 2], [2, 3, 4]]", "{\"a\": 1}", "[[1.5, 2]]"] {
            assert!(GraphReport::<Label>::from_text(text).is_err(), "{text}");
        }
    }

    #[test]
    fn display() {
        let report = GraphReport::<Label>::from_text(r#"[[1, 2], [2, "x"], [4, 5]]"#).unwrap();
        let text = report.to_string();

        assert!(text.starts_with("edges: [(1,2), (2,\"x\"), (4,5)]\n"));
        assert!(text.contains("connected components: 2\n"));
        assert!(text.contains("contains no cycle\n"));
        assert!(text.ends_with("the graph is valid"));

        let report = GraphReport::from_edges(vec![Edge(1, 1)]);
        let text = report.to_string();
        assert!(
            text.ends_with("the graph is not valid: graph may not contain self-loops")
        );
    }

    #[test]
    fn json() {
        let report = GraphReport::from_edges(vec![Edge(1, 2), Edge(2, 3)]);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["edges"], serde_json::json!([[1, 2], [2, 3]]));
        assert_eq!(json["validation"]["valid"], true);
        assert_eq!(json["validation"]["reason"], "");
        assert_eq!(json["connected_components"], 1);
        assert_eq!(json["cycle"], serde_json::Value::Null);
        assert_eq!(json["is_bipartite"], true);
        assert_eq!(json["is_eulerian"], false);
    }
}
