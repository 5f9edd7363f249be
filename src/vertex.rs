/*!
# Vertex Representation

Graphs in this crate are keyed by *labels* rather than dense indices: any type that is
`Clone + Ord + Hash + Debug` can be used as a vertex (see [`Vertex`]).
A graph always uses exactly one vertex type, so map lookups and traversal comparisons
never disagree about what a vertex is.

For textual input we provide [`Label`], which accepts both integer and string identifiers.
*/

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Visitor},
};

/// Marker trait for vertex labels.
///
/// Automatically implemented for every `Clone + Ord + Hash + Debug` type.
/// `Ord` fixes the iteration order of vertices, `Hash` is used for visited-sets.
pub trait Vertex: Clone + Ord + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Ord + Hash + Debug {}

/// There can be at most `2^32 - 1` vertices in a graph!
pub type NumVertices = u32;

/// Vertex identifier as found in the textual edge-list notation.
///
/// Integers and strings are accepted: `[[1, 2]]` yields `Label::Number`s and
/// `[["a", "b"]]` yields `Label::Text`s.
/// Every integer in `i64::MIN..=u64::MAX` is a valid number.
/// `Label::Number(1)` and `Label::Text("1")` are *different* vertices.
/// All numbers order before all strings.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum Label {
    Number(i128),
    Text(String),
}

struct LabelVisitor;

impl<'de> Visitor<'de> for LabelVisitor {
    type Value = Label;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("an integer or a string as vertex label")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Label, E> {
        Ok(Label::Number(value.into()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Label, E> {
        Ok(Label::Number(value.into()))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Label, E> {
        Ok(Label::from(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Label, E> {
        Ok(Label::Text(value))
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LabelVisitor)
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Number(x) => write!(f, "{x}"),
            Label::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl Debug for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Label::Number(value.into())
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Text(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Label::Text(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn numbers_before_text() {
        let mut labels = vec![
            Label::from("b"),
            Label::from(10),
            Label::from("a"),
            Label::from(-3),
        ];
        labels.sort();

        assert_eq!(
            labels,
            vec![
                Label::Number(-3),
                Label::Number(10),
                Label::Text("a".into()),
                Label::Text("b".into())
            ]
        );
    }

    #[test]
    fn number_and_text_differ() {
        assert_ne!(Label::from(1), Label::from("1"));
        assert_eq!(format!("{}", Label::from(1)), "1");
        assert_eq!(format!("{}", Label::from("1")), "\"1\"");
    }
}
