//! Knoten des Übersetzungsbaums.

use crate::error::LoadError;
use crate::path::KeyPath;
use indexmap::IndexMap;
use std::fmt;

/// Ein Knoten im Übersetzungsbaum: Text, geordnete Sequenz oder Unterbaum.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentNode {
    Text(String),
    Sequence(Vec<ContentNode>),
    Map(IndexMap<String, ContentNode>),
}

/// Strukturelle Form eines Knotens (ohne Inhalt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeShape {
    Text,
    Sequence,
    Map,
}

impl fmt::Display for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeShape::Text => "Text",
            NodeShape::Sequence => "Sequenz",
            NodeShape::Map => "Objekt",
        };
        f.write_str(name)
    }
}

impl ContentNode {
    /// Form des Knotens.
    pub fn shape(&self) -> NodeShape {
        match self {
            ContentNode::Text(_) => NodeShape::Text,
            ContentNode::Sequence(_) => NodeShape::Sequence,
            ContentNode::Map(_) => NodeShape::Map,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentNode::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[ContentNode]> {
        match self {
            ContentNode::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, ContentNode>> {
        match self {
            ContentNode::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Ein Pfadsegment auflösen: Objekt-Schlüssel oder Sequenz-Index.
    pub fn child(&self, segment: &str) -> Option<&ContentNode> {
        match self {
            ContentNode::Map(map) => map.get(segment),
            ContentNode::Sequence(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index)),
            ContentNode::Text(_) => None,
        }
    }

    /// Folgt allen Segmenten eines Pfads ab diesem Knoten.
    pub fn lookup(&self, path: &KeyPath) -> Option<&ContentNode> {
        path.segments()
            .iter()
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// Konvertiert einen JSON-Wert in einen Knoten.
    ///
    /// Zahlen und Booleans werden zu Text, `null` wird abgelehnt.
    pub fn from_json(value: serde_json::Value) -> Result<Self, LoadError> {
        Self::from_json_at(value, "")
    }

    fn from_json_at(value: serde_json::Value, at: &str) -> Result<Self, LoadError> {
        use serde_json::Value;

        match value {
            Value::String(text) => Ok(ContentNode::Text(text)),
            Value::Number(number) => Ok(ContentNode::Text(number.to_string())),
            Value::Bool(flag) => Ok(ContentNode::Text(flag.to_string())),
            Value::Null => Err(LoadError::UnsupportedValue {
                path: at.to_string(),
                found: "null",
            }),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| Self::from_json_at(item, &join(at, &index.to_string())))
                .collect::<Result<Vec<_>, _>>()
                .map(ContentNode::Sequence),
            Value::Object(entries) => entries
                .into_iter()
                .map(|(key, item)| {
                    let child = Self::from_json_at(item, &join(at, &key))?;
                    Ok((key, child))
                })
                .collect::<Result<IndexMap<_, _>, LoadError>>()
                .map(ContentNode::Map),
        }
    }
}

/// Verbindet Präfix und Segment zu einem Punktpfad.
pub(crate) fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_preserves_object_order() {
        let node = ContentNode::from_json(json!({
            "zeta": "z",
            "alpha": "a",
            "mid": "m"
        }))
        .unwrap();

        let keys: Vec<&str> = node.as_map().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn from_json_rejects_null_with_path() {
        let err = ContentNode::from_json(json!({"about": {"works": [{"title": null}]}}))
            .unwrap_err();

        match err {
            LoadError::UnsupportedValue { path, found } => {
                assert_eq!(path, "about.works.0.title");
                assert_eq!(found, "null");
            }
            other => panic!("Unerwarteter Fehler: {other:?}"),
        }
    }

    #[test]
    fn lookup_indexes_into_sequences() {
        let node = ContentNode::from_json(json!({
            "works": [{"title": "Thesis"}, {"title": "Paper"}]
        }))
        .unwrap();

        let path = KeyPath::parse("works.1.title").unwrap();
        assert_eq!(node.lookup(&path).and_then(ContentNode::as_text), Some("Paper"));

        let out_of_range = KeyPath::parse("works.5.title").unwrap();
        assert!(node.lookup(&out_of_range).is_none());
    }

    #[test]
    fn lookup_through_text_is_none() {
        let node = ContentNode::from_json(json!({"general": {"name": "Stephen"}})).unwrap();
        let path = KeyPath::parse("general.name.first").unwrap();
        assert!(node.lookup(&path).is_none());
    }
}
