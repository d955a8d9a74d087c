//! Conversion of decoded YAML trees into JSON values.

use crate::json::Value;
use crate::yaml::Node;
use indexmap::IndexMap;

/// Convert a decoded node, and everything below it, into a JSON value.
///
/// - documents convert to their content, or `Null` when empty,
/// - mapping keys are the literal text of the key node, a later duplicate
///   key overwrites the earlier value,
/// - scalars are kept as strings, without any type resolution,
/// - aliases convert to `Null`.
///
/// Never fails.
pub fn convert(node: &Node) -> Value {
    match node {
        Node::Document(Some(content)) => convert(content),
        Node::Document(None) => Value::Null,
        Node::Mapping(entries) => {
            let mut map = IndexMap::with_capacity(entries.len());
            for (key, value) in entries {
                map.insert(key.literal_text().to_string(), convert(value));
            }
            Value::Object(map)
        }
        Node::Sequence(items) => Value::Array(items.iter().map(convert).collect()),
        Node::Scalar(s) => Value::String(s.clone()),
        Node::Alias(_) => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(s: &str) -> Node {
        Node::Scalar(s.to_string())
    }

    fn string(s: &str) -> Value {
        Value::String(s.to_string())
    }

    fn object(entries: Vec<(&str, Value)>) -> Value {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn test_empty_document_is_null() {
        assert_eq!(convert(&Node::Document(None)), Value::Null);
    }

    #[test]
    fn test_document_converts_content() {
        let doc = Node::Document(Some(Box::new(scalar("hello"))));
        assert_eq!(convert(&doc), string("hello"));
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(convert(&Node::Mapping(vec![])), object(vec![]));
        assert_eq!(convert(&Node::Sequence(vec![])), Value::Array(vec![]));
    }

    #[test]
    fn test_scalars_stay_strings() {
        for text in ["42", "true", "null", "~", "1.5e3", ""] {
            assert_eq!(convert(&scalar(text)), string(text));
        }
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let node = Node::Mapping(vec![
            (scalar("a"), scalar("first")),
            (scalar("b"), scalar("other")),
            (scalar("a"), Node::Sequence(vec![scalar("second")])),
        ]);
        let value = convert(&node);
        assert_eq!(
            value,
            object(vec![
                ("a", Value::Array(vec![string("second")])),
                ("b", string("other")),
            ])
        );
    }

    #[test]
    fn test_non_scalar_keys_use_literal_text() {
        let node = Node::Mapping(vec![
            (Node::Sequence(vec![scalar("x")]), scalar("seq")),
            (Node::Alias("anchor".into()), scalar("alias")),
        ]);
        assert_eq!(
            convert(&node),
            object(vec![("", string("seq")), ("anchor", string("alias"))])
        );
    }

    #[test]
    fn test_alias_value_is_null() {
        let node = Node::Sequence(vec![scalar("a"), Node::Alias("a".into())]);
        assert_eq!(
            convert(&node),
            Value::Array(vec![string("a"), Value::Null])
        );
    }

    #[test]
    fn test_nested_structure_preserved() {
        let node = Node::Document(Some(Box::new(Node::Mapping(vec![(
            scalar("servers"),
            Node::Sequence(vec![
                Node::Mapping(vec![(scalar("port"), scalar("80"))]),
                Node::Mapping(vec![(scalar("port"), scalar("443"))]),
            ]),
        )]))));
        assert_eq!(
            convert(&node),
            object(vec![(
                "servers",
                Value::Array(vec![
                    object(vec![("port", string("80"))]),
                    object(vec![("port", string("443"))]),
                ])
            )])
        );
    }
}
