//! Decoded YAML source tree.

/// A node of a decoded YAML document.
///
/// Mapping entries keep their source order, duplicates included: resolving
/// duplicate keys is left to the consumer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Document root, `None` when the document has no content.
    Document(Option<Box<Node>>),
    /// Key/value pairs in source order.
    Mapping(Vec<(Node, Node)>),
    Sequence(Vec<Node>),
    /// Scalar text after unquoting and folding, with no type resolution.
    Scalar(String),
    /// Reference to an anchored node, holding the anchor name.
    Alias(String),
}

impl Node {
    /// Raw literal text of the node.
    ///
    /// Scalars give their text and aliases their anchor name; every other
    /// kind has no literal text and gives an empty string.
    pub fn literal_text(&self) -> &str {
        match self {
            Node::Scalar(s) | Node::Alias(s) => s,
            _ => "",
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Document(_) => "document",
            Node::Mapping(_) => "mapping",
            Node::Sequence(_) => "sequence",
            Node::Scalar(_) => "scalar",
            Node::Alias(_) => "alias",
        }
    }
}
