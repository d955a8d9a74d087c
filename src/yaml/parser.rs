//! Decoder building `Node` trees from the yaml-rust2 event stream.

use super::node::Node;
use crate::error::Error;
use std::str::Chars;
use yaml_rust2::parser::{Event, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// Lazy sequence of decoded documents, in source order.
///
/// Each call to `next` pulls parser events up to the end of one document
/// and yields it as a `Node::Document`. A decode error is yielded once,
/// when reached, and ends the stream.
pub struct DocumentStream<'a> {
    parser: Parser<Chars<'a>>,
    builder: TreeBuilder<'a>,
    count: usize,
    done: bool,
}

impl<'a> DocumentStream<'a> {
    pub fn parse(content: &'a str) -> Self {
        // A byte order mark may only open the stream
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        Self {
            parser: Parser::new_from_str(content),
            builder: TreeBuilder::new(content),
            count: 0,
            done: false,
        }
    }
}

impl Iterator for DocumentStream<'_> {
    type Item = Result<Node, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            match self.parser.next_token() {
                Err(e) => {
                    log::debug!("decode stopped after {} document(s): {}", self.count, e);
                    self.done = true;
                    return Some(Err(Error::from(e)));
                }
                Ok((Event::StreamEnd, _)) => self.done = true,
                Ok((ev, marker)) => {
                    if let Some(doc) = self.builder.feed(ev, marker) {
                        self.count += 1;
                        return Some(Ok(doc));
                    }
                }
            }
        }
        None
    }
}

/// Container being filled while its children are decoded.
enum Frame {
    Sequence(Vec<Node>),
    Mapping {
        entries: Vec<(Node, Node)>,
        pending_key: Option<Node>,
    },
}

/// Forward-moving translation of `Marker::index()` (in chars) to the
/// remaining source text.
struct SourceCursor<'a> {
    text: &'a str,
    chars: usize,
    bytes: usize,
}

impl<'a> SourceCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: 0,
            bytes: 0,
        }
    }

    /// Source text starting at char `index`.
    fn rest_at(&mut self, index: usize) -> &'a str {
        if index < self.chars {
            self.chars = 0;
            self.bytes = 0;
        }
        let rest = &self.text[self.bytes..];
        let offset = rest
            .char_indices()
            .nth(index - self.chars)
            .map_or(rest.len(), |(i, _)| i);
        self.chars = index;
        self.bytes += offset;
        &self.text[self.bytes..]
    }
}

struct TreeBuilder<'a> {
    source: SourceCursor<'a>,
    stack: Vec<Frame>,
    content: Option<Node>,
}

impl<'a> TreeBuilder<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source: SourceCursor::new(source),
            stack: Vec::new(),
            content: None,
        }
    }

    fn push_complete(&mut self, node: Node) {
        match self.stack.last_mut() {
            None => self.content = Some(node),
            Some(Frame::Sequence(items)) => items.push(node),
            Some(Frame::Mapping {
                entries,
                pending_key,
            }) => match pending_key.take() {
                Some(key) => entries.push((key, node)),
                None => *pending_key = Some(node),
            },
        }
    }

    /// The parser reports absent content (`key:` or a bare `---`) as a
    /// plain scalar that does not appear in the source.
    fn is_empty_scalar(&mut self, value: &str, style: TScalarStyle, marker: &Marker) -> bool {
        if style != TScalarStyle::Plain {
            return false;
        }
        value.is_empty()
            || (value == "~" && !self.source.rest_at(marker.index()).starts_with('~'))
    }

    /// Alias events only carry an anchor id, the name is read back from
    /// the `*name` token.
    fn alias_name(&mut self, marker: &Marker) -> String {
        let rest = self.source.rest_at(marker.index());
        rest.strip_prefix('*')
            .unwrap_or(rest)
            .chars()
            .take_while(|c| !c.is_whitespace() && !matches!(c, ',' | '[' | ']' | '{' | '}'))
            .collect()
    }

    /// Apply one parser event, returning the document it completes.
    fn feed(&mut self, ev: Event, marker: Marker) -> Option<Node> {
        match ev {
            Event::Nothing | Event::StreamStart | Event::StreamEnd => {}

            Event::DocumentStart => {
                self.stack.clear();
                self.content = None;
            }

            Event::DocumentEnd => {
                log::trace!("decoded document ending at line {}", marker.line());
                return Some(Node::Document(self.content.take().map(Box::new)));
            }

            Event::Scalar(value, style, _anchor_id, _tag) => {
                if self.is_empty_scalar(&value, style, &marker) {
                    if !self.stack.is_empty() {
                        self.push_complete(Node::Scalar(String::new()));
                    }
                } else {
                    self.push_complete(Node::Scalar(value));
                }
            }

            Event::Alias(_anchor_id) => {
                let name = self.alias_name(&marker);
                self.push_complete(Node::Alias(name));
            }

            Event::SequenceStart(_anchor_id, _tag) => {
                self.stack.push(Frame::Sequence(Vec::new()));
            }

            Event::MappingStart(_anchor_id, _tag) => {
                self.stack.push(Frame::Mapping {
                    entries: Vec::new(),
                    pending_key: None,
                });
            }

            Event::SequenceEnd | Event::MappingEnd => match self.stack.pop() {
                Some(Frame::Sequence(items)) => self.push_complete(Node::Sequence(items)),
                Some(Frame::Mapping { entries, .. }) => self.push_complete(Node::Mapping(entries)),
                None => {}
            },
        }
        None
    }
}
