//! Document node types and parsing from YAML/JSON text

use std::collections::HashMap;
use yaml_rust2::parser::{Event, EventReceiver, Parser};
use yaml_rust2::scanner::{ScanError, TScalarStyle};

/// A node in a parsed document
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentNode {
    Scalar(String),
    Sequence(Vec<DocumentNode>),
    /// Entries in document order. Repeated keys are kept as separate entries.
    Mapping(Vec<(DocumentNode, DocumentNode)>),
}

impl DocumentNode {
    /// Scalar text, or `None` for collections
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            DocumentNode::Scalar(text) => Some(text),
            _ => None,
        }
    }
}

/// Every top-level document of one file, in stream order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDocument {
    documents: Vec<DocumentNode>,
}

impl ParsedDocument {
    pub fn new(documents: Vec<DocumentNode>) -> Self {
        Self { documents }
    }

    pub fn documents(&self) -> &[DocumentNode] {
        &self.documents
    }

    /// The first top-level document, if the stream had any
    pub fn first(&self) -> Option<&DocumentNode> {
        self.documents.first()
    }
}

/// Parse a YAML stream (JSON included) into one node tree per `---` document.
///
/// Scalars keep their source text: `1.10`, `0x1F` and `True` are not normalized. Plain
/// null scalars (`~`, `null`, nothing at all) become empty text.
pub fn parse_documents(text: &str) -> Result<ParsedDocument, ScanError> {
    let mut builder = TreeBuilder::default();
    Parser::new_from_str(text).load(&mut builder, true)?;
    Ok(ParsedDocument::new(builder.documents))
}

/// A collection whose end event has not arrived yet
enum OpenNode {
    Sequence {
        anchor: usize,
        items: Vec<DocumentNode>,
    },
    Mapping {
        anchor: usize,
        entries: Vec<(DocumentNode, DocumentNode)>,
        pending_key: Option<DocumentNode>,
    },
}

// Built from parser events rather than a typed deserializer so repeated mapping keys
// survive and scalar text is never reformatted.
#[derive(Default)]
struct TreeBuilder {
    documents: Vec<DocumentNode>,
    open: Vec<OpenNode>,
    anchors: HashMap<usize, DocumentNode>,
}

impl TreeBuilder {
    fn attach(&mut self, node: DocumentNode, anchor: usize) {
        if anchor != 0 {
            self.anchors.insert(anchor, node.clone());
        }
        match self.open.last_mut() {
            None => self.documents.push(node),
            Some(OpenNode::Sequence { items, .. }) => items.push(node),
            Some(OpenNode::Mapping {
                entries,
                pending_key,
                ..
            }) => match pending_key.take() {
                Some(key) => entries.push((key, node)),
                None => *pending_key = Some(node),
            },
        }
    }

    fn close(&mut self) {
        let (node, anchor) = match self.open.pop() {
            Some(OpenNode::Sequence { anchor, items }) => (DocumentNode::Sequence(items), anchor),
            Some(OpenNode::Mapping {
                anchor, entries, ..
            }) => (DocumentNode::Mapping(entries), anchor),
            None => return,
        };
        self.attach(node, anchor);
    }
}

impl EventReceiver for TreeBuilder {
    fn on_event(&mut self, event: Event) {
        match event {
            Event::Scalar(value, style, anchor, ..) => {
                let text = if style == TScalarStyle::Plain && is_null(&value) {
                    String::new()
                } else {
                    value
                };
                self.attach(DocumentNode::Scalar(text), anchor);
            }
            Event::SequenceStart(anchor, ..) => self.open.push(OpenNode::Sequence {
                anchor,
                items: Vec::new(),
            }),
            Event::MappingStart(anchor, ..) => self.open.push(OpenNode::Mapping {
                anchor,
                entries: Vec::new(),
                pending_key: None,
            }),
            Event::SequenceEnd | Event::MappingEnd => self.close(),
            Event::Alias(anchor) => {
                let node = self
                    .anchors
                    .get(&anchor)
                    .cloned()
                    .unwrap_or_else(|| DocumentNode::Scalar(String::new()));
                self.attach(node, 0);
            }
            _ => {}
        }
    }
}

fn is_null(value: &str) -> bool {
    matches!(value, "" | "~" | "null" | "Null" | "NULL")
}
