//! Document tree nodes and node-kind predicates.
//!
//! The wire shape is the CMS rich-text JSON: every node is an object tagged
//! by `nodeType`, container nodes carry a `content` array, text leaves carry
//! `value` and `marks`. Decoding is total over valid JSON: anything the
//! model does not recognize becomes [`Node::Other`] rather than an error.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::DecodeError;

/// Wire labels for the node kinds this model distinguishes.
const PARAGRAPH: &str = "paragraph";
const UNORDERED_LIST: &str = "unordered-list";
const LIST_ITEM: &str = "list-item";
const TEXT: &str = "text";

/// A rich-text document: the root node of a CMS entry's rich-text field.
///
/// Holds the ordered top-level blocks. The children are heterogeneous; most
/// consumers scan them for the first node of a particular kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    /// Top-level blocks in authored order.
    pub content: Vec<Node>,
}

impl Document {
    /// Decode a document from an already-parsed JSON value.
    ///
    /// Total: a value that is not an object, or lacks a `content` array,
    /// yields an empty document. A root tagged with something other than
    /// `document` is still accepted; only the `content` array matters.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let content = value
            .get("content")
            .and_then(Value::as_array)
            .map(|children| children.iter().map(Node::from_value).collect())
            .unwrap_or_default();
        Self { content }
    }

    /// Decode a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Json`] if the text is not valid JSON. Valid
    /// JSON of an unexpected shape does not error; it decodes to an empty
    /// or partially-recognized document instead.
    pub fn from_json_str(json: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// A node in the rich-text tree.
///
/// The set of kinds is closed: extractors match on it exhaustively, so
/// teaching the model a new kind forces every consumer to decide what to do
/// with it. Node kinds outside the set decode as [`Node::Other`], which
/// keeps its children so text flattening still reaches nested runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// A paragraph block; children are text runs (or inline containers).
    Paragraph {
        /// Child nodes in authored order.
        content: Vec<Node>,
    },
    /// An unordered (bulleted) list block.
    UnorderedList {
        /// List items in authored order.
        content: Vec<Node>,
    },
    /// One bullet of a list; children are typically paragraphs.
    ListItem {
        /// Child nodes in authored order.
        content: Vec<Node>,
    },
    /// A text leaf: a run of characters with zero or more style marks.
    Text {
        /// The run's characters; empty if the wire value was absent.
        value: String,
        /// Style marks applied to the run.
        marks: Vec<Mark>,
    },
    /// Any node kind the model does not recognize (headings, hyperlinks,
    /// embedded entries, ...). Children are preserved.
    Other {
        /// Child nodes in authored order.
        content: Vec<Node>,
    },
}

impl Node {
    /// Decode a node from an already-parsed JSON value. Total: non-object
    /// values decode as a childless [`Node::Other`].
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::Other {
                content: Vec::new(),
            };
        };

        let node_type = obj.get("nodeType").and_then(Value::as_str).unwrap_or("");
        if node_type == TEXT {
            let value = obj
                .get("value")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_owned();
            let marks = obj
                .get("marks")
                .and_then(Value::as_array)
                .map(|marks| marks.iter().map(Mark::from_value).collect())
                .unwrap_or_default();
            return Self::Text { value, marks };
        }

        let content = obj
            .get("content")
            .and_then(Value::as_array)
            .map(|children| children.iter().map(Self::from_value).collect())
            .unwrap_or_default();

        match node_type {
            PARAGRAPH => Self::Paragraph { content },
            UNORDERED_LIST => Self::UnorderedList { content },
            LIST_ITEM => Self::ListItem { content },
            _ => Self::Other { content },
        }
    }

    /// Child nodes in authored order. Text leaves have none.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Paragraph { content }
            | Self::UnorderedList { content }
            | Self::ListItem { content }
            | Self::Other { content } => content,
            Self::Text { .. } => &[],
        }
    }

    /// Whether this node is a paragraph block.
    #[must_use]
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Self::Paragraph { .. })
    }

    /// Whether this node is an unordered-list block.
    #[must_use]
    pub fn is_unordered_list(&self) -> bool {
        matches!(self, Self::UnorderedList { .. })
    }

    /// Whether this node is a list item.
    #[must_use]
    pub fn is_list_item(&self) -> bool {
        matches!(self, Self::ListItem { .. })
    }

    /// Whether this node is a text leaf.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// An inline style mark attached to a text run.
///
/// Bold is the only mark extraction cares about (it is the authoring signal
/// for "this run is a label"); everything else is carried as [`Mark::Other`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mark {
    /// The `bold` style mark.
    Bold,
    /// Any other mark type (`italic`, `underline`, `code`, ...).
    Other(String),
}

impl Mark {
    /// Decode a mark from its wire object (`{"type": "bold"}`).
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value.get("type").and_then(Value::as_str) {
            Some("bold") => Self::Bold,
            Some(other) => Self::Other(other.to_owned()),
            None => Self::Other(String::new()),
        }
    }

    /// Whether this is the bold mark.
    #[must_use]
    pub fn is_bold(&self) -> bool {
        matches!(self, Self::Bold)
    }
}
