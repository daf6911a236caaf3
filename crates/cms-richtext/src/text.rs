//! Plain-text flattening and whitespace normalization.
//!
//! Every extractor reduces subtrees to strings before applying its own
//! heuristics, so these primitives define what "the text of a node" means:
//! an in-order concatenation of text runs with no separators inserted, the
//! way the author typed them.

use crate::Node;

/// Flatten a node to its plain text.
///
/// A text leaf yields its value; a container yields the concatenation of its
/// children's text in authored order, with no separator (adjacent runs like
/// `"Fast"` and `" delivery"` are meant to join seamlessly). Unrecognized
/// nodes contribute the text of whatever children they carry. Recurses to
/// arbitrary depth; authoring tools keep real trees shallow.
#[must_use]
pub fn plain_text(node: &Node) -> String {
    match node {
        Node::Text { value, .. } => value.clone(),
        _ => node.children().iter().map(plain_text).collect(),
    }
}

/// Collapse every whitespace run (spaces, tabs, newlines) to a single space
/// and trim the ends. Idempotent.
///
/// Used whenever flattened text crosses paragraph boundaries and stray
/// newlines or double spaces must not survive into display copy.
#[must_use]
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split text on newlines into normalized, non-empty lines.
///
/// Runs of consecutive newlines collapse (the blank lines between them
/// normalize to empty and are dropped). Each surviving line is
/// whitespace-normalized.
#[must_use]
pub fn non_empty_lines(s: &str) -> Vec<String> {
    s.lines()
        .map(normalize_whitespace)
        .filter(|line| !line.is_empty())
        .collect()
}
