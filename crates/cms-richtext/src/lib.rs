//! Tolerant rich-text document tree model for CMS page content.
//!
//! Page sections are authored in the CMS as rich-text documents: a tree of
//! block, inline and text nodes with style marks, delivered as JSON. This
//! crate provides the typed model for that tree ([`Document`], [`Node`],
//! [`Mark`]), the text primitives every extractor builds on ([`plain_text`],
//! [`normalize_whitespace`]), and the [`SectionFields`] envelope a section
//! entry arrives in.
//!
//! # Tolerance
//!
//! Authored content is never schema-checked upstream, so decoding must not
//! fail on surprises: unknown `nodeType` values decode as [`Node::Other`]
//! (keeping their children), a missing `content` array decodes as no
//! children, and a text node without a `value` decodes as the empty string.
//! The only fallible operation in the crate is parsing JSON *text*; see
//! [`Document::from_json_str`].
//!
//! # Example
//!
//! ```
//! use cms_richtext::{Document, plain_text};
//!
//! let doc = Document::from_json_str(
//!     r#"{"nodeType": "document", "content": [
//!         {"nodeType": "paragraph", "content": [
//!             {"nodeType": "text", "value": "Fast", "marks": []},
//!             {"nodeType": "text", "value": " delivery", "marks": []}
//!         ]}
//!     ]}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(plain_text(&doc.content[0]), "Fast delivery");
//! ```

mod node;
mod section;
mod text;

pub use node::{Document, Mark, Node};
pub use section::{SectionFields, text_or_empty};
pub use text::{non_empty_lines, normalize_whitespace, plain_text};

/// Error type for decoding a document from JSON text.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The payload is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
