//! Typed section records extracted from rich-text documents.
//!
//! Editors author every list-shaped page section the same way: an unordered
//! list inside a rich-text field, with per-section conventions for how each
//! bullet encodes its parts (a bold run as the label, a `NN.` prefix as an
//! index, a colon between title and body, one paragraph per line of a card).
//! This crate turns those conventions into five extractors, one per record
//! shape:
//!
//! - [`features::extract`]: [`Feature`] label/body cards via the bold-mark
//!   split (also the shape stat pairs are rendered from)
//! - [`faq::extract`]: [`QaEntry`] question/answer pairs for accordions
//! - [`bullets::extract`]: [`Bullet`] one-line checklist entries
//! - [`numbered::extract`]: [`NumberedItem`] "NN. Title: body" columns
//! - [`cards::extract`]: [`Card`] name-plus-details photo cards
//!
//! All five share one traversal contract: take the **first** unordered list
//! among the document's top-level blocks, walk its list items in authored
//! order, map each to a record. A missing document, a document without a
//! list, or a bullet missing an expected part never errors; output just
//! shrinks, possibly to nothing, and the page renders what exists. Record
//! order mirrors list order; downstream asset binding is positional and
//! depends on it.
//!
//! # Example
//!
//! ```
//! use cms_richtext::Document;
//! use cms_sections::features;
//!
//! let doc = Document::from_json_str(
//!     r#"{"nodeType": "document", "content": [
//!         {"nodeType": "unordered-list", "content": [
//!             {"nodeType": "list-item", "content": [
//!                 {"nodeType": "paragraph", "content": [
//!                     {"nodeType": "text", "value": "Speed", "marks": [{"type": "bold"}]},
//!                     {"nodeType": "text", "value": " — ships in a day", "marks": []}
//!                 ]}
//!             ]}
//!         ]}
//!     ]}"#,
//! )
//! .unwrap();
//!
//! let features = features::extract(Some(&doc));
//! assert_eq!(features[0].name, "Speed");
//! assert_eq!(features[0].description, "ships in a day");
//! ```

pub mod bullets;
pub mod cards;
pub mod faq;
pub mod features;
mod label;
pub mod numbered;

pub use bullets::Bullet;
pub use cards::Card;
pub use faq::QaEntry;
pub use features::Feature;
pub use label::{LabelSplit, split_bold_label};
pub use numbered::NumberedItem;

use cms_richtext::{Document, Node};

/// Find the first unordered list among a document's top-level blocks.
///
/// Every extractor starts here; later lists in the same document are
/// ignored by convention (one list-shaped section per rich-text field).
#[must_use]
pub fn first_unordered_list(doc: &Document) -> Option<&Node> {
    let list = doc.content.iter().find(|node| node.is_unordered_list());
    if list.is_none() {
        tracing::trace!("document has no top-level unordered list");
    }
    list
}

/// The list items of a list node, in authored order.
///
/// Non-item children (malformed nesting) are skipped.
pub fn list_items(list: &Node) -> impl Iterator<Item = &Node> {
    list.children().iter().filter(|node| node.is_list_item())
}

/// The paragraph children of a list item, in authored order.
pub fn paragraphs(item: &Node) -> impl Iterator<Item = &Node> {
    item.children().iter().filter(|node| node.is_paragraph())
}
