//! Plain one-line bullets for checklist sections.

use cms_richtext::{Document, normalize_whitespace, plain_text};

use crate::{first_unordered_list, list_items};

/// One checklist bullet, flattened to a single display line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bullet {
    /// The whole list item's text, whitespace-normalized.
    pub text: String,
}

/// Extract plain bullets from the document's first unordered list.
///
/// Each list item's entire subtree is flattened and normalized into one
/// line. Items that normalize to nothing (empty bullets left behind by
/// editing) are dropped; the survivors keep their relative order.
#[must_use]
pub fn extract(doc: Option<&Document>) -> Vec<Bullet> {
    let Some(list) = doc.and_then(first_unordered_list) else {
        return Vec::new();
    };

    list_items(list)
        .filter_map(|item| {
            let text = normalize_whitespace(&plain_text(item));
            if text.is_empty() {
                None
            } else {
                Some(Bullet { text })
            }
        })
        .collect()
}
