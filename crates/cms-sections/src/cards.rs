//! Name-plus-details cards for photo-card grids.

use std::sync::LazyLock;

use regex::Regex;

use cms_richtext::{Document, non_empty_lines, plain_text};

use crate::{first_unordered_list, list_items, paragraphs};

/// Leading ordinal on a card name: `1)`, `1.`, `01 `, `2:`, `3-` and the
/// bare `1 ` all count.
static LEADING_ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\s*[).:-]?\s*").unwrap());

/// One photo card: a name line and the detail lines beneath it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// First line of the bullet, leading ordinal stripped.
    pub name: String,
    /// Remaining lines joined with single spaces; empty for one-line cards.
    pub details: String,
}

/// Extract cards from the document's first unordered list.
///
/// A bullet's paragraphs are flattened and joined with newlines, then cut
/// back into non-empty lines, so one paragraph with hard line breaks and
/// several one-line paragraphs author the same card. The first line is the
/// name (editors number them, `"1) Mixed-use"`; the ordinal is display
/// noise and is stripped), the rest are the details.
#[must_use]
pub fn extract(doc: Option<&Document>) -> Vec<Card> {
    let Some(list) = doc.and_then(first_unordered_list) else {
        return Vec::new();
    };

    list_items(list)
        .map(|item| {
            let joined = paragraphs(item)
                .map(plain_text)
                .collect::<Vec<_>>()
                .join("\n");

            let mut lines = non_empty_lines(&joined).into_iter();
            let name = lines
                .next()
                .map(|raw| LEADING_ORDINAL.replace(&raw, "").trim().to_owned())
                .unwrap_or_default();
            let details = lines.collect::<Vec<_>>().join(" ");

            Card { name, details }
        })
        .collect()
}
