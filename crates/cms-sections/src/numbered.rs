//! Numbered "NN. Title: body" items for step/advantage columns.

use std::sync::LazyLock;

use regex::Regex;

use cms_richtext::{Document, normalize_whitespace, plain_text};

use crate::{first_unordered_list, list_items, paragraphs};

/// Leading two-digit index, e.g. `01. Full predictability`.
static INDEX_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})\.\s*(.*)$").unwrap());

/// One numbered item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberedItem {
    /// The two-digit index with its dot, e.g. `"01."`; empty when the
    /// bullet was authored without one.
    pub index: String,
    /// The heading, including a trailing colon when one separated it from
    /// the body.
    pub title: String,
    /// Body copy; empty when the bullet is heading-only.
    pub body: String,
}

/// Extract numbered items from the document's first unordered list.
///
/// The first paragraph carries `NN.` plus the heading; the body is either a
/// second paragraph or, failing that, whatever follows the first interior
/// colon of the heading itself. A colon with nothing after it does not
/// split. Bullets whose paragraphs are all blank are dropped.
#[must_use]
pub fn extract(doc: Option<&Document>) -> Vec<NumberedItem> {
    let Some(list) = doc.and_then(first_unordered_list) else {
        return Vec::new();
    };

    list_items(list)
        .filter_map(|item| {
            let mut ps = paragraphs(item);
            let first = ps
                .next()
                .map(|p| normalize_whitespace(&plain_text(p)))
                .unwrap_or_default();
            let second = ps
                .next()
                .map(|p| normalize_whitespace(&plain_text(p)))
                .unwrap_or_default();

            if first.is_empty() && second.is_empty() {
                return None;
            }

            let (index, rest) = match INDEX_PREFIX.captures(&first) {
                Some(caps) => (format!("{}.", &caps[1]), caps[2].to_owned()),
                None => (String::new(), first),
            };

            let (title, body) = if second.is_empty() {
                split_on_colon(&rest)
            } else {
                (rest, second)
            };

            Some(NumberedItem { index, title, body })
        })
        .collect()
}

/// Split `"Title: body"` at the first colon, keeping the colon with the
/// title. No colon, or a colon as the last character, means no body.
fn split_on_colon(rest: &str) -> (String, String) {
    match rest.find(':') {
        Some(at) if at + 1 < rest.len() => (
            rest[..=at].trim().to_owned(),
            rest[at + 1..].trim().to_owned(),
        ),
        _ => (rest.to_owned(), String::new()),
    }
}
