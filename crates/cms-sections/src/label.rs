//! Splitting a paragraph into a bold label and an unmarked body.
//!
//! The authoring convention for label/body bullets: the label is typed in
//! bold, the rest of the sentence is left unmarked and usually opens with
//! "— ". Marks are the only signal; there is no delimiter in the text
//! itself.

use cms_richtext::{Mark, Node};

/// The two halves of a label/body paragraph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelSplit {
    /// Concatenated bold runs, trimmed. Empty when nothing was bold.
    pub label: String,
    /// Concatenated unmarked runs, leading "— " stripped, trimmed.
    pub body: String,
}

/// Split a paragraph's direct text runs by the bold mark.
///
/// Runs accumulate by plain concatenation: bold runs form the label,
/// unmarked runs the body. No whitespace normalization happens here; the
/// marked runs are contiguous in practice and concatenate back into the
/// word or phrase the author typed. A paragraph with no bold runs yields an
/// empty label and the full text as body, which callers treat as "no label
/// provided" rather than an error.
#[must_use]
pub fn split_bold_label(paragraph: &Node) -> LabelSplit {
    let mut label = String::new();
    let mut body = String::new();

    for child in paragraph.children() {
        if let Node::Text { value, marks } = child {
            if marks.iter().any(Mark::is_bold) {
                label.push_str(value);
            } else {
                body.push_str(value);
            }
        }
    }

    // Authors open the unmarked remainder with " — "; the dash is
    // punctuation between label and body, not body text.
    let body = body.trim_start();
    let body = match body.strip_prefix('—') {
        Some(rest) => rest.trim_start(),
        None => body,
    };

    LabelSplit {
        label: label.trim().to_owned(),
        body: body.trim().to_owned(),
    }
}
