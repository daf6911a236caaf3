//! Question/answer pairs for accordion-style FAQ sections.

use cms_richtext::{Document, non_empty_lines, plain_text};

use crate::{first_unordered_list, list_items, paragraphs};

/// One FAQ entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QaEntry {
    /// The question, from the bullet's first paragraph.
    pub question: String,
    /// The answer, from the second paragraph (or the remaining lines of a
    /// single-paragraph bullet).
    pub answer: String,
}

/// Extract question/answer pairs from the document's first unordered list.
///
/// Convention: each bullet holds two paragraphs, question then answer.
/// Editors sometimes collapse both into one paragraph with a line break
/// instead; in that case the first line is the question and the remaining
/// lines, joined with single spaces, are the answer.
#[must_use]
pub fn extract(doc: Option<&Document>) -> Vec<QaEntry> {
    let Some(list) = doc.and_then(first_unordered_list) else {
        return Vec::new();
    };

    list_items(list)
        .map(|item| {
            let mut ps = paragraphs(item);
            let first = ps.next();
            let second = ps.next();

            if let (Some(question), Some(answer)) = (first, second) {
                return QaEntry {
                    question: plain_text(question).trim().to_owned(),
                    answer: plain_text(answer).trim().to_owned(),
                };
            }

            // Single-paragraph bullet: split on line breaks instead.
            let text = first.map(plain_text).unwrap_or_default();
            let mut lines = non_empty_lines(&text).into_iter();
            let question = lines.next().unwrap_or_default();
            let answer = lines.collect::<Vec<_>>().join(" ");
            QaEntry { question, answer }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use cms_richtext::Document;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn doc_with_items(items: serde_json::Value) -> Document {
        Document::from_value(&json!({
            "nodeType": "document",
            "content": [{"nodeType": "unordered-list", "content": items}],
        }))
    }

    fn two_paragraph_item(question: &str, answer: &str) -> serde_json::Value {
        json!({"nodeType": "list-item", "content": [
            {"nodeType": "paragraph", "content": [
                {"nodeType": "text", "value": question},
            ]},
            {"nodeType": "paragraph", "content": [
                {"nodeType": "text", "value": answer},
            ]},
        ]})
    }

    fn one_paragraph_item(text: &str) -> serde_json::Value {
        json!({"nodeType": "list-item", "content": [
            {"nodeType": "paragraph", "content": [
                {"nodeType": "text", "value": text},
            ]},
        ]})
    }

    #[test]
    fn test_two_paragraphs_split_into_question_and_answer() {
        let doc = doc_with_items(json!([two_paragraph_item("What is X?", "X is Y.")]));
        assert_eq!(
            extract(Some(&doc)),
            vec![QaEntry {
                question: "What is X?".to_owned(),
                answer: "X is Y.".to_owned(),
            }]
        );
    }

    #[test]
    fn test_single_paragraph_falls_back_to_line_split() {
        let doc = doc_with_items(json!([one_paragraph_item("What is X?\nX is Y.")]));
        assert_eq!(
            extract(Some(&doc)),
            vec![QaEntry {
                question: "What is X?".to_owned(),
                answer: "X is Y.".to_owned(),
            }]
        );
    }

    #[test]
    fn test_fallback_joins_multiple_answer_lines() {
        let doc = doc_with_items(json!([one_paragraph_item(
            "How long?\nAbout two weeks\nfrom the first call."
        )]));
        let entries = extract(Some(&doc));
        assert_eq!(entries[0].question, "How long?");
        assert_eq!(entries[0].answer, "About two weeks from the first call.");
    }

    #[test]
    fn test_item_without_paragraphs_is_empty_pair() {
        let doc = doc_with_items(json!([{"nodeType": "list-item", "content": []}]));
        assert_eq!(extract(Some(&doc)), vec![QaEntry::default()]);
    }

    #[test]
    fn test_entries_keep_list_order() {
        let doc = doc_with_items(json!([
            two_paragraph_item("First?", "Yes."),
            two_paragraph_item("Second?", "Also yes."),
        ]));
        let entries = extract(Some(&doc));
        assert_eq!(entries[0].question, "First?");
        assert_eq!(entries[1].question, "Second?");
    }
}
