//! Feature cards: a bold label plus an unmarked description per bullet.
//!
//! Feeds the icon-grid feature sections and, icon-less, the stat pair
//! columns; both consume the same record shape.

use cms_richtext::Document;

use crate::{first_unordered_list, label::split_bold_label, list_items, paragraphs};

/// One feature card: a short bold name and a sentence of description.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feature {
    /// The bold-marked label, e.g. `"Thermal break"`.
    pub name: String,
    /// The unmarked remainder with its leading "— " removed.
    pub description: String,
}

/// Extract feature records from the document's first unordered list.
///
/// Each list item contributes one record, built by splitting its first
/// paragraph's text runs by the bold mark. An item without a paragraph
/// still occupies its position (both fields empty) so positional icon
/// binding stays aligned with the authored order.
#[must_use]
pub fn extract(doc: Option<&Document>) -> Vec<Feature> {
    let Some(list) = doc.and_then(first_unordered_list) else {
        return Vec::new();
    };

    list_items(list)
        .map(|item| match paragraphs(item).next() {
            Some(paragraph) => {
                let split = split_bold_label(paragraph);
                Feature {
                    name: split.label,
                    description: split.body,
                }
            }
            None => {
                tracing::trace!("feature list item has no paragraph");
                Feature::default()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use cms_richtext::Document;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn feature_doc() -> Document {
        Document::from_value(&json!({
            "nodeType": "document",
            "content": [
                {"nodeType": "paragraph", "content": [
                    {"nodeType": "text", "value": "intro prose"},
                ]},
                {"nodeType": "unordered-list", "content": [
                    {"nodeType": "list-item", "content": [
                        {"nodeType": "paragraph", "content": [
                            {"nodeType": "text", "value": "Rigidity", "marks": [{"type": "bold"}]},
                            {"nodeType": "text", "value": " — keeps its shape under load", "marks": []},
                        ]},
                    ]},
                    {"nodeType": "list-item", "content": [
                        {"nodeType": "paragraph", "content": [
                            {"nodeType": "text", "value": "plain description without a label"},
                        ]},
                    ]},
                    {"nodeType": "list-item", "content": []},
                ]},
            ],
        }))
    }

    #[test]
    fn test_extract_label_and_body() {
        let features = extract(Some(&feature_doc()));
        assert_eq!(features.len(), 3);
        assert_eq!(
            features[0],
            Feature {
                name: "Rigidity".to_owned(),
                description: "keeps its shape under load".to_owned(),
            }
        );
    }

    #[test]
    fn test_item_without_bold_has_empty_name() {
        let features = extract(Some(&feature_doc()));
        assert_eq!(features[1].name, "");
        assert_eq!(features[1].description, "plain description without a label");
    }

    #[test]
    fn test_item_without_paragraph_is_empty_record() {
        let features = extract(Some(&feature_doc()));
        assert_eq!(features[2], Feature::default());
    }

    #[test]
    fn test_order_follows_document_order() {
        let features = extract(Some(&feature_doc()));
        assert_eq!(features[0].name, "Rigidity");
        assert_eq!(features[1].name, "");
    }
}
