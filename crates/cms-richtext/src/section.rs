//! The section-entry envelope rich-text documents arrive in.
//!
//! The CMS models each page section as one entry type with a grab-bag of
//! optional plain-text fields and up to two rich-text slots; which fields a
//! given section uses is a per-section convention. All fields are optional:
//! editors routinely publish partially-filled entries, and an absent field
//! must read the same as a blank one.

use serde::Deserialize;

use crate::Document;

/// Fields of a CMS section entry.
///
/// Field names mirror the CMS field IDs (`sectionName`, `richText1`, ...),
/// so this deserializes directly from an entry's `fields` object.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionFields {
    /// Name the page assembly looks sections up by.
    pub section_name: Option<String>,
    /// Primary heading.
    pub title: Option<String>,
    /// Secondary heading, usually rendered as an accented continuation.
    pub title1: Option<String>,
    /// First subtitle line.
    pub subtitle1: Option<String>,
    /// Second subtitle line.
    pub subtitle2: Option<String>,
    /// Body copy.
    pub description: Option<String>,
    /// Additional body copy.
    pub description2: Option<String>,
    /// Call-to-action button label.
    pub btn: Option<String>,
    /// First rich-text slot.
    pub rich_text: Option<Document>,
    /// Second rich-text slot.
    pub rich_text1: Option<Document>,
}

/// Read an optional plain field as trimmed text, empty when absent.
///
/// Callers render their own default when this comes back empty; absent and
/// whitespace-only fields are indistinguishable on purpose.
#[must_use]
pub fn text_or_empty(field: Option<&str>) -> &str {
    field.map(str::trim).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_partial_entry() {
        let fields: SectionFields = serde_json::from_value(json!({
            "sectionName": "faq",
            "title": "Questions",
            "richText1": {"nodeType": "document", "content": []},
        }))
        .unwrap();

        assert_eq!(fields.section_name.as_deref(), Some("faq"));
        assert_eq!(fields.title.as_deref(), Some("Questions"));
        assert!(fields.subtitle1.is_none());
        assert!(fields.rich_text.is_none());
        assert!(fields.rich_text1.is_some());
    }

    #[test]
    fn test_deserialize_empty_entry() {
        let fields: SectionFields = serde_json::from_value(json!({})).unwrap();
        assert!(fields.section_name.is_none());
        assert!(fields.rich_text1.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let fields: SectionFields = serde_json::from_value(json!({
            "title": "x",
            "someFutureField": {"anything": true},
        }))
        .unwrap();
        assert_eq!(fields.title.as_deref(), Some("x"));
    }

    #[test]
    fn test_text_or_empty() {
        assert_eq!(text_or_empty(Some("  padded  ")), "padded");
        assert_eq!(text_or_empty(Some("   ")), "");
        assert_eq!(text_or_empty(None), "");
    }
}
