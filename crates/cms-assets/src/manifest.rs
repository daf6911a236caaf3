//! TOML manifest of per-section asset rosters.
//!
//! The manifest lives with the static assets and names a roster per
//! section:
//!
//! ```toml
//! [sections.features]
//! slots = ["img/001.webp", "img/002.webp", "img/003.webp"]
//! fallback = "img/003.webp"
//!
//! [sections.cards]
//! slots = ["img/01.webp", "img/02.webp"]
//! fallback = "img/01.webp"
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use crate::AssetRoster;

/// Raw manifest as parsed from TOML.
#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    sections: HashMap<String, RawRoster>,
}

#[derive(Debug, Deserialize)]
struct RawRoster {
    slots: Vec<String>,
    fallback: String,
}

/// Validated asset rosters, one per named section.
#[derive(Clone, Debug, Default)]
pub struct Manifest {
    sections: HashMap<String, AssetRoster>,
}

/// Error type for manifest loading.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Manifest error: {0}")]
    Validation(String),
}

impl Manifest {
    /// Parse and validate a manifest from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Parse`] for malformed TOML, and
    /// [`ManifestError::Validation`] when a section has no slots, a blank
    /// slot path, or a blank fallback.
    pub fn from_toml(content: &str) -> Result<Self, ManifestError> {
        let raw: RawManifest = toml::from_str(content)?;

        let mut sections = HashMap::with_capacity(raw.sections.len());
        for (name, roster) in raw.sections {
            validate_roster(&name, &roster)?;
            sections.insert(name, AssetRoster::new(roster.slots, roster.fallback));
        }

        Ok(Self { sections })
    }

    /// Look up the roster for a section. Unknown sections are simply not
    /// present; the caller decides whether that means "render without
    /// imagery" or a deployment mistake.
    #[must_use]
    pub fn roster(&self, section: &str) -> Option<&AssetRoster> {
        self.sections.get(section)
    }

    /// Names of all configured sections, in no particular order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

/// Require a roster to have at least one slot and no blank paths.
fn validate_roster(name: &str, roster: &RawRoster) -> Result<(), ManifestError> {
    if roster.slots.is_empty() {
        return Err(ManifestError::Validation(format!(
            "sections.{name}.slots cannot be empty"
        )));
    }
    if roster.slots.iter().any(|slot| slot.trim().is_empty()) {
        return Err(ManifestError::Validation(format!(
            "sections.{name}.slots cannot contain blank paths"
        )));
    }
    if roster.fallback.trim().is_empty() {
        return Err(ManifestError::Validation(format!(
            "sections.{name}.fallback cannot be empty"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const MANIFEST: &str = r#"
[sections.features]
slots = ["img/001.webp", "img/002.webp"]
fallback = "img/002.webp"

[sections.cards]
slots = ["img/01.webp"]
fallback = "img/01.webp"
"#;

    #[test]
    fn test_parse_manifest() {
        let manifest = Manifest::from_toml(MANIFEST).unwrap();
        let features = manifest.roster("features").unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features.slot(0), "img/001.webp");
        assert_eq!(features.slot(5), "img/002.webp");
    }

    #[test]
    fn test_empty_manifest_is_valid() {
        let manifest = Manifest::from_toml("").unwrap();
        assert_eq!(manifest.section_names().count(), 0);
    }

    #[test]
    fn test_unknown_section_lookup() {
        let manifest = Manifest::from_toml(MANIFEST).unwrap();
        assert!(manifest.roster("hero").is_none());
    }

    #[test]
    fn test_invalid_toml() {
        let result = Manifest::from_toml("[sections.features\nslots = 3");
        assert!(matches!(result, Err(ManifestError::Parse(_))));
    }

    #[test]
    fn test_empty_slots_rejected() {
        let toml = r#"
[sections.features]
slots = []
fallback = "img/a.webp"
"#;
        let err = Manifest::from_toml(toml).unwrap_err();
        assert!(matches!(err, ManifestError::Validation(_)));
        assert!(err.to_string().contains("features"));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_blank_slot_rejected() {
        let toml = r#"
[sections.cards]
slots = ["img/a.webp", "  "]
fallback = "img/a.webp"
"#;
        let err = Manifest::from_toml(toml).unwrap_err();
        assert!(matches!(err, ManifestError::Validation(_)));
        assert!(err.to_string().contains("blank"));
    }

    #[test]
    fn test_blank_fallback_rejected() {
        let toml = r#"
[sections.cards]
slots = ["img/a.webp"]
fallback = ""
"#;
        let err = Manifest::from_toml(toml).unwrap_err();
        assert!(matches!(err, ManifestError::Validation(_)));
        assert!(err.to_string().contains("fallback"));
    }
}
