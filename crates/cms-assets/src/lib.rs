//! Positional binding of extracted section records to static assets.
//!
//! Section content comes from the CMS, but the icons and photos next to it
//! are static files shipped with the site. The pairing is positional by
//! long-standing convention: record #2 gets asset slot #2. An
//! [`AssetRoster`] holds one section's ordered slots plus the designated
//! fallback used when editors author more bullets than the section has
//! assets; a [`Manifest`] holds the rosters for every section, loaded from
//! a TOML file kept next to the assets themselves.
//!
//! # Example
//!
//! ```
//! use cms_assets::AssetRoster;
//!
//! let roster = AssetRoster::new(
//!     vec!["img/001.webp".to_owned(), "img/002.webp".to_owned()],
//!     "img/default.webp",
//! );
//!
//! let bound = roster.bind(["Speed", "Control", "Price"], 3);
//! assert_eq!(bound[1].asset, "img/002.webp");
//! assert_eq!(bound[2].asset, "img/default.webp"); // past the roster
//! ```

mod manifest;

pub use manifest::{Manifest, ManifestError};

/// An ordered list of asset slots for one section, plus a fallback.
///
/// Immutable configuration: construct it once (directly or via
/// [`Manifest::from_toml`]) and pass it to the binding step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetRoster {
    slots: Vec<String>,
    fallback: String,
}

/// One record paired with the asset that should render alongside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bound<R> {
    /// The extracted record.
    pub record: R,
    /// Path of the asset bound to the record's position.
    pub asset: String,
}

impl AssetRoster {
    /// Build a roster from ordered slots and a fallback asset.
    #[must_use]
    pub fn new(slots: Vec<String>, fallback: impl Into<String>) -> Self {
        Self {
            slots,
            fallback: fallback.into(),
        }
    }

    /// The asset for a given position: the slot at `index`, or the fallback
    /// once `index` runs past the roster.
    #[must_use]
    pub fn slot(&self, index: usize) -> &str {
        self.slots.get(index).map_or(&self.fallback, String::as_str)
    }

    /// Number of dedicated (non-fallback) slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the roster has no dedicated slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Pair records with assets by position, keeping at most `limit`
    /// records.
    ///
    /// Record *i* gets slot *i*; records past the roster get the fallback;
    /// slots past the records go unused. The output preserves record order.
    /// The pairing carries no identity other than position, so reordering
    /// records between extraction and binding silently mismatches content
    /// and imagery.
    pub fn bind<R>(&self, records: impl IntoIterator<Item = R>, limit: usize) -> Vec<Bound<R>> {
        records
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(index, record)| Bound {
                record,
                asset: self.slot(index).to_owned(),
            })
            .collect()
    }
}
