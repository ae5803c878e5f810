//! Input document records.

use serde::Deserialize;

/// Content document as supplied by the collection loader.
///
/// Identified by a slash-delimited slug (e.g., `"guides/modules"`). The
/// optional title overrides the label derived from the final slug segment.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Document {
    /// Slash-delimited slug, unique across the collection.
    pub slug: String,
    /// Explicit display title. When `None`, the label is derived from the
    /// final slug segment.
    #[serde(default)]
    pub title: Option<String>,
}

impl Document {
    /// Create a document without an explicit title.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: None,
        }
    }

    /// Create a document with an explicit display title.
    #[must_use]
    pub fn with_title(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: Some(title.into()),
        }
    }

    /// Slug segments, in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.slug.split('/')
    }
}
