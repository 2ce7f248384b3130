//! Portfolio item records and their validation rules.
//!
//! A portfolio item is a displayed bouquet: an image reference plus a name
//! and a description. Items are created by the admin panel, read by every
//! page and deleted by the admin panel. They are never edited in place.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{null_as_default, RecordId, Timestamp};

/// Name of the backend collection holding portfolio items.
pub const PORTFOLIO_TABLE: &str = "portfolio_items";

/// Number of items shown in the home-page teaser.
pub const PREVIEW_ITEM_COUNT: usize = 3;

/// A row from the `portfolio_items` collection.
///
/// Text columns may be null in the store and decode as empty strings; an
/// empty `image_url` renders as the missing-image fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

/// DTO for inserting a new portfolio item. Timestamps are left to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPortfolioItem {
    pub image_url: String,
    pub name: String,
    pub description: String,
}

impl NewPortfolioItem {
    pub fn new(
        image_url: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            image_url: image_url.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// Check every field before the item is sent to the store.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_persistable_image_url(&self.image_url)?;
        require_non_empty("name", &self.name)?;
        require_non_empty("description", &self.description)?;
        Ok(())
    }
}

/* --------------------------------------------------------------------------
Image references
-------------------------------------------------------------------------- */

/// Classification of an image reference by URI scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRef {
    /// `http://` or `https://`: the only kind that may be persisted.
    Remote,
    /// `data:` URI produced for a local preview in the admin panel.
    InlinePreview,
    /// Empty or any other scheme.
    Invalid,
}

impl ImageRef {
    pub fn classify(url: &str) -> Self {
        let url = url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            Self::Remote
        } else if url.starts_with("data:") {
            Self::InlinePreview
        } else {
            Self::Invalid
        }
    }

    /// Whether the reference can be rendered at all (remote or preview).
    pub fn is_renderable(self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

/// Validate that `url` is a non-empty `http://` or `https://` URL.
pub fn validate_persistable_image_url(url: &str) -> Result<(), CoreError> {
    match ImageRef::classify(url) {
        ImageRef::Remote => Ok(()),
        ImageRef::InlinePreview => Err(CoreError::Validation(
            "Inline image data can only be used for previews; upload the file instead".into(),
        )),
        ImageRef::Invalid if url.trim().is_empty() => {
            Err(CoreError::Validation("Image URL is required".into()))
        }
        ImageRef::Invalid => Err(CoreError::Validation(
            "Invalid URL! Must start with http:// or https://".into(),
        )),
    }
}

/// Ensure a text field has content after trimming.
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Return the first `n` items of an already ordered list (home-page teaser).
pub fn preview_items(items: &[PortfolioItem], n: usize) -> &[PortfolioItem] {
    &items[..items.len().min(n)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn classify_schemes() {
        assert_eq!(ImageRef::classify("https://x.test/a.jpg"), ImageRef::Remote);
        assert_eq!(ImageRef::classify("http://x.test/a.jpg"), ImageRef::Remote);
        assert_eq!(
            ImageRef::classify("data:image/png;base64,AAAA"),
            ImageRef::InlinePreview
        );
        assert_eq!(ImageRef::classify("ftp://x.test/a.jpg"), ImageRef::Invalid);
        assert_eq!(ImageRef::classify(""), ImageRef::Invalid);
        assert!(!ImageRef::Invalid.is_renderable());
        assert!(ImageRef::InlinePreview.is_renderable());
    }

    #[test]
    fn data_urls_are_never_persistable() {
        let err = validate_persistable_image_url("data:image/png;base64,AAAA").unwrap_err();
        assert!(err.to_string().contains("previews"));
    }

    #[test]
    fn relative_urls_are_rejected() {
        assert_matches!(
            validate_persistable_image_url("/images/rose.jpg"),
            Err(CoreError::Validation(msg)) if msg.contains("http://")
        );
    }

    #[test]
    fn new_item_requires_all_fields() {
        let ok = NewPortfolioItem::new("https://x.test/a.jpg", "Red Roses", "Twelve stems");
        assert!(ok.validate().is_ok());

        let no_name = NewPortfolioItem::new("https://x.test/a.jpg", "  ", "Twelve stems");
        assert_matches!(no_name.validate(), Err(CoreError::Validation(m)) if m.contains("name"));

        let no_desc = NewPortfolioItem::new("https://x.test/a.jpg", "Red Roses", "");
        assert_matches!(
            no_desc.validate(),
            Err(CoreError::Validation(m)) if m.contains("description")
        );
    }

    #[test]
    fn preview_takes_at_most_n() {
        let now = chrono::Utc::now();
        let items: Vec<PortfolioItem> = (0..5)
            .map(|i| PortfolioItem {
                id: RecordId::new(format!("item-{i}")),
                image_url: format!("https://x.test/{i}.jpg"),
                name: format!("Item {i}"),
                description: String::new(),
                created_at: now,
                updated_at: None,
            })
            .collect();
        assert_eq!(preview_items(&items, 3).len(), 3);
        assert_eq!(preview_items(&items[..2], 3).len(), 2);
        assert!(preview_items(&[], 3).is_empty());
    }

    #[test]
    fn item_decodes_serial_id_and_null_columns() {
        let json = serde_json::json!({
            "id": 7,
            "image_url": null,
            "name": "Peonies",
            "description": null,
            "created_at": "2026-02-01T10:00:00Z",
            "updated_at": null
        });
        let item: PortfolioItem = serde_json::from_value(json).unwrap();
        assert_eq!(item.id, RecordId::new("7"));
        assert_eq!(item.image_url, "");
        assert_eq!(item.description, "");
        assert_eq!(item.updated_at, None);
        assert_eq!(ImageRef::classify(&item.image_url), ImageRef::Invalid);
    }
}
