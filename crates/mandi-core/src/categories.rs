use serde::{Deserialize, Serialize};

use crate::de::null_as_default;
use crate::reference::slug_from_reference;

/// A top-level grouping, stored as `content/categories/<slug>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
}

/// A child of exactly one [`Category`], stored as
/// `content/subcategories/<slug>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    /// Reference to the parent category, usually
    /// `"content/categories/<slug>.json"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub parent_category: String,
}

impl Subcategory {
    /// Slug of the parent category this subcategory points at.
    #[must_use]
    pub fn parent_slug(&self) -> Option<&str> {
        slug_from_reference(Some(&self.parent_category))
    }

    #[must_use]
    pub fn belongs_to(&self, parent_slug: &str) -> bool {
        self.parent_slug() == Some(parent_slug)
    }
}

/// A parent category together with its subcategories, used to render
/// navigation and to widen parent-category filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryWithSubs {
    #[serde(flatten)]
    pub category: Category,
    pub subcategories: Vec<Subcategory>,
}

impl CategoryWithSubs {
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.category.slug
    }

    /// Whether `slug` names one of this category's subcategories.
    #[must_use]
    pub fn has_subcategory(&self, slug: &str) -> bool {
        self.subcategories.iter().any(|s| s.slug == slug)
    }
}
