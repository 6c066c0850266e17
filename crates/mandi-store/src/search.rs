//! Text search and listing filters over already-loaded products.

use mandi_core::{CategoryWithSubs, Product};
use serde::{Deserialize, Serialize};

/// Default number of type-ahead suggestions.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Compact search index record served to the type-ahead box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub name: String,
    pub slug: String,
    pub image: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
}

impl From<&Product> for SearchEntry {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            slug: product.slug.clone(),
            image: product.main_image.clone(),
            category: product.category.clone(),
            subcategory: product.subcategory.clone(),
        }
    }
}

fn needle(query: &str) -> Option<String> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Products whose name or description contains `query`, ignoring case.
///
/// A blank query matches nothing.
#[must_use]
pub fn search<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let Some(needle) = needle(query) else {
        return Vec::new();
    };
    products.iter().filter(|p| p.text_matches(&needle)).collect()
}

/// The first `limit` products whose name contains `query`, ignoring case.
#[must_use]
pub fn suggest<'a>(products: &'a [Product], query: &str, limit: usize) -> Vec<&'a Product> {
    let Some(needle) = needle(query) else {
        return Vec::new();
    };
    products
        .iter()
        .filter(|p| p.name_matches(&needle))
        .take(limit)
        .collect()
}

/// Listing filter: optional text query, then optional category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub query: Option<String>,
    pub category: Option<String>,
}

impl CatalogFilter {
    /// Apply the filter.
    ///
    /// A category that is a parent in `tree` also matches products tagged
    /// with any of its subcategories; any other slug must match the
    /// product's category or subcategory exactly.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product], tree: &[CategoryWithSubs]) -> Vec<&'a Product> {
        let needle = self.query.as_deref().and_then(needle);
        let category = self.category.as_deref().filter(|c| !c.is_empty());
        let parent = category.and_then(|slug| tree.iter().find(|node| node.slug() == slug));

        products
            .iter()
            .filter(|p| needle.as_deref().is_none_or(|n| p.text_matches(n)))
            .filter(|p| match (category, parent) {
                (None, _) => true,
                (Some(slug), Some(parent)) => {
                    p.category_slug() == Some(slug)
                        || p.category_slug().is_some_and(|s| parent.has_subcategory(s))
                        || p.subcategory_slug().is_some_and(|s| parent.has_subcategory(s))
                }
                (Some(slug), None) => p.is_tagged_with(slug),
            })
            .collect()
    }
}
