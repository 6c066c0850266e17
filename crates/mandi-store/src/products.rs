use std::collections::HashSet;

use mandi_core::Product;

use crate::reader::{display_order, entry_or_warn, or_warn, read_collection, read_entry};
use crate::search::SearchEntry;
use crate::{Collection, ContentError, ContentStore};

impl ContentStore {
    /// Active products, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the directory or any file cannot be read.
    pub fn try_products(&self) -> Result<Vec<Product>, ContentError> {
        let mut products: Vec<Product> =
            read_collection(&self.collection_dir(Collection::Products))?;
        products.retain(|p| p.active);
        products.sort_by(|a, b| display_order(&a.name, &b.name));
        Ok(products)
    }

    /// Active products, or an empty list if the collection is unreadable.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        or_warn(Collection::Products, self.try_products())
    }

    /// Direct lookup by slug. Inactive products are returned too; whether to
    /// show them is up to the caller.
    #[must_use]
    pub fn product_by_slug(&self, slug: &str) -> Option<Product> {
        entry_or_warn(
            Collection::Products,
            slug,
            read_entry(&self.collection_dir(Collection::Products), slug),
        )
    }

    /// Active products whose category or subcategory is `slug`.
    #[must_use]
    pub fn products_by_category(&self, slug: &str) -> Vec<Product> {
        self.products()
            .into_iter()
            .filter(|p| p.is_tagged_with(slug))
            .collect()
    }

    /// Active products under a parent category: tagged with the parent
    /// itself or with any of its subcategories.
    #[must_use]
    pub fn products_by_parent_category(&self, parent_slug: &str) -> Vec<Product> {
        let subcategory_slugs: HashSet<String> = self
            .subcategories_of(parent_slug)
            .into_iter()
            .map(|s| s.slug)
            .collect();

        self.products()
            .into_iter()
            .filter(|p| {
                p.category_slug() == Some(parent_slug)
                    || p.category_slug().is_some_and(|s| subcategory_slugs.contains(s))
                    || p.subcategory_slug().is_some_and(|s| subcategory_slugs.contains(s))
            })
            .collect()
    }

    /// Compact listing of active products for client-side search.
    #[must_use]
    pub fn search_index(&self) -> Vec<SearchEntry> {
        self.products().iter().map(SearchEntry::from).collect()
    }
}
