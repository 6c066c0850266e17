use serde::Serialize;

use crate::ContentStore;

/// Every public page that can be pre-rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StaticPaths {
    /// Category and subcategory slugs; both render through `/category/<slug>`.
    pub categories: Vec<String>,
    /// Active product slugs, rendered through `/products/<slug>`.
    pub products: Vec<String>,
}

impl StaticPaths {
    /// URL paths in render order: categories first, then products.
    #[must_use]
    pub fn urls(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|slug| format!("/category/{slug}"))
            .chain(self.products.iter().map(|slug| format!("/products/{slug}")))
            .collect()
    }
}

impl ContentStore {
    #[must_use]
    pub fn static_paths(&self) -> StaticPaths {
        let categories = self
            .categories()
            .into_iter()
            .map(|c| c.slug)
            .chain(self.subcategories().into_iter().map(|s| s.slug))
            .collect();
        let products = self.products().into_iter().map(|p| p.slug).collect();

        StaticPaths {
            categories,
            products,
        }
    }
}
