use mandi_core::{Category, Subcategory};

use crate::reader::{display_order, entry_or_warn, or_warn, read_collection, read_entry};
use crate::{Collection, ContentError, ContentStore};

impl ContentStore {
    /// All top-level categories, sorted by title.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the directory or any file cannot be read.
    pub fn try_categories(&self) -> Result<Vec<Category>, ContentError> {
        let mut categories: Vec<Category> =
            read_collection(&self.collection_dir(Collection::Categories))?;
        categories.sort_by(|a, b| display_order(&a.title, &b.title));
        Ok(categories)
    }

    /// All top-level categories, or an empty list if the collection is unreadable.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        or_warn(Collection::Categories, self.try_categories())
    }

    /// Top-level categories. Every category is a parent; subcategories live
    /// in their own collection.
    #[must_use]
    pub fn parent_categories(&self) -> Vec<Category> {
        self.categories()
    }

    /// All subcategories, sorted by title.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the directory or any file cannot be read.
    pub fn try_subcategories(&self) -> Result<Vec<Subcategory>, ContentError> {
        let mut subcategories: Vec<Subcategory> =
            read_collection(&self.collection_dir(Collection::Subcategories))?;
        subcategories.sort_by(|a, b| display_order(&a.title, &b.title));
        Ok(subcategories)
    }

    #[must_use]
    pub fn subcategories(&self) -> Vec<Subcategory> {
        or_warn(Collection::Subcategories, self.try_subcategories())
    }

    /// Subcategories whose parent reference resolves to `parent_slug`.
    #[must_use]
    pub fn subcategories_of(&self, parent_slug: &str) -> Vec<Subcategory> {
        self.subcategories()
            .into_iter()
            .filter(|sub| sub.belongs_to(parent_slug))
            .collect()
    }

    #[must_use]
    pub fn category_by_slug(&self, slug: &str) -> Option<Category> {
        entry_or_warn(
            Collection::Categories,
            slug,
            read_entry(&self.collection_dir(Collection::Categories), slug),
        )
    }

    #[must_use]
    pub fn subcategory_by_slug(&self, slug: &str) -> Option<Subcategory> {
        entry_or_warn(
            Collection::Subcategories,
            slug,
            read_entry(&self.collection_dir(Collection::Subcategories), slug),
        )
    }

    #[must_use]
    pub fn parent_category_of(&self, subcategory: &Subcategory) -> Option<Category> {
        subcategory
            .parent_slug()
            .and_then(|slug| self.category_by_slug(slug))
    }

    /// Breadcrumb label such as `"Home Decor / Wall Art"`. Parts that do not
    /// resolve are left out.
    #[must_use]
    pub fn category_path(&self, category_slug: Option<&str>, subcategory_slug: Option<&str>) -> String {
        let category = category_slug
            .and_then(|slug| self.category_by_slug(slug))
            .map(|c| c.title);
        let subcategory = subcategory_slug
            .and_then(|slug| self.subcategory_by_slug(slug))
            .map(|s| s.title);

        category
            .into_iter()
            .chain(subcategory)
            .collect::<Vec<_>>()
            .join(" / ")
    }
}
