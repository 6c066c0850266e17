use mandi_core::{Category, CategoryWithSubs, Product, Subcategory};
use serde::Serialize;

use crate::ContentStore;

/// Attach each subcategory to the parent its reference names.
///
/// Input order is preserved on both levels. Subcategories whose parent is
/// not among `categories` are left out of the tree.
#[must_use]
pub fn build_category_tree(
    categories: Vec<Category>,
    subcategories: &[Subcategory],
) -> Vec<CategoryWithSubs> {
    categories
        .into_iter()
        .map(|category| {
            let subcategories = subcategories
                .iter()
                .filter(|sub| sub.belongs_to(&category.slug))
                .cloned()
                .collect();
            CategoryWithSubs {
                category,
                subcategories,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Parent,
    Subcategory,
}

/// Everything needed to render one category listing.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPage {
    pub kind: CategoryKind,
    pub title: String,
    pub slug: String,
    /// Set for subcategories whose parent resolves.
    pub parent_category: Option<Category>,
    /// Children of a parent category; empty for subcategories.
    pub subcategories: Vec<Subcategory>,
    pub products: Vec<Product>,
    pub category_tree: Vec<CategoryWithSubs>,
}

impl ContentStore {
    /// Every parent category with its subcategories.
    #[must_use]
    pub fn category_tree(&self) -> Vec<CategoryWithSubs> {
        build_category_tree(self.parent_categories(), &self.subcategories())
    }

    /// Resolve `slug` as a parent category first, then as a subcategory.
    ///
    /// Returns `None` when neither collection has the slug.
    #[must_use]
    pub fn category_page(&self, slug: &str) -> Option<CategoryPage> {
        let page = if let Some(category) = self.category_by_slug(slug) {
            CategoryPage {
                kind: CategoryKind::Parent,
                subcategories: self.subcategories_of(slug),
                products: self.products_by_parent_category(slug),
                parent_category: None,
                title: category.title,
                slug: category.slug,
                category_tree: Vec::new(),
            }
        } else {
            let subcategory = self.subcategory_by_slug(slug)?;
            CategoryPage {
                kind: CategoryKind::Subcategory,
                parent_category: self.parent_category_of(&subcategory),
                subcategories: Vec::new(),
                products: self.products_by_category(slug),
                title: subcategory.title,
                slug: subcategory.slug,
                category_tree: Vec::new(),
            }
        };

        Some(CategoryPage {
            category_tree: self.category_tree(),
            ..page
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(slug: &str) -> Category {
        Category {
            title: slug.to_uppercase(),
            slug: slug.to_string(),
        }
    }

    fn subcategory(slug: &str, parent_ref: &str) -> Subcategory {
        Subcategory {
            title: slug.to_uppercase(),
            slug: slug.to_string(),
            parent_category: parent_ref.to_string(),
        }
    }

    #[test]
    fn every_subcategory_lands_under_exactly_its_parent() {
        let subs = vec![
            subcategory("wall-art", "content/categories/home-decor.json"),
            subcategory("candles", "home-decor"),
            subcategory("gift-boxes", "content/categories/gifts.json"),
        ];
        let tree = build_category_tree(vec![category("gifts"), category("home-decor")], &subs);

        for sub in &subs {
            let owners: Vec<&str> = tree
                .iter()
                .filter(|node| node.has_subcategory(&sub.slug))
                .map(CategoryWithSubs::slug)
                .collect();
            assert_eq!(owners, vec![sub.parent_slug().unwrap()]);
        }
    }

    #[test]
    fn orphan_subcategory_is_left_out() {
        let subs = vec![subcategory("lost", "content/categories/missing.json")];
        let tree = build_category_tree(vec![category("gifts")], &subs);
        assert_eq!(tree.len(), 1);
        assert!(tree[0].subcategories.is_empty());
    }

    #[test]
    fn category_without_subcategories_has_empty_list() {
        let tree = build_category_tree(vec![category("apparel")], &[]);
        assert_eq!(tree[0].slug(), "apparel");
        assert!(tree[0].subcategories.is_empty());
    }
}
