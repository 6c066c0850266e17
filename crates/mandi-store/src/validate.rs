//! Content validation mirroring the CMS collection schema.
//!
//! The CMS enforces required fields and slug rules only inside its editor;
//! files edited by hand or produced by older schema versions can break
//! them. Validation collects every issue instead of stopping at the first.

use std::collections::{HashMap, HashSet};

use mandi_core::{slugify, Category, FulfilledOrder, Product, Subcategory};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::reader::{scan_collection, ContentFile};
use crate::{Collection, ContentStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub collection: Collection,
    /// File stem (or directory, for unreadable collections) the issue is about.
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}: {}", self.collection, self.file, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    fn push(&mut self, collection: Collection, file: &str, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            collection,
            file: file.to_string(),
            message: message.into(),
        });
    }

    fn require(&mut self, collection: Collection, file: &str, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(collection, file, format!("required field '{field}' is empty"));
        }
    }

    /// Check slug uniqueness, the CMS filename rule, and that the file name
    /// round-trips to the entity's own slug.
    fn check_slug(
        &mut self,
        collection: Collection,
        file: &str,
        slug: &str,
        seen: &mut HashSet<String>,
    ) {
        if slug.is_empty() {
            return;
        }
        if slugify(slug) != slug {
            self.push(
                collection,
                file,
                format!("slug '{slug}' is not lowercase-hyphenated (expected '{}')", slugify(slug)),
            );
        }
        if file != slug {
            self.push(
                collection,
                file,
                format!("file name does not match slug '{slug}'"),
            );
        }
        if !seen.insert(slug.to_string()) {
            self.push(collection, file, format!("duplicate slug '{slug}'"));
        }
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for issue in &self.issues {
            writeln!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl ContentStore {
    /// Check every collection against the content schema.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        let categories: Vec<(String, Category)> = self.parsed(Collection::Categories, &mut report);
        let subcategories: Vec<(String, Subcategory)> =
            self.parsed(Collection::Subcategories, &mut report);
        let products: Vec<(String, Product)> = self.parsed(Collection::Products, &mut report);
        let orders: Vec<(String, FulfilledOrder)> =
            self.parsed(Collection::FulfilledOrders, &mut report);

        let mut seen = HashSet::new();
        for (file, category) in &categories {
            let c = Collection::Categories;
            report.require(c, file, "title", &category.title);
            report.require(c, file, "slug", &category.slug);
            report.check_slug(c, file, &category.slug, &mut seen);
        }

        let category_slugs: HashSet<&str> =
            categories.iter().map(|(_, c)| c.slug.as_str()).collect();

        let mut seen = HashSet::new();
        for (file, sub) in &subcategories {
            let c = Collection::Subcategories;
            report.require(c, file, "title", &sub.title);
            report.require(c, file, "slug", &sub.slug);
            report.require(c, file, "parentCategory", &sub.parent_category);
            report.check_slug(c, file, &sub.slug, &mut seen);

            if let Some(parent) = sub.parent_slug() {
                if !category_slugs.contains(parent) {
                    report.push(c, file, format!("parent category '{parent}' does not exist"));
                }
            }
        }

        let subcategory_parents: HashMap<&str, Option<&str>> = subcategories
            .iter()
            .map(|(_, s)| (s.slug.as_str(), s.parent_slug()))
            .collect();

        let mut seen = HashSet::new();
        for (file, product) in &products {
            let c = Collection::Products;
            report.require(c, file, "name", &product.name);
            report.require(c, file, "slug", &product.slug);
            report.require(c, file, "category", &product.category);
            report.require(c, file, "mainImage", &product.main_image);
            report.check_slug(c, file, &product.slug, &mut seen);

            let category = product.category_slug();
            if let Some(category) = category {
                if !category_slugs.contains(category)
                    && !subcategory_parents.contains_key(category)
                {
                    report.push(c, file, format!("category '{category}' does not exist"));
                }
            }

            if let Some(sub) = product.subcategory_slug() {
                match subcategory_parents.get(sub) {
                    None => report.push(c, file, format!("subcategory '{sub}' does not exist")),
                    Some(parent) if category.is_some() && *parent != category => report.push(
                        c,
                        file,
                        format!(
                            "subcategory '{sub}' belongs to '{}', not '{}'",
                            parent.unwrap_or("<none>"),
                            category.unwrap_or_default()
                        ),
                    ),
                    Some(_) => {}
                }
            }
        }

        for (file, order) in &orders {
            let c = Collection::FulfilledOrders;
            report.require(c, file, "title", &order.title);
            report.require(c, file, "image", &order.image);
        }

        report
    }

    /// Parse one collection, recording unreadable files as issues.
    fn parsed<T: DeserializeOwned>(
        &self,
        collection: Collection,
        report: &mut ValidationReport,
    ) -> Vec<(String, T)> {
        let files: Vec<ContentFile<T>> = match scan_collection(&self.collection_dir(collection)) {
            Ok(files) => files,
            Err(e) => {
                report.push(collection, collection.dir_name(), e.to_string());
                return Vec::new();
            }
        };

        files
            .into_iter()
            .filter_map(|file| match file.parsed {
                Ok(entity) => Some((file.stem, entity)),
                Err(e) => {
                    report.push(collection, &file.stem, e.to_string());
                    None
                }
            })
            .collect()
    }
}
