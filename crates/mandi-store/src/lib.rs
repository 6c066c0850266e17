//! File-backed content store.
//!
//! Every entity lives in its own JSON file named after its slug, grouped by
//! collection directory under a single content root. Reads are always fresh
//! from disk; nothing is cached in process.

mod categories;
mod fulfilled_orders;
mod paths;
mod products;
mod reader;
mod tree;

pub mod pagination;
pub mod search;
pub mod validate;

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

pub use pagination::Page;
pub use paths::StaticPaths;
pub use search::{CatalogFilter, SearchEntry};
pub use tree::{build_category_tree, CategoryKind, CategoryPage};
pub use validate::{ValidationIssue, ValidationReport};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The four content collections, each a directory of `<slug>.json` files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Collection {
    Categories,
    Subcategories,
    Products,
    FulfilledOrders,
}

impl Collection {
    #[must_use]
    pub fn dir_name(self) -> &'static str {
        match self {
            Collection::Categories => "categories",
            Collection::Subcategories => "subcategories",
            Collection::Products => "products",
            Collection::FulfilledOrders => "fulfilled-orders",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Read-only view over a content root.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the content root exists as a directory.
    #[must_use]
    pub fn health_check(&self) -> bool {
        self.root.is_dir()
    }

    fn collection_dir(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.dir_name())
    }
}
