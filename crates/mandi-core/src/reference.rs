//! Resolution of CMS reference strings to slugs.
//!
//! The CMS stores relationships as the repository path of the target file,
//! e.g. `content/categories/home-decor.json`. Older content (and hand-edited
//! files) store the bare slug instead, so anything that is not a recognised
//! path is taken to already be a slug.

use std::sync::LazyLock;

use regex::Regex;

/// Directory of top-level category files, relative to the repository root.
pub const CATEGORIES_DIR: &str = "content/categories";
/// Directory of subcategory files, relative to the repository root.
pub const SUBCATEGORIES_DIR: &str = "content/subcategories";

static CATEGORY_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"content/categories/(.+)\.json$").expect("valid category reference regex")
});

static SUBCATEGORY_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"content/subcategories/(.+)\.json$").expect("valid subcategory reference regex")
});

/// Extract the slug a reference points at.
///
/// Returns `None` for a missing or empty reference.
#[must_use]
pub fn slug_from_reference(reference: Option<&str>) -> Option<&str> {
    let reference = reference.filter(|r| !r.is_empty())?;

    let captured = CATEGORY_REF
        .captures(reference)
        .or_else(|| SUBCATEGORY_REF.captures(reference))
        .and_then(|caps| caps.get(1));

    Some(captured.map_or(reference, |m| m.as_str()))
}

/// Build the reference the CMS writes when linking to a category.
#[must_use]
pub fn category_reference(slug: &str) -> String {
    format!("{CATEGORIES_DIR}/{slug}.json")
}

/// Build the reference the CMS writes when linking to a subcategory.
#[must_use]
pub fn subcategory_reference(slug: &str) -> String {
    format!("{SUBCATEGORIES_DIR}/{slug}.json")
}

/// Apply the CMS filename rule: lowercase, spaces become hyphens.
#[must_use]
pub fn slugify(value: &str) -> String {
    value.to_lowercase().replace(' ', "-")
}
