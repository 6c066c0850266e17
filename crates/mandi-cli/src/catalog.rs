//! Command handlers that read the content store.
//!
//! Rendering is kept separate from printing so output can be asserted on.

use std::fmt::Write as _;

use mandi_core::{enquiry::product_path, EnquiryLinks, Product};
use mandi_store::{
    search::{search, suggest, DEFAULT_SUGGESTION_LIMIT},
    CatalogFilter, ContentStore,
};

/// Print the validation report; fail when any issue was found.
pub(crate) fn run_validate(store: &ContentStore, json: bool) -> anyhow::Result<()> {
    let report = store.validate();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.is_ok() {
        println!("content OK: {}", store.root().display());
    } else {
        print!("{report}");
    }

    if !report.is_ok() {
        anyhow::bail!("{} content issue(s) found", report.issues.len());
    }
    Ok(())
}

fn count_in(products: &[Product], tree: &[mandi_core::CategoryWithSubs], slug: &str) -> usize {
    CatalogFilter {
        query: None,
        category: Some(slug.to_string()),
    }
    .apply(products, tree)
    .len()
}

/// Indented category tree with active product counts.
///
/// Parent counts include products filed under any of their subcategories.
pub(crate) fn render_tree(store: &ContentStore) -> String {
    let products = store.products();
    let tree = store.category_tree();
    let mut out = String::new();

    for node in &tree {
        let _ = writeln!(
            out,
            "{} ({}) [{}]",
            node.category.title,
            node.slug(),
            count_in(&products, &tree, node.slug())
        );
        for sub in &node.subcategories {
            let _ = writeln!(
                out,
                "  {} ({}) [{}]",
                sub.title,
                sub.slug,
                count_in(&products, &tree, &sub.slug)
            );
        }
    }
    out
}

/// One line per hit: name, then the product page path.
pub(crate) fn render_search(
    store: &ContentStore,
    query: &str,
    suggestions: bool,
    limit: Option<usize>,
) -> String {
    let products = store.products();
    let hits = if suggestions {
        suggest(&products, query, limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT))
    } else {
        let mut hits = search(&products, query);
        if let Some(limit) = limit {
            hits.truncate(limit);
        }
        hits
    };

    let mut out = String::new();
    for product in hits {
        let _ = writeln!(out, "{}\t{}", product.name, product_path(&product.slug));
    }
    out
}

pub(crate) fn run_paths(store: &ContentStore, json: bool) -> anyhow::Result<()> {
    let paths = store.static_paths();
    if json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
    } else {
        for url in paths.urls() {
            println!("{url}");
        }
    }
    Ok(())
}

/// WhatsApp link for a product found by slug.
///
/// Inactive products still resolve, with a warning, so links can be
/// prepared before a product goes live.
pub(crate) fn enquiry_link(
    store: &ContentStore,
    links: &EnquiryLinks,
    slug: &str,
) -> anyhow::Result<String> {
    let Some(product) = store.product_by_slug(slug) else {
        anyhow::bail!("product '{slug}' not found");
    };
    if !product.active {
        tracing::warn!(slug, "product is inactive; link will point at a hidden page");
    }
    Ok(links.product(&product))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn sample() -> ContentStore {
        ContentStore::new(
            Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("..")
                .join("..")
                .join("content"),
        )
    }

    #[test]
    fn tree_lists_parents_and_children_with_counts() {
        let tree = render_tree(&sample());
        assert_eq!(
            tree,
            "Apparel (apparel) [1]\n\
             Gifts (gifts) [1]\n\
             \x20 Gift Boxes (gift-boxes) [1]\n\
             Home Decor (home-decor) [4]\n\
             \x20 Candles (candles) [1]\n\
             \x20 Wall Art (wall-art) [2]\n"
        );
    }

    #[test]
    fn search_prints_name_and_path() {
        let out = render_search(&sample(), "candle", false, None);
        assert_eq!(
            out,
            "Custom Gift Box\t/products/custom-gift-box\n\
             Lavender Soy Candle\t/products/lavender-soy-candle\n"
        );
    }

    #[test]
    fn search_limit_truncates() {
        let out = render_search(&sample(), "hand", false, Some(1));
        assert_eq!(out, "Brass Diya\t/products/brass-diya\n");
    }

    #[test]
    fn suggestions_match_names_only() {
        let out = render_search(&sample(), "candle", true, None);
        assert_eq!(out, "Lavender Soy Candle\t/products/lavender-soy-candle\n");
    }

    #[test]
    fn enquiry_link_for_inactive_product_still_resolves() {
        let links = EnquiryLinks::new("15550001111", "https://mandi.example");
        let link = enquiry_link(&sample(), &links, "festive-hamper").expect("link");
        assert!(link.starts_with("https://wa.me/15550001111?text="));
        assert!(link.contains("Festive%20Hamper"));
    }

    #[test]
    fn enquiry_link_for_unknown_product_fails() {
        let links = EnquiryLinks::new("1", "https://mandi.example");
        let err = enquiry_link(&sample(), &links, "nope").expect_err("unknown slug");
        assert_eq!(err.to_string(), "product 'nope' not found");
    }

    #[test]
    fn validate_passes_on_sample_catalog() {
        run_validate(&sample(), false).expect("sample catalog is valid");
    }
}
