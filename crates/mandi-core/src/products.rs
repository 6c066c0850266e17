use serde::{Deserialize, Serialize};

use crate::de::{null_as_active, null_as_default};
use crate::reference::slug_from_reference;

/// Image shown on product cards when a product has no main image.
pub const CARD_PLACEHOLDER: &str = "/uploads/placeholder.jpg";

/// A catalog entry, stored as `content/products/<slug>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    /// Reference to the parent category, e.g. `"content/categories/home-decor.json"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Optional reference to a subcategory, e.g. `"content/subcategories/wall-art.json"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub main_image: String,
    /// Additional images in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<ProductImage>,
    /// Inactive products are hidden from every listing. The CMS creates
    /// products active, so a missing or `null` flag means active.
    #[serde(default = "default_active", deserialize_with = "null_as_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// One additional product image.
///
/// The CMS has written both a bare path and a `{ "src": ... }` object over
/// time; both are accepted and written back in the shape they were read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductImage {
    Path(String),
    Object {
        #[serde(default)]
        src: Option<String>,
    },
}

impl ProductImage {
    /// The image path, if non-empty.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        match self {
            ProductImage::Path(path) => Some(path.as_str()),
            ProductImage::Object { src } => src.as_deref(),
        }
        .filter(|s| !s.is_empty())
    }
}

impl Product {
    #[must_use]
    pub fn category_slug(&self) -> Option<&str> {
        slug_from_reference(Some(&self.category))
    }

    #[must_use]
    pub fn subcategory_slug(&self) -> Option<&str> {
        slug_from_reference(self.subcategory.as_deref())
    }

    /// True when `slug` is either the product's category or its subcategory.
    #[must_use]
    pub fn is_tagged_with(&self, slug: &str) -> bool {
        self.category_slug() == Some(slug) || self.subcategory_slug() == Some(slug)
    }

    /// Main image followed by the additional images, empty entries dropped.
    #[must_use]
    pub fn gallery(&self) -> Vec<&str> {
        std::iter::once(self.main_image.as_str())
            .filter(|s| !s.is_empty())
            .chain(self.images.iter().filter_map(ProductImage::src))
            .collect()
    }

    /// Image for listing cards, falling back to a placeholder.
    #[must_use]
    pub fn cover_image(&self) -> &str {
        if self.main_image.is_empty() {
            CARD_PLACEHOLDER
        } else {
            &self.main_image
        }
    }

    /// Case-insensitive substring match on the name only.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn name_matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    /// Case-insensitive substring match on the name or description.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn text_matches(&self, needle: &str) -> bool {
        self.name_matches(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Product {
        serde_json::from_str(json).expect("valid product json")
    }

    #[test]
    fn missing_active_flag_defaults_to_active() {
        let product = parse(r#"{"name":"Lamp","slug":"lamp","category":"lighting","mainImage":"/a.jpg"}"#);
        assert!(product.active);
    }

    #[test]
    fn explicit_inactive_flag_is_kept() {
        let product = parse(
            r#"{"name":"Lamp","slug":"lamp","category":"lighting","mainImage":"/a.jpg","active":false}"#,
        );
        assert!(!product.active);
    }

    #[test]
    fn images_accept_both_cms_shapes() {
        let product = parse(
            r#"{
                "name": "Gift Box",
                "slug": "gift-box",
                "category": "content/categories/gifts.json",
                "mainImage": "/uploads/box.jpg",
                "images": ["/uploads/box-2.jpg", {"src": "/uploads/box-3.jpg"}, {"src": ""}, {}]
            }"#,
        );
        assert_eq!(
            product.gallery(),
            vec!["/uploads/box.jpg", "/uploads/box-2.jpg", "/uploads/box-3.jpg"]
        );
    }

    #[test]
    fn gallery_skips_empty_main_image() {
        let product = parse(
            r#"{"name":"X","slug":"x","category":"c","mainImage":"","images":["/only.jpg"]}"#,
        );
        assert_eq!(product.gallery(), vec!["/only.jpg"]);
        assert_eq!(product.cover_image(), CARD_PLACEHOLDER);
    }

    #[test]
    fn null_fields_read_as_missing() {
        let product = parse(
            r#"{"name":"Bare","slug":"bare","category":"c","mainImage":null,
                "images":null,"active":null,"subcategory":null}"#,
        );
        assert!(product.active);
        assert!(product.images.is_empty());
        assert_eq!(product.main_image, "");
        assert_eq!(product.subcategory_slug(), None);
        assert_eq!(product.cover_image(), CARD_PLACEHOLDER);
    }

    #[test]
    fn only_explicit_false_deactivates() {
        let product = parse(r#"{"name":"Off","slug":"off","category":"c","active":false}"#);
        assert!(!product.active);
    }

    #[test]
    fn category_and_subcategory_references_resolve() {
        let product = parse(
            r#"{
                "name": "Canvas",
                "slug": "canvas",
                "category": "content/categories/home-decor.json",
                "subcategory": "content/subcategories/wall-art.json",
                "mainImage": "/c.jpg"
            }"#,
        );
        assert_eq!(product.category_slug(), Some("home-decor"));
        assert_eq!(product.subcategory_slug(), Some("wall-art"));
        assert!(product.is_tagged_with("home-decor"));
        assert!(product.is_tagged_with("wall-art"));
        assert!(!product.is_tagged_with("apparel"));
    }

    #[test]
    fn text_match_is_case_insensitive_over_name_and_description() {
        let product = parse(
            r#"{"name":"Brass Diya","slug":"brass-diya","category":"c","mainImage":"/d.jpg",
                "description":"Hand-polished for Diwali"}"#,
        );
        assert!(product.name_matches("diya"));
        assert!(product.text_matches("diwali"));
        assert!(!product.name_matches("diwali"));
        assert!(!product.text_matches("candle"));
    }

    #[test]
    fn serialization_uses_cms_field_names() {
        let product = parse(r#"{"name":"Lamp","slug":"lamp","category":"c","mainImage":"/a.jpg"}"#);
        let json = serde_json::to_value(&product).expect("serialize");
        assert_eq!(json["mainImage"], "/a.jpg");
        assert!(json.get("subcategory").is_none());
    }
}
