//! Enquiry deep links.
//!
//! The storefront takes no orders; every "buy" action opens a WhatsApp chat
//! with a prefilled message instead.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::app_config::AppConfig;
use crate::products::Product;

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build a `wa.me` link that opens a chat with `phone` and `text` prefilled.
#[must_use]
pub fn whatsapp_link(phone: &str, text: &str) -> String {
    let encoded = utf8_percent_encode(text, URI_COMPONENT);
    format!("https://wa.me/{phone}?text={encoded}")
}

#[must_use]
pub fn product_enquiry_text(product_name: &str, product_url: &str) -> String {
    format!("Hi! I'm interested in: {product_name}. Link: {product_url}")
}

#[must_use]
pub fn general_enquiry_text() -> &'static str {
    "Hi! I'd like to make an enquiry about your products."
}

/// Join the public site URL and an absolute path.
#[must_use]
pub fn absolute_url(base_url: &str, path: &str) -> String {
    format!("{base_url}{path}")
}

/// Public path of a product's detail page.
#[must_use]
pub fn product_path(slug: &str) -> String {
    format!("/products/{slug}")
}

/// Enquiry link builder bound to the configured contact number and site URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquiryLinks {
    whatsapp_number: String,
    site_url: String,
}

impl EnquiryLinks {
    #[must_use]
    pub fn new(whatsapp_number: impl Into<String>, site_url: impl Into<String>) -> Self {
        Self {
            whatsapp_number: whatsapp_number.into(),
            site_url: site_url.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.whatsapp_number.clone(), config.site_url.clone())
    }

    #[must_use]
    pub fn general(&self) -> String {
        whatsapp_link(&self.whatsapp_number, general_enquiry_text())
    }

    #[must_use]
    pub fn product_url(&self, product: &Product) -> String {
        absolute_url(&self.site_url, &product_path(&product.slug))
    }

    #[must_use]
    pub fn product(&self, product: &Product) -> String {
        let text = product_enquiry_text(&product.name, &self.product_url(product));
        whatsapp_link(&self.whatsapp_number, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, slug: &str) -> Product {
        Product {
            name: name.to_string(),
            slug: slug.to_string(),
            category: "content/categories/gifts.json".to_string(),
            subcategory: None,
            description: None,
            main_image: "/uploads/x.jpg".to_string(),
            images: vec![],
            active: true,
        }
    }

    #[test]
    fn whatsapp_link_encodes_like_encode_uri_component() {
        let link = whatsapp_link("919876543210", "Hi! I'd like (2) items & more?");
        assert_eq!(
            link,
            "https://wa.me/919876543210?text=Hi!%20I'd%20like%20(2)%20items%20%26%20more%3F"
        );
    }

    #[test]
    fn whatsapp_link_encodes_utf8() {
        let link = whatsapp_link("1", "₹500");
        assert_eq!(link, "https://wa.me/1?text=%E2%82%B9500");
    }

    #[test]
    fn empty_number_still_builds_a_link() {
        let link = whatsapp_link("", "hello");
        assert_eq!(link, "https://wa.me/?text=hello");
    }

    #[test]
    fn product_enquiry_text_includes_name_and_url() {
        assert_eq!(
            product_enquiry_text("Brass Diya", "https://shop.example/products/brass-diya"),
            "Hi! I'm interested in: Brass Diya. Link: https://shop.example/products/brass-diya"
        );
    }

    #[test]
    fn enquiry_links_build_product_link_from_site_url() {
        let links = EnquiryLinks::new("4412345", "https://shop.example");
        let item = product("Gift Box", "gift-box");
        assert_eq!(
            links.product_url(&item),
            "https://shop.example/products/gift-box"
        );
        assert_eq!(
            links.product(&item),
            "https://wa.me/4412345?text=Hi!%20I'm%20interested%20in%3A%20Gift%20Box.%20Link%3A%20https%3A%2F%2Fshop.example%2Fproducts%2Fgift-box"
        );
    }

    #[test]
    fn general_link_uses_general_text() {
        let links = EnquiryLinks::new("4412345", "https://shop.example");
        assert_eq!(
            links.general(),
            "https://wa.me/4412345?text=Hi!%20I'd%20like%20to%20make%20an%20enquiry%20about%20your%20products."
        );
    }
}
