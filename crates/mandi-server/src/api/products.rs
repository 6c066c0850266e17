use axum::{
    extract::{Path, State},
    Extension, Json,
};
use mandi_core::Product;
use mandi_store::{CatalogFilter, Page};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{
    normalize_page, normalize_per_page, read_content, ApiError, ApiQuery, ApiResponse,
    AppState, ResponseMeta,
};

/// Listing card for a product.
#[derive(Debug, Serialize)]
pub(super) struct ProductCard {
    name: String,
    slug: String,
    image: String,
    category: Option<String>,
    subcategory: Option<String>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            slug: product.slug.clone(),
            image: product.cover_image().to_string(),
            category: product.category_slug().map(str::to_string),
            subcategory: product.subcategory_slug().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct ProductDetail {
    product: Product,
    gallery: Vec<String>,
    category_path: String,
    product_url: String,
    enquiry_link: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProductQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    ApiQuery(query): ApiQuery<ProductQuery>,
) -> Result<Json<ApiResponse<Page<ProductCard>>>, ApiError> {
    let page = normalize_page(query.page);
    let per_page = normalize_per_page(query.per_page);
    let filter = CatalogFilter {
        query: query.q,
        category: query.category,
    };

    let data = read_content(&state, &req_id, move |store| {
        let products = store.products();
        let tree = store.category_tree();
        let matched: Vec<ProductCard> = filter
            .apply(&products, &tree)
            .into_iter()
            .map(ProductCard::from)
            .collect();
        Page::paginate(matched, page, per_page)
    })
    .await?;

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<ProductDetail>>, ApiError> {
    let lookup = slug.clone();
    let found = read_content(&state, &req_id, move |store| {
        store.product_by_slug(&lookup).map(|product| {
            let path =
                store.category_path(product.category_slug(), product.subcategory_slug());
            (product, path)
        })
    })
    .await?;

    let (product, category_path) = found
        .filter(|(product, _)| product.active || state.serve_inactive_by_slug)
        .ok_or_else(|| ApiError::not_found(req_id.0.clone(), "product", &slug))?;

    let data = ProductDetail {
        gallery: product.gallery().into_iter().map(str::to_string).collect(),
        category_path,
        product_url: state.links.product_url(&product),
        enquiry_link: state.links.product(&product),
        product,
    };

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
