use axum::{
    extract::{Path, State},
    Extension, Json,
};
use mandi_core::{Category, CategoryWithSubs, Subcategory};
use mandi_store::CategoryKind;
use serde::Serialize;

use crate::middleware::RequestId;

use super::{products::ProductCard, read_content, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct CategoryPageItem {
    kind: CategoryKind,
    title: String,
    slug: String,
    parent_category: Option<Category>,
    subcategories: Vec<Subcategory>,
    products: Vec<ProductCard>,
    category_tree: Vec<CategoryWithSubs>,
}

pub(super) async fn list_categories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<CategoryWithSubs>>>, ApiError> {
    let data = read_content(&state, &req_id, |store| store.category_tree()).await?;

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_category(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<CategoryPageItem>>, ApiError> {
    let lookup = slug.clone();
    let page = read_content(&state, &req_id, move |store| store.category_page(&lookup))
        .await?
        .ok_or_else(|| ApiError::not_found(req_id.0.clone(), "category", &slug))?;

    let data = CategoryPageItem {
        kind: page.kind,
        title: page.title,
        slug: page.slug,
        parent_category: page.parent_category,
        subcategories: page.subcategories,
        products: page.products.iter().map(ProductCard::from).collect(),
        category_tree: page.category_tree,
    };

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
