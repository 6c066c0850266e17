use axum::{extract::State, Extension, Json};
use mandi_core::{Category, FulfilledOrder};
use mandi_store::{pagination::HOME_PAGE_SIZE, Page};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{
    normalize_page, products::ProductCard, read_content, ApiError, ApiQuery, ApiResponse,
    AppState, ResponseMeta,
};

#[derive(Debug, Serialize)]
pub(super) struct HomeData {
    categories: Vec<Category>,
    selected_category: Option<String>,
    products: Page<ProductCard>,
    fulfilled_orders: Vec<FulfilledOrder>,
    enquiry_link: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct HomeQuery {
    pub page: Option<usize>,
    pub category: Option<String>,
}

/// Home grid: category chips, one page of products, testimonials.
///
/// The chip filter compares the product's resolved category slug, so
/// products whose category is stored as a full reference path match too.
pub(super) async fn home(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    ApiQuery(query): ApiQuery<HomeQuery>,
) -> Result<Json<ApiResponse<HomeData>>, ApiError> {
    let page = normalize_page(query.page);
    let selected_category = query.category.filter(|c| !c.trim().is_empty());
    let filter = selected_category.clone();

    let (categories, products, fulfilled_orders) = read_content(&state, &req_id, move |store| {
        let cards: Vec<ProductCard> = store
            .products()
            .iter()
            .filter(|p| {
                filter
                    .as_deref()
                    .is_none_or(|slug| p.category_slug() == Some(slug))
            })
            .map(ProductCard::from)
            .collect();
        (
            store.categories(),
            Page::paginate(cards, page, HOME_PAGE_SIZE),
            store.fulfilled_orders(),
        )
    })
    .await?;

    let data = HomeData {
        categories,
        selected_category,
        products,
        fulfilled_orders,
        enquiry_link: state.links.general(),
    };

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
