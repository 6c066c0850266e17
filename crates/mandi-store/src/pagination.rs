use serde::Serialize;

/// Products per page on the home grid.
pub const HOME_PAGE_SIZE: usize = 30;
/// Products per batch on the all-products listing.
pub const LISTING_PAGE_SIZE: usize = 20;

/// One page of a listing. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    /// Never less than 1, so an empty listing still has a first page.
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Slice `items` into the requested page.
    ///
    /// `page` is clamped into `1..=total_pages` and `per_page` to at least 1.
    #[must_use]
    pub fn paginate(items: Vec<T>, page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total = items.len();
        let total_pages = total.div_ceil(per_page).max(1);
        let page = page.clamp(1, total_pages);

        let items = items
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();

        Self {
            items,
            page,
            per_page,
            total,
            total_pages,
        }
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}
