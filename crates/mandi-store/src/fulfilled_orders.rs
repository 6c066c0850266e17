use mandi_core::FulfilledOrder;

use crate::reader::{or_warn, read_collection};
use crate::{Collection, ContentError, ContentStore};

impl ContentStore {
    /// Testimonials in file-name order.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the directory or any file cannot be read.
    pub fn try_fulfilled_orders(&self) -> Result<Vec<FulfilledOrder>, ContentError> {
        read_collection(&self.collection_dir(Collection::FulfilledOrders))
    }

    #[must_use]
    pub fn fulfilled_orders(&self) -> Vec<FulfilledOrder> {
        or_warn(Collection::FulfilledOrders, self.try_fulfilled_orders())
    }
}
