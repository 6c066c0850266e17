use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// A display-only testimonial: a photo of a custom order and its caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfilledOrder {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}
